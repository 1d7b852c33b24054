//! Complete command - generate text with a completion app.

use std::io::Write;

use anyhow::Result;
use clap::Args;
use dify_client::{ChatStreamEvent, CompletionRequest};

use super::{Context, consume, parse_inputs};

/// Arguments for the complete command.
#[derive(Args, Debug)]
pub struct CompleteArgs {
    /// Prompt, sent as the `query` input
    #[arg(required = true)]
    pub query: String,

    /// End-user identifier
    #[arg(short, long)]
    pub user: Option<String>,

    /// Additional input variable as name=value (repeatable)
    #[arg(short, long = "input", value_name = "NAME=VALUE")]
    pub inputs: Vec<String>,

    /// Wait for the full answer instead of streaming
    #[arg(long)]
    pub blocking: bool,
}

/// Run the complete command.
pub async fn run(args: CompleteArgs, ctx: &Context) -> Result<()> {
    let client = ctx.client()?;

    let mut request = CompletionRequest::new(args.query, ctx.user(args.user));
    request.inputs.extend(parse_inputs(&args.inputs)?);

    if args.blocking {
        let response = client.completion().send(request).await?;
        if ctx.json_output {
            println!("{}", serde_json::to_string_pretty(&response)?);
        } else {
            println!("{}", response.answer);
        }
        return Ok(());
    }

    let stream = client.completion().stream(request)?;
    let mut has_output = false;
    consume(stream, |event| {
        if ctx.json_output {
            println!("{}", serde_json::to_string(&event)?);
            return Ok(());
        }
        match event {
            ChatStreamEvent::Message { answer, .. } => {
                print!("{}", answer);
                std::io::stdout().flush()?;
                has_output = true;
            }
            ChatStreamEvent::Error { code, message, .. } => {
                anyhow::bail!("{}: {}", code, message);
            }
            _ => {}
        }
        Ok(())
    })
    .await?;

    if has_output {
        println!();
    }
    Ok(())
}
