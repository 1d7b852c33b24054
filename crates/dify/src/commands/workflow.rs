//! Workflow command - run a workflow app.

use std::io::Write;

use anyhow::Result;
use clap::Args;
use console::Style;
use dify_client::{WorkflowRunRequest, WorkflowStreamEvent};

use super::{Context, consume, parse_inputs};

/// Arguments for the workflow command.
#[derive(Args, Debug)]
pub struct WorkflowArgs {
    /// Workflow input as name=value (repeatable)
    #[arg(short, long = "input", value_name = "NAME=VALUE")]
    pub inputs: Vec<String>,

    /// End-user identifier
    #[arg(short, long)]
    pub user: Option<String>,

    /// Wait for the run to finish instead of streaming
    #[arg(long)]
    pub blocking: bool,
}

/// Run the workflow command.
pub async fn run(args: WorkflowArgs, ctx: &Context) -> Result<()> {
    let client = ctx.client()?;
    let dim = Style::new().dim();

    let mut request = WorkflowRunRequest::new(ctx.user(args.user));
    request.inputs = parse_inputs(&args.inputs)?;

    if args.blocking {
        let response = client.workflows().run(request).await?;
        if ctx.json_output {
            println!("{}", serde_json::to_string_pretty(&response)?);
        } else {
            println!("status: {}", response.data.status);
            if let Some(outputs) = &response.data.outputs {
                println!("{}", serde_json::to_string_pretty(outputs)?);
            }
            if let Some(error) = &response.data.error {
                eprintln!("error: {}", error);
            }
        }
        return Ok(());
    }

    let stream = client.workflows().stream(request)?;
    let mut has_output = false;
    consume(stream, |event| {
        if ctx.json_output {
            println!("{}", serde_json::to_string(&event)?);
            return Ok(());
        }
        match event {
            WorkflowStreamEvent::TextChunk { data, .. } => {
                print!("{}", data.text);
                std::io::stdout().flush()?;
                has_output = true;
            }
            WorkflowStreamEvent::NodeStarted { data, .. } if ctx.verbose => {
                eprintln!("{}", dim.apply_to(format!("[node: {}]", data.title)));
            }
            WorkflowStreamEvent::NodeFinished { data, .. } if ctx.verbose => {
                eprintln!(
                    "{}",
                    dim.apply_to(format!("[{}: {}]", data.title, data.status))
                );
            }
            WorkflowStreamEvent::WorkflowFinished { data, .. } => {
                if has_output {
                    println!();
                    has_output = false;
                }
                if let Some(outputs) = &data.outputs {
                    println!("{}", serde_json::to_string_pretty(outputs)?);
                }
                eprintln!("{}", dim.apply_to(format!("[{}]", data.status)));
            }
            WorkflowStreamEvent::Error { code, message, .. } => {
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
