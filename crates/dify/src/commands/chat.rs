//! Chat command - send a message to a chat app.

use std::io::Write;

use anyhow::Result;
use clap::Args;
use console::Style;
use dify_client::{ChatMessageRequest, ChatStreamEvent, StreamOutcome};

use super::{Context, consume, parse_inputs};

/// Arguments for the chat command.
#[derive(Args, Debug)]
pub struct ChatArgs {
    /// The message to send
    #[arg(required = true)]
    pub query: String,

    /// Continue an existing conversation
    #[arg(short, long)]
    pub conversation: Option<String>,

    /// End-user identifier
    #[arg(short, long)]
    pub user: Option<String>,

    /// App input variable as name=value (repeatable)
    #[arg(short, long = "input", value_name = "NAME=VALUE")]
    pub inputs: Vec<String>,

    /// Wait for the full answer instead of streaming
    #[arg(long)]
    pub blocking: bool,
}

/// Run the chat command.
pub async fn run(args: ChatArgs, ctx: &Context) -> Result<()> {
    let client = ctx.client()?;
    let dim = Style::new().dim();

    let mut request = ChatMessageRequest::new(args.query, ctx.user(args.user));
    request.inputs = parse_inputs(&args.inputs)?;
    if let Some(id) = args.conversation {
        request = request.with_conversation(id);
    }

    if ctx.verbose {
        eprintln!(
            "{}",
            dim.apply_to(format!("Sending to: {}", client.base_url()))
        );
    }

    if args.blocking {
        let response = client.chat().send(request).await?;
        if ctx.json_output {
            println!("{}", serde_json::to_string_pretty(&response)?);
        } else {
            println!("{}", response.answer);
            if ctx.verbose {
                eprintln!(
                    "{}",
                    dim.apply_to(format!("[conversation: {}]", response.conversation_id))
                );
            }
        }
        return Ok(());
    }

    let stream = client.chat().stream(request)?;
    let mut has_output = false;

    let outcome = consume(stream, |event| {
        if ctx.json_output {
            println!("{}", serde_json::to_string(&event)?);
            return Ok(());
        }
        print_event(&event, ctx.verbose, &mut has_output)
    })
    .await?;

    if has_output {
        println!();
    }
    if outcome == Some(StreamOutcome::Cancelled) {
        eprintln!("{}", dim.apply_to("[cancelled]"));
    }
    Ok(())
}

fn print_event(event: &ChatStreamEvent, verbose: bool, has_output: &mut bool) -> Result<()> {
    let dim = Style::new().dim();
    match event {
        ChatStreamEvent::Message { answer, .. } | ChatStreamEvent::AgentMessage { answer, .. } => {
            print!("{}", answer);
            std::io::stdout().flush()?;
            *has_output = true;
        }
        ChatStreamEvent::MessageReplace { answer, .. } => {
            if *has_output {
                println!();
            }
            println!("{}", dim.apply_to("[answer replaced]"));
            print!("{}", answer);
            std::io::stdout().flush()?;
            *has_output = true;
        }
        ChatStreamEvent::AgentThought { tool, thought, .. } if verbose => {
            if !tool.is_empty() {
                eprintln!("{}", dim.apply_to(format!("[tool: {}]", tool)));
            }
            if !thought.is_empty() {
                eprintln!("{}", dim.apply_to(format!("[thought: {}]", thought)));
            }
        }
        ChatStreamEvent::NodeStarted { data, .. } if verbose => {
            eprintln!("{}", dim.apply_to(format!("[node: {}]", data.title)));
        }
        ChatStreamEvent::MessageEnd {
            conversation_id,
            metadata,
            ..
        } if verbose => {
            if let Some(id) = conversation_id {
                eprintln!("{}", dim.apply_to(format!("\n[conversation: {}]", id)));
            }
            if let Some(usage) = &metadata.usage {
                eprintln!(
                    "{}",
                    dim.apply_to(format!("[tokens: {}]", usage.total_tokens))
                );
            }
        }
        ChatStreamEvent::Error { code, message, .. } => {
            let red = Style::new().red();
            eprintln!();
            eprintln!("{} {} ({})", red.apply_to("Error:"), message, code);
            anyhow::bail!("{}: {}", code, message);
        }
        _ => {}
    }
    Ok(())
}
