//! Stop command - stop a running generation task.

use anyhow::Result;
use clap::{Args, ValueEnum};

use super::Context;

/// Which API the task belongs to.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum TaskKind {
    Chat,
    Completion,
    Workflow,
}

/// Arguments for the stop command.
#[derive(Args, Debug)]
pub struct StopArgs {
    /// Task id, from a stream event
    #[arg(required = true)]
    pub task_id: String,

    /// App type the task runs in
    #[arg(short, long, value_enum, default_value = "chat")]
    pub kind: TaskKind,

    /// End-user identifier that started the task
    #[arg(short, long)]
    pub user: Option<String>,
}

/// Run the stop command.
pub async fn run(args: StopArgs, ctx: &Context) -> Result<()> {
    let client = ctx.client()?;
    let user = ctx.user(args.user);

    let response = match args.kind {
        TaskKind::Chat => client.chat().stop(&args.task_id, user).await?,
        TaskKind::Completion => client.completion().stop(&args.task_id, user).await?,
        TaskKind::Workflow => client.workflows().stop(&args.task_id, user).await?,
    };

    if ctx.json_output {
        println!("{}", serde_json::to_string(&response)?);
    } else {
        println!("Stopped task {} ({})", args.task_id, response.result);
    }
    Ok(())
}
