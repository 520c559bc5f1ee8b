//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod agents;
mod environments;
mod health;
mod jobs;
mod pipelines;

pub use agents::AgentCommands;
pub use environments::EnvironmentCommands;
pub use jobs::JobCommands;
pub use pipelines::PipelineCommands;

use anyhow::Result;
use clap::Subcommand;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Agent management
    Agents {
        #[command(subcommand)]
        command: AgentCommands,
    },
    /// Pipeline inspection and control
    Pipelines {
        #[command(subcommand)]
        command: PipelineCommands,
    },
    /// Job queue and history
    Jobs {
        #[command(subcommand)]
        command: JobCommands,
    },
    /// Environment configuration
    Environments {
        #[command(subcommand)]
        command: EnvironmentCommands,
    },
    /// Show server health messages
    Health,
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    let client = config.client()?;

    match command {
        Commands::Agents { command } => agents::handle_agent_command(command, &client).await,
        Commands::Pipelines { command } => {
            pipelines::handle_pipeline_command(command, &client).await
        }
        Commands::Jobs { command } => jobs::handle_job_command(command, &client).await,
        Commands::Environments { command } => {
            environments::handle_environment_command(command, &client).await
        }
        Commands::Health => health::show_health(&client).await,
    }
}
