//! Environment command handlers

use anyhow::Result;
use clap::Subcommand;
use colored::*;
use gocd_client::GoCdApi;
use gocd_core::domain::environment::EnvironmentConfig;

use crate::display::join_or_dash;

/// Environment subcommands
#[derive(Subcommand)]
pub enum EnvironmentCommands {
    /// List all environments
    List,
    /// Show an environment with its variables
    Show {
        /// Environment name
        name: String,
    },
}

/// Handle environment commands
pub async fn handle_environment_command(
    command: EnvironmentCommands,
    client: &dyn GoCdApi,
) -> Result<()> {
    match command {
        EnvironmentCommands::List => {
            let environments = client.list_environment_configs().await?;
            if environments.is_empty() {
                println!("{}", "No environments configured.".yellow());
            }
            for environment in &environments {
                print_environment(environment);
            }
            Ok(())
        }
        EnvironmentCommands::Show { name } => {
            let environment = client.get_environment_config(&name).await?;
            print_environment(&environment);
            for variable in &environment.environment_variables {
                let value = if variable.secure {
                    "********".dimmed().to_string()
                } else {
                    variable.value.clone().unwrap_or_default()
                };
                println!("    {} = {}", variable.name, value);
            }
            Ok(())
        }
    }
}

fn print_environment(environment: &EnvironmentConfig) {
    println!("  {} {}", "▸".cyan(), environment.name.bold());
    println!("    Pipelines:    {}", join_or_dash(&environment.pipelines));
    println!("    Agents:       {}", join_or_dash(&environment.agents));
    println!();
}
