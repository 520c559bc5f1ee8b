//! Agent command handlers
//!
//! Handles listing, inspecting, enabling, disabling and deleting agents.

use anyhow::Result;
use clap::Subcommand;
use colored::*;
use gocd_client::{Faults, GoCdApi};
use gocd_core::domain::agent::Agent;

use crate::display::{colorize_result, join_or_dash, print_job_history, print_next_page};

/// Agent subcommands
#[derive(Subcommand)]
pub enum AgentCommands {
    /// List all agents
    List,
    /// Show agent details
    Show {
        /// Agent UUID
        uuid: String,
    },
    /// Enable one or more agents
    Enable {
        /// Agent UUIDs
        #[arg(required = true)]
        uuids: Vec<String>,
    },
    /// Disable one or more agents
    Disable {
        /// Agent UUIDs
        #[arg(required = true)]
        uuids: Vec<String>,
    },
    /// Delete one or more disabled agents
    Delete {
        /// Agent UUIDs
        #[arg(required = true)]
        uuids: Vec<String>,
    },
    /// Show jobs that ran on an agent
    History {
        /// Agent UUID
        uuid: String,

        /// Number of jobs to skip
        #[arg(long, default_value_t = 0)]
        offset: u64,

        /// Jobs per page (paged API only)
        #[arg(long)]
        page_size: Option<u32>,
    },
}

#[derive(Debug, Clone, Copy)]
enum BulkAction {
    Enable,
    Disable,
    Delete,
}

impl BulkAction {
    fn past_tense(self) -> &'static str {
        match self {
            BulkAction::Enable => "Enabled",
            BulkAction::Disable => "Disabled",
            BulkAction::Delete => "Deleted",
        }
    }
}

/// Handle agent commands
///
/// # Arguments
/// * `command` - The agent command to execute
/// * `client` - Client for the configured server
pub async fn handle_agent_command(command: AgentCommands, client: &dyn GoCdApi) -> Result<()> {
    match command {
        AgentCommands::List => list_agents(client).await,
        AgentCommands::Show { uuid } => show_agent(client, &uuid).await,
        AgentCommands::Enable { uuids } => apply(client, BulkAction::Enable, &uuids).await,
        AgentCommands::Disable { uuids } => apply(client, BulkAction::Disable, &uuids).await,
        AgentCommands::Delete { uuids } => apply(client, BulkAction::Delete, &uuids).await,
        AgentCommands::History {
            uuid,
            offset,
            page_size,
        } => show_history(client, &uuid, offset, page_size).await,
    }
}

/// List all agents
async fn list_agents(client: &dyn GoCdApi) -> Result<()> {
    let agents = client.list_agents().await?;

    if agents.is_empty() {
        println!("{}", "No agents registered.".yellow());
    } else {
        println!("{}", format!("Found {} agent(s):", agents.len()).bold());
        println!();
        for agent in agents {
            print_agent_summary(&agent);
        }
    }

    Ok(())
}

/// Show a single agent
async fn show_agent(client: &dyn GoCdApi, uuid: &str) -> Result<()> {
    let agent = client.get_agent(uuid).await?;

    print_agent_summary(&agent);
    println!("    Sandbox:      {}", agent.sandbox.dimmed());
    println!("    OS:           {}", agent.operating_system);
    println!("    Free Space:   {}", agent.free_space);
    if let Some(details) = &agent.build_details {
        println!(
            "    Building:     {}/{}/{}",
            details.pipeline_name, details.stage_name, details.job_name
        );
    }

    Ok(())
}

/// Apply an action to every UUID, reporting all failures together
async fn apply(client: &dyn GoCdApi, action: BulkAction, uuids: &[String]) -> Result<()> {
    let mut faults = Faults::new();

    for uuid in uuids {
        let result = match action {
            BulkAction::Enable => client.enable_agent(uuid).await,
            BulkAction::Disable => client.disable_agent(uuid).await,
            BulkAction::Delete => client.delete_agent(uuid).await,
        };
        match result {
            Ok(()) => println!("{} {} agent {}", "✓".green(), action.past_tense(), uuid.bold()),
            Err(e) => {
                eprintln!("{} {}: {}", "✗".red(), uuid.bold(), e);
                faults.push(e);
            }
        }
    }

    faults.into_result(())?;
    Ok(())
}

/// Show the job history of an agent
async fn show_history(
    client: &dyn GoCdApi,
    uuid: &str,
    offset: u64,
    page_size: Option<u32>,
) -> Result<()> {
    let history = client.agent_job_history(uuid, offset, page_size).await?;

    if history.jobs.is_empty() {
        println!("{}", "No jobs found.".yellow());
        return Ok(());
    }

    let (first, last) = page_range(offset, history.jobs.len());
    println!(
        "{}",
        format!("Jobs {first}-{last} of {}:", history.pagination.total).bold()
    );
    println!();
    for job in &history.jobs {
        print_job_history(job);
    }
    print_next_page(history.pagination.next_offset());

    Ok(())
}

/// One-based positions of the first and last entry on a page
fn page_range(offset: u64, count: usize) -> (u64, u64) {
    let count = u64::try_from(count).unwrap_or(u64::MAX);
    (offset.saturating_add(1), offset.saturating_add(count))
}

fn print_agent_summary(agent: &Agent) {
    let config_state = agent
        .agent_config_state
        .map(|state| state.to_string())
        .unwrap_or_default();

    println!("  {} {} {}", "▸".cyan(), agent.hostname.bold(), agent.uuid.dimmed());
    println!("    Config:       {}", colorize_result(&config_state));
    println!("    State:        {}", colorize_result(&agent.agent_state));
    println!("    IP:           {}", agent.ip_address);
    println!("    Resources:    {}", join_or_dash(&agent.resources));
    println!("    Environments: {}", join_or_dash(&agent.environments));
    println!();
}
