//! Pipeline command handlers
//!
//! Handles pipeline group listing, run inspection and pause/unlock control.

use anyhow::Result;
use clap::Subcommand;
use colored::*;
use gocd_client::GoCdApi;
use gocd_core::domain::pipeline::{PipelineGroup, PipelineInstance};

use crate::display::{colorize_result, format_millis, print_next_page};

/// Pipeline subcommands
#[derive(Subcommand)]
pub enum PipelineCommands {
    /// List pipeline groups and their pipelines
    Groups,
    /// Show whether a pipeline is paused, locked or schedulable
    Status {
        /// Pipeline name
        name: String,
    },
    /// Show a single pipeline run
    Instance {
        /// Pipeline name
        name: String,
        /// Run counter
        counter: u64,
    },
    /// List past runs of a pipeline
    History {
        /// Pipeline name
        name: String,

        /// Number of runs to skip
        #[arg(long, default_value_t = 0)]
        offset: u64,
    },
    /// Pause a pipeline
    Pause {
        /// Pipeline name
        name: String,

        /// Reason recorded with the pause
        #[arg(short, long, default_value = "")]
        cause: String,
    },
    /// Unpause a pipeline
    Unpause {
        /// Pipeline name
        name: String,
    },
    /// Release a pipeline lock
    Unlock {
        /// Pipeline name
        name: String,
    },
    /// Print the pipeline configuration as JSON
    Config {
        /// Pipeline name
        name: String,
    },
}

/// Handle pipeline commands
///
/// # Arguments
/// * `command` - The pipeline command to execute
/// * `client` - Client for the configured server
pub async fn handle_pipeline_command(
    command: PipelineCommands,
    client: &dyn GoCdApi,
) -> Result<()> {
    match command {
        PipelineCommands::Groups => list_groups(client).await,
        PipelineCommands::Status { name } => show_status(client, &name).await,
        PipelineCommands::Instance { name, counter } => {
            let instance = client.get_pipeline_instance(&name, counter).await?;
            print_instance(&instance);
            Ok(())
        }
        PipelineCommands::History { name, offset } => show_history(client, &name, offset).await,
        PipelineCommands::Pause { name, cause } => {
            let reply = client.pause_pipeline(&name, &cause).await?;
            println!("{} {}", "✓".green(), reply.message);
            Ok(())
        }
        PipelineCommands::Unpause { name } => {
            let reply = client.unpause_pipeline(&name).await?;
            println!("{} {}", "✓".green(), reply.message);
            Ok(())
        }
        PipelineCommands::Unlock { name } => {
            let reply = client.unlock_pipeline(&name).await?;
            println!("{} {}", "✓".green(), reply.message);
            Ok(())
        }
        PipelineCommands::Config { name } => show_config(client, &name).await,
    }
}

/// List all pipeline groups
async fn list_groups(client: &dyn GoCdApi) -> Result<()> {
    let groups = client.list_pipeline_groups().await?;

    if groups.is_empty() {
        println!("{}", "No pipeline groups found.".yellow());
    } else {
        for group in &groups {
            print_group(group);
        }
    }

    Ok(())
}

fn print_group(group: &PipelineGroup) {
    println!("{}", group.name.bold());
    for pipeline in &group.pipelines {
        println!("  {} {}", "▸".cyan(), pipeline.name);
        if !pipeline.stages.is_empty() {
            println!("    Stages:       {}", pipeline.stages.join(" → ").dimmed());
        }
    }
    println!();
}

/// Show pipeline status flags
async fn show_status(client: &dyn GoCdApi, name: &str) -> Result<()> {
    let status = client.get_pipeline_status(name).await?;

    println!("{}", name.bold());
    if status.paused {
        println!("    Paused:       {}", "yes".yellow());
        if !status.paused_by.is_empty() {
            println!("    Paused By:    {}", status.paused_by);
        }
        if !status.paused_cause.is_empty() {
            println!("    Cause:        {}", status.paused_cause);
        }
    } else {
        println!("    Paused:       {}", "no".green());
    }
    println!(
        "    Locked:       {}",
        if status.locked { "yes".red() } else { "no".green() }
    );
    println!(
        "    Schedulable:  {}",
        if status.schedulable { "yes".green() } else { "no".yellow() }
    );

    Ok(())
}

/// List past runs of a pipeline
async fn show_history(client: &dyn GoCdApi, name: &str, offset: u64) -> Result<()> {
    let page = client.get_pipeline_history_page(name, offset).await?;

    if page.pipelines.is_empty() {
        println!("{}", "No runs found.".yellow());
        return Ok(());
    }

    for instance in &page.pipelines {
        print_instance(instance);
    }
    print_next_page(page.pagination.next_offset());

    Ok(())
}

/// Print the configuration as pretty JSON, with the ETag as a header line
async fn show_config(client: &dyn GoCdApi, name: &str) -> Result<()> {
    let response = client.get_pipeline_config(name).await?;

    if let Some(etag) = &response.etag {
        eprintln!("{}", format!("ETag: {etag}").dimmed());
    }
    println!("{}", serde_json::to_string_pretty(&response.config)?);

    Ok(())
}

fn print_instance(instance: &PipelineInstance) {
    println!(
        "  {} {} #{} {}",
        "▸".cyan(),
        instance.name.bold(),
        instance.counter,
        format!("(label {})", instance.label).dimmed()
    );
    if !instance.build_cause.trigger_message.is_empty() {
        println!("    Trigger:      {}", instance.build_cause.trigger_message);
    }
    for stage in &instance.stages {
        println!(
            "    {} {} [{}]",
            "-".dimmed(),
            stage.name,
            colorize_result(&stage.result)
        );
        for job in &stage.jobs {
            println!(
                "        {} {} {}",
                job.name,
                colorize_result(&job.result),
                format_millis(job.scheduled_date).dimmed()
            );
        }
    }
    println!();
}
