//! Job command handlers
//!
//! Handles the scheduled job queue and per-job history.

use anyhow::Result;
use clap::Subcommand;
use colored::*;
use gocd_client::GoCdApi;
use gocd_core::domain::job::ScheduledJob;

use crate::display::{join_or_dash, print_job_history};

/// Job subcommands
#[derive(Subcommand)]
pub enum JobCommands {
    /// List jobs waiting for an agent
    Scheduled,
    /// List past runs of a job
    History {
        /// Pipeline name
        pipeline: String,
        /// Stage name
        stage: String,
        /// Job name
        job: String,

        /// Number of runs to skip
        #[arg(long, default_value_t = 0)]
        offset: u64,
    },
}

/// Handle job commands
///
/// # Arguments
/// * `command` - The job command to execute
/// * `client` - Client for the configured server
pub async fn handle_job_command(command: JobCommands, client: &dyn GoCdApi) -> Result<()> {
    match command {
        JobCommands::Scheduled => list_scheduled_jobs(client).await,
        JobCommands::History {
            pipeline,
            stage,
            job,
            offset,
        } => {
            let jobs = client.get_job_history(&pipeline, &stage, &job, offset).await?;
            if jobs.is_empty() {
                println!("{}", "No runs found.".yellow());
            }
            for job in &jobs {
                print_job_history(job);
            }
            Ok(())
        }
    }
}

/// List scheduled jobs
async fn list_scheduled_jobs(client: &dyn GoCdApi) -> Result<()> {
    let jobs = client.list_scheduled_jobs().await?;

    if jobs.is_empty() {
        println!("{}", "No jobs scheduled.".yellow());
    } else {
        println!("{}", format!("Found {} scheduled job(s):", jobs.len()).bold());
        println!();
        for job in jobs {
            print_scheduled_job(&job);
        }
    }

    Ok(())
}

fn print_scheduled_job(job: &ScheduledJob) {
    println!("  {} {} {}", "▸".cyan(), job.name.bold(), format!("#{}", job.job_id).dimmed());
    println!("    Locator:      {}", job.build_locator);
    if let Some(environment) = &job.environment {
        println!("    Environment:  {}", environment);
    }
    println!("    Resources:    {}", join_or_dash(job.resources()));
    println!("    URL:          {}", job.job_url().dimmed());
    println!();
}
