//! Server health command handler

use anyhow::Result;
use colored::*;
use gocd_client::GoCdApi;

/// Print current server health messages
pub async fn show_health(client: &dyn GoCdApi) -> Result<()> {
    let messages = client.get_server_health_messages().await?;

    if messages.is_empty() {
        println!("{}", "Server is healthy.".green());
        return Ok(());
    }

    for message in &messages {
        let level = if message.is_error() {
            message.level.red()
        } else if message.is_warning() {
            message.level.yellow()
        } else {
            message.level.normal()
        };
        println!("  {} [{}] {}", "▸".cyan(), level, message.message.bold());
        if !message.detail.is_empty() {
            println!("    {}", message.detail);
        }
        if !message.time.is_empty() {
            println!("    {}", message.time.dimmed());
        }
    }

    Ok(())
}
