//! Shared output helpers

use chrono::DateTime;
use colored::*;
use gocd_core::domain::job::JobHistory;

/// Format epoch milliseconds as a UTC timestamp
pub fn format_millis(millis: i64) -> String {
    if millis <= 0 {
        return "-".to_string();
    }
    DateTime::from_timestamp_millis(millis)
        .map(|time| time.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| millis.to_string())
}

/// Colorize a build result or state for display
pub fn colorize_result(result: &str) -> ColoredString {
    match result {
        "Passed" | "Completed" | "Enabled" | "Idle" => result.green(),
        "Failed" | "Disabled" | "LostContact" | "Missing" => result.red(),
        "Cancelled" | "Pending" | "Unknown" => result.yellow(),
        "Building" | "Scheduled" | "Assigned" | "Preparing" => result.cyan(),
        "" => "-".dimmed(),
        other => other.normal(),
    }
}

/// Join a list for display, or a dimmed dash when empty
pub fn join_or_dash(items: &[String]) -> String {
    if items.is_empty() {
        "-".dimmed().to_string()
    } else {
        items.join(", ")
    }
}

/// Print a pagination footer when more pages exist
pub fn print_next_page(next_offset: Option<u64>) {
    if let Some(offset) = next_offset {
        println!("{}", format!("More results: use --offset {offset}").dimmed());
    }
}

/// Print one line of job history
pub fn print_job_history(job: &JobHistory) {
    println!(
        "  {} {}/{}/{}/{}/{}",
        "▸".cyan(),
        job.pipeline_name,
        job.pipeline_counter,
        job.stage_name,
        job.stage_counter,
        job.name.bold()
    );
    println!(
        "    Result:       {} ({})",
        colorize_result(&job.result),
        job.state
    );
    println!("    Scheduled:    {}", format_millis(job.scheduled_date).dimmed());
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_millis() {
        assert_eq!(format_millis(1435631497131), "2015-06-30 02:31:37");
        assert_eq!(format_millis(0), "-");
    }

    #[test]
    fn test_join_or_dash() {
        assert_eq!(join_or_dash(&["a".to_string(), "b".to_string()]), "a, b");
    }
}
