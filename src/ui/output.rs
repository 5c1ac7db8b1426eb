//! Console messages printed around a playlist run.

use crate::playlist::BuildSummary;

/// Announce how many entries the range covers
pub fn display_generation_start(total_entries: usize) {
    println!("{}", generation_start_message(total_entries));
}

/// One line per verified URL, printed in range order in verbose mode
pub fn display_check_result(url: &str, reachable: bool) {
    println!("{}", check_result_message(url, reachable));
}

/// Final summary after the playlist file was written
pub fn display_summary(summary: &BuildSummary) {
    for line in summary_lines(summary) {
        println!("{line}");
    }
}

pub fn generation_start_message(total_entries: usize) -> String {
    format!("Generating playlist with {total_entries} entries...")
}

pub fn check_result_message(url: &str, reachable: bool) -> String {
    let status = if reachable { "OK" } else { "FAILED" };
    format!("Checking: {url} [{status}]")
}

pub fn summary_lines(summary: &BuildSummary) -> Vec<String> {
    let mut lines = Vec::with_capacity(2);
    if summary.verified {
        lines.push(format!(
            "Verification complete: {} valid, {} invalid URLs",
            summary.accepted, summary.rejected
        ));
    }
    lines.push(format!(
        "Playlist file '{}' created successfully.",
        summary.output_path.display()
    ));
    lines
}
