//! Output formatting for CLI responses

use anyhow::Error;
use colored::*;
use serde_json::json;
use std::fmt::Display;
use std::path::Path;

use shrinkstat_core::AreaReport;

const LABEL_WIDTH: usize = 18;

/// Print error in JSON format
pub fn print_error_json(error: &Error) {
    let error_json = json!({
        "success": false,
        "error": {
            "message": error.to_string(),
            "chain": error.chain().skip(1).map(ToString::to_string).collect::<Vec<_>>(),
        }
    });
    match serde_json::to_string_pretty(&error_json) {
        Ok(s) => println!("{}", s),
        Err(e) => eprintln!("Failed to format error as JSON: {}", e),
    }
}

/// Print error in human-readable format
pub fn print_error_human(error: &Error) {
    eprintln!("{} {}", "Error:".red().bold(), error);

    let mut source = error.source();
    while let Some(err) = source {
        eprintln!("  {} {}", "Caused by:".yellow(), err);
        source = err.source();
    }
}

/// Print area reports in the requested format
pub fn print_reports(reports: &[AreaReport], json: bool) {
    if json {
        let output = json!({
            "success": true,
            "areas": reports
        });
        match serde_json::to_string_pretty(&output) {
            Ok(s) => println!("{}", s),
            Err(e) => eprintln!("Failed to format reports as JSON: {}", e),
        }
    } else {
        let blocks: Vec<String> = reports.iter().map(render_report_human).collect();
        println!("{}", blocks.join("\n"));
    }
}

/// Render one area block
pub fn render_report_human(report: &AreaReport) -> String {
    let mut out = format!("{}\n", report.area.bold());
    let rows = [
        ("total documents", report.total_documents.to_string()),
        ("nonzero documents", report.nonzero_documents.to_string()),
        ("average reduce", format!("{:.4}", report.average_reduce)),
        ("line first", report.line_first.to_string()),
        ("line shrink", format_series(&report.line_shrink)),
        ("line error sum", format_series(&report.line_error_aligned)),
    ];
    for (label, value) in rows {
        let label = format!("{:<width$}", label, width = LABEL_WIDTH);
        out.push_str(&format!("  {} {}\n", label.dimmed(), value));
    }
    out
}

/// Format a series as `[a, b, c]`
pub fn format_series<T: Display>(values: &[T]) -> String {
    let items: Vec<String> = values.iter().map(ToString::to_string).collect();
    format!("[{}]", items.join(", "))
}

/// Print the outcome of a prune
pub fn print_prune_result(
    area: &str,
    before: usize,
    after: usize,
    written: Option<&Path>,
    text: &str,
    json: bool,
) {
    if json {
        let mut output = json!({
            "success": true,
            "area": area,
            "linesBefore": before,
            "linesAfter": after,
        });
        match written {
            Some(path) => output["output"] = json!(path.display().to_string()),
            None => output["text"] = json!(text),
        }
        match serde_json::to_string_pretty(&output) {
            Ok(s) => println!("{}", s),
            Err(e) => eprintln!("Failed to format prune result as JSON: {}", e),
        }
    } else if let Some(path) = written {
        println!(
            "{} {} -> {} lines in '{}' ({})",
            "Pruned".green().bold(),
            before,
            after,
            area,
            path.display()
        );
    } else {
        print!("{}", text);
    }
}
