//! Markdown report generation
//!
//! This module renders a page analysis as a markdown document that can be
//! saved next to other reports.

use crate::output::{CrawlResult, OutputResult};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Writes a markdown report for a result
///
/// # Arguments
///
/// * `result` - The analysis result
/// * `output_path` - Path where the markdown file should be written
///
/// # Returns
///
/// * `Ok(())` - Successfully wrote the report
/// * `Err(OutputError)` - Failed to write the report
pub fn write_markdown_report(result: &CrawlResult, output_path: &Path) -> OutputResult<()> {
    let markdown = format_markdown_report(result);

    let mut file = File::create(output_path)?;
    file.write_all(markdown.as_bytes())?;

    Ok(())
}

/// Formats a result as markdown
pub fn format_markdown_report(result: &CrawlResult) -> String {
    let mut md = String::new();

    md.push_str("# Page Analysis\n\n");

    // Request
    md.push_str("## Request\n\n");
    md.push_str(&format!("- **URL**: {}\n", result.url));
    md.push_str(&format!("- **Status Code**: {}\n", result.status_code));
    if !result.status_line.is_empty() {
        md.push_str(&format!("- **Status**: {}\n", result.status_line));
    }
    md.push_str(&format!(
        "- **Outcome**: {}\n\n",
        if result.success { "success" } else { "failed" }
    ));

    if !result.success {
        md.push_str("## Error\n\n");
        if let Some(kind) = result.failure {
            md.push_str(&format!("- **Kind**: {}\n", kind));
        }
        md.push_str(&format!("- **Message**: {}\n", result.error_message));
        return md;
    }

    // Document
    md.push_str("## Document\n\n");
    md.push_str(&format!("- **Title**: {}\n", escape_cell(&result.title)));
    if let Some(version) = result.html_version {
        md.push_str(&format!("- **HTML Version**: {}\n", version));
    }
    md.push_str(&format!("- **DOCTYPE**: `{}`\n", result.doc_type));
    md.push_str(&format!(
        "- **Login Form**: {}\n\n",
        if result.has_login_form { "yes" } else { "no" }
    ));

    // Headings
    md.push_str("## Headings\n\n");
    if result.heading_counts.is_empty() {
        md.push_str("No headings found.\n\n");
    } else {
        md.push_str("| Level | Count |\n");
        md.push_str("|-------|-------|\n");
        for (tag, count) in &result.heading_counts {
            md.push_str(&format!("| {} | {} |\n", tag, count));
        }
        md.push('\n');
    }

    // Links
    md.push_str("## Links\n\n");
    md.push_str("| Category | Count |\n");
    md.push_str("|----------|-------|\n");
    md.push_str(&format!("| Internal | {} |\n", result.internal_link_count));
    md.push_str(&format!("| External | {} |\n", result.external_link_count));
    md.push_str(&format!(
        "| Inaccessible | {} |\n",
        result.inaccessible_link_count
    ));
    md.push_str(&format!("| **Total** | {} |\n", result.total_links()));

    md
}

/// Keeps page-provided text from breaking markdown structure
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}
