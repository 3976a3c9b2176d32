//! Console report for a single page analysis

use crate::output::CrawlResult;
use std::fmt::Write;

/// Formats a result as a plain-text report
///
/// Failed results show only the URL, status and error; extractor fields are
/// not shown because they were never filled in.
pub fn format_result(result: &CrawlResult) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "=== Page Analysis ===\n");
    let _ = writeln!(out, "URL: {}", result.url);
    let _ = writeln!(out, "Status Code: {} ({})", result.status_code, result.status_line);

    if !result.success {
        let _ = writeln!(out, "Error: {}", result.error_message);
        return out;
    }

    let _ = writeln!(out, "Page title: {}", result.title);
    if let Some(version) = result.html_version {
        let _ = writeln!(out, "HTML version: {}", version);
    }
    let _ = writeln!(out, "DOCTYPE: {}", result.doc_type);
    let _ = writeln!(
        out,
        "Login form: {}",
        if result.has_login_form { "yes" } else { "no" }
    );
    let _ = writeln!(out);

    let _ = writeln!(out, "Headings ({}):", result.headings_total());
    if result.heading_counts.is_empty() {
        let _ = writeln!(out, "  (none)");
    }
    for (tag, count) in &result.heading_counts {
        let _ = writeln!(out, "  {}: {}", tag, count);
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "Links ({}):", result.total_links());
    let _ = writeln!(out, "  Internal: {}", result.internal_link_count);
    let _ = writeln!(out, "  External: {}", result.external_link_count);
    let _ = writeln!(out, "  Inaccessible: {}", result.inaccessible_link_count);

    out
}

/// Prints a result to stdout
pub fn print_result(result: &CrawlResult) {
    print!("{}", format_result(result));
}
