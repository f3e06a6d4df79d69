//! CLI output formatting.
//!
//! # Information-First Display
//!
//! Output leads with what was produced (a page title, a document), with file
//! paths as secondary context after a `→`. The same two-level pattern is used
//! for every command: a header line, then indented detail lines.
//!
//! # Output Format
//!
//! ## Build
//!
//! ```text
//! Home → index.html
//! Documents
//!     001 Recommendation Letter → view-recommendation-letter.html
//!     002 Placement Report → view-placement-report.html
//! Assets
//!     9 files copied
//! Missing assets
//!     images/portrait.jpg
//!
//! Generated 1 page, 2 document views
//! ```
//!
//! ## Check
//!
//! ```text
//! Content
//!     5 sections, 5 nav links
//!     5 badges, 4 gallery items, 2 documents
//!     4 skills, 4 awards, 3 contacts (2 linked)
//! Config
//!     config.toml
//!     assets/
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format functions
//! are pure — no I/O, no side effects.

use crate::content::{Portfolio, Section};
use crate::generate::GenerateReport;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// `1 page`, `2 pages`.
fn plural(n: usize, singular: &str, plural: &str) -> String {
    if n == 1 {
        format!("{} {}", n, singular)
    } else {
        format!("{} {}", n, plural)
    }
}

/// Lines listing referenced assets that were not found.
fn missing_asset_lines(missing: &[String]) -> Vec<String> {
    let mut lines = Vec::new();
    if !missing.is_empty() {
        lines.push("Missing assets".to_string());
        for path in missing {
            lines.push(format!("{}{}", indent(1), path));
        }
    }
    lines
}

// ============================================================================
// Build output
// ============================================================================

/// Format build output showing generated pages and copied assets.
pub fn format_generate_output(report: &GenerateReport) -> Vec<String> {
    let mut lines = Vec::new();

    if let Some(index) = &report.index {
        lines.push(format!("{} \u{2192} {}", index.title, index.path));
    }

    if !report.views.is_empty() {
        lines.push("Documents".to_string());
        for (i, view) in report.views.iter().enumerate() {
            lines.push(format!(
                "{}{} {} \u{2192} {}",
                indent(1),
                format_index(i + 1),
                view.title,
                view.path
            ));
        }
    }

    lines.push("Assets".to_string());
    lines.push(format!(
        "{}{} copied",
        indent(1),
        plural(report.assets_copied, "file", "files")
    ));

    lines.extend(missing_asset_lines(&report.missing_assets));

    lines.push(String::new());
    lines.push(format!(
        "Generated {}, {}",
        plural(usize::from(report.index.is_some()), "page", "pages"),
        plural(report.views.len(), "document view", "document views")
    ));

    lines
}

/// Print build output to stdout.
pub fn print_generate_output(report: &GenerateReport) {
    for line in format_generate_output(report) {
        println!("{}", line);
    }
}

// ============================================================================
// Check output
// ============================================================================

/// Format check output: a content inventory plus config/asset presence.
pub fn format_check_output(
    portfolio: &Portfolio,
    has_config_file: bool,
    assets_dir: Option<&str>,
    missing: &[String],
) -> Vec<String> {
    let linked = portfolio.contacts.iter().filter(|c| c.link.is_some()).count();

    let mut lines = vec![
        "Content".to_string(),
        format!(
            "{}{}, {}",
            indent(1),
            plural(Section::ALL.len(), "section", "sections"),
            plural(portfolio.navigation.len(), "nav link", "nav links")
        ),
        format!(
            "{}{}, {}, {}",
            indent(1),
            plural(portfolio.hero.badges.len(), "badge", "badges"),
            plural(portfolio.placement.gallery.len(), "gallery item", "gallery items"),
            plural(portfolio.documents.len(), "document", "documents")
        ),
        format!(
            "{}{}, {}, {} ({} linked)",
            indent(1),
            plural(portfolio.skills.len(), "skill", "skills"),
            plural(portfolio.awards.len(), "award", "awards"),
            plural(portfolio.contacts.len(), "contact", "contacts"),
            linked
        ),
    ];

    lines.push("Config".to_string());
    if has_config_file {
        lines.push(format!("{}config.toml", indent(1)));
    }
    if let Some(dir) = assets_dir {
        lines.push(format!("{}{}/", indent(1), dir));
    }

    lines.extend(missing_asset_lines(missing));
    lines
}

/// Print check output to stdout.
pub fn print_check_output(
    portfolio: &Portfolio,
    has_config_file: bool,
    assets_dir: Option<&str>,
    missing: &[String],
) {
    for line in format_check_output(portfolio, has_config_file, assets_dir, missing) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content;
    use crate::generate::GeneratedPage;

    fn sample_report() -> GenerateReport {
        GenerateReport {
            index: Some(GeneratedPage {
                title: "Home".to_string(),
                path: "index.html".to_string(),
            }),
            views: vec![
                GeneratedPage {
                    title: "Recommendation Letter".to_string(),
                    path: "view-recommendation-letter.html".to_string(),
                },
                GeneratedPage {
                    title: "Placement Report".to_string(),
                    path: "view-placement-report.html".to_string(),
                },
            ],
            assets_copied: 9,
            missing_assets: vec![],
        }
    }

    #[test]
    fn format_index_pads_to_three_digits() {
        assert_eq!(format_index(1), "001");
        assert_eq!(format_index(42), "042");
        assert_eq!(format_index(100), "100");
    }

    #[test]
    fn plural_picks_form() {
        assert_eq!(plural(1, "page", "pages"), "1 page");
        assert_eq!(plural(0, "page", "pages"), "0 pages");
        assert_eq!(plural(2, "page", "pages"), "2 pages");
    }

    #[test]
    fn generate_output_lists_pages_in_order() {
        let lines = format_generate_output(&sample_report());
        assert_eq!(lines[0], "Home \u{2192} index.html");
        assert_eq!(lines[1], "Documents");
        assert_eq!(
            lines[2],
            "    001 Recommendation Letter \u{2192} view-recommendation-letter.html"
        );
        assert_eq!(
            lines[3],
            "    002 Placement Report \u{2192} view-placement-report.html"
        );
        assert_eq!(lines[5], "    9 files copied");
        assert_eq!(
            lines.last().unwrap(),
            "Generated 1 page, 2 document views"
        );
    }

    #[test]
    fn generate_output_has_no_missing_section_when_complete() {
        let lines = format_generate_output(&sample_report());
        assert!(!lines.iter().any(|l| l == "Missing assets"));
    }

    #[test]
    fn generate_output_warns_about_missing_assets() {
        let mut report = sample_report();
        report.missing_assets = vec!["images/portrait.jpg".to_string()];
        let lines = format_generate_output(&report);
        let pos = lines.iter().position(|l| l == "Missing assets").unwrap();
        assert_eq!(lines[pos + 1], "    images/portrait.jpg");
    }

    #[test]
    fn check_output_inventories_stock_content() {
        let lines = format_check_output(&content::stock(), true, Some("assets"), &[]);
        assert_eq!(
            lines,
            vec![
                "Content",
                "    5 sections, 5 nav links",
                "    5 badges, 4 gallery items, 2 documents",
                "    4 skills, 4 awards, 3 contacts (2 linked)",
                "Config",
                "    config.toml",
                "    assets/",
            ]
        );
    }

    #[test]
    fn check_output_without_config_or_assets() {
        let missing = vec!["documents/placement-report.pdf".to_string()];
        let lines = format_check_output(&content::stock(), false, None, &missing);
        let config_pos = lines.iter().position(|l| l == "Config").unwrap();
        assert_eq!(lines[config_pos + 1], "Missing assets");
        assert_eq!(lines.last().unwrap(), "    documents/placement-report.pdf");
    }
}
