//! Shared test utilities for the folio test suite.
//!
//! Provides rendering shortcuts for the two page states, a throwaway site
//! source directory with every stock asset in place, and small lookup and
//! ordering assertions.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let html = render_open(&content::stock(), "documents/placement-report.pdf");
//! assert_in_order(&html, &["id=\"home\"", "id=\"contact\"", "doc-overlay"]);
//!
//! let source = setup_site_source();
//! // source.path()/assets/images/portrait.jpg exists
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::config::SiteMeta;
use crate::content::{self, ContactMethod, Portfolio};
use crate::render::{self, PageContext};
use crate::viewer::{DocumentViewer, PageScroll};

// =========================================================================
// Rendering
// =========================================================================

/// Stock site metadata.
pub fn test_site() -> SiteMeta {
    SiteMeta::default()
}

/// Render the page with the viewer closed (footer year 2025, no CSS).
pub fn render_closed(portfolio: &Portfolio) -> String {
    let site = test_site();
    let ctx = PageContext { site: &site, css: "", year: 2025 };
    let scroll = PageScroll::new();
    let viewer = DocumentViewer::new(&scroll);
    render::render_page(portfolio, &ctx, &viewer).into_string()
}

/// Render the page with `source` open in the viewer.
pub fn render_open(portfolio: &Portfolio, source: &str) -> String {
    let site = test_site();
    let ctx = PageContext { site: &site, css: "", year: 2025 };
    let scroll = PageScroll::new();
    let mut viewer = DocumentViewer::new(&scroll);
    viewer.open_document(source);
    render::render_page(portfolio, &ctx, &viewer).into_string()
}

// =========================================================================
// Fixture setup
// =========================================================================

/// A temp site source directory with a placeholder file for every asset the
/// stock portfolio references, plus a favicon.
pub fn setup_site_source() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let assets = tmp.path().join("assets");
    let favicon = "images/favicon.ico";
    for path in content::stock().asset_paths().into_iter().chain([favicon]) {
        let file = assets.join(path);
        std::fs::create_dir_all(file.parent().unwrap()).unwrap();
        std::fs::write(&file, path.as_bytes()).unwrap();
    }
    tmp
}

/// Number of regular files under `dir`, recursively.
pub fn count_files(dir: &Path) -> usize {
    walkdir::WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .count()
}

// =========================================================================
// Lookups and assertions — panic with a clear message on miss
// =========================================================================

/// Find a contact method by title. Panics if not found.
pub fn find_contact<'a>(portfolio: &'a Portfolio, title: &str) -> &'a ContactMethod {
    portfolio
        .contacts
        .iter()
        .find(|c| c.title == title)
        .unwrap_or_else(|| {
            let titles: Vec<&str> = portfolio.contacts.iter().map(|c| c.title).collect();
            panic!("contact '{title}' not found. Available: {titles:?}")
        })
}

/// Assert that every needle occurs in `haystack`, each after the previous one.
pub fn assert_in_order(haystack: &str, needles: &[&str]) {
    let mut from = 0;
    for needle in needles {
        match haystack[from..].find(needle) {
            Some(pos) => from += pos + needle.len(),
            None => panic!("'{needle}' not found after byte {from} (expected order: {needles:?})"),
        }
    }
}
