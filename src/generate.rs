//! HTML site generation.
//!
//! Renders the portfolio into a directory of static files that can be dropped
//! on any file server.
//!
//! ## Generated Pages
//!
//! - **Index page** (`/index.html`): the portfolio with the viewer closed
//! - **View pages** (`/view-{slug}.html`): the same page with one document
//!   open in the overlay and background scroll locked
//!
//! Each view page is rendered by driving a [`DocumentViewer`] exactly as a
//! visitor would: open the document, render, then drop the viewer. A lock
//! still held after the drop is reported as an error rather than written out.
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html
//! ├── view-recommendation-letter.html
//! ├── view-placement-report.html
//! ├── images/                   # Copied from <source>/assets/
//! │   ├── portrait.jpg
//! │   └── gallery/...
//! └── documents/
//!     ├── recommendation-letter.pdf
//!     └── placement-report.pdf
//! ```
//!
//! ## Missing assets
//!
//! A referenced image or document that isn't in the assets directory does not
//! fail the build. The page degrades in place (broken image, or the viewer's
//! "open directly" fallback), and the path is listed in the report so the
//! CLI can warn about it. The favicon from config counts as a referenced asset.
//!
//! An asset whose path matches a generated page (`index.html`,
//! `view-{slug}.html`) is an error: the build stops before writing anything
//! rather than letting one replace the other.
//!
//! ## CSS
//!
//! `static/style.css` is embedded at compile time and inlined into every page
//! after the color and layout custom properties generated from config.

use crate::config::{self, SiteConfig, SiteMeta};
use crate::content::{ContentError, Portfolio};
use crate::render::{self, PageContext};
use crate::viewer::{DocumentViewer, PageScroll, ScrollHost};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Content error: {0}")]
    Content(#[from] ContentError),
    #[error("Asset walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("scroll lock still held after closing '{0}'")]
    LeakedScrollLock(String),
    #[error("asset '{0}' would overwrite a generated page")]
    AssetCollision(String),
}

/// A page written to the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPage {
    pub title: String,
    /// Path relative to the output directory.
    pub path: String,
}

/// What a generate run produced.
#[derive(Debug, Clone, Default)]
pub struct GenerateReport {
    pub index: Option<GeneratedPage>,
    pub views: Vec<GeneratedPage>,
    pub assets_copied: usize,
    /// Referenced asset paths with no file in the assets directory.
    pub missing_assets: Vec<String>,
}

const CSS_STATIC: &str = include_str!("../static/style.css");

/// Build the full stylesheet: config-driven custom properties, then the base styles.
pub fn build_css(config: &SiteConfig) -> String {
    format!(
        "{}\n\n{}\n\n{}",
        config::generate_color_css(&config.colors),
        config::generate_theme_css(&config.theme),
        CSS_STATIC
    )
}

pub fn generate(
    portfolio: &Portfolio,
    config: &SiteConfig,
    source_dir: &Path,
    output_dir: &Path,
) -> Result<GenerateReport, GenerateError> {
    portfolio.validate()?;

    let css = build_css(config);
    let ctx = PageContext {
        site: &config.site,
        css: &css,
        year: config::effective_year(&config.footer),
    };

    let assets_dir = source_dir.join(&config.assets_dir);
    if let Some(page) = page_names(portfolio)
        .into_iter()
        .find(|page| assets_dir.join(page).exists())
    {
        return Err(GenerateError::AssetCollision(page));
    }

    fs::create_dir_all(output_dir)?;
    let mut report = GenerateReport::default();

    // Index page: viewer closed
    let scroll = PageScroll::new();
    let viewer = DocumentViewer::new(&scroll);
    let index_html = render::render_page(portfolio, &ctx, &viewer);
    fs::write(output_dir.join("index.html"), index_html.into_string())?;
    report.index = Some(GeneratedPage {
        title: "Home".to_string(),
        path: "index.html".to_string(),
    });

    // One view page per document: viewer open on that document
    for doc in portfolio.documents {
        let scroll = PageScroll::new();
        let html = {
            let mut viewer = DocumentViewer::new(&scroll);
            viewer.open_document(doc.source);
            render::render_page(portfolio, &ctx, &viewer)
        };
        // PageScroll is released by the guard; this catches a host whose
        // unlock doesn't take.
        if scroll.is_locked() {
            return Err(GenerateError::LeakedScrollLock(doc.source.to_string()));
        }

        let path = render::view_page_name(doc);
        fs::write(output_dir.join(&path), html.into_string())?;
        report.views.push(GeneratedPage {
            title: doc.title.to_string(),
            path,
        });
    }

    if assets_dir.is_dir() {
        report.assets_copied = copy_assets(&assets_dir, output_dir)?;
    }
    report.missing_assets = missing_assets(portfolio, &config.site, &assets_dir);

    Ok(report)
}

/// Paths of every page `generate` writes, relative to the output directory.
fn page_names(portfolio: &Portfolio) -> Vec<String> {
    std::iter::once("index.html".to_string())
        .chain(portfolio.documents.iter().map(render::view_page_name))
        .collect()
}

/// Copy every file under `src` into `dst`, preserving relative paths.
///
/// Returns the number of files copied.
fn copy_assets(src: &Path, dst: &Path) -> Result<usize, GenerateError> {
    let mut copied = 0;
    for entry in WalkDir::new(src).follow_links(true) {
        let entry = entry?;
        let Ok(rel) = entry.path().strip_prefix(src) else {
            continue;
        };
        let target = dst.join(rel);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            fs::copy(entry.path(), &target)?;
            copied += 1;
        }
    }
    Ok(copied)
}

/// Referenced asset paths that have no file under `assets_dir`.
///
/// Covers the favicon from `site` (unless unset or an absolute URL) followed
/// by the portfolio's own assets in page order.
pub fn missing_assets(portfolio: &Portfolio, site: &SiteMeta, assets_dir: &Path) -> Vec<String> {
    let mut paths: Vec<&str> = portfolio.asset_paths();
    let favicon = site.favicon.as_str();
    if !favicon.is_empty() && !favicon.contains("://") {
        paths.insert(0, favicon);
    }
    paths
        .into_iter()
        .filter(|p| !asset_file(assets_dir, p).is_file())
        .map(str::to_string)
        .collect()
}

fn asset_file(assets_dir: &Path, site_path: &str) -> PathBuf {
    assets_dir.join(site_path.trim_start_matches('/'))
}

// ============================================================================
// Tests
// ============================================================================
