//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. The portfolio
//! content itself is compiled in (see [`crate::content`]); config only covers
//! the site chrome: page metadata, colors, layout, and where static assets
//! live.
//!
//! ## Config File Location
//!
//! Place an optional `config.toml` in the site source directory:
//!
//! ```text
//! site/
//! ├── config.toml              # Overrides stock defaults
//! └── assets/                  # Copied to the output root
//!     ├── images/
//!     └── documents/
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! assets_dir = "assets"     # Static assets, relative to the source directory
//!
//! [site]
//! title = "Damien Papers"
//! description = "Damien Papers"
//! lang = "en"
//! favicon = "images/favicon.ico"
//!
//! [footer]
//! # year = 2025            # Copyright year (omit for the current year)
//!
//! [theme]
//! max_width = "72rem"       # Width of the content column
//! section_padding = "5rem"  # Vertical padding of each section
//! radius = "0.75rem"        # Card corner radius
//!
//! [colors.light]
//! background = "#f8fafc"
//! surface = "#ffffff"
//! text = "#1e293b"
//! text_muted = "#475569"
//! border = "#e2e8f0"
//! accent = "#2563eb"
//! accent_hover = "#1d4ed8"
//!
//! [colors.dark]
//! background = "#0f172a"
//! surface = "#1e293b"
//! text = "#f1f5f9"
//! text_muted = "#94a3b8"
//! border = "#334155"
//! accent = "#60a5fa"
//! accent_hover = "#93c5fd"
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse — override just the values you want:
//!
//! ```toml
//! [colors.light]
//! accent = "#0f766e"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have sensible defaults. User config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Static assets directory, relative to the site source directory.
    #[serde(default = "default_assets_dir")]
    pub assets_dir: String,
    /// Page metadata.
    pub site: SiteMeta,
    /// Footer settings.
    pub footer: FooterConfig,
    /// Layout settings.
    pub theme: ThemeConfig,
    /// Color schemes for light and dark modes.
    pub colors: ColorConfig,
}

fn default_assets_dir() -> String {
    "assets".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            assets_dir: default_assets_dir(),
            site: SiteMeta::default(),
            footer: FooterConfig::default(),
            theme: ThemeConfig::default(),
            colors: ColorConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.site.title.trim().is_empty() {
            return Err(ConfigError::Validation(
                "site.title must not be empty".into(),
            ));
        }
        if self.assets_dir.trim().is_empty() || Path::new(&self.assets_dir).is_absolute() {
            return Err(ConfigError::Validation(
                "assets_dir must be a relative path".into(),
            ));
        }
        if let Some(year) = self.footer.year
            && !(1970..=9999).contains(&year)
        {
            return Err(ConfigError::Validation(
                "footer.year must be between 1970 and 9999".into(),
            ));
        }
        Ok(())
    }
}

/// Page metadata written into `<head>`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteMeta {
    /// Document title.
    pub title: String,
    /// `<meta name="description">` content.
    pub description: String,
    /// `<html lang>` value.
    pub lang: String,
    /// Favicon path relative to the site root. Empty to omit.
    pub favicon: String,
}

impl Default for SiteMeta {
    fn default() -> Self {
        Self {
            title: "Damien Papers".to_string(),
            description: "Damien Papers".to_string(),
            lang: "en".to_string(),
            favicon: "images/favicon.ico".to_string(),
        }
    }
}

/// Footer settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FooterConfig {
    /// Copyright year. When absent, the current UTC year at build time.
    pub year: Option<i32>,
}

/// Resolve the copyright year: the configured one, or the current UTC year.
pub fn effective_year(footer: &FooterConfig) -> i32 {
    use chrono::Datelike;
    footer.year.unwrap_or_else(|| chrono::Utc::now().year())
}

/// Layout settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Maximum width of the content column (CSS value).
    pub max_width: String,
    /// Vertical padding of each page section (CSS value).
    pub section_padding: String,
    /// Corner radius of cards and tiles (CSS value).
    pub radius: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            max_width: "72rem".to_string(),
            section_padding: "5rem".to_string(),
            radius: "0.75rem".to_string(),
        }
    }
}

/// Color configuration for light and dark modes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    /// Light mode color scheme.
    pub light: ColorScheme,
    /// Dark mode color scheme.
    pub dark: ColorScheme,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            light: ColorScheme::default_light(),
            dark: ColorScheme::default_dark(),
        }
    }
}

/// Individual color scheme (light or dark).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorScheme {
    /// Page background.
    pub background: String,
    /// Card and alternating-section background.
    pub surface: String,
    /// Primary text color.
    pub text: String,
    /// Secondary text (summaries, dates, captions).
    pub text_muted: String,
    /// Border color.
    pub border: String,
    /// Icons, links, skill bars, buttons.
    pub accent: String,
    /// Hovered links and buttons.
    pub accent_hover: String,
}

impl ColorScheme {
    pub fn default_light() -> Self {
        Self {
            background: "#f8fafc".to_string(),
            surface: "#ffffff".to_string(),
            text: "#1e293b".to_string(),
            text_muted: "#475569".to_string(),
            border: "#e2e8f0".to_string(),
            accent: "#2563eb".to_string(),
            accent_hover: "#1d4ed8".to_string(),
        }
    }

    pub fn default_dark() -> Self {
        Self {
            background: "#0f172a".to_string(),
            surface: "#1e293b".to_string(),
            text: "#f1f5f9".to_string(),
            text_muted: "#94a3b8".to_string(),
            border: "#334155".to_string(),
            accent: "#60a5fa".to_string(),
            accent_hover: "#93c5fd".to_string(),
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::default_light()
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the canonical representation of all default values, used as the
/// base layer for merging user overrides on top.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if no `config.toml` exists in the directory.
/// Returns `Err` if the file exists but contains invalid TOML.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the given directory.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(root)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Folio Configuration
# ===================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Place this file at <source>/config.toml (default source: site/).
# Unknown keys will cause an error.

# Static assets (images, documents, favicon), relative to the source
# directory. Everything inside is copied to the output root.
assets_dir = "assets"

# ---------------------------------------------------------------------------
# Page metadata
# ---------------------------------------------------------------------------
[site]
title = "Damien Papers"
description = "Damien Papers"
lang = "en"
# Favicon path relative to the site root. Set to "" to omit.
favicon = "images/favicon.ico"

# ---------------------------------------------------------------------------
# Footer
# ---------------------------------------------------------------------------
[footer]
# Copyright year. Omit to use the current year at build time.
# year = 2025

# ---------------------------------------------------------------------------
# Layout
# ---------------------------------------------------------------------------
[theme]
# Width of the content column (CSS value).
max_width = "72rem"

# Vertical padding of each page section (CSS value).
section_padding = "5rem"

# Corner radius of cards and tiles (CSS value).
radius = "0.75rem"

# ---------------------------------------------------------------------------
# Colors - Light mode (prefers-color-scheme: light)
# ---------------------------------------------------------------------------
[colors.light]
background = "#f8fafc"
surface = "#ffffff"       # Cards, alternating sections
text = "#1e293b"
text_muted = "#475569"    # Summaries, dates, captions
border = "#e2e8f0"
accent = "#2563eb"        # Icons, links, skill bars, buttons
accent_hover = "#1d4ed8"

# ---------------------------------------------------------------------------
# Colors - Dark mode (prefers-color-scheme: dark)
# ---------------------------------------------------------------------------
[colors.dark]
background = "#0f172a"
surface = "#1e293b"
text = "#f1f5f9"
text_muted = "#94a3b8"
border = "#334155"
accent = "#60a5fa"
accent_hover = "#93c5fd"
"##
}

/// Generate CSS custom properties from color config.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        r#":root {{
    --color-bg: {light_bg};
    --color-surface: {light_surface};
    --color-text: {light_text};
    --color-text-muted: {light_text_muted};
    --color-border: {light_border};
    --color-accent: {light_accent};
    --color-accent-hover: {light_accent_hover};
}}

@media (prefers-color-scheme: dark) {{
    :root {{
        --color-bg: {dark_bg};
        --color-surface: {dark_surface};
        --color-text: {dark_text};
        --color-text-muted: {dark_text_muted};
        --color-border: {dark_border};
        --color-accent: {dark_accent};
        --color-accent-hover: {dark_accent_hover};
    }}
}}"#,
        light_bg = colors.light.background,
        light_surface = colors.light.surface,
        light_text = colors.light.text,
        light_text_muted = colors.light.text_muted,
        light_border = colors.light.border,
        light_accent = colors.light.accent,
        light_accent_hover = colors.light.accent_hover,
        dark_bg = colors.dark.background,
        dark_surface = colors.dark.surface,
        dark_text = colors.dark.text,
        dark_text_muted = colors.dark.text_muted,
        dark_border = colors.dark.border,
        dark_accent = colors.dark.accent,
        dark_accent_hover = colors.dark.accent_hover,
    )
}

/// Generate CSS custom properties from theme config.
pub fn generate_theme_css(theme: &ThemeConfig) -> String {
    format!(
        r#":root {{
    --max-width: {max_width};
    --section-padding: {section_padding};
    --radius: {radius};
}}"#,
        max_width = theme.max_width,
        section_padding = theme.section_padding,
        radius = theme.radius,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_has_colors() {
        let config = SiteConfig::default();
        assert_eq!(config.colors.light.background, "#f8fafc");
        assert_eq!(config.colors.dark.background, "#0f172a");
    }

    #[test]
    fn default_config_has_site_meta() {
        let config = SiteConfig::default();
        assert_eq!(config.assets_dir, "assets");
        assert_eq!(config.site.title, "Damien Papers");
        assert_eq!(config.site.lang, "en");
        assert_eq!(config.footer.year, None);
    }

    #[test]
    fn parse_partial_config() {
        let toml = r##"
[colors.light]
accent = "#0f766e"
"##;
        let config: SiteConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.colors.light.accent, "#0f766e");
        // Defaults preserved
        assert_eq!(config.colors.light.text, "#1e293b");
        assert_eq!(config.colors.dark.accent, "#60a5fa");
        assert_eq!(config.theme.max_width, "72rem");
    }

    #[test]
    fn generate_css_uses_config_colors() {
        let mut colors = ColorConfig::default();
        colors.light.background = "#f0f0f0".to_string();
        colors.dark.background = "#1a1a1a".to_string();

        let css = generate_color_css(&colors);
        assert!(css.contains("--color-bg: #f0f0f0"));
        assert!(css.contains("--color-bg: #1a1a1a"));
    }

    #[test]
    fn generate_css_includes_all_variables() {
        let css = generate_color_css(&ColorConfig::default());
        for var in [
            "--color-bg:",
            "--color-surface:",
            "--color-text:",
            "--color-text-muted:",
            "--color-border:",
            "--color-accent:",
            "--color-accent-hover:",
        ] {
            assert!(css.contains(var), "missing {var}");
        }
        assert!(css.contains("@media (prefers-color-scheme: dark)"));
    }

    #[test]
    fn generate_theme_css_includes_layout_variables() {
        let css = generate_theme_css(&ThemeConfig::default());
        assert!(css.contains("--max-width: 72rem"));
        assert!(css.contains("--section-padding: 5rem"));
        assert!(css.contains("--radius: 0.75rem"));
    }

    #[test]
    fn effective_year_prefers_configured_year() {
        let footer = FooterConfig { year: Some(2025) };
        assert_eq!(effective_year(&footer), 2025);
    }

    #[test]
    fn effective_year_defaults_to_current_year() {
        use chrono::Datelike;
        let year = effective_year(&FooterConfig::default());
        assert_eq!(year, chrono::Utc::now().year());
    }

    // =========================================================================
    // load_config tests
    // =========================================================================

    #[test]
    fn load_config_returns_default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.colors.light.background, "#f8fafc");
        assert_eq!(config.site.title, "Damien Papers");
    }

    #[test]
    fn load_config_reads_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            r##"
[site]
title = "Portfolio"

[footer]
year = 2025
"##,
        )
        .unwrap();

        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.site.title, "Portfolio");
        assert_eq!(config.footer.year, Some(2025));
        // Unspecified values should be defaults
        assert_eq!(config.site.lang, "en");
    }

    #[test]
    fn load_config_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.toml"), "this is not valid toml [[[").unwrap();

        let result = load_config(tmp.path());
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn load_config_validates_values() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            r#"
[site]
title = "   "
"#,
        )
        .unwrap();

        let result = load_config(tmp.path());
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    // =========================================================================
    // merge_toml tests
    // =========================================================================

    #[test]
    fn merge_toml_footer_year_overrides_stock() {
        let overlay: toml::Value = toml::from_str("[footer]\nyear = 2026").unwrap();
        let merged = merge_toml(stock_defaults_value(), overlay);
        let footer = merged.get("footer").unwrap();
        assert_eq!(footer.get("year").unwrap().as_integer(), Some(2026));
        assert_eq!(merged.get("assets_dir").unwrap().as_str(), Some("assets"));
    }

    #[test]
    fn merge_toml_keeps_sibling_theme_keys() {
        let overlay: toml::Value = toml::from_str(
            r#"
[theme]
radius = "0"
"#,
        )
        .unwrap();
        let merged = merge_toml(stock_defaults_value(), overlay);
        let config: SiteConfig = merged.try_into().unwrap();
        assert_eq!(config.theme.radius, "0");
        assert_eq!(config.theme.max_width, "72rem");
        assert_eq!(config.theme.section_padding, "5rem");
    }

    #[test]
    fn merge_toml_preserves_base_keys() {
        let base: toml::Value = toml::from_str("a = 1\nb = 2").unwrap();
        let overlay: toml::Value = toml::from_str("a = 10").unwrap();
        let merged = merge_toml(base, overlay);
        assert_eq!(merged.get("a").unwrap().as_integer(), Some(10));
        assert_eq!(merged.get("b").unwrap().as_integer(), Some(2));
    }

    // =========================================================================
    // Unknown key rejection tests
    // =========================================================================

    #[test]
    fn unknown_key_rejected() {
        let toml_str = r#"
[site]
titel = "Typo"
"#;
        let result: Result<SiteConfig, _> = toml::from_str(toml_str);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("unknown field"));
    }

    #[test]
    fn unknown_section_rejected() {
        let result: Result<SiteConfig, _> = toml::from_str("[images]\nquality = 90");
        assert!(result.is_err());
    }

    #[test]
    fn unknown_footer_key_rejected() {
        let result: Result<SiteConfig, _> = toml::from_str("[footer]\ncopyright = \"me\"");
        let err = result.unwrap_err();
        assert!(err.to_string().contains("copyright"));
    }

    // =========================================================================
    // Validation tests
    // =========================================================================

    #[test]
    fn validate_default_config_passes() {
        assert!(SiteConfig::default().validate().is_ok());
    }

    #[test]
    fn validate_empty_title() {
        let mut config = SiteConfig::default();
        config.site.title = String::new();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("site.title"));
    }

    #[test]
    fn validate_absolute_assets_dir() {
        let mut config = SiteConfig::default();
        config.assets_dir = "/var/www".to_string();
        assert!(config.validate().is_err());
        config.assets_dir = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_year_range() {
        let mut config = SiteConfig::default();
        config.footer.year = Some(1969);
        assert!(config.validate().is_err());
        config.footer.year = Some(2025);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn resolve_config_rejects_invalid_values() {
        let base = stock_defaults_value();
        let overlay: toml::Value = toml::from_str("[footer]\nyear = 12").unwrap();
        let result = resolve_config(base, Some(overlay));
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    // =========================================================================
    // stock_config_toml tests
    // =========================================================================

    #[test]
    fn stock_config_toml_roundtrips_to_defaults() {
        let config: SiteConfig = toml::from_str(stock_config_toml()).unwrap();
        let defaults = SiteConfig::default();
        assert_eq!(config.assets_dir, defaults.assets_dir);
        assert_eq!(config.site.title, defaults.site.title);
        assert_eq!(config.site.favicon, defaults.site.favicon);
        assert_eq!(config.footer.year, None);
        assert_eq!(config.theme.radius, defaults.theme.radius);
        assert_eq!(config.colors.light.accent, defaults.colors.light.accent);
        assert_eq!(config.colors.dark.surface, defaults.colors.dark.surface);
    }

    #[test]
    fn stock_config_toml_contains_all_sections() {
        let content = stock_config_toml();
        for section in ["[site]", "[footer]", "[theme]", "[colors.light]", "[colors.dark]"] {
            assert!(content.contains(section), "missing {section}");
        }
    }

    #[test]
    fn stock_defaults_value_has_all_sections() {
        let val = stock_defaults_value();
        assert!(val.is_table());
        assert!(val.get("site").is_some());
        assert!(val.get("theme").is_some());
        assert!(val.get("colors").is_some());
    }
}
