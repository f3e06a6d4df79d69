//! Browser tests for the document viewer — overlay visibility and scroll lock
//! as the browser actually computes them.
//!
//! Run with: `cargo test --test browser_viewer -- --ignored`

use headless_chrome::{Browser, LaunchOptions, Tab};
use std::path::PathBuf;
use std::process::Command;
use std::sync::{Arc, OnceLock};

// ---------------------------------------------------------------------------
// Setup helpers
// ---------------------------------------------------------------------------

fn generated_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/browser/generated")
}

fn ensure_site_built() {
    static BUILT: OnceLock<()> = OnceLock::new();
    BUILT.get_or_init(|| {
        let bin = env!("CARGO_BIN_EXE_folio");
        let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));

        let output_dir = generated_dir();
        if output_dir.exists() {
            std::fs::remove_dir_all(&output_dir).expect("failed to clean output dir");
        }

        let status = Command::new(bin)
            .args([
                "build",
                "--source",
                root.join("tests/browser/site").to_str().unwrap(),
                "--output",
                output_dir.to_str().unwrap(),
            ])
            .status()
            .expect("failed to run folio");
        assert!(status.success(), "site generation failed");
    });
}

fn browser() -> &'static Browser {
    static B: OnceLock<Browser> = OnceLock::new();
    B.get_or_init(|| {
        Browser::new(LaunchOptions {
            window_size: Some((1280, 800)),
            ..Default::default()
        })
        .expect("failed to launch Chrome")
    })
}

fn load(page: &str) -> Arc<Tab> {
    ensure_site_built();
    let tab = browser().new_tab().unwrap();
    let file = generated_dir().join(page);
    assert!(file.exists(), "missing: {}", file.display());

    tab.navigate_to(&format!("file://{}", file.display()))
        .unwrap()
        .wait_until_navigated()
        .unwrap();
    tab
}

fn eval(tab: &Tab, js: &str) -> serde_json::Value {
    tab.evaluate(js, false)
        .expect("failed to evaluate JS")
        .value
        .expect("no value returned")
}

fn body_overflow(tab: &Tab) -> String {
    eval(tab, "getComputedStyle(document.body).overflowY")
        .as_str()
        .expect("overflow is not a string")
        .to_string()
}

fn overlay_count(tab: &Tab) -> u64 {
    eval(tab, "document.querySelectorAll('.doc-overlay').length")
        .as_u64()
        .expect("count is not a number")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
#[ignore]
fn index_has_no_overlay_and_scrolls() {
    let tab = load("index.html");
    assert_eq!(overlay_count(&tab), 0);
    assert_ne!(body_overflow(&tab), "hidden");
}

#[test]
#[ignore]
fn view_and_close_recommendation_letter() {
    let tab = load("index.html");

    tab.find_element("#view-recommendation-letter")
        .unwrap()
        .click()
        .unwrap();
    tab.wait_until_navigated().unwrap();

    assert_eq!(overlay_count(&tab), 1);
    assert_eq!(body_overflow(&tab), "hidden");
    let data = eval(&tab, "document.querySelector('object.doc-frame').getAttribute('data')");
    assert_eq!(data.as_str(), Some("documents/recommendation-letter.pdf"));

    tab.find_element(".doc-overlay-close")
        .unwrap()
        .click()
        .unwrap();
    tab.wait_until_navigated().unwrap();

    assert_eq!(overlay_count(&tab), 0);
    assert_ne!(body_overflow(&tab), "hidden");
}

#[test]
#[ignore]
fn overlay_covers_viewport() {
    let tab = load("view-placement-report.html");
    let covers = eval(
        &tab,
        r#"(function() {
            const r = document.querySelector('.doc-overlay').getBoundingClientRect();
            return r.top === 0 && r.left === 0
                && r.width === window.innerWidth && r.height === window.innerHeight;
        })()"#,
    );
    assert_eq!(covers.as_bool(), Some(true));
}
