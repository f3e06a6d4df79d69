//! # Folio
//!
//! A static site generator for one personal portfolio/resume page. The
//! content is compiled in; the build renders it to plain HTML with inline CSS
//! and copies the images and documents it references.
//!
//! # Architecture
//!
//! ```text
//! content (static records) ──► render (maud) ──► generate ──► dist/
//!                                  ▲
//!                  viewer (open document + scroll lock)
//! ```
//!
//! The page has exactly one piece of interactive state: which document, if
//! any, is open in the full-screen viewer. Rather than ship a script to toggle
//! it, the generator renders every state up front: `index.html` with the
//! viewer closed, and one `view-<slug>.html` per document with it open. View
//! and close actions are plain links between those pages.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`content`] | The compiled-in records (badges, skills, awards, contacts, documents) and their validation |
//! | [`viewer`] | Document overlay state and the scope-bound scroll lock |
//! | [`render`] | Maud components: sections, cards, skill bars, the document overlay |
//! | [`generate`] | Writes the pages, copies assets, reports missing ones |
//! | [`config`] | `config.toml` loading, merging, validation, and CSS custom properties |
//! | [`icons`] | Inline SVG icon set |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a compile-time
//! HTML macro system. Malformed markup is a build error, template inputs are
//! typed Rust values, and all interpolation is escaped.
//!
//! ## Content as Code
//!
//! The records live in [`content`] as `'static` literals. The page is a pure
//! function of them and the site config, so two builds of the same commit
//! produce the same HTML. Cross-references the type system can't express
//! (nav anchors, document slugs, skill ranges) are checked by
//! [`content::Portfolio::validate`] before anything is written.
//!
//! ## Scroll Lock as a Guard
//!
//! Opening a document locks background scroll; the lock is a guard owned by
//! the open-document slot and released in `Drop`. Closing, replacing the
//! document, or dropping the viewer all release it, and nothing else can.

pub mod config;
pub mod content;
pub mod generate;
pub mod icons;
pub mod output;
pub mod render;
pub mod viewer;

#[cfg(test)]
pub(crate) mod test_helpers;
