//! Document overlay controller.
//!
//! Holds the one piece of interactive state the site has: which document, if
//! any, is open in the full-screen viewer. While a document is open the page's
//! background scroll is locked.
//!
//! ## Scroll lock ownership
//!
//! The lock is a `ScrollLock` guard, private to this module: acquiring it
//! locks the host, dropping it unlocks. The guard lives inside the
//! active-document slot, so the lock is held exactly as long as a document is
//! open:
//!
//! ```text
//! open_document(a)    slot = Some(a, lock)      host locked
//! open_document(b)    old lock dropped, slot = Some(b, lock)
//! close_document()    slot = None               host unlocked
//! drop(viewer)        slot dropped              host unlocked
//! ```
//!
//! There is no code path that unlocks by hand, and none that can forget to.
//!
//! ## Hosts
//!
//! [`ScrollHost`] is the page-wide scroll property. [`PageScroll`] is the host
//! the generator renders from: a locked host puts `scroll-locked` on `<body>`.
//! It counts holders rather than storing a flag, so releasing one lock never
//! unlocks a page another holder still has locked.

use std::cell::Cell;
use std::fmt;

/// The page-wide "can the background scroll" property.
///
/// `lock_scroll` and `unlock_scroll` come in pairs; the host stays locked
/// until every lock has been released.
pub trait ScrollHost {
    fn lock_scroll(&self);
    fn unlock_scroll(&self);
    fn is_locked(&self) -> bool;
}

/// Scroll state of one rendered page.
#[derive(Debug, Default)]
pub struct PageScroll {
    holders: Cell<usize>,
}

impl PageScroll {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScrollHost for PageScroll {
    fn lock_scroll(&self) {
        self.holders.set(self.holders.get() + 1);
    }

    fn unlock_scroll(&self) {
        self.holders.set(self.holders.get().saturating_sub(1));
    }

    fn is_locked(&self) -> bool {
        self.holders.get() > 0
    }
}

/// Holds the host's scroll lock for as long as it lives.
#[must_use = "the scroll lock is released as soon as the guard is dropped"]
struct ScrollLock<'h, H: ScrollHost> {
    host: &'h H,
}

impl<'h, H: ScrollHost> ScrollLock<'h, H> {
    fn acquire(host: &'h H) -> Self {
        host.lock_scroll();
        Self { host }
    }
}

impl<H: ScrollHost> Drop for ScrollLock<'_, H> {
    fn drop(&mut self) {
        self.host.unlock_scroll();
    }
}

struct OpenDocument<'h, H: ScrollHost> {
    source: String,
    _lock: ScrollLock<'h, H>,
}

/// The overlay state: at most one open document, identified by its source.
pub struct DocumentViewer<'h, H: ScrollHost> {
    host: &'h H,
    open: Option<OpenDocument<'h, H>>,
}

impl<'h, H: ScrollHost> DocumentViewer<'h, H> {
    /// A viewer with nothing open.
    pub fn new(host: &'h H) -> Self {
        Self { host, open: None }
    }

    /// Show `source` in the overlay, replacing whatever was open.
    ///
    /// The source is not checked: an unknown path simply fails to load in the
    /// embedded viewer, which shows its own fallback.
    pub fn open_document(&mut self, source: impl Into<String>) {
        // Release the previous lock before taking the new one: one lock per viewer.
        self.open = None;
        self.open = Some(OpenDocument {
            source: source.into(),
            _lock: ScrollLock::acquire(self.host),
        });
    }

    /// Hide the overlay. A no-op when nothing is open.
    pub fn close_document(&mut self) {
        self.open = None;
    }

    /// Source of the open document, if any.
    pub fn active_document(&self) -> Option<&str> {
        self.open.as_ref().map(|d| d.source.as_str())
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn host(&self) -> &'h H {
        self.host
    }
}

impl<H: ScrollHost> fmt::Debug for DocumentViewer<'_, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentViewer")
            .field("active_document", &self.active_document())
            .field("scroll_locked", &self.host.is_locked())
            .finish()
    }
}
