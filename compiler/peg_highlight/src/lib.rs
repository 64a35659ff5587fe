//! Syntax highlighting for PEG grammar files.
//!
//! Every request re-scans the whole document: the tokenizer produces a
//! lexically styled token list, the grammar pass restyles it by context,
//! and the result is clipped to the requested range. A [`Highlighter`]
//! then maps styles to text attributes through its [`Palette`].
//!
//! # Example
//! ```
//! use peg_highlight::{scan_range, Style};
//! use peg_highlight::Utf16Document;
//!
//! let doc = Utf16Document::new("rule = other;");
//! let spans = scan_range(&doc, 0, 4);
//! assert_eq!(spans[0].style, Some(Style::RuleName));
//! assert!(spans.last().is_some_and(|span| span.is_eof));
//! ```

mod config;
mod highlighter;
mod palette;
mod scan;

pub use config::HighlightConfig;
pub use highlighter::{Highlighter, StyleRun};
pub use palette::{FontStyle, Palette, Rgb, TextAttribute};
pub use scan::{analyze, parse_whole_document, scan_range, Analysis, StyledSpan};

pub use peg_ir::Style;
pub use peg_lexer::{Document, Utf16Document};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=peg_lexer=debug,peg_parse=debug` (or `trace`).
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
