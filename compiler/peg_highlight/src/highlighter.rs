//! Style runs for an editor presentation.

use peg_lexer::Document;
use tracing::debug;

use crate::{scan_range, HighlightConfig, Palette, TextAttribute};

/// A maximal stretch of text drawn with one attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StyleRun {
    pub offset: u32,
    pub length: u32,
    pub attribute: TextAttribute,
}

impl StyleRun {
    #[inline]
    pub fn end(&self) -> u32 {
        self.offset + self.length
    }
}

/// Turns scanned tokens into attribute runs.
#[derive(Clone, Debug, Default)]
pub struct Highlighter {
    config: HighlightConfig,
}

impl Highlighter {
    pub fn new(config: HighlightConfig) -> Self {
        Highlighter { config }
    }

    pub fn config(&self) -> &HighlightConfig {
        &self.config
    }

    pub fn palette(&self) -> &Palette {
        &self.config.palette
    }

    pub fn palette_mut(&mut self) -> &mut Palette {
        &mut self.config.palette
    }

    /// Attribute runs covering `[offset, offset + length)`.
    ///
    /// Adjacent tokens whose attributes are equal share one run, and
    /// zero-length pieces are dropped.
    pub fn presentation<D: Document + ?Sized>(
        &self,
        doc: &D,
        offset: u32,
        length: u32,
    ) -> Vec<StyleRun> {
        let mut runs: Vec<StyleRun> = Vec::new();
        for span in scan_range(doc, offset, length) {
            if span.is_eof || span.length == 0 {
                continue;
            }
            let attribute = self.config.palette.resolve(span.style);
            match runs.last_mut() {
                Some(last) if last.attribute == attribute && last.end() == span.offset => {
                    last.length += span.length;
                }
                _ => runs.push(StyleRun {
                    offset: span.offset,
                    length: span.length,
                    attribute,
                }),
            }
        }
        debug!(offset, length, runs = runs.len(), "built presentation");
        runs
    }
}
