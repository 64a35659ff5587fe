//! Document location spans.
//!
//! Offsets count UTF-16 code units from the start of the document, the unit
//! editors index text by. Spans produced by the lexer always start and end
//! on code-point boundaries.

use std::fmt;

/// Half-open range `[start, end)` of UTF-16 code units.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
#[repr(C)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    /// Create a new span.
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    /// Create a zero-length span at `offset`.
    #[inline]
    pub const fn point(offset: u32) -> Self {
        Span {
            start: offset,
            end: offset,
        }
    }

    /// Number of code units covered.
    #[inline]
    pub const fn len(&self) -> u32 {
        self.end - self.start
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Clip this span to `window`.
    ///
    /// The start is pulled forward to `window.start` and both ends are
    /// capped at `window.end`. A span lying wholly past the window collapses
    /// to a point at `window.end`; a span wholly before it collapses to a
    /// point at `window.start`.
    #[inline]
    #[must_use]
    pub fn clip_to(self, window: Span) -> Span {
        let start = self.start.max(window.start).min(window.end);
        let end = self.end.min(window.end).max(start);
        Span { start, end }
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::Span;
    crate::static_assert_size!(Span, 8);
}
