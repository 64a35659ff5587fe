//! Code-point cursor over a UTF-16 [`Document`].
//!
//! The cursor reads one code point at a time. A high/low surrogate pair is
//! a single code point two units wide; a lone surrogate reads as
//! [`char::REPLACEMENT_CHARACTER`] one unit wide, so every position the
//! cursor stops at is a code-point boundary.
//!
//! # End of input
//!
//! Past the end, [`current()`](Cursor::current) returns [`EOF_CHAR`]
//! (`'\0'`). A document may contain U+0000 itself, so scanners that care
//! must use [`is_eof()`](Cursor::is_eof) to tell the two apart, the same
//! way a sentinel-terminated buffer is handled.

use crate::document::{is_high_surrogate, is_low_surrogate, Document};

/// Character returned when reading at or past the end of the document.
pub const EOF_CHAR: char = '\0';

/// Forward-only cursor with multi-code-point lookahead.
pub struct Cursor<'a, D: ?Sized> {
    doc: &'a D,
    pos: u32,
    len: u32,
}

// Manual impls: a derive would require `D: Copy`.
impl<D: ?Sized> Clone for Cursor<'_, D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D: ?Sized> Copy for Cursor<'_, D> {}

impl<'a, D: Document + ?Sized> Cursor<'a, D> {
    /// Create a cursor at offset 0.
    pub fn new(doc: &'a D) -> Self {
        Cursor {
            doc,
            pos: 0,
            len: doc.len(),
        }
    }

    /// Decode the code point starting at `pos`, returning it and its width
    /// in code units. Returns `(EOF_CHAR, 0)` at or past the end.
    fn decode_at(&self, pos: u32) -> (char, u32) {
        let Some(unit) = self.doc.unit_at(pos) else {
            return (EOF_CHAR, 0);
        };
        if is_high_surrogate(unit) {
            if let Some(low) = self.doc.unit_at(pos + 1).filter(|&u| is_low_surrogate(u)) {
                let scalar =
                    0x1_0000 + ((u32::from(unit) - 0xD800) << 10) + (u32::from(low) - 0xDC00);
                return (
                    char::from_u32(scalar).unwrap_or(char::REPLACEMENT_CHARACTER),
                    2,
                );
            }
        }
        (
            char::from_u32(u32::from(unit)).unwrap_or(char::REPLACEMENT_CHARACTER),
            1,
        )
    }

    /// Code point `n` positions ahead of the current one.
    fn nth(&self, n: usize) -> char {
        let mut pos = self.pos;
        for _ in 0..n {
            let (_, width) = self.decode_at(pos);
            if width == 0 {
                return EOF_CHAR;
            }
            pos += width;
        }
        self.decode_at(pos).0
    }

    /// Returns the current code point, or [`EOF_CHAR`] at the end.
    #[inline]
    pub fn current(&self) -> char {
        self.decode_at(self.pos).0
    }

    /// Returns the code point after the current one.
    #[inline]
    pub fn peek(&self) -> char {
        self.nth(1)
    }

    /// Returns the code point two positions ahead of current.
    #[inline]
    pub fn peek2(&self) -> char {
        self.nth(2)
    }

    /// Returns the code point three positions ahead of current.
    ///
    /// Only the `<::` punctuator rule needs this much lookahead.
    #[inline]
    pub fn peek3(&self) -> char {
        self.nth(3)
    }

    /// Advance past the current code point. No-op at the end.
    #[inline]
    pub fn advance(&mut self) {
        let (_, width) = self.decode_at(self.pos);
        self.pos += width;
    }

    /// Advance past the current code point if it equals `c`.
    #[inline]
    pub fn eat(&mut self, c: char) -> bool {
        if !self.is_eof() && self.current() == c {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Advance while `pred` returns `true` for the current code point.
    ///
    /// Stops at the end of input regardless of `pred`.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(char) -> bool) {
        while !self.is_eof() && pred(self.current()) {
            self.advance();
        }
    }

    /// Whether the code units at the current position equal `units`.
    pub fn starts_with_units(&self, units: &[u16]) -> bool {
        units
            .iter()
            .zip(self.pos..)
            .all(|(&unit, pos)| self.doc.unit_at(pos) == Some(unit))
    }

    /// Advance by `n` code units.
    ///
    /// The caller guarantees the landing position is a code-point boundary,
    /// e.g. after matching with [`starts_with_units`](Self::starts_with_units).
    #[inline]
    pub fn advance_units(&mut self, n: u32) {
        self.pos = (self.pos + n).min(self.len);
    }

    /// Returns `true` once every code unit has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.len
    }

    /// Current offset in code units.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Raw code units in `start..end`.
    pub fn units(&self, start: u32, end: u32) -> impl Iterator<Item = u16> + '_ {
        (start..end.min(self.len)).filter_map(|pos| self.doc.unit_at(pos))
    }

    /// Decode `start..end` into text, replacing lone surrogates with U+FFFD.
    pub fn text(&self, start: u32, end: u32) -> String {
        char::decode_utf16(self.units(start, end))
            .map(|unit| unit.unwrap_or(char::REPLACEMENT_CHARACTER))
            .collect()
    }

    /// Decode from `start` to the current position.
    pub fn text_from(&self, start: u32) -> String {
        self.text(start, self.pos)
    }
}

#[cfg(test)]
mod tests;
