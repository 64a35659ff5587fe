//! Read-only UTF-16 documents.
//!
//! Editors index text in UTF-16 code units, so every offset the lexer
//! produces counts code units. A [`Document`] only has to offer random
//! access to those units; the lexer never mutates it and never reads past
//! [`Document::len`].
//!
//! Lone surrogates are legal in a UTF-16 buffer but do not encode a code
//! point. They are detected upfront by [`encoding_issues`] and lexed as
//! one-unit unknown tokens.

use peg_ir::Span;

use crate::{LexIssue, LexIssueKind};

/// Random access to the UTF-16 code units of a document.
pub trait Document {
    /// Number of code units.
    fn len(&self) -> u32;

    /// Code unit at `offset`, or `None` at or past the end.
    fn unit_at(&self, offset: u32) -> Option<u16>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Document for [u16] {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "documents are bounded to u32::MAX code units"
    )]
    fn len(&self) -> u32 {
        <[u16]>::len(self) as u32
    }

    #[inline]
    fn unit_at(&self, offset: u32) -> Option<u16> {
        self.get(offset as usize).copied()
    }
}

impl Document for Vec<u16> {
    fn len(&self) -> u32 {
        Document::len(self.as_slice())
    }

    #[inline]
    fn unit_at(&self, offset: u32) -> Option<u16> {
        self.as_slice().unit_at(offset)
    }
}

impl<D: Document + ?Sized> Document for &D {
    fn len(&self) -> u32 {
        (**self).len()
    }

    #[inline]
    fn unit_at(&self, offset: u32) -> Option<u16> {
        (**self).unit_at(offset)
    }
}

/// An owned document built from Rust text.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Utf16Document {
    units: Vec<u16>,
}

impl Utf16Document {
    /// Encode `text` as UTF-16.
    pub fn new(text: &str) -> Self {
        Utf16Document {
            units: text.encode_utf16().collect(),
        }
    }

    /// Wrap already-encoded code units, which may contain lone surrogates.
    pub fn from_units(units: Vec<u16>) -> Self {
        Utf16Document { units }
    }

    /// Decode `span` back to text, replacing lone surrogates with U+FFFD.
    pub fn slice(&self, span: Span) -> String {
        let end = (span.end as usize).min(self.units.len());
        let start = (span.start as usize).min(end);
        char::decode_utf16(self.units[start..end].iter().copied())
            .map(|unit| unit.unwrap_or(char::REPLACEMENT_CHARACTER))
            .collect()
    }
}

impl From<&str> for Utf16Document {
    fn from(text: &str) -> Self {
        Utf16Document::new(text)
    }
}

impl Document for Utf16Document {
    fn len(&self) -> u32 {
        Document::len(self.units.as_slice())
    }

    #[inline]
    fn unit_at(&self, offset: u32) -> Option<u16> {
        self.units.as_slice().unit_at(offset)
    }
}

#[inline]
pub(crate) fn is_high_surrogate(unit: u16) -> bool {
    (0xD800..=0xDBFF).contains(&unit)
}

#[inline]
pub(crate) fn is_low_surrogate(unit: u16) -> bool {
    (0xDC00..=0xDFFF).contains(&unit)
}

/// Report every lone surrogate in `doc`.
///
/// A high surrogate immediately followed by a low surrogate is a valid pair;
/// any other surrogate unit is reported with a one-unit span.
pub fn encoding_issues<D: Document + ?Sized>(doc: &D) -> Vec<LexIssue> {
    let mut issues = Vec::new();
    let len = doc.len();
    let mut pos = 0;
    while pos < len {
        let Some(unit) = doc.unit_at(pos) else { break };
        if is_high_surrogate(unit) && doc.unit_at(pos + 1).is_some_and(is_low_surrogate) {
            pos += 2;
            continue;
        }
        if is_high_surrogate(unit) || is_low_surrogate(unit) {
            issues.push(LexIssue::new(
                LexIssueKind::LoneSurrogate,
                Span::new(pos, pos + 1),
            ));
        }
        pos += 1;
    }
    issues
}
