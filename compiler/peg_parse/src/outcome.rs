//! Two-way parse outcome.
//!
//! Every parse function either matched its construct or already
//! resynchronized past it. Carrying that fact in the return type means the
//! caller knows not to skip tokens a second time.

/// Result of a recursive-descent step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseOutcome {
    /// The construct was recognized (possibly with optional parts absent).
    Matched,
    /// An unexpected token was reported and the source was skipped to the
    /// next top-level construct.
    Recovered,
}

impl ParseOutcome {
    #[inline]
    pub fn is_matched(self) -> bool {
        self == ParseOutcome::Matched
    }

    #[inline]
    pub fn is_recovered(self) -> bool {
        self == ParseOutcome::Recovered
    }
}
