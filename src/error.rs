//! Errors produced while building or running an automaton.

/// Reason a pattern was rejected by the builder.
/// Positions are character offsets into the pattern.
#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Malformed {
    /// The pattern has no characters at all.
    #[error("empty pattern")]
    Empty,

    /// The pattern consists only of `(`, `)`, `|` and `*`.
    #[error("pattern contains no literal or '.' to match")]
    NoAtoms,

    /// A `)` with no open group.
    #[error("unbalanced ')' at position {position}")]
    UnmatchedClose { position: usize },

    /// A `|` that is not inside a parenthesized group.
    #[error("alternation at position {position} is not enclosed in a group")]
    OrphanAlternation { position: usize },

    /// More than one `|` inside the same group. Alternation is binary.
    #[error("second alternation in one group at position {position}")]
    ChainedAlternation { position: usize },

    /// A `(` or `|` left open when the pattern ended.
    #[error("unclosed '{c}' at position {position}")]
    Unclosed { c: char, position: usize },
}

/// Represents an error encountered while compiling a pattern or matching text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The pattern could not be compiled. No automaton is produced.
    #[error("malformed regular expression: {0}")]
    MalformedRegex(#[from] Malformed),

    /// The subject text contains reserved pattern syntax.
    /// `position` is the character offset of `c` in the text.
    #[error("text contains the metacharacter '{c}' at position {position}")]
    InvalidCharacterInText { c: char, position: usize },
}

impl Error {
    /// \return the build failure reason, if this is a build failure.
    pub fn malformed(&self) -> Option<Malformed> {
        match self {
            Error::MalformedRegex(m) => Some(*m),
            Error::InvalidCharacterInText { .. } => None,
        }
    }
}
