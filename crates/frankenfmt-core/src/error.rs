//! Parse failures.
//!
//! Every failure aborts the whole parse: there is no partial result and no
//! local recovery. Format strings are expected to be validated once, ahead of
//! repeated use.

use thiserror::Error;

use crate::args::MAX_POSITIONAL_ARGUMENTS;

/// Error type for format string parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FormatError {
    /// A `N$` reference used `N = 0`; positions start at 1.
    #[error("positional argument 0 (positions start at 1)")]
    ZeroPositionalArgument,
    /// A `N$` reference above [`MAX_POSITIONAL_ARGUMENTS`].
    #[error("positional argument {0} exceeds the limit of {max}", max = MAX_POSITIONAL_ARGUMENTS)]
    PositionalArgumentOutOfRange(usize),
    /// Conversion character outside the recognized set.
    #[error("bad conversion character: %{0}")]
    BadConversion(char),
    /// `j` (`intmax_t`) or `t` (`ptrdiff_t`).
    #[error("unsupported length modifier '{0}'")]
    UnsupportedLengthModifier(char),
    /// The same argument slot (0-based) was implied with two different types.
    #[error("ambiguous type for argument slot {0}")]
    AmbiguousPositionalType(usize),
    /// `%[` without a closing `]` before the end of the string.
    #[error("unterminated bracket expression")]
    UnterminatedBracket,
    /// `%[z-a]`: range start above range end.
    #[error("reversed range '{start}-{end}' in bracket expression")]
    ReversedBracketRange { start: char, end: char },
    /// The grammar expected another character but the string ended.
    #[error("unexpected end of format string")]
    UnexpectedEndOfString,
}

impl FormatError {
    /// Stable machine-readable code, used by fixtures and structured logs.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::ZeroPositionalArgument => "zero_positional_argument",
            Self::PositionalArgumentOutOfRange(_) => "positional_argument_out_of_range",
            Self::BadConversion(_) => "bad_conversion",
            Self::UnsupportedLengthModifier(_) => "unsupported_length_modifier",
            Self::AmbiguousPositionalType(_) => "ambiguous_positional_type",
            Self::UnterminatedBracket => "unterminated_bracket",
            Self::ReversedBracketRange { .. } => "reversed_bracket_range",
            Self::UnexpectedEndOfString => "unexpected_end_of_string",
        }
    }
}

/// Result type for format string parsing.
pub type FormatResult<T> = Result<T, FormatError>;
