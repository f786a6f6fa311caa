//! Parsed directive types.

use bitflags::bitflags;

use crate::charclass::CharClass;
use crate::length::LengthModifier;

/// Half-open byte range `[start, end)` into the format string.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub const fn len(self) -> usize {
        self.end - self.start
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.start == self.end
    }

    /// The spanned text. `src` must be the string that was parsed.
    #[must_use]
    pub fn slice(self, src: &str) -> &str {
        &src[self.start..self.end]
    }
}

bitflags! {
    /// printf flag characters. scanf directives always carry the empty set.
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct PrintfFlags: u8 {
        /// `'`
        const GROUP = 1;
        /// `-`
        const LEFT = 2;
        /// `+`
        const SHOWSIGN = 4;
        /// ` `
        const SPACE = 8;
        /// `#`
        const ALT = 16;
        /// `0`
        const ZERO = 32;
    }
}

impl PrintfFlags {
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '\'' => Some(Self::GROUP),
            '-' => Some(Self::LEFT),
            '+' => Some(Self::SHOWSIGN),
            ' ' => Some(Self::SPACE),
            '#' => Some(Self::ALT),
            '0' => Some(Self::ZERO),
            _ => None,
        }
    }
}

/// Field width or precision.
///
/// A precision span starts at its `.`: `%.5f` has a 2-byte literal span and
/// `%.*f` a 2-byte argument span.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Amount {
    #[default]
    Absent,
    /// Digits written in the format string.
    Literal(Span),
    /// `*`: taken from an `int` argument.
    FromArg { span: Span, arg_index: usize },
}

impl Amount {
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    #[must_use]
    pub const fn span(&self) -> Option<Span> {
        match self {
            Self::Absent => None,
            Self::Literal(span) | Self::FromArg { span, .. } => Some(*span),
        }
    }

    #[must_use]
    pub const fn arg_index(&self) -> Option<usize> {
        match self {
            Self::FromArg { arg_index, .. } => Some(*arg_index),
            _ => None,
        }
    }

    /// Numeric value of a literal amount (digits after any leading `.`).
    /// Saturates on overflow. `None` if `src` is not the parsed string, i.e.
    /// the span is out of bounds or does not cover digits.
    #[must_use]
    pub fn literal_value(&self, src: &str) -> Option<usize> {
        let Self::Literal(span) = self else {
            return None;
        };
        let text = src.get(span.start..span.end)?;
        let digits = text.strip_prefix('.').unwrap_or(text);
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        Some(digits.bytes().fold(0usize, |n, b| {
            n.saturating_mul(10).saturating_add(usize::from(b - b'0'))
        }))
    }
}

/// Conversion reported by the end-of-string sentinel.
pub const SENTINEL_CONVERSION: char = '\0';

/// One parsed `%...` directive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Directive {
    pub dir_start: usize,
    pub dir_end: usize,
    pub flags: PrintfFlags,
    pub width: Amount,
    pub precision: Amount,
    pub length: LengthModifier,
    /// Normalized conversion: `C`/`S` are reported as `c`/`s`, scanf bracket
    /// expressions as `[`.
    pub conversion: char,
    /// scanf `%[...]` set.
    pub char_class: Option<CharClass>,
    /// Slot of the value argument; `None` for `%%` and the sentinel.
    pub arg_index: Option<usize>,
}

impl Directive {
    pub(crate) fn sentinel(end: usize) -> Self {
        Self {
            dir_start: end,
            dir_end: end,
            flags: PrintfFlags::empty(),
            width: Amount::Absent,
            precision: Amount::Absent,
            length: LengthModifier::default(),
            conversion: SENTINEL_CONVERSION,
            char_class: None,
            arg_index: None,
        }
    }

    /// True for the zero-length end-of-string marker.
    #[must_use]
    pub fn is_sentinel(&self) -> bool {
        self.dir_start == self.dir_end
    }

    #[must_use]
    pub fn span(&self) -> Span {
        Span::new(self.dir_start, self.dir_end)
    }

    #[must_use]
    pub fn width_arg_index(&self) -> Option<usize> {
        self.width.arg_index()
    }

    #[must_use]
    pub fn precision_arg_index(&self) -> Option<usize> {
        self.precision.arg_index()
    }

    /// Every slot this directive consumes: width, precision, then value.
    pub fn consumed_slots(&self) -> impl Iterator<Item = usize> {
        [
            self.width_arg_index(),
            self.precision_arg_index(),
            self.arg_index,
        ]
        .into_iter()
        .flatten()
    }
}

/// Parse result: directives in source order plus the end-of-string sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Directives {
    /// Non-empty; the last entry is always the sentinel.
    dirs: Vec<Directive>,
    /// Longest width span seen (`*` counts 1).
    pub max_width_length: usize,
    /// Longest precision span seen, including the `.` (`.*` counts 2).
    pub max_precision_length: usize,
}

impl Directives {
    pub(crate) fn finish(
        mut dirs: Vec<Directive>,
        end: usize,
        max_width_length: usize,
        max_precision_length: usize,
    ) -> Self {
        dirs.push(Directive::sentinel(end));
        Self {
            dirs,
            max_width_length,
            max_precision_length,
        }
    }

    /// Number of real directives (the sentinel is not counted).
    #[must_use]
    pub fn count(&self) -> usize {
        self.dirs.len() - 1
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// The `index`-th real directive.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Directive> {
        self.as_slice().get(index)
    }

    /// Real directives, without the sentinel.
    #[must_use]
    pub fn as_slice(&self) -> &[Directive] {
        &self.dirs[..self.count()]
    }

    /// Real directives followed by the sentinel.
    #[must_use]
    pub fn with_sentinel(&self) -> &[Directive] {
        &self.dirs
    }

    #[must_use]
    pub fn sentinel(&self) -> &Directive {
        &self.dirs[self.count()]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Directive> {
        self.as_slice().iter()
    }

    /// Literal text between consecutive directives.
    ///
    /// Yields `(span, directive)` where `span` is the literal run preceding
    /// `directive`. The final item pairs the trailing literal with the
    /// sentinel.
    pub fn segments(&self) -> impl Iterator<Item = (Span, &Directive)> {
        let mut from = 0;
        self.dirs.iter().map(move |d| {
            let literal = Span::new(from, d.dir_start);
            from = d.dir_end;
            (literal, d)
        })
    }
}

impl<'a> IntoIterator for &'a Directives {
    type Item = &'a Directive;
    type IntoIter = std::slice::Iter<'a, Directive>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
