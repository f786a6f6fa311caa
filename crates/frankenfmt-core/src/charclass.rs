//! scanf bracket expressions (`%[...]`).
//!
//! Rules, left to right from the character after `[`:
//! - a leading `^` negates the set and is not itself a member;
//! - `]` as the first set character (after the optional `^`) is a member;
//! - `x-y` is an inclusive range whose start is the member just before the
//!   `-`, including the end of a previous range, so `a-c-e` is `a-e`;
//! - a `-` that opens the set or sits right before the closing `]` is a
//!   literal member;
//! - any other `]` closes the set.
//!
//! Ranges are stored merged and sorted, so `%[a-zA-Z0-9_]` costs four entries
//! rather than sixty-three.

use crate::cursor::Cursor;
use crate::error::{FormatError, FormatResult};

/// Inclusive range of member characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassRange {
    pub start: char,
    pub end: char,
}

impl ClassRange {
    #[must_use]
    pub const fn new(start: char, end: char) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub fn contains(&self, c: char) -> bool {
        self.start <= c && c <= self.end
    }
}

/// Parsed `%[...]` character set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharClass {
    negated: bool,
    ranges: Vec<ClassRange>,
}

impl CharClass {
    /// `%[^...]`.
    #[must_use]
    pub fn is_negated(&self) -> bool {
        self.negated
    }

    /// Merged, sorted member ranges.
    #[must_use]
    pub fn ranges(&self) -> &[ClassRange] {
        &self.ranges
    }

    /// Listed membership, ignoring negation.
    #[must_use]
    pub fn contains(&self, c: char) -> bool {
        self.ranges
            .binary_search_by(|r| {
                if r.end < c {
                    core::cmp::Ordering::Less
                } else if r.start > c {
                    core::cmp::Ordering::Greater
                } else {
                    core::cmp::Ordering::Equal
                }
            })
            .is_ok()
    }

    /// Whether scanf would accept `c` for this directive.
    #[must_use]
    pub fn matches(&self, c: char) -> bool {
        self.contains(c) != self.negated
    }

    /// Every listed member in ascending order.
    pub fn members(&self) -> impl Iterator<Item = char> + '_ {
        self.ranges.iter().flat_map(|r| r.start..=r.end)
    }

    /// Parse the set body. The cursor sits just after `[` and is left just
    /// after the closing `]`.
    pub(crate) fn parse(cursor: &mut Cursor<'_>) -> FormatResult<Self> {
        let negated = cursor.eat('^');
        let mut ranges = Vec::new();
        // Last member seen; `None` until the first one.
        let mut prev: Option<char> = None;

        loop {
            let c = cursor.bump().ok_or(FormatError::UnterminatedBracket)?;
            if c == ']' && prev.is_some() {
                break;
            }

            let range = match (c, prev, cursor.peek()) {
                ('-', Some(start), Some(end)) if end != ']' => Some((start, end)),
                _ => None,
            };
            match range {
                Some((start, end)) => {
                    cursor.bump();
                    if start > end {
                        return Err(FormatError::ReversedBracketRange { start, end });
                    }
                    ranges.push(ClassRange::new(start, end));
                    prev = Some(end);
                }
                None => {
                    ranges.push(ClassRange::new(c, c));
                    prev = Some(c);
                }
            }
        }

        Ok(Self {
            negated,
            ranges: merge(ranges),
        })
    }
}

fn merge(mut ranges: Vec<ClassRange>) -> Vec<ClassRange> {
    ranges.sort_unstable_by_key(|r| r.start);
    let mut merged: Vec<ClassRange> = Vec::with_capacity(ranges.len());
    for r in ranges {
        match merged.last_mut() {
            Some(last) if u32::from(r.start) <= u32::from(last.end).saturating_add(1) => {
                if r.end > last.end {
                    last.end = r.end;
                }
            }
            _ => merged.push(r),
        }
    }
    merged
}
