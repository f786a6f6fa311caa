//! Length modifier accumulation.
//!
//! Modifiers are folded into a single state word as they are read, which is
//! how glibc's `printf-parse` does it and what makes odd combinations such as
//! `%hld` or `%lhd` resolve deterministically:
//!
//! | modifier | effect on state             |
//! |----------|-----------------------------|
//! | `h`      | `state \|= 1 << (state & 1)` (first `h` short, second char) |
//! | `l`      | `state += 8`                |
//! | `L`      | `state \|= 4`               |
//! | `z`      | `+16` or `+8` or nothing, depending on the width of `size_t` |

use crate::platform::PlatformSizes;

const SHORT: u32 = 1;
const CHAR: u32 = 2;
const LONG_DOUBLE: u32 = 4;
const LONG: u32 = 8;
const LONG_LONG: u32 = 16;

/// Integer rank selected by the length modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IntRank {
    Char,
    Short,
    Int,
    Long,
    LongLong,
}

/// Accumulated length-modifier state of one directive.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LengthModifier(u32);

impl LengthModifier {
    /// Raw state word.
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// True when no modifier was given.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn push_h(&mut self) {
        self.0 |= 1 << (self.0 & SHORT);
    }

    pub fn push_l(&mut self) {
        self.0 = self.0.saturating_add(LONG);
    }

    pub fn push_long_double(&mut self) {
        self.0 |= LONG_DOUBLE;
    }

    /// `z`: promote to whichever rank holds `size_t` on `platform`.
    pub fn push_size_t(&mut self, platform: PlatformSizes) {
        if platform.size_t_exceeds_long() {
            self.0 = self.0.saturating_add(LONG_LONG);
        } else if platform.size_t_exceeds_int() {
            self.0 = self.0.saturating_add(LONG);
        }
    }

    /// `ll`, `L`, or a `z` that resolved to `long long`.
    #[must_use]
    pub const fn is_long_double(self) -> bool {
        self.0 >= LONG_LONG || self.0 & LONG_DOUBLE != 0
    }

    /// At least one `l` (or an equivalent `z`). Selects wide `c`/`s`.
    #[must_use]
    pub const fn is_long(self) -> bool {
        self.0 >= LONG
    }

    #[must_use]
    pub const fn rank(self) -> IntRank {
        if self.is_long_double() {
            IntRank::LongLong
        } else if self.is_long() {
            IntRank::Long
        } else if self.0 & CHAR != 0 {
            IntRank::Char
        } else if self.0 & SHORT != 0 {
            IntRank::Short
        } else {
            IntRank::Int
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn modifier(text: &str, platform: PlatformSizes) -> LengthModifier {
        let mut m = LengthModifier::default();
        for c in text.chars() {
            match c {
                'h' => m.push_h(),
                'l' => m.push_l(),
                'L' => m.push_long_double(),
                'z' => m.push_size_t(platform),
                other => panic!("not a modifier: {other}"),
            }
        }
        m
    }

    fn rank(text: &str) -> IntRank {
        modifier(text, PlatformSizes::lp64()).rank()
    }

    #[test]
    fn standard_ranks() {
        assert_eq!(rank(""), IntRank::Int);
        assert_eq!(rank("h"), IntRank::Short);
        assert_eq!(rank("hh"), IntRank::Char);
        assert_eq!(rank("l"), IntRank::Long);
        assert_eq!(rank("ll"), IntRank::LongLong);
        assert_eq!(rank("L"), IntRank::LongLong);
    }

    #[test]
    fn mixed_modifiers_follow_state_arithmetic() {
        // h then l: 1 + 8 = 9 -> long
        assert_eq!(rank("hl"), IntRank::Long);
        // l then h: 8 | 1 = 9 -> long
        assert_eq!(rank("lh"), IntRank::Long);
        // three h: 1, 3, 3 -> char
        assert_eq!(rank("hhh"), IntRank::Char);
        // lll keeps climbing past long long
        assert_eq!(rank("lll"), IntRank::LongLong);
    }

    #[test]
    fn z_depends_on_platform() {
        assert_eq!(modifier("z", PlatformSizes::lp64()).rank(), IntRank::Long);
        assert_eq!(modifier("z", PlatformSizes::ilp32()).rank(), IntRank::Int);
        assert_eq!(
            modifier("z", PlatformSizes::llp64()).rank(),
            IntRank::LongLong
        );
    }

    #[test]
    fn long_double_bit_is_not_wide() {
        let m = modifier("L", PlatformSizes::lp64());
        assert!(m.is_long_double());
        assert!(!m.is_long());

        let m = modifier("ll", PlatformSizes::lp64());
        assert!(m.is_long_double());
        assert!(m.is_long());
    }

    #[test]
    fn long_runs_saturate() {
        let m = modifier(&"l".repeat(10_000), PlatformSizes::lp64());
        assert_eq!(m.rank(), IntRank::LongLong);
    }
}
