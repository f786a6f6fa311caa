//! scanf format strings.
//!
//! Reference: ISO C11 7.21.6.2, POSIX.1-2024 fscanf.
//!
//! scanf writes through a pointer sized exactly for the destination, so there
//! is no default promotion: plain `%f` stores a `float`, `%lf` a `double` and
//! `%Lf` a `long double`. `%n` stores the number of characters read so far.
//! Directives carry no flags and no precision; `%[...]` is parsed into a
//! [`CharClass`](crate::CharClass).

use crate::args::{ArgType, Arguments};
use crate::directive::Directives;
use crate::error::FormatResult;
use crate::length::LengthModifier;
use crate::platform::PlatformSizes;
use crate::scanner::{self, Dialect};

pub(crate) struct Scanf;

impl Dialect for Scanf {
    const FLAGS: bool = false;
    const PRECISION: bool = false;
    const CHAR_CLASS: bool = true;

    fn classify(c: char, length: LengthModifier) -> Option<(char, ArgType)> {
        let ty = match c {
            'd' | 'i' => ArgType::signed(length.rank()),
            'o' | 'u' | 'x' | 'X' => ArgType::unsigned(length.rank()),
            'f' | 'F' | 'e' | 'E' | 'g' | 'G' | 'a' | 'A' => {
                if length.is_long_double() {
                    ArgType::LongDouble
                } else if length.is_long() {
                    ArgType::Double
                } else {
                    ArgType::Float
                }
            }
            'c' if length.is_long() => ArgType::WideChar,
            'c' => ArgType::Char,
            's' if length.is_long() => ArgType::WideString,
            's' => ArgType::String,
            'p' => ArgType::Pointer,
            'n' => ArgType::NumRead,
            '%' => ArgType::None,
            _ => return None,
        };
        Some((c, ty))
    }
}

/// Parse a scanf format string.
///
/// Same contract as [`parse_printf_format`](crate::parse_printf_format): the
/// directives in source order plus the sentinel, and the consumed slots.
///
/// # Examples
///
/// ```
/// use frankenfmt_core::{ArgType, PlatformSizes, parse_scanf_format};
///
/// let (dirs, args) = parse_scanf_format("%d %[^\n]", PlatformSizes::lp64())?;
/// let class = dirs.get(1).unwrap().char_class.as_ref().unwrap();
/// assert!(class.is_negated());
/// assert_eq!(
///     args.types().collect::<Vec<_>>(),
///     vec![ArgType::Int, ArgType::CharSeq]
/// );
/// # Ok::<(), frankenfmt_core::FormatError>(())
/// ```
pub fn parse_scanf_format(
    fmt: &str,
    platform: PlatformSizes,
) -> FormatResult<(Directives, Arguments)> {
    scanner::scan::<Scanf>(fmt, platform)
}
