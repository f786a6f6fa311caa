//! printf format strings.
//!
//! Reference: ISO C11 7.21.6.1, POSIX.1-2024 fprintf (positional `N$`
//! arguments, `'` grouping flag), glibc `printf-parse` type promotion.
//!
//! Arguments undergo default promotion at the call site, so floating
//! conversions take `double` unless `L` (or `ll`) asks for `long double`.

use crate::args::{ArgType, Arguments};
use crate::directive::Directives;
use crate::error::FormatResult;
use crate::length::LengthModifier;
use crate::platform::PlatformSizes;
use crate::scanner::{self, Dialect};

pub(crate) struct Printf;

impl Dialect for Printf {
    const FLAGS: bool = true;
    const PRECISION: bool = true;
    const CHAR_CLASS: bool = false;

    fn classify(c: char, length: LengthModifier) -> Option<(char, ArgType)> {
        let ty = match c {
            'd' | 'i' => ArgType::signed(length.rank()),
            'o' | 'u' | 'x' | 'X' => ArgType::unsigned(length.rank()),
            'f' | 'F' | 'e' | 'E' | 'g' | 'G' | 'a' | 'A' => {
                if length.is_long_double() {
                    ArgType::LongDouble
                } else {
                    ArgType::Double
                }
            }
            'c' if length.is_long() => ArgType::WideChar,
            'c' => ArgType::Char,
            's' if length.is_long() => ArgType::WideString,
            's' => ArgType::String,
            // Synonyms for %lc / %ls whatever the modifiers say.
            'C' => return Some(('c', ArgType::WideChar)),
            'S' => return Some(('s', ArgType::WideString)),
            'p' => ArgType::Pointer,
            'n' => ArgType::count_pointer(length.rank()),
            '%' => ArgType::None,
            _ => return None,
        };
        Some((c, ty))
    }
}

/// Parse a printf format string.
///
/// Returns the directives in source order (plus the end-of-string sentinel)
/// and the argument slots they consume. Fails on the first malformed
/// directive; nothing is returned for the part already parsed.
///
/// # Examples
///
/// ```
/// use frankenfmt_core::{ArgType, PlatformSizes, parse_printf_format};
///
/// let (dirs, args) = parse_printf_format("%2$s has %1$zu items", PlatformSizes::lp64())?;
/// assert_eq!(dirs.count(), 2);
/// assert_eq!(
///     args.types().collect::<Vec<_>>(),
///     vec![ArgType::ULongInt, ArgType::String]
/// );
/// # Ok::<(), frankenfmt_core::FormatError>(())
/// ```
pub fn parse_printf_format(
    fmt: &str,
    platform: PlatformSizes,
) -> FormatResult<(Directives, Arguments)> {
    scanner::scan::<Printf>(fmt, platform)
}
