//! # frankenfmt-core
//!
//! Structural parser for C `printf`/`scanf` format strings.
//!
//! Given a format string, the parser reports every `%`-directive (its byte
//! span, flags, width, precision, length modifiers and normalized conversion)
//! and the C type of every call-site argument the string requires, in slot
//! order, including positional `N$` references. It never formats or scans
//! anything.
//!
//! Type promotion follows glibc. The only platform-dependent rule, the rank of
//! `size_t` for `%z`, comes from the [`PlatformSizes`] passed to each call.
//!
//! ```
//! use frankenfmt_core::{ArgType, PlatformSizes, parse_printf_format};
//!
//! let (dirs, args) = parse_printf_format("%*.*f", PlatformSizes::lp64())?;
//! let d = dirs.get(0).unwrap();
//! assert_eq!(d.width_arg_index(), Some(0));
//! assert_eq!(d.precision_arg_index(), Some(1));
//! assert_eq!(d.arg_index, Some(2));
//! assert_eq!(args.signature(), "int, int, double");
//! # Ok::<(), frankenfmt_core::FormatError>(())
//! ```

#![deny(unsafe_code)]

pub mod args;
pub mod charclass;
mod cursor;
pub mod directive;
pub mod error;
pub mod length;
pub mod platform;
pub mod printf;
pub mod scanf;
mod scanner;

pub use args::{ArgType, Argument, Arguments, MAX_POSITIONAL_ARGUMENTS};
pub use charclass::{CharClass, ClassRange};
pub use directive::{Amount, Directive, Directives, PrintfFlags, SENTINEL_CONVERSION, Span};
pub use error::{FormatError, FormatResult};
pub use length::{IntRank, LengthModifier};
pub use platform::{DATA_MODEL_ENV, DataModel, PlatformSizes, data_model_from_env};
pub use printf::parse_printf_format;
pub use scanf::parse_scanf_format;

/// Which family of functions a format string is written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FormatFamily {
    Printf,
    Scanf,
}

impl FormatFamily {
    /// Parse from string (case-insensitive). Accepts the family name or any
    /// member function (`fprintf`, `sscanf`, `vsnprintf`, ...).
    #[must_use]
    pub fn from_name(s: &str) -> Option<Self> {
        let s = s.trim().to_ascii_lowercase();
        if s.ends_with("printf") {
            Some(Self::Printf)
        } else if s.ends_with("scanf") {
            Some(Self::Scanf)
        } else {
            None
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Printf => "printf",
            Self::Scanf => "scanf",
        }
    }

    /// Parse `fmt` as a format string of this family.
    pub fn parse(self, fmt: &str, platform: PlatformSizes) -> FormatResult<(Directives, Arguments)> {
        match self {
            Self::Printf => parse_printf_format(fmt, platform),
            Self::Scanf => parse_scanf_format(fmt, platform),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn family_from_name() {
        assert_eq!(FormatFamily::from_name("printf"), Some(FormatFamily::Printf));
        assert_eq!(FormatFamily::from_name("vsnprintf"), Some(FormatFamily::Printf));
        assert_eq!(FormatFamily::from_name("SSCANF"), Some(FormatFamily::Scanf));
        assert_eq!(FormatFamily::from_name("puts"), None);
    }

    #[test]
    fn family_dispatch() {
        let platform = PlatformSizes::lp64();
        let (_, printf_args) = FormatFamily::Printf.parse("%f", platform).unwrap();
        let (_, scanf_args) = FormatFamily::Scanf.parse("%f", platform).unwrap();
        assert_eq!(printf_args.get(0).unwrap().ty, ArgType::Double);
        assert_eq!(scanf_args.get(0).unwrap().ty, ArgType::Float);
    }

    #[test]
    fn results_are_thread_safe_values() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Directives>();
        assert_send_sync::<Arguments>();
        assert_send_sync::<PlatformSizes>();
        assert_send_sync::<FormatError>();
    }
}
