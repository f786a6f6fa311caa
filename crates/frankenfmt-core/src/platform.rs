//! Target type widths.
//!
//! The only platform-dependent rule in the grammar is the `z` length modifier,
//! whose argument is `size_t`. Which C integer rank that maps to depends on the
//! target's data model, so the widths are passed into every parse as a plain
//! [`PlatformSizes`] value instead of being read from the host.
//!
//! Tooling that wants an ambient default reads the `FRANKENFMT_DATA_MODEL`
//! environment variable through [`data_model_from_env`]:
//! - `host` (default): widths of the machine running the parser.
//! - `lp64`: 64-bit Unix (`long` and `size_t` are 8 bytes).
//! - `ilp32`: 32-bit targets (everything 4 bytes).
//! - `llp64`: 64-bit Windows (`long` stays 4 bytes, `size_t` is 8).

use core::mem::size_of;

/// Environment variable consulted by [`data_model_from_env`].
pub const DATA_MODEL_ENV: &str = "FRANKENFMT_DATA_MODEL";

/// Byte widths of the C types that decide how `z` is promoted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlatformSizes {
    pub size_t: usize,
    pub long: usize,
    pub int: usize,
}

impl PlatformSizes {
    #[must_use]
    pub const fn new(size_t: usize, long: usize, int: usize) -> Self {
        Self { size_t, long, int }
    }

    /// Widths of the machine this crate was compiled for.
    #[must_use]
    pub const fn host() -> Self {
        Self::new(
            size_of::<libc::size_t>(),
            size_of::<libc::c_long>(),
            size_of::<libc::c_int>(),
        )
    }

    #[must_use]
    pub const fn lp64() -> Self {
        Self::new(8, 8, 4)
    }

    #[must_use]
    pub const fn ilp32() -> Self {
        Self::new(4, 4, 4)
    }

    #[must_use]
    pub const fn llp64() -> Self {
        Self::new(8, 4, 4)
    }

    /// True when `size_t` needs `long long` to be represented.
    #[must_use]
    pub const fn size_t_exceeds_long(self) -> bool {
        self.size_t > self.long
    }

    /// True when `size_t` needs at least `long` to be represented.
    #[must_use]
    pub const fn size_t_exceeds_int(self) -> bool {
        self.size_t > self.int
    }
}

impl Default for PlatformSizes {
    fn default() -> Self {
        Self::host()
    }
}

/// Named C data model.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DataModel {
    #[default]
    Host,
    Lp64,
    Ilp32,
    Llp64,
}

impl DataModel {
    /// Parse from string (case-insensitive). Unknown names fall back to `Host`.
    #[must_use]
    pub fn from_str_loose(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "lp64" | "linux64" | "unix64" | "64" => Self::Lp64,
            "ilp32" | "32" | "x86" | "arm32" => Self::Ilp32,
            "llp64" | "win64" | "windows64" => Self::Llp64,
            _ => Self::Host,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Host => "host",
            Self::Lp64 => "lp64",
            Self::Ilp32 => "ilp32",
            Self::Llp64 => "llp64",
        }
    }

    #[must_use]
    pub const fn sizes(self) -> PlatformSizes {
        match self {
            Self::Host => PlatformSizes::host(),
            Self::Lp64 => PlatformSizes::lp64(),
            Self::Ilp32 => PlatformSizes::ilp32(),
            Self::Llp64 => PlatformSizes::llp64(),
        }
    }
}

/// Read the data model from `FRANKENFMT_DATA_MODEL`, defaulting to `Host`.
///
/// The parser never calls this itself; it is for CLIs and harnesses that need
/// a process-wide default.
#[must_use]
pub fn data_model_from_env() -> DataModel {
    std::env::var(DATA_MODEL_ENV)
        .map(|v| DataModel::from_str_loose(&v))
        .unwrap_or_default()
}
