//! Argument registry.
//!
//! Each directive that consumes a call-site argument registers the type it
//! implies at a 0-based slot. The table grows densely: touching slot `n` fills
//! every unfilled slot up to `n` with [`ArgType::None`]. A slot that already
//! holds a concrete type only accepts the same type again.

use crate::error::{FormatError, FormatResult};
use crate::length::IntRank;

/// Largest accepted `N$` position (glibc's `NL_ARGMAX`).
pub const MAX_POSITIONAL_ARGUMENTS: usize = 4096;

/// C type of one call-site argument.
///
/// For scanf the argument is a pointer to a destination of this type; the tag
/// names the destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum ArgType {
    /// Unused or not yet typed slot.
    None,
    SChar,
    UChar,
    Short,
    UShort,
    Int,
    UInt,
    LongInt,
    ULongInt,
    LongLongInt,
    ULongLongInt,
    /// scanf only: `%f` without `l`.
    Float,
    Double,
    LongDouble,
    Char,
    #[cfg_attr(feature = "serde", serde(rename = "WIDE_CHAR"))]
    WideChar,
    String,
    #[cfg_attr(feature = "serde", serde(rename = "WIDE_STRING"))]
    WideString,
    Pointer,
    #[cfg_attr(feature = "serde", serde(rename = "COUNT_SCHAR_POINTER"))]
    CountSCharPointer,
    #[cfg_attr(feature = "serde", serde(rename = "COUNT_SHORT_POINTER"))]
    CountShortPointer,
    #[cfg_attr(feature = "serde", serde(rename = "COUNT_INT_POINTER"))]
    CountIntPointer,
    #[cfg_attr(feature = "serde", serde(rename = "COUNT_LONGINT_POINTER"))]
    CountLongIntPointer,
    #[cfg_attr(feature = "serde", serde(rename = "COUNT_LONGLONGINT_POINTER"))]
    CountLongLongIntPointer,
    /// scanf only: `%[...]` destination buffer.
    CharSeq,
    /// scanf only: `%n` count of characters consumed so far.
    NumRead,
}

impl ArgType {
    #[must_use]
    pub const fn signed(rank: IntRank) -> Self {
        match rank {
            IntRank::Char => Self::SChar,
            IntRank::Short => Self::Short,
            IntRank::Int => Self::Int,
            IntRank::Long => Self::LongInt,
            IntRank::LongLong => Self::LongLongInt,
        }
    }

    #[must_use]
    pub const fn unsigned(rank: IntRank) -> Self {
        match rank {
            IntRank::Char => Self::UChar,
            IntRank::Short => Self::UShort,
            IntRank::Int => Self::UInt,
            IntRank::Long => Self::ULongInt,
            IntRank::LongLong => Self::ULongLongInt,
        }
    }

    /// printf `%n` destination.
    #[must_use]
    pub const fn count_pointer(rank: IntRank) -> Self {
        match rank {
            IntRank::Char => Self::CountSCharPointer,
            IntRank::Short => Self::CountShortPointer,
            IntRank::Int => Self::CountIntPointer,
            IntRank::Long => Self::CountLongIntPointer,
            IntRank::LongLong => Self::CountLongLongIntPointer,
        }
    }

    #[must_use]
    pub const fn is_none(self) -> bool {
        matches!(self, Self::None)
    }

    /// C spelling of the type.
    #[must_use]
    pub const fn c_name(self) -> &'static str {
        match self {
            Self::None => "<unused>",
            Self::SChar => "signed char",
            Self::UChar => "unsigned char",
            Self::Short => "short",
            Self::UShort => "unsigned short",
            Self::Int => "int",
            Self::UInt => "unsigned int",
            Self::LongInt => "long",
            Self::ULongInt => "unsigned long",
            Self::LongLongInt => "long long",
            Self::ULongLongInt => "unsigned long long",
            Self::Float => "float",
            Self::Double => "double",
            Self::LongDouble => "long double",
            Self::Char => "char",
            Self::WideChar => "wint_t",
            Self::String => "const char *",
            Self::WideString => "const wchar_t *",
            Self::Pointer => "void *",
            Self::CountSCharPointer => "signed char *",
            Self::CountShortPointer => "short *",
            Self::CountIntPointer => "int *",
            Self::CountLongIntPointer => "long *",
            Self::CountLongLongIntPointer => "long long *",
            Self::CharSeq => "char[]",
            Self::NumRead => "int *",
        }
    }
}

/// One required call-site argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Argument {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub ty: ArgType,
}

impl Argument {
    pub(crate) const UNUSED: Self = Self { ty: ArgType::None };
}

/// Dense, 0-indexed table of argument slots.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Arguments {
    slots: Vec<Argument>,
}

impl Arguments {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that slot `index` is consumed as `ty`.
    ///
    /// Slots up to and including `index` that do not exist yet are created as
    /// [`ArgType::None`]. Registering a different concrete type on a slot that
    /// is already typed fails with [`FormatError::AmbiguousPositionalType`].
    pub fn register(&mut self, index: usize, ty: ArgType) -> FormatResult<()> {
        if self.slots.len() <= index {
            self.slots.resize(index + 1, Argument::UNUSED);
        }
        let slot = &mut self.slots[index];
        if slot.ty.is_none() {
            slot.ty = ty;
            Ok(())
        } else if slot.ty == ty {
            Ok(())
        } else {
            Err(FormatError::AmbiguousPositionalType(index))
        }
    }

    /// Number of slots, including untyped gaps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Argument> {
        self.slots.get(index)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Argument] {
        &self.slots
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Argument> {
        self.slots.iter()
    }

    pub fn types(&self) -> impl Iterator<Item = ArgType> + '_ {
        self.slots.iter().map(|a| a.ty)
    }

    /// Indices of slots nothing in the string typed (`%3$d` alone leaves 0 and 1).
    pub fn gaps(&self) -> impl Iterator<Item = usize> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, a)| a.ty.is_none())
            .map(|(i, _)| i)
    }

    /// Comma-separated C signature, e.g. `int, const char *`.
    #[must_use]
    pub fn signature(&self) -> String {
        self.types()
            .map(ArgType::c_name)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl<'a> IntoIterator for &'a Arguments {
    type Item = &'a Argument;
    type IntoIter = std::slice::Iter<'a, Argument>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.iter()
    }
}
