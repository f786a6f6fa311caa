//! Directive state machine shared by the printf and scanf parsers.
//!
//! Both families walk the same skeleton:
//!
//! ```text
//! % [N$] [flags] [width | *[N$]] [. precision | .*[N$]] [h l L z]* conversion
//! ```
//!
//! A [`Dialect`] switches off the parts a family does not have (flags and
//! precision for scanf), turns on scanf bracket expressions, and supplies the
//! table mapping `(conversion, length modifiers)` to an argument type.

use core::marker::PhantomData;

use crate::args::{ArgType, Arguments};
use crate::charclass::CharClass;
use crate::cursor::Cursor;
use crate::directive::{Amount, Directive, Directives, PrintfFlags, Span};
use crate::error::{FormatError, FormatResult};
use crate::length::LengthModifier;
use crate::platform::PlatformSizes;

/// Per-family transition tables.
pub(crate) trait Dialect {
    /// `' - + space # 0` are recognized.
    const FLAGS: bool;
    /// `.precision` is recognized.
    const PRECISION: bool;
    /// `%[...]` is recognized.
    const CHAR_CLASS: bool;

    /// Normalized conversion and implied argument type, or `None` when `c` is
    /// not a conversion of this family. `ArgType::None` means no argument.
    fn classify(c: char, length: LengthModifier) -> Option<(char, ArgType)>;
}

/// Parse `fmt` with dialect `D`.
pub(crate) fn scan<D: Dialect>(
    fmt: &str,
    platform: PlatformSizes,
) -> FormatResult<(Directives, Arguments)> {
    Scanner::<D>::new(fmt, platform).run()
}

struct Scanner<'a, D> {
    cursor: Cursor<'a>,
    platform: PlatformSizes,
    /// Next slot for a directive without an `N$` prefix.
    arg_posn: usize,
    arguments: Arguments,
    max_width_length: usize,
    max_precision_length: usize,
    _dialect: PhantomData<D>,
}

impl<'a, D: Dialect> Scanner<'a, D> {
    fn new(fmt: &'a str, platform: PlatformSizes) -> Self {
        Self {
            cursor: Cursor::new(fmt),
            platform,
            arg_posn: 0,
            arguments: Arguments::new(),
            max_width_length: 0,
            max_precision_length: 0,
            _dialect: PhantomData,
        }
    }

    fn run(mut self) -> FormatResult<(Directives, Arguments)> {
        let mut dirs = Vec::new();
        loop {
            let start = self.cursor.pos();
            match self.cursor.bump() {
                Some('%') => dirs.push(self.directive(start)?),
                Some(_) => {}
                None => break,
            }
        }

        let directives = Directives::finish(
            dirs,
            self.cursor.pos(),
            self.max_width_length,
            self.max_precision_length,
        );
        Ok((directives, self.arguments))
    }

    /// Parse one directive; the cursor sits just after its `%`.
    fn directive(&mut self, dir_start: usize) -> FormatResult<Directive> {
        let positional = self.cursor.positional_prefix()?;

        let mut flags = PrintfFlags::empty();
        if D::FLAGS {
            while let Some(flag) = self.cursor.peek().and_then(PrintfFlags::from_char) {
                flags |= flag;
                self.cursor.bump();
            }
        }

        let width = self.width()?;
        let precision = if D::PRECISION {
            self.precision()?
        } else {
            Amount::Absent
        };
        let length = self.length_modifiers()?;

        let c = self.cursor.expect_char()?;
        let (conversion, ty, char_class) = if D::CHAR_CLASS && c == '[' {
            let class = CharClass::parse(&mut self.cursor)?;
            ('[', ArgType::CharSeq, Some(class))
        } else {
            let (conversion, ty) = D::classify(c, length).ok_or(FormatError::BadConversion(c))?;
            (conversion, ty, None)
        };

        let arg_index = if ty.is_none() {
            None
        } else {
            let index = self.resolve(positional);
            self.arguments.register(index, ty)?;
            Some(index)
        };

        Ok(Directive {
            dir_start,
            dir_end: self.cursor.pos(),
            flags,
            width,
            precision,
            length,
            conversion,
            char_class,
            arg_index,
        })
    }

    fn width(&mut self) -> FormatResult<Amount> {
        let start = self.cursor.pos();
        if self.cursor.eat('*') {
            let span = Span::new(start, self.cursor.pos());
            self.max_width_length = self.max_width_length.max(span.len());
            let arg_index = self.star_argument()?;
            return Ok(Amount::FromArg { span, arg_index });
        }

        let span = self.cursor.eat_digits();
        if span.is_empty() {
            return Ok(Amount::Absent);
        }
        self.max_width_length = self.max_width_length.max(span.len());
        Ok(Amount::Literal(span))
    }

    fn precision(&mut self) -> FormatResult<Amount> {
        let start = self.cursor.pos();
        if !self.cursor.eat('.') {
            return Ok(Amount::Absent);
        }

        if self.cursor.eat('*') {
            let span = Span::new(start, self.cursor.pos());
            self.max_precision_length = self.max_precision_length.max(span.len());
            let arg_index = self.star_argument()?;
            return Ok(Amount::FromArg { span, arg_index });
        }

        // A bare '.' is a zero precision.
        self.cursor.eat_digits();
        let span = Span::new(start, self.cursor.pos());
        self.max_precision_length = self.max_precision_length.max(span.len());
        Ok(Amount::Literal(span))
    }

    /// `*` consumes an `int`, optionally at its own `N$` position.
    fn star_argument(&mut self) -> FormatResult<usize> {
        let positional = self.cursor.positional_prefix()?;
        let index = self.resolve(positional);
        self.arguments.register(index, ArgType::Int)?;
        Ok(index)
    }

    fn length_modifiers(&mut self) -> FormatResult<LengthModifier> {
        let mut length = LengthModifier::default();
        while let Some(c) = self.cursor.peek() {
            match c {
                'h' => length.push_h(),
                'l' => length.push_l(),
                'L' => length.push_long_double(),
                'z' => length.push_size_t(self.platform),
                'j' | 't' => return Err(FormatError::UnsupportedLengthModifier(c)),
                _ => break,
            }
            self.cursor.bump();
        }
        Ok(length)
    }

    fn resolve(&mut self, positional: Option<usize>) -> usize {
        positional.unwrap_or_else(|| {
            let index = self.arg_posn;
            self.arg_posn += 1;
            index
        })
    }
}
