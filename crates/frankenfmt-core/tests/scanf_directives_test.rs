//! Integration test: scanf directives, bracket expressions and slot typing.
//!
//! Run: cargo test -p frankenfmt-core --test scanf_directives_test

use std::collections::BTreeSet;

use frankenfmt_core::{
    ArgType, Arguments, Directives, FormatError, PlatformSizes, SENTINEL_CONVERSION,
    parse_scanf_format,
};

fn parse(fmt: &str) -> Result<(Directives, Arguments), FormatError> {
    parse_scanf_format(fmt, PlatformSizes::lp64())
}

#[test]
fn negated_class_with_literal_bracket_and_range() {
    let fmt = "%[^]a-z]";
    let (dirs, args) = parse(fmt).unwrap();
    assert_eq!(dirs.count(), 1);

    let d = dirs.get(0).unwrap();
    assert_eq!(d.conversion, '[');
    assert_eq!(d.dir_end, fmt.len());
    assert_eq!(d.arg_index, Some(0));

    let class = d.char_class.as_ref().unwrap();
    assert!(class.is_negated());

    let expected: BTreeSet<char> = std::iter::once(']').chain('a'..='z').collect();
    let members: BTreeSet<char> = class.members().collect();
    assert_eq!(members, expected);

    assert!(!class.matches('q'));
    assert!(!class.matches(']'));
    assert!(class.matches('^'));
    assert!(class.matches('A'));

    assert_eq!(
        args.types().collect::<Vec<_>>(),
        vec![ArgType::CharSeq]
    );
}

#[test]
fn classes_do_not_duplicate_members() {
    let (dirs, _) = parse("%[aa-cb]").unwrap();
    let class = dirs.get(0).unwrap().char_class.clone().unwrap();
    assert_eq!(class.members().collect::<String>(), "abc");
}

#[test]
fn chained_range_extends_from_previous_range_end() {
    let fmt = "%[a-c-e]%d";
    let (dirs, args) = parse(fmt).unwrap();
    let d = dirs.get(0).unwrap();
    assert_eq!(d.dir_end, "%[a-c-e]".len());

    let class = d.char_class.as_ref().unwrap();
    assert_eq!(class.members().collect::<String>(), "abcde");
    assert!(!class.contains('-'));
    assert_eq!(
        args.types().collect::<Vec<_>>(),
        vec![ArgType::CharSeq, ArgType::Int]
    );
}

#[test]
fn mixed_directives() {
    let fmt = "%d: %10s %lf %[^\n]%n";
    let (dirs, args) = parse(fmt).unwrap();
    assert_eq!(
        dirs.iter().map(|d| d.conversion).collect::<String>(),
        "dsf[n"
    );
    assert_eq!(
        args.types().collect::<Vec<_>>(),
        vec![
            ArgType::Int,
            ArgType::String,
            ArgType::Double,
            ArgType::CharSeq,
            ArgType::NumRead,
        ]
    );
    assert_eq!(dirs.max_width_length, 2);
    assert_eq!(dirs.sentinel().conversion, SENTINEL_CONVERSION);
    assert_eq!(dirs.sentinel().dir_start, fmt.len());
}

#[test]
fn positional_scanf_arguments() {
    let (dirs, args) = parse("%2$d %1$s").unwrap();
    assert_eq!(dirs.get(0).unwrap().arg_index, Some(1));
    assert_eq!(dirs.get(1).unwrap().arg_index, Some(0));
    assert_eq!(
        args.types().collect::<Vec<_>>(),
        vec![ArgType::String, ArgType::Int]
    );
    assert_eq!(
        parse("%1$f %1$lf").unwrap_err(),
        FormatError::AmbiguousPositionalType(0)
    );
}

#[test]
fn z_follows_platform() {
    let (_, args) = parse_scanf_format("%zu", PlatformSizes::ilp32()).unwrap();
    assert_eq!(args.get(0).unwrap().ty, ArgType::UInt);
    let (_, args) = parse_scanf_format("%zu", PlatformSizes::llp64()).unwrap();
    assert_eq!(args.get(0).unwrap().ty, ArgType::ULongLongInt);
}

#[test]
fn printf_and_scanf_diverge_on_floats_and_n() {
    let platform = PlatformSizes::lp64();
    let (_, printf_args) = frankenfmt_core::parse_printf_format("%f %n", platform).unwrap();
    let (_, scanf_args) = parse_scanf_format("%f %n", platform).unwrap();
    assert_eq!(
        printf_args.types().collect::<Vec<_>>(),
        vec![ArgType::Double, ArgType::CountIntPointer]
    );
    assert_eq!(
        scanf_args.types().collect::<Vec<_>>(),
        vec![ArgType::Float, ArgType::NumRead]
    );
}

#[test]
fn error_cases() {
    let cases: &[(&str, FormatError)] = &[
        ("%[", FormatError::UnterminatedBracket),
        ("%[^", FormatError::UnterminatedBracket),
        ("%[]", FormatError::UnterminatedBracket),
        ("%[a-", FormatError::UnterminatedBracket),
        (
            "%[z-a]",
            FormatError::ReversedBracketRange {
                start: 'z',
                end: 'a',
            },
        ),
        ("%", FormatError::UnexpectedEndOfString),
        ("%5", FormatError::UnexpectedEndOfString),
        ("%jd", FormatError::UnsupportedLengthModifier('j')),
        ("%0$d", FormatError::ZeroPositionalArgument),
        ("%+d", FormatError::BadConversion('+')),
        ("%y", FormatError::BadConversion('y')),
    ];
    for (fmt, expected) in cases {
        assert_eq!(parse(fmt).unwrap_err(), *expected, "{fmt}");
    }
}

#[test]
fn parsing_is_idempotent() {
    for fmt in ["%d", "%[^]a-z]", "%*s %n", "%2$d %1$[x-z]"] {
        assert_eq!(parse(fmt), parse(fmt), "{fmt}");
    }
}
