//! Integration test: printf directive and argument-slot contract.
//!
//! Run: cargo test -p frankenfmt-core --test printf_directives_test

use frankenfmt_core::{
    Amount, ArgType, Arguments, Directives, FormatError, PlatformSizes, PrintfFlags, Span,
    parse_printf_format,
};

fn parse(fmt: &str) -> Result<(Directives, Arguments), FormatError> {
    parse_printf_format(fmt, PlatformSizes::lp64())
}

fn types(args: &Arguments) -> Vec<ArgType> {
    args.types().collect()
}

const CORPUS: &[&str] = &[
    "",
    "plain text",
    "%d",
    "%%",
    "%5.2f|%-10s|%#x",
    "%2$s %1$d",
    "%*.*f",
    "%1$*2$.*3$Lf",
    "%'d %+d % d",
    "%hhd %hd %d %ld %lld %zd",
    "%c %lc %C %s %ls %S %p %n",
    "%3$d",
    "héllo %s wörld %d",
];

#[test]
fn single_int() {
    let (dirs, args) = parse("%d").unwrap();
    assert_eq!(dirs.count(), 1);
    assert_eq!(dirs.get(0).unwrap().conversion, 'd');
    assert_eq!(dirs.get(0).unwrap().arg_index, Some(0));
    assert_eq!(types(&args), vec![ArgType::Int]);
}

#[test]
fn positional_arguments_out_of_order() {
    let (dirs, args) = parse("%2$s %1$d").unwrap();
    assert_eq!(dirs.count(), 2);
    assert_eq!(dirs.get(0).unwrap().arg_index, Some(1));
    assert_eq!(dirs.get(1).unwrap().arg_index, Some(0));
    assert_eq!(args.len(), 2);
    assert_eq!(types(&args), vec![ArgType::Int, ArgType::String]);
}

#[test]
fn star_width_and_precision_precede_value() {
    let (dirs, args) = parse("%*.*f").unwrap();
    assert_eq!(dirs.count(), 1);
    let d = dirs.get(0).unwrap();
    assert_eq!(d.width_arg_index(), Some(0));
    assert_eq!(d.precision_arg_index(), Some(1));
    assert_eq!(d.arg_index, Some(2));
    assert_eq!(d.consumed_slots().collect::<Vec<_>>(), vec![0, 1, 2]);
    assert_eq!(
        types(&args),
        vec![ArgType::Int, ArgType::Int, ArgType::Double]
    );
}

#[test]
fn positional_star_arguments() {
    let fmt = "%1$*2$.*3$Lf";
    let (dirs, args) = parse(fmt).unwrap();
    let d = dirs.get(0).unwrap();
    assert_eq!(
        d.width,
        Amount::FromArg {
            span: Span::new(3, 4),
            arg_index: 1
        }
    );
    assert_eq!(
        d.precision,
        Amount::FromArg {
            span: Span::new(6, 8),
            arg_index: 2
        }
    );
    assert_eq!(d.arg_index, Some(0));
    assert_eq!(d.span().slice(fmt), fmt);
    assert_eq!(
        types(&args),
        vec![ArgType::LongDouble, ArgType::Int, ArgType::Int]
    );
}

#[test]
fn long_long_and_char_ranks() {
    assert_eq!(types(&parse("%lld").unwrap().1), vec![ArgType::LongLongInt]);
    assert_eq!(types(&parse("%hhd").unwrap().1), vec![ArgType::SChar]);
}

#[test]
fn percent_only_strings() {
    for fmt in ["%%", "%%%%", "a%%b%%c%%"] {
        let (dirs, args) = parse(fmt).unwrap();
        assert_eq!(dirs.count(), fmt.matches("%%").count());
        assert!(dirs.iter().all(|d| d.arg_index.is_none()));
        assert!(dirs.iter().all(|d| d.conversion == '%'));
        assert!(args.types().all(ArgType::is_none));
        assert!(args.is_empty());
    }
}

#[test]
fn unpositioned_after_positional_takes_first_free_counter_slot() {
    // `%2$d` pins slot 1; the counter has not moved, so `%d` takes slot 0.
    let (dirs, args) = parse("%2$d %d").unwrap();
    assert_eq!(dirs.get(0).unwrap().arg_index, Some(1));
    assert_eq!(dirs.get(1).unwrap().arg_index, Some(0));
    assert_eq!(types(&args), vec![ArgType::Int, ArgType::Int]);
}

#[test]
fn unpositioned_counter_collides_with_positional_type() {
    // Third directive takes counter slot 1, already typed as a string.
    assert_eq!(
        parse("%2$s %d %d").unwrap_err(),
        FormatError::AmbiguousPositionalType(1)
    );
    // Same type on the collision is accepted.
    let (dirs, args) = parse("%2$d %d %d").unwrap();
    assert_eq!(dirs.get(2).unwrap().arg_index, Some(1));
    assert_eq!(types(&args), vec![ArgType::Int, ArgType::Int]);
}

#[test]
fn reused_positional_slot_must_agree() {
    let (_, args) = parse("%1$d %1$d").unwrap();
    assert_eq!(types(&args), vec![ArgType::Int]);
    assert_eq!(
        parse("%1$d %1$ld").unwrap_err(),
        FormatError::AmbiguousPositionalType(0)
    );
    // A star width registers `int`, so it clashes with a string slot.
    assert_eq!(
        parse("%1$s %*1$d").unwrap_err(),
        FormatError::AmbiguousPositionalType(0)
    );
}

#[test]
fn untouched_positional_slots_are_explicit_gaps() {
    let (_, args) = parse("%3$d").unwrap();
    assert_eq!(
        types(&args),
        vec![ArgType::None, ArgType::None, ArgType::Int]
    );
    assert_eq!(args.gaps().collect::<Vec<_>>(), vec![0, 1]);
}

#[test]
fn directives_sharing_a_slot_agree_on_its_type() {
    let shared = ["%1$d %1$d", "%1$*1$d", "%2$s %1$*3$d %2$s %3$d"];
    for fmt in CORPUS.iter().copied().chain(shared) {
        let (dirs, args) = parse(fmt).unwrap();
        let mut seen: Vec<Option<ArgType>> = vec![None; args.len()];
        for d in &dirs {
            // Type each directive on its own, then map its slots back.
            let text = d.span().slice(fmt);
            let (alone_dirs, alone_args) = parse(text).unwrap();
            let alone = alone_dirs.get(0).unwrap();
            for (slot, alone_slot) in d.consumed_slots().zip(alone.consumed_slots()) {
                let ty = alone_args.get(alone_slot).unwrap().ty;
                assert!(!ty.is_none(), "{fmt}: {text} slot {slot}");
                assert_eq!(*seen[slot].get_or_insert(ty), ty, "{fmt}: slot {slot}");
                assert_eq!(args.get(slot).unwrap().ty, ty, "{fmt}: slot {slot}");
            }
        }
    }
}

#[test]
fn parsing_is_idempotent() {
    for fmt in CORPUS {
        assert_eq!(parse(fmt), parse(fmt), "{fmt}");
    }
}

#[test]
fn sentinel_marks_end_of_string() {
    for fmt in CORPUS {
        let (dirs, _) = parse(fmt).unwrap();
        let sentinel = dirs.sentinel();
        assert!(sentinel.is_sentinel());
        assert_eq!(sentinel.dir_start, fmt.len());
        assert_eq!(sentinel.arg_index, None);
        assert_eq!(dirs.with_sentinel().len(), dirs.count() + 1);
    }
}

#[test]
fn directives_are_ordered_and_disjoint() {
    for fmt in CORPUS {
        let (dirs, _) = parse(fmt).unwrap();
        let mut last_end = 0;
        for d in &dirs {
            assert!(d.dir_start >= last_end, "{fmt}");
            assert!(d.dir_end > d.dir_start, "{fmt}");
            assert!(d.span().slice(fmt).starts_with('%'), "{fmt}");
            last_end = d.dir_end;
        }
    }
}

#[test]
fn segments_cover_literal_text() {
    let fmt = "a%db%%c";
    let (dirs, _) = parse(fmt).unwrap();
    let literals: Vec<&str> = dirs.segments().map(|(span, _)| span.slice(fmt)).collect();
    assert_eq!(literals, vec!["a", "b", "c"]);
}

#[test]
fn flags_are_a_bitset() {
    let (dirs, _) = parse("%'d %+d % d %-0#x").unwrap();
    let flags: Vec<PrintfFlags> = dirs.iter().map(|d| d.flags).collect();
    assert_eq!(
        flags,
        vec![
            PrintfFlags::GROUP,
            PrintfFlags::SHOWSIGN,
            PrintfFlags::SPACE,
            PrintfFlags::LEFT | PrintfFlags::ZERO | PrintfFlags::ALT,
        ]
    );
}

#[test]
fn max_lengths_track_longest_spans() {
    let (dirs, _) = parse("%5d %123.4567f %*.*d").unwrap();
    assert_eq!(dirs.max_width_length, 3);
    assert_eq!(dirs.max_precision_length, 5);
}

#[test]
fn offsets_are_bytes() {
    let fmt = "héllo %s";
    let (dirs, _) = parse(fmt).unwrap();
    assert_eq!(dirs.get(0).unwrap().dir_start, 7);
    assert_eq!(dirs.sentinel().dir_start, fmt.len());
}

#[test]
fn error_cases() {
    let cases: &[(&str, FormatError)] = &[
        ("%", FormatError::UnexpectedEndOfString),
        ("%-", FormatError::UnexpectedEndOfString),
        ("%5.", FormatError::UnexpectedEndOfString),
        ("%l", FormatError::UnexpectedEndOfString),
        ("%0$d", FormatError::ZeroPositionalArgument),
        ("%*0$d", FormatError::ZeroPositionalArgument),
        ("%5000$d", FormatError::PositionalArgumentOutOfRange(5000)),
        ("%jd", FormatError::UnsupportedLengthModifier('j')),
        ("%ld %td", FormatError::UnsupportedLengthModifier('t')),
        ("%k", FormatError::BadConversion('k')),
        ("%U", FormatError::BadConversion('U')),
    ];
    for (fmt, expected) in cases {
        assert_eq!(parse(fmt).unwrap_err(), *expected, "{fmt}");
    }
}
