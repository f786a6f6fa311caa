#![no_main]
use frankenfmt_core::{PlatformSizes, parse_printf_format};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // First byte picks the data model, the rest is the format string.
    let Some((&model, rest)) = data.split_first() else {
        return;
    };
    let Ok(fmt) = std::str::from_utf8(rest) else {
        return;
    };
    let platform = match model % 3 {
        0 => PlatformSizes::lp64(),
        1 => PlatformSizes::ilp32(),
        _ => PlatformSizes::llp64(),
    };

    let Ok((dirs, args)) = parse_printf_format(fmt, platform) else {
        return;
    };

    assert_eq!(dirs.sentinel().dir_start, fmt.len());
    let mut last_end = 0;
    for d in &dirs {
        assert!(d.dir_start >= last_end && d.dir_end > d.dir_start);
        assert!(fmt.is_char_boundary(d.dir_start) && fmt.is_char_boundary(d.dir_end));
        last_end = d.dir_end;
        for slot in d.consumed_slots() {
            assert!(!args.get(slot).expect("slot registered").ty.is_none());
        }
    }
    assert_eq!(parse_printf_format(fmt, platform), Ok((dirs, args)));
});
