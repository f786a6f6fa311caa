#![no_main]
use frankenfmt_core::{PlatformSizes, parse_scanf_format};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(fmt) = std::str::from_utf8(data) else {
        return;
    };
    let Ok((dirs, args)) = parse_scanf_format(fmt, PlatformSizes::lp64()) else {
        return;
    };

    assert_eq!(dirs.sentinel().dir_start, fmt.len());
    for d in &dirs {
        assert!(fmt[d.dir_start..d.dir_end].starts_with('%'));
        assert_eq!(d.char_class.is_some(), d.conversion == '[');
        if let Some(class) = &d.char_class {
            // Ranges come back merged: sorted and non-touching.
            for pair in class.ranges().windows(2) {
                assert!((pair[0].end as u32) + 1 < pair[1].start as u32);
            }
        }
        for slot in d.consumed_slots() {
            assert!(!args.get(slot).expect("slot registered").ty.is_none());
        }
    }
});
