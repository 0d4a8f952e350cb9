//! Fuzzes area pruning on arbitrary test case text.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_prune_area
#![no_main]
use libfuzzer_sys::fuzz_target;
use shrinkstat_core::{count_lines, prune_area, AreaSection};

const AREA: &str = "jsfuzzer";

fuzz_target!(|data: &[u8]| {
    let Some((&selector, rest)) = data.split_first() else {
        return;
    };
    let Ok(text) = std::str::from_utf8(rest) else {
        return;
    };
    let drop: Vec<usize> = (0..usize::from(selector % 8)).collect();
    let finalize = selector & 0x80 != 0;
    // Missing markers and unwrappable lines are expected errors.
    let Ok(pruned) = prune_area(text, AREA, &drop, finalize) else {
        return;
    };
    let Ok(after) = count_lines(&pruned, AREA) else {
        panic!("pruned output lost the area markers");
    };
    let Ok(section) = AreaSection::locate(text, AREA) else {
        panic!("prune succeeded on text without area markers");
    };

    // Code lines after the last //endjs are carried over verbatim, so the
    // count is exact only when that tail holds none.
    if !finalize && !section.epilogue().contains("/* LINE */") {
        let before = section.code_lines().count();
        let dropped = drop.iter().filter(|&&index| index < before).count();
        assert_eq!(after, before - dropped);
    }
});
