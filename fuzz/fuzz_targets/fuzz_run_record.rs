//! Fuzzes statistic record parsing and area reduction.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_run_record
#![no_main]
use libfuzzer_sys::fuzz_target;
use shrinkstat_core::{AreaReport, RunRecord};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(record) = RunRecord::from_json(text) else {
        return;
    };
    let records = [record.clone(), record];
    let areas: Vec<String> = records[0].total_line.keys().cloned().collect();
    for area in areas {
        // Errors are expected for malformed records, panics are not.
        if let Ok(report) = AreaReport::compute(&records, &area) {
            assert_eq!(report.line_shrink.len(), report.line_error_aligned.len() + 1);
        }
    }
});
