//! Fuzz target for vision results JSON parsing.
//!
//! Feeds arbitrary byte sequences to the reader, checking for panics,
//! crashes, or hangs.

#![no_main]

use libfuzzer_sys::fuzz_target;
use sightspeak::ir::io_vision_json::from_vision_json_slice;

fuzz_target!(|data: &[u8]| {
    if data.len() > 10 * 1024 * 1024 {
        return;
    }

    let _ = from_vision_json_slice(data);
});
