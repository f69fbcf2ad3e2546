#![no_main]

use libfuzzer_sys::fuzz_target;
use std::io::Cursor;

fuzz_target!(|data: &[u8]| {
    // Full pipeline: KMZ detection -> ZIP extraction -> XML tree -> model extraction
    let _ = kml_model::Document::from_reader(Cursor::new(data));
});
