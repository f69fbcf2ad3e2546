#![no_main]

use kml_model::parser::parse_model;
use kml_model::{AssetMap, Element, Feature, Placemark};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(xml) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(root) = Element::parse(xml) else {
        return;
    };

    // Any well-formed element must be accepted as a placemark without panicking
    let assets: AssetMap = [("model.dae", vec![0u8]), ("tex.png", vec![1u8])]
        .into_iter()
        .collect();
    let mut output = Feature::new();
    parse_model(Placemark::new(&root, &assets), &mut output);
});
