//! KML document and placemark parsing

mod model;
mod number;

use crate::error::{Error, Result};
use crate::kmz::{self, KmzArchive};
use crate::model::{AssetMap, Document, Feature, ParserConfig, Placemark};
use crate::xml::Element;
use std::io::{Cursor, Read};

pub use model::{
    ModelTag, parse_alt_mode, parse_link, parse_location, parse_model, parse_orientation,
    parse_scale,
};
pub use number::parse_float;

/// Parse a KML or KMZ file from a reader
///
/// The format is chosen by content: data starting with the ZIP signature is
/// opened as a KMZ archive, anything else is read as KML text.
pub fn parse_kml<R: Read>(reader: R) -> Result<Document> {
    parse_kml_with_config(reader, ParserConfig::new())
}

/// Parse a KML or KMZ file from a reader with custom configuration
pub fn parse_kml_with_config<R: Read>(mut reader: R, config: ParserConfig) -> Result<Document> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;

    if kmz::is_kmz(&data) {
        return parse_kmz_with_config(Cursor::new(data), config);
    }

    let xml = String::from_utf8(data)
        .map_err(|e| Error::invalid_format_context("KML document", &e.to_string()))?;
    parse_kml_str(&xml)
}

/// Parse a KMZ archive, making its bundled files available to every placemark
pub fn parse_kmz_with_config<R: Read + std::io::Seek>(
    reader: R,
    config: ParserConfig,
) -> Result<Document> {
    let mut archive = KmzArchive::open(reader)?;
    let xml = archive.document()?;
    let assets = archive.assets(&config)?;

    let root = Element::parse(&xml)?;
    let features = parse_document(&root, &assets);

    Ok(Document {
        features,
        assets,
        is_kmz: true,
    })
}

/// Parse KML text with no bundled assets
pub fn parse_kml_str(xml: &str) -> Result<Document> {
    let root = Element::parse(xml)?;
    let assets = AssetMap::new();
    let features = parse_document(&root, &assets);

    Ok(Document {
        features,
        assets,
        is_kmz: false,
    })
}

/// Collect one feature per `Placemark` under `root`, in document order
///
/// Placemarks are searched at any depth (inside `Document`, `Folder`, ...)
/// but not inside other placemarks.
pub fn parse_document(root: &Element, assets: &AssetMap) -> Vec<Feature> {
    let mut features = Vec::new();
    let mut pending = vec![root];

    while let Some(element) = pending.pop() {
        if element.local_name() == "Placemark" {
            features.push(parse_placemark(Placemark::new(element, assets)));
            continue;
        }
        // Reversed so the stack pops children in document order
        pending.extend(element.children().iter().rev());
    }

    log::debug!(
        "Parsed {} placemarks ({} with models)",
        features.len(),
        features.iter().filter(|f| f.has_model()).count()
    );

    features
}

/// Build a feature from one placemark: its name plus any model data
pub fn parse_placemark(placemark: Placemark<'_>) -> Feature {
    let mut feature = Feature {
        name: placemark
            .element
            .find_child("name")
            .map(|name| name.text_content().into_owned()),
        ..Feature::default()
    };

    parse_model(placemark, &mut feature);
    feature
}
