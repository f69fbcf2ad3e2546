//! KML `Model` element parsing
//!
//! Extracts 3D model placement from a placemark: location, orientation,
//! scale, altitude mode and the linked COLLADA payload. Parsing is
//! best-effort. Absent elements leave fields unset, unknown tags are skipped,
//! non-numeric text becomes `NaN` and dangling asset references are ignored.
//! None of these conditions is reported as an error.

use crate::model::{AltitudeMode, Feature, ModelRecord, Placemark, Point};
use crate::xml::Element;

use super::number::parse_float;

/// Recognized children of a `Model` element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelTag {
    /// `Location`: longitude, latitude, altitude
    Location,
    /// `Orientation`: heading, tilt, roll
    Orientation,
    /// `Scale`: x, y, z
    Scale,
    /// `altitudeMode`
    AltitudeMode,
    /// `Link`: reference to the COLLADA file
    Link,
    /// Anything else, ignored
    Unknown,
}

impl ModelTag {
    /// Classify a local tag name. Matching is exact and case-sensitive.
    pub fn from_local_name(name: &str) -> Self {
        match name {
            "Location" => ModelTag::Location,
            "Orientation" => ModelTag::Orientation,
            "Scale" => ModelTag::Scale,
            "altitudeMode" => ModelTag::AltitudeMode,
            "Link" => ModelTag::Link,
            _ => ModelTag::Unknown,
        }
    }
}

/// Parse the `Model` of a placemark into `output`
///
/// Children are scanned from last to first and the first `Model` found is
/// used, so with several sibling models only the last in document order is
/// read. Without a `Model` child, `output` is left untouched.
///
/// On success `output.model` is replaced and, when the model has a
/// `Location`, so is `output.geometry`.
pub fn parse_model(placemark: Placemark<'_>, output: &mut Feature) {
    let Some(model_element) = placemark
        .element
        .children()
        .iter()
        .rev()
        .find(|child| child.local_name() == "Model")
    else {
        return;
    };

    log::debug!(
        "Parsing Model (id {:?}) with {} children",
        model_element.attribute("id"),
        model_element.children().len()
    );

    let mut record = ModelRecord::new();

    for child in model_element.children() {
        match ModelTag::from_local_name(child.local_name()) {
            ModelTag::Location => parse_location(child, output),
            ModelTag::Orientation => parse_orientation(child, &mut record),
            ModelTag::Scale => parse_scale(child, &mut record),
            ModelTag::AltitudeMode => parse_alt_mode(child, &mut record),
            ModelTag::Link => parse_link(placemark, child, &mut record),
            ModelTag::Unknown => {
                log::trace!("Ignoring unknown Model child <{}>", child.name());
            }
        }
    }

    record.images = placemark.assets.images();
    output.model = Some(record);
}

/// Build a point from a `Location` element and store it as the feature geometry
///
/// Missing `longitude`, `latitude` or `altitude` children leave that
/// coordinate undefined.
pub fn parse_location(location: &Element, output: &mut Feature) {
    let mut longitude = None;
    let mut latitude = None;
    let mut altitude = None;

    for child in location.children() {
        match child.local_name() {
            "longitude" => longitude = Some(parse_float(&child.text_content())),
            "latitude" => latitude = Some(parse_float(&child.text_content())),
            "altitude" => altitude = Some(parse_float(&child.text_content())),
            _ => {}
        }
    }

    output.geometry = Some(Point::new(longitude, latitude, altitude));
}

/// Read `heading`, `tilt` and `roll` from an `Orientation` element
pub fn parse_orientation(orientation: &Element, record: &mut ModelRecord) {
    for child in orientation.children() {
        let field = match child.local_name() {
            "heading" => &mut record.heading,
            "tilt" => &mut record.tilt,
            "roll" => &mut record.roll,
            _ => continue,
        };
        *field = Some(parse_float(&child.text_content()));
    }
}

/// Read `x`, `y` and `z` from a `Scale` element
pub fn parse_scale(scale: &Element, record: &mut ModelRecord) {
    for child in scale.children() {
        let field = match child.local_name() {
            "x" => &mut record.scale_x,
            "y" => &mut record.scale_y,
            "z" => &mut record.scale_z,
            _ => continue,
        };
        *field = Some(parse_float(&child.text_content()));
    }
}

/// Read an `altitudeMode` element
///
/// Only the exact text `relativeToGround` is distinguished; everything else,
/// `absolute` included, maps to clamp-to-ground.
pub fn parse_alt_mode(alt_mode: &Element, record: &mut ModelRecord) {
    record.altitude_mode = Some(AltitudeMode::from_kml(&alt_mode.text_content()));
}

/// Resolve a `Link` element against the placemark's assets
///
/// The filename is the text of the link's first child element, whatever its
/// tag (normally `href`). The name is looked up verbatim; when it is missing
/// from the asset map `collada` stays unset.
pub fn parse_link(placemark: Placemark<'_>, link: &Element, record: &mut ModelRecord) {
    let Some(first) = link.child(0) else {
        log::debug!("Model Link has no child element; no COLLADA reference");
        return;
    };

    let filename = first.text_content();
    match placemark.assets.get(&filename) {
        Some(data) => record.collada = Some(data.clone()),
        None => log::debug!("Model Link references '{}' which is not bundled", filename),
    }
}
