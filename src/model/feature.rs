//! Placemark input and feature output

use super::asset::AssetMap;
use super::geometry::Point;
use super::record::ModelRecord;
use crate::xml::Element;

/// A placemark element together with the assets bundled with its document
///
/// Both parts are borrowed read-only; a single asset map is typically shared
/// by every placemark of a KMZ archive.
#[derive(Debug, Clone, Copy)]
pub struct Placemark<'a> {
    /// The `Placemark` XML element
    pub element: &'a Element,
    /// Files bundled alongside the document
    pub assets: &'a AssetMap,
}

impl<'a> Placemark<'a> {
    /// Pair a placemark element with its asset map
    pub fn new(element: &'a Element, assets: &'a AssetMap) -> Self {
        Self { element, assets }
    }
}

/// Parsed placemark output
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Feature {
    /// Placemark `name`, if present
    pub name: Option<String>,
    /// Point built from the model's `Location`
    pub geometry: Option<Point>,
    /// Model placement data
    pub model: Option<ModelRecord>,
}

impl Feature {
    /// Create an empty feature
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the placemark carried a `Model`
    pub fn has_model(&self) -> bool {
        self.model.is_some()
    }
}

/// A loaded KML or KMZ document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    /// One feature per `Placemark`, in document order
    pub features: Vec<Feature>,
    /// Files bundled with the document (empty for plain KML)
    pub assets: AssetMap,
    /// Whether the source was a KMZ archive
    pub is_kmz: bool,
}

impl Document {
    /// Features that carry a `Model`
    pub fn models(&self) -> impl Iterator<Item = &Feature> {
        self.features.iter().filter(|f| f.has_model())
    }
}
