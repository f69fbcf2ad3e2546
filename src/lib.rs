//! # kml_model
//!
//! A pure Rust extractor for 3D model placements in KML and KMZ files.
//!
//! KML placemarks may carry a `Model` element describing where and how a
//! COLLADA model should be drawn: its location, orientation, scale and
//! altitude mode, plus a `Link` to the model file. In a KMZ archive the model
//! and its textures are bundled alongside the document. This crate reads
//! those placements into typed records and routes the bundled payloads to
//! them, without decoding COLLADA or image data.
//!
//! ## Features
//!
//! - Pure Rust implementation with no unsafe code
//! - Reads plain KML text and KMZ (ZIP) archives
//! - Permissive extraction: missing or malformed model data never fails the parse
//!
//! ## Example
//!
//! ```no_run
//! use kml_model::Document;
//! use std::fs::File;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let file = File::open("tower.kmz")?;
//! let document = Document::from_reader(file)?;
//!
//! for feature in document.models() {
//!     let model = feature.model.as_ref().unwrap();
//!     println!(
//!         "{:?}: heading {:?}, {} textures",
//!         feature.name,
//!         model.heading,
//!         model.images.len()
//!     );
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Callers that own their own placemark handling can use
//! [`parser::parse_model`] directly on an [`Element`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod kmz;
pub mod model;
pub mod parser;
pub mod xml;

pub use error::{Error, Result};
pub use model::{
    AltitudeMode, AssetData, AssetMap, Document, Feature, ModelRecord, ParserConfig, Placemark,
    Point,
};
pub use xml::Element;

use std::io::Read;

impl Document {
    /// Load a KML or KMZ document from a reader
    ///
    /// KMZ archives are recognized by their ZIP signature; anything else is
    /// read as KML text.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use kml_model::Document;
    /// use std::fs::File;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let document = Document::from_reader(File::open("tower.kmz")?)?;
    /// println!("{} placemarks", document.features.len());
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        parser::parse_kml(reader)
    }

    /// Load a KML or KMZ document from a reader with custom configuration
    ///
    /// # Example
    ///
    /// ```no_run
    /// use kml_model::{Document, ParserConfig};
    /// use std::fs::File;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let config = ParserConfig::new().with_max_asset_size(64 * 1024 * 1024);
    /// let document = Document::from_reader_with_config(File::open("city.kmz")?, config)?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_reader_with_config<R: Read>(reader: R, config: ParserConfig) -> Result<Self> {
        parser::parse_kml_with_config(reader, config)
    }

    /// Parse KML text; placemarks see an empty asset map
    pub fn from_kml_str(xml: &str) -> Result<Self> {
        parser::parse_kml_str(xml)
    }
}
