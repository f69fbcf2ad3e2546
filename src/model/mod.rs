//! Data structures produced by KML model parsing

mod asset;
mod config;
mod feature;
mod geometry;
mod record;

pub use asset::{AssetData, AssetMap, COLLADA_EXTENSION};
pub use config::ParserConfig;
pub use feature::{Document, Feature, Placemark};
pub use geometry::Point;
pub use record::{AltitudeMode, ModelRecord};
