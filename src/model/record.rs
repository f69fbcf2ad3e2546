//! Model placement record

use std::collections::HashMap;

use super::asset::AssetData;

/// How a model's altitude is interpreted
///
/// KML defines three modes, but `absolute` is treated like `clampToGround`:
/// only `relativeToGround` is distinguished.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum AltitudeMode {
    /// Altitude is ignored; the model sits on the terrain
    #[default]
    ClampToGround,
    /// Altitude is measured from the terrain surface
    RelativeToGround,
}

impl AltitudeMode {
    /// Map KML `altitudeMode` text to a mode
    ///
    /// The comparison is exact: surrounding whitespace or different casing
    /// falls back to [`AltitudeMode::ClampToGround`].
    pub fn from_kml(text: &str) -> Self {
        match text {
            "relativeToGround" => AltitudeMode::RelativeToGround,
            _ => AltitudeMode::ClampToGround,
        }
    }

    /// KML spelling of this mode
    pub fn as_kml(&self) -> &'static str {
        match self {
            AltitudeMode::ClampToGround => "clampToGround",
            AltitudeMode::RelativeToGround => "relativeToGround",
        }
    }
}

/// Placement data extracted from a KML `Model` element
///
/// Every field is optional and `None` means the source element was absent.
/// Numeric fields that were present but not numeric hold `NaN`; consumers
/// should treat those as invalid rather than trust them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModelRecord {
    /// Heading in degrees
    pub heading: Option<f64>,
    /// Tilt in degrees
    pub tilt: Option<f64>,
    /// Roll in degrees
    pub roll: Option<f64>,
    /// Scale along x
    pub scale_x: Option<f64>,
    /// Scale along y
    pub scale_y: Option<f64>,
    /// Scale along z
    pub scale_z: Option<f64>,
    /// Altitude mode, set whenever an `altitudeMode` element is present
    pub altitude_mode: Option<AltitudeMode>,
    /// COLLADA payload referenced by the model's `Link`
    pub collada: Option<AssetData>,
    /// Every bundled asset whose name does not end in `.dae`
    pub images: HashMap<String, AssetData>,
}

impl ModelRecord {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Orientation as `(heading, tilt, roll)`
    pub fn orientation(&self) -> (Option<f64>, Option<f64>, Option<f64>) {
        (self.heading, self.tilt, self.roll)
    }

    /// Scale as `(x, y, z)`
    pub fn scale(&self) -> (Option<f64>, Option<f64>, Option<f64>) {
        (self.scale_x, self.scale_y, self.scale_z)
    }
}
