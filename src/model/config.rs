//! Configuration for loading KML and KMZ documents

/// Configuration for loading KML and KMZ documents
///
/// Only archive handling is configurable. Extraction of `Model` data itself
/// has no knobs.
///
/// # Example
///
/// ```
/// use kml_model::ParserConfig;
///
/// let config = ParserConfig::new().with_max_asset_size(16 * 1024 * 1024);
/// assert_eq!(config.max_asset_size(), Some(16 * 1024 * 1024));
/// assert!(config.collect_assets());
/// ```
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Entries above this many uncompressed bytes are not loaded
    max_asset_size: Option<u64>,
    /// Whether bundled KMZ files are read into the asset map at all
    collect_assets: bool,
}

impl ParserConfig {
    /// Create the default configuration: all assets loaded, no size cap
    pub fn new() -> Self {
        Self {
            max_asset_size: None,
            collect_assets: true,
        }
    }

    /// Skip archive entries larger than `bytes` when building the asset map
    pub fn with_max_asset_size(mut self, bytes: u64) -> Self {
        self.max_asset_size = Some(bytes);
        self
    }

    /// Do not read bundled files; every placemark sees an empty asset map
    pub fn without_assets(mut self) -> Self {
        self.collect_assets = false;
        self
    }

    /// Per-entry size cap, if any
    pub fn max_asset_size(&self) -> Option<u64> {
        self.max_asset_size
    }

    /// Whether bundled files are loaded
    pub fn collect_assets(&self) -> bool {
        self.collect_assets
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ParserConfig::default();
        assert_eq!(config.max_asset_size(), None);
        assert!(config.collect_assets());
    }

    #[test]
    fn test_builder() {
        let config = ParserConfig::new().with_max_asset_size(10).without_assets();
        assert_eq!(config.max_asset_size(), Some(10));
        assert!(!config.collect_assets());
    }
}
