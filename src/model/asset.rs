//! Binary assets bundled alongside a KML document

use std::collections::HashMap;
use std::sync::Arc;

/// Filename suffix of COLLADA model geometry. Matched case-sensitively.
pub const COLLADA_EXTENSION: &str = ".dae";

/// Raw payload of a bundled file
///
/// Payloads are shared, so copying an entry into a [`ModelRecord`](super::ModelRecord)
/// does not copy its bytes.
pub type AssetData = Arc<[u8]>;

/// Mapping from filename (as stored in the archive) to payload
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetMap {
    entries: HashMap<String, AssetData>,
}

impl AssetMap {
    /// Create an empty asset map
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a payload under `name`, returning the previous payload if any
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        data: impl Into<AssetData>,
    ) -> Option<AssetData> {
        self.entries.insert(name.into(), data.into())
    }

    /// Look up a payload by exact filename
    pub fn get(&self, name: &str) -> Option<&AssetData> {
        self.entries.get(name)
    }

    /// Check whether an entry exists for `name`
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the map has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(filename, payload)` pairs in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AssetData)> {
        self.entries.iter().map(|(name, data)| (name.as_str(), data))
    }

    /// Entries that are not COLLADA geometry, i.e. whose name does not end in `.dae`
    pub fn images(&self) -> HashMap<String, AssetData> {
        self.iter()
            .filter(|(name, _)| !name.ends_with(COLLADA_EXTENSION))
            .map(|(name, data)| (name.to_string(), Arc::clone(data)))
            .collect()
    }
}

impl<K: Into<String>, V: Into<AssetData>> FromIterator<(K, V)> for AssetMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = AssetMap::new();
        for (name, data) in iter {
            map.insert(name, data);
        }
        map
    }
}
