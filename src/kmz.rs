//! KMZ archive handling
//!
//! A KMZ file is a ZIP archive holding one main KML document plus the files it
//! references (COLLADA models, textures, icons). The main document is
//! `doc.kml` at the archive root when present, otherwise the first `.kml`
//! entry in archive order.

use crate::error::{Error, Result};
use crate::model::{AssetMap, ParserConfig};
use std::io::Read;
use zip::ZipArchive;

/// Conventional name of the main document inside a KMZ archive
pub const DOCUMENT_PATH: &str = "doc.kml";

/// Extension of KML documents
pub const KML_EXTENSION: &str = ".kml";

/// Leading bytes of a ZIP local file header
pub const ZIP_MAGIC: &[u8; 4] = b"PK\x03\x04";

/// Check whether `data` starts like a ZIP (and so KMZ) file
pub fn is_kmz(data: &[u8]) -> bool {
    data.starts_with(ZIP_MAGIC)
}

/// An opened KMZ archive
pub struct KmzArchive<R: Read> {
    archive: ZipArchive<R>,
}

impl<R: Read + std::io::Seek> KmzArchive<R> {
    /// Open a KMZ archive from a reader
    pub fn open(reader: R) -> Result<Self> {
        let archive = ZipArchive::new(reader)?;
        Ok(Self { archive })
    }

    /// Path of the main KML document inside the archive
    pub fn document_path(&mut self) -> Result<String> {
        if self.has_file(DOCUMENT_PATH) {
            return Ok(DOCUMENT_PATH.to_string());
        }

        self.file_names()
            .into_iter()
            .find(|name| is_kml_name(name))
            .ok_or_else(|| {
                Error::MissingFile("KMZ archive contains no .kml document".to_string())
            })
    }

    /// Text of the main KML document
    pub fn document(&mut self) -> Result<String> {
        let path = self.document_path()?;
        self.get_file(&path)
    }

    /// Load every bundled file except the main document
    ///
    /// Entries are keyed by their full path inside the archive. Directories
    /// are skipped, as are files larger than the configured size cap.
    pub fn assets(&mut self, config: &ParserConfig) -> Result<AssetMap> {
        let mut assets = AssetMap::new();
        if !config.collect_assets() {
            return Ok(assets);
        }

        let document_path = self.document_path()?;

        for i in 0..self.archive.len() {
            let mut file = self.archive.by_index(i)?;
            if file.is_dir() {
                continue;
            }

            let name = file.name().to_string();
            if name == document_path {
                continue;
            }

            let limit = config.max_asset_size();
            if let Some(limit) = limit {
                if file.size() > limit {
                    log::warn!(
                        "Skipping KMZ entry '{}': {} bytes exceeds limit of {} bytes",
                        name,
                        file.size(),
                        limit
                    );
                    continue;
                }
            }

            match read_entry(&mut file, limit)? {
                Some(content) => {
                    assets.insert(name, content);
                }
                None => log::warn!(
                    "Skipping KMZ entry '{}': content exceeds limit of {} bytes",
                    name,
                    limit.unwrap_or_default()
                ),
            }
        }

        log::debug!("Loaded {} assets from KMZ archive", assets.len());
        Ok(assets)
    }

    /// Get a file by name from the archive as UTF-8 text
    pub fn get_file(&mut self, name: &str) -> Result<String> {
        let mut file = self
            .archive
            .by_name(name)
            .map_err(|_| Error::MissingFile(name.to_string()))?;
        let mut content = String::new();
        file.read_to_string(&mut content)?;
        Ok(content)
    }

    /// Check if a file exists in the archive
    pub fn has_file(&mut self, name: &str) -> bool {
        self.archive.by_name(name).is_ok()
    }

    /// Get the number of entries in the archive
    pub fn len(&self) -> usize {
        self.archive.len()
    }

    /// Check if the archive is empty
    pub fn is_empty(&self) -> bool {
        self.archive.len() == 0
    }

    /// List all entry names in archive order
    pub fn file_names(&mut self) -> Vec<String> {
        (0..self.archive.len())
            .filter_map(|i| self.archive.by_index(i).ok().map(|f| f.name().to_string()))
            .collect()
    }
}

/// Read an entry's bytes, stopping once more than `limit` bytes arrive
///
/// The size declared in the archive header is not trusted for allocation,
/// the buffer grows with the data actually decompressed.
fn read_entry(mut reader: impl Read, limit: Option<u64>) -> Result<Option<Vec<u8>>> {
    let mut content = Vec::new();
    match limit {
        Some(limit) => {
            reader
                .take(limit.saturating_add(1))
                .read_to_end(&mut content)?;
            if content.len() as u64 > limit {
                return Ok(None);
            }
        }
        None => {
            reader.read_to_end(&mut content)?;
        }
    }
    Ok(Some(content))
}

fn is_kml_name(name: &str) -> bool {
    let (name, ext) = (name.as_bytes(), KML_EXTENSION.as_bytes());
    name.len() > ext.len() && name[name.len() - ext.len()..].eq_ignore_ascii_case(ext)
}
