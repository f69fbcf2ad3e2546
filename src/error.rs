//! Error types for KML and KMZ loading
//!
//! Errors only come from reading the container and the XML document. Extracting
//! `Model` data from an already parsed tree never fails; malformed model content
//! is tolerated and surfaces as absent fields or `NaN` values instead.
//!
//! # Error Codes
//!
//! Error codes follow the pattern: `E<category><number>`
//!
//! Categories:
//! - **E1xxx**: I/O and archive errors
//! - **E2xxx**: XML parsing and structure errors
//!
//! ## Error Codes
//!
//! - `E1001`: I/O error reading file
//! - `E1002`: ZIP archive format error
//! - `E1003`: Missing required file in archive
//! - `E2001`: XML parsing error
//! - `E2003`: Invalid XML structure
//! - `E2004`: Invalid KML/KMZ format

use std::io;
use thiserror::Error;

/// Result type for KML operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when loading KML or KMZ files
#[derive(Error, Debug)]
pub enum Error {
    /// IO error occurred while reading the file
    ///
    /// **Error Code**: E1001
    #[error("[E1001] I/O error: {0}")]
    Io(#[from] io::Error),

    /// ZIP archive error
    ///
    /// **Error Code**: E1002
    ///
    /// **Common Causes**:
    /// - Corrupted KMZ file
    /// - Unsupported compression method
    /// - Truncated archive
    #[error("[E1002] ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// Missing required file in the KMZ archive
    ///
    /// **Error Code**: E1003
    ///
    /// **Common Causes**:
    /// - KMZ archive without any `.kml` entry
    /// - Lookup of an entry that does not exist
    #[error("[E1003] Missing required file: {0}")]
    MissingFile(String),

    /// XML parsing error
    ///
    /// **Error Code**: E2001
    ///
    /// **Common Causes**:
    /// - Malformed XML syntax
    /// - Invalid character encoding
    /// - Unclosed tags
    #[error("[E2001] XML parsing error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Invalid XML structure
    ///
    /// **Error Code**: E2003
    ///
    /// **Common Causes**:
    /// - Mismatched end tags
    /// - Document without a root element
    /// - Non UTF-8 names or text
    #[error("[E2003] Invalid XML structure: {0}")]
    InvalidXml(String),

    /// Invalid KML/KMZ format
    ///
    /// **Error Code**: E2004
    #[error("[E2004] Invalid KML format: {0}")]
    InvalidFormat(String),
}

impl From<quick_xml::events::attributes::AttrError> for Error {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        Error::InvalidXml(format!("Attribute parsing failed: {}", err))
    }
}

impl From<std::str::Utf8Error> for Error {
    fn from(err: std::str::Utf8Error) -> Self {
        Error::InvalidXml(format!("Invalid UTF-8: {}", err))
    }
}

impl Error {
    /// Create an InvalidXml error with element context
    ///
    /// # Arguments
    /// * `element` - The XML element name where the error occurred
    /// * `message` - Description of the error
    pub fn invalid_xml_element(element: &str, message: &str) -> Self {
        Error::InvalidXml(format!("Element '<{}>': {}", element, message))
    }

    /// Create an InvalidFormat error with context about what is invalid
    pub fn invalid_format_context(context: &str, message: &str) -> Self {
        Error::InvalidFormat(format!("{}: {}", context, message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_in_messages() {
        let io_err = Error::Io(io::Error::new(io::ErrorKind::NotFound, "test"));
        assert!(io_err.to_string().contains("[E1001]"));

        let missing_file = Error::MissingFile("doc.kml".to_string());
        assert!(missing_file.to_string().contains("[E1003]"));

        let invalid = Error::InvalidXml("bad".to_string());
        assert!(invalid.to_string().contains("[E2003]"));

        let format = Error::InvalidFormat("bad".to_string());
        assert!(format.to_string().contains("[E2004]"));
    }

    #[test]
    fn test_invalid_xml_element_helper() {
        let err = Error::invalid_xml_element("Placemark", "unexpected end tag");
        assert!(err.to_string().contains("Element '<Placemark>'"));
        assert!(err.to_string().contains("unexpected end tag"));
        assert!(err.to_string().contains("[E2003]"));
    }

    #[test]
    fn test_invalid_format_context_helper() {
        let err = Error::invalid_format_context("KML document", "not UTF-8");
        assert!(err.to_string().contains("KML document: not UTF-8"));
        assert!(err.to_string().contains("[E2004]"));
    }

    #[test]
    fn test_utf8_error_conversion() {
        let bytes = [0xffu8, 0xfe];
        let utf8_err = std::str::from_utf8(&bytes).unwrap_err();
        let err = Error::from(utf8_err);
        assert!(err.to_string().contains("Invalid UTF-8"));
        assert!(err.to_string().contains("[E2003]"));
    }
}
