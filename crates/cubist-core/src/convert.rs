//! Byte-level conversion boundary: JSON document in, `.cube` text out.
//!
//! Hosts hand raw upload bytes to [`convert`] and get back the full
//! document text plus a suggested delivery filename. Conversion is
//! all-or-nothing: every failure path returns a descriptive error and
//! no partial output is ever produced. Each call is independent and
//! idempotent, so hosts may run conversions concurrently without
//! synchronization.

use crate::config::{ChannelMapping, DEFAULT_LUT_SIZE, LutConfig, RawRequest};
use crate::cube;
use crate::error::ConvertError;
use crate::lut::Lut3D;

/// Options for a conversion.
///
/// `Default` matches the upload flow: a 33³ grid with the shared
/// green/blue factor mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Grid size per axis.
    pub size: u32,
    /// How `colorBalance` entries map onto channel factors.
    pub mapping: ChannelMapping,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            size: DEFAULT_LUT_SIZE,
            mapping: ChannelMapping::default(),
        }
    }
}

/// A successful conversion: the document text and its delivery name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// Full `.cube` document text.
    pub document: String,
    /// Suggested filename (`<sanitized title>.cube`).
    pub filename: String,
}

/// Convert an uploaded JSON document with default options.
pub fn convert(bytes: &[u8]) -> Result<Conversion, ConvertError> {
    convert_with(bytes, ConvertOptions::default())
}

/// Convert an uploaded JSON document.
///
/// Pipeline: parse the bytes, validate the document into a
/// [`LutConfig`], generate the grid, serialize it. The error variant
/// tells the caller which stage rejected the input.
pub fn convert_with(bytes: &[u8], options: ConvertOptions) -> Result<Conversion, ConvertError> {
    let request: RawRequest = serde_json::from_slice(bytes)?;
    let config = LutConfig::from_request(&request, options.mapping)?;
    let lut = Lut3D::generate(&config.balance, options.size)?;
    let document = cube::to_cube(&lut, &config.title)?;
    let filename = cube::suggested_filename(&config.title);

    tracing::debug!(
        "generated {}³ LUT \"{}\" ({} bytes)",
        options.size,
        config.title,
        document.len()
    );
    Ok(Conversion { document, filename })
}
