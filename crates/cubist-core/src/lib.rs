//! Cubist Core — color-balance to 3D LUT conversion.
//!
//! This crate holds the whole conversion pipeline: parsing and
//! validating the uploaded JSON document, generating the dense RGB
//! grid, and serializing it to `.cube` text. There is no file or
//! network I/O here; hosts feed bytes in and deliver the returned
//! text themselves.

pub mod config;
pub mod convert;
pub mod cube;
pub mod error;
pub mod lut;

// Re-exports for convenience.
pub use config::{ChannelMapping, ColorBalance, DEFAULT_LUT_SIZE, LutConfig};
pub use convert::{Conversion, ConvertOptions, convert, convert_with};
pub use error::{ConfigError, ConvertError, SerializeError};
pub use lut::Lut3D;
