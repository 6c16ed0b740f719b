//! Typed configuration parsed from the uploaded JSON document.
//!
//! The document shape is
//! `{ "name": ..., "data": { "s": { "colorBalance": [...] } } }`.
//! [`RawRequest`] mirrors that shape loosely (every field optional,
//! unknown fields ignored); [`LutConfig::from_request`] performs all
//! required-field validation in a single pass so every failure is one
//! well-defined [`ConfigError`] instead of a scattered key lookup.

use serde::Deserialize;
use serde_json::Value;

use crate::error::ConfigError;

/// Grid resolution used for every conversion. Not derived from input.
pub const DEFAULT_LUT_SIZE: u32 = 33;

/// How `colorBalance` entries map onto the three channel factors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChannelMapping {
    /// Blue reuses the green factor (entry 1). Matches the grading
    /// files this tool was built against; the default.
    #[default]
    SharedGreenBlue,
    /// Blue gets its own factor (entry 2). Requires three entries.
    PerChannel,
}

impl ChannelMapping {
    /// Number of leading `colorBalance` entries consumed.
    pub const fn entries_consumed(self) -> usize {
        match self {
            Self::SharedGreenBlue => 2,
            Self::PerChannel => 3,
        }
    }
}

/// Per-channel linear scale factors, resolved from the raw entries.
///
/// No bounds are enforced. Negative or greater-than-one factors are
/// allowed and intentionally produce out-of-range samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorBalance {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

impl ColorBalance {
    /// Scale a normalized RGB sample by the per-channel factors.
    pub fn apply(&self, rgb: [f64; 3]) -> [f64; 3] {
        [rgb[0] * self.red, rgb[1] * self.green, rgb[2] * self.blue]
    }

    /// Resolve raw `colorBalance` entries into channel factors.
    ///
    /// Only the entries the mapping consumes are inspected; trailing
    /// entries are ignored.
    pub fn from_entries(entries: &[Value], mapping: ChannelMapping) -> Result<Self, ConfigError> {
        let needed = mapping.entries_consumed();
        if entries.len() < needed {
            return Err(ConfigError::NotEnoughBalanceEntries {
                needed,
                found: entries.len(),
            });
        }

        let mut factors = [0.0_f64; 3];
        for (index, value) in entries.iter().take(needed).enumerate() {
            factors[index] = value
                .as_f64()
                .ok_or(ConfigError::NonNumericBalanceEntry { index })?;
        }

        let blue = match mapping {
            ChannelMapping::SharedGreenBlue => factors[1],
            ChannelMapping::PerChannel => factors[2],
        };
        Ok(Self {
            red: factors[0],
            green: factors[1],
            blue,
        })
    }
}

/// Loosely-typed mirror of the uploaded document.
///
/// Deserialization only fails on malformed JSON; missing fields stay
/// `None` and surface later as [`ConfigError`]s with field names.
#[derive(Debug, Deserialize)]
pub struct RawRequest {
    pub name: Option<String>,
    pub data: Option<RawData>,
}

/// The `data` object of the uploaded document.
#[derive(Debug, Deserialize)]
pub struct RawData {
    pub s: Option<RawSettings>,
}

/// The `data.s` settings object of the uploaded document.
#[derive(Debug, Deserialize)]
pub struct RawSettings {
    /// Kept as raw JSON values so a non-numeric entry is reported as a
    /// validation error with its index, not a parse failure.
    #[serde(rename = "colorBalance")]
    pub color_balance: Option<Vec<Value>>,
}

/// A validated conversion request.
#[derive(Debug, Clone, PartialEq)]
pub struct LutConfig {
    /// Display title, embedded verbatim in the `.cube` header.
    pub title: String,
    /// Resolved per-channel scale factors.
    pub balance: ColorBalance,
}

impl LutConfig {
    /// Validate a raw document into a usable config.
    ///
    /// All required-field checks happen here, once, so later pipeline
    /// stages cannot fail on missing input. The title must be
    /// non-empty after trimming but is stored untrimmed.
    pub fn from_request(
        request: &RawRequest,
        mapping: ChannelMapping,
    ) -> Result<Self, ConfigError> {
        let title = request.name.as_deref().ok_or(ConfigError::MissingName)?;
        if title.trim().is_empty() {
            return Err(ConfigError::EmptyName);
        }

        let entries = request
            .data
            .as_ref()
            .and_then(|data| data.s.as_ref())
            .and_then(|s| s.color_balance.as_ref())
            .ok_or(ConfigError::MissingColorBalance)?;
        let balance = ColorBalance::from_entries(entries, mapping)?;

        Ok(Self {
            title: title.to_string(),
            balance,
        })
    }
}
