//! `.cube` text serialization and delivery-filename derivation.

use std::fmt::Write as _;

use crate::error::SerializeError;
use crate::lut::Lut3D;

/// Typical bytes per data line, used to presize the output buffer.
const LINE_ESTIMATE: usize = 32;

/// Serialize a LUT into the `.cube` text format.
///
/// The output is a `TITLE "<title>"` line, a `LUT_3D_SIZE <n>` line,
/// then one line per grid entry in storage order (red slowest, blue
/// fastest). Each channel is formatted with exactly six digits after
/// the decimal point, rounded half-to-even, with a `.` decimal
/// separator regardless of locale.
///
/// The title is embedded verbatim; it must be non-empty after
/// trimming, which is re-checked here even though request validation
/// already rejects blank titles.
pub fn to_cube(lut: &Lut3D, title: &str) -> Result<String, SerializeError> {
    if title.trim().is_empty() {
        return Err(SerializeError::EmptyTitle);
    }
    let expected = lut.entry_count();
    if lut.data.len() != expected {
        return Err(SerializeError::GridSizeMismatch {
            size: lut.size,
            expected,
            found: lut.data.len(),
        });
    }

    let mut out = String::with_capacity(expected * LINE_ESTIMATE + 64);
    // Writing into a String cannot fail.
    let _ = writeln!(out, "TITLE \"{title}\"");
    let _ = writeln!(out, "LUT_3D_SIZE {}", lut.size);
    for [r, g, b] in &lut.data {
        let _ = writeln!(out, "{r:.6} {g:.6} {b:.6}");
    }
    Ok(out)
}

/// Derive a file base name from a LUT title.
///
/// Space characters (only) become underscores; no other escaping.
pub fn file_base_name(title: &str) -> String {
    title.replace(' ', "_")
}

/// Suggested delivery filename for a LUT with this title.
pub fn suggested_filename(title: &str) -> String {
    format!("{}.cube", file_base_name(title))
}
