//! JSON serialization and deserialization of extracted records.
//!
//! Records are written as a single JSON array. Paper arrays are compact by
//! default; material arrays are pretty-printed with a four-space indent.
//!
//! # Examples
//!
//! ```ignore
//! use srcrec::{json, paper::parse_paper};
//!
//! let paper = parse_paper("metadata/1.txt", &["T1  - Title"])?;
//! let text = json::papers_to_json(&[paper])?;
//! assert_eq!(text, r#"[{"_id":"1","title":"Title","authors":[]}]"#);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::config::OutputStyle;
use crate::error::Result;
use crate::material::MaterialRecord;
use crate::paper::PaperRecord;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::Write;

/// Indent used for pretty output.
pub const PRETTY_INDENT: &[u8] = b"    ";

/// Write `records` as one JSON array.
///
/// # Errors
///
/// Returns an error if serialization or the underlying write fails.
pub fn write_json_array<W: Write, T: Serialize>(
    writer: W,
    records: &[T],
    style: OutputStyle,
) -> Result<()> {
    match style {
        OutputStyle::Compact => serde_json::to_writer(writer, records)?,
        OutputStyle::Pretty => {
            let formatter = serde_json::ser::PrettyFormatter::with_indent(PRETTY_INDENT);
            let mut serializer = serde_json::Serializer::with_formatter(writer, formatter);
            records.serialize(&mut serializer)?;
        },
    }
    Ok(())
}

/// Render `records` as one JSON array string.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json_array<T: Serialize>(records: &[T], style: OutputStyle) -> Result<String> {
    match style {
        OutputStyle::Compact => Ok(serde_json::to_string(records)?),
        OutputStyle::Pretty => {
            let mut buffer = Vec::new();
            write_json_array(&mut buffer, records, style)?;
            Ok(String::from_utf8(buffer)?)
        },
    }
}

/// Compact JSON array of paper records.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn papers_to_json(papers: &[PaperRecord]) -> Result<String> {
    to_json_array(papers, OutputStyle::Compact)
}

/// Pretty JSON array of material records.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn materials_to_json(materials: &[MaterialRecord]) -> Result<String> {
    to_json_array(materials, OutputStyle::Pretty)
}

/// Parse a JSON array of records.
///
/// # Errors
///
/// Returns an error if the text is not a JSON array of the expected records.
pub fn from_json_array<T: DeserializeOwned>(text: &str) -> Result<Vec<T>> {
    Ok(serde_json::from_str(text)?)
}

/// Parse a JSON array of paper records.
///
/// # Errors
///
/// Returns an error if the text is not a JSON array of paper records.
pub fn papers_from_json(text: &str) -> Result<Vec<PaperRecord>> {
    from_json_array(text)
}

/// Parse a JSON array of material records.
///
/// # Errors
///
/// Returns an error if the text is not a JSON array of material records.
pub fn materials_from_json(text: &str) -> Result<Vec<MaterialRecord>> {
    from_json_array(text)
}
