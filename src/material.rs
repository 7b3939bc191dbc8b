//! Materials-property extraction from fixed-column blocks.
//!
//! A block describes one material:
//!
//! - Line 0: header. Positions are fixed:
//!   - id: first token of the line
//!   - Column 15: atomic weight (first token from there; negative means unknown)
//!   - Column 53: density (first token from there)
//!   - Column 64: phase code (see [`Phase`])
//!   - Column 67: number of element lines (one digit)
//!   - Column 75: material type code (see [`MaterialType`])
//! - Line 1: name line. For elements the first token is the chemical symbol;
//!   the name itself starts at column 6.
//! - Line 2 and the `num_elements` lines after it: stoichiometry, not extracted.
//! - Remaining lines: trailer (melting point, boiling point, index of
//!   refraction, free-text notes).
//!
//! Unlike paper records, nothing here is tolerated: any malformed column is an
//! error and stops the run.

use crate::columns::{
    char_at, char_len, digit_at, first_token, float_at, from_column, leading_spaces,
};
use crate::error::{ExtractError, Result};
use crate::material_codes::{MaterialType, Phase};
use serde::{Deserialize, Serialize};

/// Column of the atomic weight in the header line.
pub const ATOMIC_WEIGHT_COLUMN: usize = 15;
/// Column of the density in the header line.
pub const DENSITY_COLUMN: usize = 53;
/// Column of the phase code in the header line.
pub const PHASE_COLUMN: usize = 64;
/// Column of the element-count digit in the header line.
pub const ELEMENT_COUNT_COLUMN: usize = 67;
/// Column of the material type code in the header line.
pub const TYPE_COLUMN: usize = 75;

/// Column where the material name starts on the name line.
pub const NAME_COLUMN: usize = 6;

/// Trailer lines begin this many lines after the header, plus one per element.
pub const TRAILER_OFFSET: usize = 3;
/// Value column for melting point, boiling point and index of refraction.
pub const TRAILER_VALUE_COLUMN: usize = 25;
/// Melting-point lines shorter than this use [`SHORT_MELTING_COLUMN`].
pub const SHORT_MELTING_LINE: usize = 30;
/// Value column of the truncated melting-point line variant.
pub const SHORT_MELTING_COLUMN: usize = 10;
/// Column where note text starts.
pub const NOTES_COLUMN: usize = 6;
/// Lines indented at least this far continue the notes.
pub const CONTINUATION_INDENT: usize = 5;

/// Value written in place of extracted notes text.
pub const NOTES_PLACEHOLDER: &str = "See source data for notes";

const MELTING_PREFIX: &str = "melti";
const BOILING_PREFIX: &str = "boili";
const REFRACTION_PREFIX: &str = "index";
const NOTES_PREFIX: &str = "note:";

/// Decoded header line of a material block.
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialHeader {
    /// First token of the line
    pub id: String,
    /// Atomic weight as written, possibly negative
    pub atomic_weight: f64,
    /// Density
    pub density: f64,
    /// Phase code - column 64
    pub phase: Phase,
    /// Number of element lines - column 67
    pub num_elements: usize,
    /// Material type code - column 75
    pub material_type: MaterialType,
}

impl MaterialHeader {
    /// Parse a header line.
    ///
    /// # Errors
    ///
    /// Returns an error if any fixed column is missing, a number does not
    /// parse, or a code character is not in its table.
    pub fn from_line(line: &str) -> Result<Self> {
        let id = first_token(line)
            .ok_or_else(|| ExtractError::InvalidFormat("empty header line".to_string()))?
            .to_string();

        let atomic_weight = float_at(line, ATOMIC_WEIGHT_COLUMN, "atomic_weight")?;
        let density = float_at(line, DENSITY_COLUMN, "density")?;
        let num_elements = digit_at(line, ELEMENT_COUNT_COLUMN, "element count")?;

        let type_code = char_at(line, TYPE_COLUMN).ok_or_else(|| {
            ExtractError::InvalidFormat(format!(
                "header for {id} has no type code at column {TYPE_COLUMN}"
            ))
        })?;
        let phase_code = char_at(line, PHASE_COLUMN).ok_or_else(|| {
            ExtractError::InvalidFormat(format!(
                "header for {id} has no phase code at column {PHASE_COLUMN}"
            ))
        })?;

        Ok(MaterialHeader {
            material_type: MaterialType::from_code(type_code)?,
            phase: Phase::from_code(phase_code)?,
            id,
            atomic_weight,
            density,
            num_elements,
        })
    }

    /// Index of the first trailer line in the block.
    #[must_use]
    pub fn trailer_start(&self) -> usize {
        TRAILER_OFFSET + self.num_elements
    }
}

/// One material's properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialRecord {
    /// Header id
    #[serde(rename = "_id")]
    pub id: String,
    /// Cleaned material name
    pub name: String,
    /// Material type
    #[serde(rename = "type")]
    pub material_type: MaterialType,
    /// Phase
    pub phase: Phase,
    /// Chemical symbol, only for elements
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chemical_symbol: Option<String>,
    /// Atomic weight; absent when the source gives a negative value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub atomic_weight: Option<f64>,
    /// Density
    pub density: f64,
    /// Melting point
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub melting_point: Option<f64>,
    /// Boiling point
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boiling_point: Option<f64>,
    /// Index of refraction
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index_of_refraction: Option<f64>,
    /// Set to [`NOTES_PLACEHOLDER`] when the block has notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Parse one material block.
///
/// `lines` holds exactly one block: header, name line, stoichiometry lines,
/// then optional trailer lines. Block delimiters must already be removed.
///
/// # Errors
///
/// Returns an error for a missing header or name line, any malformed header
/// column, an unknown type or phase code, or an unparsable trailer value.
pub fn parse_material<S: AsRef<str>>(lines: &[S]) -> Result<MaterialRecord> {
    let header_line: &str = lines
        .first()
        .map(AsRef::as_ref)
        .ok_or_else(|| ExtractError::InvalidFormat("empty material block".to_string()))?;
    let header = MaterialHeader::from_line(header_line)?;

    let name_line: &str = lines.get(1).map(AsRef::as_ref).ok_or_else(|| {
        ExtractError::InvalidFormat(format!("material {} has no name line", header.id))
    })?;

    let chemical_symbol = if header.material_type.is_element() {
        let symbol = first_token(name_line).ok_or_else(|| {
            ExtractError::InvalidFormat(format!(
                "element {} has no chemical symbol",
                header.id
            ))
        })?;
        Some(symbol.to_string())
    } else {
        None
    };

    let mut record = MaterialRecord {
        name: clean_name(from_column(name_line, NAME_COLUMN)),
        material_type: header.material_type,
        phase: header.phase,
        chemical_symbol,
        atomic_weight: Some(header.atomic_weight),
        density: header.density,
        melting_point: None,
        boiling_point: None,
        index_of_refraction: None,
        notes: None,
        id: header.id.clone(),
    };

    let mut notes: Vec<&str> = Vec::new();
    for line in lines.iter().skip(header.trailer_start()) {
        let line = line.as_ref();
        let lower = line.to_lowercase();

        if lower.starts_with(MELTING_PREFIX) {
            let column = if char_len(line) < SHORT_MELTING_LINE {
                SHORT_MELTING_COLUMN
            } else {
                TRAILER_VALUE_COLUMN
            };
            record.melting_point = Some(float_at(line, column, "melting_point")?);
        } else if lower.starts_with(BOILING_PREFIX) {
            record.boiling_point = Some(float_at(line, TRAILER_VALUE_COLUMN, "boiling_point")?);
        } else if lower.starts_with(REFRACTION_PREFIX) {
            record.index_of_refraction = Some(float_at(
                line,
                TRAILER_VALUE_COLUMN,
                "index_of_refraction",
            )?);
        } else if lower.starts_with(NOTES_PREFIX) || leading_spaces(line) >= CONTINUATION_INDENT {
            notes.push(from_column(line, NOTES_COLUMN).trim());
        }
    }

    if !notes.is_empty() {
        // The escaped text is not published; records carry the placeholder.
        let escaped = escape_notes(&notes.join(" "));
        tracing::trace!(id = %record.id, notes = %escaped.trim(), "notes replaced by placeholder");
        record.notes = Some(NOTES_PLACEHOLDER.to_string());
    }

    if record.atomic_weight.is_some_and(|w| w < 0.0) {
        record.atomic_weight = None;
    }

    Ok(record)
}

/// Clean a raw name field.
///
/// While any whitespace-separated token contains `#`, the last token is
/// dropped. Then every `=` becomes the word `equals`.
///
/// ```
/// use srcrec::material::clean_name;
/// assert_eq!(clean_name("Sodium ### Chloride"), "Sodium");
/// assert_eq!(clean_name("Water (H2O=1)"), "Water (H2Oequals1)");
/// ```
#[must_use]
pub fn clean_name(raw: &str) -> String {
    let mut name = raw.trim().to_string();
    while name.contains('#') {
        let mut tokens: Vec<&str> = name.split_whitespace().collect();
        tokens.pop();
        name = tokens.join(" ");
    }
    name.replace('=', "equals")
}

/// Escape backslashes, angle brackets and `=` in notes text.
#[must_use]
pub fn escape_notes(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '=' => escaped.push_str("&#61;"),
            other => escaped.push(other),
        }
    }
    escaped
}
