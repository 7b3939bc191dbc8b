//! Bibliographic metadata extraction from tagged-line paper records.
//!
//! Each paper file holds one record. Every line starts with a two-letter tag,
//! and the value begins at column 5:
//!
//! ```text
//! T1  - On the Electrodynamics of Moving Bodies
//! AU  - Einstein, A.
//! JF  - Annalen der Physik
//! VL  - 322
//! SP  - 891
//! EP  - 921
//! PY  - 1905/06/30/
//! ```
//!
//! Page numbers tolerate junk (`SP  - N/A` simply leaves the field unset).
//! Every other conversion failure is fatal for the record.

use crate::columns::from_column;
use crate::error::{ExtractError, Result};
use chrono::{Datelike, NaiveDate};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Column where a tag's value starts.
pub const VALUE_COLUMN: usize = 5;

/// Prefix stripped from file names when deriving record ids.
pub const ID_PATH_PREFIX: &str = "metadata/";

/// Layout of the `PY` value.
pub const DATE_FORMAT: &str = "%Y/%m/%d/";

lazy_static! {
    // exactly four year digits; chrono's %Y alone also takes short and signed years
    static ref DATE_LAYOUT: Regex =
        Regex::new(r"^[0-9]{4}/[0-9]{1,2}/[0-9]{1,2}/$").expect("valid date pattern");
}

const TAG_TITLE: &str = "T1";
const TAG_JOURNAL: &str = "JF";
const TAG_VOLUME: &str = "VL";
const TAG_START_PAGE: &str = "SP";
const TAG_END_PAGE: &str = "EP";
const TAG_DATE: &str = "PY";
const TAG_URL: &str = "UR";
const TAG_DOI: &str = "M3";
const TAG_AUTHOR: &str = "AU";

/// One paper's bibliographic metadata.
///
/// Optional fields are omitted from JSON when absent; `authors` is always
/// written, even when empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperRecord {
    /// Identifier derived from the source file name.
    #[serde(rename = "_id")]
    pub id: String,
    /// Title (`T1`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Journal name (`JF`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub journal_name: Option<String>,
    /// Volume number (`VL`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<i64>,
    /// First page (`SP`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_page: Option<i64>,
    /// Last page (`EP`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_page: Option<i64>,
    /// `end_page - start_page`, set only when both are known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_length: Option<i64>,
    /// Publication year (`PY`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_year: Option<i32>,
    /// Publication month (`PY`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_month: Option<u32>,
    /// DOI resolver URL (`UR`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doi_url: Option<String>,
    /// Bare DOI (`M3`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,
    /// Authors in file order (`AU`, repeatable)
    #[serde(default)]
    pub authors: Vec<String>,
}

impl PaperRecord {
    /// Create an empty record with the given id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        PaperRecord {
            id: id.into(),
            ..Default::default()
        }
    }
}

/// Derive a record id from a source file name.
///
/// A leading `metadata/` is removed, then everything from the first `.` on.
///
/// ```
/// use srcrec::paper::record_id;
/// assert_eq!(record_id("metadata/0001234.txt"), "0001234");
/// assert_eq!(record_id("0001234.txt"), "0001234");
/// ```
#[must_use]
pub fn record_id(name: &str) -> String {
    let stem = name.strip_prefix(ID_PATH_PREFIX).unwrap_or(name);
    stem.split('.').next().unwrap_or_default().to_string()
}

/// Parse one paper record from its lines.
///
/// `name` is the source file name and only feeds [`record_id`].
///
/// # Errors
///
/// Returns [`ExtractError::InvalidDate`] for a `PY` value that is not a valid
/// `YYYY/MM/DD/` date and [`ExtractError::InvalidNumber`] for a non-integer
/// `VL` value.
pub fn parse_paper<S: AsRef<str>>(name: &str, lines: &[S]) -> Result<PaperRecord> {
    let mut paper = PaperRecord::new(record_id(name));

    for line in lines {
        let line = line.as_ref();
        let Some(tag) = line.get(..2) else {
            continue;
        };
        let value = from_column(line, VALUE_COLUMN).trim();

        match tag {
            TAG_TITLE => paper.title = Some(value.to_string()),
            TAG_JOURNAL => paper.journal_name = Some(value.to_string()),
            TAG_VOLUME => paper.volume = Some(parse_int(value, "volume")?),
            TAG_START_PAGE => {
                if let Ok(page) = value.parse() {
                    paper.start_page = Some(page);
                }
            },
            TAG_END_PAGE => {
                if let Ok(page) = value.parse() {
                    paper.end_page = Some(page);
                }
            },
            TAG_DATE => {
                let (year, month) = parse_date(value)?;
                paper.date_year = Some(year);
                paper.date_month = Some(month);
            },
            TAG_URL => paper.doi_url = Some(value.to_string()),
            TAG_DOI => paper.doi = Some(value.to_string()),
            TAG_AUTHOR => paper.authors.push(value.to_string()),
            _ => {},
        }
    }

    if let (Some(start), Some(end)) = (paper.start_page, paper.end_page) {
        paper.page_length = Some(end - start);
    }

    Ok(paper)
}

/// Parse a `YYYY/MM/DD/` date into `(year, month)`.
///
/// The year must be exactly four digits. Years before 1900 are accepted; the
/// day is validated but not kept.
///
/// # Errors
///
/// Returns [`ExtractError::InvalidDate`] if the text does not match or names an
/// impossible calendar date.
pub fn parse_date(value: &str) -> Result<(i32, u32)> {
    if !DATE_LAYOUT.is_match(value) {
        return Err(ExtractError::InvalidDate(value.to_string()));
    }
    let date = NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|_| ExtractError::InvalidDate(value.to_string()))?;
    Ok((date.year(), date.month()))
}

fn parse_int(value: &str, field: &'static str) -> Result<i64> {
    value.parse().map_err(|_| ExtractError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}
