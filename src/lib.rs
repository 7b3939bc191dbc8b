#![warn(missing_docs)]

//! # srcrec: source record extraction
//!
//! Converts two fixed-format text record formats into structured records that
//! serialize to JSON:
//!
//! - **Paper metadata**: one paper per file, one tagged line per field
//!   (`T1  - Title`, `AU  - Author`, ...).
//! - **Material properties**: many materials per file, separated by dash
//!   lines, each a fixed-column header plus name and trailer lines.
//!
//! ## Quick Start
//!
//! ```ignore
//! use srcrec::{json, ExtractConfig, MaterialReader, PaperReader};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ExtractConfig::default();
//!
//! let papers = PaperReader::new(config.clone()).read_paths(["metadata/0001.txt"])?;
//! println!("{}", json::papers_to_json(&papers)?);
//!
//! let materials = MaterialReader::new(config).read_path("materials.txt")?;
//! println!("{}", json::materials_to_json(&materials)?);
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`paper`] — Tagged-line paper extraction (`PaperRecord`)
//! - [`material`] — Fixed-column material extraction (`MaterialRecord`)
//! - [`material_codes`] — Material type and phase code tables
//! - [`columns`] — Fixed-column slicing helpers
//! - [`boundary_scanner`] — Dash-delimited block detection
//! - [`reader`] — File readers for both formats
//! - [`json`] — JSON array output and parsing
//! - [`config`] — Run configuration
//! - [`error`] — Error types and result type
//!
//! ## Error policy
//!
//! Paper page numbers (`SP`, `EP`) that are not integers are dropped and the
//! record continues. Every other problem, in either format, is an error that
//! stops processing.

pub mod boundary_scanner;
pub mod columns;
pub mod config;
pub mod error;
pub mod json;
pub mod material;
pub mod material_codes;
pub mod paper;
pub mod reader;

pub use boundary_scanner::MaterialBlockScanner;
pub use config::{ExtractConfig, OutputStyle};
pub use error::{ExtractError, Result};
pub use material::{parse_material, MaterialHeader, MaterialRecord};
pub use material_codes::{MaterialType, Phase};
pub use paper::{parse_paper, PaperRecord};
pub use reader::{MaterialReader, PaperReader};
