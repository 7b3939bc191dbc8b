//! Reading source files into records.
//!
//! [`PaperReader`] handles the one-paper-per-file metadata format and
//! [`MaterialReader`] the dash-delimited materials format. Both accept plain
//! files or gzip-compressed files (`.gz` extension).
//!
//! Each file is opened, fully read and closed before parsing starts, so the
//! handle is released whether or not parsing succeeds. Processing stops at the
//! first error; nothing after it is read.
//!
//! # Examples
//!
//! ```no_run
//! use srcrec::{ExtractConfig, MaterialReader, PaperReader};
//!
//! let config = ExtractConfig::default();
//! let papers = PaperReader::new(config.clone())
//!     .read_paths(["metadata/0001.txt", "metadata/0002.txt"])?;
//! let materials = MaterialReader::new(config).read_path("materials.txt")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::boundary_scanner::MaterialBlockScanner;
use crate::config::ExtractConfig;
use crate::error::Result;
use crate::material::{parse_material, MaterialRecord};
use crate::paper::{parse_paper, PaperRecord};
use flate2::read::GzDecoder;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Read a whole source file as text.
///
/// Files ending in `.gz` are decompressed. Invalid UTF-8 is replaced rather
/// than rejected.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read.
pub fn read_source(path: &Path) -> Result<String> {
    let file = File::open(path)?;
    let is_gzip = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"));

    let mut reader: Box<dyn Read> = if is_gzip {
        Box::new(GzDecoder::new(BufReader::new(file)))
    } else {
        Box::new(BufReader::new(file))
    };

    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Reader for tagged-line paper metadata files.
#[derive(Debug)]
pub struct PaperReader {
    config: ExtractConfig,
    records_read: usize,
}

impl PaperReader {
    /// Create a new paper reader.
    #[must_use]
    pub fn new(config: ExtractConfig) -> Self {
        PaperReader {
            config,
            records_read: 0,
        }
    }

    /// Parse one paper from in-memory text.
    ///
    /// `name` is the file name the record id is derived from.
    ///
    /// # Errors
    ///
    /// Returns an error if the record has a fatal field error.
    pub fn read_str(&mut self, name: &str, text: &str) -> Result<PaperRecord> {
        let lines: Vec<&str> = text.lines().collect();
        let paper = parse_paper(name, &lines)?;
        self.records_read += 1;

        if self.config.verbose {
            tracing::info!(
                id = %paper.id,
                title = paper.title.as_deref().unwrap_or(""),
                journal = paper.journal_name.as_deref().unwrap_or(""),
                year = ?paper.date_year,
                authors = paper.authors.len(),
                "parsed paper"
            );
        }
        Ok(paper)
    }

    /// Parse the paper stored at `path`.
    ///
    /// The path, as given, is the name the record id is derived from.
    ///
    /// # Errors
    ///
    /// Returns an error, tagged with the path, if the file cannot be read or
    /// the record has a fatal field error.
    pub fn read_path(&mut self, path: impl AsRef<Path>) -> Result<PaperRecord> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "reading paper");
        let text = read_source(path).map_err(|e| e.with_path(path))?;
        self.read_str(&path.to_string_lossy(), &text)
            .map_err(|e| e.with_path(path))
    }

    /// Parse every path in order, stopping at the first failure.
    ///
    /// # Errors
    ///
    /// Returns the first error encountered; records parsed before it are
    /// discarded.
    pub fn read_paths<I, P>(&mut self, paths: I) -> Result<Vec<PaperRecord>>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        paths.into_iter().map(|path| self.read_path(path)).collect()
    }

    /// Number of papers parsed so far.
    #[must_use]
    pub fn records_read(&self) -> usize {
        self.records_read
    }
}

/// Reader for dash-delimited materials files.
#[derive(Debug)]
pub struct MaterialReader {
    config: ExtractConfig,
    scanner: MaterialBlockScanner,
    records_read: usize,
}

impl MaterialReader {
    /// Create a new materials reader.
    #[must_use]
    pub fn new(config: ExtractConfig) -> Self {
        MaterialReader {
            config,
            scanner: MaterialBlockScanner::new(),
            records_read: 0,
        }
    }

    /// Parse every block in `text`, in order.
    ///
    /// # Errors
    ///
    /// Returns the first block error; no later block is parsed.
    pub fn read_str(&mut self, text: &str) -> Result<Vec<MaterialRecord>> {
        let blocks = self.scanner.blocks(text);
        let mut materials = Vec::with_capacity(blocks.len());

        for block in &blocks {
            let material = parse_material(block)?;
            self.records_read += 1;

            if self.config.verbose {
                tracing::info!(
                    id = %material.id,
                    name = %material.name,
                    kind = %material.material_type,
                    phase = %material.phase,
                    density = material.density,
                    "parsed material"
                );
            }
            materials.push(material);
        }

        Ok(materials)
    }

    /// Parse the materials file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error, tagged with the path, if the file cannot be read or
    /// any block fails to parse.
    pub fn read_path(&mut self, path: impl AsRef<Path>) -> Result<Vec<MaterialRecord>> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "reading materials");
        let text = read_source(path).map_err(|e| e.with_path(path))?;
        self.read_str(&text).map_err(|e| e.with_path(path))
    }

    /// Number of materials parsed so far.
    #[must_use]
    pub fn records_read(&self) -> usize {
        self.records_read
    }
}
