//! Material block boundary detection.
//!
//! A materials file holds many blocks separated by delimiter lines made of six
//! or more dashes. Boundaries are returned as `(first_line, line_count)`
//! tuples over the file's lines, delimiters excluded, in file order.
//!
//! # Example
//!
//! ```
//! use srcrec::boundary_scanner::MaterialBlockScanner;
//!
//! let text = "block one\n------\nblock two\nline two\n";
//! let mut scanner = MaterialBlockScanner::new();
//! assert_eq!(scanner.scan(text), vec![(0, 1), (2, 2)]);
//! ```

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref DELIMITER: Regex = Regex::new(r"^\s*-{6,}\s*$").expect("valid delimiter pattern");
}

/// Whether `line` separates two material blocks.
#[must_use]
pub fn is_delimiter(line: &str) -> bool {
    DELIMITER.is_match(line)
}

/// Block boundary scanner for materials files.
///
/// Blocks that contain only blank lines (text before the first delimiter,
/// doubled delimiters, trailing newlines) are skipped.
#[derive(Debug, Default)]
pub struct MaterialBlockScanner {
    /// Reused across scans
    boundaries: Vec<(usize, usize)>,
}

impl MaterialBlockScanner {
    /// Create a new scanner.
    #[must_use]
    pub fn new() -> Self {
        Self {
            boundaries: Vec::with_capacity(64),
        }
    }

    /// Scan text for block boundaries.
    ///
    /// Returns `(first_line, line_count)` for each non-blank block.
    pub fn scan(&mut self, text: &str) -> Vec<(usize, usize)> {
        self.boundaries.clear();
        let mut start = 0;
        let mut has_content = false;

        for (index, line) in text.lines().enumerate() {
            if is_delimiter(line) {
                if has_content {
                    self.boundaries.push((start, index - start));
                }
                start = index + 1;
                has_content = false;
            } else if !line.trim().is_empty() {
                has_content = true;
            }
        }

        if has_content {
            self.boundaries.push((start, text.lines().count() - start));
        }

        self.boundaries.clone()
    }

    /// Split text into blocks of lines, in file order.
    pub fn blocks<'a>(&mut self, text: &'a str) -> Vec<Vec<&'a str>> {
        let lines: Vec<&str> = text.lines().collect();
        self.scan(text)
            .into_iter()
            .map(|(start, len)| lines[start..start + len].to_vec())
            .collect()
    }

    /// Count blocks without splitting them out.
    pub fn block_count(&mut self, text: &str) -> usize {
        self.scan(text).len()
    }
}
