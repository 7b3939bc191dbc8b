//! Single-character code tables used by the materials header line.
//!
//! Both tables are closed: decoding a character that is not listed here is an
//! [`ExtractError::InvalidFormat`] error. There is no fallback variant.
//!
//! # Type codes (header column 75)
//!
//! | code | type |
//! |---|---|
//! | `E` | Element |
//! | `R` | Radioactive Element |
//! | `I` | Inorganic Compound |
//! | `O` | Organic Compound |
//! | `P` | Polymer |
//! | `M` | Mixture |
//! | `B` | Biological |
//! | space | `[none]` |
//!
//! # Phase codes (header column 64)
//!
//! | code | phase |
//! |---|---|
//! | `S` | Solid |
//! | `L` | Liquid |
//! | `G` | Gas |
//! | `D` | Diatomic Gas |
//! | space | `[none]` |

use crate::error::{ExtractError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of material described by a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaterialType {
    /// E - Element
    #[serde(rename = "Element")]
    Element,
    /// R - Radioactive element
    #[serde(rename = "Radioactive Element")]
    RadioactiveElement,
    /// I - Inorganic compound
    #[serde(rename = "Inorganic Compound")]
    InorganicCompound,
    /// O - Organic compound
    #[serde(rename = "Organic Compound")]
    OrganicCompound,
    /// P - Polymer
    #[serde(rename = "Polymer")]
    Polymer,
    /// M - Mixture
    #[serde(rename = "Mixture")]
    Mixture,
    /// B - Biological material
    #[serde(rename = "Biological")]
    Biological,
    /// Blank code
    #[serde(rename = "[none]")]
    Unspecified,
}

impl MaterialType {
    /// Every variant with its header code, indexed by variant order.
    pub const TABLE: [(char, MaterialType); 8] = [
        ('E', MaterialType::Element),
        ('R', MaterialType::RadioactiveElement),
        ('I', MaterialType::InorganicCompound),
        ('O', MaterialType::OrganicCompound),
        ('P', MaterialType::Polymer),
        ('M', MaterialType::Mixture),
        ('B', MaterialType::Biological),
        (' ', MaterialType::Unspecified),
    ];

    /// Decode a header type character.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::InvalidFormat`] for any character outside the table.
    pub fn from_code(code: char) -> Result<Self> {
        Self::TABLE
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, kind)| *kind)
            .ok_or_else(|| {
                ExtractError::InvalidFormat(format!("unknown material type code '{code}'"))
            })
    }

    /// Header character for this type.
    #[must_use]
    pub const fn code(&self) -> char {
        Self::TABLE[*self as usize].0
    }

    /// Whether the record describes a single element and carries a chemical symbol.
    #[must_use]
    pub const fn is_element(&self) -> bool {
        matches!(self, Self::Element | Self::RadioactiveElement)
    }

    /// Display name as written to JSON.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Element => "Element",
            Self::RadioactiveElement => "Radioactive Element",
            Self::InorganicCompound => "Inorganic Compound",
            Self::OrganicCompound => "Organic Compound",
            Self::Polymer => "Polymer",
            Self::Mixture => "Mixture",
            Self::Biological => "Biological",
            Self::Unspecified => "[none]",
        }
    }
}

impl fmt::Display for MaterialType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Physical phase of a material at standard conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// S - Solid
    #[serde(rename = "Solid")]
    Solid,
    /// L - Liquid
    #[serde(rename = "Liquid")]
    Liquid,
    /// G - Gas
    #[serde(rename = "Gas")]
    Gas,
    /// D - Diatomic gas
    #[serde(rename = "Diatomic Gas")]
    DiatomicGas,
    /// Blank code
    #[serde(rename = "[none]")]
    Unspecified,
}

impl Phase {
    /// Every variant with its header code, indexed by variant order.
    pub const TABLE: [(char, Phase); 5] = [
        ('S', Phase::Solid),
        ('L', Phase::Liquid),
        ('G', Phase::Gas),
        ('D', Phase::DiatomicGas),
        (' ', Phase::Unspecified),
    ];

    /// Decode a header phase character.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::InvalidFormat`] for any character outside the table.
    pub fn from_code(code: char) -> Result<Self> {
        Self::TABLE
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, phase)| *phase)
            .ok_or_else(|| ExtractError::InvalidFormat(format!("unknown phase code '{code}'")))
    }

    /// Header character for this phase.
    #[must_use]
    pub const fn code(&self) -> char {
        Self::TABLE[*self as usize].0
    }

    /// Display name as written to JSON.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Solid => "Solid",
            Self::Liquid => "Liquid",
            Self::Gas => "Gas",
            Self::DiatomicGas => "Diatomic Gas",
            Self::Unspecified => "[none]",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
