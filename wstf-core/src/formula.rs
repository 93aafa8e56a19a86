//! The four published variants of the Wiener Sachtextformel
//!
//! Every variant is a linear combination of document-level percentages
//! (see [`Metrics`]) and the mean sentence length.

use crate::counts::Metrics;
use crate::error::{ReadabilityError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Formula variant selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FormulaVariant {
    /// 0.1935·MS + 0.1672·SL + 0.1297·IW − 0.0327·ES − 0.875
    #[default]
    Wstf1,
    /// 0.2007·MS + 0.1682·SL + 0.1373·IW − 2.779
    Wstf2,
    /// 0.2963·MS + 0.1905·SL − 1.1144
    Wstf3,
    /// 0.2656·SL + 0.2744·MS − 1.693
    Wstf4,
}

impl FormulaVariant {
    /// All variants in publication order
    pub const ALL: [FormulaVariant; 4] = [
        FormulaVariant::Wstf1,
        FormulaVariant::Wstf2,
        FormulaVariant::Wstf3,
        FormulaVariant::Wstf4,
    ];

    /// Canonical name, e.g. `WSTF1`
    pub fn name(self) -> &'static str {
        match self {
            FormulaVariant::Wstf1 => "WSTF1",
            FormulaVariant::Wstf2 => "WSTF2",
            FormulaVariant::Wstf3 => "WSTF3",
            FormulaVariant::Wstf4 => "WSTF4",
        }
    }

    /// Human readable formula
    pub fn expression(self) -> &'static str {
        match self {
            FormulaVariant::Wstf1 => "0.1935*MS + 0.1672*SL + 0.1297*IW - 0.0327*ES - 0.875",
            FormulaVariant::Wstf2 => "0.2007*MS + 0.1682*SL + 0.1373*IW - 2.779",
            FormulaVariant::Wstf3 => "0.2963*MS + 0.1905*SL - 1.1144",
            FormulaVariant::Wstf4 => "0.2656*SL + 0.2744*MS - 1.693",
        }
    }

    /// Parse an optional caller-supplied selector.
    ///
    /// A missing or empty selector means WSTF1. Anything else must name a
    /// variant; unknown names are rejected rather than defaulted.
    pub fn from_selector(selector: Option<&str>) -> Result<Self> {
        match selector.map(str::trim) {
            None | Some("") => Ok(FormulaVariant::default()),
            Some(name) => name.parse(),
        }
    }

    /// Evaluate the formula for the given metrics
    pub fn evaluate(self, m: &Metrics) -> f64 {
        match self {
            FormulaVariant::Wstf1 => {
                0.1935 * m.ms + 0.1672 * m.sl + 0.1297 * m.iw - 0.0327 * m.es - 0.875
            }
            FormulaVariant::Wstf2 => 0.2007 * m.ms + 0.1682 * m.sl + 0.1373 * m.iw - 2.779,
            FormulaVariant::Wstf3 => 0.2963 * m.ms + 0.1905 * m.sl - 1.1144,
            FormulaVariant::Wstf4 => 0.2656 * m.sl + 0.2744 * m.ms - 1.693,
        }
    }
}

impl fmt::Display for FormulaVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FormulaVariant {
    type Err = ReadabilityError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let digits = match trimmed.get(..4) {
            Some(prefix) if prefix.eq_ignore_ascii_case("wstf") => &trimmed[4..],
            _ => trimmed,
        };

        match digits {
            "1" => Ok(FormulaVariant::Wstf1),
            "2" => Ok(FormulaVariant::Wstf2),
            "3" => Ok(FormulaVariant::Wstf3),
            "4" => Ok(FormulaVariant::Wstf4),
            _ => Err(ReadabilityError::InvalidVariant(s.to_string())),
        }
    }
}

impl TryFrom<u8> for FormulaVariant {
    type Error = ReadabilityError;

    fn try_from(number: u8) -> Result<Self> {
        match number {
            1 => Ok(FormulaVariant::Wstf1),
            2 => Ok(FormulaVariant::Wstf2),
            3 => Ok(FormulaVariant::Wstf3),
            4 => Ok(FormulaVariant::Wstf4),
            n => Err(ReadabilityError::InvalidVariant(n.to_string())),
        }
    }
}
