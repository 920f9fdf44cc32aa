use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::{Error, Result};

const EXPECTED: &str = "'auto', 'none', or a distance in nm";

/// How cysteine bridges are identified in the input structure.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum CysteineBridge {
    /// Detect bridges from the cysteine side-chain geometry.
    Auto,
    /// Do not add any bridge.
    #[default]
    None,
    /// Bridge cysteines whose side chains are closer than this distance (nm).
    Distance(f64),
}

/// Parses a `-cys` token.
///
/// A token that reads as a floating-point number is always a distance, even
/// when a symbolic name would also match. The symbolic names are
/// case-insensitive.
pub fn parse_cys(token: &str) -> Result<CysteineBridge> {
    if let Ok(distance) = token.parse::<f64>() {
        return Ok(CysteineBridge::Distance(distance));
    }

    match token.to_lowercase().as_str() {
        "auto" => Ok(CysteineBridge::Auto),
        "none" => Ok(CysteineBridge::None),
        _ => Err(Error::invalid_option("-cys", token, EXPECTED)),
    }
}

impl FromStr for CysteineBridge {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_cys(s)
    }
}

impl fmt::Display for CysteineBridge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => f.write_str("auto"),
            Self::None => f.write_str("none"),
            Self::Distance(d) => write!(f, "{}", d),
        }
    }
}

impl Serialize for CysteineBridge {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
