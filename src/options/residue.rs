use std::convert::Infallible;
use std::str::FromStr;

use serde::Serialize;

/// A `<selector>:<target>` pair naming residues and what to do with them.
///
/// Used for both mutations and modifications. The selector may encode
/// `<chain>-<resname><resid>`; it is kept verbatim and interpreted by the
/// pipeline, as is everything after the first `:`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResidueSpec {
    pub selector: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

impl ResidueSpec {
    pub fn new(selector: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            target: Some(target.into()),
        }
    }

    /// `-nter` shorthand: applies `modification` to every N-terminus.
    pub fn nter(modification: impl Into<String>) -> Self {
        Self::new("nter", modification)
    }

    /// `-cter` shorthand: applies `modification` to every C-terminus.
    pub fn cter(modification: impl Into<String>) -> Self {
        Self::new("cter", modification)
    }

    /// The selector followed by the target, if any.
    pub fn parts(&self) -> Vec<&str> {
        std::iter::once(self.selector.as_str())
            .chain(self.target.as_deref())
            .collect()
    }
}

/// Splits a `-mutate`/`-modify` token on its first `:`.
pub fn parse_residue_spec(token: &str) -> ResidueSpec {
    match token.split_once(':') {
        Some((selector, target)) => ResidueSpec::new(selector, target),
        None => ResidueSpec {
            selector: token.to_string(),
            target: None,
        },
    }
}

impl FromStr for ResidueSpec {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(parse_residue_spec(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_selector_and_target() {
        let spec = parse_residue_spec("A-ASP45:ASP0");
        assert_eq!(spec.selector, "A-ASP45");
        assert_eq!(spec.target.as_deref(), Some("ASP0"));
        assert_eq!(spec.parts(), vec!["A-ASP45", "ASP0"]);
    }

    #[test]
    fn token_without_delimiter_has_one_part() {
        let spec = parse_residue_spec("HSD");
        assert_eq!(spec.parts(), vec!["HSD"]);
    }

    #[test]
    fn only_first_delimiter_splits() {
        let spec = parse_residue_spec("A-LYS12:X:Y");
        assert_eq!(spec.parts(), vec!["A-LYS12", "X:Y"]);
    }

    #[test]
    fn empty_segments_pass_through() {
        assert_eq!(parse_residue_spec(":GLY").parts(), vec!["", "GLY"]);
        assert_eq!(parse_residue_spec("ALA:").parts(), vec!["ALA", ""]);
    }

    #[test]
    fn terminus_shorthands_are_tagged() {
        assert_eq!(ResidueSpec::nter("NH2").parts(), vec!["nter", "NH2"]);
        assert_eq!(ResidueSpec::cter("COOH-ter").parts(), vec!["cter", "COOH-ter"]);
    }
}
