use std::convert::Infallible;
use std::str::FromStr;

use serde::Serialize;

/// A comma-separated group of names: chain identifiers for `-merge`,
/// residue names for `-ignore`, bead names for `-eb`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct NameGroup(pub Vec<String>);

impl NameGroup {
    pub fn names(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Splits a token on `,`. Empty segments are kept.
pub fn parse_name_group(token: &str) -> NameGroup {
    NameGroup(token.split(',').map(str::to_string).collect())
}

impl FromStr for NameGroup {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(parse_name_group(s))
    }
}

impl<S: Into<String>> FromIterator<S> for NameGroup {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        NameGroup(iter.into_iter().map(Into::into).collect())
    }
}
