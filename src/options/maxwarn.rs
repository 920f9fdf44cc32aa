use std::str::FromStr;

use serde::Serialize;

use crate::error::{Error, Result};

const EXPECTED: &str = "a warning type, an integer, or '<type>:<integer>'";

/// Permission to ignore up to `count` warnings of type `kind`.
///
/// A missing `kind` covers warnings of any type; a missing `count` allows an
/// unlimited number of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WarningBudget {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
}

impl WarningBudget {
    /// Up to `count` warnings of any type.
    pub fn any(count: i64) -> Self {
        Self {
            kind: None,
            count: Some(count),
        }
    }

    /// Any number of warnings of type `kind`.
    pub fn unlimited(kind: impl Into<String>) -> Self {
        Self {
            kind: Some(kind.into()),
            count: None,
        }
    }

    /// Up to `count` warnings of type `kind`.
    pub fn limited(kind: impl Into<String>, count: i64) -> Self {
        Self {
            kind: Some(kind.into()),
            count: Some(count),
        }
    }
}

/// Parses one `-maxwarn` token.
///
/// - `3` - three warnings of any type
/// - `inconsistent-data` - any number of warnings of that type
/// - `general:15` - fifteen warnings of type `general`
///
/// A two-part token whose count is not an integer is rejected rather than
/// read as a type name.
pub fn parse_maxwarn(token: &str) -> Result<WarningBudget> {
    let segments: Vec<&str> = token.split(':').collect();

    match segments.as_slice() {
        [single] => Ok(match single.parse::<i64>() {
            Ok(count) => WarningBudget::any(count),
            Err(_) => WarningBudget::unlimited(*single),
        }),
        [kind, count] => count
            .parse::<i64>()
            .map(|count| WarningBudget::limited(*kind, count))
            .map_err(|_| Error::invalid_option("-maxwarn", token, EXPECTED)),
        _ => Err(Error::invalid_option("-maxwarn", token, EXPECTED)),
    }
}

impl FromStr for WarningBudget {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_maxwarn(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_integer_is_an_untyped_budget() {
        let budget = parse_maxwarn("3").unwrap();
        assert_eq!(budget.kind, None);
        assert_eq!(budget.count, Some(3));
    }

    #[test]
    fn typed_budget_with_count() {
        assert_eq!(
            parse_maxwarn("general:15").unwrap(),
            WarningBudget::limited("general", 15)
        );
    }

    #[test]
    fn bare_name_is_unlimited() {
        assert_eq!(
            parse_maxwarn("inconsistent-data").unwrap(),
            WarningBudget::unlimited("inconsistent-data")
        );
    }

    #[test]
    fn non_integer_count_is_rejected() {
        let err = parse_maxwarn("a:b").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid value 'a:b' for -maxwarn: expected a warning type, an integer, or '<type>:<integer>'"
        );
    }

    #[test]
    fn three_segments_are_rejected() {
        assert!(matches!(
            parse_maxwarn("a:1:2"),
            Err(Error::InvalidOption { option: "-maxwarn", .. })
        ));
    }

    #[test]
    fn empty_count_is_rejected() {
        assert!(parse_maxwarn("general:").is_err());
    }

    #[test]
    fn empty_type_with_count_is_kept() {
        assert_eq!(
            parse_maxwarn(":4").unwrap(),
            WarningBudget::limited("", 4)
        );
    }
}
