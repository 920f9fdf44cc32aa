//! Field parsers for command-line values.
//!
//! Each parser converts one textual token into a typed value and has no
//! state of its own. Parsers with a grammar to enforce fail with
//! [`Error::InvalidOption`](crate::Error::InvalidOption); the splitting
//! parsers ([`parse_residue_spec`], [`parse_name_group`]) accept every token
//! and leave semantic validation to the pipeline.
//!
//! Every parsed type also implements [`FromStr`](std::str::FromStr) by
//! delegating to its parser, so a command-line schema can use it directly.

mod cysteine;
mod group;
mod maxwarn;
mod residue;

pub use cysteine::{CysteineBridge, parse_cys};
pub use group::{NameGroup, parse_name_group};
pub use maxwarn::{WarningBudget, parse_maxwarn};
pub use residue::{ResidueSpec, parse_residue_spec};

/// Highest verbosity level; further `-v` flags have no effect.
pub const MAX_VERBOSITY: u8 = 2;

/// Normalizes a count of `-v` flags to a level in `0..=MAX_VERBOSITY`.
pub fn normalize_verbosity(count: u8) -> u8 {
    count.min(MAX_VERBOSITY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_is_clamped() {
        assert_eq!(normalize_verbosity(0), 0);
        assert_eq!(normalize_verbosity(1), 1);
        assert_eq!(normalize_verbosity(2), 2);
        assert_eq!(normalize_verbosity(7), MAX_VERBOSITY);
    }
}
