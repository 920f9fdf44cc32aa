//! Error types for option validation.
//!
//! Every failure raised while turning command-line tokens into a
//! [`RunConfiguration`](crate::RunConfiguration) is an [`Error`]. Failures
//! raised by the structure-processing pipeline are not represented here: they
//! travel through [`Pipeline::Error`](crate::Pipeline::Error) untouched.

use thiserror::Error;

/// Errors that can occur while parsing and assembling options.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A token does not match the grammar of its option.
    ///
    /// The message carries the offending token and the accepted forms so it
    /// can be shown to the user as-is.
    #[error("invalid value '{token}' for {option}: expected {expected}")]
    InvalidOption {
        /// Option name as written on the command line (e.g. `-cys`).
        option: &'static str,
        /// The token that failed to parse.
        token: String,
        /// Human-readable description of the accepted grammar.
        expected: &'static str,
    },

    /// Options that exclude each other were supplied together.
    ///
    /// This is an invalid-option failure spanning several options: the
    /// command line is rejected before anything is dispatched, and the
    /// message names every option involved.
    ///
    /// ```
    /// use martinize::{Error, RunConfiguration};
    ///
    /// let err = RunConfiguration::builder("in.pdb", "cg.pdb")
    ///     .dssp("mkdssp")
    ///     .collagen(true)
    ///     .build()
    ///     .unwrap_err();
    /// assert_eq!(err, Error::ConflictingOptions { options: vec!["-dssp", "-collagen"] });
    /// ```
    #[error("options {} are mutually exclusive; supply at most one", .options.join(", "))]
    ConflictingOptions {
        /// Every conflicting option that was supplied, in canonical order.
        options: Vec<&'static str>,
    },
}

impl Error {
    /// Creates an [`InvalidOption`](Error::InvalidOption) error.
    pub fn invalid_option(
        option: &'static str,
        token: impl Into<String>,
        expected: &'static str,
    ) -> Self {
        Self::InvalidOption {
            option,
            token: token.into(),
            expected,
        }
    }

    /// Returns the option names this error is about.
    pub fn options(&self) -> Vec<&'static str> {
        match self {
            Self::InvalidOption { option, .. } => vec![*option],
            Self::ConflictingOptions { options } => options.clone(),
        }
    }
}

/// Result alias for option parsing and assembly.
pub type Result<T> = std::result::Result<T, Error>;
