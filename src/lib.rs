//! Option validation and configuration assembly for coarse-grained Martini
//! structure generation.
//!
//! This crate is the front end of a structure generator: it turns the
//! free-form values of a command line into typed, internally consistent
//! settings and hands them, in one piece, to a structure-processing pipeline.
//! The pipeline (bond inference, residue repair, secondary structure,
//! elastic networks, force-field mapping, topology output) is not part of
//! this crate; it is reached through the [`Pipeline`] trait.
//!
//! # Quick Start
//!
//! ```
//! use martinize::{parse_cys, parse_maxwarn, parse_residue_spec, RunConfiguration};
//! use martinize::{CysteineBridge, Error};
//!
//! let config = RunConfiguration::builder("1ubq.pdb", "cg.pdb")
//!     .output_topology("topol.top")
//!     .cystein_bridge(parse_cys("auto")?)
//!     .maxwarn(parse_maxwarn("general:15")?)
//!     .nter("NH2")
//!     .modify(parse_residue_spec("A-ASP45:ASP0"))
//!     .build()?;
//!
//! assert_eq!(config.cystein_bridge, CysteineBridge::Auto);
//! assert_eq!(config.modifications.len(), 2);
//!
//! // A bad token is reported with the accepted grammar.
//! let err = parse_cys("bogus").unwrap_err();
//! assert!(err.to_string().contains("'auto', 'none', or a distance in nm"));
//! # Ok::<(), Error>(())
//! ```
//!
//! # Module Organization
//!
//! - [`options`] - Field parsers for individual command-line tokens
//! - [`RunConfigBuilder`] - Assembles a [`RunConfiguration`] with defaults
//! - [`dispatch`] - The single hand-off to a [`Pipeline`]
//! - [`Error`] - Invalid and conflicting option errors

mod config;
mod error;
mod pipeline;

pub mod options;

pub use config::{
    BondSource, DEFAULT_BONDS_FUDGE, DEFAULT_DSSP, DEFAULT_FORCE_FIELD, DEFAULT_FROM_FORCE_FIELD,
    DEFAULT_POSITION_RESTRAINT_FORCE, ElasticNetworkConfig, ElasticUnit, PositionRestraints,
    ResidNumbering, RunConfigBuilder, RunConfiguration, SecondaryStructureSource,
};
pub use error::{Error, Result};
pub use options::{
    CysteineBridge, MAX_VERBOSITY, NameGroup, ResidueSpec, WarningBudget, normalize_verbosity,
    parse_cys, parse_maxwarn, parse_name_group, parse_residue_spec,
};
pub use pipeline::{Pipeline, dispatch};
