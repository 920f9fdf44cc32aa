//! The resolved run configuration and its assembler.
//!
//! [`RunConfigBuilder`] collects parsed option values, applying a default for
//! every option the user leaves out, and [`RunConfigBuilder::build`] checks
//! cross-option constraints before producing the immutable
//! [`RunConfiguration`] handed to the pipeline.
//!
//! # Overview
//!
//! - [`RunConfiguration`] - Every resolved option, one field per option
//! - [`RunConfigBuilder`] - Order-preserving collection of option values
//! - [`ElasticNetworkConfig`] - Elastic network parameters
//! - [`SecondaryStructureSource`] - Where secondary structure comes from

mod builder;
mod elastic;

use std::path::PathBuf;

use serde::Serialize;

use crate::options::{CysteineBridge, NameGroup, ResidueSpec, WarningBudget};

pub use builder::RunConfigBuilder;
pub use elastic::{ElasticNetworkConfig, ElasticUnit};

/// Default target force field.
pub const DEFAULT_FORCE_FIELD: &str = "martini3001";
/// Default force field the input is read as.
pub const DEFAULT_FROM_FORCE_FIELD: &str = "universal";
/// Default bond length tolerance factor for distance-based bonds.
pub const DEFAULT_BONDS_FUDGE: f64 = 1.2;
/// Default position restraint force constant (kJ/mol/nm²).
pub const DEFAULT_POSITION_RESTRAINT_FORCE: f64 = 1000.0;
/// Executable used when `-dssp` is given without a path.
pub const DEFAULT_DSSP: &str = "dssp";

/// Which beads receive position restraints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PositionRestraints {
    #[default]
    None,
    All,
    Backbone,
}

/// Where bonds in the input structure are taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BondSource {
    /// Residue templates, by atom name.
    Name,
    /// Interatomic distances.
    Distance,
    #[default]
    Both,
    None,
}

/// How residues are numbered in the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResidNumbering {
    /// Renumber from 1 in each molecule.
    #[default]
    Mol,
    /// Keep the input numbering.
    Input,
}

/// Source of the per-residue secondary structure assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SecondaryStructureSource {
    /// Run this DSSP executable on the input structure.
    Dssp(PathBuf),
    /// Use this one-letter secondary structure sequence.
    Sequence(String),
    /// Use collagen parameters.
    Collagen,
}

impl SecondaryStructureSource {
    /// The option that selects this source.
    pub fn option(&self) -> &'static str {
        match self {
            Self::Dssp(_) => "-dssp",
            Self::Sequence(_) => "-ss",
            Self::Collagen => "-collagen",
        }
    }
}

/// Fully resolved options for one run.
///
/// Every option has a value here, defaulted when absent from the command
/// line. Accumulating options keep command-line order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunConfiguration {
    // Input and output
    pub input: PathBuf,
    pub output_structure: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_topology: Option<PathBuf>,
    pub separate_chains: bool,
    pub ignore_hydrogens: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<u32>,
    pub bonds_from: BondSource,
    pub bonds_fudge: f64,
    pub resid: ResidNumbering,

    // Force field
    pub force_field: String,
    pub from_force_field: String,
    pub list_force_fields: bool,
    pub list_blocks: bool,

    // Protein description
    pub cystein_bridge: CysteineBridge,
    pub neutral_termini: bool,
    pub side_chain_fix: bool,
    pub position_restraints: PositionRestraints,
    pub position_restraint_force: f64,

    // Debug outputs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub write_graph: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub write_repair: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub write_canon: Option<PathBuf>,

    pub verbosity: u8,

    // Accumulating options
    pub merge: Vec<NameGroup>,
    pub ignore: Vec<NameGroup>,
    pub force_field_dirs: Vec<PathBuf>,
    pub mapping_dirs: Vec<PathBuf>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_structure: Option<SecondaryStructureSource>,
    pub mutations: Vec<ResidueSpec>,
    pub modifications: Vec<ResidueSpec>,
    pub maxwarn: Vec<WarningBudget>,
    pub elastic: ElasticNetworkConfig,
}

impl RunConfiguration {
    /// Starts assembling a configuration for the given input and output
    /// structures.
    pub fn builder(input: impl Into<PathBuf>, output_structure: impl Into<PathBuf>) -> RunConfigBuilder {
        RunConfigBuilder::new(input, output_structure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secondary_structure_sources_name_their_option() {
        assert_eq!(SecondaryStructureSource::Dssp("dssp".into()).option(), "-dssp");
        assert_eq!(SecondaryStructureSource::Sequence("HHHH".into()).option(), "-ss");
        assert_eq!(SecondaryStructureSource::Collagen.option(), "-collagen");
    }

    #[test]
    fn enum_defaults() {
        assert_eq!(PositionRestraints::default(), PositionRestraints::None);
        assert_eq!(BondSource::default(), BondSource::Both);
        assert_eq!(ResidNumbering::default(), ResidNumbering::Mol);
    }
}
