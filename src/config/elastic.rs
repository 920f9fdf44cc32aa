use serde::Serialize;

use crate::options::NameGroup;

/// Scope within which two beads may be joined by an elastic bond.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ElasticUnit {
    /// Beads of the same molecule.
    #[default]
    Molecule,
    /// Beads of the same chain.
    Chain,
    /// Any pair of selected beads.
    All,
}

/// Elastic network (rubber band) settings.
///
/// Bonds are drawn between selected beads whose distance lies between
/// `lower_bound` and `upper_bound`. The force constant decays as
/// `exp(-decay_factor * (d - lower_bound)^decay_power)`; a zero factor or
/// power disables the decay. Bonds whose decayed constant falls below
/// `minimum_force` are dropped.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElasticNetworkConfig {
    pub enabled: bool,
    /// Base force constant (kJ/mol/nm²).
    pub force_constant: f64,
    /// Lower distance cutoff (nm).
    pub lower_bound: f64,
    /// Upper distance cutoff (nm).
    pub upper_bound: f64,
    pub decay_factor: f64,
    pub decay_power: f64,
    /// Minimum force constant (kJ/mol/nm²).
    pub minimum_force: f64,
    /// Residues closer than this along the chain are never joined.
    pub min_residue_distance: u32,
    pub unit: ElasticUnit,
    /// Bead names eligible for the network.
    pub beads: NameGroup,
}

impl ElasticNetworkConfig {
    pub const DEFAULT_FORCE_CONSTANT: f64 = 700.0;
    pub const DEFAULT_UPPER_BOUND: f64 = 0.9;
    pub const DEFAULT_MIN_RESIDUE_DISTANCE: u32 = 3;
    pub const DEFAULT_BEAD: &'static str = "BB";
}

impl Default for ElasticNetworkConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            force_constant: Self::DEFAULT_FORCE_CONSTANT,
            lower_bound: 0.0,
            upper_bound: Self::DEFAULT_UPPER_BOUND,
            decay_factor: 0.0,
            decay_power: 0.0,
            minimum_force: 0.0,
            min_residue_distance: Self::DEFAULT_MIN_RESIDUE_DISTANCE,
            unit: ElasticUnit::Molecule,
            beads: NameGroup(vec![Self::DEFAULT_BEAD.to_string()]),
        }
    }
}
