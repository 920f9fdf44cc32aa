use martinize::{
    BondSource as LibBondSource, ElasticUnit as LibElasticUnit,
    PositionRestraints as LibPositionRestraints, ResidNumbering as LibResidNumbering,
};

use crate::cli;

impl From<cli::BondsFrom> for LibBondSource {
    fn from(b: cli::BondsFrom) -> Self {
        match b {
            cli::BondsFrom::Name => Self::Name,
            cli::BondsFrom::Distance => Self::Distance,
            cli::BondsFrom::Both => Self::Both,
            cli::BondsFrom::None => Self::None,
        }
    }
}

impl From<cli::ResidNumbering> for LibResidNumbering {
    fn from(r: cli::ResidNumbering) -> Self {
        match r {
            cli::ResidNumbering::Mol => Self::Mol,
            cli::ResidNumbering::Input => Self::Input,
        }
    }
}

impl From<cli::ElasticUnit> for LibElasticUnit {
    fn from(u: cli::ElasticUnit) -> Self {
        match u {
            cli::ElasticUnit::Molecule => Self::Molecule,
            cli::ElasticUnit::Chain => Self::Chain,
            cli::ElasticUnit::All => Self::All,
        }
    }
}

impl From<cli::PositionRestraints> for LibPositionRestraints {
    fn from(p: cli::PositionRestraints) -> Self {
        match p {
            cli::PositionRestraints::None => Self::None,
            cli::PositionRestraints::All => Self::All,
            cli::PositionRestraints::Backbone => Self::Backbone,
        }
    }
}

pub fn position_restraints_display_name(p: LibPositionRestraints) -> &'static str {
    match p {
        LibPositionRestraints::None => "none",
        LibPositionRestraints::All => "all beads",
        LibPositionRestraints::Backbone => "backbone",
    }
}

pub fn elastic_unit_display_name(u: LibElasticUnit) -> &'static str {
    match u {
        LibElasticUnit::Molecule => "per molecule",
        LibElasticUnit::Chain => "per chain",
        LibElasticUnit::All => "all beads",
    }
}

pub fn bond_source_display_name(b: LibBondSource) -> &'static str {
    match b {
        LibBondSource::Name => "names",
        LibBondSource::Distance => "distances",
        LibBondSource::Both => "names + distances",
        LibBondSource::None => "none",
    }
}
