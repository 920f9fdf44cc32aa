use std::path::PathBuf;

use log::debug;

use super::{
    BondSource, DEFAULT_BONDS_FUDGE, DEFAULT_FORCE_FIELD, DEFAULT_FROM_FORCE_FIELD,
    DEFAULT_POSITION_RESTRAINT_FORCE, ElasticNetworkConfig, PositionRestraints, ResidNumbering,
    RunConfiguration, SecondaryStructureSource,
};
use crate::error::{Error, Result};
use crate::options::{
    CysteineBridge, NameGroup, ResidueSpec, WarningBudget, normalize_verbosity,
};

/// Collects option values into a [`RunConfiguration`].
///
/// Setters consume and return the builder so calls can be chained.
/// Accumulating setters append; calling them in command-line order keeps
/// that order in the result. [`nter`](Self::nter) and [`cter`](Self::cter)
/// append to the same sequence as [`modify`](Self::modify).
///
/// # Examples
///
/// ```
/// use martinize::{CysteineBridge, ResidueSpec, RunConfiguration};
///
/// let config = RunConfiguration::builder("protein.pdb", "cg.pdb")
///     .cystein_bridge(CysteineBridge::Auto)
///     .nter("NH2")
///     .modify(ResidueSpec::new("A-ASP45", "ASP0"))
///     .build()?;
///
/// assert_eq!(config.modifications[0], ResidueSpec::nter("NH2"));
/// assert_eq!(config.force_field, "martini3001");
/// # Ok::<(), martinize::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct RunConfigBuilder {
    config: RunConfiguration,
    dssp: Option<PathBuf>,
    ss_sequence: Option<String>,
    collagen: bool,
}

impl RunConfigBuilder {
    pub fn new(input: impl Into<PathBuf>, output_structure: impl Into<PathBuf>) -> Self {
        Self {
            config: RunConfiguration {
                input: input.into(),
                output_structure: output_structure.into(),
                output_topology: None,
                separate_chains: false,
                ignore_hydrogens: false,
                model: None,
                bonds_from: BondSource::default(),
                bonds_fudge: DEFAULT_BONDS_FUDGE,
                resid: ResidNumbering::default(),
                force_field: DEFAULT_FORCE_FIELD.to_string(),
                from_force_field: DEFAULT_FROM_FORCE_FIELD.to_string(),
                list_force_fields: false,
                list_blocks: false,
                cystein_bridge: CysteineBridge::default(),
                neutral_termini: false,
                side_chain_fix: false,
                position_restraints: PositionRestraints::default(),
                position_restraint_force: DEFAULT_POSITION_RESTRAINT_FORCE,
                write_graph: None,
                write_repair: None,
                write_canon: None,
                verbosity: 0,
                merge: Vec::new(),
                ignore: Vec::new(),
                force_field_dirs: Vec::new(),
                mapping_dirs: Vec::new(),
                secondary_structure: None,
                mutations: Vec::new(),
                modifications: Vec::new(),
                maxwarn: Vec::new(),
                elastic: ElasticNetworkConfig::default(),
            },
            dssp: None,
            ss_sequence: None,
            collagen: false,
        }
    }

    pub fn output_topology(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.output_topology = Some(path.into());
        self
    }

    pub fn separate_chains(mut self, yes: bool) -> Self {
        self.config.separate_chains = yes;
        self
    }

    pub fn ignore_hydrogens(mut self, yes: bool) -> Self {
        self.config.ignore_hydrogens = yes;
        self
    }

    pub fn model(mut self, model: u32) -> Self {
        self.config.model = Some(model);
        self
    }

    pub fn bonds_from(mut self, source: BondSource) -> Self {
        self.config.bonds_from = source;
        self
    }

    pub fn bonds_fudge(mut self, fudge: f64) -> Self {
        self.config.bonds_fudge = fudge;
        self
    }

    pub fn resid(mut self, numbering: ResidNumbering) -> Self {
        self.config.resid = numbering;
        self
    }

    pub fn force_field(mut self, name: impl Into<String>) -> Self {
        self.config.force_field = name.into();
        self
    }

    pub fn from_force_field(mut self, name: impl Into<String>) -> Self {
        self.config.from_force_field = name.into();
        self
    }

    pub fn list_force_fields(mut self, yes: bool) -> Self {
        self.config.list_force_fields = yes;
        self
    }

    pub fn list_blocks(mut self, yes: bool) -> Self {
        self.config.list_blocks = yes;
        self
    }

    pub fn cystein_bridge(mut self, bridge: CysteineBridge) -> Self {
        self.config.cystein_bridge = bridge;
        self
    }

    /// Sets the neutral-termini flag.
    ///
    /// This does not add `nter`/`cter` entries to the modifications.
    pub fn neutral_termini(mut self, yes: bool) -> Self {
        self.config.neutral_termini = yes;
        self
    }

    pub fn side_chain_fix(mut self, yes: bool) -> Self {
        self.config.side_chain_fix = yes;
        self
    }

    pub fn position_restraints(mut self, restraints: PositionRestraints) -> Self {
        self.config.position_restraints = restraints;
        self
    }

    pub fn position_restraint_force(mut self, force: f64) -> Self {
        self.config.position_restraint_force = force;
        self
    }

    pub fn write_graph(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.write_graph = Some(path.into());
        self
    }

    pub fn write_repair(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.write_repair = Some(path.into());
        self
    }

    pub fn write_canon(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.write_canon = Some(path.into());
        self
    }

    /// Sets the verbosity from a count of `-v` flags.
    pub fn verbosity(mut self, count: u8) -> Self {
        self.config.verbosity = normalize_verbosity(count);
        self
    }

    pub fn elastic(mut self, elastic: ElasticNetworkConfig) -> Self {
        self.config.elastic = elastic;
        self
    }

    pub fn merge(mut self, chains: NameGroup) -> Self {
        self.config.merge.push(chains);
        self
    }

    pub fn ignore(mut self, residues: NameGroup) -> Self {
        self.config.ignore.push(residues);
        self
    }

    pub fn force_field_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.force_field_dirs.push(dir.into());
        self
    }

    pub fn mapping_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.mapping_dirs.push(dir.into());
        self
    }

    pub fn mutate(mut self, mutation: ResidueSpec) -> Self {
        self.config.mutations.push(mutation);
        self
    }

    pub fn modify(mut self, modification: ResidueSpec) -> Self {
        self.config.modifications.push(modification);
        self
    }

    pub fn nter(self, modification: impl Into<String>) -> Self {
        self.modify(ResidueSpec::nter(modification))
    }

    pub fn cter(self, modification: impl Into<String>) -> Self {
        self.modify(ResidueSpec::cter(modification))
    }

    pub fn maxwarn(mut self, budget: WarningBudget) -> Self {
        self.config.maxwarn.push(budget);
        self
    }

    /// Requests secondary structure from a DSSP executable.
    pub fn dssp(mut self, executable: impl Into<PathBuf>) -> Self {
        self.dssp = Some(executable.into());
        self
    }

    /// Requests an explicit secondary structure sequence.
    pub fn secondary_structure(mut self, sequence: impl Into<String>) -> Self {
        self.ss_sequence = Some(sequence.into());
        self
    }

    /// Requests collagen parameters.
    pub fn collagen(mut self, yes: bool) -> Self {
        self.collagen = yes;
        self
    }

    /// Finishes assembly.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConflictingOptions`] naming every supplied selector
    /// when more than one of `-dssp`, `-ss`, and `-collagen` was requested.
    pub fn build(self) -> Result<RunConfiguration> {
        let Self {
            mut config,
            dssp,
            ss_sequence,
            collagen,
        } = self;

        let mut sources: Vec<SecondaryStructureSource> = Vec::new();
        sources.extend(dssp.map(SecondaryStructureSource::Dssp));
        sources.extend(ss_sequence.map(SecondaryStructureSource::Sequence));
        if collagen {
            sources.push(SecondaryStructureSource::Collagen);
        }

        if sources.len() > 1 {
            return Err(Error::ConflictingOptions {
                options: sources.iter().map(SecondaryStructureSource::option).collect(),
            });
        }
        config.secondary_structure = sources.pop();

        debug!(
            "resolved configuration: {} modification(s), {} mutation(s), {} warning budget(s)",
            config.modifications.len(),
            config.mutations.len(),
            config.maxwarn.len()
        );

        Ok(config)
    }
}
