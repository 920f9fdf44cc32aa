use std::collections::HashSet;
use std::ffi::OsString;
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{ArgAction, ArgMatches, Args, CommandFactory, FromArgMatches, Parser, ValueEnum};

use martinize::{CysteineBridge, NameGroup, ResidueSpec, WarningBudget};

#[derive(Parser)]
#[command(
    name = "martinize2",
    about = "Martini coarse-grained topology generation",
    version,
    args_override_self = true,
    before_help = crate::display::banner_for_help(),
    after_help = "Long options take a single dash, as in `-maxwarn 3` or `-ff-dir DIR`; \
                  the double-dash form shown above works too."
)]
pub struct Cli {
    #[command(flatten)]
    pub input: InputOptions,

    #[command(flatten)]
    pub force_field: ForceFieldOptions,

    #[command(flatten)]
    pub secondary: SecondaryStructureOptions,

    #[command(flatten)]
    pub elastic: ElasticOptions,

    #[command(flatten)]
    pub restraints: PositionRestraintOptions,

    #[command(flatten)]
    pub protein: ProteinOptions,

    #[command(flatten)]
    pub debug: DebugOutputOptions,

    #[command(flatten)]
    pub misc: MiscOptions,
}

#[derive(Args)]
#[command(next_help_heading = "Input and Output")]
pub struct InputOptions {
    /// Input atomistic structure (PDB or GRO)
    #[arg(long = "f", value_name = "INPUT")]
    pub input: PathBuf,

    /// Output coarse-grained structure
    #[arg(long = "x", value_name = "OUTPUT")]
    pub output_structure: PathBuf,

    /// Output topology
    #[arg(long = "o", value_name = "TOPOLOGY")]
    pub output_topology: Option<PathBuf>,

    /// Treat every chain as a separate molecule
    #[arg(long = "sep")]
    pub separate: bool,

    /// Chains to merge into one molecule (comma-separated), repeatable
    #[arg(long = "merge", value_name = "CHAINS", action = ArgAction::Append)]
    pub merge: Vec<NameGroup>,

    /// Residue names to ignore (comma-separated groups), repeatable
    #[arg(long = "ignore", value_name = "RESNAMES", num_args = 1.., action = ArgAction::Append)]
    pub ignore: Vec<NameGroup>,

    /// Ignore hydrogens present in the input
    #[arg(long = "ignh")]
    pub ignore_hydrogens: bool,

    /// Model to read from a multi-model input
    #[arg(long = "model", value_name = "N")]
    pub model: Option<u32>,

    /// Where bonds in the input are taken from
    #[arg(long = "bonds-from", value_name = "SOURCE", default_value = "both")]
    pub bonds_from: BondsFrom,

    /// Tolerance factor applied to reference bond lengths
    #[arg(
        long = "bonds-fudge",
        value_name = "FACTOR",
        default_value = "1.2",
        allow_hyphen_values = true
    )]
    pub bonds_fudge: f64,

    /// Residue numbering in the output
    #[arg(long = "resid", value_name = "MODE", default_value = "mol")]
    pub resid: ResidNumbering,
}

#[derive(Args)]
#[command(next_help_heading = "Force Field")]
pub struct ForceFieldOptions {
    /// Target force field
    #[arg(long = "ff", value_name = "NAME", default_value = martinize::DEFAULT_FORCE_FIELD)]
    pub force_field: String,

    /// Force field the input structure is read as
    #[arg(long = "from", value_name = "NAME", default_value = martinize::DEFAULT_FROM_FORCE_FIELD)]
    pub from_force_field: String,

    /// Additional force field directories, repeatable
    #[arg(long = "ff-dir", value_name = "DIR", num_args = 1.., action = ArgAction::Append)]
    pub ff_dirs: Vec<PathBuf>,

    /// Additional mapping directories, repeatable
    #[arg(long = "map-dir", value_name = "DIR", num_args = 1.., action = ArgAction::Append)]
    pub map_dirs: Vec<PathBuf>,

    /// List the known force fields
    #[arg(long = "list-ff")]
    pub list_ff: bool,

    /// List the blocks known for the target force field
    #[arg(long = "list-blocks")]
    pub list_blocks: bool,
}

#[derive(Args)]
#[command(next_help_heading = "Secondary Structure (mutually exclusive)")]
pub struct SecondaryStructureOptions {
    /// Assign secondary structure with DSSP (optionally the executable)
    #[arg(
        long = "dssp",
        value_name = "EXECUTABLE",
        num_args = 0..=1,
        default_missing_value = martinize::DEFAULT_DSSP
    )]
    pub dssp: Option<PathBuf>,

    /// Secondary structure as a one-letter sequence
    #[arg(long = "ss", value_name = "SEQUENCE")]
    pub sequence: Option<String>,

    /// Use collagen parameters
    #[arg(long = "collagen")]
    pub collagen: bool,
}

#[derive(Args)]
#[command(next_help_heading = "Elastic Network")]
pub struct ElasticOptions {
    /// Build an elastic network
    #[arg(long = "elastic")]
    pub enabled: bool,

    /// Elastic bond force constant (kJ/mol/nm²)
    #[arg(
        long = "ef",
        value_name = "FC",
        default_value = "700.0",
        allow_hyphen_values = true
    )]
    pub force_constant: f64,

    /// Elastic bond lower cutoff (nm)
    #[arg(
        long = "el",
        value_name = "NM",
        default_value = "0.0",
        allow_hyphen_values = true
    )]
    pub lower_bound: f64,

    /// Elastic bond upper cutoff (nm)
    #[arg(
        long = "eu",
        value_name = "NM",
        default_value = "0.9",
        allow_hyphen_values = true
    )]
    pub upper_bound: f64,

    /// Minimum residue separation along the chain
    #[arg(long = "ermd", value_name = "N", default_value = "3")]
    pub min_residue_distance: u32,

    /// Force constant decay factor
    #[arg(
        long = "ea",
        value_name = "FACTOR",
        default_value = "0.0",
        allow_hyphen_values = true
    )]
    pub decay_factor: f64,

    /// Force constant decay power
    #[arg(
        long = "ep",
        value_name = "POWER",
        default_value = "0.0",
        allow_hyphen_values = true
    )]
    pub decay_power: f64,

    /// Minimum force constant (kJ/mol/nm²)
    #[arg(
        long = "em",
        value_name = "FC",
        default_value = "0.0",
        allow_hyphen_values = true
    )]
    pub minimum_force: f64,

    /// Bead names used for the network (comma-separated)
    #[arg(long = "eb", value_name = "BEADS", default_value = "BB")]
    pub beads: NameGroup,

    /// Domain within which elastic bonds are drawn
    #[arg(long = "eunit", value_name = "UNIT", default_value = "molecule")]
    pub unit: ElasticUnit,
}

#[derive(Args)]
#[command(next_help_heading = "Position Restraints")]
pub struct PositionRestraintOptions {
    /// Beads to restrain
    #[arg(long = "p", value_name = "BEADS", default_value = "none", ignore_case = true)]
    pub restraints: PositionRestraints,

    /// Position restraint force constant (kJ/mol/nm²)
    #[arg(
        long = "pf",
        value_name = "FC",
        default_value = "1000.0",
        allow_hyphen_values = true
    )]
    pub force: f64,
}

#[derive(Args)]
#[command(next_help_heading = "Protein Description")]
pub struct ProteinOptions {
    /// Apply side-chain dihedral corrections
    #[arg(long = "scfix")]
    pub scfix: bool,

    /// Cysteine bridges: auto, none, or a distance cutoff (nm)
    #[arg(
        long = "cys",
        value_name = "MODE",
        default_value = "none",
        allow_hyphen_values = true
    )]
    pub cys: CysteineBridge,

    /// Mutate residues (<selector>:<resname>), repeatable
    #[arg(long = "mutate", value_name = "SPEC", action = ArgAction::Append)]
    pub mutate: Vec<ResidueSpec>,

    /// Modify residues (<selector>:<modification>), repeatable
    #[arg(long = "modify", value_name = "SPEC", action = ArgAction::Append)]
    pub modify: Vec<ResidueSpec>,

    /// Modification for every N-terminus, repeatable
    #[arg(long = "nter", value_name = "MODIFICATION", action = ArgAction::Append)]
    pub nter: Vec<String>,

    /// Modification for every C-terminus, repeatable
    #[arg(long = "cter", value_name = "MODIFICATION", action = ArgAction::Append)]
    pub cter: Vec<String>,

    /// Use neutral termini
    #[arg(long = "nt")]
    pub neutral_termini: bool,
}

#[derive(Args)]
#[command(next_help_heading = "Debug Output")]
pub struct DebugOutputOptions {
    /// Write the molecule graph after reading
    #[arg(long = "write-graph", value_name = "FILE")]
    pub write_graph: Option<PathBuf>,

    /// Write the molecule graph after repair
    #[arg(long = "write-repair", value_name = "FILE")]
    pub write_repair: Option<PathBuf>,

    /// Write the molecule graph after canonicalization
    #[arg(long = "write-canon", value_name = "FILE")]
    pub write_canon: Option<PathBuf>,
}

#[derive(Args)]
#[command(next_help_heading = "Miscellaneous")]
pub struct MiscOptions {
    /// Warnings to tolerate: N, TYPE, or TYPE:N, repeatable
    #[arg(
        long = "maxwarn",
        value_name = "BUDGET",
        num_args = 1..,
        action = ArgAction::Append,
        allow_negative_numbers = true
    )]
    pub maxwarn: Vec<WarningBudget>,

    /// Write the run manifest to this file instead of stdout
    #[arg(long = "manifest", value_name = "FILE")]
    pub manifest: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short = 'v', action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress output (for scripting)
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum, Default)]
pub enum BondsFrom {
    /// Residue templates, by atom name
    Name,
    /// Interatomic distances
    Distance,
    /// Templates first, then distances
    #[default]
    Both,
    /// No bonds
    None,
}

#[derive(Clone, Copy, Debug, ValueEnum, Default)]
pub enum ResidNumbering {
    /// Renumber from 1 in each molecule
    #[default]
    Mol,
    /// Keep the input numbering
    Input,
}

#[derive(Clone, Copy, Debug, ValueEnum, Default)]
pub enum ElasticUnit {
    /// Within each molecule
    #[default]
    Molecule,
    /// Within each chain
    Chain,
    /// Between all selected beads
    All,
}

#[derive(Clone, Copy, Debug, ValueEnum, Default)]
pub enum PositionRestraints {
    /// No restraints
    #[default]
    None,
    /// Every bead
    All,
    /// Backbone beads only
    Backbone,
}

/// One entry of the modification sequence, from any of the options that
/// feed it.
#[derive(Debug, Clone, PartialEq)]
pub enum Modification {
    Modify(ResidueSpec),
    Nter(String),
    Cter(String),
}

/// Parsed command line plus the ordering that clap's per-field vectors lose.
pub struct Invocation {
    pub cli: Cli,
    /// `-modify`, `-nter` and `-cter` values in command-line order.
    pub modifications: Vec<Modification>,
}

pub fn parse() -> Invocation {
    try_parse_from(std::env::args_os()).unwrap_or_else(|e| e.exit())
}

pub fn try_parse_from<I, T>(args: I) -> Result<Invocation, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let matches = Cli::command()
        .try_get_matches_from(normalize_args(args))
        .map_err(restate_option_error)?;
    let cli = Cli::from_arg_matches(&matches)?;
    let modifications = collect_modifications(&matches);
    Ok(Invocation { cli, modifications })
}

/// Replaces clap's wrapping of a field parser failure with the parser's own
/// message, which already names the option the way it was typed.
fn restate_option_error(err: clap::Error) -> clap::Error {
    if err.kind() != ErrorKind::ValueValidation {
        return err;
    }
    let option_err = std::error::Error::source(&err)
        .and_then(|source| source.downcast_ref::<martinize::Error>());
    match option_err {
        Some(option_err) => Cli::command().error(ErrorKind::ValueValidation, option_err),
        None => err,
    }
}

/// Rewrites single-dash long options (`-maxwarn`) into clap's `--maxwarn`.
///
/// Only names the schema declares as long options are rewritten, so option
/// values and stacked short flags (`-vv`) pass through. Nothing after `--`
/// is touched.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let command = Cli::command();
    let long_names: HashSet<&str> = command
        .get_arguments()
        .filter_map(|arg| arg.get_long())
        .collect();

    let mut passthrough = false;
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            if passthrough {
                return arg;
            }
            let Some(text) = arg.to_str() else {
                return arg;
            };
            if text == "--" {
                passthrough = true;
                return arg;
            }
            match text.strip_prefix('-') {
                Some(rest) if !rest.starts_with('-') => {
                    let name = rest.split_once('=').map_or(rest, |(name, _)| name);
                    if long_names.contains(name) {
                        OsString::from(format!("-{}", text))
                    } else {
                        arg
                    }
                }
                _ => arg,
            }
        })
        .collect()
}

fn collect_modifications(matches: &ArgMatches) -> Vec<Modification> {
    let mut ordered: Vec<(usize, Modification)> = Vec::new();
    ordered.extend(
        indexed_values::<ResidueSpec>(matches, "modify")
            .into_iter()
            .map(|(i, spec)| (i, Modification::Modify(spec))),
    );
    ordered.extend(
        indexed_values::<String>(matches, "nter")
            .into_iter()
            .map(|(i, name)| (i, Modification::Nter(name))),
    );
    ordered.extend(
        indexed_values::<String>(matches, "cter")
            .into_iter()
            .map(|(i, name)| (i, Modification::Cter(name))),
    );
    ordered.sort_by_key(|(index, _)| *index);
    ordered.into_iter().map(|(_, m)| m).collect()
}

fn indexed_values<T>(matches: &ArgMatches, id: &str) -> Vec<(usize, T)>
where
    T: Clone + Send + Sync + 'static,
{
    let values = matches.try_get_many::<T>(id).ok().flatten();
    let indices = matches.indices_of(id);
    match (indices, values) {
        (Some(indices), Some(values)) => indices.zip(values.cloned()).collect(),
        _ => Vec::new(),
    }
}
