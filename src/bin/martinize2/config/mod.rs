mod elastic;

pub use elastic::build_elastic_config;

use martinize::{Result, RunConfigBuilder, RunConfiguration};

use crate::cli::{Invocation, Modification};

/// Feeds every parsed option into a [`RunConfigBuilder`], keeping
/// command-line order for the accumulating options, and finishes assembly.
pub fn build_run_config(invocation: &Invocation) -> Result<RunConfiguration> {
    let cli = &invocation.cli;
    let input = &cli.input;

    let mut builder = RunConfigBuilder::new(&input.input, &input.output_structure)
        .separate_chains(input.separate)
        .ignore_hydrogens(input.ignore_hydrogens)
        .bonds_from(input.bonds_from.into())
        .bonds_fudge(input.bonds_fudge)
        .resid(input.resid.into())
        .force_field(&cli.force_field.force_field)
        .from_force_field(&cli.force_field.from_force_field)
        .list_force_fields(cli.force_field.list_ff)
        .list_blocks(cli.force_field.list_blocks)
        .cystein_bridge(cli.protein.cys)
        .neutral_termini(cli.protein.neutral_termini)
        .side_chain_fix(cli.protein.scfix)
        .position_restraints(cli.restraints.restraints.into())
        .position_restraint_force(cli.restraints.force)
        .verbosity(cli.misc.verbose)
        .elastic(build_elastic_config(&cli.elastic))
        .collagen(cli.secondary.collagen);

    if let Some(path) = &input.output_topology {
        builder = builder.output_topology(path);
    }
    if let Some(model) = input.model {
        builder = builder.model(model);
    }
    if let Some(path) = &cli.debug.write_graph {
        builder = builder.write_graph(path);
    }
    if let Some(path) = &cli.debug.write_repair {
        builder = builder.write_repair(path);
    }
    if let Some(path) = &cli.debug.write_canon {
        builder = builder.write_canon(path);
    }
    if let Some(executable) = &cli.secondary.dssp {
        builder = builder.dssp(executable);
    }
    if let Some(sequence) = &cli.secondary.sequence {
        builder = builder.secondary_structure(sequence);
    }

    for group in &input.merge {
        builder = builder.merge(group.clone());
    }
    for group in &input.ignore {
        builder = builder.ignore(group.clone());
    }
    for dir in &cli.force_field.ff_dirs {
        builder = builder.force_field_dir(dir);
    }
    for dir in &cli.force_field.map_dirs {
        builder = builder.mapping_dir(dir);
    }
    for mutation in &cli.protein.mutate {
        builder = builder.mutate(mutation.clone());
    }
    for modification in &invocation.modifications {
        builder = match modification {
            Modification::Modify(spec) => builder.modify(spec.clone()),
            Modification::Nter(name) => builder.nter(name),
            Modification::Cter(name) => builder.cter(name),
        };
    }
    for budget in &cli.misc.maxwarn {
        builder = builder.maxwarn(budget.clone());
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::path::PathBuf;

    use martinize::{
        BondSource, CysteineBridge, Error, PositionRestraints, ResidueSpec,
        SecondaryStructureSource, WarningBudget,
    };

    use crate::cli::try_parse_from;

    fn build(args: &[&str]) -> Result<RunConfiguration> {
        let mut argv = vec!["martinize2", "-f", "in.pdb", "-x", "cg.pdb"];
        argv.extend_from_slice(args);
        let invocation = match try_parse_from(argv) {
            Ok(invocation) => invocation,
            Err(e) => panic!("failed to parse {:?}: {}", args, e),
        };
        build_run_config(&invocation)
    }

    #[test]
    fn minimal_command_line_gets_every_default() {
        let config = build(&[]).unwrap();
        let expected = RunConfigBuilder::new("in.pdb", "cg.pdb").build().unwrap();
        assert_eq!(config, expected);
    }

    #[test]
    fn terminus_and_modify_order_is_kept() {
        let config = build(&["-nter", "NH2", "-modify", "A-ASP45:ASP0"]).unwrap();
        assert_eq!(
            config.modifications,
            vec![ResidueSpec::nter("NH2"), ResidueSpec::new("A-ASP45", "ASP0")]
        );
    }

    #[test]
    fn ss_and_collagen_fail_before_dispatch() {
        let err = build(&["-ss", "HHHHCCCC", "-collagen"]).unwrap_err();
        assert_eq!(
            err,
            Error::ConflictingOptions {
                options: vec!["-ss", "-collagen"]
            }
        );
        assert!(err.to_string().contains("-ss"));
        assert!(err.to_string().contains("-collagen"));
    }

    #[test]
    fn dssp_and_ss_conflict() {
        let err = build(&["-dssp", "-ss", "HHH"]).unwrap_err();
        assert_eq!(err.options(), vec!["-dssp", "-ss"]);
    }

    #[test]
    fn full_command_line() {
        let config = build(&[
            "-o",
            "topol.top",
            "-ff",
            "martini22",
            "-ff-dir",
            "ffs/a",
            "ffs/b",
            "-map-dir",
            "maps",
            "-cys",
            "0.24",
            "-p",
            "ALL",
            "-pf",
            "500",
            "-elastic",
            "-ef",
            "500",
            "-eb",
            "BB,SC1",
            "-eunit",
            "chain",
            "-mutate",
            "A-PHE1:ALA",
            "-maxwarn",
            "general:2",
            "-bonds-from",
            "name",
            "-dssp",
            "/opt/mkdssp",
            "-nt",
            "-vvv",
        ])
        .unwrap();

        assert_eq!(config.output_topology, Some(PathBuf::from("topol.top")));
        assert_eq!(config.force_field, "martini22");
        assert_eq!(
            config.force_field_dirs,
            vec![PathBuf::from("ffs/a"), PathBuf::from("ffs/b")]
        );
        assert_eq!(config.mapping_dirs, vec![PathBuf::from("maps")]);
        assert_eq!(config.cystein_bridge, CysteineBridge::Distance(0.24));
        assert_eq!(config.position_restraints, PositionRestraints::All);
        assert_eq!(config.position_restraint_force, 500.0);
        assert!(config.elastic.enabled);
        assert_eq!(config.elastic.force_constant, 500.0);
        assert_eq!(config.elastic.beads.names(), ["BB", "SC1"]);
        assert_eq!(config.elastic.unit, martinize::ElasticUnit::Chain);
        assert_eq!(config.mutations, vec![ResidueSpec::new("A-PHE1", "ALA")]);
        assert_eq!(config.maxwarn, vec![WarningBudget::limited("general", 2)]);
        assert_eq!(config.bonds_from, BondSource::Name);
        assert_eq!(
            config.secondary_structure,
            Some(SecondaryStructureSource::Dssp("/opt/mkdssp".into()))
        );
        assert!(config.neutral_termini);
        assert!(config.modifications.is_empty());
        assert_eq!(config.verbosity, 2);
    }
}
