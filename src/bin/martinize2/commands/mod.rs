use anyhow::Result;
use log::debug;

use martinize::{CysteineBridge, RunConfiguration, SecondaryStructureSource, dispatch};

use crate::cli::Invocation;
use crate::config::build_run_config;
use crate::display::{Context, Progress, print_config_summary};
use crate::pipeline::ManifestPipeline;
use crate::util::convert::{bond_source_display_name, position_restraints_display_name};

const TOTAL_STEPS: u8 = 2;

pub fn run(invocation: Invocation, ctx: Context) -> Result<()> {
    let mut progress = Progress::new(ctx.interactive, TOTAL_STEPS);

    progress.step("Resolving options");
    let config = build_run_config(&invocation)?;
    debug!("{:#?}", config);

    let resolve_substeps = build_resolve_substeps(&config);
    progress.complete_step(&resolve_substeps);

    if ctx.interactive {
        print_config_summary(&config);
    }

    let pipeline = ManifestPipeline::new(invocation.cli.misc.manifest.clone());
    let target = pipeline.target_name();

    progress.step("Dispatching to pipeline");
    dispatch(pipeline, config)?;
    progress.complete_step(&[format!("Write run manifest to {}", target)]);

    progress.finish();

    Ok(())
}

fn build_resolve_substeps(config: &RunConfiguration) -> Vec<String> {
    let mut steps = Vec::new();

    steps.push(format!(
        "Map {} to {}",
        config.from_force_field, config.force_field
    ));
    steps.push(format!(
        "Bonds from {}",
        bond_source_display_name(config.bonds_from)
    ));

    if !config.ignore.is_empty() {
        let names: usize = config.ignore.iter().map(|g| g.len()).sum();
        steps.push(format!("Ignore {} residue name(s)", names));
    }
    if !config.merge.is_empty() {
        steps.push(format!("Merge {} chain group(s)", config.merge.len()));
    }

    match config.cystein_bridge {
        CysteineBridge::Auto => steps.push("Detect cystine bridges automatically".to_string()),
        CysteineBridge::Distance(d) => {
            steps.push(format!("Detect cystine bridges (cutoff: {} nm)", d))
        }
        CysteineBridge::None => {}
    }

    if let Some(source) = &config.secondary_structure {
        let description = match source {
            SecondaryStructureSource::Dssp(path) => format!("run {}", path.display()),
            SecondaryStructureSource::Sequence(_) => "given sequence".to_string(),
            SecondaryStructureSource::Collagen => "collagen parameters".to_string(),
        };
        steps.push(format!("Secondary structure from {}", description));
    }

    if !config.mutations.is_empty() || !config.modifications.is_empty() {
        steps.push(format!(
            "Apply {} mutation(s), {} modification(s)",
            config.mutations.len(),
            config.modifications.len()
        ));
    }

    if config.elastic.enabled {
        steps.push(format!(
            "Elastic network (k: {}, cutoff: {}-{} nm)",
            config.elastic.force_constant, config.elastic.lower_bound, config.elastic.upper_bound
        ));
    }

    steps.push(format!(
        "Position restraints: {}",
        position_restraints_display_name(config.position_restraints)
    ));

    steps
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::cli::try_parse_from;

    fn substeps(args: &[&str]) -> Vec<String> {
        let invocation = try_parse_from(args.iter().copied()).unwrap();
        build_resolve_substeps(&build_run_config(&invocation).unwrap())
    }

    #[test]
    fn default_substeps() {
        let steps = substeps(&["martinize2", "-f", "in.pdb", "-x", "cg.pdb"]);
        assert_eq!(
            steps,
            vec![
                "Map universal to martini3001".to_string(),
                "Bonds from names + distances".to_string(),
                "Position restraints: none".to_string(),
            ]
        );
    }

    #[test]
    fn substeps_mention_requested_work() {
        let steps = substeps(&[
            "martinize2", "-f", "in.pdb", "-x", "cg.pdb", "-cys", "auto", "-collagen", "-nter",
            "NH2", "-ignore", "HOH,NA",
        ]);
        assert!(steps.contains(&"Detect cystine bridges automatically".to_string()));
        assert!(steps.contains(&"Secondary structure from collagen parameters".to_string()));
        assert!(steps.contains(&"Apply 0 mutation(s), 1 modification(s)".to_string()));
        assert!(steps.contains(&"Ignore 2 residue name(s)".to_string()));
    }

    #[test]
    fn conflicting_sources_fail_before_dispatch() {
        let invocation = try_parse_from([
            "martinize2", "-f", "in.pdb", "-x", "cg.pdb", "-ss", "HHH", "-collagen",
            "-manifest", "/nonexistent/dir/run.toml",
        ])
        .unwrap();
        let err = run(invocation, Context { interactive: false }).unwrap_err();
        let err = err.downcast_ref::<martinize::Error>().unwrap();
        assert!(matches!(err, martinize::Error::ConflictingOptions { .. }));
    }

    #[test]
    fn pipeline_errors_propagate_unchanged() {
        let invocation = try_parse_from([
            "martinize2", "-f", "in.pdb", "-x", "cg.pdb", "-manifest",
            "/nonexistent/dir/run.toml",
        ])
        .unwrap();
        let err = run(invocation, Context { interactive: false }).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<crate::pipeline::ManifestError>(),
            Some(crate::pipeline::ManifestError::Create { .. })
        ));
    }
}
