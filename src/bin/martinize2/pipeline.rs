use std::io::{self, Write};
use std::path::PathBuf;

use log::debug;
use thiserror::Error;

use martinize::{Pipeline, RunConfiguration};

use crate::io::create_output;

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to serialize run manifest: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("failed to open manifest destination '{target}'")]
    Create {
        target: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to write run manifest")]
    Write(#[source] io::Error),
}

/// Hands the resolved configuration to the structure-processing tool as a
/// TOML run manifest, written to a file or to stdout.
///
/// The destination is opened only when the pipeline runs.
pub struct ManifestPipeline {
    destination: Option<PathBuf>,
}

impl ManifestPipeline {
    pub fn new(destination: Option<PathBuf>) -> Self {
        Self { destination }
    }

    pub fn target_name(&self) -> String {
        self.destination
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "stdout".to_string())
    }
}

impl Pipeline for ManifestPipeline {
    type Error = ManifestError;

    fn run(self, config: RunConfiguration) -> Result<(), ManifestError> {
        let target = self.target_name();
        let mut out =
            create_output(self.destination.as_deref()).map_err(|source| ManifestError::Create {
                target: target.clone(),
                source,
            })?;
        write_manifest(&mut out, &config)?;
        debug!("run manifest written to {}", target);
        Ok(())
    }
}

pub fn render_manifest(config: &RunConfiguration) -> Result<String, ManifestError> {
    Ok(toml::to_string(config)?)
}

pub fn write_manifest(out: &mut impl Write, config: &RunConfiguration) -> Result<(), ManifestError> {
    let manifest = render_manifest(config)?;
    out.write_all(manifest.as_bytes())
        .and_then(|()| out.flush())
        .map_err(ManifestError::Write)
}

#[cfg(test)]
mod tests {
    use super::*;

    use martinize::{
        CysteineBridge, ResidueSpec, RunConfigBuilder, WarningBudget, parse_name_group,
    };

    fn config() -> RunConfiguration {
        RunConfigBuilder::new("in.pdb", "cg.pdb")
            .output_topology("topol.top")
            .cystein_bridge(CysteineBridge::Distance(0.24))
            .ignore(parse_name_group("HOH"))
            .ignore(parse_name_group("LIG,NA"))
            .nter("NH2")
            .modify(ResidueSpec::new("A-ASP45", "ASP0"))
            .maxwarn(WarningBudget::any(3))
            .collagen(true)
            .build()
            .unwrap()
    }

    #[test]
    fn manifest_carries_resolved_values() {
        let manifest = render_manifest(&config()).unwrap();
        assert!(manifest.contains("input = \"in.pdb\""));
        assert!(manifest.contains("output_topology = \"topol.top\""));
        assert!(manifest.contains("cystein_bridge = \"0.24\""));
        assert!(manifest.contains("force_field = \"martini3001\""));
        assert!(manifest.contains("secondary_structure = \"collagen\""));
        assert!(manifest.contains("selector = \"nter\""));
        assert!(manifest.contains("selector = \"A-ASP45\""));
    }

    #[test]
    fn manifest_keeps_modification_order() {
        let manifest = render_manifest(&config()).unwrap();
        let nter = manifest.find("\"nter\"").unwrap();
        let asp = manifest.find("\"A-ASP45\"").unwrap();
        assert!(nter < asp);
    }

    #[test]
    fn unset_paths_are_omitted() {
        let config = RunConfigBuilder::new("in.pdb", "cg.pdb").build().unwrap();
        let manifest = render_manifest(&config).unwrap();
        assert!(!manifest.contains("output_topology"));
        assert!(!manifest.contains("write_graph"));
    }

    #[test]
    fn write_manifest_to_buffer() {
        let mut buf: Vec<u8> = Vec::new();
        write_manifest(&mut buf, &config()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, render_manifest(&config()).unwrap());
    }

    #[test]
    fn target_name_defaults_to_stdout() {
        assert_eq!(ManifestPipeline::new(None).target_name(), "stdout");
        assert_eq!(
            ManifestPipeline::new(Some("run.toml".into())).target_name(),
            "run.toml"
        );
    }
}
