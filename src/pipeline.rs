//! Hand-off to the structure-processing pipeline.
//!
//! The pipeline itself lives outside this crate. [`dispatch`] is the single
//! point where a finished [`RunConfiguration`] leaves the front end.

use log::info;

use crate::config::RunConfiguration;

/// A consumer of resolved configurations.
///
/// `run` takes both the pipeline and the configuration by value: a
/// configuration is processed at most once and nothing can be added to it
/// afterwards.
pub trait Pipeline {
    /// Failure raised by the pipeline.
    type Error: std::error::Error + Send + Sync + 'static;

    fn run(self, config: RunConfiguration) -> Result<(), Self::Error>;
}

/// Passes `config` to `pipeline` in exactly one call.
///
/// There is no retry. Whatever error the pipeline raises is returned as-is.
pub fn dispatch<P: Pipeline>(pipeline: P, config: RunConfiguration) -> Result<(), P::Error> {
    info!(
        "dispatching {} -> {} (force field: {})",
        config.input.display(),
        config.output_structure.display(),
        config.force_field
    );
    pipeline.run(config)
}
