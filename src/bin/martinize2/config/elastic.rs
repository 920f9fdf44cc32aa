use martinize::ElasticNetworkConfig;

use crate::cli::ElasticOptions;

pub fn build_elastic_config(opts: &ElasticOptions) -> ElasticNetworkConfig {
    ElasticNetworkConfig {
        enabled: opts.enabled,
        force_constant: opts.force_constant,
        lower_bound: opts.lower_bound,
        upper_bound: opts.upper_bound,
        decay_factor: opts.decay_factor,
        decay_power: opts.decay_power,
        minimum_force: opts.minimum_force,
        min_residue_distance: opts.min_residue_distance,
        unit: opts.unit.into(),
        beads: opts.beads.clone(),
    }
}
