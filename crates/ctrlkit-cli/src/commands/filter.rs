//! Run a filter spec over a sample sequence

use anyhow::Result;
use ctrlkit_filters::FilterSpec;
use tracing::debug;

use crate::commands::FilterArgs;
use crate::error::CliError;
use crate::output;

/// Parse and build the spec, then feed it every sample in order.
pub fn apply(spec_json: &str, samples: &[f32]) -> Result<(FilterSpec, Vec<f32>), CliError> {
    let spec: FilterSpec = serde_json::from_str(spec_json)
        .map_err(|e| CliError::InvalidFilterSpec(e.to_string()))?;
    let mut filter = spec
        .build()
        .map_err(|e| CliError::InvalidFilterSpec(e.to_string()))?;
    debug!(kind = spec.kind(), samples = samples.len(), "filter built");

    let filtered = samples.iter().map(|&x| filter.update(x)).collect();
    Ok((spec, filtered))
}

pub fn execute(args: &FilterArgs, json: bool) -> Result<()> {
    let (spec, filtered) = apply(&args.spec, &args.samples)?;
    output::print_filter_output(&spec, &args.samples, &filtered, json)
}
