//! Orchestration for `fitcheck evaluate` and `fitcheck share`.

use std::path::Path;

use anyhow::Result;
use tracing::info;

use crate::core::aggregate::{AggregateResult, evaluate};
use crate::core::thresholds::ThresholdTable;
use crate::io::input::load_input;

/// Load an input file and evaluate it against `table`.
///
/// Nothing is evaluated unless the whole input passes validation.
pub fn assess_file(path: &Path, table: &ThresholdTable) -> Result<AggregateResult> {
    let input = load_input(path)?;
    let result = evaluate(&input, table)?;
    info!(
        path = %path.display(),
        table = table.version,
        overall_score = result.overall_score,
        band = result.overall_band.label(),
        asymmetry = result.any_asymmetry(),
        "assessment evaluated"
    );
    Ok(result)
}
