use crate::alpha::{effective_alpha::effective_alpha, types::CorrectionMethod};
use crate::curves::types::ScenarioRow;
use crate::dispatch::types::PowerParams;
use crate::dispatch::unified::{calculate_min_effect, calculate_power, calculate_required_size};

/// Scenario table across numbers of proteins tested. Each row re-derives the
/// per-test alpha from `threshold`; the alpha in `params` is ignored.
pub fn generate_table_data(
    params: &PowerParams,
    protein_counts: &[usize],
    threshold: f64,
    method: CorrectionMethod,
    target_power: f64,
) -> Vec<ScenarioRow> {
    protein_counts
        .iter()
        .map(|&proteins| {
            let alpha = effective_alpha(threshold, proteins, method);
            let at_alpha = params.with_alpha(alpha);
            ScenarioRow {
                proteins,
                alpha,
                min_effect: calculate_min_effect(&at_alpha, target_power),
                power: calculate_power(&at_alpha),
                required_size: calculate_required_size(&at_alpha, target_power),
            }
        })
        .collect()
}
