use tracing::debug;

use crate::config::{DEFAULT_FDR_GRID, SearchConfig};
use crate::dispatch::types::PowerParams;
use crate::two_stage::evaluate::evaluate_two_stage;
use crate::two_stage::types::{OptimalFdr, TwoStageParams};
use crate::util::root_find::bisect_within_tol;

/// Grid search for the stage-1 FDR threshold maximizing joint power.
///
/// Uses `DEFAULT_FDR_GRID` when no candidates are given. Among equal joint
/// powers the first candidate wins. `None` only for an empty candidate list.
pub fn find_optimal_stage1_fdr(
    base: &PowerParams,
    design: &TwoStageParams,
    maybe_candidates: Option<&[f64]>,
) -> Option<OptimalFdr> {
    let candidates = maybe_candidates.unwrap_or(DEFAULT_FDR_GRID.as_slice());
    let mut best: Option<OptimalFdr> = None;
    for &stage1_fdr in candidates {
        let result = evaluate_two_stage(base, &design.with_stage1_fdr(stage1_fdr));
        debug!(stage1_fdr, joint_power = result.joint_power, "stage-1 FDR candidate");
        let improves = match &best {
            Some(current) => result.joint_power > current.result.joint_power,
            None => true,
        };
        if improves {
            best = Some(OptimalFdr { stage1_fdr, result });
        }
    }
    best
}

/// Stage-2 sample size giving `target_power` joint power, by bisection over
/// `search.lower..=search.upper`.
///
/// Stops once joint power is within `search.tol` of the target; if the
/// iteration cap is hit first, returns the midpoint of the last bracket. An
/// unreachable target drives the result to `search.upper`.
pub fn calculate_required_stage2_size(
    base: &PowerParams,
    design: &TwoStageParams,
    target_power: f64,
    search: &SearchConfig,
) -> f64 {
    let joint_power_at = |stage2_sample_size: f64| {
        evaluate_two_stage(base, &design.with_stage2_sample_size(stage2_sample_size)).joint_power
    };
    bisect_within_tol(
        joint_power_at,
        search.lower,
        search.upper,
        target_power,
        search.tol,
        search.max_iter,
    )
}
