use tracing::debug;

use crate::alpha::{effective_alpha::effective_alpha, types::CorrectionMethod};
use crate::config::PROTEOME_WIDE_ALPHA;
use crate::dispatch::{types::PowerParams, unified::calculate_power};
use crate::two_stage::types::{TwoStageParams, TwoStageResult};

/// Power and cost of screening `stage1_proteins` in a discovery sample and
/// re-testing the expected survivors in a validation sample.
///
/// `base` supplies the model and effect size; its alpha and size are
/// replaced per stage.
pub fn evaluate_two_stage(base: &PowerParams, design: &TwoStageParams) -> TwoStageResult {
    let n_proteins = design.stage1_proteins as f64;
    let expected_hits = design.expected_hits.clamp(0.0, n_proteins);
    let overlap = if design.sample_overlap.is_nan() {
        0.0
    } else {
        design.sample_overlap.clamp(0.0, 1.0)
    };

    //----------------------------------------
    // Stage 1: proteome-wide screen
    //----------------------------------------
    let stage1_alpha = effective_alpha(
        design.stage1_fdr,
        design.stage1_proteins,
        CorrectionMethod::Fdr,
    );
    let stage1_power = calculate_power(
        &base
            .with_size(design.stage1_sample_size)
            .with_alpha(stage1_alpha),
    );

    // True hits passing plus nulls rejected at the per-test alpha
    let expected_advancing =
        expected_hits * stage1_power + (n_proteins - expected_hits) * stage1_alpha;

    //----------------------------------------
    // Stage 2: validation of advancing proteins
    //----------------------------------------
    let stage2_alpha = if expected_advancing > 1.0 {
        design.stage2_alpha / expected_advancing.ceil()
    } else {
        design.stage2_alpha
    };
    // Overlapping subjects carry only part of their information into stage 2
    let stage2_effective_size = if overlap > 0.0 {
        design.stage2_sample_size * (1.0 - overlap * 0.5)
    } else {
        design.stage2_sample_size
    };
    let stage2_power =
        calculate_power(&base.with_size(stage2_effective_size).with_alpha(stage2_alpha));

    let joint_power = stage1_power * stage2_power;
    let total_sample_size = design.stage1_sample_size + design.stage2_sample_size * (1.0 - overlap);

    //----------------------------------------
    // Single-stage comparator at the same total size
    //----------------------------------------
    let single_stage_alpha = effective_alpha(
        PROTEOME_WIDE_ALPHA,
        design.stage1_proteins,
        CorrectionMethod::Bonferroni,
    );
    let single_stage_power = calculate_power(
        &base
            .with_size(total_sample_size)
            .with_alpha(single_stage_alpha),
    );
    let cost_efficiency = if single_stage_power > 0.0 {
        joint_power / single_stage_power
    } else {
        0.0
    };

    debug!(
        stage1_power,
        stage1_alpha,
        expected_advancing,
        stage2_power,
        stage2_alpha,
        joint_power,
        single_stage_power,
        "evaluated two-stage design"
    );

    TwoStageResult {
        stage1_power,
        stage1_alpha,
        stage2_power,
        joint_power,
        expected_advancing,
        stage2_alpha,
        cost_efficiency,
        total_sample_size,
    }
}
