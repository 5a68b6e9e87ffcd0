//----------------------------------------
// two-stage mod types
//----------------------------------------
use derive_new::new;

/// Discovery (stage 1) and validation (stage 2) design. Sample sizes are in
/// the units of the model's size (events for Cox).
#[derive(new, Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TwoStageParams {
    pub stage1_proteins: usize,
    pub stage1_sample_size: f64,
    pub stage2_sample_size: f64,
    pub stage1_fdr: f64,
    pub stage2_alpha: f64,
    /// Proteins with a true effect among those screened
    pub expected_hits: f64,
    /// Fraction of stage-2 subjects also measured in stage 1
    pub sample_overlap: f64,
}

impl TwoStageParams {
    pub fn with_stage1_fdr(self, stage1_fdr: f64) -> Self {
        Self { stage1_fdr, ..self }
    }

    pub fn with_stage2_sample_size(self, stage2_sample_size: f64) -> Self {
        Self {
            stage2_sample_size,
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TwoStageResult {
    pub stage1_power: f64,
    pub stage1_alpha: f64,
    pub stage2_power: f64,
    pub joint_power: f64,
    pub expected_advancing: f64,
    /// Per-protein alpha in stage 2 after Bonferroni over advancing proteins
    pub stage2_alpha: f64,
    /// Joint power over the power of one proteome-wide study of the same
    /// total size
    pub cost_efficiency: f64,
    pub total_sample_size: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptimalFdr {
    pub stage1_fdr: f64,
    pub result: TwoStageResult,
}
