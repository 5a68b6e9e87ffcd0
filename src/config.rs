//----------------------------------------
// Engine defaults
//----------------------------------------
use derive_new::new;

/// Residual SD assumed for linear/GEE models when none is given
pub const DEFAULT_RESIDUAL_SD: f64 = 1.0;
/// Outcome prevalence assumed for logistic/Poisson models when none is given
pub const DEFAULT_PREVALENCE: f64 = 0.1;
pub const DEFAULT_CLUSTER_SIZE: f64 = 1.0;
pub const DEFAULT_ICC: f64 = 0.0;
/// Controls per case in nested case-control sampling
pub const DEFAULT_MATCHING_RATIO: f64 = 1.0;
pub const DEFAULT_TARGET_POWER: f64 = 0.8;
/// Family-wise threshold of the single-stage comparator in two-stage designs
pub const PROTEOME_WIDE_ALPHA: f64 = 0.05;
pub const DEFAULT_FDR_GRID: [f64; 7] = [0.01, 0.025, 0.05, 0.10, 0.15, 0.20, 0.25];

/// Bracket, iteration cap and stopping tolerance for sample size searches
#[derive(new, Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    pub lower: f64,
    pub upper: f64,
    pub max_iter: usize,
    pub tol: f64,
}

impl Default for SearchConfig {
    /// Stage-2 sample size search
    fn default() -> Self {
        Self::new(50., 10_000., 50, 0.005)
    }
}

impl SearchConfig {
    /// Smallest-size search used by `find_size_required`
    pub fn for_size_search() -> Self {
        Self::new(1., 100_000., 50, 0.0)
    }
}
