//----------------------------------------
// Root lib
//----------------------------------------
//! Closed-form power, minimum detectable effect, and sample size
//! calculations for proteome-wide association studies.
//!
//! Every calculation is a two-sided Wald test on one protein, with the
//! per-protein alpha derived from a proteome-wide FDR or Bonferroni
//! threshold. Supported analyses are Cox, linear, logistic, modified Poisson
//! and GEE/mixed models, under cohort, case-control, cross-sectional,
//! case-cohort and nested case-control sampling. Two-stage
//! (discovery + validation) designs are evaluated on top of the same
//! calculators.
//!
//! Calculators never fail on out-of-range numbers: power falls back to 0,
//! effects and sizes to infinity, and the design effect to 1.

/// Per-test alpha from a family-wise threshold
pub mod alpha;
pub mod config;
/// Power curves, grids and scenario tables
pub mod curves;
/// Typed and loosely specified parameter bundles, and routing to models
pub mod dispatch;
/// This module contains error types
pub mod error;
/// Standard errors, power, minimum effects and required sizes per model
pub mod models;
pub mod normal;
/// Discovery/validation designs
pub mod two_stage;
mod util;

pub use alpha::{effective_alpha::effective_alpha, types::CorrectionMethod};
pub use config::SearchConfig;
pub use curves::{
    power_curve::{
        find_size_required, generate_power_curve, generate_power_grid, generate_size_curve,
    },
    table::generate_table_data,
    types::{CurvePoint, GridCell, ScenarioRow},
};
pub use dispatch::{
    types::{ModelParams, PowerInputs, PowerParams},
    unified::{calculate_min_effect, calculate_power, calculate_required_size, standard_error},
};
pub use error::PwasErr;
pub use models::{
    cox::CoxDesign,
    logistic::LogisticDesign,
    types::{AnalysisType, EffectScale, StudyDesign},
};
pub use normal::{
    error::NormalDistErr,
    std_normal::{std_normal_cdf, std_normal_quantile},
};
pub use two_stage::{
    evaluate::evaluate_two_stage,
    optimize::{calculate_required_stage2_size, find_optimal_stage1_fdr},
    types::{OptimalFdr, TwoStageParams, TwoStageResult},
};
pub use util::error::RootFindErr;
