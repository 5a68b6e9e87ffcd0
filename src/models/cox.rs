//----------------------------------------
// Cox proportional hazards
//----------------------------------------
use crate::models::types::EffectScale;
use crate::models::wald::{information_required, sanitize_r2, wald_min_effect, wald_power};

/// Sampling scheme of the Cox analysis; designs other than full cohort
/// inflate the variance of the log-HR estimate
#[derive(Default, Debug, PartialEq, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CoxDesign {
    #[default]
    Cohort,
    /// Barlow-weighted case-cohort analysis
    CaseCohort { subcohort_size: f64, total_cohort: f64 },
    /// Risk-set sampling with `matching_ratio` controls per case
    NestedCaseControl { matching_ratio: f64 },
}

impl CoxDesign {
    /// Multiplier on the cohort variance of the log hazard ratio; infinite
    /// when the design parameters are unusable
    pub fn variance_inflation(&self) -> f64 {
        match *self {
            CoxDesign::Cohort => 1.0,
            CoxDesign::CaseCohort {
                subcohort_size,
                total_cohort,
            } => case_cohort_vif(subcohort_size, total_cohort),
            CoxDesign::NestedCaseControl { matching_ratio } => {
                if matching_ratio > 0.0 && matching_ratio.is_finite() {
                    1.0 + 1.0 / matching_ratio
                } else {
                    f64::INFINITY
                }
            }
        }
    }
}

/// VIF = 1 + (1 - f) / f for subcohort sampling fraction f
pub fn case_cohort_vif(subcohort_size: f64, total_cohort: f64) -> f64 {
    if !(subcohort_size > 0.0 && total_cohort > 0.0) || subcohort_size > total_cohort {
        return f64::INFINITY;
    }
    let f = subcohort_size / total_cohort;
    1.0 + (1.0 - f) / f
}

/// SE of the log hazard ratio given `events` observed events
pub fn cox_se(events: f64, design: &CoxDesign, covariate_r2: f64) -> f64 {
    if !(events > 0.0) {
        return f64::INFINITY;
    }
    let r2 = sanitize_r2(covariate_r2);
    design.variance_inflation().sqrt() / (events * (1.0 - r2)).sqrt()
}

pub fn cox_power(
    hazard_ratio: f64,
    events: f64,
    design: &CoxDesign,
    covariate_r2: f64,
    alpha: f64,
) -> f64 {
    let se = cox_se(events, design, covariate_r2);
    wald_power(hazard_ratio, EffectScale::Ratio, se, alpha)
}

/// Minimum detectable hazard ratio (> 1)
pub fn cox_min_effect(
    target_power: f64,
    events: f64,
    design: &CoxDesign,
    covariate_r2: f64,
    alpha: f64,
) -> f64 {
    let se = cox_se(events, design, covariate_r2);
    wald_min_effect(EffectScale::Ratio, se, alpha, target_power)
}

/// Schoenfeld's required number of events, inflated for the sampling design
pub fn cox_required_events(
    hazard_ratio: f64,
    target_power: f64,
    design: &CoxDesign,
    covariate_r2: f64,
    alpha: f64,
) -> f64 {
    let info = information_required(hazard_ratio, EffectScale::Ratio, alpha, target_power);
    let r2 = sanitize_r2(covariate_r2);
    (design.variance_inflation() * info / (1.0 - r2)).ceil()
}
