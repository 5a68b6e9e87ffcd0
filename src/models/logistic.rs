//----------------------------------------
// Logistic regression
//----------------------------------------
use crate::models::types::EffectScale;
use crate::models::wald::{
    information_required, is_probability, sanitize_r2, wald_min_effect, wald_power,
};

/// Sampling of a binary outcome for logistic regression
#[derive(Debug, PartialEq, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LogisticDesign {
    /// Cohort or cross-sectional sample with outcome `prevalence`
    Population { sample_size: f64, prevalence: f64 },
    /// Outcome-dependent sampling (case-control, nested case-control)
    CaseControl { cases: f64, controls: f64 },
}

impl LogisticDesign {
    /// Subjects analysed
    pub fn size(&self) -> f64 {
        match *self {
            LogisticDesign::Population { sample_size, .. } => sample_size,
            LogisticDesign::CaseControl { cases, controls } => cases + controls,
        }
    }

    /// Same design with `size` subjects; case-control keeps its case fraction
    pub fn with_size(&self, size: f64) -> Self {
        match *self {
            LogisticDesign::Population { prevalence, .. } => LogisticDesign::Population {
                sample_size: size,
                prevalence,
            },
            LogisticDesign::CaseControl { cases, controls } => {
                let case_fraction = cases / (cases + controls);
                LogisticDesign::CaseControl {
                    cases: size * case_fraction,
                    controls: size * (1.0 - case_fraction),
                }
            }
        }
    }

    /// Variance of the log OR per subject, i.e. SE² × n × (1 - R²)
    fn unit_variance(&self) -> f64 {
        match *self {
            LogisticDesign::Population { prevalence, .. } => {
                if is_probability(prevalence) {
                    1.0 / (prevalence * (1.0 - prevalence))
                } else {
                    f64::INFINITY
                }
            }
            LogisticDesign::CaseControl { cases, controls } => {
                if cases > 0.0 && controls > 0.0 {
                    let q = cases / (cases + controls);
                    1.0 / q + 1.0 / (1.0 - q)
                } else {
                    f64::INFINITY
                }
            }
        }
    }
}

/// Hsieh's SE of the log OR for a population sample
pub fn logistic_se(sample_size: f64, prevalence: f64, covariate_r2: f64) -> f64 {
    if !(sample_size > 0.0) || !is_probability(prevalence) {
        return f64::INFINITY;
    }
    let r2 = sanitize_r2(covariate_r2);
    1.0 / (sample_size * prevalence * (1.0 - prevalence) * (1.0 - r2)).sqrt()
}

/// SE of the log OR from case and control counts
pub fn logistic_case_control_se(cases: f64, controls: f64, covariate_r2: f64) -> f64 {
    if !(cases > 0.0 && controls > 0.0) {
        return f64::INFINITY;
    }
    let r2 = sanitize_r2(covariate_r2);
    ((1.0 / cases + 1.0 / controls) / (1.0 - r2)).sqrt()
}

pub fn logistic_design_se(design: &LogisticDesign, covariate_r2: f64) -> f64 {
    match *design {
        LogisticDesign::Population {
            sample_size,
            prevalence,
        } => logistic_se(sample_size, prevalence, covariate_r2),
        LogisticDesign::CaseControl { cases, controls } => {
            logistic_case_control_se(cases, controls, covariate_r2)
        }
    }
}

pub fn logistic_power(
    odds_ratio: f64,
    design: &LogisticDesign,
    covariate_r2: f64,
    alpha: f64,
) -> f64 {
    let se = logistic_design_se(design, covariate_r2);
    wald_power(odds_ratio, EffectScale::Ratio, se, alpha)
}

pub fn logistic_min_effect(
    target_power: f64,
    design: &LogisticDesign,
    covariate_r2: f64,
    alpha: f64,
) -> f64 {
    let se = logistic_design_se(design, covariate_r2);
    wald_min_effect(EffectScale::Ratio, se, alpha, target_power)
}

/// Required subjects for the design's prevalence (or case fraction); the
/// size carried by `design` is ignored
pub fn logistic_required_sample_size(
    odds_ratio: f64,
    target_power: f64,
    design: &LogisticDesign,
    covariate_r2: f64,
    alpha: f64,
) -> f64 {
    let info = information_required(odds_ratio, EffectScale::Ratio, alpha, target_power);
    let r2 = sanitize_r2(covariate_r2);
    (info * design.unit_variance() / (1.0 - r2)).ceil()
}
