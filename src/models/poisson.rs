//----------------------------------------
// Modified Poisson regression (robust variance)
//----------------------------------------
use crate::models::types::EffectScale;
use crate::models::wald::{
    information_required, is_probability, sanitize_r2, wald_min_effect, wald_power,
};

/// Zou's sandwich approximation to the SE of the log RR
pub fn poisson_se(sample_size: f64, prevalence: f64, covariate_r2: f64) -> f64 {
    if !(sample_size > 0.0) || !is_probability(prevalence) {
        return f64::INFINITY;
    }
    let r2 = sanitize_r2(covariate_r2);
    (1.0 / (sample_size * prevalence * (1.0 - r2))).sqrt()
}

pub fn poisson_power(
    relative_risk: f64,
    sample_size: f64,
    prevalence: f64,
    covariate_r2: f64,
    alpha: f64,
) -> f64 {
    let se = poisson_se(sample_size, prevalence, covariate_r2);
    wald_power(relative_risk, EffectScale::Ratio, se, alpha)
}

pub fn poisson_min_effect(
    target_power: f64,
    sample_size: f64,
    prevalence: f64,
    covariate_r2: f64,
    alpha: f64,
) -> f64 {
    let se = poisson_se(sample_size, prevalence, covariate_r2);
    wald_min_effect(EffectScale::Ratio, se, alpha, target_power)
}

pub fn poisson_required_sample_size(
    relative_risk: f64,
    target_power: f64,
    prevalence: f64,
    covariate_r2: f64,
    alpha: f64,
) -> f64 {
    if !is_probability(prevalence) {
        return f64::INFINITY;
    }
    let info = information_required(relative_risk, EffectScale::Ratio, alpha, target_power);
    let r2 = sanitize_r2(covariate_r2);
    (info / (prevalence * (1.0 - r2))).ceil()
}
