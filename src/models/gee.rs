//----------------------------------------
// GEE / mixed models for clustered or repeated measures
//----------------------------------------
use crate::models::linear::{linear_required_unrounded, linear_se};
use crate::models::types::EffectScale;
use crate::models::wald::{wald_min_effect, wald_power};

/// Design effect 1 + (m - 1) ICC; no inflation for an unusable cluster
/// size or ICC
pub fn design_effect(cluster_size: f64, icc: f64) -> f64 {
    if !(cluster_size >= 1.0 && cluster_size.is_finite()) || !(0.0..=1.0).contains(&icc) {
        return 1.0;
    }
    1.0 + (cluster_size - 1.0) * icc
}

pub fn effective_sample_size(total_observations: f64, cluster_size: f64, icc: f64) -> f64 {
    total_observations / design_effect(cluster_size, icc)
}

/// Linear SE on all observations inflated by sqrt(DE)
pub fn gee_se(
    total_observations: f64,
    residual_sd: f64,
    cluster_size: f64,
    icc: f64,
    covariate_r2: f64,
) -> f64 {
    linear_se(total_observations, residual_sd, covariate_r2)
        * design_effect(cluster_size, icc).sqrt()
}

pub fn gee_power(
    beta: f64,
    total_observations: f64,
    residual_sd: f64,
    cluster_size: f64,
    icc: f64,
    covariate_r2: f64,
    alpha: f64,
) -> f64 {
    let se = gee_se(total_observations, residual_sd, cluster_size, icc, covariate_r2);
    wald_power(beta, EffectScale::Difference, se, alpha)
}

pub fn gee_min_effect(
    target_power: f64,
    total_observations: f64,
    residual_sd: f64,
    cluster_size: f64,
    icc: f64,
    covariate_r2: f64,
    alpha: f64,
) -> f64 {
    let se = gee_se(total_observations, residual_sd, cluster_size, icc, covariate_r2);
    wald_min_effect(EffectScale::Difference, se, alpha, target_power)
}

/// Observations needed: the independent-sample requirement times DE
pub fn gee_required_observations(
    beta: f64,
    target_power: f64,
    residual_sd: f64,
    cluster_size: f64,
    icc: f64,
    covariate_r2: f64,
    alpha: f64,
) -> f64 {
    let n_effective =
        linear_required_unrounded(beta, target_power, residual_sd, covariate_r2, alpha);
    (n_effective * design_effect(cluster_size, icc)).ceil()
}

pub fn required_clusters(required_observations: f64, cluster_size: f64) -> f64 {
    let cluster_size = if cluster_size >= 1.0 && cluster_size.is_finite() {
        cluster_size
    } else {
        1.0
    };
    (required_observations / cluster_size).ceil()
}
