//----------------------------------------
// Linear regression on a standardized protein level
//----------------------------------------
use crate::models::types::EffectScale;
use crate::models::wald::{information_required, sanitize_r2, wald_min_effect, wald_power};

/// SE of the slope: residual SD over sqrt((n - 2)(1 - R²))
pub fn linear_se(sample_size: f64, residual_sd: f64, covariate_r2: f64) -> f64 {
    if !(sample_size > 2.0) || !(residual_sd > 0.0 && residual_sd.is_finite()) {
        return f64::INFINITY;
    }
    let r2 = sanitize_r2(covariate_r2);
    residual_sd / ((sample_size - 2.0) * (1.0 - r2)).sqrt()
}

pub fn linear_power(
    beta: f64,
    sample_size: f64,
    residual_sd: f64,
    covariate_r2: f64,
    alpha: f64,
) -> f64 {
    let se = linear_se(sample_size, residual_sd, covariate_r2);
    wald_power(beta, EffectScale::Difference, se, alpha)
}

pub fn linear_min_effect(
    target_power: f64,
    sample_size: f64,
    residual_sd: f64,
    covariate_r2: f64,
    alpha: f64,
) -> f64 {
    let se = linear_se(sample_size, residual_sd, covariate_r2);
    wald_min_effect(EffectScale::Difference, se, alpha, target_power)
}

/// Required sample size before ceiling, i.e. the n at which the power is
/// exactly on target
pub(crate) fn linear_required_unrounded(
    beta: f64,
    target_power: f64,
    residual_sd: f64,
    covariate_r2: f64,
    alpha: f64,
) -> f64 {
    if !(residual_sd > 0.0 && residual_sd.is_finite()) {
        return f64::INFINITY;
    }
    let info = information_required(beta, EffectScale::Difference, alpha, target_power);
    let r2 = sanitize_r2(covariate_r2);
    info * residual_sd * residual_sd / (1.0 - r2) + 2.0
}

pub fn linear_required_sample_size(
    beta: f64,
    target_power: f64,
    residual_sd: f64,
    covariate_r2: f64,
    alpha: f64,
) -> f64 {
    linear_required_unrounded(beta, target_power, residual_sd, covariate_r2, alpha).ceil()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn linear_se_value() {
        assert_abs_diff_eq!(linear_se(102., 2., 0.), 0.2, epsilon = 1e-12);
    }

    #[test]
    fn linear_se_too_small_sample() {
        assert!(linear_se(2., 1., 0.).is_infinite());
        assert!(linear_se(100., 0., 0.).is_infinite());
    }

    #[test]
    fn linear_power_value() {
        // lambda = 0.2 * sqrt(398) ~ 3.99
        let power = linear_power(0.2, 400., 1., 0., 0.05);
        assert_abs_diff_eq!(power, 0.9788, epsilon = 0.001);
    }

    #[test]
    fn linear_power_sign_symmetric() {
        let up = linear_power(0.15, 500., 1.2, 0.1, 1e-4);
        let down = linear_power(-0.15, 500., 1.2, 0.1, 1e-4);
        assert_abs_diff_eq!(up, down, epsilon = 1e-10);
    }

    #[test]
    fn linear_min_effect_round_trip() {
        let beta = linear_min_effect(0.9, 1000., 1., 0., 1e-5);
        assert_abs_diff_eq!(linear_power(beta, 1000., 1., 0., 1e-5), 0.9, epsilon = 1e-3);
    }

    #[test]
    fn linear_required_is_tight() {
        let n = linear_required_sample_size(0.1, 0.8, 1., 0.2, 0.001);
        assert!(linear_power(0.1, n, 1., 0.2, 0.001) >= 0.8);
        assert!(linear_power(0.1, n - 1., 1., 0.2, 0.001) < 0.8);
    }

    #[test]
    fn linear_required_zero_beta() {
        assert!(linear_required_sample_size(0., 0.8, 1., 0., 0.05).is_infinite());
    }
}
