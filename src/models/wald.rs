//----------------------------------------
// Two-sided Wald test shared by every model
//----------------------------------------
use crate::models::types::EffectScale;
use crate::normal::std_normal::{std_normal_cdf, std_normal_quantile};

/// Covariate R² outside [0, 1) is treated as no adjustment
pub fn sanitize_r2(covariate_r2: f64) -> f64 {
    if (0.0..1.0).contains(&covariate_r2) {
        covariate_r2
    } else {
        0.0
    }
}

pub(crate) fn is_probability(p: f64) -> bool {
    p > 0.0 && p < 1.0
}

/// z_{1-alpha/2} + z_{power}; `None` unless both are in (0, 1)
pub fn z_sum(alpha: f64, power: f64) -> Option<f64> {
    if !is_probability(alpha) || !is_probability(power) {
        return None;
    }
    let z_alpha = std_normal_quantile(1.0 - alpha / 2.0).ok()?;
    let z_beta = std_normal_quantile(power).ok()?;
    Some(z_alpha + z_beta)
}

/// Two-sided power for a standardized effect `lambda` = |effect| / SE.
///
/// Keeps the reverse-direction tail so that power at lambda = 0 is alpha.
pub fn two_sided_power(lambda: f64, alpha: f64) -> f64 {
    if !is_probability(alpha) || lambda.is_nan() {
        return 0.0;
    }
    let Ok(z_alpha) = std_normal_quantile(1.0 - alpha / 2.0) else {
        return 0.0;
    };
    let lambda = lambda.abs();
    (std_normal_cdf(lambda - z_alpha) + std_normal_cdf(-lambda - z_alpha)).clamp(0.0, 1.0)
}

/// Power of the two-sided Wald test of `effect` with standard error `se`
pub fn wald_power(effect: f64, scale: EffectScale, se: f64, alpha: f64) -> f64 {
    if !(se.is_finite() && se > 0.0) {
        return 0.0;
    }
    match scale.magnitude(effect) {
        Some(magnitude) => two_sided_power(magnitude / se, alpha),
        None => 0.0,
    }
}

/// Smallest effect detectable with `target_power`, ignoring the
/// reverse-direction tail. Ratio effects are reported above the null.
pub fn wald_min_effect(scale: EffectScale, se: f64, alpha: f64, target_power: f64) -> f64 {
    if !(se.is_finite() && se > 0.0) {
        return f64::INFINITY;
    }
    let Some(z) = z_sum(alpha, target_power) else {
        return f64::INFINITY;
    };
    match scale {
        EffectScale::Ratio => (z * se).exp(),
        EffectScale::Difference => z * se,
    }
}

/// Fisher information (1 / SE²) needed to detect `effect` with
/// `target_power`; the per-model required sizes scale this by their
/// per-subject variance.
///
/// Infinite for null or protective ratio effects (effect <= 1) and for a
/// zero coefficient.
pub fn information_required(effect: f64, scale: EffectScale, alpha: f64, target_power: f64) -> f64 {
    let detectable = match scale {
        EffectScale::Ratio => effect > 1.0 && effect.is_finite(),
        EffectScale::Difference => effect != 0.0 && effect.is_finite(),
    };
    if !detectable {
        return f64::INFINITY;
    }
    let (Some(z), Some(magnitude)) = (z_sum(alpha, target_power), scale.magnitude(effect)) else {
        return f64::INFINITY;
    };
    (z / magnitude).powi(2)
}
