use crate::dispatch::types::{ModelParams, PowerParams};
use crate::models::cox::{cox_min_effect, cox_power, cox_required_events, cox_se};
use crate::models::gee::{gee_min_effect, gee_power, gee_required_observations, gee_se};
use crate::models::linear::{
    linear_min_effect, linear_power, linear_required_sample_size, linear_se,
};
use crate::models::logistic::{
    logistic_design_se, logistic_min_effect, logistic_power, logistic_required_sample_size,
};
use crate::models::poisson::{
    poisson_min_effect, poisson_power, poisson_required_sample_size, poisson_se,
};

/// Standard error of the effect estimate (log scale for ratio effects)
pub fn standard_error(params: &PowerParams) -> f64 {
    let r2 = params.covariate_r2;
    match params.model {
        ModelParams::Cox { events, design, .. } => cox_se(events, &design, r2),
        ModelParams::Linear {
            sample_size,
            residual_sd,
            ..
        } => linear_se(sample_size, residual_sd, r2),
        ModelParams::Logistic { design, .. } => logistic_design_se(&design, r2),
        ModelParams::Poisson {
            sample_size,
            prevalence,
            ..
        } => poisson_se(sample_size, prevalence, r2),
        ModelParams::Gee {
            total_observations,
            residual_sd,
            cluster_size,
            icc,
            ..
        } => gee_se(total_observations, residual_sd, cluster_size, icc, r2),
    }
}

pub fn calculate_power(params: &PowerParams) -> f64 {
    let (alpha, r2) = (params.alpha, params.covariate_r2);
    match params.model {
        ModelParams::Cox {
            hazard_ratio,
            events,
            design,
        } => cox_power(hazard_ratio, events, &design, r2, alpha),
        ModelParams::Linear {
            beta,
            sample_size,
            residual_sd,
        } => linear_power(beta, sample_size, residual_sd, r2, alpha),
        ModelParams::Logistic { odds_ratio, design } => {
            logistic_power(odds_ratio, &design, r2, alpha)
        }
        ModelParams::Poisson {
            relative_risk,
            sample_size,
            prevalence,
        } => poisson_power(relative_risk, sample_size, prevalence, r2, alpha),
        ModelParams::Gee {
            beta,
            total_observations,
            residual_sd,
            cluster_size,
            icc,
        } => gee_power(
            beta,
            total_observations,
            residual_sd,
            cluster_size,
            icc,
            r2,
            alpha,
        ),
    }
}

/// Minimum detectable effect at `target_power`; the effect carried by
/// `params` is ignored
pub fn calculate_min_effect(params: &PowerParams, target_power: f64) -> f64 {
    let (alpha, r2) = (params.alpha, params.covariate_r2);
    match params.model {
        ModelParams::Cox { events, design, .. } => {
            cox_min_effect(target_power, events, &design, r2, alpha)
        }
        ModelParams::Linear {
            sample_size,
            residual_sd,
            ..
        } => linear_min_effect(target_power, sample_size, residual_sd, r2, alpha),
        ModelParams::Logistic { design, .. } => {
            logistic_min_effect(target_power, &design, r2, alpha)
        }
        ModelParams::Poisson {
            sample_size,
            prevalence,
            ..
        } => poisson_min_effect(target_power, sample_size, prevalence, r2, alpha),
        ModelParams::Gee {
            total_observations,
            residual_sd,
            cluster_size,
            icc,
            ..
        } => gee_min_effect(
            target_power,
            total_observations,
            residual_sd,
            cluster_size,
            icc,
            r2,
            alpha,
        ),
    }
}

/// Size (see `ModelParams::size`) needed to reach `target_power`; the size
/// carried by `params` is ignored
pub fn calculate_required_size(params: &PowerParams, target_power: f64) -> f64 {
    let (alpha, r2) = (params.alpha, params.covariate_r2);
    match params.model {
        ModelParams::Cox {
            hazard_ratio,
            design,
            ..
        } => cox_required_events(hazard_ratio, target_power, &design, r2, alpha),
        ModelParams::Linear {
            beta, residual_sd, ..
        } => linear_required_sample_size(beta, target_power, residual_sd, r2, alpha),
        ModelParams::Logistic { odds_ratio, design } => {
            logistic_required_sample_size(odds_ratio, target_power, &design, r2, alpha)
        }
        ModelParams::Poisson {
            relative_risk,
            prevalence,
            ..
        } => poisson_required_sample_size(relative_risk, target_power, prevalence, r2, alpha),
        ModelParams::Gee {
            beta,
            residual_sd,
            cluster_size,
            icc,
            ..
        } => gee_required_observations(
            beta,
            target_power,
            residual_sd,
            cluster_size,
            icc,
            r2,
            alpha,
        ),
    }
}
