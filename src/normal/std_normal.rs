use std::f64::consts::{PI, SQRT_2};

use statrs::function::erf::{erfc, erfc_inv};

use crate::error::PwasErr;
use crate::normal::error::NormalDistErr;

pub fn std_normal_pdf(z: f64) -> f64 {
    (-z * z / 2.0).exp() / (2.0 * PI).sqrt()
}

/// Standard normal CDF, P(Z <= z)
pub fn std_normal_cdf(z: f64) -> f64 {
    // erfc keeps precision in the lower tail where 1 + erf(x) cancels
    0.5 * erfc(-z / SQRT_2)
}

/// Inverse of the standard normal CDF.
///
/// Fails for `p` outside the open interval (0, 1) instead of returning an
/// infinite or NaN quantile.
pub fn std_normal_quantile(p: f64) -> Result<f64, PwasErr> {
    if p.is_nan() || p <= 0.0 || p >= 1.0 {
        return Err(NormalDistErr::QuantileOutOfBounds(p).into());
    }
    Ok(-SQRT_2 * erfc_inv(2.0 * p))
}
