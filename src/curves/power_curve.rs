use itertools::iproduct;
use tracing::debug;

use crate::config::SearchConfig;
use crate::curves::types::{CurvePoint, GridCell};
use crate::dispatch::{types::PowerParams, unified::calculate_power};
use crate::util::root_find::smallest_reaching;

/// Power at each effect size, everything else held at `params`
pub fn generate_power_curve(params: &PowerParams, effects: &[f64]) -> Vec<CurvePoint> {
    effects
        .iter()
        .map(|&x| CurvePoint {
            x,
            power: calculate_power(&params.with_effect(x)),
        })
        .collect()
}

/// Power at each size (events for Cox)
pub fn generate_size_curve(params: &PowerParams, sizes: &[f64]) -> Vec<CurvePoint> {
    sizes
        .iter()
        .map(|&x| CurvePoint {
            x,
            power: calculate_power(&params.with_size(x)),
        })
        .collect()
}

/// Power over every (effect, size) pair, effect-major
pub fn generate_power_grid(params: &PowerParams, effects: &[f64], sizes: &[f64]) -> Vec<GridCell> {
    iproduct!(effects.iter(), sizes.iter())
        .map(|(&effect, &size)| GridCell {
            effect,
            size,
            power: calculate_power(&params.with_effect(effect).with_size(size)),
        })
        .collect()
}

/// Smallest whole size reaching `target_power`, found by bisection on the
/// power function rather than the closed form. Infinite if `search.upper`
/// does not reach the target.
pub fn find_size_required(params: &PowerParams, target_power: f64, search: &SearchConfig) -> f64 {
    let power_at = |size: f64| calculate_power(&params.with_size(size));
    match smallest_reaching(
        power_at,
        search.lower,
        search.upper,
        target_power,
        search.max_iter,
    ) {
        Ok(size) => size,
        Err(e) => {
            debug!("no size found: {e}");
            f64::INFINITY
        }
    }
}
