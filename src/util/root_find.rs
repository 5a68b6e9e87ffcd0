use tracing::{trace, warn};

use crate::error::PwasErr;
use crate::util::error::RootFindErr;

/// Given a monotonically increasing function f(x) over whole-number x, finds
/// the smallest x in [lower_bound, upper_bound] such that f(x) >= target.
///
/// If the iteration cap is hit first, returns the smallest x seen so far that
/// reaches the target.
pub fn smallest_reaching<F>(
    f: F,
    lower_bound: f64,
    upper_bound: f64,
    target: f64,
    max_iter: usize,
) -> Result<f64, PwasErr>
where
    F: Fn(f64) -> f64,
{
    let mut lower_bound = lower_bound.ceil();
    let mut upper_bound = upper_bound.floor();
    if !(lower_bound <= upper_bound) {
        return Err(RootFindErr::BadBracket {
            lower: lower_bound,
            upper: upper_bound,
        }
        .into());
    }
    if f(lower_bound) >= target {
        return Ok(lower_bound);
    }
    let f_upper_bound = f(upper_bound);
    if f_upper_bound < target {
        return Err(RootFindErr::TargetUnreachable {
            target,
            upper: upper_bound,
            f_upper: f_upper_bound,
        }
        .into());
    }

    // f(lower_bound) < target <= f(upper_bound) throughout
    let mut n_iter = 0;
    while upper_bound - lower_bound > 1.0 && n_iter < max_iter {
        let x = ((lower_bound + upper_bound) / 2.).floor();
        if f(x) >= target {
            upper_bound = x;
        } else {
            lower_bound = x;
        }
        n_iter += 1;
        trace!(n_iter, lower_bound, upper_bound, "bisection step");
    }
    if upper_bound - lower_bound > 1.0 {
        warn!(
            max_iter,
            lower_bound, upper_bound, "bisection stopped at iteration cap"
        );
    }
    Ok(upper_bound)
}

/// Bisects whole-number x in [lower_bound, upper_bound] for a monotonically
/// increasing f, stopping as soon as |f(x) - target| <= tol. Otherwise
/// returns the (rounded up) midpoint of the final bracket.
pub fn bisect_within_tol<F>(
    f: F,
    lower_bound: f64,
    upper_bound: f64,
    target: f64,
    tol: f64,
    max_iter: usize,
) -> f64
where
    F: Fn(f64) -> f64,
{
    let mut lower_bound = lower_bound;
    let mut upper_bound = upper_bound;
    for n_iter in 0..max_iter {
        if upper_bound - lower_bound <= 1.0 {
            break;
        }
        let x = ((lower_bound + upper_bound) / 2.).round();
        let y = f(x);
        trace!(n_iter, x, y, "bisection step");
        if (y - target).abs() <= tol {
            return x;
        }
        if y < target {
            lower_bound = x;
        } else {
            upper_bound = x;
        }
    }
    ((lower_bound + upper_bound) / 2.).ceil()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smallest_reaching_linear() {
        let f = |x| x;
        let res = smallest_reaching(f, 0., 100., 37.5, 50).expect("failed to bisect");
        assert_eq!(res, 38.);
    }

    #[test]
    fn smallest_reaching_quadratic() {
        let f = |x: f64| x * x;
        let res = smallest_reaching(f, 1., 1000., 10_000., 50).expect("failed to bisect");
        assert_eq!(res, 100.);
    }

    #[test]
    fn smallest_reaching_lower_bound_already_sufficient() {
        let res = smallest_reaching(|x| x, 10., 20., 5., 50).expect("failed to bisect");
        assert_eq!(res, 10.);
    }

    #[test]
    fn smallest_reaching_unreachable() {
        if let Err(e) = smallest_reaching(|x| x, 0., 10., 11., 50) {
            assert_eq!(
                format!("{}", e),
                "while searching for sample size: target 11 not reached at upper bound 10 (f = 10)"
            );
        } else {
            panic!()
        }
    }

    #[test]
    fn smallest_reaching_bad_bracket() {
        assert!(smallest_reaching(|x| x, 10., 5., 7., 50).is_err());
    }

    #[test]
    fn smallest_reaching_iteration_cap_returns_best_seen() {
        // one step from [0, 100] only halves the bracket
        let res = smallest_reaching(|x| x, 0., 100., 37.5, 1).expect("failed to bisect");
        assert_eq!(res, 50.);
    }

    #[test]
    fn bisect_within_tol_iteration_cap_returns_bracket_midpoint() {
        // first step at 500 overshoots, leaving [0, 500]
        let res = bisect_within_tol(|x| x / 100., 0., 1000., 0.5, 0.005, 1);
        assert_eq!(res, 250.);
        let res = bisect_within_tol(|x| x / 100., 0., 1000., 0.5, 0.005, 2);
        assert_eq!(res, 125.);
    }

    #[test]
    fn bisect_within_tol_stops_early() {
        let res = bisect_within_tol(|x| x / 100., 0., 1000., 0.5, 0.005, 50);
        assert!((res / 100. - 0.5).abs() <= 0.005);
    }

    #[test]
    fn bisect_within_tol_unreachable_goes_to_upper() {
        let res = bisect_within_tol(|_| 0.1, 50., 10_000., 0.9, 0.005, 50);
        assert_eq!(res, 10_000.);
    }
}
