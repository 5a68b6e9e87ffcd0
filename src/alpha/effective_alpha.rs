use crate::alpha::types::CorrectionMethod;

/// Per-test significance level for a family of `num_tests` tests.
///
/// For `Fdr` this is the boundary at which a single Benjamini-Hochberg
/// rejection occurs (rank 1 of `num_tests`), which is the conservative
/// per-protein threshold used for planning; for `Bonferroni` it is the usual
/// FWER split. Both reduce to `threshold / num_tests`. With no tests the
/// threshold is returned unchanged.
pub fn effective_alpha(threshold: f64, num_tests: usize, method: CorrectionMethod) -> f64 {
    if num_tests == 0 {
        return threshold;
    }
    match method {
        CorrectionMethod::Fdr | CorrectionMethod::Bonferroni => threshold / num_tests as f64,
    }
}
