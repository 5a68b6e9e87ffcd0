//----------------------------------------
// multiple testing mod types
//----------------------------------------
#[derive(Default, Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CorrectionMethod {
    /// Benjamini-Hochberg false discovery rate
    #[default]
    Fdr,
    /// Bonferroni family-wise error rate
    Bonferroni,
}
