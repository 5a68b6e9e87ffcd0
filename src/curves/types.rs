//----------------------------------------
// curves mod types
//----------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurvePoint {
    pub x: f64,
    pub power: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridCell {
    pub effect: f64,
    pub size: f64,
    pub power: f64,
}

/// One line of a scenario table, keyed by number of proteins tested
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScenarioRow {
    pub proteins: usize,
    pub alpha: f64,
    pub min_effect: f64,
    pub power: f64,
    pub required_size: f64,
}
