//----------------------------------------
// regression models mod types
//----------------------------------------

#[derive(Default, Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AnalysisType {
    #[default]
    Cox,
    Linear,
    Logistic,
    /// Modified Poisson (robust variance)
    Poisson,
    /// GEE / linear mixed model for clustered outcomes
    Gee,
}

#[derive(Default, Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StudyDesign {
    #[default]
    Cohort,
    CaseControl,
    CrossSectional,
    CaseCohort,
    NestedCaseControl,
}

/// How an effect size maps onto the Wald statistic
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum EffectScale {
    /// HR / OR / RR; tested on the log scale, null at 1
    Ratio,
    /// Regression coefficient; null at 0
    Difference,
}

impl EffectScale {
    pub fn null_effect(&self) -> f64 {
        match self {
            EffectScale::Ratio => 1.0,
            EffectScale::Difference => 0.0,
        }
    }

    /// Distance from the null on the scale the SE is expressed in; `None`
    /// for effects outside the scale's domain
    pub fn magnitude(&self, effect: f64) -> Option<f64> {
        match self {
            EffectScale::Ratio if effect > 0.0 && effect.is_finite() => Some(effect.ln().abs()),
            EffectScale::Difference if effect.is_finite() => Some(effect.abs()),
            _ => None,
        }
    }
}

impl AnalysisType {
    pub fn effect_scale(&self) -> EffectScale {
        match self {
            AnalysisType::Cox | AnalysisType::Logistic | AnalysisType::Poisson => {
                EffectScale::Ratio
            }
            AnalysisType::Linear | AnalysisType::Gee => EffectScale::Difference,
        }
    }
}
