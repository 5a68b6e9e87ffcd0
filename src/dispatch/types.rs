//----------------------------------------
// unified dispatch mod types
//----------------------------------------
use crate::config::{
    DEFAULT_CLUSTER_SIZE, DEFAULT_ICC, DEFAULT_MATCHING_RATIO, DEFAULT_PREVALENCE,
    DEFAULT_RESIDUAL_SD,
};
use crate::models::cox::CoxDesign;
use crate::models::logistic::LogisticDesign;
use crate::models::types::{AnalysisType, StudyDesign};

/// Effect size and sample description for one regression model. Each
/// variant carries exactly what its SE formula consumes.
#[derive(Debug, PartialEq, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ModelParams {
    Cox {
        hazard_ratio: f64,
        events: f64,
        design: CoxDesign,
    },
    Linear {
        beta: f64,
        sample_size: f64,
        residual_sd: f64,
    },
    Logistic {
        odds_ratio: f64,
        design: LogisticDesign,
    },
    Poisson {
        relative_risk: f64,
        sample_size: f64,
        prevalence: f64,
    },
    Gee {
        beta: f64,
        total_observations: f64,
        residual_sd: f64,
        cluster_size: f64,
        icc: f64,
    },
}

impl ModelParams {
    pub fn analysis_type(&self) -> AnalysisType {
        match self {
            ModelParams::Cox { .. } => AnalysisType::Cox,
            ModelParams::Linear { .. } => AnalysisType::Linear,
            ModelParams::Logistic { .. } => AnalysisType::Logistic,
            ModelParams::Poisson { .. } => AnalysisType::Poisson,
            ModelParams::Gee { .. } => AnalysisType::Gee,
        }
    }

    /// HR, OR, RR or regression coefficient
    pub fn effect(&self) -> f64 {
        match *self {
            ModelParams::Cox { hazard_ratio, .. } => hazard_ratio,
            ModelParams::Linear { beta, .. } | ModelParams::Gee { beta, .. } => beta,
            ModelParams::Logistic { odds_ratio, .. } => odds_ratio,
            ModelParams::Poisson { relative_risk, .. } => relative_risk,
        }
    }

    pub fn with_effect(&self, effect: f64) -> Self {
        let mut model = *self;
        match &mut model {
            ModelParams::Cox { hazard_ratio, .. } => *hazard_ratio = effect,
            ModelParams::Linear { beta, .. } | ModelParams::Gee { beta, .. } => *beta = effect,
            ModelParams::Logistic { odds_ratio, .. } => *odds_ratio = effect,
            ModelParams::Poisson { relative_risk, .. } => *relative_risk = effect,
        }
        model
    }

    /// The quantity a required-size calculation solves for: events for Cox,
    /// observations for GEE, subjects otherwise
    pub fn size(&self) -> f64 {
        match *self {
            ModelParams::Cox { events, .. } => events,
            ModelParams::Linear { sample_size, .. } | ModelParams::Poisson { sample_size, .. } => {
                sample_size
            }
            ModelParams::Logistic { design, .. } => design.size(),
            ModelParams::Gee {
                total_observations, ..
            } => total_observations,
        }
    }

    pub fn with_size(&self, size: f64) -> Self {
        let mut model = *self;
        match &mut model {
            ModelParams::Cox { events, .. } => *events = size,
            ModelParams::Linear { sample_size, .. } | ModelParams::Poisson { sample_size, .. } => {
                *sample_size = size
            }
            ModelParams::Logistic { design, .. } => *design = design.with_size(size),
            ModelParams::Gee {
                total_observations, ..
            } => *total_observations = size,
        }
        model
    }
}

/// A fully specified power calculation
#[derive(Debug, PartialEq, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PowerParams {
    pub model: ModelParams,
    /// Per-test significance level, already adjusted for multiplicity
    pub alpha: f64,
    /// R² of the protein on adjustment covariates
    pub covariate_r2: f64,
}

impl PowerParams {
    pub fn new(model: ModelParams, alpha: f64) -> Self {
        Self {
            model,
            alpha,
            covariate_r2: 0.0,
        }
    }

    pub fn with_covariate_r2(self, covariate_r2: f64) -> Self {
        Self {
            covariate_r2,
            ..self
        }
    }

    pub fn with_alpha(self, alpha: f64) -> Self {
        Self { alpha, ..self }
    }

    pub fn with_effect(self, effect: f64) -> Self {
        Self {
            model: self.model.with_effect(effect),
            ..self
        }
    }

    pub fn with_size(self, size: f64) -> Self {
        Self {
            model: self.model.with_size(size),
            ..self
        }
    }
}

/// Loosely specified calculation as it arrives from a form or config file:
/// an analysis/design tag and whichever fields the caller filled in
#[derive(Debug, Default, PartialEq, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PowerInputs {
    pub analysis_type: AnalysisType,
    pub study_design: StudyDesign,
    pub effect_size: f64,
    pub alpha: f64,
    pub events: Option<f64>,
    pub sample_size: Option<f64>,
    pub residual_sd: Option<f64>,
    pub prevalence: Option<f64>,
    pub cases: Option<f64>,
    pub controls: Option<f64>,
    pub subcohort_size: Option<f64>,
    pub total_cohort: Option<f64>,
    pub matching_ratio: Option<f64>,
    pub cluster_size: Option<f64>,
    pub icc: Option<f64>,
    pub covariate_r2: Option<f64>,
}

impl PowerInputs {
    /// Builds the typed calculation, filling defaults for unset fields.
    ///
    /// A sampling design whose own fields are missing falls back to the
    /// cohort form of the same model.
    pub fn resolve(&self) -> PowerParams {
        let sample_size = self.sample_size.unwrap_or(0.0);
        let residual_sd = self.residual_sd.unwrap_or(DEFAULT_RESIDUAL_SD);
        let prevalence = self.prevalence.unwrap_or(DEFAULT_PREVALENCE);
        let effect = self.effect_size;

        let model = match self.analysis_type {
            AnalysisType::Cox => {
                let design = match (self.study_design, self.subcohort_size, self.total_cohort) {
                    (StudyDesign::CaseCohort, Some(subcohort_size), Some(total_cohort)) => {
                        CoxDesign::CaseCohort {
                            subcohort_size,
                            total_cohort,
                        }
                    }
                    (StudyDesign::NestedCaseControl, _, _) => CoxDesign::NestedCaseControl {
                        matching_ratio: self.matching_ratio.unwrap_or(DEFAULT_MATCHING_RATIO),
                    },
                    _ => CoxDesign::Cohort,
                };
                ModelParams::Cox {
                    hazard_ratio: effect,
                    events: self.events.unwrap_or(0.0),
                    design,
                }
            }
            AnalysisType::Linear => ModelParams::Linear {
                beta: effect,
                sample_size,
                residual_sd,
            },
            AnalysisType::Logistic => {
                let outcome_sampled = matches!(
                    self.study_design,
                    StudyDesign::CaseControl | StudyDesign::NestedCaseControl
                );
                let design = match (outcome_sampled, self.cases, self.controls) {
                    (true, Some(cases), Some(controls)) => {
                        LogisticDesign::CaseControl { cases, controls }
                    }
                    _ => LogisticDesign::Population {
                        sample_size,
                        prevalence,
                    },
                };
                ModelParams::Logistic {
                    odds_ratio: effect,
                    design,
                }
            }
            AnalysisType::Poisson => ModelParams::Poisson {
                relative_risk: effect,
                sample_size,
                prevalence,
            },
            AnalysisType::Gee => ModelParams::Gee {
                beta: effect,
                total_observations: sample_size,
                residual_sd,
                cluster_size: self.cluster_size.unwrap_or(DEFAULT_CLUSTER_SIZE),
                icc: self.icc.unwrap_or(DEFAULT_ICC),
            },
        };

        PowerParams {
            model,
            alpha: self.alpha,
            covariate_r2: self.covariate_r2.unwrap_or(0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(analysis_type: AnalysisType, study_design: StudyDesign) -> PowerInputs {
        PowerInputs {
            analysis_type,
            study_design,
            effect_size: 1.5,
            alpha: 0.05,
            ..Default::default()
        }
    }

    #[test]
    fn resolve_fills_defaults() {
        let params = inputs(AnalysisType::Gee, StudyDesign::Cohort).resolve();
        assert_eq!(
            params.model,
            ModelParams::Gee {
                beta: 1.5,
                total_observations: 0.0,
                residual_sd: 1.0,
                cluster_size: 1.0,
                icc: 0.0,
            }
        );
        assert_eq!(params.covariate_r2, 0.0);
    }

    #[test]
    fn resolve_case_cohort_without_subcohort_is_cohort() {
        let mut raw = inputs(AnalysisType::Cox, StudyDesign::CaseCohort);
        raw.events = Some(100.0);
        raw.total_cohort = Some(5000.0);
        let ModelParams::Cox { design, .. } = raw.resolve().model else {
            panic!()
        };
        assert_eq!(design, CoxDesign::Cohort);
    }

    #[test]
    fn resolve_case_cohort() {
        let mut raw = inputs(AnalysisType::Cox, StudyDesign::CaseCohort);
        raw.subcohort_size = Some(500.0);
        raw.total_cohort = Some(5000.0);
        let ModelParams::Cox { design, .. } = raw.resolve().model else {
            panic!()
        };
        assert_eq!(
            design,
            CoxDesign::CaseCohort {
                subcohort_size: 500.0,
                total_cohort: 5000.0
            }
        );
    }

    #[test]
    fn resolve_logistic_case_control() {
        let mut raw = inputs(AnalysisType::Logistic, StudyDesign::CaseControl);
        raw.cases = Some(300.0);
        raw.controls = Some(600.0);
        let ModelParams::Logistic { design, .. } = raw.resolve().model else {
            panic!()
        };
        assert_eq!(
            design,
            LogisticDesign::CaseControl {
                cases: 300.0,
                controls: 600.0
            }
        );
    }

    #[test]
    fn resolve_logistic_cohort_ignores_case_counts() {
        let mut raw = inputs(AnalysisType::Logistic, StudyDesign::Cohort);
        raw.cases = Some(300.0);
        raw.controls = Some(600.0);
        raw.sample_size = Some(2000.0);
        let ModelParams::Logistic { design, .. } = raw.resolve().model else {
            panic!()
        };
        assert_eq!(
            design,
            LogisticDesign::Population {
                sample_size: 2000.0,
                prevalence: 0.1
            }
        );
    }

    #[test]
    fn with_effect_and_size_only_touch_their_field() {
        let model = ModelParams::Poisson {
            relative_risk: 1.2,
            sample_size: 100.0,
            prevalence: 0.3,
        };
        let changed = model.with_effect(2.0).with_size(400.0);
        assert_eq!(
            changed,
            ModelParams::Poisson {
                relative_risk: 2.0,
                sample_size: 400.0,
                prevalence: 0.3,
            }
        );
        assert_eq!(changed.effect(), 2.0);
        assert_eq!(changed.size(), 400.0);
    }
}
