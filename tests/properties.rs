use proptest::prelude::*;

use pwaspower::{
    calculate_min_effect, calculate_power, calculate_required_size, evaluate_two_stage,
    std_normal_cdf, std_normal_quantile, AnalysisType, CoxDesign, EffectScale, LogisticDesign,
    ModelParams, PowerParams, TwoStageParams,
};

fn cox_design() -> impl Strategy<Value = CoxDesign> {
    prop_oneof![
        Just(CoxDesign::Cohort),
        (0.05f64..1.0, 100f64..10_000.).prop_map(|(f, total_cohort)| CoxDesign::CaseCohort {
            subcohort_size: f * total_cohort,
            total_cohort,
        }),
        (1f64..10.).prop_map(|matching_ratio| CoxDesign::NestedCaseControl { matching_ratio }),
    ]
}

fn logistic_design() -> impl Strategy<Value = LogisticDesign> {
    prop_oneof![
        (50f64..10_000., 0.01f64..0.99).prop_map(|(sample_size, prevalence)| {
            LogisticDesign::Population {
                sample_size,
                prevalence,
            }
        }),
        (20f64..2_000., 20f64..5_000.)
            .prop_map(|(cases, controls)| LogisticDesign::CaseControl { cases, controls }),
    ]
}

/// Any model with usable sample parameters and a non-null effect
fn model() -> impl Strategy<Value = ModelParams> {
    prop_oneof![
        (1.05f64..4.0, 5f64..10_000., cox_design()).prop_map(|(hazard_ratio, events, design)| {
            ModelParams::Cox {
                hazard_ratio,
                events,
                design,
            }
        }),
        (0.02f64..1.0, any::<bool>(), 10f64..10_000., 0.5f64..3.0).prop_map(
            |(beta, negative, sample_size, residual_sd)| ModelParams::Linear {
                beta: if negative { -beta } else { beta },
                sample_size,
                residual_sd,
            }
        ),
        (1.05f64..4.0, logistic_design())
            .prop_map(|(odds_ratio, design)| ModelParams::Logistic { odds_ratio, design }),
        (1.05f64..4.0, 50f64..10_000., 0.01f64..0.99).prop_map(
            |(relative_risk, sample_size, prevalence)| ModelParams::Poisson {
                relative_risk,
                sample_size,
                prevalence,
            }
        ),
        (
            0.02f64..1.0,
            any::<bool>(),
            10f64..10_000.,
            0.5f64..3.0,
            1f64..10.,
            0f64..1.0
        )
            .prop_map(
                |(beta, negative, total_observations, residual_sd, cluster_size, icc)| {
                    ModelParams::Gee {
                        beta: if negative { -beta } else { beta },
                        total_observations,
                        residual_sd,
                        cluster_size,
                        icc,
                    }
                }
            ),
    ]
}

fn params(alpha: impl Strategy<Value = f64>) -> impl Strategy<Value = PowerParams> {
    (model(), alpha, 0f64..0.9).prop_map(|(model, alpha, covariate_r2)| {
        PowerParams::new(model, alpha).with_covariate_r2(covariate_r2)
    })
}

fn scale(params: &PowerParams) -> EffectScale {
    params.model.analysis_type().effect_scale()
}

/// Effect `magnitude` away from the null on the model's scale
fn effect_at(scale: EffectScale, magnitude: f64) -> f64 {
    match scale {
        EffectScale::Ratio => magnitude.exp(),
        EffectScale::Difference => magnitude,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn null_effect_power_is_alpha(p in params(5e-8f64..0.2)) {
        let null = scale(&p).null_effect();
        let power = calculate_power(&p.with_effect(null));
        prop_assert!((power - p.alpha).abs() < 1e-3);
    }

    #[test]
    fn power_monotone_in_effect(p in params(5e-8f64..0.2), a in 0f64..1.5, d in 0f64..1.0) {
        let s = scale(&p);
        let smaller = calculate_power(&p.with_effect(effect_at(s, a)));
        let larger = calculate_power(&p.with_effect(effect_at(s, a + d)));
        prop_assert!(smaller <= larger + 1e-12);
    }

    #[test]
    fn power_monotone_in_size(p in params(5e-8f64..0.2), n in 5f64..5_000., extra in 0f64..5_000.) {
        let smaller = calculate_power(&p.with_size(n));
        let larger = calculate_power(&p.with_size(n + extra));
        prop_assert!(smaller <= larger + 1e-12);
    }

    #[test]
    fn power_monotone_in_alpha(p in params(5e-8f64..0.01), factor in 1f64..50.) {
        let strict = calculate_power(&p);
        let lenient = calculate_power(&p.with_alpha((p.alpha * factor).min(0.5)));
        prop_assert!(strict <= lenient + 1e-12);
    }

    #[test]
    fn power_symmetric_in_direction(p in params(5e-8f64..0.2)) {
        let effect = p.model.effect();
        let mirrored = match scale(&p) {
            EffectScale::Ratio => 1.0 / effect,
            EffectScale::Difference => -effect,
        };
        let forward = calculate_power(&p);
        let backward = calculate_power(&p.with_effect(mirrored));
        prop_assert!((forward - backward).abs() < 1e-10);
    }

    #[test]
    fn power_bounded(p in params(5e-8f64..0.5)) {
        let power = calculate_power(&p);
        prop_assert!((0.0..=1.0).contains(&power));
    }

    #[test]
    fn min_effect_inverts_power(p in params(1e-8f64..0.05), target in 0.5f64..0.99) {
        let min_effect = calculate_min_effect(&p, target);
        prop_assert!(min_effect.is_finite());
        let power = calculate_power(&p.with_effect(min_effect));
        prop_assert!((power - target).abs() < 1e-3);
    }

    #[test]
    fn required_size_reaches_target(p in params(5e-8f64..0.05), target in 0.5f64..0.99) {
        let n = calculate_required_size(&p, target);
        prop_assert!(n.is_finite());
        prop_assert!(calculate_power(&p.with_size(n)) >= target);
    }

    #[test]
    fn required_size_is_tight(p in params(5e-8f64..1e-3), target in 0.5f64..0.99) {
        // GEE's requirement is the effective size scaled by the design effect,
        // which rounds up more than one observation
        prop_assume!(p.model.analysis_type() != AnalysisType::Gee);
        let n = calculate_required_size(&p, target);
        prop_assert!(calculate_power(&p.with_size(n - 1.)) < target);
    }

    #[test]
    fn joint_power_below_each_stage(
        p in params(Just(0.05)),
        stage1_sample_size in 10f64..2_000.,
        stage2_sample_size in 10f64..2_000.,
        stage1_fdr in 0.01f64..0.3,
        expected_hits in 0f64..50.,
        sample_overlap in 0f64..1.0,
    ) {
        let design = TwoStageParams::new(
            5000,
            stage1_sample_size,
            stage2_sample_size,
            stage1_fdr,
            0.05,
            expected_hits,
            sample_overlap,
        );
        let result = evaluate_two_stage(&p, &design);
        prop_assert!(result.joint_power <= result.stage1_power.min(result.stage2_power) + 1e-15);
        prop_assert!((0.0..=1.0).contains(&result.joint_power));
    }

    #[test]
    fn quantile_round_trip(prob in 1e-6f64..(1.0 - 1e-6)) {
        let z = std_normal_quantile(prob).unwrap();
        prop_assert!((std_normal_cdf(z) - prob).abs() < 1e-10);
    }
}
