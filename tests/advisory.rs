//! 규격 판정, 운전 한계, 권고 규칙, 보고서, 프리셋 테스트.
use rvp_blending_toolbox::blending::advisory::{recommend, Advice, BlendEconomics, Category, Priority};
use rvp_blending_toolbox::blending::compliance::{compliance_status, ComplianceStatus, OperationalLimits};
use rvp_blending_toolbox::blending::presets::{run_scenario, PresetError, Scenario, Season};
use rvp_blending_toolbox::blending::report::BlendReport;
use rvp_blending_toolbox::blending::{blend, BlendResult, Stream};

fn assert_close(actual: f64, expected: f64, tol: f64, label: &str) {
    let diff = (actual - expected).abs();
    assert!(diff <= tol, "{label}: expected {expected}, got {actual} (diff {diff})");
}

fn mix(butane_volume: f64) -> BlendResult {
    blend(Stream::new(8.0, 10_000.0), Stream::new(52.0, butane_volume)).expect("valid blend")
}

#[test]
fn compliance_bands() {
    assert_eq!(compliance_status(13.1, 13.0), ComplianceStatus::OnTarget);
    assert_eq!(compliance_status(12.6, 13.0), ComplianceStatus::WithinTolerance);
    assert_eq!(compliance_status(13.4, 13.0), ComplianceStatus::WithinTolerance);
    assert_eq!(compliance_status(13.6, 13.0), ComplianceStatus::OffTarget);
}

#[test]
fn default_limits_flag_rich_blend() {
    let limits = OperationalLimits::default();
    let rich = mix(2_400.0); // 부탄 ~19.4 %, RVP ~ 17.3
    let check = limits.check(&rich);
    assert!(!check.butane_exceeded);
    assert!(check.rvp_out_of_range);
    let strict = OperationalLimits {
        max_butane_pct: 15.0,
        ..OperationalLimits::default()
    };
    assert!(strict.check(&rich).butane_exceeded);

    let lean = mix(500.0);
    assert!(limits.check(&lean).is_clear());
}

#[test]
fn limits_validation() {
    assert!(OperationalLimits::default().validate().is_ok());
    let inverted = OperationalLimits {
        min_rvp: 15.0,
        max_rvp: 7.0,
        max_butane_pct: 20.0,
    };
    assert!(inverted.validate().is_err());
    let no_butane = OperationalLimits {
        max_butane_pct: 0.0,
        ..OperationalLimits::default()
    };
    assert!(no_butane.validate().is_err());
}

#[test]
fn economic_advice_is_always_first() {
    let r = mix(500.0);
    let recs = recommend(&r, None, None, &BlendEconomics::default());
    assert_eq!(recs.len(), 1);
    let first = recs[0];
    assert_eq!(first.category, Category::Economic);
    assert_eq!(first.priority, Priority::High);
    assert!(first.actionable, "4.8 % butane leaves headroom");
    match first.advice {
        Advice::CostOptimization {
            savings_usd,
            cost_advantage_per_gal,
            ..
        } => {
            assert_close(savings_usd, 0.30 * 500.0 * 42.0, 1e-6, "savings");
            assert_close(cost_advantage_per_gal, 0.30, 1e-12, "advantage");
        }
        other => panic!("unexpected advice {other:?}"),
    }
}

#[test]
fn winter_lean_blend_on_spec() {
    // RVP ~ 10.1, 1월
    let r = mix(500.0);
    let recs = recommend(&r, Some(10.0), Some(1), &BlendEconomics::default());
    let kinds: Vec<Advice> = recs.iter().map(|r| r.advice).collect();
    assert!(kinds.contains(&Advice::OnSpec), "{kinds:?}");
    assert!(kinds.contains(&Advice::WinterOptimization), "{kinds:?}");
    assert_eq!(recs.len(), 3);
}

#[test]
fn summer_rich_blend_raises_every_flag() {
    // 부탄 ~16.7 %, RVP ~ 15.8, 7월
    let r = mix(2_000.0);
    let recs = recommend(&r, Some(7.8), Some(7), &BlendEconomics::default());
    let categories: Vec<Category> = recs.iter().map(|r| r.category).collect();
    assert_eq!(
        categories,
        vec![
            Category::Economic,
            Category::Compliance,
            Category::Seasonal,
            Category::Safety,
            Category::Quality,
        ]
    );
    assert!(!recs[0].actionable, "no headroom above 12 %");
    assert_eq!(recs[1].priority, Priority::Critical);
    assert!(matches!(recs[1].advice, Advice::OutOfSpec { deviation, .. } if deviation > 0.5));
    assert!(matches!(recs[2].advice, Advice::SummerCaution { .. }));
    assert!(matches!(recs[3].advice, Advice::HighButane { butane_percent } if butane_percent > 15.0));
    assert!(matches!(recs[4].advice, Advice::VaporLockRisk { .. }));
}

#[test]
fn within_tolerance_adds_no_compliance_advice() {
    let r = mix(500.0);
    let target = r.blended_rvp + 0.3;
    let recs = recommend(&r, Some(target), Some(4), &BlendEconomics::default());
    assert!(recs.iter().all(|r| r.category != Category::Compliance));
    assert!(recs.iter().all(|r| r.category != Category::Seasonal));
}

#[test]
fn report_converts_to_gallons() {
    let r = mix(1_000.0);
    let report = BlendReport::new(r, Some(13.0), &OperationalLimits::default());
    assert_close(report.base_volume_gal, 420_000.0, 1e-9, "base gal");
    assert_close(report.butane_volume_gal, 42_000.0, 1e-9, "butane gal");
    assert_close(report.total_volume_gal, 462_000.0, 1e-9, "total gal");
    let target = report.target.expect("target comparison");
    assert!(target.deviation < 0.0, "blend below target keeps its sign");
    assert_close(target.deviation, r.blended_rvp - 13.0, 1e-12, "deviation");
    assert!(BlendReport::new(r, None, &OperationalLimits::default()).target.is_none());
}

#[test]
fn seasons_by_month() {
    assert_eq!(Season::for_month(7), Some(Season::Summer));
    assert_eq!(Season::for_month(6), Some(Season::Summer));
    assert_eq!(Season::for_month(12), Some(Season::Winter));
    assert_eq!(Season::for_month(1), Some(Season::Winter));
    assert_eq!(Season::for_month(4), None);
    assert_eq!(Season::for_month(10), None);
    assert_eq!(Season::Winter.target_rvp(), 13.5);
    assert_eq!(Season::Summer.target_rvp(), 7.8);
    assert_eq!("Summer".parse::<Season>().unwrap(), Season::Summer);
}

#[test]
fn scenario_names_parse() {
    for s in Scenario::ALL {
        assert_eq!(s.id().parse::<Scenario>().unwrap(), s);
    }
    assert_eq!("winter_max".parse::<Scenario>().unwrap(), Scenario::WinterMax);
    assert_eq!(
        "autumn".parse::<Scenario>().unwrap_err(),
        PresetError::UnknownScenario("autumn".to_string())
    );
}

#[test]
fn scenario_outcome_blends_at_optimized_volume() {
    let scenario = Scenario::SpringFall;
    let outcome = run_scenario(scenario, scenario.default_request()).expect("scenario runs");
    assert!(outcome.optimization.converged);
    assert_eq!(outcome.blend.butane.volume, outcome.optimization.butane_volume);
    assert_eq!(outcome.blend.blended_rvp.to_bits(), outcome.optimization.achieved_rvp.to_bits());
    assert_close(outcome.blend.blended_rvp, 11.0, 0.05, "spring-fall");
}
