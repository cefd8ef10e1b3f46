//! 부탄 체적 역계산(스텝 반감 탐색) 회귀 테스트.
use rvp_blending_toolbox::blending::presets::{run_scenario, Scenario};
use rvp_blending_toolbox::blending::{
    compute_blend_rvp, optimize_butane_volume, search_butane_volume, BlendError,
    OptimizationRequest, Stream, INITIAL_STEP_BBL, MAX_ITERATIONS, TOLERANCE_PSI,
};

#[test]
fn reaches_target_from_eight_psi_base() {
    let base = Stream::new(8.0, 10_000.0);
    let res = optimize_butane_volume(base, 52.0, 13.0).expect("optimize");
    assert!(res.converged);
    assert!((res.achieved_rvp - 13.0).abs() <= TOLERANCE_PSI, "{res:?}");
    assert!(res.iterations < 100, "iterations={}", res.iterations);
    assert!(res.butane_volume > 0.0);

    let check = compute_blend_rvp(base, Stream::new(52.0, res.butane_volume)).expect("blend");
    assert_eq!(check.to_bits(), res.achieved_rvp.to_bits());
}

#[test]
fn winter_standard_preset_lands_on_thirteen_psi() {
    let base = Stream::new(8.5, 10_000.0);
    let res = optimize_butane_volume(base, 52.0, 13.0).expect("optimize");
    let rvp = compute_blend_rvp(base, Stream::new(52.0, res.butane_volume)).expect("blend");
    assert!((rvp - 13.0).abs() <= 0.05, "rvp={rvp}");
}

#[test]
fn summer_standard_preset_needs_little_butane() {
    let outcome = run_scenario(
        Scenario::SummerStandard,
        Scenario::SummerStandard.default_request(),
    )
    .expect("scenario");
    assert!(outcome.optimization.converged);
    assert!(outcome.blend.butane_percent < 10.0);
    assert_eq!(outcome.blend.correction_factor, 1.0);
    assert!((outcome.blend.blended_rvp - 7.8).abs() <= TOLERANCE_PSI);
}

#[test]
fn every_scenario_converges() {
    for scenario in Scenario::ALL {
        let outcome = run_scenario(scenario, scenario.default_request()).expect("scenario");
        assert!(outcome.optimization.converged, "{scenario} {outcome:?}");
        assert!(
            (outcome.blend.blended_rvp - scenario.target_rvp()).abs() <= TOLERANCE_PSI,
            "{scenario}"
        );
    }
}

#[test]
fn target_at_or_below_base_is_rejected() {
    let base = Stream::new(8.5, 10_000.0);
    for target in [8.5, 8.0, 1.0] {
        let err = optimize_butane_volume(base, 52.0, target).expect_err("precondition");
        assert!(matches!(err, BlendError::PreconditionViolation { .. }), "{err:?}");
    }
}

#[test]
fn target_at_or_above_butane_is_rejected() {
    let base = Stream::new(8.5, 10_000.0);
    for target in [52.0, 60.0] {
        let err = optimize_butane_volume(base, 52.0, target).expect_err("precondition");
        assert_eq!(
            err,
            BlendError::PreconditionViolation {
                base_rvp: 8.5,
                target_rvp: target,
                butane_rvp: 52.0,
            }
        );
    }
}

#[test]
fn invalid_request_values_are_input_errors() {
    let cases = [
        OptimizationRequest::new(Stream::new(8.0, 0.0), 52.0, 13.0),
        OptimizationRequest::new(Stream::new(8.0, 10_000.0), f64::NAN, 13.0),
        OptimizationRequest::new(Stream::new(8.0, 10_000.0), 52.0, f64::INFINITY),
        OptimizationRequest::new(Stream::new(-8.0, 10_000.0), 52.0, 13.0),
    ];
    for req in cases {
        let err = req.solve().expect_err("invalid");
        assert!(matches!(err, BlendError::InvalidInput(_)), "{req:?} {err:?}");
    }
}

#[test]
fn unchecked_search_below_base_runs_to_cap_and_floors_volume() {
    let base = Stream::new(8.0, 10_000.0);
    let res = search_butane_volume(base, 52.0, 7.0);
    assert_eq!(res.butane_volume, 0.0);
    assert_eq!(res.iterations, MAX_ITERATIONS);
    assert!(!res.converged);
    // 마지막 평가는 음의 체적에서 이뤄지므로 잘린 체적의 RVP와 다르다
    let at_returned =
        compute_blend_rvp(base, Stream::new(52.0, res.butane_volume)).expect("blend");
    assert!((at_returned - 8.0).abs() < 1e-12, "rvp at returned volume {at_returned}");
    assert!(res.achieved_rvp < 8.0, "achieved {}", res.achieved_rvp);
    assert!(res.achieved_rvp > 7.0 + TOLERANCE_PSI, "achieved {}", res.achieved_rvp);
}

#[test]
fn unchecked_search_at_base_rvp_needs_no_iterations() {
    let res = search_butane_volume(Stream::new(8.0, 10_000.0), 52.0, 8.0);
    assert_eq!(res.iterations, 0);
    assert_eq!(res.butane_volume, 0.0);
    assert!(res.converged);
}

#[test]
fn unreachable_target_stops_at_iteration_cap() {
    // 보정 계수 최대 1.45 이므로 52 psi 부탄으로 100 psi 는 도달 불가
    let res = search_butane_volume(Stream::new(8.0, 10_000.0), 52.0, 100.0);
    assert!(!res.converged);
    assert_eq!(res.iterations, MAX_ITERATIONS);
    assert_eq!(res.butane_volume, INITIAL_STEP_BBL * MAX_ITERATIONS as f64);
}
