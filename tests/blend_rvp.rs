//! 혼합 RVP 정방향 계산 회귀 테스트.
use rvp_blending_toolbox::blending::{
    blend, compute_blend_rvp, correction_factor, BlendError, Stream,
};

fn assert_close(label: &str, actual: f64, expected: f64, tol: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tol,
        "{label} expected {expected:.9} got {actual:.9} (diff {diff:.3e}, tol {tol})"
    );
}

#[test]
fn zero_butane_returns_base_rvp() {
    let base = Stream::new(8.5, 10_000.0);
    for butane_rvp in [1.0, 52.0, 120.0] {
        let rvp = compute_blend_rvp(base, Stream::new(butane_rvp, 0.0)).expect("blend");
        assert_eq!(rvp, 8.5);
    }
}

#[test]
fn low_butane_is_pure_linear_mix() {
    // 500 / 10500 ≈ 4.8 %
    let r = blend(Stream::new(8.0, 10_000.0), Stream::new(52.0, 500.0)).expect("blend");
    assert!(r.butane_percent <= 10.0);
    assert_eq!(r.correction_factor, 1.0);
    assert_eq!(r.blended_rvp, r.linear_rvp);
    let expected = 8.0 * (10_000.0 / 10_500.0) + 52.0 * (500.0 / 10_500.0);
    assert_close("linear", r.blended_rvp, expected, 1e-12);
}

#[test]
fn twenty_percent_butane_gets_five_percent_correction() {
    let r = blend(Stream::new(8.0, 8_000.0), Stream::new(52.0, 2_000.0)).expect("blend");
    assert_close("percent", r.butane_percent, 20.0, 1e-9);
    assert_close("factor", r.correction_factor, 1.05, 1e-12);
    assert_close("linear", r.linear_rvp, 8.0 * 0.8 + 52.0 * 0.2, 1e-12);
    assert_close("blended", r.blended_rvp, (8.0 * 0.8 + 52.0 * 0.2) * 1.05, 1e-9);
    assert_close("standalone factor", correction_factor(20.0), 1.05, 1e-12);
}

#[test]
fn corrected_blend_may_exceed_butane_rvp_bound() {
    // 거의 순수 부탄: 선형값은 부탄 RVP 이하지만 보정 후 초과할 수 있다
    let r = blend(Stream::new(8.0, 1.0), Stream::new(52.0, 99.0)).expect("blend");
    assert!(r.linear_rvp <= 52.0);
    assert!(r.blended_rvp > 52.0, "blended={}", r.blended_rvp);
}

#[test]
fn result_fields_are_consistent() {
    let r = blend(Stream::new(7.5, 9_000.0), Stream::new(52.0, 1_000.0)).expect("blend");
    assert_close("total", r.total_volume, 10_000.0, 0.0);
    assert_close("fraction", r.butane_fraction, 0.1, 1e-15);
    assert_close("percent", r.butane_percent, 10.0, 1e-12);
}

#[test]
fn identical_inputs_give_bit_identical_output() {
    let base = Stream::new(8.3, 12_345.6);
    let butane = Stream::new(51.7, 2_345.6);
    let a = compute_blend_rvp(base, butane).expect("first");
    let b = compute_blend_rvp(base, butane).expect("second");
    assert_eq!(a.to_bits(), b.to_bits());
    let full = blend(base, butane).expect("full");
    assert_eq!(full.blended_rvp.to_bits(), a.to_bits());
}

#[test]
fn both_volumes_zero_is_division_by_zero() {
    let err = compute_blend_rvp(Stream::new(8.0, 0.0), Stream::new(52.0, 0.0))
        .expect_err("zero total");
    assert_eq!(err, BlendError::DivisionByZero);
}

#[test]
fn invalid_streams_are_rejected() {
    let cases = [
        (Stream::new(0.0, 100.0), Stream::new(52.0, 10.0)),
        (Stream::new(-1.0, 100.0), Stream::new(52.0, 10.0)),
        (Stream::new(8.0, 100.0), Stream::new(f64::NAN, 10.0)),
        (Stream::new(8.0, -5.0), Stream::new(52.0, 10.0)),
        (Stream::new(8.0, 100.0), Stream::new(52.0, f64::INFINITY)),
    ];
    for (base, butane) in cases {
        let err = compute_blend_rvp(base, butane).expect_err("invalid input");
        assert!(
            matches!(err, BlendError::InvalidInput(_)),
            "base={base:?} butane={butane:?} err={err:?}"
        );
    }
}
