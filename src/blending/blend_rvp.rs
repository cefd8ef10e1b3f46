use serde::{Deserialize, Serialize};

use super::error::BlendError;
use super::stream::{Stream, StreamRole};

/// 비선형 보정이 시작되는 부탄 함량 [vol %].
pub const CORRECTION_THRESHOLD_PCT: f64 = 10.0;
/// 임계값을 넘는 부탄 1 %p 당 RVP 보정 증가율.
pub const CORRECTION_SLOPE: f64 = 0.005;

/// 블렌딩 계산 결과.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlendResult {
    pub base: Stream,
    pub butane: Stream,
    /// 총 체적 [bbl]
    pub total_volume: f64,
    /// 부탄 체적 분율 (0~1)
    pub butane_fraction: f64,
    /// 부탄 함량 [vol %]
    pub butane_percent: f64,
    /// 이상(선형) 혼합 RVP [psi]
    pub linear_rvp: f64,
    /// 적용된 비선형 보정 계수 (≥ 1.0)
    pub correction_factor: f64,
    /// 보정 후 혼합 RVP [psi]
    pub blended_rvp: f64,
}

/// 부탄 함량에 따른 비선형 보정 계수를 계산한다.
///
/// 10 % 이하에서는 1.0, 그 이상에서는 1 %p 당 0.5 % 씩 증가한다.
/// 실측 혼합이 고함량 영역에서 선형 혼합보다 높게 나오는 경향을 반영한
/// 경험식이며 기액평형 모델이 아니다.
pub fn correction_factor(butane_percent: f64) -> f64 {
    if butane_percent > CORRECTION_THRESHOLD_PCT {
        1.0 + (butane_percent - CORRECTION_THRESHOLD_PCT) * CORRECTION_SLOPE
    } else {
        1.0
    }
}

/// 기준 유분과 부탄 스트림의 혼합 RVP[psi]를 계산한다.
pub fn compute_blend_rvp(base: Stream, butane: Stream) -> Result<f64, BlendError> {
    blend(base, butane).map(|r| r.blended_rvp)
}

/// 혼합 RVP와 함께 총 체적, 부탄 분율, 보정 계수를 모두 반환한다.
pub fn blend(base: Stream, butane: Stream) -> Result<BlendResult, BlendError> {
    base.validate(StreamRole::Base)?;
    butane.validate(StreamRole::Butane)?;
    if base.volume + butane.volume <= 0.0 {
        return Err(BlendError::DivisionByZero);
    }
    Ok(evaluate(base, butane))
}

/// 검증 없이 혼합식을 그대로 평가한다.
///
/// 탐색 중 부탄 체적이 일시적으로 음수가 될 수 있으므로 최적화기는 이 함수를
/// 직접 사용한다. 총 체적이 0 이면 결과는 NaN 이다.
pub(crate) fn evaluate(base: Stream, butane: Stream) -> BlendResult {
    let total_volume = base.volume + butane.volume;
    let base_fraction = base.volume / total_volume;
    let butane_fraction = butane.volume / total_volume;

    let linear_rvp = base.rvp * base_fraction + butane.rvp * butane_fraction;
    let butane_percent = butane_fraction * 100.0;
    let correction_factor = correction_factor(butane_percent);

    BlendResult {
        base,
        butane,
        total_volume,
        butane_fraction,
        butane_percent,
        linear_rvp,
        correction_factor,
        blended_rvp: linear_rvp * correction_factor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correction_is_flat_up_to_threshold() {
        assert_eq!(correction_factor(0.0), 1.0);
        assert_eq!(correction_factor(10.0), 1.0);
        assert!(correction_factor(10.5) > 1.0);
    }

    #[test]
    fn evaluate_at_zero_total_is_nan() {
        let r = evaluate(Stream::new(8.0, 0.0), Stream::new(52.0, 0.0));
        assert!(r.blended_rvp.is_nan());
    }

    #[test]
    fn blend_rejects_zero_total_volume() {
        let err = blend(Stream::new(8.0, 0.0), Stream::new(52.0, 0.0)).unwrap_err();
        assert_eq!(err, BlendError::DivisionByZero);
    }
}
