use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use super::blend_rvp::evaluate;
use super::error::BlendError;
use super::stream::{Stream, StreamRole};

/// 탐색 시작 스텝 [bbl]
pub const INITIAL_STEP_BBL: f64 = 100.0;
/// 목표 RVP 허용 오차 [psi]
pub const TOLERANCE_PSI: f64 = 0.05;
/// 최대 반복 횟수. 스텝은 반감만 되고 0이 되지 않으므로 실제 종료 조건은 이 값이다.
pub const MAX_ITERATIONS: usize = 1000;

/// 목표 RVP 달성을 위한 부탄 체적 탐색 요청.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptimizationRequest {
    /// 기준 휘발유 스트림
    pub base: Stream,
    /// 부탄 RVP [psi]
    pub butane_rvp: f64,
    /// 목표 혼합 RVP [psi]
    pub target_rvp: f64,
}

/// 부탄 체적 탐색 결과.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptimizationResult {
    /// 필요한 부탄 체적 [bbl], 항상 0 이상
    pub butane_volume: f64,
    /// 마지막으로 계산된 혼합 RVP [psi]
    pub achieved_rvp: f64,
    /// 수행한 반복 횟수
    pub iterations: usize,
    /// 허용 오차 이내 수렴 여부
    pub converged: bool,
}

impl OptimizationRequest {
    pub fn new(base: Stream, butane_rvp: f64, target_rvp: f64) -> Self {
        Self {
            base,
            butane_rvp,
            target_rvp,
        }
    }

    /// 입력값과 `기준 RVP < 목표 RVP < 부탄 RVP` 순서를 확인한다.
    pub fn validate(&self) -> Result<(), BlendError> {
        self.base.validate(StreamRole::Base)?;
        if self.base.volume <= 0.0 {
            return Err(BlendError::InvalidInput(
                "최적화하려면 기준 유분 체적이 0보다 커야 합니다.",
            ));
        }
        Stream::new(self.butane_rvp, 0.0).validate(StreamRole::Butane)?;
        if !self.target_rvp.is_finite() || self.target_rvp <= 0.0 {
            return Err(BlendError::InvalidInput(
                "목표 RVP는 0보다 큰 유한값이어야 합니다.",
            ));
        }
        if !(self.base.rvp < self.target_rvp && self.target_rvp < self.butane_rvp) {
            return Err(BlendError::PreconditionViolation {
                base_rvp: self.base.rvp,
                target_rvp: self.target_rvp,
                butane_rvp: self.butane_rvp,
            });
        }
        Ok(())
    }

    /// 검증 후 부탄 체적을 탐색한다.
    pub fn solve(&self) -> Result<OptimizationResult, BlendError> {
        self.validate()?;
        Ok(search_butane_volume(self.base, self.butane_rvp, self.target_rvp))
    }
}

/// 목표 혼합 RVP를 만드는 부탄 체적을 구한다.
///
/// `base.rvp < target_rvp < butane_rvp` 가 아니면 `PreconditionViolation`을 반환한다.
/// 1000회 안에 수렴하지 못해도 오류가 아니며 `converged == false`로 최선값을 돌려준다.
pub fn optimize_butane_volume(
    base: Stream,
    butane_rvp: f64,
    target_rvp: f64,
) -> Result<OptimizationResult, BlendError> {
    OptimizationRequest::new(base, butane_rvp, target_rvp).solve()
}

/// 입력 검증 없이 스텝 반감 탐색을 수행한다.
///
/// 목표보다 낮으면 스텝만큼 늘리고, 목표를 넘으면 한 스텝 되돌린 뒤 스텝을 반으로
/// 줄인다. 혼합 RVP는 부탄 체적에 대해 단조 증가하므로 처음 목표를 넘은 뒤부터
/// 기하급수적으로 수렴한다. 순서 조건이 깨진 입력에도 패닉하거나 무한 반복하지
/// 않으며, 최종 체적은 0 이상으로 잘린다.
///
/// 목표가 기준 유분 RVP 이하이면 체적이 음수로 내려가 목표에 닿지 못한 채 반복
/// 상한까지 돈다. 이때 `converged`는 false 이고 `achieved_rvp`는 잘리기 전
/// 마지막 체적에서 평가한 값이라 반환 체적의 RVP와 일치하지 않는다.
pub fn search_butane_volume(base: Stream, butane_rvp: f64, target_rvp: f64) -> OptimizationResult {
    let mut butane_volume = 0.0_f64;
    let mut step = INITIAL_STEP_BBL;
    let mut iteration = 0_usize;

    let rvp_at = |volume: f64| evaluate(base, Stream::new(butane_rvp, volume)).blended_rvp;
    let mut calculated_rvp = rvp_at(butane_volume);

    // NaN 비교는 false 이므로 총 체적 0 평가 시 루프를 빠져나온다
    while (calculated_rvp - target_rvp).abs() > TOLERANCE_PSI && iteration < MAX_ITERATIONS {
        if calculated_rvp < target_rvp {
            butane_volume += step;
        } else {
            butane_volume -= step;
            step /= 2.0;
        }
        calculated_rvp = rvp_at(butane_volume);
        iteration += 1;
        trace!(iteration, butane_volume, calculated_rvp, step, "rvp search step");
    }

    let converged = (calculated_rvp - target_rvp).abs() <= TOLERANCE_PSI;
    if converged {
        debug!(
            iterations = iteration,
            butane_volume, calculated_rvp, target_rvp, "rvp search converged"
        );
    } else {
        warn!(
            iterations = iteration,
            butane_volume, calculated_rvp, target_rvp, "rvp search did not converge"
        );
    }

    OptimizationResult {
        butane_volume: butane_volume.max(0.0),
        achieved_rvp: calculated_rvp,
        iterations: iteration,
        converged,
    }
}
