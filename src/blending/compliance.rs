use serde::{Deserialize, Serialize};
use tracing::warn;

use super::blend_rvp::BlendResult;

/// 목표 대비 편차가 이 값 이하이면 "목표 달성"으로 본다 [psi].
pub const ON_TARGET_DEVIATION_PSI: f64 = 0.2;
/// 목표 대비 편차가 이 값 이하이면 "허용 범위"로 본다 [psi].
pub const TOLERANCE_DEVIATION_PSI: f64 = 0.5;

/// 목표 RVP 대비 규격 적합 상태.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComplianceStatus {
    OnTarget,
    WithinTolerance,
    OffTarget,
}

/// 혼합 RVP와 목표 RVP의 편차로 적합 상태를 판정한다.
pub fn compliance_status(blended_rvp: f64, target_rvp: f64) -> ComplianceStatus {
    let deviation = (blended_rvp - target_rvp).abs();
    if deviation <= ON_TARGET_DEVIATION_PSI {
        ComplianceStatus::OnTarget
    } else if deviation <= TOLERANCE_DEVIATION_PSI {
        ComplianceStatus::WithinTolerance
    } else {
        ComplianceStatus::OffTarget
    }
}

/// 운전 한계값. 설정 파일의 `[limits]` 섹션에 대응한다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OperationalLimits {
    /// 혼합 RVP 하한 [psi]
    pub min_rvp: f64,
    /// 혼합 RVP 상한 [psi]
    pub max_rvp: f64,
    /// 부탄 함량 상한 [vol %]
    pub max_butane_pct: f64,
}

impl Default for OperationalLimits {
    fn default() -> Self {
        Self {
            min_rvp: 7.0,
            max_rvp: 15.0,
            max_butane_pct: 20.0,
        }
    }
}

/// 운전 한계 점검 결과.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LimitCheck {
    /// 부탄 함량이 상한을 초과함
    pub butane_exceeded: bool,
    /// 혼합 RVP가 [min_rvp, max_rvp] 범위를 벗어남
    pub rvp_out_of_range: bool,
}

impl LimitCheck {
    pub fn is_clear(&self) -> bool {
        !self.butane_exceeded && !self.rvp_out_of_range
    }
}

impl OperationalLimits {
    /// 한계값 자체가 올바른지 확인한다.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.min_rvp.is_finite() || !self.max_rvp.is_finite() || self.min_rvp <= 0.0 {
            return Err("RVP 한계값은 0보다 큰 유한값이어야 합니다.");
        }
        if self.min_rvp >= self.max_rvp {
            return Err("RVP 하한은 상한보다 작아야 합니다.");
        }
        if !(self.max_butane_pct > 0.0 && self.max_butane_pct <= 100.0) {
            return Err("부탄 함량 상한은 0 초과 100 이하이어야 합니다.");
        }
        Ok(())
    }

    /// 혼합 결과를 운전 한계와 비교한다.
    pub fn check(&self, blend: &BlendResult) -> LimitCheck {
        let check = LimitCheck {
            butane_exceeded: blend.butane_percent > self.max_butane_pct,
            rvp_out_of_range: blend.blended_rvp > self.max_rvp
                || blend.blended_rvp < self.min_rvp,
        };
        if !check.is_clear() {
            warn!(
                butane_percent = blend.butane_percent,
                blended_rvp = blend.blended_rvp,
                ?check,
                "blend outside operational limits"
            );
        }
        check
    }
}
