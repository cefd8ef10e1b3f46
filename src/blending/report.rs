use super::blend_rvp::BlendResult;
use super::compliance::{compliance_status, ComplianceStatus, LimitCheck, OperationalLimits};
use crate::units::GALLONS_PER_BARREL;

/// 목표 RVP 대비 비교 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetComparison {
    pub target_rvp: f64,
    /// 혼합 RVP - 목표 RVP [psi] (부호 포함)
    pub deviation: f64,
    pub status: ComplianceStatus,
}

/// 상세 혼합 분석 표. 배럴/갤런 환산과 규격·한계 점검을 함께 담는다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlendReport {
    pub blend: BlendResult,
    pub base_volume_gal: f64,
    pub butane_volume_gal: f64,
    pub total_volume_gal: f64,
    pub target: Option<TargetComparison>,
    pub limits: LimitCheck,
}

impl BlendReport {
    pub fn new(blend: BlendResult, target_rvp: Option<f64>, limits: &OperationalLimits) -> Self {
        let target = target_rvp.map(|target_rvp| TargetComparison {
            target_rvp,
            deviation: blend.blended_rvp - target_rvp,
            status: compliance_status(blend.blended_rvp, target_rvp),
        });
        Self {
            base_volume_gal: blend.base.volume * GALLONS_PER_BARREL,
            butane_volume_gal: blend.butane.volume * GALLONS_PER_BARREL,
            total_volume_gal: blend.total_volume * GALLONS_PER_BARREL,
            limits: limits.check(&blend),
            target,
            blend,
        }
    }
}
