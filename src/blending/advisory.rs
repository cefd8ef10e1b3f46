//! 혼합 결과에 대한 규칙 기반 권고 사항.
//!
//! 경제성, 규격 적합, 계절, 안전, 품질 항목을 순서대로 점검해 권고 목록을 만든다.
//! 문구는 CLI 계층에서 번역기로 만들고, 여기서는 판정과 수치만 담는다.

use serde::{Deserialize, Serialize};

use super::blend_rvp::BlendResult;
use super::compliance::{ON_TARGET_DEVIATION_PSI, TOLERANCE_DEVIATION_PSI};
use super::presets::Season;
use crate::units::GALLONS_PER_BARREL;

/// 부탄 함량이 이 값 미만이면 증량을 권고한다 [vol %].
const ECONOMIC_HEADROOM_PCT: f64 = 12.0;
/// 여름철 주의 RVP [psi]
const SUMMER_CAUTION_RVP: f64 = 9.5;
/// 겨울철 보수적 배합 판정 RVP [psi]
const WINTER_CONSERVATIVE_RVP: f64 = 11.0;
/// 증기 관리 강화가 필요한 부탄 함량 [vol %]
const HIGH_BUTANE_PCT: f64 = 15.0;
/// 베이퍼 록 위험 RVP [psi]
const VAPOR_LOCK_RVP: f64 = 14.5;

/// 원료 단가. 설정 파일의 `[economics]` 섹션에 대응한다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlendEconomics {
    /// 부탄 단가 [$/gal]
    pub butane_cost_per_gal: f64,
    /// 기준 휘발유 단가 [$/gal]
    pub base_cost_per_gal: f64,
}

impl Default for BlendEconomics {
    fn default() -> Self {
        Self {
            butane_cost_per_gal: 0.60,
            base_cost_per_gal: 0.90,
        }
    }
}

impl BlendEconomics {
    /// 갤런당 부탄 원가 이점 [$/gal]
    pub fn cost_advantage_per_gal(&self) -> f64 {
        self.base_cost_per_gal - self.butane_cost_per_gal
    }

    /// 부탄 체적[bbl]만큼 기준 휘발유를 대체했을 때의 절감액 [$]
    pub fn savings(&self, butane_volume_bbl: f64) -> f64 {
        self.cost_advantage_per_gal() * butane_volume_bbl * GALLONS_PER_BARREL
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Economic,
    Compliance,
    Seasonal,
    Safety,
    Quality,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Priority {
    Critical,
    High,
    Medium,
    Info,
}

/// 권고 종류와 문구 작성에 필요한 수치.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Advice {
    CostOptimization {
        savings_usd: f64,
        cost_advantage_per_gal: f64,
        butane_percent: f64,
    },
    OutOfSpec {
        blended_rvp: f64,
        target_rvp: f64,
        deviation: f64,
    },
    OnSpec,
    SummerCaution {
        blended_rvp: f64,
    },
    WinterOptimization,
    HighButane {
        butane_percent: f64,
    },
    VaporLockRisk {
        blended_rvp: f64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub category: Category,
    pub priority: Priority,
    pub advice: Advice,
    /// 후속 조치를 제안할 수 있는지 여부
    pub actionable: bool,
}

/// 혼합 결과에 대한 권고 목록을 만든다.
///
/// `month`는 1~12 이며 None 이면 계절 항목을 건너뛴다.
pub fn recommend(
    blend: &BlendResult,
    target_rvp: Option<f64>,
    month: Option<u32>,
    economics: &BlendEconomics,
) -> Vec<Recommendation> {
    let mut out = Vec::new();
    let blended = blend.blended_rvp;
    let pct = blend.butane_percent;

    out.push(Recommendation {
        category: Category::Economic,
        priority: Priority::High,
        advice: Advice::CostOptimization {
            savings_usd: economics.savings(blend.butane.volume),
            cost_advantage_per_gal: economics.cost_advantage_per_gal(),
            butane_percent: pct,
        },
        actionable: pct < ECONOMIC_HEADROOM_PCT,
    });

    if let Some(target) = target_rvp {
        let deviation = (blended - target).abs();
        if deviation > TOLERANCE_DEVIATION_PSI {
            out.push(Recommendation {
                category: Category::Compliance,
                priority: Priority::Critical,
                advice: Advice::OutOfSpec {
                    blended_rvp: blended,
                    target_rvp: target,
                    deviation,
                },
                actionable: true,
            });
        } else if deviation <= ON_TARGET_DEVIATION_PSI {
            out.push(Recommendation {
                category: Category::Compliance,
                priority: Priority::Info,
                advice: Advice::OnSpec,
                actionable: false,
            });
        }
    }

    match month.and_then(Season::for_month) {
        Some(Season::Summer) if blended > SUMMER_CAUTION_RVP => out.push(Recommendation {
            category: Category::Seasonal,
            priority: Priority::High,
            advice: Advice::SummerCaution {
                blended_rvp: blended,
            },
            actionable: true,
        }),
        Some(Season::Winter) if blended < WINTER_CONSERVATIVE_RVP => out.push(Recommendation {
            category: Category::Seasonal,
            priority: Priority::Medium,
            advice: Advice::WinterOptimization,
            actionable: true,
        }),
        _ => {}
    }

    if pct > HIGH_BUTANE_PCT {
        out.push(Recommendation {
            category: Category::Safety,
            priority: Priority::High,
            advice: Advice::HighButane {
                butane_percent: pct,
            },
            actionable: true,
        });
    }

    if blended > VAPOR_LOCK_RVP {
        out.push(Recommendation {
            category: Category::Quality,
            priority: Priority::Medium,
            advice: Advice::VaporLockRisk {
                blended_rvp: blended,
            },
            actionable: true,
        });
    }

    out
}
