use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::blend_rvp::{blend, BlendResult};
use super::error::BlendError;
use super::optimizer::{OptimizationRequest, OptimizationResult};
use super::stream::Stream;

/// 시나리오 기본 기준 유분 체적 [bbl]
pub const DEFAULT_BASE_VOLUME_BBL: f64 = 10_000.0;
/// 시나리오 기본 부탄 RVP [psi]
pub const DEFAULT_BUTANE_RVP_PSI: f64 = 52.0;

/// 계절별 RVP 규격.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Season {
    Winter,
    Summer,
}

impl Season {
    /// 계절 규격 목표 RVP [psi]
    pub fn target_rvp(&self) -> f64 {
        match self {
            Season::Winter => 13.5,
            Season::Summer => 7.8,
        }
    }

    /// 월(1~12)로 계절을 판정한다. 6~9월은 여름, 11~3월은 겨울, 나머지는 환절기(None).
    pub fn for_month(month: u32) -> Option<Season> {
        match month {
            6..=9 => Some(Season::Summer),
            11 | 12 | 1..=3 => Some(Season::Winter),
            _ => None,
        }
    }
}

impl FromStr for Season {
    type Err = PresetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "winter" | "w" => Ok(Season::Winter),
            "summer" | "s" => Ok(Season::Summer),
            other => Err(PresetError::UnknownSeason(other.to_string())),
        }
    }
}

/// 빠른 시나리오 프리셋. 모두 기준 유분 10000 bbl, 부탄 52 psi 를 가정한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Scenario {
    WinterMax,
    WinterStandard,
    SummerMax,
    SummerStandard,
    SpringFall,
}

/// 프리셋 이름 해석 오류.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PresetError {
    #[error("알 수 없는 시나리오: {0}")]
    UnknownScenario(String),
    #[error("알 수 없는 계절: {0}")]
    UnknownSeason(String),
}

impl Scenario {
    pub const ALL: [Scenario; 5] = [
        Scenario::WinterMax,
        Scenario::WinterStandard,
        Scenario::SummerMax,
        Scenario::SummerStandard,
        Scenario::SpringFall,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Scenario::WinterMax => "winter-max",
            Scenario::WinterStandard => "winter-standard",
            Scenario::SummerMax => "summer-max",
            Scenario::SummerStandard => "summer-standard",
            Scenario::SpringFall => "spring-fall",
        }
    }

    /// 기준 유분 RVP [psi]
    pub fn base_rvp(&self) -> f64 {
        match self {
            Scenario::WinterMax => 8.0,
            Scenario::WinterStandard => 8.5,
            Scenario::SummerMax => 6.5,
            Scenario::SummerStandard => 6.0,
            Scenario::SpringFall => 7.5,
        }
    }

    /// 목표 혼합 RVP [psi]
    pub fn target_rvp(&self) -> f64 {
        match self {
            Scenario::WinterMax => 15.0,
            Scenario::WinterStandard => 13.0,
            Scenario::SummerMax => 9.0,
            Scenario::SummerStandard => 7.8,
            Scenario::SpringFall => 11.0,
        }
    }

    /// 시나리오가 대응하는 계절 규격. 최대치/환절기 시나리오는 사용자 정의 규격이다.
    pub fn season(&self) -> Option<Season> {
        match self {
            Scenario::WinterStandard => Some(Season::Winter),
            Scenario::SummerStandard => Some(Season::Summer),
            _ => None,
        }
    }

    /// 기준 유분 체적과 부탄 RVP를 받아 최적화 요청을 만든다.
    pub fn request(&self, base_volume: f64, butane_rvp: f64) -> OptimizationRequest {
        OptimizationRequest::new(
            Stream::new(self.base_rvp(), base_volume),
            butane_rvp,
            self.target_rvp(),
        )
    }

    /// 기본값(10000 bbl, 52 psi)으로 만든 최적화 요청.
    pub fn default_request(&self) -> OptimizationRequest {
        self.request(DEFAULT_BASE_VOLUME_BBL, DEFAULT_BUTANE_RVP_PSI)
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Scenario {
    type Err = PresetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase().replace('_', "-");
        Scenario::ALL
            .into_iter()
            .find(|sc| sc.id() == key)
            .ok_or_else(|| PresetError::UnknownScenario(s.to_string()))
    }
}

/// 시나리오 실행 결과: 최적화 결과와 최적 체적에서 다시 계산한 혼합 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScenarioOutcome {
    pub scenario: Scenario,
    pub request: OptimizationRequest,
    pub optimization: OptimizationResult,
    pub blend: BlendResult,
}

/// 시나리오 요청으로 부탄 체적을 최적화하고 그 체적으로 혼합 결과를 계산한다.
pub fn run_scenario(
    scenario: Scenario,
    request: OptimizationRequest,
) -> Result<ScenarioOutcome, BlendError> {
    let optimization = request.solve()?;
    let blended = blend(
        request.base,
        Stream::new(request.butane_rvp, optimization.butane_volume),
    )?;
    Ok(ScenarioOutcome {
        scenario,
        request,
        optimization,
        blend: blended,
    })
}
