use serde::{Deserialize, Serialize};

use super::error::BlendError;

/// 블렌딩에 참여하는 유체 스트림. RVP[psi]와 체적[bbl]을 가진다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stream {
    /// Reid 증기압 [psi], 0보다 커야 한다.
    pub rvp: f64,
    /// 체적 [bbl], 0 이상이어야 한다.
    pub volume: f64,
}

/// 스트림의 역할. 검증 메시지를 구분하는 데 사용한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamRole {
    /// 기준 휘발유 (저휘발성)
    Base,
    /// 부탄 (고휘발성 블렌딩제)
    Butane,
}

impl Stream {
    pub fn new(rvp: f64, volume: f64) -> Self {
        Self { rvp, volume }
    }

    /// RVP는 양의 유한값, 체적은 0 이상의 유한값인지 확인한다.
    pub fn validate(&self, role: StreamRole) -> Result<(), BlendError> {
        if !self.rvp.is_finite() || self.rvp <= 0.0 {
            return Err(BlendError::InvalidInput(match role {
                StreamRole::Base => "기준 유분 RVP는 0보다 큰 유한값이어야 합니다.",
                StreamRole::Butane => "부탄 RVP는 0보다 큰 유한값이어야 합니다.",
            }));
        }
        if !self.volume.is_finite() || self.volume < 0.0 {
            return Err(BlendError::InvalidInput(match role {
                StreamRole::Base => "기준 유분 체적은 0 이상의 유한값이어야 합니다.",
                StreamRole::Butane => "부탄 체적은 0 이상의 유한값이어야 합니다.",
            }));
        }
        Ok(())
    }
}
