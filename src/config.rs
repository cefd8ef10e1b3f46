use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

use crate::blending::advisory::BlendEconomics;
use crate::blending::compliance::OperationalLimits;
use crate::units::{PressureUnit, VolumeUnit};

/// 설정 파일 기본 경로.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 입출력 기본 단위 설정을 담는다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultUnits {
    pub pressure: PressureUnit,
    pub volume: VolumeUnit,
}

impl Default for DefaultUnits {
    fn default() -> Self {
        Self {
            pressure: PressureUnit::Psi,
            volume: VolumeUnit::Barrel,
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 표시 언어 (auto/ko/en)
    pub language: String,
    /// 언어팩 디렉터리. 없으면 내장 문자열만 사용한다.
    pub locale_dir: Option<String>,
    pub default_units: DefaultUnits,
    pub limits: OperationalLimits,
    pub economics: BlendEconomics,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            locale_dir: None,
            default_units: DefaultUnits::default(),
            limits: OperationalLimits::default(),
            economics: BlendEconomics::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("설정 파싱 오류: {0}")]
    Serde(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
    /// 설정값 자체가 잘못된 경우
    #[error("설정값 오류: {0}")]
    Invalid(&'static str),
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        cfg.validate()?;
        info!(path = %path.display(), "loaded config");
        Ok(cfg)
    } else {
        let cfg = Config::default();
        cfg.save(path)?;
        info!(path = %path.display(), "wrote default config");
        Ok(cfg)
    }
}

impl Config {
    /// 설정을 지정한 경로에 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// 운전 한계와 단가가 올바른지 확인한다.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.limits.validate().map_err(ConfigError::Invalid)?;
        let e = &self.economics;
        if !(e.butane_cost_per_gal.is_finite() && e.base_cost_per_gal.is_finite())
            || e.butane_cost_per_gal < 0.0
            || e.base_cost_per_gal < 0.0
        {
            return Err(ConfigError::Invalid("원료 단가는 0 이상의 유한값이어야 합니다."));
        }
        Ok(())
    }
}
