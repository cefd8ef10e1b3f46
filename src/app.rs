use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;

use crate::blending::advisory::{recommend, BlendEconomics, Recommendation};
use crate::blending::compliance::OperationalLimits;
use crate::blending::presets::{
    run_scenario, PresetError, Scenario, ScenarioOutcome, Season, DEFAULT_BASE_VOLUME_BBL,
    DEFAULT_BUTANE_RVP_PSI,
};
use crate::blending::report::BlendReport;
use crate::blending::{self, BlendError, OptimizationRequest, OptimizationResult, Stream};
use crate::config::{Config, ConfigError, DEFAULT_CONFIG_PATH};
use crate::conversion::{self, ConversionError};
use crate::i18n::Translator;
use crate::ui_cli::{self, MenuChoice};
use crate::units::{convert_pressure, convert_volume, PressureUnit, VolumeUnit};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 파일 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    /// 단위 변환 오류
    #[error("단위 변환 오류: {0}")]
    Conversion(#[from] ConversionError),
    /// 블렌딩/최적화 계산 오류
    #[error("블렌딩 계산 오류: {0}")]
    Blend(#[from] BlendError),
    /// 시나리오/계절 이름 오류
    #[error("프리셋 오류: {0}")]
    Preset(#[from] PresetError),
}

/// RVP 블렌딩 계산기 CLI.
#[derive(Debug, Parser)]
#[command(name = "rvp_blending_toolbox_cli")]
#[command(about = "RVP Blending Toolbox - butane blending calculator and optimizer", long_about = None)]
pub struct Cli {
    /// Display language (auto, ko, en)
    #[arg(long, short = 'L', default_value = "auto")]
    pub lang: String,
    /// Path to the TOML config file
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,
    /// Pressure unit for input and output (psi, kPa, bar, atm)
    #[arg(long)]
    pub pressure_unit: Option<String>,
    /// Volume unit for input and output (bbl, gal, m3, L)
    #[arg(long)]
    pub volume_unit: Option<String>,
    /// Month (1-12) used for seasonal recommendations
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
    pub month: Option<u32>,
    /// Runs the interactive menu when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Calculate the blended RVP of base gasoline and butane
    Blend {
        #[arg(long)]
        base_rvp: f64,
        #[arg(long)]
        base_volume: f64,
        #[arg(long)]
        butane_rvp: f64,
        #[arg(long)]
        butane_volume: f64,
        /// Target RVP for compliance checks
        #[arg(long)]
        target: Option<f64>,
    },
    /// Find the butane volume that reaches a target RVP
    Optimize {
        #[arg(long)]
        base_rvp: f64,
        #[arg(long)]
        base_volume: f64,
        #[arg(long)]
        butane_rvp: f64,
        #[arg(long)]
        target: f64,
    },
    /// Run a quick scenario preset and optimize it
    Scenario {
        /// winter-max, winter-standard, summer-max, summer-standard, spring-fall
        scenario: Scenario,
        /// Override the base gasoline volume (default 10000 bbl)
        #[arg(long)]
        base_volume: Option<f64>,
        /// Override the butane RVP (default 52 psi)
        #[arg(long)]
        butane_rvp: Option<f64>,
    },
    /// Show the seasonal target RVP (winter, summer)
    Season { season: Season },
    /// Convert a pressure or volume value between units
    Convert {
        /// pressure or volume
        quantity: String,
        value: f64,
        from: String,
        to: String,
    },
}

/// CLI 입출력 단위. 계산 내부는 항상 psi / bbl 이다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IoUnits {
    pub pressure: PressureUnit,
    pub volume: VolumeUnit,
}

impl IoUnits {
    pub fn rvp_to_psi(&self, value: f64) -> f64 {
        convert_pressure(value, self.pressure, PressureUnit::Psi)
    }

    pub fn rvp_from_psi(&self, psi: f64) -> f64 {
        convert_pressure(psi, PressureUnit::Psi, self.pressure)
    }

    pub fn volume_to_bbl(&self, value: f64) -> f64 {
        convert_volume(value, self.volume, VolumeUnit::Barrel)
    }

    pub fn volume_from_bbl(&self, bbl: f64) -> f64 {
        convert_volume(bbl, VolumeUnit::Barrel, self.volume)
    }
}

/// 한 번의 CLI 실행 동안 공유하는 계산 문맥.
#[derive(Debug, Clone)]
pub struct Session {
    pub units: IoUnits,
    pub limits: OperationalLimits,
    pub economics: BlendEconomics,
    pub month: Option<u32>,
}

impl Session {
    /// 설정 파일 값 위에 CLI 플래그를 덮어써 문맥을 만든다.
    pub fn from_config(config: &Config, cli: &Cli) -> Result<Self, AppError> {
        let pressure = match cli.pressure_unit.as_deref() {
            Some(s) => conversion::parse_pressure_unit(s)?,
            None => config.default_units.pressure,
        };
        let volume = match cli.volume_unit.as_deref() {
            Some(s) => conversion::parse_volume_unit(s)?,
            None => config.default_units.volume,
        };
        Ok(Self {
            units: IoUnits { pressure, volume },
            limits: config.limits,
            economics: config.economics,
            month: cli.month,
        })
    }

    /// 입출력 단위 값으로 혼합을 계산하고 보고서와 권고를 만든다.
    pub fn blend(
        &self,
        base_rvp: f64,
        base_volume: f64,
        butane_rvp: f64,
        butane_volume: f64,
        target: Option<f64>,
    ) -> Result<(BlendReport, Vec<Recommendation>), AppError> {
        let u = &self.units;
        let base = Stream::new(u.rvp_to_psi(base_rvp), u.volume_to_bbl(base_volume));
        let butane = Stream::new(u.rvp_to_psi(butane_rvp), u.volume_to_bbl(butane_volume));
        let target_psi = target.map(|t| u.rvp_to_psi(t));

        let result = blending::blend(base, butane)?;
        info!(blended_rvp = result.blended_rvp, "blend calculated");
        let report = BlendReport::new(result, target_psi, &self.limits);
        let advice = recommend(&result, target_psi, self.month, &self.economics);
        Ok((report, advice))
    }

    /// 입출력 단위 값으로 부탄 체적을 최적화한다.
    pub fn optimize(
        &self,
        base_rvp: f64,
        base_volume: f64,
        butane_rvp: f64,
        target: f64,
    ) -> Result<OptimizationResult, AppError> {
        let u = &self.units;
        let request = OptimizationRequest::new(
            Stream::new(u.rvp_to_psi(base_rvp), u.volume_to_bbl(base_volume)),
            u.rvp_to_psi(butane_rvp),
            u.rvp_to_psi(target),
        );
        let result = request.solve()?;
        info!(
            butane_volume = result.butane_volume,
            iterations = result.iterations,
            "butane volume optimized"
        );
        Ok(result)
    }

    /// 시나리오를 실행한다. 재정의 값은 입출력 단위 기준이다.
    pub fn scenario(
        &self,
        scenario: Scenario,
        base_volume: Option<f64>,
        butane_rvp: Option<f64>,
    ) -> Result<(ScenarioOutcome, BlendReport, Vec<Recommendation>), AppError> {
        let u = &self.units;
        let base_volume = base_volume
            .map(|v| u.volume_to_bbl(v))
            .unwrap_or(DEFAULT_BASE_VOLUME_BBL);
        let butane_rvp = butane_rvp
            .map(|p| u.rvp_to_psi(p))
            .unwrap_or(DEFAULT_BUTANE_RVP_PSI);
        let request = scenario.request(base_volume, butane_rvp);
        let outcome = run_scenario(scenario, request)?;
        info!(scenario = scenario.id(), "scenario optimized");
        let target = Some(request.target_rvp);
        let report = BlendReport::new(outcome.blend, target, &self.limits);
        let advice = recommend(&outcome.blend, target, self.month, &self.economics);
        Ok((outcome, report, advice))
    }
}

/// 서브커맨드가 있으면 한 번 실행하고, 없으면 대화형 메뉴를 돈다.
pub fn run(cli: &Cli, config: &Config, tr: &Translator) -> Result<(), AppError> {
    let session = Session::from_config(config, cli)?;
    match &cli.command {
        Some(command) => run_command(command, &session, tr),
        None => run_interactive(&session, tr),
    }
}

fn run_command(command: &Command, session: &Session, tr: &Translator) -> Result<(), AppError> {
    match *command {
        Command::Blend {
            base_rvp,
            base_volume,
            butane_rvp,
            butane_volume,
            target,
        } => {
            let (report, advice) =
                session.blend(base_rvp, base_volume, butane_rvp, butane_volume, target)?;
            ui_cli::print_blend_report(tr, &session.units, &session.limits, &report);
            ui_cli::print_recommendations(tr, &session.units, &advice);
        }
        Command::Optimize {
            base_rvp,
            base_volume,
            butane_rvp,
            target,
        } => {
            let result = session.optimize(base_rvp, base_volume, butane_rvp, target)?;
            ui_cli::print_optimization(tr, &session.units, &result);
        }
        Command::Scenario {
            scenario,
            base_volume,
            butane_rvp,
        } => {
            let (outcome, report, advice) = session.scenario(scenario, base_volume, butane_rvp)?;
            ui_cli::print_scenario(tr, &session.units, &outcome);
            ui_cli::print_blend_report(tr, &session.units, &session.limits, &report);
            ui_cli::print_recommendations(tr, &session.units, &advice);
        }
        Command::Season { season } => {
            ui_cli::print_season(tr, &session.units, season);
        }
        Command::Convert {
            ref quantity,
            value,
            ref from,
            ref to,
        } => {
            let kind = conversion::parse_quantity_kind(quantity)?;
            let result = conversion::convert(kind, value, from, to)?;
            ui_cli::print_conversion(tr, result, to);
        }
    }
    Ok(())
}

/// 대화형 메인 루프를 실행한다.
fn run_interactive(session: &Session, tr: &Translator) -> Result<(), AppError> {
    loop {
        let outcome = match ui_cli::main_menu(tr)? {
            MenuChoice::Blend => ui_cli::handle_blend(tr, session),
            MenuChoice::Optimize => ui_cli::handle_optimize(tr, session),
            MenuChoice::Scenario => ui_cli::handle_scenario(tr, session),
            MenuChoice::UnitConversion => ui_cli::handle_unit_conversion(tr),
            MenuChoice::Exit => {
                println!("{}", tr.t(crate::i18n::keys::APP_EXIT));
                break;
            }
        };
        // 계산 오류는 메뉴로 돌아가고 입출력 오류만 중단한다
        match outcome {
            Err(AppError::Io(e)) => return Err(AppError::Io(e)),
            Err(e) => eprintln!("{}: {e}", tr.t(crate::i18n::keys::ERROR_PREFIX)),
            Ok(()) => {}
        }
    }
    Ok(())
}
