use std::io::{self, Write};

use crate::app::{AppError, IoUnits, Session};
use crate::blending::advisory::{Advice, Recommendation};
use crate::blending::compliance::{ComplianceStatus, OperationalLimits};
use crate::blending::presets::{Scenario, ScenarioOutcome, Season};
use crate::blending::report::BlendReport;
use crate::blending::OptimizationResult;
use crate::conversion;
use crate::i18n::{keys, Translator};
use crate::quantity::QuantityKind;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Blend,
    Optimize,
    Scenario,
    UnitConversion,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_BLEND));
    println!("{}", tr.t(keys::MAIN_MENU_OPTIMIZE));
    println!("{}", tr.t(keys::MAIN_MENU_SCENARIO));
    println!("{}", tr.t(keys::MAIN_MENU_UNIT_CONVERSION));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Blend),
            "2" => return Ok(MenuChoice::Optimize),
            "3" => return Ok(MenuChoice::Scenario),
            "4" => return Ok(MenuChoice::UnitConversion),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 혼합 RVP 계산 메뉴를 처리한다.
pub fn handle_blend(tr: &Translator, session: &Session) -> Result<(), AppError> {
    let base_rvp = read_f64(tr, keys::PROMPT_BASE_RVP)?;
    let base_volume = read_f64(tr, keys::PROMPT_BASE_VOLUME)?;
    let butane_rvp = read_f64(tr, keys::PROMPT_BUTANE_RVP)?;
    let butane_volume = read_f64(tr, keys::PROMPT_BUTANE_VOLUME)?;
    let target = read_optional_f64(tr, keys::PROMPT_TARGET_OPTIONAL)?;
    let (report, advice) =
        session.blend(base_rvp, base_volume, butane_rvp, butane_volume, target)?;
    print_blend_report(tr, &session.units, &session.limits, &report);
    print_recommendations(tr, &session.units, &advice);
    Ok(())
}

/// 부탄 최적화 메뉴를 처리한다.
pub fn handle_optimize(tr: &Translator, session: &Session) -> Result<(), AppError> {
    let base_rvp = read_f64(tr, keys::PROMPT_BASE_RVP)?;
    let base_volume = read_f64(tr, keys::PROMPT_BASE_VOLUME)?;
    let butane_rvp = read_f64(tr, keys::PROMPT_BUTANE_RVP)?;
    let target = read_f64(tr, keys::PROMPT_TARGET_RVP)?;
    let result = session.optimize(base_rvp, base_volume, butane_rvp, target)?;
    print_optimization(tr, &session.units, &result);
    Ok(())
}

/// 시나리오 메뉴를 처리한다.
pub fn handle_scenario(tr: &Translator, session: &Session) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SCENARIO_HEADING));
    println!("{}", tr.t(keys::SCENARIO_LIST));
    let name = read_line(tr.t(keys::PROMPT_SCENARIO))?;
    let scenario: Scenario = name.trim().parse()?;
    let (outcome, report, advice) = session.scenario(scenario, None, None)?;
    print_scenario(tr, &session.units, &outcome);
    print_blend_report(tr, &session.units, &session.limits, &report);
    print_recommendations(tr, &session.units, &advice);
    Ok(())
}

/// 단위 변환 메뉴를 처리한다.
pub fn handle_unit_conversion(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::UNIT_CONVERSION_HEADING));
    println!("{}", tr.t(keys::UNIT_CONVERSION_OPTIONS));
    let kind = loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => break QuantityKind::Pressure,
            "2" => break QuantityKind::Volume,
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    };
    let value = read_f64(tr, keys::UNIT_CONVERSION_PROMPT_VALUE)?;
    let from_unit = read_line(tr.t(keys::UNIT_CONVERSION_PROMPT_FROM_UNIT))?;
    let to_unit = read_line(tr.t(keys::UNIT_CONVERSION_PROMPT_TO_UNIT))?;
    let result = conversion::convert(kind, value, from_unit.trim(), to_unit.trim())?;
    print_conversion(tr, result, to_unit.trim());
    Ok(())
}

pub fn print_conversion(tr: &Translator, result: f64, to_unit: &str) {
    println!("{} {result} {to_unit}", tr.t(keys::UNIT_CONVERSION_RESULT));
}

pub fn print_blend_report(
    tr: &Translator,
    units: &IoUnits,
    limits: &OperationalLimits,
    report: &BlendReport,
) {
    let b = &report.blend;
    let p = units.pressure.symbol();
    let v = units.volume.symbol();
    println!("{}", tr.t(keys::BLEND_HEADING));
    println!(
        "{} {:.2} {p}",
        tr.t(keys::BLEND_RESULT_RVP),
        units.rvp_from_psi(b.blended_rvp)
    );
    println!(
        "{} {:.2} {v} ({:.2} {p})",
        tr.t(keys::BLEND_BASE),
        units.volume_from_bbl(b.base.volume),
        units.rvp_from_psi(b.base.rvp)
    );
    println!(
        "{} {:.2} {v} ({:.1} %, {:.2} {p})",
        tr.t(keys::BLEND_BUTANE),
        units.volume_from_bbl(b.butane.volume),
        b.butane_percent,
        units.rvp_from_psi(b.butane.rvp)
    );
    println!(
        "{} {:.2} {v}",
        tr.t(keys::BLEND_TOTAL),
        units.volume_from_bbl(b.total_volume)
    );
    println!("{} {:.4}", tr.t(keys::BLEND_CORRECTION), b.correction_factor);
    println!(
        "{} {:.0} / {:.0} / {:.0} gal",
        tr.t(keys::BLEND_GALLONS),
        report.base_volume_gal,
        report.butane_volume_gal,
        report.total_volume_gal
    );
    if let Some(target) = report.target {
        println!(
            "{} {:.2} {p}, {} {:+.2} {p} ({})",
            tr.t(keys::BLEND_TARGET),
            units.rvp_from_psi(target.target_rvp),
            tr.t(keys::BLEND_DEVIATION),
            units.rvp_from_psi(target.deviation),
            status_label(tr, target.status)
        );
    }
    if report.limits.butane_exceeded {
        println!("{} {:.1} %", tr.t(keys::WARN_BUTANE_LIMIT), limits.max_butane_pct);
    }
    if report.limits.rvp_out_of_range {
        println!(
            "{} {:.1} ~ {:.1} {p}",
            tr.t(keys::WARN_RVP_RANGE),
            units.rvp_from_psi(limits.min_rvp),
            units.rvp_from_psi(limits.max_rvp)
        );
    }
}

fn status_label(tr: &Translator, status: ComplianceStatus) -> &str {
    match status {
        ComplianceStatus::OnTarget => tr.t(keys::STATUS_ON_TARGET),
        ComplianceStatus::WithinTolerance => tr.t(keys::STATUS_WITHIN_TOLERANCE),
        ComplianceStatus::OffTarget => tr.t(keys::STATUS_OFF_TARGET),
    }
}

pub fn print_optimization(tr: &Translator, units: &IoUnits, result: &OptimizationResult) {
    println!("{}", tr.t(keys::OPTIMIZE_HEADING));
    println!(
        "{} {:.2} {}",
        tr.t(keys::OPTIMIZE_VOLUME),
        units.volume_from_bbl(result.butane_volume),
        units.volume.symbol()
    );
    println!(
        "{} {:.3} {}",
        tr.t(keys::OPTIMIZE_ACHIEVED),
        units.rvp_from_psi(result.achieved_rvp),
        units.pressure.symbol()
    );
    println!("{} {}", tr.t(keys::OPTIMIZE_ITERATIONS), result.iterations);
    if !result.converged {
        println!("{}", tr.t(keys::OPTIMIZE_NOT_CONVERGED));
    }
}

pub fn print_scenario(tr: &Translator, units: &IoUnits, outcome: &ScenarioOutcome) {
    println!("{} {}", tr.t(keys::SCENARIO_HEADING), outcome.scenario);
    if let Some(season) = outcome.scenario.season() {
        print_season(tr, units, season);
    }
    print_optimization(tr, units, &outcome.optimization);
}

pub fn print_season(tr: &Translator, units: &IoUnits, season: Season) {
    println!(
        "{} {:.1} {}",
        tr.t(keys::SEASON_TARGET),
        units.rvp_from_psi(season.target_rvp()),
        units.pressure.symbol()
    );
}

pub fn print_recommendations(
    tr: &Translator,
    units: &IoUnits,
    recommendations: &[Recommendation],
) {
    println!("{}", tr.t(keys::ADVICE_HEADING));
    if recommendations.is_empty() {
        println!("{}", tr.t(keys::ADVICE_NONE));
        return;
    }
    for rec in recommendations {
        let tag = format!("[{:?}/{:?}]", rec.priority, rec.category);
        let key = match rec.advice {
            Advice::CostOptimization { .. } => keys::ADVICE_COST,
            Advice::OutOfSpec { .. } => keys::ADVICE_OUT_OF_SPEC,
            Advice::OnSpec => keys::ADVICE_ON_SPEC,
            Advice::SummerCaution { .. } => keys::ADVICE_SUMMER,
            Advice::WinterOptimization => keys::ADVICE_WINTER,
            Advice::HighButane { .. } => keys::ADVICE_HIGH_BUTANE,
            Advice::VaporLockRisk { .. } => keys::ADVICE_VAPOR_LOCK,
        };
        match advice_reading(units, &rec.advice) {
            Some(reading) => println!("{tag} {} {reading}", tr.t(key)),
            None => println!("{tag} {}", tr.t(key)),
        }
        if matches!(rec.advice, Advice::CostOptimization { .. }) && rec.actionable {
            println!("{}", tr.t(keys::ADVICE_COST_ACTION));
        }
    }
}

/// 권고 문구 뒤에 붙는 수치. 압력은 입출력 단위로 바꿔 표시한다.
fn advice_reading(units: &IoUnits, advice: &Advice) -> Option<String> {
    let p = units.pressure.symbol();
    match *advice {
        Advice::CostOptimization { savings_usd, .. } => Some(format!("${savings_usd:.2}")),
        Advice::OutOfSpec { deviation, .. } => {
            Some(format!("{:.2} {p}", units.rvp_from_psi(deviation)))
        }
        Advice::SummerCaution { blended_rvp } | Advice::VaporLockRisk { blended_rvp } => {
            Some(format!("{:.2} {p}", units.rvp_from_psi(blended_rvp)))
        }
        Advice::HighButane { butane_percent } => Some(format!("{butane_percent:.1} %")),
        Advice::OnSpec | Advice::WinterOptimization => None,
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf)?;
    Ok(buf)
}

fn read_f64(tr: &Translator, prompt_key: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(tr.t(prompt_key))?;
        match s.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => return Ok(v),
            _ => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

fn read_optional_f64(tr: &Translator, prompt_key: &str) -> Result<Option<f64>, AppError> {
    loop {
        let s = read_line(tr.t(prompt_key))?;
        let s = s.trim();
        if s.is_empty() {
            return Ok(None);
        }
        match s.parse::<f64>() {
            Ok(v) if v.is_finite() => return Ok(Some(v)),
            _ => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{PressureUnit, VolumeUnit};

    fn units(pressure: PressureUnit) -> IoUnits {
        IoUnits {
            pressure,
            volume: VolumeUnit::Barrel,
        }
    }

    #[test]
    fn pressure_readings_follow_io_unit() {
        let vapor_lock = Advice::VaporLockRisk { blended_rvp: 15.0 };
        assert_eq!(
            advice_reading(&units(PressureUnit::Psi), &vapor_lock).as_deref(),
            Some("15.00 psi")
        );
        let kpa = units(PressureUnit::KiloPascal);
        let symbol = PressureUnit::KiloPascal.symbol();
        assert_eq!(
            advice_reading(&kpa, &vapor_lock),
            Some(format!("{:.2} {symbol}", 15.0 * 6.894757))
        );
        let off = Advice::OutOfSpec {
            blended_rvp: 14.0,
            target_rvp: 13.0,
            deviation: 1.0,
        };
        assert_eq!(advice_reading(&kpa, &off), Some(format!("6.89 {symbol}")));
        let summer = Advice::SummerCaution { blended_rvp: 10.0 };
        assert!(advice_reading(&kpa, &summer).is_some_and(|r| !r.contains("psi")));
    }

    #[test]
    fn non_pressure_readings_ignore_io_unit() {
        let bar = units(PressureUnit::Bar);
        let high = Advice::HighButane { butane_percent: 16.3 };
        assert_eq!(advice_reading(&bar, &high).as_deref(), Some("16.3 %"));
        assert_eq!(advice_reading(&bar, &Advice::OnSpec), None);
        assert_eq!(advice_reading(&bar, &Advice::WinterOptimization), None);
    }
}
