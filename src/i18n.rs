use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_BLEND: &str = "main_menu.blend";
    pub const MAIN_MENU_OPTIMIZE: &str = "main_menu.optimize";
    pub const MAIN_MENU_SCENARIO: &str = "main_menu.scenario";
    pub const MAIN_MENU_UNIT_CONVERSION: &str = "main_menu.unit_conversion";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const PROMPT_BASE_RVP: &str = "prompt.base_rvp";
    pub const PROMPT_BASE_VOLUME: &str = "prompt.base_volume";
    pub const PROMPT_BUTANE_RVP: &str = "prompt.butane_rvp";
    pub const PROMPT_BUTANE_VOLUME: &str = "prompt.butane_volume";
    pub const PROMPT_TARGET_RVP: &str = "prompt.target_rvp";
    pub const PROMPT_TARGET_OPTIONAL: &str = "prompt.target_optional";
    pub const PROMPT_SCENARIO: &str = "prompt.scenario";

    pub const UNIT_CONVERSION_HEADING: &str = "unit_conversion.heading";
    pub const UNIT_CONVERSION_OPTIONS: &str = "unit_conversion.options";
    pub const UNIT_CONVERSION_PROMPT_VALUE: &str = "unit_conversion.prompt_value";
    pub const UNIT_CONVERSION_PROMPT_FROM_UNIT: &str = "unit_conversion.prompt_from_unit";
    pub const UNIT_CONVERSION_PROMPT_TO_UNIT: &str = "unit_conversion.prompt_to_unit";
    pub const UNIT_CONVERSION_RESULT: &str = "unit_conversion.result";

    pub const BLEND_HEADING: &str = "blend.heading";
    pub const BLEND_RESULT_RVP: &str = "blend.result_rvp";
    pub const BLEND_BASE: &str = "blend.base";
    pub const BLEND_BUTANE: &str = "blend.butane";
    pub const BLEND_TOTAL: &str = "blend.total";
    pub const BLEND_CORRECTION: &str = "blend.correction";
    pub const BLEND_GALLONS: &str = "blend.gallons";
    pub const BLEND_TARGET: &str = "blend.target";
    pub const BLEND_DEVIATION: &str = "blend.deviation";
    pub const WARN_BUTANE_LIMIT: &str = "warn.butane_limit";
    pub const WARN_RVP_RANGE: &str = "warn.rvp_range";

    pub const STATUS_ON_TARGET: &str = "status.on_target";
    pub const STATUS_WITHIN_TOLERANCE: &str = "status.within_tolerance";
    pub const STATUS_OFF_TARGET: &str = "status.off_target";

    pub const OPTIMIZE_HEADING: &str = "optimize.heading";
    pub const OPTIMIZE_VOLUME: &str = "optimize.volume";
    pub const OPTIMIZE_ACHIEVED: &str = "optimize.achieved";
    pub const OPTIMIZE_ITERATIONS: &str = "optimize.iterations";
    pub const OPTIMIZE_NOT_CONVERGED: &str = "optimize.not_converged";

    pub const SCENARIO_HEADING: &str = "scenario.heading";
    pub const SCENARIO_LIST: &str = "scenario.list";
    pub const SEASON_TARGET: &str = "season.target";

    pub const ADVICE_HEADING: &str = "advice.heading";
    pub const ADVICE_NONE: &str = "advice.none";
    pub const ADVICE_COST: &str = "advice.cost";
    pub const ADVICE_COST_ACTION: &str = "advice.cost_action";
    pub const ADVICE_OUT_OF_SPEC: &str = "advice.out_of_spec";
    pub const ADVICE_ON_SPEC: &str = "advice.on_spec";
    pub const ADVICE_SUMMER: &str = "advice.summer";
    pub const ADVICE_WINTER: &str = "advice.winter";
    pub const ADVICE_HIGH_BUTANE: &str = "advice.high_butane";
    pub const ADVICE_VAPOR_LOCK: &str = "advice.vapor_lock";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else {
            Language::Ko
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 ko로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir.and_then(|dir| load_overrides(dir, lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 키를 조회해 문자열을 반환한다. 언어팩에 없으면 None.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.overrides
            .as_ref()
            .and_then(|m| m.get(key))
            .map(String::as_str)
    }

    /// 번역을 가져온다. 언어팩 → 내장 문자열 순이며 영어 번역이 없으면 한국어로 폴백한다.
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        if let Some(v) = self.lookup(key) {
            return v;
        }
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(lang) = get_locale().and_then(|loc| normalize_locale_string(&loc)) {
        return Some(lang);
    }
    ["LANG", "LC_ALL"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| normalize_locale_string(&v))
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 또는 [section] 테이블.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let path = Path::new(dir).join(format!("{lang}.toml"));
    let content = fs::read_to_string(path).ok()?;
    parse_toml_to_map(&content)
}

pub(crate) fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Table = toml::from_str(src).ok()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in &value {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== RVP Blending Toolbox ===",
        MAIN_MENU_BLEND => "1) 혼합 RVP 계산",
        MAIN_MENU_OPTIMIZE => "2) 목표 RVP 부탄 최적화",
        MAIN_MENU_SCENARIO => "3) 빠른 시나리오",
        MAIN_MENU_UNIT_CONVERSION => "4) 단위 변환기",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        PROMPT_BASE_RVP => "기준 휘발유 RVP: ",
        PROMPT_BASE_VOLUME => "기준 휘발유 체적: ",
        PROMPT_BUTANE_RVP => "부탄 RVP: ",
        PROMPT_BUTANE_VOLUME => "부탄 체적: ",
        PROMPT_TARGET_RVP => "목표 RVP: ",
        PROMPT_TARGET_OPTIONAL => "목표 RVP (없으면 엔터): ",
        PROMPT_SCENARIO => "시나리오 이름: ",
        UNIT_CONVERSION_HEADING => "\n-- 단위 변환 --",
        UNIT_CONVERSION_OPTIONS => "1) 압력(psi, kPa, bar, atm)  2) 체적(bbl, gal, m3, L)",
        UNIT_CONVERSION_PROMPT_VALUE => "값 입력: ",
        UNIT_CONVERSION_PROMPT_FROM_UNIT => "입력 단위(ex: psi, bbl): ",
        UNIT_CONVERSION_PROMPT_TO_UNIT => "변환 단위(ex: kPa, gal): ",
        UNIT_CONVERSION_RESULT => "변환 결과:",
        BLEND_HEADING => "\n-- 혼합 결과 --",
        BLEND_RESULT_RVP => "혼합 RVP:",
        BLEND_BASE => "기준 휘발유:",
        BLEND_BUTANE => "부탄:",
        BLEND_TOTAL => "총 체적:",
        BLEND_CORRECTION => "비선형 보정 계수:",
        BLEND_GALLONS => "갤런 환산 (기준/부탄/총):",
        BLEND_TARGET => "목표 RVP:",
        BLEND_DEVIATION => "편차:",
        WARN_BUTANE_LIMIT => "경고: 부탄 함량이 운전 상한을 초과했습니다. 상한:",
        WARN_RVP_RANGE => "경고: 혼합 RVP가 운전 범위를 벗어났습니다. 범위:",
        STATUS_ON_TARGET => "목표 달성",
        STATUS_WITHIN_TOLERANCE => "허용 범위",
        STATUS_OFF_TARGET => "목표 이탈",
        OPTIMIZE_HEADING => "\n-- 부탄 최적화 --",
        OPTIMIZE_VOLUME => "필요 부탄 체적:",
        OPTIMIZE_ACHIEVED => "달성 RVP:",
        OPTIMIZE_ITERATIONS => "반복 횟수:",
        OPTIMIZE_NOT_CONVERGED => "주의: 최대 반복 횟수 안에 목표에 수렴하지 못했습니다. 최선값을 표시합니다.",
        SCENARIO_HEADING => "\n-- 시나리오 --",
        SCENARIO_LIST => "winter-max, winter-standard, summer-max, summer-standard, spring-fall",
        SEASON_TARGET => "계절 규격 목표 RVP:",
        ADVICE_HEADING => "\n-- 권고 사항 --",
        ADVICE_NONE => "특별한 권고 사항이 없습니다. 배합이 적정해 보입니다.",
        ADVICE_COST => "원가 최적화: 순수 기준 휘발유 대비 예상 절감액",
        ADVICE_COST_ACTION => "  → 규격 안에서 부탄 비율을 늘려 원가 절감을 검토하세요.",
        ADVICE_OUT_OF_SPEC => "규격 이탈: 혼합 RVP가 목표에서 벗어났습니다. 최적화 기능으로 부탄 체적을 다시 계산하세요. 편차",
        ADVICE_ON_SPEC => "규격 적합: RVP가 목표의 0.2 psi 이내입니다.",
        ADVICE_SUMMER => "여름철 주의: 혼합 RVP가 여름 휘발성 규제(7.8~9.0 psi)를 넘을 수 있습니다. 혼합 RVP",
        ADVICE_WINTER => "겨울철 최적화: 겨울 배합은 13.0~13.5 psi 까지 RVP를 높여 시동성과 원가를 개선할 수 있습니다.",
        ADVICE_HIGH_BUTANE => "고부탄 배합: 저장 탱크와 이송 라인의 증기 회수 설비를 점검하세요. 부탄 함량",
        ADVICE_VAPOR_LOCK => "베이퍼 록 위험: 매우 높은 RVP는 차량 연료계통에 베이퍼 록을 유발할 수 있습니다. 혼합 RVP",
        _ => "??",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    let s = match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting.",
        MAIN_MENU_TITLE => "\n=== RVP Blending Toolbox ===",
        MAIN_MENU_BLEND => "1) Calculate blend RVP",
        MAIN_MENU_OPTIMIZE => "2) Optimize butane for target RVP",
        MAIN_MENU_SCENARIO => "3) Quick scenarios",
        MAIN_MENU_UNIT_CONVERSION => "4) Unit converter",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid selection. Please try again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        PROMPT_BASE_RVP => "Base gasoline RVP: ",
        PROMPT_BASE_VOLUME => "Base gasoline volume: ",
        PROMPT_BUTANE_RVP => "Butane RVP: ",
        PROMPT_BUTANE_VOLUME => "Butane volume: ",
        PROMPT_TARGET_RVP => "Target RVP: ",
        PROMPT_TARGET_OPTIONAL => "Target RVP (Enter to skip): ",
        PROMPT_SCENARIO => "Scenario name: ",
        UNIT_CONVERSION_HEADING => "\n-- Unit Conversion --",
        UNIT_CONVERSION_OPTIONS => "1) Pressure (psi, kPa, bar, atm)  2) Volume (bbl, gal, m3, L)",
        UNIT_CONVERSION_PROMPT_VALUE => "Value: ",
        UNIT_CONVERSION_PROMPT_FROM_UNIT => "From unit (ex: psi, bbl): ",
        UNIT_CONVERSION_PROMPT_TO_UNIT => "To unit (ex: kPa, gal): ",
        UNIT_CONVERSION_RESULT => "Result:",
        BLEND_HEADING => "\n-- Blend Result --",
        BLEND_RESULT_RVP => "Blended RVP:",
        BLEND_BASE => "Base gasoline:",
        BLEND_BUTANE => "Butane:",
        BLEND_TOTAL => "Total volume:",
        BLEND_CORRECTION => "Non-linearity correction:",
        BLEND_GALLONS => "Gallons (base/butane/total):",
        BLEND_TARGET => "Target RVP:",
        BLEND_DEVIATION => "Deviation:",
        WARN_BUTANE_LIMIT => "Warning: butane content exceeds the operational limit of",
        WARN_RVP_RANGE => "Warning: blended RVP is outside the operational range",
        STATUS_ON_TARGET => "On Target",
        STATUS_WITHIN_TOLERANCE => "Within Tolerance",
        STATUS_OFF_TARGET => "Off Target",
        OPTIMIZE_HEADING => "\n-- Butane Optimization --",
        OPTIMIZE_VOLUME => "Required butane volume:",
        OPTIMIZE_ACHIEVED => "Achieved RVP:",
        OPTIMIZE_ITERATIONS => "Iterations:",
        OPTIMIZE_NOT_CONVERGED => "Note: the search did not converge within the iteration limit. Showing best effort.",
        SCENARIO_HEADING => "\n-- Scenario --",
        SEASON_TARGET => "Seasonal target RVP:",
        ADVICE_HEADING => "\n-- Recommendations --",
        ADVICE_NONE => "No specific recommendations at this time. Blend appears optimal.",
        ADVICE_COST => "Cost optimization: estimated savings versus pure base gasoline",
        ADVICE_COST_ACTION => "  -> Consider increasing butane percentage to maximize savings within specification.",
        ADVICE_OUT_OF_SPEC => "RVP out of specification: adjust the butane ratio or run the optimizer. Deviation",
        ADVICE_ON_SPEC => "On-spec blend: RVP within 0.2 psi of target.",
        ADVICE_SUMMER => "Summer RVP caution: blend may exceed summer volatility limits (7.8-9.0 psi). Blended RVP",
        ADVICE_WINTER => "Winter volatility optimization: winter blends can target 13.0-13.5 psi for cold-start performance and cost.",
        ADVICE_HIGH_BUTANE => "High butane content: verify vapor recovery capacity on tanks and transfer lines. Butane",
        ADVICE_VAPOR_LOCK => "Vapor lock risk: very high RVP may cause vapor lock in vehicle fuel systems. Blended RVP",
        _ => return None,
    };
    Some(s)
}
