use serde::{Deserialize, Serialize};

/// 증기압 단위. 내부 기준은 항상 psi 이다.
/// RVP는 시험 조건(37.8°C)에서의 절대 증기압이므로 게이지/절대 구분을 두지 않는다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PressureUnit {
    Psi,
    KiloPascal,
    Bar,
    Atm,
}

const KPA_PER_PSI: f64 = 6.894_757;
const BAR_PER_PSI: f64 = 0.068_947_57;
const PSI_PER_ATM: f64 = 14.695_95;

/// 주어진 압력을 psi 로 변환한다.
pub fn to_psi(value: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Psi => value,
        PressureUnit::KiloPascal => value / KPA_PER_PSI,
        PressureUnit::Bar => value / BAR_PER_PSI,
        PressureUnit::Atm => value * PSI_PER_ATM,
    }
}

/// psi 값을 원하는 단위로 변환한다.
pub fn from_psi(value_psi: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Psi => value_psi,
        PressureUnit::KiloPascal => value_psi * KPA_PER_PSI,
        PressureUnit::Bar => value_psi * BAR_PER_PSI,
        PressureUnit::Atm => value_psi / PSI_PER_ATM,
    }
}

/// 압력을 원하는 단위로 변환한다.
pub fn convert_pressure(value: f64, from: PressureUnit, to: PressureUnit) -> f64 {
    let psi = to_psi(value, from);
    from_psi(psi, to)
}

impl PressureUnit {
    /// 화면 출력용 단위 기호.
    pub fn symbol(&self) -> &'static str {
        match self {
            PressureUnit::Psi => "psi",
            PressureUnit::KiloPascal => "kPa",
            PressureUnit::Bar => "bar",
            PressureUnit::Atm => "atm",
        }
    }
}
