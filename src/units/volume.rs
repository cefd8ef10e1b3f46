use serde::{Deserialize, Serialize};

/// 체적 단위. 내부 기준은 배럴(bbl, 42 US gal)이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VolumeUnit {
    Barrel,
    UsGallon,
    CubicMeter,
    Liter,
}

/// 1 bbl = 42 US gal
pub const GALLONS_PER_BARREL: f64 = 42.0;
const CUBIC_METER_PER_BARREL: f64 = 0.158_987_3;

fn to_barrel(value: f64, unit: VolumeUnit) -> f64 {
    match unit {
        VolumeUnit::Barrel => value,
        VolumeUnit::UsGallon => value / GALLONS_PER_BARREL,
        VolumeUnit::CubicMeter => value / CUBIC_METER_PER_BARREL,
        VolumeUnit::Liter => value / (CUBIC_METER_PER_BARREL * 1000.0),
    }
}

fn from_barrel(value: f64, unit: VolumeUnit) -> f64 {
    match unit {
        VolumeUnit::Barrel => value,
        VolumeUnit::UsGallon => value * GALLONS_PER_BARREL,
        VolumeUnit::CubicMeter => value * CUBIC_METER_PER_BARREL,
        VolumeUnit::Liter => value * CUBIC_METER_PER_BARREL * 1000.0,
    }
}

/// 체적을 변환한다.
pub fn convert_volume(value: f64, from: VolumeUnit, to: VolumeUnit) -> f64 {
    let bbl = to_barrel(value, from);
    from_barrel(bbl, to)
}

impl VolumeUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            VolumeUnit::Barrel => "bbl",
            VolumeUnit::UsGallon => "gal",
            VolumeUnit::CubicMeter => "m3",
            VolumeUnit::Liter => "L",
        }
    }
}
