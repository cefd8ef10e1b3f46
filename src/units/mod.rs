//! 단위 정의 및 변환 모듈 모음.

pub mod pressure;
pub mod volume;

pub use pressure::{convert_pressure, PressureUnit};
pub use volume::{convert_volume, VolumeUnit, GALLONS_PER_BARREL};
