//! 단위 정의 및 변환 모듈 모음.

pub mod pressure;
pub mod temperature;

pub use pressure::PressureUnit;
pub use temperature::{fahrenheit_to_celsius, TemperatureUnit};
