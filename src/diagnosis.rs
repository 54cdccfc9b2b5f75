//! 화면 계층과 계산 코어 사이의 상태를 담는다.
//!
//! 입력 필드 문자열을 받아 포화 온도 조회, 과열도 계산, 판정을 차례로 수행한다.
//! 실패하면 오류 종류만 돌려주며, 사용자 문구는 호출 측이 번역 키로 만든다.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::i18n::keys;
use crate::input::{parse_number, ParseError};
use crate::pt_chart::PtChart;
use crate::refrigerant::GasId;
use crate::saturation::{lookup_saturation_c, LookupError, MAX_PRESSURE_PSI, MIN_PRESSURE_PSI};
use crate::superheat::{classify, compute_superheat_c, Classification, SystemType};
use crate::units::pressure::to_psi;
use crate::units::temperature::to_celsius;
use crate::units::{PressureUnit, TemperatureUnit};

/// 포화 온도 입력 방식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    /// 압력으로 차트 조회
    Auto,
    /// 직접 입력
    Manual,
}

impl Mode {
    pub fn toggled(self) -> Self {
        match self {
            Mode::Auto => Mode::Manual,
            Mode::Manual => Mode::Auto,
        }
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            Mode::Auto => keys::MODE_AUTO,
            Mode::Manual => keys::MODE_MANUAL,
        }
    }
}

/// 입력 필드 원문.
#[derive(Debug, Clone)]
pub struct FormInput {
    pub gas: GasId,
    pub pressure: String,
    pub suction: String,
    pub saturation: String,
    pub pressure_unit: PressureUnit,
    pub temperature_unit: TemperatureUnit,
}

impl FormInput {
    /// psi / °C 기준 입력.
    pub fn new(gas: GasId) -> Self {
        Self {
            gas,
            pressure: String::new(),
            suction: String::new(),
            saturation: String::new(),
            pressure_unit: PressureUnit::Psi,
            temperature_unit: TemperatureUnit::Celsius,
        }
    }

    pub fn pressure(mut self, text: impl Into<String>) -> Self {
        self.pressure = text.into();
        self
    }

    pub fn suction(mut self, text: impl Into<String>) -> Self {
        self.suction = text.into();
        self
    }

    pub fn saturation(mut self, text: impl Into<String>) -> Self {
        self.saturation = text.into();
        self
    }

    pub fn units(mut self, pressure: PressureUnit, temperature: TemperatureUnit) -> Self {
        self.pressure_unit = pressure;
        self.temperature_unit = temperature;
        self
    }
}

/// 한 번의 계산에 사용된 값(°C, psi 기준).
#[derive(Debug, Clone, PartialEq)]
pub struct Reading {
    pub gas: GasId,
    pub pressure_psi: Option<f64>,
    pub suction_c: f64,
    pub saturation_c: f64,
    pub mode: Mode,
}

/// 계산 결과.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnosis {
    pub reading: Reading,
    pub superheat_c: f64,
    pub classification: Classification,
}

/// 계산 중단 사유. 모두 재입력으로 복구 가능하다.
#[derive(Debug, Clone, PartialEq)]
pub enum DiagnosisError {
    /// 흡입 온도 해석 실패
    Suction(ParseError),
    /// 자동 모드 압력 해석 실패
    Pressure(ParseError),
    /// 자동 모드 압력이 10~200 psi 밖
    PressureOutOfRange(f64),
    /// 차트에서 포화 온도를 찾지 못함
    SaturationNotFound,
    /// 수동 모드 포화 온도 해석 실패
    Saturation(ParseError),
}

impl DiagnosisError {
    /// 사용자 안내 문구의 번역 키.
    pub fn message_key(&self) -> &'static str {
        match self {
            DiagnosisError::Suction(_) => keys::ERROR_SUCTION_REQUIRED,
            DiagnosisError::Pressure(_) => keys::ERROR_PRESSURE_REQUIRED,
            DiagnosisError::PressureOutOfRange(_) => keys::ERROR_PRESSURE_RANGE,
            DiagnosisError::SaturationNotFound => keys::ERROR_SATURATION_NOT_FOUND,
            DiagnosisError::Saturation(_) => keys::ERROR_SATURATION_REQUIRED,
        }
    }
}

impl std::fmt::Display for DiagnosisError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiagnosisError::Suction(e) => write!(f, "흡입 온도 입력 오류: {e}"),
            DiagnosisError::Pressure(e) => write!(f, "압력 입력 오류: {e}"),
            DiagnosisError::PressureOutOfRange(p) => write!(f, "압력 범위 밖: {p} psi"),
            DiagnosisError::SaturationNotFound => write!(f, "포화 온도 조회 실패"),
            DiagnosisError::Saturation(e) => write!(f, "포화 온도 입력 오류: {e}"),
        }
    }
}

impl std::error::Error for DiagnosisError {}

impl From<LookupError> for DiagnosisError {
    fn from(value: LookupError) -> Self {
        match value {
            LookupError::OutOfRange(p) => DiagnosisError::PressureOutOfRange(p),
            LookupError::NotFound => DiagnosisError::SaturationNotFound,
        }
    }
}

/// 화면에 표시 중인 상태. 전역 변수 대신 호출 측이 소유한다.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub system_type: SystemType,
    pub mode: Mode,
    last_superheat_c: Option<f64>,
}

impl Session {
    pub fn new(system_type: SystemType, mode: Mode) -> Self {
        Self {
            system_type,
            mode,
            last_superheat_c: None,
        }
    }

    /// 마지막으로 표시한 과열도.
    pub fn last_superheat_c(&self) -> Option<f64> {
        self.last_superheat_c
    }

    pub fn set_system_type(&mut self, system_type: SystemType) {
        self.system_type = system_type;
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    /// 표시 중인 결과를 지운다. 시스템 종류와 모드는 유지한다.
    pub fn clear(&mut self) {
        self.last_superheat_c = None;
    }

    /// 입력값으로 과열도를 계산하고 판정한다. 실패 시 이전 결과는 그대로 둔다.
    pub fn calculate(
        &mut self,
        chart: &PtChart,
        form: &FormInput,
    ) -> Result<Diagnosis, DiagnosisError> {
        let suction = parse_number(&form.suction).map_err(DiagnosisError::Suction)?;
        let suction_c = to_celsius(suction, form.temperature_unit);

        let (pressure_psi, saturation_c) = match self.mode {
            Mode::Auto => {
                let pressure = parse_number(&form.pressure).map_err(DiagnosisError::Pressure)?;
                let psi = to_psi(pressure, form.pressure_unit);
                // 반올림 전 입력값으로 자동 표 범위를 확인한다
                if psi < MIN_PRESSURE_PSI as f64 || psi > MAX_PRESSURE_PSI as f64 {
                    return Err(DiagnosisError::PressureOutOfRange(psi));
                }
                let sat = lookup_saturation_c(chart, form.gas, psi)?;
                (Some(psi), sat)
            }
            Mode::Manual => {
                let sat = parse_number(&form.saturation).map_err(DiagnosisError::Saturation)?;
                (None, to_celsius(sat, form.temperature_unit))
            }
        };

        let superheat_c = compute_superheat_c(suction_c, saturation_c);
        let classification = classify(self.system_type, superheat_c);
        debug!(
            "{} {:?}: Tsat={saturation_c} SH={superheat_c} -> {:?}",
            form.gas, self.mode, classification.status
        );
        self.last_superheat_c = Some(superheat_c);

        Ok(Diagnosis {
            reading: Reading {
                gas: form.gas,
                pressure_psi,
                suction_c,
                saturation_c,
                mode: self.mode,
            },
            superheat_c,
            classification,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::superheat::Status;

    fn chart() -> PtChart {
        PtChart::embedded().expect("embedded chart")
    }

    #[test]
    fn auto_mode_uses_chart() {
        let mut session = Session::new(SystemType::Conventional, Mode::Auto);
        let form = FormInput::new(GasId::R410A).pressure("100").suction("28");
        let d = session.calculate(&chart(), &form).expect("diagnosis");
        assert_eq!(d.reading.saturation_c, 19.0);
        assert_eq!(d.reading.pressure_psi, Some(100.0));
        assert_eq!(d.superheat_c, 9.0);
        assert_eq!(d.classification.status, Status::Ok);
        assert_eq!(session.last_superheat_c(), Some(9.0));
    }

    #[test]
    fn manual_mode_ignores_pressure() {
        let mut session = Session::new(SystemType::Inverter, Mode::Manual);
        let form = FormInput::new(GasId::R22).pressure("junk").suction("14,5").saturation("5");
        let d = session.calculate(&chart(), &form).expect("diagnosis");
        assert_eq!(d.reading.pressure_psi, None);
        assert_eq!(d.superheat_c, 9.5);
        assert_eq!(d.classification.status, Status::High);
    }

    #[test]
    fn suction_is_checked_first() {
        let mut session = Session::new(SystemType::Conventional, Mode::Auto);
        let form = FormInput::new(GasId::R410A).pressure("5");
        assert_eq!(
            session.calculate(&chart(), &form),
            Err(DiagnosisError::Suction(ParseError::Empty))
        );
    }

    #[test]
    fn missing_pressure_in_auto_mode() {
        let mut session = Session::new(SystemType::Conventional, Mode::Auto);
        let form = FormInput::new(GasId::R410A).suction("20");
        let err = session.calculate(&chart(), &form).unwrap_err();
        assert_eq!(err, DiagnosisError::Pressure(ParseError::Empty));
        assert_eq!(err.message_key(), keys::ERROR_PRESSURE_REQUIRED);
    }

    #[test]
    fn bar_input_is_converted_to_psi() {
        let mut session = Session::new(SystemType::Conventional, Mode::Auto);
        let form = FormInput::new(GasId::R410A)
            .pressure("6,89476")
            .suction("82.4")
            .units(PressureUnit::Bar, TemperatureUnit::Fahrenheit);
        let d = session.calculate(&chart(), &form).expect("diagnosis");
        assert_eq!(d.reading.saturation_c, 19.0);
        assert_eq!(d.superheat_c, 9.0);
    }

    #[test]
    fn failure_keeps_previous_result_and_clear_resets() {
        let chart = chart();
        let mut session = Session::new(SystemType::Conventional, Mode::Auto);
        let ok = FormInput::new(GasId::R32).pressure("100").suction("25");
        session.calculate(&chart, &ok).expect("diagnosis");
        assert_eq!(session.last_superheat_c(), Some(8.0));

        let bad = FormInput::new(GasId::R32).pressure("250").suction("25");
        assert_eq!(
            session.calculate(&chart, &bad),
            Err(DiagnosisError::PressureOutOfRange(250.0))
        );
        assert_eq!(session.last_superheat_c(), Some(8.0));

        session.clear();
        assert_eq!(session.last_superheat_c(), None);
        assert_eq!(session.system_type, SystemType::Conventional);
    }
}
