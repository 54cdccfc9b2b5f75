use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// 압력 단위. 내부 기준은 항상 psi(게이지 기준)이다.
/// 현장 매니폴드 게이지 값을 그대로 입력받으므로 절대압 단위는 두지 않는다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PressureUnit {
    Psi,
    Bar,
    KiloPascal,
}

const BAR_PER_PSI: f64 = 0.0689476;
const KPA_PER_PSI: f64 = 6.89476;

impl PressureUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            PressureUnit::Psi => "psi",
            PressureUnit::Bar => "bar",
            PressureUnit::KiloPascal => "kPa",
        }
    }
}

impl FromStr for PressureUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "psi" | "psig" => Ok(PressureUnit::Psi),
            "bar" | "barg" => Ok(PressureUnit::Bar),
            "kpa" => Ok(PressureUnit::KiloPascal),
            other => Err(format!("알 수 없는 압력 단위: {other}")),
        }
    }
}

/// 주어진 게이지 압력을 psi 로 변환한다.
pub fn to_psi(value: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Psi => value,
        PressureUnit::Bar => value / BAR_PER_PSI,
        PressureUnit::KiloPascal => value / KPA_PER_PSI,
    }
}
