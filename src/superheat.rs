//! 과열도(SH) 계산과 시스템 종류별 판정.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::i18n::keys;

/// 소수 첫째 자리로 반올림한다. 0.5 경계는 0에서 먼 쪽으로 올린다(`f64::round`).
/// 포화 온도와 과열도 모두 이 함수로 반올림해야 판정 경계에서 값이 어긋나지 않는다.
/// `-0.0` 은 `0.0` 으로 정규화한다.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0 + 0.0
}

/// SH = 흡입 온도 - 포화 온도 (°C, 소수 첫째 자리).
pub fn compute_superheat_c(suction_c: f64, saturation_c: f64) -> f64 {
    round1(suction_c - saturation_c)
}

/// 압축기 구동 방식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SystemType {
    /// 정속형
    Conventional,
    /// 인버터(가변속)
    Inverter,
}

impl SystemType {
    /// 시스템 종류별 기대 과열도 범위.
    pub fn range(&self) -> RangeSpec {
        match self {
            SystemType::Conventional => RangeSpec { min_c: 6.0, max_c: 12.0 },
            SystemType::Inverter => RangeSpec { min_c: 3.0, max_c: 8.0 },
        }
    }

    pub fn name_key(&self) -> &'static str {
        match self {
            SystemType::Conventional => keys::SYSTEM_CONVENTIONAL,
            SystemType::Inverter => keys::SYSTEM_INVERTER,
        }
    }

    /// 시스템 선택 시 보여줄 안내 문구 키.
    pub fn hint_key(&self) -> &'static str {
        match self {
            SystemType::Conventional => keys::HINT_CONVENTIONAL,
            SystemType::Inverter => keys::HINT_INVERTER,
        }
    }

    /// 기대 범위 설명 문구 키. `{min}`, `{max}` 자리표시자를 포함한다.
    pub fn range_key(&self) -> &'static str {
        match self {
            SystemType::Conventional => keys::RANGE_CONVENTIONAL,
            SystemType::Inverter => keys::RANGE_INVERTER,
        }
    }

    /// 결과가 나오기 전 기본 안내 문구 키.
    pub fn guidance_key(&self) -> &'static str {
        match self {
            SystemType::Conventional => keys::GUIDANCE_CONVENTIONAL,
            SystemType::Inverter => keys::GUIDANCE_INVERTER,
        }
    }
}

impl FromStr for SystemType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "conventional" | "convencional" | "conv" => Ok(SystemType::Conventional),
            "inverter" | "inv" => Ok(SystemType::Inverter),
            other => Err(format!("알 수 없는 시스템 종류: {other}")),
        }
    }
}

/// 기대 과열도 범위(°C, 양끝 포함).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeSpec {
    pub min_c: f64,
    pub max_c: f64,
}

/// 판정 결과 상태.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Low,
    Ok,
    High,
}

impl Status {
    pub fn label_key(&self) -> &'static str {
        match self {
            Status::Low => keys::STATUS_LOW,
            Status::Ok => keys::STATUS_OK,
            Status::High => keys::STATUS_HIGH,
        }
    }
}

/// (시스템 종류, 상태) 조합별 고정 조언 문구.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvisoryKey {
    ConventionalLow,
    ConventionalOk,
    ConventionalHigh,
    InverterLow,
    InverterOk,
    InverterHigh,
}

impl AdvisoryKey {
    pub fn for_result(system: SystemType, status: Status) -> Self {
        match (system, status) {
            (SystemType::Conventional, Status::Low) => AdvisoryKey::ConventionalLow,
            (SystemType::Conventional, Status::Ok) => AdvisoryKey::ConventionalOk,
            (SystemType::Conventional, Status::High) => AdvisoryKey::ConventionalHigh,
            (SystemType::Inverter, Status::Low) => AdvisoryKey::InverterLow,
            (SystemType::Inverter, Status::Ok) => AdvisoryKey::InverterOk,
            (SystemType::Inverter, Status::High) => AdvisoryKey::InverterHigh,
        }
    }

    /// 번역 키.
    pub fn key(&self) -> &'static str {
        match self {
            AdvisoryKey::ConventionalLow => keys::ADVICE_CONVENTIONAL_LOW,
            AdvisoryKey::ConventionalOk => keys::ADVICE_CONVENTIONAL_OK,
            AdvisoryKey::ConventionalHigh => keys::ADVICE_CONVENTIONAL_HIGH,
            AdvisoryKey::InverterLow => keys::ADVICE_INVERTER_LOW,
            AdvisoryKey::InverterOk => keys::ADVICE_INVERTER_OK,
            AdvisoryKey::InverterHigh => keys::ADVICE_INVERTER_HIGH,
        }
    }
}

/// 판정 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub system: SystemType,
    pub range: RangeSpec,
    pub status: Status,
    pub advisory: AdvisoryKey,
}

/// 과열도를 시스템 종류의 기대 범위와 비교한다. 범위 양끝은 정상으로 본다.
pub fn classify(system: SystemType, superheat_c: f64) -> Classification {
    let range = system.range();
    let status = if superheat_c < range.min_c {
        Status::Low
    } else if superheat_c > range.max_c {
        Status::High
    } else {
        Status::Ok
    };
    Classification {
        system,
        range,
        status,
        advisory: AdvisoryKey::for_result(system, status),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round1_half_away_from_zero() {
        assert_eq!(round1(0.25), 0.3);
        assert_eq!(round1(-0.25), -0.3);
        assert_eq!(round1(2.75), 2.8);
        assert_eq!(round1(-2.75), -2.8);
        assert_eq!(round1(19.0), 19.0);
    }

    #[test]
    fn tiny_negative_superheat_is_plain_zero() {
        let sh = compute_superheat_c(19.0, 19.04);
        assert!(sh.is_sign_positive(), "sh={sh:?}");
        assert_eq!(sh.to_string(), "0");
        assert_eq!(format!("{sh:.1}"), "0.0");
        assert_eq!(round1(-0.0).to_string(), "0");
    }

    #[test]
    fn superheat_is_rounded_difference() {
        assert_eq!(compute_superheat_c(28.0, 19.0), 9.0);
        assert_eq!(compute_superheat_c(10.0, 12.5), -2.5);
        assert_eq!(compute_superheat_c(20.25, 12.0), 8.3);
    }

    #[test]
    fn conventional_boundaries() {
        let s = SystemType::Conventional;
        assert_eq!(classify(s, 6.0).status, Status::Ok);
        assert_eq!(classify(s, 12.0).status, Status::Ok);
        assert_eq!(classify(s, 5.9).status, Status::Low);
        assert_eq!(classify(s, 12.1).status, Status::High);
    }

    #[test]
    fn inverter_boundaries() {
        let s = SystemType::Inverter;
        assert_eq!(classify(s, 3.0).status, Status::Ok);
        assert_eq!(classify(s, 8.0).status, Status::Ok);
        assert_eq!(classify(s, 2.9).status, Status::Low);
        assert_eq!(classify(s, 8.1).status, Status::High);
    }

    #[test]
    fn advisory_follows_system_and_status() {
        assert_eq!(
            classify(SystemType::Inverter, 10.0).advisory,
            AdvisoryKey::InverterHigh
        );
        assert_eq!(
            classify(SystemType::Conventional, 1.0).advisory,
            AdvisoryKey::ConventionalLow
        );
        let keys: std::collections::HashSet<&str> = [
            AdvisoryKey::ConventionalLow,
            AdvisoryKey::ConventionalOk,
            AdvisoryKey::ConventionalHigh,
            AdvisoryKey::InverterLow,
            AdvisoryKey::InverterOk,
            AdvisoryKey::InverterHigh,
        ]
        .iter()
        .map(|a| a.key())
        .collect();
        assert_eq!(keys.len(), 6);
    }

    #[test]
    fn parses_system_type() {
        assert_eq!("Convencional".parse::<SystemType>(), Ok(SystemType::Conventional));
        assert_eq!("INVERTER".parse::<SystemType>(), Ok(SystemType::Inverter));
        assert!("split".parse::<SystemType>().is_err());
    }
}
