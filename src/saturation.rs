//! 게이지 압력으로 냉매 포화 온도를 조회한다.
//!
//! 입력 압력은 1 psi 단위로 반올림한 뒤 차트 곡선에서 선형 보간한다.
//! 자동 조회 범위는 10~200 psi 이며, 곡선 밖 압력은 가장 가까운 앵커로 고정하지 않고 실패로 돌려준다.

use log::debug;

use crate::pt_chart::PtChart;
use crate::refrigerant::GasId;
use crate::superheat::round1;

/// 자동 조회 하한(psi).
pub const MIN_PRESSURE_PSI: u32 = 10;
/// 자동 조회 상한(psi).
pub const MAX_PRESSURE_PSI: u32 = 200;

/// 포화 온도 조회 오류.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LookupError {
    /// 반올림한 압력이 10~200 psi 밖
    OutOfRange(f64),
    /// 차트에 냉매가 없거나 곡선 구간 밖
    NotFound,
}

impl std::fmt::Display for LookupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LookupError::OutOfRange(p) => write!(
                f,
                "압력 범위를 벗어남: {p} psi ({MIN_PRESSURE_PSI}~{MAX_PRESSURE_PSI} psi)"
            ),
            LookupError::NotFound => write!(f, "보간할 수 있는 포화 온도가 없음"),
        }
    }
}

impl std::error::Error for LookupError {}

/// 압력을 1 psi 단위로 반올림하고 자동 조회 범위를 확인한다.
pub fn round_pressure(pressure_psi: f64) -> Result<f64, LookupError> {
    let p = pressure_psi.round();
    if !p.is_finite() || p < MIN_PRESSURE_PSI as f64 || p > MAX_PRESSURE_PSI as f64 {
        return Err(LookupError::OutOfRange(pressure_psi));
    }
    Ok(p)
}

/// 냉매와 게이지 압력(psi)으로 포화 온도(°C, 소수 첫째 자리)를 계산한다.
pub fn lookup_saturation_c(
    chart: &PtChart,
    gas: GasId,
    pressure_psi: f64,
) -> Result<f64, LookupError> {
    let p = round_pressure(pressure_psi)?;
    let curve = chart.curve(gas).ok_or_else(|| {
        debug!("{gas}: 차트에 곡선이 없음");
        LookupError::NotFound
    })?;
    let (a, b) = curve.bracket(p).ok_or_else(|| {
        debug!("{gas}: {p} psi 는 곡선 구간 {:?} 밖", curve.pressure_bounds());
        LookupError::NotFound
    })?;
    let t = (p - a.pressure_psi) / (b.pressure_psi - a.pressure_psi);
    Ok(round1(a.temp_c + (b.temp_c - a.temp_c) * t))
}

/// 실패 종류를 구분하지 않는 조회. 값이 없으면 None.
pub fn saturation_c(chart: &PtChart, gas: GasId, pressure_psi: f64) -> Option<f64> {
    lookup_saturation_c(chart, gas, pressure_psi).ok()
}

/// 10~200 psi 의 1 psi 간격 포화 온도표. 곡선이 덮지 못하는 압력은 빠진다.
pub fn pressure_table(chart: &PtChart, gas: GasId) -> Vec<(u32, f64)> {
    (MIN_PRESSURE_PSI..=MAX_PRESSURE_PSI)
        .filter_map(|psi| saturation_c(chart, gas, psi as f64).map(|t| (psi, t)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pt_chart::{build_curves, RawRow, RawTable};

    fn chart() -> PtChart {
        PtChart::embedded().expect("embedded chart")
    }

    #[test]
    fn anchors_and_midpoints() {
        let chart = chart();
        assert_eq!(lookup_saturation_c(&chart, GasId::R410A, 100.0), Ok(19.0));
        assert_eq!(lookup_saturation_c(&chart, GasId::R410A, 105.0), Ok(20.5));
        assert_eq!(lookup_saturation_c(&chart, GasId::R32, 10.0), Ok(-26.0));
        assert_eq!(lookup_saturation_c(&chart, GasId::R22, 15.0), Ok(-23.0));
        assert_eq!(lookup_saturation_c(&chart, GasId::R22, 57.0), Ok(1.8));
    }

    #[test]
    fn pressure_is_rounded_to_whole_psi() {
        let chart = chart();
        assert_eq!(lookup_saturation_c(&chart, GasId::R410A, 99.6), Ok(19.0));
        assert_eq!(lookup_saturation_c(&chart, GasId::R410A, 100.4), Ok(19.0));
        assert_eq!(lookup_saturation_c(&chart, GasId::R410A, 9.5), Ok(-24.0));
        assert_eq!(lookup_saturation_c(&chart, GasId::R410A, 200.4), Ok(41.0));
    }

    #[test]
    fn out_of_range_is_distinct_from_not_found() {
        let chart = chart();
        assert_eq!(
            lookup_saturation_c(&chart, GasId::R410A, 5.0),
            Err(LookupError::OutOfRange(5.0))
        );
        assert!(matches!(
            lookup_saturation_c(&chart, GasId::R22, 200.5),
            Err(LookupError::OutOfRange(_))
        ));
        assert!(matches!(
            lookup_saturation_c(&chart, GasId::R22, f64::NAN),
            Err(LookupError::OutOfRange(_))
        ));
    }

    #[test]
    fn missing_gas_or_short_curve_is_not_found() {
        let raw = RawTable {
            rows: vec![
                RawRow::new(32.0).with(GasId::R22, 50.0),
                RawRow::new(50.0).with(GasId::R22, 80.0),
            ],
        };
        let chart = build_curves(&raw).expect("chart");
        assert_eq!(lookup_saturation_c(&chart, GasId::R22, 65.0), Ok(5.0));
        assert_eq!(
            lookup_saturation_c(&chart, GasId::R22, 100.0),
            Err(LookupError::NotFound)
        );
        assert_eq!(
            lookup_saturation_c(&chart, GasId::R32, 65.0),
            Err(LookupError::NotFound)
        );
        assert_eq!(saturation_c(&chart, GasId::R32, 65.0), None);
    }

    #[test]
    fn table_covers_every_psi() {
        let table = pressure_table(&chart(), GasId::R32);
        assert_eq!(table.len(), 191);
        assert_eq!(table[0], (10, -26.0));
        assert_eq!(table[190], (200, 38.0));
    }
}
