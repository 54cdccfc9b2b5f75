//! 냉매별 압력-포화온도(P/T) 차트를 구성한다.
//!
//! 원본 표는 °F 온도 행마다 냉매별 게이지 압력을 나열한 형태이며,
//! 이를 냉매별 `(압력, °C)` 표본 목록으로 정규화해 압력 오름차순으로 보관한다.
//! 한 번 만든 차트는 변경하지 않고 조회 함수에 참조로 넘긴다.

pub mod data;

use log::{debug, info, warn};
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use crate::input::parse_number;
use crate::refrigerant::GasId;
use crate::units::fahrenheit_to_celsius;

/// 원본 표의 셀 값. 숫자가 아니면 해당 냉매는 그 행에서 건너뛴다.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawCell {
    Number(f64),
    Text(String),
    Other(toml::Value),
}

impl RawCell {
    /// 셀을 압력(psi)으로 해석한다. 문자열은 입력 필드와 같은 규칙(`,` 허용)으로 해석한다.
    pub fn as_pressure(&self) -> Option<f64> {
        match self {
            RawCell::Number(v) if v.is_finite() => Some(*v),
            RawCell::Number(_) => None,
            RawCell::Text(s) => parse_number(s).ok(),
            RawCell::Other(_) => None,
        }
    }
}

/// 원본 표의 한 행: 포화 온도(°F)와 냉매 열 이름별 압력.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawRow {
    pub temp_f: f64,
    #[serde(flatten)]
    pub cells: BTreeMap<String, RawCell>,
}

impl RawRow {
    pub fn new(temp_f: f64) -> Self {
        Self {
            temp_f,
            cells: BTreeMap::new(),
        }
    }

    /// 냉매 열에 압력 값을 추가한다.
    pub fn with(mut self, gas: GasId, pressure_psi: f64) -> Self {
        self.cells
            .insert(gas.as_str().to_string(), RawCell::Number(pressure_psi));
        self
    }
}

/// 정규화 전 원본 표.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawTable {
    pub rows: Vec<RawRow>,
}

impl RawTable {
    /// `rows = [{ temp_f = .., R410A = .. }, ..]` 형식의 TOML 문자열을 읽는다.
    pub fn from_toml_str(src: &str) -> Result<Self, ChartError> {
        Ok(toml::from_str(src)?)
    }
}

/// 정규화된 표본 하나.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub pressure_psi: f64,
    pub temp_c: f64,
}

/// 차트 구성 시 발생 가능한 오류.
#[derive(Debug)]
pub enum ChartError {
    /// 차트 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 파싱 오류
    Parse(toml::de::Error),
    /// 보간에 필요한 표본(2개)이 부족함
    TooFewSamples(GasId),
    /// 같은 압력의 표본이 중복됨
    DuplicatePressure { gas: GasId, pressure_psi: f64 },
    /// 사용할 수 있는 냉매 열이 하나도 없음
    Empty,
}

impl std::fmt::Display for ChartError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChartError::Io(e) => write!(f, "차트 파일 입출력 오류: {e}"),
            ChartError::Parse(e) => write!(f, "차트 파싱 오류: {e}"),
            ChartError::TooFewSamples(gas) => write!(f, "{gas}: 표본이 2개 미만입니다"),
            ChartError::DuplicatePressure { gas, pressure_psi } => {
                write!(f, "{gas}: {pressure_psi} psi 표본이 중복됩니다")
            }
            ChartError::Empty => write!(f, "차트에 냉매 데이터가 없습니다"),
        }
    }
}

impl std::error::Error for ChartError {}

impl From<std::io::Error> for ChartError {
    fn from(value: std::io::Error) -> Self {
        ChartError::Io(value)
    }
}

impl From<toml::de::Error> for ChartError {
    fn from(value: toml::de::Error) -> Self {
        ChartError::Parse(value)
    }
}

/// 한 냉매의 P/T 곡선. 압력이 엄격히 증가하며 표본은 2개 이상이다.
#[derive(Debug, Clone, PartialEq)]
pub struct GasCurve {
    samples: Vec<Sample>,
}

impl GasCurve {
    /// 표본을 압력순으로 정렬한 뒤 불변식을 검사한다.
    pub fn new(gas: GasId, mut samples: Vec<Sample>) -> Result<Self, ChartError> {
        if samples.len() < 2 {
            return Err(ChartError::TooFewSamples(gas));
        }
        samples.sort_by(|a, b| a.pressure_psi.total_cmp(&b.pressure_psi));
        for pair in samples.windows(2) {
            if pair[0].pressure_psi == pair[1].pressure_psi {
                return Err(ChartError::DuplicatePressure {
                    gas,
                    pressure_psi: pair[0].pressure_psi,
                });
            }
        }
        Ok(Self { samples })
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// 곡선이 정의된 압력 구간 (최소, 최대) psi.
    pub fn pressure_bounds(&self) -> (f64, f64) {
        (self.samples[0].pressure_psi, self.samples[self.samples.len() - 1].pressure_psi)
    }

    /// 곡선 내 최소/최대 포화 온도(°C).
    pub fn temperature_bounds(&self) -> (f64, f64) {
        self.samples
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), s| {
                (lo.min(s.temp_c), hi.max(s.temp_c))
            })
    }

    /// `a.p <= p <= b.p` 를 만족하는 인접 표본 쌍을 이진 탐색으로 찾는다.
    /// 곡선 범위 밖이면 None.
    pub fn bracket(&self, pressure_psi: f64) -> Option<(Sample, Sample)> {
        let (lo, hi) = self.pressure_bounds();
        if !(pressure_psi >= lo && pressure_psi <= hi) {
            return None;
        }
        let idx = self
            .samples
            .partition_point(|s| s.pressure_psi < pressure_psi);
        if idx == 0 {
            Some((self.samples[0], self.samples[1]))
        } else {
            Some((self.samples[idx - 1], self.samples[idx]))
        }
    }
}

/// 냉매별 P/T 곡선 모음. 조회 함수에 주입되는 불변 값이다.
#[derive(Debug, Clone, PartialEq)]
pub struct PtChart {
    curves: BTreeMap<GasId, GasCurve>,
}

impl PtChart {
    /// 내장 차트로 구성한다.
    pub fn embedded() -> Result<Self, ChartError> {
        Self::from_toml_str(data::EMBEDDED_CHART)
    }

    /// TOML 원본 표 문자열로 구성한다.
    pub fn from_toml_str(src: &str) -> Result<Self, ChartError> {
        build_curves(&RawTable::from_toml_str(src)?)
    }

    /// 지역 보정용 등 외부 차트 파일로 구성한다.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ChartError> {
        let path = path.as_ref();
        info!("P/T 차트 로드: {}", path.display());
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn curve(&self, gas: GasId) -> Option<&GasCurve> {
        self.curves.get(&gas)
    }

    /// 차트에 포함된 냉매 목록.
    pub fn gases(&self) -> impl Iterator<Item = GasId> + '_ {
        self.curves.keys().copied()
    }
}

/// 원본 표를 냉매별 정렬된 (압력, °C) 곡선으로 변환한다.
pub fn build_curves(raw: &RawTable) -> Result<PtChart, ChartError> {
    let mut pairs: BTreeMap<GasId, Vec<Sample>> = BTreeMap::new();
    let mut unknown_columns = BTreeSet::new();

    for row in &raw.rows {
        if !row.temp_f.is_finite() {
            debug!("온도가 유효하지 않은 행을 건너뜀: {}", row.temp_f);
            continue;
        }
        let temp_c = fahrenheit_to_celsius(row.temp_f);
        for (column, cell) in &row.cells {
            let gas = match column.parse::<GasId>() {
                Ok(gas) => gas,
                Err(_) => {
                    unknown_columns.insert(column.clone());
                    continue;
                }
            };
            match cell.as_pressure() {
                Some(pressure_psi) => pairs
                    .entry(gas)
                    .or_default()
                    .push(Sample { pressure_psi, temp_c }),
                None => debug!("{gas} {}°F: 숫자가 아닌 셀 건너뜀 ({cell:?})", row.temp_f),
            }
        }
    }

    for column in &unknown_columns {
        warn!("알 수 없는 냉매 열을 무시함: {column}");
    }

    let mut curves = BTreeMap::new();
    for (gas, samples) in pairs {
        let curve = GasCurve::new(gas, samples)?;
        debug!("{gas}: 표본 {}개, 구간 {:?} psi", curve.samples().len(), curve.pressure_bounds());
        curves.insert(gas, curve);
    }
    if curves.is_empty() {
        return Err(ChartError::Empty);
    }
    info!("P/T 차트 구성 완료: 냉매 {}종", curves.len());
    Ok(PtChart { curves })
}
