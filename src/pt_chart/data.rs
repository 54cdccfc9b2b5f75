//! 내장 P/T 차트 원본.
//!
//! 각 행은 포화 온도(°F)와 냉매별 게이지 압력(psi)이다. 해당 온도에 값이 없는 냉매는 비워둔다.
//! 10~200 psi 구간을 10 psi 간격 앵커로 덮으며, 사이 값은 조회 시 선형 보간한다.

pub const EMBEDDED_CHART: &str = r#"
rows = [
  { temp_f = -18.4, R22 = 10 },
  { temp_f = -14.8, R32 = 10 },
  { temp_f = -11.2, R410A = 10 },
  { temp_f = -0.4, R22 = 20 },
  { temp_f = 3.2, R32 = 20 },
  { temp_f = 6.8, R410A = 20 },
  { temp_f = 12.2, R22 = 30 },
  { temp_f = 15.8, R32 = 30 },
  { temp_f = 19.4, R410A = 30 },
  { temp_f = 21.2, R22 = 40 },
  { temp_f = 24.8, R32 = 40 },
  { temp_f = 28.4, R410A = 40 },
  { temp_f = 30.2, R22 = 50 },
  { temp_f = 32.0, R32 = 50 },
  { temp_f = 37.4, R410A = 50, R22 = 60 },
  { temp_f = 39.2, R32 = 60 },
  { temp_f = 42.8, R22 = 70 },
  { temp_f = 44.6, R410A = 60 },
  { temp_f = 46.4, R32 = 70 },
  { temp_f = 48.2, R22 = 80 },
  { temp_f = 50.0, R410A = 70 },
  { temp_f = 51.8, R32 = 80 },
  { temp_f = 53.6, R22 = 90 },
  { temp_f = 55.4, R410A = 80 },
  { temp_f = 57.2, R32 = 90 },
  { temp_f = 59.0, R22 = 100 },
  { temp_f = 60.8, R410A = 90 },
  { temp_f = 62.6, R32 = 100 },
  { temp_f = 64.4, R22 = 110 },
  { temp_f = 66.2, R410A = 100, R32 = 110 },
  { temp_f = 68.0, R22 = 120 },
  { temp_f = 71.6, R410A = 110, R32 = 120 },
  { temp_f = 73.4, R22 = 130 },
  { temp_f = 75.2, R410A = 120, R32 = 130 },
  { temp_f = 77.0, R22 = 140 },
  { temp_f = 78.8, R32 = 140 },
  { temp_f = 80.6, R410A = 130, R22 = 150 },
  { temp_f = 82.4, R32 = 150 },
  { temp_f = 84.2, R410A = 140, R22 = 160 },
  { temp_f = 86.0, R32 = 160 },
  { temp_f = 87.8, R410A = 150, R22 = 170 },
  { temp_f = 89.6, R32 = 170 },
  { temp_f = 91.4, R410A = 160, R22 = 180 },
  { temp_f = 93.2, R32 = 180 },
  { temp_f = 95.0, R410A = 170, R22 = 190 },
  { temp_f = 96.8, R32 = 190 },
  { temp_f = 98.6, R410A = 180, R22 = 200 },
  { temp_f = 100.4, R32 = 200 },
  { temp_f = 102.2, R410A = 190 },
  { temp_f = 105.8, R410A = 200 },
]
"#;
