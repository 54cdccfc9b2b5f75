//! 냉동·공조 현장용 과열도 계산기의 핵심 로직.
//! P/T 차트 조회와 판정을 라이브러리로 분리하여 CLI 외의 화면에서도 그대로 호출할 수 있게 한다.

pub mod app;
pub mod config;
pub mod diagnosis;
pub mod i18n;
pub mod input;
pub mod pt_chart;
pub mod refrigerant;
pub mod saturation;
pub mod superheat;
pub mod ui_cli;
pub mod units;
