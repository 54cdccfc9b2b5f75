//! 현장 사용 흐름(입력 → 조회 → 계산 → 판정) 시나리오 테스트.
use superheat_toolbox::diagnosis::{DiagnosisError, FormInput, Mode, Session};
use superheat_toolbox::i18n::{keys, Translator};
use superheat_toolbox::input::ParseError;
use superheat_toolbox::pt_chart::PtChart;
use superheat_toolbox::refrigerant::GasId;
use superheat_toolbox::superheat::{Status, SystemType};

fn chart() -> PtChart {
    PtChart::embedded().expect("embedded chart")
}

#[test]
fn r410a_at_100_psi_conventional_ok() {
    let mut session = Session::new(SystemType::Conventional, Mode::Auto);
    let form = FormInput::new(GasId::R410A).pressure("100").suction("28");
    let d = session.calculate(&chart(), &form).expect("diagnosis");
    assert!(d.reading.saturation_c > 19.0 - 1e-9 && d.reading.saturation_c < 20.0);
    assert!(d.superheat_c >= 8.0 && d.superheat_c <= 9.0, "SH {}", d.superheat_c);
    assert_eq!(d.classification.status, Status::Ok);

    let tr = Translator::new("pt-br");
    assert_eq!(
        tr.t(d.classification.advisory.key()),
        "Dentro do padrão. Se houver queixa, investigue fluxo de ar, limpeza, carga térmica e sensores."
    );
}

#[test]
fn pressure_below_table_is_range_error() {
    let mut session = Session::new(SystemType::Conventional, Mode::Auto);
    let form = FormInput::new(GasId::R410A).pressure("5").suction("28");
    let err = session.calculate(&chart(), &form).unwrap_err();
    assert_eq!(err, DiagnosisError::PressureOutOfRange(5.0));
    assert_eq!(err.message_key(), keys::ERROR_PRESSURE_RANGE);
    assert_eq!(session.last_superheat_c(), None);
}

#[test]
fn pressure_just_outside_table_is_rejected_before_rounding() {
    let chart = chart();
    let mut session = Session::new(SystemType::Conventional, Mode::Auto);
    let ok = FormInput::new(GasId::R410A).pressure("100").suction("28");
    let previous = session.calculate(&chart, &ok).expect("diagnosis").superheat_c;

    for (text, psi) in [("9.5", 9.5), ("9,9", 9.9), ("200.4", 200.4)] {
        let form = FormInput::new(GasId::R410A).pressure(text).suction("28");
        let err = session.calculate(&chart, &form).unwrap_err();
        assert_eq!(err, DiagnosisError::PressureOutOfRange(psi), "input {text}");
        assert_eq!(err.message_key(), keys::ERROR_PRESSURE_RANGE);
        assert_eq!(session.last_superheat_c(), Some(previous));
    }

    for text in ["10", "200"] {
        let form = FormInput::new(GasId::R410A).pressure(text).suction("28");
        assert!(session.calculate(&chart, &form).is_ok(), "input {text}");
    }
}

#[test]
fn manual_non_numeric_saturation_keeps_previous_result() {
    let chart = chart();
    let mut session = Session::new(SystemType::Inverter, Mode::Auto);
    let first = FormInput::new(GasId::R22).pressure("70").suction("12");
    session.calculate(&chart, &first).expect("first");
    assert_eq!(session.last_superheat_c(), Some(6.0));

    session.set_mode(Mode::Manual);
    let form = FormInput::new(GasId::R22).suction("12").saturation("abc");
    let err = session.calculate(&chart, &form).unwrap_err();
    assert_eq!(err, DiagnosisError::Saturation(ParseError::Invalid("abc".into())));
    assert_eq!(err.message_key(), keys::ERROR_SATURATION_REQUIRED);
    assert_eq!(session.last_superheat_c(), Some(6.0));
}

#[test]
fn alternate_chart_can_be_injected() {
    let regional = PtChart::from_toml_str(
        r#"
        rows = [
          { temp_f = 32.0, R32 = 90 },
          { temp_f = 50.0, R32 = 110 },
        ]
        "#,
    )
    .expect("regional chart");
    let mut session = Session::new(SystemType::Conventional, Mode::Auto);
    let form = FormInput::new(GasId::R32).pressure("100").suction("13");
    let d = session.calculate(&regional, &form).expect("diagnosis");
    assert_eq!(d.reading.saturation_c, 5.0);
    assert_eq!(d.superheat_c, 8.0);

    let other = FormInput::new(GasId::R410A).pressure("100").suction("13");
    assert_eq!(
        session.calculate(&regional, &other),
        Err(DiagnosisError::SaturationNotFound)
    );
}
