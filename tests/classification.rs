//! 시스템 종류별 과열도 판정 경계 테스트.
use superheat_toolbox::superheat::{classify, compute_superheat_c, AdvisoryKey, Status, SystemType};

fn assert_close(label: &str, actual: f64, expected: f64, tol: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tol,
        "{label} expected {expected:.3} got {actual:.3} (diff {diff:.3e}, tol {tol})"
    );
}

#[test]
fn conventional_band_is_inclusive() {
    let cases = [
        (5.9, Status::Low),
        (6.0, Status::Ok),
        (9.0, Status::Ok),
        (12.0, Status::Ok),
        (12.1, Status::High),
    ];
    for (sh, status) in cases {
        assert_eq!(classify(SystemType::Conventional, sh).status, status, "SH {sh}");
    }
}

#[test]
fn inverter_band_is_inclusive() {
    let cases = [
        (2.9, Status::Low),
        (3.0, Status::Ok),
        (8.0, Status::Ok),
        (8.1, Status::High),
    ];
    for (sh, status) in cases {
        assert_eq!(classify(SystemType::Inverter, sh).status, status, "SH {sh}");
    }
}

#[test]
fn same_superheat_differs_by_system() {
    let conv = classify(SystemType::Conventional, 10.0);
    let inv = classify(SystemType::Inverter, 10.0);
    assert_eq!(conv.advisory, AdvisoryKey::ConventionalOk);
    assert_eq!(inv.advisory, AdvisoryKey::InverterHigh);
    assert_close("conv.max", conv.range.max_c, 12.0, 0.0);
    assert_close("inv.max", inv.range.max_c, 8.0, 0.0);
}

#[test]
fn rounded_superheat_at_band_edge() {
    // 6.04 -> 6.0 으로 반올림된 뒤 판정
    let sh = compute_superheat_c(25.04, 19.0);
    assert_close("sh", sh, 6.0, 1e-12);
    assert_eq!(classify(SystemType::Conventional, sh).status, Status::Ok);

    let sh = compute_superheat_c(7.0, 19.0);
    assert_close("sh", sh, -12.0, 1e-12);
    assert_eq!(classify(SystemType::Inverter, sh).status, Status::Low);
}
