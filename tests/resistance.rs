//! 루프 저항 계산 회귀 테스트.
use voltage_drop_calculator::cable::{calculate_resistance, resistivity, Material};

#[test]
fn copper_2_5mm2_20m() {
    // 0.0172 * 40 / 2.5
    let r = calculate_resistance(Material::Copper, 2.5, 20.0);
    assert!((r - 0.2752).abs() < 1e-12, "r={r}");
}

#[test]
fn aluminum_uses_its_own_resistivity() {
    let r = calculate_resistance(Material::Aluminum, 10.0, 50.0);
    assert!((r - 0.0282 * 100.0 / 10.0).abs() < 1e-12, "r={r}");
    assert_eq!(resistivity(Material::Aluminum), 0.0282);
}

#[test]
fn linear_in_length_inverse_in_section() {
    for material in Material::ALL {
        let base = calculate_resistance(material, 4.0, 30.0);
        let double_length = calculate_resistance(material, 4.0, 60.0);
        let double_section = calculate_resistance(material, 8.0, 30.0);
        assert!((double_length - 2.0 * base).abs() < 1e-12);
        assert!((double_section - base / 2.0).abs() < 1e-12);
    }
}

#[test]
fn copper_always_below_aluminum() {
    for &(section, length) in &[(1.5, 1.0), (2.5, 20.0), (16.0, 150.0), (240.0, 0.5)] {
        let cu = calculate_resistance(Material::Copper, section, length);
        let al = calculate_resistance(Material::Aluminum, section, length);
        assert!(cu < al, "section={section} length={length}");
    }
}
