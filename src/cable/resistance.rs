use super::Material;

/// 구리 저항률 [Ω·mm²/m]
pub const COPPER_RESISTIVITY: f64 = 0.0172;
/// 알루미늄 저항률 [Ω·mm²/m]
pub const ALUMINUM_RESISTIVITY: f64 = 0.0282;

/// 재질별 저항률 [Ω·mm²/m]을 반환한다.
pub fn resistivity(material: Material) -> f64 {
    match material {
        Material::Copper => COPPER_RESISTIVITY,
        Material::Aluminum => ALUMINUM_RESISTIVITY,
    }
}

/// 왕복 도체 경로(길이 × 2)의 루프 저항 [Ω]을 계산한다.
///
/// `cross_section_mm2 > 0`은 호출 측에서 보장해야 한다.
pub fn calculate_resistance(material: Material, cross_section_mm2: f64, length_m: f64) -> f64 {
    resistivity(material) * (length_m * 2.0) / cross_section_mm2
}
