//! 케이블 선로의 도체 저항과 전압강하 계산 모듈.
//! 입력 검증은 호출 측(`calculator`)이 담당하고, 여기의 함수들은 순수 계산만 수행한다.

pub mod resistance;
pub mod voltage_drop;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub use resistance::{calculate_resistance, resistivity};
pub use voltage_drop::{calculate_voltage_drop, VoltageDrop};

/// 도체 재질. 두 가지만 지원한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Material {
    #[default]
    Copper,
    Aluminum,
}

impl Material {
    pub const ALL: [Material; 2] = [Material::Copper, Material::Aluminum];

    /// 화면 표시용 이름.
    pub fn label(&self) -> &'static str {
        match self {
            Material::Copper => "Cobre",
            Material::Aluminum => "Alumínio",
        }
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 알 수 없는 재질 이름.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("재질을 알 수 없음: '{0}' (cobre/copper 또는 alumínio/aluminum)")]
pub struct MaterialParseError(pub String);

impl FromStr for Material {
    type Err = MaterialParseError;

    /// 문자열에 해당하지 않는 재질은 알루미늄으로 간주하지 않고 오류로 돌려준다.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cobre" | "copper" | "cu" => Ok(Material::Copper),
            "alumínio" | "aluminio" | "aluminum" | "aluminium" | "al" => Ok(Material::Aluminum),
            _ => Err(MaterialParseError(s.to_string())),
        }
    }
}

/// 설치 방식(상 구성).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InstallationType {
    #[default]
    SinglePhase,
    ThreePhase,
}

impl InstallationType {
    pub const ALL: [InstallationType; 2] =
        [InstallationType::SinglePhase, InstallationType::ThreePhase];

    pub fn label(&self) -> &'static str {
        match self {
            InstallationType::SinglePhase => "Monofásica",
            InstallationType::ThreePhase => "Trifásica",
        }
    }
}

impl fmt::Display for InstallationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 알 수 없는 설치 방식 이름.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("설치 방식을 알 수 없음: '{0}' (monofásica/single 또는 trifásica/three)")]
pub struct InstallationParseError(pub String);

impl FromStr for InstallationType {
    type Err = InstallationParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "monofásica" | "monofasica" | "mono" | "single" | "single-phase" | "1" => {
                Ok(InstallationType::SinglePhase)
            }
            "trifásica" | "trifasica" | "tri" | "three" | "three-phase" | "3" => {
                Ok(InstallationType::ThreePhase)
            }
            _ => Err(InstallationParseError(s.to_string())),
        }
    }
}

/// 케이블 사양. 단면적은 mm², 길이는 m(편도) 기준이다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CableSpec {
    pub material: Material,
    pub cross_section_mm2: f64,
    pub length_m: f64,
    pub installation: InstallationType,
}

/// 전기적 조건. 공칭 전압 [V], 부하 전류 [A].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElectricalInput {
    pub voltage_v: f64,
    pub current_a: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn material_names_parse_in_both_languages() {
        assert_eq!("Cobre".parse::<Material>(), Ok(Material::Copper));
        assert_eq!(" copper ".parse::<Material>(), Ok(Material::Copper));
        assert_eq!("Alumínio".parse::<Material>(), Ok(Material::Aluminum));
        assert_eq!("ALUMINIUM".parse::<Material>(), Ok(Material::Aluminum));
    }

    #[test]
    fn unknown_material_is_rejected() {
        let err = "ouro".parse::<Material>().unwrap_err();
        assert_eq!(err, MaterialParseError("ouro".into()));
    }

    #[test]
    fn installation_names_parse() {
        assert_eq!(
            "Monofásica".parse::<InstallationType>(),
            Ok(InstallationType::SinglePhase)
        );
        assert_eq!(
            "three".parse::<InstallationType>(),
            Ok(InstallationType::ThreePhase)
        );
        assert!("bifásica".parse::<InstallationType>().is_err());
    }
}
