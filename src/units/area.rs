use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// 1 kcmil = 1000 circular mil = 0.506707 mm²
const MM2_PER_KCMIL: f64 = 0.506_707;

/// 도체 단면적 입력 단위. 내부 기준은 mm²이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AreaUnit {
    #[default]
    SquareMillimeter,
    Kcmil,
}

impl AreaUnit {
    pub const ALL: [AreaUnit; 2] = [AreaUnit::SquareMillimeter, AreaUnit::Kcmil];

    pub fn symbol(&self) -> &'static str {
        match self {
            AreaUnit::SquareMillimeter => "mm²",
            AreaUnit::Kcmil => "kcmil",
        }
    }
}

impl FromStr for AreaUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mm2" | "mm²" | "mm^2" => Ok(AreaUnit::SquareMillimeter),
            "kcmil" | "mcm" => Ok(AreaUnit::Kcmil),
            other => Err(format!("알 수 없는 단면적 단위: {other}")),
        }
    }
}

/// 단면적을 mm²로 환산한다.
pub fn to_square_millimeter(value: f64, unit: AreaUnit) -> f64 {
    match unit {
        AreaUnit::SquareMillimeter => value,
        AreaUnit::Kcmil => value * MM2_PER_KCMIL,
    }
}
