use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// 케이블 길이 입력 단위. 내부 기준은 미터이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LengthUnit {
    #[default]
    Meter,
    Kilometer,
    Foot,
}

impl LengthUnit {
    pub const ALL: [LengthUnit; 3] = [LengthUnit::Meter, LengthUnit::Kilometer, LengthUnit::Foot];

    pub fn symbol(&self) -> &'static str {
        match self {
            LengthUnit::Meter => "m",
            LengthUnit::Kilometer => "km",
            LengthUnit::Foot => "ft",
        }
    }
}

impl FromStr for LengthUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "m" | "meter" | "metro" => Ok(LengthUnit::Meter),
            "km" | "kilometer" | "quilômetro" | "quilometro" => Ok(LengthUnit::Kilometer),
            "ft" | "foot" | "feet" | "pé" | "pe" => Ok(LengthUnit::Foot),
            other => Err(format!("알 수 없는 길이 단위: {other}")),
        }
    }
}

/// 길이를 미터로 환산한다.
pub fn to_meter(value: f64, unit: LengthUnit) -> f64 {
    match unit {
        LengthUnit::Meter => value,
        LengthUnit::Kilometer => value * 1000.0,
        LengthUnit::Foot => value * 0.3048,
    }
}
