//! 입력 필드 검증 → 계산 → 판정까지의 단일 흐름.
//!
//! 화면(GUI/CLI)은 필드 문자열과 선택값을 [`RawInput`]으로 넘기기만 하고,
//! 검증 순서와 오류 종류는 모두 이 모듈이 결정한다.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use tracing::{debug, warn};

use crate::cable::{
    calculate_resistance, calculate_voltage_drop, CableSpec, ElectricalInput, InstallationType,
    Material,
};
use crate::units::{to_meter, to_square_millimeter, AreaUnit, LengthUnit};

/// NBR 5410 허용 전압강하 [%]. 이 값과 같으면 적합이다.
pub const DROP_LIMIT_PERCENT: f64 = 4.0;

/// 숫자 입력 필드. 배열 순서가 빈 값 검사 순서다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Field {
    Voltage,
    Current,
    Length,
    CrossSection,
}

impl Field {
    pub const ORDER: [Field; 4] = [
        Field::Voltage,
        Field::Current,
        Field::Length,
        Field::CrossSection,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Field::Voltage => "Tensão",
            Field::Current => "Corrente",
            Field::Length => "Comprimento",
            Field::CrossSection => "Seção",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 위반된 범위 규칙.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicRule {
    /// 단면적 ≤ 0
    NonPositiveCrossSection,
    /// 전압 ≤ 0, 전류 < 0, 길이 ≤ 0 중 하나
    NonPositiveElectrical,
}

impl fmt::Display for LogicRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogicRule::NonPositiveCrossSection => {
                f.write_str("A seção do cabo deve ser um valor positivo.")
            }
            LogicRule::NonPositiveElectrical => {
                f.write_str("Tensão, corrente e comprimento devem ser valores positivos.")
            }
        }
    }
}

/// 계산을 중단시키는 입력 오류. 모두 사용자 재입력으로 복구 가능하다.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// 필수 필드가 비어 있음
    #[error("O campo '{0}' não pode estar vazio.")]
    EmptyField(Field),
    /// 숫자로 해석할 수 없는 값
    #[error("Por favor, insira apenas números válidos nos campos.")]
    Format,
    /// 양수/비음수 조건 위반
    #[error("{0}")]
    Logic(LogicRule),
}

impl CalcError {
    /// 오류 대화상자 제목.
    pub fn title(&self) -> &'static str {
        match self {
            CalcError::EmptyField(_) => "Erro de Entrada",
            CalcError::Format => "Erro de Formato",
            CalcError::Logic(_) => "Erro de Lógica",
        }
    }
}

/// 화면에서 넘어온 검증 전 입력.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawInput {
    pub voltage: String,
    pub current: String,
    pub length: String,
    pub cross_section: String,
    pub material: Material,
    pub installation: InstallationType,
    #[serde(default)]
    pub length_unit: LengthUnit,
    #[serde(default)]
    pub section_unit: AreaUnit,
}

impl RawInput {
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Voltage => &self.voltage,
            Field::Current => &self.current,
            Field::Length => &self.length,
            Field::CrossSection => &self.cross_section,
        }
    }
}

/// 검증을 통과한 입력. 길이는 m, 단면적은 mm²로 환산된 상태다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidatedInput {
    pub cable: CableSpec,
    pub electrical: ElectricalInput,
}

/// 허용치 판정.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Compliance {
    Compliant,
    NonCompliant,
}

impl Compliance {
    pub fn from_percent(drop_percent: f64) -> Self {
        if drop_percent <= DROP_LIMIT_PERCENT {
            Compliance::Compliant
        } else {
            Compliance::NonCompliant
        }
    }

    pub fn is_compliant(&self) -> bool {
        matches!(self, Compliance::Compliant)
    }
}

/// 계산 결과.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// 루프 저항 [Ω]
    pub resistance_ohm: f64,
    /// 전압강하 [V]
    pub drop_volts: f64,
    /// 전압강하율 [%]
    pub drop_percent: f64,
    pub compliance: Compliance,
}

/// 소수점 쉼표를 허용하여 실수로 변환한다. 무한대/NaN은 거부한다.
pub fn parse_decimal(text: &str) -> Option<f64> {
    text.trim()
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// 빈 값 → 숫자 형식 → 범위 순으로 검사하고 내부 단위로 환산한다.
///
/// 공백만 있는 필드도 빈 값(`EmptyField`)으로 본다. 형식 오류(`Format`)로 보내지 않는다.
pub fn validate(raw: &RawInput) -> Result<ValidatedInput, CalcError> {
    if let Some(field) = Field::ORDER
        .into_iter()
        .find(|f| raw.field(*f).trim().is_empty())
    {
        return Err(CalcError::EmptyField(field));
    }

    let mut values = [0.0_f64; 4];
    for (slot, field) in values.iter_mut().zip(Field::ORDER) {
        *slot = parse_decimal(raw.field(field)).ok_or_else(|| {
            warn!(field = field.label(), value = raw.field(field), "not a number");
            CalcError::Format
        })?;
    }
    let [voltage, current, length, section] = values;

    if section <= 0.0 {
        return Err(CalcError::Logic(LogicRule::NonPositiveCrossSection));
    }
    if voltage <= 0.0 || current < 0.0 || length <= 0.0 {
        return Err(CalcError::Logic(LogicRule::NonPositiveElectrical));
    }

    Ok(ValidatedInput {
        cable: CableSpec {
            material: raw.material,
            cross_section_mm2: to_square_millimeter(section, raw.section_unit),
            length_m: to_meter(length, raw.length_unit),
            installation: raw.installation,
        },
        electrical: ElectricalInput {
            voltage_v: voltage,
            current_a: current,
        },
    })
}

/// 검증된 입력으로 저항, 전압강하, 판정을 계산한다.
pub fn compute(cable: &CableSpec, electrical: &ElectricalInput) -> CalculationResult {
    let resistance = calculate_resistance(cable.material, cable.cross_section_mm2, cable.length_m);
    let drop = calculate_voltage_drop(
        cable.installation,
        electrical.voltage_v,
        electrical.current_a,
        resistance,
    );
    CalculationResult {
        resistance_ohm: resistance,
        drop_volts: drop.volts,
        drop_percent: drop.percent,
        compliance: Compliance::from_percent(drop.percent),
    }
}

/// 필드 문자열에서 최종 결과까지 한 번에 처리한다.
pub fn calculate(raw: &RawInput) -> Result<CalculationResult, CalcError> {
    let input = validate(raw).inspect_err(|e| warn!(error = %e, "input rejected"))?;
    let result = compute(&input.cable, &input.electrical);
    debug!(?input, ?result, "voltage drop calculated");
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal_comma_is_accepted() {
        assert_eq!(parse_decimal("2,5"), Some(2.5));
        assert_eq!(parse_decimal(" 220 "), Some(220.0));
        assert_eq!(parse_decimal("1,5e1"), Some(15.0));
    }

    #[test]
    fn garbage_and_non_finite_are_rejected() {
        assert_eq!(parse_decimal("abc"), None);
        assert_eq!(parse_decimal("1,2,3"), None);
        assert_eq!(parse_decimal("inf"), None);
        assert_eq!(parse_decimal("NaN"), None);
    }

    #[test]
    fn limit_is_inclusive() {
        assert_eq!(Compliance::from_percent(4.0), Compliance::Compliant);
        assert_eq!(Compliance::from_percent(4.000_001), Compliance::NonCompliant);
    }

    #[test]
    fn error_titles_match_kind() {
        assert_eq!(CalcError::EmptyField(Field::Length).title(), "Erro de Entrada");
        assert_eq!(CalcError::Format.title(), "Erro de Formato");
        assert_eq!(
            CalcError::Logic(LogicRule::NonPositiveElectrical).title(),
            "Erro de Lógica"
        );
    }
}
