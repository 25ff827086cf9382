use serde::{Deserialize, Serialize};

use super::InstallationType;

/// √3 근사값. 선간 전압 환산에 사용한다.
pub const SQRT_3_APPROX: f64 = 1.732;

/// 전압강하 결과.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VoltageDrop {
    /// 강하 전압 [V]
    pub volts: f64,
    /// 공칭 전압 대비 강하율 [%]
    pub percent: f64,
}

/// 설치 방식에 따라 전압강하를 계산한다.
///
/// `resistance_ohm`은 왕복 루프 저항이다. 3상은 도체 1가닥 저항(루프/2)에 √3을 곱한다.
/// `voltage_v > 0`은 호출 측에서 보장해야 한다.
pub fn calculate_voltage_drop(
    installation: InstallationType,
    voltage_v: f64,
    current_a: f64,
    resistance_ohm: f64,
) -> VoltageDrop {
    let volts = match installation {
        InstallationType::SinglePhase => current_a * resistance_ohm,
        InstallationType::ThreePhase => (current_a * resistance_ohm / 2.0) * SQRT_3_APPROX,
    };
    VoltageDrop {
        volts,
        percent: (volts / voltage_v) * 100.0,
    }
}
