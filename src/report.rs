//! 계산 결과의 문자열 포맷과 표시 인터페이스.
//!
//! 색상/창 같은 표현은 [`ResultRenderer`] 구현체(GUI, 터미널)가 담당한다.

use crate::calculator::{self, CalculationResult, Compliance, RawInput};

/// 적합/부적합을 나타내는 시각 표시.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indicator {
    /// 적합(녹색)
    Affirmative,
    /// 부적합(적색)
    Alert,
}

impl From<Compliance> for Indicator {
    fn from(value: Compliance) -> Self {
        match value {
            Compliance::Compliant => Indicator::Affirmative,
            Compliance::NonCompliant => Indicator::Alert,
        }
    }
}

/// 판정 문구.
pub fn compliance_statement(compliance: Compliance) -> &'static str {
    match compliance {
        Compliance::Compliant => "Queda dentro do limite NBR 5410 (≤ 4%).",
        Compliance::NonCompliant => "Atenção: Queda acima do limite da NBR 5410 (> 4%).",
    }
}

/// 결과를 사용자 표시용 문자열로 만든다. 수치는 소수 둘째 자리까지.
pub fn format_result(result: &CalculationResult) -> String {
    format!(
        "Queda de tensão: {:.2} V\nQueda em %: {:.2}%\n\n{}",
        result.drop_volts,
        result.drop_percent,
        compliance_statement(result.compliance)
    )
}

/// 결과/오류를 사용자에게 보여주는 화면 측 인터페이스.
pub trait ResultRenderer {
    /// 계산 성공 시 호출된다.
    fn show_result(&mut self, text: &str, indicator: Indicator);
    /// 입력 오류 시 호출된다. 이전 결과는 갱신하지 않는다.
    fn show_error(&mut self, title: &str, message: &str);
}

/// 입력을 계산하고 결과 또는 오류를 렌더러에 전달한다.
///
/// 오류는 여기서 소비되므로 호출 측으로 전파되지 않는다. 성공 시 결과를 돌려준다.
pub fn present<R: ResultRenderer + ?Sized>(
    raw: &RawInput,
    renderer: &mut R,
) -> Option<CalculationResult> {
    match calculator::calculate(raw) {
        Ok(result) => {
            renderer.show_result(&format_result(&result), result.compliance.into());
            Some(result)
        }
        Err(err) => {
            renderer.show_error(err.title(), &err.to_string());
            None
        }
    }
}
