//! 결과 문자열 포맷과 렌더러 전달 테스트.
use voltage_drop_calculator::{
    calculator::{CalculationResult, Compliance, RawInput},
    report::{format_result, present, Indicator, ResultRenderer},
};

#[derive(Default)]
struct Recorder {
    results: Vec<(String, Indicator)>,
    errors: Vec<(String, String)>,
}

impl ResultRenderer for Recorder {
    fn show_result(&mut self, text: &str, indicator: Indicator) {
        self.results.push((text.to_string(), indicator));
    }

    fn show_error(&mut self, title: &str, message: &str) {
        self.errors.push((title.to_string(), message.to_string()));
    }
}

fn raw(voltage: &str, current: &str, length: &str, section: &str) -> RawInput {
    RawInput {
        voltage: voltage.into(),
        current: current.into(),
        length: length.into(),
        cross_section: section.into(),
        ..Default::default()
    }
}

#[test]
fn compliant_text_has_two_decimals() {
    let text = format_result(&CalculationResult {
        resistance_ohm: 0.2752,
        drop_volts: 2.752,
        drop_percent: 1.250909,
        compliance: Compliance::Compliant,
    });
    assert_eq!(
        text,
        "Queda de tensão: 2.75 V\nQueda em %: 1.25%\n\nQueda dentro do limite NBR 5410 (≤ 4%)."
    );
}

#[test]
fn non_compliant_text_warns() {
    let text = format_result(&CalculationResult {
        resistance_ohm: 2.752,
        drop_volts: 27.52,
        drop_percent: 12.509,
        compliance: Compliance::NonCompliant,
    });
    assert!(text.ends_with("Atenção: Queda acima do limite da NBR 5410 (> 4%)."));
    assert!(text.contains("Queda em %: 12.51%"));
}

#[test]
fn present_dispatches_result_with_indicator() {
    let mut rec = Recorder::default();
    let res = present(&raw("220", "10", "200", "2,5"), &mut rec);
    assert!(res.is_some());
    assert!(rec.errors.is_empty());
    assert_eq!(rec.results.len(), 1);
    assert_eq!(rec.results[0].1, Indicator::Alert);
}

#[test]
fn present_swallows_errors_without_result() {
    let mut rec = Recorder::default();
    let res = present(&raw("220", "abc", "20", "2,5"), &mut rec);
    assert!(res.is_none());
    assert!(rec.results.is_empty());
    assert_eq!(
        rec.errors,
        vec![(
            "Erro de Formato".to_string(),
            "Por favor, insira apenas números válidos nos campos.".to_string()
        )]
    );
}

#[test]
fn logic_error_names_rule() {
    let mut rec = Recorder::default();
    present(&raw("220", "10", "20", "0"), &mut rec);
    assert_eq!(rec.errors[0].0, "Erro de Lógica");
    assert_eq!(rec.errors[0].1, "A seção do cabo deve ser um valor positivo.");
}
