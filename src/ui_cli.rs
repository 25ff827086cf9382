use colored::Colorize;
use std::io::{self, Write};
use tracing::warn;

use crate::app::AppError;
use crate::cable::{InstallationType, Material};
use crate::calculator::RawInput;
use crate::config::Config;
use crate::report::{self, Indicator, ResultRenderer};
use crate::units::{AreaUnit, LengthUnit};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Calculate,
    Settings,
    Exit,
}

/// 결과를 터미널에 출력한다. 판정 문구는 녹색/적색으로 표시한다.
pub struct TerminalRenderer<W: Write> {
    out: W,
    color: bool,
}

impl TerminalRenderer<io::Stdout> {
    pub fn stdout() -> Self {
        Self {
            out: io::stdout(),
            color: true,
        }
    }
}

impl<W: Write> TerminalRenderer<W> {
    /// 색상 없이 임의의 출력 대상에 쓴다(파이프, 테스트용).
    pub fn plain(out: W) -> Self {
        Self { out, color: false }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ResultRenderer for TerminalRenderer<W> {
    fn show_result(&mut self, text: &str, indicator: Indicator) {
        let body = if self.color {
            match indicator {
                Indicator::Affirmative => text.green().to_string(),
                Indicator::Alert => text.red().bold().to_string(),
            }
        } else {
            text.to_string()
        };
        if let Err(e) = writeln!(self.out, "\n{body}") {
            warn!(error = %e, "failed to write result");
        }
    }

    fn show_error(&mut self, title: &str, message: &str) {
        let line = if self.color {
            format!("{} {message}", format!("[{title}]").red().bold())
        } else {
            format!("[{title}] {message}")
        };
        if let Err(e) = writeln!(self.out, "\n{line}") {
            warn!(error = %e, "failed to write error message");
        }
    }
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu() -> Result<MenuChoice, AppError> {
    println!("\n=== Calculadora de Queda de Tensão ===");
    println!("1) Calcular");
    println!("2) Configurações");
    println!("0) Sair");
    loop {
        let sel = read_line("Opção: ")?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Calculate),
            "2" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("Opção inválida. Tente novamente."),
        }
    }
}

/// 입력 폼을 순서대로 묻고 계산 결과를 출력한다.
/// 숫자 검증은 계산 모듈에 맡기므로 여기서는 문자열 그대로 받는다.
pub fn handle_calculation<W: Write>(
    cfg: &Config,
    renderer: &mut TerminalRenderer<W>,
) -> Result<(), AppError> {
    println!("\n-- Queda de Tensão (NBR 5410) --");
    println!("Dica: aceita vírgula decimal (ex: 2,5).");
    let voltage = read_line("Tensão Nominal (V): ")?;
    let current = read_line("Corrente da Carga (A): ")?;
    let length = read_line(&format!(
        "Comprimento do Cabo ({}): ",
        cfg.default_length_unit.symbol()
    ))?;
    let material = select(
        "Material do Cabo",
        &Material::ALL,
        cfg.default_material,
        Material::label,
    )?;
    let cross_section = read_line(&format!(
        "Seção do Cabo ({}): ",
        cfg.default_section_unit.symbol()
    ))?;
    let installation = select(
        "Tipo de Instalação",
        &InstallationType::ALL,
        cfg.default_installation,
        InstallationType::label,
    )?;

    let raw = RawInput {
        voltage: voltage.trim().to_string(),
        current: current.trim().to_string(),
        length: length.trim().to_string(),
        cross_section: cross_section.trim().to_string(),
        material,
        installation,
        length_unit: cfg.default_length_unit,
        section_unit: cfg.default_section_unit,
    };
    report::present(&raw, renderer);
    Ok(())
}

/// 설정 메뉴를 처리한다. 폼의 초기 선택값과 입력 단위를 바꾼다.
pub fn handle_settings(cfg: &mut Config) -> Result<(), AppError> {
    println!("\n-- Configurações --");
    cfg.default_material = select(
        "Material padrão",
        &Material::ALL,
        cfg.default_material,
        Material::label,
    )?;
    cfg.default_installation = select(
        "Instalação padrão",
        &InstallationType::ALL,
        cfg.default_installation,
        InstallationType::label,
    )?;
    cfg.default_length_unit = select(
        "Unidade de comprimento",
        &LengthUnit::ALL,
        cfg.default_length_unit,
        LengthUnit::symbol,
    )?;
    cfg.default_section_unit = select(
        "Unidade de seção",
        &AreaUnit::ALL,
        cfg.default_section_unit,
        AreaUnit::symbol,
    )?;
    println!("Configurações salvas.");
    Ok(())
}

/// 번호로 선택지를 고른다. 엔터만 누르면 현재 값을 유지한다.
fn select<T: Copy + PartialEq>(
    title: &str,
    options: &[T],
    current: T,
    label: fn(&T) -> &'static str,
) -> Result<T, AppError> {
    let listing: Vec<String> = options
        .iter()
        .enumerate()
        .map(|(i, opt)| {
            let mark = if *opt == current { "*" } else { "" };
            format!("{}={}{mark}", i + 1, label(opt))
        })
        .collect();
    loop {
        let sel = read_line(&format!("{title} [{}]: ", listing.join(" ")))?;
        let sel = sel.trim();
        if sel.is_empty() {
            return Ok(current);
        }
        match sel.parse::<usize>() {
            Ok(n) if (1..=options.len()).contains(&n) => return Ok(options[n - 1]),
            _ => println!("Opção inválida. Tente novamente."),
        }
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_renderer_writes_result_text() {
        let mut r = TerminalRenderer::plain(Vec::new());
        r.show_result("Queda de tensão: 2.75 V", Indicator::Affirmative);
        let out = String::from_utf8(r.into_inner()).unwrap();
        assert_eq!(out, "\nQueda de tensão: 2.75 V\n");
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_failure_does_not_panic() {
        let mut r = TerminalRenderer::plain(BrokenPipe);
        r.show_result("Queda de tensão: 2.75 V", Indicator::Affirmative);
        r.show_error("Erro de Formato", "mensagem");
    }

    #[test]
    fn plain_renderer_prefixes_error_title() {
        let mut r = TerminalRenderer::plain(Vec::new());
        r.show_error("Erro de Formato", "mensagem");
        let out = String::from_utf8(r.into_inner()).unwrap();
        assert_eq!(out, "\n[Erro de Formato] mensagem\n");
    }
}
