use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use voltage_drop_calculator::{
    app,
    cable::{InstallationType, Material},
    calculator::{self, CalcError, CalculationResult, RawInput},
    config::{self, DEFAULT_CONFIG_PATH},
    logging, report,
    ui_cli::TerminalRenderer,
    units::{AreaUnit, LengthUnit},
};

/// 케이블 전압강하 계산기 (NBR 5410, 허용 4%)
#[derive(Parser, Debug)]
#[command(name = "voltage_drop_calculator_cli", version, long_about = None)]
struct Cli {
    /// 설정 파일 경로
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// 로그 수준 (error, warn, info, debug, trace). 설정 파일 값보다 우선한다.
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// 메뉴 기반 대화형 모드 (기본값)
    Interactive,
    /// 한 번 계산하고 종료한다. 종료 코드: 0=적합, 2=4% 초과, 1=입력 오류
    Calc(CalcArgs),
}

#[derive(Args, Debug)]
struct CalcArgs {
    /// 공칭 전압 [V]
    #[arg(short, long, allow_hyphen_values = true)]
    voltage: Option<String>,
    /// 부하 전류 [A]
    #[arg(short = 'i', long, allow_hyphen_values = true)]
    current: Option<String>,
    /// 케이블 길이(편도)
    #[arg(short, long, allow_hyphen_values = true)]
    length: Option<String>,
    /// 도체 단면적. 소수점 쉼표 허용 (예: 2,5)
    #[arg(short, long, allow_hyphen_values = true)]
    section: Option<String>,
    /// 도체 재질 (cobre/copper, alumínio/aluminum). 생략 시 설정값
    #[arg(short, long)]
    material: Option<Material>,
    /// 설치 방식 (monofásica/single, trifásica/three). 생략 시 설정값
    #[arg(short = 't', long)]
    installation: Option<InstallationType>,
    /// 길이 단위 (m, km, ft)
    #[arg(long)]
    length_unit: Option<LengthUnit>,
    /// 단면적 단위 (mm2, kcmil)
    #[arg(long)]
    section_unit: Option<AreaUnit>,
    /// 결과를 JSON으로 출력한다
    #[arg(long)]
    json: bool,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() -> ExitCode {
    match try_run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Erro: {err}");
            ExitCode::FAILURE
        }
    }
}

fn try_run() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut cfg = config::load_or_default_from(&cli.config)?;
    logging::init(cli.log_level.as_deref().unwrap_or(&cfg.log_level));

    match cli.command {
        None | Some(Command::Interactive) => {
            app::run(&mut cfg)?;
            Ok(ExitCode::SUCCESS)
        }
        Some(Command::Calc(args)) => Ok(ExitCode::from(run_once(&cfg, args)?)),
    }
}

/// 한 번 계산 모드의 종료 코드.
const EXIT_COMPLIANT: u8 = 0;
const EXIT_INPUT_ERROR: u8 = 1;
const EXIT_OVER_LIMIT: u8 = 2;

fn run_once(cfg: &config::Config, args: CalcArgs) -> Result<u8, serde_json::Error> {
    let raw = raw_input(cfg, &args);
    let outcome = if args.json {
        let outcome = calculator::calculate(&raw);
        println!("{}", serde_json::to_string_pretty(&json_outcome(&outcome)?)?);
        outcome.ok()
    } else {
        report::present(&raw, &mut TerminalRenderer::stdout())
    };
    Ok(exit_status(outcome.as_ref()))
}

/// 생략된 선택값과 단위는 설정 파일의 기본값으로 채운다.
fn raw_input(cfg: &config::Config, args: &CalcArgs) -> RawInput {
    RawInput {
        voltage: args.voltage.clone().unwrap_or_default(),
        current: args.current.clone().unwrap_or_default(),
        length: args.length.clone().unwrap_or_default(),
        cross_section: args.section.clone().unwrap_or_default(),
        material: args.material.unwrap_or(cfg.default_material),
        installation: args.installation.unwrap_or(cfg.default_installation),
        length_unit: args.length_unit.unwrap_or(cfg.default_length_unit),
        section_unit: args.section_unit.unwrap_or(cfg.default_section_unit),
    }
}

/// 성공 시 결과 필드 그대로, 실패 시 `{ "error": 제목, "message": 내용 }`.
fn json_outcome(
    outcome: &Result<CalculationResult, CalcError>,
) -> Result<serde_json::Value, serde_json::Error> {
    match outcome {
        Ok(result) => serde_json::to_value(result),
        Err(err) => Ok(serde_json::json!({ "error": err.title(), "message": err.to_string() })),
    }
}

fn exit_status(outcome: Option<&CalculationResult>) -> u8 {
    match outcome {
        Some(result) if result.compliance.is_compliant() => EXIT_COMPLIANT,
        Some(_) => EXIT_OVER_LIMIT,
        None => EXIT_INPUT_ERROR,
    }
}
