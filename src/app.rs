use thiserror::Error;
use tracing::info;

use crate::config::{Config, ConfigError};
use crate::ui_cli::{self, MenuChoice, TerminalRenderer};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
///
/// 입력값 오류(`CalcError`)는 계산 단계에서 소비되므로 여기에 포함되지 않는다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 표준 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
}

/// 대화형 CLI의 메인 루프를 실행한다.
pub fn run(config: &mut Config) -> Result<(), AppError> {
    let mut renderer = TerminalRenderer::stdout();
    loop {
        match ui_cli::main_menu()? {
            MenuChoice::Calculate => ui_cli::handle_calculation(config, &mut renderer)?,
            MenuChoice::Settings => {
                ui_cli::handle_settings(config)?;
                config.save()?;
            }
            MenuChoice::Exit => {
                config.save()?;
                info!("interactive session finished");
                println!("Encerrando o programa.");
                break;
            }
        }
    }
    Ok(())
}
