use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

use crate::cable::{InstallationType, Material};
use crate::units::{AreaUnit, LengthUnit};

/// 기본 설정 파일 경로(작업 디렉터리 기준).
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 애플리케이션 설정을 표현한다. 누락된 항목은 기본값으로 채운다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 입력 폼의 초기 재질 선택
    pub default_material: Material,
    /// 입력 폼의 초기 설치 방식 선택
    pub default_installation: InstallationType,
    pub default_length_unit: LengthUnit,
    pub default_section_unit: AreaUnit,
    /// GUI 창 불투명도 (0.3 ~ 1.0)
    pub window_alpha: f32,
    /// tracing 필터 수준. RUST_LOG가 있으면 그쪽이 우선한다.
    pub log_level: String,
    #[serde(skip)]
    path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_material: Material::Copper,
            default_installation: InstallationType::SinglePhase,
            default_length_unit: LengthUnit::Meter,
            default_section_unit: AreaUnit::SquareMillimeter,
            window_alpha: 1.0,
            log_level: "info".into(),
            path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("설정 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 지정 경로의 설정을 로드한다. 파일이 없으면 기본값으로 만들어 저장한다.
pub fn load_or_default_from(path: &Path) -> Result<Config, ConfigError> {
    let mut cfg = if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        info!(path = %path.display(), "config loaded");
        cfg
    } else {
        let cfg = Config::default();
        save_config(&cfg, path)?;
        info!(path = %path.display(), "default config created");
        cfg
    };
    cfg.path = path.to_path_buf();
    cfg.window_alpha = cfg.window_alpha.clamp(0.3, 1.0);
    Ok(cfg)
}

fn save_config(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write(path, content)?;
    Ok(())
}

impl Config {
    /// 설정을 로드한 파일에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        save_config(self, &self.path)?;
        info!(path = %self.path.display(), "config saved");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
