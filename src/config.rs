use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::diagnosis::Mode;
use crate::refrigerant::GasId;
use crate::superheat::SystemType;
use crate::units::{PressureUnit, TemperatureUnit};

/// 기본 설정 파일 이름.
pub const CONFIG_FILE: &str = "config.toml";

/// 입력 필드 기본 단위.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultUnits {
    pub pressure: PressureUnit,
    pub temperature: TemperatureUnit,
}

impl Default for DefaultUnits {
    fn default() -> Self {
        Self {
            pressure: PressureUnit::Psi,
            temperature: TemperatureUnit::Celsius,
        }
    }
}

/// 애플리케이션 설정을 표현한다. 마지막으로 선택한 시스템 종류/모드/냉매를 기억한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub system_type: SystemType,
    pub mode: Mode,
    pub gas: GasId,
    /// 언어 코드(auto/pt-br/en/ko)
    pub language: String,
    pub language_pack_dir: Option<String>,
    /// 내장 차트 대신 사용할 P/T 차트 TOML 경로
    pub chart_path: Option<PathBuf>,
    pub units: DefaultUnits,
    #[serde(skip)]
    path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            system_type: SystemType::Conventional,
            mode: Mode::Auto,
            gas: GasId::R410A,
            language: "auto".to_string(),
            language_pack_dir: None,
            chart_path: None,
            units: DefaultUnits::default(),
            path: None,
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 역직렬화 오류
    Serde(toml::de::Error),
    /// TOML 직렬화 오류
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "파일 입출력 오류: {e}"),
            ConfigError::Serde(e) => write!(f, "설정 파싱 오류: {e}"),
            ConfigError::Serialize(e) => write!(f, "설정 직렬화 오류: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Serde(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Serialize(value)
    }
}

/// 지정한 경로의 설정을 로드하거나 없으면 기본 설정을 그 경로에 생성한다.
pub fn load_or_default_from(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let mut cfg = if path.exists() {
        let content = fs::read_to_string(path)?;
        toml::from_str::<Config>(&content)?
    } else {
        log::info!("설정 파일이 없어 기본값으로 생성: {}", path.display());
        let cfg = Config::default();
        save_config(&cfg, path)?;
        cfg
    };
    cfg.path = Some(path.to_path_buf());
    Ok(cfg)
}

fn save_config(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write(path, content)?;
    Ok(())
}

impl Config {
    /// 로드했던 경로(없으면 config.toml)에 설정을 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = self.path.as_deref().unwrap_or(Path::new(CONFIG_FILE));
        save_config(self, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_default_file_when_missing() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        let cfg = load_or_default_from(&path).expect("load");
        assert_eq!(cfg.system_type, SystemType::Conventional);
        assert!(path.exists());
    }

    #[test]
    fn remembers_selected_system_type() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        let mut cfg = load_or_default_from(&path).expect("load");
        cfg.system_type = SystemType::Inverter;
        cfg.mode = Mode::Manual;
        cfg.gas = GasId::R32;
        cfg.save().expect("save");

        let reloaded = load_or_default_from(&path).expect("reload");
        assert_eq!(reloaded, cfg);
    }

    #[test]
    fn partial_file_uses_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "system_type = \"Inverter\"\n[units]\npressure = \"Bar\"\n")
            .expect("write");
        let cfg = load_or_default_from(&path).expect("load");
        assert_eq!(cfg.system_type, SystemType::Inverter);
        assert_eq!(cfg.mode, Mode::Auto);
        assert_eq!(cfg.units.pressure, PressureUnit::Bar);
        assert_eq!(cfg.units.temperature, TemperatureUnit::Celsius);
    }

    #[test]
    fn malformed_file_is_reported() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "system_type = \"Split\"\n").expect("write");
        assert!(matches!(load_or_default_from(&path), Err(ConfigError::Serde(_))));
    }
}
