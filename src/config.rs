use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::consumption::UsageDefaults;
use crate::units::EnergyUnit;

/// 설정 파일 기본 경로.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 애플리케이션 설정을 표현한다. 파일에 없는 키는 기본값을 쓴다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 언어 코드 (auto/ko/en)
    pub language: String,
    /// 사용자 언어팩 디렉터리
    pub language_pack_dir: Option<String>,
    /// 결과 표시 단위
    pub energy_unit: EnergyUnit,
    /// 요일별 입력 기본값
    pub default_usage: UsageDefaults,
    /// 예측 변동 난수 시드. 없으면 매번 달라진다.
    pub forecast_seed: Option<u64>,
    /// tracing 필터 (RUST_LOG가 있으면 그쪽이 우선)
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            language_pack_dir: None,
            energy_unit: EnergyUnit::KilowattHour,
            default_usage: UsageDefaults::default(),
            forecast_seed: None,
            log_filter: "warn".to_string(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 역직렬화 오류
    Parse(toml::de::Error),
    /// TOML 직렬화 오류
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config file I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
            ConfigError::Serialize(e) => write!(f, "config serialize error: {e}"),
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
        ConfigError::Parse(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Serialize(value)
    }
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg = parse(&content)?;
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(cfg)
    } else {
        let cfg = Config::default();
        save_config(&cfg, path)?;
        tracing::info!(path = %path.display(), "default config written");
        Ok(cfg)
    }
}

/// TOML 문자열에서 설정을 읽는다.
pub fn parse(content: &str) -> Result<Config, ConfigError> {
    Ok(toml::from_str(content)?)
}

fn save_config(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write(path, content)?;
    Ok(())
}

impl Config {
    /// 설정을 파일에 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        save_config(self, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let cfg = parse("language = \"ko\"\n[default_usage]\nac_hours = 4\n").expect("parse");
        assert_eq!(cfg.language, "ko");
        assert_eq!(cfg.default_usage.ac_hours, 4);
        assert_eq!(cfg.default_usage.fan_hours, 16);
        assert_eq!(cfg.energy_unit, EnergyUnit::KilowattHour);
        assert_eq!(cfg.forecast_seed, None);
    }

    #[test]
    fn default_config_round_trips() {
        let text = toml::to_string_pretty(&Config::default()).expect("serialize");
        assert_eq!(parse(&text).expect("parse"), Config::default());
    }

    #[test]
    fn bad_unit_is_a_parse_error() {
        let err = parse("energy_unit = \"Joule\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
