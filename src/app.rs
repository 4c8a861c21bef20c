use std::fs;
use std::path::{Path, PathBuf};

use rand_chacha::ChaCha8Rng;

use crate::config::{Config, ConfigError};
use crate::consumption::WeeklyUsage;
use crate::forecast::UniformVariation;
use crate::form::{FormInput, Household, IncompleteInputError};
use crate::i18n::{self, keys, Translator};
use crate::report::{self, DailyReport, WeeklyReport};
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(ConfigError),
    /// 필수 입력 누락
    Input(IncompleteInputError),
    /// 가구 입력 파일 파싱 오류
    HouseholdFile(toml::de::Error),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "I/O error: {e}"),
            AppError::Config(e) => write!(f, "{e}"),
            AppError::Input(e) => write!(f, "{e}"),
            AppError::HouseholdFile(e) => write!(f, "household file parse error: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<IncompleteInputError> for AppError {
    fn from(value: IncompleteInputError) -> Self {
        AppError::Input(value)
    }
}

impl From<toml::de::Error> for AppError {
    fn from(value: toml::de::Error) -> Self {
        AppError::HouseholdFile(value)
    }
}

/// 계산 방식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Variant {
    /// 면적·보유 가전만으로 하루 사용량 추정
    Simple,
    /// 요일별 사용 패턴 + 다음 주 예측
    Weekly,
}

/// 실행 중 공유하는 설정과 번역기.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub config: Config,
    pub config_path: PathBuf,
    pub tr: Translator,
    /// 명령줄 시드. 설정 파일 시드보다 우선한다.
    pub seed_override: Option<u64>,
}

impl AppContext {
    pub fn new(config: Config, config_path: PathBuf, lang_arg: &str) -> Self {
        let tr = translator_for(&config, lang_arg);
        Self {
            config,
            config_path,
            tr,
            seed_override: None,
        }
    }

    /// 설정 언어가 바뀌었을 때 번역기를 다시 만든다.
    pub fn reload_translator(&mut self) {
        self.tr = translator_for(&self.config, "auto");
    }

    pub fn variation(&self) -> UniformVariation<ChaCha8Rng> {
        UniformVariation::from_seed(self.seed_override.or(self.config.forecast_seed))
    }

    /// 검증된 가구 입력으로 보고서 텍스트를 만든다.
    pub fn render(&self, household: &Household, variant: Variant) -> String {
        let unit = self.config.energy_unit;
        match variant {
            Variant::Simple => report::render_daily(&self.tr, &DailyReport::build(household), unit),
            Variant::Weekly => {
                let usage = household
                    .weekly_usage
                    .unwrap_or_else(|| WeeklyUsage::from_defaults(&self.config.default_usage));
                let mut variation = self.variation();
                let weekly = WeeklyReport::build(household, &usage, &mut variation);
                report::render_weekly(&self.tr, &weekly, unit)
            }
        }
    }
}

/// 명령줄 언어 → 설정 언어 → 시스템 언어 순으로 번역기를 만든다.
pub fn translator_for(config: &Config, lang_arg: &str) -> Translator {
    let code = i18n::resolve_language(lang_arg, Some(config.language.as_str()));
    Translator::new_with_pack(&code, config.language_pack_dir.as_deref())
}

/// TOML 가구 입력 파일을 읽는다.
pub fn load_household(path: &Path) -> Result<FormInput, AppError> {
    let content = fs::read_to_string(path)?;
    let form: FormInput = toml::from_str(&content)?;
    tracing::info!(path = %path.display(), "household file loaded");
    Ok(form)
}

/// 보고서 텍스트를 파일로 저장한다.
pub fn save_report(path: &Path, text: &str) -> Result<(), AppError> {
    fs::write(path, text)?;
    tracing::info!(path = %path.display(), "report saved");
    Ok(())
}

/// 입력 파일 하나를 계산해 출력하고, 경로가 주어지면 보고서를 저장한다.
pub fn run_batch(
    ctx: &AppContext,
    input: &Path,
    variant: Variant,
    report_path: Option<&Path>,
) -> Result<(), AppError> {
    let form = load_household(input)?;
    let household = form.validate()?;
    let text = ctx.render(&household, variant);
    println!("{text}");
    if let Some(path) = report_path {
        save_report(path, &text)?;
        println!(
            "{}",
            ctx.tr
                .tf(keys::REPORT_SAVED, &[("path", path.display().to_string())])
        );
    }
    Ok(())
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
pub fn run(ctx: &mut AppContext) -> Result<(), AppError> {
    loop {
        match ui_cli::main_menu(&ctx.tr)? {
            MenuChoice::Simple => ui_cli::handle_household(ctx, Variant::Simple)?,
            MenuChoice::Weekly => ui_cli::handle_household(ctx, Variant::Weekly)?,
            MenuChoice::Settings => {
                ui_cli::handle_settings(ctx)?;
                ctx.config.save(&ctx.config_path)?;
                println!("{}", ctx.tr.t(keys::SETTINGS_SAVED));
            }
            MenuChoice::Exit => {
                ctx.config.save(&ctx.config_path)?;
                println!("{}", ctx.tr.t(keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}
