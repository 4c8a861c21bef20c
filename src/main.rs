use std::path::PathBuf;

use clap::Parser;
use household_energy_calculator::{
    app::{self, AppContext, Variant},
    config,
    i18n::keys,
    logging,
};

/// 가정용 전력 소비 계산기 (CLI)
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// 언어 코드 (auto/ko/en)
    #[arg(short = 'L', long, default_value = "auto")]
    lang: String,
    /// 설정 파일 경로
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    /// 가구 입력 TOML 파일. 지정하면 대화형 메뉴 없이 한 번 계산한다.
    #[arg(long)]
    input: Option<PathBuf>,
    /// 계산 방식
    #[arg(long, value_enum, default_value_t = Variant::Weekly)]
    variant: Variant,
    /// 예측 변동 난수 시드
    #[arg(long)]
    seed: Option<u64>,
    /// 보고서 저장 경로 (--input과 함께 사용)
    #[arg(long, requires = "input")]
    report: Option<PathBuf>,
    /// tracing 필터 (예: debug, household_energy_calculator=trace)
    #[arg(long)]
    log: Option<String>,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    let cfg = match config::load_or_default(&cli.config) {
        Ok(cfg) => cfg,
        Err(err) => {
            eprintln!("Error: {err}");
            return std::process::ExitCode::FAILURE;
        }
    };
    logging::init(cli.log.as_deref().unwrap_or(&cfg.log_filter));

    let mut ctx = AppContext::new(cfg, cli.config.clone(), &cli.lang);
    ctx.seed_override = cli.seed;
    let result = match &cli.input {
        Some(input) => app::run_batch(&ctx, input, cli.variant, cli.report.as_deref()),
        None => app::run(&mut ctx),
    };
    if let Err(err) = result {
        eprintln!("{}: {err}", ctx.tr.t(keys::ERROR_PREFIX));
        return std::process::ExitCode::FAILURE;
    }
    std::process::ExitCode::SUCCESS
}
