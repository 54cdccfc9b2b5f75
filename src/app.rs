use log::info;

use crate::config::Config;
use crate::diagnosis::Session;
use crate::i18n::{self, Translator};
use crate::pt_chart::{ChartError, PtChart};
use crate::ui_cli::{self, MenuChoice};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(crate::config::ConfigError),
    /// P/T 차트 구성 오류
    Chart(ChartError),
    /// 잘못된 명령행 인수
    InvalidArgument(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "입출력 오류: {e}"),
            AppError::Config(e) => write!(f, "설정 오류: {e}"),
            AppError::Chart(e) => write!(f, "P/T 차트 오류: {e}"),
            AppError::InvalidArgument(msg) => write!(f, "잘못된 인수: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<crate::config::ConfigError> for AppError {
    fn from(value: crate::config::ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<ChartError> for AppError {
    fn from(value: ChartError) -> Self {
        AppError::Chart(value)
    }
}

/// 설정에 지정된 차트 파일이 있으면 그것을, 없으면 내장 차트를 구성한다.
pub fn load_chart(config: &Config) -> Result<PtChart, AppError> {
    let chart = match &config.chart_path {
        Some(path) => PtChart::from_file(path)?,
        None => PtChart::embedded()?,
    };
    Ok(chart)
}

/// 설정의 언어/언어팩으로 번역기를 만든다.
pub fn translator_for(config: &Config, cli_lang: &str) -> Translator {
    let lang = i18n::resolve_language(cli_lang, Some(config.language.as_str()));
    info!("언어: {lang}");
    Translator::new_with_pack(&lang, config.language_pack_dir.as_deref())
}

/// 대화형 CLI 의 메인 루프를 실행한다.
pub fn run(config: &mut Config, chart: &PtChart, tr: &mut Translator) -> Result<(), AppError> {
    let mut session = Session::new(config.system_type, config.mode);
    ui_cli::print_system_summary(tr, session.system_type);
    loop {
        match ui_cli::main_menu(tr, &session, config)? {
            MenuChoice::Calculate => ui_cli::handle_calculate(tr, chart, &mut session, config)?,
            MenuChoice::SystemType => {
                ui_cli::handle_system_type(tr, &mut session)?;
                config.system_type = session.system_type;
                config.save()?;
            }
            MenuChoice::ToggleMode => {
                session.set_mode(session.mode.toggled());
                config.mode = session.mode;
                config.save()?;
            }
            MenuChoice::Gas => {
                ui_cli::handle_gas(tr, config)?;
                config.save()?;
            }
            MenuChoice::Table => ui_cli::handle_table(tr, chart, config.gas),
            MenuChoice::Clear => {
                session.clear();
                println!("{}", tr.t(i18n::keys::RESULT_CLEARED));
                ui_cli::print_system_summary(tr, session.system_type);
            }
            MenuChoice::Settings => {
                ui_cli::handle_settings(tr, config)?;
                config.save()?;
                *tr = translator_for(config, "auto");
            }
            MenuChoice::Exit => {
                config.save()?;
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}
