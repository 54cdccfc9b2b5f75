use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use superheat_toolbox::app::{self, AppError};
use superheat_toolbox::config::{self, Config};
use superheat_toolbox::diagnosis::{FormInput, Mode, Session};
use superheat_toolbox::i18n::{keys, Translator};
use superheat_toolbox::pt_chart::PtChart;
use superheat_toolbox::refrigerant::GasId;
use superheat_toolbox::superheat::SystemType;
use superheat_toolbox::ui_cli;
use superheat_toolbox::units::{PressureUnit, TemperatureUnit};

/// 냉동·공조 과열도 계산기
#[derive(Parser)]
#[command(name = "superheat_toolbox", version, about, long_about = None)]
struct Cli {
    /// 표시 언어 (auto, pt-br, en, ko)
    #[arg(short = 'L', long, global = true, default_value = "auto")]
    lang: String,

    /// 설정 파일 경로
    #[arg(long, global = true, default_value = config::CONFIG_FILE)]
    config: PathBuf,

    /// 로그 상세도 (-v: info, -vv: debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// 한 번 계산하고 결과를 출력한다
    Calc {
        /// 냉매 (R410A, R32, R22)
        #[arg(short, long)]
        gas: Option<String>,
        /// 흡입 온도
        #[arg(short, long)]
        suction: String,
        /// 흡입 압력 (자동 모드)
        #[arg(short, long)]
        pressure: Option<String>,
        /// 포화 온도 직접 입력 (수동 모드)
        #[arg(short = 't', long)]
        saturation: Option<String>,
        /// 시스템 종류 (conventional, inverter)
        #[arg(long)]
        system: Option<String>,
        /// 압력 단위 (psi, bar, kpa)
        #[arg(long)]
        pressure_unit: Option<String>,
        /// 온도 단위 (c, f, k)
        #[arg(long)]
        temp_unit: Option<String>,
    },
    /// 냉매의 10~200 psi 포화 온도표를 출력한다
    Table {
        /// 냉매 (R410A, R32, R22)
        #[arg(short, long)]
        gas: Option<String>,
    },
    /// 대화형 메뉴 (기본)
    Interactive,
}

/// 프로그램의 엔트리 포인트. 설정과 차트를 로드한 뒤 명령을 실행한다.
fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    match try_run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("오류: {err}");
            ExitCode::FAILURE
        }
    }
}

fn try_run(cli: Cli) -> Result<ExitCode, AppError> {
    let mut cfg = config::load_or_default_from(&cli.config)?;
    let mut tr = app::translator_for(&cfg, &cli.lang);
    let chart = app::load_chart(&cfg)?;

    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Interactive => {
            app::run(&mut cfg, &chart, &mut tr)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Table { gas } => {
            let gas = parse_arg::<GasId>(gas.as_deref())?.unwrap_or(cfg.gas);
            ui_cli::handle_table(&tr, &chart, gas);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Calc {
            gas,
            suction,
            pressure,
            saturation,
            system,
            pressure_unit,
            temp_unit,
        } => {
            let gas = parse_arg::<GasId>(gas.as_deref())?.unwrap_or(cfg.gas);
            let system = parse_arg::<SystemType>(system.as_deref())?.unwrap_or(cfg.system_type);
            let p_unit =
                parse_arg::<PressureUnit>(pressure_unit.as_deref())?.unwrap_or(cfg.units.pressure);
            let t_unit =
                parse_arg::<TemperatureUnit>(temp_unit.as_deref())?.unwrap_or(cfg.units.temperature);
            let mode = if saturation.is_some() { Mode::Manual } else { Mode::Auto };

            let mut form = FormInput::new(gas).suction(suction).units(p_unit, t_unit);
            form.pressure = pressure.unwrap_or_default();
            form.saturation = saturation.unwrap_or_default();

            let mut session = Session::new(system, mode);
            report(&tr, &mut session, &chart, &form, &mut cfg)
        }
    }
}

fn report(
    tr: &Translator,
    session: &mut Session,
    chart: &PtChart,
    form: &FormInput,
    cfg: &mut Config,
) -> Result<ExitCode, AppError> {
    match session.calculate(chart, form) {
        Ok(diagnosis) => {
            ui_cli::print_diagnosis(tr, &diagnosis);
            cfg.system_type = session.system_type;
            cfg.gas = form.gas;
            cfg.save()?;
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            log::debug!("계산 중단: {err}");
            eprintln!("{}: {}", tr.t(keys::ERROR_PREFIX), tr.t(err.message_key()));
            Ok(ExitCode::from(2))
        }
    }
}

fn parse_arg<T>(value: Option<&str>) -> Result<Option<T>, AppError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value
        .map(|v| v.parse::<T>().map_err(|e| AppError::InvalidArgument(e.to_string())))
        .transpose()
}
