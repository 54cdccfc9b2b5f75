use std::io::{self, Write};

use crate::app::AppError;
use crate::config::Config;
use crate::diagnosis::{Diagnosis, FormInput, Mode, Session};
use crate::i18n::{keys, Translator};
use crate::pt_chart::PtChart;
use crate::refrigerant::GasId;
use crate::saturation::pressure_table;
use crate::superheat::SystemType;
use crate::units::{PressureUnit, TemperatureUnit};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Calculate,
    SystemType,
    ToggleMode,
    Gas,
    Table,
    Clear,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator, session: &Session, cfg: &Config) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    let sh = session
        .last_superheat_c()
        .map(|v| format!("{v} °C"))
        .unwrap_or_else(|| tr.t(keys::RESULT_NONE).into_owned());
    println!(
        "{}",
        tr.tf(
            keys::MAIN_MENU_STATE,
            &[
                ("system", tr.t(session.system_type.name_key()).into_owned()),
                ("gas", cfg.gas.to_string()),
                ("mode", tr.t(session.mode.label_key()).into_owned()),
                ("sh", sh),
            ],
        )
    );
    for key in [
        keys::MAIN_MENU_CALCULATE,
        keys::MAIN_MENU_SYSTEM,
        keys::MAIN_MENU_MODE,
        keys::MAIN_MENU_GAS,
        keys::MAIN_MENU_TABLE,
        keys::MAIN_MENU_CLEAR,
        keys::MAIN_MENU_SETTINGS,
        keys::MAIN_MENU_EXIT,
    ] {
        println!("{}", tr.t(key));
    }
    loop {
        let sel = read_line(&tr.t(keys::PROMPT_MENU_SELECT))?;
        match parse_menu_choice(&sel) {
            Some(choice) => return Ok(choice),
            None => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

fn parse_menu_choice(sel: &str) -> Option<MenuChoice> {
    match sel.trim() {
        "1" => Some(MenuChoice::Calculate),
        "2" => Some(MenuChoice::SystemType),
        "3" => Some(MenuChoice::ToggleMode),
        "4" => Some(MenuChoice::Gas),
        "5" => Some(MenuChoice::Table),
        "6" => Some(MenuChoice::Clear),
        "7" => Some(MenuChoice::Settings),
        "0" => Some(MenuChoice::Exit),
        _ => None,
    }
}

/// 입력값을 받아 과열도를 계산하고 결과 또는 안내 문구를 출력한다.
pub fn handle_calculate(
    tr: &Translator,
    chart: &PtChart,
    session: &mut Session,
    cfg: &Config,
) -> Result<(), AppError> {
    let p_unit = [("unit", cfg.units.pressure.symbol().to_string())];
    let t_unit = [("unit", cfg.units.temperature.symbol().to_string())];
    let mut form = FormInput::new(cfg.gas).units(cfg.units.pressure, cfg.units.temperature);
    form.suction = read_line(&tr.tf(keys::PROMPT_SUCTION, &t_unit))?;
    match session.mode {
        Mode::Auto => form.pressure = read_line(&tr.tf(keys::PROMPT_PRESSURE, &p_unit))?,
        Mode::Manual => form.saturation = read_line(&tr.tf(keys::PROMPT_SATURATION, &t_unit))?,
    }
    match session.calculate(chart, &form) {
        Ok(diagnosis) => print_diagnosis(tr, &diagnosis),
        Err(err) => {
            log::debug!("계산 중단: {err}");
            println!("{}: {}", tr.t(keys::ERROR_PREFIX), tr.t(err.message_key()));
        }
    }
    Ok(())
}

/// 시스템 종류 선택 메뉴를 처리한다.
pub fn handle_system_type(tr: &Translator, session: &mut Session) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SYSTEM_OPTIONS));
    let sel = read_line(&tr.t(keys::PROMPT_SELECT))?;
    match sel.trim() {
        "1" => session.set_system_type(SystemType::Conventional),
        "2" => session.set_system_type(SystemType::Inverter),
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            return Ok(());
        }
    }
    print_system_summary(tr, session.system_type);
    Ok(())
}

/// 냉매 선택 메뉴를 처리한다.
pub fn handle_gas(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::GAS_OPTIONS));
    let sel = read_line(&tr.t(keys::PROMPT_SELECT))?;
    let picked = sel
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| GasId::ALL.get(i).copied())
        .or_else(|| sel.parse::<GasId>().ok());
    match picked {
        Some(gas) => cfg.gas = gas,
        None => println!("{}", tr.t(keys::SETTINGS_INVALID)),
    }
    Ok(())
}

/// 선택한 냉매의 10~200 psi 포화 온도표를 출력한다.
pub fn handle_table(tr: &Translator, chart: &PtChart, gas: GasId) {
    println!("\n{gas}");
    println!("{}", tr.t(keys::TABLE_HEADER));
    for (psi, temp_c) in pressure_table(chart, gas) {
        println!("{psi:>3}    {temp_c:>6.1}");
    }
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(&tr.t(keys::PROMPT_SELECT))?;
    match sel.trim() {
        "1" => {
            println!("{}", tr.t(keys::SETTINGS_PRESSURE_UNITS));
            let unit = match read_line(&tr.t(keys::PROMPT_SELECT))?.trim() {
                "1" => Some(PressureUnit::Psi),
                "2" => Some(PressureUnit::Bar),
                "3" => Some(PressureUnit::KiloPascal),
                _ => None,
            };
            match unit {
                Some(u) => cfg.units.pressure = u,
                None => println!("{}", tr.t(keys::SETTINGS_INVALID)),
            }
        }
        "2" => {
            println!("{}", tr.t(keys::SETTINGS_TEMPERATURE_UNITS));
            let unit = match read_line(&tr.t(keys::PROMPT_SELECT))?.trim() {
                "1" => Some(TemperatureUnit::Celsius),
                "2" => Some(TemperatureUnit::Fahrenheit),
                "3" => Some(TemperatureUnit::Kelvin),
                _ => None,
            };
            match unit {
                Some(u) => cfg.units.temperature = u,
                None => println!("{}", tr.t(keys::SETTINGS_INVALID)),
            }
        }
        "3" => {
            let lang = read_line(&tr.t(keys::SETTINGS_LANGUAGE_PROMPT))?;
            let lang = lang.trim();
            if lang.is_empty() {
                println!("{}", tr.t(keys::SETTINGS_INVALID));
            } else {
                cfg.language = lang.to_string();
            }
        }
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            return Ok(());
        }
    }
    println!("{}", tr.t(keys::SETTINGS_SAVED));
    Ok(())
}

/// 시스템 종류 안내, 기대 범위, 기본 조언을 출력한다.
pub fn print_system_summary(tr: &Translator, system: SystemType) {
    let range = system.range();
    println!("{}", tr.t(system.hint_key()));
    println!(
        "{}",
        tr.tf(
            system.range_key(),
            &[("min", range.min_c.to_string()), ("max", range.max_c.to_string())],
        )
    );
    println!("{}", tr.t(system.guidance_key()));
}

/// 계산 결과를 출력한다.
pub fn print_diagnosis(tr: &Translator, diagnosis: &Diagnosis) {
    let c = &diagnosis.classification;
    println!(
        "{}",
        tr.tf(
            keys::RESULT_SATURATION,
            &[("value", format!("{:.1}", diagnosis.reading.saturation_c))],
        )
    );
    println!(
        "{}",
        tr.tf(keys::RESULT_SUPERHEAT, &[("value", format!("{:.1}", diagnosis.superheat_c))])
    );
    println!(
        "{}",
        tr.tf(
            c.system.range_key(),
            &[("min", c.range.min_c.to_string()), ("max", c.range.max_c.to_string())],
        )
    );
    println!(
        "{}",
        tr.tf(keys::STATUS_LINE, &[("status", tr.t(c.status.label_key()).into_owned())])
    );
    println!("{}", tr.t(c.advisory.key()));
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_numbers_map_to_choices() {
        assert_eq!(parse_menu_choice("1\n"), Some(MenuChoice::Calculate));
        assert_eq!(parse_menu_choice(" 5 "), Some(MenuChoice::Table));
        assert_eq!(parse_menu_choice("0"), Some(MenuChoice::Exit));
        assert_eq!(parse_menu_choice("9"), None);
    }
}
