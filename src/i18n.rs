use std::borrow::Cow;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_CALCULATE: &str = "main_menu.calculate";
    pub const MAIN_MENU_SYSTEM: &str = "main_menu.system";
    pub const MAIN_MENU_MODE: &str = "main_menu.mode";
    pub const MAIN_MENU_GAS: &str = "main_menu.gas";
    pub const MAIN_MENU_TABLE: &str = "main_menu.table";
    pub const MAIN_MENU_CLEAR: &str = "main_menu.clear";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const MAIN_MENU_STATE: &str = "main_menu.state";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";

    pub const SYSTEM_CONVENTIONAL: &str = "system.conventional";
    pub const SYSTEM_INVERTER: &str = "system.inverter";
    pub const SYSTEM_OPTIONS: &str = "system.options";
    pub const HINT_CONVENTIONAL: &str = "hint.conventional";
    pub const HINT_INVERTER: &str = "hint.inverter";
    pub const RANGE_CONVENTIONAL: &str = "range.conventional";
    pub const RANGE_INVERTER: &str = "range.inverter";
    pub const GUIDANCE_CONVENTIONAL: &str = "guidance.conventional";
    pub const GUIDANCE_INVERTER: &str = "guidance.inverter";

    pub const MODE_AUTO: &str = "mode.auto";
    pub const MODE_MANUAL: &str = "mode.manual";
    pub const GAS_OPTIONS: &str = "gas.options";

    pub const PROMPT_PRESSURE: &str = "prompt.pressure";
    pub const PROMPT_SUCTION: &str = "prompt.suction";
    pub const PROMPT_SATURATION: &str = "prompt.saturation";
    pub const PROMPT_SELECT: &str = "prompt.select";

    pub const STATUS_LOW: &str = "status.low";
    pub const STATUS_OK: &str = "status.ok";
    pub const STATUS_HIGH: &str = "status.high";
    pub const STATUS_LINE: &str = "status.line";

    pub const ADVICE_CONVENTIONAL_LOW: &str = "advice.conventional_low";
    pub const ADVICE_CONVENTIONAL_OK: &str = "advice.conventional_ok";
    pub const ADVICE_CONVENTIONAL_HIGH: &str = "advice.conventional_high";
    pub const ADVICE_INVERTER_LOW: &str = "advice.inverter_low";
    pub const ADVICE_INVERTER_OK: &str = "advice.inverter_ok";
    pub const ADVICE_INVERTER_HIGH: &str = "advice.inverter_high";

    pub const RESULT_SATURATION: &str = "result.saturation";
    pub const RESULT_SUPERHEAT: &str = "result.superheat";
    pub const RESULT_NONE: &str = "result.none";
    pub const RESULT_CLEARED: &str = "result.cleared";
    pub const TABLE_HEADER: &str = "table.header";

    pub const ERROR_SUCTION_REQUIRED: &str = "error.suction_required";
    pub const ERROR_PRESSURE_REQUIRED: &str = "error.pressure_required";
    pub const ERROR_PRESSURE_RANGE: &str = "error.pressure_range";
    pub const ERROR_SATURATION_NOT_FOUND: &str = "error.saturation_not_found";
    pub const ERROR_SATURATION_REQUIRED: &str = "error.saturation_required";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PRESSURE_UNITS: &str = "settings.pressure_units";
    pub const SETTINGS_TEMPERATURE_UNITS: &str = "settings.temperature_units";
    pub const SETTINGS_LANGUAGE_PROMPT: &str = "settings.language_prompt";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Pt,
    En,
    Ko,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else if c.starts_with("ko") {
            Language::Ko
        } else {
            Language::Pt
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Pt => "pt-br",
            Language::En => "en",
            Language::Ko => "ko",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(pt/en/ko)에 따라 번역기를 생성한다. 알 수 없는 코드는 pt-br 로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 번역을 가져온다. 언어팩 값이 우선이며, 영어/한국어 번역이 없으면 포르투갈어 문자열을 쓴다.
    pub fn t(&self, key: &str) -> Cow<'_, str> {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return Cow::Borrowed(v.as_str());
        }
        let s = match self.lang {
            Language::En => en(key).unwrap_or_else(|| pt(key)),
            Language::Ko => ko(key).unwrap_or_else(|| pt(key)),
            Language::Pt => pt(key),
        };
        Cow::Borrowed(s)
    }

    /// `{name}` 자리표시자를 채운 번역을 돌려준다.
    pub fn tf(&self, key: &str, vars: &[(&str, String)]) -> String {
        fill_template(&self.t(key), vars)
    }
}

/// 템플릿 문자열의 `{name}` 을 값으로 치환한다.
pub fn fill_template(template: &str, vars: &[(&str, String)]) -> String {
    let mut out = template.to_string();
    for (k, v) in vars {
        out = out.replace(&format!("{{{k}}}"), v);
    }
    out
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "pt-br".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        "pt" | "pt-br" | "pt_br" => Some("pt-br".into()),
        "en" | "en-us" | "en-uk" => Some("en".into()),
        "ko" | "ko-kr" => Some("ko".into()),
        other if other.starts_with("pt") => Some("pt-br".into()),
        other if other.starts_with("en") => Some("en".into()),
        other if other.starts_with("ko") => Some("ko".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "pt" => Some("pt-br".into()),
        "en" => Some("en".into()),
        "ko" => Some("ko".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    for var in ["LANG", "LC_ALL"] {
        if let Ok(lang) = std::env::var(var) {
            if let Some(code) = normalize_locale_string(&lang) {
                return Some(code);
            }
        }
    }
    None
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 로 구성된 플랫 맵 또는 중첩 테이블.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    // 1) full code (e.g., pt-br)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) base code (e.g., pt)
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Table = toml::from_str(src).ok()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    walk(&format!("{prefix}.{k}"), v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in &value {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn pt(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "Erro",
        APP_EXIT => "Encerrando.",
        MAIN_MENU_TITLE => "\n=== Superaquecimento ===",
        MAIN_MENU_CALCULATE => "1) Calcular",
        MAIN_MENU_SYSTEM => "2) Tipo de sistema",
        MAIN_MENU_MODE => "3) Alternar Tsat automático/manual",
        MAIN_MENU_GAS => "4) Gás",
        MAIN_MENU_TABLE => "5) Tabela P/T",
        MAIN_MENU_CLEAR => "6) Limpar",
        MAIN_MENU_SETTINGS => "7) Configurações",
        MAIN_MENU_EXIT => "0) Sair",
        MAIN_MENU_STATE => "[{system} · {gas} · Tsat {mode} · SH {sh}]",
        PROMPT_MENU_SELECT => "Opção: ",
        INVALID_SELECTION_RETRY => "Opção inválida. Tente novamente.",
        SYSTEM_CONVENTIONAL => "Convencional",
        SYSTEM_INVERTER => "Inverter",
        SYSTEM_OPTIONS => "1) Convencional  2) Inverter",
        HINT_CONVENTIONAL => {
            "Convencional: SH é referência principal (com filtros limpos e condições estabilizadas)."
        }
        HINT_INVERTER => {
            "Inverter: confira carga por PESO (etiqueta). Use SH para validar comportamento e sensores."
        }
        RANGE_CONVENTIONAL => "Faixa esperada (Convencional): {min} a {max}°C (ideal 8–10°C)",
        RANGE_INVERTER => "Faixa típica (Inverter): {min} a {max}°C (varia com modulação)",
        GUIDANCE_CONVENTIONAL => {
            "Em convencional, o SH é referência principal para carga e diagnóstico (com regime estabilizado)."
        }
        GUIDANCE_INVERTER => {
            "Em inverter, carga correta é por PESO (etiqueta). O SH serve como conferência e varia com a modulação."
        }
        MODE_AUTO => "Auto",
        MODE_MANUAL => "Manual",
        GAS_OPTIONS => "1) R410A  2) R32  3) R22",
        PROMPT_PRESSURE => "Pressão de sucção ({unit}): ",
        PROMPT_SUCTION => "Temperatura de sucção ({unit}): ",
        PROMPT_SATURATION => "Temperatura de saturação ({unit}): ",
        PROMPT_SELECT => "Escolha: ",
        STATUS_LOW => "BAIXO",
        STATUS_OK => "OK",
        STATUS_HIGH => "ALTO",
        STATUS_LINE => "Status: {status}",
        ADVICE_CONVENTIONAL_LOW => {
            "SH baixo. Atenção para risco de retorno de líquido. Verifique excesso de carga, fluxo de ar alto e regime."
        }
        ADVICE_CONVENTIONAL_OK => {
            "Dentro do padrão. Se houver queixa, investigue fluxo de ar, limpeza, carga térmica e sensores."
        }
        ADVICE_CONVENTIONAL_HIGH => {
            "SH alto. Possível falta de refrigerante, restrição (capilar/filtro), baixa vazão de ar ou baixa carga térmica."
        }
        ADVICE_INVERTER_LOW => {
            "SH abaixo da faixa típica. Pode ser modulação/EEV/sensores. Confirme estabilização, filtros, carga térmica e leituras."
        }
        ADVICE_INVERTER_OK => {
            "Dentro do esperado. Lembrete: em inverter, ajuste de carga é por PESO (etiqueta)."
        }
        ADVICE_INVERTER_HIGH => {
            "SH acima da faixa típica. Pode sugerir baixa carga, mas confirme por PESO (etiqueta) e considere modulação/condições."
        }
        RESULT_SATURATION => "Tsat: {value} °C",
        RESULT_SUPERHEAT => "SH: {value} °C",
        RESULT_NONE => "—",
        RESULT_CLEARED => "Leituras limpas.",
        TABLE_HEADER => "psi    Tsat (°C)",
        ERROR_SUCTION_REQUIRED => "Informe a temperatura de sucção (°C).",
        ERROR_PRESSURE_REQUIRED => "No modo automático, informe a pressão (psi).",
        ERROR_PRESSURE_RANGE => "Pressão fora da tabela automática: use 10 a 200 psi.",
        ERROR_SATURATION_NOT_FOUND => "Não consegui calcular Tsat. Confira gás e pressão.",
        ERROR_SATURATION_REQUIRED => {
            "Informe a temperatura de saturação (°C) ou ative o modo automático."
        }
        SETTINGS_HEADING => "\n-- Configurações --",
        SETTINGS_OPTIONS => "1) Unidade de pressão  2) Unidade de temperatura  3) Idioma",
        SETTINGS_PRESSURE_UNITS => "1) psi  2) bar  3) kPa",
        SETTINGS_TEMPERATURE_UNITS => "1) °C  2) °F  3) K",
        SETTINGS_LANGUAGE_PROMPT => "Idioma (pt-br/en/ko/auto): ",
        SETTINGS_INVALID => "Entrada inválida; nada foi alterado.",
        SETTINGS_SAVED => "Configuração salva.",
        _ => "",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    let s = match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting.",
        MAIN_MENU_TITLE => "\n=== Superheat ===",
        MAIN_MENU_CALCULATE => "1) Calculate",
        MAIN_MENU_SYSTEM => "2) System type",
        MAIN_MENU_MODE => "3) Toggle automatic/manual Tsat",
        MAIN_MENU_GAS => "4) Refrigerant",
        MAIN_MENU_TABLE => "5) P/T table",
        MAIN_MENU_CLEAR => "6) Clear",
        MAIN_MENU_SETTINGS => "7) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Option: ",
        INVALID_SELECTION_RETRY => "Invalid option. Try again.",
        SYSTEM_CONVENTIONAL => "Conventional",
        SYSTEM_OPTIONS => "1) Conventional  2) Inverter",
        HINT_CONVENTIONAL => {
            "Conventional: SH is the main reference (clean filters, stabilised conditions)."
        }
        HINT_INVERTER => {
            "Inverter: check the charge by WEIGHT (nameplate). Use SH to validate behaviour and sensors."
        }
        RANGE_CONVENTIONAL => "Expected range (Conventional): {min} to {max}°C (ideal 8–10°C)",
        RANGE_INVERTER => "Typical range (Inverter): {min} to {max}°C (varies with modulation)",
        GUIDANCE_CONVENTIONAL => {
            "On conventional systems SH is the main reference for charge and diagnosis (at steady state)."
        }
        GUIDANCE_INVERTER => {
            "On inverter systems the correct charge is by WEIGHT (nameplate). SH is a cross-check and varies with modulation."
        }
        PROMPT_PRESSURE => "Suction pressure ({unit}): ",
        PROMPT_SUCTION => "Suction temperature ({unit}): ",
        PROMPT_SATURATION => "Saturation temperature ({unit}): ",
        PROMPT_SELECT => "Choose: ",
        STATUS_LOW => "LOW",
        STATUS_HIGH => "HIGH",
        ADVICE_CONVENTIONAL_LOW => {
            "Low SH. Risk of liquid floodback. Check for overcharge, high airflow and operating conditions."
        }
        ADVICE_CONVENTIONAL_OK => {
            "Within the standard band. If there is a complaint, check airflow, cleanliness, heat load and sensors."
        }
        ADVICE_CONVENTIONAL_HIGH => {
            "High SH. Possible undercharge, restriction (capillary/filter), low airflow or low heat load."
        }
        ADVICE_INVERTER_LOW => {
            "SH below the typical band. May be modulation/EEV/sensors. Confirm stabilisation, filters, heat load and readings."
        }
        ADVICE_INVERTER_OK => {
            "As expected. Reminder: on inverter systems the charge is adjusted by WEIGHT (nameplate)."
        }
        ADVICE_INVERTER_HIGH => {
            "SH above the typical band. May suggest undercharge, but confirm by WEIGHT (nameplate) and consider modulation/conditions."
        }
        RESULT_CLEARED => "Readings cleared.",
        ERROR_SUCTION_REQUIRED => "Enter the suction temperature (°C).",
        ERROR_PRESSURE_REQUIRED => "In automatic mode, enter the pressure (psi).",
        ERROR_PRESSURE_RANGE => "Pressure outside the automatic table: use 10 to 200 psi.",
        ERROR_SATURATION_NOT_FOUND => "Could not compute Tsat. Check refrigerant and pressure.",
        ERROR_SATURATION_REQUIRED => {
            "Enter the saturation temperature (°C) or enable automatic mode."
        }
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_OPTIONS => "1) Pressure unit  2) Temperature unit  3) Language",
        SETTINGS_LANGUAGE_PROMPT => "Language (pt-br/en/ko/auto): ",
        SETTINGS_INVALID => "Invalid input; nothing changed.",
        SETTINGS_SAVED => "Settings saved.",
        _ => return None,
    };
    Some(s)
}

fn ko(key: &str) -> Option<&'static str> {
    use keys::*;
    let s = match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== 과열도 계산기 ===",
        MAIN_MENU_CALCULATE => "1) 계산",
        MAIN_MENU_SYSTEM => "2) 시스템 종류",
        MAIN_MENU_MODE => "3) 포화온도 자동/수동 전환",
        MAIN_MENU_GAS => "4) 냉매",
        MAIN_MENU_TABLE => "5) P/T 표",
        MAIN_MENU_CLEAR => "6) 초기화",
        MAIN_MENU_SETTINGS => "7) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        SYSTEM_CONVENTIONAL => "정속형",
        SYSTEM_INVERTER => "인버터",
        SYSTEM_OPTIONS => "1) 정속형  2) 인버터",
        HINT_CONVENTIONAL => "정속형: SH가 주 기준입니다 (필터 청결, 운전 안정 상태).",
        HINT_INVERTER => "인버터: 충전량은 명판 기준 무게로 확인하고, SH는 동작/센서 검증에 사용하세요.",
        RANGE_CONVENTIONAL => "기대 범위(정속형): {min}~{max}°C (권장 8–10°C)",
        RANGE_INVERTER => "일반 범위(인버터): {min}~{max}°C (운전 변조에 따라 변동)",
        GUIDANCE_CONVENTIONAL => "정속형에서는 SH가 충전량과 진단의 주 기준입니다(안정 운전 시).",
        GUIDANCE_INVERTER => "인버터는 명판 무게로 충전합니다. SH는 확인용이며 변조에 따라 달라집니다.",
        MODE_AUTO => "자동",
        MODE_MANUAL => "수동",
        PROMPT_PRESSURE => "흡입 압력 ({unit}): ",
        PROMPT_SUCTION => "흡입 온도 ({unit}): ",
        PROMPT_SATURATION => "포화 온도 ({unit}): ",
        PROMPT_SELECT => "선택: ",
        STATUS_LOW => "낮음",
        STATUS_OK => "정상",
        STATUS_HIGH => "높음",
        STATUS_LINE => "상태: {status}",
        ADVICE_CONVENTIONAL_LOW => "SH 낮음. 액백 위험에 주의하세요. 과충전, 과다 풍량, 운전 조건을 확인하세요.",
        ADVICE_CONVENTIONAL_OK => "정상 범위입니다. 불만이 있으면 풍량, 청결, 열부하, 센서를 점검하세요.",
        ADVICE_CONVENTIONAL_HIGH => "SH 높음. 냉매 부족, 제한(모세관/필터), 풍량 부족 또는 열부하 부족 가능성.",
        ADVICE_INVERTER_LOW => "일반 범위보다 낮음. 변조/EEV/센서 영향일 수 있습니다. 안정화, 필터, 열부하, 측정값을 확인하세요.",
        ADVICE_INVERTER_OK => "예상 범위입니다. 인버터 충전량 조정은 명판 무게 기준입니다.",
        ADVICE_INVERTER_HIGH => "일반 범위보다 높음. 충전 부족일 수 있으나 명판 무게로 확인하고 변조/조건을 고려하세요.",
        RESULT_CLEARED => "입력값을 초기화했습니다.",
        ERROR_SUCTION_REQUIRED => "흡입 온도(°C)를 입력하세요.",
        ERROR_PRESSURE_REQUIRED => "자동 모드에서는 압력(psi)을 입력하세요.",
        ERROR_PRESSURE_RANGE => "자동 표 범위를 벗어난 압력입니다: 10~200 psi 를 사용하세요.",
        ERROR_SATURATION_NOT_FOUND => "포화 온도를 계산할 수 없습니다. 냉매와 압력을 확인하세요.",
        ERROR_SATURATION_REQUIRED => "포화 온도(°C)를 입력하거나 자동 모드를 켜세요.",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_OPTIONS => "1) 압력 단위  2) 온도 단위  3) 언어",
        SETTINGS_LANGUAGE_PROMPT => "언어 (pt-br/en/ko/auto): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "설정을 저장했습니다.",
        _ => return None,
    };
    Some(s)
}
