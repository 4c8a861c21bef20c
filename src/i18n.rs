use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";
    pub const APP_TITLE: &str = "general.app_title";
    pub const APP_SUBTITLE: &str = "general.app_subtitle";
    pub const YES: &str = "general.yes";
    pub const NO: &str = "general.no";
    pub const NOT_AVAILABLE: &str = "general.not_available";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_SIMPLE: &str = "main_menu.simple";
    pub const MAIN_MENU_WEEKLY: &str = "main_menu.weekly";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";

    pub const SECTION_PERSONAL: &str = "section.personal";
    pub const SECTION_HOUSE: &str = "section.house";
    pub const SECTION_APPLIANCES: &str = "section.appliances";
    pub const SECTION_WEEKLY_USAGE: &str = "section.weekly_usage";

    pub const PROMPT_NAME: &str = "prompt.name";
    pub const PROMPT_AGE: &str = "prompt.age";
    pub const PROMPT_CITY: &str = "prompt.city";
    pub const PROMPT_AREA: &str = "prompt.area";
    pub const PROMPT_DWELLING_KIND: &str = "prompt.dwelling_kind";
    pub const DWELLING_KIND_OPTIONS: &str = "prompt.dwelling_kind_options";
    pub const PROMPT_SIZE: &str = "prompt.size";
    pub const SIZE_OPTIONS: &str = "prompt.size_options";
    pub const PLACEHOLDER_SELECT: &str = "prompt.placeholder_select";
    pub const PROMPT_HAS_AC: &str = "prompt.has_ac";
    pub const PROMPT_HAS_FRIDGE: &str = "prompt.has_fridge";
    pub const PROMPT_HAS_WASHING: &str = "prompt.has_washing";
    pub const PROMPT_YES_NO_HINT: &str = "prompt.yes_no_hint";
    pub const PROMPT_DAY_HEADING: &str = "prompt.day_heading";
    pub const PROMPT_AC_HOURS: &str = "prompt.ac_hours";
    pub const PROMPT_WASHING_CYCLES: &str = "prompt.washing_cycles";
    pub const PROMPT_LIGHT_HOURS: &str = "prompt.light_hours";
    pub const PROMPT_FAN_HOURS: &str = "prompt.fan_hours";
    pub const PROMPT_DEFAULT_HINT: &str = "prompt.default_hint";
    pub const BUTTON_CALCULATE: &str = "prompt.calculate";

    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";
    pub const ERROR_OUT_OF_RANGE: &str = "error.out_of_range";
    pub const ERROR_INCOMPLETE_INPUT: &str = "error.incomplete_input";

    pub const RESULT_DAILY: &str = "result.daily";
    pub const RESULT_MONTHLY: &str = "result.monthly";
    pub const RESULT_YEARLY: &str = "result.yearly";
    pub const RESULT_WEEKLY: &str = "result.weekly";
    pub const RESULT_AVERAGE_DAILY: &str = "result.average_daily";
    pub const RESULT_DAILY_HEADING: &str = "result.daily_heading";
    pub const RESULT_FLAT_RATE_NOTE: &str = "result.flat_rate_note";

    pub const FORECAST_HEADING: &str = "forecast.heading";
    pub const FORECAST_TOTAL: &str = "forecast.total";
    pub const FORECAST_WEEKDAY_AVG: &str = "forecast.weekday_avg";
    pub const FORECAST_WEEKEND_AVG: &str = "forecast.weekend_avg";
    pub const FORECAST_CHANGE: &str = "forecast.change";
    pub const FORECAST_THIS_WEEK: &str = "forecast.this_week";
    pub const FORECAST_NEXT_WEEK: &str = "forecast.next_week";

    pub const SUMMARY_HEADING: &str = "summary.heading";
    pub const SUMMARY_LOCATION: &str = "summary.location";
    pub const SUMMARY_PROPERTY: &str = "summary.property";
    pub const SUMMARY_APPLIANCES: &str = "summary.appliances";

    pub const BREAKDOWN_HEADING: &str = "breakdown.heading";

    pub const INSIGHTS_HEADING: &str = "insights.heading";
    pub const INSIGHTS_HIGHEST: &str = "insights.highest";
    pub const INSIGHTS_LOWEST: &str = "insights.lowest";
    pub const INSIGHTS_RANGE: &str = "insights.range";
    pub const RECOMMENDATIONS_HEADING: &str = "insights.recommendations";
    pub const INSIGHT_REDUCE_PEAK_DAY: &str = "insight.reduce_peak_day";
    pub const INSIGHT_AC_DOMINANT: &str = "insight.ac_dominant";
    pub const INSIGHT_HIGH_WEEKLY: &str = "insight.high_weekly";
    pub const TIPS_HEADING: &str = "tip.heading";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT: &str = "settings.current";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_UNIT_OPTIONS: &str = "settings.unit_options";
    pub const SETTINGS_PROMPT_LANGUAGE: &str = "settings.prompt_language";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";

    pub const REPORT_SAVED: &str = "report.saved";
    pub const HOUSEHOLD_LOADED: &str = "report.household_loaded";

    // GUI 전용 라벨
    pub const GUI_LOAD_HOUSEHOLD: &str = "gui.load_household";
    pub const GUI_SAVE_HOUSEHOLD: &str = "gui.save_household";
    pub const GUI_SAVE_REPORT: &str = "gui.save_report";
    pub const GUI_SECTION_PERSONAL: &str = "gui.section_personal";
    pub const GUI_SECTION_HOUSE: &str = "gui.section_house";
    pub const GUI_SECTION_APPLIANCES: &str = "gui.section_appliances";
    pub const GUI_SECTION_WEEKLY_USAGE: &str = "gui.section_weekly_usage";
    pub const GUI_LABEL_NAME: &str = "gui.label_name";
    pub const GUI_LABEL_AGE: &str = "gui.label_age";
    pub const GUI_LABEL_CITY: &str = "gui.label_city";
    pub const GUI_LABEL_AREA: &str = "gui.label_area";
    pub const GUI_VARIANT_SIMPLE: &str = "gui.variant_simple";
    pub const GUI_VARIANT_WEEKLY: &str = "gui.variant_weekly";

    /// GUI 화면에 쓰는 키 전체.
    pub const GUI_ALL: [&str; 13] = [
        GUI_LOAD_HOUSEHOLD,
        GUI_SAVE_HOUSEHOLD,
        GUI_SAVE_REPORT,
        GUI_SECTION_PERSONAL,
        GUI_SECTION_HOUSE,
        GUI_SECTION_APPLIANCES,
        GUI_SECTION_WEEKLY_USAGE,
        GUI_LABEL_NAME,
        GUI_LABEL_AGE,
        GUI_LABEL_CITY,
        GUI_LABEL_AREA,
        GUI_VARIANT_SIMPLE,
        GUI_VARIANT_WEEKLY,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("ko") {
            Language::Ko
        } else {
            Language::En
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
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
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
        if overrides.is_some() {
            tracing::debug!(lang_code, "language pack loaded");
        }
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// 언어팩에서만 키를 조회한다.
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.overrides.as_ref().and_then(|m| m.get(key).cloned())
    }

    /// 번역을 가져온다. 언어팩 → 내장 문자열 → 영어 순으로 찾고, 끝내 없으면 키를 돌려준다.
    pub fn t(&self, key: &str) -> String {
        if let Some(v) = self.lookup(key) {
            return v;
        }
        let builtin = match self.lang {
            Language::Ko => ko(key).or_else(|| en(key)),
            Language::En => en(key),
        };
        builtin.map(str::to_string).unwrap_or_else(|| key.to_string())
    }

    /// `{name}` 형식 자리표시자를 채운 번역.
    pub fn tf(&self, key: &str, vars: &[(&str, String)]) -> String {
        fill_template(&self.t(key), vars)
    }
}

/// `{key}` 자리표시자를 값으로 바꾼다.
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
        .unwrap_or_else(|| "en-us".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "ko" => Some("ko".into()),
        "ko-kr" => Some("ko-kr".into()),
        "en" => Some("en".into()),
        "en-us" => Some("en-us".into()),
        "en-uk" | "en-gb" => Some("en-us".into()),
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en-us".into()),
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
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
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
    for var in ["LC_ALL", "LANG"] {
        if let Ok(lang) = std::env::var(var) {
            if let Some(code) = normalize_locale_string(&lang) {
                return Some(code);
            }
        }
    }
    None
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 또는 [section] 아래 key = "value".
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    // 1) full code (e.g., en-us)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) base code (e.g., en)
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Table = match toml::from_str(src) {
        Ok(v) => v,
        Err(e) => {
            tracing::warn!("language pack ignored: {e}");
            return None;
        }
    };
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
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

fn ko(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        APP_TITLE => "가정용 전력 소비 계산기",
        APP_SUBTITLE => "하루 사용량을 계산하고 다음 주 소비량을 예측합니다",
        YES => "예",
        NO => "아니오",
        NOT_AVAILABLE => "계산 불가",
        MAIN_MENU_TITLE => "\n=== 가정용 전력 소비 계산기 ===",
        MAIN_MENU_SIMPLE => "1) 하루 사용량 간이 계산",
        MAIN_MENU_WEEKLY => "2) 주간 사용 패턴 분석 + 다음 주 예측",
        MAIN_MENU_SETTINGS => "3) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        SECTION_PERSONAL => "\n-- 신상 정보 --",
        SECTION_HOUSE => "\n-- 주택 정보 --",
        SECTION_APPLIANCES => "\n-- 가전 --",
        SECTION_WEEKLY_USAGE => "\n-- 요일별 사용 패턴 --",
        PROMPT_NAME => "이름: ",
        PROMPT_AGE => "나이: ",
        PROMPT_CITY => "도시: ",
        PROMPT_AREA => "지역/동네: ",
        PROMPT_DWELLING_KIND => "아파트(Flat)와 공동주택(Tenement) 중 어디에 사십니까?",
        DWELLING_KIND_OPTIONS => "1) Flat  2) Tenement  (엔터=선택 안 함)",
        PROMPT_SIZE => "주택 유형:",
        SIZE_OPTIONS => "1) 1BHK  2) 2BHK  3) 3BHK  (엔터=선택 안 함)",
        PLACEHOLDER_SELECT => "선택...",
        PROMPT_HAS_AC => "에어컨을 사용합니까? ",
        PROMPT_HAS_FRIDGE => "냉장고를 사용합니까? ",
        PROMPT_HAS_WASHING => "세탁기를 사용합니까? ",
        PROMPT_YES_NO_HINT => "(y/N): ",
        PROMPT_DAY_HEADING => "\n[{day}]",
        PROMPT_AC_HOURS => "{day} 에어컨 사용 시간 (0~24)",
        PROMPT_WASHING_CYCLES => "{day} 세탁기 사용 횟수 (0~5)",
        PROMPT_LIGHT_HOURS => "{day} 조명 사용 시간 (0~24)",
        PROMPT_FAN_HOURS => "{day} 선풍기 사용 시간 (0~24)",
        PROMPT_DEFAULT_HINT => " [기본 {default}]: ",
        BUTTON_CALCULATE => "소비량 계산 및 다음 주 예측",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        ERROR_OUT_OF_RANGE => "{min}~{max} 범위로 입력하세요.",
        ERROR_INCOMPLETE_INPUT => "신상 정보와 주택 정보를 모두 입력하세요!",
        RESULT_DAILY => "하루 사용량",
        RESULT_MONTHLY => "월 사용량",
        RESULT_YEARLY => "연 사용량",
        RESULT_WEEKLY => "주간 사용량",
        RESULT_AVERAGE_DAILY => "하루 평균",
        RESULT_DAILY_HEADING => "요일별 소비량",
        RESULT_FLAT_RATE_NOTE => "조명/선풍기는 대당 하루 고정 소비로 계산합니다.",
        FORECAST_HEADING => "다음 주 예측",
        FORECAST_TOTAL => "다음 주 예측 합계",
        FORECAST_WEEKDAY_AVG => "평일 평균",
        FORECAST_WEEKEND_AVG => "주말 평균",
        FORECAST_CHANGE => "예상 변화율",
        FORECAST_THIS_WEEK => "이번 주",
        FORECAST_NEXT_WEEK => "다음 주(예측)",
        SUMMARY_HEADING => "{name} 님 요약",
        SUMMARY_LOCATION => "위치",
        SUMMARY_PROPERTY => "주택 유형",
        SUMMARY_APPLIANCES => "가전",
        BREAKDOWN_HEADING => "가전별 주간 소비량",
        INSIGHTS_HEADING => "주간 분석",
        INSIGHTS_HIGHEST => "최대 소비",
        INSIGHTS_LOWEST => "최소 소비",
        INSIGHTS_RANGE => "소비 편차",
        RECOMMENDATIONS_HEADING => "권장 사항",
        INSIGHT_REDUCE_PEAK_DAY => "{day} 사용량을 줄이는 것을 고려하세요",
        INSIGHT_AC_DOMINANT => "에어컨이 전체의 40% 이상을 소비합니다. 사용을 최적화하세요.",
        INSIGHT_HIGH_WEEKLY => "주간 소비량이 높습니다. 가전 효율을 점검하세요.",
        TIPS_HEADING => "에너지 절약 팁",
        "tip.led_bulbs" => "백열전구 대신 LED 전구를 사용하세요",
        "tip.ac_temperature" => "에어컨 온도는 24°C 이상으로 설정하세요",
        "tip.fans_with_ac" => "에어컨과 선풍기를 함께 써서 공기를 순환시키세요",
        "tip.unplug" => "사용하지 않는 가전은 플러그를 뽑으세요",
        "tip.full_loads" => "세탁기는 가득 채워서 돌리세요",
        "tip.maintenance" => "정기 점검으로 가전 효율을 유지하세요",
        "tip.timers" => "조명과 선풍기에 타이머를 활용하세요",
        "tip.ac_peak_hours" => "피크 시간대 에어컨 사용을 최적화하세요",
        "appliance.light" => "조명",
        "appliance.fan" => "선풍기",
        "appliance.ac" => "에어컨",
        "appliance.fridge" => "냉장고",
        "appliance.washing_machine" => "세탁기",
        "dwelling.flat" => "아파트",
        "dwelling.tenement" => "공동주택",
        "day.monday" => "월요일",
        "day.tuesday" => "화요일",
        "day.wednesday" => "수요일",
        "day.thursday" => "목요일",
        "day.friday" => "금요일",
        "day.saturday" => "토요일",
        "day.sunday" => "일요일",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT => "현재 언어: {lang}, 표시 단위: {unit}",
        SETTINGS_OPTIONS => "1) 언어 변경  2) 표시 단위 변경",
        SETTINGS_UNIT_OPTIONS => "1) kWh  2) MJ  3) kcal  4) Btu",
        SETTINGS_PROMPT_LANGUAGE => "언어 코드 (auto/ko/en): ",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "설정을 저장했습니다.",
        REPORT_SAVED => "보고서를 저장했습니다: {path}",
        HOUSEHOLD_LOADED => "가구 입력 파일을 불러왔습니다: {path}",
        GUI_LOAD_HOUSEHOLD => "가구 파일 열기…",
        GUI_SAVE_HOUSEHOLD => "가구 파일 저장…",
        GUI_SAVE_REPORT => "보고서 저장…",
        GUI_SECTION_PERSONAL => "신상 정보",
        GUI_SECTION_HOUSE => "주택 정보",
        GUI_SECTION_APPLIANCES => "가전",
        GUI_SECTION_WEEKLY_USAGE => "요일별 사용 패턴",
        GUI_LABEL_NAME => "이름",
        GUI_LABEL_AGE => "나이",
        GUI_LABEL_CITY => "도시",
        GUI_LABEL_AREA => "지역/동네",
        GUI_VARIANT_SIMPLE => "하루 사용량 간이 계산",
        GUI_VARIANT_WEEKLY => "주간 사용 패턴 분석 + 다음 주 예측",
        _ => return None,
    })
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        APP_TITLE => "Energy Consumption Calculator",
        APP_SUBTITLE => "Calculate your daily energy usage and predict next week's consumption",
        YES => "Yes",
        NO => "No",
        NOT_AVAILABLE => "n/a",
        MAIN_MENU_TITLE => "\n=== Energy Consumption Calculator ===",
        MAIN_MENU_SIMPLE => "1) Quick daily estimate",
        MAIN_MENU_WEEKLY => "2) Weekly usage pattern + next week prediction",
        MAIN_MENU_SETTINGS => "3) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        SECTION_PERSONAL => "\n-- Personal Information --",
        SECTION_HOUSE => "\n-- House Information --",
        SECTION_APPLIANCES => "\n-- Appliances --",
        SECTION_WEEKLY_USAGE => "\n-- Weekly Usage Pattern --",
        PROMPT_NAME => "Enter your name: ",
        PROMPT_AGE => "Enter your age: ",
        PROMPT_CITY => "Enter your city: ",
        PROMPT_AREA => "Enter your area: ",
        PROMPT_DWELLING_KIND => "Do you live in a tenement or flat?",
        DWELLING_KIND_OPTIONS => "1) Flat  2) Tenement  (enter = not selected)",
        PROMPT_SIZE => "Enter type of house:",
        SIZE_OPTIONS => "1) 1BHK  2) 2BHK  3) 3BHK  (enter = not selected)",
        PLACEHOLDER_SELECT => "Select...",
        PROMPT_HAS_AC => "Do you use AC? ",
        PROMPT_HAS_FRIDGE => "Do you use fridge? ",
        PROMPT_HAS_WASHING => "Do you use washing machine? ",
        PROMPT_YES_NO_HINT => "(y/N): ",
        PROMPT_DAY_HEADING => "\n[{day}]",
        PROMPT_AC_HOURS => "AC usage hours on {day} (0-24)",
        PROMPT_WASHING_CYCLES => "Washing machine cycles on {day} (0-5)",
        PROMPT_LIGHT_HOURS => "Lights usage hours on {day} (0-24)",
        PROMPT_FAN_HOURS => "Fans usage hours on {day} (0-24)",
        PROMPT_DEFAULT_HINT => " [default {default}]: ",
        BUTTON_CALCULATE => "Calculate Energy Consumption & Predict Next Week",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        ERROR_OUT_OF_RANGE => "Please enter a value between {min} and {max}.",
        ERROR_INCOMPLETE_INPUT => "Please fill in all personal information fields!",
        RESULT_DAILY => "Daily Usage",
        RESULT_MONTHLY => "Monthly Usage",
        RESULT_YEARLY => "Yearly Usage",
        RESULT_WEEKLY => "Weekly Usage",
        RESULT_AVERAGE_DAILY => "Average Daily",
        RESULT_DAILY_HEADING => "Daily Energy Consumption",
        RESULT_FLAT_RATE_NOTE => "Lights and fans are charged as a fixed daily draw per unit.",
        FORECAST_HEADING => "Next Week Prediction",
        FORECAST_TOTAL => "Next Week Prediction",
        FORECAST_WEEKDAY_AVG => "Weekday Average",
        FORECAST_WEEKEND_AVG => "Weekend Average",
        FORECAST_CHANGE => "Predicted Change",
        FORECAST_THIS_WEEK => "This Week",
        FORECAST_NEXT_WEEK => "Next Week (Predicted)",
        SUMMARY_HEADING => "Summary for {name}",
        SUMMARY_LOCATION => "Location",
        SUMMARY_PROPERTY => "Property Type",
        SUMMARY_APPLIANCES => "Appliances",
        BREAKDOWN_HEADING => "Appliance-wise Weekly Breakdown",
        INSIGHTS_HEADING => "Weekly Insights",
        INSIGHTS_HIGHEST => "Highest consumption",
        INSIGHTS_LOWEST => "Lowest consumption",
        INSIGHTS_RANGE => "Consumption range",
        RECOMMENDATIONS_HEADING => "Recommendations",
        INSIGHT_REDUCE_PEAK_DAY => "Consider reducing usage on {day}",
        INSIGHT_AC_DOMINANT => "AC consumes >40% of energy. Consider optimizing usage.",
        INSIGHT_HIGH_WEEKLY => "High weekly consumption detected. Review appliance efficiency.",
        TIPS_HEADING => "Energy Saving Tips",
        "tip.led_bulbs" => "Use LED bulbs instead of incandescent bulbs",
        "tip.ac_temperature" => "Set AC temperature to 24°C or higher",
        "tip.fans_with_ac" => "Use fans along with AC to circulate air better",
        "tip.unplug" => "Unplug appliances when not in use",
        "tip.full_loads" => "Use washing machine with full loads",
        "tip.maintenance" => "Regular maintenance of appliances improves efficiency",
        "tip.timers" => "Consider using timers for lights and fans",
        "tip.ac_peak_hours" => "Optimize AC usage during peak hours",
        "appliance.light" => "Lights",
        "appliance.fan" => "Fans",
        "appliance.ac" => "Air Conditioner",
        "appliance.fridge" => "Refrigerator",
        "appliance.washing_machine" => "Washing Machine",
        "dwelling.flat" => "Flat",
        "dwelling.tenement" => "Tenement",
        "day.monday" => "Monday",
        "day.tuesday" => "Tuesday",
        "day.wednesday" => "Wednesday",
        "day.thursday" => "Thursday",
        "day.friday" => "Friday",
        "day.saturday" => "Saturday",
        "day.sunday" => "Sunday",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT => "Current language: {lang}, display unit: {unit}",
        SETTINGS_OPTIONS => "1) Change language  2) Change display unit",
        SETTINGS_UNIT_OPTIONS => "1) kWh  2) MJ  3) kcal  4) Btu",
        SETTINGS_PROMPT_LANGUAGE => "Language code (auto/ko/en): ",
        SETTINGS_PROMPT_CHANGE => "Enter number to change (enter to cancel): ",
        SETTINGS_INVALID => "Invalid input; nothing changed.",
        SETTINGS_SAVED => "Settings saved.",
        REPORT_SAVED => "Report saved: {path}",
        HOUSEHOLD_LOADED => "Household file loaded: {path}",
        GUI_LOAD_HOUSEHOLD => "Load household…",
        GUI_SAVE_HOUSEHOLD => "Save household…",
        GUI_SAVE_REPORT => "Save report…",
        GUI_SECTION_PERSONAL => "Personal Information",
        GUI_SECTION_HOUSE => "House Information",
        GUI_SECTION_APPLIANCES => "Appliances",
        GUI_SECTION_WEEKLY_USAGE => "Weekly Usage Pattern",
        GUI_LABEL_NAME => "Name",
        GUI_LABEL_AGE => "Age",
        GUI_LABEL_CITY => "City",
        GUI_LABEL_AREA => "Area",
        GUI_VARIANT_SIMPLE => "Quick daily estimate",
        GUI_VARIANT_WEEKLY => "Weekly usage pattern + next week prediction",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_language_wins_over_config() {
        assert_eq!(resolve_language("ko-KR", Some("en")), "ko-kr");
        assert_eq!(resolve_language("auto", Some("en-gb")), "en-us");
    }

    #[test]
    fn korean_falls_back_to_english_then_key() {
        let tr = Translator::new("ko");
        assert_eq!(tr.language(), Language::Ko);
        assert_eq!(tr.t("day.monday"), "월요일");
        assert_eq!(tr.t("no.such.key"), "no.such.key");
    }

    #[test]
    fn template_placeholders_are_filled() {
        let tr = Translator::new("en");
        assert_eq!(
            tr.tf(keys::SUMMARY_HEADING, &[("name", "Asha".to_string())]),
            "Summary for Asha"
        );
    }

    #[test]
    fn gui_labels_exist_in_both_languages() {
        for key in keys::GUI_ALL {
            for code in ["ko", "en"] {
                let text = Translator::new(code).t(key);
                assert_ne!(text, key, "{code}: {key}");
                assert_eq!(text.trim(), text, "{code}: {key}");
                assert!(!text.ends_with(':'), "{code}: {key}");
                assert!(!text.contains(") "), "{code}: {key}");
            }
        }
        assert_eq!(ko(keys::GUI_SAVE_REPORT), Some("보고서 저장…"));
    }

    #[test]
    fn nested_pack_keys_are_flattened() {
        let map = parse_toml_to_map("[result]\ndaily = \"Per day\"\n").expect("pack");
        assert_eq!(map.get("result.daily").map(String::as_str), Some("Per day"));
        assert!(parse_toml_to_map("not = [valid").is_none());
    }
}
