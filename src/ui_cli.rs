use std::io::{self, Write};

use crate::app::{AppContext, AppError, Variant};
use crate::consumption::{WeeklyUsage, Weekday};
use crate::form::FormInput;
use crate::household::{ApplianceFlags, DwellingKind, PersonalInfo, SizeCategory};
use crate::i18n::{keys, Translator};
use crate::report;
use crate::units::EnergyUnit;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Simple,
    Weekly,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_SIMPLE));
    println!("{}", tr.t(keys::MAIN_MENU_WEEKLY));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(&tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Simple),
            "2" => return Ok(MenuChoice::Weekly),
            "3" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 폼을 입력받아 검증한 뒤 결과를 출력한다. 필수 항목이 비면 안내만 하고 돌아간다.
pub fn handle_household(ctx: &AppContext, variant: Variant) -> Result<(), AppError> {
    let tr = &ctx.tr;
    let form = read_form(ctx, variant)?;
    let household = match form.validate() {
        Ok(h) => h,
        Err(err) => {
            tracing::info!(%err, "calculation skipped");
            println!(
                "{}: {}",
                tr.t(keys::ERROR_PREFIX),
                tr.t(keys::ERROR_INCOMPLETE_INPUT)
            );
            return Ok(());
        }
    };
    println!();
    println!("{}", ctx.render(&household, variant));
    Ok(())
}

fn read_form(ctx: &AppContext, variant: Variant) -> Result<FormInput, AppError> {
    let tr = &ctx.tr;
    println!("{}", tr.t(keys::SECTION_PERSONAL));
    let name = read_line(&tr.t(keys::PROMPT_NAME))?;
    let age = read_optional_u32(tr, &tr.t(keys::PROMPT_AGE))?;
    let city = read_line(&tr.t(keys::PROMPT_CITY))?;
    let area = read_line(&tr.t(keys::PROMPT_AREA))?;

    println!("{}", tr.t(keys::SECTION_HOUSE));
    println!("{}", tr.t(keys::PROMPT_DWELLING_KIND));
    println!("{}", tr.t(keys::DWELLING_KIND_OPTIONS));
    let kind = match read_line(&tr.t(keys::PROMPT_MENU_SELECT))?.trim() {
        "1" => Some(DwellingKind::Flat),
        "2" => Some(DwellingKind::Tenement),
        _ => None,
    };
    println!("{}", tr.t(keys::PROMPT_SIZE));
    println!("{}", tr.t(keys::SIZE_OPTIONS));
    let size = SizeCategory::parse(&read_line(&tr.t(keys::PROMPT_MENU_SELECT))?);

    let mut form = FormInput {
        personal: PersonalInfo {
            name: name.trim().to_string(),
            age,
            city: city.trim().to_string(),
            area: area.trim().to_string(),
        },
        dwelling_kind: kind,
        size,
        appliances: ApplianceFlags::default(),
        weekly_usage: None,
    };
    // 원본 폼처럼 주택 정보가 없으면 이후 항목은 묻지 않는다.
    if kind.is_none() || size.is_none() {
        return Ok(form);
    }

    println!("{}", tr.t(keys::SECTION_APPLIANCES));
    let appliances = ApplianceFlags {
        has_ac: read_yes_no(tr, keys::PROMPT_HAS_AC)?,
        has_fridge: read_yes_no(tr, keys::PROMPT_HAS_FRIDGE)?,
        has_washing_machine: read_yes_no(tr, keys::PROMPT_HAS_WASHING)?,
    };
    form.appliances = appliances;

    if variant == Variant::Weekly {
        form.weekly_usage = Some(read_weekly_usage(ctx, &appliances)?);
    }
    Ok(form)
}

fn read_weekly_usage(ctx: &AppContext, flags: &ApplianceFlags) -> Result<WeeklyUsage, AppError> {
    let tr = &ctx.tr;
    let mut usage = WeeklyUsage::from_defaults(&ctx.config.default_usage);
    println!("{}", tr.t(keys::SECTION_WEEKLY_USAGE));
    for day in Weekday::ALL {
        let day_label = report::day_name(tr, day);
        let vars = [("day", day_label.clone())];
        println!("{}", tr.tf(keys::PROMPT_DAY_HEADING, &vars));
        let entry = usage.day_mut(day);
        // 없는 가전은 0으로 둔다.
        entry.ac_hours = if flags.has_ac {
            read_u8_in_range(tr, &tr.tf(keys::PROMPT_AC_HOURS, &vars), 0, 24, entry.ac_hours)?
        } else {
            0
        };
        entry.washing_cycles = if flags.has_washing_machine {
            read_u8_in_range(
                tr,
                &tr.tf(keys::PROMPT_WASHING_CYCLES, &vars),
                0,
                5,
                entry.washing_cycles,
            )?
        } else {
            0
        };
        entry.light_hours =
            read_u8_in_range(tr, &tr.tf(keys::PROMPT_LIGHT_HOURS, &vars), 0, 24, entry.light_hours)?;
        entry.fan_hours =
            read_u8_in_range(tr, &tr.tf(keys::PROMPT_FAN_HOURS, &vars), 0, 24, entry.fan_hours)?;
    }
    Ok(usage)
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(ctx: &mut AppContext) -> Result<(), AppError> {
    let tr = ctx.tr.clone();
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!(
        "{}",
        tr.tf(
            keys::SETTINGS_CURRENT,
            &[
                ("lang", ctx.config.language.clone()),
                ("unit", ctx.config.energy_unit.symbol().to_string()),
            ]
        )
    );
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(&tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    match sel.trim() {
        "" => {}
        "1" => {
            let code = read_line(&tr.t(keys::SETTINGS_PROMPT_LANGUAGE))?;
            ctx.config.language = code.trim().to_string();
            ctx.reload_translator();
        }
        "2" => {
            println!("{}", tr.t(keys::SETTINGS_UNIT_OPTIONS));
            let unit = read_line(&tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
            let idx = unit.trim().parse::<usize>().ok().and_then(|n| n.checked_sub(1));
            match idx.and_then(|i| EnergyUnit::ALL.get(i)) {
                Some(u) => ctx.config.energy_unit = *u,
                None => println!("{}", tr.t(keys::SETTINGS_INVALID)),
            }
        }
        _ => println!("{}", tr.t(keys::SETTINGS_INVALID)),
    }
    Ok(())
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    let n = io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    if n == 0 {
        return Err(AppError::Io(io::Error::from(io::ErrorKind::UnexpectedEof)));
    }
    Ok(buf)
}

fn read_yes_no(tr: &Translator, key: &str) -> Result<bool, AppError> {
    let prompt = format!("{}{}", tr.t(key), tr.t(keys::PROMPT_YES_NO_HINT));
    let s = read_line(&prompt)?;
    let s = s.trim().to_lowercase();
    Ok(s == "y" || s == "yes" || s == "1" || s == tr.t(keys::YES).to_lowercase())
}

/// 빈 입력은 `None`.
fn read_optional_u32(tr: &Translator, prompt: &str) -> Result<Option<u32>, AppError> {
    loop {
        let s = read_line(prompt)?;
        let s = s.trim();
        if s.is_empty() {
            return Ok(None);
        }
        match s.parse::<u32>() {
            Ok(v) => return Ok(Some(v)),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

/// 빈 입력은 기본값. 범위를 벗어나면 다시 묻는다.
fn read_u8_in_range(
    tr: &Translator,
    label: &str,
    min: u8,
    max: u8,
    default: u8,
) -> Result<u8, AppError> {
    let prompt = format!(
        "{label}{}",
        tr.tf(keys::PROMPT_DEFAULT_HINT, &[("default", default.to_string())])
    );
    loop {
        let s = read_line(&prompt)?;
        let s = s.trim();
        if s.is_empty() {
            return Ok(default);
        }
        match s.parse::<u8>() {
            Ok(v) if (min..=max).contains(&v) => return Ok(v),
            Ok(_) => println!(
                "{}",
                tr.tf(
                    keys::ERROR_OUT_OF_RANGE,
                    &[("min", min.to_string()), ("max", max.to_string())]
                )
            ),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}
