#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use clap::Parser;
use eframe::{egui, App, Frame};
use household_energy_calculator::{
    app::{self, AppContext, Variant},
    config,
    consumption::{WeeklyUsage, Weekday},
    form::{FormInput, Household},
    household::{ApplianceFlags, DwellingKind, PersonalInfo, SizeCategory},
    i18n::{keys, Translator},
    insights, logging,
    report::{self, DailyReport, WeeklyReport},
    units::{format_energy, EnergyUnit},
};
use image::GenericImageView;
use rfd::FileDialog;
use std::{fs, path::Path, path::PathBuf};

/// 가정용 전력 소비 계산기 (GUI)
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// 언어 코드 (auto/ko/en)
    #[arg(short = 'L', long, default_value = "auto")]
    lang: String,
    /// 설정 파일 경로
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,
}

fn main() -> Result<(), eframe::Error> {
    let args = Args::parse();
    let app_cfg = match config::load_or_default(&args.config) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Config error: {e}");
            config::Config::default()
        }
    };
    logging::init(&app_cfg.log_filter);
    let ctx = AppContext::new(app_cfg, args.config, &args.lang);
    let title = ctx.tr.t(keys::APP_TITLE);

    let mut viewport = egui::ViewportBuilder::default().with_inner_size([1000.0, 780.0]);
    if let Some(icon) = load_app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| {
            if let Err(e) = setup_fonts(&cc.egui_ctx) {
                tracing::warn!("font setup: {e}");
            }
            Box::new(GuiApp::new(ctx))
        }),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png", "../assets/icon.png"];
    let path = search.iter().find(|p| Path::new(*p).exists())?;
    let bytes = fs::read(path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

/// 바이너리 폰트 바이트를 기본 폰트 앞에 등록한다.
fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    let font_name = name.to_string();
    fonts
        .font_data
        .insert(font_name.clone(), egui::FontData::from_owned(bytes));
    fonts
        .families
        .entry(egui::FontFamily::Proportional)
        .or_default()
        .insert(0, font_name.clone());
    fonts
        .families
        .entry(egui::FontFamily::Monospace)
        .or_default()
        .insert(0, font_name);
    ctx.set_fonts(fonts);
}

/// 한글 표시용 시스템 폰트를 찾아 적용한다. 못 찾으면 기본 폰트를 유지한다.
fn setup_fonts(ctx: &egui::Context) -> Result<(), String> {
    let mut candidates: Vec<PathBuf> = vec![
        PathBuf::from("assets/fonts/NanumGothic.ttf"),
        PathBuf::from("/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc"),
        PathBuf::from("/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc"),
        PathBuf::from("/usr/share/fonts/truetype/nanum/NanumGothic.ttf"),
        PathBuf::from("/System/Library/Fonts/AppleSDGothicNeo.ttc"),
    ];
    if let Some(windir) = std::env::var_os("WINDIR") {
        let fonts = Path::new(&windir).join("Fonts");
        candidates.insert(0, fonts.join("malgun.ttf"));
        candidates.insert(1, fonts.join("gulim.ttc"));
    }
    for p in candidates {
        if p.exists() {
            let bytes = fs::read(&p)
                .map_err(|e| format!("Failed to read system font ({}): {e}", p.display()))?;
            apply_font_bytes(ctx, bytes, "cjk_font");
            return Ok(());
        }
    }
    Err("CJK font not found; Korean text may not render.".into())
}

/// 제목 + 큰 값 형식의 지표.
fn metric(ui: &mut egui::Ui, label: &str, value: String) {
    ui.vertical(|ui| {
        ui.small(label);
        ui.heading(value);
    });
}

enum Outcome {
    Daily(DailyReport),
    Weekly(WeeklyReport),
}

struct GuiApp {
    ctx: AppContext,
    name: String,
    age: u32,
    city: String,
    area: String,
    dwelling_kind: Option<DwellingKind>,
    size: Option<SizeCategory>,
    appliances: ApplianceFlags,
    usage: WeeklyUsage,
    selected_day: Weekday,
    variant: Variant,
    outcome: Option<Outcome>,
    report_text: Option<String>,
    error: Option<String>,
    status: Option<String>,
}

impl GuiApp {
    fn new(ctx: AppContext) -> Self {
        let usage = WeeklyUsage::from_defaults(&ctx.config.default_usage);
        Self {
            ctx,
            name: String::new(),
            age: 25,
            city: String::new(),
            area: String::new(),
            dwelling_kind: None,
            size: None,
            appliances: ApplianceFlags::default(),
            usage,
            selected_day: Weekday::Monday,
            variant: Variant::Weekly,
            outcome: None,
            report_text: None,
            error: None,
            status: None,
        }
    }

    fn current_form(&self) -> FormInput {
        FormInput {
            personal: PersonalInfo {
                name: self.name.clone(),
                age: Some(self.age),
                city: self.city.clone(),
                area: self.area.clone(),
            },
            dwelling_kind: self.dwelling_kind,
            size: self.size,
            appliances: self.appliances,
            weekly_usage: (self.variant == Variant::Weekly).then_some(self.usage),
        }
    }

    fn apply_form(&mut self, form: FormInput) {
        self.name = form.personal.name;
        self.age = form.personal.age.filter(|a| *a > 0).unwrap_or(25);
        self.city = form.personal.city;
        self.area = form.personal.area;
        self.dwelling_kind = form.dwelling_kind;
        self.size = form.size;
        self.appliances = form.appliances;
        if let Some(usage) = form.weekly_usage {
            self.usage = usage.clamped();
        }
        self.outcome = None;
        self.report_text = None;
        self.error = None;
    }

    fn calculate(&mut self) {
        let tr = self.ctx.tr.clone();
        let household = match self.current_form().validate() {
            Ok(h) => h,
            Err(err) => {
                tracing::info!(%err, "calculation skipped");
                self.outcome = None;
                self.report_text = None;
                self.error = Some(tr.t(keys::ERROR_INCOMPLETE_INPUT));
                return;
            }
        };
        self.error = None;
        let outcome = match self.variant {
            Variant::Simple => Outcome::Daily(DailyReport::build(&household)),
            Variant::Weekly => {
                let usage = household.weekly_usage.unwrap_or(self.usage);
                let mut variation = self.ctx.variation();
                Outcome::Weekly(WeeklyReport::build(&household, &usage, &mut variation))
            }
        };
        self.outcome = Some(outcome);
        self.render_report();
    }

    /// 마지막 계산 결과를 현재 언어/단위로 다시 쓴다. 다시 계산하지 않는다.
    fn render_report(&mut self) {
        let tr = &self.ctx.tr;
        let unit = self.ctx.config.energy_unit;
        self.report_text = self.outcome.as_ref().map(|outcome| match outcome {
            Outcome::Daily(r) => report::render_daily(tr, r, unit),
            Outcome::Weekly(r) => report::render_weekly(tr, r, unit),
        });
    }

    fn save_config(&mut self) {
        if let Err(e) = self.ctx.config.save(&self.ctx.config_path) {
            self.status = Some(format!("{}: {e}", self.ctx.tr.t(keys::ERROR_PREFIX)));
        }
    }

    fn ui_top_bar(&mut self, ui: &mut egui::Ui) {
        let tr = self.ctx.tr.clone();
        ui.horizontal(|ui| {
            ui.heading(tr.t(keys::APP_TITLE));
            ui.separator();

            let mut lang = self.ctx.config.language.clone();
            egui::ComboBox::from_id_source("lang")
                .selected_text(lang.clone())
                .show_ui(ui, |ui| {
                    for code in ["auto", "ko", "en"] {
                        ui.selectable_value(&mut lang, code.to_string(), code);
                    }
                });
            if lang != self.ctx.config.language {
                self.ctx.config.language = lang;
                self.ctx.reload_translator();
                self.save_config();
                self.render_report();
            }

            let mut unit = self.ctx.config.energy_unit;
            egui::ComboBox::from_id_source("energy_unit")
                .selected_text(unit.symbol())
                .show_ui(ui, |ui| {
                    for u in EnergyUnit::ALL {
                        ui.selectable_value(&mut unit, u, u.symbol());
                    }
                });
            if unit != self.ctx.config.energy_unit {
                self.ctx.config.energy_unit = unit;
                self.save_config();
                self.render_report();
            }

            ui.separator();
            if ui.button(tr.t(keys::GUI_LOAD_HOUSEHOLD)).clicked() {
                if let Some(path) = FileDialog::new().add_filter("TOML", &["toml"]).pick_file() {
                    match app::load_household(&path) {
                        Ok(form) => {
                            self.apply_form(form);
                            self.status = Some(tr.tf(
                                keys::HOUSEHOLD_LOADED,
                                &[("path", path.display().to_string())],
                            ));
                        }
                        Err(e) => self.status = Some(format!("{}: {e}", tr.t(keys::ERROR_PREFIX))),
                    }
                }
            }
            if ui.button(tr.t(keys::GUI_SAVE_HOUSEHOLD)).clicked() {
                if let Some(path) = FileDialog::new()
                    .add_filter("TOML", &["toml"])
                    .set_file_name("household.toml")
                    .save_file()
                {
                    let saved = toml::to_string_pretty(&self.current_form())
                        .map_err(|e| e.to_string())
                        .and_then(|text| fs::write(&path, text).map_err(|e| e.to_string()));
                    if let Err(e) = saved {
                        self.status = Some(format!("{}: {e}", tr.t(keys::ERROR_PREFIX)));
                    }
                }
            }
            let can_save = self.report_text.is_some();
            if ui
                .add_enabled(can_save, egui::Button::new(tr.t(keys::GUI_SAVE_REPORT)))
                .clicked()
            {
                if let (Some(text), Some(path)) = (
                    self.report_text.as_deref(),
                    FileDialog::new()
                        .add_filter("Text", &["txt"])
                        .set_file_name("energy_report.txt")
                        .save_file(),
                ) {
                    self.status = Some(match app::save_report(&path, text) {
                        Ok(()) => tr.tf(keys::REPORT_SAVED, &[("path", path.display().to_string())]),
                        Err(e) => format!("{}: {e}", tr.t(keys::ERROR_PREFIX)),
                    });
                }
            }
        });
        if let Some(status) = &self.status {
            ui.small(status);
        }
    }

    fn ui_form(&mut self, ui: &mut egui::Ui) {
        let tr = self.ctx.tr.clone();

        ui.heading(tr.t(keys::GUI_SECTION_PERSONAL));
        egui::Grid::new("personal_grid")
            .num_columns(2)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                ui.label(tr.t(keys::GUI_LABEL_NAME));
                ui.text_edit_singleline(&mut self.name);
                ui.end_row();
                ui.label(tr.t(keys::GUI_LABEL_AGE));
                ui.add(egui::DragValue::new(&mut self.age).clamp_range(1..=120));
                ui.end_row();
                ui.label(tr.t(keys::GUI_LABEL_CITY));
                ui.text_edit_singleline(&mut self.city);
                ui.end_row();
                ui.label(tr.t(keys::GUI_LABEL_AREA));
                ui.text_edit_singleline(&mut self.area);
                ui.end_row();
            });

        ui.add_space(8.0);
        ui.heading(tr.t(keys::GUI_SECTION_HOUSE));
        let placeholder = tr.t(keys::PLACEHOLDER_SELECT);
        ui.horizontal(|ui| {
            ui.label(tr.t(keys::PROMPT_DWELLING_KIND));
            egui::ComboBox::from_id_source("dwelling_kind")
                .selected_text(
                    self.dwelling_kind
                        .map(|k| tr.t(k.i18n_key()))
                        .unwrap_or_else(|| placeholder.clone()),
                )
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut self.dwelling_kind, None, placeholder.clone());
                    for kind in DwellingKind::ALL {
                        ui.selectable_value(&mut self.dwelling_kind, Some(kind), tr.t(kind.i18n_key()));
                    }
                });
        });
        if self.dwelling_kind.is_none() {
            return;
        }
        ui.horizontal(|ui| {
            ui.label(tr.t(keys::PROMPT_SIZE));
            egui::ComboBox::from_id_source("size_category")
                .selected_text(
                    self.size
                        .map(|s| s.label().to_string())
                        .unwrap_or_else(|| placeholder.clone()),
                )
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut self.size, None, placeholder.clone());
                    for size in SizeCategory::ALL {
                        ui.selectable_value(&mut self.size, Some(size), size.label());
                    }
                });
        });
        if self.size.is_none() {
            return;
        }

        ui.add_space(8.0);
        ui.heading(tr.t(keys::GUI_SECTION_APPLIANCES));
        let (yes, no) = (tr.t(keys::YES), tr.t(keys::NO));
        ui.columns(3, |cols| {
            for (col, key, flag) in [
                (0, keys::PROMPT_HAS_AC, &mut self.appliances.has_ac),
                (1, keys::PROMPT_HAS_FRIDGE, &mut self.appliances.has_fridge),
                (2, keys::PROMPT_HAS_WASHING, &mut self.appliances.has_washing_machine),
            ] {
                let ui = &mut cols[col];
                ui.label(tr.t(key));
                ui.radio_value(flag, false, no.clone());
                ui.radio_value(flag, true, yes.clone());
            }
        });

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            ui.radio_value(&mut self.variant, Variant::Simple, tr.t(keys::GUI_VARIANT_SIMPLE));
            ui.radio_value(&mut self.variant, Variant::Weekly, tr.t(keys::GUI_VARIANT_WEEKLY));
        });
        if self.variant == Variant::Weekly {
            self.ui_weekly_usage(ui, &tr);
        }
    }

    fn ui_weekly_usage(&mut self, ui: &mut egui::Ui, tr: &Translator) {
        ui.add_space(8.0);
        ui.heading(tr.t(keys::GUI_SECTION_WEEKLY_USAGE));
        ui.horizontal_wrapped(|ui| {
            for day in Weekday::ALL {
                ui.selectable_value(&mut self.selected_day, day, report::day_name(tr, day));
            }
        });
        let day = self.selected_day;
        let vars = [("day", report::day_name(tr, day))];
        let flags = self.appliances;
        let entry = self.usage.day_mut(day);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            if flags.has_ac {
                ui.add(egui::Slider::new(&mut entry.ac_hours, 0..=24).text(tr.tf(keys::PROMPT_AC_HOURS, &vars)));
            }
            if flags.has_washing_machine {
                ui.add(
                    egui::Slider::new(&mut entry.washing_cycles, 0..=5)
                        .text(tr.tf(keys::PROMPT_WASHING_CYCLES, &vars)),
                );
            }
            ui.add(egui::Slider::new(&mut entry.light_hours, 0..=24).text(tr.tf(keys::PROMPT_LIGHT_HOURS, &vars)));
            ui.add(egui::Slider::new(&mut entry.fan_hours, 0..=24).text(tr.tf(keys::PROMPT_FAN_HOURS, &vars)));
        });
    }

    fn ui_results(&mut self, ui: &mut egui::Ui) {
        let tr = self.ctx.tr.clone();
        if let Some(err) = &self.error {
            ui.colored_label(ui.visuals().error_fg_color, err);
        }
        let unit = self.ctx.config.energy_unit;
        let fmt = |kwh: f64| format_energy(kwh, unit);
        match &self.outcome {
            None => {}
            Some(Outcome::Daily(r)) => {
                let e = &r.estimate;
                ui.separator();
                ui.columns(3, |cols| {
                    metric(&mut cols[0], &tr.t(keys::RESULT_DAILY), fmt(e.daily_kwh));
                    metric(&mut cols[1], &tr.t(keys::RESULT_MONTHLY), fmt(e.monthly_kwh));
                    metric(&mut cols[2], &tr.t(keys::RESULT_YEARLY), fmt(e.yearly_kwh));
                });
                ui.small(tr.t(keys::RESULT_FLAT_RATE_NOTE));
                ui_summary(ui, &tr, &r.household);
            }
            Some(Outcome::Weekly(r)) => ui_weekly_results(ui, &tr, r, &fmt),
        }
    }
}

fn ui_summary(ui: &mut egui::Ui, tr: &Translator, h: &Household) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.strong(tr.tf(keys::SUMMARY_HEADING, &[("name", h.personal.name.clone())]));
        ui.label(format!("{}: {}", tr.t(keys::SUMMARY_LOCATION), h.location()));
        ui.label(format!(
            "{}: {} {}",
            tr.t(keys::SUMMARY_PROPERTY),
            h.profile.size.label(),
            tr.t(h.kind.i18n_key())
        ));
        let names: Vec<String> = insights::appliance_list(&h.appliances)
            .into_iter()
            .map(|a| report::appliance_name(tr, a))
            .collect();
        ui.label(format!("{}: {}", tr.t(keys::SUMMARY_APPLIANCES), names.join(", ")));
    });
}

fn ui_weekly_results(
    ui: &mut egui::Ui,
    tr: &Translator,
    r: &WeeklyReport,
    fmt: &dyn Fn(f64) -> String,
) {
    let week = &r.week;
    ui.separator();
    ui.columns(4, |cols| {
        metric(&mut cols[0], &tr.t(keys::RESULT_WEEKLY), fmt(week.total_kwh()));
        metric(&mut cols[1], &tr.t(keys::RESULT_AVERAGE_DAILY), fmt(week.average_daily_kwh()));
        metric(&mut cols[2], &tr.t(keys::RESULT_MONTHLY), fmt(week.monthly_kwh()));
        metric(&mut cols[3], &tr.t(keys::RESULT_YEARLY), fmt(week.yearly_kwh()));
    });

    ui.add_space(6.0);
    ui.strong(tr.t(keys::RESULT_DAILY_HEADING));
    let f = &r.forecast;
    let max = week.peak_day().1.max(f.days().map(|(_, v)| v).fold(0.0, f64::max));
    let frac = |v: f64| if max > 0.0 { (v / max) as f32 } else { 0.0 };
    egui::Grid::new("daily_grid")
        .num_columns(3)
        .spacing([12.0, 4.0])
        .show(ui, |ui| {
            ui.label("");
            ui.strong(tr.t(keys::FORECAST_THIS_WEEK));
            ui.strong(tr.t(keys::FORECAST_NEXT_WEEK));
            ui.end_row();
            for (day, kwh) in week.days() {
                ui.label(report::day_name(tr, day));
                ui.add(egui::ProgressBar::new(frac(kwh)).desired_width(220.0).text(fmt(kwh)));
                ui.add(egui::ProgressBar::new(frac(f.day(day))).desired_width(220.0).text(fmt(f.day(day))));
                ui.end_row();
            }
        });

    ui.add_space(6.0);
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.strong(format!("{}: {}", tr.t(keys::FORECAST_TOTAL), fmt(f.predicted_total_kwh)));
        ui.label(format!("{}: {}", tr.t(keys::FORECAST_WEEKDAY_AVG), fmt(f.weekday_avg_kwh)));
        ui.label(format!("{}: {}", tr.t(keys::FORECAST_WEEKEND_AVG), fmt(f.weekend_avg_kwh)));
        ui.label(format!("{}: {}", tr.t(keys::FORECAST_CHANGE), report::percent_change_text(tr, f)));
    });

    ui_summary(ui, tr, &r.household);

    ui.add_space(6.0);
    ui.strong(tr.t(keys::BREAKDOWN_HEADING));
    let total = week.total_kwh();
    egui::Grid::new("breakdown_grid")
        .num_columns(2)
        .spacing([12.0, 4.0])
        .show(ui, |ui| {
            for (appliance, kwh) in week.breakdown().iter() {
                let share = if total > 0.0 { kwh / total } else { 0.0 };
                ui.label(report::appliance_name(tr, appliance));
                ui.add(
                    egui::ProgressBar::new(share as f32)
                        .desired_width(260.0)
                        .text(format!("{} ({:.1}%)", fmt(kwh), share * 100.0)),
                );
                ui.end_row();
            }
        });

    ui.add_space(6.0);
    let (peak_day, peak) = week.peak_day();
    let (low_day, low) = week.low_day();
    ui.columns(2, |cols| {
        cols[0].strong(tr.t(keys::INSIGHTS_HEADING));
        cols[0].label(format!(
            "{}: {} ({})",
            tr.t(keys::INSIGHTS_HIGHEST),
            report::day_name(tr, peak_day),
            fmt(peak)
        ));
        cols[0].label(format!(
            "{}: {} ({})",
            tr.t(keys::INSIGHTS_LOWEST),
            report::day_name(tr, low_day),
            fmt(low)
        ));
        cols[0].label(format!("{}: {}", tr.t(keys::INSIGHTS_RANGE), fmt(week.range_kwh())));
        cols[1].strong(tr.t(keys::RECOMMENDATIONS_HEADING));
        for rec in &r.recommendations {
            cols[1].label(format!("• {}", report::recommendation_text(tr, rec)));
        }
    });

    ui.add_space(6.0);
    ui.collapsing(tr.t(keys::TIPS_HEADING), |ui| {
        for key in insights::TIP_KEYS {
            ui.label(format!("• {}", tr.t(key)));
        }
    });
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            self.ui_top_bar(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.small(self.ctx.tr.t(keys::APP_SUBTITLE));
                ui.add_space(6.0);
                self.ui_form(ui);
                ui.add_space(10.0);
                let label = self.ctx.tr.t(keys::BUTTON_CALCULATE);
                if ui
                    .add_sized([ui.available_width(), 36.0], egui::Button::new(label))
                    .clicked()
                {
                    self.calculate();
                }
                self.ui_results(ui);
            });
        });
    }
}
