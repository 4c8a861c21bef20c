//! 계산 결과를 사람이 읽는 텍스트로 만든다. CLI 출력과 보고서 파일 저장에 같이 쓴다.

use std::fmt::Write as _;

use crate::consumption::{
    daily_estimate, weekly_consumption, DailyEstimate, WeeklyConsumption, WeeklyUsage, Weekday,
};
use crate::forecast::{forecast_next_week, VariationSource, WeekForecast};
use crate::form::Household;
use crate::i18n::{keys, Translator};
use crate::insights::{self, Recommendation};
use crate::rates::Appliance;
use crate::units::{format_energy, EnergyUnit};

/// 막대 그래프 최대 폭(문자 수).
const BAR_WIDTH: usize = 30;

/// 간이 계산 결과 묶음.
#[derive(Debug, Clone)]
pub struct DailyReport {
    pub household: Household,
    pub estimate: DailyEstimate,
}

impl DailyReport {
    pub fn build(household: &Household) -> Self {
        Self {
            household: household.clone(),
            estimate: daily_estimate(&household.profile, &household.appliances),
        }
    }
}

/// 주간 계산 + 예측 + 권장 사항 묶음.
#[derive(Debug, Clone)]
pub struct WeeklyReport {
    pub household: Household,
    pub week: WeeklyConsumption,
    pub forecast: WeekForecast,
    pub recommendations: Vec<Recommendation>,
}

impl WeeklyReport {
    pub fn build<V: VariationSource + ?Sized>(
        household: &Household,
        usage: &WeeklyUsage,
        variation: &mut V,
    ) -> Self {
        let week = weekly_consumption(&household.profile, &household.appliances, usage);
        let forecast = forecast_next_week(&week, variation);
        let recommendations = insights::recommendations(&week, &household.appliances);
        Self {
            household: household.clone(),
            week,
            forecast,
            recommendations,
        }
    }
}

/// 최댓값 대비 길이의 막대.
pub fn bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 || value <= 0.0 {
        return String::new();
    }
    let n = ((value / max) * width as f64).round() as usize;
    "#".repeat(n.min(width))
}

pub fn day_name(tr: &Translator, day: Weekday) -> String {
    tr.t(day.i18n_key())
}

pub fn appliance_name(tr: &Translator, appliance: Appliance) -> String {
    tr.t(appliance.i18n_key())
}

/// 권장 사항 문장.
pub fn recommendation_text(tr: &Translator, rec: &Recommendation) -> String {
    match rec {
        Recommendation::ReducePeakDay(day) => {
            tr.tf(rec.i18n_key(), &[("day", day_name(tr, *day))])
        }
        _ => tr.t(rec.i18n_key()),
    }
}

/// 변화율 표시. 이번 주 합계가 0이면 "n/a".
pub fn percent_change_text(tr: &Translator, forecast: &WeekForecast) -> String {
    match forecast.percent_change() {
        Some(p) => format!("{p:.1}%"),
        None => tr.t(keys::NOT_AVAILABLE),
    }
}

fn summary_section(out: &mut String, tr: &Translator, h: &Household) {
    let _ = writeln!(
        out,
        "{}",
        tr.tf(keys::SUMMARY_HEADING, &[("name", h.personal.name.clone())])
    );
    let _ = writeln!(out, "- {}: {}", tr.t(keys::SUMMARY_LOCATION), h.location());
    let _ = writeln!(
        out,
        "- {}: {} {}",
        tr.t(keys::SUMMARY_PROPERTY),
        h.profile.size.label(),
        tr.t(h.kind.i18n_key())
    );
    let names: Vec<String> = insights::appliance_list(&h.appliances)
        .into_iter()
        .map(|a| appliance_name(tr, a))
        .collect();
    let _ = writeln!(out, "- {}: {}", tr.t(keys::SUMMARY_APPLIANCES), names.join(", "));
}

/// 간이 계산 보고서.
pub fn render_daily(tr: &Translator, report: &DailyReport, unit: EnergyUnit) -> String {
    let mut out = String::new();
    let e = &report.estimate;
    let _ = writeln!(out, "{}: {}", tr.t(keys::RESULT_DAILY), format_energy(e.daily_kwh, unit));
    let _ = writeln!(out, "{}: {}", tr.t(keys::RESULT_MONTHLY), format_energy(e.monthly_kwh, unit));
    let _ = writeln!(out, "{}: {}", tr.t(keys::RESULT_YEARLY), format_energy(e.yearly_kwh, unit));
    let _ = writeln!(out, "({})", tr.t(keys::RESULT_FLAT_RATE_NOTE));
    out.push('\n');
    summary_section(&mut out, tr, &report.household);
    out
}

/// 주간 분석 보고서.
pub fn render_weekly(tr: &Translator, report: &WeeklyReport, unit: EnergyUnit) -> String {
    let mut out = String::new();
    let week = &report.week;
    let fmt = |kwh: f64| format_energy(kwh, unit);

    let _ = writeln!(out, "{}: {}", tr.t(keys::RESULT_WEEKLY), fmt(week.total_kwh()));
    let _ = writeln!(out, "{}: {}", tr.t(keys::RESULT_AVERAGE_DAILY), fmt(week.average_daily_kwh()));
    let _ = writeln!(out, "{}: {}", tr.t(keys::RESULT_MONTHLY), fmt(week.monthly_kwh()));
    let _ = writeln!(out, "{}: {}", tr.t(keys::RESULT_YEARLY), fmt(week.yearly_kwh()));

    let _ = writeln!(out, "\n## {}", tr.t(keys::RESULT_DAILY_HEADING));
    let max = week.peak_day().1;
    for (day, kwh) in week.days() {
        let _ = writeln!(
            out,
            "{:<10} {:>12}  {}",
            day_name(tr, day),
            fmt(kwh),
            bar(kwh, max, BAR_WIDTH)
        );
    }

    let f = &report.forecast;
    let _ = writeln!(out, "\n## {}", tr.t(keys::FORECAST_HEADING));
    let _ = writeln!(out, "{}: {}", tr.t(keys::FORECAST_TOTAL), fmt(f.predicted_total_kwh));
    let _ = writeln!(out, "- {}: {}", tr.t(keys::FORECAST_WEEKDAY_AVG), fmt(f.weekday_avg_kwh));
    let _ = writeln!(out, "- {}: {}", tr.t(keys::FORECAST_WEEKEND_AVG), fmt(f.weekend_avg_kwh));
    let _ = writeln!(out, "- {}: {}", tr.t(keys::FORECAST_CHANGE), percent_change_text(tr, f));
    let _ = writeln!(
        out,
        "{:<10} {:>12} {:>12}",
        "",
        tr.t(keys::FORECAST_THIS_WEEK),
        tr.t(keys::FORECAST_NEXT_WEEK)
    );
    for (day, kwh) in week.days() {
        let _ = writeln!(
            out,
            "{:<10} {:>12} {:>12}",
            day_name(tr, day),
            fmt(kwh),
            fmt(f.day(day))
        );
    }

    out.push('\n');
    summary_section(&mut out, tr, &report.household);

    let _ = writeln!(out, "\n## {}", tr.t(keys::BREAKDOWN_HEADING));
    let total = week.total_kwh();
    for (appliance, kwh) in week.breakdown().iter() {
        let share = if total > 0.0 { kwh / total * 100.0 } else { 0.0 };
        let _ = writeln!(
            out,
            "{:<16} {:>12} {:>6.1}%",
            appliance_name(tr, appliance),
            fmt(kwh),
            share
        );
    }

    let (peak_day, peak) = week.peak_day();
    let (low_day, low) = week.low_day();
    let _ = writeln!(out, "\n## {}", tr.t(keys::INSIGHTS_HEADING));
    let _ = writeln!(out, "- {}: {} ({})", tr.t(keys::INSIGHTS_HIGHEST), day_name(tr, peak_day), fmt(peak));
    let _ = writeln!(out, "- {}: {} ({})", tr.t(keys::INSIGHTS_LOWEST), day_name(tr, low_day), fmt(low));
    let _ = writeln!(out, "- {}: {}", tr.t(keys::INSIGHTS_RANGE), fmt(week.range_kwh()));
    if !report.recommendations.is_empty() {
        let _ = writeln!(out, "\n## {}", tr.t(keys::RECOMMENDATIONS_HEADING));
        for rec in &report.recommendations {
            let _ = writeln!(out, "- {}", recommendation_text(tr, rec));
        }
    }

    let _ = writeln!(out, "\n## {}", tr.t(keys::TIPS_HEADING));
    for key in insights::TIP_KEYS {
        let _ = writeln!(out, "- {}", tr.t(key));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consumption::UsageDefaults;
    use crate::forecast::UniformVariation;
    use crate::form::FormInput;
    use crate::household::{ApplianceFlags, DwellingKind, PersonalInfo, SizeCategory};

    fn household() -> Household {
        FormInput {
            personal: PersonalInfo {
                name: "Asha".into(),
                age: Some(34),
                city: "Pune".into(),
                area: "Kothrud".into(),
            },
            dwelling_kind: Some(DwellingKind::Flat),
            size: Some(SizeCategory::TwoBhk),
            appliances: ApplianceFlags {
                has_ac: true,
                has_fridge: true,
                has_washing_machine: false,
            },
            weekly_usage: None,
        }
        .validate()
        .expect("complete form")
    }

    #[test]
    fn changing_unit_rerenders_the_same_forecast() {
        let h = household();
        let usage = WeeklyUsage::from_defaults(&UsageDefaults::default());
        let weekly = WeeklyReport::build(&h, &usage, &mut UniformVariation::from_seed(None));
        let before = weekly.forecast.clone();
        let tr = Translator::new("en");

        let kwh = render_weekly(&tr, &weekly, EnergyUnit::KilowattHour);
        let mj = render_weekly(&tr, &weekly, EnergyUnit::Megajoule);
        assert_eq!(weekly.forecast, before);
        for (unit, text) in [(EnergyUnit::KilowattHour, &kwh), (EnergyUnit::Megajoule, &mj)] {
            let total = format!(
                "Next Week Prediction: {}",
                format_energy(before.predicted_total_kwh, unit)
            );
            assert!(text.contains(&total), "{total}\n{text}");
            for (_, kwh) in before.days() {
                assert!(text.contains(&format_energy(kwh, unit)), "{text}");
            }
        }
        let change = format!("Predicted Change: {}", percent_change_text(&tr, &before));
        assert!(kwh.contains(&change) && mj.contains(&change));
    }

    #[test]
    fn bar_scales_to_width() {
        assert_eq!(bar(5.0, 10.0, 10), "#####");
        assert_eq!(bar(10.0, 10.0, 10).len(), 10);
        assert_eq!(bar(0.0, 10.0, 10), "");
        assert_eq!(bar(1.0, 0.0, 10), "");
    }
}
