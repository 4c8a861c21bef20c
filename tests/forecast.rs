//! 다음 주 예측과 권장 사항 검증.
use household_energy_calculator::{
    consumption::{weekly_consumption, DailyUsage, UsageDefaults, WeeklyUsage, Weekday},
    forecast::{forecast_next_week, FixedVariation, UniformVariation, VariationSource},
    household::{ApplianceFlags, DwellingProfile, SizeCategory},
    insights::{recommendations, Recommendation},
};

fn assert_close(label: &str, actual: f64, expected: f64, tol: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tol,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.2e}, tol {tol})"
    );
}

/// 평일/주말 패턴이 다른 주.
fn split_week() -> WeeklyUsage {
    let days = Weekday::ALL
        .iter()
        .map(|&day| {
            let (ac, light) = if day.is_weekend() { (14, 18) } else { (4, 8) };
            DailyUsage {
                day,
                ac_hours: ac,
                washing_cycles: u8::from(day == Weekday::Sunday),
                light_hours: light,
                fan_hours: 12,
            }
        })
        .collect();
    WeeklyUsage::from_days(days).expect("seven distinct days")
}

fn flags() -> ApplianceFlags {
    ApplianceFlags {
        has_ac: true,
        has_fridge: true,
        has_washing_machine: true,
    }
}

#[test]
fn bucket_averages_split_weekday_and_weekend() {
    let week = weekly_consumption(&DwellingProfile::new(SizeCategory::TwoBhk), &flags(), &split_week());
    let f = forecast_next_week(&week, &mut FixedVariation(0.0));
    let weekday: f64 = Weekday::ALL[..5].iter().map(|&d| week.day(d)).sum::<f64>() / 5.0;
    let weekend = (week.day(Weekday::Saturday) + week.day(Weekday::Sunday)) / 2.0;
    assert_close("weekday avg", f.weekday_avg_kwh, weekday, 1e-9);
    assert_close("weekend avg", f.weekend_avg_kwh, weekend, 1e-9);
    assert_close("no variation", f.predicted_total_kwh, 5.0 * weekday + 2.0 * weekend, 1e-9);
    assert_close("baseline", f.baseline_total_kwh, week.total_kwh(), 1e-12);
}

#[test]
fn fixed_variation_scales_every_day() {
    let week = weekly_consumption(&DwellingProfile::new(SizeCategory::ThreeBhk), &flags(), &split_week());
    let f = forecast_next_week(&week, &mut FixedVariation(0.05));
    for (day, kwh) in f.days() {
        assert_close(day.name(), kwh, f.bucket_avg(day) * 1.05, 1e-9);
    }
}

#[test]
fn out_of_band_variation_is_clamped() {
    let week = weekly_consumption(
        &DwellingProfile::new(SizeCategory::OneBhk),
        &flags(),
        &WeeklyUsage::from_defaults(&UsageDefaults::default()),
    );
    let f = forecast_next_week(&week, &mut FixedVariation(-0.5));
    for (day, kwh) in f.days() {
        assert_close(day.name(), kwh, f.bucket_avg(day) * 0.95, 1e-9);
    }
}

#[test]
fn random_forecast_stays_within_five_percent() {
    let week = weekly_consumption(&DwellingProfile::new(SizeCategory::TwoBhk), &flags(), &split_week());
    let total = week.total_kwh();
    for seed in 0..200u64 {
        let mut src = UniformVariation::from_seed(Some(seed));
        let f = forecast_next_week(&week, &mut src);
        for (day, kwh) in f.days() {
            let avg = f.bucket_avg(day);
            assert!(
                kwh >= avg * 0.95 - 1e-9 && kwh <= avg * 1.05 + 1e-9,
                "seed {seed} {day:?}: {kwh} vs avg {avg}"
            );
        }
        // 버킷 평균의 합은 이번 주 합계와 같다.
        assert!(f.predicted_total_kwh >= total * 0.95 - 1e-9, "seed {seed}");
        assert!(f.predicted_total_kwh <= total * 1.05 + 1e-9, "seed {seed}");
        let p = f.percent_change().expect("non-zero week");
        assert!(p.abs() <= 5.0 + 1e-9, "seed {seed}: {p}");
    }
}

#[test]
fn same_seed_same_forecast() {
    let week = weekly_consumption(&DwellingProfile::new(SizeCategory::TwoBhk), &flags(), &split_week());
    let a = forecast_next_week(&week, &mut UniformVariation::from_seed(Some(2024)));
    let b = forecast_next_week(&week, &mut UniformVariation::from_seed(Some(2024)));
    assert_eq!(a, b);
}

#[test]
fn trait_object_source_is_accepted() {
    let week = weekly_consumption(&DwellingProfile::new(SizeCategory::OneBhk), &flags(), &split_week());
    let mut fixed = FixedVariation(0.01);
    let src: &mut dyn VariationSource = &mut fixed;
    let f = forecast_next_week(&week, src);
    assert_close("monday", f.day(Weekday::Monday), f.weekday_avg_kwh * 1.01, 1e-9);
}

#[test]
fn zero_week_has_no_percent_change() {
    let zero = WeeklyUsage::from_defaults(&UsageDefaults {
        ac_hours: 0,
        washing_cycles: 0,
        light_hours: 0,
        fan_hours: 0,
    });
    let week = weekly_consumption(
        &DwellingProfile::new(SizeCategory::OneBhk),
        &ApplianceFlags::default(),
        &zero,
    );
    let f = forecast_next_week(&week, &mut UniformVariation::from_seed(Some(1)));
    assert_eq!(f.predicted_total_kwh, 0.0);
    assert_eq!(f.percent_change(), None);
    assert!(recommendations(&week, &ApplianceFlags::default()).is_empty());
}

#[test]
fn recommendations_follow_thresholds() {
    // 3BHK, 토요일만 AC 24시간: 최대 요일이 평균의 1.3배를 넘고 AC 비중도 크다.
    let days = Weekday::ALL
        .iter()
        .map(|&day| DailyUsage {
            day,
            ac_hours: if day == Weekday::Saturday { 24 } else { 2 },
            washing_cycles: 0,
            light_hours: 2,
            fan_hours: 2,
        })
        .collect();
    let usage = WeeklyUsage::from_days(days).expect("week");
    let only_ac = ApplianceFlags {
        has_ac: true,
        ..Default::default()
    };
    let week = weekly_consumption(&DwellingProfile::new(SizeCategory::ThreeBhk), &only_ac, &usage);
    let recs = recommendations(&week, &only_ac);
    assert!(recs.contains(&Recommendation::ReducePeakDay(Weekday::Saturday)), "{recs:?}");
    assert!(recs.contains(&Recommendation::AcDominant), "{recs:?}");
    assert!(!recs.contains(&Recommendation::HighWeeklyConsumption));

    // 모든 가전 + 긴 사용시간이면 주간 100 kWh를 넘는다.
    let heavy = WeeklyUsage::from_defaults(&UsageDefaults {
        ac_hours: 24,
        washing_cycles: 2,
        light_hours: 24,
        fan_hours: 24,
    });
    let week = weekly_consumption(&DwellingProfile::new(SizeCategory::ThreeBhk), &flags(), &heavy);
    assert!(week.total_kwh() > 100.0);
    let recs = recommendations(&week, &flags());
    assert!(recs.contains(&Recommendation::HighWeeklyConsumption));
    assert!(!recs.iter().any(|r| matches!(r, Recommendation::ReducePeakDay(_))));
}
