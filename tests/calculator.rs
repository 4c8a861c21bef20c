//! 간이/주간 소비량 계산 회귀 테스트.
use household_energy_calculator::{
    consumption::{
        daily_estimate, day_consumption, weekly_consumption, DailyUsage, UsageDefaults,
        WeeklyUsage, Weekday,
    },
    household::{ApplianceFlags, DwellingProfile, SizeCategory},
    rates::Appliance,
};

fn assert_close(label: &str, actual: f64, expected: f64, tol: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tol,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.2e}, tol {tol})"
    );
}

fn all_appliances() -> ApplianceFlags {
    ApplianceFlags {
        has_ac: true,
        has_fridge: true,
        has_washing_machine: true,
    }
}

fn week_with(f: impl Fn(Weekday) -> (u8, u8, u8, u8)) -> WeeklyUsage {
    let days = Weekday::ALL
        .iter()
        .map(|&day| {
            let (ac, wash, light, fan) = f(day);
            DailyUsage {
                day,
                ac_hours: ac,
                washing_cycles: wash,
                light_hours: light,
                fan_hours: fan,
            }
        })
        .collect();
    WeeklyUsage::from_days(days).expect("seven distinct days")
}

#[test]
fn simple_two_bhk_ac_and_fridge() {
    let profile = DwellingProfile::new(SizeCategory::TwoBhk);
    let flags = ApplianceFlags {
        has_ac: true,
        has_fridge: true,
        has_washing_machine: false,
    };
    let e = daily_estimate(&profile, &flags);
    assert_close("daily", e.daily_kwh, 10.6, 1e-9);
    assert_close("monthly", e.monthly_kwh, 318.0, 1e-9);
    assert_close("yearly", e.yearly_kwh, 3869.0, 1e-9);
}

#[test]
fn simple_variant_matches_linear_formula() {
    for size in SizeCategory::ALL {
        let n = f64::from(size.fixture_count());
        for mask in 0..8u8 {
            let flags = ApplianceFlags {
                has_ac: mask & 1 != 0,
                has_fridge: mask & 2 != 0,
                has_washing_machine: mask & 4 != 0,
            };
            let expected = 0.4 * n
                + 0.8 * n
                + if flags.has_ac { 3.0 } else { 0.0 }
                + if flags.has_fridge { 4.0 } else { 0.0 }
                + if flags.has_washing_machine { 2.0 } else { 0.0 };
            let e = daily_estimate(&DwellingProfile::new(size), &flags);
            assert_close(size.label(), e.daily_kwh, expected, 1e-9);
        }
    }
}

#[test]
fn simple_variant_is_repeatable() {
    let profile = DwellingProfile::new(SizeCategory::ThreeBhk);
    let a = daily_estimate(&profile, &all_appliances());
    let b = daily_estimate(&profile, &all_appliances());
    assert_eq!(a.daily_kwh.to_bits(), b.daily_kwh.to_bits());
    assert_eq!(a, b);
}

#[test]
fn weekly_single_day_three_bhk() {
    // 0.4*4*12/24 + 0.8*4*16/24 + 3*8/24 + 4 + 2*2
    let usage = DailyUsage {
        day: Weekday::Monday,
        ac_hours: 8,
        washing_cycles: 2,
        light_hours: 12,
        fan_hours: 16,
    };
    let kwh = day_consumption(
        &DwellingProfile::new(SizeCategory::ThreeBhk),
        &all_appliances(),
        &usage,
    );
    assert_close("day", kwh, 0.8 + 3.2 * 16.0 / 24.0 + 1.0 + 4.0 + 4.0, 1e-9);
    assert_close("day rounded", (kwh * 1e4).round() / 1e4, 11.9333, 1e-9);
}

#[test]
fn zero_usage_without_appliances_is_zero() {
    for size in SizeCategory::ALL {
        let profile = DwellingProfile::new(size);
        let week = weekly_consumption(&profile, &ApplianceFlags::default(), &week_with(|_| (0, 0, 0, 0)));
        for (day, kwh) in week.days() {
            assert_eq!(kwh, 0.0, "{day:?}");
        }
        assert_eq!(week.total_kwh(), 0.0);
    }
}

#[test]
fn fridge_ignores_hours_and_washing_counts_cycles() {
    let profile = DwellingProfile::new(SizeCategory::OneBhk);
    let flags = ApplianceFlags {
        has_ac: false,
        has_fridge: true,
        has_washing_machine: true,
    };
    let week = weekly_consumption(&profile, &flags, &week_with(|_| (24, 3, 0, 0)));
    // AC 미보유면 시간이 있어도 0, 냉장고 4 + 세탁 2*3
    assert_close("day", week.day(Weekday::Wednesday), 10.0, 1e-12);
    assert_close("total", week.total_kwh(), 70.0, 1e-9);
}

#[test]
fn aggregates_follow_weekly_total() {
    let profile = DwellingProfile::new(SizeCategory::TwoBhk);
    let usage = WeeklyUsage::from_defaults(&UsageDefaults::default());
    let week = weekly_consumption(&profile, &all_appliances(), &usage);
    let total = week.total_kwh();
    assert_close("sum", week.days().map(|(_, v)| v).sum::<f64>(), total, 1e-9);
    assert_close("avg", week.average_daily_kwh(), total / 7.0, 1e-12);
    assert_close("monthly", week.monthly_kwh(), total * 4.33, 1e-9);
    assert_close("yearly", week.yearly_kwh(), total * 52.0, 1e-9);
}

#[test]
fn breakdown_reconciles_with_total() {
    let patterns: [fn(Weekday) -> (u8, u8, u8, u8); 3] = [
        |_| (8, 0, 12, 16),
        |d| (d.index() as u8 * 3, d.index() as u8 % 5, 24 - d.index() as u8, 7),
        |d| if d.is_weekend() { (14, 2, 18, 20) } else { (2, 0, 6, 8) },
    ];
    for size in SizeCategory::ALL {
        for pattern in patterns {
            let week = weekly_consumption(
                &DwellingProfile::new(size),
                &all_appliances(),
                &week_with(pattern),
            );
            assert_close("breakdown", week.breakdown().total(), week.total_kwh(), 1e-9);
            assert_eq!(week.breakdown().iter().count(), 5);
            assert_close(
                "fridge",
                week.breakdown().get(Appliance::Fridge).unwrap_or_default(),
                28.0,
                1e-9,
            );
        }
    }
}

#[test]
fn peak_and_low_prefer_first_day_on_ties() {
    let profile = DwellingProfile::new(SizeCategory::OneBhk);
    let flat = weekly_consumption(&profile, &ApplianceFlags::default(), &week_with(|_| (0, 0, 12, 12)));
    assert_eq!(flat.peak_day().0, Weekday::Monday);
    assert_eq!(flat.low_day().0, Weekday::Monday);
    assert_eq!(flat.range_kwh(), 0.0);

    let tied = weekly_consumption(
        &profile,
        &ApplianceFlags::default(),
        &week_with(|d| match d {
            Weekday::Tuesday | Weekday::Saturday => (0, 0, 20, 20),
            Weekday::Wednesday | Weekday::Sunday => (0, 0, 2, 2),
            _ => (0, 0, 10, 10),
        }),
    );
    assert_eq!(tied.peak_day().0, Weekday::Tuesday);
    assert_eq!(tied.low_day().0, Weekday::Wednesday);
    assert!(tied.range_kwh() > 0.0);
}
