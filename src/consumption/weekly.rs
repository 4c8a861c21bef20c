//! 요일별 사용 패턴 기반 주간 소비량 계산.
//!
//! 조명/선풍기/에어컨은 `단가 × 대수 × 사용시간/24`로 시간 비례 계산하고,
//! 냉장고는 사용 여부만 보고 하루 고정 단가를 더하며, 세탁기는 사용 횟수에 비례한다.

use serde::{Deserialize, Serialize};

use crate::household::{ApplianceFlags, DwellingProfile};
use crate::rates::{Appliance, EnergyRateTable, ENERGY_RATES};

/// 월 환산 계수(주 → 월).
pub const WEEKS_PER_MONTH: f64 = 4.33;
/// 연 환산 계수(주 → 연).
pub const WEEKS_PER_YEAR: f64 = 52.0;

pub const MAX_HOURS: u8 = 24;
pub const MAX_WASHING_CYCLES: u8 = 5;

/// 월요일부터 시작하는 요일.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// 월요일=0 기준 위치.
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn is_weekend(&self) -> bool {
        matches!(self, Weekday::Saturday | Weekday::Sunday)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }

    pub fn i18n_key(&self) -> &'static str {
        match self {
            Weekday::Monday => "day.monday",
            Weekday::Tuesday => "day.tuesday",
            Weekday::Wednesday => "day.wednesday",
            Weekday::Thursday => "day.thursday",
            Weekday::Friday => "day.friday",
            Weekday::Saturday => "day.saturday",
            Weekday::Sunday => "day.sunday",
        }
    }
}

/// 요일 입력의 기본값(설정 파일에서 바꿀 수 있다).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UsageDefaults {
    pub ac_hours: u8,
    pub washing_cycles: u8,
    pub light_hours: u8,
    pub fan_hours: u8,
}

impl Default for UsageDefaults {
    fn default() -> Self {
        Self {
            ac_hours: 8,
            washing_cycles: 0,
            light_hours: 12,
            fan_hours: 16,
        }
    }
}

/// 하루 사용량 입력.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyUsage {
    pub day: Weekday,
    #[serde(default)]
    pub ac_hours: u8,
    #[serde(default)]
    pub washing_cycles: u8,
    #[serde(default)]
    pub light_hours: u8,
    #[serde(default)]
    pub fan_hours: u8,
}

impl DailyUsage {
    pub fn from_defaults(day: Weekday, defaults: &UsageDefaults) -> Self {
        Self {
            day,
            ac_hours: defaults.ac_hours,
            washing_cycles: defaults.washing_cycles,
            light_hours: defaults.light_hours,
            fan_hours: defaults.fan_hours,
        }
        .clamped()
    }

    /// 시간은 0~24, 세탁 횟수는 0~5 범위로 자른다.
    pub fn clamped(self) -> Self {
        Self {
            day: self.day,
            ac_hours: self.ac_hours.min(MAX_HOURS),
            washing_cycles: self.washing_cycles.min(MAX_WASHING_CYCLES),
            light_hours: self.light_hours.min(MAX_HOURS),
            fan_hours: self.fan_hours.min(MAX_HOURS),
        }
    }

    pub fn is_within_range(&self) -> bool {
        *self == self.clamped()
    }
}

/// 주간 입력 구성 오류.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WeeklyUsageError {
    /// 요일 수가 7이 아님
    WrongLength(usize),
    /// 같은 요일이 두 번 이상 나옴
    DuplicateDay(Weekday),
}

impl std::fmt::Display for WeeklyUsageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WeeklyUsageError::WrongLength(n) => write!(f, "expected 7 days of usage, got {n}"),
            WeeklyUsageError::DuplicateDay(d) => write!(f, "duplicate entry for {}", d.name()),
        }
    }
}

impl std::error::Error for WeeklyUsageError {}

/// 월~일 7일치 사용량. 항상 월요일부터 순서대로 정확히 한 번씩 들어 있다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<DailyUsage>", into = "Vec<DailyUsage>")]
pub struct WeeklyUsage {
    days: [DailyUsage; 7],
}

impl WeeklyUsage {
    pub fn from_defaults(defaults: &UsageDefaults) -> Self {
        Self {
            days: Weekday::ALL.map(|day| DailyUsage::from_defaults(day, defaults)),
        }
    }

    /// 순서와 상관없이 7개 요일 입력을 받아 월요일부터 정렬한다.
    pub fn from_days(days: Vec<DailyUsage>) -> Result<Self, WeeklyUsageError> {
        if days.len() != 7 {
            return Err(WeeklyUsageError::WrongLength(days.len()));
        }
        let mut slots: [Option<DailyUsage>; 7] = [None; 7];
        for usage in days {
            let slot = &mut slots[usage.day.index()];
            if slot.is_some() {
                return Err(WeeklyUsageError::DuplicateDay(usage.day));
            }
            *slot = Some(usage);
        }
        let mut out = Self::from_defaults(&UsageDefaults::default());
        for (i, slot) in slots.into_iter().enumerate() {
            // 길이 7에 중복이 없으므로 모든 칸이 채워져 있다.
            if let Some(usage) = slot {
                out.days[i] = usage;
            }
        }
        Ok(out)
    }

    pub fn day(&self, day: Weekday) -> &DailyUsage {
        &self.days[day.index()]
    }

    pub fn day_mut(&mut self, day: Weekday) -> &mut DailyUsage {
        &mut self.days[day.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &DailyUsage> {
        self.days.iter()
    }

    pub fn clamped(self) -> Self {
        Self {
            days: self.days.map(DailyUsage::clamped),
        }
    }

    pub fn is_within_range(&self) -> bool {
        self.days.iter().all(DailyUsage::is_within_range)
    }
}

impl TryFrom<Vec<DailyUsage>> for WeeklyUsage {
    type Error = WeeklyUsageError;

    fn try_from(value: Vec<DailyUsage>) -> Result<Self, Self::Error> {
        WeeklyUsage::from_days(value)
    }
}

impl From<WeeklyUsage> for Vec<DailyUsage> {
    fn from(value: WeeklyUsage) -> Self {
        value.days.to_vec()
    }
}

/// 가전별 주간 누적 소비량. 보유하지 않은 선택 가전은 항목이 없다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApplianceBreakdown {
    entries: Vec<(Appliance, f64)>,
}

impl ApplianceBreakdown {
    fn add(&mut self, appliance: Appliance, kwh: f64) {
        if let Some(entry) = self.entries.iter_mut().find(|(a, _)| *a == appliance) {
            entry.1 += kwh;
        } else {
            self.entries.push((appliance, kwh));
        }
    }

    pub fn get(&self, appliance: Appliance) -> Option<f64> {
        self.entries
            .iter()
            .find(|(a, _)| *a == appliance)
            .map(|(_, v)| *v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Appliance, f64)> + '_ {
        self.entries.iter().copied()
    }

    pub fn total(&self) -> f64 {
        self.entries.iter().map(|(_, v)| v).sum()
    }
}

/// 주간 계산 결과.
#[derive(Debug, Clone, PartialEq)]
pub struct WeeklyConsumption {
    per_day: [f64; 7],
    total_kwh: f64,
    breakdown: ApplianceBreakdown,
}

impl WeeklyConsumption {
    pub fn day(&self, day: Weekday) -> f64 {
        self.per_day[day.index()]
    }

    /// 월요일부터 (요일, kWh) 순회.
    pub fn days(&self) -> impl Iterator<Item = (Weekday, f64)> + '_ {
        Weekday::ALL.into_iter().map(|d| (d, self.per_day[d.index()]))
    }

    pub fn total_kwh(&self) -> f64 {
        self.total_kwh
    }

    pub fn average_daily_kwh(&self) -> f64 {
        self.total_kwh / 7.0
    }

    pub fn monthly_kwh(&self) -> f64 {
        self.total_kwh * WEEKS_PER_MONTH
    }

    pub fn yearly_kwh(&self) -> f64 {
        self.total_kwh * WEEKS_PER_YEAR
    }

    pub fn breakdown(&self) -> &ApplianceBreakdown {
        &self.breakdown
    }

    /// 소비량이 가장 큰 요일. 동률이면 앞선 요일.
    pub fn peak_day(&self) -> (Weekday, f64) {
        self.scan(|candidate, best| candidate > best)
    }

    /// 소비량이 가장 작은 요일. 동률이면 앞선 요일.
    pub fn low_day(&self) -> (Weekday, f64) {
        self.scan(|candidate, best| candidate < best)
    }

    /// 최대/최소 요일 간 차이.
    pub fn range_kwh(&self) -> f64 {
        self.peak_day().1 - self.low_day().1
    }

    fn scan(&self, better: impl Fn(f64, f64) -> bool) -> (Weekday, f64) {
        let mut best = (Weekday::Monday, self.per_day[0]);
        for (day, kwh) in self.days().skip(1) {
            if better(kwh, best.1) {
                best = (day, kwh);
            }
        }
        best
    }
}

/// 하루 소비량을 가전별 항목으로 나눈다. 보유하지 않은 가전은 `None`.
fn day_terms(
    rates: &EnergyRateTable,
    profile: &DwellingProfile,
    flags: &ApplianceFlags,
    usage: &DailyUsage,
) -> [(Appliance, Option<f64>); 5] {
    // 단가 × 대수 × 사용시간/24
    let hourly = |appliance: Appliance, units: u32, hours: u8| {
        rates.rate(appliance) * f64::from(units) * f64::from(hours) / 24.0
    };
    let lights = hourly(Appliance::Light, profile.light_count, usage.light_hours);
    let fans = hourly(Appliance::Fan, profile.fan_count, usage.fan_hours);
    let ac = flags
        .has_ac
        .then(|| hourly(Appliance::AirConditioner, 1, usage.ac_hours));
    // 냉장고는 상시 가동으로 본다.
    let fridge = flags.has_fridge.then(|| rates.rate(Appliance::Fridge));
    let washing = flags
        .has_washing_machine
        .then(|| rates.rate(Appliance::WashingMachine) * f64::from(usage.washing_cycles));
    [
        (Appliance::Light, Some(lights)),
        (Appliance::Fan, Some(fans)),
        (Appliance::AirConditioner, ac),
        (Appliance::Fridge, fridge),
        (Appliance::WashingMachine, washing),
    ]
}

/// 하루 소비량 [kWh].
pub fn day_consumption(
    profile: &DwellingProfile,
    flags: &ApplianceFlags,
    usage: &DailyUsage,
) -> f64 {
    day_terms(&ENERGY_RATES, profile, flags, usage)
        .iter()
        .filter_map(|(_, v)| *v)
        .sum()
}

/// 7일치 사용 패턴으로 요일별 소비량, 주간 합계, 가전별 누적을 계산한다.
pub fn weekly_consumption(
    profile: &DwellingProfile,
    flags: &ApplianceFlags,
    usage: &WeeklyUsage,
) -> WeeklyConsumption {
    let mut per_day = [0.0; 7];
    let mut total_kwh = 0.0;
    let mut breakdown = ApplianceBreakdown::default();
    for daily in usage.iter() {
        let mut day_kwh = 0.0;
        for (appliance, kwh) in day_terms(&ENERGY_RATES, profile, flags, daily) {
            if let Some(kwh) = kwh {
                day_kwh += kwh;
                breakdown.add(appliance, kwh);
            }
        }
        per_day[daily.day.index()] = day_kwh;
        total_kwh += day_kwh;
    }
    tracing::debug!(total_kwh, size = profile.size.label(), "weekly consumption computed");
    WeeklyConsumption {
        per_day,
        total_kwh,
        breakdown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::household::SizeCategory;

    fn usage_all(ac: u8, wash: u8, light: u8, fan: u8) -> WeeklyUsage {
        WeeklyUsage::from_defaults(&UsageDefaults {
            ac_hours: ac,
            washing_cycles: wash,
            light_hours: light,
            fan_hours: fan,
        })
    }

    #[test]
    fn days_are_monday_first() {
        let usage = WeeklyUsage::from_defaults(&UsageDefaults::default());
        let order: Vec<Weekday> = usage.iter().map(|d| d.day).collect();
        assert_eq!(order, Weekday::ALL.to_vec());
        assert!(!Weekday::Friday.is_weekend());
        assert!(Weekday::Saturday.is_weekend());
    }

    #[test]
    fn from_days_rejects_duplicates_and_short_weeks() {
        let mut days: Vec<DailyUsage> = usage_all(1, 0, 1, 1).iter().copied().collect();
        days.reverse();
        let sorted = WeeklyUsage::from_days(days.clone()).expect("reversed week");
        assert_eq!(sorted.day(Weekday::Monday).day, Weekday::Monday);

        days[0].day = Weekday::Monday;
        assert_eq!(
            WeeklyUsage::from_days(days.clone()),
            Err(WeeklyUsageError::DuplicateDay(Weekday::Monday))
        );
        days.pop();
        assert_eq!(
            WeeklyUsage::from_days(days),
            Err(WeeklyUsageError::WrongLength(6))
        );
    }

    #[test]
    fn clamp_limits_sliders() {
        let d = DailyUsage {
            day: Weekday::Monday,
            ac_hours: 30,
            washing_cycles: 9,
            light_hours: 24,
            fan_hours: 0,
        };
        assert!(!d.is_within_range());
        let c = d.clamped();
        assert_eq!((c.ac_hours, c.washing_cycles, c.light_hours), (24, 5, 24));
    }

    #[test]
    fn breakdown_skips_missing_appliances() {
        let profile = DwellingProfile::new(SizeCategory::OneBhk);
        let flags = ApplianceFlags {
            has_fridge: true,
            ..Default::default()
        };
        let week = weekly_consumption(&profile, &flags, &usage_all(8, 2, 12, 16));
        assert!(week.breakdown().get(Appliance::AirConditioner).is_none());
        assert!(week.breakdown().get(Appliance::WashingMachine).is_none());
        assert_eq!(week.breakdown().get(Appliance::Fridge), Some(28.0));
        assert_eq!(week.breakdown().iter().count(), 3);
    }

    #[test]
    fn day_terms_read_the_given_rate_table() {
        let profile = DwellingProfile::new(SizeCategory::TwoBhk);
        let flags = ApplianceFlags {
            has_ac: true,
            has_fridge: true,
            has_washing_machine: true,
        };
        let usage = DailyUsage {
            day: Weekday::Monday,
            ac_hours: 12,
            washing_cycles: 1,
            light_hours: 6,
            fan_hours: 24,
        };
        let doubled = EnergyRateTable {
            light: 0.8,
            fan: 1.6,
            ac: 6.0,
            fridge: 8.0,
            washing_machine: 4.0,
        };
        let base = day_terms(&ENERGY_RATES, &profile, &flags, &usage);
        let twice = day_terms(&doubled, &profile, &flags, &usage);
        for ((a, v), (b, w)) in base.iter().zip(twice.iter()) {
            assert_eq!(a, b);
            let (v, w) = (v.expect("owned"), w.expect("owned"));
            assert!((w - 2.0 * v).abs() < 1e-12, "{a:?}: {v} vs {w}");
        }
        // 0.4*3*6/24 + 0.8*3*24/24 + 3*12/24 + 4 + 2*1
        assert!((day_consumption(&profile, &flags, &usage) - 10.2).abs() < 1e-9);
    }
}
