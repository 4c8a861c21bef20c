//! 주간 결과에 대한 권장 사항과 절약 팁.

use crate::consumption::{WeeklyConsumption, Weekday};
use crate::household::ApplianceFlags;
use crate::rates::Appliance;

/// 최대 소비 요일이 하루 평균의 이 배수를 넘으면 사용 조절을 권한다.
pub const PEAK_TO_AVERAGE_LIMIT: f64 = 1.3;
/// 에어컨 비중 경고 기준.
pub const AC_SHARE_LIMIT: f64 = 0.4;
/// 주간 고소비 경고 기준 [kWh].
pub const HIGH_WEEKLY_KWH: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Recommendation {
    /// 특정 요일 사용량을 줄이라는 권고
    ReducePeakDay(Weekday),
    /// 에어컨 비중 과다
    AcDominant,
    /// 주간 총량 과다
    HighWeeklyConsumption,
}

impl Recommendation {
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Recommendation::ReducePeakDay(_) => "insight.reduce_peak_day",
            Recommendation::AcDominant => "insight.ac_dominant",
            Recommendation::HighWeeklyConsumption => "insight.high_weekly",
        }
    }
}

/// 주간 결과에서 권장 사항을 뽑는다.
pub fn recommendations(week: &WeeklyConsumption, flags: &ApplianceFlags) -> Vec<Recommendation> {
    let mut out = Vec::new();
    let (peak_day, peak_kwh) = week.peak_day();
    if peak_kwh > week.average_daily_kwh() * PEAK_TO_AVERAGE_LIMIT {
        out.push(Recommendation::ReducePeakDay(peak_day));
    }
    let ac_kwh = week
        .breakdown()
        .get(Appliance::AirConditioner)
        .unwrap_or(0.0);
    if flags.has_ac && ac_kwh > week.total_kwh() * AC_SHARE_LIMIT {
        out.push(Recommendation::AcDominant);
    }
    if week.total_kwh() > HIGH_WEEKLY_KWH {
        out.push(Recommendation::HighWeeklyConsumption);
    }
    out
}

/// 요약에 표시할 보유 가전 목록. 선택 가전 뒤에 조명, 선풍기 순.
pub fn appliance_list(flags: &ApplianceFlags) -> Vec<Appliance> {
    let mut list = Vec::with_capacity(5);
    if flags.has_ac {
        list.push(Appliance::AirConditioner);
    }
    if flags.has_fridge {
        list.push(Appliance::Fridge);
    }
    if flags.has_washing_machine {
        list.push(Appliance::WashingMachine);
    }
    list.extend([Appliance::Light, Appliance::Fan]);
    list
}

/// 절약 팁의 언어팩 키.
pub const TIP_KEYS: [&str; 8] = [
    "tip.led_bulbs",
    "tip.ac_temperature",
    "tip.fans_with_ac",
    "tip.unplug",
    "tip.full_loads",
    "tip.maintenance",
    "tip.timers",
    "tip.ac_peak_hours",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appliance_list_puts_fixed_fixtures_last() {
        let flags = ApplianceFlags {
            has_ac: false,
            has_fridge: true,
            has_washing_machine: true,
        };
        assert_eq!(
            appliance_list(&flags),
            vec![
                Appliance::Fridge,
                Appliance::WashingMachine,
                Appliance::Light,
                Appliance::Fan
            ]
        );
    }
}
