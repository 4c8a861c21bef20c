use crate::household::{ApplianceFlags, DwellingProfile};
use crate::rates::{Appliance, ENERGY_RATES};

/// 월 환산 일수.
pub const DAYS_PER_MONTH: f64 = 30.0;
/// 연 환산 일수.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// 간이 계산 결과. 조명/선풍기는 대당 하루 고정 소비로 본다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyEstimate {
    pub daily_kwh: f64,
    pub monthly_kwh: f64,
    pub yearly_kwh: f64,
}

/// 면적 구분과 보유 가전만으로 하루 소비량을 추정한다.
pub fn daily_estimate(profile: &DwellingProfile, flags: &ApplianceFlags) -> DailyEstimate {
    let rates = &ENERGY_RATES;
    let mut daily_kwh = rates.rate(Appliance::Light) * f64::from(profile.light_count)
        + rates.rate(Appliance::Fan) * f64::from(profile.fan_count);
    for (owned, appliance) in [
        (flags.has_ac, Appliance::AirConditioner),
        (flags.has_fridge, Appliance::Fridge),
        (flags.has_washing_machine, Appliance::WashingMachine),
    ] {
        if owned {
            daily_kwh += rates.rate(appliance);
        }
    }
    tracing::debug!(daily_kwh, size = profile.size.label(), "daily estimate computed");
    DailyEstimate {
        daily_kwh,
        monthly_kwh: daily_kwh * DAYS_PER_MONTH,
        yearly_kwh: daily_kwh * DAYS_PER_YEAR,
    }
}
