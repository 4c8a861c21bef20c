use serde::{Deserialize, Serialize};

/// 요금표가 다루는 가전 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Appliance {
    Light,
    Fan,
    AirConditioner,
    Fridge,
    WashingMachine,
}

impl Appliance {
    /// 요약/분해 표에 쓰는 표시 순서.
    pub const ALL: [Appliance; 5] = [
        Appliance::Light,
        Appliance::Fan,
        Appliance::AirConditioner,
        Appliance::Fridge,
        Appliance::WashingMachine,
    ];

    /// 언어팩 조회 키.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Appliance::Light => "appliance.light",
            Appliance::Fan => "appliance.fan",
            Appliance::AirConditioner => "appliance.ac",
            Appliance::Fridge => "appliance.fridge",
            Appliance::WashingMachine => "appliance.washing_machine",
        }
    }
}

/// 가전별 kWh 단가표.
///
/// 조명/선풍기는 1대당, 에어컨/냉장고는 하루 상시 사용 기준, 세탁기는 1회 기준이다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyRateTable {
    pub light: f64,
    pub fan: f64,
    pub ac: f64,
    pub fridge: f64,
    pub washing_machine: f64,
}

/// 프로그램 전역에서 쓰는 고정 단가표.
pub const ENERGY_RATES: EnergyRateTable = EnergyRateTable {
    light: 0.4,
    fan: 0.8,
    ac: 3.0,
    fridge: 4.0,
    washing_machine: 2.0,
};

impl EnergyRateTable {
    /// 가전 종류에 해당하는 단가 [kWh]를 반환한다.
    pub fn rate(&self, appliance: Appliance) -> f64 {
        match appliance {
            Appliance::Light => self.light,
            Appliance::Fan => self.fan,
            Appliance::AirConditioner => self.ac,
            Appliance::Fridge => self.fridge,
            Appliance::WashingMachine => self.washing_machine,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_rates_are_non_negative() {
        for appliance in Appliance::ALL {
            assert!(ENERGY_RATES.rate(appliance) >= 0.0, "{appliance:?}");
        }
        assert_eq!(ENERGY_RATES.rate(Appliance::Fridge), 4.0);
        assert_eq!(ENERGY_RATES.rate(Appliance::Light), 0.4);
    }
}
