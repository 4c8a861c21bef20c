use serde::{Deserialize, Serialize};

/// 표시용 에너지 단위. 내부 기준은 kWh이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnergyUnit {
    KilowattHour,
    Megajoule,
    KiloCalorie,
    Btu,
}

impl EnergyUnit {
    pub const ALL: [EnergyUnit; 4] = [
        EnergyUnit::KilowattHour,
        EnergyUnit::Megajoule,
        EnergyUnit::KiloCalorie,
        EnergyUnit::Btu,
    ];

    pub fn symbol(&self) -> &'static str {
        match self {
            EnergyUnit::KilowattHour => "kWh",
            EnergyUnit::Megajoule => "MJ",
            EnergyUnit::KiloCalorie => "kcal",
            EnergyUnit::Btu => "Btu",
        }
    }
}

fn per_kwh(unit: EnergyUnit) -> f64 {
    match unit {
        EnergyUnit::KilowattHour => 1.0,
        EnergyUnit::Megajoule => 3.6,
        EnergyUnit::KiloCalorie => 3600.0 / 4.184,
        EnergyUnit::Btu => 3_600_000.0 / 1055.06,
    }
}

/// 에너지를 변환한다.
pub fn convert_energy(value: f64, from: EnergyUnit, to: EnergyUnit) -> f64 {
    value / per_kwh(from) * per_kwh(to)
}

/// kWh 값을 지정 단위로 바꿔 "12.3 kWh" 형식 문자열로 만든다.
pub fn format_energy(kwh: f64, unit: EnergyUnit) -> String {
    let v = convert_energy(kwh, EnergyUnit::KilowattHour, unit);
    format!("{v:.1} {}", unit.symbol())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kwh_to_megajoule() {
        let mj = convert_energy(10.0, EnergyUnit::KilowattHour, EnergyUnit::Megajoule);
        assert!((mj - 36.0).abs() < 1e-9);
        let back = convert_energy(mj, EnergyUnit::Megajoule, EnergyUnit::KilowattHour);
        assert!((back - 10.0).abs() < 1e-9);
    }

    #[test]
    fn formats_one_decimal() {
        assert_eq!(format_energy(10.6, EnergyUnit::KilowattHour), "10.6 kWh");
        assert_eq!(format_energy(1.0, EnergyUnit::Megajoule), "3.6 MJ");
    }
}
