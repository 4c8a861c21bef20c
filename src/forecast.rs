//! 다음 주 소비량 예측.
//!
//! 이번 주 평일(월~금)/주말(토~일) 평균을 구하고, 요일마다 ±5% 범위의 변동을 곱해
//! 다음 주 값을 만든다. 학습 모델이 아닌 단순 지속(persistence) 예측이다.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::consumption::{WeeklyConsumption, Weekday};

/// 요일별 변동 폭의 최댓값(±5%).
pub const MAX_VARIATION: f64 = 0.05;

/// 요일별 변동률을 공급한다. 테스트에서는 고정값을 주입한다.
pub trait VariationSource {
    /// `[-MAX_VARIATION, MAX_VARIATION]` 범위의 변동률.
    fn next_variation(&mut self) -> f64;
}

/// `U(-0.05, 0.05)` 균등분포 변동.
#[derive(Debug, Clone)]
pub struct UniformVariation<R: Rng> {
    rng: R,
}

impl<R: Rng> UniformVariation<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl UniformVariation<ChaCha8Rng> {
    /// 시드가 있으면 재현 가능한 난수, 없으면 OS 엔트로피를 쓴다.
    pub fn from_seed(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self::new(rng)
    }
}

impl<R: Rng> VariationSource for UniformVariation<R> {
    fn next_variation(&mut self) -> f64 {
        self.rng.gen_range(-MAX_VARIATION..MAX_VARIATION)
    }
}

/// 항상 같은 변동률을 돌려준다.
#[derive(Debug, Clone, Copy)]
pub struct FixedVariation(pub f64);

impl VariationSource for FixedVariation {
    fn next_variation(&mut self) -> f64 {
        self.0
    }
}

/// 다음 주 예측 결과.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekForecast {
    pub weekday_avg_kwh: f64,
    pub weekend_avg_kwh: f64,
    predicted: [f64; 7],
    pub predicted_total_kwh: f64,
    /// 이번 주 합계. 변화율 계산 기준.
    pub baseline_total_kwh: f64,
}

impl WeekForecast {
    pub fn day(&self, day: Weekday) -> f64 {
        self.predicted[day.index()]
    }

    pub fn days(&self) -> impl Iterator<Item = (Weekday, f64)> + '_ {
        Weekday::ALL
            .into_iter()
            .map(|d| (d, self.predicted[d.index()]))
    }

    /// 요일이 속한 평일/주말 평균.
    pub fn bucket_avg(&self, day: Weekday) -> f64 {
        if day.is_weekend() {
            self.weekend_avg_kwh
        } else {
            self.weekday_avg_kwh
        }
    }

    /// 이번 주 대비 변화율[%]. 이번 주 합계가 0이면 정의되지 않으므로 `None`.
    pub fn percent_change(&self) -> Option<f64> {
        percent_change(self.baseline_total_kwh, self.predicted_total_kwh)
    }
}

/// `(predicted - baseline) / baseline * 100`. baseline이 0이면 `None`.
pub fn percent_change(baseline: f64, predicted: f64) -> Option<f64> {
    if baseline == 0.0 {
        None
    } else {
        Some((predicted - baseline) / baseline * 100.0)
    }
}

/// 이번 주 결과로 다음 주 요일별 소비량을 예측한다.
pub fn forecast_next_week<V: VariationSource + ?Sized>(
    week: &WeeklyConsumption,
    variation: &mut V,
) -> WeekForecast {
    let (weekday, weekend): (Vec<(Weekday, f64)>, Vec<(Weekday, f64)>) =
        week.days().partition(|(d, _)| !d.is_weekend());
    let mean = |vals: &[(Weekday, f64)]| vals.iter().map(|(_, v)| v).sum::<f64>() / vals.len() as f64;
    let weekday_avg_kwh = mean(&weekday);
    let weekend_avg_kwh = mean(&weekend);

    let mut predicted = [0.0; 7];
    for day in Weekday::ALL {
        let avg = if day.is_weekend() {
            weekend_avg_kwh
        } else {
            weekday_avg_kwh
        };
        let v = variation
            .next_variation()
            .clamp(-MAX_VARIATION, MAX_VARIATION);
        predicted[day.index()] = avg * (1.0 + v);
    }
    let predicted_total_kwh: f64 = predicted.iter().sum();
    tracing::debug!(
        weekday_avg_kwh,
        weekend_avg_kwh,
        predicted_total_kwh,
        "next week forecast"
    );
    WeekForecast {
        weekday_avg_kwh,
        weekend_avg_kwh,
        predicted,
        predicted_total_kwh,
        baseline_total_kwh: week.total_kwh(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_change_guards_zero_baseline() {
        assert_eq!(percent_change(0.0, 0.0), None);
        assert_eq!(percent_change(0.0, 5.0), None);
        let p = percent_change(100.0, 105.0).expect("non-zero baseline");
        assert!((p - 5.0).abs() < 1e-9);
    }

    #[test]
    fn uniform_variation_stays_in_band() {
        let mut src = UniformVariation::from_seed(Some(7));
        for _ in 0..1000 {
            let v = src.next_variation();
            assert!((-MAX_VARIATION..=MAX_VARIATION).contains(&v), "{v}");
        }
    }

    #[test]
    fn seeded_sources_repeat() {
        let mut a = UniformVariation::from_seed(Some(42));
        let mut b = UniformVariation::from_seed(Some(42));
        for _ in 0..7 {
            assert_eq!(a.next_variation(), b.next_variation());
        }
    }
}
