//! 소비량 계산기 모음.
//! 간이(하루 고정) 계산과 요일별 사용 패턴 계산은 단가표와 면적별 대수만 공유하는 독립 함수다.

pub mod daily;
pub mod weekly;

pub use daily::{daily_estimate, DailyEstimate};
pub use weekly::{
    day_consumption, weekly_consumption, ApplianceBreakdown, DailyUsage, UsageDefaults,
    WeeklyConsumption, WeeklyUsage, Weekday,
};
