//! 가정용 전력 소비 계산 로직을 라이브러리로 분리하여 CLI와 GUI가 함께 쓴다.

pub mod app;
pub mod config;
pub mod consumption;
pub mod forecast;
pub mod form;
pub mod household;
pub mod i18n;
pub mod insights;
pub mod logging;
pub mod rates;
pub mod report;
pub mod ui_cli;
pub mod units;
