pub mod config;
pub mod core;
pub mod domain;
pub mod presentation;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::AppConfig;

pub use crate::core::{
    ConfigProvider, FixtureSource, HolidayFetcher, HolidayRecord, HolidaySnapshot, HolidaySource, HolidayStore,
    HolidayViewModel, PublishPolicy, Selection,
};
pub use crate::utils::error::{HolidayError, Result};
