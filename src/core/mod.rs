pub mod fetcher;
pub mod fixture;
pub mod store;
pub mod view_model;

pub use crate::domain::model::{
    HolidayList, HolidayRecord, HolidayResponse, HolidaySnapshot, PublishPolicy, Selection,
};
pub use crate::domain::ports::{ConfigProvider, HolidaySource};
pub use crate::utils::error::Result;
pub use fetcher::HolidayFetcher;
pub use fixture::FixtureSource;
pub use store::HolidayStore;
pub use view_model::HolidayViewModel;
