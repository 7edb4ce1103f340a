use crate::domain::model::{HolidayRecord, PublishPolicy};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Anything that can produce the holidays of one month.
#[async_trait]
pub trait HolidaySource: Send + Sync {
    async fn fetch(&self, year: &str, month: &str) -> Result<Vec<HolidayRecord>>;
}

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn timeout_seconds(&self) -> u64;
    fn publish_policy(&self) -> PublishPolicy;
}
