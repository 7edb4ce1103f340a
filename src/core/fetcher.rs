use crate::core::{ConfigProvider, HolidayRecord, HolidayResponse, HolidaySource};
use crate::utils::error::{HolidayError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://date.nager.at/Api/v2";
pub const COUNTRY_CODE: &str = "IN";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Fetches a full year of Indian public holidays and keeps one month of it.
pub struct HolidayFetcher {
    client: Client,
    base_url: String,
}

impl HolidayFetcher {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds()))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url().to_string(),
        })
    }

    /// `{base_url}/PublicHolidays/{year}/IN`. The month never reaches the server.
    pub fn request_url(&self, year: &str) -> String {
        format!(
            "{}/PublicHolidays/{}/{}",
            self.base_url.trim_end_matches('/'),
            year,
            COUNTRY_CODE
        )
    }

    pub async fn fetch(&self, year: &str, month: &str) -> Result<Vec<HolidayRecord>> {
        let url = self.request_url(year);
        tracing::debug!("Making API request to: {}", url);

        let response = self.client.get(&url).send().await?;
        tracing::debug!("API response status: {}", response.status());

        if !response.status().is_success() {
            return Err(HolidayError::HttpStatus {
                status: response.status().as_u16(),
            });
        }

        let body = response.bytes().await?;
        if body.is_empty() {
            return Err(HolidayError::EmptyBody);
        }

        let records = decode_holidays(&body)?;
        let total = records.len();
        let filtered = filter_by_month(records, year, month);
        tracing::debug!(
            "Kept {} of {} holidays for {}-{}",
            filtered.len(),
            total,
            year,
            month
        );

        Ok(filtered)
    }
}

#[async_trait]
impl HolidaySource for HolidayFetcher {
    async fn fetch(&self, year: &str, month: &str) -> Result<Vec<HolidayRecord>> {
        HolidayFetcher::fetch(self, year, month).await
    }
}

pub fn decode_holidays(body: &[u8]) -> Result<Vec<HolidayRecord>> {
    let responses: Vec<HolidayResponse> =
        serde_json::from_slice(body).map_err(HolidayError::DecodeError)?;
    Ok(responses.into_iter().map(HolidayRecord::from).collect())
}

/// Keeps the records dated in `{year}-{month}`, in their original order.
pub fn filter_by_month(records: Vec<HolidayRecord>, year: &str, month: &str) -> Vec<HolidayRecord> {
    records
        .into_iter()
        .filter(|record| record.is_in_month(year, month))
        .collect()
}
