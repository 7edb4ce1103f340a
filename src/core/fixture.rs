use crate::core::fetcher::filter_by_month;
use crate::core::{HolidayRecord, HolidaySource};
use crate::utils::error::Result;
use async_trait::async_trait;

/// In-memory holiday source for offline use. Serves the same list for
/// every request and applies the usual month filter.
#[derive(Debug, Clone)]
pub struct FixtureSource {
    records: Vec<HolidayRecord>,
}

impl FixtureSource {
    pub fn new(records: Vec<HolidayRecord>) -> Self {
        Self { records }
    }

    /// The bank holidays bundled with the app for 2025.
    pub fn bank_holidays_2025() -> Self {
        Self::new(vec![
            HolidayRecord::new("2025-01-01", "New Year's Day"),
            HolidayRecord::new("2025-08-15", "Independence Day"),
            HolidayRecord::new("2025-10-02", "Gandhi Jayanti"),
        ])
    }
}

impl Default for FixtureSource {
    fn default() -> Self {
        Self::bank_holidays_2025()
    }
}

#[async_trait]
impl HolidaySource for FixtureSource {
    async fn fetch(&self, year: &str, month: &str) -> Result<Vec<HolidayRecord>> {
        tracing::debug!("Serving {}-{} from bundled holidays", year, month);
        Ok(filter_by_month(self.records.clone(), year, month))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_bundled_holidays_by_month() {
        let source = FixtureSource::default();

        let august = source.fetch("2025", "08").await.unwrap();
        assert_eq!(august, vec![HolidayRecord::new("2025-08-15", "Independence Day")]);

        assert!(source.fetch("2025", "03").await.unwrap().is_empty());
        assert!(source.fetch("2024", "01").await.unwrap().is_empty());
    }
}
