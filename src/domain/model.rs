use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// One entry in the displayed holiday list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayRecord {
    pub date: String,
    pub name: String,
}

impl HolidayRecord {
    pub fn new(date: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            name: name.into(),
        }
    }

    /// `true` when the date begins with `"{year}-{month}"`.
    pub fn is_in_month(&self, year: &str, month: &str) -> bool {
        let prefix = format!("{}-{}", year, month);
        self.date.get(..7) == Some(prefix.as_str())
    }
}

/// Wire shape of one element of the Nager.Date `PublicHolidays` array.
/// Every other field of the payload is ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HolidayResponse {
    pub date: String,
    pub local_name: String,
}

impl From<HolidayResponse> for HolidayRecord {
    fn from(response: HolidayResponse) -> Self {
        Self {
            date: response.date,
            name: response.local_name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub year: String,
    pub month: String,
}

impl Selection {
    pub fn new(year: impl Into<String>, month: impl Into<String>) -> Self {
        Self {
            year: year.into(),
            month: month.into(),
        }
    }

    /// Current local calendar year, January.
    pub fn current() -> Self {
        use chrono::Datelike;
        Self::new(chrono::Local::now().year().to_string(), "01")
    }
}

/// Which completed fetch is allowed to replace the published list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum PublishPolicy {
    /// Only the most recently issued fetch may publish; stale responses are dropped.
    #[default]
    LatestRequest,
    /// Whichever response arrives last wins, even if it belongs to an older selection.
    LatestResponse,
}

pub type HolidayList = Arc<[HolidayRecord]>;

/// Immutable view of the published list.
#[derive(Debug, Clone)]
pub struct HolidaySnapshot {
    pub records: HolidayList,
    /// Selection the records were fetched for; `None` before the first load.
    pub selection: Option<Selection>,
    /// Ticket of the fetch that produced this snapshot, 0 when nothing was published.
    pub sequence: u64,
}

impl Default for HolidaySnapshot {
    fn default() -> Self {
        Self {
            records: Arc::from(Vec::new()),
            selection: None,
            sequence: 0,
        }
    }
}
