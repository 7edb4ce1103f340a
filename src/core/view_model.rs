use crate::core::{HolidayList, HolidaySnapshot, HolidaySource, HolidayStore, Selection};
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Holds the user's selection and drives fetches into a [`HolidayStore`].
///
/// Every fetch runs on its own task. Failures never reach the caller: the
/// previously published list simply stays in place.
pub struct HolidayViewModel<S: HolidaySource + ?Sized + 'static> {
    source: Arc<S>,
    store: Arc<HolidayStore>,
    selection: Mutex<Selection>,
}

impl<S: HolidaySource + ?Sized + 'static> HolidayViewModel<S> {
    pub fn new(source: Arc<S>, store: Arc<HolidayStore>) -> Self {
        Self::with_selection(source, store, Selection::current())
    }

    pub fn with_selection(source: Arc<S>, store: Arc<HolidayStore>, selection: Selection) -> Self {
        Self {
            source,
            store,
            selection: Mutex::new(selection),
        }
    }

    pub fn selection(&self) -> Selection {
        self.selection
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn holidays(&self) -> HolidayList {
        Arc::clone(&self.store.snapshot().records)
    }

    pub fn subscribe(&self) -> watch::Receiver<Arc<HolidaySnapshot>> {
        self.store.subscribe()
    }

    pub fn store(&self) -> &Arc<HolidayStore> {
        &self.store
    }

    /// Initial display.
    pub fn load(&self) -> JoinHandle<()> {
        let selection = self.selection();
        self.fetch_holidays(&selection.year, &selection.month)
    }

    pub fn select_year(&self, year: &str) -> JoinHandle<()> {
        let selection = self.update_selection(|s| s.year = year.to_string());
        self.fetch_holidays(&selection.year, &selection.month)
    }

    pub fn select_month(&self, month: &str) -> JoinHandle<()> {
        let selection = self.update_selection(|s| s.month = month.to_string());
        self.fetch_holidays(&selection.year, &selection.month)
    }

    pub fn fetch_holidays(&self, year: &str, month: &str) -> JoinHandle<()> {
        let ticket = self.store.begin();
        let source = Arc::clone(&self.source);
        let store = Arc::clone(&self.store);
        let selection = Selection::new(year, month);

        tracing::debug!("Fetch #{} issued for {}-{}", ticket, year, month);

        tokio::spawn(async move {
            let result = source.fetch(&selection.year, &selection.month).await;
            match result {
                Ok(records) => {
                    let count = records.len();
                    let label = format!("{}-{}", selection.year, selection.month);
                    if store.publish(ticket, selection, records) {
                        tracing::info!("Published {} holidays for {}", count, label);
                    }
                }
                Err(e) if e.is_decode() => {
                    tracing::error!("{}", e);
                }
                Err(e) if e.is_transport() => {
                    tracing::debug!("Fetch #{} failed: {}", ticket, e);
                }
                Err(e) => {
                    tracing::warn!("Fetch #{} failed: {}", ticket, e);
                }
            }
        })
    }

    fn update_selection(&self, apply: impl FnOnce(&mut Selection)) -> Selection {
        let mut selection = self.selection.lock().unwrap_or_else(PoisonError::into_inner);
        apply(&mut selection);
        selection.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::HolidayRecord;
    use crate::utils::error::{HolidayError, Result};
    use async_trait::async_trait;
    use std::collections::HashMap;

    /// Serves a fixed year of holidays, or fails for the configured years.
    struct StaticSource {
        years: HashMap<String, Vec<HolidayRecord>>,
        calls: Mutex<Vec<(String, String)>>,
    }

    impl StaticSource {
        fn new() -> Self {
            let mut years = HashMap::new();
            years.insert(
                "2024".to_string(),
                vec![
                    HolidayRecord::new("2024-01-01", "New Year's Day"),
                    HolidayRecord::new("2024-01-26", "Republic Day"),
                    HolidayRecord::new("2024-03-08", "Holi"),
                ],
            );
            Self {
                years,
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl HolidaySource for StaticSource {
        async fn fetch(&self, year: &str, month: &str) -> Result<Vec<HolidayRecord>> {
            self.calls
                .lock()
                .unwrap()
                .push((year.to_string(), month.to_string()));
            match self.years.get(year) {
                Some(records) => Ok(records
                    .iter()
                    .filter(|r| r.is_in_month(year, month))
                    .cloned()
                    .collect()),
                None => Err(HolidayError::HttpStatus { status: 404 }),
            }
        }
    }

    fn view_model(source: Arc<StaticSource>) -> HolidayViewModel<StaticSource> {
        HolidayViewModel::with_selection(
            source,
            Arc::new(HolidayStore::default()),
            Selection::new("2024", "01"),
        )
    }

    #[tokio::test]
    async fn test_empty_before_first_load() {
        let vm = view_model(Arc::new(StaticSource::new()));
        assert!(vm.holidays().is_empty());
    }

    #[tokio::test]
    async fn test_load_uses_current_selection() {
        let vm = view_model(Arc::new(StaticSource::new()));
        vm.load().await.unwrap();

        let holidays = vm.holidays();
        assert_eq!(holidays.len(), 2);
        assert_eq!(holidays[0].name, "New Year's Day");
    }

    #[tokio::test]
    async fn test_select_month_keeps_year() {
        let source = Arc::new(StaticSource::new());
        let vm = view_model(Arc::clone(&source));
        vm.load().await.unwrap();
        vm.select_month("03").await.unwrap();

        assert_eq!(vm.selection(), Selection::new("2024", "03"));
        let holidays = vm.holidays();
        assert_eq!(holidays.len(), 1);
        assert_eq!(holidays[0].name, "Holi");

        let calls = source.calls.lock().unwrap().clone();
        assert_eq!(
            calls,
            vec![
                ("2024".to_string(), "01".to_string()),
                ("2024".to_string(), "03".to_string())
            ]
        );
    }

    #[tokio::test]
    async fn test_failed_fetch_keeps_previous_list() {
        let vm = view_model(Arc::new(StaticSource::new()));
        vm.load().await.unwrap();
        vm.select_year("1999").await.unwrap();

        assert_eq!(vm.selection().year, "1999");
        let snapshot = vm.store().snapshot();
        assert_eq!(snapshot.records.len(), 2);
        assert_eq!(snapshot.selection, Some(Selection::new("2024", "01")));
    }
}
