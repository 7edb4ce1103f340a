use crate::core::{HolidayRecord, HolidaySnapshot, PublishPolicy, Selection};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::watch;

/// Single-writer-at-a-time container for the published holiday list.
///
/// Readers either take a [`snapshot`](Self::snapshot) or hold a
/// [`watch::Receiver`] from [`subscribe`](Self::subscribe) and are woken on
/// every accepted publish. A snapshot is never mutated after it is sent.
pub struct HolidayStore {
    sender: watch::Sender<Arc<HolidaySnapshot>>,
    issued: AtomicU64,
    policy: PublishPolicy,
}

impl HolidayStore {
    pub fn new(policy: PublishPolicy) -> Self {
        let (sender, _) = watch::channel(Arc::new(HolidaySnapshot::default()));
        Self {
            sender,
            issued: AtomicU64::new(0),
            policy,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<Arc<HolidaySnapshot>> {
        self.sender.subscribe()
    }

    pub fn snapshot(&self) -> Arc<HolidaySnapshot> {
        Arc::clone(&self.sender.borrow())
    }

    /// Issues the ticket for a new fetch. Tickets start at 1 and only grow.
    pub fn begin(&self) -> u64 {
        self.issued.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn latest_ticket(&self) -> u64 {
        self.issued.load(Ordering::SeqCst)
    }

    /// Replaces the published list with `records` unless the policy rejects
    /// `ticket`. Returns whether subscribers were notified.
    pub fn publish(&self, ticket: u64, selection: Selection, records: Vec<HolidayRecord>) -> bool {
        let policy = self.policy;
        let issued = &self.issued;

        let accepted = self.sender.send_if_modified(|current| {
            if policy == PublishPolicy::LatestRequest && ticket != issued.load(Ordering::SeqCst) {
                return false;
            }
            *current = Arc::new(HolidaySnapshot {
                records: Arc::from(records),
                selection: Some(selection),
                sequence: ticket,
            });
            true
        });

        if !accepted {
            tracing::debug!(
                "Discarding stale response for ticket {} (latest is {})",
                ticket,
                self.latest_ticket()
            );
        }
        accepted
    }
}

impl Default for HolidayStore {
    fn default() -> Self {
        Self::new(PublishPolicy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(dates: &[&str]) -> Vec<HolidayRecord> {
        dates
            .iter()
            .map(|d| HolidayRecord::new(*d, "Holiday"))
            .collect()
    }

    #[test]
    fn test_tickets_increase() {
        let store = HolidayStore::default();
        assert_eq!(store.latest_ticket(), 0);
        assert_eq!(store.begin(), 1);
        assert_eq!(store.begin(), 2);
        assert_eq!(store.latest_ticket(), 2);
    }

    #[test]
    fn test_latest_request_discards_stale_ticket() {
        let store = HolidayStore::new(PublishPolicy::LatestRequest);
        let first = store.begin();
        let second = store.begin();

        assert!(store.publish(second, Selection::new("2024", "03"), records(&["2024-03-08"])));
        assert!(!store.publish(first, Selection::new("2024", "01"), records(&["2024-01-01"])));

        let snapshot = store.snapshot();
        assert_eq!(snapshot.sequence, second);
        assert_eq!(snapshot.records[0].date, "2024-03-08");
    }

    #[test]
    fn test_latest_response_accepts_any_ticket() {
        let store = HolidayStore::new(PublishPolicy::LatestResponse);
        let first = store.begin();
        let second = store.begin();

        assert!(store.publish(second, Selection::new("2024", "03"), records(&["2024-03-08"])));
        assert!(store.publish(first, Selection::new("2024", "01"), records(&["2024-01-01"])));

        let snapshot = store.snapshot();
        assert_eq!(snapshot.sequence, first);
        assert_eq!(snapshot.selection, Some(Selection::new("2024", "01")));
    }

    #[test]
    fn test_publish_replaces_whole_list() {
        let store = HolidayStore::default();
        let ticket = store.begin();
        store.publish(ticket, Selection::new("2024", "01"), records(&["2024-01-01", "2024-01-26"]));
        let ticket = store.begin();
        store.publish(ticket, Selection::new("2024", "08"), records(&["2024-08-15"]));

        assert_eq!(store.snapshot().records.len(), 1);
    }

    #[tokio::test]
    async fn test_subscriber_is_notified() {
        let store = HolidayStore::default();
        let mut receiver = store.subscribe();

        let ticket = store.begin();
        store.publish(ticket, Selection::new("2024", "01"), records(&["2024-01-01"]));

        receiver.changed().await.unwrap();
        assert_eq!(receiver.borrow_and_update().records.len(), 1);
    }
}
