// Deferred filtered search
//
// A search waits an artificial delay before yielding results. Every
// search takes a sequence number when it starts; a search whose number is
// no longer the latest when it completes is reported as superseded and
// its results must be ignored. Dropping the future (or aborting the
// spawned task) cancels it.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

use crate::domain::{Dish, FilterCriteria};
use crate::error::{AppError, AppResult};
use crate::events::{EventBus, SearchCompleted};
use crate::repositories::CatalogRepository;
use crate::services::filter_engine;

/// A started search, not yet completed
#[derive(Debug, Clone, PartialEq)]
pub struct SearchTicket {
    pub sequence: u64,
    pub criteria: FilterCriteria,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    Current { sequence: u64, results: Vec<Dish> },
    /// A newer search started while this one was waiting
    Superseded { sequence: u64 },
}

impl SearchOutcome {
    /// Results when still current
    pub fn into_results(self) -> Option<Vec<Dish>> {
        match self {
            SearchOutcome::Current { results, .. } => Some(results),
            SearchOutcome::Superseded { .. } => None,
        }
    }
}

pub struct SearchService {
    catalog: Arc<dyn CatalogRepository>,
    event_bus: Arc<EventBus>,
    delay: Duration,
    latest: AtomicU64,
}

impl SearchService {
    pub fn new(catalog: Arc<dyn CatalogRepository>, event_bus: Arc<EventBus>, delay: Duration) -> Self {
        Self {
            catalog,
            event_bus,
            delay,
            latest: AtomicU64::new(0),
        }
    }

    /// Sequence number of the most recently started search
    pub fn latest_sequence(&self) -> u64 {
        self.latest.load(Ordering::SeqCst)
    }

    pub fn is_current(&self, sequence: u64) -> bool {
        self.latest_sequence() == sequence
    }

    /// Start a search. Empty criteria are refused before any delay.
    pub fn begin(&self, criteria: FilterCriteria) -> AppResult<SearchTicket> {
        if criteria.is_empty() {
            return Err(AppError::EmptyCriteria);
        }
        let sequence = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        log::debug!("Search #{} started: {:?}", sequence, criteria);
        Ok(SearchTicket { sequence, criteria })
    }

    /// Wait out the delay, then evaluate unless superseded
    pub async fn complete(&self, ticket: SearchTicket) -> SearchOutcome {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        if !self.is_current(ticket.sequence) {
            log::debug!("Search #{} superseded", ticket.sequence);
            return SearchOutcome::Superseded {
                sequence: ticket.sequence,
            };
        }

        let results = filter_engine::apply(self.catalog.all(), &ticket.criteria);
        self.event_bus.emit(SearchCompleted::new(
            ticket.sequence,
            ticket.criteria,
            results.len(),
        ));

        SearchOutcome::Current {
            sequence: ticket.sequence,
            results,
        }
    }

    pub async fn search(&self, criteria: FilterCriteria) -> AppResult<SearchOutcome> {
        let ticket = self.begin(criteria)?;
        Ok(self.complete(ticket).await)
    }

    /// Run the search on the tokio runtime; abort the handle to cancel
    pub fn spawn(self: &Arc<Self>, criteria: FilterCriteria) -> AppResult<JoinHandle<SearchOutcome>> {
        let ticket = self.begin(criteria)?;
        let service = Arc::clone(self);
        Ok(tokio::spawn(async move { service.complete(ticket).await }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, Cuisine};
    use crate::services::test_support::{catalog, event_bus};

    fn service(delay_ms: u64) -> Arc<SearchService> {
        Arc::new(SearchService::new(
            catalog(),
            event_bus(),
            Duration::from_millis(delay_ms),
        ))
    }

    #[tokio::test]
    async fn test_search_returns_matches() {
        let service = service(0);

        let outcome = service
            .search(FilterCriteria::new().with_category(Category::Meat))
            .await
            .unwrap();

        let ids: Vec<String> = outcome.into_results().unwrap().into_iter().map(|d| d.id).collect();
        assert_eq!(ids, vec!["dish001", "dish003"]);
    }

    #[tokio::test]
    async fn test_empty_criteria_rejected_without_sequence() {
        let service = service(0);

        assert!(matches!(
            service.search(FilterCriteria::new()).await,
            Err(AppError::EmptyCriteria)
        ));
        assert_eq!(service.latest_sequence(), 0);
    }

    #[tokio::test]
    async fn test_older_search_is_superseded() {
        let service = service(0);

        let first = service.begin(FilterCriteria::new().with_category(Category::Meat)).unwrap();
        let second = service.begin(FilterCriteria::new().with_cuisine(Cuisine::Home)).unwrap();
        assert!(second.sequence > first.sequence);

        assert_eq!(
            service.complete(first.clone()).await,
            SearchOutcome::Superseded { sequence: first.sequence }
        );
        let results = service.complete(second).await.into_results().unwrap();
        assert_eq!(results.len(), 2);
    }

    #[tokio::test]
    async fn test_spawned_searches_only_latest_wins() {
        let service = service(30);

        let first = service.spawn(FilterCriteria::new().with_category(Category::Soup)).unwrap();
        let second = service.spawn(FilterCriteria::new().with_category(Category::Staple)).unwrap();

        assert!(matches!(first.await.unwrap(), SearchOutcome::Superseded { .. }));
        let results = second.await.unwrap().into_results().unwrap();
        assert_eq!(results[0].id, "dish005");
    }

    #[tokio::test]
    async fn test_aborted_search_never_completes() {
        let bus = event_bus();
        let service = Arc::new(SearchService::new(catalog(), bus.clone(), Duration::from_millis(200)));

        let handle = service.spawn(FilterCriteria::new().with_category(Category::Meat)).unwrap();
        handle.abort();

        assert!(handle.await.unwrap_err().is_cancelled());
        assert!(bus.get_event_log().is_empty());
    }
}
