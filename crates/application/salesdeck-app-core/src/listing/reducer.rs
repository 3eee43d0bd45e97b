use salesdeck_core::ListingFilters;
use tracing::debug;

use super::events::ListingEvent;
use super::{ListingState, ResultStore, SettlementOrder};

pub fn reduce<T>(state: &mut ListingState<T>, ev: ListingEvent<T>) {
    match ev {
        ListingEvent::SearchTyped(raw) => state.raw_search = raw,

        ListingEvent::SearchCommitted(search) => {
            state.filters.search = search;
            state.filters.page = 1;
        }

        ListingEvent::CategorySelected(category) => {
            state.filters.category = category;
            state.filters.page = 1;
        }

        ListingEvent::LevelSelected(level) => {
            state.filters.level = level;
            state.filters.page = 1;
        }

        ListingEvent::FiltersCleared => {
            state.filters = ListingFilters::default();
            state.raw_search.clear();
        }

        ListingEvent::PageChanged(page) => state.filters.page = page,

        ListingEvent::FetchStarted { seq } => {
            state.loading = true;
            state.last_issued = Some(seq);
            state.in_flight += 1;
        }

        ListingEvent::FetchSettled { seq, outcome } => {
            state.in_flight = state.in_flight.saturating_sub(1);

            if state.settlement == SettlementOrder::LatestIssued && state.last_issued != Some(seq)
            {
                debug!("Dropping superseded {:?} settlement {seq:?}", state.kind);
                return;
            }

            state.loading = false;
            match outcome {
                Ok(page) => {
                    state.results = ResultStore::from(page);
                    state.last_failure = None;
                }
                Err(message) => state.last_failure = Some(message),
            }
        }
    }
}
