use salesdeck_core::{ContentKind, ListEnvelope, ListingFilters, Pagination};

pub mod commands;
pub mod events;
pub mod pagination;
pub mod reducer;

pub use commands::ListingCommand;
pub use events::{FetchOutcome, ListingEvent};
pub use reducer::reduce;

/// Monotonic tag of one dispatched list request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FetchSeq(pub u64);

/// Which settlement is allowed to update the result store when requests overlap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SettlementOrder {
    /// Only the most recently issued request may commit; older ones are dropped.
    #[default]
    LatestIssued,
    /// Every settlement commits in arrival order. A slow older request can
    /// overwrite a newer result.
    Arrival,
}

/// Side effects the presentation layer must perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingEffect {
    ScrollToTop,
}

/// Last successfully fetched page.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultStore<T> {
    pub items: Vec<T>,
    pub pagination: Pagination,
}

impl<T> ResultStore<T> {
    pub fn empty(limit: u32) -> Self {
        Self {
            items: Vec::new(),
            pagination: Pagination::empty(limit),
        }
    }
}

impl<T> From<ListEnvelope<T>> for ResultStore<T> {
    fn from(env: ListEnvelope<T>) -> Self {
        Self {
            items: env.data,
            pagination: env.pagination,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ListingState<T> {
    pub kind: ContentKind,
    pub filters: ListingFilters,
    /// What the search box shows; may run ahead of `filters.search`.
    pub raw_search: String,
    pub results: ResultStore<T>,
    pub loading: bool,
    pub settlement: SettlementOrder,
    pub last_issued: Option<FetchSeq>,
    pub in_flight: usize,
    /// Message of the most recent committed failure, cleared by the next success.
    pub last_failure: Option<String>,
}

impl<T> ListingState<T> {
    pub fn new(kind: ContentKind, initial: ResultStore<T>, settlement: SettlementOrder) -> Self {
        Self {
            kind,
            filters: ListingFilters::default(),
            raw_search: String::new(),
            results: initial,
            loading: false,
            settlement,
            last_issued: None,
            in_flight: 0,
            last_failure: None,
        }
    }

    pub fn page_numbers(&self) -> Vec<u32> {
        self.results.pagination.page_numbers()
    }

    /// Pagination controls are hidden while loading and when there is nothing to page through.
    pub fn show_pagination(&self) -> bool {
        !self.loading && !self.results.items.is_empty()
    }

    pub fn view(&self) -> ListingView<'_, T> {
        if self.loading {
            ListingView::Loading
        } else if !self.results.items.is_empty() {
            ListingView::Items(&self.results.items)
        } else if let Some(reason) = &self.last_failure {
            ListingView::Unavailable { reason }
        } else {
            ListingView::NoResults
        }
    }
}

/// What a listing should render right now.
///
/// A failed fetch over an empty store is `Unavailable`, kept apart from a
/// successful fetch that matched nothing (`NoResults`). A failed fetch over
/// existing items keeps showing those items.
#[derive(Debug, PartialEq)]
pub enum ListingView<'a, T> {
    Loading,
    Items(&'a [T]),
    NoResults,
    Unavailable { reason: &'a str },
}
