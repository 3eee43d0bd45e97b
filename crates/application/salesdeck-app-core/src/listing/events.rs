use salesdeck_core::{Level, ListEnvelope};

use super::FetchSeq;

pub type FetchOutcome<T> = Result<ListEnvelope<T>, String>;

#[derive(Debug, Clone)]
pub enum ListingEvent<T> {
    // Filter transitions
    SearchTyped(String),
    SearchCommitted(String),
    CategorySelected(String),
    LevelSelected(Option<Level>),
    FiltersCleared,
    PageChanged(u32),

    // Fetch lifecycle
    FetchStarted { seq: FetchSeq },
    FetchSettled { seq: FetchSeq, outcome: FetchOutcome<T> },
}
