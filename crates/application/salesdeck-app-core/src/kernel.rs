use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::mpsc;
use tracing::{debug, error, warn};

use crate::clock::Clock;
use crate::debounce::SearchCoalescer;
use crate::listing::pagination::{next_page, prev_page};
use crate::listing::{
    reduce, FetchOutcome, FetchSeq, ListingCommand, ListingEffect, ListingEvent, ListingState,
    ResultStore, SettlementOrder,
};
use crate::locale::{LanguageHints, LocaleSignal};
use crate::ports::ListingSource;

#[derive(Debug, Clone)]
pub struct ListingOptions {
    pub page_size: u32,
    pub quiet_period: Duration,
    pub settlement: SettlementOrder,
}

impl Default for ListingOptions {
    fn default() -> Self {
        Self {
            page_size: salesdeck_config::DEFAULT_PAGE_SIZE,
            quiet_period: Duration::from_millis(salesdeck_config::SEARCH_QUIET_PERIOD_MS),
            settlement: SettlementOrder::default(),
        }
    }
}

/// Controller of one filterable listing (courses or articles).
///
/// Commands mutate filter state synchronously and dispatch at most one fetch.
/// Fetches run on the tokio runtime and report back through a channel that
/// [`ListingKernel::tick`] (or the async `settle_*` helpers) drains.
pub struct ListingKernel<S: ListingSource> {
    state: ListingState<S::Item>,
    source: Arc<S>,
    locale: LocaleSignal,
    clock: Arc<dyn Clock>,
    search: SearchCoalescer,
    page_size: u32,
    runtime: tokio::runtime::Handle,

    next_seq: u64,
    mounted: bool,
    effects: Vec<ListingEffect>,

    tx: mpsc::UnboundedSender<ListingEvent<S::Item>>,
    rx: mpsc::UnboundedReceiver<ListingEvent<S::Item>>,
}

impl<S: ListingSource> ListingKernel<S> {
    pub fn new(
        source: S,
        mut locale: LocaleSignal,
        clock: Arc<dyn Clock>,
        options: ListingOptions,
    ) -> anyhow::Result<Self> {
        if !locale.is_initialized() {
            locale.initialize(&LanguageHints::default());
        }

        let runtime = crate::async_runtime::handle()?;
        let page_size = salesdeck_config::clamp_page_size(options.page_size);
        let (tx, rx) = mpsc::unbounded_channel();
        Ok(Self {
            state: ListingState::new(
                source.kind(),
                ResultStore::empty(page_size),
                options.settlement,
            ),
            source: Arc::new(source),
            locale,
            clock,
            search: SearchCoalescer::new(options.quiet_period),
            page_size,
            runtime,
            next_seq: 0,
            mounted: false,
            effects: Vec::new(),
            tx,
            rx,
        })
    }

    pub fn state(&self) -> &ListingState<S::Item> {
        &self.state
    }

    pub fn locale(&self) -> &LocaleSignal {
        &self.locale
    }

    /// Hands the locale signal back, e.g. to the next listing after navigation.
    pub fn into_locale(self) -> LocaleSignal {
        self.locale
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// When the pending search input will be committed, if any.
    pub fn search_deadline(&self) -> Option<Instant> {
        self.search.deadline()
    }

    pub fn drain_effects(&mut self) -> Vec<ListingEffect> {
        std::mem::take(&mut self.effects)
    }

    fn apply(&mut self, ev: ListingEvent<S::Item>) {
        reduce(&mut self.state, ev);
    }

    /// Applies a filter transition and refreshes if any dimension actually moved.
    fn transition(&mut self, ev: ListingEvent<S::Item>) {
        let before = self.state.filters.clone();
        self.apply(ev);
        if self.state.filters != before {
            debug!(
                "{:?} filters: {:?} -> {:?}",
                self.state.kind, before, self.state.filters
            );
            self.refresh();
        }
    }

    fn change_page(&mut self, page: u32) {
        self.effects.push(ListingEffect::ScrollToTop);
        self.transition(ListingEvent::PageChanged(page));
    }

    pub fn dispatch(&mut self, cmd: ListingCommand<S::Item>) {
        match cmd {
            ListingCommand::Mount { initial } => {
                if self.mounted {
                    return;
                }
                if let Some(initial) = initial {
                    self.state.results = ResultStore::from(initial);
                }
                self.mounted = true;
                self.refresh();
            }

            ListingCommand::Unmount => {
                if self.search.cancel() {
                    debug!("Cancelled pending search on unmount");
                }
                self.mounted = false;
            }

            ListingCommand::SearchInput(raw) => {
                self.search.push(raw.clone(), self.clock.now());
                self.apply(ListingEvent::SearchTyped(raw));
            }

            ListingCommand::SelectCategory(slug) => {
                let next = if slug == self.state.filters.category {
                    String::new()
                } else {
                    slug
                };
                self.transition(ListingEvent::CategorySelected(next));
            }

            ListingCommand::SelectLevel(level) => {
                if !self.state.kind.supports_level() {
                    warn!("{:?} listings cannot be filtered by level", self.state.kind);
                    return;
                }
                let next = if level == self.state.filters.level {
                    None
                } else {
                    level
                };
                self.transition(ListingEvent::LevelSelected(next));
            }

            ListingCommand::ClearFilters => {
                self.search.cancel();
                self.transition(ListingEvent::FiltersCleared);
            }

            ListingCommand::PrevPage => {
                if let Some(page) = prev_page(self.state.filters.page) {
                    self.change_page(page);
                }
            }

            ListingCommand::NextPage => {
                let pagination = &self.state.results.pagination;
                if let Some(page) = next_page(self.state.filters.page, pagination) {
                    self.change_page(page);
                }
            }

            ListingCommand::GoToPage(page) => self.change_page(page),

            ListingCommand::SetLocale(locale) => {
                if self.locale.set_locale(locale) {
                    self.refresh();
                }
            }

            ListingCommand::ToggleLocale => {
                self.locale.toggle();
                self.refresh();
            }

            ListingCommand::RouteLocaleChanged(locale) => {
                if self.locale.sync_from_route(locale) {
                    self.refresh();
                }
            }

            ListingCommand::Refresh => self.refresh(),
        }
    }

    /// Dispatches one list request for the current filters and locale.
    fn refresh(&mut self) {
        if !self.mounted {
            return;
        }

        self.next_seq += 1;
        let seq = FetchSeq(self.next_seq);
        let kind = self.state.kind;

        let mut query = self
            .state
            .filters
            .to_query(self.page_size, self.locale.current().audience());
        if !kind.supports_level() {
            query = query.without_level();
        }
        debug!("Fetching {} {seq:?} with params: {:?}", kind.collection(), query.pairs());

        self.apply(ListingEvent::FetchStarted { seq });

        let source = self.source.clone();
        let settle = SettleGuard {
            seq,
            tx: self.tx.clone(),
            done: false,
        };
        self.runtime.spawn(async move {
            let outcome = source.fetch_page(query).await.map_err(|e| {
                error!("Error fetching {}: {e:#}", kind.collection());
                format!("{e:#}")
            });
            settle.finish(outcome);
        });
    }

    /// Commits a due search value and applies every settled fetch.
    pub fn tick(&mut self) {
        if let Some(committed) = self.search.poll(self.clock.now()) {
            self.transition(ListingEvent::SearchCommitted(committed));
        }

        while let Ok(ev) = self.rx.try_recv() {
            self.receive(ev);
        }
    }

    fn receive(&mut self, ev: ListingEvent<S::Item>) {
        if self.mounted {
            self.apply(ev);
        } else if matches!(ev, ListingEvent::FetchSettled { .. }) {
            self.state.in_flight = self.state.in_flight.saturating_sub(1);
        }
    }

    /// Waits for the next fetch to settle and applies it.
    /// Returns `None` when nothing is in flight.
    pub async fn settle_next(&mut self) -> Option<FetchSeq> {
        if self.state.in_flight == 0 {
            return None;
        }
        let ev = self.rx.recv().await?;
        let seq = match &ev {
            ListingEvent::FetchSettled { seq, .. } => Some(*seq),
            _ => None,
        };
        self.receive(ev);
        seq
    }

    /// Waits until every dispatched fetch has settled.
    pub async fn settle_all(&mut self) {
        while self.settle_next().await.is_some() {}
    }
}

/// Reports a fetch as settled exactly once, even if the task is dropped mid-flight.
struct SettleGuard<T> {
    seq: FetchSeq,
    tx: mpsc::UnboundedSender<ListingEvent<T>>,
    done: bool,
}

impl<T> SettleGuard<T> {
    fn finish(mut self, outcome: FetchOutcome<T>) {
        self.done = true;
        let _ = self.tx.send(ListingEvent::FetchSettled {
            seq: self.seq,
            outcome,
        });
    }
}

impl<T> Drop for SettleGuard<T> {
    fn drop(&mut self) {
        if !self.done {
            let _ = self.tx.send(ListingEvent::FetchSettled {
                seq: self.seq,
                outcome: Err("fetch task aborted".to_string()),
            });
        }
    }
}
