#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use anyhow::Context;
use salesdeck_app_core::{
    LanguageHints, ListingCommand, ListingKernel, ListingOptions, ListingSource, LocaleSignal,
    ManualClock, PreferenceStore, RoutingPort, SettlementOrder,
};
use salesdeck_core::{ContentKind, ListEnvelope, ListQuery, Locale, Pagination};
use tokio::sync::oneshot;

pub type Page = ListEnvelope<String>;

pub fn page(page: u32, pages: u32, items: &[&str]) -> Page {
    ListEnvelope {
        status: "success".into(),
        results: items.len() as u64,
        pagination: Pagination {
            total: u64::from(pages) * 6,
            page,
            pages,
            limit: 6,
        },
        data: items.iter().map(|s| s.to_string()).collect(),
    }
}

#[derive(Default)]
pub struct MemoryPreferences {
    pub stored: Mutex<Option<String>>,
    pub writes: Mutex<Vec<String>>,
}

impl MemoryPreferences {
    pub fn with(tag: &str) -> Self {
        Self {
            stored: Mutex::new(Some(tag.to_string())),
            writes: Mutex::default(),
        }
    }

    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().unwrap().clone()
    }
}

impl PreferenceStore for MemoryPreferences {
    fn load_preferred_language(&self) -> anyhow::Result<Option<String>> {
        Ok(self.stored.lock().unwrap().clone())
    }

    fn save_preferred_language(&self, tag: &str) -> anyhow::Result<()> {
        *self.stored.lock().unwrap() = Some(tag.to_string());
        self.writes.lock().unwrap().push(tag.to_string());
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingRouter {
    pub routed: Mutex<Vec<Locale>>,
}

impl RecordingRouter {
    pub fn routed(&self) -> Vec<Locale> {
        self.routed.lock().unwrap().clone()
    }
}

impl RoutingPort for RecordingRouter {
    fn set_locale(&self, locale: Locale) -> anyhow::Result<()> {
        self.routed.lock().unwrap().push(locale);
        Ok(())
    }
}

type Gate = oneshot::Receiver<anyhow::Result<Page>>;

/// In-memory listing source. Records every query, answers immediately with a
/// synthetic page unless a failure is queued or the page is gated.
pub struct ScriptedSource {
    kind: ContentKind,
    pages: u32,
    queries: Arc<Mutex<Vec<ListQuery>>>,
    failures: Arc<Mutex<VecDeque<String>>>,
    gates: Arc<Mutex<HashMap<u32, Gate>>>,
}

#[derive(Clone)]
pub struct SourceHandle {
    queries: Arc<Mutex<Vec<ListQuery>>>,
    failures: Arc<Mutex<VecDeque<String>>>,
    gates: Arc<Mutex<HashMap<u32, Gate>>>,
}

impl SourceHandle {
    pub fn queries(&self) -> Vec<ListQuery> {
        self.queries.lock().unwrap().clone()
    }

    pub fn last_query(&self) -> ListQuery {
        self.queries().last().cloned().expect("no query recorded")
    }

    pub fn fetch_count(&self) -> usize {
        self.queries.lock().unwrap().len()
    }

    pub fn fail_next(&self, message: &str) {
        self.failures.lock().unwrap().push_back(message.to_string());
    }

    /// Holds the response for `page` until the returned sender fires.
    pub fn gate(&self, page: u32) -> oneshot::Sender<anyhow::Result<Page>> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().unwrap().insert(page, rx);
        tx
    }
}

impl ScriptedSource {
    pub fn new(kind: ContentKind, pages: u32) -> (Self, SourceHandle) {
        let source = Self {
            kind,
            pages,
            queries: Arc::default(),
            failures: Arc::default(),
            gates: Arc::default(),
        };
        let handle = SourceHandle {
            queries: source.queries.clone(),
            failures: source.failures.clone(),
            gates: source.gates.clone(),
        };
        (source, handle)
    }
}

#[async_trait::async_trait]
impl ListingSource for ScriptedSource {
    type Item = String;

    fn kind(&self) -> ContentKind {
        self.kind
    }

    async fn fetch_page(&self, query: ListQuery) -> anyhow::Result<Page> {
        self.queries.lock().unwrap().push(query.clone());

        let gate = self.gates.lock().unwrap().remove(&query.page);
        if let Some(gate) = gate {
            return gate.await.context("gate dropped")?;
        }

        let failure = self.failures.lock().unwrap().pop_front();
        if let Some(message) = failure {
            anyhow::bail!(message);
        }

        let item = format!("{}-p{}-{}", self.kind.collection(), query.page, query.audience);
        Ok(page(query.page, self.pages, &[item.as_str()]))
    }
}

pub struct Harness {
    pub kernel: ListingKernel<ScriptedSource>,
    pub source: SourceHandle,
    pub clock: Arc<ManualClock>,
    pub prefs: Arc<MemoryPreferences>,
    pub router: Arc<RecordingRouter>,
}

pub fn locale_signal(
    prefs: Arc<MemoryPreferences>,
    router: Arc<RecordingRouter>,
    hints: &LanguageHints,
) -> LocaleSignal {
    let mut signal = LocaleSignal::new(prefs, router);
    signal.initialize(hints);
    signal
}

pub fn harness(kind: ContentKind, pages: u32, settlement: SettlementOrder) -> Harness {
    let (source, handle) = ScriptedSource::new(kind, pages);
    let clock = Arc::new(ManualClock::new());
    let prefs = Arc::new(MemoryPreferences::default());
    let router = Arc::new(RecordingRouter::default());
    let locale = locale_signal(
        prefs.clone(),
        router.clone(),
        &LanguageHints {
            reported: Some("en-US".into()),
            routing: None,
        },
    );

    let kernel = ListingKernel::new(
        source,
        locale,
        clock.clone(),
        ListingOptions {
            settlement,
            ..ListingOptions::default()
        },
    )
    .unwrap();

    Harness {
        kernel,
        source: handle,
        clock,
        prefs,
        router,
    }
}

/// Harness mounted with server-supplied first page and its mount fetch settled.
pub async fn mounted(kind: ContentKind, pages: u32, settlement: SettlementOrder) -> Harness {
    let mut h = harness(kind, pages, settlement);
    h.kernel.dispatch(ListingCommand::Mount {
        initial: Some(page(1, pages, &["initial"])),
    });
    h.kernel.settle_all().await;
    h
}
