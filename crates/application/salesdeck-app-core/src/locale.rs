//! Process-wide language state.
//!
//! `LocaleSignal` is the only writer of the current locale. Reads go through
//! [`LocaleSignal::current`]; writes go through [`LocaleSignal::set_locale`],
//! which also persists the choice and pushes it to the routing layer.

use std::sync::Arc;

use salesdeck_core::Locale;
use tracing::{debug, warn};

use crate::ports::{PreferenceStore, RoutingPort};

/// Language information available before a stored preference is consulted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageHints {
    /// Language reported by the client environment (`fr-CA`, `en_US.UTF-8`, ...).
    pub reported: Option<String>,
    /// Locale the routing layer already resolved, if any.
    pub routing: Option<Locale>,
}

impl LanguageHints {
    /// Reads the reported language from `LC_ALL`, `LC_MESSAGES`, then `LANG`.
    pub fn from_env(routing: Option<Locale>) -> Self {
        let reported = ["LC_ALL", "LC_MESSAGES", "LANG"]
            .iter()
            .filter_map(|key| std::env::var(key).ok())
            .find(|v| is_meaningful_tag(v));
        Self { reported, routing }
    }
}

fn is_meaningful_tag(v: &str) -> bool {
    let v = v.trim();
    !v.is_empty() && v != "C" && v != "POSIX" && !v.starts_with("C.")
}

pub struct LocaleSignal {
    current: Locale,
    initialized: bool,
    store: Arc<dyn PreferenceStore>,
    router: Arc<dyn RoutingPort>,
}

impl LocaleSignal {
    pub fn new(store: Arc<dyn PreferenceStore>, router: Arc<dyn RoutingPort>) -> Self {
        Self {
            current: Locale::default(),
            initialized: false,
            store,
            router,
        }
    }

    pub fn current(&self) -> Locale {
        self.current
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Resolves the starting locale once per session:
    /// stored preference, then reported language, then routing locale, then `en`.
    /// Later calls return the current locale untouched.
    pub fn initialize(&mut self, hints: &LanguageHints) -> Locale {
        if self.initialized {
            return self.current;
        }

        let stored = match self.store.load_preferred_language() {
            Ok(v) => v,
            Err(e) => {
                warn!("Failed to read stored language preference: {e:#}");
                None
            }
        };

        let locale = stored
            .as_deref()
            .and_then(|tag| tag.parse::<Locale>().ok())
            .or_else(|| hints.reported.as_deref().map(Locale::from_language_tag))
            .or(hints.routing)
            .unwrap_or_default();

        debug!("Initial locale resolved to {locale} (stored={stored:?}, hints={hints:?})");
        self.set_locale(locale);
        self.initialized = true;
        locale
    }

    /// Updates the locale in memory, persists it and syncs the router.
    /// Side-effect failures are logged; the in-memory value always changes.
    /// Returns whether the locale differs from the previous one.
    pub fn set_locale(&mut self, locale: Locale) -> bool {
        let changed = self.current != locale;
        self.current = locale;

        if let Err(e) = self.store.save_preferred_language(locale.as_str()) {
            warn!("Failed to persist language preference {locale}: {e:#}");
        }
        if let Err(e) = self.router.set_locale(locale) {
            warn!("Failed to route to locale {locale}: {e:#}");
        }
        changed
    }

    /// Flips between the two supported locales.
    pub fn toggle(&mut self) -> Locale {
        let next = self.current.toggled();
        self.set_locale(next);
        next
    }

    /// Adopts a locale the routing layer changed on its own (direct navigation).
    /// Memory only: nothing is persisted and the router is not called back.
    pub fn sync_from_route(&mut self, locale: Locale) -> bool {
        if self.current == locale {
            return false;
        }
        debug!("Locale resynced from route: {} -> {locale}", self.current);
        self.current = locale;
        true
    }
}
