pub mod browse;
pub mod commands;
pub mod render;
pub mod router;

use anyhow::{Context, Result};
use clap::ValueEnum;
use salesdeck_app_core::persistence::FilePersistence;
use salesdeck_app_core::{AppSettings, LanguageHints, LocaleSignal};
use salesdeck_core::{Level, Locale};
use salesdeck_infra::ApiClient;
use std::path::PathBuf;
use std::sync::Arc;

pub use router::TerminalRouter;

#[derive(ValueEnum, Clone, Debug, Copy)]
pub enum CliLocale {
    En,
    Fr,
}

impl From<CliLocale> for Locale {
    fn from(l: CliLocale) -> Self {
        match l {
            CliLocale::En => Locale::En,
            CliLocale::Fr => Locale::Fr,
        }
    }
}

#[derive(ValueEnum, Clone, Debug, Copy)]
pub enum CliLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl From<CliLevel> for Level {
    fn from(l: CliLevel) -> Self {
        match l {
            CliLevel::Beginner => Level::Beginner,
            CliLevel::Intermediate => Level::Intermediate,
            CliLevel::Advanced => Level::Advanced,
        }
    }
}

/// Everything one invocation needs: API client, stored settings, routing state.
pub struct Session {
    pub api: ApiClient,
    pub settings: AppSettings,
    pub persistence: Arc<FilePersistence>,
    pub router: Arc<TerminalRouter>,
}

impl Session {
    pub fn open(api_url: Option<&str>, config_dir: Option<PathBuf>) -> Result<Self> {
        let persistence = match config_dir {
            Some(dir) => FilePersistence::with_dir(dir),
            None => FilePersistence::new(),
        };
        let settings = persistence
            .load_settings()
            .context("Failed to load settings")?;

        let base_url = settings.resolve_api_url(api_url);
        let client =
            salesdeck_infra::default_http_client().context("Failed to build HTTP client")?;
        let api = ApiClient::new(client, &base_url)
            .with_context(|| format!("Invalid API URL '{base_url}'"))?;

        Ok(Self {
            api,
            settings,
            persistence: Arc::new(persistence),
            router: Arc::new(TerminalRouter::default()),
        })
    }

    pub fn page_size(&self) -> u32 {
        self.settings.effective_page_size()
    }

    /// Initialized locale signal. `route` is a locale picked for this
    /// invocation only (`--lang`); it is applied like a direct URL visit and
    /// is not persisted.
    pub fn locale_signal(&self, route: Option<Locale>) -> LocaleSignal {
        let mut signal = LocaleSignal::new(self.persistence.clone(), self.router.clone());
        signal.initialize(&LanguageHints::from_env(self.router.current()));
        if let Some(locale) = route {
            signal.sync_from_route(locale);
        }
        signal
    }
}
