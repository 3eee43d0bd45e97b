use salesdeck_app_core::RoutingPort;
use salesdeck_core::Locale;
use std::sync::Mutex;
use tracing::debug;

/// Routing layer of a terminal session. Remembers which locale content is
/// rendered in.
#[derive(Debug, Default)]
pub struct TerminalRouter {
    active: Mutex<Option<Locale>>,
}

impl TerminalRouter {
    pub fn current(&self) -> Option<Locale> {
        *self.active.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl RoutingPort for TerminalRouter {
    fn set_locale(&self, locale: Locale) -> anyhow::Result<()> {
        debug!("Routing content to /{locale}");
        *self.active.lock().unwrap_or_else(|e| e.into_inner()) = Some(locale);
        Ok(())
    }
}
