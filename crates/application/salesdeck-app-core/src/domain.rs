use serde::{Deserialize, Serialize};

fn default_page_size() -> u32 {
    salesdeck_config::DEFAULT_PAGE_SIZE
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppSettings {
    #[serde(default)]
    pub api_url: Option<String>,
    #[serde(default)]
    pub preferred_language: Option<String>,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_url: None,
            preferred_language: None,
            page_size: default_page_size(),
        }
    }
}

impl AppSettings {
    /// Resolution order: explicit override, environment, stored setting, built-in default.
    pub fn resolve_api_url(&self, explicit: Option<&str>) -> String {
        explicit
            .map(str::to_string)
            .or_else(|| {
                std::env::var(salesdeck_config::API_URL_ENV)
                    .ok()
                    .filter(|v| !v.trim().is_empty())
            })
            .or_else(|| self.api_url.clone())
            .unwrap_or_else(|| salesdeck_config::DEFAULT_API_URL.to_string())
    }

    pub fn effective_page_size(&self) -> u32 {
        salesdeck_config::clamp_page_size(self.page_size)
    }
}
