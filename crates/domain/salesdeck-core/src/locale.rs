use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Fr,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported locale '{0}' (expected one of: en, fr)")]
pub struct ParseLocaleError(pub String);

impl Locale {
    pub const SUPPORTED: [Locale; 2] = [Locale::En, Locale::Fr];

    pub fn as_str(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Fr => "fr",
        }
    }

    /// The other of the two supported locales.
    pub fn toggled(self) -> Self {
        match self {
            Locale::En => Locale::Fr,
            Locale::Fr => Locale::En,
        }
    }

    /// Maps a reported language tag (`fr-CA`, `fr_FR.UTF-8`, `en-US`, ...) by prefix.
    /// Anything that is not French falls back to English.
    pub fn from_language_tag(tag: &str) -> Self {
        if tag.trim().to_ascii_lowercase().starts_with("fr") {
            Locale::Fr
        } else {
            Locale::En
        }
    }

    pub fn audience(self) -> Audience {
        Audience::from(self)
    }
}

impl FromStr for Locale {
    type Err = ParseLocaleError;

    /// Strict parse: only the exact supported tags are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Locale::En),
            "fr" => Ok(Locale::Fr),
            other => Err(ParseLocaleError(other.to_string())),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Backend content variant selected by the locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Audience {
    English,
    French,
}

impl Audience {
    pub fn as_str(self) -> &'static str {
        match self {
            Audience::English => "english",
            Audience::French => "french",
        }
    }
}

impl From<Locale> for Audience {
    fn from(locale: Locale) -> Self {
        match locale {
            Locale::Fr => Audience::French,
            Locale::En => Audience::English,
        }
    }
}

impl fmt::Display for Audience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
