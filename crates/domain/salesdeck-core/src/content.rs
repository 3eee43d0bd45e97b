//! Content items as the backend returns them.
//!
//! Every field is optional on the wire. Missing, null or mistyped values are
//! never an error; the `display_*` accessors substitute the fallbacks the
//! site shows instead.

use serde::{Deserialize, Serialize};

use crate::lenient;

pub const PLACEHOLDER_IMAGE: &str = "/images/placeholder.jpg";
pub const NO_DESCRIPTION: &str = "No description available";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    #[serde(rename = "_id", default, deserialize_with = "lenient::or_default")]
    pub object_id: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub slug: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    #[serde(rename = "_id", default, deserialize_with = "lenient::or_default")]
    pub object_id: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub level: Option<String>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub duration: Option<String>,
    #[serde(default, deserialize_with = "lenient::count")]
    pub modules: Option<u32>,
    #[serde(default, deserialize_with = "lenient::vec")]
    pub categories: Vec<Category>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    #[serde(rename = "_id", default, deserialize_with = "lenient::or_default")]
    pub object_id: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub excerpt: Option<String>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub author: Option<String>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "lenient::vec")]
    pub categories: Vec<Category>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub html_content: Option<String>,
}

fn or_fallback<'a>(value: &'a Option<String>, fallback: &'a str) -> &'a str {
    match value.as_deref() {
        Some(v) if !v.is_empty() => v,
        _ => fallback,
    }
}

fn route_id<'a>(id: &'a str, object_id: &'a str) -> &'a str {
    if id.is_empty() {
        object_id
    } else {
        id
    }
}

impl Course {
    /// Identifier used for the detail route.
    pub fn route_id(&self) -> &str {
        route_id(&self.id, &self.object_id)
    }

    pub fn display_title(&self) -> &str {
        or_fallback(&self.title, "Untitled Course")
    }

    pub fn display_description(&self) -> &str {
        or_fallback(&self.description, NO_DESCRIPTION)
    }

    pub fn display_level(&self) -> &str {
        or_fallback(&self.level, "Beginner")
    }

    pub fn display_duration(&self) -> &str {
        or_fallback(&self.duration, "Self-paced")
    }

    pub fn display_modules(&self) -> u32 {
        self.modules.unwrap_or(0)
    }

    pub fn display_image(&self) -> &str {
        or_fallback(&self.image, PLACEHOLDER_IMAGE)
    }
}

impl Article {
    pub fn route_id(&self) -> &str {
        route_id(&self.id, &self.object_id)
    }

    pub fn display_title(&self) -> &str {
        or_fallback(&self.title, "Untitled Article")
    }

    pub fn display_excerpt(&self) -> &str {
        or_fallback(&self.excerpt, NO_DESCRIPTION)
    }

    pub fn display_author(&self) -> &str {
        or_fallback(&self.author, "Anonymous")
    }

    pub fn display_date(&self) -> &str {
        or_fallback(&self.date, "No date")
    }

    pub fn display_image(&self) -> &str {
        or_fallback(&self.image, PLACEHOLDER_IMAGE)
    }

    /// Body of the article, falling back to the excerpt when the backend sent no HTML.
    pub fn display_body(&self) -> &str {
        match self.html_content.as_deref() {
            Some(html) if !html.is_empty() => html,
            _ => self.display_excerpt(),
        }
    }
}
