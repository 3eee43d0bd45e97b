//! Plain-text rendering of listings and detail pages.

use salesdeck_app_core::{LandingBlocks, ListingState, ListingView};
use salesdeck_core::{Article, Category, ContentKind, Course, Locale, Pagination};

/// One entry of a listing.
pub trait ListingRow {
    fn row(&self) -> String;
}

impl ListingRow for Course {
    fn row(&self) -> String {
        format!(
            "{}  [{} | {} | {} modules]\n      {}\n      id: {}",
            self.display_title(),
            self.display_level(),
            self.display_duration(),
            self.display_modules(),
            self.display_description(),
            self.route_id(),
        )
    }
}

impl ListingRow for Article {
    fn row(&self) -> String {
        format!(
            "{}  [{} | {}]\n      {}\n      id: {}",
            self.display_title(),
            self.display_author(),
            self.display_date(),
            self.display_excerpt(),
            self.route_id(),
        )
    }
}

pub fn kind_label(kind: ContentKind) -> &'static str {
    match kind {
        ContentKind::Courses => "courses",
        ContentKind::Articles => "articles",
    }
}

fn title_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Dense page list with the current page bracketed: `1 [2] 3`.
pub fn pager(pagination: &Pagination, current: u32) -> String {
    let pages: Vec<String> = pagination
        .page_numbers()
        .into_iter()
        .map(|n| {
            if n == current {
                format!("[{n}]")
            } else {
                n.to_string()
            }
        })
        .collect();
    format!(
        "Page {} of {} ({} total): {}",
        current,
        pagination.pages,
        pagination.total,
        pages.join(" ")
    )
}

pub fn listing<T: ListingRow>(state: &ListingState<T>, locale: Locale) -> String {
    let label = kind_label(state.kind);
    let mut lines = vec![format!(":: {} ({})", title_case(label), locale.audience())];

    let filters = &state.filters;
    if filters.is_filtered() {
        let mut active = Vec::new();
        if !filters.category.is_empty() {
            active.push(format!("category={}", filters.category));
        }
        if let Some(level) = filters.level {
            active.push(format!("level={level}"));
        }
        if !filters.search.is_empty() {
            active.push(format!("search=\"{}\"", filters.search));
        }
        lines.push(format!("   Filters: {}", active.join(", ")));
    }

    match state.view() {
        ListingView::Loading => lines.push("   Loading...".to_string()),
        ListingView::NoResults => lines.push(format!("   No {label} found")),
        ListingView::Unavailable { reason } => {
            lines.push(format!("   {} are unavailable right now: {reason}", title_case(label)))
        }
        ListingView::Items(items) => {
            for (i, item) in items.iter().enumerate() {
                lines.push(format!("  {:>2}. {}", i + 1, item.row()));
            }
            if let Some(reason) = &state.last_failure {
                lines.push(format!("   (last refresh failed: {reason})"));
            }
        }
    }

    if state.show_pagination() {
        lines.push(format!(
            "   {}",
            pager(&state.results.pagination, state.filters.page)
        ));
    }

    lines.join("\n")
}

fn category_names(categories: &[Category]) -> String {
    categories
        .iter()
        .map(|c| c.name.as_str())
        .filter(|n| !n.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn course_detail(course: &Course) -> String {
    let mut lines = vec![
        format!(":: {}", course.display_title()),
        format!("   Level:    {}", course.display_level()),
        format!("   Duration: {}", course.display_duration()),
        format!("   Modules:  {}", course.display_modules()),
    ];
    if !course.categories.is_empty() {
        lines.push(format!("   Topics:   {}", category_names(&course.categories)));
    }
    lines.push(format!("   Image:    {}", course.display_image()));
    lines.push(String::new());
    lines.push(course.display_description().to_string());
    lines.join("\n")
}

pub fn article_detail(article: &Article) -> String {
    let mut lines = vec![
        format!(":: {}", article.display_title()),
        format!("   By {} on {}", article.display_author(), article.display_date()),
    ];
    if !article.categories.is_empty() {
        lines.push(format!("   Topics: {}", category_names(&article.categories)));
    }
    lines.push(String::new());
    lines.push(article.display_body().to_string());
    lines.join("\n")
}

pub fn categories(kind: ContentKind, categories: &[Category]) -> String {
    let mut lines = vec![format!(":: {} categories", title_case(kind_label(kind)))];
    if categories.is_empty() {
        lines.push("   (none)".to_string());
    }
    let width = categories.iter().map(|c| c.slug.len()).max().unwrap_or(0);
    for c in categories {
        lines.push(format!("   {:<width$}  {}", c.slug, c.name));
    }
    lines.join("\n")
}

/// Landing page: featured courses, then latest articles. Empty blocks are omitted.
pub fn landing(blocks: &LandingBlocks) -> String {
    let mut lines = vec![format!(":: Welcome ({})", blocks.locale.audience())];
    if !blocks.courses.is_empty() {
        lines.push(String::new());
        lines.push(":: Featured courses".to_string());
        for (i, course) in blocks.courses.iter().enumerate() {
            lines.push(format!("  {:>2}. {}", i + 1, course.row()));
        }
    }
    if !blocks.articles.is_empty() {
        lines.push(String::new());
        lines.push(":: Latest articles".to_string());
        for (i, article) in blocks.articles.iter().enumerate() {
            lines.push(format!("  {:>2}. {}", i + 1, article.row()));
        }
    }
    lines.join("\n")
}
