use crate::render::{self, ListingRow};
use crate::Session;
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use salesdeck_app_core::{
    landing_blocks, ListingState, ResultStore, SettlementOrder, SignupForm,
};
use salesdeck_core::{ContentKind, Level, ListingFilters, Locale};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::warn;

#[derive(Debug, Clone, Default)]
pub struct ListArgs {
    pub page: u32,
    pub category: Option<String>,
    pub level: Option<Level>,
    pub search: Option<String>,
    pub lang: Option<Locale>,
}

#[derive(Debug, Clone, Copy)]
pub enum LangAction {
    Show,
    Set(Locale),
    Toggle,
}

fn spinner(message: String) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

pub async fn cmd_home(session: &Session, lang: Option<Locale>) -> Result<String> {
    let locale = session.locale_signal(lang).current();

    let pb = spinner("Fetching highlights...".to_string());
    let blocks = landing_blocks(&session.api, locale).await;
    pb.finish_and_clear();

    Ok(render::landing(&blocks))
}

pub async fn cmd_list(session: &Session, kind: ContentKind, args: ListArgs) -> Result<String> {
    match kind {
        ContentKind::Courses => list_page::<salesdeck_core::Course>(session, kind, args).await,
        ContentKind::Articles => list_page::<salesdeck_core::Article>(session, kind, args).await,
    }
}

async fn list_page<T: DeserializeOwned + ListingRow>(
    session: &Session,
    kind: ContentKind,
    args: ListArgs,
) -> Result<String> {
    let locale = session.locale_signal(args.lang).current();

    let mut filters = ListingFilters {
        page: args.page.max(1),
        category: args.category.unwrap_or_default(),
        level: args.level,
        search: args.search.unwrap_or_default().trim().to_string(),
    };
    if filters.level.is_some() && !kind.supports_level() {
        warn!("{} cannot be filtered by level; ignoring --level", render::kind_label(kind));
        filters.level = None;
    }
    let query = filters.to_query(session.page_size(), locale.audience());

    let pb = spinner(format!("Fetching {}...", render::kind_label(kind)));
    let result = session.api.list::<T>(kind, &query).await;
    pb.finish_and_clear();
    let env = result.with_context(|| format!("Failed to fetch {}", render::kind_label(kind)))?;

    let mut state = ListingState::new(kind, ResultStore::from(env), SettlementOrder::default());
    state.filters = filters;
    Ok(render::listing(&state, locale))
}

pub async fn cmd_show(
    session: &Session,
    kind: ContentKind,
    id: &str,
    lang: Option<Locale>,
) -> Result<String> {
    let audience = session.locale_signal(lang).current().audience();
    let label = render::kind_label(kind);

    let pb = spinner(format!("Fetching {id}..."));
    let out = match kind {
        ContentKind::Courses => session
            .api
            .course(id, audience)
            .await
            .map(|c| render::course_detail(&c)),
        ContentKind::Articles => session
            .api
            .article(id, audience)
            .await
            .map(|a| render::article_detail(&a)),
    };
    pb.finish_and_clear();

    out.with_context(|| format!("Failed to fetch {label} '{id}'"))
}

pub async fn cmd_categories(session: &Session, kind: ContentKind) -> Result<String> {
    let categories = session
        .api
        .categories(kind)
        .await
        .with_context(|| format!("Failed to fetch {} categories", render::kind_label(kind)))?;
    Ok(render::categories(kind, &categories))
}

pub async fn cmd_signup(session: &Session, mut form: SignupForm) -> Result<String> {
    let email = form.email.clone();
    form.submit(&session.api).await?;
    Ok(format!(":: Account created for {email}"))
}

pub fn cmd_lang(session: &Session, action: LangAction) -> Result<String> {
    let mut signal = session.locale_signal(None);
    let before = signal.current();

    let out = match action {
        LangAction::Show => format!(":: Language: {before}"),
        LangAction::Set(locale) => {
            if signal.set_locale(locale) {
                format!(":: Language changed: {before} -> {locale}")
            } else {
                format!(":: Language already {locale}")
            }
        }
        LangAction::Toggle => {
            let after = signal.toggle();
            format!(":: Language changed: {before} -> {after}")
        }
    };
    Ok(out)
}
