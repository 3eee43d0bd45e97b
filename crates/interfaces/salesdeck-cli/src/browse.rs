//! Interactive listing session driven by the listing kernel.

use crate::render::{self, ListingRow};
use crate::Session;
use anyhow::Result;
use salesdeck_app_core::{
    initial_page, HttpListingSource, ListingCommand, ListingEffect, ListingKernel,
    ListingOptions, ListingSource, SystemClock,
};
use salesdeck_core::{Level, Locale};
use serde::de::DeserializeOwned;
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};

const TICK: Duration = Duration::from_millis(50);

pub const HELP: &str = "\
Commands:
  s <text>     search (applied after you stop typing)
  c [slug]     toggle a category, or clear it
  l [level]    toggle a level (courses only), or clear it
  x            clear all filters
  n / p        next / previous page
  g <n>        go to page n
  lang [en|fr] toggle or set the language
  r            refresh
  h            show this help
  q            quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseInput {
    Search(String),
    Category(String),
    Level(Option<Level>),
    Clear,
    Next,
    Prev,
    Page(u32),
    Lang(Option<Locale>),
    Refresh,
    Help,
    Quit,
}

pub fn parse_input(line: &str) -> Result<BrowseInput, String> {
    let line = line.trim_start();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((w, r)) => (w, r.trim()),
        None => (line.trim_end(), ""),
    };

    let input = match word {
        "s" | "/" => BrowseInput::Search(rest.to_string()),
        "c" => BrowseInput::Category(rest.to_string()),
        "l" if rest.is_empty() => BrowseInput::Level(None),
        "l" => BrowseInput::Level(Some(rest.parse().map_err(|_| {
            format!(
                "unknown level '{rest}' (one of: {})",
                salesdeck_config::COURSE_LEVELS.join(", ")
            )
        })?)),
        "x" | "clear" => BrowseInput::Clear,
        "n" => BrowseInput::Next,
        "p" => BrowseInput::Prev,
        "g" => BrowseInput::Page(
            rest.parse()
                .ok()
                .filter(|n| *n >= 1)
                .ok_or_else(|| format!("not a page number: '{rest}'"))?,
        ),
        "lang" if rest.is_empty() => BrowseInput::Lang(None),
        "lang" => BrowseInput::Lang(Some(rest.parse().map_err(|e| format!("{e}"))?)),
        "r" => BrowseInput::Refresh,
        "h" | "?" | "help" => BrowseInput::Help,
        "q" | "quit" | "exit" => BrowseInput::Quit,
        "" => return Err(String::new()),
        other => return Err(format!("unknown command '{other}' (h for help)")),
    };
    Ok(input)
}

impl BrowseInput {
    pub fn into_command<T>(self) -> Option<ListingCommand<T>> {
        let cmd = match self {
            BrowseInput::Search(text) => ListingCommand::SearchInput(text),
            BrowseInput::Category(slug) => ListingCommand::SelectCategory(slug),
            BrowseInput::Level(level) => ListingCommand::SelectLevel(level),
            BrowseInput::Clear => ListingCommand::ClearFilters,
            BrowseInput::Next => ListingCommand::NextPage,
            BrowseInput::Prev => ListingCommand::PrevPage,
            BrowseInput::Page(n) => ListingCommand::GoToPage(n),
            BrowseInput::Lang(Some(locale)) => ListingCommand::SetLocale(locale),
            BrowseInput::Lang(None) => ListingCommand::ToggleLocale,
            BrowseInput::Refresh => ListingCommand::Refresh,
            BrowseInput::Help | BrowseInput::Quit => return None,
        };
        Some(cmd)
    }
}

pub async fn run<T>(
    session: &Session,
    source: HttpListingSource<T>,
    lang: Option<Locale>,
) -> Result<()>
where
    T: DeserializeOwned + ListingRow + Clone + Send + Sync + 'static,
{
    let locale = session.locale_signal(lang);
    let page_size = session.page_size();
    let initial = initial_page(&source, page_size, locale.current().audience()).await;

    let mut kernel = ListingKernel::new(
        source,
        locale,
        Arc::new(SystemClock),
        ListingOptions {
            page_size,
            ..ListingOptions::default()
        },
    )?;
    kernel.dispatch(ListingCommand::Mount {
        initial: Some(initial),
    });

    println!("{}", render::listing(kernel.state(), kernel.locale().current()));
    println!("{HELP}");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut ticker = tokio::time::interval(TICK);
    let mut was_loading = kernel.state().loading;

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match parse_input(&line) {
                    Ok(BrowseInput::Quit) => break,
                    Ok(BrowseInput::Help) => println!("{HELP}"),
                    Ok(input) => {
                        if let Some(cmd) = input.into_command() {
                            kernel.dispatch(cmd);
                        }
                    }
                    Err(msg) if msg.is_empty() => {}
                    Err(msg) => eprintln!("{msg}"),
                }
            }
            _ = ticker.tick() => {}
        }

        kernel.tick();
        present(&mut kernel, &mut was_loading)?;
    }

    kernel.dispatch(ListingCommand::Unmount);
    Ok(())
}

/// What the screen needs after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redraw {
    Nothing,
    Loading,
    Listing,
}

/// `cleared` is set when the screen was wiped this tick (scroll to top), in
/// which case the current state is drawn again even if it did not change.
pub fn redraw(cleared: bool, was_loading: bool, loading: bool) -> Redraw {
    if loading && (cleared || !was_loading) {
        Redraw::Loading
    } else if !loading && (cleared || was_loading) {
        Redraw::Listing
    } else {
        Redraw::Nothing
    }
}

fn present<S>(kernel: &mut ListingKernel<S>, was_loading: &mut bool) -> std::io::Result<()>
where
    S: ListingSource,
    S::Item: ListingRow,
{
    let mut stdout = std::io::stdout().lock();
    let mut cleared = false;
    for effect in kernel.drain_effects() {
        match effect {
            ListingEffect::ScrollToTop => {
                write!(stdout, "\x1B[2J\x1B[H")?;
                cleared = true;
            }
        }
    }

    let loading = kernel.state().loading;
    match redraw(cleared, *was_loading, loading) {
        Redraw::Loading => writeln!(stdout, "   Loading...")?,
        Redraw::Listing => writeln!(
            stdout,
            "{}",
            render::listing(kernel.state(), kernel.locale().current())
        )?,
        Redraw::Nothing => {}
    }
    *was_loading = loading;
    stdout.flush()
}
