use salesdeck_app_core::{ListingCommand, ListingState, ResultStore, SettlementOrder};
use salesdeck_cli::browse::{parse_input, BrowseInput};
use salesdeck_cli::render;
use salesdeck_core::{Article, ContentKind, Level, ListEnvelope, Locale, Pagination};

#[test]
fn parses_browse_commands() {
    assert_eq!(
        parse_input("s cold calling"),
        Ok(BrowseInput::Search("cold calling".into()))
    );
    assert_eq!(parse_input("s"), Ok(BrowseInput::Search(String::new())));
    assert_eq!(
        parse_input("c mindset"),
        Ok(BrowseInput::Category("mindset".into()))
    );
    assert_eq!(
        parse_input("l intermediate"),
        Ok(BrowseInput::Level(Some(Level::Intermediate)))
    );
    assert_eq!(parse_input("l"), Ok(BrowseInput::Level(None)));
    assert_eq!(parse_input("g 3"), Ok(BrowseInput::Page(3)));
    assert_eq!(parse_input("lang fr"), Ok(BrowseInput::Lang(Some(Locale::Fr))));
    assert_eq!(parse_input("lang"), Ok(BrowseInput::Lang(None)));
    assert_eq!(parse_input("  q  "), Ok(BrowseInput::Quit));

    assert!(parse_input("g 0").is_err());
    assert!(parse_input("l expert").is_err());
    assert!(parse_input("lang de").is_err());
    assert!(parse_input("zap").is_err());
}

#[test]
fn inputs_map_to_listing_commands() {
    let cmd: Option<ListingCommand<Article>> = BrowseInput::Lang(None).into_command();
    assert!(matches!(cmd, Some(ListingCommand::ToggleLocale)));

    let cmd: Option<ListingCommand<Article>> = BrowseInput::Page(2).into_command();
    assert!(matches!(cmd, Some(ListingCommand::GoToPage(2))));

    let cmd: Option<ListingCommand<Article>> = BrowseInput::Quit.into_command();
    assert!(cmd.is_none());
}

#[test]
fn listing_distinguishes_failure_from_no_results() {
    let mut state: ListingState<Article> = ListingState::new(
        ContentKind::Articles,
        ResultStore::empty(6),
        SettlementOrder::default(),
    );
    assert!(render::listing(&state, Locale::En).contains("No articles found"));

    state.last_failure = Some("HTTP 500".into());
    let out = render::listing(&state, Locale::Fr);
    assert!(out.contains(":: Articles (french)"), "{out}");
    assert!(out.contains("Articles are unavailable right now: HTTP 500"), "{out}");
}

#[test]
fn stale_items_stay_visible_after_failed_refresh() {
    let env = ListEnvelope {
        status: "success".into(),
        results: 1,
        pagination: Pagination {
            total: 13,
            page: 1,
            pages: 3,
            limit: 6,
        },
        data: vec![Article::default()],
    };
    let mut state = ListingState::new(
        ContentKind::Articles,
        ResultStore::from(env),
        SettlementOrder::default(),
    );
    state.last_failure = Some("timeout".into());

    let out = render::listing(&state, Locale::En);
    assert!(out.contains("Untitled Article  [Anonymous | No date]"), "{out}");
    assert!(out.contains("(last refresh failed: timeout)"), "{out}");
    assert!(out.contains("Page 1 of 3 (13 total): [1] 2 3"), "{out}");

    state.loading = true;
    let out = render::listing(&state, Locale::En);
    assert!(out.contains("Loading..."));
    assert!(!out.contains("Page 1"));
}

#[test]
fn cleared_screen_is_always_redrawn() {
    use salesdeck_cli::browse::{redraw, Redraw};

    // Jumping to the page already shown clears the screen without a fetch.
    assert_eq!(redraw(true, false, false), Redraw::Listing);
    assert_eq!(redraw(true, true, true), Redraw::Loading);

    assert_eq!(redraw(false, false, true), Redraw::Loading);
    assert_eq!(redraw(false, true, false), Redraw::Listing);
    assert_eq!(redraw(false, true, true), Redraw::Nothing);
    assert_eq!(redraw(false, false, false), Redraw::Nothing);
}
