use salesdeck_core::{Level, ListEnvelope, Locale};

#[derive(Debug, Clone)]
pub enum ListingCommand<T> {
    // Lifecycle
    Mount { initial: Option<ListEnvelope<T>> },
    Unmount,

    // Filters
    SearchInput(String),
    /// Selecting the active category again clears it. An empty slug clears it too.
    SelectCategory(String),
    /// Selecting the active level again clears it. `None` clears it.
    SelectLevel(Option<Level>),
    ClearFilters,

    // Pagination
    PrevPage,
    NextPage,
    GoToPage(u32),

    // Locale
    SetLocale(Locale),
    ToggleLocale,
    RouteLocaleChanged(Locale),

    Refresh,
}
