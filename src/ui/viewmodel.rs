//! View model types representing renderable UI state.
//!
//! View models are computed by `AppState::compute_viewmodel()` from whatever
//! screen is on top of the navigation stack and consumed by the renderer. They
//! hold display-ready strings only: unit conversion, upper-casing and label
//! formatting all happen while building them.
//!
//! # Example
//!
//! ```rust
//! use pokedex::ui::viewmodel::{FooterInfo, HeaderInfo, HomeView, ScreenView, SearchBarInfo, UIViewModel};
//!
//! let vm = UIViewModel {
//!     header: HeaderInfo { title: "Pokédex".to_string() },
//!     footer: FooterInfo { keybindings: "q: quit".to_string() },
//!     body: ScreenView::Home(HomeView {
//!         search_bar: SearchBarInfo { query: String::new(), editing: false },
//!         message: None,
//!         result: None,
//!     }),
//! };
//! assert!(matches!(vm.body, ScreenView::Home(_)));
//! ```

/// Complete UI view model for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    /// Title bar of the visible screen.
    pub header: HeaderInfo,

    /// Keybinding hints for the visible screen and input mode.
    pub footer: FooterInfo,

    /// Screen-specific content.
    pub body: ScreenView,
}

/// Content of the visible screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenView {
    Home(HomeView),
    List(ListView),
    Detail(DetailView),
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Title text to display in the header.
    pub title: String,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Keybinding help text (e.g., "/: search  l: list  q: quit").
    pub keybindings: String,
}

/// Search input box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    /// Current query text.
    pub query: String,

    /// Whether keystrokes currently edit the query (draws a cursor).
    pub editing: bool,
}

/// Home screen: search box, then either a message or the last result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeView {
    pub search_bar: SearchBarInfo,

    /// Invalid-name or lookup-failed text. Rendered instead of `result`.
    pub message: Option<String>,

    pub result: Option<CardView>,
}

/// One creature as a small card (home result or list cell).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    /// `#25`
    pub id_label: String,

    /// Upper-cased name.
    pub name: String,

    /// Image URI, shown as text.
    pub image: Option<String>,

    pub is_selected: bool,
}

/// List screen: sort label, page label and a grid of cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView {
    /// `Sort by: ID` or `Sort by: Name`.
    pub sort_label: String,

    /// Range of the most recently requested page, e.g. `#10-#18`.
    pub page_label: String,

    pub cards: Vec<CardView>,

    /// Cards per grid row, already fitted to the pane width.
    pub columns: usize,

    /// Whether a page request is still outstanding.
    pub loading: bool,

    /// Shown when no page has been loaded yet, or the page was empty.
    pub empty_state: Option<EmptyState>,
}

/// Detail screen: every field of one record, formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    /// Upper-cased name.
    pub name: String,

    /// `#25`
    pub id_label: String,

    pub image: Option<String>,

    /// Types joined with `", "`.
    pub types: String,

    /// `Weight: 6 kg`
    pub weight: String,

    /// `Height: 0.4 m`
    pub height: String,

    /// `Moves: static, lightning-rod`
    pub moves: String,

    pub stats: Vec<StatRow>,
}

/// One line of the stat table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatRow {
    pub name: String,
    pub value: u32,

    /// Bar length in cells, proportional to `value`.
    pub bar_width: usize,
}

/// Empty state message display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message (e.g., "No Pokémon on this page").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}
