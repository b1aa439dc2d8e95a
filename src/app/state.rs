//! Application state management and view model computation.
//!
//! [`AppState`] owns the navigation stack, the endpoint configuration and the
//! request id counter every outgoing request draws from. It is mutated only by
//! [`handle_event`](super::handle_event); the renderer reads it through
//! [`AppState::compute_viewmodel`].
//!
//! # Example
//!
//! ```rust
//! use pokedex::api::Endpoints;
//! use pokedex::app::AppState;
//! use pokedex::ui::Theme;
//! use pokedex::ui::viewmodel::ScreenView;
//!
//! let state = AppState::new(Endpoints::default(), 9, Theme::default());
//! let viewmodel = state.compute_viewmodel(24, 80);
//! assert!(matches!(viewmodel.body, ScreenView::Home(_)));
//! ```

use super::actions::Action;
use super::modes::{InputMode, ScreenKind};
use super::navigation::{Navigator, Route};
use super::screens::{DetailScreen, HomeScreen, ListScreen};
use crate::api::{Endpoints, RequestTag};
use crate::domain::{Creature, CreatureSummary};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    CardView, DetailView, EmptyState, FooterInfo, HeaderInfo, HomeView, ListView, ScreenView,
    SearchBarInfo, StatRow, UIViewModel,
};

/// Width of one list card including its gutter.
const CARD_WIDTH: usize = 26;

/// Cards per grid row on wide panes.
const MAX_COLUMNS: usize = 3;

/// Highest base stat PokeAPI reports; a full stat bar.
const MAX_STAT_VALUE: u32 = 255;

/// Longest stat bar drawn, in cells.
const MAX_STAT_BAR: usize = 30;

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Mounted screens, home at the bottom.
    pub navigator: Navigator,

    /// PokeAPI URL builder.
    pub endpoints: Endpoints,

    /// Index page size for newly opened list screens.
    pub page_size: u32,

    /// Color scheme for UI rendering.
    pub theme: Theme,

    /// Last request id handed out. Ids start at 1 and only grow.
    last_request_id: u64,
}

impl AppState {
    /// Creates the state with only the home screen mounted.
    ///
    /// # Parameters
    ///
    /// * `endpoints` - PokeAPI URL builder
    /// * `page_size` - Entries per list page
    /// * `theme` - Color scheme for UI rendering
    #[must_use]
    pub fn new(endpoints: Endpoints, page_size: u32, theme: Theme) -> Self {
        Self {
            navigator: Navigator::default(),
            endpoints,
            page_size,
            theme,
            last_request_id: 0,
        }
    }

    /// Hands out the next request id.
    pub fn allocate_request_id(&mut self) -> u64 {
        self.last_request_id += 1;
        self.last_request_id
    }

    /// The visible screen; decides which keybindings apply.
    #[must_use]
    pub fn current_screen(&self) -> ScreenKind {
        self.navigator.current()
    }

    /// Input mode of the home screen, which is the only screen with a text box.
    #[must_use]
    pub const fn home_input_mode(&self) -> InputMode {
        self.navigator.home.input_mode
    }

    /// Builds the request for one creature lookup from the home screen.
    pub fn lookup(&mut self, name: &str) -> Action {
        let request_id = self.allocate_request_id();
        tracing::debug!(request_id, name, "creature lookup issued");
        Action::Fetch {
            url: self.endpoints.creature(name),
            tag: RequestTag::Search { request_id },
        }
    }

    /// Builds the index request for the page at `offset` and records it on
    /// the mounted list screen.
    ///
    /// # Returns
    ///
    /// `None` when no list screen is mounted.
    pub fn request_page(&mut self, offset: i64) -> Option<Action> {
        let request_id = self.allocate_request_id();
        let list = self.navigator.list_mut()?;
        list.track_request(request_id);

        tracing::debug!(request_id, offset, limit = list.page_size, "index page requested");

        Some(Action::Fetch {
            url: self.endpoints.index_page(list.page_size, offset),
            tag: RequestTag::IndexPage { request_id, offset },
        })
    }

    /// Pushes a fresh list screen at offset 0 and returns its first request.
    pub fn open_list(&mut self) -> Option<Action> {
        self.navigator.push(Route::List(ListScreen::new(self.page_size)));
        self.request_page(0)
    }

    /// Pushes the detail screen for `creature`. No request is made.
    pub fn open_detail(&mut self, creature: Creature) {
        self.navigator.push(Route::Detail(DetailScreen { creature }));
    }

    /// Computes a renderable UI view model for the visible screen.
    ///
    /// # Parameters
    ///
    /// * `rows` - Terminal height in character cells
    /// * `cols` - Terminal width in character cells
    #[must_use]
    pub fn compute_viewmodel(&self, _rows: usize, cols: usize) -> UIViewModel {
        let body = match self.navigator.top() {
            None => ScreenView::Home(Self::compute_home(&self.navigator.home)),
            Some(Route::List(list)) => ScreenView::List(Self::compute_list(list, cols)),
            Some(Route::Detail(detail)) => ScreenView::Detail(Self::compute_detail(&detail.creature, cols)),
        };

        UIViewModel {
            header: self.compute_header(),
            footer: self.compute_footer(),
            body,
        }
    }

    fn compute_home(home: &HomeScreen) -> HomeView {
        HomeView {
            search_bar: SearchBarInfo {
                query: home.query.clone(),
                editing: home.input_mode == InputMode::Editing,
            },
            message: home.message.clone(),
            result: home
                .displayed_creature()
                .map(|creature| Self::compute_card(&creature.summary(), false)),
        }
    }

    fn compute_card(summary: &CreatureSummary, is_selected: bool) -> CardView {
        CardView {
            id_label: format!("#{}", summary.id),
            name: summary.name.to_uppercase(),
            image: summary.image.clone(),
            is_selected,
        }
    }

    /// Lays the page out as a grid of at most [`MAX_COLUMNS`] cards per row.
    fn compute_list(list: &ListScreen, cols: usize) -> ListView {
        let cards: Vec<CardView> = list
            .creatures
            .iter()
            .enumerate()
            .map(|(idx, creature)| Self::compute_card(&creature.summary(), idx == list.selected_index))
            .collect();

        let loading = list.is_loading();
        let empty_state = if cards.is_empty() {
            Some(if loading {
                EmptyState {
                    message: "Loading...".to_string(),
                    subtitle: "Fetching the page from PokeAPI".to_string(),
                }
            } else {
                EmptyState {
                    message: "No Pokémon on this page".to_string(),
                    subtitle: "Press n or p to move to another page".to_string(),
                }
            })
        } else {
            None
        };

        let first = list.offset + 1;
        let last = list.offset + i64::from(list.page_size);

        ListView {
            sort_label: format!("Sort by: {}", list.sort.label()),
            page_label: format!("#{first} to #{last}"),
            cards,
            columns: (cols.saturating_sub(2) / CARD_WIDTH).clamp(1, MAX_COLUMNS),
            loading,
            empty_state,
        }
    }

    fn compute_detail(creature: &Creature, cols: usize) -> DetailView {
        let bar_limit = cols.saturating_sub(30).clamp(1, MAX_STAT_BAR);

        DetailView {
            name: creature.display_name(),
            id_label: format!("#{}", creature.id),
            image: creature.primary_image().map(ToString::to_string),
            types: creature.types.join(", "),
            weight: format!("Weight: {} kg", creature.weight_kg()),
            height: format!("Height: {} m", creature.height_m()),
            moves: format!("Moves: {}", creature.abilities.join(", ")),
            stats: creature
                .stats
                .iter()
                .map(|stat| StatRow {
                    name: stat.name.clone(),
                    value: stat.value,
                    bar_width: stat_bar_width(stat.value, bar_limit),
                })
                .collect(),
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let title = match self.current_screen() {
            ScreenKind::Home => "Pokédex",
            ScreenKind::List => "Pokemon List",
            ScreenKind::Detail => "Details",
        };
        HeaderInfo {
            title: format!(" {title} "),
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match (self.current_screen(), self.home_input_mode()) {
            (ScreenKind::Home, InputMode::Editing) => "Type a name  Enter: search  ESC: stop editing",
            (ScreenKind::Home, InputMode::Normal) => "/: search  Enter: details  l: list  q: quit",
            (ScreenKind::List, _) => {
                "j/k: navigate  n/p: page  s: sort  Enter: details  b: back  q: quit"
            }
            (ScreenKind::Detail, _) => "b/ESC: back  q: quit",
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }
}

/// Scales a base stat to a bar of at most `limit` cells. Any non-zero stat
/// gets at least one cell.
fn stat_bar_width(value: u32, limit: usize) -> usize {
    let capped = value.min(MAX_STAT_VALUE) as usize;
    let width = capped * limit / MAX_STAT_VALUE as usize;
    if value > 0 {
        width.max(1)
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Stat;

    fn state() -> AppState {
        AppState::new(Endpoints::default(), 9, Theme::default())
    }

    fn pikachu() -> Creature {
        Creature {
            images: vec!["https://img/25.png".to_string()],
            types: vec!["electric".to_string()],
            abilities: vec!["static".to_string(), "lightning-rod".to_string()],
            stats: vec![Stat {
                name: "speed".to_string(),
                value: 90,
            }],
            height: 4,
            weight: 60,
            ..Creature::named(25, "pikachu")
        }
    }

    #[test]
    fn request_ids_are_monotonic() {
        let mut state = state();
        let first = state.lookup("pikachu").fetch_tag().map(|t| t.request_id());
        let second = state.lookup("eevee").fetch_tag().map(|t| t.request_id());
        assert!(first < second);
    }

    #[test]
    fn page_request_needs_a_mounted_list() {
        let mut state = state();
        assert!(state.request_page(0).is_none());

        let action = state.open_list();
        match action {
            Some(Action::Fetch { url, tag }) => {
                assert_eq!(url, "https://pokeapi.co/api/v2/pokemon?limit=9&offset=0");
                assert!(matches!(tag, RequestTag::IndexPage { offset: 0, .. }));
            }
            other => panic!("unexpected action: {other:?}"),
        }
    }

    #[test]
    fn detail_view_formats_units_and_lists() {
        let view = AppState::compute_detail(&pikachu(), 80);
        assert_eq!(view.name, "PIKACHU");
        assert_eq!(view.id_label, "#25");
        assert_eq!(view.image.as_deref(), Some("https://img/25.png"));
        assert_eq!(view.weight, "Weight: 6 kg");
        assert_eq!(view.height, "Height: 0.4 m");
        assert_eq!(view.moves, "Moves: static, lightning-rod");
        assert_eq!(view.types, "electric");
        assert_eq!(view.stats[0].value, 90);
    }

    #[test]
    fn home_message_is_exposed_alongside_result() {
        let mut state = state();
        state.navigator.home.show_result(pikachu());
        let vm = state.compute_viewmodel(24, 80);
        match vm.body {
            ScreenView::Home(home) => {
                assert!(home.message.is_none());
                assert_eq!(home.result.map(|c| c.name), Some("PIKACHU".to_string()));
            }
            other => panic!("unexpected body: {other:?}"),
        }
    }

    #[test]
    fn list_view_labels_sort_and_fits_columns() {
        let mut state = state();
        state.open_list();
        let vm = state.compute_viewmodel(24, 200);
        assert_eq!(vm.header.title, " Pokemon List ");
        match vm.body {
            ScreenView::List(list) => {
                assert_eq!(list.sort_label, "Sort by: ID");
                assert_eq!(list.columns, MAX_COLUMNS);
                assert!(list.loading);
                assert!(list.empty_state.is_some());
            }
            other => panic!("unexpected body: {other:?}"),
        }
    }

    #[test]
    fn stat_bars_scale_and_never_vanish() {
        assert_eq!(stat_bar_width(255, 30), 30);
        assert_eq!(stat_bar_width(300, 30), 30);
        assert_eq!(stat_bar_width(1, 30), 1);
        assert_eq!(stat_bar_width(0, 30), 0);
    }
}
