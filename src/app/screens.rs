//! Per-screen state.
//!
//! Each screen owns its records outright. Nothing is shared between screens
//! except the [`Creature`] handed to [`DetailScreen`] when it is pushed, and
//! everything a screen fetched is dropped with it when it is popped.

use super::modes::InputMode;
use crate::api::RequestTag;
use crate::domain::{Creature, IndexEntry, PokedexError, Result, SortKey, INVALID_QUERY_MESSAGE};
use std::collections::{HashMap, HashSet};

/// Search box and the outcome of the last lookup.
#[derive(Debug, Clone, Default)]
pub struct HomeScreen {
    /// Text typed into the search box.
    pub query: String,

    pub input_mode: InputMode,

    /// Record from the last successful lookup.
    pub creature: Option<Creature>,

    /// Message from the last failed or rejected lookup. Rendered instead of
    /// `creature` while set.
    pub message: Option<String>,
}

impl HomeScreen {
    /// Validates the query and returns the name to look up.
    ///
    /// The query is lower-cased in place (PokeAPI names are lower case) and
    /// trimmed for the request. An empty or whitespace-only query sets the
    /// invalid-name message and leaves `creature` untouched.
    ///
    /// # Errors
    ///
    /// Returns [`PokedexError::InvalidQuery`] for an empty query.
    pub fn prepare_lookup(&mut self) -> Result<String> {
        self.query = self.query.to_lowercase();
        let name = self.query.trim();

        if name.is_empty() {
            self.message = Some(INVALID_QUERY_MESSAGE.to_string());
            return Err(PokedexError::InvalidQuery(self.query.clone()));
        }

        Ok(name.to_string())
    }

    /// Replaces the displayed record and clears any message.
    pub fn show_result(&mut self, creature: Creature) {
        self.creature = Some(creature);
        self.message = None;
    }

    /// The record the screen shows. A message hides the record beneath it.
    #[must_use]
    pub fn displayed_creature(&self) -> Option<&Creature> {
        if self.message.is_some() {
            return None;
        }
        self.creature.as_ref()
    }

    /// Clears the displayed record and shows the error's user message.
    pub fn show_failure(&mut self, error: &PokedexError) {
        self.creature = None;
        self.message = Some(error.user_message().to_string());
    }
}

/// Detail lookups of one index page waiting to be joined.
#[derive(Debug, Clone)]
struct PendingPage {
    offset: i64,
    slots: Vec<Option<Creature>>,
}

impl PendingPage {
    fn remaining(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_none()).count()
    }
}

/// What filling a fan-out slot did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotOutcome {
    /// The page is not pending (already completed, discarded, or foreign).
    Ignored,
    /// Slot filled; this many slots are still outstanding.
    Waiting(usize),
    /// Last slot filled; the displayed list was replaced.
    Completed,
}

/// Paginated grid of creatures.
#[derive(Debug, Clone)]
pub struct ListScreen {
    /// Offset of the most recently requested page. Never clamped.
    pub offset: i64,

    pub page_size: u32,

    pub sort: SortKey,

    /// Displayed page, in index order until the sort is toggled.
    pub creatures: Vec<Creature>,

    pub selected_index: usize,

    /// Index requests issued by this screen and not yet answered.
    requested: HashSet<u64>,

    /// Fan-outs in flight, keyed by the id of their index request.
    pending: HashMap<u64, PendingPage>,
}

impl ListScreen {
    #[must_use]
    pub fn new(page_size: u32) -> Self {
        Self {
            offset: 0,
            page_size,
            sort: SortKey::default(),
            creatures: Vec::new(),
            selected_index: 0,
            requested: HashSet::new(),
            pending: HashMap::new(),
        }
    }

    /// Records that index request `request_id` was issued by this screen.
    pub fn track_request(&mut self, request_id: u64) {
        self.requested.insert(request_id);
    }

    /// Advances the offset by one page and returns it.
    pub fn next_page(&mut self) -> i64 {
        self.offset += i64::from(self.page_size);
        self.offset
    }

    /// Moves the offset back by one page and returns it. Going below zero is
    /// allowed; the request is sent as is.
    pub fn previous_page(&mut self) -> i64 {
        self.offset -= i64::from(self.page_size);
        self.offset
    }

    /// Flips the sort key and re-sorts the displayed page without fetching.
    /// The selected creature stays selected.
    pub fn toggle_sort(&mut self) {
        let selected_id = self.selected_creature().map(|c| c.id);
        self.sort = self.sort.toggled();
        self.sort.sort(&mut self.creatures);
        if let Some(index) = selected_id.and_then(|id| self.creatures.iter().position(|c| c.id == id)) {
            self.selected_index = index;
        }
        tracing::debug!(sort = ?self.sort, count = self.creatures.len(), "list re-sorted");
    }

    /// Starts the detail fan-out for a decoded index page.
    ///
    /// Returns the `(slot, url)` pairs to request, or `None` if this screen
    /// did not issue `request_id`. An empty page replaces the list at once and
    /// returns an empty vector.
    pub fn begin_page(&mut self, request_id: u64, offset: i64, entries: &[IndexEntry]) -> Option<Vec<(usize, String)>> {
        if !self.requested.remove(&request_id) {
            return None;
        }

        if entries.is_empty() {
            self.replace_creatures(Vec::new());
            return Some(Vec::new());
        }

        self.pending.insert(
            request_id,
            PendingPage {
                offset,
                slots: vec![None; entries.len()],
            },
        );

        Some(
            entries
                .iter()
                .enumerate()
                .map(|(slot, entry)| (slot, entry.url.clone()))
                .collect(),
        )
    }

    /// Stores one detail result. When it is the last outstanding slot of its
    /// page, the displayed list is replaced with the whole page at once.
    pub fn fill_slot(&mut self, request_id: u64, slot: usize, creature: Creature) -> SlotOutcome {
        let Some(page) = self.pending.get_mut(&request_id) else {
            return SlotOutcome::Ignored;
        };
        let Some(target) = page.slots.get_mut(slot) else {
            return SlotOutcome::Ignored;
        };
        *target = Some(creature);

        let remaining = page.remaining();
        if remaining > 0 {
            return SlotOutcome::Waiting(remaining);
        }

        let Some(page) = self.pending.remove(&request_id) else {
            return SlotOutcome::Ignored;
        };
        tracing::debug!(request_id, offset = page.offset, "page complete");
        self.replace_creatures(page.slots.into_iter().flatten().collect());
        SlotOutcome::Completed
    }

    /// Drops a pending fan-out after one of its lookups failed. Returns
    /// whether anything was pending.
    pub fn abandon_page(&mut self, request_id: u64) -> bool {
        self.pending.remove(&request_id).is_some()
    }

    /// Forgets an index request that failed before its fan-out started.
    pub fn abandon_request(&mut self, request_id: u64) -> bool {
        self.requested.remove(&request_id)
    }

    /// Whether a response for `tag` would still be used by this screen.
    #[must_use]
    pub fn is_expecting(&self, tag: RequestTag) -> bool {
        match tag {
            RequestTag::IndexPage { request_id, .. } => self.requested.contains(&request_id),
            RequestTag::Detail { request_id, .. } => self.pending.contains_key(&request_id),
            RequestTag::Search { .. } => false,
        }
    }

    /// Whether any page is still being fetched.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        !self.requested.is_empty() || !self.pending.is_empty()
    }

    fn replace_creatures(&mut self, creatures: Vec<Creature>) {
        self.creatures = creatures;
        self.selected_index = 0;
    }

    pub fn move_selection_down(&mut self) {
        if self.creatures.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.creatures.len();
    }

    pub fn move_selection_up(&mut self) {
        if self.creatures.is_empty() {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = self.creatures.len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    #[must_use]
    pub fn selected_creature(&self) -> Option<&Creature> {
        self.creatures.get(self.selected_index)
    }
}

/// Full record of one creature, passed in by whoever pushed the screen.
#[derive(Debug, Clone)]
pub struct DetailScreen {
    pub creature: Creature,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LOOKUP_FAILED_MESSAGE;

    fn entries(n: usize) -> Vec<IndexEntry> {
        (0..n)
            .map(|i| IndexEntry {
                name: format!("c{i}"),
                url: format!("https://pokeapi.co/api/v2/pokemon/{}/", i + 1),
            })
            .collect()
    }

    #[test]
    fn blank_query_keeps_the_previous_record() {
        let mut home = HomeScreen {
            query: "   ".to_string(),
            creature: Some(Creature::named(25, "pikachu")),
            ..HomeScreen::default()
        };
        assert!(matches!(home.prepare_lookup(), Err(PokedexError::InvalidQuery(_))));
        assert_eq!(home.message.as_deref(), Some(INVALID_QUERY_MESSAGE));
        assert_eq!(home.creature.as_ref().map(|c| c.id), Some(25));
        assert!(home.displayed_creature().is_none());
    }

    #[test]
    fn query_is_lowercased_and_trimmed() {
        let mut home = HomeScreen {
            query: " Pikachu ".to_string(),
            ..HomeScreen::default()
        };
        assert_eq!(home.prepare_lookup().unwrap(), "pikachu");
        assert_eq!(home.query, " pikachu ");
    }

    #[test]
    fn failure_clears_the_record() {
        let mut home = HomeScreen::default();
        home.show_result(Creature::named(1, "bulbasaur"));
        home.show_failure(&PokedexError::Http {
            status: 404,
            detail: String::new(),
        });
        assert!(home.creature.is_none());
        assert_eq!(home.message.as_deref(), Some(LOOKUP_FAILED_MESSAGE));
    }

    #[test]
    fn paging_moves_by_exactly_one_page_without_bounds() {
        let mut list = ListScreen::new(9);
        assert_eq!(list.next_page(), 9);
        assert_eq!(list.next_page(), 18);
        assert_eq!(list.previous_page(), 9);
        assert_eq!(list.previous_page(), 0);
        assert_eq!(list.previous_page(), -9);
    }

    #[test]
    fn list_is_swapped_only_when_every_slot_is_filled() {
        let mut list = ListScreen::new(3);
        list.creatures = vec![Creature::named(100, "old")];
        list.track_request(1);

        let requests = list.begin_page(1, 0, &entries(3)).unwrap();
        assert_eq!(requests.len(), 3);
        assert_eq!(requests[2].0, 2);

        assert_eq!(list.fill_slot(1, 2, Creature::named(3, "c")), SlotOutcome::Waiting(2));
        assert_eq!(list.fill_slot(1, 0, Creature::named(1, "a")), SlotOutcome::Waiting(1));
        assert_eq!(list.creatures[0].name, "old");
        assert!(list.is_loading());

        assert_eq!(list.fill_slot(1, 1, Creature::named(2, "b")), SlotOutcome::Completed);
        let ids: Vec<_> = list.creatures.iter().map(|c| c.id).collect();
        assert_eq!(ids, [1, 2, 3]);
        assert!(!list.is_loading());
    }

    #[test]
    fn abandoned_page_ignores_late_slots() {
        let mut list = ListScreen::new(2);
        list.creatures = vec![Creature::named(100, "old")];
        list.track_request(5);
        list.begin_page(5, 0, &entries(2));

        assert!(list.is_expecting(RequestTag::Detail { request_id: 5, slot: 1 }));
        assert!(list.abandon_page(5));
        assert!(!list.is_expecting(RequestTag::Detail { request_id: 5, slot: 1 }));
        assert_eq!(list.fill_slot(5, 0, Creature::named(1, "a")), SlotOutcome::Ignored);
        assert_eq!(list.creatures[0].name, "old");
        assert!(!list.abandon_page(5));
    }

    #[test]
    fn untracked_index_pages_are_refused() {
        let mut list = ListScreen::new(9);
        assert!(list.begin_page(77, 0, &entries(9)).is_none());
    }

    #[test]
    fn empty_index_page_clears_the_list_immediately() {
        let mut list = ListScreen::new(9);
        list.creatures = vec![Creature::named(1, "a")];
        list.track_request(1);
        assert_eq!(list.begin_page(1, 2000, &[]), Some(Vec::new()));
        assert!(list.creatures.is_empty());
    }

    #[test]
    fn toggling_sort_reorders_in_memory() {
        let mut list = ListScreen::new(9);
        list.creatures = vec![Creature::named(3, "b"), Creature::named(1, "a")];
        list.toggle_sort();
        assert_eq!(list.sort, SortKey::Name);
        let names: Vec<_> = list.creatures.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["a", "b"]);
    }

    #[test]
    fn toggling_sort_keeps_the_selected_creature() {
        let mut list = ListScreen::new(9);
        list.creatures = vec![
            Creature::named(1, "c"),
            Creature::named(2, "a"),
            Creature::named(3, "b"),
        ];
        list.selected_index = 0;

        list.toggle_sort();
        assert_eq!(list.selected_creature().map(|c| c.id), Some(1));
        assert_eq!(list.selected_index, 2);

        list.toggle_sort();
        assert_eq!(list.selected_creature().map(|c| c.id), Some(1));
        assert_eq!(list.selected_index, 0);
    }

    #[test]
    fn selection_wraps() {
        let mut list = ListScreen::new(9);
        list.creatures = vec![Creature::named(1, "a"), Creature::named(2, "b")];
        list.move_selection_up();
        assert_eq!(list.selected_index, 1);
        list.move_selection_down();
        assert_eq!(list.selected_index, 0);
    }
}
