//! End-to-end flows through `handle_event`, with the host HTTP layer simulated
//! from fixtures and worker messages decoded in-process.

use pokedex::api::{Endpoints, RequestTag};
use pokedex::domain::LOOKUP_FAILED_MESSAGE;
use pokedex::ui::viewmodel::ScreenView;
use pokedex::ui::Theme;
use pokedex::worker::PokedexWorker;
use pokedex::{handle_event, Action, AppState, Event, ScreenKind};

const PIKACHU: &str = include_str!("fixtures/pikachu.json");
const INDEX_OFFSET_0: &str = include_str!("fixtures/index_offset_0.json");

fn state() -> AppState {
    AppState::new(Endpoints::default(), 9, Theme::default())
}

/// Runs `event`, sends every worker message through a real worker and feeds
/// its response back. Returns the HTTP requests left for the host.
fn drive(state: &mut AppState, event: &Event) -> Vec<(String, RequestTag)> {
    let (_, actions) = handle_event(state, event).unwrap();
    let mut fetches = Vec::new();

    for action in actions {
        match action {
            Action::Fetch { url, tag } => fetches.push((url, tag)),
            Action::PostToWorker(message) => {
                let response = PokedexWorker.handle_message(message);
                fetches.extend(drive(state, &Event::WorkerResponse(response)));
            }
            Action::CloseFocus => {}
        }
    }

    fetches
}

fn respond(state: &mut AppState, tag: RequestTag, status: u16, body: &str) -> Vec<(String, RequestTag)> {
    drive(
        state,
        &Event::WebResponse {
            tag,
            status,
            body: body.to_string(),
        },
    )
}

const FIRST_NINE: [&str; 9] = [
    "bulbasaur",
    "ivysaur",
    "venusaur",
    "charmander",
    "charmeleon",
    "charizard",
    "squirtle",
    "wartortle",
    "blastoise",
];

fn creature_body(url: &str) -> String {
    let id: usize = url
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .and_then(|id| id.parse().ok())
        .unwrap();
    let name = FIRST_NINE
        .get(id - 1)
        .map_or_else(|| format!("mon-{id:03}"), ToString::to_string);
    format!(r#"{{"id": {id}, "name": "{name}", "height": {id}, "weight": {id}}}"#)
}

fn search(state: &mut AppState, query: &str) -> Vec<(String, RequestTag)> {
    drive(state, &Event::EditQuery);
    for c in query.chars() {
        drive(state, &Event::Char(c));
    }
    drive(state, &Event::SubmitQuery)
}

/// Opens the list and answers its first page completely.
fn open_loaded_list(state: &mut AppState) {
    let fetches = drive(state, &Event::OpenList);
    let [(_, index_tag)] = fetches.as_slice() else {
        panic!("expected one index request, got {fetches:?}");
    };
    let details = respond(state, *index_tag, 200, INDEX_OFFSET_0);
    assert_eq!(details.len(), 9);
    for (url, tag) in details {
        respond(state, tag, 200, &creature_body(&url));
    }
}

fn list_ids(state: &mut AppState) -> Vec<u32> {
    state
        .navigator
        .visible_list_mut()
        .map(|list| list.creatures.iter().map(|c| c.id).collect())
        .unwrap_or_default()
}

#[test]
fn search_shows_upper_cased_name_and_display_units() {
    let mut state = state();
    let fetches = search(&mut state, "PikaChu");

    let [(url, tag)] = fetches.as_slice() else {
        panic!("expected one lookup, got {fetches:?}");
    };
    assert_eq!(url, "https://pokeapi.co/api/v2/pokemon/pikachu");
    assert_eq!(state.navigator.home.query, "pikachu");

    respond(&mut state, *tag, 200, PIKACHU);
    let ScreenView::Home(home) = state.compute_viewmodel(24, 80).body else {
        panic!("home screen expected");
    };
    let card = home.result.unwrap();
    assert_eq!(card.name, "PIKACHU");
    assert_eq!(card.id_label, "#25");
    assert!(card.image.unwrap().contains("/other/home/25.png"));
    assert_eq!(home.message, None);

    drive(&mut state, &Event::Select);
    let ScreenView::Detail(detail) = state.compute_viewmodel(24, 80).body else {
        panic!("detail screen expected");
    };
    assert_eq!(detail.weight, "Weight: 6 kg");
    assert_eq!(detail.height, "Height: 0.4 m");
    assert_eq!(detail.types, "electric");
    assert_eq!(detail.moves, "Moves: static, lightning-rod");
    assert_eq!(detail.stats.len(), 6);
}

#[test]
fn blank_query_is_rejected_without_a_request() {
    let mut state = state();
    let fetches = search(&mut state, "   ");

    assert!(fetches.is_empty());
    assert!(state.navigator.home.message.is_some());
    assert!(state.navigator.home.creature.is_none());
}

#[test]
fn not_found_clears_the_previous_result() {
    let mut state = state();
    let fetches = search(&mut state, "pikachu");
    respond(&mut state, fetches[0].1, 200, PIKACHU);
    assert!(state.navigator.home.creature.is_some());

    let fetches = search(&mut state, "missingno");
    respond(&mut state, fetches[0].1, 404, "Not Found");

    assert!(state.navigator.home.creature.is_none());
    assert_eq!(state.navigator.home.message.as_deref(), Some(LOOKUP_FAILED_MESSAGE));
}

#[test]
fn select_ignores_a_record_hidden_by_a_message() {
    let mut state = state();
    let fetches = search(&mut state, "pikachu");
    respond(&mut state, fetches[0].1, 200, PIKACHU);

    drive(&mut state, &Event::EditQuery);
    for _ in 0.."pikachu".len() {
        drive(&mut state, &Event::Backspace);
    }
    drive(&mut state, &Event::Char(' '));
    drive(&mut state, &Event::SubmitQuery);

    let ScreenView::Home(home) = state.compute_viewmodel(24, 80).body else {
        panic!("home screen expected");
    };
    assert!(home.message.is_some());
    assert!(home.result.is_none());

    let (render, actions) = handle_event(&mut state, &Event::Select).unwrap();
    assert!(!render);
    assert!(actions.is_empty());
    assert_eq!(state.current_screen(), ScreenKind::Home);
}

#[test]
fn undecodable_lookup_is_reported_like_a_failure() {
    let mut state = state();
    let fetches = search(&mut state, "pikachu");
    respond(&mut state, fetches[0].1, 200, "<html>gateway</html>");

    assert!(state.navigator.home.creature.is_none());
    assert!(state.navigator.home.message.is_some());
}

#[test]
fn list_loads_first_page_in_id_order() {
    let mut state = state();
    open_loaded_list(&mut state);

    assert_eq!(state.current_screen(), ScreenKind::List);
    assert_eq!(list_ids(&mut state), (1..=9).collect::<Vec<_>>());

    let ScreenView::List(view) = state.compute_viewmodel(24, 80).body else {
        panic!("list screen expected");
    };
    assert_eq!(view.page_label, "#1 to #9");
    assert_eq!(view.sort_label, "Sort by: ID");
    assert!(!view.loading);
    assert!(view.cards[0].is_selected);
}

#[test]
fn toggling_sort_reorders_without_fetching() {
    let mut state = state();
    open_loaded_list(&mut state);

    let fetches = drive(&mut state, &Event::ToggleSort);
    assert!(fetches.is_empty());
    assert_eq!(list_ids(&mut state), vec![9, 1, 6, 4, 5, 2, 7, 3, 8]);

    let ScreenView::List(view) = state.compute_viewmodel(24, 80).body else {
        panic!("list screen expected");
    };
    assert_eq!(view.sort_label, "Sort by: Name");
    assert_eq!(view.cards[0].name, "BLASTOISE");

    drive(&mut state, &Event::ToggleSort);
    assert_eq!(list_ids(&mut state), (1..=9).collect::<Vec<_>>());
}

#[test]
fn paging_steps_by_page_size_and_swaps_only_when_complete() {
    let mut state = state();
    open_loaded_list(&mut state);

    let fetches = drive(&mut state, &Event::NextPage);
    let [(url, tag)] = fetches.as_slice() else {
        panic!("expected one index request, got {fetches:?}");
    };
    assert_eq!(url, "https://pokeapi.co/api/v2/pokemon?limit=9&offset=9");
    assert!(matches!(tag, RequestTag::IndexPage { offset: 9, .. }));

    let index = INDEX_OFFSET_0
        .replace("/pokemon/1/", "/pokemon/10/")
        .replace("/pokemon/2/", "/pokemon/11/")
        .replace("/pokemon/3/", "/pokemon/12/");
    let details = respond(&mut state, *tag, 200, &index);
    assert_eq!(details.len(), 9);

    for (url, tag) in &details[..8] {
        respond(&mut state, *tag, 200, &creature_body(url));
        assert_eq!(list_ids(&mut state), (1..=9).collect::<Vec<_>>());
    }
    let (url, tag) = &details[8];
    respond(&mut state, *tag, 200, &creature_body(url));

    let ids = list_ids(&mut state);
    assert!(ids.contains(&10) && ids.contains(&12));
    assert!(!ids.contains(&1));

    let fetches = drive(&mut state, &Event::NextPage);
    assert!(matches!(fetches[0].1, RequestTag::IndexPage { offset: 18, .. }));
}

#[test]
fn one_failed_detail_keeps_the_old_page() {
    let mut state = state();
    open_loaded_list(&mut state);

    let fetches = drive(&mut state, &Event::NextPage);
    let details = respond(&mut state, fetches[0].1, 200, INDEX_OFFSET_0);

    respond(&mut state, details[0].1, 500, "oops");
    for (url, tag) in &details[1..] {
        respond(&mut state, *tag, 200, &creature_body(url));
    }

    assert_eq!(list_ids(&mut state), (1..=9).collect::<Vec<_>>());
    assert!(!state.navigator.visible_list_mut().unwrap().is_loading());
}

#[test]
fn opening_a_card_shows_that_record_without_fetching() {
    let mut state = state();
    open_loaded_list(&mut state);

    drive(&mut state, &Event::KeyDown);
    drive(&mut state, &Event::KeyDown);
    let fetches = drive(&mut state, &Event::Select);
    assert!(fetches.is_empty());

    let ScreenView::Detail(detail) = state.compute_viewmodel(24, 80).body else {
        panic!("detail screen expected");
    };
    assert_eq!(detail.id_label, "#3");
    assert_eq!(detail.name, "VENUSAUR");

    drive(&mut state, &Event::Back);
    assert_eq!(state.current_screen(), ScreenKind::List);
    drive(&mut state, &Event::Back);
    assert_eq!(state.current_screen(), ScreenKind::Home);
}

#[test]
fn responses_after_leaving_the_list_are_dropped() {
    let mut state = state();
    let fetches = drive(&mut state, &Event::OpenList);
    drive(&mut state, &Event::Back);

    let late = respond(&mut state, fetches[0].1, 200, INDEX_OFFSET_0);
    assert!(late.is_empty());
    assert_eq!(state.current_screen(), ScreenKind::Home);
}
