//! Event handling and state transition logic.
//!
//! [`handle_event`] is the only place state changes. Key presses arrive as
//! already-mapped [`Event`]s, HTTP results arrive as [`Event::WebResponse`]
//! with their [`RequestTag`], and decoded bodies come back from the worker as
//! [`Event::WorkerResponse`].
//!
//! # Request lifecycle
//!
//! ```text
//! key → Fetch ─► host HTTP ─► WebResponse ─► PostToWorker ─► worker decode
//!                                  │                               │
//!                                  └─ non-2xx: failure      WorkerResponse ─► screen
//! ```
//!
//! # Example
//!
//! ```rust
//! use pokedex::api::Endpoints;
//! use pokedex::app::{handle_event, AppState, Event};
//! use pokedex::ui::Theme;
//!
//! let mut state = AppState::new(Endpoints::default(), 9, Theme::default());
//! let (should_render, actions) = handle_event(&mut state, &Event::OpenList)?;
//! assert!(should_render);
//! assert_eq!(actions.len(), 1);
//! # Ok::<(), pokedex::domain::PokedexError>(())
//! ```

use crate::api::{is_success, RequestTag};
use crate::app::modes::{InputMode, ScreenKind};
use crate::app::navigation::Route;
use crate::app::screens::SlotOutcome;
use crate::app::{Action, AppState};
use crate::domain::{Creature, PokedexError, Result};
use crate::worker::{WorkerMessage, WorkerResponse};

/// Bytes of a failed response body kept for the log line.
const ERROR_DETAIL_LIMIT: usize = 120;

/// Events triggered by user input, host HTTP results, or worker responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves the list selection forward (wraps to the first card).
    KeyDown,
    /// Moves the list selection back (wraps to the last card).
    KeyUp,
    /// Opens the home result or the selected list card in the detail screen.
    Select,
    /// Pops the visible screen.
    Back,
    /// Hides the plugin pane.
    CloseFocus,

    /// Starts editing the home query.
    EditQuery,
    /// Appends a character to the home query.
    Char(char),
    /// Removes the last character from the home query.
    Backspace,
    /// Looks up the home query.
    SubmitQuery,
    /// Leaves query editing without searching.
    StopEditing,

    /// Pushes a new list screen and requests its first page.
    OpenList,
    /// Requests the page after the current offset.
    NextPage,
    /// Requests the page before the current offset.
    PreviousPage,
    /// Flips the list sort between id and name.
    ToggleSort,

    /// The host finished an HTTP request.
    WebResponse {
        /// Correlation read back from the request context.
        tag: RequestTag,
        /// HTTP status; transport failures are reported as 400 by the host.
        status: u16,
        /// Response body.
        body: String,
    },

    /// Wraps a response from the background worker thread.
    WorkerResponse(WorkerResponse),
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Parameters
///
/// * `state` - Mutable reference to application state
/// * `event` - Event to process
///
/// # Returns
///
/// Whether the UI should re-render, and the actions to execute in order.
///
/// # Errors
///
/// Currently every failure is absorbed into state (a home message, a dropped
/// page) and logged, so this never returns `Err`. The signature stays
/// fallible for the plugin runtime, which logs any error and keeps running.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event_name(event)).entered();

    match event {
        Event::KeyDown => Ok(state.navigator.visible_list_mut().map_or((false, vec![]), |list| {
            list.move_selection_down();
            (true, vec![])
        })),
        Event::KeyUp => Ok(state.navigator.visible_list_mut().map_or((false, vec![]), |list| {
            list.move_selection_up();
            (true, vec![])
        })),
        Event::Select => {
            let selected: Option<Creature> = match state.navigator.top() {
                None => state.navigator.home.displayed_creature().cloned(),
                Some(Route::List(list)) => list.selected_creature().cloned(),
                Some(Route::Detail(_)) => None,
            };

            let Some(creature) = selected else {
                tracing::debug!("nothing selected");
                return Ok((false, vec![]));
            };

            tracing::debug!(id = creature.id, name = %creature.name, "opening detail screen");
            state.open_detail(creature);
            Ok((true, vec![]))
        }
        Event::Back => Ok((state.navigator.back(), vec![])),
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::EditQuery => {
            if state.current_screen() != ScreenKind::Home {
                return Ok((false, vec![]));
            }
            state.navigator.home.input_mode = InputMode::Editing;
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            let home = &mut state.navigator.home;
            if home.input_mode != InputMode::Editing {
                return Ok((false, vec![]));
            }
            home.query.push(*c);
            tracing::trace!(query = %home.query, "query updated");
            Ok((true, vec![]))
        }
        Event::Backspace => {
            let home = &mut state.navigator.home;
            if home.input_mode != InputMode::Editing {
                return Ok((false, vec![]));
            }
            home.query.pop();
            Ok((true, vec![]))
        }
        Event::SubmitQuery => {
            state.navigator.home.input_mode = InputMode::Normal;
            match state.navigator.home.prepare_lookup() {
                Ok(name) => {
                    let action = state.lookup(&name);
                    Ok((true, vec![action]))
                }
                Err(e) => {
                    tracing::debug!(error = %e, "lookup rejected");
                    Ok((true, vec![]))
                }
            }
        }
        Event::StopEditing => {
            state.navigator.home.input_mode = InputMode::Normal;
            Ok((true, vec![]))
        }
        Event::OpenList => {
            if state.current_screen() != ScreenKind::Home {
                return Ok((false, vec![]));
            }
            Ok((true, state.open_list().into_iter().collect()))
        }
        Event::NextPage | Event::PreviousPage => {
            let Some(list) = state.navigator.visible_list_mut() else {
                return Ok((false, vec![]));
            };
            let offset = if *event == Event::NextPage {
                list.next_page()
            } else {
                list.previous_page()
            };
            Ok((true, state.request_page(offset).into_iter().collect()))
        }
        Event::ToggleSort => Ok(state.navigator.visible_list_mut().map_or((false, vec![]), |list| {
            list.toggle_sort();
            (true, vec![])
        })),
        Event::WebResponse { tag, status, body } => Ok(handle_web_response(state, *tag, *status, body)),
        Event::WorkerResponse(response) => Ok(handle_worker_response(state, response)),
    }
}

/// Forwards a successful body to the worker for decoding, or fails the
/// request when the host reported a non-success status.
fn handle_web_response(state: &mut AppState, tag: RequestTag, status: u16, body: &str) -> (bool, Vec<Action>) {
    tracing::debug!(?tag, status, body_len = body.len(), "web response received");

    if !is_success(status) {
        let error = PokedexError::Http {
            status,
            detail: excerpt(body),
        };
        return handle_failure(state, tag, &error);
    }

    if !has_owner(state, tag) {
        tracing::debug!(?tag, "response has no waiting screen, dropped");
        return (false, vec![]);
    }

    let message = match tag {
        RequestTag::IndexPage { .. } => WorkerMessage::decode_index_page(tag, body.to_string()),
        RequestTag::Search { .. } | RequestTag::Detail { .. } => {
            WorkerMessage::decode_creature(tag, body.to_string())
        }
    };

    (false, vec![Action::PostToWorker(message)])
}

fn handle_worker_response(state: &mut AppState, response: &WorkerResponse) -> (bool, Vec<Action>) {
    match response {
        WorkerResponse::CreatureDecoded { tag, creature } => match *tag {
            RequestTag::Search { request_id } => {
                tracing::debug!(request_id, id = creature.id, "lookup succeeded");
                state.navigator.home.show_result(creature.clone());
                (true, vec![])
            }
            RequestTag::Detail { request_id, slot } => {
                let Some(list) = state.navigator.list_mut() else {
                    tracing::debug!(request_id, slot, "list screen gone, detail dropped");
                    return (false, vec![]);
                };

                match list.fill_slot(request_id, slot, creature.clone()) {
                    SlotOutcome::Completed => (state.current_screen() == ScreenKind::List, vec![]),
                    SlotOutcome::Waiting(remaining) => {
                        tracing::trace!(request_id, slot, remaining, "detail slot filled");
                        (false, vec![])
                    }
                    SlotOutcome::Ignored => {
                        tracing::debug!(request_id, slot, "detail for a discarded page, ignored");
                        (false, vec![])
                    }
                }
            }
            RequestTag::IndexPage { .. } => {
                tracing::warn!(?tag, "creature decoded for an index request");
                (false, vec![])
            }
        },
        WorkerResponse::IndexPageDecoded { tag, page } => {
            let RequestTag::IndexPage { request_id, offset } = *tag else {
                tracing::warn!(?tag, "index page decoded for a creature request");
                return (false, vec![]);
            };

            let Some(list) = state.navigator.list_mut() else {
                tracing::debug!(request_id, "list screen gone, index page dropped");
                return (false, vec![]);
            };

            let Some(requests) = list.begin_page(request_id, offset, &page.results) else {
                tracing::debug!(request_id, "index page not issued by this list, ignored");
                return (false, vec![]);
            };

            tracing::debug!(request_id, offset, entries = requests.len(), "fanning out detail requests");

            let actions = requests
                .into_iter()
                .map(|(slot, url)| Action::Fetch {
                    url,
                    tag: RequestTag::Detail { request_id, slot },
                })
                .collect::<Vec<_>>();

            // An empty page swapped in immediately.
            (actions.is_empty(), actions)
        }
        WorkerResponse::DecodeFailed { tag, message } => {
            handle_failure(state, *tag, &PokedexError::MalformedResponse(message.clone()))
        }
        WorkerResponse::Error { message } => {
            tracing::error!(error = %PokedexError::Worker(message.clone()), "worker error");
            (false, vec![])
        }
    }
}

/// Applies a failed request to whichever screen issued it.
///
/// A failed lookup is shown on the home screen. A failed index request, or any
/// failed detail request of a page, leaves the list as it was; only the log
/// records it.
fn handle_failure(state: &mut AppState, tag: RequestTag, error: &PokedexError) -> (bool, Vec<Action>) {
    match tag {
        RequestTag::Search { request_id } => {
            tracing::warn!(request_id, error = %error, "lookup failed");
            state.navigator.home.show_failure(error);
            (true, vec![])
        }
        RequestTag::IndexPage { request_id, offset } => {
            let abandoned = state
                .navigator
                .list_mut()
                .is_some_and(|list| list.abandon_request(request_id));
            if abandoned {
                tracing::warn!(request_id, offset, error = %error, "index page request failed");
            } else {
                tracing::debug!(request_id, error = %error, "failure for an unknown index request");
            }
            (abandoned, vec![])
        }
        RequestTag::Detail { request_id, slot } => {
            let abandoned = state
                .navigator
                .list_mut()
                .is_some_and(|list| list.abandon_page(request_id));
            if abandoned {
                tracing::warn!(request_id, slot, error = %error, "detail request failed, page discarded");
            } else {
                tracing::debug!(request_id, slot, error = %error, "failure for a discarded page");
            }
            (abandoned, vec![])
        }
    }
}

/// Whether some mounted screen is still waiting for `tag`.
fn has_owner(state: &mut AppState, tag: RequestTag) -> bool {
    match tag {
        RequestTag::Search { .. } => true,
        RequestTag::IndexPage { .. } | RequestTag::Detail { .. } => state
            .navigator
            .list_mut()
            .is_some_and(|list| list.is_expecting(tag)),
    }
}

fn excerpt(body: &str) -> String {
    body.chars().take(ERROR_DETAIL_LIMIT).collect()
}

/// Span label for an event; omits response bodies.
const fn event_name(event: &Event) -> &'static str {
    match event {
        Event::KeyDown => "KeyDown",
        Event::KeyUp => "KeyUp",
        Event::Select => "Select",
        Event::Back => "Back",
        Event::CloseFocus => "CloseFocus",
        Event::EditQuery => "EditQuery",
        Event::Char(_) => "Char",
        Event::Backspace => "Backspace",
        Event::SubmitQuery => "SubmitQuery",
        Event::StopEditing => "StopEditing",
        Event::OpenList => "OpenList",
        Event::NextPage => "NextPage",
        Event::PreviousPage => "PreviousPage",
        Event::ToggleSort => "ToggleSort",
        Event::WebResponse { .. } => "WebResponse",
        Event::WorkerResponse(_) => "WorkerResponse",
    }
}
