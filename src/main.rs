//! Zellij plugin wrapper and entry point.
//!
//! This module is the thin integration layer between the Pokédex library and
//! the Zellij plugin system: it maps host events to library [`Event`]s and
//! carries out the [`Action`]s the library returns.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────┐        ┌──────────────┐
//! │   Zellij Main Thread    │ GET    │              │
//! │  ┌──────────────────┐   │───────►│   PokeAPI    │
//! │  │  State (plugin)  │   │◄───────│  (via host)  │
//! │  └──────────────────┘   │ body   └──────────────┘
//! │      │ body   ▲ record  │
//! │      ▼        │         │
//! │  ┌──────────────────┐   │
//! │  │  PokedexWorker   │   │  ← JSON decoding
//! │  └──────────────────┘   │
//! └─────────────────────────┘
//! ```
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Permissions**: Request `WebAccess` plus application state access
//! 3. **Update**: Map Zellij events, delegate to `handle_event`, run actions
//! 4. **Render**: Call library render function
//!
//! # Keybindings
//!
//! Global:
//! - `Ctrl+n` / `Ctrl+p`: Move selection
//!
//! Home (normal):
//! - `/` or `i`: Edit query
//! - `Enter`: Open the result
//! - `l`: Open the list
//! - `q` / `Esc`: Close plugin
//!
//! Home (editing):
//! - Characters: Type
//! - `Backspace`: Delete
//! - `Enter`: Search
//! - `Esc`: Stop editing
//!
//! List:
//! - `j`/`k`/arrows: Move selection
//! - `n`/`→`: Next page, `p`/`←`: Previous page
//! - `s`: Toggle sort
//! - `Enter`: Open details
//! - `b`/`Esc`: Back, `q`: Close plugin
//!
//! Detail:
//! - `b`/`Esc`/`Backspace`: Back, `q`: Close plugin

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;
use zellij_tile::shim::post_message_to;

use pokedex::api::RequestTag;
use pokedex::worker::{PokedexWorker, WorkerMessage, WorkerResponse};
use pokedex::{handle_event, Action, Config, Event, InputMode, ScreenKind};

register_plugin!(State);
register_worker!(PokedexWorker, pokedex_worker, POKEDEX_WORKER);

/// Plugin state wrapper.
struct State {
    /// Core application state from library layer.
    app: pokedex::AppState,

    /// Worker thread identifier for IPC messaging.
    worker_name: String,

    /// Whether the user granted web access.
    web_access: bool,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: pokedex::initialize(&Config::default()),
            worker_name: "pokedex".to_string(),
            web_access: false,
        }
    }
}

impl ZellijPlugin for State {
    /// Parses configuration, initializes tracing and state, requests
    /// permissions and subscribes to events.
    ///
    /// # Subscriptions
    ///
    /// - `Key`: Keyboard input
    /// - `WebRequestResult`: PokeAPI responses
    /// - `CustomMessage`: Worker responses
    /// - `PermissionRequestResult`: Grant or denial of web access
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        pokedex::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(config = ?config, "parsed configuration");
        self.app = pokedex::initialize(&config);

        request_permission(&[
            PermissionType::WebAccess,
            PermissionType::ReadApplicationState,
            PermissionType::ChangeApplicationState,
        ]);

        subscribe(&[
            EventType::Key,
            EventType::WebRequestResult,
            EventType::CustomMessage,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    /// Handles incoming Zellij events. Returns `true` if the UI should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", otel.name = %format!("plugin_update::{event_name}"), event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                match Self::map_web_request_event(status, body, &context) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::CustomMessage(message, payload) => {
                match self.map_custom_message_event(&message, &payload) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::PermissionRequestResult(permissions) => {
                self.handle_permission_result(permissions);
                return true;
            }
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(action_count = actions.len(), should_render, "event handled");
                for action in actions {
                    self.execute_action(&action);
                }
                should_render
            }
            Err(e) => {
                tracing::warn!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        pokedex::ui::render(&self.app, rows, cols);
    }
}

impl State {
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => format!("WebRequestResult({status})"),
            zellij_tile::prelude::Event::CustomMessage(msg, _) => format!("CustomMessage({msg})"),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => "PermissionRequestResult".to_string(),
            _ => "Other".to_string(),
        }
    }

    /// Maps keyboard events to application events for the visible screen.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        if key.has_modifiers(&[KeyModifier::Ctrl]) {
            return match key.bare_key {
                BareKey::Char('n') => Some(Event::KeyDown),
                BareKey::Char('p') => Some(Event::KeyUp),
                _ => None,
            };
        }

        match self.app.current_screen() {
            ScreenKind::Home => Self::map_home_key(key.bare_key, self.app.home_input_mode()),
            ScreenKind::List => Self::map_list_key(key.bare_key),
            ScreenKind::Detail => Self::map_detail_key(key.bare_key),
        }
    }

    fn map_home_key(key: BareKey, mode: InputMode) -> Option<Event> {
        Some(match (mode, key) {
            (InputMode::Editing, BareKey::Enter) => Event::SubmitQuery,
            (InputMode::Editing, BareKey::Esc) => Event::StopEditing,
            (InputMode::Editing, BareKey::Backspace) => Event::Backspace,
            (InputMode::Editing, BareKey::Char(c)) => Event::Char(c),
            (InputMode::Normal, BareKey::Char('/' | 'i')) => Event::EditQuery,
            (InputMode::Normal, BareKey::Enter) => Event::Select,
            (InputMode::Normal, BareKey::Char('l')) => Event::OpenList,
            (InputMode::Normal, BareKey::Char('q') | BareKey::Esc) => Event::CloseFocus,
            _ => return None,
        })
    }

    fn map_list_key(key: BareKey) -> Option<Event> {
        Some(match key {
            BareKey::Down | BareKey::Char('j') => Event::KeyDown,
            BareKey::Up | BareKey::Char('k') => Event::KeyUp,
            BareKey::Right | BareKey::Char('n') => Event::NextPage,
            BareKey::Left | BareKey::Char('p') => Event::PreviousPage,
            BareKey::Char('s') => Event::ToggleSort,
            BareKey::Enter => Event::Select,
            BareKey::Esc | BareKey::Char('b') => Event::Back,
            BareKey::Char('q') => Event::CloseFocus,
            _ => return None,
        })
    }

    fn map_detail_key(key: BareKey) -> Option<Event> {
        Some(match key {
            BareKey::Esc | BareKey::Backspace | BareKey::Char('b') => Event::Back,
            BareKey::Char('q') => Event::CloseFocus,
            _ => return None,
        })
    }

    /// Maps a finished web request to an application event.
    ///
    /// Requests are only ever issued with a [`RequestTag`] context, so a
    /// context that does not parse did not come from this plugin.
    fn map_web_request_event(status: u16, body: Vec<u8>, context: &BTreeMap<String, String>) -> Option<Event> {
        let tag = match RequestTag::from_context(context) {
            Ok(tag) => tag,
            Err(e) => {
                tracing::debug!(error = %e, "ignoring web response without a request tag");
                return None;
            }
        };

        tracing::debug!(?tag, status, body_len = body.len(), "web request result");

        Some(Event::WebResponse {
            tag,
            status,
            body: String::from_utf8_lossy(&body).into_owned(),
        })
    }

    fn handle_permission_result(&mut self, permissions: PermissionStatus) {
        match permissions {
            PermissionStatus::Granted => {
                tracing::debug!("permissions granted");
                self.web_access = true;
            }
            PermissionStatus::Denied => {
                tracing::warn!("permissions denied - lookups will fail");
                self.web_access = false;
            }
        }
    }

    /// Maps custom message events to application events.
    fn map_custom_message_event(&self, message: &str, payload: &str) -> Option<Event> {
        if message != self.worker_name {
            tracing::debug!(message_name = %message, "ignoring custom message with unknown name");
            return None;
        }

        match serde_json::from_str::<WorkerResponse>(payload) {
            Ok(response) => Some(Event::WorkerResponse(response)),
            Err(e) => {
                tracing::debug!(error = %e, "failed to deserialize worker response");
                None
            }
        }
    }

    /// Serializes `message` and posts it to the worker thread.
    fn post_worker_message(&self, message: &WorkerMessage) {
        match serde_json::to_string(message) {
            Ok(payload) => {
                tracing::debug!(payload_len = payload.len(), "posting message to worker");
                post_message_to(PluginMessage {
                    worker_name: Some(self.worker_name.clone()),
                    name: self.worker_name.clone(),
                    payload,
                });
            }
            Err(e) => {
                tracing::debug!(error = %e, "failed to serialize worker message");
            }
        }
    }

    /// Translates library actions to Zellij API calls.
    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&self, action: &Action) {
        match action {
            Action::CloseFocus => hide_self(),
            Action::Fetch { url, tag } => {
                if !self.web_access {
                    tracing::debug!(%url, "web access not granted yet, request may be refused");
                }
                web_request(url, HttpVerb::Get, BTreeMap::new(), vec![], tag.to_context());
            }
            Action::PostToWorker(message) => self.post_worker_message(message),
        }
    }
}
