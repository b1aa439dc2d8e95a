//! Pokédex: a Zellij plugin for browsing PokeAPI from the terminal.
//!
//! - Look a creature up by name from the home screen
//! - Page through the catalog nine at a time, sorted by id or name
//! - Open any creature for its types, size, abilities and base stats
//!
//! HTTP is performed by Zellij on the plugin's behalf; response bodies are
//! decoded on a worker thread so the render thread only handles small records.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Navigation stack and screens                     │
//! │  - Event handling, request correlation              │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ API Layer     │   │ Worker Layer  │
//! │ (ui/)         │   │ (api/)        │   │ (worker/)     │
//! │ - Rendering   │   │ - Endpoints   │   │ - JSON decode │
//! │ - Theming     │   │ - Request tags│   │ - IPC bridge  │
//! │ - Components  │   │ - Wire types  │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain, Infrastructure & Observability             │
//! │  - Creature records, sort keys, errors (domain/)    │
//! │  - Sandbox paths (infrastructure/)                  │
//! │  - OpenTelemetry trace file (observability/)        │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pokedex {
//!     api_base_url "https://pokeapi.co/api/v2"
//!     page_size "9"
//!     theme "pokedex-red"
//!     trace_level "info"
//! }
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod api;
pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod ui;
pub mod worker;

pub use app::{handle_event, Action, AppState, Event, InputMode, ScreenKind};

use api::{Endpoints, DEFAULT_BASE_URL};
use std::collections::BTreeMap;
use ui::theme::{Theme, DEFAULT_THEME};

/// Index page size used when none (or an unusable one) is configured.
pub const DEFAULT_PAGE_SIZE: u32 = 9;

/// Plugin configuration parsed from the Zellij layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// PokeAPI root, without a trailing slash.
    pub api_base_url: String,

    /// Entries per list page. Never zero.
    pub page_size: u32,

    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: String,

    /// Path to a custom TOML theme file (`~` maps to the sandbox host root).
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for exported spans. Default: `"info"`
    pub trace_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            theme_name: DEFAULT_THEME.to_string(),
            theme_file: None,
            trace_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// # Parsing Rules
    ///
    /// - `api_base_url`: trailing `/` trimmed; blank falls back to PokeAPI
    /// - `page_size`: positive integer; anything else falls back to 9
    /// - `theme`, `theme_file`, `trace_level`: taken as given when non-blank
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use pokedex::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("page_size".to_string(), "0".to_string());
    /// map.insert("api_base_url".to_string(), "http://localhost:8000/api/v2/".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.page_size, 9);
    /// assert_eq!(config.api_base_url, "http://localhost:8000/api/v2");
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let value = |key: &str| config.get(key).map(|v| v.trim()).filter(|v| !v.is_empty());
        let defaults = Self::default();

        let api_base_url = value("api_base_url")
            .map(|url| url.trim_end_matches('/'))
            .filter(|url| !url.is_empty())
            .map_or(defaults.api_base_url, ToString::to_string);

        let page_size = value("page_size")
            .and_then(|s| s.parse::<u32>().ok())
            .filter(|&n| n > 0)
            .unwrap_or(DEFAULT_PAGE_SIZE);

        Self {
            api_base_url,
            page_size,
            theme_name: value("theme").map_or(defaults.theme_name, ToString::to_string),
            theme_file: value("theme_file").map(ToString::to_string),
            trace_level: value("trace_level").map_or(defaults.trace_level, ToString::to_string),
        }
    }

    /// Resolves the configured theme, falling back to the default theme.
    #[must_use]
    pub fn load_theme(&self) -> Theme {
        if let Some(theme_file) = &self.theme_file {
            match Theme::from_file(infrastructure::expand_tilde(theme_file)) {
                Ok(theme) => return theme,
                Err(e) => tracing::warn!(theme_file = %theme_file, error = %e, "theme file unusable, using default"),
            }
        }

        Theme::from_name(&self.theme_name).unwrap_or_else(|| {
            tracing::warn!(theme_name = %self.theme_name, "unknown theme, using default");
            Theme::default()
        })
    }
}

/// Builds the initial application state from configuration.
///
/// Only the home screen is mounted; nothing is fetched until the user asks.
///
/// # Example
///
/// ```rust
/// use pokedex::{initialize, Config, ScreenKind};
///
/// let state = initialize(&Config::default());
/// assert_eq!(state.current_screen(), ScreenKind::Home);
/// assert_eq!(state.page_size, 9);
/// ```
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(
        api_base_url = %config.api_base_url,
        page_size = config.page_size,
        "initializing pokedex plugin"
    );

    AppState::new(
        Endpoints::new(config.api_base_url.clone()),
        config.page_size,
        config.load_theme(),
    )
}
