//! Application layer coordinating screens, events, and actions.
//!
//! This module sits between the plugin runtime (main.rs) and the
//! api/domain/worker layers. Data flows one way:
//!
//! ```text
//! Key / WebRequestResult → Event → handle_event → screen state → Actions
//!                                       ↑                           ↓
//!                                       └──── Worker Responses ─────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing and request correlation
//! - [`modes`]: Screen and input mode types
//! - [`navigation`]: Stack of mounted screens
//! - [`screens`]: Home, list and detail screen state
//! - [`state`]: Central state container and view model computation

pub mod actions;
pub mod handler;
pub mod modes;
pub mod navigation;
pub mod screens;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{InputMode, ScreenKind};
pub use navigation::{Navigator, Route};
pub use screens::{DetailScreen, HomeScreen, ListScreen, SlotOutcome};
pub use state::AppState;
