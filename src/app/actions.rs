//! Side effects requested by the event handler.
//!
//! [`handle_event`](super::handle_event) never talks to Zellij directly. It
//! returns a list of [`Action`]s that the plugin shim executes in order, which
//! keeps the handler testable without a host.

use crate::api::RequestTag;
use crate::worker::WorkerMessage;

/// Commands executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Issues an HTTP `GET` through the host.
    ///
    /// `tag` is attached as the request context and comes back with the
    /// `WebRequestResult` event.
    Fetch {
        /// Absolute URL to request.
        url: String,
        /// Correlation for the response.
        tag: RequestTag,
    },

    /// Posts a message to the background worker thread.
    PostToWorker(WorkerMessage),
}

impl Action {
    /// Tag of a `Fetch`, if this is one.
    #[must_use]
    pub const fn fetch_tag(&self) -> Option<RequestTag> {
        match self {
            Self::Fetch { tag, .. } => Some(*tag),
            _ => None,
        }
    }
}
