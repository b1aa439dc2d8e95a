//! PokeAPI access layer.
//!
//! The plugin never opens sockets itself: it asks Zellij to perform a
//! `web_request` and receives the body later as an event. This module owns the
//! pieces of that exchange that are independent of the host:
//!
//! - [`endpoints`]: URL construction for creature and index requests
//! - [`request`]: [`RequestTag`] correlation carried in the request context
//! - [`wire`]: JSON wire types and decoding into domain records

pub mod endpoints;
pub mod request;
pub mod wire;

pub use endpoints::{Endpoints, DEFAULT_BASE_URL};
pub use request::RequestTag;
pub use wire::{decode_creature, decode_index_page, IndexPage};

/// Whether an HTTP status reported by the host counts as success.
#[must_use]
pub const fn is_success(status: u16) -> bool {
    status >= 200 && status < 300
}
