//! Domain layer for the Pokédex plugin.
//!
//! Plain records mirroring what the plugin keeps from PokeAPI, plus the error
//! type. Nothing here knows about Zellij or HTTP.
//!
//! - [`error`]: Error types, result alias and the user-facing messages
//! - [`creature`]: Creature records, list projections and sort keys

pub mod creature;
pub mod error;

pub use creature::{Creature, CreatureSummary, IndexEntry, SortKey, Stat};
pub use error::{PokedexError, Result, INVALID_QUERY_MESSAGE, LOOKUP_FAILED_MESSAGE};
