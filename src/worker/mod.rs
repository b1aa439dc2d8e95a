//! Background worker thread for decoding API responses.
//!
//! - `messages`: Request/response protocol types with trace context propagation
//! - `handler`: Worker implementation and decoding logic

pub mod handler;
pub mod messages;

pub use handler::PokedexWorker;
pub use messages::{TraceContext, WorkerMessage, WorkerResponse};
