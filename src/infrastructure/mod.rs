//! Infrastructure layer for the Zellij plugin sandbox.
//!
//! The host filesystem is only reachable under `/host`; everything that turns
//! a user-facing path into a sandbox path lives here.

pub mod paths;

pub use paths::{data_dir, expand_tilde, trace_file};
