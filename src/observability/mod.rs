//! Tracing and OpenTelemetry export.
//!
//! Zellij plugins have no stderr worth reading, so spans go to a file instead:
//! OTLP JSON, one exported batch per line, rotated by size.
//!
//! - `init`: Subscriber installation from [`Config`](crate::Config)
//! - `tracer`: Tracer provider and the file span exporter
//! - `otlp_json`: OTLP JSON encoding of span batches
//! - `file_writer`: Size-rotated line file

mod file_writer;
mod init;
mod otlp_json;
mod tracer;

pub use init::init_tracing;
