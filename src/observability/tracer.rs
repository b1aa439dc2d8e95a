//! Tracer provider that exports spans to the trace file.
//!
//! Spans are exported one batch per line through a simple (synchronous)
//! exporter: the WASM sandbox has no background runtime to drive a batching
//! processor.

use super::file_writer::RotatingFile;
use super::otlp_json::OtlpJsonEncoder;
use futures_util::future::BoxFuture;
use opentelemetry::trace::TraceError;
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use std::path::PathBuf;

/// Writes OTLP JSON span batches to a [`RotatingFile`].
#[derive(Debug)]
struct FileSpanExporter {
    file: RotatingFile,
    encoder: OtlpJsonEncoder,
    stopped: bool,
}

impl FileSpanExporter {
    fn new(path: PathBuf, resource: &Resource) -> Self {
        Self {
            file: RotatingFile::new(path),
            encoder: OtlpJsonEncoder::new(resource),
            stopped: false,
        }
    }

    fn write(&self, batch: &[SpanData]) -> ExportResult {
        if self.stopped {
            return Err(TraceError::from("trace file exporter already shut down"));
        }
        let line = self.encoder.encode(batch).to_string();
        self.file
            .append_line(&line)
            .map_err(|e| TraceError::from(format!("trace file write failed: {e}")))
    }
}

impl SpanExporter for FileSpanExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        let result = self.write(&batch);
        Box::pin(std::future::ready(result))
    }

    fn shutdown(&mut self) {
        self.stopped = true;
    }

    fn set_resource(&mut self, resource: &Resource) {
        self.encoder = OtlpJsonEncoder::new(resource);
    }
}

/// Builds a provider whose spans land in `path` as OTLP JSON lines.
#[must_use]
pub fn file_tracer_provider(path: PathBuf, resource: Resource) -> TracerProvider {
    let exporter = FileSpanExporter::new(path, &resource);

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}
