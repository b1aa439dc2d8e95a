//! Worker thread that decodes PokeAPI response bodies.
//!
//! A single `/pokemon/{id}` document runs to hundreds of kilobytes (the move
//! list alone dominates it) and a list page fans out into nine of them. Parsing
//! happens here, on the Zellij worker thread, so the plugin thread only ever
//! handles the small decoded records.

use crate::api::{decode_creature, decode_index_page};
use crate::worker::{WorkerMessage, WorkerResponse};
use serde::{Deserialize, Serialize};
use zellij_tile::prelude::{PluginMessage, ZellijWorker};
use zellij_tile::shim::post_message_to_plugin;

/// Worker thread state.
///
/// Decoding is stateless; the struct exists because Zellij instantiates
/// workers through `Default` and persists them with serde.
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct PokedexWorker;

impl PokedexWorker {
    /// Attaches the plugin-side span as the remote parent of this thread's work.
    ///
    /// The returned guard must be held while the message is handled.
    fn attach_parent_trace_context(message: &WorkerMessage) -> Option<opentelemetry::ContextGuard> {
        use opentelemetry::trace::{SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState};

        let trace_context = message.trace_context()?;
        let trace_id = TraceId::from_hex(&trace_context.trace_id).ok()?;
        let span_id = SpanId::from_hex(&trace_context.parent_span_id).ok()?;

        let span_context = SpanContext::new(
            trace_id,
            span_id,
            TraceFlags::SAMPLED,
            true,
            TraceState::default(),
        );

        Some(
            opentelemetry::Context::current()
                .with_remote_span_context(span_context)
                .attach(),
        )
    }

    /// Decodes one message into its response.
    pub fn handle_message(&mut self, message: WorkerMessage) -> WorkerResponse {
        let _context_guard = Self::attach_parent_trace_context(&message);

        let tag = message.tag();
        let span = tracing::debug_span!("worker_handle_message", tag = ?tag);
        let _guard = span.entered();

        let decoded = match message {
            WorkerMessage::DecodeCreature { body, .. } => {
                tracing::debug!(body_len = body.len(), "decoding creature");
                decode_creature(&body).map(|creature| WorkerResponse::CreatureDecoded { tag, creature })
            }
            WorkerMessage::DecodeIndexPage { body, .. } => {
                tracing::debug!(body_len = body.len(), "decoding index page");
                decode_index_page(&body).map(|page| WorkerResponse::IndexPageDecoded { tag, page })
            }
        };

        decoded.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "response body failed to decode");
            WorkerResponse::DecodeFailed {
                tag,
                message: e.to_string(),
            }
        })
    }
}

fn init_worker_tracing() {
    crate::observability::init_tracing(&crate::Config::default());
}

static WORKER_TRACING_INITIALIZED: std::sync::atomic::AtomicBool =
    std::sync::atomic::AtomicBool::new(false);

fn reply(name: String, response: &WorkerResponse) {
    match serde_json::to_string(response) {
        Ok(payload) => post_message_to_plugin(PluginMessage {
            name,
            payload,
            worker_name: None,
        }),
        Err(e) => tracing::debug!(error = %e, "failed to serialize worker response"),
    }
}

impl ZellijWorker<'_> for PokedexWorker {
    /// Handles a JSON-serialized [`WorkerMessage`] from the plugin thread and
    /// posts the [`WorkerResponse`] back under the same message name.
    fn on_message(&mut self, message: String, payload: String) {
        if !WORKER_TRACING_INITIALIZED.swap(true, std::sync::atomic::Ordering::Relaxed) {
            init_worker_tracing();
        }

        let response = match serde_json::from_str::<WorkerMessage>(&payload) {
            Ok(worker_message) => self.handle_message(worker_message),
            Err(e) => {
                tracing::debug!(error = %e, "failed to deserialize worker message");
                WorkerResponse::Error {
                    message: format!("unreadable worker message: {e}"),
                }
            }
        };

        reply(message, &response);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::RequestTag;

    #[test]
    fn creature_body_becomes_a_record() {
        let tag = RequestTag::Search { request_id: 1 };
        let body = r#"{"id": 25, "name": "pikachu", "height": 4, "weight": 60}"#.to_string();
        let response = PokedexWorker.handle_message(WorkerMessage::decode_creature(tag, body));

        match response {
            WorkerResponse::CreatureDecoded { tag: got, creature } => {
                assert_eq!(got, tag);
                assert_eq!(creature.id, 25);
                assert_eq!(creature.weight, 60);
            }
            other => panic!("unexpected response: {other:?}"),
        }
    }

    #[test]
    fn garbage_body_reports_failure_with_its_tag() {
        let tag = RequestTag::Detail {
            request_id: 4,
            slot: 2,
        };
        let response = PokedexWorker.handle_message(WorkerMessage::decode_creature(tag, "{".into()));
        assert!(matches!(response, WorkerResponse::DecodeFailed { tag: t, .. } if t == tag));
    }

    #[test]
    fn index_body_becomes_a_page() {
        let tag = RequestTag::IndexPage {
            request_id: 2,
            offset: 0,
        };
        let body = r#"{"count": 2, "results": [{"name": "a", "url": "u1"}, {"name": "b", "url": "u2"}]}"#;
        let response = PokedexWorker.handle_message(WorkerMessage::decode_index_page(tag, body.into()));
        match response {
            WorkerResponse::IndexPageDecoded { page, .. } => assert_eq!(page.results.len(), 2),
            other => panic!("unexpected response: {other:?}"),
        }
    }

    #[test]
    fn messages_round_trip_through_json_without_trace_context() {
        let message = WorkerMessage::decode_index_page(
            RequestTag::IndexPage {
                request_id: 9,
                offset: 18,
            },
            "{}".into(),
        );
        let json = serde_json::to_string(&message).unwrap();
        assert!(!json.contains("trace_context"));
        let back: WorkerMessage = serde_json::from_str(&json).unwrap();
        assert_eq!(back, message);
    }
}
