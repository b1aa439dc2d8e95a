//! Worker thread message types for cross-thread communication.
//!
//! The plugin posts raw PokeAPI response bodies to the worker and gets decoded
//! domain records back. Every request carries the [`RequestTag`] of the HTTP
//! request that produced the body so the response can be routed to the screen
//! waiting for it. Trace context travels along so worker spans join the
//! plugin's trace.

use crate::api::{IndexPage, RequestTag};
use crate::domain::Creature;
use serde::{Deserialize, Serialize};

/// Distributed tracing context for cross-thread span propagation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceContext {
    /// OpenTelemetry trace ID as a hex string.
    pub trace_id: String,

    /// Parent span ID for linking spans across threads.
    pub parent_span_id: String,
}

impl TraceContext {
    /// Captures the OpenTelemetry ids of the current `tracing` span.
    ///
    /// Returns `None` when no valid span is active (tracing disabled, or
    /// called outside any span).
    pub fn from_current() -> Option<Self> {
        use opentelemetry::trace::TraceContextExt;
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let otel_context = tracing::Span::current().context();
        let span_ref = otel_context.span();
        let span_context = span_ref.span_context();

        if !span_context.is_valid() {
            return None;
        }

        Some(Self {
            trace_id: format!("{:032x}", span_context.trace_id()),
            parent_span_id: format!("{:016x}", span_context.span_id()),
        })
    }
}

/// Generates `WorkerMessage` constructors that attach the current trace context.
macro_rules! worker_message_builders {
    (
        $(
            $builder_name:ident($variant:ident { $($field:ident: $ty:ty),* $(,)? })
        ),* $(,)?
    ) => {
        impl WorkerMessage {
            $(
                #[doc = concat!("Create a ", stringify!($variant), " message with current trace context")]
                #[must_use]
                pub fn $builder_name($($field: $ty),*) -> Self {
                    Self::$variant {
                        $($field,)*
                        trace_context: TraceContext::from_current(),
                    }
                }
            )*
        }
    };
}

worker_message_builders! {
    decode_creature(DecodeCreature { tag: RequestTag, body: String }),
    decode_index_page(DecodeIndexPage { tag: RequestTag, body: String }),
}

/// Messages sent from the plugin to the worker thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerMessage {
    /// Decode a `/pokemon/{id}` body into a [`Creature`].
    DecodeCreature {
        /// Tag of the HTTP request the body answers.
        tag: RequestTag,
        /// Raw response body.
        body: String,

        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },

    /// Decode a `/pokemon?limit&offset` body into an [`IndexPage`].
    DecodeIndexPage {
        /// Tag of the HTTP request the body answers.
        tag: RequestTag,
        /// Raw response body.
        body: String,

        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },
}

impl WorkerMessage {
    /// Tag of the request this message belongs to.
    #[must_use]
    pub const fn tag(&self) -> RequestTag {
        match self {
            Self::DecodeCreature { tag, .. } | Self::DecodeIndexPage { tag, .. } => *tag,
        }
    }

    pub(crate) const fn trace_context(&self) -> Option<&TraceContext> {
        match self {
            Self::DecodeCreature { trace_context, .. }
            | Self::DecodeIndexPage { trace_context, .. } => trace_context.as_ref(),
        }
    }
}

/// Responses sent from the worker back to the plugin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerResponse {
    /// A creature body decoded successfully.
    CreatureDecoded {
        tag: RequestTag,
        creature: Creature,
    },

    /// An index page body decoded successfully.
    IndexPageDecoded {
        tag: RequestTag,
        page: IndexPage,
    },

    /// A body could not be decoded.
    DecodeFailed {
        tag: RequestTag,
        /// Decoder error, for logs only.
        message: String,
    },

    /// The worker could not read the message at all.
    Error {
        /// Human-readable error message.
        message: String,
    },
}
