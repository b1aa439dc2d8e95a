//! Request tags carried through Zellij's web request context.
//!
//! Zellij performs HTTP on behalf of the plugin and hands back the
//! `BTreeMap<String, String>` context that was attached to the request. A
//! [`RequestTag`] is written into that map when a request is issued and read
//! back from it when the response arrives, which is how a response finds the
//! screen and page slot waiting for it.

use crate::domain::{PokedexError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const KIND_KEY: &str = "pokedex_request";
const ID_KEY: &str = "request_id";
const OFFSET_KEY: &str = "offset";
const SLOT_KEY: &str = "slot";

/// Identifies what an in-flight request is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequestTag {
    /// Home screen lookup.
    Search { request_id: u64 },
    /// Index page of the list screen.
    IndexPage { request_id: u64, offset: i64 },
    /// One detail lookup of the fan-out for index page `request_id`.
    Detail { request_id: u64, slot: usize },
}

impl RequestTag {
    /// Id of the request (for `Detail`, the id of its index page).
    #[must_use]
    pub const fn request_id(&self) -> u64 {
        match *self {
            Self::Search { request_id }
            | Self::IndexPage { request_id, .. }
            | Self::Detail { request_id, .. } => request_id,
        }
    }

    const fn kind(&self) -> &'static str {
        match self {
            Self::Search { .. } => "search",
            Self::IndexPage { .. } => "index",
            Self::Detail { .. } => "detail",
        }
    }

    /// Encodes the tag as a Zellij request context.
    #[must_use]
    pub fn to_context(&self) -> BTreeMap<String, String> {
        let mut context = BTreeMap::new();
        context.insert(KIND_KEY.to_string(), self.kind().to_string());
        context.insert(ID_KEY.to_string(), self.request_id().to_string());
        match *self {
            Self::Search { .. } => {}
            Self::IndexPage { offset, .. } => {
                context.insert(OFFSET_KEY.to_string(), offset.to_string());
            }
            Self::Detail { slot, .. } => {
                context.insert(SLOT_KEY.to_string(), slot.to_string());
            }
        }
        context
    }

    /// Decodes a tag from a Zellij request context.
    ///
    /// # Errors
    ///
    /// Returns [`PokedexError::UnknownRequest`] when the map was not produced
    /// by [`RequestTag::to_context`].
    pub fn from_context(context: &BTreeMap<String, String>) -> Result<Self> {
        let kind = context
            .get(KIND_KEY)
            .ok_or_else(|| PokedexError::UnknownRequest(format!("missing {KIND_KEY}")))?;
        let request_id = parse_field::<u64>(context, ID_KEY)?;

        match kind.as_str() {
            "search" => Ok(Self::Search { request_id }),
            "index" => Ok(Self::IndexPage {
                request_id,
                offset: parse_field(context, OFFSET_KEY)?,
            }),
            "detail" => Ok(Self::Detail {
                request_id,
                slot: parse_field(context, SLOT_KEY)?,
            }),
            other => Err(PokedexError::UnknownRequest(format!("kind {other:?}"))),
        }
    }
}

fn parse_field<T: std::str::FromStr>(context: &BTreeMap<String, String>, key: &str) -> Result<T> {
    context
        .get(key)
        .and_then(|raw| raw.parse::<T>().ok())
        .ok_or_else(|| PokedexError::UnknownRequest(format!("missing or invalid {key}")))
}
