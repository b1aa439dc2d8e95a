//! PokeAPI JSON wire types and their decoding into domain records.
//!
//! Only the fields the plugin displays are modelled; serde ignores the rest of
//! the (large) `/pokemon/{id}` document. Every nested sprite field is optional
//! because PokeAPI returns `null` for artwork it does not have.

use crate::domain::{Creature, IndexEntry, Result, Stat};
use serde::{Deserialize, Serialize};

/// A `{ "name": ..., "url": ... }` reference.
#[derive(Debug, Clone, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
struct TypeSlot {
    #[serde(rename = "type")]
    kind: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
struct AbilitySlot {
    ability: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
struct StatEntry {
    base_stat: u32,
    stat: NamedResource,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct SpriteSet {
    #[serde(default)]
    front_default: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct OtherSprites {
    #[serde(default)]
    home: Option<SpriteSet>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct Sprites {
    #[serde(default)]
    front_default: Option<String>,
    #[serde(default)]
    other: Option<OtherSprites>,
}

/// The subset of a `/pokemon/{id}` document the plugin keeps.
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonDocument {
    id: u32,
    name: String,
    #[serde(default)]
    height: u32,
    #[serde(default)]
    weight: u32,
    #[serde(default)]
    sprites: Sprites,
    #[serde(default)]
    types: Vec<TypeSlot>,
    #[serde(default)]
    abilities: Vec<AbilitySlot>,
    #[serde(default)]
    stats: Vec<StatEntry>,
}

impl From<PokemonDocument> for Creature {
    fn from(doc: PokemonDocument) -> Self {
        let home = doc
            .sprites
            .other
            .and_then(|other| other.home)
            .and_then(|home| home.front_default);

        let images = home
            .into_iter()
            .chain(doc.sprites.front_default)
            .collect();

        Self {
            id: doc.id,
            name: doc.name,
            images,
            types: doc.types.into_iter().map(|t| t.kind.name).collect(),
            abilities: doc.abilities.into_iter().map(|a| a.ability.name).collect(),
            stats: doc
                .stats
                .into_iter()
                .map(|s| Stat {
                    name: s.stat.name,
                    value: s.base_stat,
                })
                .collect(),
            height: doc.height,
            weight: doc.weight,
        }
    }
}

/// One page of the `/pokemon?limit&offset` listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexPage {
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<IndexEntry>,
}

/// Decodes a creature document.
///
/// # Errors
///
/// Returns [`PokedexError::Decode`](crate::domain::PokedexError::Decode) if the
/// body is not JSON or lacks `id`/`name`.
pub fn decode_creature(body: &str) -> Result<Creature> {
    let doc: PokemonDocument = serde_json::from_str(body)?;
    Ok(doc.into())
}

/// Decodes an index page.
///
/// # Errors
///
/// Returns [`PokedexError::Decode`](crate::domain::PokedexError::Decode) if the
/// body is not JSON or lacks `results`.
pub fn decode_index_page(body: &str) -> Result<IndexPage> {
    Ok(serde_json::from_str(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BULBASAUR: &str = r#"{
        "id": 1,
        "name": "bulbasaur",
        "height": 7,
        "weight": 69,
        "base_experience": 64,
        "sprites": {
            "front_default": "https://img/front/1.png",
            "other": { "home": { "front_default": "https://img/home/1.png" } }
        },
        "types": [
            { "slot": 1, "type": { "name": "grass", "url": "https://pokeapi.co/api/v2/type/12/" } },
            { "slot": 2, "type": { "name": "poison", "url": "https://pokeapi.co/api/v2/type/4/" } }
        ],
        "abilities": [
            { "is_hidden": false, "slot": 1, "ability": { "name": "overgrow", "url": "" } },
            { "is_hidden": true, "slot": 3, "ability": { "name": "chlorophyll", "url": "" } }
        ],
        "stats": [
            { "base_stat": 45, "effort": 0, "stat": { "name": "hp", "url": "" } },
            { "base_stat": 49, "effort": 0, "stat": { "name": "attack", "url": "" } }
        ]
    }"#;

    #[test]
    fn creature_document_keeps_order_and_prefers_home_artwork() {
        let creature = decode_creature(BULBASAUR).unwrap();
        assert_eq!(creature.id, 1);
        assert_eq!(creature.name, "bulbasaur");
        assert_eq!(creature.images, ["https://img/home/1.png", "https://img/front/1.png"]);
        assert_eq!(creature.types, ["grass", "poison"]);
        assert_eq!(creature.abilities, ["overgrow", "chlorophyll"]);
        assert_eq!(creature.stats[0], Stat { name: "hp".into(), value: 45 });
        assert_eq!(creature.stats[1].value, 49);
        assert_eq!((creature.height, creature.weight), (7, 69));
    }

    #[test]
    fn null_artwork_is_skipped() {
        let body = r#"{"id": 10, "name": "caterpie",
            "sprites": {"front_default": null, "other": {"home": {"front_default": null}}}}"#;
        let creature = decode_creature(body).unwrap();
        assert!(creature.images.is_empty());
        assert!(creature.types.is_empty());
    }

    #[test]
    fn missing_name_is_a_decode_error() {
        assert!(decode_creature(r#"{"id": 1}"#).is_err());
        assert!(decode_creature("<html>Not Found</html>").is_err());
    }

    #[test]
    fn index_page_decodes_results_in_order() {
        let body = r#"{
            "count": 1302,
            "next": "https://pokeapi.co/api/v2/pokemon?offset=9&limit=9",
            "previous": null,
            "results": [
                {"name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/"},
                {"name": "ivysaur", "url": "https://pokeapi.co/api/v2/pokemon/2/"}
            ]
        }"#;
        let page = decode_index_page(body).unwrap();
        assert_eq!(page.count, 1302);
        assert!(page.previous.is_none());
        assert_eq!(page.results.len(), 2);
        assert_eq!(page.results[1].name, "ivysaur");
        assert_eq!(page.results[1].url, "https://pokeapi.co/api/v2/pokemon/2/");
    }
}
