//! Creature records and their list projections.
//!
//! A [`Creature`] is the full record for one catalog entry as the plugin keeps
//! it after decoding a PokeAPI `/pokemon/{id}` document. [`CreatureSummary`] is
//! the reduced view the list grid draws. Neither is ever cached: they live in
//! the state of the screen that fetched them.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// PokeAPI reports height in decimetres and weight in hectograms.
const DISPLAY_UNIT_DIVISOR: f64 = 10.0;

/// One named base statistic (`hp`, `attack`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub name: String,
    pub value: u32,
}

/// Full creature record.
///
/// `images` is ordered by preference: the "home" artwork first, then the
/// classic front sprite. `types`, `abilities` and `stats` keep the order the
/// API returned them in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creature {
    pub id: u32,
    pub name: String,
    pub images: Vec<String>,
    pub types: Vec<String>,
    pub abilities: Vec<String>,
    pub stats: Vec<Stat>,
    pub height: u32,
    pub weight: u32,
}

impl Creature {
    /// Name as shown on every screen: upper-cased.
    ///
    /// ```
    /// # use pokedex::domain::Creature;
    /// let c = Creature::named(25, "pikachu");
    /// assert_eq!(c.display_name(), "PIKACHU");
    /// ```
    #[must_use]
    pub fn display_name(&self) -> String {
        self.name.to_uppercase()
    }

    /// Builds a record with only an id and a name.
    #[must_use]
    pub fn named(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            images: Vec::new(),
            types: Vec::new(),
            abilities: Vec::new(),
            stats: Vec::new(),
            height: 0,
            weight: 0,
        }
    }

    /// Preferred image URI, if the API provided any.
    #[must_use]
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Height in metres.
    #[must_use]
    pub fn height_m(&self) -> f64 {
        f64::from(self.height) / DISPLAY_UNIT_DIVISOR
    }

    /// Weight in kilograms.
    #[must_use]
    pub fn weight_kg(&self) -> f64 {
        f64::from(self.weight) / DISPLAY_UNIT_DIVISOR
    }

    /// Projects the record down to what a list card needs.
    #[must_use]
    pub fn summary(&self) -> CreatureSummary {
        CreatureSummary::from(self)
    }
}

/// List item projection of a [`Creature`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatureSummary {
    pub id: u32,
    pub name: String,
    pub image: Option<String>,
}

impl From<&Creature> for CreatureSummary {
    fn from(creature: &Creature) -> Self {
        Self {
            id: creature.id,
            name: creature.name.clone(),
            image: creature.primary_image().map(ToString::to_string),
        }
    }
}

/// One row of an index page: a name and the URL of its detail document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEntry {
    pub name: String,
    pub url: String,
}

/// Key the list screen orders its in-memory page by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    /// Numeric ascending by identifier.
    #[default]
    Id,
    /// Lexicographic ascending by name.
    Name,
}

impl SortKey {
    /// The other key.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Id => Self::Name,
            Self::Name => Self::Id,
        }
    }

    /// Label used by the list header ("Sort by: ID").
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Id => "ID",
            Self::Name => "Name",
        }
    }

    /// Compares two creatures under this key.
    #[must_use]
    pub fn compare(self, a: &Creature, b: &Creature) -> Ordering {
        match self {
            Self::Id => a.id.cmp(&b.id),
            Self::Name => a.name.cmp(&b.name),
        }
    }

    /// Sorts `creatures` in place. The sort is stable.
    pub fn sort(self, creatures: &mut [Creature]) {
        creatures.sort_by(|a, b| self.compare(a, b));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_units_divide_by_ten() {
        let mut c = Creature::named(25, "pikachu");
        c.height = 4;
        c.weight = 60;
        assert!((c.height_m() - 0.4).abs() < f64::EPSILON);
        assert!((c.weight_kg() - 6.0).abs() < f64::EPSILON);
        assert_eq!(format!("{}", c.weight_kg()), "6");
        assert_eq!(format!("{}", c.height_m()), "0.4");
    }

    #[test]
    fn summary_takes_the_preferred_image() {
        let mut c = Creature::named(1, "bulbasaur");
        c.images = vec!["home.png".to_string(), "front.png".to_string()];
        let summary = c.summary();
        assert_eq!(summary.id, 1);
        assert_eq!(summary.name, "bulbasaur");
        assert_eq!(summary.image.as_deref(), Some("home.png"));
    }

    #[test]
    fn summary_without_images_has_no_thumbnail() {
        assert_eq!(Creature::named(2, "ivysaur").summary().image, None);
    }

    #[test]
    fn sort_by_name_then_back_to_id() {
        let mut list = vec![Creature::named(3, "b"), Creature::named(1, "a"), Creature::named(2, "c")];

        SortKey::Name.sort(&mut list);
        let names: Vec<_> = list.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["a", "b", "c"]);

        SortKey::Id.sort(&mut list);
        let ids: Vec<_> = list.iter().map(|c| c.id).collect();
        assert_eq!(ids, [1, 2, 3]);
    }

    #[test]
    fn toggle_flips_between_keys() {
        assert_eq!(SortKey::default(), SortKey::Id);
        assert_eq!(SortKey::Id.toggled(), SortKey::Name);
        assert_eq!(SortKey::Name.toggled(), SortKey::Id);
    }
}
