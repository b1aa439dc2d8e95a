//! PokeAPI URL construction.

/// Default PokeAPI root.
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Builds request URLs against a PokeAPI root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl Endpoints {
    /// Creates endpoints for `base_url`; a trailing `/` is dropped.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of a single creature by name or numeric id.
    ///
    /// ```
    /// use pokedex::api::Endpoints;
    ///
    /// let endpoints = Endpoints::new("https://pokeapi.co/api/v2/");
    /// assert_eq!(endpoints.creature("pikachu"), "https://pokeapi.co/api/v2/pokemon/pikachu");
    /// ```
    #[must_use]
    pub fn creature(&self, name_or_id: &str) -> String {
        format!("{}/pokemon/{name_or_id}", self.base_url)
    }

    /// URL of one index page. The offset is passed through unchecked.
    #[must_use]
    pub fn index_page(&self, limit: u32, offset: i64) -> String {
        format!("{}/pokemon?limit={limit}&offset={offset}", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_page_url_carries_limit_and_offset() {
        let endpoints = Endpoints::default();
        assert_eq!(
            endpoints.index_page(9, 18),
            "https://pokeapi.co/api/v2/pokemon?limit=9&offset=18"
        );
    }

    #[test]
    fn negative_offsets_are_not_clamped() {
        let endpoints = Endpoints::new("http://localhost:8080");
        assert_eq!(
            endpoints.index_page(9, -9),
            "http://localhost:8080/pokemon?limit=9&offset=-9"
        );
    }
}
