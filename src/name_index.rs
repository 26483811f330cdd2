//! Autocomplete over the prefetched list of creature names

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::api::PokeApi;

/// Size of the listing request; also the highest id a random lookup draws.
pub const NAME_INDEX_LIMIT: u32 = 1025;
pub const MAX_SUGGESTIONS: usize = 8;

/// Ordered list of every known name. Empty until the startup load lands,
/// and stays empty if that load fails.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct NameIndex {
    names: Vec<String>,
}

impl NameIndex {
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    /// Load the index from the listing endpoint. A failed load is logged and
    /// yields an empty index; autocomplete then has nothing to offer.
    pub async fn initialize(api: &PokeApi) -> Self {
        match api.fetch_names(NAME_INDEX_LIMIT).await {
            Ok(names) => {
                tracing::info!(count = names.len(), "name index loaded");
                Self::new(names)
            }
            Err(error) => {
                tracing::warn!(%error, "could not load name index");
                Self::default()
            }
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Names starting with `prefix`, case-insensitive, in index order, capped
    /// at [`MAX_SUGGESTIONS`]. A blank prefix means "hide the dropdown" and
    /// returns nothing.
    pub fn suggest(&self, prefix: &str) -> Vec<String> {
        if prefix.trim().is_empty() {
            return Vec::new();
        }
        let prefix = prefix.to_lowercase();
        self.names
            .iter()
            .filter(|name| name.to_lowercase().starts_with(&prefix))
            .take(MAX_SUGGESTIONS)
            .cloned()
            .collect()
    }
}

impl fmt::Display for NameIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} names", self.names.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn index() -> NameIndex {
        NameIndex::new(
            [
                "bulbasaur",
                "ivysaur",
                "venusaur",
                "charmander",
                "charmeleon",
                "charizard",
                "pichu",
                "pikachu",
                "raichu",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        )
    }

    #[test]
    fn test_blank_prefix_yields_nothing() {
        let index = index();
        assert!(index.suggest("").is_empty());
        assert!(index.suggest("   ").is_empty());
    }

    #[test]
    fn test_prefix_is_case_insensitive_and_ordered() {
        let index = index();
        assert_eq!(index.suggest("CHAR"), vec!["charmander", "charmeleon", "charizard"]);
        assert_eq!(index.suggest("Pi"), vec!["pichu", "pikachu"]);
    }

    #[test]
    fn test_prefix_not_substring() {
        let index = index();
        assert!(index.suggest("saur").is_empty());
    }

    #[test]
    fn test_caps_at_eight() {
        let names = (0..20).map(|n| format!("porygon-{n}")).collect();
        let index = NameIndex::new(names);
        let suggestions = index.suggest("pory");
        assert_eq!(suggestions.len(), MAX_SUGGESTIONS);
        assert_eq!(suggestions[0], "porygon-0");
        assert_eq!(suggestions[7], "porygon-7");
    }

    #[test]
    fn test_empty_index_suggests_nothing() {
        let index = NameIndex::default();
        assert!(index.suggest("pika").is_empty());
        assert_eq!(index.to_string(), "0 names");
    }
}
