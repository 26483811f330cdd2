//! Resolve user input (or a random id) to a creature record

use std::fmt;

use rand::Rng;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::api::PokeApi;
use crate::error::LookupError;
use crate::name_index::NAME_INDEX_LIMIT;
use crate::state::{CreatureRecord, LookupOrigin};

/// Path segment for `/pokemon/{..}`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum Identifier {
    /// All digits, kept exactly as typed (leading zeros included)
    Id(String),
    /// Lowercased name
    Name(String),
}

impl Identifier {
    pub fn as_str(&self) -> &str {
        match self {
            Identifier::Id(id) => id,
            Identifier::Name(name) => name,
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trim and classify raw input. Blank input is rejected before any request.
pub fn parse_identifier(input: &str) -> Result<Identifier, LookupError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(LookupError::EmptyInput);
    }
    if input.chars().all(|ch| ch.is_ascii_digit()) {
        Ok(Identifier::Id(input.to_string()))
    } else {
        Ok(Identifier::Name(input.to_lowercase()))
    }
}

/// Uniform draw from `1..=NAME_INDEX_LIMIT`
pub fn random_identifier<R: Rng + ?Sized>(rng: &mut R) -> Identifier {
    let id = rng.gen_range(1..=NAME_INDEX_LIMIT);
    Identifier::Id(id.to_string())
}

/// Shared primary fetch. The app's lookup task calls this with an
/// identifier the reducer has already parsed.
pub async fn fetch(
    api: &PokeApi,
    identifier: &Identifier,
    origin: LookupOrigin,
) -> Result<CreatureRecord, LookupError> {
    api.fetch_creature(identifier.as_str())
        .await
        .map_err(|error| {
            tracing::warn!(%error, %identifier, "lookup failed");
            error.into_lookup(origin)
        })
}

/// Library-level lookup from raw input: `parse_identifier` then `fetch`.
/// The app splits these two steps between the reducer and its task.
pub async fn resolve_by_identifier(
    api: &PokeApi,
    input: &str,
) -> Result<CreatureRecord, LookupError> {
    let identifier = parse_identifier(input)?;
    fetch(api, &identifier, LookupOrigin::Search).await
}

/// Random lookup, used directly by the app's random task.
pub async fn resolve_random(api: &PokeApi) -> Result<CreatureRecord, LookupError> {
    let identifier = random_identifier(&mut rand::thread_rng());
    fetch(api, &identifier, LookupOrigin::Random).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_blank_input_rejected() {
        assert_eq!(parse_identifier(""), Err(LookupError::EmptyInput));
        assert_eq!(parse_identifier(" \t "), Err(LookupError::EmptyInput));
    }

    #[test]
    fn test_digits_pass_through() {
        assert_eq!(parse_identifier("25"), Ok(Identifier::Id("25".into())));
        assert_eq!(parse_identifier(" 007 "), Ok(Identifier::Id("007".into())));
    }

    #[test]
    fn test_names_lowercased() {
        assert_eq!(
            parse_identifier("  PiKaChU "),
            Ok(Identifier::Name("pikachu".into()))
        );
        assert_eq!(
            parse_identifier("Mr-Mime"),
            Ok(Identifier::Name("mr-mime".into()))
        );
    }

    #[test]
    fn test_mixed_input_is_a_name() {
        assert_eq!(parse_identifier("25a"), Ok(Identifier::Name("25a".into())));
        assert_eq!(parse_identifier("-1"), Ok(Identifier::Name("-1".into())));
    }

    #[test]
    fn test_random_identifier_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..2000 {
            let Identifier::Id(id) = random_identifier(&mut rng) else {
                panic!("random lookups always use ids");
            };
            let id: u32 = id.parse().unwrap();
            assert!((1..=NAME_INDEX_LIMIT).contains(&id));
        }
    }
}
