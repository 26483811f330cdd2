//! Async bodies for effects. Each one resolves to exactly one action.

use crate::action::Action;
use crate::api::PokeApi;
use crate::error::LookupError;
use crate::habitat;
use crate::lookup::{self, Identifier};
use crate::name_index::NameIndex;
use crate::state::{CreatureRecord, LookupOrigin};

pub async fn load_name_index(api: &PokeApi) -> Action {
    Action::NameIndexDidLoad(NameIndex::initialize(api).await)
}

pub async fn lookup(api: &PokeApi, generation: u64, identifier: Identifier) -> Action {
    let result = lookup::fetch(api, &identifier, LookupOrigin::Search).await;
    finish(api, generation, LookupOrigin::Search, result).await
}

pub async fn lookup_random(api: &PokeApi, generation: u64) -> Action {
    let result = lookup::resolve_random(api).await;
    finish(api, generation, LookupOrigin::Random, result).await
}

/// Enrich a resolved record with its habitat. Enrichment cannot fail the
/// lookup; it degrades to "Unknown".
async fn finish(
    api: &PokeApi,
    generation: u64,
    origin: LookupOrigin,
    result: Result<CreatureRecord, LookupError>,
) -> Action {
    match result {
        Ok(record) => {
            let habitat = habitat::habitat_for(api, record.species_url.as_deref()).await;
            Action::LookupDidLoad {
                generation,
                origin,
                record,
                habitat,
            }
        }
        Err(error) => Action::LookupDidError {
            generation,
            error: error.to_string(),
        },
    }
}
