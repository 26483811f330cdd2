//! Effects - side effects declared by the reducer

use crate::lookup::Identifier;

#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    /// Fetch the name list for autocomplete
    LoadNameIndex,
    /// Resolve a typed identifier, then its habitat
    Lookup {
        generation: u64,
        identifier: Identifier,
    },
    /// Draw a random id and resolve it
    LookupRandom { generation: u64 },
}
