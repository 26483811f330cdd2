//! Actions: user intents and async results

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::name_index::NameIndex;
use crate::state::{CreatureRecord, LookupOrigin};

#[derive(tui_dispatch::Action, Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[action(infer_categories)]
pub enum Action {
    /// Startup: load the name index, look up a prefilled query
    Init,

    /// Result: name index fetched (empty if the fetch failed)
    NameIndexDidLoad(NameIndex),

    // ===== Search category =====
    SearchInput(char),
    SearchBackspace,
    SearchClear,
    /// Look up the input, or the highlighted suggestion if there is one
    SearchSubmit,
    /// Highlight a dropdown row
    SearchSelect(usize),
    /// Fill the input with the highlighted (or first) suggestion
    SearchAccept,
    /// Hide the dropdown
    SearchDismiss,

    // ===== Lookup category =====
    LookupRandom,

    /// Result: creature resolved and enriched
    LookupDidLoad {
        generation: u64,
        origin: LookupOrigin,
        record: CreatureRecord,
        habitat: String,
    },

    /// Result: lookup failed; `error` is the user-facing message
    LookupDidError { generation: u64, error: String },

    // ===== Uncategorized (global) =====
    Tick,
    Quit,
}
