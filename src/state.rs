//! Application state - single source of truth

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::name_index::NameIndex;

/// Spinner frame interval while a lookup is in flight.
pub const SPINNER_TICK_MS: u64 = 90;

/// A creature as returned by `GET /pokemon/{id-or-name}`
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CreatureRecord {
    pub id: u32,
    pub name: String,
    /// Decimeters
    pub height: u32,
    /// Hectograms
    pub weight: u32,
    pub stats: Vec<CreatureStat>,
    pub types: Vec<String>,
    pub sprite: Option<String>,
    pub species_url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CreatureStat {
    pub name: String,
    pub base: u32,
}

impl CreatureRecord {
    pub fn base_stat(&self, name: &str) -> Option<u32> {
        self.stats
            .iter()
            .find(|stat| stat.name == name)
            .map(|stat| stat.base)
    }
}

/// The species fields this client reads. Only lives until the lookup task
/// has turned it into a habitat string.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SpeciesRecord {
    pub habitat: Option<String>,
}

/// Which user action started a lookup
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum LookupOrigin {
    #[default]
    Search,
    Random,
}

/// A resolved creature plus its enrichment
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CreatureView {
    pub record: CreatureRecord,
    pub habitat: String,
}

/// What the main area shows. The error and creature panels never coexist.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub enum DisplayState {
    #[default]
    Hidden,
    Error(String),
    Creature(CreatureView),
}

impl DisplayState {
    pub fn error(&self) -> Option<&str> {
        match self {
            DisplayState::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn creature(&self) -> Option<&CreatureView> {
        match self {
            DisplayState::Creature(view) => Some(view),
            _ => None,
        }
    }

    pub fn is_hidden(&self) -> bool {
        matches!(self, DisplayState::Hidden)
    }
}

/// Application state - everything the UI needs to render
#[derive(Clone, Debug, Default, tui_dispatch::DebugState, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppState {
    /// Text in the name/ID input
    #[debug(section = "Search", label = "Input")]
    pub input: String,

    /// Dropdown contents; empty means the dropdown is hidden
    #[debug(section = "Search", label = "Suggestions", debug_fmt)]
    pub suggestions: Vec<String>,

    /// Highlighted dropdown row
    #[debug(section = "Search", label = "Highlighted", debug_fmt)]
    pub suggestion_selected: Option<usize>,

    /// Known names for autocomplete, loaded once at startup
    #[debug(section = "Search", label = "Index")]
    pub name_index: NameIndex,

    #[debug(section = "Lookup", label = "Display", debug_fmt)]
    pub display: DisplayState,

    #[debug(section = "Lookup", label = "Loading")]
    pub loading: bool,

    /// Bumped on every lookup; results tagged with an older value are stale
    #[debug(section = "Lookup", label = "Generation")]
    pub lookup_generation: u64,

    #[debug(skip)]
    pub tick_count: u32,
}

impl AppState {
    /// State with the input prefilled; `Init` looks it up.
    pub fn with_query(query: impl Into<String>) -> Self {
        Self {
            input: query.into(),
            ..Default::default()
        }
    }

    pub fn suggestions_visible(&self) -> bool {
        !self.suggestions.is_empty()
    }

    pub fn highlighted_suggestion(&self) -> Option<&str> {
        self.suggestion_selected
            .and_then(|index| self.suggestions.get(index))
            .map(String::as_str)
    }

    pub fn hide_suggestions(&mut self) {
        self.suggestions.clear();
        self.suggestion_selected = None;
    }

    pub fn show_error(&mut self, message: impl Into<String>) {
        self.display = DisplayState::Error(message.into());
    }
}
