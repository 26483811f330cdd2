//! Reducer - pure function: (state, action) -> DispatchResult

use tui_dispatch::DispatchResult;

use crate::action::Action;
use crate::effect::Effect;
use crate::lookup::parse_identifier;
use crate::state::{AppState, CreatureView, DisplayState, LookupOrigin};

pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        Action::Init => {
            let mut effects = vec![Effect::LoadNameIndex];
            if !state.input.trim().is_empty() {
                effects.extend(start_lookup(state));
            }
            DispatchResult::changed_with_many(effects)
        }

        Action::NameIndexDidLoad(index) => {
            state.name_index = index;
            DispatchResult::changed()
        }

        // ===== Search =====
        Action::SearchInput(ch) => {
            state.input.push(ch);
            refresh_suggestions(state);
            DispatchResult::changed()
        }

        Action::SearchBackspace => {
            if state.input.pop().is_none() {
                return DispatchResult::unchanged();
            }
            refresh_suggestions(state);
            DispatchResult::changed()
        }

        Action::SearchClear => {
            if state.input.is_empty() && !state.suggestions_visible() {
                return DispatchResult::unchanged();
            }
            state.input.clear();
            state.hide_suggestions();
            DispatchResult::changed()
        }

        Action::SearchSelect(index) => {
            if index >= state.suggestions.len() || state.suggestion_selected == Some(index) {
                return DispatchResult::unchanged();
            }
            state.suggestion_selected = Some(index);
            DispatchResult::changed()
        }

        Action::SearchAccept => {
            let Some(name) = state
                .highlighted_suggestion()
                .or_else(|| state.suggestions.first().map(String::as_str))
                .map(str::to_string)
            else {
                return DispatchResult::unchanged();
            };
            state.input = name;
            state.hide_suggestions();
            DispatchResult::changed()
        }

        Action::SearchDismiss => {
            if !state.suggestions_visible() {
                return DispatchResult::unchanged();
            }
            state.hide_suggestions();
            DispatchResult::changed()
        }

        Action::SearchSubmit => {
            if let Some(name) = state.highlighted_suggestion().map(str::to_string) {
                state.input = name;
                state.hide_suggestions();
            }
            match start_lookup(state) {
                Some(effect) => DispatchResult::changed_with(effect),
                None => DispatchResult::changed(),
            }
        }

        // ===== Lookup =====
        Action::LookupRandom => {
            let generation = begin_lookup(state);
            DispatchResult::changed_with(Effect::LookupRandom { generation })
        }

        Action::LookupDidLoad {
            generation,
            origin,
            record,
            habitat,
        } => {
            if generation != state.lookup_generation {
                return DispatchResult::unchanged();
            }
            state.loading = false;
            if origin == LookupOrigin::Random {
                state.input = record.name.clone();
            }
            state.hide_suggestions();
            state.display = DisplayState::Creature(CreatureView { record, habitat });
            DispatchResult::changed()
        }

        Action::LookupDidError { generation, error } => {
            if generation != state.lookup_generation {
                return DispatchResult::unchanged();
            }
            state.loading = false;
            state.show_error(error);
            DispatchResult::changed()
        }

        // ===== Global =====
        Action::Tick => {
            if state.loading {
                state.tick_count = state.tick_count.wrapping_add(1);
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::Quit => DispatchResult::unchanged(),
    }
}

fn refresh_suggestions(state: &mut AppState) {
    state.suggestions = state.name_index.suggest(&state.input);
    state.suggestion_selected = None;
}

/// Validate the input and declare the request. Blank input goes straight to
/// the error panel without touching the network.
fn start_lookup(state: &mut AppState) -> Option<Effect> {
    match parse_identifier(&state.input) {
        Ok(identifier) => {
            let generation = begin_lookup(state);
            Some(Effect::Lookup {
                generation,
                identifier,
            })
        }
        Err(error) => {
            // Anything still in flight must not replace this message.
            state.lookup_generation += 1;
            state.loading = false;
            state.show_error(error.to_string());
            None
        }
    }
}

fn begin_lookup(state: &mut AppState) -> u64 {
    state.lookup_generation += 1;
    state.loading = true;
    state.tick_count = 0;
    state.display = DisplayState::Hidden;
    state.lookup_generation
}
