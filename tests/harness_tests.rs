//! End-to-end flows: keys -> reducer -> effects -> tasks against a mock API
//! -> completion actions -> rendered screen.

use pokesearch::{
    action::Action,
    api::PokeApi,
    card::{stat_fill_percent, CreatureCard, StatBar, TypeBadge},
    components::{Component, LookupScreen, LookupScreenProps},
    effect::Effect,
    lookup::Identifier,
    name_index::NameIndex,
    reducer::reducer,
    state::{AppState, DisplayState},
    tasks,
};
use serde_json::json;
use tui_dispatch::testing::*;
use tui_dispatch::NumericComponentId;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mock_pikachu(server: &MockServer, species_status: u16) {
    let species_url = format!("{}/pokemon-species/25", server.uri());
    Mock::given(method("GET"))
        .and(path("/pokemon/25"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 25,
            "name": "pikachu",
            "height": 4,
            "weight": 60,
            "sprites": { "front_default": null },
            "stats": [
                { "base_stat": 35, "stat": { "name": "hp" } },
                { "base_stat": 90, "stat": { "name": "speed" } }
            ],
            "types": [ { "type": { "name": "electric" } } ],
            "species": { "url": species_url }
        })))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/pokemon-species/25"))
        .respond_with(
            ResponseTemplate::new(species_status)
                .set_body_json(json!({ "habitat": { "name": "forest" } })),
        )
        .mount(server)
        .await;
}

/// Run the task a lookup effect asks for, the way the binary's effect
/// handler does.
async fn run_effect(api: &PokeApi, effect: Effect) -> Action {
    match effect {
        Effect::LoadNameIndex => tasks::load_name_index(api).await,
        Effect::Lookup {
            generation,
            identifier,
        } => tasks::lookup(api, generation, identifier).await,
        Effect::LookupRandom { generation } => tasks::lookup_random(api, generation).await,
    }
}

#[tokio::test]
async fn test_lookup_by_id_shows_creature() {
    let server = MockServer::start().await;
    mock_pikachu(&server, 200).await;
    let api = PokeApi::new(server.uri());

    let mut harness = EffectStoreTestHarness::new(AppState::with_query("25"), reducer);
    harness.dispatch_collect(Action::SearchSubmit);
    harness.assert_state(|s| s.loading);

    let effects = harness.drain_effects();
    effects.effects_count(1);
    effects.effects_first_matches(|e| {
        matches!(e, Effect::Lookup { identifier: Identifier::Id(id), .. } if id == "25")
    });

    for effect in effects {
        harness.complete_action(run_effect(&api, effect).await);
    }
    let (changed, total) = harness.process_emitted();
    assert_eq!((changed, total), (1, 1));

    harness.assert_state(|s| !s.loading);
    harness.assert_state(|s| s.display.error().is_none());
    harness.assert_state(|s| {
        s.display.creature().map(CreatureCard::from)
            == Some(CreatureCard {
                title: "Pikachu #25".into(),
                sprite: String::new(),
                height: "0.4 m".into(),
                weight: "6 kg".into(),
                speed: "90".into(),
                badges: vec![TypeBadge {
                    label: "electric".into(),
                    class: "type-electric".into(),
                }],
                stats: vec![
                    StatBar {
                        key: "hp".into(),
                        label: "HP".into(),
                        value: 35,
                        fill_percent: stat_fill_percent(35),
                    },
                    StatBar {
                        key: "speed".into(),
                        label: "Speed".into(),
                        value: 90,
                        fill_percent: stat_fill_percent(90),
                    },
                ],
                habitat: "Forest".into(),
            })
    });
}

#[tokio::test]
async fn test_species_failure_still_renders_creature() {
    let server = MockServer::start().await;
    mock_pikachu(&server, 500).await;
    let api = PokeApi::new(server.uri());

    let mut harness = EffectStoreTestHarness::new(AppState::with_query("25"), reducer);
    harness.dispatch_collect(Action::SearchSubmit);
    for effect in harness.drain_effects() {
        harness.complete_action(run_effect(&api, effect).await);
    }
    harness.process_emitted();

    harness.assert_state(|s| {
        s.display
            .creature()
            .is_some_and(|view| view.habitat == "Unknown" && view.record.name == "pikachu")
    });

    let mut screen = LookupScreen::new();
    let output = harness.render_plain(70, 24, |frame, area, state| {
        screen.render(
            frame,
            area,
            LookupScreenProps {
                state,
                is_focused: true,
            },
        );
    });
    assert!(output.contains("Pikachu #25"), "{output}");
    assert!(output.contains("Unknown"), "{output}");
    assert!(output.contains("electric"), "{output}");
}

#[tokio::test]
async fn test_empty_input_never_hits_network() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);
    harness.dispatch_collect(Action::SearchSubmit);

    harness.drain_effects().effects_empty();
    harness.assert_state(|s| s.display.error() == Some("Please enter a Pokemon name or ID"));
    harness.assert_state(|s| s.display.creature().is_none());
}

#[tokio::test]
async fn test_not_found_shows_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pokemon/missingno"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    let api = PokeApi::new(server.uri());

    let mut harness = EffectStoreTestHarness::new(AppState::with_query("MissingNo"), reducer);
    harness.dispatch_collect(Action::SearchSubmit);
    for effect in harness.drain_effects() {
        harness.complete_action(run_effect(&api, effect).await);
    }
    harness.process_emitted();

    harness.assert_state(|s| s.display.error() == Some("Pokemon not found"));
    harness.assert_state(|s| s.display.creature().is_none());
}

#[tokio::test]
async fn test_init_loads_index_for_autocomplete() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pokemon"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [ { "name": "pichu" }, { "name": "pikachu" }, { "name": "raichu" } ]
        })))
        .mount(&server)
        .await;
    let api = PokeApi::new(server.uri());

    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);
    harness.dispatch_collect(Action::Init);
    let effects = harness.drain_effects();
    effects.effects_count(1);
    for effect in effects {
        harness.complete_action(run_effect(&api, effect).await);
    }
    harness.process_emitted();
    harness.assert_state(|s| s.name_index.len() == 3);

    let mut screen = LookupScreen::new();
    for key_name in ["p", "i"] {
        let actions = harness.send_keys::<NumericComponentId, _, _>(key_name, |state, event| {
            screen
                .handle_event(
                    &event.kind,
                    LookupScreenProps {
                        state,
                        is_focused: true,
                    },
                )
                .into_iter()
                .collect::<Vec<_>>()
        });
        for action in actions {
            harness.dispatch_collect(action);
        }
    }
    harness.assert_state(|s| s.suggestions == vec!["pichu", "pikachu"]);

    let output = harness.render_plain(60, 16, |frame, area, state| {
        screen.render(
            frame,
            area,
            LookupScreenProps {
                state,
                is_focused: true,
            },
        );
    });
    assert!(output.contains("pikachu"), "{output}");
}

#[test]
fn test_superseded_lookup_is_ignored() {
    let mut harness = EffectStoreTestHarness::new(AppState::with_query("pikachu"), reducer);
    harness.dispatch_collect(Action::SearchSubmit);
    harness.dispatch_collect(Action::LookupRandom);
    let effects = harness.drain_effects();
    effects.effects_count(2);

    harness.complete_action(Action::LookupDidError {
        generation: 1,
        error: "Pokemon not found".into(),
    });
    let (changed, total) = harness.process_emitted();
    assert_eq!((changed, total), (0, 1));
    harness.assert_state(|s| s.loading && s.display.is_hidden());
}

#[test]
fn test_error_and_creature_exclusive() {
    let state = AppState {
        name_index: NameIndex::default(),
        display: DisplayState::Error("Pokemon not found".into()),
        ..Default::default()
    };
    let mut harness = EffectStoreTestHarness::new(state, reducer);
    harness.dispatch_collect(Action::LookupRandom);
    harness.assert_state(|s| s.display.error().is_none() && s.display.creature().is_none());
}
