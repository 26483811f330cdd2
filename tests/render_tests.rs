//! Full-screen renders with RenderHarness

use pokesearch::{
    components::{Component, LookupScreen, LookupScreenProps},
    state::{AppState, CreatureRecord, CreatureStat, CreatureView, DisplayState},
};
use tui_dispatch::testing::*;

fn render(state: &AppState) -> String {
    let mut render = RenderHarness::new(72, 26);
    let mut screen = LookupScreen::new();
    render.render_to_string_plain(|frame| {
        screen.render(
            frame,
            frame.area(),
            LookupScreenProps {
                state,
                is_focused: true,
            },
        );
    })
}

fn snorlax() -> AppState {
    let stats = [
        ("hp", 160),
        ("attack", 110),
        ("defense", 65),
        ("special-attack", 65),
        ("special-defense", 110),
        ("speed", 30),
    ]
    .into_iter()
    .map(|(name, base)| CreatureStat {
        name: name.into(),
        base,
    })
    .collect();
    AppState {
        display: DisplayState::Creature(CreatureView {
            record: CreatureRecord {
                id: 143,
                name: "snorlax".into(),
                height: 21,
                weight: 4600,
                stats,
                types: vec!["normal".into()],
                sprite: Some("https://img.example/143.png".into()),
                species_url: None,
            },
            habitat: "mountain".into(),
        }),
        ..AppState::with_query("snorlax")
    }
}

#[test]
fn test_render_idle() {
    let output = render(&AppState::default());
    assert!(output.contains("POKESEARCH"));
    assert!(output.contains("Type a name or number"));
    assert!(output.contains("random"));
}

#[test]
fn test_render_creature() {
    let output = render(&snorlax());
    assert!(output.contains("Snorlax #143"), "{output}");
    assert!(output.contains("2.1 m"), "{output}");
    assert!(output.contains("460 kg"), "{output}");
    assert!(output.contains("https://img.example/143.png"), "{output}");
    assert!(output.contains("Mountain"), "{output}");
    assert!(output.contains("Sp. Atk"), "{output}");
    // 160 / 150 overflows the scale
    assert!(output.contains("+ 107%"), "{output}");
    assert!(output.contains(" 20%"), "{output}");
}

#[test]
fn test_render_suggestions_overlay() {
    let state = AppState {
        suggestions: vec!["snorlax".into(), "snorunt".into()],
        suggestion_selected: Some(0),
        ..snorlax()
    };
    let output = render(&state);
    assert!(output.contains("snorunt"), "{output}");
}
