use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    StatusBar, StatusBarHint, StatusBarProps, StatusBarSection, StatusBarStyle,
};

use super::{
    Component, CreatureCardView, CreatureCardViewProps, ErrorPanel, ErrorPanelProps, SearchBar,
    SearchBarProps, SuggestionDropdown, SuggestionDropdownProps, ACCENT_GOLD, ACCENT_TEAL,
    TEXT_DIM,
};
use crate::action::Action;
use crate::card::CreatureCard;
use crate::state::{AppState, DisplayState};

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];
const IDLE_HINT: &str = "Type a name or number and press Enter";

pub struct LookupScreenProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

/// Whole-screen layout: search bar, result body, hint bar and the
/// autocomplete overlay on top.
#[derive(Default)]
pub struct LookupScreen {
    search: SearchBar,
    dropdown: SuggestionDropdown,
    card: CreatureCardView,
    error: ErrorPanel,
}

impl LookupScreen {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Component<Action> for LookupScreen {
    type Props<'a> = LookupScreenProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return Vec::new();
        }
        if let EventKind::Key(key) = event {
            let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
            match key.code {
                KeyCode::Char('c') if ctrl => return vec![Action::Quit],
                KeyCode::Char('r') if ctrl => return vec![Action::LookupRandom],
                KeyCode::F(5) => return vec![Action::LookupRandom],
                KeyCode::Esc if !props.state.suggestions_visible() => return vec![Action::Quit],
                _ => {}
            }
        }

        let state = props.state;
        if let EventKind::Key(key) = event {
            if matches!(key.code, KeyCode::Up | KeyCode::Down) {
                return self
                    .dropdown
                    .handle_event(
                        event,
                        SuggestionDropdownProps {
                            query: &state.input,
                            suggestions: &state.suggestions,
                            highlighted: state.suggestion_selected,
                            is_focused: state.suggestions_visible(),
                        },
                    )
                    .into_iter()
                    .collect();
            }
        }

        self.search
            .handle_event(
                event,
                SearchBarProps {
                    input: &state.input,
                    suggestions_visible: state.suggestions_visible(),
                    is_focused: true,
                },
            )
            .into_iter()
            .collect::<Vec<_>>()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let state = props.state;
        let chunks = Layout::vertical([
            Constraint::Length(1), // Header
            Constraint::Length(3), // Search
            Constraint::Min(3),    // Result
            Constraint::Length(1), // Help bar
        ])
        .split(area);

        frame.render_widget(Paragraph::new(header_line(state)), chunks[0]);

        self.search.render(
            frame,
            chunks[1],
            SearchBarProps {
                input: &state.input,
                suggestions_visible: state.suggestions_visible(),
                is_focused: props.is_focused,
            },
        );

        match &state.display {
            DisplayState::Creature(view) => {
                let card = CreatureCard::from(view);
                self.card
                    .render(frame, chunks[2], CreatureCardViewProps { card: &card });
            }
            DisplayState::Error(message) => {
                let height = chunks[2].height.min(5);
                let area = Rect { height, ..chunks[2] };
                self.error
                    .render(frame, area, ErrorPanelProps { message });
            }
            DisplayState::Hidden => {
                frame.render_widget(body_placeholder(state), chunks[2]);
            }
        }

        let mut status_bar = StatusBar::new();
        <StatusBar as Component<Action>>::render(
            &mut status_bar,
            frame,
            chunks[3],
            StatusBarProps {
                left: StatusBarSection::empty(),
                center: StatusBarSection::hints(&[
                    StatusBarHint::new("Enter", "search"),
                    StatusBarHint::new("Tab", "complete"),
                    StatusBarHint::new("^R", "random"),
                    StatusBarHint::new("Esc", "quit"),
                ]),
                right: StatusBarSection::empty(),
                style: StatusBarStyle::default(),
                is_focused: false,
            },
        );

        if state.suggestions_visible() {
            let dropdown_area =
                SuggestionDropdown::area(chunks[1], area, state.suggestions.len());
            self.dropdown.render(
                frame,
                dropdown_area,
                SuggestionDropdownProps {
                    query: &state.input,
                    suggestions: &state.suggestions,
                    highlighted: state.suggestion_selected,
                    is_focused: props.is_focused,
                },
            );
        }
    }
}

fn header_line(state: &AppState) -> Line<'static> {
    let index = if state.name_index.is_empty() {
        "autocomplete unavailable".to_string()
    } else {
        state.name_index.to_string()
    };
    Line::from(vec![
        Span::styled(
            "POKESEARCH",
            Style::default()
                .fg(ACCENT_GOLD)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  {index}"), Style::default().fg(TEXT_DIM)),
    ])
}

fn body_placeholder(state: &AppState) -> Paragraph<'static> {
    let line = if state.loading {
        let frame = SPINNER[state.tick_count as usize % SPINNER.len()];
        Line::styled(format!("{frame} Loading..."), Style::default().fg(ACCENT_TEAL))
    } else {
        Line::styled(IDLE_HINT, Style::default().fg(TEXT_DIM))
    };
    Paragraph::new(line).alignment(Alignment::Center)
}
