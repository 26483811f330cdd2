use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    highlight_substring, BaseStyle, Padding, ScrollbarStyle, SelectList, SelectListBehavior,
    SelectListProps, SelectListStyle, SelectionStyle,
};

use super::{Component, ACCENT_GOLD, ACCENT_TEAL, BG_PANEL, TEXT_DIM, TEXT_MAIN};
use crate::action::Action;

const PLACEHOLDER: &str = "Name or ID, e.g. pikachu or 25";

/// Name/ID input line. Owns the text-editing keys.
#[derive(Default)]
pub struct SearchBar;

pub struct SearchBarProps<'a> {
    pub input: &'a str,
    pub suggestions_visible: bool,
    pub is_focused: bool,
}

impl Component<Action> for SearchBar {
    type Props<'a> = SearchBarProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return None;
        }
        let EventKind::Key(key) = event else {
            return None;
        };

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('u') => Some(Action::SearchClear),
                _ => None,
            };
        }

        match key.code {
            KeyCode::Enter => Some(Action::SearchSubmit),
            KeyCode::Backspace => Some(Action::SearchBackspace),
            KeyCode::Tab => Some(Action::SearchAccept),
            KeyCode::Esc if props.suggestions_visible => Some(Action::SearchDismiss),
            KeyCode::Char(ch) => Some(Action::SearchInput(ch)),
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let line = if props.input.is_empty() {
            Line::from(vec![
                Span::styled("_", Style::default().fg(ACCENT_TEAL)),
                Span::styled(PLACEHOLDER, Style::default().fg(TEXT_DIM)),
            ])
        } else {
            Line::from(vec![
                Span::styled(props.input.to_string(), Style::default().fg(TEXT_MAIN)),
                Span::styled("_", Style::default().fg(ACCENT_TEAL)),
            ])
        };
        let border = if props.is_focused { ACCENT_TEAL } else { TEXT_DIM };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Search ")
            .border_style(Style::default().fg(border));
        frame.render_widget(Paragraph::new(line).block(block), area);
    }
}

/// Autocomplete dropdown drawn over whatever sits under the input. Owns the
/// Up/Down keys while it is open.
#[derive(Default)]
pub struct SuggestionDropdown {
    list: SelectList,
}

pub struct SuggestionDropdownProps<'a> {
    pub query: &'a str,
    pub suggestions: &'a [String],
    /// `None` until the user moves into the list
    pub highlighted: Option<usize>,
    pub is_focused: bool,
}

impl SuggestionDropdown {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows plus borders, clipped to what fits below `anchor`.
    pub fn area(anchor: Rect, bounds: Rect, count: usize) -> Rect {
        let wanted = count as u16 + 2;
        let top = anchor.y + anchor.height;
        let available = (bounds.y + bounds.height).saturating_sub(top);
        Rect {
            x: anchor.x,
            y: top,
            width: anchor.width.min(40),
            height: wanted.min(available),
        }
    }

    fn items(suggestions: &[String], query: &str) -> Vec<Line<'static>> {
        let base = Style::default().fg(TEXT_MAIN);
        let highlight = Style::default()
            .fg(ACCENT_GOLD)
            .add_modifier(Modifier::BOLD);
        let query = query.trim();
        suggestions
            .iter()
            .map(|name| highlight_substring(name, query, base, highlight))
            .collect()
    }

    /// No row is marked until something is highlighted.
    fn list_style(highlighted: Option<usize>) -> SelectListStyle {
        let selection = match highlighted {
            Some(_) => SelectionStyle {
                style: Some(
                    Style::default()
                        .fg(ACCENT_TEAL)
                        .add_modifier(Modifier::BOLD),
                ),
                marker: Some("> "),
                disabled: false,
            },
            None => SelectionStyle {
                style: None,
                marker: None,
                disabled: true,
            },
        };
        SelectListStyle {
            base: BaseStyle {
                border: None,
                padding: Padding::default(),
                bg: Some(BG_PANEL),
                fg: Some(TEXT_MAIN),
            },
            selection,
            scrollbar: ScrollbarStyle::default(),
        }
    }
}

impl Component<Action> for SuggestionDropdown {
    type Props<'a> = SuggestionDropdownProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        let count = props.suggestions.len();
        if !props.is_focused || count == 0 {
            return Vec::new();
        }
        let EventKind::Key(key) = event else {
            return Vec::new();
        };
        if !matches!(key.code, KeyCode::Up | KeyCode::Down) {
            return Vec::new();
        }

        // Entering the list: Down lands on the first row, Up on the last
        let Some(selected) = props.highlighted else {
            let index = if key.code == KeyCode::Up { count - 1 } else { 0 };
            return vec![Action::SearchSelect(index)];
        };

        let items = Self::items(props.suggestions, props.query);
        let list_props = SelectListProps {
            items: &items,
            count,
            selected,
            is_focused: true,
            style: Self::list_style(props.highlighted),
            behavior: SelectListBehavior {
                show_scrollbar: false,
                wrap_navigation: false,
            },
            on_select: Action::SearchSelect,
            render_item: &|item| item.clone(),
        };
        self.list
            .handle_event(event, list_props)
            .into_iter()
            .collect()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        if props.suggestions.is_empty() || area.height < 3 {
            return;
        }
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(TEXT_DIM))
            .style(Style::default().bg(BG_PANEL));
        let inner = block.inner(area);
        frame.render_widget(Clear, area);
        frame.render_widget(block, area);

        let items = Self::items(props.suggestions, props.query);
        let list_props = SelectListProps {
            items: &items,
            count: items.len(),
            selected: props.highlighted.unwrap_or(0),
            is_focused: props.is_focused,
            style: Self::list_style(props.highlighted),
            behavior: SelectListBehavior {
                show_scrollbar: false,
                wrap_navigation: false,
            },
            on_select: Action::SearchSelect,
            render_item: &|item| item.clone(),
        };
        self.list.render(frame, inner, list_props);
    }
}
