use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use super::{Component, BG_PANEL, ERROR_RED};
use crate::action::Action;

pub const ERROR_ICON: &str = "\u{26a0}";

pub struct ErrorPanelProps<'a> {
    pub message: &'a str,
}

#[derive(Default)]
pub struct ErrorPanel;

impl Component<Action> for ErrorPanel {
    type Props<'a> = ErrorPanelProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" Error ")
            .style(Style::default().bg(BG_PANEL))
            .border_style(Style::default().fg(ERROR_RED));
        let line = Line::styled(
            format!("{ERROR_ICON} {}", props.message),
            Style::default().fg(ERROR_RED).add_modifier(Modifier::BOLD),
        );
        frame.render_widget(
            Paragraph::new(line)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(block),
            area,
        );
    }
}
