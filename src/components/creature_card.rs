use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use super::{Component, ACCENT_GOLD, ACCENT_TEAL, BG_PANEL, TEXT_DIM, TEXT_MAIN};
use crate::action::Action;
use crate::card::{CreatureCard, StatBar, TypeBadge};

const LABEL_WIDTH: usize = 8;
const BAR_WIDTH: usize = 24;
const OVERFLOW_MARK: &str = "+";

/// Badge colors keyed by style class.
const TYPE_COLORS: [(&str, Color); 18] = [
    ("type-normal", Color::Rgb(168, 168, 120)),
    ("type-fire", Color::Rgb(240, 128, 48)),
    ("type-water", Color::Rgb(104, 144, 240)),
    ("type-electric", Color::Rgb(248, 208, 48)),
    ("type-grass", Color::Rgb(120, 200, 80)),
    ("type-ice", Color::Rgb(152, 216, 216)),
    ("type-fighting", Color::Rgb(192, 48, 40)),
    ("type-poison", Color::Rgb(160, 64, 160)),
    ("type-ground", Color::Rgb(224, 192, 104)),
    ("type-flying", Color::Rgb(168, 144, 240)),
    ("type-psychic", Color::Rgb(248, 88, 136)),
    ("type-bug", Color::Rgb(168, 184, 32)),
    ("type-rock", Color::Rgb(184, 160, 56)),
    ("type-ghost", Color::Rgb(112, 88, 152)),
    ("type-dragon", Color::Rgb(112, 56, 248)),
    ("type-dark", Color::Rgb(112, 88, 72)),
    ("type-steel", Color::Rgb(184, 184, 208)),
    ("type-fairy", Color::Rgb(238, 153, 172)),
];

pub struct CreatureCardViewProps<'a> {
    pub card: &'a CreatureCard,
}

/// Creature panel. Draws a prepared [`CreatureCard`]; no event handling.
#[derive(Default)]
pub struct CreatureCardView;

impl Component<Action> for CreatureCardView {
    type Props<'a> = CreatureCardViewProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let card = props.card;
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(format!(" {} ", card.title))
            .title_style(Style::default().fg(ACCENT_GOLD).add_modifier(Modifier::BOLD))
            .style(Style::default().bg(BG_PANEL).fg(TEXT_MAIN))
            .border_style(Style::default().fg(ACCENT_TEAL));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::vertical([
            Constraint::Length(6),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .split(inner);

        frame.render_widget(
            Paragraph::new(profile_lines(card)).wrap(Wrap { trim: true }),
            chunks[0],
        );

        let stats: Vec<Line<'static>> = card.stats.iter().map(stat_line).collect();
        frame.render_widget(Paragraph::new(stats), chunks[2]);
    }
}

fn profile_lines(card: &CreatureCard) -> Vec<Line<'static>> {
    let sprite = if card.sprite.is_empty() {
        Span::styled("[no sprite]", Style::default().fg(TEXT_DIM))
    } else {
        Span::styled(card.sprite.clone(), Style::default().fg(TEXT_MAIN))
    };

    let mut badges = vec![field_label("Types")];
    for (index, badge) in card.badges.iter().enumerate() {
        if index > 0 {
            badges.push(Span::raw(" "));
        }
        badges.push(badge_span(badge));
    }

    vec![
        Line::from(vec![field_label("Sprite"), sprite]),
        badges.into(),
        Line::from(vec![field_label("Height"), field_value(&card.height)]),
        Line::from(vec![field_label("Weight"), field_value(&card.weight)]),
        Line::from(vec![field_label("Speed"), field_value(&card.speed)]),
        Line::from(vec![field_label("Habitat"), field_value(&card.habitat)]),
    ]
}

fn field_label(label: &str) -> Span<'static> {
    Span::styled(
        format!("{label:<width$}", width = LABEL_WIDTH),
        Style::default().fg(TEXT_DIM),
    )
}

fn field_value(value: &str) -> Span<'static> {
    Span::styled(value.to_string(), Style::default().fg(TEXT_MAIN))
}

fn badge_span(badge: &TypeBadge) -> Span<'static> {
    Span::styled(
        format!(" {} ", badge.label),
        Style::default()
            .fg(Color::Black)
            .bg(badge_color(&badge.class))
            .add_modifier(Modifier::BOLD),
    )
}

pub fn badge_color(class: &str) -> Color {
    TYPE_COLORS
        .iter()
        .find(|(name, _)| *name == class)
        .map(|(_, color)| *color)
        .unwrap_or(TEXT_DIM)
}

/// `label value [bar] pct%`. The bar is capped at its width; a value past the
/// 150 scale gets an overflow mark, the percentage stays exact.
fn stat_line(stat: &StatBar) -> Line<'static> {
    let filled = ((stat.fill_percent / 100.0 * BAR_WIDTH as f64).round() as usize).min(BAR_WIDTH);
    let empty = BAR_WIDTH - filled;
    let mark = if stat.overflows() { OVERFLOW_MARK } else { " " };
    Line::from(vec![
        Span::styled(
            format!("{:<width$}", stat.label, width = LABEL_WIDTH),
            Style::default().fg(TEXT_DIM),
        ),
        Span::styled(format!("{:>4} ", stat.value), Style::default().fg(TEXT_MAIN)),
        Span::styled(
            "█".repeat(filled),
            Style::default().fg(ACCENT_TEAL).add_modifier(Modifier::BOLD),
        ),
        Span::styled("░".repeat(empty), Style::default().fg(TEXT_DIM)),
        Span::styled(mark, Style::default().fg(ACCENT_GOLD)),
        Span::styled(
            format!(" {:.0}%", stat.fill_percent),
            Style::default().fg(TEXT_DIM),
        ),
    ])
}
