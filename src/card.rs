//! Creature record -> render instructions
//!
//! `CreatureCard` is the typed description of the creature panel. Building it
//! is pure; drawing it is the job of `components::CreatureCardView`.

use crate::state::{CreatureRecord, CreatureView};

/// Base value that fills a stat bar exactly.
pub const STAT_BAR_MAX: f64 = 150.0;

const STAT_LABELS: [(&str, &str); 6] = [
    ("hp", "HP"),
    ("attack", "Attack"),
    ("defense", "Defense"),
    ("special-attack", "Sp. Atk"),
    ("special-defense", "Sp. Def"),
    ("speed", "Speed"),
];

#[derive(Clone, Debug, PartialEq)]
pub struct CreatureCard {
    pub title: String,
    /// Empty when the record has no sprite
    pub sprite: String,
    pub height: String,
    pub weight: String,
    pub speed: String,
    pub badges: Vec<TypeBadge>,
    pub stats: Vec<StatBar>,
    pub habitat: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TypeBadge {
    pub label: String,
    /// Style key, `type-{name}`
    pub class: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StatBar {
    pub key: String,
    pub label: String,
    pub value: u32,
    /// `value / 150` as a percentage. Not clamped: 200 gives ~133%.
    pub fill_percent: f64,
}

impl StatBar {
    pub fn overflows(&self) -> bool {
        self.fill_percent > 100.0
    }
}

impl CreatureCard {
    pub fn build(record: &CreatureRecord, habitat: &str) -> Self {
        Self {
            title: format!("{} #{}", capitalize(&record.name), record.id),
            sprite: record.sprite.clone().unwrap_or_default(),
            height: format!("{} m", tenths(record.height)),
            weight: format!("{} kg", tenths(record.weight)),
            speed: record
                .base_stat("speed")
                .map(|value| value.to_string())
                .unwrap_or_else(|| "N/A".to_string()),
            badges: record
                .types
                .iter()
                .map(|name| TypeBadge {
                    label: name.clone(),
                    class: format!("type-{name}"),
                })
                .collect(),
            stats: record
                .stats
                .iter()
                .map(|stat| StatBar {
                    key: stat.name.clone(),
                    label: stat_label(&stat.name).to_string(),
                    value: stat.base,
                    fill_percent: stat_fill_percent(stat.base),
                })
                .collect(),
            habitat: capitalize(habitat),
        }
    }
}

impl From<&CreatureView> for CreatureCard {
    fn from(view: &CreatureView) -> Self {
        CreatureCard::build(&view.record, &view.habitat)
    }
}

pub fn stat_fill_percent(base: u32) -> f64 {
    f64::from(base) / STAT_BAR_MAX * 100.0
}

/// Display label for a stat key; unknown keys show as-is.
pub fn stat_label(key: &str) -> &str {
    STAT_LABELS
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, label)| *label)
        .unwrap_or(key)
}

/// First character uppercased, the rest untouched.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Integer tenths printed the way a plain number division would print them:
/// 7 -> "0.7", 60 -> "6", 1234 -> "123.4".
fn tenths(value: u32) -> String {
    let (whole, fraction) = (value / 10, value % 10);
    if fraction == 0 {
        whole.to_string()
    } else {
        format!("{whole}.{fraction}")
    }
}
