pub mod creature_card;
pub mod error_panel;
pub mod lookup_screen;
pub mod search_bar;

// Re-export core Component trait
pub use tui_dispatch::Component;

pub use creature_card::{CreatureCardView, CreatureCardViewProps};
pub use error_panel::{ErrorPanel, ErrorPanelProps};
pub use lookup_screen::{LookupScreen, LookupScreenProps};
pub use search_bar::{SearchBar, SearchBarProps, SuggestionDropdown, SuggestionDropdownProps};

use ratatui::style::Color;

pub(crate) const TEXT_MAIN: Color = Color::Rgb(232, 242, 244);
pub(crate) const TEXT_DIM: Color = Color::Rgb(176, 195, 207);
pub(crate) const ACCENT_TEAL: Color = Color::Rgb(72, 204, 184);
pub(crate) const ACCENT_GOLD: Color = Color::Rgb(228, 176, 88);
pub(crate) const ERROR_RED: Color = Color::Rgb(230, 90, 90);
pub(crate) const BG_PANEL: Color = Color::Rgb(20, 32, 46);
