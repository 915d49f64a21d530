//! Page rendering for the four portfolio pages.

pub mod about;
pub mod contact;
pub mod home;
pub mod work;

use ratatui::style::Style;
use ratatui::widgets::{Block, BorderType, Padding};
use techweeb_core::palette;

/// Rounded, muted-border block standing in for the site's glass cards.
pub fn glass_card(title: &'static str) -> Block<'static> {
    Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::new().fg(palette::MUTED))
        .title(title)
        .title_style(Style::new().fg(palette::TEXT))
        .padding(Padding::new(2, 2, 1, 1))
}
