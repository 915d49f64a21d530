//! Home page: name, tagline and the two call-to-action buttons.

use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use techweeb_core::{palette, AnimationSpeed};
use techweeb_content::PROFILE;

use crate::fx;

/// Reveal delays relative to the page appearing, matching the staggered
/// entrance of the web version.
const NAME_DELAY_MS: u64 = 500;
const TAGLINE_DELAY_MS: u64 = 700;
const BUTTONS_DELAY_MS: u64 = 900;

pub fn render(frame: &mut Frame, area: Rect, elapsed_ms: u64, speed: AnimationSpeed) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),   // Top padding
        Constraint::Length(1), // Name
        Constraint::Length(1), // Spacing
        Constraint::Length(2), // Tagline
        Constraint::Length(2), // Spacing
        Constraint::Length(1), // Buttons
        Constraint::Fill(1),   // Bottom padding
    ])
    .split(area);

    // Letter-spaced name, revealed letter by letter.
    let spaced: String = PROFILE
        .name
        .chars()
        .flat_map(|c| [c, ' '])
        .collect();
    let name = fx::blur_in(&spaced, elapsed_ms, NAME_DELAY_MS, speed, true).centered();
    frame.render_widget(Paragraph::new(name), chunks[1]);

    let tagline = fx::blur_in(PROFILE.tagline, elapsed_ms, TAGLINE_DELAY_MS, speed, false);
    frame.render_widget(
        Paragraph::new(tagline).alignment(Alignment::Center),
        chunks[3],
    );

    if elapsed_ms >= BUTTONS_DELAY_MS {
        let buttons = Line::from(vec![
            Span::styled("[ 3 ", Style::new().fg(palette::MUTED)),
            "VIEW PROJECTS".bold().fg(palette::TEXT),
            Span::styled(" ]", Style::new().fg(palette::MUTED)),
            Span::raw("   "),
            Span::styled("[ 4 ", Style::new().fg(palette::MUTED)),
            "CONTACT ME".bold().fg(palette::TEXT),
            Span::styled(" ]", Style::new().fg(palette::MUTED)),
        ])
        .centered();
        frame.render_widget(Paragraph::new(buttons), chunks[5]);
    }
}
