//! Intro overlay: greeting sequence over a rotating particle spiral.

use rand::Rng;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use techweeb_core::{mix, palette};
use techweeb_field::{render, GreetingSequencer, OrbitField, SequencerEvent};

/// Particle count of the intro spiral.
const ORBIT_COUNT: usize = 550;

/// Fade-in time of each greeting, the leading slice of its dwell.
const FADE_MS: f32 = 300.0;

/// Full-screen intro shown once at startup. Owns the orbit field and the
/// greeting sequencer; the host drops it when the sequence reports
/// completion.
pub struct Intro {
    orbit: OrbitField,
    sequencer: GreetingSequencer,
    elapsed_ms: u64,
}

impl Intro {
    /// `screen_extent_px` is the larger screen dimension in pixel space,
    /// used to stretch the spiral past the edges.
    pub fn new(screen_extent_px: f32, rng: &mut impl Rng) -> Self {
        Self {
            orbit: OrbitField::new(ORBIT_COUNT, screen_extent_px, rng),
            sequencer: GreetingSequencer::new(techweeb_content::GREETINGS),
            elapsed_ms: 0,
        }
    }

    /// Advance one frame. Returns true when the greeting sequence has
    /// signalled completion and the intro should be torn down.
    pub fn advance(&mut self, delta_ms: u64) -> bool {
        self.elapsed_ms = self.elapsed_ms.saturating_add(delta_ms);
        self.orbit.advance();
        matches!(
            self.sequencer.advance(delta_ms),
            Some(SequencerEvent::Finished)
        )
    }

    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        if area.width == 0 || area.height == 0 {
            return;
        }

        let lines = render::orbit_lines(&self.orbit, area, self.elapsed_ms);
        frame.render_widget(Paragraph::new(lines), area);

        if let Some(greeting) = self.sequencer.current() {
            // Each greeting fades in over the leading slice of its dwell.
            let shown_ms =
                self.sequencer.progress() * techweeb_field::GREETING_DWELL_MS as f32;
            let t = (shown_ms / FADE_MS).min(1.0);
            let color = mix(palette::BASE_RGB, palette::TEXT_RGB, t);

            let row = area.y + area.height / 2;
            let line = Line::from(Span::styled(
                greeting.text.to_string(),
                Style::new().fg(color),
            ))
            .centered();
            frame.render_widget(
                Paragraph::new(line),
                Rect::new(area.x, row, area.width, 1),
            );
        }
    }
}
