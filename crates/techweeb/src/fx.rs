//! Text effects: blur-in reveals, glitch titles, sweeping accent lines.

use ratatui::layout::Rect;
use ratatui::style::{Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use techweeb_core::{mix, palette, AnimationSpeed};

/// Time a single blur-in element takes to reach full brightness.
const BLUR_REVEAL_MS: f32 = 1500.0;

/// Length of one glitch burst within its cycle.
const GLITCH_BURST_MS: u64 = 400;

/// Rows of the two accent sweep lines, as fractions of the area height.
const ACCENT_ROWS: [f32; 2] = [0.30, 0.70];

/// Staggered word-by-word reveal fading up from the page background.
/// `delay_ms` shifts the whole reveal; element `i` starts `i * stagger`
/// after that.
pub fn blur_in(
    text: &str,
    elapsed_ms: u64,
    delay_ms: u64,
    speed: AnimationSpeed,
    bold: bool,
) -> Line<'static> {
    let stagger = speed.blur_stagger_ms();
    let spans: Vec<Span> = text
        .split_whitespace()
        .enumerate()
        .flat_map(|(i, word)| {
            let start = delay_ms + i as u64 * stagger;
            let t = (elapsed_ms.saturating_sub(start)) as f32 / BLUR_REVEAL_MS;
            let mut style = Style::new().fg(mix(palette::BASE_RGB, palette::TEXT_RGB, t));
            if bold {
                style = style.bold();
            }
            [
                Span::styled(word.to_string(), style),
                Span::raw(" "),
            ]
        })
        .collect();
    Line::from(spans)
}

/// Title with periodic glitch bursts: during a burst the text splits into
/// three horizontally displaced slices tinted cyan, magenta and pink.
pub fn glitch_title(text: &str, elapsed_ms: u64, speed: AnimationSpeed) -> Line<'static> {
    let cycle = speed.glitch_cycle_ms();
    let phase = elapsed_ms % cycle;
    if phase >= GLITCH_BURST_MS {
        return Line::from(Span::styled(
            text.to_string(),
            Style::new().fg(palette::TEXT).bold(),
        ));
    }

    let chars: Vec<char> = text.chars().collect();
    let slice_len = chars.len().div_ceil(3).max(1);
    // Re-roll the displacement every 50ms within the burst.
    let seed = (elapsed_ms / 50) as i64;
    let offsets = [-(seed % 2) - 1, seed % 3 - 1, (seed % 2) + 1];
    let tints = [
        palette::GLITCH_CYAN,
        palette::GLITCH_MAGENTA,
        palette::GLITCH_PINK,
    ];

    let spans: Vec<Span> = chars
        .iter()
        .enumerate()
        .map(|(i, _)| {
            let slice = (i / slice_len).min(2);
            let source = i as i64 + offsets[slice];
            let ch = if source >= 0 && (source as usize) < chars.len() {
                chars[source as usize]
            } else {
                ' '
            };
            Span::styled(ch.to_string(), Style::new().fg(tints[slice]).bold())
        })
        .collect();
    Line::from(spans)
}

/// Two full-width accent lines with a bright segment sweeping across,
/// half a period out of phase with each other.
pub fn render_accent_lines(frame: &mut Frame, area: Rect, elapsed_ms: u64, speed: AnimationSpeed) {
    let period = speed.accent_sweep_period_ms();
    if area.width == 0 || area.height == 0 || period == 0 {
        return;
    }

    let width = area.width as f32;
    let segment = (width / 2.0).max(1.0);

    for (i, row_frac) in ACCENT_ROWS.iter().enumerate() {
        let row = area.y + (area.height as f32 * row_frac) as u16;
        if row >= area.y + area.height {
            continue;
        }

        let phase = ((elapsed_ms + i as u64 * period / 2) % period) as f32 / period as f32;
        // Sweep the segment center from fully off-screen left to fully
        // off-screen right.
        let center = phase * (width + segment) - segment / 2.0;

        let start = ((center - segment / 2.0).max(0.0)) as u16;
        let end = ((center + segment / 2.0).min(width)) as u16;
        if start >= end {
            continue;
        }

        let spans: Vec<Span> = (start..end)
            .map(|column| {
                let falloff = 1.0 - ((column as f32 - center).abs() / (segment / 2.0));
                let color = mix(palette::BASE_RGB, palette::MUTED_RGB, falloff * 0.35);
                Span::styled("─", Style::new().fg(color))
            })
            .collect();
        let rect = Rect::new(area.x + start, row, end - start, 1);
        frame.render_widget(Paragraph::new(Line::from(spans)), rect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blur_in_word_count() {
        let line = blur_in("three word line", 0, 0, AnimationSpeed::Medium, false);
        // One styled span plus one spacer per word.
        assert_eq!(line.spans.len(), 6);
    }

    #[test]
    fn test_glitch_quiet_phase_is_plain() {
        let line = glitch_title("WORK", 1000, AnimationSpeed::Medium);
        assert_eq!(line.spans.len(), 1);
    }

    #[test]
    fn test_glitch_burst_splits_per_char() {
        let line = glitch_title("WORK", 0, AnimationSpeed::Medium);
        assert_eq!(line.spans.len(), 4);
    }
}
