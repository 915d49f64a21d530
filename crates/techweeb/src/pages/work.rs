//! Work page: glitching title, category filter and project cards.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;
use techweeb_core::{palette, AnimationSpeed};
use techweeb_content::{Project, CATEGORIES, PROJECTS};

use super::glass_card;
use crate::fx;

/// Projects visible under the given filter index into [`CATEGORIES`].
pub fn filtered(category_index: usize) -> Vec<&'static Project> {
    let category = CATEGORIES[category_index.min(CATEGORIES.len() - 1)];
    PROJECTS
        .iter()
        .filter(|project| category == "All" || project.category == category)
        .collect()
}

pub fn render(
    frame: &mut Frame,
    area: Rect,
    elapsed_ms: u64,
    speed: AnimationSpeed,
    category_index: usize,
) {
    let chunks = Layout::vertical([
        Constraint::Length(1), // Title
        Constraint::Length(1), // Spacing
        Constraint::Length(1), // Category filter
        Constraint::Length(1), // Spacing
        Constraint::Fill(1),   // Cards
    ])
    .split(area);

    let title = fx::glitch_title("SELECTED WORK", elapsed_ms, speed).centered();
    frame.render_widget(Paragraph::new(title), chunks[0]);

    frame.render_widget(Paragraph::new(filter_line(category_index)), chunks[2]);

    let projects = filtered(category_index);
    let card_height = 8;
    let constraints: Vec<Constraint> = projects
        .iter()
        .map(|_| Constraint::Length(card_height))
        .chain([Constraint::Fill(1)])
        .collect();
    let card_areas = Layout::vertical(constraints).split(chunks[4]);

    for (project, card_area) in projects.iter().zip(card_areas.iter()) {
        render_card(frame, *card_area, project);
    }
}

fn filter_line(category_index: usize) -> Line<'static> {
    let mut spans = vec![Span::styled("◀ ", Style::new().fg(palette::MUTED))];
    for (i, category) in CATEGORIES.iter().enumerate() {
        if i == category_index {
            spans.push(category.bold().fg(palette::TEXT).underlined());
        } else {
            spans.push(Span::styled(*category, Style::new().fg(palette::MUTED)));
        }
        spans.push(Span::raw("   "));
    }
    spans.push(Span::styled("▶", Style::new().fg(palette::MUTED)));
    Line::from(spans).centered()
}

fn render_card(frame: &mut Frame, area: Rect, project: &Project) {
    if area.height == 0 {
        return;
    }
    let muted = Style::new().fg(palette::MUTED);

    let card = glass_card(project.title);
    let inner = card.inner(area);
    frame.render_widget(card, area);

    let tech: Vec<Span> = project
        .technologies
        .iter()
        .flat_map(|tech| {
            [
                Span::styled("[ ", muted),
                Span::styled(*tech, Style::new().fg(palette::TEXT)),
                Span::styled(" ] ", muted),
            ]
        })
        .collect();

    let body = vec![
        Line::from(Span::styled(project.description, muted)),
        Line::default(),
        Line::from(tech),
        Line::from(vec![
            Span::styled(project.category, muted.italic()),
            Span::styled("  →  ", muted),
            Span::styled(project.link, muted.italic().underlined()),
        ]),
    ];
    frame.render_widget(Paragraph::new(body).wrap(Wrap { trim: true }), inner);
}
