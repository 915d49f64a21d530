//! About page: summary, experience timeline, projects, skills, languages
//! and education, in one scrollable glass card.

use ratatui::layout::Rect;
use ratatui::style::{Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;
use techweeb_core::palette;
use techweeb_content::{EDUCATION, EXPERIENCE, LANGUAGES, PROFILE, PROJECTS, SKILLS};

use super::glass_card;

pub fn render(frame: &mut Frame, area: Rect, scroll: u16) {
    let card = glass_card("About Me");
    let inner = card.inner(area);
    frame.render_widget(card, area);

    let paragraph = Paragraph::new(lines())
        .wrap(Wrap { trim: true })
        .scroll((scroll, 0));
    frame.render_widget(paragraph, inner);
}

fn section(title: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(title, Style::new().fg(palette::TEXT).bold()),
        Span::raw("  "),
        Span::styled(
            "─".repeat(40),
            Style::new().fg(palette::MUTED),
        ),
    ])
}

fn lines() -> Vec<Line<'static>> {
    let muted = Style::new().fg(palette::MUTED);
    let text = Style::new().fg(palette::TEXT);

    let mut lines = vec![
        Line::from(Span::styled(PROFILE.summary, muted)),
        Line::default(),
        section("Professional Journey"),
        Line::default(),
    ];

    for entry in EXPERIENCE {
        lines.push(Line::from(Span::styled(entry.date, muted.italic())));
        lines.push(Line::from(vec![
            Span::styled(entry.title, text.bold()),
            Span::styled("  ·  ", muted),
            Span::styled(entry.company, Style::new().fg(palette::MUTED).bold()),
        ]));
        lines.push(Line::from(Span::styled(entry.description, muted)));
        lines.push(Line::default());
    }

    lines.push(section("Notable Projects"));
    lines.push(Line::default());
    for project in PROJECTS {
        lines.push(Line::from(vec![
            Span::styled(project.title, text.bold()),
            Span::styled("  →  ", muted),
            Span::styled(project.link, muted.italic()),
        ]));
        lines.push(Line::from(Span::styled(project.description, muted)));
        lines.push(Line::default());
    }

    lines.push(section("Technical Skills"));
    lines.push(Line::default());
    let chips: Vec<Span> = SKILLS
        .iter()
        .flat_map(|skill| {
            [
                Span::styled("[ ", muted),
                Span::styled(*skill, text),
                Span::styled(" ] ", muted),
            ]
        })
        .collect();
    lines.push(Line::from(chips));
    lines.push(Line::default());

    lines.push(section("Languages"));
    lines.push(Line::default());
    for language in LANGUAGES {
        lines.push(Line::from(vec![
            Span::styled(language.name, text),
            Span::styled("  —  ", muted),
            Span::styled(language.level, muted),
        ]));
    }
    lines.push(Line::default());

    lines.push(section("Education"));
    lines.push(Line::default());
    for entry in EDUCATION {
        lines.push(Line::from(Span::styled(entry.years, muted.italic())));
        lines.push(Line::from(vec![
            Span::styled(entry.degree, text.bold()),
            Span::styled("  ·  ", muted),
            Span::styled(entry.field, muted),
        ]));
        lines.push(Line::default());
    }

    lines.push(Line::from(vec![
        Span::styled("Get in touch → ", muted),
        Span::styled(PROFILE.email, text.bold()),
    ]));

    lines
}

/// Upper bound for the scroll offset, generous enough for the wrapped
/// timeline at narrow widths.
pub fn max_scroll(area: Rect) -> u16 {
    (lines().len() as u16 + 40).saturating_sub(area.height)
}
