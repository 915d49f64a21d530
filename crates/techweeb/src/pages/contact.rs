//! Contact page: a form that simulates submission with a timed delay.

use std::time::{Duration, Instant};

use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;
use techweeb_core::palette;
use techweeb_content::PROFILE;

use super::glass_card;

/// Simulated network delay before a submission "succeeds".
const SUBMIT_DELAY: Duration = Duration::from_millis(1500);

/// Focusable parts of the form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormField {
    Name,
    Email,
    Message,
    Send,
}

impl FormField {
    const ORDER: [FormField; 4] = [
        FormField::Name,
        FormField::Email,
        FormField::Message,
        FormField::Send,
    ];

    fn next(self) -> Self {
        let index = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(index + 1) % Self::ORDER.len()]
    }

    fn prev(self) -> Self {
        let index = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(index + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// Submission lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
enum SubmitState {
    Idle,
    Sending { started: Instant },
    Sent { at: String },
}

/// State of the contact form.
#[derive(Debug)]
pub struct ContactForm {
    name: String,
    email: String,
    message: String,
    focus: Option<FormField>,
    state: SubmitState,
    error: Option<&'static str>,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            message: String::new(),
            focus: None,
            state: SubmitState::Idle,
            error: None,
        }
    }

    /// Resolve a pending submission once the simulated delay has elapsed.
    pub fn tick(&mut self) {
        if let SubmitState::Sending { started } = self.state {
            if started.elapsed() >= SUBMIT_DELAY {
                self.state = SubmitState::Sent {
                    at: Local::now().format("%H:%M").to_string(),
                };
            }
        }
    }

    /// Handle a key event. Returns true when the form consumed it; global
    /// navigation keys are only reachable while no field is focused.
    pub fn on_key(&mut self, key: KeyEvent) -> bool {
        match &self.state {
            SubmitState::Sending { .. } => return true, // swallow input mid-send
            SubmitState::Sent { .. } => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Char('r')) {
                    *self = Self::new();
                    return true;
                }
                return false;
            }
            SubmitState::Idle => {}
        }

        let Some(field) = self.focus else {
            return match key.code {
                KeyCode::Enter | KeyCode::Char('i') => {
                    self.focus = Some(FormField::Name);
                    true
                }
                _ => false,
            };
        };

        match key.code {
            KeyCode::Esc => self.focus = None,
            KeyCode::Tab | KeyCode::Down => self.focus = Some(field.next()),
            KeyCode::BackTab | KeyCode::Up => self.focus = Some(field.prev()),
            KeyCode::Enter => match field {
                FormField::Name | FormField::Email => self.focus = Some(field.next()),
                FormField::Message => self.message.push('\n'),
                FormField::Send => self.submit(),
            },
            KeyCode::Backspace => {
                if let Some(buffer) = self.buffer_mut(field) {
                    buffer.pop();
                }
            }
            KeyCode::Char(c) if !c.is_control() => {
                if let Some(buffer) = self.buffer_mut(field) {
                    buffer.push(c);
                }
            }
            _ => {}
        }
        true
    }

    fn buffer_mut(&mut self, field: FormField) -> Option<&mut String> {
        match field {
            FormField::Name => Some(&mut self.name),
            FormField::Email => Some(&mut self.email),
            FormField::Message => Some(&mut self.message),
            FormField::Send => None,
        }
    }

    fn submit(&mut self) {
        if self.name.trim().is_empty()
            || self.email.trim().is_empty()
            || self.message.trim().is_empty()
        {
            self.error = Some("Please fill in every field before sending.");
            return;
        }
        self.error = None;
        self.focus = None;
        self.state = SubmitState::Sending {
            started: Instant::now(),
        };
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, elapsed_ms: u64, location: &str) {
        let card = glass_card("Get in touch");
        let inner = card.inner(area);
        frame.render_widget(card, area);

        match &self.state {
            SubmitState::Sent { at } => self.render_sent(frame, inner, at),
            SubmitState::Sending { .. } => render_sending(frame, inner, elapsed_ms),
            SubmitState::Idle => self.render_form(frame, inner, location),
        }
    }

    fn render_form(&self, frame: &mut Frame, area: Rect, location: &str) {
        let muted = Style::new().fg(palette::MUTED);
        let mut lines = vec![
            contact_line("Email", PROFILE.email, location),
            Line::default(),
            self.field_line("Name", &self.name, FormField::Name),
            Line::default(),
            self.field_line("Email", &self.email, FormField::Email),
            Line::default(),
        ];

        lines.push(label_line("Message", self.focus == Some(FormField::Message)));
        for row in self.message.split('\n') {
            lines.push(Line::from(Span::styled(
                row.to_string(),
                Style::new().fg(palette::TEXT),
            )));
        }
        if self.focus == Some(FormField::Message) {
            if let Some(last) = lines.last_mut() {
                last.spans.push(Span::styled("█", muted));
            }
        }
        lines.push(Line::default());

        let send = if self.focus == Some(FormField::Send) {
            Line::from("[ Send Message ]".bold().fg(palette::TEXT).underlined())
        } else {
            Line::from(Span::styled("[ Send Message ]", muted))
        };
        lines.push(send);

        if let Some(error) = self.error {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                error,
                Style::new().fg(palette::GLITCH_PINK),
            )));
        }

        if self.focus.is_none() {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                "Press enter to start typing.",
                muted.italic(),
            )));
        }

        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
    }

    fn field_line(&self, label: &'static str, value: &str, field: FormField) -> Line<'static> {
        let focused = self.focus == Some(field);
        let mut line = label_line(label, focused);
        line.spans.push(Span::styled(
            value.to_string(),
            Style::new().fg(palette::TEXT),
        ));
        if focused {
            line.spans
                .push(Span::styled("█", Style::new().fg(palette::MUTED)));
        }
        line
    }

    fn render_sent(&self, frame: &mut Frame, area: Rect, at: &str) {
        let chunks = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .split(area);

        frame.render_widget(
            Paragraph::new(Line::from("Message sent!".bold().fg(palette::TEXT)).centered()),
            chunks[1],
        );
        frame.render_widget(
            Paragraph::new(
                Line::from(Span::styled(
                    format!("Delivered at {at} — thanks for reaching out."),
                    Style::new().fg(palette::MUTED),
                ))
                .centered(),
            ),
            chunks[2],
        );
        frame.render_widget(
            Paragraph::new(
                Line::from(Span::styled(
                    "Press r to send another message.",
                    Style::new().fg(palette::MUTED).italic(),
                ))
                .centered(),
            ),
            chunks[3],
        );
    }
}

fn label_line(label: &'static str, focused: bool) -> Line<'static> {
    let style = if focused {
        Style::new().fg(palette::TEXT).bold()
    } else {
        Style::new().fg(palette::MUTED)
    };
    Line::from(vec![
        Span::styled(label, style),
        Span::styled(": ", Style::new().fg(palette::MUTED)),
    ])
}

fn contact_line(label: &'static str, email: &'static str, location: &str) -> Line<'static> {
    let muted = Style::new().fg(palette::MUTED);
    let mut spans = vec![
        Span::styled(label, muted),
        Span::styled(" → ", muted),
        Span::styled(email, Style::new().fg(palette::TEXT)),
    ];
    if !location.is_empty() {
        spans.push(Span::styled("   ·   ", muted));
        spans.push(Span::styled(location.to_string(), muted));
    }
    Line::from(spans)
}

fn render_sending(frame: &mut Frame, area: Rect, elapsed_ms: u64) {
    let dots = ".".repeat((elapsed_ms / 250 % 4) as usize);
    let line = Line::from(vec![
        Span::styled("Sending", Style::new().fg(palette::TEXT).bold()),
        Span::styled(dots, Style::new().fg(palette::MUTED)),
    ])
    .centered();

    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .split(area);
    frame.render_widget(Paragraph::new(line), chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn type_text(form: &mut ContactForm, text: &str) {
        for c in text.chars() {
            form.on_key(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_unfocused_form_ignores_navigation_keys() {
        let mut form = ContactForm::new();
        assert!(!form.on_key(key(KeyCode::Tab)));
        assert!(!form.on_key(key(KeyCode::Char('2'))));
        assert!(form.on_key(key(KeyCode::Enter)));
        assert_eq!(form.focus, Some(FormField::Name));
    }

    #[test]
    fn test_typing_and_field_cycling() {
        let mut form = ContactForm::new();
        form.on_key(key(KeyCode::Enter));
        type_text(&mut form, "Long");
        assert_eq!(form.name, "Long");

        form.on_key(key(KeyCode::Tab));
        type_text(&mut form, "a@b.c");
        assert_eq!(form.email, "a@b.c");

        form.on_key(key(KeyCode::Backspace));
        assert_eq!(form.email, "a@b.");

        form.on_key(key(KeyCode::Esc));
        assert_eq!(form.focus, None);
    }

    #[test]
    fn test_empty_submit_sets_error() {
        let mut form = ContactForm::new();
        form.on_key(key(KeyCode::Enter));
        // Tab to Send and press enter with empty fields.
        for _ in 0..3 {
            form.on_key(key(KeyCode::Tab));
        }
        form.on_key(key(KeyCode::Enter));
        assert!(form.error.is_some());
        assert_eq!(form.state, SubmitState::Idle);
    }

    #[test]
    fn test_submission_lifecycle() {
        let mut form = ContactForm::new();
        form.on_key(key(KeyCode::Enter));
        type_text(&mut form, "Long");
        form.on_key(key(KeyCode::Tab));
        type_text(&mut form, "a@b.c");
        form.on_key(key(KeyCode::Tab));
        type_text(&mut form, "Hi there");
        form.on_key(key(KeyCode::Tab));
        form.on_key(key(KeyCode::Enter));

        assert!(matches!(form.state, SubmitState::Sending { .. }));
        // Input is swallowed while sending.
        assert!(form.on_key(key(KeyCode::Char('x'))));
        assert_eq!(form.message, "Hi there");

        // Before the delay has passed, tick keeps it pending.
        form.tick();
        assert!(matches!(form.state, SubmitState::Sending { .. }));

        // Force the delay to have elapsed.
        form.state = SubmitState::Sending {
            started: Instant::now() - SUBMIT_DELAY,
        };
        form.tick();
        assert!(matches!(form.state, SubmitState::Sent { .. }));

        // Reset path.
        form.on_key(key(KeyCode::Char('r')));
        assert_eq!(form.state, SubmitState::Idle);
        assert!(form.name.is_empty());
    }
}
