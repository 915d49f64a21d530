use std::io::stdout;
use std::time::{Duration, Instant};

use chrono::Local;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseEvent, MouseEventKind,
};
use rand::rngs::ThreadRng;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
    DefaultTerminal, Frame,
};
use techweeb_config::Config;
use techweeb_content::{CATEGORIES, PROFILE};
use techweeb_core::{palette, AnimationSpeed, Page, Pointer};
use techweeb_field::{render, Field, FieldConfig};

mod fx;
mod intro;
mod pages;

use intro::Intro;
use pages::contact::ContactForm;

/// Event poll timeout; keeps the frame loop near the display refresh rate.
const FRAME_POLL: Duration = Duration::from_millis(16);

/// Preset particle counts per page, before the density multiplier.
const HOME_PARTICLES: usize = 350;
const WANDER_PARTICLES: usize = 800;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let config = Config::load();
    let capture_mouse = config.mouse_capture;

    let terminal = ratatui::init();
    if capture_mouse {
        crossterm::execute!(stdout(), EnableMouseCapture).ok();
    }
    let result = App::new(config).run(terminal);
    if capture_mouse {
        crossterm::execute!(stdout(), DisableMouseCapture).ok();
    }
    ratatui::restore();
    result
}

/// The main application which holds the state and logic of the application.
pub struct App {
    /// Is the application running?
    running: bool,
    config: Config,
    speed: AnimationSpeed,
    /// Currently displayed page.
    page: Page,
    /// Most recently observed pointer position, in pixel space.
    pointer: Pointer,
    /// Particle field behind the current page, if it has one.
    field: Option<Field>,
    /// Intro overlay; torn down once the greeting sequence completes.
    intro: Option<Intro>,
    intro_done: bool,
    /// Area the scene was last built for; rebuilt lazily on change.
    scene_area: Option<Rect>,
    rng: ThreadRng,
    started: Instant,
    last_frame: Instant,
    /// Moment the current page was switched to, for entrance reveals.
    page_entered: Instant,
    about_scroll: u16,
    work_category: usize,
    contact: ContactForm,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(config: Config) -> Self {
        let now = Instant::now();
        Self {
            running: false,
            speed: config.animation_speed,
            intro_done: config.skip_intro,
            config,
            page: Page::default(),
            pointer: Pointer::default(),
            field: None,
            intro: None,
            scene_area: None,
            rng: rand::thread_rng(),
            started: now,
            last_frame: now,
            page_entered: now,
            about_scroll: 0,
            work_category: 0,
            contact: ContactForm::new(),
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        while self.running {
            self.tick();
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
        }
        Ok(())
    }

    /// Advance all per-frame state by one animation frame.
    fn tick(&mut self) {
        let now = Instant::now();
        let delta_ms = now.duration_since(self.last_frame).as_millis() as u64;
        self.last_frame = now;

        if let Some(intro) = &mut self.intro {
            if intro.advance(delta_ms) {
                self.intro = None;
                self.intro_done = true;
                self.page_entered = now;
            }
            return;
        }

        if let Some(field) = &mut self.field {
            field.advance(self.pointer);
        }
        self.contact.tick();
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        if area.width == 0 || area.height == 0 {
            return;
        }
        self.ensure_scene(area);

        if let Some(intro) = &self.intro {
            intro.render(frame);
            return;
        }

        // Background passes: particles (or bare grid), then accent lines.
        let background = match &self.field {
            Some(field) => render::field_lines(field, area),
            None => render::grid_lines(area),
        };
        frame.render_widget(Paragraph::new(background), area);
        fx::render_accent_lines(frame, area, self.elapsed_ms(), self.speed);

        let chunks = Layout::vertical([
            Constraint::Length(3), // Navigation bar
            Constraint::Fill(1),   // Page body
            Constraint::Length(1), // Help line
        ])
        .split(area);

        self.render_nav(frame, chunks[0]);

        let body = chunks[1];
        let page_ms = self.page_entered.elapsed().as_millis() as u64;
        match self.page {
            Page::Home => pages::home::render(frame, body, page_ms, self.speed),
            Page::About => {
                self.about_scroll = self.about_scroll.min(pages::about::max_scroll(body));
                pages::about::render(frame, body, self.about_scroll);
            }
            Page::Work => {
                pages::work::render(frame, body, page_ms, self.speed, self.work_category)
            }
            Page::Contact => {
                self.contact
                    .render(frame, body, page_ms, &self.config.location)
            }
        }

        self.render_help(frame, chunks[2]);
    }

    /// Build the intro and particle field once the terminal size is known,
    /// and re-bind the field viewport after a resize.
    fn ensure_scene(&mut self, area: Rect) {
        if self.scene_area == Some(area) {
            return;
        }
        let first = self.scene_area.is_none();
        self.scene_area = Some(area);
        let viewport = render::viewport_for(area);

        if !self.intro_done && self.intro.is_none() {
            self.intro = Some(Intro::new(
                viewport.width.max(viewport.height),
                &mut self.rng,
            ));
        }

        if first {
            self.rebuild_field();
        } else if let Some(field) = &mut self.field {
            field.set_viewport(viewport);
        }
    }

    /// Create the particle field for the current page, discarding the old
    /// one; the work page runs without particles.
    fn rebuild_field(&mut self) {
        let Some(area) = self.scene_area else {
            return;
        };
        let viewport = render::viewport_for(area);
        let drift_scale = self.speed.drift_scale();

        self.field = match self.page {
            Page::Home => Some(FieldConfig::repel_and_return(
                self.config.scaled_count(HOME_PARTICLES),
            )),
            Page::About | Page::Contact => Some(FieldConfig::repel_and_wrap(
                self.config.scaled_count(WANDER_PARTICLES),
            )),
            Page::Work => None,
        }
        .map(|config| Field::new(config.with_drift_scale(drift_scale), viewport, &mut self.rng));
    }

    fn render_nav(&self, frame: &mut Frame, area: Rect) {
        let card = pages::glass_card("");
        let inner = card.inner(area);
        frame.render_widget(card, area);
        if inner.height == 0 {
            return;
        }

        let row = Layout::horizontal([Constraint::Fill(1), Constraint::Length(8)]).split(inner);

        let mut spans = vec![
            PROFILE.brand.bold().fg(palette::TEXT),
            Span::raw("   "),
        ];
        for (i, page) in Page::ALL.iter().enumerate() {
            spans.push(Span::styled(
                format!("{} ", i + 1),
                Style::new().fg(palette::GRID),
            ));
            if *page == self.page {
                spans.push(page.title().bold().fg(palette::TEXT).underlined());
            } else {
                spans.push(Span::styled(page.title(), Style::new().fg(palette::MUTED)));
            }
            spans.push(Span::raw("   "));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), row[0]);

        let clock = Local::now().format("%H:%M:%S").to_string();
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                clock,
                Style::new().fg(palette::MUTED),
            ))),
            row[1],
        );
    }

    fn render_help(&self, frame: &mut Frame, area: Rect) {
        let accent = palette::MUTED;
        let mut spans = vec![
            "q".bold().fg(accent),
            " quit  ".dark_gray(),
            "1-4".bold().fg(accent),
            " pages  ".dark_gray(),
            "tab".bold().fg(accent),
            " next page  ".dark_gray(),
        ];
        match self.page {
            Page::About => {
                spans.push("↑↓".bold().fg(accent));
                spans.push(" scroll".dark_gray());
            }
            Page::Work => {
                spans.push("←→".bold().fg(accent));
                spans.push(" filter".dark_gray());
            }
            Page::Contact => {
                spans.push("enter".bold().fg(accent));
                spans.push(" type  ".dark_gray());
                spans.push("esc".bold().fg(accent));
                spans.push(" done".dark_gray());
            }
            Page::Home => {}
        }
        frame.render_widget(Paragraph::new(Line::from(spans).centered()), area);
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Polls with a short timeout for smooth animation, then drains the
    /// queue so pointer motion never lags the frame.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        if !event::poll(FRAME_POLL)? {
            return Ok(());
        }
        loop {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Mouse(mouse) => self.on_mouse_event(mouse),
                Event::Resize(_, _) => {} // picked up by ensure_scene next frame
                _ => {}
            }
            if !event::poll(Duration::ZERO)? {
                return Ok(());
            }
        }
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        if key.modifiers == KeyModifiers::CONTROL
            && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        {
            self.quit();
            return;
        }
        // The intro is a closed automaton: nothing skips or reorders it.
        if self.intro.is_some() {
            return;
        }
        // Give the contact form first refusal while it is on screen.
        if self.page == Page::Contact && self.contact.on_key(key) {
            return;
        }

        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => self.quit(),
            KeyCode::Char('1') => self.set_page(Page::Home),
            KeyCode::Char('2') => self.set_page(Page::About),
            KeyCode::Char('3') => self.set_page(Page::Work),
            KeyCode::Char('4') => self.set_page(Page::Contact),
            KeyCode::Tab => self.set_page(self.page.next()),
            KeyCode::BackTab => self.set_page(self.page.prev()),
            KeyCode::Up if self.page == Page::About => {
                self.about_scroll = self.about_scroll.saturating_sub(1);
            }
            KeyCode::Down if self.page == Page::About => {
                self.about_scroll = self.about_scroll.saturating_add(1);
            }
            KeyCode::Left if self.page == Page::Work => {
                self.work_category =
                    (self.work_category + CATEGORIES.len() - 1) % CATEGORIES.len();
            }
            KeyCode::Right if self.page == Page::Work => {
                self.work_category = (self.work_category + 1) % CATEGORIES.len();
            }
            _ => {}
        }
    }

    fn on_mouse_event(&mut self, mouse: MouseEvent) {
        if matches!(
            mouse.kind,
            MouseEventKind::Moved | MouseEventKind::Drag(_)
        ) {
            self.pointer = render::pointer_from_cell(mouse.column, mouse.row);
        }
    }

    /// Switch pages; the old page's field is discarded and a fresh one is
    /// built for the new page.
    fn set_page(&mut self, page: Page) {
        if page == self.page {
            return;
        }
        self.page = page;
        self.page_entered = Instant::now();
        self.about_scroll = 0;
        self.rebuild_field();
    }

    fn elapsed_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
