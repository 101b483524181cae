//! Full-screen query UI.
//!
//! [`TuiApp`] owns the [`QuerySession`] and all UI-only state (focus,
//! selection, scroll). Every frame it drains finished requests, rebuilds the
//! screen view model from the controller and draws it with the view widgets.
//! [`TuiRenderer`] owns the terminal and the event loop.

mod keymap;

pub use keymap::{map_key, Focus, InputAction};

use std::cell::Cell;
use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use chrono::{DateTime, Local};
use crossterm::{
    event::{self, Event, KeyEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Layout},
    Frame, Terminal,
};
use talkdata_engine::{Msg, EXAMPLE_QUESTIONS};

use crate::presentation::presenters::{present_screen, ScreenContext};
use crate::presentation::views::tui::{
    ExamplesView, HeaderView, InputView, ResultsView, StatusBarView,
};
use crate::session::QuerySession;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Debug, Default)]
struct UiState {
    focus: Focus,
    selected_example: usize,
    scroll: usize,
    /// Scroll bound from the last frame; depends on the pane size.
    max_scroll: Cell<usize>,
    should_quit: bool,
    submitted_at: Option<Instant>,
    latency: Option<Duration>,
    resolved_at: Option<DateTime<Local>>,
}

pub struct TuiApp {
    session: QuerySession,
    api_base: String,
    ui: UiState,
}

impl TuiApp {
    pub fn new(session: QuerySession, api_base: impl Into<String>) -> Self {
        Self {
            session,
            api_base: api_base.into(),
            ui: UiState::default(),
        }
    }

    pub fn session(&self) -> &QuerySession {
        &self.session
    }

    pub fn focus(&self) -> Focus {
        self.ui.focus
    }

    pub fn scroll(&self) -> usize {
        self.ui.scroll
    }

    pub fn should_quit(&self) -> bool {
        self.ui.should_quit
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if let Some(action) = map_key(key, self.ui.focus) {
            self.apply(action);
        }
    }

    pub fn apply(&mut self, action: InputAction) {
        match action {
            InputAction::Insert(c) => {
                let mut question = self.session.controller().question().to_string();
                question.push(c);
                self.session.dispatch(Msg::QuestionChanged(question));
            }
            InputAction::Backspace => {
                let mut question = self.session.controller().question().to_string();
                question.pop();
                self.session.dispatch(Msg::QuestionChanged(question));
            }
            InputAction::ClearLine => {
                self.session.dispatch(Msg::QuestionChanged(String::new()));
            }
            InputAction::Submit => {
                if self.session.dispatch(Msg::Submitted) {
                    self.ui.submitted_at = Some(Instant::now());
                    self.ui.scroll = 0;
                }
            }
            InputAction::ToggleFocus => self.ui.focus = self.ui.focus.toggle(),
            InputAction::SelectExample => {
                if self.session.select_example(self.ui.selected_example) {
                    self.ui.focus = Focus::Input;
                }
            }
            InputAction::MoveSelection(delta) => {
                let last = EXAMPLE_QUESTIONS.len().saturating_sub(1);
                self.ui.selected_example = self
                    .ui
                    .selected_example
                    .saturating_add_signed(delta)
                    .min(last);
            }
            InputAction::Scroll(delta) => {
                self.ui.scroll = self
                    .ui
                    .scroll
                    .saturating_add_signed(delta)
                    .min(self.ui.max_scroll.get());
            }
            InputAction::ScrollHome => self.ui.scroll = 0,
            InputAction::Quit => self.ui.should_quit = true,
        }
    }

    /// Apply finished requests. Returns whether anything changed.
    pub fn tick(&mut self) -> bool {
        if self.session.drain() == 0 {
            return false;
        }
        self.ui.latency = self.ui.submitted_at.take().map(|at| at.elapsed());
        self.ui.resolved_at = Some(Local::now());
        true
    }

    pub fn render(&self, f: &mut Frame) {
        let screen = present_screen(
            self.session.controller(),
            ScreenContext {
                api_base: &self.api_base,
                latency: self.ui.latency,
                resolved_at: self.ui.resolved_at,
            },
        );

        let rows = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(3),
        ])
        .split(f.area());

        f.render_widget(HeaderView::new(&screen.title, &screen.subtitle), rows[0]);
        f.render_widget(
            InputView::new(&screen.input).focused(self.ui.focus == Focus::Input),
            rows[1],
        );

        let examples_width = EXAMPLE_QUESTIONS
            .iter()
            .map(|q| q.chars().count() as u16 + 6)
            .max()
            .unwrap_or(30);
        let body = Layout::horizontal([Constraint::Min(20), Constraint::Length(examples_width)])
            .split(rows[2]);

        let results = ResultsView::new(&screen.results);
        self.ui.max_scroll.set(results.max_scroll(body[0]));
        f.render_widget(results.scroll(self.ui.scroll), body[0]);
        f.render_widget(
            ExamplesView::new(&screen.examples)
                .selected(self.ui.selected_example)
                .focused(self.ui.focus == Focus::Examples),
            body[1],
        );
        f.render_widget(StatusBarView::new(&screen.status_bar), rows[3]);
    }
}

#[derive(Default)]
pub struct TuiRenderer;

impl TuiRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Take over the terminal until the user quits.
    pub fn run(self, mut app: TuiApp) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        ctrlc::set_handler(move || {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            std::process::exit(0);
        })?;

        tracing::info!("tui started");
        let result = event_loop(&mut terminal, &mut app);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        tracing::info!("tui stopped");

        result
    }
}

fn event_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut TuiApp) -> Result<()> {
    loop {
        terminal.draw(|f| app.render(f))?;

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key);
            }
        }

        app.tick();

        if app.should_quit() {
            break;
        }
    }
    Ok(())
}
