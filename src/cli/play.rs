//! Play command implementation - Interactive TUI.

use super::{CliError, open_level};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use digger::game::{Coord, Direction, EntityKind, GameState, TickEvent, TickReport};
use digger::render::cell_glyph;
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction as LayoutDirection, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io::stdout;
use std::path::Path;
use std::time::{Duration, Instant};

/// Execute the play command.
///
/// # Errors
///
/// Returns an error if the level is invalid or the TUI fails.
pub(crate) fn execute(level: Option<&Path>, speed: u64) -> Result<(), CliError> {
    let state = open_level(level)?;
    let title = level
        .and_then(Path::file_name)
        .map_or_else(|| "default level".to_string(), |n| n.to_string_lossy().to_string());

    run_tui(state, title, speed)
}

/// App state for the TUI.
struct App {
    initial: GameState,
    state: GameState,
    title: String,
    paused: bool,
    speed_ms: u64,
    last_step: Instant,
    last_report: TickReport,
}

impl App {
    fn new(state: GameState, title: String, speed_ms: u64) -> Self {
        Self {
            initial: state.clone(),
            state,
            title,
            paused: false,
            speed_ms,
            last_step: Instant::now(),
            last_report: TickReport::default(),
        }
    }

    fn step(&mut self) -> Result<(), CliError> {
        if !self.state.is_game_over() {
            self.last_report = self.state.step()?;
            // One key press moves one cell.
            self.state.set_input(None);
        }
        self.last_step = Instant::now();
        Ok(())
    }

    fn steer(&mut self, direction: Direction) {
        self.state.set_input(Some(direction));
    }

    fn restart(&mut self) {
        self.state = self.initial.clone();
        self.last_report = TickReport::default();
        self.last_step = Instant::now();
    }

    fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    fn increase_speed(&mut self) {
        self.speed_ms = self.speed_ms.saturating_sub(50).max(50);
    }

    fn decrease_speed(&mut self) {
        self.speed_ms = (self.speed_ms + 50).min(2000);
    }

    fn should_auto_step(&self) -> bool {
        !self.paused
            && !self.state.is_game_over()
            && self.last_step.elapsed() >= Duration::from_millis(self.speed_ms)
    }
}

fn key_direction(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Up | KeyCode::Char('k' | 'w') => Some(Direction::Up),
        KeyCode::Down | KeyCode::Char('j' | 's') => Some(Direction::Down),
        KeyCode::Left | KeyCode::Char('h' | 'a') => Some(Direction::Left),
        KeyCode::Right | KeyCode::Char('l' | 'd') => Some(Direction::Right),
        _ => None,
    }
}

fn run_tui(state: GameState, title: String, speed: u64) -> Result<(), CliError> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(|e| CliError::new(e.to_string()))?;

    let mut app = App::new(state, title, speed);
    let outcome = event_loop(&mut terminal, &mut app);

    // Restore terminal even if the loop failed
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    outcome
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut App,
) -> Result<(), CliError> {
    loop {
        terminal
            .draw(|f| ui(f, app))
            .map_err(|e| CliError::new(e.to_string()))?;

        if app.should_auto_step() {
            app.step()?;
        }

        if !event::poll(Duration::from_millis(20))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        if let Some(direction) = key_direction(key.code) {
            app.steer(direction);
            continue;
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
            KeyCode::Char(' ') => app.toggle_pause(),
            KeyCode::Char('n') => {
                app.paused = true;
                app.step()?;
            }
            KeyCode::Char('+' | '=') => app.increase_speed(),
            KeyCode::Char('-') => app.decrease_speed(),
            KeyCode::Char('r') => app.restart(),
            _ => {}
        }
    }
}

fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(LayoutDirection::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(5),    // Main content
            Constraint::Length(3), // Footer
        ])
        .split(f.area());

    render_header(f, chunks[0], app);

    let main_chunks = Layout::default()
        .direction(LayoutDirection::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(chunks[1]);

    render_map(f, main_chunks[0], app);
    render_events(f, main_chunks[1], app);

    render_footer(f, chunks[2], app);
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let status = if app.state.is_game_over() {
        Span::styled(
            " GAME OVER ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )
    } else if app.paused {
        Span::styled(" PAUSED ", Style::default().fg(Color::Yellow))
    } else {
        Span::styled(" RUNNING ", Style::default().fg(Color::Green))
    };

    let header = Paragraph::new(Line::from(vec![
        Span::raw(format!(
            " Tick {}  Score {}  Speed {}ms ",
            app.state.tick(),
            app.state.score(),
            app.speed_ms
        )),
        status,
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" Digger - {} ", app.title)),
    );

    f.render_widget(header, area);
}

fn render_map(f: &mut Frame, area: Rect, app: &App) {
    let grid = app.state.grid();
    let mut lines = Vec::with_capacity(usize::from(grid.height()));

    for y in 0..grid.height() {
        let spans: Vec<Span> = (0..grid.width())
            .map(|x| {
                let kind = grid.kind_at(Coord::new(x, y));
                Span::styled(cell_glyph(kind).to_string(), kind_style(kind))
            })
            .collect();
        lines.push(Line::from(spans));
    }

    let map_widget =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Map "));

    f.render_widget(map_widget, area);
}

fn kind_style(kind: Option<EntityKind>) -> Style {
    let style = Style::default();
    match kind {
        Some(EntityKind::Terrain) => style.fg(Color::DarkGray),
        Some(EntityKind::Player) => style.fg(Color::Green).add_modifier(Modifier::BOLD),
        Some(EntityKind::Sack) => style.fg(Color::Yellow),
        Some(EntityKind::Gold) => style.fg(Color::LightYellow).add_modifier(Modifier::BOLD),
        Some(EntityKind::Monster) => style.fg(Color::Red).add_modifier(Modifier::BOLD),
        None => style,
    }
}

fn describe(event: &TickEvent) -> String {
    match event {
        TickEvent::Moved { kind, to, .. } => format!("{kind} -> ({}, {})", to.x, to.y),
        TickEvent::Blocked { kind, by, .. } => format!("{kind} blocked by {by}"),
        TickEvent::Died { kind, by, .. } => format!("{kind} destroyed by {by}"),
        TickEvent::Transformed { from, to, .. } => format!("{from} became {to}"),
        TickEvent::ScoreAwarded { amount, .. } => format!("+{amount} points"),
        TickEvent::GameOver => "game over".to_string(),
    }
}

fn render_events(f: &mut Frame, area: Rect, app: &App) {
    let lines: Vec<Line> = app
        .last_report
        .events
        .iter()
        .filter(|e| !matches!(e, TickEvent::Moved { kind: EntityKind::Monster, .. }))
        .map(|e| Line::from(describe(e)))
        .collect();

    let events_widget = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Last tick "))
        .wrap(Wrap { trim: false });

    f.render_widget(events_widget, area);
}

fn render_footer(f: &mut Frame, area: Rect, app: &App) {
    let controls = if app.state.is_game_over() {
        " [q] Quit  [r] Restart "
    } else {
        " [q] Quit  [arrows/hjkl/wasd] Move  [Space] Pause  [n] Step  [+/-] Speed  [r] Restart "
    };

    let footer = Paragraph::new(controls)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(footer, area);
}
