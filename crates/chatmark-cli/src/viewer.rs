use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io::{Stdout, stdout};

/// Scrollable view over one rendered message.
pub struct Viewer {
    title: String,
    content: Text<'static>,
    scroll: u16,
}

impl Viewer {
    pub fn new(title: impl Into<String>, content: Text<'static>) -> Self {
        Self {
            title: title.into(),
            content,
            scroll: 0,
        }
    }

    fn max_scroll(&self) -> u16 {
        u16::try_from(self.content.lines.len().saturating_sub(1)).unwrap_or(u16::MAX)
    }

    fn scroll_down(&mut self, by: u16) {
        self.scroll = self.scroll.saturating_add(by).min(self.max_scroll());
    }

    fn scroll_up(&mut self, by: u16) {
        self.scroll = self.scroll.saturating_sub(by);
    }

    /// Returns false once the viewer should close.
    fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return false,
            KeyCode::Down | KeyCode::Char('j') => self.scroll_down(1),
            KeyCode::Up | KeyCode::Char('k') => self.scroll_up(1),
            KeyCode::PageDown | KeyCode::Char(' ') => self.scroll_down(10),
            KeyCode::PageUp => self.scroll_up(10),
            KeyCode::Home | KeyCode::Char('g') => self.scroll = 0,
            KeyCode::End | KeyCode::Char('G') => self.scroll = self.max_scroll(),
            _ => {}
        }
        true
    }
}

pub fn run(mut viewer: Viewer) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut viewer);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, viewer: &mut Viewer) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, viewer))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && !viewer.handle_key(key.code)
        {
            return Ok(());
        }
    }
}

fn ui(f: &mut Frame, viewer: &Viewer) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(f.area());

    let content = Paragraph::new(viewer.content.clone())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(viewer.title.as_str()),
        )
        .wrap(Wrap { trim: false })
        .scroll((viewer.scroll, 0));

    f.render_widget(content, chunks[0]);

    let help_text = Line::from(vec![
        Span::raw("q: Quit | "),
        Span::raw("↑/k: Up | "),
        Span::raw("↓/j: Down | "),
        Span::raw("PgUp/PgDn: Page | g/G: Top/Bottom"),
    ]);

    f.render_widget(Paragraph::new(help_text), chunks[1]);
}
