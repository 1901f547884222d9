//! folio: a single-page portfolio with scroll-tracked navigation.
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use folio::{app_state, config, content, logging, terminal, ui};
use ratatui::crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Single-page portfolio for the terminal", long_about = None)]
struct Args {
    /// Settings file (defaults to ./folio.toml when present)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// JSON file replacing the built-in portfolio content
    #[arg(long, value_name = "PATH")]
    content: Option<PathBuf>,

    /// Write logs to this file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Increase log verbosity (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Look-ahead in layout units used when tracking the active section
    #[arg(long, value_name = "UNITS")]
    look_ahead: Option<u32>,

    /// Disable entrance animations and smooth scrolling
    #[arg(long)]
    no_animations: bool,
}

fn main() -> folio::Result<()> {
    let args = Args::parse();
    logging::init_logging(args.log_file.as_deref(), args.verbose)?;

    let mut cfg = config::Config::load(args.config.as_deref())?;

    // Override config with command line args
    if let Some(look_ahead) = args.look_ahead {
        cfg.look_ahead = look_ahead;
    }
    if args.no_animations {
        cfg.animations = false;
        cfg.smooth_scroll = false;
    }
    tracing::info!(?cfg, "config loaded");

    let content = match args.content {
        Some(path) => content::Content::load(&path)?,
        None => content::Content::default(),
    };

    let mut session = terminal::TerminalSession::enter()?;
    let size = session.terminal().size()?;
    let mut app = app_state::AppState::new(content, cfg, size.width, size.height)?;

    run_app(session.terminal(), &mut app)?;
    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut app_state::AppState) -> io::Result<()> {
    let tick = Duration::from_millis(app.config.tick_ms.max(1));

    loop {
        terminal.draw(|f| ui::draw(f, app))?;
        if app.should_quit {
            return Ok(());
        }

        if event::poll(tick)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
                Event::Mouse(mouse) => handle_mouse(app, mouse),
                Event::Resize(width, height) => app.resize(width, height),
                _ => {}
            }
        }
        app.tick();
    }
}

fn handle_key(app: &mut app_state::AppState, key: KeyEvent) {
    match app.current_view {
        app_state::View::Page => match key.code {
            KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.should_quit = true;
            }
            KeyCode::Up | KeyCode::Char('k') => app.scroll_lines(-1),
            KeyCode::Down | KeyCode::Char('j') => app.scroll_lines(1),
            KeyCode::PageUp => app.page_up(),
            KeyCode::PageDown | KeyCode::Char(' ') => app.page_down(),
            KeyCode::Home | KeyCode::Char('g') => app.scroll_home(),
            KeyCode::End | KeyCode::Char('G') => app.scroll_end(),
            KeyCode::Tab => app.next_section(),
            KeyCode::BackTab => app.prev_section(),
            KeyCode::Char(c @ '1'..='5') => {
                // Digits are 1-based on screen.
                if let Some(n) = c.to_digit(10).and_then(|d| usize::try_from(d).ok()) {
                    app.go_to_index(n - 1);
                }
            }
            // Hero call-to-action buttons
            KeyCode::Char('w') => app.go_to(folio::section::SectionId::Projects),
            KeyCode::Char('c') => app.go_to(folio::section::SectionId::Contact),
            KeyCode::Char(':') => app.enter_command(),
            _ => {}
        },
        app_state::View::Command => match key.code {
            KeyCode::Char(c) => app.command_buffer.push(c),
            KeyCode::Backspace => {
                app.command_buffer.pop();
            }
            KeyCode::Enter => app.submit_command(),
            KeyCode::Esc => app.cancel_command(),
            _ => {}
        },
    }
}

fn handle_mouse(app: &mut app_state::AppState, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::ScrollDown => app.wheel(true),
        MouseEventKind::ScrollUp => app.wheel(false),
        MouseEventKind::Down(MouseButton::Left) => app.click(mouse.column, mouse.row),
        _ => {}
    }
}
