mod dispatch;
mod gateway;
mod ui;

use std::io;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{self, Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc;

use stackr_core::command::{Command, Effect};
use stackr_core::event::{AppEvent, KeyAction};
use stackr_core::reducer::transition;
use stackr_core::state::App;

use dispatch::Dispatcher;
use gateway::DockerGateway;
use ui::theme::Theme;

/// Terminal dashboard for inspecting and controlling Docker containers.
#[derive(Parser)]
#[command(name = "stackr", about = "Terminal dashboard for Docker containers", version)]
struct Cli {}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn map_key(key: KeyEvent) -> Option<KeyAction> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(KeyAction::Quit);
    }
    match key.code {
        KeyCode::Char('q') => Some(KeyAction::Quit),
        KeyCode::Up | KeyCode::Char('k') => Some(KeyAction::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(KeyAction::Down),
        KeyCode::PageUp => Some(KeyAction::PageUp),
        KeyCode::PageDown => Some(KeyAction::PageDown),
        KeyCode::Enter => Some(KeyAction::Enter),
        KeyCode::Esc => Some(KeyAction::Back),
        KeyCode::Char('s') => Some(KeyAction::Stop),
        KeyCode::Char('r') => Some(KeyAction::Start),
        KeyCode::Char('R') => Some(KeyAction::Restart),
        KeyCode::Char('d') => Some(KeyAction::Delete),
        KeyCode::Char('f') => Some(KeyAction::Refresh),
        _ => None,
    }
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let _cli = Cli::parse();

    // Connection failure is fatal: report and exit before the UI loop.
    let gateway = match DockerGateway::connect().await {
        Ok(gateway) => Arc::new(gateway),
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let (event_tx, event_rx) = mpsc::channel::<AppEvent>(100);
    let dispatcher = Dispatcher::new(gateway, event_tx);

    let mut terminal = setup_terminal()?;
    let size = terminal.size()?;
    let mut app = App::new(size.width, size.height);

    // First screen populates without user action.
    dispatcher.dispatch(Effect::Run(Command::FetchList));

    let res = event_loop(&mut terminal, &mut app, &dispatcher, event_rx).await;
    restore_terminal(terminal)?;
    res
}

/// Single-threaded cooperative loop: all transitions and rendering happen
/// here; gateway calls run in dispatched tasks and come back as events.
async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    dispatcher: &Dispatcher,
    mut event_rx: mpsc::Receiver<AppEvent>,
) -> io::Result<()> {
    let theme = Theme::default();

    loop {
        while let Ok(app_event) = event_rx.try_recv() {
            let effect = transition(app, app_event);
            dispatcher.dispatch(effect);
        }

        terminal.draw(|frame| ui::draw(frame, app, &theme))?;

        if app.quit {
            return Ok(());
        }

        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                CEvent::Key(key) if key.kind == KeyEventKind::Press => {
                    if let Some(action) = map_key(key) {
                        let effect = transition(app, AppEvent::Key(action));
                        dispatcher.dispatch(effect);
                    }
                }
                CEvent::Resize(width, height) => {
                    let effect = transition(app, AppEvent::Resize { width, height });
                    dispatcher.dispatch(effect);
                }
                _ => {}
            }
        }
    }
}
