//! gridnav - keyboard-driven image grid selector for the terminal.
//!
//! Responsibilities:
//! - Orchestrate application startup and shutdown.
//! - Initialize terminal, logging, and async runtime.
//! - Run the main event loop.
//!
//! Does NOT handle:
//! - Grid and keyboard semantics (see `gridnav_tui::app`).
//! - Configuration layering and persistence (see `runtime::config`).
//!
//! Invariants:
//! - The TUI enters raw mode and alternate screen on startup.
//! - Mouse capture is enabled unless `--no-mouse` is specified.
//! - `load_dotenv()` is called at startup to support `.env` configuration.
//! - Configuration precedence: CLI args > env vars > persisted config > defaults.
//! - State is saved on quit unless `--fresh` is set.

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures_util::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc::channel;
use tokio::sync::mpsc::error::TrySendError;
use tracing_appender::non_blocking;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use gridnav_config::constants::{DEFAULT_CHANNEL_CAPACITY, DEFAULT_UI_TICK_MS};
use gridnav_tui::action::Action;
use gridnav_tui::app::App;
use gridnav_tui::cli::Cli;
use gridnav_tui::runtime::config::{LoadedConfig, load_config, save_on_quit};
use gridnav_tui::runtime::terminal::TerminalGuard;
use gridnav_tui::ui;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Create logs directory if it doesn't exist
    std::fs::create_dir_all(&cli.log_dir)?;

    let file_appender = tracing_appender::rolling::daily(&cli.log_dir, "gridnav.log");
    // _guard must live for the whole of main() so logs are flushed
    let (non_blocking, _guard) = non_blocking(file_appender);
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(non_blocking))
        .init();

    let LoadedConfig {
        manager,
        persisted,
        config,
    } = load_config(&cli)?;

    let mut app = App::from_config(&config).with_results_log(manager.results_log());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    if cli.no_mouse {
        execute!(stdout, EnterAlternateScreen)?;
    } else {
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    }

    // Restores the terminal even if the application panics.
    let _terminal_guard = TerminalGuard::new(cli.no_mouse);

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    let size = terminal.size()?;
    app.update(Action::Resize(size.width, size.height));

    let (tx, mut rx) = channel::<Action>(DEFAULT_CHANNEL_CAPACITY);

    // Input stream task: key presses and resizes are never dropped, mouse
    // events are dropped when the channel is full
    let tx_input = tx.clone();
    let input_task = tokio::spawn(async move {
        let mut reader = EventStream::new();
        while let Some(event_result) = reader.next().await {
            let event = match event_result {
                Ok(event) => event,
                Err(e) => {
                    tracing::error!(error = %e, "Terminal event stream failed");
                    break;
                }
            };
            let action = match event {
                Event::Key(key) if key.kind == KeyEventKind::Press => Action::Input(key),
                Event::Resize(width, height) => Action::Resize(width, height),
                Event::Mouse(mouse) => {
                    match tx_input.try_send(Action::Mouse(mouse)) {
                        Ok(()) => {}
                        Err(TrySendError::Full(_)) => {
                            tracing::debug!("Input channel full, dropping mouse event");
                        }
                        // Channel closed, exit task
                        Err(TrySendError::Closed(_)) => break,
                    }
                    continue;
                }
                _ => continue,
            };
            if tx_input.send(action).await.is_err() {
                // Channel closed, exit task
                break;
            }
        }
    });

    let mut tick_interval =
        tokio::time::interval(tokio::time::Duration::from_millis(DEFAULT_UI_TICK_MS));

    // Main event loop
    loop {
        terminal.draw(|f| ui::render(f, &app))?;

        tokio::select! {
            Some(action) = rx.recv() => {
                tracing::debug!(?action, "Handling action");
                app.update(action);
            }
            _ = tick_interval.tick() => {
                app.update(Action::Tick);
            }
        }

        if app.should_quit {
            break;
        }
    }

    input_task.abort();

    // Restore terminal
    disable_raw_mode()?;
    if cli.no_mouse {
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    } else {
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
    }
    terminal.show_cursor()?;

    if let Err(e) = save_on_quit(&app, &manager, persisted, cli.fresh) {
        tracing::error!(error = %e, "Failed to save config");
    }

    Ok(())
}
