//! Handraise TUI - a terminal client for the Handraise volunteer matching
//! platform.
//!
//! Provides a fast, keyboard-driven interface for browsing matched
//! opportunities, applying, and messaging organizations.

use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use handraise::app::{App, AppState};
use handraise::auth::CredentialStore;
use handraise::config::Config;
use handraise::ui::input::handle_input;
use handraise::ui::render::render;

// ============================================================================
// Constants
// ============================================================================

/// Timeout for polling terminal events (in milliseconds)
const EVENT_POLL_TIMEOUT_MS: u64 = 100;

/// Initialize tracing with a file writer so the alternate screen stays
/// clean. Use the RUST_LOG env var to control the level.
fn init_tracing() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let log_dir = Config::log_dir().ok()?;
    std::fs::create_dir_all(&log_dir).ok()?;
    let appender = tracing_appender::rolling::daily(log_dir, "handraise.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .with(filter)
        .init();

    Some(guard)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let args: Vec<String> = std::env::args().collect();
    if args.len() > 1 && args[1] == "--login" {
        return login_cli().await;
    }

    let _log_guard = init_tracing();
    info!("Handraise starting");

    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            warn!(error = %e, "Failed to load config, using defaults");
            Config::default()
        }
    };
    let store = Arc::new(CredentialStore::keychain());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config, store)?;
    app.start();

    // Main loop
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
    }

    info!("Handraise shutting down");
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Draw UI
        terminal.draw(|f| render(f, app))?;

        // Poll for events with timeout to allow background updates
        if event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            if let Event::Key(key) = event::read()? {
                // Ctrl+C to quit
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
                {
                    return Ok(());
                }

                if handle_input(app, key) {
                    return Ok(());
                }
            }
        }

        // Apply invalidation events, fetch results, and notices
        app.tick();

        if matches!(app.state, AppState::Quitting) {
            return Ok(());
        }
    }
}

/// Sign in from the command line and persist the token for the TUI.
async fn login_cli() -> Result<()> {
    use handraise::api::ApiClient;
    use handraise::auth::SessionEvents;
    use handraise::notify::Notifier;
    use std::io::Write;

    println!("\n=== Handraise Login ===\n");

    let mut config = Config::load().unwrap_or_default();

    let default_email = config.last_email.clone().unwrap_or_default();
    if default_email.is_empty() {
        print!("Email: ");
    } else {
        print!("Email [{}]: ", default_email);
    }
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    let email = {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            default_email
        } else {
            trimmed.to_string()
        }
    };

    let password = rpassword::prompt_password("Password: ")?;

    println!("\nAuthenticating...");

    let store = Arc::new(CredentialStore::keychain());
    let (notifier, _notices) = Notifier::channel();
    let api = ApiClient::new(
        config.backend_origin(),
        store,
        SessionEvents::new(),
        notifier,
    )?;

    api.login(&email, &password).await?;
    let me = api.fetch_me().await?;

    config.last_email = Some(email);
    if let Err(e) = config.save() {
        eprintln!("Warning: failed to save config: {}", e);
    }

    println!("Signed in as {} ({})\n", me.email, me.role.display_name());
    Ok(())
}
