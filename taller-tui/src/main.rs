mod app;
mod config;
mod runtime;
mod ui;

use std::io;
use std::sync::Mutex;

use anyhow::Result;
use app::App;
use config::TallerConfig;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use taller_core::{AdminGate, FileStore, Repository};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = TallerConfig::load()?;
    if !TallerConfig::config_path()?.exists() {
        // Write the defaults so the operator has a file to edit.
        config.save()?;
    }

    let data_dir = config.data_dir()?;
    std::fs::create_dir_all(&data_dir)?;
    init_logging(&config)?;

    let store = FileStore::new(&data_dir);
    let mut repo = Repository::new(store);
    let mut app = App::new(AdminGate::new(&config.admin_passphrase));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = runtime::run_app(&mut terminal, &mut app, &mut repo);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

/// Log to a file in the data directory. The terminal belongs to the kiosk
/// while the alternate screen is active, so nothing may print there.
fn init_logging(config: &TallerConfig) -> Result<()> {
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(config.log_path()?)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .init();
    Ok(())
}
