use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};
use ratatui::{backend::CrosstermBackend, Terminal};

use taller_core::{CollectionStore, Repository};

use crate::app::App;
use crate::ui;

use super::action_queue::{channel, Action};
use super::actions::run_action;
use super::views::handle_view_key;

pub fn run_app<S: CollectionStore>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    repo: &mut Repository<S>,
) -> Result<()> {
    let (action_tx, action_rx) = channel();

    // Initial load before the first frame.
    run_action(Action::LoadData, app, repo)?;

    loop {
        terminal.draw(|f| ui::render(f, app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                handle_view_key(key, app, &action_tx);
            }
        }

        // Expired notices apply their pending transition; notices cancelled
        // by navigation never get here.
        app.tick(Instant::now());

        while let Ok(action) = action_rx.try_recv() {
            run_action(action, app, repo)?;
        }

        if !app.running {
            break;
        }
    }

    Ok(())
}
