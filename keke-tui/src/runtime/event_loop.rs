use anyhow::Result;
use chrono::NaiveDate;
use crossterm::event::{self, Event};
use keck::domain::Semester;
use keck::KeckClient;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

use crate::app::App;
use crate::ui;

use super::action_queue::{channel, Action};
use super::actions::run_action;
use super::views::handle_view_key;

/// Last-seen values of the reactive triggers. Each loop iteration compares
/// them against the app state and enqueues the matching fetches.
struct Triggers {
    obs_date: NaiveDate,
    semester: Semester,
    saved_counter: u64,
}

pub async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    client: &KeckClient,
) -> Result<()> {
    let (action_tx, mut action_rx) = channel();

    let mut triggers = Triggers {
        obs_date: app.obs_date,
        semester: app.semester,
        saved_counter: app.saved_counter,
    };

    loop {
        terminal.draw(|f| ui::render(f, app))?;

        if app.is_loading {
            app.throbber_state.calc_next();
        }

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                handle_view_key(key, app, &action_tx);
            }
        }

        if triggers.obs_date != app.obs_date {
            triggers.obs_date = app.obs_date;
            let _ = action_tx.send(Action::LoadSchedule);
        }
        if triggers.semester != app.semester {
            triggers.semester = app.semester;
            let _ = action_tx.send(Action::LoadCatalog);
            let _ = action_tx.send(Action::LoadRequests);
        }
        if triggers.saved_counter != app.saved_counter {
            triggers.saved_counter = app.saved_counter;
            let _ = action_tx.send(Action::LoadRequests);
        }

        while let Ok(action) = action_rx.try_recv() {
            run_action(action, app, client).await?;
        }

        if !app.running {
            break;
        }
    }

    Ok(())
}
