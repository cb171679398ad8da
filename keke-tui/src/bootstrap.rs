use keck::KeckClient;

use crate::app::App;

/// Populate the initial app state before the terminal takes over. Each fetch
/// failure is reported and skipped; the UI tolerates whatever is missing.
pub async fn initialize_app_state(app: &mut App, client: &KeckClient) {
    app.is_loading = true;

    match client.fetch_night_schedule(app.obs_date).await {
        Ok(schedule) => app.schedule = schedule,
        Err(e) => eprintln!("Warning: Could not load schedule: {}", e),
    }

    match client.fetch_instruments_too_status(app.obs_date).await {
        Ok(rows) => app.set_instrument_status(rows),
        Err(e) => eprintln!("Warning: Could not load instrument status: {}", e),
    }

    match client
        .fetch_too_programs(&app.semester, app.observer.id)
        .await
    {
        Ok(programs) => app.set_programs(programs),
        Err(e) => eprintln!("Warning: Could not load ToO programs: {}", e),
    }

    match client
        .fetch_too_requests(&app.semester, app.observer.id)
        .await
    {
        Ok(requests) => app.requests = requests,
        Err(e) => eprintln!("Warning: Could not load ToO requests: {}", e),
    }

    app.is_loading = false;
}
