use anyhow::Result;
use keck::KeckClient;

use crate::app::{App, View};

use super::action_queue::Action;

/// Fixed reason sent with every cancellation POST.
pub(crate) const CANCEL_REASON: &str = "Cancelled by observer via ToO request tool";

pub(super) async fn run_action(action: Action, app: &mut App, client: &KeckClient) -> Result<()> {
    match action {
        Action::LoadSchedule => load_schedule(app, client).await,
        Action::LoadCatalog => load_catalog(app, client).await,
        Action::LoadRequests => load_requests(app, client).await,
        Action::SaveDraft => save_draft(app, client).await,
        Action::SubmitRequest => submit_request(app, client).await,
        Action::CancelRequest => cancel_request(app, client).await,
        Action::CheckInterrupt => check_interrupt(app, client).await,
    }
    Ok(())
}

/// Fetch both telescopes' schedules plus instrument readiness for the
/// selected date. If the date changed while a fetch was in flight the stale
/// response is dropped instead of overwriting newer state.
async fn load_schedule(app: &mut App, client: &KeckClient) {
    let generation = app.schedule_generation;
    let date = app.obs_date;

    match client.fetch_night_schedule(date).await {
        Ok(schedule) => {
            if generation == app.schedule_generation {
                app.schedule = schedule;
            }
        }
        Err(e) => {
            app.set_status(format!("Failed to fetch schedule: {}", e));
        }
    }

    match client.fetch_instruments_too_status(date).await {
        Ok(rows) => {
            if generation == app.schedule_generation {
                app.set_instrument_status(rows);
            }
        }
        Err(e) => {
            app.set_status(format!("Failed to fetch instrument status: {}", e));
        }
    }
}

/// Refresh the ToO catalog for the current semester + observer. On failure
/// the catalog is left empty; dependent pickers disable themselves.
async fn load_catalog(app: &mut App, client: &KeckClient) {
    let generation = app.catalog_generation;
    let semester = app.semester;

    match client.fetch_too_programs(&semester, app.observer.id).await {
        Ok(programs) => {
            if generation == app.catalog_generation {
                app.set_programs(programs);
            }
        }
        Err(e) => {
            app.clear_programs();
            app.set_status(format!("Failed to fetch ToO programs: {}", e));
        }
    }
}

async fn load_requests(app: &mut App, client: &KeckClient) {
    let generation = app.catalog_generation;
    let semester = app.semester;

    match client.fetch_too_requests(&semester, app.observer.id).await {
        Ok(requests) => {
            if generation == app.catalog_generation {
                app.requests = requests;
            }
        }
        Err(e) => {
            app.set_status(format!("Failed to fetch ToO requests: {}", e));
        }
    }
}

/// POST the draft with `action=draft` (or `edit` once persisted). Success
/// bumps the saved counter, which triggers the request-list refresh; failure
/// leaves the draft untouched so the observer can retry.
async fn save_draft(app: &mut App, client: &KeckClient) {
    if !app.draft.can_save() {
        app.set_status(format!(
            "Cannot save: missing {}",
            app.draft.missing_required().join(", ")
        ));
        return;
    }

    let payload = app.draft.save_payload();
    match client.submit_too_request(&payload).await {
        Ok(()) => {
            app.saved_counter += 1;
            app.set_status("Request saved".to_string());
        }
        Err(e) => {
            app.set_status(format!("Save failed: {}", e));
        }
    }
}

/// POST the draft with `action=submit`. Only reachable once the request has
/// a server-assigned id.
async fn submit_request(app: &mut App, client: &KeckClient) {
    if !app.draft.can_submit() {
        app.set_status("Cannot submit: save the request as a draft first".to_string());
        return;
    }

    let payload = app.draft.submit_payload();
    match client.submit_too_request(&payload).await {
        Ok(()) => {
            app.draft.submitted = true;
            app.saved_counter += 1;
            app.set_status("Request submitted".to_string());
        }
        Err(e) => {
            app.set_status(format!("Submit failed: {}", e));
        }
    }
}

/// Cancel the persisted request. The request list is NOT pruned here; the
/// next refresh reflects whatever the server did.
async fn cancel_request(app: &mut App, client: &KeckClient) {
    let Some(tooid) = app.draft.tooid.clone() else {
        app.set_status("Cannot cancel: request has not been saved".to_string());
        app.navigate_to(View::RequestForm);
        return;
    };

    match client.submit_too_cancel(&tooid, CANCEL_REASON).await {
        Ok(()) => {
            app.draft.cancelled = true;
            app.set_status(format!("Request {} cancelled", tooid));
        }
        Err(e) => {
            app.set_status(format!("Cancel failed: {}", e));
        }
    }
    app.navigate_to(View::RequestForm);
}

/// Dry-run eligibility query for the current draft. Replaces the previous
/// result wholesale; never mutates the draft.
async fn check_interrupt(app: &mut App, client: &KeckClient) {
    let Some(query) = app.draft.interrupt_query(app.observer.id) else {
        app.eligibility.pending = false;
        app.set_status(format!("Invalid semester: {:?}", app.draft.semester));
        return;
    };

    match client.fetch_can_interrupt(&query).await {
        Ok(result) => {
            app.eligibility.result = Some(result);
            app.eligibility.pending = false;
        }
        Err(e) => {
            app.eligibility.pending = false;
            app.eligibility.result = None;
            app.set_status(format!("Eligibility check failed: {}", e));
        }
    }
}
