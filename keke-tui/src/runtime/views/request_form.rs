use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, DraftField, View};

use super::super::action_queue::{Action, ActionTx};
use super::enqueue_action;

pub(super) fn handle_request_form_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    // Inline text editing takes priority over form navigation.
    if app.field_input.is_some() {
        match key.code {
            KeyCode::Enter => app.commit_field_edit(),
            KeyCode::Esc => app.cancel_field_edit(),
            KeyCode::Backspace => {
                if let Some(input) = app.field_input.as_mut() {
                    input.backspace();
                }
            }
            KeyCode::Left => {
                if let Some(input) = app.field_input.as_mut() {
                    input.move_left();
                }
            }
            KeyCode::Right => {
                if let Some(input) = app.field_input.as_mut() {
                    input.move_right();
                }
            }
            KeyCode::Home => {
                if let Some(input) = app.field_input.as_mut() {
                    input.home();
                }
            }
            KeyCode::End => {
                if let Some(input) = app.field_input.as_mut() {
                    input.end();
                }
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                if let Some(input) = app.field_input.as_mut() {
                    input.insert(c);
                }
            }
            _ => {}
        }
        return;
    }

    match key.code {
        // Ctrl+S: save as draft (edit once persisted)
        KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            if app.draft.can_save() {
                enqueue_action(action_tx, Action::SaveDraft);
            } else {
                app.set_status(format!(
                    "Cannot save: missing {}",
                    app.draft.missing_required().join(", ")
                ));
            }
        }
        // Ctrl+U: submit, refused until the request has been saved
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            if app.draft.can_submit() {
                enqueue_action(action_tx, Action::SubmitRequest);
            } else if app.draft.tooid.is_none() {
                app.set_status("Cannot submit: save the request as a draft first".to_string());
            } else {
                app.set_status(format!(
                    "Cannot submit: missing {}",
                    app.draft.missing_required().join(", ")
                ));
            }
        }
        // V: validate, opens the interrupt dialog and fires the dry-run
        KeyCode::Char('v') | KeyCode::Char('V') => {
            if app.draft.can_validate() {
                app.eligibility.result = None;
                app.eligibility.pending = true;
                app.navigate_to(View::InterruptDialog);
                enqueue_action(action_tx, Action::CheckInterrupt);
            } else {
                app.set_status("Cannot validate: save the request as a draft first".to_string());
            }
        }
        // C: cancel the persisted request (with confirmation)
        KeyCode::Char('c') | KeyCode::Char('C') => {
            if app.draft.can_cancel() {
                app.navigate_to(View::ConfirmCancel);
            } else {
                app.set_status("Cannot cancel: request has not been saved".to_string());
            }
        }
        // R: pick an existing request to edit
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.navigate_to(View::SelectRequest);
        }
        // N: start over with a fresh draft
        KeyCode::Char('n') | KeyCode::Char('N') => {
            app.reset_draft();
            app.set_status("Started a new draft".to_string());
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => app.focus_next_field(),
        KeyCode::Up | KeyCode::Char('k') | KeyCode::BackTab => app.focus_prev_field(),
        KeyCode::Enter => match app.focused_field {
            DraftField::Program => {
                if app.programs.is_empty() {
                    app.set_status("No ToO programs available this semester".to_string());
                } else {
                    app.navigate_to(View::SelectProgram);
                }
            }
            DraftField::Instrument => {
                if app.instrument_options().is_empty() {
                    app.set_status("Select a program first".to_string());
                } else {
                    app.navigate_to(View::SelectInstrument);
                }
            }
            DraftField::InterruptProj => {
                if app.interruptable_programs().is_empty() {
                    app.set_status("No scheduled programs for this date".to_string());
                } else {
                    app.navigate_to(View::SelectInterruptProj);
                }
            }
            DraftField::InterruptType => app.draft.cycle_interrupt_type(),
            _ => app.begin_field_edit(),
        },
        KeyCode::Esc => app.navigate_to(View::Schedule),
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        _ => {}
    }
}
