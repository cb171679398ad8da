use crossterm::event::KeyEvent;

use crate::app::{App, View};

use super::action_queue::{Action, ActionTx};

mod confirm_cancel;
mod interrupt_dialog;
mod request_form;
mod schedule;
mod selection;

fn enqueue_action(action_tx: &ActionTx, action: Action) {
    let _ = action_tx.send(action);
}

pub(super) fn handle_view_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match app.current_view {
        View::Schedule => schedule::handle_schedule_key(key, app),
        View::RequestForm => request_form::handle_request_form_key(key, app, action_tx),
        View::SelectProgram | View::SelectInstrument | View::SelectInterruptProj
        | View::SelectRequest => selection::handle_selection_key(key, app),
        View::InterruptDialog => interrupt_dialog::handle_interrupt_dialog_key(key, app),
        View::ConfirmCancel => confirm_cancel::handle_confirm_cancel_key(key, app, action_tx),
    }
}
