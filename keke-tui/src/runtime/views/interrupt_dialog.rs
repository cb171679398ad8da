use crossterm::event::{KeyCode, KeyEvent};

use crate::app::{App, View};

pub(super) fn handle_interrupt_dialog_key(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.navigate_to(View::RequestForm);
        }
        _ => {}
    }
}
