use crossterm::event::{KeyCode, KeyEvent};

use crate::app::{App, View};

use super::super::action_queue::{Action, ActionTx};
use super::enqueue_action;

pub(super) fn handle_confirm_cancel_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
            enqueue_action(action_tx, Action::CancelRequest);
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc | KeyCode::Char('q') => {
            app.navigate_to(View::RequestForm);
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use crossterm::event::KeyModifiers;
    use keck::domain::ObserverInfo;

    use super::super::super::action_queue::channel;

    fn test_app() -> App {
        let observer = ObserverInfo {
            id: 123,
            ..Default::default()
        };
        let mut app = App::new(observer, NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
        app.draft.tooid = Some("T99".to_string());
        app.current_view = View::ConfirmCancel;
        app
    }

    #[test]
    fn confirming_queues_the_cancellation() {
        let mut app = test_app();
        let (tx, mut rx) = channel();
        handle_confirm_cancel_key(
            KeyEvent::new(KeyCode::Char('y'), KeyModifiers::NONE),
            &mut app,
            &tx,
        );
        assert_eq!(rx.try_recv().ok(), Some(Action::CancelRequest));
    }

    #[test]
    fn declining_returns_to_the_form() {
        let mut app = test_app();
        let (tx, mut rx) = channel();
        handle_confirm_cancel_key(
            KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE),
            &mut app,
            &tx,
        );
        assert!(rx.try_recv().is_err());
        assert_eq!(app.current_view, View::RequestForm);
    }
}
