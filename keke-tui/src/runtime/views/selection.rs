use crossterm::event::{KeyCode, KeyEvent};

use crate::app::{App, View};

/// Shared key handling for the four picker views. The option list depends on
/// the view; Enter applies the highlighted entry and returns to the form.
pub(super) fn handle_selection_key(key: KeyEvent, app: &mut App) {
    let len = option_count(app);
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => app.list_select_next(len),
        KeyCode::Up | KeyCode::Char('k') => app.list_select_previous(len),
        KeyCode::Enter => {
            apply_selection(app);
            app.navigate_to(View::RequestForm);
        }
        KeyCode::Esc | KeyCode::Char('q') => app.navigate_to(View::RequestForm),
        _ => {}
    }
}

fn option_count(app: &App) -> usize {
    match app.current_view {
        View::SelectProgram => app.programs.len(),
        View::SelectInstrument => app.instrument_options().len(),
        View::SelectInterruptProj => app.interruptable_programs().len(),
        View::SelectRequest => app.requests.len(),
        _ => 0,
    }
}

fn apply_selection(app: &mut App) {
    let index = app.list_index;
    match app.current_view {
        View::SelectProgram => {
            if let Some(code) = app.programs.get(index).map(|p| p.proj_code.clone()) {
                app.select_program(&code);
            }
        }
        View::SelectInstrument => {
            if let Some(instrument) = app.instrument_options().get(index) {
                app.draft.set_instrument(instrument);
            }
        }
        View::SelectInterruptProj => {
            if let Some(code) = app.interruptable_programs().get(index) {
                app.draft.set_interruptproj(code);
            }
        }
        View::SelectRequest => app.load_request(index),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use crossterm::event::KeyModifiers;
    use keck::domain::{ObserverInfo, TooProgram, TooRequest};

    fn test_app() -> App {
        let observer = ObserverInfo {
            id: 123,
            ..Default::default()
        };
        App::new(observer, NaiveDate::from_ymd_opt(2025, 6, 1).unwrap())
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn picking_an_instrument_writes_into_the_draft() {
        let mut app = test_app();
        app.set_programs(vec![TooProgram {
            proj_code: "C123".to_string(),
            instrument_list: "NIRES,KCWI".to_string(),
            ..Default::default()
        }]);
        app.navigate_to(View::SelectInstrument);
        handle_selection_key(press(KeyCode::Down), &mut app);
        handle_selection_key(press(KeyCode::Enter), &mut app);
        assert_eq!(app.draft.instrument, "KCWI");
        assert_eq!(app.current_view, View::RequestForm);
    }

    #[test]
    fn selection_wraps_around_the_list() {
        let mut app = test_app();
        app.set_programs(vec![
            TooProgram {
                proj_code: "C123".to_string(),
                ..Default::default()
            },
            TooProgram {
                proj_code: "U045".to_string(),
                ..Default::default()
            },
        ]);
        app.navigate_to(View::SelectProgram);
        handle_selection_key(press(KeyCode::Up), &mut app);
        assert_eq!(app.list_index, 1);
        handle_selection_key(press(KeyCode::Down), &mut app);
        assert_eq!(app.list_index, 0);
    }

    #[test]
    fn picking_a_request_loads_it_into_the_editor() {
        let mut app = test_app();
        app.requests = vec![TooRequest {
            tooid: Some("T99".to_string()),
            projcode: "C123".to_string(),
            ..Default::default()
        }];
        app.navigate_to(View::SelectRequest);
        handle_selection_key(press(KeyCode::Enter), &mut app);
        assert_eq!(app.draft.tooid.as_deref(), Some("T99"));
    }

    #[test]
    fn escape_returns_to_the_form_without_applying() {
        let mut app = test_app();
        app.set_programs(vec![TooProgram {
            proj_code: "C123".to_string(),
            instrument_list: "NIRES".to_string(),
            ..Default::default()
        }]);
        app.draft.set_instrument("KCWI");
        app.navigate_to(View::SelectInstrument);
        handle_selection_key(press(KeyCode::Esc), &mut app);
        assert_eq!(app.draft.instrument, "KCWI");
        assert_eq!(app.current_view, View::RequestForm);
    }
}
