use chrono::Days;
use crossterm::event::{KeyCode, KeyEvent};

use crate::app::{App, View};

pub(super) fn handle_schedule_key(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => {
            if let Some(date) = app.obs_date.checked_sub_days(Days::new(1)) {
                app.set_obs_date(date);
            }
        }
        KeyCode::Right | KeyCode::Char('l') => {
            if let Some(date) = app.obs_date.checked_add_days(Days::new(1)) {
                app.set_obs_date(date);
            }
        }
        KeyCode::Char('t') | KeyCode::Char('T') => {
            app.set_obs_date(chrono::Local::now().date_naive());
        }
        KeyCode::Enter | KeyCode::Tab => {
            app.navigate_to(View::RequestForm);
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use crossterm::event::KeyModifiers;
    use keck::domain::ObserverInfo;

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
    fn arrow_keys_move_the_observing_date() {
        let mut app = test_app();
        handle_schedule_key(press(KeyCode::Right), &mut app);
        assert_eq!(
            app.obs_date,
            NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()
        );
        handle_schedule_key(press(KeyCode::Left), &mut app);
        handle_schedule_key(press(KeyCode::Left), &mut app);
        assert_eq!(
            app.obs_date,
            NaiveDate::from_ymd_opt(2025, 5, 31).unwrap()
        );
    }

    #[test]
    fn date_change_bumps_schedule_generation() {
        let mut app = test_app();
        let generation = app.schedule_generation;
        handle_schedule_key(press(KeyCode::Right), &mut app);
        assert_eq!(app.schedule_generation, generation + 1);
    }

    #[test]
    fn enter_opens_the_request_form() {
        let mut app = test_app();
        handle_schedule_key(press(KeyCode::Enter), &mut app);
        assert_eq!(app.current_view, View::RequestForm);
    }
}
