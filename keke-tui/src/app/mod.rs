use chrono::NaiveDate;
use keck::domain::{
    InstrumentStatus, ObserverInfo, ScheduleItem, Semester, TooProgram, TooRequest,
};

mod draft;
mod state;

pub use draft::RequestDraft;
pub use state::{DraftField, DraftState, EligibilityState, TextInput, View};

pub struct App {
    pub running: bool,
    pub current_view: View,
    pub status_message: Option<String>,

    pub observer: ObserverInfo,
    pub obs_date: NaiveDate,
    pub semester: Semester,

    // Schedule panel
    pub schedule: Vec<ScheduleItem>,
    pub instrument_status: Vec<(String, InstrumentStatus)>,

    // ToO catalog
    pub programs: Vec<TooProgram>,
    pub selected_program: Option<String>,

    // Persisted requests for the semester
    pub requests: Vec<TooRequest>,

    // Request editor
    pub draft: RequestDraft,
    pub focused_field: DraftField,
    pub field_input: Option<TextInput>,

    // Interrupt eligibility dialog
    pub eligibility: EligibilityState,

    // Reactive re-fetch triggers. The event loop compares these against its
    // last-seen values and enqueues the matching fetches; the fetch handlers
    // snapshot the generation and drop responses that arrive after the
    // trigger has moved on.
    pub saved_counter: u64,
    pub schedule_generation: u64,
    pub catalog_generation: u64,

    // Transient cursor for the selection views
    pub list_index: usize,

    pub is_loading: bool,
    pub throbber_state: throbber_widgets_tui::ThrobberState,
}

impl App {
    pub fn new(observer: ObserverInfo, obs_date: NaiveDate) -> Self {
        let semester = Semester::from_date(obs_date);
        let now = chrono::Local::now().time();
        let draft = RequestDraft::new_for_session(&observer, &semester, obs_date, now);
        Self {
            running: true,
            current_view: View::Schedule,
            status_message: None,
            observer,
            obs_date,
            semester,
            schedule: Vec::new(),
            instrument_status: Vec::new(),
            programs: Vec::new(),
            selected_program: None,
            requests: Vec::new(),
            draft,
            focused_field: DraftField::Program,
            field_input: None,
            eligibility: EligibilityState::default(),
            saved_counter: 0,
            schedule_generation: 0,
            catalog_generation: 0,
            list_index: 0,
            is_loading: false,
            throbber_state: throbber_widgets_tui::ThrobberState::default(),
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    pub fn navigate_to(&mut self, view: View) {
        self.current_view = view;
        self.clear_status();
        self.field_input = None;

        match view {
            View::SelectProgram => {
                self.list_index = self
                    .selected_program
                    .as_ref()
                    .and_then(|code| self.programs.iter().position(|p| &p.proj_code == code))
                    .unwrap_or(0);
            }
            View::SelectInstrument => {
                self.list_index = self
                    .instrument_options()
                    .iter()
                    .position(|i| i == &self.draft.instrument)
                    .unwrap_or(0);
            }
            View::SelectInterruptProj | View::SelectRequest => {
                self.list_index = 0;
            }
            _ => {}
        }
    }

    /// Shift the observing date. The semester follows the date; crossing a
    /// semester boundary also invalidates the catalog.
    pub fn set_obs_date(&mut self, date: NaiveDate) {
        if date == self.obs_date {
            return;
        }
        self.obs_date = date;
        self.schedule_generation += 1;
        let semester = Semester::from_date(date);
        if semester != self.semester {
            self.semester = semester;
            self.catalog_generation += 1;
        }
    }

    /// Replace the catalog. The first entry becomes active unless the current
    /// selection still exists in the new list.
    pub fn set_programs(&mut self, programs: Vec<TooProgram>) {
        self.programs = programs;
        let still_there = self
            .selected_program
            .as_ref()
            .map(|code| self.programs.iter().any(|p| &p.proj_code == code))
            .unwrap_or(false);
        if !still_there {
            self.selected_program = self.programs.first().map(|p| p.proj_code.clone());
        }
    }

    /// Drop the catalog entirely (fetch failure: no retry, no partial state).
    pub fn clear_programs(&mut self) {
        self.programs.clear();
        self.selected_program = None;
    }

    pub fn active_program(&self) -> Option<&TooProgram> {
        let code = self.selected_program.as_ref()?;
        self.programs.iter().find(|p| &p.proj_code == code)
    }

    /// Selecting a catalog entry rebuilds the projcode and hour-budget
    /// display only; previously chosen instrument/interrupt values stay.
    pub fn select_program(&mut self, projcode: &str) {
        self.selected_program = Some(projcode.to_string());
        self.draft.set_projcode(projcode);
    }

    /// Instruments approved for ToO use on the active program. Empty when the
    /// catalog is empty, which disables the instrument picker.
    pub fn instrument_options(&self) -> Vec<String> {
        self.active_program()
            .map(|p| p.instruments().iter().map(|s| s.to_string()).collect())
            .unwrap_or_default()
    }

    /// Project codes present in the night's schedule, deduplicated in
    /// schedule order. The interrupted program must be one of these.
    pub fn interruptable_programs(&self) -> Vec<String> {
        let mut codes: Vec<String> = Vec::new();
        for item in &self.schedule {
            if !item.proj_code.is_empty() && !codes.contains(&item.proj_code) {
                codes.push(item.proj_code.clone());
            }
        }
        codes
    }

    pub fn set_instrument_status(&mut self, mut rows: Vec<(String, InstrumentStatus)>) {
        sort_too_ready_first(&mut rows);
        self.instrument_status = rows;
    }

    /// Throw away the current draft and start a fresh one with session
    /// defaults.
    pub fn reset_draft(&mut self) {
        let now = chrono::Local::now().time();
        self.draft =
            RequestDraft::new_for_session(&self.observer, &self.semester, self.obs_date, now);
        if let Some(code) = &self.selected_program {
            self.draft.projcode = code.clone();
        }
        self.focused_field = DraftField::Program;
        self.field_input = None;
        self.eligibility = EligibilityState::default();
    }

    /// Load a persisted request into the editor, replacing the draft.
    pub fn load_request(&mut self, index: usize) {
        let Some(request) = self.requests.get(index) else {
            return;
        };
        self.draft = RequestDraft::from_request(request);
        if self
            .programs
            .iter()
            .any(|p| p.proj_code == request.projcode)
        {
            self.selected_program = Some(request.projcode.clone());
        }
        self.focused_field = DraftField::Program;
        self.field_input = None;
        self.eligibility = EligibilityState::default();
    }

    pub fn focus_next_field(&mut self) {
        self.focused_field = self.focused_field.next();
    }

    pub fn focus_prev_field(&mut self) {
        self.focused_field = self.focused_field.prev();
    }

    pub fn begin_field_edit(&mut self) {
        if self.focused_field.is_text() {
            self.field_input = Some(TextInput::from_str(
                self.draft.text_field(self.focused_field),
            ));
        }
    }

    pub fn commit_field_edit(&mut self) {
        if let Some(input) = self.field_input.take() {
            self.draft.set_text_field(self.focused_field, input.value);
        }
    }

    pub fn cancel_field_edit(&mut self) {
        self.field_input = None;
    }

    pub fn list_select_next(&mut self, len: usize) {
        if len > 0 {
            self.list_index = (self.list_index + 1) % len;
        }
    }

    pub fn list_select_previous(&mut self, len: usize) {
        if len > 0 {
            self.list_index = (self.list_index + len - 1) % len;
        }
    }
}

/// Readiness rows sort ToO-ready instruments first; the order among equal
/// rows is preserved.
pub fn sort_too_ready_first(rows: &mut [(String, InstrumentStatus)]) {
    rows.sort_by_key(|(_, status)| !status.is_too_ready());
}

#[cfg(test)]
mod tests {
    use super::*;
    use keck::domain::TooAction;

    fn observer() -> ObserverInfo {
        ObserverInfo {
            id: 123,
            username: "pobserver".to_string(),
            ..Default::default()
        }
    }

    fn test_app() -> App {
        App::new(observer(), NaiveDate::from_ymd_opt(2025, 6, 1).unwrap())
    }

    fn program(code: &str, instruments: &str) -> TooProgram {
        TooProgram {
            proj_code: code.to_string(),
            instrument_list: instruments.to_string(),
            hours_remain_institution: 5.0,
            ..Default::default()
        }
    }

    fn status(instrument: &str, ready: bool) -> (String, InstrumentStatus) {
        (
            instrument.to_string(),
            InstrumentStatus {
                instrument: Some(instrument.to_string()),
                too_ready: Some(ready),
                ..Default::default()
            },
        )
    }

    #[test]
    fn catalog_selects_first_entry_by_default() {
        let mut app = test_app();
        app.set_programs(vec![program("C123", "NIRES,KCWI"), program("U045", "LRIS")]);
        assert_eq!(app.selected_program.as_deref(), Some("C123"));
        assert_eq!(app.instrument_options(), vec!["NIRES", "KCWI"]);
    }

    #[test]
    fn catalog_refresh_keeps_existing_selection() {
        let mut app = test_app();
        app.set_programs(vec![program("C123", "NIRES"), program("U045", "LRIS")]);
        app.select_program("U045");
        app.set_programs(vec![program("C123", "NIRES"), program("U045", "LRIS")]);
        assert_eq!(app.selected_program.as_deref(), Some("U045"));
    }

    #[test]
    fn changing_program_keeps_instrument_and_interrupt_choices() {
        let mut app = test_app();
        app.set_programs(vec![program("C123", "NIRES,KCWI"), program("U045", "LRIS")]);
        app.draft.set_instrument("NIRES");
        app.draft.set_interruptproj("N012");
        app.select_program("U045");
        assert_eq!(app.draft.projcode, "U045");
        assert_eq!(app.draft.instrument, "NIRES");
        assert_eq!(app.draft.interruptproj, "N012");
    }

    #[test]
    fn empty_catalog_disables_instrument_picker() {
        let mut app = test_app();
        app.clear_programs();
        assert!(app.instrument_options().is_empty());
    }

    #[test]
    fn too_ready_rows_sort_first_and_stay_stable() {
        let mut rows = vec![
            status("DEIMOS", false),
            status("NIRES", true),
            status("ESI", false),
            status("KCWI", true),
        ];
        sort_too_ready_first(&mut rows);
        let order: Vec<&str> = rows.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(order, vec!["NIRES", "KCWI", "DEIMOS", "ESI"]);
    }

    #[test]
    fn interruptable_programs_come_from_schedule() {
        let mut app = test_app();
        app.schedule = vec![
            ScheduleItem {
                proj_code: "U045".to_string(),
                ..Default::default()
            },
            ScheduleItem {
                proj_code: "N012".to_string(),
                ..Default::default()
            },
            ScheduleItem {
                proj_code: "U045".to_string(),
                ..Default::default()
            },
        ];
        assert_eq!(app.interruptable_programs(), vec!["U045", "N012"]);
    }

    #[test]
    fn crossing_semester_boundary_invalidates_catalog() {
        let mut app = test_app();
        let schedule_gen = app.schedule_generation;
        let catalog_gen = app.catalog_generation;

        app.set_obs_date(NaiveDate::from_ymd_opt(2025, 6, 2).unwrap());
        assert_eq!(app.schedule_generation, schedule_gen + 1);
        assert_eq!(app.catalog_generation, catalog_gen);

        app.set_obs_date(NaiveDate::from_ymd_opt(2025, 8, 2).unwrap());
        assert_eq!(app.semester.to_string(), "2025B");
        assert_eq!(app.catalog_generation, catalog_gen + 1);
    }

    #[test]
    fn loading_a_request_replaces_the_draft() {
        let mut app = test_app();
        app.requests = vec![TooRequest {
            tooid: Some("T99".to_string()),
            projcode: "C123".to_string(),
            instrument: "NIRES".to_string(),
            obsdate: "2025-06-01".to_string(),
            starttime: "22:00:00".to_string(),
            duration: "1:00:00".to_string(),
            interruptproj: "U045".to_string(),
            action: TooAction::Draft,
            ..Default::default()
        }];
        app.load_request(0);
        assert_eq!(app.draft.state(), DraftState::Saved);
        assert!(app.draft.can_submit());
    }

    #[test]
    fn field_edit_commits_into_draft() {
        let mut app = test_app();
        app.focused_field = DraftField::Target;
        app.begin_field_edit();
        for c in "SN 2025xy".chars() {
            app.field_input.as_mut().unwrap().insert(c);
        }
        app.commit_field_edit();
        assert_eq!(app.draft.target, "SN 2025xy");
        assert!(app.field_input.is_none());
    }
}
