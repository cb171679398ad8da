use chrono::{NaiveDate, NaiveTime};
use keck::domain::{
    InterruptQuery, InterruptType, ObserverInfo, Semester, TooAction, TooRequest,
};
use keck::DATE_FORMAT;

use super::state::{DraftField, DraftState};

pub const DEFAULT_DURATION: &str = "1:00:00";
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// The ToO request being built or edited. Pure state and validation; the
/// form view renders it and the runtime actions POST it.
///
/// A draft with no `tooid` has never been persisted and can only be saved as
/// a new draft; submit, cancel and the eligibility check all require the
/// server-assigned id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestDraft {
    pub tooid: Option<String>,
    pub submitterid: String,
    pub username: String,
    pub semester: String,
    pub piid: String,
    pub projcode: String,
    pub instrument: String,
    pub interrupttype: Option<InterruptType>,
    pub interruptproj: String,
    /// YYYY-MM-DD
    pub obsdate: String,
    /// HH:MM:SS
    pub starttime: String,
    /// HH:MM:SS
    pub duration: String,
    pub flextime: String,
    pub target: String,
    pub obslocation: String,
    pub pinotes: String,
    pub submitted: bool,
    pub cancelled: bool,
    dirty: bool,
}

impl RequestDraft {
    /// A fresh draft pre-filled with session defaults: current semester,
    /// the given date and time, and the observer's identity.
    pub fn new_for_session(
        observer: &ObserverInfo,
        semester: &Semester,
        date: NaiveDate,
        now: NaiveTime,
    ) -> Self {
        Self {
            submitterid: observer.id.to_string(),
            username: observer.username.clone(),
            piid: observer.id.to_string(),
            semester: semester.to_string(),
            obsdate: date.format(DATE_FORMAT).to_string(),
            starttime: now.format(TIME_FORMAT).to_string(),
            duration: DEFAULT_DURATION.to_string(),
            ..Self::default()
        }
    }

    /// An existing request re-mapped into the draft shape. Field casing has
    /// already been normalized by the API boundary.
    pub fn from_request(request: &TooRequest) -> Self {
        Self {
            tooid: request.tooid.clone(),
            submitterid: request.submitterid.clone(),
            username: request.username.clone(),
            semester: request.semester.clone(),
            piid: request.piid.clone(),
            projcode: request.projcode.clone(),
            instrument: request.instrument.clone(),
            interrupttype: Some(request.interrupttype),
            interruptproj: request.interruptproj.clone(),
            obsdate: request.obsdate.clone(),
            starttime: request.starttime.clone(),
            duration: request.duration.clone(),
            flextime: request.flextime.clone(),
            target: request.target.clone(),
            obslocation: request.obslocation.clone(),
            pinotes: request.pinotes.clone().unwrap_or_default(),
            submitted: request.action == TooAction::Submit,
            cancelled: false,
            dirty: false,
        }
    }

    pub fn state(&self) -> DraftState {
        if self.cancelled {
            DraftState::Cancelled
        } else if self.submitted {
            DraftState::Submitted
        } else if self.tooid.is_some() {
            DraftState::Saved
        } else if self.dirty {
            DraftState::Editing
        } else {
            DraftState::Empty
        }
    }

    /// Required-field labels still missing for save/submit: instrument,
    /// observation date, start time, duration, interrupted program and
    /// interrupt type.
    pub fn missing_required(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.instrument.is_empty() {
            missing.push("instrument");
        }
        if self.obsdate.is_empty() {
            missing.push("observation date");
        }
        if self.starttime.is_empty() {
            missing.push("start time");
        }
        if self.duration.is_empty() {
            missing.push("duration");
        }
        if self.interruptproj.is_empty() {
            missing.push("interrupted program");
        }
        if self.interrupttype.is_none() {
            missing.push("interrupt type");
        }
        missing
    }

    pub fn can_save(&self) -> bool {
        self.missing_required().is_empty() && !self.cancelled
    }

    pub fn can_submit(&self) -> bool {
        self.tooid.is_some() && self.can_save()
    }

    pub fn can_cancel(&self) -> bool {
        self.tooid.is_some() && !self.cancelled
    }

    pub fn can_validate(&self) -> bool {
        self.tooid.is_some()
    }

    /// Saving an already-persisted request is an edit; a fresh one is a draft.
    pub fn save_action(&self) -> TooAction {
        if self.tooid.is_some() {
            TooAction::Edit
        } else {
            TooAction::Draft
        }
    }

    pub fn save_payload(&self) -> TooRequest {
        self.to_request(self.save_action())
    }

    pub fn submit_payload(&self) -> TooRequest {
        self.to_request(TooAction::Submit)
    }

    fn to_request(&self, action: TooAction) -> TooRequest {
        TooRequest {
            submitterid: self.submitterid.clone(),
            username: self.username.clone(),
            action,
            tooid: self.tooid.clone(),
            semester: self.semester.clone(),
            piid: self.piid.clone(),
            projcode: self.projcode.clone(),
            instrument: self.instrument.clone(),
            obsdate: self.obsdate.clone(),
            starttime: self.starttime.clone(),
            duration: self.duration.clone(),
            target: self.target.clone(),
            flextime: self.flextime.clone(),
            obsdesignation: None,
            obslocation: self.obslocation.clone(),
            pinotes: if self.pinotes.is_empty() {
                None
            } else {
                Some(self.pinotes.clone())
            },
            interruptproj: self.interruptproj.clone(),
            interrupttype: self.interrupttype.unwrap_or_default(),
            skipsubmitwarnings: Some(1),
            instrconfigs: None,
        }
    }

    /// Parameters for the eligibility dry-run. Pure: does not touch the
    /// draft. None if the semester string does not parse.
    pub fn interrupt_query(&self, obsid: u32) -> Option<InterruptQuery> {
        let semester: Semester = self.semester.parse().ok()?;
        Some(InterruptQuery::new(
            &semester,
            &self.projcode,
            obsid,
            &self.instrument,
            &self.obsdate,
            &self.duration,
            &self.starttime,
        ))
    }

    pub fn set_projcode(&mut self, projcode: &str) {
        self.projcode = projcode.to_string();
        self.dirty = true;
    }

    pub fn set_instrument(&mut self, instrument: &str) {
        self.instrument = instrument.to_string();
        self.dirty = true;
    }

    pub fn set_interruptproj(&mut self, projcode: &str) {
        self.interruptproj = projcode.to_string();
        self.dirty = true;
    }

    pub fn cycle_interrupt_type(&mut self) {
        self.interrupttype = Some(match self.interrupttype {
            None => InterruptType::Institution,
            Some(InterruptType::Institution) => InterruptType::Partner,
            Some(InterruptType::Partner) => InterruptType::Institution,
        });
        self.dirty = true;
    }

    pub fn text_field(&self, field: DraftField) -> &str {
        match field {
            DraftField::ObsDate => &self.obsdate,
            DraftField::StartTime => &self.starttime,
            DraftField::Duration => &self.duration,
            DraftField::FlexTime => &self.flextime,
            DraftField::Target => &self.target,
            DraftField::ObsLocation => &self.obslocation,
            DraftField::Notes => &self.pinotes,
            _ => "",
        }
    }

    pub fn set_text_field(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::ObsDate => self.obsdate = value,
            DraftField::StartTime => self.starttime = value,
            DraftField::Duration => self.duration = value,
            DraftField::FlexTime => self.flextime = value,
            DraftField::Target => self.target = value,
            DraftField::ObsLocation => self.obslocation = value,
            DraftField::Notes => self.pinotes = value,
            _ => return,
        }
        self.dirty = true;
    }

    pub fn interrupt_type_label(&self) -> &'static str {
        match self.interrupttype {
            None => "",
            Some(InterruptType::Institution) => "institution",
            Some(InterruptType::Partner) => "partner",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn observer() -> ObserverInfo {
        ObserverInfo {
            id: 123,
            username: "pobserver".to_string(),
            ..Default::default()
        }
    }

    fn complete_draft() -> RequestDraft {
        let semester: Semester = "2025A".parse().unwrap();
        let mut draft = RequestDraft::new_for_session(
            &observer(),
            &semester,
            NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            NaiveTime::from_hms_opt(22, 0, 0).unwrap(),
        );
        draft.set_projcode("C123");
        draft.set_instrument("NIRES");
        draft.set_interruptproj("U045");
        draft.cycle_interrupt_type();
        draft
    }

    #[test]
    fn session_defaults() {
        let semester: Semester = "2025A".parse().unwrap();
        let draft = RequestDraft::new_for_session(
            &observer(),
            &semester,
            NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            NaiveTime::from_hms_opt(22, 0, 0).unwrap(),
        );
        assert_eq!(draft.duration, "1:00:00");
        assert_eq!(draft.obsdate, "2025-06-01");
        assert_eq!(draft.starttime, "22:00:00");
        assert_eq!(draft.submitterid, "123");
        assert_eq!(draft.username, "pobserver");
        assert_eq!(draft.state(), DraftState::Empty);
    }

    #[test]
    fn save_requires_every_required_field() {
        let draft = complete_draft();
        assert!(draft.can_save());

        let mut missing_instrument = draft.clone();
        missing_instrument.instrument.clear();
        assert!(!missing_instrument.can_save());

        let mut missing_date = draft.clone();
        missing_date.obsdate.clear();
        assert!(!missing_date.can_save());

        let mut missing_start = draft.clone();
        missing_start.starttime.clear();
        assert!(!missing_start.can_save());

        let mut missing_duration = draft.clone();
        missing_duration.duration.clear();
        assert!(!missing_duration.can_save());

        let mut missing_interrupt = draft.clone();
        missing_interrupt.interruptproj.clear();
        assert!(!missing_interrupt.can_save());

        let mut missing_type = draft.clone();
        missing_type.interrupttype = None;
        assert!(!missing_type.can_save());
    }

    #[test]
    fn submit_cancel_validate_require_tooid() {
        let mut draft = complete_draft();
        assert!(draft.can_save());
        assert!(!draft.can_submit());
        assert!(!draft.can_cancel());
        assert!(!draft.can_validate());

        draft.tooid = Some("T99".to_string());
        assert!(draft.can_submit());
        assert!(draft.can_cancel());
        assert!(draft.can_validate());
    }

    #[test]
    fn unsaved_draft_saves_with_draft_action() {
        let draft = complete_draft();
        let payload = draft.save_payload();
        assert_eq!(payload.action, TooAction::Draft);
        assert_eq!(payload.skipsubmitwarnings, Some(1));
        assert_eq!(payload.tooid, None);
    }

    #[test]
    fn persisted_draft_saves_with_edit_action() {
        let mut draft = complete_draft();
        draft.tooid = Some("T99".to_string());
        let payload = draft.save_payload();
        assert_eq!(payload.action, TooAction::Edit);
        assert_eq!(payload.tooid.as_deref(), Some("T99"));
    }

    #[test]
    fn state_follows_lifecycle() {
        let mut draft = complete_draft();
        assert_eq!(draft.state(), DraftState::Editing);

        draft.tooid = Some("T99".to_string());
        assert_eq!(draft.state(), DraftState::Saved);

        draft.submitted = true;
        assert_eq!(draft.state(), DraftState::Submitted);

        draft.cancelled = true;
        assert_eq!(draft.state(), DraftState::Cancelled);
        assert!(!draft.can_cancel());
    }

    #[test]
    fn loaded_request_round_trips() {
        let mut draft = complete_draft();
        draft.tooid = Some("T99".to_string());
        draft.set_text_field(DraftField::Notes, "bright transient".to_string());

        let reloaded = RequestDraft::from_request(&draft.save_payload());
        assert_eq!(reloaded.tooid.as_deref(), Some("T99"));
        assert_eq!(reloaded.projcode, draft.projcode);
        assert_eq!(reloaded.starttime, draft.starttime);
        assert_eq!(reloaded.pinotes, "bright transient");
        assert_eq!(reloaded.state(), DraftState::Saved);
    }

    #[test]
    fn interrupt_query_is_a_pure_side_query() {
        let draft = complete_draft();
        let before = draft.clone();
        let first = draft.interrupt_query(123).unwrap();
        let second = draft.interrupt_query(123).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.semid, "2025A_C123");
        assert_eq!(draft, before);
    }
}
