use serde::Deserialize;

use super::Semester;

/// Query parameters for `GET /too/getTooCanInterrupt`. The server keys the
/// check on `semid`, which is the semester and project code joined with an
/// underscore (`2025A_C123`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterruptQuery {
    pub semid: String,
    pub obsid: String,
    pub instr: String,
    pub date: String,
    pub duration: String,
    pub starttime: String,
}

impl InterruptQuery {
    pub fn new(
        semester: &Semester,
        projcode: &str,
        obsid: u32,
        instr: &str,
        date: &str,
        duration: &str,
        starttime: &str,
    ) -> Self {
        Self {
            semid: format!("{}_{}", semester, projcode),
            obsid: obsid.to_string(),
            instr: instr.to_string(),
            date: date.to_string(),
            duration: duration.to_string(),
            starttime: starttime.to_string(),
        }
    }

    pub fn as_params(&self) -> [(&'static str, &str); 6] {
        [
            ("semid", &self.semid),
            ("obsid", &self.obsid),
            ("instr", &self.instr),
            ("date", &self.date),
            ("duration", &self.duration),
            ("starttime", &self.starttime),
        ]
    }
}

/// The server's verdict on whether a ToO may interrupt the night's schedule.
/// Ephemeral: replaced wholesale on every check, never persisted.
#[derive(Debug, Clone, Deserialize)]
pub struct InterruptCheck {
    #[serde(rename = "checkTimeHST", default)]
    pub check_time_hst: String,
    #[serde(rename = "InstrReadyWarn", default)]
    pub instr_ready_warn: bool,
    #[serde(rename = "InstrState", default)]
    pub instr_state: String,
    // "TelReayWarn" is the server's spelling
    #[serde(rename = "TelReayWarn", default)]
    pub tel_ready_warn: bool,
    #[serde(rename = "TelState", default)]
    pub tel_state: String,
    #[serde(rename = "canInterrupt")]
    pub can_interrupt: bool,
    #[serde(default)]
    pub error: ErrorFlag,
    #[serde(default)]
    pub programs: Vec<InterruptedProgram>,
}

/// The server reports `error` as either a boolean or a message string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ErrorFlag {
    Flag(bool),
    Message(String),
}

impl Default for ErrorFlag {
    fn default() -> Self {
        ErrorFlag::Flag(false)
    }
}

impl ErrorFlag {
    pub fn is_error(&self) -> bool {
        match self {
            ErrorFlag::Flag(flag) => *flag,
            ErrorFlag::Message(msg) => !msg.is_empty(),
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            ErrorFlag::Message(msg) if !msg.is_empty() => Some(msg),
            _ => None,
        }
    }
}

/// A scheduled program the requested ToO would displace, with the server's
/// reasons per interrupt type.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InterruptedProgram {
    #[serde(default)]
    pub proj_code: String,
    #[serde(default)]
    pub instrument: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub end_time: String,
    #[serde(default)]
    pub institution_interrupt: bool,
    #[serde(default)]
    pub institution_reason: Vec<String>,
    #[serde(default)]
    pub partner_interrupt: bool,
    #[serde(default)]
    pub partner_reason: Vec<String>,
    #[serde(default)]
    pub is_switch: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn semid_joins_semester_and_projcode() {
        let semester: Semester = "2025A".parse().unwrap();
        let query = InterruptQuery::new(
            &semester, "C123", 123, "NIRES", "2025-06-01", "1:00:00", "22:00:00",
        );
        assert_eq!(query.semid, "2025A_C123");
        assert_eq!(query.as_params()[0], ("semid", "2025A_C123"));
    }

    #[test]
    fn parses_positive_verdict_with_programs() {
        let check: InterruptCheck = serde_json::from_str(
            r#"{"checkTimeHST":"2025-06-01 18:00:00","canInterrupt":true,"error":false,
                "programs":[{"ProjCode":"U045","Instrument":"NIRES","Date":"2025-06-01",
                "StartTime":"19:30","EndTime":"23:00","InstitutionInterrupt":true,
                "InstitutionReason":["same institution"],"PartnerInterrupt":false,
                "PartnerReason":[],"IsSwitch":true}]}"#,
        )
        .unwrap();
        assert!(check.can_interrupt);
        assert!(!check.error.is_error());
        assert_eq!(check.programs.len(), 1);
        assert!(check.programs[0].is_switch);
        assert_eq!(check.programs[0].institution_reason, vec!["same institution"]);
    }

    #[test]
    fn error_field_accepts_bool_or_string() {
        let flagged: InterruptCheck =
            serde_json::from_str(r#"{"canInterrupt":false,"error":true}"#).unwrap();
        assert!(flagged.error.is_error());

        let message: InterruptCheck =
            serde_json::from_str(r#"{"canInterrupt":false,"error":"no schedule for date"}"#)
                .unwrap();
        assert!(message.error.is_error());
        assert_eq!(message.error.message(), Some("no schedule for date"));

        let clean: InterruptCheck = serde_json::from_str(r#"{"canInterrupt":true}"#).unwrap();
        assert!(!clean.error.is_error());
    }
}
