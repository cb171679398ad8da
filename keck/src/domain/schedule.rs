use serde::Deserialize;

/// One scheduled block on a telescope for a given night.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ScheduleItem {
    #[serde(default)]
    pub sched_id: i64,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub end_time: String,
    #[serde(default)]
    pub instrument: String,
    #[serde(default)]
    pub account: String,
    #[serde(default)]
    pub proj_code: String,
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub principal: String,
    #[serde(default)]
    pub observers: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub semester: String,
    /// Not on the wire: the schedule endpoint is queried per telescope, so
    /// the client stamps the telescope number on each row after fetching.
    #[serde(default)]
    pub tel_nr: Option<String>,
}

/// Per-instrument ToO readiness for a night, from `getInstrumentsTooStatus`.
/// The endpoint returns a map keyed by instrument name; entries with a null
/// `Instrument` are dropped at the boundary.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InstrumentStatus {
    pub instrument: Option<String>,
    #[serde(default)]
    pub available: Option<i64>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub scheduled: Option<i64>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub tel_nr: Option<i64>,
    #[serde(default)]
    pub too_ready: Option<bool>,
}

impl InstrumentStatus {
    pub fn is_too_ready(&self) -> bool {
        self.too_ready.unwrap_or(false)
    }
}
