use serde::{Deserialize, Serialize};

/// What a `submitTooRequest` POST is asking the server to do with the
/// request body.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TooAction {
    #[default]
    Draft,
    Edit,
    Submit,
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterruptType {
    #[default]
    Institution,
    Partner,
}

/// A ToO request as it travels over the wire, both directions. The server
/// is inconsistent about key casing on reads (`ProjCode` vs `projcode`), so
/// deserialization accepts both spellings and everything normalizes to the
/// lowercase names here; serialization always emits lowercase.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooRequest {
    #[serde(alias = "SubmitterId", default)]
    pub submitterid: String,
    #[serde(alias = "Username", default)]
    pub username: String,
    #[serde(alias = "Action", default)]
    pub action: TooAction,
    #[serde(alias = "TooId", default, skip_serializing_if = "Option::is_none")]
    pub tooid: Option<String>,
    #[serde(alias = "Semester", default)]
    pub semester: String,
    #[serde(alias = "PiId", default)]
    pub piid: String,
    #[serde(alias = "ProjCode", default)]
    pub projcode: String,
    #[serde(alias = "Instrument", default)]
    pub instrument: String,
    #[serde(alias = "ObsDate", default)]
    pub obsdate: String,
    #[serde(alias = "StartTime", default)]
    pub starttime: String,
    #[serde(alias = "Duration", default)]
    pub duration: String,
    #[serde(alias = "Target", default)]
    pub target: String,
    #[serde(alias = "FlexTime", default)]
    pub flextime: String,
    #[serde(
        alias = "ObsDesignation",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub obsdesignation: Option<String>,
    #[serde(alias = "ObsLocation", default)]
    pub obslocation: String,
    #[serde(alias = "PiNotes", default, skip_serializing_if = "Option::is_none")]
    pub pinotes: Option<String>,
    #[serde(alias = "InterruptProj", default)]
    pub interruptproj: String,
    #[serde(alias = "InterruptType", default)]
    pub interrupttype: InterruptType,
    #[serde(
        alias = "SkipSubmitWarnings",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub skipsubmitwarnings: Option<u8>,
    #[serde(
        alias = "InstrConfigs",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub instrconfigs: Option<String>,
}

/// Body of `POST /too/submitTooCancel`.
#[derive(Debug, Clone, Serialize)]
pub struct TooCancelPayload {
    pub tooid: String,
    pub approvalnotes: String,
}
