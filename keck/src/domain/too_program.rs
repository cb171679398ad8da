use serde::Deserialize;

/// One program the observer may submit ToO requests against in a semester,
/// with its remaining interrupt-hour budgets. The approved instruments and
/// interruptable institutions come over the wire as comma-separated lists.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TooProgram {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub hours_charged_institution: f64,
    #[serde(default)]
    pub hours_charged_partner: f64,
    #[serde(default)]
    pub hours_remain_institution: f64,
    #[serde(default)]
    pub hours_remain_partner: f64,
    #[serde(default)]
    pub instrument_list: String,
    #[serde(default)]
    pub interrupt_list: String,
    #[serde(default)]
    pub obs_id: String,
    pub proj_code: String,
    #[serde(default)]
    pub semester: String,
    #[serde(rename = "tooHoursInstitution", default)]
    pub too_hours_institution: f64,
    #[serde(rename = "tooHoursPartner", default)]
    pub too_hours_partner: f64,
}

impl TooProgram {
    /// Instruments approved for ToO use on this program.
    pub fn instruments(&self) -> Vec<&str> {
        split_list(&self.instrument_list)
    }

    /// Institutions this program is allowed to interrupt.
    pub fn interrupt_institutions(&self) -> Vec<&str> {
        split_list(&self.interrupt_list)
    }

    pub fn pi_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

fn split_list(raw: &str) -> Vec<&str> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instrument_list_splits_on_commas() {
        let program: TooProgram = serde_json::from_str(
            r#"{"ProjCode":"C123","InstrumentList":"NIRES,KCWI","HoursRemainInstitution":5}"#,
        )
        .unwrap();
        assert_eq!(program.instruments(), vec!["NIRES", "KCWI"]);
        assert_eq!(program.hours_remain_institution, 5.0);
    }

    #[test]
    fn empty_lists_yield_no_entries() {
        let program = TooProgram {
            proj_code: "C123".to_string(),
            ..Default::default()
        };
        assert!(program.instruments().is_empty());
        assert!(program.interrupt_institutions().is_empty());
    }

    #[test]
    fn interrupt_list_trims_whitespace() {
        let program = TooProgram {
            interrupt_list: "UC, CIT ,UH".to_string(),
            ..Default::default()
        };
        assert_eq!(program.interrupt_institutions(), vec!["UC", "CIT", "UH"]);
    }
}
