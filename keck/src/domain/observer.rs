use serde::Deserialize;

/// The logged-in observer, as returned by `GET /userinfo/`. Fetched once per
/// session; which programs and hour budgets are visible hangs off `id`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ObserverInfo {
    #[serde(rename = "status", default)]
    pub status: String,
    pub id: u32,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub middle_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub affiliation: String,
    #[serde(default)]
    pub work_area: String,
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub zip: String,
    #[serde(default)]
    pub phone: String,
    #[serde(rename = "URL", default)]
    pub url: String,
    #[serde(default)]
    pub mod_date: String,
    #[serde(rename = "username", default)]
    pub username: String,
    #[serde(default)]
    pub alloc_inst: String,
    #[serde(default)]
    pub bad_email: String,
    #[serde(default)]
    pub category: String,
}

impl ObserverInfo {
    pub fn full_name(&self) -> String {
        let name = format!("{} {}", self.first_name, self.last_name);
        let name = name.trim();
        if name.is_empty() {
            self.username.clone()
        } else {
            name.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_server_casing() {
        let observer: ObserverInfo = serde_json::from_str(
            r#"{"status":"success","Id":4866,"FirstName":"Pat","LastName":"Observer",
                "Email":"pat@example.test","Affiliation":"UC","username":"pobserver"}"#,
        )
        .unwrap();
        assert_eq!(observer.id, 4866);
        assert_eq!(observer.username, "pobserver");
        assert_eq!(observer.full_name(), "Pat Observer");
    }

    #[test]
    fn full_name_falls_back_to_username() {
        let observer = ObserverInfo {
            username: "pobserver".to_string(),
            ..Default::default()
        };
        assert_eq!(observer.full_name(), "pobserver");
    }
}
