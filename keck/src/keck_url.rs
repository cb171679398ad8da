use std::env;

/// Public base of the observatory web services. The login endpoints and
/// `/userinfo/` live directly under this host; everything else is under `/api`.
const DEFAULT_BASE: &str = "https://www3.keck.hawaii.edu";

#[derive(Debug, Clone)]
pub struct KeckURL(String);

impl AsRef<str> for KeckURL {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl KeckURL {
    pub fn new(base: &str) -> Self {
        Self(base.trim_end_matches('/').to_string())
    }

    /// Creates a new KeckURL from the environment variable `KECK_URL`,
    /// falling back to the public base.
    pub fn from_env() -> Self {
        Self::new(&env::var("KECK_URL").unwrap_or_else(|_| DEFAULT_BASE.to_string()))
    }

    /// Append the given path to the URL.
    pub fn append_path(&self, path: &str) -> Self {
        let trimmed_url = self.0.trim_end_matches('/');
        let trimmed_path = path.trim_start_matches('/');
        Self(format!("{}/{}", trimmed_url, trimmed_path))
    }

    /// Append query parameters, percent-encoding the values.
    pub fn with_query(&self, params: &[(&str, &str)]) -> Self {
        let query = params
            .iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&");
        if self.0.contains('?') {
            Self(format!("{}&{}", self.0, query))
        } else {
            Self(format!("{}?{}", self.0, query))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_path_normalizes_slashes() {
        let url = KeckURL::new("https://example.test/").append_path("/api/too/getToo");
        assert_eq!(url.as_ref(), "https://example.test/api/too/getToo");
    }

    #[test]
    fn with_query_encodes_values() {
        let url = KeckURL::new("https://example.test")
            .append_path("too/getTooCanInterrupt")
            .with_query(&[("semid", "2025A_C123"), ("starttime", "22:00:00")]);
        assert_eq!(
            url.as_ref(),
            "https://example.test/too/getTooCanInterrupt?semid=2025A_C123&starttime=22%3A00%3A00"
        );
    }

    #[test]
    fn with_query_appends_to_existing_query() {
        let url = KeckURL::new("https://example.test")
            .with_query(&[("date", "2025-06-01")])
            .with_query(&[("telnr", "2")]);
        assert_eq!(url.as_ref(), "https://example.test?date=2025-06-01&telnr=2");
    }
}
