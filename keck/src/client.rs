use std::collections::HashMap;

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::domain::{
    InstrumentStatus, InterruptCheck, InterruptQuery, ObserverInfo, ScheduleItem, Semester,
    TooCancelPayload, TooProgram, TooRequest,
};
use crate::{Credentials, KeckURL};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Telescope numbers the schedule endpoint accepts.
pub const TELESCOPES: [u8; 2] = [1, 2];

pub struct KeckClient {
    base: KeckURL,
    credentials: Credentials,
}

impl KeckClient {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            base: KeckURL::from_env(),
            credentials,
        }
    }

    pub fn with_base(base: KeckURL, credentials: Credentials) -> Self {
        Self { base, credentials }
    }

    fn api(&self, path: &str) -> KeckURL {
        self.base.append_path("/api").append_path(path)
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        url: impl AsRef<str>,
    ) -> Result<T, KeckFetchError> {
        let client = reqwest::Client::new();

        let resp = client
            .get(url.as_ref())
            .header("Cookie", self.credentials.as_cookie_header())
            .send()
            .await
            .map_err(|e| KeckFetchError::ResponseError(e.to_string()))?;

        if resp.status() == 401 || resp.status() == 403 {
            return Err(KeckFetchError::Unauthorized);
        }
        if !resp.status().is_success() {
            return Err(KeckFetchError::ResponseError(format!(
                "unexpected status {}",
                resp.status()
            )));
        }

        let resp_data = resp.json::<T>().await.map_err(|e| {
            KeckFetchError::ParsingError(format!("Failed to parse response as JSON: {}", e))
        })?;

        Ok(resp_data)
    }

    /// POST a JSON body. The submit endpoints only signal success through the
    /// HTTP status; there is no response body contract.
    async fn post_json(
        &self,
        url: impl AsRef<str>,
        body: &impl Serialize,
    ) -> Result<(), KeckFetchError> {
        let client = reqwest::Client::new();

        let resp = client
            .post(url.as_ref())
            .header("Cookie", self.credentials.as_cookie_header())
            .json(body)
            .send()
            .await
            .map_err(|e| KeckFetchError::ResponseError(e.to_string()))?;

        if resp.status() == 401 || resp.status() == 403 {
            return Err(KeckFetchError::Unauthorized);
        }
        if !resp.status().is_success() {
            return Err(KeckFetchError::ResponseError(format!(
                "unexpected status {}",
                resp.status()
            )));
        }

        Ok(())
    }

    /// The logged-in observer's identity. Lives directly under the host root,
    /// not `/api`.
    pub async fn fetch_userinfo(&self) -> Result<ObserverInfo, KeckFetchError> {
        let url = self.base.append_path("/userinfo/");
        self.fetch(url).await
    }

    /// The schedule for one telescope on one night. The server does not echo
    /// the telescope number back, so it is stamped on each row here.
    pub async fn fetch_schedule(
        &self,
        date: NaiveDate,
        telnr: u8,
    ) -> Result<Vec<ScheduleItem>, KeckFetchError> {
        let date = date.format(DATE_FORMAT).to_string();
        let url = self
            .api("/schedule/getSchedule")
            .with_query(&[("date", &date), ("telnr", &telnr.to_string())]);

        let mut items: Vec<ScheduleItem> = self.fetch(url).await?;
        for item in &mut items {
            item.tel_nr = Some(telnr.to_string());
        }
        tracing::debug!(%date, telnr, rows = items.len(), "fetched schedule");
        Ok(items)
    }

    /// Both telescopes' schedules for one night, concatenated in telescope
    /// order.
    pub async fn fetch_night_schedule(
        &self,
        date: NaiveDate,
    ) -> Result<Vec<ScheduleItem>, KeckFetchError> {
        let mut schedule = Vec::new();
        for telnr in TELESCOPES {
            schedule.extend(self.fetch_schedule(date, telnr).await?);
        }
        Ok(schedule)
    }

    /// Per-instrument ToO readiness for a night. Entries whose `Instrument`
    /// is null are dropped; the rest come back sorted by instrument name so
    /// callers see a deterministic order regardless of map iteration.
    pub async fn fetch_instruments_too_status(
        &self,
        date: NaiveDate,
    ) -> Result<Vec<(String, InstrumentStatus)>, KeckFetchError> {
        let date = date.format(DATE_FORMAT).to_string();
        let url = self
            .api("/too/getInstrumentsTooStatus")
            .with_query(&[("date", &date)]);

        let raw: HashMap<String, InstrumentStatus> = self.fetch(url).await?;
        let mut rows: Vec<_> = raw
            .into_iter()
            .filter(|(_, status)| status.instrument.is_some())
            .collect();
        rows.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(rows)
    }

    /// The catalog of programs the observer may submit ToOs against.
    pub async fn fetch_too_programs(
        &self,
        semester: &Semester,
        obsid: u32,
    ) -> Result<Vec<TooProgram>, KeckFetchError> {
        let url = self.api("/too/getToo").with_query(&[
            ("semester", &semester.to_string()),
            ("obsid", &obsid.to_string()),
        ]);
        self.fetch(url).await
    }

    /// The observer's persisted ToO requests for a semester. Key casing is
    /// normalized during deserialization (see [`TooRequest`]).
    pub async fn fetch_too_requests(
        &self,
        semester: &Semester,
        obsid: u32,
    ) -> Result<Vec<TooRequest>, KeckFetchError> {
        let url = self.api("/too/getTooRequests").with_query(&[
            ("semester", &semester.to_string()),
            ("obsid", &obsid.to_string()),
        ]);
        self.fetch(url).await
    }

    /// Save, edit or submit a request, depending on `request.action`.
    pub async fn submit_too_request(&self, request: &TooRequest) -> Result<(), KeckFetchError> {
        let url = self.api("/too/submitTooRequest");
        tracing::debug!(
            action = ?request.action,
            tooid = request.tooid.as_deref(),
            projcode = %request.projcode,
            "submitting ToO request"
        );
        self.post_json(url, request).await
    }

    /// Cancel a persisted request.
    pub async fn submit_too_cancel(
        &self,
        tooid: &str,
        approvalnotes: &str,
    ) -> Result<(), KeckFetchError> {
        let url = self.api("/too/submitTooCancel");
        let payload = TooCancelPayload {
            tooid: tooid.to_string(),
            approvalnotes: approvalnotes.to_string(),
        };
        self.post_json(url, &payload).await
    }

    /// Dry-run eligibility check: may the described ToO interrupt the night's
    /// schedule? Side-effect-free server-side; safe to repeat.
    pub async fn fetch_can_interrupt(
        &self,
        query: &InterruptQuery,
    ) -> Result<InterruptCheck, KeckFetchError> {
        let url = self
            .api("/too/getTooCanInterrupt")
            .with_query(&query.as_params());
        self.fetch(url).await
    }
}

#[derive(Error, Debug)]
pub enum KeckFetchError {
    #[error("Unauthorized")]
    Unauthorized,
    #[error("ResponseError: {0}")]
    ResponseError(String),
    #[error("ParsingError: {0}")]
    ParsingError(String),
    #[error("Other: {0}")]
    Other(String),
}
