use serde::Deserialize;
use thiserror::Error;

use crate::KeckURL;

/// Cookie the observatory auth server sets after a successful login.
pub const AUTH_COOKIE: &str = "KECK-AUTH-UID";

#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: Option<String>,
    pub uid: String,
}

#[derive(Error, Debug)]
pub enum LoginError {
    /// The server emailed a verification token to the account address.
    /// Call [`Credentials::verify_token`] and log in again.
    #[error("verification token required (check your email)")]
    VerificationRequired,
    #[error("verification failed")]
    VerificationFailed,
    #[error("login response did not contain py_uid")]
    MissingUid,
    #[error("ResponseError: {0}")]
    ResponseError(String),
}

/// Shape of the `/login/script` success body. Only `py_uid` matters; it is
/// the value of the session cookie.
#[derive(Debug, Deserialize)]
struct LoginBody {
    py_uid: String,
}

impl Credentials {
    /// Wrap a previously saved session uid.
    pub fn from_uid(uid: impl Into<String>) -> Self {
        Self {
            email: None,
            uid: uid.into(),
        }
    }

    /// Log in with email + password. A 401 means the server wants the emailed
    /// verification token first (see [`Credentials::verify_token`]).
    pub async fn login(base: &KeckURL, email: &str, password: &str) -> Result<Self, LoginError> {
        let url = base.append_path("/login/script").with_query(&[
            ("email", email),
            ("password", password),
            ("url", base.as_ref()),
        ]);

        let client = reqwest::Client::new();
        let resp = client
            .get(url.as_ref())
            .send()
            .await
            .map_err(|e| LoginError::ResponseError(e.to_string()))?;

        if resp.status() == 401 {
            return Err(LoginError::VerificationRequired);
        }
        if !resp.status().is_success() {
            return Err(LoginError::ResponseError(format!(
                "login returned status {}",
                resp.status()
            )));
        }

        let body = resp
            .json::<LoginBody>()
            .await
            .map_err(|_| LoginError::MissingUid)?;

        tracing::info!("logged in as {}", email);
        Ok(Self {
            email: Some(email.to_string()),
            uid: body.py_uid,
        })
    }

    /// Redeem the verification token the server emailed after a 401 login.
    /// On success the caller should retry [`Credentials::login`].
    pub async fn verify_token(base: &KeckURL, email: &str, token: &str) -> Result<(), LoginError> {
        let url = base.append_path("/login/verify_token");

        let client = reqwest::Client::new();
        let resp = client
            .post(url.as_ref())
            .form(&[("email", email), ("token", token)])
            .send()
            .await
            .map_err(|e| LoginError::ResponseError(e.to_string()))?;

        if resp.status().is_success() {
            Ok(())
        } else {
            Err(LoginError::VerificationFailed)
        }
    }

    pub fn as_cookie_header(&self) -> String {
        format!("{}={}", AUTH_COOKIE, self.uid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cookie_header_carries_uid() {
        let credentials = Credentials::from_uid("abc123");
        assert_eq!(credentials.as_cookie_header(), "KECK-AUTH-UID=abc123");
    }
}
