// src/auth/verifier.rs
use crate::errors::ServerError;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{info, warn};

/// Who the external sign-in endpoint says the user is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub email: String,
    pub display_name: String,
}

impl Identity {
    /// Normalizes the email; the display name falls back to the email.
    pub fn new(email: &str, name: Option<&str>) -> Result<Self, ServerError> {
        let email = normalize_email(email)?;
        let display_name = name
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| email.clone());
        Ok(Self {
            email,
            display_name,
        })
    }
}

/// Trim + lowercase, minimal sanity check.
pub fn normalize_email(email: &str) -> Result<String, ServerError> {
    let e = email.trim().to_lowercase();
    if e.is_empty() || !e.contains('@') || e.starts_with('@') || e.ends_with('@') {
        return Err(ServerError::BadRequest("invalid email".into()));
    }
    Ok(e)
}

/// Exchanges a sign-in credential (e.g. a Google ID token) for an identity.
pub trait AuthVerifier: Send + Sync {
    fn verify(&self, credential: &str) -> Result<Identity, ServerError>;
}

#[derive(Serialize)]
struct VerifyRequest<'a> {
    token: &'a str,
}

#[derive(Debug, Deserialize)]
struct VerifyResponse {
    success: bool,
    #[serde(default)]
    user: Option<RemoteUser>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RemoteUser {
    email: String,
    #[serde(default, alias = "full_name")]
    name: Option<String>,
}

/// Posts `{"token": ...}` to the configured endpoint and trusts its answer.
pub struct RemoteVerifier {
    endpoint: String,
    client: Client,
}

impl RemoteVerifier {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, ServerError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| ServerError::Config(format!("http client setup failed: {e}")))?;
        Ok(Self {
            endpoint: endpoint.into(),
            client,
        })
    }
}

impl AuthVerifier for RemoteVerifier {
    fn verify(&self, credential: &str) -> Result<Identity, ServerError> {
        let credential = credential.trim();
        if credential.is_empty() {
            return Err(ServerError::BadRequest("missing credential".into()));
        }

        let resp = self
            .client
            .post(&self.endpoint)
            .json(&VerifyRequest { token: credential })
            .send()
            .map_err(|e| {
                warn!("auth endpoint unreachable: {e}");
                ServerError::Upstream("Unable to connect to the server".into())
            })?;

        let status = resp.status();
        let body: VerifyResponse = resp.json().map_err(|e| {
            warn!(%status, "auth endpoint sent an unreadable reply: {e}");
            ServerError::Upstream("Unable to connect to the server".into())
        })?;

        interpret(body)
    }
}

fn interpret(body: VerifyResponse) -> Result<Identity, ServerError> {
    match body {
        VerifyResponse {
            success: true,
            user: Some(user),
            ..
        } => {
            let identity = Identity::new(&user.email, user.name.as_deref())?;
            info!(email = %identity.email, "sign-in verified");
            Ok(identity)
        }
        VerifyResponse {
            success: true,
            user: None,
            ..
        } => Err(ServerError::Upstream("sign-in reply had no user".into())),
        VerifyResponse { message, .. } => Err(ServerError::Unauthorized(
            message.unwrap_or_else(|| "Something went wrong".into()),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Result<Identity, ServerError> {
        interpret(serde_json::from_str(json).unwrap())
    }

    #[test]
    fn normalize_email_trims_and_lowercases() {
        assert_eq!(normalize_email("  Test@Example.COM ").unwrap(), "test@example.com");
    }

    #[test]
    fn normalize_email_rejects_invalid() {
        assert!(normalize_email("").is_err());
        assert!(normalize_email("no-at-symbol").is_err());
        assert!(normalize_email("@example.com").is_err());
        assert!(normalize_email("test@").is_err());
    }

    #[test]
    fn successful_reply_gives_identity() {
        let id = parse(r#"{"success": true, "user": {"email": "Jo@Example.com", "name": "Jo"}}"#).unwrap();
        assert_eq!(id.email, "jo@example.com");
        assert_eq!(id.display_name, "Jo");
    }

    #[test]
    fn display_name_falls_back_to_email() {
        let id = parse(r#"{"success": true, "user": {"email": "jo@example.com"}}"#).unwrap();
        assert_eq!(id.display_name, "jo@example.com");
    }

    #[test]
    fn failed_reply_is_unauthorized_with_message() {
        match parse(r#"{"success": false, "message": "Token expired"}"#) {
            Err(ServerError::Unauthorized(msg)) => assert_eq!(msg, "Token expired"),
            other => panic!("expected Unauthorized, got: {:?}", other),
        }
    }

    #[test]
    fn failed_reply_without_message_has_default() {
        match parse(r#"{"success": false}"#) {
            Err(ServerError::Unauthorized(msg)) => assert_eq!(msg, "Something went wrong"),
            other => panic!("expected Unauthorized, got: {:?}", other),
        }
    }

    #[test]
    fn blank_credential_never_leaves_the_process() {
        let verifier = RemoteVerifier::new("http://127.0.0.1:9/unused").unwrap();
        assert!(matches!(verifier.verify("  "), Err(ServerError::BadRequest(_))));
    }
}
