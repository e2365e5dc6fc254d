//! Error type shared by every client operation.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClientError>;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("client not configured: call eventbook_client_core::init first")]
    NotConfigured,

    /// HTTP 401. The caller has to sign in (again).
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// HTTP 403, e.g. a non-admin calling an admin endpoint.
    #[error("forbidden: {0}")]
    Forbidden(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("server returned {status}: {body}")]
    Http { status: u16, body: String },

    #[error("network error: {0}")]
    Network(String),

    #[error("invalid response: {0}")]
    Decode(String),

    #[error("storage error: {0}")]
    Storage(String),

    #[error("{0}")]
    Validation(String),
}

impl ClientError {
    /// Map a non-success HTTP status and its body to an error.
    pub fn from_status(status: u16, body: String) -> Self {
        match status {
            401 => ClientError::Unauthorized(body),
            403 => ClientError::Forbidden(body),
            404 => ClientError::NotFound(body),
            _ => ClientError::Http { status, body },
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ClientError::Unauthorized(_))
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Unauthorized(_) => Some(401),
            ClientError::Forbidden(_) => Some(403),
            ClientError::NotFound(_) => Some(404),
            ClientError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ClientError::Decode(e.to_string())
        } else {
            ClientError::Network(e.to_string())
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(e: serde_json::Error) -> Self {
        ClientError::Decode(e.to_string())
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl From<rusqlite::Error> for ClientError {
    fn from(e: rusqlite::Error) -> Self {
        ClientError::Storage(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        assert!(ClientError::from_status(401, String::new()).is_unauthorized());
        assert!(matches!(
            ClientError::from_status(403, "admin only".into()),
            ClientError::Forbidden(_)
        ));
        assert!(matches!(
            ClientError::from_status(404, String::new()),
            ClientError::NotFound(_)
        ));
        let e = ClientError::from_status(500, "boom".into());
        assert_eq!(e.status(), Some(500));
        assert_eq!(e.to_string(), "server returned 500: boom");
    }

    #[test]
    fn non_http_errors_have_no_status() {
        assert_eq!(ClientError::Network("refused".into()).status(), None);
        assert_eq!(ClientError::NotConfigured.status(), None);
    }
}
