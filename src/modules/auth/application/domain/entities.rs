use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Opaque bearer credential identifying an admin session.
///
/// The raw value only ever travels between the client and the server; it is
/// never written to logs, so `Debug` is redacted.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl std::fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SessionToken(<redacted>)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminSession {
    pub principal: String,
    pub created_at: DateTime<Utc>,
    pub email: String,
    pub session_token: SessionToken,
}

/// Outcome of a login attempt as it travels on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum CreateSessionResponse {
    Ok { session: AdminSession },
    InvalidCredentials,
    Failure { reason: String },
}

/// Who a valid session belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminIdentity {
    pub principal: String,
    pub email: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_session_token_debug_is_redacted() {
        let token = SessionToken::new("0123456789abcdef");
        let rendered = format!("{:?}", token);

        assert!(!rendered.contains("0123456789abcdef"));
        assert_eq!(rendered, "SessionToken(<redacted>)");
    }

    #[test]
    fn test_session_debug_does_not_leak_token() {
        let session = AdminSession {
            principal: "admin".to_string(),
            created_at: Utc::now(),
            email: "owner@example.com".to_string(),
            session_token: SessionToken::new("super-secret"),
        };

        assert!(!format!("{:?}", session).contains("super-secret"));
    }

    #[test]
    fn test_create_session_response_wire_shapes() {
        assert_eq!(
            serde_json::to_value(CreateSessionResponse::InvalidCredentials).unwrap(),
            json!({"kind": "invalidCredentials"})
        );
        assert_eq!(
            serde_json::to_value(CreateSessionResponse::Failure {
                reason: "locked".to_string()
            })
            .unwrap(),
            json!({"kind": "failure", "reason": "locked"})
        );

        let ok: CreateSessionResponse = serde_json::from_value(json!({
            "kind": "ok",
            "session": {
                "principal": "admin",
                "createdAt": "2024-01-01T00:00:00Z",
                "email": "owner@example.com",
                "sessionToken": "abc"
            }
        }))
        .unwrap();

        match ok {
            CreateSessionResponse::Ok { session } => {
                assert_eq!(session.session_token.as_str(), "abc");
                assert_eq!(session.principal, "admin");
            }
            other => panic!("unexpected response: {:?}", other),
        }
    }
}
