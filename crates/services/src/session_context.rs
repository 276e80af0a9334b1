use std::env;

use itp_core::model::Role;

/// Explicit session identity passed into every service call.
///
/// Replaces the ambient role/token lookup the pages used to share. How the
/// token was obtained and where it is stored belongs to the host
/// application.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionContext {
    role: Role,
    token: String,
}

impl SessionContext {
    #[must_use]
    pub fn new(role: Role, token: impl Into<String>) -> Self {
        Self {
            role,
            token: token.into(),
        }
    }

    /// Build a context from `ITP_SESSION_ROLE` and `ITP_SESSION_TOKEN`.
    ///
    /// Returns `None` when either variable is missing or empty, or the role
    /// name is unknown.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let token = env::var("ITP_SESSION_TOKEN").ok()?;
        if token.trim().is_empty() {
            return None;
        }
        let role = env::var("ITP_SESSION_ROLE").ok()?.parse().ok()?;
        Some(Self { role, token })
    }

    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }

    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────
