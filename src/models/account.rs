use serde::{Deserialize, Serialize};

/// Credentials used to open the user stream on behalf of an account.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthIdentity {
    pub access_token: String,
}

impl AuthIdentity {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
        }
    }
}

// Keep the token out of logs.
impl std::fmt::Debug for AuthIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthIdentity")
            .field("access_token", &"<redacted>")
            .finish()
    }
}

/// The locally authenticated user.
///
/// `id` is the local account row id that owns cached records; `user_id` is
/// the remote user id the stream events refer to. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    id: i64,
    user_id: i64,
    screen_name: String,
    #[serde(flatten)]
    identity: AuthIdentity,
}

impl Account {
    pub fn new(
        id: i64,
        user_id: i64,
        screen_name: impl Into<String>,
        identity: AuthIdentity,
    ) -> Self {
        Self {
            id,
            user_id,
            screen_name: screen_name.into(),
            identity,
        }
    }

    /// Local account id.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Remote user id of the account holder.
    pub fn user_id(&self) -> i64 {
        self.user_id
    }

    pub fn screen_name(&self) -> &str {
        &self.screen_name
    }

    pub fn identity(&self) -> &AuthIdentity {
        &self.identity
    }
}
