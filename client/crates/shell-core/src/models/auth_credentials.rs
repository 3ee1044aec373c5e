use serde::{Deserialize, Serialize};

/// Email/password pair submitted at login.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthCredentials {
    pub email: String,
    pub password: String,
}

impl AuthCredentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

// Password never reaches logs.
impl std::fmt::Debug for AuthCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthCredentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}
