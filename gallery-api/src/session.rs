/// Credentials of a signed-in admin
#[derive(Clone, PartialEq)]
pub struct Credentials {
    pub username: String,
    pub token: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("token", &"<redacted>")
            .finish()
    }
}

/// Session passed explicitly to every API call.
///
/// An anonymous session sends no `Authorization` header.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    credentials: Option<Credentials>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn signed_in(credentials: Credentials) -> Self {
        Self {
            credentials: Some(credentials),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.credentials.is_some()
    }

    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    pub fn username(&self) -> Option<&str> {
        self.credentials.as_ref().map(|c| c.username.as_str())
    }

    pub fn sign_out(&mut self) {
        if let Some(creds) = self.credentials.take() {
            log::info!("Signed out {}", creds.username);
        }
    }
}
