use super::{StorageBackend, TOKEN_KEY, USER_KEY};
use crate::error::{Result, RollbookError};
use crate::model::{Credential, Session};
use std::thread;
use std::time::Duration;
use uuid::Uuid;

/// The only username `login` accepts. The stored credential record also
/// carries a username, but login compares against this literal while the
/// password comes from the record. The asymmetry is deliberate; see
/// DESIGN.md before "fixing" it.
pub const LOGIN_USERNAME: &str = "admin";

pub const DEFAULT_PASSWORD: &str = "admin123";
pub const DEFAULT_EMAIL: &str = "admin@example.com";

/// Emulated round-trip latency of the login call.
const LOGIN_DELAY: Duration = Duration::from_secs(1);

/// Single-user credential record and the current session.
///
/// Not a security system: the credential is stored and compared in
/// plaintext, and the token is only an "is logged in" flag.
pub struct AuthStore<B: StorageBackend> {
    backend: B,
    session: Option<Session>,
    /// In-memory copy of the credential for the live session.
    user: Option<Credential>,
    login_delay: Duration,
}

impl<B: StorageBackend> AuthStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self {
            backend,
            session: None,
            user: None,
            login_delay: LOGIN_DELAY,
        }
    }

    /// Override the simulated login latency (tests pass `Duration::ZERO`).
    pub fn with_login_delay(mut self, delay: Duration) -> Self {
        self.login_delay = delay;
        self
    }

    /// Seed the default credential if none is persisted. Idempotent: an
    /// existing record is never overwritten.
    pub fn ensure_default(&self) -> Result<()> {
        if self.backend.read(USER_KEY)?.is_some() {
            return Ok(());
        }
        let default = Credential {
            username: LOGIN_USERNAME.to_string(),
            password: DEFAULT_PASSWORD.to_string(),
            email: DEFAULT_EMAIL.to_string(),
        };
        self.persist_credential(&default)
    }

    /// The persisted credential record, if any.
    pub fn credential(&self) -> Result<Option<Credential>> {
        match self.backend.read(USER_KEY)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Authenticate and open a session.
    ///
    /// Always resolves after the configured delay; there is no abort path.
    /// Every failure mode (wrong username, wrong password, no stored
    /// credential) yields the same generic error.
    pub fn login(&mut self, username: &str, password: &str) -> Result<Session> {
        if !self.login_delay.is_zero() {
            thread::sleep(self.login_delay);
        }

        let Some(cred) = self.credential()? else {
            return Err(RollbookError::InvalidCredentials);
        };
        if username != LOGIN_USERNAME || password != cred.password {
            return Err(RollbookError::InvalidCredentials);
        }

        let session = Session {
            token: Uuid::new_v4().to_string(),
            username: cred.username.clone(),
        };
        self.backend.write(TOKEN_KEY, &session.token)?;
        self.user = Some(cred);
        self.session = Some(session.clone());
        Ok(session)
    }

    /// Close the session and discard the persisted token.
    pub fn logout(&mut self) -> Result<()> {
        self.session = None;
        self.user = None;
        self.backend.remove(TOKEN_KEY)
    }

    /// Rehydrate the session from the persisted token and credential.
    /// Returns `false` when either is missing.
    pub fn restore(&mut self) -> Result<bool> {
        let token = self.backend.read(TOKEN_KEY)?;
        let cred = self.credential()?;
        match (token, cred) {
            (Some(token), Some(cred)) => {
                self.session = Some(Session {
                    token,
                    username: cred.username.clone(),
                });
                self.user = Some(cred);
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// The live session's credential copy (`None` when logged out).
    pub fn user(&self) -> Option<&Credential> {
        self.user.as_ref()
    }

    /// Overwrite the stored password.
    ///
    /// Fails if no credential record exists, or if `expected_username` is
    /// given and does not match the stored one. A live session's in-memory
    /// credential copy is updated alongside the persisted record.
    pub fn change_password(
        &mut self,
        new_password: &str,
        expected_username: Option<&str>,
    ) -> Result<()> {
        let Some(mut cred) = self.credential()? else {
            return Err(RollbookError::MissingCredential);
        };
        if let Some(expected) = expected_username {
            if expected != cred.username {
                return Err(RollbookError::InvalidCredentials);
            }
        }

        cred.password = new_password.to_string();
        self.persist_credential(&cred)?;

        if self.session.is_some() {
            self.user = Some(cred);
        }
        Ok(())
    }

    fn persist_credential(&self, cred: &Credential) -> Result<()> {
        let payload = serde_json::to_string(cred)?;
        self.backend.write(USER_KEY, &payload)
    }
}
