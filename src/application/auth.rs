//! Auth Use Case
//!
//! The login check is a fixed credential comparison, exactly as the system
//! it fronts: one operator account, no throttling, no hashing. This is an
//! explicit non-goal and should be replaced wholesale before any multi-user
//! deployment.

use crate::domain::ports::SessionStore;
use crate::error::{DishdeskError, DishdeskResult};

const OPERATOR_USERNAME: &str = "admin";
const OPERATOR_PASSWORD: &str = "password";

/// Auth use case - fixed-credential login over the session store
pub struct AuthUseCase<SS>
where
    SS: SessionStore,
{
    sessions: SS,
}

impl<SS> AuthUseCase<SS>
where
    SS: SessionStore,
{
    pub fn new(sessions: SS) -> Self {
        Self { sessions }
    }

    /// Accept only the fixed operator credentials; anything else is
    /// `InvalidCredentials` and the session flag stays untouched.
    pub fn login(&self, username: &str, password: &str) -> DishdeskResult<()> {
        if username != OPERATOR_USERNAME || password != OPERATOR_PASSWORD {
            return Err(DishdeskError::InvalidCredentials);
        }
        self.sessions.set_authenticated(true)?;
        Ok(())
    }

    pub fn logout(&self) -> DishdeskResult<()> {
        self.sessions.set_authenticated(false)?;
        Ok(())
    }

    pub fn is_authenticated(&self) -> bool {
        self.sessions.is_authenticated()
    }
}
