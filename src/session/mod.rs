pub mod auth;

pub use auth::{Authenticator, Credentials, MockAuthenticator, PendingLogin};

use tracing::{debug, info};

use crate::models::User;

/// Partial update merged into the current identity. Role is deliberately absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserPatch {
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub verified: Option<bool>,
    pub profile_complete: Option<bool>,
}

impl UserPatch {
    fn apply(self, user: &mut User) {
        if let Some(email) = self.email {
            user.email = email;
        }
        if let Some(full_name) = self.full_name {
            user.full_name = full_name;
        }
        if let Some(verified) = self.verified {
            user.verified = verified;
        }
        if let Some(profile_complete) = self.profile_complete {
            user.profile_complete = profile_complete;
        }
    }
}

/// Holds at most one signed-in identity for the running client
#[derive(Debug, Default)]
pub struct SessionStore {
    current: Option<User>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&User> {
        self.current.as_ref()
    }

    /// Install `user` as the current identity, replacing any previous one.
    pub fn login(&mut self, user: User) {
        info!(user_id = %user.id, role = user.role().as_str(), "signed in");
        self.current = Some(user);
    }

    pub fn logout(&mut self) {
        if let Some(user) = self.current.take() {
            info!(user_id = %user.id, "signed out");
        }
    }

    /// Merge `patch` into the current identity. Returns false when no one is signed in.
    pub fn update(&mut self, patch: UserPatch) -> bool {
        match self.current.as_mut() {
            Some(user) => {
                debug!(user_id = %user.id, ?patch, "updating current user");
                patch.apply(user);
                true
            }
            None => false,
        }
    }

    pub fn is_student(&self) -> bool {
        self.current
            .as_ref()
            .is_some_and(|u| u.role() == crate::models::Role::Student)
    }

    pub fn is_owner(&self) -> bool {
        self.current
            .as_ref()
            .is_some_and(|u| u.role().manages_property())
    }
}
