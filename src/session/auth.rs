use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::sync::oneshot;
use tracing::{debug, info};
use uuid::Uuid;

use crate::models::{Role, User};

#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Turns credentials into an identity.
/// A real backend slots in here; the client only ships the mock.
#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn authenticate(&self, credentials: &Credentials) -> Result<User>;

    fn name(&self) -> &'static str;
}

/// Accepts any non-empty credentials after a fixed delay
pub struct MockAuthenticator {
    delay: Duration,
}

impl MockAuthenticator {
    pub fn new() -> Self {
        Self::with_delay(Duration::from_millis(1000))
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for MockAuthenticator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Authenticator for MockAuthenticator {
    async fn authenticate(&self, credentials: &Credentials) -> Result<User> {
        if credentials.email.trim().is_empty() || credentials.password.is_empty() {
            anyhow::bail!("email and password are required");
        }

        debug!(
            email = %credentials.email,
            delay_ms = self.delay.as_millis() as u64,
            "simulating login"
        );
        tokio::time::sleep(self.delay).await;

        // The mock picks the role from the address itself
        let role = if credentials.email.contains("student") {
            Role::Student
        } else {
            Role::Owner
        };
        let mut user = User::new(
            Uuid::new_v4().to_string(),
            credentials.email.clone(),
            "John Doe",
            role,
        );
        user.verified = true;
        user.profile_complete = true;
        Ok(user)
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

/// A login attempt in flight.
///
/// The attempt runs on its own task and always runs to completion; dropping
/// the handle does not stop it. `resolve` consumes the handle, so the outcome
/// is observed at most once.
pub struct PendingLogin {
    outcome: oneshot::Receiver<Result<User>>,
}

impl PendingLogin {
    pub fn start(authenticator: Arc<dyn Authenticator>, credentials: Credentials) -> Self {
        let (tx, rx) = oneshot::channel();
        info!(via = authenticator.name(), email = %credentials.email, "login started");

        tokio::spawn(async move {
            let outcome = authenticator.authenticate(&credentials).await;
            if tx.send(outcome).is_err() {
                debug!("login finished after its handle was dropped");
            }
        });

        Self { outcome: rx }
    }

    pub async fn resolve(self) -> Result<User> {
        self.outcome
            .await
            .context("login task ended without reporting")?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Counting {
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl Authenticator for Counting {
        async fn authenticate(&self, credentials: &Credentials) -> Result<User> {
            tokio::time::sleep(Duration::from_millis(20)).await;
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(User::new("c", credentials.email.clone(), "C", Role::Owner))
        }

        fn name(&self) -> &'static str {
            "counting"
        }
    }

    #[tokio::test]
    async fn mock_assigns_role_from_email() {
        let auth: Arc<dyn Authenticator> =
            Arc::new(MockAuthenticator::with_delay(Duration::from_millis(5)));

        let student = PendingLogin::start(auth.clone(), Credentials::new("student@uni.ng", "pw"))
            .resolve()
            .await
            .unwrap();
        assert_eq!(student.role(), Role::Student);
        assert!(student.verified);
        assert_eq!(student.full_name, "John Doe");

        let owner = PendingLogin::start(auth, Credentials::new("landlord@mail.ng", "pw"))
            .resolve()
            .await
            .unwrap();
        assert_eq!(owner.role(), Role::Owner);
    }

    #[tokio::test]
    async fn empty_credentials_fail() {
        let auth: Arc<dyn Authenticator> =
            Arc::new(MockAuthenticator::with_delay(Duration::from_millis(1)));
        let result = PendingLogin::start(auth, Credentials::new("", "")).resolve().await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn dropped_handle_still_completes_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let auth: Arc<dyn Authenticator> = Arc::new(Counting {
            calls: calls.clone(),
        });

        let pending = PendingLogin::start(auth, Credentials::new("x@y.z", "pw"));
        drop(pending);

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
