//! Identity Provider
//!
//! The interface a real identity service would implement, plus the
//! in-memory stub the mock-up runs against. The stub keeps its account
//! table behind a mutex so sign-ups registered during a session are
//! visible to later sign-ins.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minimum password length the provider accepts
pub const MIN_PASSWORD_LEN: usize = 6;

/// Provider error kinds, each carrying its user-facing message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Invalid email or password.")]
    InvalidCredential,
    #[error("The email address is badly formatted.")]
    InvalidEmail,
    #[error("This email is already in use. Please log in.")]
    EmailAlreadyInUse,
    #[error("Password should be at least 6 characters.")]
    WeakPassword,
    #[error("An unexpected error occurred. Please try again.")]
    Unknown,
}

/// Account role chosen at registration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Role {
    #[default]
    Manager,
    Tenant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Manager => "Property Manager",
            Role::Tenant => "Tenant",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "Tenant" => Role::Tenant,
            _ => Role::Manager,
        }
    }
}

/// The signed-in user, held app-wide for the lifetime of the page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub email: String,
    pub display_name: String,
    pub role: Role,
}

/// Seam for a real identity backend
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError>;

    async fn sign_up(
        &self,
        name: &str,
        email: &str,
        password: &str,
        role: Role,
    ) -> Result<Session, AuthError>;
}

#[derive(Debug, Clone)]
struct Account {
    password: String,
    display_name: String,
    role: Role,
}

/// In-memory identity provider seeded with one demo landlord account
pub struct StubIdentity {
    accounts: Mutex<HashMap<String, Account>>,
}

/// Demo credentials the login screen advertises
pub const DEMO_EMAIL: &str = "landlord@smartlease.app";
pub const DEMO_PASSWORD: &str = "sunrise24";

impl StubIdentity {
    pub fn new() -> Self {
        let mut accounts = HashMap::new();
        accounts.insert(
            DEMO_EMAIL.to_string(),
            Account {
                password: DEMO_PASSWORD.to_string(),
                display_name: "Amani Wanjiru".to_string(),
                role: Role::Manager,
            },
        );
        Self {
            accounts: Mutex::new(accounts),
        }
    }
}

impl Default for StubIdentity {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_email(email: &str) -> Result<(), AuthError> {
    let (local, domain) = email.split_once('@').ok_or(AuthError::InvalidEmail)?;
    if local.is_empty() || domain.is_empty() || !domain.contains('.') {
        return Err(AuthError::InvalidEmail);
    }
    Ok(())
}

#[async_trait]
impl IdentityProvider for StubIdentity {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        validate_email(email)?;
        let accounts = self.accounts.lock().map_err(|_| AuthError::Unknown)?;
        // Unknown email and wrong password collapse to one error kind so a
        // caller cannot probe which addresses are registered
        match accounts.get(email) {
            Some(account) if account.password == password => Ok(Session {
                email: email.to_string(),
                display_name: account.display_name.clone(),
                role: account.role,
            }),
            _ => Err(AuthError::InvalidCredential),
        }
    }

    async fn sign_up(
        &self,
        name: &str,
        email: &str,
        password: &str,
        role: Role,
    ) -> Result<Session, AuthError> {
        validate_email(email)?;
        if password.len() < MIN_PASSWORD_LEN {
            return Err(AuthError::WeakPassword);
        }
        let mut accounts = self.accounts.lock().map_err(|_| AuthError::Unknown)?;
        if accounts.contains_key(email) {
            return Err(AuthError::EmailAlreadyInUse);
        }
        accounts.insert(
            email.to_string(),
            Account {
                password: password.to_string(),
                display_name: name.to_string(),
                role,
            },
        );
        Ok(Session {
            email: email.to_string(),
            display_name: name.to_string(),
            role,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_demo_account_signs_in() {
        let provider = StubIdentity::new();
        let session = provider.sign_in(DEMO_EMAIL, DEMO_PASSWORD).await.unwrap();
        assert_eq!(session.email, DEMO_EMAIL);
        assert_eq!(session.role, Role::Manager);
    }

    #[tokio::test]
    async fn test_wrong_password_is_invalid_credential() {
        let provider = StubIdentity::new();
        let err = provider.sign_in(DEMO_EMAIL, "nope").await.unwrap_err();
        assert_eq!(err, AuthError::InvalidCredential);
    }

    #[tokio::test]
    async fn test_unknown_email_is_invalid_credential() {
        let provider = StubIdentity::new();
        let err = provider
            .sign_in("nobody@example.com", "whatever")
            .await
            .unwrap_err();
        assert_eq!(err, AuthError::InvalidCredential);
    }

    #[tokio::test]
    async fn test_malformed_email_is_rejected() {
        let provider = StubIdentity::new();
        for email in ["plainaddress", "@no-local.com", "user@", "user@nodot"] {
            let err = provider.sign_in(email, "secret").await.unwrap_err();
            assert_eq!(err, AuthError::InvalidEmail, "email: {email}");
        }
    }

    #[tokio::test]
    async fn test_short_password_is_weak() {
        let provider = StubIdentity::new();
        let err = provider
            .sign_up("New User", "new@example.com", "12345", Role::Tenant)
            .await
            .unwrap_err();
        assert_eq!(err, AuthError::WeakPassword);
    }

    #[tokio::test]
    async fn test_duplicate_email_is_rejected() {
        let provider = StubIdentity::new();
        let err = provider
            .sign_up("Someone", DEMO_EMAIL, "longenough", Role::Manager)
            .await
            .unwrap_err();
        assert_eq!(err, AuthError::EmailAlreadyInUse);
    }

    #[tokio::test]
    async fn test_sign_up_then_sign_in() {
        let provider = StubIdentity::new();
        provider
            .sign_up("New User", "new@example.com", "longenough", Role::Tenant)
            .await
            .unwrap();
        let session = provider
            .sign_in("new@example.com", "longenough")
            .await
            .unwrap();
        assert_eq!(session.display_name, "New User");
        assert_eq!(session.role, Role::Tenant);
    }
}
