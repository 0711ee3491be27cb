//! Identity Service
//!
//! Frontend binding to the stubbed identity provider. Holds the provider
//! for the lifetime of the app so accounts registered in this session can
//! sign in again.

use std::sync::Arc;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use smartlease_core::auth::{AuthError, IdentityProvider, Role, Session, StubIdentity};

/// Simulated round-trip to the identity backend
const AUTH_LATENCY_MS: u32 = 600;

/// Handle to the app's identity provider, provided via context
#[derive(Clone)]
pub struct AuthService {
    provider: Arc<StubIdentity>,
}

impl AuthService {
    pub fn new() -> Self {
        Self {
            provider: Arc::new(StubIdentity::new()),
        }
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        TimeoutFuture::new(AUTH_LATENCY_MS).await;
        self.provider.sign_in(email, password).await
    }

    pub async fn sign_up(
        &self,
        name: &str,
        email: &str,
        password: &str,
        role: Role,
    ) -> Result<Session, AuthError> {
        TimeoutFuture::new(AUTH_LATENCY_MS).await;
        self.provider.sign_up(name, email, password, role).await
    }
}

impl Default for AuthService {
    fn default() -> Self {
        Self::new()
    }
}

/// Get the identity service from context
pub fn use_auth() -> AuthService {
    expect_context::<AuthService>()
}
