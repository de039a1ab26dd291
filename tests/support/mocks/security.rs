// tests/support/mocks/security.rs
use async_trait::async_trait;
use chrono::Duration;

use commonminds_core::application::ApplicationResult;
use commonminds_core::application::dto::{AuthTokenDto, AuthenticatedUser, TokenSubject};
use commonminds_core::application::error::ApplicationError;
use commonminds_core::domain::user::UserId;

pub const TEST_TOKEN: &str = "test-token";

/* -------------------------------- PasswordHasher -------------------------------- */

/// Deterministic hasher that still detects mismatches, so login tests can
/// exercise the wrong-password path.
#[derive(Clone, Debug, Default)]
pub struct DummyPasswordHasher;

#[async_trait]
impl commonminds_core::application::ports::security::PasswordHasher for DummyPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("hash::{password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        if format!("hash::{password}") == expected_hash {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized("invalid credentials"))
        }
    }
}

/* -------------------------------- TokenManager -------------------------------- */

#[derive(Clone, Debug, Default)]
pub struct DummyTokenManager;

#[async_trait]
impl commonminds_core::application::ports::security::TokenManager for DummyTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let now = super::time::fixed_now();
        let _ = subject;
        Ok(AuthTokenDto {
            token: TEST_TOKEN.into(),
            issued_at: now,
            expires_at: now + Duration::hours(1),
            expires_in: 3600,
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let now = super::time::fixed_now();
        match token {
            TEST_TOKEN => Ok(AuthenticatedUser {
                id: test_user_id(),
                username: "tester".into(),
                issued_at: now,
                expires_at: now + Duration::hours(1),
            }),
            _ => Err(ApplicationError::unauthorized("invalid token")),
        }
    }
}

/// Stable identity behind `TEST_TOKEN`, so a test can act as the same
/// user across several requests.
pub fn test_user_id() -> UserId {
    UserId::from(uuid::Uuid::from_u128(0x1))
}
