// SPDX-FileCopyrightText: 2026 Veridian Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-process login-completion recorder for deterministic testing.
//!
//! `LoginRecorder` implements `LoginContext` and captures the terminal
//! outcome of one handled login, with assertion helpers for tests.

use async_trait::async_trait;
use tokio::sync::Mutex;

use veridian_core::{LoginContext, LoginError, LoginFailureKind, NormalizedIdentity};

/// The terminal outcome of one handled login request.
#[derive(Debug, Clone)]
pub enum LoginOutcome {
    /// The provider committed a normalized identity.
    Success(NormalizedIdentity),
    /// The provider reported a failure.
    Failure {
        kind: LoginFailureKind,
        message: String,
    },
}

/// A `LoginContext` that records the outcome instead of driving a session.
///
/// Panics if a provider completes the same request twice, which would be a
/// contract violation.
#[derive(Debug, Default)]
pub struct LoginRecorder {
    outcome: Mutex<Option<LoginOutcome>>,
}

impl LoginRecorder {
    /// Create a recorder with no outcome yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded outcome, if the login has completed.
    pub async fn outcome(&self) -> Option<LoginOutcome> {
        self.outcome.lock().await.clone()
    }

    /// Asserts the login succeeded with the given username and returns the
    /// committed identity for further inspection.
    pub async fn assert_success(&self, username: &str) -> NormalizedIdentity {
        match self.outcome().await {
            Some(LoginOutcome::Success(identity)) => {
                assert_eq!(identity.username, username, "unexpected username");
                identity
            }
            Some(LoginOutcome::Failure { message, .. }) => {
                panic!("expected login success, got failure: {message}")
            }
            None => panic!("login did not complete"),
        }
    }

    /// Asserts the login failed with a message matching `pattern` (a regex)
    /// and returns the failure kind.
    pub async fn assert_failure_matches(&self, pattern: &str) -> LoginFailureKind {
        let re = regex::Regex::new(pattern).expect("invalid test pattern");
        match self.outcome().await {
            Some(LoginOutcome::Failure { kind, message }) => {
                assert!(
                    re.is_match(&message),
                    "failure message `{message}` does not match `{pattern}`"
                );
                kind
            }
            Some(LoginOutcome::Success(identity)) => {
                panic!(
                    "expected login failure, got success for {}",
                    identity.username
                )
            }
            None => panic!("login did not complete"),
        }
    }
}

#[async_trait]
impl LoginContext for LoginRecorder {
    async fn login_success(&self, identity: NormalizedIdentity) {
        let mut slot = self.outcome.lock().await;
        assert!(slot.is_none(), "login completed twice");
        *slot = Some(LoginOutcome::Success(identity));
    }

    async fn login_failure(&self, error: &LoginError) {
        let mut slot = self.outcome.lock().await;
        assert!(slot.is_none(), "login completed twice");
        *slot = Some(LoginOutcome::Failure {
            kind: error.kind(),
            message: error.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn records_failure_outcome() {
        let recorder = LoginRecorder::new();
        recorder
            .login_failure(&LoginError::InvalidCredentials {
                message: "invalid credentials".into(),
            })
            .await;

        let kind = recorder
            .assert_failure_matches("cannot log in:.*invalid credentials")
            .await;
        assert_eq!(kind, LoginFailureKind::Credential);
    }

    #[tokio::test]
    #[should_panic(expected = "login did not complete")]
    async fn assert_success_panics_without_outcome() {
        let recorder = LoginRecorder::new();
        recorder.assert_success("user@domain").await;
    }
}
