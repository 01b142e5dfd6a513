// system-tests/src/harness.rs
// ============================================================================
// Module: Authenticated Session Harness
// Description: Login/logout bracket around one test case body.
// Purpose: Guarantee session release regardless of how a case ends.
// Dependencies: futures, iiko-client, thiserror, tokio, tracing
// ============================================================================

//! ## Overview
//! [`with_session`] runs one case as setup, body, teardown:
//!
//! - Setup digests the password, builds a client bound to the configured
//!   server and opens a session. Any failure here is a
//!   [`HarnessError::Setup`] and the body never runs.
//! - The body receives a [`SessionHarness`] and returns a
//!   [`CaseFailure`] on failure.
//! - Teardown always runs: logout while a session is open (failures are
//!   logged and swallowed), client close, then a short grace pause. A body
//!   panic is resumed only after teardown completes.
//!
//! Expected server refusals are declared per call with [`Tolerate`], keyed
//! on [`ErrorKind`] rather than message text.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::panic::AssertUnwindSafe;
use std::time::Duration;

use futures::FutureExt;
use iiko_client::ClientError;
use iiko_client::ErrorKind;
use iiko_client::IikoClient;
use iiko_client::SessionState;
use thiserror::Error;
use tracing::debug;
use tracing::info;
use tracing::warn;

use crate::config::HarnessConfig;
use crate::logging::init_logging;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Failure of one test case body.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{context}: {message}")]
pub struct CaseFailure {
    /// Step that failed.
    pub context: String,
    /// Original error or assertion text.
    pub message: String,
    /// Client error kind when the failure came from a call.
    pub kind: Option<ErrorKind>,
}

impl CaseFailure {
    /// Builds an assertion failure.
    #[must_use]
    pub fn new(context: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            context: context.into(),
            message: message.into(),
            kind: None,
        }
    }

    /// Builds a failure from a client error, keeping its kind.
    #[must_use]
    pub fn from_client(context: impl Into<String>, err: &ClientError) -> Self {
        Self {
            context: context.into(),
            message: err.to_string(),
            kind: Some(err.kind()),
        }
    }
}

impl From<ClientError> for CaseFailure {
    fn from(err: ClientError) -> Self {
        Self::from_client("client call", &err)
    }
}

/// Harness outcome errors.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// Configuration, digest or login failed; the body did not run.
    #[error("session setup failed: {0}")]
    Setup(String),
    /// The body failed.
    #[error(transparent)]
    Case(#[from] CaseFailure),
}

/// Attaches a step name to client results.
pub trait CallContext<T> {
    /// Converts the error into a [`CaseFailure`] labelled with `context`.
    ///
    /// # Errors
    ///
    /// Returns the labelled failure when the call failed.
    fn context(self, context: &str) -> Result<T, CaseFailure>;
}

impl<T> CallContext<T> for Result<T, ClientError> {
    fn context(self, context: &str) -> Result<T, CaseFailure> {
        self.map_err(|err| CaseFailure::from_client(context, &err))
    }
}

/// Fails the case with `message` unless `condition` holds.
///
/// # Errors
///
/// Returns a [`CaseFailure`] when the condition is false.
pub fn ensure(condition: bool, context: &str, message: impl Into<String>) -> Result<(), CaseFailure> {
    if condition { Ok(()) } else { Err(CaseFailure::new(context, message)) }
}

// ============================================================================
// SECTION: Tolerated Outcomes
// ============================================================================

/// Error kinds a call may end with without failing the case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tolerate {
    /// Accepted kinds.
    kinds: &'static [ErrorKind],
    /// Why the kinds are acceptable, for logs.
    reason: &'static str,
}

impl Tolerate {
    /// Declares the tolerated kinds.
    #[must_use]
    pub const fn kinds(kinds: &'static [ErrorKind], reason: &'static str) -> Self {
        Self {
            kinds,
            reason,
        }
    }

    /// Returns true when `kind` is tolerated.
    #[must_use]
    pub fn allows(&self, kind: ErrorKind) -> bool {
        self.kinds.contains(&kind)
    }

    /// Passes successes through and turns tolerated errors into `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns a [`CaseFailure`] for errors of any other kind.
    pub fn apply<T>(
        &self,
        context: &str,
        result: Result<T, ClientError>,
    ) -> Result<Option<T>, CaseFailure> {
        match result {
            Ok(value) => Ok(Some(value)),
            Err(err) if self.allows(err.kind()) => {
                info!(
                    step = context,
                    kind = %err.kind(),
                    reason = self.reason,
                    error = %err,
                    "tolerated server outcome"
                );
                Ok(None)
            }
            Err(err) => Err(CaseFailure::from_client(context, &err)),
        }
    }
}

// ============================================================================
// SECTION: Session Harness
// ============================================================================

/// Per-case view handed to the body.
#[derive(Debug)]
pub struct SessionHarness {
    /// Authenticated client.
    client: IikoClient,
    /// Configuration the case was started with.
    config: HarnessConfig,
}

impl SessionHarness {
    /// Returns the authenticated client.
    #[must_use]
    pub const fn client(&self) -> &IikoClient {
        &self.client
    }

    /// Returns the department used by department-scoped calls.
    #[must_use]
    pub fn department_id(&self) -> &str {
        &self.config.department_id
    }

    /// Returns the case configuration.
    #[must_use]
    pub const fn config(&self) -> &HarnessConfig {
        &self.config
    }
}

/// Runs `body` inside a fresh authenticated session.
///
/// # Errors
///
/// Returns [`HarnessError::Setup`] when the session could not be opened and
/// [`HarnessError::Case`] when the body failed.
///
/// # Panics
///
/// Resumes a panic raised by `body` once teardown has finished.
pub async fn with_session<T, F>(config: &HarnessConfig, body: F) -> Result<T, HarnessError>
where
    F: AsyncFnOnce(&SessionHarness) -> Result<T, CaseFailure>,
{
    init_logging(config.debug);
    let harness = SessionHarness {
        client: open_session(config).await?,
        config: config.clone(),
    };

    let outcome = AssertUnwindSafe(body(&harness)).catch_unwind().await;

    let SessionHarness {
        client, ..
    } = harness;
    teardown(client, config.teardown_grace).await;

    match outcome {
        Ok(result) => result.map_err(HarnessError::Case),
        Err(payload) => std::panic::resume_unwind(payload),
    }
}

/// Loads the configuration from the environment and runs `body`.
///
/// # Errors
///
/// Returns [`HarnessError::Setup`] when the environment is invalid, plus the
/// errors of [`with_session`].
pub async fn with_env_session<T, F>(body: F) -> Result<T, HarnessError>
where
    F: AsyncFnOnce(&SessionHarness) -> Result<T, CaseFailure>,
{
    let config = HarnessConfig::load().map_err(HarnessError::Setup)?;
    with_session(&config, body).await
}

/// Digests the password, builds the client and logs in.
async fn open_session(config: &HarnessConfig) -> Result<IikoClient, HarnessError> {
    let digest = config.password_digest().map_err(HarnessError::Setup)?;
    let client_config = config.client_config().map_err(HarnessError::Setup)?;
    let client = IikoClient::new(&client_config)
        .map_err(|err| HarnessError::Setup(err.to_string()))?;
    let login = client.session().login(&client_config.login, &digest).await;
    if let Err(err) = login {
        client.close();
        return Err(HarnessError::Setup(format!("login rejected: {err}")));
    }
    debug!(server = client_config.server_url.as_str(), "case session opened");
    Ok(client)
}

/// Releases the session and the client. Never fails.
async fn teardown(client: IikoClient, grace: Duration) {
    if client.session_state() == SessionState::Authenticated {
        match client.session().logout().await {
            Ok(()) => debug!("case session released"),
            Err(err) => warn!(kind = %err.kind(), error = %err, "logout failed during teardown"),
        }
    }
    client.close();
    if !grace.is_zero() {
        tokio::time::sleep(grace).await;
    }
}
