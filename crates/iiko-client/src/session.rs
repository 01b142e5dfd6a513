// crates/iiko-client/src/session.rs
// ============================================================================
// Module: Session Lifecycle
// Description: Login/logout endpoints and the per-transport session slot.
// Purpose: Enforce the UNAUTHENTICATED -> AUTHENTICATED -> LOGGED_OUT cycle.
// Dependencies: crate::transport, tracing
// ============================================================================

//! ## Overview
//! A transport carries at most one session over its lifetime. Login is only
//! accepted from [`SessionState::Unauthenticated`]; logout always moves the
//! slot to [`SessionState::LoggedOut`], even when the server call fails, so a
//! released key is never attached to later requests.

// ============================================================================
// SECTION: Imports
// ============================================================================

use tracing::debug;
use tracing::info;

use crate::auth::PasswordDigest;
use crate::auth::SessionToken;
use crate::error::ClientError;
use crate::query::QueryParams;
use crate::transport::Auth;
use crate::transport::HttpTransport;
use crate::transport::Request;
use crate::transport::RequestBody;

// ============================================================================
// SECTION: State
// ============================================================================

/// Session lifecycle states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// No login attempted yet.
    #[default]
    Unauthenticated,
    /// A session key is held and attached to requests.
    Authenticated,
    /// The session was released; the transport cannot log in again.
    LoggedOut,
}

impl SessionState {
    /// Returns a stable label for logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unauthenticated => "unauthenticated",
            Self::Authenticated => "authenticated",
            Self::LoggedOut => "logged_out",
        }
    }
}

/// Session slot held by the transport.
///
/// # Invariants
/// - `token.is_some()` exactly when `state == Authenticated`.
#[derive(Debug, Default)]
pub(crate) struct SessionSlot {
    /// Current lifecycle state.
    state: SessionState,
    /// Key attached to authenticated requests.
    token: Option<SessionToken>,
}

impl SessionSlot {
    /// Returns the lifecycle state.
    pub(crate) const fn state(&self) -> SessionState {
        self.state
    }

    /// Fails unless no session has been opened yet.
    pub(crate) fn ensure_unauthenticated(&self) -> Result<(), ClientError> {
        match self.state {
            SessionState::Unauthenticated => Ok(()),
            SessionState::Authenticated => {
                Err(ClientError::Session("a session is already open".to_string()))
            }
            SessionState::LoggedOut => {
                Err(ClientError::Session("transport was already logged out".to_string()))
            }
        }
    }

    /// Moves to `Authenticated` with the given key.
    pub(crate) fn open(&mut self, token: SessionToken) -> Result<(), ClientError> {
        self.ensure_unauthenticated()?;
        self.state = SessionState::Authenticated;
        self.token = Some(token);
        Ok(())
    }

    /// Returns the key for an authenticated request.
    pub(crate) fn token(&self) -> Result<SessionToken, ClientError> {
        match (&self.state, &self.token) {
            (SessionState::Authenticated, Some(token)) => Ok(token.clone()),
            (SessionState::LoggedOut, _) => {
                Err(ClientError::Session("session was logged out".to_string()))
            }
            _ => Err(ClientError::Session("no session is open".to_string())),
        }
    }

    /// Moves to `LoggedOut` and returns the released key.
    pub(crate) fn close(&mut self) -> Result<SessionToken, ClientError> {
        let token = self.token()?;
        self.state = SessionState::LoggedOut;
        self.token = None;
        Ok(token)
    }
}

// ============================================================================
// SECTION: Session API
// ============================================================================

/// Login and logout endpoints.
#[derive(Debug, Clone, Copy)]
pub struct SessionApi<'a> {
    /// Shared transport.
    transport: &'a HttpTransport,
}

impl<'a> SessionApi<'a> {
    /// Binds the API to a transport.
    #[must_use]
    pub const fn new(transport: &'a HttpTransport) -> Self {
        Self {
            transport,
        }
    }

    /// Opens a session with a login and password digest (`POST /auth`).
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Session`] when a session was already opened on
    /// this transport, and the HTTP error when the server rejects the login.
    pub async fn login(&self, login: &str, digest: &PasswordDigest) -> Result<(), ClientError> {
        self.transport.ensure_can_login()?;
        let form = QueryParams::new().text("login", login).text("pass", digest.as_str());
        let request = Request {
            auth: Auth::Anonymous,
            sensitive: true,
            ..Request::post("auth", RequestBody::Form(form.to_form_body()))
        };
        let body = self.transport.send_text(request).await?;
        let token = SessionToken::new(&body)
            .ok_or_else(|| ClientError::Decode("login returned an empty session key".into()))?;
        self.transport.open_session(token)?;
        info!(login = %login, "iiko session opened");
        Ok(())
    }

    /// Releases the session (`POST /logout`).
    ///
    /// The local slot moves to [`SessionState::LoggedOut`] before the request
    /// is sent, so the key is released even when the server call fails.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Session`] when no session is open, or the
    /// transport error of the logout call.
    pub async fn logout(&self) -> Result<(), ClientError> {
        let token = self.transport.close_session()?;
        let form = QueryParams::new().text("key", token.expose());
        let request = Request {
            auth: Auth::Anonymous,
            sensitive: true,
            ..Request::post("logout", RequestBody::Form(form.to_form_body()))
        };
        self.transport.send(request).await?;
        debug!("iiko session released");
        Ok(())
    }

    /// Returns the current lifecycle state.
    #[must_use]
    pub fn state(&self) -> SessionState {
        self.transport.session_state()
    }
}
