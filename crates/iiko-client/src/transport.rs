// crates/iiko-client/src/transport.rs
// ============================================================================
// Module: HTTP Transport
// Description: Shared reqwest transport bound to one base URL and session.
// Purpose: Issue single-attempt JSON, form, and text requests with limits.
// Dependencies: reqwest, serde_json, tracing, url
// ============================================================================

//! ## Overview
//! [`HttpTransport`] owns the reqwest client, the normalized base URL and the
//! session slot. Authenticated requests fail locally with
//! [`ClientError::Session`] unless a session is open; the session key travels
//! in the `key` cookie. Each call is one attempt: no retry, no redirects.
//! Response bodies are read under a hard byte limit.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Mutex;
use std::sync::MutexGuard;
use std::time::Duration;

use reqwest::Client;
use reqwest::Method;
use reqwest::header::ACCEPT;
use reqwest::header::CONTENT_TYPE;
use reqwest::header::COOKIE;
use reqwest::header::HeaderMap;
use reqwest::header::HeaderValue;
use reqwest::redirect::Policy;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::auth::SessionToken;
use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::query::QueryParams;
use crate::session::SessionSlot;
use crate::session::SessionState;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Maximum number of body bytes echoed into errors and debug logs.
const BODY_PREVIEW_BYTES: usize = 2_048;
/// Content type for JSON payloads.
const CONTENT_TYPE_JSON: &str = "application/json";
/// Content type for form payloads.
const CONTENT_TYPE_FORM: &str = "application/x-www-form-urlencoded";

// ============================================================================
// SECTION: Types
// ============================================================================

/// Request body variants supported by the server.
#[derive(Debug)]
pub enum RequestBody {
    /// No body.
    Empty,
    /// Serialized JSON document.
    Json(Vec<u8>),
    /// URL-encoded form body.
    Form(String),
}

/// Whether a request carries the session key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Auth {
    /// Attach the session key; fail locally when no session is open.
    Session,
    /// Send without credentials (login only).
    Anonymous,
}

/// A single request description.
#[derive(Debug)]
pub struct Request<'a> {
    /// HTTP method.
    pub method: Method,
    /// Endpoint path relative to the base URL, without a leading slash.
    pub path: &'a str,
    /// Query parameters.
    pub query: QueryParams,
    /// Request body.
    pub body: RequestBody,
    /// Credential mode.
    pub auth: Auth,
    /// Suppresses body logging for credential-bearing requests.
    pub sensitive: bool,
}

impl<'a> Request<'a> {
    /// Builds an authenticated GET.
    #[must_use]
    pub fn get(path: &'a str, query: QueryParams) -> Self {
        Self {
            method: Method::GET,
            path,
            query,
            body: RequestBody::Empty,
            auth: Auth::Session,
            sensitive: false,
        }
    }

    /// Builds an authenticated POST with the given body.
    #[must_use]
    pub fn post(path: &'a str, body: RequestBody) -> Self {
        Self {
            method: Method::POST,
            path,
            query: QueryParams::new(),
            body,
            auth: Auth::Session,
            sensitive: false,
        }
    }
}

/// Shared HTTP transport.
///
/// # Invariants
/// - `base_url` always ends with `/`.
/// - `session` holds a token exactly when its state is `Authenticated`.
pub struct HttpTransport {
    /// Reqwest client instance.
    client: Client,
    /// Normalized API base URL.
    base_url: Url,
    /// Log bodies at DEBUG.
    debug: bool,
    /// Per-request timeout, reported in timeout errors.
    timeout: Duration,
    /// Maximum accepted response size.
    max_response_bytes: usize,
    /// Session lifecycle slot.
    session: Mutex<SessionSlot>,
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("base_url", &self.base_url.as_str())
            .field("debug", &self.debug)
            .field("timeout", &self.timeout)
            .field("max_response_bytes", &self.max_response_bytes)
            .finish_non_exhaustive()
    }
}

impl HttpTransport {
    /// Builds a transport from validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] when the configuration is invalid or the HTTP
    /// client cannot be constructed.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        config.validate()?;
        let base_url = config.base_url()?;
        let timeout = config.timeout();
        let client = Client::builder()
            .timeout(timeout)
            .redirect(Policy::none())
            .user_agent(concat!("iiko-client/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|err| ClientError::Transport(err.to_string()))?;
        Ok(Self {
            client,
            base_url,
            debug: config.debug,
            timeout,
            max_response_bytes: config.max_response_bytes,
            session: Mutex::new(SessionSlot::default()),
        })
    }

    /// Returns the normalized base URL.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns the current session state.
    #[must_use]
    pub fn session_state(&self) -> SessionState {
        self.lock_session().map_or(SessionState::LoggedOut, |slot| slot.state())
    }

    /// Builds the absolute URL for an endpoint path and query.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] when the path cannot be joined.
    pub fn endpoint(&self, path: &str, query: &QueryParams) -> Result<Url, ClientError> {
        let mut url = self
            .base_url
            .join(path.trim_start_matches('/'))
            .map_err(|err| ClientError::Config(format!("invalid endpoint path {path}: {err}")))?;
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in query.pairs() {
                pairs.append_pair(name, value);
            }
        }
        Ok(url)
    }

    /// Sends a request and decodes a JSON response.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] when transport, status, or decoding fails.
    pub async fn send_json<T: DeserializeOwned>(
        &self,
        request: Request<'_>,
    ) -> Result<T, ClientError> {
        let path = request.path.to_string();
        let body = self.send(request).await?;
        decode_json(&path, &body)
    }

    /// Sends a request and returns the response body as text.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] when transport or status handling fails.
    pub async fn send_text(&self, request: Request<'_>) -> Result<String, ClientError> {
        let body = self.send(request).await?;
        String::from_utf8(body)
            .map_err(|_| ClientError::Decode("response body is not valid utf-8".to_string()))
    }

    /// Sends a request and returns the raw body of a successful response.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] when the session is missing, the request fails,
    /// the body exceeds limits, or the status is not a success.
    pub async fn send(&self, request: Request<'_>) -> Result<Vec<u8>, ClientError> {
        let url = self.endpoint(request.path, &request.query)?;
        let headers = self.headers(&request)?;
        let log_bodies = self.debug && !request.sensitive;
        debug!(method = %request.method, path = request.path, "iiko request");
        let mut builder = self.client.request(request.method.clone(), url).headers(headers);
        match request.body {
            RequestBody::Empty => {}
            RequestBody::Json(bytes) => {
                if log_bodies {
                    debug!(body = %preview(&bytes), "iiko request body");
                }
                builder = builder.body(bytes);
            }
            RequestBody::Form(form) => {
                if log_bodies {
                    debug!(body = %form, "iiko request body");
                }
                builder = builder.body(form);
            }
        }
        let response = builder.send().await.map_err(|err| self.map_send_error(&err))?;
        let status = response.status();
        let body = read_response_body_with_limit(response, self.max_response_bytes).await?;
        debug!(
            method = %request.method,
            path = request.path,
            status = status.as_u16(),
            bytes = body.len(),
            "iiko response"
        );
        if log_bodies {
            debug!(body = %preview(&body), "iiko response body");
        }
        if !status.is_success() {
            return Err(ClientError::Http {
                status: status.as_u16(),
                body: preview(&body).trim().to_string(),
            });
        }
        Ok(body)
    }

    /// Serializes a payload as a JSON request body.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Decode`] when serialization fails.
    pub fn json_body<B: Serialize>(payload: &B) -> Result<RequestBody, ClientError> {
        serde_json::to_vec(payload)
            .map(RequestBody::Json)
            .map_err(|err| ClientError::Decode(format!("request serialization failed: {err}")))
    }

    // ------------------------------------------------------------------------
    // Session slot access
    // ------------------------------------------------------------------------

    /// Stores a freshly issued session key.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Session`] when a session is already open or
    /// the transport has already been logged out.
    pub(crate) fn open_session(&self, token: SessionToken) -> Result<(), ClientError> {
        self.lock_session()?.open(token)
    }

    /// Ensures a new session may be opened.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Session`] when the slot is not unauthenticated.
    pub(crate) fn ensure_can_login(&self) -> Result<(), ClientError> {
        self.lock_session()?.ensure_unauthenticated()
    }

    /// Marks the session as logged out and returns the released key.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Session`] when no session is open.
    pub(crate) fn close_session(&self) -> Result<SessionToken, ClientError> {
        self.lock_session()?.close()
    }

    /// Returns the current key for authenticated requests.
    fn current_token(&self) -> Result<SessionToken, ClientError> {
        self.lock_session()?.token()
    }

    /// Locks the session slot.
    fn lock_session(&self) -> Result<MutexGuard<'_, SessionSlot>, ClientError> {
        self.session
            .lock()
            .map_err(|_| ClientError::Session("session state lock poisoned".to_string()))
    }

    // ------------------------------------------------------------------------
    // Request helpers
    // ------------------------------------------------------------------------

    /// Builds request headers, attaching the session key when required.
    fn headers(&self, request: &Request<'_>) -> Result<HeaderMap, ClientError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json, text/plain"));
        match request.body {
            RequestBody::Empty => {}
            RequestBody::Json(_) => {
                headers.insert(CONTENT_TYPE, HeaderValue::from_static(CONTENT_TYPE_JSON));
            }
            RequestBody::Form(_) => {
                headers.insert(CONTENT_TYPE, HeaderValue::from_static(CONTENT_TYPE_FORM));
            }
        }
        if request.auth == Auth::Session {
            let token = self.current_token()?;
            let mut value = HeaderValue::from_str(&format!("key={}", token.expose()))
                .map_err(|_| ClientError::Session("session key is not a valid header".into()))?;
            value.set_sensitive(true);
            headers.insert(COOKIE, value);
        }
        Ok(headers)
    }

    /// Maps reqwest send failures into client errors.
    fn map_send_error(&self, err: &reqwest::Error) -> ClientError {
        if err.is_timeout() {
            ClientError::Timeout {
                timeout_ms: u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX),
            }
        } else {
            ClientError::Transport(err.to_string())
        }
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Decodes a JSON body with the endpoint path in the error message.
///
/// # Errors
///
/// Returns [`ClientError::Decode`] when the body does not match `T`.
pub fn decode_json<T: DeserializeOwned>(path: &str, body: &[u8]) -> Result<T, ClientError> {
    serde_json::from_slice(body)
        .map_err(|err| ClientError::Decode(format!("invalid {path} payload: {err}")))
}

/// Returns a lossy, bounded text preview of a body.
fn preview(body: &[u8]) -> String {
    let end = body.len().min(BODY_PREVIEW_BYTES);
    let mut text = String::from_utf8_lossy(&body[.. end]).into_owned();
    if body.len() > BODY_PREVIEW_BYTES {
        text.push_str("...");
    }
    text
}

/// Reads a response body while enforcing a hard byte limit.
async fn read_response_body_with_limit(
    mut response: reqwest::Response,
    limit: usize,
) -> Result<Vec<u8>, ClientError> {
    let mut body = Vec::new();
    while let Some(chunk) =
        response.chunk().await.map_err(|err| ClientError::Transport(err.to_string()))?
    {
        let next_total = body.len().checked_add(chunk.len()).ok_or(
            ClientError::ResponseTooLarge {
                actual: usize::MAX,
                limit,
            },
        )?;
        if next_total > limit {
            return Err(ClientError::ResponseTooLarge {
                actual: next_total,
                limit,
            });
        }
        body.extend_from_slice(&chunk);
    }
    Ok(body)
}
