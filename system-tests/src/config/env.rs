// system-tests/src/config/env.rs
// ============================================================================
// Module: System Test Environment
// Description: Environment-backed configuration for iiko system tests.
// Purpose: Centralize env parsing with strict UTF-8 validation.
// Dependencies: iiko-client
// ============================================================================

//! ## Overview
//! Environment values are parsed with strict UTF-8 enforcement to avoid silent
//! misconfiguration. Invalid UTF-8 and empty values fail closed. Missing
//! server URL, login or password are not errors at read time: they surface
//! when a case builds its client, as part of session setup.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::time::Duration;

use iiko_client::ClientConfig;
use iiko_client::PasswordDigest;

// ============================================================================
// SECTION: Environment Constants
// ============================================================================

/// Department used by cases that need one when no override is set.
pub const DEFAULT_DEPARTMENT_ID: &str = "65430fca-3116-f1b6-0197-5488678d0012";
/// Pause after teardown so pooled connections finish closing.
pub const DEFAULT_TEARDOWN_GRACE: Duration = Duration::from_millis(100);

/// Environment keys for system test configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HarnessEnv {
    /// API base URL, for example `https://host:443/resto/api`.
    ServerUrl,
    /// Login identifier.
    Login,
    /// Raw password; digested before it leaves the process.
    Password,
    /// Log request and response bodies (`true`/`false` or `1`/`0`).
    Debug,
    /// Optional per-request timeout in seconds (positive integer).
    TimeoutSeconds,
    /// Optional department override.
    DepartmentId,
}

impl HarnessEnv {
    /// Returns the canonical environment variable name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ServerUrl => "IIKO_SERVER_URL",
            Self::Login => "IIKO_SERVER_LOGIN",
            Self::Password => "IIKO_SERVER_PASSWORD",
            Self::Debug => "IIKO_SERVER_DEBUG",
            Self::TimeoutSeconds => "IIKO_SERVER_TIMEOUT_SEC",
            Self::DepartmentId => "IIKO_TEST_DEPARTMENT_ID",
        }
    }
}

// ============================================================================
// SECTION: Config Types
// ============================================================================

/// Typed harness configuration derived from environment variables.
#[derive(Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    /// API base URL.
    pub server_url: Option<String>,
    /// Login identifier.
    pub login: Option<String>,
    /// Raw password.
    pub password: Option<String>,
    /// Log request and response bodies.
    pub debug: bool,
    /// Per-request timeout override.
    pub timeout: Option<Duration>,
    /// Department used by department-scoped cases.
    pub department_id: String,
    /// Pause after teardown.
    pub teardown_grace: Duration,
}

impl std::fmt::Debug for HarnessConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HarnessConfig")
            .field("server_url", &self.server_url)
            .field("login", &self.login)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("debug", &self.debug)
            .field("timeout", &self.timeout)
            .field("department_id", &self.department_id)
            .field("teardown_grace", &self.teardown_grace)
            .finish()
    }
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            server_url: None,
            login: None,
            password: None,
            debug: false,
            timeout: None,
            department_id: DEFAULT_DEPARTMENT_ID.to_string(),
            teardown_grace: DEFAULT_TEARDOWN_GRACE,
        }
    }
}

impl HarnessConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error when an environment value is not valid UTF-8, is empty,
    /// or fails validation (for example, an invalid timeout or boolean value).
    pub fn load() -> Result<Self, String> {
        let server_url = read_env_nonempty(HarnessEnv::ServerUrl.as_str())?;
        let login = read_env_nonempty(HarnessEnv::Login.as_str())?;
        let password = read_env_strict(HarnessEnv::Password.as_str())?;
        let debug = parse_bool_env(
            HarnessEnv::Debug.as_str(),
            read_env_nonempty(HarnessEnv::Debug.as_str())?,
        )?;
        let timeout = read_env_nonempty(HarnessEnv::TimeoutSeconds.as_str())?
            .map(|value| parse_timeout_seconds(HarnessEnv::TimeoutSeconds.as_str(), &value))
            .transpose()?;
        let department_id = read_env_nonempty(HarnessEnv::DepartmentId.as_str())?
            .map_or_else(|| DEFAULT_DEPARTMENT_ID.to_string(), |value| value.trim().to_string());
        Ok(Self {
            server_url,
            login,
            password,
            debug,
            timeout,
            department_id,
            teardown_grace: DEFAULT_TEARDOWN_GRACE,
        })
    }

    /// Builds a configuration for an explicit server and credentials.
    #[must_use]
    pub fn for_server(
        server_url: impl Into<String>,
        login: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            server_url: Some(server_url.into()),
            login: Some(login.into()),
            password: Some(password.into()),
            ..Self::default()
        }
    }

    /// Overrides the pause after teardown.
    #[must_use]
    pub const fn with_teardown_grace(mut self, grace: Duration) -> Self {
        self.teardown_grace = grace;
        self
    }

    /// Digests the configured password.
    ///
    /// # Errors
    ///
    /// Returns an error when no password is configured.
    pub fn password_digest(&self) -> Result<PasswordDigest, String> {
        self.password
            .as_deref()
            .map(PasswordDigest::from_password)
            .ok_or_else(|| format!("{} is not set", HarnessEnv::Password.as_str()))
    }

    /// Builds the client configuration for one case.
    ///
    /// # Errors
    ///
    /// Returns an error when the server URL or login is missing, or the
    /// resulting client configuration is invalid.
    pub fn client_config(&self) -> Result<ClientConfig, String> {
        let server_url = self
            .server_url
            .as_deref()
            .ok_or_else(|| format!("{} is not set", HarnessEnv::ServerUrl.as_str()))?;
        let login = self
            .login
            .as_deref()
            .ok_or_else(|| format!("{} is not set", HarnessEnv::Login.as_str()))?;
        let mut config = ClientConfig::new(
            server_url,
            login,
            self.password.clone().unwrap_or_default(),
        )
        .with_debug(self.debug);
        if let Some(timeout) = self.timeout {
            config = config.with_timeout(timeout);
        }
        config.validate().map_err(|err| err.to_string())?;
        Ok(config)
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Reads an environment variable and enforces UTF-8 validity.
///
/// # Errors
///
/// Returns an error when the environment variable contains invalid UTF-8.
pub fn read_env_strict(name: &str) -> Result<Option<String>, String> {
    std::env::var_os(name).map_or(Ok(None), |raw| {
        raw.into_string().map(Some).map_err(|_| format!("{name} must be valid UTF-8"))
    })
}

/// Reads an environment variable and rejects empty values.
///
/// # Errors
///
/// Returns an error when the variable is set but empty or whitespace.
fn read_env_nonempty(name: &str) -> Result<Option<String>, String> {
    match read_env_strict(name)? {
        Some(value) if value.trim().is_empty() => Err(format!("{name} must not be empty")),
        Some(value) => Ok(Some(value)),
        None => Ok(None),
    }
}

/// Parses a positive timeout value from an environment variable string.
///
/// # Errors
///
/// Returns an error when the value is non-numeric or zero.
fn parse_timeout_seconds(name: &str, raw: &str) -> Result<Duration, String> {
    let secs: u64 = raw
        .trim()
        .parse()
        .map_err(|_| format!("{name} must be a positive integer number of seconds"))?;
    if secs == 0 {
        return Err(format!("{name} must be greater than zero"));
    }
    Ok(Duration::from_secs(secs))
}

/// Parses a boolean environment variable; unset means `false`.
///
/// # Errors
///
/// Returns an error when the value is not a recognized boolean literal.
fn parse_bool_env(name: &str, raw: Option<String>) -> Result<bool, String> {
    let Some(value) = raw else {
        return Ok(false);
    };
    let trimmed = value.trim();
    if trimmed.eq_ignore_ascii_case("true") || trimmed == "1" {
        return Ok(true);
    }
    if trimmed.eq_ignore_ascii_case("false") || trimmed == "0" {
        return Ok(false);
    }
    Err(format!("{name} must be 1, 0, true, or false"))
}
