// crates/iiko-client/src/auth.rs
// ============================================================================
// Module: Credentials
// Description: Password digesting and session key wrappers.
// Purpose: Keep credential material out of logs and off the wire in raw form.
// Dependencies: sha1, hex
// ============================================================================

//! ## Overview
//! The login endpoint expects the lowercase hexadecimal SHA-1 digest of the
//! password. [`PasswordDigest`] is the only form in which a password leaves
//! this crate. [`SessionToken`] wraps the opaque key the server hands back.
//! Both types redact themselves in `Debug` output.

// ============================================================================
// SECTION: Imports
// ============================================================================

use sha1::Digest;
use sha1::Sha1;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Length of a hex-encoded SHA-1 digest.
pub const PASSWORD_DIGEST_LEN: usize = 40;

// ============================================================================
// SECTION: Password Digest
// ============================================================================

/// Hex-encoded SHA-1 digest of a login password.
///
/// # Invariants
/// - Always exactly [`PASSWORD_DIGEST_LEN`] lowercase hex characters.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordDigest(String);

impl PasswordDigest {
    /// Digests a raw password.
    #[must_use]
    pub fn from_password(password: &str) -> Self {
        let digest = Sha1::digest(password.as_bytes());
        Self(hex::encode(digest))
    }

    /// Returns the digest as sent on the wire.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for PasswordDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("PasswordDigest(<redacted>)")
    }
}

// ============================================================================
// SECTION: Session Token
// ============================================================================

/// Opaque session key returned by a successful login.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    /// Wraps a key returned by the server, trimming surrounding whitespace
    /// and quotes some server builds add to the plain-text body.
    #[must_use]
    pub fn new(raw: &str) -> Option<Self> {
        let key = raw.trim().trim_matches('"').trim();
        if key.is_empty() { None } else { Some(Self(key.to_string())) }
    }

    /// Returns the raw key for attaching to requests.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SessionToken(<redacted>)")
    }
}
