// crates/iiko-client/src/query.rs
// ============================================================================
// Module: Query Parameters
// Description: Builder for iiko query strings and form bodies.
// Purpose: Keep parameter encoding conventions in one place.
// Dependencies: time, url
// ============================================================================

//! ## Overview
//! The server expects booleans as `true`/`false`, dates as `YYYY-MM-DD`, and
//! list parameters repeated once per value (`id=a&id=b`). [`QueryParams`]
//! collects pairs in insertion order; the transport appends them to the URL
//! or encodes them as `application/x-www-form-urlencoded` bodies.

// ============================================================================
// SECTION: Imports
// ============================================================================

use time::Date;
use url::form_urlencoded;

use crate::models::format_date;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Ordered list of query or form parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    /// Encoded name/value pairs in insertion order.
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Creates an empty parameter list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pairs: Vec::new(),
        }
    }

    /// Adds a boolean flag.
    #[must_use]
    pub fn flag(self, name: &str, value: bool) -> Self {
        self.text(name, if value { "true" } else { "false" })
    }

    /// Adds a text value.
    #[must_use]
    pub fn text(mut self, name: &str, value: impl Into<String>) -> Self {
        self.pairs.push((name.to_string(), value.into()));
        self
    }

    /// Adds a text value when present.
    #[must_use]
    pub fn opt_text(self, name: &str, value: Option<&str>) -> Self {
        match value {
            Some(value) => self.text(name, value),
            None => self,
        }
    }

    /// Adds an integer value.
    #[must_use]
    pub fn int(self, name: &str, value: i64) -> Self {
        self.text(name, value.to_string())
    }

    /// Adds a `YYYY-MM-DD` date.
    #[must_use]
    pub fn date(self, name: &str, value: Date) -> Self {
        self.text(name, format_date(value))
    }

    /// Adds a `YYYY-MM-DD` date when present.
    #[must_use]
    pub fn opt_date(self, name: &str, value: Option<Date>) -> Self {
        match value {
            Some(value) => self.date(name, value),
            None => self,
        }
    }

    /// Adds one pair per value.
    #[must_use]
    pub fn repeated<S: AsRef<str>>(mut self, name: &str, values: &[S]) -> Self {
        for value in values {
            self.pairs.push((name.to_string(), value.as_ref().to_string()));
        }
        self
    }

    /// Returns the collected pairs.
    #[must_use]
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Returns true when no parameters were added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Encodes the pairs as an `application/x-www-form-urlencoded` string.
    #[must_use]
    pub fn to_form_body(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (name, value) in &self.pairs {
            serializer.append_pair(name, value);
        }
        serializer.finish()
    }
}
