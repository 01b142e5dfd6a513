// crates/iiko-client/src/api/fast_menu.rs
// ============================================================================
// Module: Quick Menu API
// Description: Cashier quick menu listing and editing.
// Purpose: Wrap `/v2/entities/quickLabels/*`.
// Dependencies: crate::transport
// ============================================================================

//! ## Overview
//! Quick menus are listed with `GET` and filtered with a form `POST` on the
//! same path. Create, update and delete answer with a result envelope whose
//! `ERROR` outcome surfaces as [`ClientError::Rejected`].

use crate::error::ClientError;
use crate::models::Envelope;
use crate::models::QuickMenuCreateDto;
use crate::models::QuickMenuDeleteDto;
use crate::models::QuickMenuDto;
use crate::models::QuickMenuFilterForm;
use crate::models::QuickMenuUpdateDto;
use crate::query::QueryParams;
use crate::transport::HttpTransport;
use crate::transport::Request;
use crate::transport::RequestBody;

/// Quick menu endpoints.
#[derive(Debug, Clone, Copy)]
pub struct FastMenuApi<'a> {
    /// Shared transport.
    transport: &'a HttpTransport,
}

impl<'a> FastMenuApi<'a> {
    /// Binds the API to a transport.
    #[must_use]
    pub const fn new(transport: &'a HttpTransport) -> Self {
        Self {
            transport,
        }
    }

    /// Lists quick menus, optionally restricted to the given ids.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] when the call fails or the payload is invalid.
    pub async fn list<S: AsRef<str> + Sync>(
        &self,
        include_deleted: bool,
        ids: &[S],
    ) -> Result<Vec<QuickMenuDto>, ClientError> {
        let query = QueryParams::new().flag("includeDeleted", include_deleted).repeated("id", ids);
        self.transport.send_json(Request::get("v2/entities/quickLabels/list", query)).await
    }

    /// Lists quick menus matching a form filter.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] when the call fails or the payload is invalid.
    pub async fn list_filtered(
        &self,
        form: &QuickMenuFilterForm,
    ) -> Result<Vec<QuickMenuDto>, ClientError> {
        let body = RequestBody::Form(form.to_params().to_form_body());
        self.transport.send_json(Request::post("v2/entities/quickLabels/list", body)).await
    }

    /// Creates a quick menu.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] when the call fails or the payload is invalid.
    pub async fn create(
        &self,
        dto: &QuickMenuCreateDto,
    ) -> Result<Envelope<QuickMenuDto>, ClientError> {
        let body = HttpTransport::json_body(dto)?;
        self.transport.send_json(Request::post("v2/entities/quickLabels/save", body)).await
    }

    /// Replaces a quick menu.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] when the call fails or the payload is invalid.
    pub async fn update(
        &self,
        dto: &QuickMenuUpdateDto,
    ) -> Result<Envelope<QuickMenuDto>, ClientError> {
        let body = HttpTransport::json_body(dto)?;
        self.transport.send_json(Request::post("v2/entities/quickLabels/update", body)).await
    }

    /// Marks a quick menu deleted.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] when the call fails or the payload is invalid.
    pub async fn delete(
        &self,
        dto: &QuickMenuDeleteDto,
    ) -> Result<Envelope<QuickMenuDto>, ClientError> {
        let body = HttpTransport::json_body(dto)?;
        self.transport.send_json(Request::post("v2/entities/quickLabels/delete", body)).await
    }
}
