// crates/iiko-client/src/client.rs
// ============================================================================
// Module: iiko Client
// Description: Owner of the transport and entry point to every endpoint group.
// Purpose: Bind one transport, one session and the domain APIs together.
// Dependencies: crate::transport, crate::api, tracing
// ============================================================================

//! ## Overview
//! [`IikoClient`] is built from a [`ClientConfig`], logs in once, hands out
//! borrowed endpoint groups and is consumed by [`IikoClient::close`]. Every
//! group shares the same transport, so they all see the same session.
//!
//! ```no_run
//! # async fn demo() -> Result<(), iiko_client::ClientError> {
//! use iiko_client::{ClientConfig, IikoClient};
//!
//! let config = ClientConfig::new("https://host/resto/api", "admin", "secret");
//! let client = IikoClient::connect(&config).await?;
//! let accounts = client.accounts().list(false, -1).await?;
//! client.session().logout().await?;
//! client.close();
//! # let _ = accounts;
//! # Ok(())
//! # }
//! ```

// ============================================================================
// SECTION: Imports
// ============================================================================

use tracing::debug;

use crate::api::AccountsApi;
use crate::api::CashShiftsApi;
use crate::api::FastMenuApi;
use crate::api::MenuChangeApi;
use crate::api::NomenclatureApi;
use crate::api::PriceCategoriesApi;
use crate::api::PricePeriodsApi;
use crate::api::ReplicationsApi;
use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::session::SessionApi;
use crate::session::SessionState;
use crate::transport::HttpTransport;

// ============================================================================
// SECTION: Client
// ============================================================================

/// iiko back-office client.
#[derive(Debug)]
pub struct IikoClient {
    /// Shared transport and session slot.
    transport: HttpTransport,
}

impl IikoClient {
    /// Builds an unauthenticated client.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] when the configuration is invalid.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        Ok(Self {
            transport: HttpTransport::new(config)?,
        })
    }

    /// Builds a client and logs in with the configured credentials.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] when the configuration is invalid or the
    /// server rejects the login.
    pub async fn connect(config: &ClientConfig) -> Result<Self, ClientError> {
        let client = Self::new(config)?;
        client.session().login(&config.login, &config.password_digest()).await?;
        Ok(client)
    }

    /// Returns the underlying transport.
    #[must_use]
    pub const fn transport(&self) -> &HttpTransport {
        &self.transport
    }

    /// Returns the current session state.
    #[must_use]
    pub fn session_state(&self) -> SessionState {
        self.transport.session_state()
    }

    /// Login and logout.
    #[must_use]
    pub const fn session(&self) -> SessionApi<'_> {
        SessionApi::new(&self.transport)
    }

    /// Chart of accounts.
    #[must_use]
    pub const fn accounts(&self) -> AccountsApi<'_> {
        AccountsApi::new(&self.transport)
    }

    /// Cash shifts, acceptance documents and payouts.
    #[must_use]
    pub const fn cash_shifts(&self) -> CashShiftsApi<'_> {
        CashShiftsApi::new(&self.transport)
    }

    /// Quick menus.
    #[must_use]
    pub const fn fast_menu(&self) -> FastMenuApi<'_> {
        FastMenuApi::new(&self.transport)
    }

    /// Menu change documents and prices.
    #[must_use]
    pub const fn menu_change(&self) -> MenuChangeApi<'_> {
        MenuChangeApi::new(&self.transport)
    }

    /// Product lookups.
    #[must_use]
    pub const fn nomenclature(&self) -> NomenclatureApi<'_> {
        NomenclatureApi::new(&self.transport)
    }

    /// Client price categories.
    #[must_use]
    pub const fn price_categories(&self) -> PriceCategoriesApi<'_> {
        PriceCategoriesApi::new(&self.transport)
    }

    /// Period schedules.
    #[must_use]
    pub const fn price_periods(&self) -> PricePeriodsApi<'_> {
        PricePeriodsApi::new(&self.transport)
    }

    /// Server mode and replication state.
    #[must_use]
    pub const fn replications(&self) -> ReplicationsApi<'_> {
        ReplicationsApi::new(&self.transport)
    }

    /// Releases the transport and its connections. Never fails.
    pub fn close(self) {
        debug!(
            base_url = self.transport.base_url().as_str(),
            session = self.transport.session_state().as_str(),
            "iiko client closed"
        );
        drop(self.transport);
    }
}
