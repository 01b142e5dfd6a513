// system-tests/tests/suites/replications.rs
// ============================================================================
// Module: Replications Live Tests
// Description: Server mode and replication state.
// Purpose: Validate chain-only endpoints against the reported server mode.
// Dependencies: system-tests, iiko-client
// ============================================================================

//! Replication live tests. Chain-only calls are checked against the server
//! mode first, so non-chain servers report `NotApplicable` instead of an
//! HTTP error.

use iiko_client::ClientError;
use iiko_client::IikoClient;
use iiko_client::models::ReplicationStatusesDto;
use iiko_client::models::ServerType;
use system_tests::CallContext;
use system_tests::ensure;
use system_tests::with_env_session;
use tracing::info;

use crate::helpers::live::CHAIN_ONLY;
use crate::helpers::live::DEPARTMENT_STATUS_ABSENT;
use crate::helpers::live::DynError;

/// Lists replication statuses after confirming a chain server.
async fn chain_statuses(client: &IikoClient) -> Result<ReplicationStatusesDto, ClientError> {
    client.replications().require_chain().await?;
    client.replications().statuses().await
}

#[tokio::test(flavor = "multi_thread")]
async fn server_type_is_known() -> Result<(), DynError> {
    with_env_session(async |harness| {
        let server_type =
            harness.client().replications().server_type().await.context("server type")?;
        info!(server_type = %server_type, "server type retrieved");
        Ok(())
    })
    .await?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn replication_statuses_on_chain_servers() -> Result<(), DynError> {
    with_env_session(async |harness| {
        let statuses =
            CHAIN_ONLY.apply("replication statuses", chain_statuses(harness.client()).await)?;
        if let Some(statuses) = statuses {
            info!(count = statuses.replication_status_dtoes.len(), "replication statuses retrieved");
        }
        Ok(())
    })
    .await?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn department_replication_status_on_chain_servers() -> Result<(), DynError> {
    with_env_session(async |harness| {
        let replications = harness.client().replications();
        let server_type = replications.server_type().await.context("server type")?;
        if server_type != ServerType::Chain {
            info!(server_type = %server_type, "department replication status needs a chain server");
            return Ok(());
        }
        let status = DEPARTMENT_STATUS_ABSENT.apply(
            "department replication status",
            replications.department_status(harness.department_id()).await,
        )?;
        if let Some(department_id) = status.and_then(|status| status.department_id) {
            ensure(
                department_id == harness.department_id(),
                "department replication status",
                "status of another department returned",
            )?;
        }
        Ok(())
    })
    .await?;
    Ok(())
}
