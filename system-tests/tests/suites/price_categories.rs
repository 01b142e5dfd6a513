// system-tests/tests/suites/price_categories.rs
// ============================================================================
// Module: Price Categories Live Tests
// Description: Client price category listing and lookup.
// Purpose: Validate pricing strategy consistency.
// Dependencies: system-tests, iiko-client
// ============================================================================

//! Price category live tests.

use iiko_client::api::REVISION_ALL;
use iiko_client::models::Envelope;
use system_tests::CallContext;
use system_tests::ensure;
use system_tests::shape::check_price_category;
use system_tests::with_env_session;
use tracing::info;

use crate::helpers::live::DynError;

#[tokio::test(flavor = "multi_thread")]
async fn price_categories_have_consistent_strategies() -> Result<(), DynError> {
    with_env_session(async |harness| {
        let no_ids: &[&str] = &[];
        let envelope = harness
            .client()
            .price_categories()
            .list(false, no_ids, REVISION_ALL)
            .await
            .context("price categories")?;
        ensure(envelope.revision.is_some(), "price categories", "no revision")?;
        let categories = envelope.into_response().context("price categories")?;
        info!(count = categories.len(), "price categories retrieved");
        for category in &categories {
            check_price_category(category)?;
        }
        Ok(())
    })
    .await?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn price_category_by_id_matches_listing() -> Result<(), DynError> {
    with_env_session(async |harness| {
        let no_ids: &[&str] = &[];
        let price_categories = harness.client().price_categories();
        let categories = price_categories
            .list(false, no_ids, REVISION_ALL)
            .await
            .and_then(Envelope::into_response)
            .context("price categories")?;
        let Some(first) = categories.first() else {
            info!("no price categories configured");
            return Ok(());
        };
        let category = price_categories.by_id(&first.id).await.context("price category by id")?;
        ensure(category.id == first.id, "price category by id", "id differs")?;
        check_price_category(&category)?;
        Ok(())
    })
    .await?;
    Ok(())
}
