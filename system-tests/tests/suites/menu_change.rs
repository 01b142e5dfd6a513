// system-tests/tests/suites/menu_change.rs
// ============================================================================
// Module: Menu Change Live Tests
// Description: Menu change documents and product prices.
// Purpose: Validate envelopes, lookups by id and number, and creation.
// Dependencies: system-tests, iiko-client
// ============================================================================

//! Menu change live tests.

use iiko_client::api::MenuChangeQuery;
use iiko_client::api::PriceQuery;
use iiko_client::models::Envelope;
use iiko_client::models::MenuChangeDocumentDto;
use iiko_client::models::MenuChangeDocumentStatus;
use system_tests::CallContext;
use system_tests::CaseFailure;
use system_tests::SessionHarness;
use system_tests::ensure;
use system_tests::with_env_session;
use time::OffsetDateTime;
use tracing::info;

use crate::helpers::live::DynError;
use crate::helpers::live::MENU_CHANGE_REFUSALS;
use crate::helpers::live::days_ago;
use crate::helpers::live::days_ahead;
use crate::helpers::live::today;

/// Documents effective during the last `days` days.
async fn recent_documents(
    harness: &SessionHarness,
    days: i64,
) -> Result<Vec<MenuChangeDocumentDto>, CaseFailure> {
    let query = MenuChangeQuery::new(days_ago(days)).until(today());
    let envelope =
        harness.client().menu_change().documents(&query).await.context("menu change documents")?;
    ensure(envelope.revision.is_some(), "menu change documents", "no revision")?;
    envelope.into_response().context("menu change documents")
}

#[tokio::test(flavor = "multi_thread")]
async fn menu_change_documents_decode() -> Result<(), DynError> {
    with_env_session(async |harness| {
        let documents = recent_documents(harness, 30).await?;
        info!(count = documents.len(), "menu change documents retrieved");
        for document in &documents {
            ensure(document.id.is_some(), "menu change documents", "document without id")?;
        }
        Ok(())
    })
    .await?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn menu_change_document_by_id_matches_listing() -> Result<(), DynError> {
    with_env_session(async |harness| {
        let documents = recent_documents(harness, 90).await?;
        let Some(id) = documents.first().and_then(|document| document.id.clone()) else {
            info!("no menu change documents in window");
            return Ok(());
        };
        let document =
            harness.client().menu_change().by_id(&id).await.context("menu change by id")?;
        ensure(document.id.as_deref() == Some(id.as_str()), "menu change by id", "id differs")?;
        Ok(())
    })
    .await?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn menu_change_documents_by_number_share_number() -> Result<(), DynError> {
    with_env_session(async |harness| {
        let documents = recent_documents(harness, 90).await?;
        let Some(first) = documents.first() else {
            info!("no menu change documents in window");
            return Ok(());
        };
        let matches = harness
            .client()
            .menu_change()
            .by_number(&first.document_number)
            .await
            .context("menu change by number")?;
        ensure(
            matches.iter().all(|document| document.document_number == first.document_number),
            "menu change by number",
            "document with another number returned",
        )?;
        Ok(())
    })
    .await?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn product_prices_decode() -> Result<(), DynError> {
    with_env_session(async |harness| {
        let query = PriceQuery::new(days_ago(30)).department(harness.department_id());
        let envelope =
            harness.client().menu_change().prices(&query).await.context("product prices")?;
        ensure(envelope.revision.is_some(), "product prices", "no revision")?;
        let prices = envelope.into_response().context("product prices")?;
        info!(count = prices.len(), "product prices retrieved");
        for price in &prices {
            ensure(
                price.prices.iter().all(|item| item.date_from <= item.date_to),
                "product prices",
                format!("inverted price interval for product {}", price.product_id),
            )?;
        }
        Ok(())
    })
    .await?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn menu_change_document_is_created_or_refused() -> Result<(), DynError> {
    with_env_session(async |harness| {
        let document = MenuChangeDocumentDto {
            id: None,
            date_incoming: days_ahead(1),
            document_number: format!("TEST_{}", OffsetDateTime::now_utc().unix_timestamp()),
            status: MenuChangeDocumentStatus::New,
            comment: Some("Test document created by automated tests".to_string()),
            short_name: Some("Test".to_string()),
            delete_previous_menu: false,
            date_to: Some(days_ahead(30)),
            items: Vec::new(),
        };
        let created = MENU_CHANGE_REFUSALS.apply(
            "create menu change",
            harness
                .client()
                .menu_change()
                .create(&document)
                .await
                .and_then(Envelope::into_response),
        )?;
        if let Some(created) = created {
            ensure(created.id.is_some(), "create menu change", "created document has no id")?;
        }
        Ok(())
    })
    .await?;
    Ok(())
}
