// system-tests/tests/suites/cash_shifts.rs
// ============================================================================
// Module: Cash Shifts Live Tests
// Description: Cash shifts, acceptance documents, pay-ins/outs and payrolls.
// Purpose: Exercise read paths and the tolerated write paths.
// Dependencies: system-tests, iiko-client
// ============================================================================

//! Cash shift live tests. Cases that depend on existing shifts pass
//! vacuously when the window holds none.

use iiko_client::api::REVISION_ALL;
use iiko_client::models::CashShiftSessionDto;
use iiko_client::models::CashShiftStatus;
use iiko_client::models::PayOutSettingsDto;
use iiko_client::models::ResultStatus;
use system_tests::CallContext;
use system_tests::CaseFailure;
use system_tests::SessionHarness;
use system_tests::ensure;
use system_tests::shape::check_save_result;
use system_tests::shape::check_superset;
use system_tests::with_env_session;
use tracing::info;

use crate::helpers::live::DynError;
use crate::helpers::live::PAYOUT_REFUSALS;
use crate::helpers::live::days_ago;
use crate::helpers::live::today;

/// Shifts opened during the last 30 days.
async fn recent_shifts(
    harness: &SessionHarness,
    status: CashShiftStatus,
) -> Result<Vec<CashShiftSessionDto>, CaseFailure> {
    harness
        .client()
        .cash_shifts()
        .list(days_ago(30), today(), status)
        .await
        .context("list cash shifts")
}

#[tokio::test(flavor = "multi_thread")]
async fn cash_shifts_list_decodes() -> Result<(), DynError> {
    with_env_session(async |harness| {
        let shifts = recent_shifts(harness, CashShiftStatus::Any).await?;
        info!(count = shifts.len(), "cash shifts retrieved");
        Ok(())
    })
    .await?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn cash_shift_by_id_matches_listing() -> Result<(), DynError> {
    with_env_session(async |harness| {
        let shifts = recent_shifts(harness, CashShiftStatus::Any).await?;
        let Some(first) = shifts.first() else {
            info!("no cash shifts in window");
            return Ok(());
        };
        let shift =
            harness.client().cash_shifts().by_id(&first.id).await.context("cash shift by id")?;
        ensure(shift.id == first.id, "cash shift by id", "returned a different shift")?;
        ensure(
            shift.session_number == first.session_number,
            "cash shift by id",
            "session number differs from listing",
        )?;
        Ok(())
    })
    .await?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn cash_shift_payments_belong_to_session() -> Result<(), DynError> {
    with_env_session(async |harness| {
        let shifts = recent_shifts(harness, CashShiftStatus::Any).await?;
        let Some(first) = shifts.first() else {
            info!("no cash shifts in window");
            return Ok(());
        };
        let cash_shifts = harness.client().cash_shifts();
        let payments = cash_shifts.payments(&first.id, false).await.context("shift payments")?;
        ensure(payments.session_id == first.id, "shift payments", "session id differs")?;
        let unaccepted =
            cash_shifts.payments(&first.id, true).await.context("unaccepted shift payments")?;
        ensure(unaccepted.session_id == first.id, "unaccepted shift payments", "session id differs")?;
        Ok(())
    })
    .await?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn closed_session_document_decodes() -> Result<(), DynError> {
    with_env_session(async |harness| {
        let shifts = recent_shifts(harness, CashShiftStatus::Closed).await?;
        let Some(first) = shifts.first() else {
            info!("no closed cash shifts in window");
            return Ok(());
        };
        let document = harness
            .client()
            .cash_shifts()
            .closed_session_document(&first.id)
            .await
            .context("closed session document")?;
        ensure(!document.department_id.is_empty(), "closed session document", "no department")?;
        info!(items = document.items.len(), "closed session document retrieved");
        Ok(())
    })
    .await?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn cash_shift_resubmission_reports_outcome() -> Result<(), DynError> {
    with_env_session(async |harness| {
        let shifts = recent_shifts(harness, CashShiftStatus::Closed).await?;
        let Some(first) = shifts.first() else {
            info!("no closed cash shifts in window");
            return Ok(());
        };
        let cash_shifts = harness.client().cash_shifts();
        let mut document = cash_shifts
            .closed_session_document(&first.id)
            .await
            .context("closed session document")?;
        let Some(item) = document.items.first_mut() else {
            info!("closed session document has no items");
            return Ok(());
        };
        item.comment = Some("Test comment from automated test".to_string());

        let result = cash_shifts.save(&document).await.context("save cash shift")?;
        check_save_result(&result)?;
        match result.import_result {
            ResultStatus::Success => info!(status = ?result.status, "cash shift saved"),
            ResultStatus::Error => info!(errors = ?result.error_messages(), "cash shift refused"),
        }
        Ok(())
    })
    .await?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn pay_in_out_types_with_deleted_is_superset() -> Result<(), DynError> {
    with_env_session(async |harness| {
        let cash_shifts = harness.client().cash_shifts();
        let active = cash_shifts
            .pay_in_out_types(false, REVISION_ALL)
            .await
            .context("pay-in/out types")?;
        let all = cash_shifts
            .pay_in_out_types(true, REVISION_ALL)
            .await
            .context("pay-in/out types with deleted")?;
        check_superset("pay-in/out type", all.len(), active.len())?;
        Ok(())
    })
    .await?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn payrolls_list_decodes() -> Result<(), DynError> {
    with_env_session(async |harness| {
        let cash_shifts = harness.client().cash_shifts();
        let (from, to) = (days_ago(90), today());
        let payrolls = cash_shifts
            .payrolls(from, to, harness.department_id(), false)
            .await
            .context("payrolls")?;
        for payroll in &payrolls {
            ensure(payroll.date_from <= payroll.date_to, "payrolls", "inverted payroll period")?;
        }
        cash_shifts
            .payrolls(from, to, harness.department_id(), true)
            .await
            .context("payrolls with deleted")?;
        Ok(())
    })
    .await?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn pay_out_is_created_or_refused() -> Result<(), DynError> {
    with_env_session(async |harness| {
        let cash_shifts = harness.client().cash_shifts();
        let types = cash_shifts
            .pay_in_out_types(false, REVISION_ALL)
            .await
            .context("pay-in/out types")?;
        let Some(payout_type) = types.iter().find(|entry| entry.is_active_payout()) else {
            info!("no active payout type configured");
            return Ok(());
        };
        let settings = PayOutSettingsDto {
            pay_out_type_id: payout_type.id.clone(),
            pay_out_date: today(),
            counteragent: None,
            department_sum_map: [(harness.department_id().to_string(), 100.0)]
                .into_iter()
                .collect(),
            payroll_id: None,
            comment: Some("Test payout from automated test".to_string()),
        };
        let Some(result) =
            PAYOUT_REFUSALS.apply("add payout", cash_shifts.add_pay_out(&settings).await)?
        else {
            return Ok(());
        };
        match result.result {
            ResultStatus::Success => ensure(
                result.pay_out_settings.is_some(),
                "add payout",
                "successful payout carries no settings",
            )?,
            ResultStatus::Error => info!(errors = ?result.error_messages(), "payout refused"),
        }
        Ok(())
    })
    .await?;
    Ok(())
}
