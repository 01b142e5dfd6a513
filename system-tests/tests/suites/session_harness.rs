// system-tests/tests/suites/session_harness.rs
// ============================================================================
// Module: Session Harness Tests
// Description: Setup, teardown and tolerance behavior of the case harness.
// Purpose: Ensure sessions are always released and failures are classified.
// Dependencies: system-tests, iiko-client, helpers
// ============================================================================

//! Session harness tests against the iiko stub server.

#![allow(
    clippy::panic,
    clippy::use_debug,
    reason = "Panic propagation through teardown is under test; failures print debug output."
)]

use std::panic::AssertUnwindSafe;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;
use std::time::Duration;
use std::time::Instant;

use futures::FutureExt;
use iiko_client::ClientError;
use iiko_client::ErrorKind;
use iiko_client::PasswordDigest;
use iiko_client::SessionState;
use iiko_client::api::REVISION_ALL;
use serde_json::Value;
use serde_json::json;
use system_tests::CallContext;
use system_tests::CaseFailure;
use system_tests::HarnessConfig;
use system_tests::HarnessError;
use system_tests::ensure;
use system_tests::config::DEFAULT_DEPARTMENT_ID;
use system_tests::with_session;

use crate::helpers::iiko_stub::IikoStubHandle;
use crate::helpers::iiko_stub::API_PREFIX;
use crate::helpers::iiko_stub::RecordedRequest;
use crate::helpers::iiko_stub::Reply;
use crate::helpers::iiko_stub::STUB_SESSION_KEY;
use crate::helpers::iiko_stub::SessionBehavior;
use crate::helpers::iiko_stub::spawn_iiko_stub;
use crate::helpers::iiko_stub::spawn_iiko_stub_with;
use crate::helpers::live::DynError;
use crate::helpers::live::PAYOUT_REFUSALS;
use crate::helpers::live::today;
use crate::helpers::quick_menu::CREATED_PAGES;
use crate::helpers::quick_menu::UPDATED_PAGES;
use crate::helpers::quick_menu::quick_menu_round_trip;

/// Harness config pointed at the stub with no grace delay.
fn stub_config(stub: &IikoStubHandle) -> HarnessConfig {
    HarnessConfig::for_server(stub.base_url(), "admin", "secret")
        .with_teardown_grace(Duration::ZERO)
}

/// Accounts list with one well-formed entry.
fn accounts_reply() -> Reply {
    Reply::Json(
        200,
        json!([{
            "rootType": "Account",
            "id": "acc-1",
            "code": "1.01",
            "deleted": false,
            "name": "Cash",
            "type": "CASH",
            "system": true,
            "customTransactionsAllowed": false
        }]),
    )
}

/// Opens a session, runs the body with the session key and logs out once.
#[tokio::test(flavor = "multi_thread")]
async fn session_brackets_the_case_body() -> Result<(), DynError> {
    let stub = spawn_iiko_stub(|request| {
        if request.path.ends_with("/v2/entities/accounts/list") {
            accounts_reply()
        } else {
            Reply::Text(404, "no route".to_string())
        }
    })?;
    let config = stub_config(&stub);

    let names = with_session(&config, async |harness| {
        ensure(
            harness.client().session_state() == SessionState::Authenticated,
            "session state",
            "body must run inside an open session",
        )?;
        let accounts =
            harness.client().accounts().list(false, REVISION_ALL).await.context("list accounts")?;
        Ok(accounts.into_iter().map(|account| account.name).collect::<Vec<_>>())
    })
    .await?;

    assert_eq!(names, vec!["Cash".to_string()]);
    assert_eq!(
        stub.paths(),
        vec!["/auth".to_string(), "/v2/entities/accounts/list".to_string(), "/logout".to_string()]
    );

    let requests = stub.requests();
    let digest = PasswordDigest::from_password("secret");
    assert_eq!(requests[0].body, format!("login=admin&pass={}", digest.as_str()));
    assert_eq!(requests[0].cookie, None);
    assert_eq!(requests[1].cookie.as_deref(), Some(format!("key={STUB_SESSION_KEY}").as_str()));
    assert_eq!(requests[2].body, format!("key={STUB_SESSION_KEY}"));
    Ok(())
}

/// A rejected login is a setup error and the body never runs.
#[tokio::test(flavor = "multi_thread")]
async fn rejected_login_skips_the_body() -> Result<(), DynError> {
    let stub = spawn_iiko_stub_with(
        SessionBehavior {
            login_status: 401,
            ..SessionBehavior::default()
        },
        |_| Reply::Text(500, "unexpected".to_string()),
    )?;
    let ran = AtomicBool::new(false);

    let result = with_session(&stub_config(&stub), async |_harness| {
        ran.store(true, Ordering::SeqCst);
        Ok(())
    })
    .await;

    match result {
        Err(HarnessError::Setup(message)) => assert!(message.contains("login rejected")),
        other => return Err(format!("expected setup error, got {other:?}").into()),
    }
    assert!(!ran.load(Ordering::SeqCst));
    assert_eq!(stub.paths(), vec!["/auth".to_string()]);
    Ok(())
}

/// A missing password fails setup before any request is sent.
#[tokio::test(flavor = "multi_thread")]
async fn missing_password_fails_setup_offline() -> Result<(), DynError> {
    let stub = spawn_iiko_stub(|_| Reply::Text(500, "unexpected".to_string()))?;
    let config = HarnessConfig {
        password: None,
        ..stub_config(&stub)
    };

    let result = with_session(&config, async |_harness| Ok(())).await;

    match result {
        Err(HarnessError::Setup(message)) => assert!(message.contains("IIKO_SERVER_PASSWORD")),
        other => return Err(format!("expected setup error, got {other:?}").into()),
    }
    assert!(stub.requests().is_empty());
    Ok(())
}

/// A missing server URL fails setup.
#[tokio::test(flavor = "multi_thread")]
async fn missing_server_url_fails_setup() -> Result<(), DynError> {
    let config = HarnessConfig {
        server_url: None,
        ..HarnessConfig::for_server("http://127.0.0.1:9/resto/api", "admin", "secret")
    };

    let result = with_session(&config, async |_harness| Ok(())).await;

    match result {
        Err(HarnessError::Setup(message)) => assert!(message.contains("IIKO_SERVER_URL")),
        other => return Err(format!("expected setup error, got {other:?}").into()),
    }
    Ok(())
}

/// A failing body still releases the session and keeps the call's kind.
#[tokio::test(flavor = "multi_thread")]
async fn failing_body_still_logs_out() -> Result<(), DynError> {
    let stub = spawn_iiko_stub(|_| Reply::Text(404, "not found".to_string()))?;

    let result = with_session(&stub_config(&stub), async |harness| {
        harness.client().cash_shifts().by_id("missing-shift").await.context("fetch cash shift")?;
        Ok(())
    })
    .await;

    match result {
        Err(HarnessError::Case(failure)) => {
            assert_eq!(failure.context, "fetch cash shift");
            assert_eq!(failure.kind, Some(ErrorKind::NotFound));
            assert!(failure.message.contains("404"));
        }
        other => return Err(format!("expected case failure, got {other:?}").into()),
    }
    assert_eq!(stub.count("/logout"), 1);
    Ok(())
}

/// A panicking body is resumed only after the session is released.
#[tokio::test(flavor = "multi_thread")]
async fn panicking_body_is_resumed_after_teardown() -> Result<(), DynError> {
    let stub = spawn_iiko_stub(|_| Reply::Text(500, "unexpected".to_string()))?;
    let config = stub_config(&stub);

    let outcome = AssertUnwindSafe(with_session::<(), _>(&config, async |_harness| {
        panic!("case body exploded")
    }))
    .catch_unwind()
    .await;

    assert!(outcome.is_err(), "panic must propagate");
    assert_eq!(stub.count("/logout"), 1);
    Ok(())
}

/// A failing logout is swallowed and the case result stands.
#[tokio::test(flavor = "multi_thread")]
async fn logout_failure_is_not_fatal() -> Result<(), DynError> {
    let stub = spawn_iiko_stub_with(
        SessionBehavior {
            logout_status: 500,
            ..SessionBehavior::default()
        },
        |_| Reply::Text(500, "unexpected".to_string()),
    )?;

    let value = with_session(&stub_config(&stub), async |_harness| Ok(42)).await?;

    assert_eq!(value, 42);
    assert_eq!(stub.count("/logout"), 1);
    Ok(())
}

/// After logout the client refuses calls locally and teardown does not log out twice.
#[tokio::test(flavor = "multi_thread")]
async fn released_session_refuses_further_calls() -> Result<(), DynError> {
    let stub = spawn_iiko_stub(|_| accounts_reply())?;

    let kind = with_session(&stub_config(&stub), async |harness| {
        harness.client().session().logout().await.context("logout")?;
        let refused = harness.client().accounts().list(false, REVISION_ALL).await;
        match refused {
            Ok(_) => Err(CaseFailure::new("list after logout", "call was not refused")),
            Err(err) => Ok(err.kind()),
        }
    })
    .await?;

    assert_eq!(kind, ErrorKind::Session);
    assert_eq!(stub.paths(), vec!["/auth".to_string(), "/logout".to_string()]);
    Ok(())
}

/// Tolerated kinds become a pass; other kinds still fail the case.
#[tokio::test(flavor = "multi_thread")]
async fn tolerated_kinds_pass_and_others_fail() -> Result<(), DynError> {
    let stub = spawn_iiko_stub(|request| {
        if request.path.ends_with("/v2/payInOuts/addPayOut") {
            Reply::Text(403, "forbidden".to_string())
        } else {
            Reply::Text(500, "server exploded".to_string())
        }
    })?;

    with_session(&stub_config(&stub), async |harness| {
        let settings = iiko_client::models::PayOutSettingsDto {
            pay_out_type_id: "type-1".to_string(),
            pay_out_date: today(),
            counteragent: None,
            department_sum_map: [(harness.department_id().to_string(), 10.0)]
                .into_iter()
                .collect(),
            payroll_id: None,
            comment: None,
        };
        let created = PAYOUT_REFUSALS
            .apply("add payout", harness.client().cash_shifts().add_pay_out(&settings).await)?;
        ensure(created.is_none(), "add payout", "forbidden payout must be tolerated as absent")?;

        let other: Result<(), ClientError> = Err(ClientError::Http {
            status: 500,
            body: "server exploded".to_string(),
        });
        let failure = PAYOUT_REFUSALS.apply("add payout", other).err();
        ensure(
            failure.as_ref().and_then(|failure| failure.kind) == Some(ErrorKind::Server),
            "add payout",
            "server errors must not be tolerated",
        )?;
        ensure(
            !PAYOUT_REFUSALS.allows(ErrorKind::Rejected),
            "add payout",
            "payout validation refusals are reported in the result, not tolerated",
        )?;
        Ok(())
    })
    .await?;

    assert_eq!(stub.count("/v2/payInOuts/addPayOut"), 1);
    Ok(())
}

/// Quick menu payload as the server returns it.
fn quick_menu_reply(deleted: bool, pages: [&str; 3], updated: bool) -> Value {
    let (day, page) = if updated { (json!(1), 1) } else { (Value::Null, 0) };
    json!({
        "id": "menu-1",
        "deleted": deleted,
        "dependsOnWeekDay": updated,
        "departmentId": DEFAULT_DEPARTMENT_ID,
        "pageNames": pages,
        "labels": [{
            "day": day,
            "page": page,
            "x": page,
            "y": page,
            "entityId": "p1",
            "entityType": "PRODUCT"
        }]
    })
}

/// Successful envelope around a quick menu.
fn success_reply(menu: Value) -> Reply {
    Reply::Json(200, json!({ "result": "SUCCESS", "response": menu, "revision": 1 }))
}

/// Routes the quick menu cycle; `update_fails` answers the update with ERROR.
fn quick_menu_responder(
    update_fails: bool,
) -> impl Fn(&RecordedRequest) -> Reply + Send + Sync + 'static {
    move |request| match request.path.trim_start_matches(API_PREFIX) {
        "/v2/entities/products/list" => {
            Reply::Json(200, json!([{ "id": "p1", "deleted": false }]))
        }
        "/v2/entities/quickLabels/save" => {
            success_reply(quick_menu_reply(false, CREATED_PAGES, false))
        }
        "/v2/entities/quickLabels/update" if update_fails => {
            Reply::Json(200, json!({ "result": "ERROR", "errors": ["page limit exceeded"] }))
        }
        "/v2/entities/quickLabels/update" => {
            success_reply(quick_menu_reply(false, UPDATED_PAGES, true))
        }
        "/v2/entities/quickLabels/delete" => {
            success_reply(quick_menu_reply(true, UPDATED_PAGES, true))
        }
        "/v2/entities/quickLabels/list" => {
            let with_deleted = request
                .query
                .as_deref()
                .is_some_and(|query| query.contains("includeDeleted=true"));
            if with_deleted {
                Reply::Json(200, json!([quick_menu_reply(true, UPDATED_PAGES, true)]))
            } else {
                Reply::Json(200, json!([]))
            }
        }
        _ => Reply::Text(404, "unexpected".to_string()),
    }
}

/// The quick menu cycle deletes its menu exactly once on success.
#[tokio::test(flavor = "multi_thread")]
async fn quick_menu_round_trip_completes_against_stub() -> Result<(), DynError> {
    let stub = spawn_iiko_stub(quick_menu_responder(false))?;

    with_session(&stub_config(&stub), async |harness| quick_menu_round_trip(harness).await)
        .await?;

    assert_eq!(stub.count("/v2/entities/quickLabels/save"), 1);
    assert_eq!(stub.count("/v2/entities/quickLabels/update"), 1);
    assert_eq!(stub.count("/v2/entities/quickLabels/delete"), 1);
    assert_eq!(stub.count("/v2/entities/quickLabels/list"), 2);
    Ok(())
}

/// A failure after creation still deletes the created menu.
#[tokio::test(flavor = "multi_thread")]
async fn quick_menu_round_trip_discards_menu_on_failure() -> Result<(), DynError> {
    let stub = spawn_iiko_stub(quick_menu_responder(true))?;

    let result =
        with_session(&stub_config(&stub), async |harness| quick_menu_round_trip(harness).await)
            .await;

    match result {
        Err(HarnessError::Case(failure)) => {
            assert_eq!(failure.context, "update quick menu");
            assert_eq!(failure.kind, Some(ErrorKind::Rejected));
            assert!(failure.message.contains("page limit exceeded"));
        }
        other => return Err(format!("expected case failure, got {other:?}").into()),
    }
    let delete_path = "/v2/entities/quickLabels/delete";
    assert_eq!(stub.count(delete_path), 1);
    let delete = stub
        .requests()
        .into_iter()
        .find(|request| request.path.ends_with(delete_path))
        .ok_or("delete request not recorded")?;
    assert!(delete.body.contains("menu-1"));
    assert_eq!(stub.count("/logout"), 1);
    Ok(())
}

/// Teardown waits for the configured grace period.
#[tokio::test(flavor = "multi_thread")]
async fn teardown_waits_for_grace_period() -> Result<(), DynError> {
    let stub = spawn_iiko_stub(|_| Reply::Text(500, "unexpected".to_string()))?;
    let config = stub_config(&stub).with_teardown_grace(Duration::from_millis(50));

    let started = Instant::now();
    with_session(&config, async |_harness| Ok(())).await?;

    assert!(started.elapsed() >= Duration::from_millis(50));
    Ok(())
}
