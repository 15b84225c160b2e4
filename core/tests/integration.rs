//! End-to-end tests against the live mock server.
//!
//! # Design
//! Each test starts its own mock server on a random port and drives the
//! generated clients over real HTTP through `UreqTransport`, so request
//! building, transport, retry and response decoding are exercised together.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

use dbmgmt_core::clients::ListTablespacesOptions;
use dbmgmt_core::models::{
    AddManagedDatabaseToManagedDatabaseGroupDetails, CreateManagedDatabaseGroupDetails,
    ManagedDatabaseGroupLifecycleState, TablespaceType, UpdateManagedDatabaseGroupDetails,
};
use dbmgmt_core::{
    ApiError, Backoff, CallSettings, ClientBuilder, DbManagementClient, IfMatchOptions,
    RequestOptions, RetryConfig, RetryTokenOptions, TransportErrorKind,
};
use dbmgmt_mock_server::SEED_COMPARTMENT;

const ORCL: &str = "ocid1.manageddatabase.oc1..orcl";

fn start_server() -> SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            dbmgmt_mock_server::run(listener).await
        })
        .unwrap();
    });
    addr
}

/// Make the next `count` API requests fail with `status`.
fn arm_fault(addr: SocketAddr, status: u16, count: u32) {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();
    let response = agent
        .post(&format!("http://{addr}/mock/faults"))
        .content_type("application/json")
        .send(format!(r#"{{"status":{status},"count":{count}}}"#).as_bytes())
        .unwrap();
    assert_eq!(response.status().as_u16(), 204);
}

fn client(addr: SocketAddr, retry: Option<RetryConfig>, sleeps: Arc<AtomicU32>) -> DbManagementClient {
    let mut builder = ClientBuilder::new()
        .endpoint(format!("http://{addr}"))
        .timeout(Duration::from_secs(5))
        .sleeper(Arc::new(move |_: Duration| {
            sleeps.fetch_add(1, Ordering::SeqCst);
        }));
    if let Some(retry) = retry {
        builder = builder.retry(retry);
    }
    builder.build_db_management().unwrap()
}

fn fast_retry(max_attempts: u32) -> RetryConfig {
    RetryConfig::default()
        .with_max_attempts(max_attempts)
        .with_backoff(Backoff::Fixed {
            delay: Duration::from_millis(1),
        })
}

#[test]
fn managed_database_reads() {
    let addr = start_server();
    let client = client(addr, None, Arc::default());

    // Get with a caller-supplied request id.
    let opts = RequestOptions {
        opc_request_id: Some("it-req-1".to_string()),
        ..Default::default()
    };
    let db = client.get_managed_database(ORCL, &opts).unwrap();
    assert_eq!(db.status, 200);
    assert_eq!(db.data.name, "orcl");
    assert_eq!(db.opc_request_id(), Some("it-req-1"));
    assert!(db.etag().is_some());

    let list = client
        .list_managed_databases(SEED_COMPARTMENT, &Default::default())
        .unwrap();
    assert_eq!(list.data.items.len(), 2);
    assert!(list.opc_request_id().is_some(), "server generates a request id");

    // Page through tablespaces by hand; the client never follows pages.
    let first = client
        .list_tablespaces(
            ORCL,
            &ListTablespacesOptions {
                limit: Some(2),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(first.data.items.len(), 2);
    let next = first.opc_next_page().map(str::to_string);
    assert_eq!(next.as_deref(), Some("2"));

    let rest = client
        .list_tablespaces(
            ORCL,
            &ListTablespacesOptions {
                page: next,
                limit: Some(10),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(rest.data.items.len(), 3);
    assert_eq!(rest.opc_next_page(), None);

    let temp = client
        .get_tablespace(ORCL, "TEMP", &RequestOptions::default())
        .unwrap();
    assert_eq!(temp.data.tablespace_type, Some(TablespaceType::Temporary));

    let err = client
        .get_managed_database("ocid1.manageddatabase.oc1..missing", &RequestOptions::default())
        .unwrap_err();
    assert!(err.is_not_found());
    assert!(err.opc_request_id().is_some());
}

#[test]
fn group_lifecycle() {
    let addr = start_server();
    let client = client(addr, None, Arc::default());

    // Step 1: create with an explicit retry token, then replay it.
    let details = CreateManagedDatabaseGroupDetails {
        name: "integration".to_string(),
        compartment_id: SEED_COMPARTMENT.to_string(),
        description: Some("created by integration test".to_string()),
        ..Default::default()
    };
    let opts = RetryTokenOptions {
        opc_retry_token: Some("it-token-1".to_string()),
        ..Default::default()
    };
    let created = client.create_managed_database_group(&details, &opts).unwrap();
    assert_eq!(created.data.lifecycle_state, Some(ManagedDatabaseGroupLifecycleState::Active));
    let id = created.data.id.clone();

    let replayed = client.create_managed_database_group(&details, &opts).unwrap();
    assert_eq!(replayed.data.id, id);

    // Step 2: add a member.
    client
        .add_managed_database_to_managed_database_group(
            &id,
            &AddManagedDatabaseToManagedDatabaseGroupDetails {
                managed_database_id: ORCL.to_string(),
            },
            &RetryTokenOptions::default(),
        )
        .unwrap();
    let fetched = client
        .get_managed_database_group(&id, &RequestOptions::default())
        .unwrap();
    assert_eq!(fetched.data.managed_databases.len(), 1);
    let etag = fetched.etag().unwrap().to_string();

    // Step 3: a stale etag is rejected, the current one accepted.
    let update = UpdateManagedDatabaseGroupDetails {
        description: Some("renamed".to_string()),
        ..Default::default()
    };
    let stale = IfMatchOptions {
        if_match: Some("stale".to_string()),
        ..Default::default()
    };
    let err = client
        .update_managed_database_group(&id, &update, &stale)
        .unwrap_err();
    assert_eq!(err.status(), Some(412));

    let current = IfMatchOptions {
        if_match: Some(etag),
        ..Default::default()
    };
    let updated = client
        .update_managed_database_group(&id, &update, &current)
        .unwrap();
    assert_eq!(updated.data.description.as_deref(), Some("renamed"));

    // Step 4: list shows the group.
    let groups = client
        .list_managed_database_groups(SEED_COMPARTMENT, &Default::default())
        .unwrap();
    assert_eq!(groups.data.items.len(), 1);
    assert_eq!(groups.data.items[0].managed_database_count, Some(1));

    // Step 5: delete, then the group is gone.
    let deleted = client
        .delete_managed_database_group(
            &id,
            &IfMatchOptions {
                if_match: updated.etag().map(str::to_string),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(deleted.status, 204);

    let err = client
        .get_managed_database_group(&id, &RequestOptions::default())
        .unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn transient_failures_are_retried() {
    let addr = start_server();
    let sleeps = Arc::new(AtomicU32::new(0));
    let client = client(addr, Some(fast_retry(3)), sleeps.clone());

    arm_fault(addr, 503, 2);
    let db = client
        .get_managed_database(ORCL, &RequestOptions::default())
        .unwrap();
    assert_eq!(db.data.name, "orcl");
    assert_eq!(sleeps.load(Ordering::SeqCst), 2);
}

#[test]
fn retries_stop_at_max_attempts() {
    let addr = start_server();
    let sleeps = Arc::new(AtomicU32::new(0));
    let client = client(addr, Some(fast_retry(3)), sleeps.clone());

    arm_fault(addr, 500, 5);
    let err = client
        .get_managed_database(ORCL, &RequestOptions::default())
        .unwrap_err();
    match err {
        ApiError::Service(e) => {
            assert_eq!(e.status, 500);
            assert_eq!(e.operation, "GetManagedDatabase");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(sleeps.load(Ordering::SeqCst), 2);

    // Two faults remain armed; disabling retry for the call surfaces the first.
    let opts = RequestOptions {
        call: CallSettings::no_retry(),
        ..Default::default()
    };
    let err = client.get_managed_database(ORCL, &opts).unwrap_err();
    assert_eq!(err.status(), Some(500));
}

#[test]
fn retried_create_creates_once() {
    let addr = start_server();
    let client = client(addr, Some(fast_retry(4)), Arc::default());

    // The fault fires before the handler runs, so the retried attempt is the
    // first one the server records.
    arm_fault(addr, 502, 1);
    let details = CreateManagedDatabaseGroupDetails {
        name: "retried".to_string(),
        compartment_id: SEED_COMPARTMENT.to_string(),
        ..Default::default()
    };
    let created = client
        .create_managed_database_group(&details, &RetryTokenOptions::default())
        .unwrap();

    let groups = client
        .list_managed_database_groups(SEED_COMPARTMENT, &Default::default())
        .unwrap();
    assert_eq!(groups.data.items.len(), 1);
    assert_eq!(groups.data.items[0].id, created.data.id);
}

#[test]
fn connection_refused_is_a_transport_error() {
    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };
    let client = client(addr, None, Arc::default());
    let err = client
        .get_managed_database(ORCL, &RequestOptions::default())
        .unwrap_err();
    match err {
        ApiError::Transport(e) => {
            assert!(matches!(
                e.kind,
                TransportErrorKind::Connect | TransportErrorKind::Io | TransportErrorKind::Other
            ));
            assert!(e.endpoint.contains("/20201101/managedDatabases/"));
        }
        other => panic!("unexpected error: {other}"),
    }
}
