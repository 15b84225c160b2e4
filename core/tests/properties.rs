//! Behavioral properties of the clients, checked against a recording
//! transport instead of a network.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use dbmgmt_core::clients::{ListManagedDatabasesOptions, ListTablespacesOptions};
use dbmgmt_core::models::{
    CreateManagedDatabaseGroupDetails, ManagedDatabaseSortBy, TablespaceSortBy,
    UpdateManagedDatabaseGroupDetails,
};
use dbmgmt_core::retry::MAX_RETRY_AFTER;
use dbmgmt_core::{
    ApiEnum, ApiError, Backoff, CallSettings, ClientBuilder, DbManagementClient, HttpMethod,
    HttpRequest, HttpResponse, IfMatchOptions, RequestOptions, RetryConfig, RetryTokenOptions,
    Transport, TransportError, TransportErrorKind,
};

type Responder = dyn Fn(usize) -> Result<HttpResponse, TransportError> + Send + Sync;

/// Records every request and answers with `respond(attempt_index)`.
struct Recording {
    seen: Mutex<Vec<HttpRequest>>,
    timeouts: Mutex<Vec<Option<Duration>>>,
    respond: Box<Responder>,
}

impl Recording {
    fn new(respond: impl Fn(usize) -> Result<HttpResponse, TransportError> + Send + Sync + 'static) -> Arc<Self> {
        Arc::new(Self {
            seen: Mutex::new(Vec::new()),
            timeouts: Mutex::new(Vec::new()),
            respond: Box::new(respond),
        })
    }

    fn always(status: u16, body: &'static str) -> Arc<Self> {
        Self::new(move |_| Ok(reply(status, body)))
    }

    fn requests(&self) -> Vec<HttpRequest> {
        self.seen.lock().unwrap().clone()
    }

    fn count(&self) -> usize {
        self.seen.lock().unwrap().len()
    }

    fn timeouts(&self) -> Vec<Option<Duration>> {
        self.timeouts.lock().unwrap().clone()
    }
}

impl Transport for Recording {
    fn send(&self, request: &HttpRequest, timeout: Option<Duration>) -> Result<HttpResponse, TransportError> {
        self.timeouts.lock().unwrap().push(timeout);
        let index = {
            let mut seen = self.seen.lock().unwrap();
            seen.push(request.clone());
            seen.len() - 1
        };
        (self.respond)(index)
    }
}

fn reply(status: u16, body: &str) -> HttpResponse {
    HttpResponse {
        status,
        headers: vec![("opc-request-id".to_string(), format!("srv-{status}"))],
        body: body.to_string(),
    }
}

fn client_with(transport: Arc<Recording>, retry: Option<RetryConfig>) -> DbManagementClient {
    let mut builder = ClientBuilder::new()
        .endpoint("http://mock.test")
        .transport(transport)
        .sleeper(Arc::new(|_: Duration| {}));
    if let Some(retry) = retry {
        builder = builder.retry(retry);
    }
    builder.build_db_management().unwrap()
}

fn no_backoff(max_attempts: u32) -> RetryConfig {
    RetryConfig::default()
        .with_max_attempts(max_attempts)
        .with_backoff(Backoff::None)
}

#[test]
fn blank_required_parameters_never_reach_the_transport() {
    let transport = Recording::always(200, "{}");
    let client = client_with(transport.clone(), Some(no_backoff(3)));
    let none = RequestOptions::default();

    let results: Vec<(&str, ApiError)> = vec![
        ("managedDatabaseId", client.get_managed_database("", &none).unwrap_err()),
        ("managedDatabaseId", client.get_managed_database(" \t", &none).unwrap_err()),
        ("tablespaceName", client.get_tablespace("ocid1.db.1", "", &none).unwrap_err()),
        (
            "compartmentId",
            client
                .list_managed_databases("", &ListManagedDatabasesOptions::default())
                .unwrap_err(),
        ),
        (
            "managedDatabaseGroupId",
            client
                .update_managed_database_group(
                    "",
                    &UpdateManagedDatabaseGroupDetails::default(),
                    &IfMatchOptions::default(),
                )
                .unwrap_err(),
        ),
        (
            "opcRetryToken",
            client
                .create_managed_database_group(
                    &CreateManagedDatabaseGroupDetails::default(),
                    &RetryTokenOptions {
                        opc_retry_token: Some("   ".to_string()),
                        ..Default::default()
                    },
                )
                .unwrap_err(),
        ),
    ];

    for (expected, err) in results {
        assert!(err.is_validation(), "{expected}: {err}");
        match err {
            ApiError::InvalidArgument { parameter, .. } => assert_eq!(parameter, expected),
            other => panic!("{expected}: unexpected error {other}"),
        }
    }
    assert_eq!(transport.count(), 0);
}

#[test]
fn enum_values_outside_the_allowed_set_are_rejected() {
    let err = ManagedDatabaseSortBy::parse("sortBy", "SIZE").unwrap_err();
    match &err {
        ApiError::InvalidEnumValue { parameter, value, allowed } => {
            assert_eq!(*parameter, "sortBy");
            assert_eq!(value, "SIZE");
            assert_eq!(*allowed, &["TIMECREATED", "NAME"]);
        }
        other => panic!("unexpected error {other}"),
    }
    assert!(err.to_string().contains("TIMECREATED, NAME"));
    assert_eq!(
        ManagedDatabaseSortBy::parse("sortBy", "NAME").unwrap(),
        ManagedDatabaseSortBy::Name
    );

    let transport = Recording::always(200, r#"{"items":[]}"#);
    let client = client_with(transport.clone(), None);
    let err = client
        .list_tablespaces(
            "ocid1.db.1",
            &ListTablespacesOptions {
                sort_by: Some(TablespaceSortBy::UnknownValue),
                ..Default::default()
            },
        )
        .unwrap_err();
    assert!(err.is_validation());
    assert_eq!(transport.count(), 0);
}

#[test]
fn supplied_retry_token_is_sent_verbatim() {
    let transport = Recording::always(200, r#"{"id":"g1","name":"g","compartmentId":"c"}"#);
    let client = client_with(transport.clone(), None);
    let details = CreateManagedDatabaseGroupDetails {
        name: "g".into(),
        compartment_id: "c".into(),
        ..Default::default()
    };

    let opts = RetryTokenOptions {
        opc_retry_token: Some("caller-token-42".into()),
        ..Default::default()
    };
    client.create_managed_database_group(&details, &opts).unwrap();
    client
        .create_managed_database_group(&details, &RetryTokenOptions::default())
        .unwrap();
    client
        .create_managed_database_group(&details, &RetryTokenOptions::default())
        .unwrap();

    let requests = transport.requests();
    assert_eq!(requests[0].header("opc-retry-token"), Some("caller-token-42"));
    let generated_a = requests[1].header("opc-retry-token").unwrap();
    let generated_b = requests[2].header("opc-retry-token").unwrap();
    assert!(!generated_a.is_empty());
    assert_ne!(generated_a, generated_b);
}

#[test]
fn retry_token_is_stable_across_attempts() {
    let transport = Recording::new(|i| {
        if i < 2 {
            Ok(reply(500, r#"{"code":"InternalServerError","message":"try again"}"#))
        } else {
            Ok(reply(200, r#"{"id":"g1","name":"g","compartmentId":"c"}"#))
        }
    });
    let client = client_with(transport.clone(), Some(no_backoff(5)));
    client
        .create_managed_database_group(
            &CreateManagedDatabaseGroupDetails {
                name: "g".into(),
                compartment_id: "c".into(),
                ..Default::default()
            },
            &RetryTokenOptions::default(),
        )
        .unwrap();

    let tokens: Vec<String> = transport
        .requests()
        .iter()
        .map(|r| r.header("opc-retry-token").unwrap().to_string())
        .collect();
    assert_eq!(tokens.len(), 3);
    assert!(tokens.iter().all(|t| *t == tokens[0]));
}

#[test]
fn retry_exhaustion_makes_exactly_n_attempts_and_returns_the_last_error() {
    for n in [1u32, 2, 5] {
        let transport = Recording::new(|i| {
            Ok(HttpResponse {
                status: 503,
                headers: vec![("opc-request-id".to_string(), format!("attempt-{}", i + 1))],
                body: format!(r#"{{"code":"ServiceUnavailable","message":"attempt {}"}}"#, i + 1),
            })
        });
        let client = client_with(transport.clone(), Some(no_backoff(n)));
        let err = client
            .get_managed_database("ocid1.db.1", &RequestOptions::default())
            .unwrap_err();

        assert_eq!(transport.count(), n as usize);
        match err {
            ApiError::Service(e) => {
                assert_eq!(e.status, 503);
                assert_eq!(e.message, format!("attempt {n}"));
                assert_eq!(e.opc_request_id, Some(format!("attempt-{n}")));
            }
            other => panic!("unexpected error {other}"),
        }
    }
}

#[test]
fn explicit_no_retry_override_makes_one_attempt() {
    let transport = Recording::always(503, "");
    let client = client_with(transport.clone(), Some(no_backoff(6)));
    let opts = RequestOptions {
        call: CallSettings::no_retry(),
        ..Default::default()
    };
    client.get_managed_database("ocid1.db.1", &opts).unwrap_err();
    assert_eq!(transport.count(), 1);
}

#[test]
fn no_default_policy_means_one_attempt() {
    let transport = Recording::always(503, "");
    let client = client_with(transport.clone(), None);
    client
        .get_managed_database("ocid1.db.1", &RequestOptions::default())
        .unwrap_err();
    assert_eq!(transport.count(), 1);
}

#[test]
fn non_retryable_statuses_are_not_retried() {
    let transport = Recording::always(404, r#"{"code":"NotAuthorizedOrNotFound","message":"gone"}"#);
    let client = client_with(transport.clone(), Some(no_backoff(4)));
    let err = client
        .get_managed_database("ocid1.db.1", &RequestOptions::default())
        .unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(transport.count(), 1);
}

#[test]
fn deserialization_failures_are_not_retried() {
    let transport = Recording::always(200, r#"{"unexpected": true}"#);
    let client = client_with(transport.clone(), Some(no_backoff(4)));
    let err = client
        .get_managed_database("ocid1.db.1", &RequestOptions::default())
        .unwrap_err();
    match err {
        ApiError::Deserialization {
            operation,
            status,
            opc_request_id,
            ..
        } => {
            assert_eq!(operation, "GetManagedDatabase");
            assert_eq!(status, 200);
            assert_eq!(opc_request_id.as_deref(), Some("srv-200"));
        }
        other => panic!("unexpected error {other}"),
    }
    assert_eq!(transport.count(), 1);
}

#[test]
fn retry_after_header_sets_the_delay() {
    let delays = Arc::new(Mutex::new(Vec::new()));
    let recorded = delays.clone();
    let transport = Recording::new(|i| {
        if i == 0 {
            Ok(HttpResponse {
                status: 429,
                headers: vec![("Retry-After".to_string(), "3".to_string())],
                body: String::new(),
            })
        } else {
            Ok(reply(200, r#"{"id":"ocid1.db.1","name":"orcl"}"#))
        }
    });
    let client = ClientBuilder::new()
        .endpoint("http://mock.test")
        .transport(transport.clone())
        .retry(RetryConfig::default().with_max_attempts(2))
        .sleeper(Arc::new(move |d: Duration| recorded.lock().unwrap().push(d)))
        .build_db_management()
        .unwrap();

    client
        .get_managed_database("ocid1.db.1", &RequestOptions::default())
        .unwrap();
    assert_eq!(*delays.lock().unwrap(), vec![Duration::from_secs(3)]);
}

#[test]
fn oversized_retry_after_is_capped_when_no_elapsed_budget() {
    let delays = Arc::new(Mutex::new(Vec::new()));
    let recorded = delays.clone();
    let transport = Recording::new(|_| {
        Ok(HttpResponse {
            status: 429,
            headers: vec![("Retry-After".to_string(), u64::MAX.to_string())],
            body: r#"{"code":"TooManyRequests","message":"slow down"}"#.to_string(),
        })
    });
    let client = ClientBuilder::new()
        .endpoint("http://mock.test")
        .transport(transport.clone())
        .retry(RetryConfig::default().with_max_attempts(3).with_max_elapsed(None))
        .sleeper(Arc::new(move |d: Duration| recorded.lock().unwrap().push(d)))
        .build_db_management()
        .unwrap();

    let err = client
        .get_managed_database("ocid1.db.1", &RequestOptions::default())
        .unwrap_err();
    assert_eq!(err.status(), Some(429));
    assert_eq!(transport.count(), 3);
    assert_eq!(*delays.lock().unwrap(), vec![MAX_RETRY_AFTER, MAX_RETRY_AFTER]);
}

#[test]
fn endpoint_resolution_is_deterministic() {
    let a = ClientBuilder::new().region("us-ashburn-1").build_db_management().unwrap();
    let b = ClientBuilder::new().region("us-ashburn-1").build_db_management().unwrap();
    assert_eq!(a.base_url(), b.base_url());
    assert_eq!(a.base_url(), "https://dbmgmt.us-ashburn-1.oci.oraclecloud.com/20201101");

    let explicit = ClientBuilder::new()
        .region("us-ashburn-1")
        .endpoint("https://dbmgmt.example.internal")
        .build_db_management()
        .unwrap();
    assert_eq!(explicit.base_url(), "https://dbmgmt.example.internal/20201101");
}

#[test]
fn set_region_rederives_the_endpoint() {
    let transport = Recording::always(200, r#"{"id":"ocid1.db.1","name":"orcl"}"#);
    let mut client = ClientBuilder::new()
        .region("us-ashburn-1")
        .transport(transport.clone())
        .build_db_management()
        .unwrap();
    client.set_region("ap-tokyo-1").unwrap();
    client
        .get_managed_database("ocid1.db.1", &RequestOptions::default())
        .unwrap();
    assert_eq!(
        transport.requests()[0].path,
        "https://dbmgmt.ap-tokyo-1.oci.oraclecloud.com/20201101/managedDatabases/ocid1.db.1"
    );
}

#[test]
fn get_managed_database_end_to_end() {
    let transport = Recording::always(200, r#"{"id":"ocid1.db.1","name":"orcl"}"#);
    let client = client_with(transport.clone(), None);

    let response = client
        .get_managed_database("ocid1.db.1", &RequestOptions::default())
        .unwrap();
    assert_eq!(response.data.id, "ocid1.db.1");
    assert_eq!(response.data.name, "orcl");

    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, HttpMethod::Get);
    assert_eq!(
        requests[0].path,
        "http://mock.test/20201101/managedDatabases/ocid1.db.1"
    );
    assert_eq!(requests[0].header("accept"), Some("application/json"));
}

#[test]
fn list_tablespaces_query_string() {
    let transport = Recording::always(200, r#"{"items":[]}"#);
    let client = client_with(transport.clone(), None);
    let opts = ListTablespacesOptions {
        limit: Some(10),
        sort_by: Some(TablespaceSortBy::Name),
        ..Default::default()
    };
    client.list_tablespaces("ocid1.db.1", &opts).unwrap();

    let path = &transport.requests()[0].path;
    let query = path.split_once('?').map(|(_, q)| q).unwrap();
    assert!(query.contains("limit=10&sortBy=NAME"), "{query}");
    assert!(!query.contains("page"), "{query}");
}

fn timed_client(transport: Arc<Recording>, retry: Option<RetryConfig>) -> DbManagementClient {
    let mut builder = ClientBuilder::new()
        .endpoint("http://mock.test")
        .transport(transport)
        .timeout(Duration::from_secs(20))
        .sleeper(Arc::new(|_: Duration| {}));
    if let Some(retry) = retry {
        builder = builder.retry(retry);
    }
    builder.build_db_management().unwrap()
}

#[test]
fn per_call_timeout_beats_client_timeout() {
    let transport = Recording::always(200, r#"{"id":"ocid1.db.1","name":"orcl"}"#);
    let client = timed_client(transport.clone(), None);

    let opts = RequestOptions {
        call: CallSettings {
            timeout: Some(Duration::from_millis(250)),
            ..Default::default()
        },
        ..Default::default()
    };
    client.get_managed_database("ocid1.db.1", &opts).unwrap();
    client
        .get_managed_database("ocid1.db.1", &RequestOptions::default())
        .unwrap();

    assert_eq!(
        transport.timeouts(),
        vec![Some(Duration::from_millis(250)), Some(Duration::from_secs(20))]
    );
}

#[test]
fn no_timeout_anywhere_sends_none() {
    let transport = Recording::always(200, r#"{"id":"ocid1.db.1","name":"orcl"}"#);
    let client = client_with(transport.clone(), None);
    client
        .get_managed_database("ocid1.db.1", &RequestOptions::default())
        .unwrap();
    assert_eq!(transport.timeouts(), vec![None]);
}

#[test]
fn timed_out_attempt_is_retried_with_the_same_timeout() {
    let transport = Recording::new(|i| {
        if i == 0 {
            Err(TransportError::new(
                TransportErrorKind::Timeout,
                "http://mock.test",
                "read timed out",
            ))
        } else {
            Ok(reply(200, r#"{"id":"ocid1.db.1","name":"orcl"}"#))
        }
    });
    let client = timed_client(transport.clone(), Some(no_backoff(3)));

    let response = client
        .get_managed_database("ocid1.db.1", &RequestOptions::default())
        .unwrap();
    assert_eq!(response.data.id, "ocid1.db.1");
    assert_eq!(transport.count(), 2);
    assert_eq!(transport.timeouts(), vec![Some(Duration::from_secs(20)); 2]);
}
