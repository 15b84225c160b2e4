//! In-memory mock of the Database Management service.
//!
//! Serves a seeded set of managed databases and tablespaces plus a fully
//! mutable managed database group collection under `/20201101`. Every
//! response carries `opc-request-id` (echoed from the request or generated)
//! and errors use the service's `{code, message}` body. `POST /mock/faults`
//! arms failures for the next N API requests so clients can exercise their
//! retry policies.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use axum::{
    extract::{Path, Query, Request, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

pub const API_VERSION: &str = "/20201101";
pub const OPC_REQUEST_ID: &str = "opc-request-id";
pub const OPC_RETRY_TOKEN: &str = "opc-retry-token";
pub const OPC_NEXT_PAGE: &str = "opc-next-page";
pub const SEED_COMPARTMENT: &str = "ocid1.compartment.oc1..mock";

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagedDatabase {
    pub id: String,
    pub name: String,
    pub compartment_id: String,
    pub database_type: String,
    pub database_sub_type: String,
    pub deployment_type: String,
    pub management_option: String,
    pub is_cluster: bool,
    pub database_status: String,
    #[serde(default)]
    pub freeform_tags: BTreeMap<String, String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tablespace {
    pub name: String,
    #[serde(rename = "type")]
    pub tablespace_type: String,
    pub status: String,
    pub allocated_size_kb: f64,
    pub used_space_kb: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildDatabase {
    pub id: String,
    pub name: String,
    pub database_type: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagedDatabaseGroup {
    pub id: String,
    pub name: String,
    pub compartment_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub managed_databases: Vec<ChildDatabase>,
    pub lifecycle_state: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGroup {
    pub name: String,
    pub compartment_id: String,
    pub description: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateGroup {
    pub description: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDatabase {
    pub freeform_tags: Option<BTreeMap<String, String>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberDetails {
    pub managed_database_id: String,
}

/// Body of `POST /mock/faults`.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fault {
    pub status: u16,
    pub count: u32,
    pub code: Option<String>,
    pub retry_after_secs: Option<u64>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    pub compartment_id: Option<String>,
    pub name: Option<String>,
    pub limit: Option<usize>,
    pub page: Option<String>,
}

#[derive(Clone)]
struct Versioned<T> {
    value: T,
    etag: String,
}

impl<T> Versioned<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            etag: Uuid::new_v4().simple().to_string(),
        }
    }

    fn touch(&mut self) {
        self.etag = Uuid::new_v4().simple().to_string();
    }
}

#[derive(Default)]
pub struct MockState {
    databases: BTreeMap<String, Versioned<ManagedDatabase>>,
    tablespaces: HashMap<String, Vec<Tablespace>>,
    groups: BTreeMap<String, Versioned<ManagedDatabaseGroup>>,
    /// `opc-retry-token` -> id of the group it created.
    retry_tokens: HashMap<String, String>,
    fault: Option<Fault>,
}

impl MockState {
    pub fn seeded() -> Self {
        let mut state = Self::default();
        for (id, name, db_type, sub_type, deployment, cluster) in [
            ("ocid1.manageddatabase.oc1..orcl", "orcl", "EXTERNAL_SIDB", "NON_CDB", "ONPREMISE", false),
            ("ocid1.manageddatabase.oc1..sales", "sales", "CLOUD_RAC", "CDB", "EXADATA", true),
        ] {
            let db = ManagedDatabase {
                id: id.to_string(),
                name: name.to_string(),
                compartment_id: SEED_COMPARTMENT.to_string(),
                database_type: db_type.to_string(),
                database_sub_type: sub_type.to_string(),
                deployment_type: deployment.to_string(),
                management_option: "ADVANCED".to_string(),
                is_cluster: cluster,
                database_status: "UP".to_string(),
                freeform_tags: BTreeMap::new(),
            };
            state.databases.insert(id.to_string(), Versioned::new(db));
        }

        let tablespaces = [
            ("SYSAUX", "PERMANENT"),
            ("SYSTEM", "PERMANENT"),
            ("TEMP", "TEMPORARY"),
            ("UNDOTBS1", "UNDO"),
            ("USERS", "PERMANENT"),
        ]
        .into_iter()
        .enumerate()
        .map(|(i, (name, kind))| Tablespace {
            name: name.to_string(),
            tablespace_type: kind.to_string(),
            status: "ONLINE".to_string(),
            allocated_size_kb: 102_400.0 * (i as f64 + 1.0),
            used_space_kb: 51_200.0 * (i as f64 + 1.0),
        })
        .collect();
        state
            .tablespaces
            .insert("ocid1.manageddatabase.oc1..orcl".to_string(), tablespaces);
        state
    }

    /// Consume one armed fault, if any.
    fn take_fault(&mut self) -> Option<Fault> {
        let fault = self.fault.as_mut()?;
        let current = fault.clone();
        fault.count = fault.count.saturating_sub(1);
        if fault.count == 0 {
            self.fault = None;
        }
        (current.count > 0).then_some(current)
    }
}

pub type Db = Arc<RwLock<MockState>>;

/// Error in the service's wire shape.
#[derive(Debug)]
pub struct ApiFailure {
    status: StatusCode,
    code: String,
    message: String,
}

impl ApiFailure {
    fn new(status: StatusCode, code: &str, message: impl Into<String>) -> Self {
        Self {
            status,
            code: code.to_string(),
            message: message.into(),
        }
    }

    fn not_found(what: &str, id: &str) -> Self {
        Self::new(
            StatusCode::NOT_FOUND,
            "NotAuthorizedOrNotFound",
            format!("{what} {id} not found or not authorized"),
        )
    }

    fn missing(parameter: &str) -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            "MissingParameter",
            format!("{parameter} is required"),
        )
    }
}

impl IntoResponse for ApiFailure {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "code": self.code, "message": self.message });
        (self.status, Json(body)).into_response()
    }
}

type ApiResult<T> = Result<T, ApiFailure>;

pub fn app() -> Router {
    app_with_state(Arc::new(RwLock::new(MockState::seeded())))
}

pub fn app_with_state(db: Db) -> Router {
    let api = Router::new()
        .route("/managedDatabases", get(list_databases))
        .route("/managedDatabases/{id}", get(get_database).put(update_database))
        .route("/managedDatabases/{id}/tablespaces", get(list_tablespaces))
        .route(
            "/managedDatabases/{id}/tablespaces/{name}",
            get(get_tablespace),
        )
        .route("/managedDatabaseGroups", get(list_groups).post(create_group))
        .route(
            "/managedDatabaseGroups/{id}",
            get(get_group).put(update_group).delete(delete_group),
        )
        .route(
            "/managedDatabaseGroups/{id}/actions/addManagedDatabase",
            post(add_member),
        )
        .route(
            "/managedDatabaseGroups/{id}/actions/removeManagedDatabase",
            post(remove_member),
        );

    Router::new()
        .nest(API_VERSION, api)
        .route("/mock/faults", post(arm_fault))
        .layer(middleware::from_fn_with_state(db.clone(), request_context))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Assigns `opc-request-id` and applies armed faults to API routes.
async fn request_context(State(db): State<Db>, request: Request, next: Next) -> Response {
    let request_id = request
        .headers()
        .get(OPC_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .unwrap_or_else(|| Uuid::new_v4().simple().to_string().to_uppercase());

    let fault = if request.uri().path().starts_with(API_VERSION) {
        db.write().await.take_fault()
    } else {
        None
    };

    let mut response = match fault {
        Some(fault) => {
            tracing::debug!(status = fault.status, path = %request.uri().path(), "injecting fault");
            fault_response(&fault)
        }
        None => next.run(request).await,
    };
    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(OPC_REQUEST_ID, value);
    }
    response
}

fn fault_response(fault: &Fault) -> Response {
    let status = StatusCode::from_u16(fault.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let code = fault.code.clone().unwrap_or_else(|| {
        status
            .canonical_reason()
            .unwrap_or("InternalServerError")
            .replace(' ', "")
    });
    let mut response = ApiFailure::new(status, &code, "injected fault").into_response();
    if let Some(secs) = fault.retry_after_secs {
        response
            .headers_mut()
            .insert(header::RETRY_AFTER, HeaderValue::from(secs));
    }
    response
}

async fn arm_fault(State(db): State<Db>, Json(fault): Json<Fault>) -> StatusCode {
    let mut state = db.write().await;
    state.fault = (fault.count > 0).then_some(fault);
    StatusCode::NO_CONTENT
}

fn if_match(headers: &HeaderMap) -> Option<&str> {
    headers.get(header::IF_MATCH).and_then(|v| v.to_str().ok())
}

fn check_etag(headers: &HeaderMap, current: &str) -> ApiResult<()> {
    match if_match(headers) {
        Some(expected) if expected != current => Err(ApiFailure::new(
            StatusCode::PRECONDITION_FAILED,
            "PreconditionFailed",
            "the resource has been modified since the supplied etag",
        )),
        _ => Ok(()),
    }
}

fn with_etag<T: Serialize>(value: &Versioned<T>) -> Response {
    ([(header::ETAG, value.etag.clone())], Json(&value.value)).into_response()
}

// --- managed databases ---

async fn list_databases(
    State(db): State<Db>,
    Query(params): Query<ListParams>,
) -> ApiResult<Json<serde_json::Value>> {
    let compartment = params
        .compartment_id
        .ok_or_else(|| ApiFailure::missing("compartmentId"))?;
    let state = db.read().await;
    let items: Vec<&ManagedDatabase> = state
        .databases
        .values()
        .map(|v| &v.value)
        .filter(|d| d.compartment_id == compartment)
        .filter(|d| params.name.as_deref().map_or(true, |n| d.name == n))
        .collect();
    Ok(Json(serde_json::json!({ "items": items })))
}

async fn get_database(State(db): State<Db>, Path(id): Path<String>) -> ApiResult<Response> {
    let state = db.read().await;
    let stored = state
        .databases
        .get(&id)
        .ok_or_else(|| ApiFailure::not_found("managed database", &id))?;
    Ok(with_etag(stored))
}

async fn update_database(
    State(db): State<Db>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(input): Json<UpdateDatabase>,
) -> ApiResult<Response> {
    let mut state = db.write().await;
    let stored = state
        .databases
        .get_mut(&id)
        .ok_or_else(|| ApiFailure::not_found("managed database", &id))?;
    check_etag(&headers, &stored.etag)?;
    if let Some(tags) = input.freeform_tags {
        stored.value.freeform_tags = tags;
    }
    stored.touch();
    Ok(with_etag(stored))
}

async fn list_tablespaces(
    State(db): State<Db>,
    Path(id): Path<String>,
    Query(params): Query<ListParams>,
) -> ApiResult<Response> {
    let state = db.read().await;
    if !state.databases.contains_key(&id) {
        return Err(ApiFailure::not_found("managed database", &id));
    }
    let all = state.tablespaces.get(&id).map(Vec::as_slice).unwrap_or(&[]);
    let start = match params.page.as_deref() {
        Some(page) => page.parse::<usize>().map_err(|_| {
            ApiFailure::new(StatusCode::BAD_REQUEST, "InvalidParameter", "invalid page token")
        })?,
        None => 0,
    };
    let limit = match params.limit {
        Some(0) => {
            return Err(ApiFailure::new(
                StatusCode::BAD_REQUEST,
                "InvalidParameter",
                "limit must be at least 1",
            ))
        }
        Some(limit) => limit,
        None => all.len().max(1),
    };
    let end = start.saturating_add(limit).min(all.len());
    let items = all.get(start..end).unwrap_or(&[]);

    let mut response = Json(serde_json::json!({ "items": items })).into_response();
    if end < all.len() {
        response
            .headers_mut()
            .insert(OPC_NEXT_PAGE, HeaderValue::from(end));
    }
    Ok(response)
}

async fn get_tablespace(
    State(db): State<Db>,
    Path((id, name)): Path<(String, String)>,
) -> ApiResult<Json<Tablespace>> {
    let state = db.read().await;
    state
        .tablespaces
        .get(&id)
        .and_then(|all| all.iter().find(|t| t.name == name))
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiFailure::not_found("tablespace", &name))
}

// --- managed database groups ---

async fn list_groups(
    State(db): State<Db>,
    Query(params): Query<ListParams>,
) -> ApiResult<Json<serde_json::Value>> {
    let compartment = params
        .compartment_id
        .ok_or_else(|| ApiFailure::missing("compartmentId"))?;
    let state = db.read().await;
    let items: Vec<serde_json::Value> = state
        .groups
        .values()
        .map(|v| &v.value)
        .filter(|g| g.compartment_id == compartment)
        .filter(|g| params.name.as_deref().map_or(true, |n| g.name == n))
        .map(|g| {
            serde_json::json!({
                "id": g.id,
                "name": g.name,
                "compartmentId": g.compartment_id,
                "managedDatabaseCount": g.managed_databases.len(),
                "lifecycleState": g.lifecycle_state,
            })
        })
        .collect();
    Ok(Json(serde_json::json!({ "items": items })))
}

async fn create_group(
    State(db): State<Db>,
    headers: HeaderMap,
    Json(input): Json<CreateGroup>,
) -> ApiResult<Response> {
    if input.name.trim().is_empty() {
        return Err(ApiFailure::missing("name"));
    }
    let token = headers
        .get(OPC_RETRY_TOKEN)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let mut state = db.write().await;
    if let Some(existing) = token
        .as_ref()
        .and_then(|t| state.retry_tokens.get(t))
        .and_then(|id| state.groups.get(id))
    {
        tracing::debug!(id = %existing.value.id, "replaying create for retry token");
        return Ok(with_etag(existing));
    }
    if state.groups.values().any(|g| g.value.name == input.name) {
        return Err(ApiFailure::new(
            StatusCode::CONFLICT,
            "Conflict",
            format!("a group named {} already exists", input.name),
        ));
    }

    let id = format!("ocid1.dbmgmtmanageddatabasegroup.oc1..{}", Uuid::new_v4().simple());
    let group = Versioned::new(ManagedDatabaseGroup {
        id: id.clone(),
        name: input.name,
        compartment_id: input.compartment_id,
        description: input.description,
        managed_databases: Vec::new(),
        lifecycle_state: "ACTIVE".to_string(),
    });
    let response = with_etag(&group);
    state.groups.insert(id.clone(), group);
    if let Some(token) = token {
        state.retry_tokens.insert(token, id);
    }
    Ok(response)
}

async fn get_group(State(db): State<Db>, Path(id): Path<String>) -> ApiResult<Response> {
    let state = db.read().await;
    let stored = state
        .groups
        .get(&id)
        .ok_or_else(|| ApiFailure::not_found("managed database group", &id))?;
    Ok(with_etag(stored))
}

async fn update_group(
    State(db): State<Db>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(input): Json<UpdateGroup>,
) -> ApiResult<Response> {
    let mut state = db.write().await;
    let stored = state
        .groups
        .get_mut(&id)
        .ok_or_else(|| ApiFailure::not_found("managed database group", &id))?;
    check_etag(&headers, &stored.etag)?;
    if input.description.is_some() {
        stored.value.description = input.description;
    }
    stored.touch();
    Ok(with_etag(stored))
}

async fn delete_group(
    State(db): State<Db>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> ApiResult<StatusCode> {
    let mut state = db.write().await;
    let stored = state
        .groups
        .get(&id)
        .ok_or_else(|| ApiFailure::not_found("managed database group", &id))?;
    check_etag(&headers, &stored.etag)?;
    state.groups.remove(&id);
    state.retry_tokens.retain(|_, group_id| *group_id != id);
    Ok(StatusCode::NO_CONTENT)
}

async fn add_member(
    State(db): State<Db>,
    Path(id): Path<String>,
    Json(input): Json<MemberDetails>,
) -> ApiResult<StatusCode> {
    let mut state = db.write().await;
    let database = state
        .databases
        .get(&input.managed_database_id)
        .map(|d| ChildDatabase {
            id: d.value.id.clone(),
            name: d.value.name.clone(),
            database_type: d.value.database_type.clone(),
        })
        .ok_or_else(|| ApiFailure::not_found("managed database", &input.managed_database_id))?;
    let group = state
        .groups
        .get_mut(&id)
        .ok_or_else(|| ApiFailure::not_found("managed database group", &id))?;
    if group.value.managed_databases.iter().any(|m| m.id == database.id) {
        return Err(ApiFailure::new(
            StatusCode::CONFLICT,
            "Conflict",
            format!("{} is already a member", database.id),
        ));
    }
    group.value.managed_databases.push(database);
    group.touch();
    Ok(StatusCode::NO_CONTENT)
}

async fn remove_member(
    State(db): State<Db>,
    Path(id): Path<String>,
    Json(input): Json<MemberDetails>,
) -> ApiResult<StatusCode> {
    let mut state = db.write().await;
    let group = state
        .groups
        .get_mut(&id)
        .ok_or_else(|| ApiFailure::not_found("managed database group", &id))?;
    let before = group.value.managed_databases.len();
    group
        .value
        .managed_databases
        .retain(|m| m.id != input.managed_database_id);
    if group.value.managed_databases.len() == before {
        return Err(ApiFailure::not_found("group member", &input.managed_database_id));
    }
    group.touch();
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_state_has_databases_and_tablespaces() {
        let state = MockState::seeded();
        assert_eq!(state.databases.len(), 2);
        assert_eq!(state.tablespaces["ocid1.manageddatabase.oc1..orcl"].len(), 5);
        assert!(state.groups.is_empty());
    }

    #[test]
    fn faults_are_consumed_count_times() {
        let mut state = MockState::default();
        state.fault = Some(Fault {
            status: 503,
            count: 2,
            code: None,
            retry_after_secs: None,
        });
        assert_eq!(state.take_fault().map(|f| f.status), Some(503));
        assert_eq!(state.take_fault().map(|f| f.status), Some(503));
        assert!(state.take_fault().is_none());
    }

    #[test]
    fn tablespace_type_uses_wire_name() {
        let state = MockState::seeded();
        let json = serde_json::to_value(&state.tablespaces["ocid1.manageddatabase.oc1..orcl"][2]).unwrap();
        assert_eq!(json["type"], "TEMPORARY");
        assert_eq!(json["allocatedSizeKb"], 307_200.0);
    }

    #[test]
    fn create_group_requires_compartment() {
        let result: Result<CreateGroup, _> = serde_json::from_str(r#"{"name":"g"}"#);
        assert!(result.is_err());
    }
}
