use super::*;

use axum::Router;
use axum::extract::{Json, Path};
use axum::http::StatusCode as AxStatus;
use serde_json::{Value, json};

use crate::config::GateConfig;
use crate::session::SessionHandle;
use crate::storage::MemoryStore;

fn alice() -> Value {
    json!({"id": 1, "name": "alice", "email": "alice@example.com", "role": "admin", "status": "active"})
}

async fn list_users() -> Json<Value> {
    Json(json!([alice()]))
}

async fn create_user(Json(mut user): Json<Value>) -> Json<Value> {
    user["id"] = json!(2);
    Json(user)
}

async fn get_user(Path(id): Path<u64>) -> Json<Value> {
    let mut user = alice();
    user["id"] = json!(id);
    Json(user)
}

async fn patch_user(Path(id): Path<u64>, Json(patch): Json<Value>) -> Json<Value> {
    let mut user = alice();
    user["id"] = json!(id);
    for (key, value) in patch.as_object().cloned().unwrap_or_default() {
        user[key] = value;
    }
    Json(user)
}

async fn delete_user(Path(_id): Path<u64>) -> AxStatus {
    AxStatus::NO_CONTENT
}

async fn spawn_backend() -> String {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    // `axum::routing::get` stays fully qualified: the glob import above pulls
    // in this module's own `get` endpoint helper.
    let app = Router::new()
        .route("/users", axum::routing::get(list_users).post(create_user))
        .route("/users/{id}", axum::routing::get(get_user).patch(patch_user).delete(delete_user));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn gate_over(base_url: &str) -> RequestGate {
    let config = GateConfig { base_url: base_url.to_owned(), ..GateConfig::default() };
    RequestGate::new(&config, SessionHandle::new(Box::new(MemoryStore::new()))).unwrap()
}

// =============================================================================
// models
// =============================================================================

#[test]
fn user_decodes_backend_shape() {
    let user: User = serde_json::from_value(alice()).unwrap();
    assert_eq!(user.id, 1);
    assert_eq!(user.role, Role::Admin);
    assert_eq!(user.status, UserStatus::Active);
}

#[test]
fn unknown_role_in_payload_degrades_to_guest() {
    let mut raw = alice();
    raw["role"] = json!("owner");
    let user: User = serde_json::from_value(raw).unwrap();
    assert_eq!(user.role, Role::Guest);
}

#[test]
fn patch_serializes_only_set_fields() {
    let patch = UserPatch { email: Some("new@example.com".into()), ..UserPatch::default() };
    let value = serde_json::to_value(&patch).unwrap();
    assert_eq!(value, json!({"email": "new@example.com"}));
}

#[test]
fn empty_patch_serializes_to_empty_object() {
    let value = serde_json::to_value(UserPatch::default()).unwrap();
    assert_eq!(value, json!({}));
}

// =============================================================================
// endpoints
// =============================================================================

#[tokio::test]
async fn list_and_get() {
    let base = spawn_backend().await;
    let gate = gate_over(&base);

    let users = list(&gate).await.unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].name, "alice");

    let user = get(&gate, 7).await.unwrap();
    assert_eq!(user.id, 7);
}

#[tokio::test]
async fn create_assigns_id() {
    let base = spawn_backend().await;
    let gate = gate_over(&base);
    let user = create(
        &gate,
        &NewUser {
            name: "bob".into(),
            email: "bob@example.com".into(),
            role: Role::User,
            status: UserStatus::Active,
        },
    )
    .await
    .unwrap();
    assert_eq!(user.id, 2);
    assert_eq!(user.name, "bob");
}

#[tokio::test]
async fn update_applies_patch() {
    let base = spawn_backend().await;
    let gate = gate_over(&base);
    let patch = UserPatch { status: Some(UserStatus::Inactive), ..UserPatch::default() };
    let user = update(&gate, 1, &patch).await.unwrap();
    assert_eq!(user.status, UserStatus::Inactive);
}

#[tokio::test]
async fn delete_succeeds_on_no_content() {
    let base = spawn_backend().await;
    let gate = gate_over(&base);
    delete(&gate, 1).await.unwrap();
}
