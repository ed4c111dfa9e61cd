//! In-process GoTrue stand-in for async tests.
//!
//! Binds an Axum router on `127.0.0.1:0` that mimics the handful of
//! `/auth/v1` endpoints the server uses and records every call it receives.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, post};
use axum::Router;
use serde_json::{Value, json};

use crate::config::{GoTrueConfig, GoTrueTimeouts};
use crate::services::gotrue::GoTrueClient;

pub const ANON_KEY: &str = "test-anon-key";
pub const USER_ID: &str = "5f0c9a5e-1b7e-4a53-9d1c-2b1d0f5a7c11";
pub const USER_EMAIL: &str = "ada@example.com";
pub const GOOD_PASSWORD: &str = "correct-horse";
pub const VALID_ACCESS: &str = "good-access";
pub const VALID_REFRESH: &str = "valid-refresh";
pub const ROTATED_ACCESS: &str = "fresh-access";
pub const ROTATED_REFRESH: &str = "fresh-refresh";
pub const EMAIL_REDIRECT: &str = "http://localhost:3000/login";
/// Sign-ups for this address behave as if e-mail confirmation is disabled.
pub const AUTOCONFIRM_EMAIL: &str = "instant@example.com";
/// Sign-ups for this address are rejected as duplicates.
pub const TAKEN_EMAIL: &str = "taken@example.com";

#[derive(Clone, Debug)]
pub struct RecordedCall {
    pub path: &'static str,
    pub query: HashMap<String, String>,
    pub apikey: Option<String>,
    pub bearer: Option<String>,
    pub body: Value,
}

#[derive(Clone, Default)]
pub struct StubGoTrue {
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl StubGoTrue {
    pub fn calls_to(&self, path: &str) -> Vec<RecordedCall> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|call| call.path == path)
            .cloned()
            .collect()
    }

    fn record(&self, path: &'static str, headers: &HeaderMap, query: HashMap<String, String>, body: Value) {
        let header = |name: &str| headers.get(name).and_then(|v| v.to_str().ok()).map(str::to_owned);
        let bearer = header("authorization").and_then(|v| v.strip_prefix("Bearer ").map(str::to_owned));
        self.calls.lock().unwrap().push(RecordedCall { path, query, apikey: header("apikey"), bearer, body });
    }
}

fn profile_metadata() -> Value {
    json!({ "name": "Ada", "type": "DAS" })
}

fn user_json(email: &str, metadata: Value) -> Value {
    json!({
        "id": USER_ID,
        "aud": "authenticated",
        "role": "authenticated",
        "email": email,
        "user_metadata": metadata,
    })
}

fn session_json(access: &str, refresh: &str, user: Value) -> Value {
    json!({
        "access_token": access,
        "token_type": "bearer",
        "expires_in": 3600,
        "refresh_token": refresh,
        "user": user,
    })
}

fn has_anon_key(headers: &HeaderMap) -> bool {
    headers.get("apikey").and_then(|v| v.to_str().ok()) == Some(ANON_KEY)
}

fn missing_key() -> Response {
    (StatusCode::UNAUTHORIZED, Json(json!({ "message": "No API key found in request" }))).into_response()
}

async fn signup(
    State(stub): State<StubGoTrue>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
    Json(body): Json<Value>,
) -> Response {
    stub.record("signup", &headers, query, body.clone());
    if !has_anon_key(&headers) {
        return missing_key();
    }
    let email = body["email"].as_str().unwrap_or_default();
    if email == TAKEN_EMAIL {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "code": 422, "error_code": "user_already_exists", "msg": "User already registered" })),
        )
            .into_response();
    }
    let user = user_json(email, body["data"].clone());
    if email == AUTOCONFIRM_EMAIL {
        Json(session_json(VALID_ACCESS, VALID_REFRESH, user)).into_response()
    } else {
        Json(user).into_response()
    }
}

async fn token(
    State(stub): State<StubGoTrue>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
    Json(body): Json<Value>,
) -> Response {
    let grant_type = query.get("grant_type").cloned().unwrap_or_default();
    stub.record("token", &headers, query, body.clone());
    if !has_anon_key(&headers) {
        return missing_key();
    }
    match grant_type.as_str() {
        "password" if body["password"] == GOOD_PASSWORD => {
            let email = body["email"].as_str().unwrap_or(USER_EMAIL);
            Json(session_json(VALID_ACCESS, VALID_REFRESH, user_json(email, profile_metadata()))).into_response()
        }
        "password" => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "invalid_grant", "error_description": "Invalid login credentials" })),
        )
            .into_response(),
        "refresh_token" if body["refresh_token"] == VALID_REFRESH => {
            Json(session_json(ROTATED_ACCESS, ROTATED_REFRESH, user_json(USER_EMAIL, profile_metadata()))).into_response()
        }
        _ => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "invalid_grant", "error_description": "Invalid Refresh Token: Refresh Token Not Found" })),
        )
            .into_response(),
    }
}

async fn user(State(stub): State<StubGoTrue>, headers: HeaderMap) -> Response {
    stub.record("user", &headers, HashMap::new(), Value::Null);
    let bearer = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "));
    match bearer {
        Some(VALID_ACCESS | ROTATED_ACCESS) => Json(user_json(USER_EMAIL, profile_metadata())).into_response(),
        _ => (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "code": 401, "error_code": "bad_jwt", "msg": "invalid JWT: token is expired" })),
        )
            .into_response(),
    }
}

async fn logout(State(stub): State<StubGoTrue>, headers: HeaderMap) -> StatusCode {
    stub.record("logout", &headers, HashMap::new(), Value::Null);
    StatusCode::NO_CONTENT
}

/// Start the stub and return it with a client pointed at it.
pub async fn spawn_gotrue() -> (StubGoTrue, GoTrueClient) {
    let stub = StubGoTrue::default();
    let router = Router::new()
        .route("/auth/v1/signup", post(signup))
        .route("/auth/v1/token", post(token))
        .route("/auth/v1/user", get(user))
        .route("/auth/v1/logout", post(logout))
        .with_state(stub.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    (stub, GoTrueClient::new(&config_for(&format!("http://{addr}"))).unwrap())
}

pub fn config_for(url: &str) -> GoTrueConfig {
    GoTrueConfig {
        url: url.to_owned(),
        anon_key: ANON_KEY.to_owned(),
        email_redirect_url: Some(EMAIL_REDIRECT.to_owned()),
        timeouts: GoTrueTimeouts { request_secs: 5, connect_secs: 5 },
    }
}
