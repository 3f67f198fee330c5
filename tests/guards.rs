use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum::routing::get;
use serde_json::{Value, json};
use tower::ServiceExt;

use bearer_guard::api::v1::extractors::AuthCtxExtractor;
use bearer_guard::app::{build_router, build_state};
use bearer_guard::config::{AppEnv, Config, ConfigError};
use bearer_guard::middleware::auth::{access, role};
use bearer_guard::state::AppState;

const SECRET: &str = "integration-secret";

fn config(secret: &str) -> Config {
    Config {
        addr: SocketAddr::from(([127, 0, 0, 1], 0)),
        app_env: AppEnv::Development,
        jwt_secret: secret.to_string(),
        admin_roles: vec!["admin".to_string()],
    }
}

fn state() -> AppState {
    build_state(&config(SECRET)).unwrap()
}

fn app() -> Router {
    let config = config(SECRET);
    build_router(build_state(&config).unwrap(), &config)
}

fn token(state: &AppState, user_id: u32, role: &str) -> String {
    state.codec.encode(user_id, role).unwrap()
}

async fn send(app: Router, req: Request<Body>) -> (StatusCode, Value) {
    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn get_req(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn get_with_auth(uri: &str, authorization: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(header::AUTHORIZATION, authorization)
        .body(Body::empty())
        .unwrap()
}

// Router whose handler counts how many times it actually ran.
fn counting_router(state: AppState, roles: Option<&[&str]>) -> (Router, Arc<AtomicUsize>) {
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = hits.clone();

    let inner: Router<AppState> = Router::new().route(
        "/guarded",
        get(move |AuthCtxExtractor(ctx): AuthCtxExtractor| {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                axum::Json(json!({"user_id": ctx.user_id, "role": ctx.role}))
            }
        }),
    );

    let guarded = match roles {
        Some(roles) => role::apply(inner, state.clone(), roles.iter().copied()),
        None => access::apply(inner, state.clone()),
    };

    (guarded.with_state(state), hits)
}

#[test]
fn empty_secret_fails_setup() {
    let err = build_state(&config("")).unwrap_err();
    assert_eq!(
        err.downcast_ref::<ConfigError>(),
        Some(&ConfigError::EmptySecret)
    );
}

#[tokio::test]
async fn health_needs_no_token() {
    let (status, body) = send(app(), get_req("/api/v1/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));
}

#[tokio::test]
async fn no_token_is_bad_request() {
    let (router, hits) = counting_router(state(), None);
    let (status, body) = send(router, get_req("/guarded")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"Info": "Authorization token not specified"}));
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn header_without_bearer_form_is_bad_request() {
    let (status, body) = send(app(), get_with_auth("/api/v1/me", "garbage-no-space")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"Info": "Authorization token not specified"}));
}

#[tokio::test]
async fn wrong_secret_token_in_query_is_unauthorized() {
    let other = build_state(&config("some-other-secret")).unwrap();
    let foreign = token(&other, 1, "admin");

    let (router, hits) = counting_router(state(), None);
    let (status, body) = send(router, get_req(&format!("/guarded?token={foreign}"))).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({"Info": "Access denied, token invalid"}));
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn unparseable_token_is_server_error() {
    let (status, body) = send(app(), get_with_auth("/api/v1/me", "Bearer not.a.jwt")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"Info": "Failed to parse authorization token"}));
}

#[tokio::test]
async fn valid_bearer_token_reaches_handler() {
    let state = state();
    let bearer = format!("Bearer {}", token(&state, 42, "user"));

    let (router, hits) = counting_router(state, None);
    let (status, body) = send(router, get_with_auth("/guarded", &bearer)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"user_id": 42, "role": "user"}));
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn query_token_is_used_before_header() {
    let state = state();
    let uri = format!("/guarded?token={}", token(&state, 5, "user"));

    let (router, _) = counting_router(state, None);
    let (status, body) = send(router, get_with_auth(&uri, "garbage-no-space")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user_id"], json!(5));
}

#[tokio::test]
async fn role_outside_allow_list_is_unauthorized() {
    let state = state();
    let bearer = format!("Bearer {}", token(&state, 7, "user"));

    let (router, hits) = counting_router(state, Some(&["admin"]));
    let (status, body) = send(router, get_with_auth("/guarded", &bearer)).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        body,
        json!({"Info": "Access denied, check with your IT department"})
    );
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn role_in_allow_list_reaches_handler_with_identity() {
    let state = state();
    let bearer = format!("Bearer {}", token(&state, 99, "admin"));

    let (router, hits) = counting_router(state, Some(&["admin", "user"]));
    let (status, body) = send(router, get_with_auth("/guarded", &bearer)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"user_id": 99, "role": "admin"}));
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn role_guard_still_authenticates_first() {
    let (router, hits) = counting_router(state(), Some(&["admin"]));
    let (status, _) = send(router, get_req("/guarded")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn admin_route_uses_configured_roles() {
    let state = state();
    let admin = format!("Bearer {}", token(&state, 1, "admin"));
    let user = format!("Bearer {}", token(&state, 2, "user"));

    let (status, body) = send(app(), get_with_auth("/api/v1/admin", &admin)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"user_id": 1, "role": "admin"}));

    let (status, _) = send(app(), get_with_auth("/api/v1/admin", &user)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, body) = send(app(), get_with_auth("/api/v1/me", &user)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"user_id": 2, "role": "user"}));
}

#[tokio::test]
async fn extractor_without_guard_reports_missing_context() {
    let router: Router = Router::new().route(
        "/unguarded",
        get(|AuthCtxExtractor(ctx): AuthCtxExtractor| async move { ctx.role }),
    );

    let (status, body) = send(router, get_req("/unguarded")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({"Info": "token info not set, make sure authentication middleware is used"})
    );
}
