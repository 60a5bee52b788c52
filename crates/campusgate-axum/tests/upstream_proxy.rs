//! End-to-end forwarding tests against a fake CMS origin.
//!
//! The gateway router is exercised in-process via `oneshot`; its Drupal
//! client then makes real loopback requests to a fake CMS spawned on an
//! ephemeral port.

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use tokio::net::TcpListener;
use tower::ServiceExt;

use campusgate_axum::create_router;
use campusgate_core::queries;

use common::{body_json, graphql_request, live_context, spawn_fake_cms};

fn query_body(document: &str) -> String {
    serde_json::json!({ "query": document }).to_string()
}

#[tokio::test]
async fn test_forward_relays_status_and_body_verbatim() {
    let cms = spawn_fake_cms(207, r#"{"data":{"custom":true}}"#, false).await;
    let app = create_router(live_context(&cms.base_url));

    let response = app
        .oneshot(graphql_request(&query_body(queries::GET_PROGRAMS)))
        .await
        .unwrap();

    // 207 is nothing the gateway would ever synthesize; seeing it here
    // proves the status came straight from upstream.
    assert_eq!(response.status(), StatusCode::MULTI_STATUS);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], br#"{"data":{"custom":true}}"#);
}

#[tokio::test]
async fn test_forward_attaches_bearer_token_and_caches_the_grant() {
    let cms = spawn_fake_cms(200, r#"{"data":{}}"#, false).await;
    let app = create_router(live_context(&cms.base_url));

    let first = app
        .clone()
        .oneshot(graphql_request(&query_body(queries::GET_PROGRAMS)))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::OK);

    let second = app
        .oneshot(graphql_request(&query_body(queries::GET_FACULTY)))
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::OK);

    let auth = cms.log.graphql_auth.lock().unwrap();
    assert_eq!(
        auth.as_slice(),
        vec![Some("Bearer demo-token".to_string()); 2].as_slice()
    );
    // Within the grant's lifetime the second request reuses the cache.
    assert_eq!(cms.log.token_calls(), 1);
}

#[tokio::test]
async fn test_token_failure_degrades_to_anonymous_forwarding() {
    let cms = spawn_fake_cms(200, r#"{"data":{}}"#, true).await;
    let app = create_router(live_context(&cms.base_url));

    let response = app
        .oneshot(graphql_request(&query_body(queries::GET_EVENTS)))
        .await
        .unwrap();

    // The failed grant must not fail the page request.
    assert_eq!(response.status(), StatusCode::OK);
    let auth = cms.log.graphql_auth.lock().unwrap();
    assert_eq!(auth.as_slice(), [None]);
}

#[tokio::test]
async fn test_unreachable_origin_synthesizes_500() {
    // Bind and immediately drop to get a loopback port nobody listens on.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let app = create_router(live_context(&format!("http://{addr}")));

    let response = app
        .oneshot(graphql_request(&query_body(queries::GET_NEWS)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Failed to proxy GraphQL request");
    assert!(
        body["details"].as_str().is_some_and(|d| !d.is_empty()),
        "details should carry the transport error"
    );
}

#[tokio::test]
async fn test_asset_relay_preserves_bytes_and_query_string() {
    let cms = spawn_fake_cms(200, r#"{"data":{}}"#, false).await;
    let app = create_router(live_context(&cms.base_url));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/sites/default/files/styles/large/public/logo.png?itok=c9RtV4Zn")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "image/png"
    );
    assert_eq!(
        response.headers().get(header::CACHE_CONTROL).unwrap(),
        "public, max-age=31536000"
    );

    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], b"fake-png-bytes");

    let requests = cms.log.asset_requests.lock().unwrap();
    assert_eq!(
        requests.as_slice(),
        ["default/files/styles/large/public/logo.png?itok=c9RtV4Zn".to_string()]
    );
}

#[tokio::test]
async fn test_api_proxy_prefix_serves_the_same_assets() {
    let cms = spawn_fake_cms(200, r#"{"data":{}}"#, false).await;
    let app = create_router(live_context(&cms.base_url));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/proxy/sites/default/files/2025-01/vasquez.jpg")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let requests = cms.log.asset_requests.lock().unwrap();
    assert_eq!(
        requests.as_slice(),
        ["default/files/2025-01/vasquez.jpg".to_string()]
    );
}
