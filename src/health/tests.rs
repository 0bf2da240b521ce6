use crate::health::responses::HealthCheckResponse;
use crate::http::tests::test_server;
use crate::thumbnails::memory::InMemoryObjectStore;

#[tokio::test]
async fn test_health_check() {
    let server = test_server(InMemoryObjectStore::default());

    let response = server.get("/health/check").await;

    response.assert_status_ok();
    response.assert_json(&HealthCheckResponse {
        error: false,
        version: env!("CARGO_PKG_VERSION").to_owned(),
    });
}

#[tokio::test]
async fn test_health_check_does_not_touch_storage() {
    let store = InMemoryObjectStore::default();
    let server = test_server(store.clone());

    server.get("/health/check").await.assert_status_ok();

    assert!(store.fetches().is_empty());
    assert!(store.stores().is_empty());
}
