use crate::app_context;
use crate::cli::tests::fake_args;
use crate::http::router;
use crate::thumbnails::memory::InMemoryObjectStore;
use axum_test::TestServer;

pub fn test_server(store: InMemoryObjectStore) -> TestServer {
    let args = fake_args();
    let app_context = app_context::init(&args, store);
    let router = router::new(app_context);
    TestServer::new(router).expect("Failed to run test server.")
}
