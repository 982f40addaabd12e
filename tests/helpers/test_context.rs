//! Test context for unified test setup
//!
//! Builds the full router over a seeded in-memory store and drives it
//! in-process, without binding a socket.

use axum::{
    body::{to_bytes, Body},
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
};
use campus_events::{
    build_router,
    config::Settings,
    server::AppService,
    database::{create_pool, run_migrations, seed_sample_data, DatabaseService, PoolConfig},
    services::ServiceFactory,
    state::AppContext,
};
use serde_json::Value;
use tower::ServiceExt;

/// The application under test together with direct store access
pub struct TestApp {
    pub router: AppService,
    pub database: DatabaseService,
    pub settings: Settings,
}

impl TestApp {
    /// Seeded application with default (development) settings
    pub async fn new() -> Self {
        Self::with_settings(Settings::default()).await
    }

    /// Seeded application running in the given environment
    pub async fn with_environment(environment: &str) -> Self {
        let mut settings = Settings::default();
        settings.server.environment = environment.to_string();
        Self::with_settings(settings).await
    }

    pub async fn with_settings(settings: Settings) -> Self {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();

        let pool = create_pool(&PoolConfig::in_memory())
            .await
            .expect("in-memory pool");
        run_migrations(&pool).await.expect("migrations");
        seed_sample_data(&pool).await.expect("sample data");

        let database = DatabaseService::new(pool);
        let services = ServiceFactory::new(database.clone(), &settings);
        let router = build_router(AppContext::new(settings.clone(), services));

        Self {
            router,
            database,
            settings,
        }
    }

    /// Send a request and decode the JSON body, `Value::Null` if there is none
    pub async fn request(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let body = body.map(|value| value.to_string());
        self.send(method, uri, body).await
    }

    /// Send a raw body with a JSON content type
    pub async fn send(&self, method: Method, uri: &str, body: Option<String>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(body)),
            None => builder.body(Body::empty()),
        }
        .expect("valid request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("readable body");
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.request(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::POST, uri, Some(body)).await
    }

    /// Close the pool so every store access fails
    pub async fn break_database(&self) {
        self.database.pool().close().await;
    }
}
