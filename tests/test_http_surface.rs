//! HTTP surface checks that need no database: the server is pointed at a port nothing
//! listens on, so anything that reaches the storage layer fails fast with a
//! connection error.

use productos_api::storage::schema;
use productos_api::transport;
use productos_api::{AppError, Config, ConnectionAcquirer, DatabaseConfig, RetryPolicy};
use serde_json::{json, Value};
use std::time::Duration;

type TestResult = Result<(), Box<dyn std::error::Error>>;

fn unreachable_database_config() -> Config {
    Config {
        database: DatabaseConfig {
            host: "127.0.0.1".to_string(),
            port: 1,
            ..DatabaseConfig::default()
        },
        retry: RetryPolicy {
            max_attempts: 2,
            backoff: Duration::from_millis(10),
        },
        startup_delay: Duration::ZERO,
        ..Config::default()
    }
}

struct TestServer {
    base_url: String,
    client: reqwest::Client,
}

impl TestServer {
    async fn spawn(config: Config) -> Result<Self, Box<dyn std::error::Error>> {
        let state = transport::http::AppState::new(&config);
        let app = transport::http::create_app(state);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        Ok(Self {
            base_url: format!("http://{}", addr),
            client: reqwest::Client::new(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

fn error_text(body: &Value) -> &str {
    body["error"].as_str().unwrap_or_default()
}

fn valid_payload() -> Value {
    json!({ "nombre": "A", "descripcion": "B", "precio": 1.5, "stock": 10 })
}

#[tokio::test]
async fn liveness_is_ok_while_database_is_down() -> TestResult {
    let server = TestServer::spawn(unreachable_database_config()).await?;

    let resp = server.client.get(server.url("/health")).send().await?;
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.json::<Value>().await?, json!({ "status": "ok" }));
    Ok(())
}

#[tokio::test]
async fn readiness_reports_unreachable_database() -> TestResult {
    let server = TestServer::spawn(unreachable_database_config()).await?;

    let resp = server.client.get(server.url("/healthz")).send().await?;
    assert_eq!(resp.status(), 503);
    let body = resp.json::<Value>().await?;
    assert_eq!(body["status"], "unhealthy");
    assert!(error_text(&body).contains("2 attempt"));
    Ok(())
}

#[tokio::test]
async fn product_handlers_map_connection_failure_to_503() -> TestResult {
    let server = TestServer::spawn(unreachable_database_config()).await?;
    let client = &server.client;

    let list = client.get(server.url("/productos")).send().await?;
    assert_eq!(list.status(), 503);
    assert!(list.json::<Value>().await?["error"].is_string());

    let get = client.get(server.url("/productos/1")).send().await?;
    assert_eq!(get.status(), 503);

    let create = client
        .post(server.url("/productos"))
        .json(&valid_payload())
        .send()
        .await?;
    assert_eq!(create.status(), 503);

    let update = client
        .put(server.url("/productos/1"))
        .json(&valid_payload())
        .send()
        .await?;
    assert_eq!(update.status(), 503);
    assert!(update.json::<Value>().await?["error"].is_string());

    let delete = client.delete(server.url("/productos/1")).send().await?;
    assert_eq!(delete.status(), 503);
    Ok(())
}

#[tokio::test]
async fn incomplete_bodies_are_rejected_before_any_connection() -> TestResult {
    // A 503 here would mean the handler went to the database first.
    let server = TestServer::spawn(unreachable_database_config()).await?;
    let client = &server.client;

    let create = client
        .post(server.url("/productos"))
        .json(&json!({ "nombre": "A", "descripcion": "B", "precio": 1.5 }))
        .send()
        .await?;
    assert_eq!(create.status(), 422);
    let body = create.json::<Value>().await?;
    assert!(error_text(&body).contains("stock"));

    let update = client
        .put(server.url("/productos/1"))
        .json(&json!({ "nombre": "only the name" }))
        .send()
        .await?;
    assert_eq!(update.status(), 422);

    let wrong_type = client
        .post(server.url("/productos"))
        .json(&json!({ "nombre": "A", "descripcion": "B", "precio": "cheap", "stock": 1 }))
        .send()
        .await?;
    assert_eq!(wrong_type.status(), 422);

    let not_json = client
        .post(server.url("/productos"))
        .body("nombre=A")
        .send()
        .await?;
    assert_eq!(not_json.status(), 422);
    Ok(())
}

#[tokio::test]
async fn overlong_name_is_rejected_before_any_connection() -> TestResult {
    let server = TestServer::spawn(unreachable_database_config()).await?;

    let resp = server
        .client
        .post(server.url("/productos"))
        .json(&json!({
            "nombre": "n".repeat(101),
            "descripcion": "B",
            "precio": 1.5,
            "stock": 10
        }))
        .send()
        .await?;
    assert_eq!(resp.status(), 422);
    let body = resp.json::<Value>().await?;
    assert!(error_text(&body).contains("nombre"));
    Ok(())
}

#[tokio::test]
async fn non_integer_id_is_a_bad_request() -> TestResult {
    let server = TestServer::spawn(unreachable_database_config()).await?;
    let client = &server.client;

    let resp = client.get(server.url("/productos/abc")).send().await?;
    assert_eq!(resp.status(), 400);
    assert!(resp.json::<Value>().await?["error"].is_string());
    Ok(())
}

#[tokio::test]
async fn openapi_document_lists_every_route() -> TestResult {
    let server = TestServer::spawn(unreachable_database_config()).await?;

    let doc = server
        .client
        .get(server.url("/api-docs/openapi.json"))
        .send()
        .await?
        .json::<Value>()
        .await?;
    for path in ["/health", "/healthz", "/productos", "/productos/{id}"] {
        assert!(
            doc["paths"].get(path).is_some(),
            "missing {} in OpenAPI doc",
            path
        );
    }
    Ok(())
}

#[tokio::test]
async fn schema_initialization_fails_when_database_is_unreachable() {
    let config = unreachable_database_config();
    let acquirer = ConnectionAcquirer::new(&config.database, config.retry);

    let result = schema::initialize(&acquirer, Duration::ZERO).await;
    assert!(
        matches!(result, Err(AppError::Connection(_))),
        "expected a connection error, got {:?}",
        result
    );
}
