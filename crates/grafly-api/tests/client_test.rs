#![allow(clippy::unwrap_used)]
// Integration tests for `GrafanaClient` using wiremock.

use serde_json::json;
use url::Url;
use wiremock::matchers::{body_json, body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use grafly_api::{Dashboard, DataSource, Error, GrafanaClient, TransportConfig};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, GrafanaClient) {
    let server = MockServer::start().await;
    let base_url = Url::parse(&server.uri()).unwrap();
    let client = GrafanaClient::with_client(reqwest::Client::new(), base_url);
    (server, client)
}

fn influx_source() -> DataSource {
    DataSource {
        name: "testme".into(),
        kind: "influxdb".into(),
        access: "proxy".into(),
        url: "http://localhost:8086".into(),
        user: "root".into(),
        password: "root".into(),
        database: "test".into(),
        is_default: true,
        ..DataSource::default()
    }
}

// ── Authentication tests ────────────────────────────────────────────

#[tokio::test]
async fn test_login_success() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/login"))
        .and(body_json(json!({
            "user": "admin",
            "email": "",
            "password": "admin"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "Logged in" })))
        .expect(1)
        .mount(&server)
        .await;

    let secret: secrecy::SecretString = "admin".to_string().into();
    client.login("admin", &secret).await.unwrap();
}

#[tokio::test]
async fn test_login_failure() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "message": "Invalid username or password" })),
        )
        .mount(&server)
        .await;

    let secret: secrecy::SecretString = "wrong".to_string().into();
    let result = client.login("admin", &secret).await;

    match result {
        Err(Error::Authentication { ref message }) => {
            assert!(
                message.contains("401") && message.contains("Invalid username or password"),
                "unexpected message: {message}"
            );
        }
        other => panic!("expected Authentication error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_session_cookie_is_replayed() {
    let server = MockServer::start().await;
    let base_url = Url::parse(&server.uri()).unwrap();
    let client = GrafanaClient::new(base_url, &TransportConfig::default()).unwrap();

    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("set-cookie", "grafana_sess=abc123; Path=/; HttpOnly")
                .set_body_json(json!({ "message": "Logged in" })),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/datasources"))
        .and(header("cookie", "grafana_sess=abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let secret: secrecy::SecretString = "admin".to_string().into();
    client.login("admin", &secret).await.unwrap();

    assert_eq!(client.cookie_header().as_deref(), Some("grafana_sess=abc123"));
    let sources = client.list_data_sources().await.unwrap();
    assert!(sources.is_empty());
}

// ── Data source tests ───────────────────────────────────────────────

#[tokio::test]
async fn test_list_data_sources() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/datasources"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": 1,
                "orgId": 1,
                "name": "testme",
                "type": "influxdb",
                "access": "proxy",
                "url": "http://localhost:8086",
                "database": "test",
                "isDefault": true
            },
            {
                "id": 2,
                "orgId": 1,
                "name": "graphite",
                "type": "graphite",
                "url": "http://localhost:8080"
            }
        ])))
        .mount(&server)
        .await;

    let sources = client.list_data_sources().await.unwrap();

    assert_eq!(sources.len(), 2);
    assert_eq!(sources[0].name, "testme");
    assert_eq!(sources[0].kind, "influxdb");
    assert!(sources[0].is_default);
    assert_eq!(sources[1].id, 2);
    assert!(!sources[1].is_default);
}

#[tokio::test]
async fn test_get_data_source_by_name() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/datasources"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1, "name": "graphite", "type": "graphite" },
            { "id": 4, "name": "testme", "type": "influxdb" }
        ])))
        .mount(&server)
        .await;

    let ds = client.get_data_source("testme").await.unwrap();
    assert_eq!(ds.id, 4);

    let missing = client.get_data_source("nope").await;
    match missing {
        Err(Error::NotFound { kind, ref name }) => {
            assert_eq!(kind, "data source");
            assert_eq!(name, "nope");
        }
        other => panic!("expected NotFound error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_create_data_source() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/datasources"))
        .and(body_partial_json(json!({
            "name": "testme",
            "type": "influxdb",
            "url": "http://localhost:8086",
            "isDefault": true
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 9,
            "message": "Datasource added"
        })))
        .expect(1)
        .mount(&server)
        .await;

    client.create_data_source(&influx_source()).await.unwrap();
}

#[tokio::test]
async fn test_create_data_source_conflict() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/datasources"))
        .respond_with(
            ResponseTemplate::new(409)
                .set_body_json(json!({ "message": "Data source with same name already exists" })),
        )
        .mount(&server)
        .await;

    let err = client.create_data_source(&influx_source()).await.unwrap_err();
    match err {
        Error::Api { status, ref message } => {
            assert_eq!(status, 409);
            assert_eq!(message, "Data source with same name already exists");
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_delete_data_source() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/api/datasources/9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "Data source deleted" })))
        .expect(1)
        .mount(&server)
        .await;

    let ds = DataSource {
        id: 9,
        ..influx_source()
    };
    client.delete_data_source(&ds).await.unwrap();
}

#[tokio::test]
async fn test_data_source_plugins() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/datasources/plugins"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "influxdb": {
                "module": "plugins/datasource/influxdb/datasource",
                "name": "InfluxDB 0.9.x",
                "pluginType": "datasource",
                "serviceName": "InfluxDatasource",
                "type": "influxdb",
                "annotations": { "enable": true, "list": [] },
                "partials": { "config": "app/plugins/datasource/influxdb/partials/config.html" }
            }
        })))
        .mount(&server)
        .await;

    let plugins = client.data_source_plugins().await.unwrap();
    let influx = plugins.get("influxdb").unwrap();
    assert_eq!(influx.service_name, "InfluxDatasource");
    assert!(influx.annotations.enable);
    assert!(influx.partials.config.ends_with("config.html"));
}

// ── Plugin tests ────────────────────────────────────────────────────

#[tokio::test]
async fn test_plugins_by_type() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/plugins"))
        .and(query_param("type", "datasource"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "name": "InfluxDB",
                "type": "datasource",
                "id": "influxdb",
                "enabled": true,
                "info": {
                    "author": { "name": "Grafana Project", "url": "https://grafana.com" },
                    "version": "5.0.0"
                },
                "latestVersion": "",
                "hasUpdate": false
            }
        ])))
        .mount(&server)
        .await;

    let plugins = client.plugins("datasource").await.unwrap();
    assert_eq!(plugins.len(), 1);
    assert_eq!(plugins[0].id, "influxdb");
    assert_eq!(plugins[0].info.author.name, "Grafana Project");
    assert_eq!(plugins[0].info.version, "5.0.0");
}

// ── Dashboard tests ─────────────────────────────────────────────────

#[tokio::test]
async fn test_get_dashboard() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/dashboards/db/new-dashboard"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "meta": { "slug": "new-dashboard", "created": "2015-06-01T10:00:00Z" },
            "model": {
                "id": 3,
                "title": "new dashboard",
                "rows": [{ "height": "250px", "panels": [{ "type": "graph", "span": 12 }] }],
                "time": { "from": "now-6h", "to": "now" }
            }
        })))
        .mount(&server)
        .await;

    let result = client.get_dashboard("new-dashboard").await.unwrap();
    assert_eq!(result.meta.slug, "new-dashboard");
    assert_eq!(result.model.id, Some(3));
    assert_eq!(result.model.rows[0].panels[0].span, 12);
    assert_eq!(result.model.time.from, "now-6h");
}

#[tokio::test]
async fn test_get_dashboard_not_found() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/dashboards/db/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "message": "Dashboard not found" })))
        .mount(&server)
        .await;

    let err = client.get_dashboard("missing").await.unwrap_err();
    assert!(err.is_not_found(), "expected not found, got: {err:?}");
    assert_eq!(err.to_string(), "dashboard 'missing' not found");
}

#[tokio::test]
async fn test_upload_dashboard_wraps_body() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/dashboards/db"))
        .and(body_partial_json(json!({
            "dashboard": { "id": null, "title": "ops" },
            "overwrite": true
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "slug": "ops",
            "status": "success",
            "version": 1
        })))
        .expect(1)
        .mount(&server)
        .await;

    client
        .upload_dashboard(&Dashboard::new("ops"), true)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_upload_dashboard_json() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/dashboards/db"))
        .and(body_partial_json(json!({
            "dashboard": { "title": "new dashboard", "timezone": "browser", "schemaVersion": 6 },
            "overwrite": false
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "success" })))
        .expect(1)
        .mount(&server)
        .await;

    let doc = r#"{
        "id": null,
        "title": "new dashboard",
        "tags": [ "templated" ],
        "timezone": "browser",
        "rows": [ {} ],
        "schemaVersion": 6,
        "version": 0
    }"#;
    client.upload_dashboard_json(doc, false).await.unwrap();
}

#[tokio::test]
async fn test_upload_dashboard_json_rejects_bad_document() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = client
        .upload_dashboard_json("{ not json", true)
        .await
        .unwrap_err();
    assert!(
        matches!(err, Error::InvalidDashboard { .. }),
        "expected InvalidDashboard, got: {err:?}"
    );
}

#[tokio::test]
async fn test_delete_dashboard_uses_reported_slug() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/dashboards/db/new-dashboard"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "meta": { "slug": "new-dashboard" },
            "model": { "title": "new dashboard" }
        })))
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/api/dashboards/db/new-dashboard"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "title": "new dashboard" })))
        .expect(1)
        .mount(&server)
        .await;

    client.delete_dashboard("new-dashboard").await.unwrap();
}

#[tokio::test]
async fn test_delete_missing_dashboard_skips_delete() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/dashboards/db/ghost"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "message": "Dashboard not found" })))
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = client.delete_dashboard("ghost").await.unwrap_err();
    assert!(matches!(err, Error::NotFound { kind: "dashboard", .. }), "got: {err:?}");
}

// ── Error tests ─────────────────────────────────────────────────────

#[tokio::test]
async fn test_error_without_message_body() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/datasources"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<html>Internal Server Error</html>"))
        .mount(&server)
        .await;

    let err = client.list_data_sources().await.unwrap_err();
    match err {
        Error::Api { status, ref message } => {
            assert_eq!(status, 500);
            assert!(message.is_empty());
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    // Nothing listens on port 9 (discard) locally.
    let client = GrafanaClient::with_client(
        reqwest::Client::new(),
        Url::parse("http://127.0.0.1:9").unwrap(),
    );
    let err = client.list_data_sources().await.unwrap_err();
    assert!(matches!(err, Error::Transport(_)), "got: {err:?}");
}
