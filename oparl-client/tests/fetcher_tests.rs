use oparl_client::{Client, FetchError, Fetcher, FetcherConfig, HttpFetcher};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// The blocking client must not run on an async worker thread, so every
// request below happens inside `spawn_blocking`.

// ── Config defaults ─────────────────────────────────────────────

#[test]
fn fetcher_config_default() {
    let cfg = FetcherConfig::default();
    assert_eq!(cfg.timeout_secs, 30);
    assert!(cfg.verify_https);
    assert!(cfg.user_agent.starts_with("oparl-client/"));
}

#[test]
fn fetcher_config_deserialize_fills_defaults() {
    let cfg: FetcherConfig = serde_json::from_str(r#"{"verify_https": false}"#).unwrap();
    assert!(!cfg.verify_https);
    assert_eq!(cfg.timeout_secs, 30);
}

#[test]
fn fetcher_config_serde_roundtrip() {
    let cfg = FetcherConfig {
        timeout_secs: 5,
        user_agent: "test-agent".to_string(),
        ..Default::default()
    };
    let json = serde_json::to_string(&cfg).unwrap();
    let parsed: FetcherConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.timeout_secs, 5);
    assert_eq!(parsed.user_agent, "test-agent");
    assert!(parsed.verify_https);
}

// ── HttpFetcher ─────────────────────────────────────────────────

#[tokio::test(flavor = "multi_thread")]
async fn fetch_returns_parsed_json() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/oparl/v1/system"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "https://example.org/oparl/v1/system",
            "type": "https://schema.oparl.org/1.0/System",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let url = format!("{}/oparl/v1/system", server.uri());
    let result = tokio::task::spawn_blocking(move || {
        HttpFetcher::new(&FetcherConfig::default())
            .unwrap()
            .fetch(&url)
    })
    .await
    .unwrap();

    let data = result.unwrap();
    assert_eq!(data["type"], "https://schema.oparl.org/1.0/System");
}

#[tokio::test(flavor = "multi_thread")]
async fn fetch_non_success_status_is_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let url = format!("{}/missing", server.uri());
    let result = tokio::task::spawn_blocking(move || {
        HttpFetcher::new(&FetcherConfig::default())
            .unwrap()
            .fetch(&url)
    })
    .await
    .unwrap();

    match result.unwrap_err() {
        FetchError::Transport { reason, .. } => assert!(reason.contains("404")),
        other => panic!("expected transport error, got {other:?}"),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn fetch_invalid_json_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let url = format!("{}/broken", server.uri());
    let result = tokio::task::spawn_blocking(move || {
        HttpFetcher::new(&FetcherConfig::default())
            .unwrap()
            .fetch(&url)
    })
    .await
    .unwrap();

    let err = result.unwrap_err();
    assert!(matches!(err, FetchError::Decode { .. }));
    assert!(err.to_string().contains("invalid JSON"));
}

#[test]
fn fetch_unreachable_host_is_transport_error() {
    let fetcher = HttpFetcher::new(&FetcherConfig {
        timeout_secs: 2,
        ..Default::default()
    })
    .unwrap();
    let err = fetcher.fetch("http://127.0.0.1:1/oparl").unwrap_err();
    assert!(matches!(err, FetchError::Transport { .. }));
}

// ── Client over HTTP ────────────────────────────────────────────

#[tokio::test(flavor = "multi_thread")]
async fn client_walks_system_bodies_over_http() {
    let server = MockServer::start().await;
    let base = server.uri();

    Mock::given(method("GET"))
        .and(path("/system"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": format!("{base}/system"),
            "type": "https://schema.oparl.org/1.0/System",
            "name": "Ratsinformationssystem",
            "body": format!("{base}/bodies"),
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/bodies"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{ "id": format!("{base}/body/2"), "type": "https://schema.oparl.org/1.0/Body", "name": "Zwei" }],
            "links": {},
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/bodies"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{ "id": format!("{base}/body/1"), "type": "https://schema.oparl.org/1.0/Body", "name": "Eins" }],
            "links": { "next": format!("{base}/bodies?page=2") },
        })))
        .mount(&server)
        .await;

    let names = tokio::task::spawn_blocking(move || {
        let client = Client::new().unwrap();
        let system = client.from_identifier(&format!("{base}/system")).unwrap();
        let bodies = system.get("body").unwrap();
        bodies
            .as_collection()
            .unwrap()
            .to_vec()
            .unwrap()
            .iter()
            .map(|body| body.name().unwrap_or_default())
            .collect::<Vec<_>>()
    })
    .await
    .unwrap();

    assert_eq!(names, vec!["Eins", "Zwei"]);
}
