use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::http::{StatusCode, Uri};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

use super::common::*;
use crate::config::SentimentConfig;
use crate::workflows::leads::{GNewsProbe, LeadFactor, LeadScorer, SentimentProbe};

async fn spawn_news_server(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind news stub");
    let addr = listener.local_addr().expect("stub address");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("news stub serves");
    });
    addr
}

fn probe_for(addr: SocketAddr, api_key: Option<&str>) -> GNewsProbe {
    GNewsProbe::new(&SentimentConfig {
        api_key: api_key.map(str::to_string),
        endpoint: format!("http://{addr}/api/v4/search"),
    })
}

async fn search_stub(uri: Uri) -> Json<Value> {
    let query = uri.query().unwrap_or_default();
    let expected = ["q=Acme+Widgets", "lang=en", "max=5", "apikey=test-key"];
    if !expected.iter().all(|param| query.contains(param)) {
        return Json(json!({ "totalArticles": 0, "articles": [] }));
    }

    Json(json!({
        "totalArticles": 3,
        "articles": [
            { "title": "Acme Widgets posts record growth", "description": "Expansion into Europe" },
            { "title": "Acme Widgets named market leader", "description": null },
            { "title": "Supplier lawsuit names Acme Widgets", "url": "https://news.example/3" }
        ]
    }))
}

#[tokio::test]
async fn probe_sums_keyword_hits_across_articles() {
    let addr = spawn_news_server(Router::new().route("/api/v4/search", get(search_stub))).await;
    let probe = probe_for(addr, Some("test-key"));

    assert!(probe.is_configured());
    assert_eq!(probe.sentiment("Acme Widgets").await, 2);
}

#[tokio::test]
async fn scorer_folds_probe_delta_into_news_contribution() {
    let addr = spawn_news_server(Router::new().route("/api/v4/search", get(search_stub))).await;
    let scorer = LeadScorer::new(acquisition_profile(), probe_for(addr, Some("test-key")));
    let lead = crate::workflows::leads::Lead {
        company_name: "Acme Widgets".to_string(),
        ..precision_machining()
    };

    let result = scorer.score(&lead).await;

    assert_eq!(result.contribution(LeadFactor::NewsSentiment), 4);
    assert_eq!(result.total_score, 109);
    assert_eq!(
        result.reasons.last().map(String::as_str),
        Some("News Sentiment Impact: 2")
    );
}

#[tokio::test]
async fn missing_or_placeholder_credential_skips_the_request() {
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = hits.clone();
    let router = Router::new().route(
        "/api/v4/search",
        get(move || {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Json(json!({ "articles": [{ "title": "growth" }] }))
            }
        }),
    );
    let addr = spawn_news_server(router).await;

    for key in [None, Some(""), Some("YOUR_GNEWS_API_KEY")] {
        let probe = probe_for(addr, key);
        assert!(!probe.is_configured());
        assert_eq!(probe.sentiment("Acme Widgets").await, 0);
    }
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn missing_http_client_stays_unconfigured() {
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = hits.clone();
    let router = Router::new().route(
        "/api/v4/search",
        get(move || {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Json(json!({ "articles": [{ "title": "growth" }] }))
            }
        }),
    );
    let addr = spawn_news_server(router).await;

    let probe = GNewsProbe::with_client(
        None,
        &SentimentConfig {
            api_key: Some("test-key".to_string()),
            endpoint: format!("http://{addr}/api/v4/search"),
        },
    );

    assert!(!probe.is_configured());
    assert_eq!(probe.sentiment("Acme Widgets").await, 0);
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn error_status_is_neutral() {
    let router = Router::new().route(
        "/api/v4/search",
        get(|| async {
            (
                StatusCode::TOO_MANY_REQUESTS,
                Json(json!({ "articles": [{ "title": "growth expansion profit" }] })),
            )
        }),
    );
    let addr = spawn_news_server(router).await;

    assert_eq!(probe_for(addr, Some("test-key")).sentiment("Acme").await, 0);
}

#[tokio::test]
async fn malformed_payload_is_neutral() {
    let router = Router::new().route("/api/v4/search", get(|| async { "<html>not json</html>" }));
    let addr = spawn_news_server(router).await;

    assert_eq!(probe_for(addr, Some("test-key")).sentiment("Acme").await, 0);
}

#[tokio::test]
async fn payload_without_articles_is_neutral() {
    let router = Router::new().route(
        "/api/v4/search",
        get(|| async { Json(json!({ "errors": ["quota exceeded"] })) }),
    );
    let addr = spawn_news_server(router).await;

    assert_eq!(probe_for(addr, Some("test-key")).sentiment("Acme").await, 0);
}

#[tokio::test]
async fn unreachable_endpoint_is_neutral() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("reserve port");
    let addr = listener.local_addr().expect("reserved address");
    drop(listener);

    assert_eq!(probe_for(addr, Some("test-key")).sentiment("Acme").await, 0);
}
