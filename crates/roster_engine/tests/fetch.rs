use std::time::Duration;

use pretty_assertions::assert_eq;
use roster_engine::{FailureKind, FetchSettings, FetchedRecord, PageFetcher, ReqwestPageFetcher};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn json(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body.to_string(), "application/json; charset=utf-8")
}

#[tokio::test]
async fn fetcher_decodes_page_and_next_cursor() {
    let server = MockServer::start().await;
    let next = format!("{}/pokemon?offset=2&limit=2", server.uri());
    let body = format!(
        r#"{{"count": 3, "next": "{next}", "previous": null,
            "results": [{{"name": "bulbasaur", "url": "u1"}}, {{"name": "ivysaur", "url": "u2"}}]}}"#
    );
    Mock::given(method("GET"))
        .and(path("/pokemon"))
        .and(query_param("limit", "2"))
        .respond_with(json(&body))
        .mount(&server)
        .await;

    let fetcher = ReqwestPageFetcher::new(FetchSettings::default());
    let cursor = format!("{}/pokemon?limit=2", server.uri());

    let page = fetcher.fetch_page(&cursor).await.expect("fetch ok");
    assert_eq!(
        page.records,
        vec![
            FetchedRecord {
                name: "bulbasaur".to_string(),
                url: "u1".to_string(),
            },
            FetchedRecord {
                name: "ivysaur".to_string(),
                url: "u2".to_string(),
            },
        ]
    );
    assert_eq!(page.next_cursor, Some(next));
    assert_eq!(page.total_count, Some(3));
    assert_eq!(page.final_url, cursor);
}

#[tokio::test]
async fn last_page_has_no_next_cursor() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/last"))
        .respond_with(json(
            r#"{"count": 1, "next": null, "previous": null, "results": [{"name": "mew", "url": "u"}]}"#,
        ))
        .mount(&server)
        .await;

    let fetcher = ReqwestPageFetcher::new(FetchSettings::default());
    let page = fetcher
        .fetch_page(&format!("{}/last", server.uri()))
        .await
        .expect("fetch ok");
    assert_eq!(page.next_cursor, None);
    assert_eq!(page.records.len(), 1);
}

#[tokio::test]
async fn fetcher_fails_on_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let fetcher = ReqwestPageFetcher::new(FetchSettings::default());
    let err = fetcher
        .fetch_page(&format!("{}/missing", server.uri()))
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(404));
}

#[tokio::test]
async fn fetcher_fails_on_malformed_payload() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(json(r#"{"results": [{"name": 1}]"#))
        .mount(&server)
        .await;

    let fetcher = ReqwestPageFetcher::new(FetchSettings::default());
    let err = fetcher
        .fetch_page(&format!("{}/broken", server.uri()))
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::Decode);
}

#[tokio::test]
async fn fetcher_rejects_non_json_content() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/html"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("<html></html>", "text/html"))
        .mount(&server)
        .await;

    let fetcher = ReqwestPageFetcher::new(FetchSettings::default());
    let err = fetcher
        .fetch_page(&format!("{}/html", server.uri()))
        .await
        .unwrap_err();
    assert_eq!(
        err.kind,
        FailureKind::UnsupportedContentType {
            content_type: "text/html".to_string()
        }
    );
}

#[tokio::test]
async fn fetcher_times_out_on_slow_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(json(r#"{"results": []}"#).set_delay(Duration::from_millis(250)))
        .mount(&server)
        .await;

    let settings = FetchSettings {
        request_timeout: Duration::from_millis(50),
        ..FetchSettings::default()
    };
    let fetcher = ReqwestPageFetcher::new(settings);
    let err = fetcher
        .fetch_page(&format!("{}/slow", server.uri()))
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn fetcher_rejects_too_large_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/large"))
        .respond_with(json(r#"{"results": []}"#))
        .mount(&server)
        .await;

    let settings = FetchSettings {
        max_bytes: 10,
        ..FetchSettings::default()
    };
    let fetcher = ReqwestPageFetcher::new(settings);
    let err = fetcher
        .fetch_page(&format!("{}/large", server.uri()))
        .await
        .unwrap_err();
    assert_eq!(
        err.kind,
        FailureKind::TooLarge {
            max_bytes: 10,
            actual: Some(15)
        }
    );
}

#[tokio::test]
async fn invalid_cursor_is_rejected_without_request() {
    let fetcher = ReqwestPageFetcher::new(FetchSettings::default());
    let err = fetcher.fetch_page("not a url").await.unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidCursor);
}

#[tokio::test]
async fn fetcher_gives_up_on_redirect_loop() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/loop"))
        .respond_with(
            ResponseTemplate::new(302).insert_header("Location", format!("{}/loop", server.uri())),
        )
        .mount(&server)
        .await;

    let settings = FetchSettings {
        redirect_limit: 2,
        ..FetchSettings::default()
    };
    let fetcher = ReqwestPageFetcher::new(settings);
    let err = fetcher
        .fetch_page(&format!("{}/loop", server.uri()))
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::RedirectLimitExceeded);
}
