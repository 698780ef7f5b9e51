//! End-to-end tests against a mocked backend: wire parameters, response
//! normalization, caching, resolution ordering, and degradation behavior.

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use httpmock::MockServer;
use serde_json::json;

use warta::{ClientConfig, Clock, ContentService, FetchError, ListParams};

fn service(server: &MockServer) -> ContentService {
    let config = ClientConfig::new(&server.base_url()).expect("config");
    ContentService::new(config).expect("service")
}

/// Manually advanced time source, for driving cache expiry.
struct TestClock {
    now: Mutex<Instant>,
}

impl TestClock {
    fn new() -> Self {
        Self {
            now: Mutex::new(Instant::now()),
        }
    }

    fn advance(&self, by: Duration) {
        *self.now.lock().expect("clock lock") += by;
    }
}

impl Clock for TestClock {
    fn now(&self) -> Instant {
        *self.now.lock().expect("clock lock")
    }
}

#[tokio::test]
async fn list_news_sends_defaults_normalizes_both_shapes_and_caches() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("GET")
            .path("/api/beritas")
            .query_param("populate", "gambar")
            .query_param("pagination[page]", "1")
            .query_param("pagination[pageSize]", "12")
            .query_param("sort[0]", "publishedAt:desc");
        then.status(200).json_body(json!({
            "data": [
                {
                    "id": 1,
                    "title": "Berita datar",
                    "slug": "berita-datar",
                    "content": "Isi berita pertama.",
                    "publishedAt": "2025-08-01T03:00:00.000Z"
                },
                {
                    "id": 2,
                    "attributes": {
                        "title": "Berita bersarang",
                        "slug": "berita-bersarang",
                        "content": "Isi berita kedua.",
                        "publishedAt": "2025-08-02T03:00:00.000Z"
                    }
                }
            ],
            "meta": { "pagination": { "page": 1, "pageSize": 12, "pageCount": 1, "total": 2 } }
        }));
    });

    let service = service(&server);
    let page = service.list_news(&ListParams::default()).await;
    assert_eq!(page.len(), 2);
    assert_eq!(page.items[0].title, "Berita datar");
    assert_eq!(page.items[1].title, "Berita bersarang");
    assert_eq!(page.items[1].slug.as_deref(), Some("berita-bersarang"));
    assert_eq!(page.pagination.total, 2);

    let again = service.list_news(&ListParams::default()).await;
    assert_eq!(again, page);
    mock.assert_hits(1);
}

#[tokio::test]
async fn cached_page_is_refetched_after_ttl_expiry() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("GET").path("/api/beritas");
        then.status(200).json_body(json!({ "data": [] }));
    });

    let clock = Arc::new(TestClock::new());
    let config = ClientConfig::new(&server.base_url())
        .expect("config")
        .with_cache_ttl(Duration::from_secs(300));
    let service = ContentService::with_clock(config, clock.clone()).expect("service");

    service.list_news(&ListParams::default()).await;
    service.list_news(&ListParams::default()).await;
    mock.assert_hits(1);

    clock.advance(Duration::from_secs(301));
    service.list_news(&ListParams::default()).await;
    mock.assert_hits(2);
}

#[tokio::test]
async fn search_param_expands_into_or_clauses_on_the_wire() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("GET")
            .path("/api/beritas")
            .query_param("filters[$or][0][title][$containsi]", "anggaran")
            .query_param("filters[$or][1][content][$containsi]", "anggaran");
        then.status(200).json_body(json!({ "data": [] }));
    });

    let service = service(&server);
    let params = ListParams {
        search: Some("anggaran".to_string()),
        ..Default::default()
    };
    service.list_news(&params).await;
    mock.assert();
}

#[tokio::test]
async fn numeric_identifier_resolves_by_id_without_touching_detail_endpoint() {
    let server = MockServer::start();
    let by_id = server.mock(|when, then| {
        when.method("GET")
            .path("/api/beritas")
            .query_param("filters[id][$eq]", "42")
            .query_param("pagination[pageSize]", "1")
            .query_param("populate", "*");
        then.status(200).json_body(json!({
            "data": [{ "id": 42, "title": "Berita 42", "slug": "berita-42" }]
        }));
    });
    let detail = server.mock(|when, then| {
        when.method("GET").path("/api/beritas/42");
        then.status(200).json_body(json!({ "data": null }));
    });

    let service = service(&server);
    let item = service.resolve_news("42").await.expect("item");
    assert_eq!(item.id, 42);
    by_id.assert();
    detail.assert_hits(0);
}

#[tokio::test]
async fn resolution_falls_through_document_id_and_exact_slug_to_fuzzy_slug() {
    let server = MockServer::start();
    let detail = server.mock(|when, then| {
        when.method("GET").path("/api/beritas/rapat-anggota");
        then.status(404)
            .json_body(json!({ "error": { "status": 404, "message": "Not Found" } }));
    });
    let exact = server.mock(|when, then| {
        when.method("GET")
            .path("/api/beritas")
            .query_param("filters[slug][$eq]", "rapat-anggota");
        then.status(200).json_body(json!({ "data": [] }));
    });
    let fuzzy = server.mock(|when, then| {
        when.method("GET")
            .path("/api/beritas")
            .query_param("filters[slug][$containsi]", "rapat-anggota");
        then.status(200).json_body(json!({
            "data": [{
                "id": 7,
                "documentId": "abc123",
                "title": "Rapat Anggota Tahunan",
                "slug": "rapat-anggota-tahunan"
            }]
        }));
    });

    let service = service(&server);
    let item = service.resolve_news("rapat-anggota").await.expect("item");
    assert_eq!(item.id, 7);
    detail.assert();
    exact.assert();
    fuzzy.assert();
}

#[tokio::test]
async fn unresolvable_identifier_returns_none() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method("GET").path("/api/beritas/tidak-ada");
        then.status(404).json_body(json!({ "error": { "message": "Not Found" } }));
    });
    server.mock(|when, then| {
        when.method("GET").path("/api/beritas");
        then.status(200).json_body(json!({ "data": [] }));
    });

    let service = service(&server);
    assert!(service.resolve_news("tidak-ada").await.is_none());
    assert!(service.resolve_news("   ").await.is_none());
}

#[tokio::test]
async fn unreachable_backend_degrades_to_empty_page() {
    // Port 9 (discard) refuses connections on any sane host.
    let config = ClientConfig::new("http://127.0.0.1:9").expect("config");
    let service = ContentService::new(config).expect("service");

    let page = service.list_news(&ListParams::default()).await;
    assert!(page.is_empty());
    assert_eq!(page.pagination.page, 1);
    assert_eq!(page.pagination.total, 0);

    assert!(service.resolve_news("42").await.is_none());
    assert!(!service.check_health().await);
}

#[tokio::test]
async fn http_error_carries_backend_message() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method("GET").path("/api/beritas");
        then.status(500)
            .json_body(json!({ "error": { "status": 500, "message": "database gone" } }));
    });

    let service = service(&server);
    let err = service
        .client()
        .get_json::<serde_json::Value>("/beritas", None)
        .await
        .expect_err("status 500 must raise");
    match err {
        FetchError::Http {
            status, message, ..
        } => {
            assert_eq!(status, 500);
            assert_eq!(message, "database gone");
        }
        other => panic!("expected Http error, got {other:?}"),
    }
}

#[tokio::test]
async fn staff_list_filters_sorts_and_caches() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("GET")
            .path("/api/staffs")
            .query_param("filters[is_active][$eq]", "true")
            .query_param("populate", "photo")
            .query_param("sort[0]", "order:asc");
        then.status(200).json_body(json!({
            "data": [
                { "id": 1, "name": "Siti Rahma", "position": "Ketua", "order": 1 },
                {
                    "id": 2,
                    "attributes": {
                        "name": "Budi Santoso",
                        "position": "Sekretaris",
                        "department": "kesekretariatan",
                        "order": 2
                    }
                }
            ]
        }));
    });

    let service = service(&server);
    let members = service.staff_list().await;
    assert_eq!(members.len(), 2);
    assert_eq!(members[0].name, "Siti Rahma");
    assert_eq!(members[1].department.as_deref(), Some("kesekretariatan"));

    service.staff_list().await;
    mock.assert_hits(1);
}

#[tokio::test]
async fn featured_news_falls_back_to_latest_when_nothing_is_featured() {
    let server = MockServer::start();
    let featured = server.mock(|when, then| {
        when.method("GET")
            .path("/api/beritas")
            .query_param("filters[is_featured][$eq]", "true");
        then.status(200).json_body(json!({ "data": [] }));
    });
    let latest = server.mock(|when, then| {
        when.method("GET")
            .path("/api/beritas")
            .query_param_missing("filters[is_featured][$eq]")
            .query_param("sort[0]", "publishedAt:desc");
        then.status(200).json_body(json!({
            "data": [{ "id": 9, "title": "Berita terbaru", "slug": "berita-terbaru" }]
        }));
    });

    let service = service(&server);
    let items = service.featured_news(3).await;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, 9);
    featured.assert();
    latest.assert();
}

#[tokio::test]
async fn clear_cache_forces_a_refetch() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("GET").path("/api/beritas");
        then.status(200).json_body(json!({ "data": [] }));
    });

    let service = service(&server);
    service.list_news(&ListParams::default()).await;
    assert_eq!(service.cache_stats().size, 1);

    service.clear_cache();
    assert_eq!(service.cache_stats().size, 0);

    service.list_news(&ListParams::default()).await;
    mock.assert_hits(2);
}
