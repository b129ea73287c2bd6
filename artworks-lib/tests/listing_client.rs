//! HTTP tests for the listing client against a local server.

mod common;

use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::Mutex;

use artworks_lib::api::ListingSource;
use artworks_lib::error::FetchError;
use artworks_lib::session::SessionDriver;
use artworks_lib::ArtworksClient;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::Request;
use hyper::Response;
use hyper::StatusCode;
use hyper_util::rt::TokioIo;
use tokio::net::TcpListener;

use common::ids;
use common::wait_for_page;

const PATH: &str = "/api/v1/artworks";

/// Query strings received by the test server.
type Requests = Arc<Mutex<Vec<String>>>;

/// Serve `respond(query)` for every request; returns the endpoint URL.
async fn serve<F>(respond: F) -> (String, Requests)
where
    F: Fn(&str) -> (StatusCode, String) + Send + Sync + 'static,
{
    let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();
    let requests: Requests = Arc::default();
    let respond = Arc::new(respond);

    let seen = Arc::clone(&requests);
    tokio::spawn(async move {
        while let Ok((stream, _)) = listener.accept().await {
            let respond = Arc::clone(&respond);
            let seen = Arc::clone(&seen);
            tokio::spawn(async move {
                let service = service_fn(move |req: Request<Incoming>| {
                    let query = req.uri().query().unwrap_or_default().to_string();
                    seen.lock().unwrap().push(query.clone());
                    let (status, body) = (*respond)(&query);
                    async move {
                        Ok::<_, Infallible>(
                            Response::builder()
                                .status(status)
                                .header("content-type", "application/json")
                                .body(Full::new(Bytes::from(body)))
                                .unwrap(),
                        )
                    }
                });
                let _ = http1::Builder::new()
                    .serve_connection(TokioIo::new(stream), service)
                    .await;
            });
        }
    });

    (format!("http://{addr}{PATH}"), requests)
}

/// Query parameter `name` from a raw query string.
fn param<'a>(query: &'a str, name: &str) -> Option<&'a str> {
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value)
}

/// Listing body for a collection of `total` artworks numbered from 1.
fn listing_body(total: u64, limit: u64, page: u64) -> String {
    let offset = (page - 1) * limit;
    let data: Vec<_> = (offset + 1..=(offset + limit).min(total))
        .map(|id| {
            serde_json::json!({
                "id": id,
                "title": format!("Artwork {id}"),
                "place_of_origin": "Chicago",
                "artist_display": null,
                "inscriptions": null,
                "date_start": 1900,
                "date_end": 1910
            })
        })
        .collect();
    serde_json::json!({
        "pagination": {
            "total": total,
            "limit": limit,
            "offset": offset,
            "total_pages": total.div_ceil(limit),
            "current_page": page
        },
        "data": data,
        "config": {"iiif_url": "https://www.artic.edu/iiif/2"}
    })
    .to_string()
}

fn collection(total: u64) -> impl Fn(&str) -> (StatusCode, String) + Send + Sync + 'static {
    move |query: &str| {
        let page = param(query, "page").and_then(|p| p.parse().ok()).unwrap_or(1);
        let limit = param(query, "limit").and_then(|l| l.parse().ok()).unwrap_or(12);
        (StatusCode::OK, listing_body(total, limit, page))
    }
}

#[tokio::test]
async fn test_fetch_page_sends_page_and_limit() {
    let (url, requests) = serve(collection(25)).await;
    let client = ArtworksClient::builder().base_url(url).build().unwrap();

    let listing = client.fetch_page(3).await.unwrap();

    assert_eq!(listing.page.index(), 3);
    assert_eq!(listing.page.ids().collect::<Vec<_>>(), vec![25]);
    assert_eq!(listing.pagination.total_pages, 3);
    assert_eq!(listing.page.items()[0].place_of_origin.as_deref(), Some("Chicago"));
    assert_eq!(listing.page.items()[0].artist_display, None);

    let requests = requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(param(&requests[0], "page"), Some("3"));
    assert_eq!(param(&requests[0], "limit"), Some("12"));
    assert!(param(&requests[0], "fields").is_some_and(|f| f.contains("artist_display")));
}

#[tokio::test]
async fn test_page_size_and_projection_are_configurable() {
    let (url, requests) = serve(collection(25)).await;
    let client = ArtworksClient::builder()
        .base_url(url)
        .page_size(5)
        .project_fields(false)
        .build()
        .unwrap();

    assert_eq!(ListingSource::page_size(&client), 5);
    let listing = client.fetch(2).await.unwrap();
    assert_eq!(listing.page.ids().collect::<Vec<_>>(), vec![6, 7, 8, 9, 10]);

    let requests = requests.lock().unwrap();
    assert_eq!(requests[0], "page=2&limit=5");
}

#[tokio::test]
async fn test_non_success_status_is_http_error() {
    let (url, _) = serve(|_| (StatusCode::NOT_FOUND, String::from("{}"))).await;
    let client = ArtworksClient::builder().base_url(url).build().unwrap();

    let err = client.fetch_page(1).await.unwrap_err();

    assert_eq!(err.status_code(), Some(404));
    assert_eq!(err.to_string(), "HTTP 404: Not Found");
    assert!(err.is_network());
}

#[tokio::test]
async fn test_malformed_body_is_parse_error() {
    let (url, _) = serve(|_| (StatusCode::OK, String::from(r#"{"data": "nope"}"#))).await;
    let client = ArtworksClient::builder().base_url(url).build().unwrap();

    let err = client.fetch_page(1).await.unwrap_err();

    match err {
        FetchError::Parse { body, .. } => assert_eq!(body.as_deref(), Some(r#"{"data": "nope"}"#)),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unreachable_service_is_network_error() {
    let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = ArtworksClient::builder()
        .base_url(format!("http://{addr}{PATH}"))
        .build()
        .unwrap();

    let err = client.fetch_page(1).await.unwrap_err();
    assert!(matches!(err, FetchError::Network(_)), "got {err:?}");
}

#[tokio::test]
async fn test_page_zero_is_rejected_without_request() {
    let (url, requests) = serve(collection(25)).await;
    let client = ArtworksClient::builder().base_url(url).build().unwrap();

    let err = client.fetch_page(0).await.unwrap_err();

    assert!(matches!(err, FetchError::InvalidPage(0)));
    assert!(requests.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_session_over_http() {
    let (url, _) = serve(collection(25)).await;
    let client = ArtworksClient::builder().base_url(url).build().unwrap();
    let (handle, _join) = SessionDriver::spawn(client);

    let page1 = wait_for_page(&handle, 1).await;
    assert_eq!(page1.pagination.map(|p| p.total_pages), Some(3));
    handle
        .page_selection_change(vec![page1.items[0].clone(), page1.items[11].clone()])
        .unwrap();

    handle.page_change(2).unwrap();
    let page2 = wait_for_page(&handle, 2).await;
    handle.bulk_select(1).await.unwrap();
    assert_eq!(ids(&handle.view().visible_selection), vec![page2.items[0].id]);

    handle.page_change(1).unwrap();
    let page1 = wait_for_page(&handle, 1).await;
    assert_eq!(ids(&page1.visible_selection), vec![1, 12]);
    assert_eq!(page1.selected_count, 3);
}
