//! HTTP routes.
//!
//! Every path serves the share page for the `t` parameter of its query, so
//! the card's "Back to Calendar" link (`/`) still answers. Only `GET` and
//! `HEAD` are routed; axum answers other methods with 405 and an `Allow`
//! header.
use std::time::Instant;

use axum::Router;
use axum::http::{Method, Uri};
use axum::response::Html;
use axum::routing::get;
use log::info;
use trade_share_common::ShareView;
use trade_share_common::render::render_html;

/// Build the application router.
pub fn router() -> Router {
    Router::new()
        .route("/", get(share_page))
        .route("/*path", get(share_page))
}

async fn share_page(method: Method, uri: Uri) -> Html<String> {
    let view = ShareView::from_query(uri.query().unwrap_or_default(), Instant::now());
    info!(
        "{} {} -> {}",
        method,
        uri.path(),
        if view.is_invalid() { "invalid" } else { "card" }
    );
    Html(render_html(&view))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{HeaderMap, HeaderValue, Request, StatusCode, header};
    use serde_json::json;
    use std::time::Duration;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};
    use tower::ServiceExt;
    use trade_share_common::encode;
    use trade_share_common::view::share_link;

    fn target_for(value: serde_json::Value) -> String {
        let link = share_link("http://localhost/", &encode(&value).unwrap()).unwrap();
        link.trim_start_matches("http://localhost").to_string()
    }

    async fn send(request: Request<Body>) -> (StatusCode, HeaderMap, String) {
        let response = router().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, headers, String::from_utf8(body.to_vec()).unwrap())
    }

    fn get_request(target: &str) -> Request<Body> {
        Request::builder().uri(target).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn get_renders_share_card() {
        let target = target_for(json!({
            "date": "2024-01-01",
            "pnl": "125.5",
            "duration": "2h",
            "notes": "good trade"
        }));
        let (status, headers, body) = send(get_request(&target)).await;
        assert_eq!(status, StatusCode::OK);
        assert!(headers[header::CONTENT_TYPE].to_str().unwrap().starts_with("text/html"));
        assert!(body.contains("US$125.50"));
        assert!(body.contains("good trade"));
    }

    #[tokio::test]
    async fn any_path_serves_the_page() {
        let query = target_for(json!({"pnl": "-40"}));
        let target = format!("/share/trade{}", query.trim_start_matches('/'));
        let (status, _, body) = send(get_request(&target)).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("-US$40.00"));
    }

    #[tokio::test]
    async fn missing_or_garbage_token_renders_invalid_page() {
        for target in ["/", "/?t=!!!not-base64!!!"] {
            let (status, _, body) = send(get_request(target)).await;
            assert_eq!(status, StatusCode::OK);
            assert!(body.contains("Invalid or missing trade data"));
        }
    }

    #[tokio::test]
    async fn non_utf8_header_does_not_break_the_request() {
        let request = Request::builder()
            .uri("/?t=eyJwbmwiOjF9")
            .header(header::USER_AGENT, HeaderValue::from_bytes(b"caf\xe9").unwrap())
            .body(Body::empty())
            .unwrap();
        let (status, _, body) = send(request).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("US$1.00"));
    }

    #[tokio::test]
    async fn other_methods_are_not_allowed() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/")
            .body(Body::empty())
            .unwrap();
        let (status, headers, _) = send(request).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert!(headers[header::ALLOW].to_str().unwrap().contains("GET"));
    }

    #[tokio::test]
    async fn head_is_answered() {
        let request = Request::builder()
            .method(Method::HEAD)
            .uri("/")
            .body(Body::empty())
            .unwrap();
        let (status, _, _) = send(request).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn idle_connections_do_not_block_requests() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, router()).await.unwrap() });

        let mut idle = Vec::new();
        for _ in 0..8 {
            idle.push(TcpStream::connect(addr).await.unwrap());
        }

        let mut client = TcpStream::connect(addr).await.unwrap();
        client
            .write_all(b"GET / HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
            .await
            .unwrap();
        let mut response = Vec::new();
        tokio::time::timeout(Duration::from_secs(2), client.read_to_end(&mut response))
            .await
            .expect("request starved by idle connections")
            .unwrap();
        assert!(String::from_utf8_lossy(&response).starts_with("HTTP/1.1 200 OK"));
        drop(idle);
    }
}
