//! Common test utilities and fixtures
#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Request, Response},
    Router,
};
use std::sync::Arc;
use tempfile::TempDir;
use tower::util::ServiceExt;
use tubelist_server::{config::ViewSettings, create_router, state::AppState};
use tubelist_storage::LocalStore;

/// Router backed by a real SQLite file that lives as long as this value
pub struct TestApp {
    pub router: Router,
    pub store: Arc<LocalStore>,
    _temp_dir: TempDir,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_page_size(tubelist_core::DEFAULT_PAGE_SIZE).await
    }

    pub async fn with_page_size(page_size: usize) -> Self {
        let temp_dir = TempDir::new().unwrap();
        let db_url = format!("sqlite://{}", temp_dir.path().join("test.db").display());
        let store = Arc::new(LocalStore::connect(&db_url).await.unwrap());

        let views = ViewSettings {
            page_size,
            ..ViewSettings::default()
        };
        let router = create_router(AppState::new(Arc::clone(&store), views));

        Self {
            router,
            store,
            _temp_dir: temp_dir,
        }
    }

    pub async fn get(&self, uri: &str) -> Response<Body> {
        self.send(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn get_with_cookie(&self, uri: &str, cookie: &str) -> Response<Body> {
        let request = Request::builder()
            .uri(uri)
            .header(header::COOKIE, cookie)
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    /// POST an `application/x-www-form-urlencoded` body
    pub async fn post_form(&self, uri: &str, fields: &[(&str, &str)]) -> Response<Body> {
        let body = fields
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap();
        self.send(request).await
    }

    pub async fn post(&self, uri: &str) -> Response<Body> {
        self.send(
            Request::builder()
                .method("POST")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router.clone().oneshot(request).await.unwrap()
    }
}

pub fn location(response: &Response<Body>) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap()
}

/// Decoded flash cookie set by a response, as (level tag, text)
pub fn flash(response: &Response<Body>) -> (char, String) {
    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .unwrap();
    let value = cookie
        .split(';')
        .next()
        .and_then(|pair| pair.strip_prefix("tubelist_flash="))
        .unwrap();
    let (tag, text) = value.split_once(':').unwrap();
    (
        tag.chars().next().unwrap(),
        urlencoding::decode(text).unwrap().into_owned(),
    )
}

/// `Cookie` header that replays the flash set by a response
pub fn replay_cookie(response: &Response<Body>) -> String {
    response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .and_then(|cookie| cookie.split(';').next())
        .unwrap()
        .to_string()
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn track_fields<'a>(
    playlist: &'a str,
    artist: &'a str,
    title: &'a str,
    url: &'a str,
) -> Vec<(&'static str, &'a str)> {
    vec![
        ("playlist_name", playlist),
        ("date", "2024-01-01"),
        ("artist", artist),
        ("title", title),
        ("url", url),
    ]
}
