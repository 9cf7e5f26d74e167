//! In-process fake of the career guidance backend for tests.
//!
//! Serves canned responses keyed by path (relative to `/api/career`) and
//! records every request it receives.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::{
    extract::State,
    http::{header, HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Router,
};

use tokio::io::{AsyncReadExt, AsyncWriteExt};

use crate::api_client::CareerApiClient;

const PREFIX: &str = "/api/career";

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub content_type: Option<String>,
    pub body: String,
}

#[derive(Clone)]
struct Canned {
    status: StatusCode,
    content_type: &'static str,
    body: String,
}

#[derive(Default)]
struct Inner {
    responses: HashMap<String, Canned>,
    requests: Vec<RecordedRequest>,
}

type Shared = Arc<Mutex<Inner>>;

pub struct FakeBackend {
    addr: SocketAddr,
    inner: Shared,
}

impl FakeBackend {
    pub async fn start() -> Self {
        let inner: Shared = Arc::default();
        let app = Router::new().fallback(handle).with_state(inner.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { addr, inner }
    }

    /// A client for a server that answers every request with a 2xx status
    /// and a JSON body cut off mid-stream.
    pub async fn truncated_json_client() -> CareerApiClient {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            loop {
                let (mut socket, _) = listener.accept().await.unwrap();
                let mut request = [0u8; 4096];
                let _ = socket.read(&mut request).await;
                let _ = socket
                    .write_all(
                        b"HTTP/1.1 200 OK\r\nContent-Type: application/json\r\n\
                          Content-Length: 512\r\n\r\n[{\"title\":\"Eng",
                    )
                    .await;
                let _ = socket.shutdown().await;
            }
        });

        CareerApiClient::new(format!("http://{}{}", addr, PREFIX))
    }

    pub fn client(&self) -> CareerApiClient {
        CareerApiClient::new(format!("http://{}{}", self.addr, PREFIX))
    }

    pub fn respond_json(&self, path: &str, status: u16, body: &str) {
        self.respond(path, status, "application/json", body);
    }

    pub fn respond_text(&self, path: &str, status: u16, body: &str) {
        self.respond(path, status, "text/plain", body);
    }

    fn respond(&self, path: &str, status: u16, content_type: &'static str, body: &str) {
        let canned = Canned {
            status: StatusCode::from_u16(status).unwrap(),
            content_type,
            body: body.to_string(),
        };
        self.inner
            .lock()
            .unwrap()
            .responses
            .insert(path.to_string(), canned);
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.inner.lock().unwrap().requests.clone()
    }
}

async fn handle(
    State(inner): State<Shared>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> Response {
    let path = uri
        .path()
        .strip_prefix(PREFIX)
        .unwrap_or(uri.path())
        .to_string();

    let mut inner = inner.lock().unwrap();
    inner.requests.push(RecordedRequest {
        method,
        path: path.clone(),
        content_type: headers
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body,
    });

    match inner.responses.get(&path) {
        Some(canned) => (
            canned.status,
            [(header::CONTENT_TYPE, canned.content_type)],
            canned.body.clone(),
        )
            .into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
