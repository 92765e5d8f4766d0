//! # Stub API
//!
//! An in-process HTTP server standing in for the catalog API.
//!
//! Register replies with [`MockApi::on`], point a repository at
//! [`MockApi::base_url`], then inspect what was sent with [`MockApi::requests`].
//! Requests without a matching stub get a JSON 404.
#![allow(dead_code)]

use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::{header, HeaderMap, Method, Response, StatusCode, Uri};
use axum::Router;
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Path prefix of the stub, so tests also cover joining onto a non-root base URL.
pub const API_PREFIX: &str = "/api/v1";

/// A request as the stub received it. `path` is relative to [`API_PREFIX`].
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("request body should be JSON")
    }
}

#[derive(Debug, Clone)]
pub struct Reply {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: String,
}

impl Reply {
    pub fn json(status: u16, body: Value) -> Self {
        Self {
            status: StatusCode::from_u16(status).expect("valid status"),
            content_type: Some("application/json; charset=utf-8".to_string()),
            body: body.to_string(),
        }
    }

    pub fn raw(status: u16, content_type: Option<&str>, body: &str) -> Self {
        Self {
            status: StatusCode::from_u16(status).expect("valid status"),
            content_type: content_type.map(str::to_string),
            body: body.to_string(),
        }
    }
}

type Responder = Arc<dyn Fn(&RecordedRequest) -> Reply + Send + Sync>;

struct Stub {
    method: Method,
    path: String,
    delay: Option<Duration>,
    responder: Responder,
}

#[derive(Clone, Default)]
struct ApiState {
    stubs: Arc<Mutex<Vec<Stub>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

pub struct MockApi {
    base_url: String,
    state: ApiState,
    _handle: tokio::task::JoinHandle<()>,
}

impl MockApi {
    pub async fn start() -> Self {
        let state = ApiState::default();
        let app = Router::new().fallback(handle).with_state(state.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind stub listener");
        let addr = listener.local_addr().expect("stub address");
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("stub server");
        });
        Self {
            base_url: format!("http://{addr}{API_PREFIX}"),
            state,
            _handle: handle,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Starts a stub for `method path`, e.g. `on(Method::GET, "/products/7/")`.
    pub fn on(&self, method: Method, path: &str) -> StubBuilder<'_> {
        StubBuilder {
            api: self,
            method,
            path: path.to_string(),
            delay: None,
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn single_request(&self) -> RecordedRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request, got {requests:?}");
        requests.into_iter().next().unwrap()
    }
}

pub struct StubBuilder<'a> {
    api: &'a MockApi,
    method: Method,
    path: String,
    delay: Option<Duration>,
}

impl StubBuilder<'_> {
    /// Holds the reply back for `delay`.
    pub fn after(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn respond(self, reply: Reply) {
        self.respond_with(move |_| reply.clone());
    }

    pub fn respond_json(self, status: u16, body: Value) {
        self.respond(Reply::json(status, body));
    }

    pub fn respond_with(self, responder: impl Fn(&RecordedRequest) -> Reply + Send + Sync + 'static) {
        self.api.state.stubs.lock().unwrap().push(Stub {
            method: self.method,
            path: self.path,
            delay: self.delay,
            responder: Arc::new(responder),
        });
    }
}

async fn handle(
    State(state): State<ApiState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response<Body> {
    let path = uri
        .path()
        .strip_prefix(API_PREFIX)
        .unwrap_or(uri.path())
        .to_string();
    let request = RecordedRequest {
        method: method.clone(),
        path: path.clone(),
        query: uri.query().map(str::to_string),
        headers,
        body,
    };
    state.requests.lock().unwrap().push(request.clone());

    let matched = {
        let stubs = state.stubs.lock().unwrap();
        stubs
            .iter()
            .find(|s| s.method == method && s.path == path)
            .map(|s| (s.delay, Arc::clone(&s.responder)))
    };
    let reply = match matched {
        Some((delay, responder)) => {
            if let Some(delay) = delay {
                tokio::time::sleep(delay).await;
            }
            responder(&request)
        }
        None => Reply::json(404, json!({ "message": format!("no stub for {method} {path}") })),
    };

    let mut builder = Response::builder().status(reply.status);
    if let Some(content_type) = &reply.content_type {
        builder = builder.header(header::CONTENT_TYPE, content_type.as_str());
    }
    builder.body(Body::from(reply.body)).unwrap()
}

// =============================================================================
// LOG CAPTURE
// =============================================================================

/// Collects formatted `tracing` output so tests can assert on emitted events.
#[derive(Clone, Default)]
pub struct LogCapture {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl LogCapture {
    /// Routes events from the current thread into this capture until the guard drops.
    pub fn install(&self) -> tracing::subscriber::DefaultGuard {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(self.clone())
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock().unwrap()).into_owned()
    }
}

impl std::io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buffer.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for LogCapture {
    type Writer = LogCapture;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

// =============================================================================
// FIXTURES
// =============================================================================

pub const TIMESTAMP: &str = "2025-01-01T00:00:00.000Z";

pub fn category_json(id: u64) -> Value {
    let (name, slug) = match id {
        1 => ("Clothes", "clothes"),
        2 => ("Electronics", "electronics"),
        3 => ("Furniture", "furniture"),
        _ => ("Shoes", "shoes"),
    };
    json!({
        "id": id,
        "name": name,
        "slug": slug,
        "image": format!("https://i.imgur.com/{slug}.jpeg"),
        "creationAt": TIMESTAMP,
        "updatedAt": TIMESTAMP
    })
}

pub fn product_json(id: u64, title: &str, category_id: u64) -> Value {
    json!({
        "id": id,
        "title": title,
        "slug": title.to_lowercase().replace(' ', "-"),
        "price": 10 + id,
        "description": format!("Description of {title}"),
        "category": category_json(category_id),
        "images": [format!("https://i.imgur.com/{id}.jpeg")],
        "creationAt": TIMESTAMP,
        "updatedAt": TIMESTAMP
    })
}

/// The record the API stores for a create payload, under a fresh `id`.
pub fn created_product(id: u64, request: &RecordedRequest) -> Value {
    let payload = request.json();
    let category_id = payload["categoryId"].as_u64().unwrap_or(1);
    json!({
        "id": id,
        "title": payload["title"],
        "slug": payload["title"].as_str().unwrap_or_default().to_lowercase().replace(' ', "-"),
        "price": payload["price"],
        "description": payload["description"],
        "category": category_json(category_id),
        "images": payload["images"],
        "creationAt": TIMESTAMP,
        "updatedAt": TIMESTAMP
    })
}
