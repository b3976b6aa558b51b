//! Fake EDGAR archive server for integration tests.
//!
//! Spins up a minimal `axum` HTTP server on a random TCP port bound to
//! 127.0.0.1, driven by its own `tokio` runtime so that the blocking HTTP
//! provider can be called from an ordinary `#[test]`. Serves:
//! - `GET /Archives/edgar/cik-lookup-data.txt` — scripted responses, in
//!   order; once the script runs out the fallback response repeats.
//!
//! # Example
//!
//! ```rust,no_run
//! use common::fake_edgar::FakeEdgar;
//!
//! let edgar = FakeEdgar::start().unwrap();
//! edgar.respond_html(RATE_LIMIT_PAGE);
//! edgar.set_fallback(directory_bytes());
//!
//! // Point the provider at edgar.url()
//! let url = edgar.url();
//! ```

use axum::{
    extract::State,
    http::{header::USER_AGENT, HeaderMap, StatusCode},
    routing::get,
    Router,
};
use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

pub const DIRECTORY_PATH: &str = "/Archives/edgar/cik-lookup-data.txt";

type Response = (StatusCode, Vec<u8>);

/// State shared between the router and test code.
struct EdgarState {
    script: VecDeque<Response>,
    fallback: Response,
    hits: usize,
    /// `user-agent` of every request, in arrival order.
    user_agents: Vec<String>,
}

impl Default for EdgarState {
    fn default() -> Self {
        Self {
            script: VecDeque::new(),
            fallback: (StatusCode::NOT_FOUND, Vec::new()),
            hits: 0,
            user_agents: Vec::new(),
        }
    }
}

/// Handle to the running fake EDGAR server.
pub struct FakeEdgar {
    addr: SocketAddr,
    state: Arc<Mutex<EdgarState>>,
    _runtime: tokio::runtime::Runtime,
}

impl FakeEdgar {
    /// Start the server on a random port. Returns once the server is
    /// listening.
    pub fn start() -> std::io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()?;
        let listener = runtime.block_on(TcpListener::bind("127.0.0.1:0"))?;
        let addr = listener.local_addr()?;
        let state = Arc::new(Mutex::new(EdgarState::default()));

        let app = Router::new()
            .route(DIRECTORY_PATH, get(serve_directory))
            .with_state(state.clone());

        runtime.spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Ok(Self {
            addr,
            state,
            _runtime: runtime,
        })
    }

    /// Full URL of the directory file.
    pub fn url(&self) -> String {
        format!("http://{}{}", self.addr, DIRECTORY_PATH)
    }

    /// Queue one response.
    pub fn respond(&self, status: StatusCode, body: impl Into<Vec<u8>>) {
        self.state
            .blocking_lock()
            .script
            .push_back((status, body.into()));
    }

    /// Queue one throttling page (EDGAR answers these with 200 OK).
    pub fn respond_html(&self, page: &str) {
        self.respond(StatusCode::OK, page);
    }

    /// Response repeated once the script is exhausted.
    pub fn set_fallback(&self, body: impl Into<Vec<u8>>) {
        self.state.blocking_lock().fallback = (StatusCode::OK, body.into());
    }

    pub fn hits(&self) -> usize {
        self.state.blocking_lock().hits
    }

    pub fn user_agents(&self) -> Vec<String> {
        self.state.blocking_lock().user_agents.clone()
    }
}

// ---------------------------------------------------------------------------
// Route handlers
// ---------------------------------------------------------------------------

async fn serve_directory(
    State(state): State<Arc<Mutex<EdgarState>>>,
    headers: HeaderMap,
) -> Response {
    let mut state = state.lock().await;
    state.hits += 1;
    let agent = headers
        .get(USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    state.user_agents.push(agent);
    match state.script.pop_front() {
        Some(response) => response,
        None => state.fallback.clone(),
    }
}
