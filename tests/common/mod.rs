//! Local mock of the token, detect and translate endpoints

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::{
    extract::{Query, RawQuery, State},
    http::{HeaderMap, StatusCode},
    routing::{get, post},
    Router,
};

use azure_translator::TranslatorConfig;

/// Computes a reply from the decoded query parameters
pub type Reply = Arc<dyn Fn(&HashMap<String, String>) -> (StatusCode, String) + Send + Sync>;

/// One request as seen by the mock
#[derive(Debug, Clone)]
pub struct Recorded {
    pub path: String,
    pub raw_query: Option<String>,
    pub headers: HeaderMap,
}

struct MockState {
    token_body: String,
    detect: Reply,
    translate: Reply,
    token_requests: AtomicUsize,
    detect_requests: AtomicUsize,
    translate_requests: AtomicUsize,
    recorded: Mutex<Vec<Recorded>>,
}

impl MockState {
    fn record(&self, path: &str, raw_query: Option<String>, headers: HeaderMap) {
        self.recorded.lock().unwrap().push(Recorded {
            path: path.to_string(),
            raw_query,
            headers,
        });
    }
}

/// Running mock server
pub struct MockApi {
    pub base_url: String,
    state: Arc<MockState>,
}

impl MockApi {
    /// Mock that knows `bonjour` is French and `hello` to `fr` is `salut`
    pub async fn start(token_body: &str) -> Self {
        Self::start_with(token_body, default_detect(), default_translate()).await
    }

    pub async fn start_with(token_body: &str, detect: Reply, translate: Reply) -> Self {
        let state = Arc::new(MockState {
            token_body: token_body.to_string(),
            detect,
            translate,
            token_requests: AtomicUsize::new(0),
            detect_requests: AtomicUsize::new(0),
            translate_requests: AtomicUsize::new(0),
            recorded: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .route("/sts/v1.0/issueToken", post(issue_token))
            .route("/v2/Http.svc/Detect", get(detect_handler))
            .route("/v2/Http.svc/Translate", get(translate_handler))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}", addr),
            state,
        }
    }

    pub fn config(&self) -> TranslatorConfig {
        TranslatorConfig::with_base_url(&self.base_url)
    }

    pub fn token_requests(&self) -> usize {
        self.state.token_requests.load(Ordering::SeqCst)
    }

    pub fn detect_requests(&self) -> usize {
        self.state.detect_requests.load(Ordering::SeqCst)
    }

    pub fn translate_requests(&self) -> usize {
        self.state.translate_requests.load(Ordering::SeqCst)
    }

    /// Requests received on `path`, oldest first
    pub fn recorded(&self, path: &str) -> Vec<Recorded> {
        self.state
            .recorded
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.path == path)
            .cloned()
            .collect()
    }
}

/// Reply with a fixed status and body regardless of the query
pub fn fixed(status: StatusCode, body: &str) -> Reply {
    let body = body.to_string();
    Arc::new(move |_: &HashMap<String, String>| (status, body.clone()))
}

fn default_detect() -> Reply {
    Arc::new(|params: &HashMap<String, String>| {
        let lang = match params.get("text").map(String::as_str) {
            Some("bonjour") => "fr",
            Some("hola") => "es",
            _ => "en",
        };
        (StatusCode::OK, format!("<string>{}</string>", lang))
    })
}

fn default_translate() -> Reply {
    Arc::new(|params: &HashMap<String, String>| {
        let text = params.get("text").cloned().unwrap_or_default();
        let to = params.get("to").cloned().unwrap_or_default();
        let body = match (text.as_str(), to.as_str()) {
            ("hello", "fr") => "salut".to_string(),
            _ => format!("{}:{}", to, text),
        };
        (StatusCode::OK, format!("<string>{}</string>", body))
    })
}

async fn issue_token(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
) -> (StatusCode, String) {
    state.token_requests.fetch_add(1, Ordering::SeqCst);
    state.record("/sts/v1.0/issueToken", None, headers);
    (StatusCode::OK, state.token_body.clone())
}

async fn detect_handler(
    State(state): State<Arc<MockState>>,
    RawQuery(raw_query): RawQuery,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> (StatusCode, String) {
    state.detect_requests.fetch_add(1, Ordering::SeqCst);
    state.record("/v2/Http.svc/Detect", raw_query, headers);
    (state.detect)(&params)
}

async fn translate_handler(
    State(state): State<Arc<MockState>>,
    RawQuery(raw_query): RawQuery,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> (StatusCode, String) {
    state.translate_requests.fetch_add(1, Ordering::SeqCst);
    state.record("/v2/Http.svc/Translate", raw_query, headers);
    (state.translate)(&params)
}
