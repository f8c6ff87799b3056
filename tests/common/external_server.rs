use std::{sync::Arc, time::Duration, collections::HashMap, net::SocketAddr};

use axum::{Router, extract::{Path, State}, http::HeaderMap, response::{IntoResponse, Response}, body::StreamBody, routing::get};
use reqwest::StatusCode;
use tokio::{sync::RwLock, task::JoinHandle};
use tokio_util::io::ReaderStream;

pub const API_KEY: &str = "test-api-key";

#[derive(Clone, Default)]
pub struct AppState {
    pub match_calls: HashMap<String, u16>,
    pub player_calls: HashMap<String, u16>,
    pub unauthorized_calls: u16,
}

/// Stands in for the FACEIT Data API, serving files from
/// `./tests/integration/external`.
pub struct ExternalServer {
    port: u16,
    handles: Vec<JoinHandle<()>>,
    pub api_state: Arc<RwLock<AppState>>,
}

impl Drop for ExternalServer {
    fn drop(&mut self) {
        for e in &self.handles {
            e.abort();
        }
    }
}

impl ExternalServer {
    pub fn new(port: u16) -> ExternalServer {
        ExternalServer { port, handles: vec![], api_state: Arc::new(RwLock::new(AppState::default())) }
    }

    pub async fn start(&mut self) {
        let external_mock = {
            let port = self.port;
            let state = self.api_state.clone();
            tokio::spawn(async move { ExternalServer::serve_external_data(state, port).await })
        };
        self.handles.push(external_mock);

        tokio::time::sleep(Duration::from_millis(500)).await; // wait for mock to start
    }

    pub fn get_url(&self) -> String {
        format!("http://localhost:{}", self.port)
    }

    async fn serve_external_data(state: Arc<RwLock<AppState>>, port: u16) {
        let addr = SocketAddr::from(([127, 0, 0, 1], port));
        let app = Router::new()
            .route("/matches/:match_id", get(ExternalServer::get_match_file))
            .route("/matches/:match_id/stats", get(ExternalServer::get_stats_file))
            .route("/players/:player_id", get(ExternalServer::get_player_file))
            .with_state(state);

        axum::Server::bind(&addr)
            .serve(app.into_make_service())
            .await
            .unwrap();
    }

    async fn is_authorized(state: &Arc<RwLock<AppState>>, headers: &HeaderMap) -> bool {
        let expected = format!("Bearer {API_KEY}");
        let authorized = headers.get("authorization").and_then(|e| e.to_str().ok()) == Some(expected.as_str());
        if !authorized {
            state.write().await.unauthorized_calls += 1;
        }
        authorized
    }

    async fn get_match_file(Path(match_id): Path<String>, State(state): State<Arc<RwLock<AppState>>>, headers: HeaderMap) -> Response {
        if !ExternalServer::is_authorized(&state, &headers).await {
            return StatusCode::UNAUTHORIZED.into_response();
        }
        *state.write().await.match_calls.entry(match_id.clone()).or_insert(0) += 1;
        ExternalServer::get_file_from(format!("./tests/integration/external/matches/{}.json", match_id)).await
    }

    async fn get_stats_file(Path(match_id): Path<String>, State(state): State<Arc<RwLock<AppState>>>, headers: HeaderMap) -> Response {
        if !ExternalServer::is_authorized(&state, &headers).await {
            return StatusCode::UNAUTHORIZED.into_response();
        }
        ExternalServer::get_file_from(format!("./tests/integration/external/stats/{}.json", match_id)).await
    }

    async fn get_player_file(Path(player_id): Path<String>, State(state): State<Arc<RwLock<AppState>>>, headers: HeaderMap) -> Response {
        if !ExternalServer::is_authorized(&state, &headers).await {
            return StatusCode::UNAUTHORIZED.into_response();
        }
        *state.write().await.player_calls.entry(player_id.clone()).or_insert(0) += 1;
        ExternalServer::get_file_from(format!("./tests/integration/external/players/{}.json", player_id)).await
    }

    async fn get_file_from(path: String) -> Response {
        let file = match tokio::fs::File::open(path).await {
            Ok(file) => file,
            Err(err) => return (StatusCode::NOT_FOUND, format!("File not found: {}", err)).into_response(),
        };
        let stream = ReaderStream::new(file);
        let body = StreamBody::new(stream);
        ([("content-type", "application/json")], body).into_response()
    }
}
