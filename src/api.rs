use std::{net::SocketAddr, path::Path, sync::Arc};

use axum::{Router, body::Bytes, extract::State, http::{HeaderMap, Request}, middleware::{self, Next}, response::{IntoResponse, Response}, Json};
use reqwest::StatusCode;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::log;

use crate::{
    config_handler::Config,
    models_api::webhook::{ReportWritten, WebhookBody},
    report_service::ReportService,
    rest_client::FaceitClient,
};

#[derive(Clone)]
pub struct ApiState {
    pub config: Arc<Config>,
    pub client: FaceitClient,
}

impl ApiState {
    pub fn new(config: Config) -> ApiState {
        ApiState {
            client: FaceitClient::from_config(&config),
            config: Arc::new(config),
        }
    }

    fn is_authorized(&self, headers: &HeaderMap) -> bool {
        let secret = self.config.webhook_secret.as_str();
        if secret.is_empty() {
            return false;
        }
        headers.get(self.config.webhook_header.as_str())
            .map(|e| constant_time_eq(e.as_bytes(), secret.as_bytes()))
            .unwrap_or(false)
    }
}

/// Compares every byte regardless of where the first mismatch is.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

pub struct Api;
impl Api {
    pub fn router(state: ApiState) -> Router {
        let webhook = axum::routing::post(Api::webhook)
            .route_layer(middleware::from_fn_with_state(state.clone(), Api::require_secret));
        Router::new()
            .route("/webhook", webhook)
            .route("/", axum::routing::get(Api::root))
            .with_state(state)
            .layer(ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
            )
    }

    pub async fn serve(config: Config) -> anyhow::Result<()> {
        let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
        let app = Api::router(ApiState::new(config));
        log::info!("[API] Listening on {}", addr);
        axum::Server::try_bind(&addr)?
            .serve(app.into_make_service())
            .await?;
        Ok(())
    }

    async fn root() -> &'static str {
        "Post-match reports"
    }

    // Runs before anything reads the request body.
    async fn require_secret<B>(State(state): State<ApiState>, request: Request<B>, next: Next<B>) -> Response {
        if !state.is_authorized(request.headers()) {
            log::warn!("[API] Unauthorized webhook call");
            return (StatusCode::UNAUTHORIZED, "Unauthorized".to_string()).into_response();
        }
        next.run(request).await
    }

    // The body is parsed by hand so a bad body is a 400 with a message.
    async fn webhook(State(state): State<ApiState>, body: Bytes) -> impl IntoResponse {
        let body: WebhookBody = match serde_json::from_slice(&body) {
            Ok(body) => body,
            Err(e) => {
                log::warn!("[API] Invalid webhook body: {e}");
                return (StatusCode::BAD_REQUEST, format!("Invalid body: {e}")).into_response();
            }
        };

        let match_id = body.payload.id;
        log::info!("[API] Webhook {} for {match_id}", body.event.as_deref().unwrap_or("event"));

        let report = match ReportService::generate(&state.client, &match_id, &state.config.lang).await {
            Ok(report) => report,
            Err(e) => {
                log::error!("[API] Report for {match_id} failed: {e:#}");
                return (StatusCode::INTERNAL_SERVER_ERROR, "Report generation failed".to_string()).into_response();
            }
        };

        match ReportService::write(&report, Path::new(&state.config.report_dir)) {
            Ok(path) => Json(ReportWritten {
                title: report.title,
                path: path.display().to_string(),
            }).into_response(),
            Err(e) => {
                log::error!("[API] Writing report for {match_id} failed: {e:#}");
                (StatusCode::INTERNAL_SERVER_ERROR, "Writing report failed".to_string()).into_response()
            }
        }
    }
}
