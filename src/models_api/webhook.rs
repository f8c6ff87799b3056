use serde::{Deserialize, Serialize};

/// FACEIT webhook delivery. Only `payload.id` is used.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct WebhookBody {
    #[serde(default)]
    pub event: Option<String>,
    pub payload: WebhookPayload,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct WebhookPayload {
    pub id: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ReportWritten {
    pub title: String,
    pub path: String,
}
