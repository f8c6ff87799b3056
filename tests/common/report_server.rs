use std::process::{Command, Child};

use assert_cmd::prelude::CommandCargoExt;
use reqwest::Response;

use super::external_server::API_KEY;

pub const WEBHOOK_SECRET: &str = "integration-secret";

/// The webhook server binary, running against a mock API.
pub struct ReportServer {
    port: u16,
    child_process: Option<Child>,
}

impl Drop for ReportServer {
    fn drop(&mut self) {
        if let Some(child) = self.child_process.as_mut() {
            child.kill().expect("Should kill");
        }
    }
}

impl ReportServer {
    pub fn new(port: u16) -> ReportServer {
        ReportServer { port, child_process: None }
    }

    pub fn start(&mut self, report_dir: &str, external_url: &str) {
        let child_process = Command::cargo_bin("faceit-report")
            .unwrap()
            .env_remove("CONFIG_PATH")
            .env("PORT", self.port.to_string())
            .env("FACEIT_API_URL", external_url)
            .env("API_KEY", API_KEY)
            .env("WEBHOOK_HEADER", "x-webhook-secret")
            .env("WEBHOOK_SECRET", WEBHOOK_SECRET)
            .env("REPORT_DIR", report_dir)
            .env("FACEIT_LANG", "en")
            .spawn()
            .expect("should start");

        self.child_process = Some(child_process);
    }

    pub async fn retry_until_up(&self) {
        let mut nr_loops = 0;
        while reqwest::get(format!("http://localhost:{}/", self.port)).await.is_err() {
            tokio::time::sleep(std::time::Duration::from_millis(100)).await;
            nr_loops += 1;
            if nr_loops > 300 {
                panic!("server did not start");
            }
        }
    }

    pub async fn post_webhook(&self, match_id: &str, secret: Option<&str>) -> Result<Response, Box<dyn std::error::Error>> {
        let body = serde_json::json!({
            "transaction_id": "tx-1",
            "event": "match_status_finished",
            "event_id": "ev-1",
            "third_party_id": "hub-1",
            "app_id": "app-1",
            "timestamp": "2024-05-29T16:30:00Z",
            "retry_count": 0,
            "version": 1,
            "payload": { "id": match_id }
        });
        let mut req = reqwest::Client::builder()
            .build()?
            .post(format!("http://localhost:{}/webhook", self.port))
            .json(&body);
        if let Some(secret) = secret {
            req = req.header("x-webhook-secret", secret);
        }
        Ok(req.send().await?)
    }
}
