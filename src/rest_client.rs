use std::time::Instant;

use anyhow::Context;
use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;
use tracing::log;

use crate::config_handler::Config;
use crate::models_external::match_rsp::MatchRsp;
use crate::models_external::match_stats::MatchStatsRsp;
use crate::models_external::player::PlayerRsp;

/// Client for the FACEIT Data API. Every call carries the bearer token and
/// any non-2xx status is returned as an error.
#[derive(Clone)]
pub struct FaceitClient {
    base_url: String,
    api_key: String,
    client: reqwest::Client,
}

impl FaceitClient {
    pub fn new(base_url: &str, api_key: &str) -> FaceitClient {
        FaceitClient {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub fn from_config(config: &Config) -> FaceitClient {
        FaceitClient::new(&config.api_url, &config.api_key)
    }

    pub fn get_match_url(&self, match_id: &str) -> String {
        format!("{}/matches/{match_id}", self.base_url)
    }

    pub fn get_match_stats_url(&self, match_id: &str) -> String {
        format!("{}/matches/{match_id}/stats", self.base_url)
    }

    pub fn get_player_url(&self, player_id: &str) -> String {
        format!("{}/players/{player_id}", self.base_url)
    }

    pub async fn get_match(&self, match_id: &str) -> anyhow::Result<MatchRsp> {
        self.get_call(&self.get_match_url(match_id)).await
    }

    pub async fn get_match_stats(&self, match_id: &str) -> anyhow::Result<MatchStatsRsp> {
        self.get_call(&self.get_match_stats_url(match_id)).await
    }

    pub async fn get_player(&self, player_id: &str) -> anyhow::Result<PlayerRsp> {
        self.get_call(&self.get_player_url(player_id)).await
    }

    async fn get_call<T: DeserializeOwned>(&self, url: &str) -> anyhow::Result<T> {
        let before = Instant::now();
        let rsp = self.client
            .get(url)
            .header(ACCEPT, "application/json")
            .bearer_auth(&self.api_key)
            .send()
            .await
            .with_context(|| format!("[REST] Call failed {url}"))?
            .error_for_status()?;
        let res = rsp.json().await
            .with_context(|| format!("[REST] Parse failed {url}"))?;
        log::info!("[REST] Call {url} {:.2?}", before.elapsed());
        Ok(res)
    }
}
