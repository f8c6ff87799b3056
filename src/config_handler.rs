use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use tracing::log;

#[derive(Serialize, Deserialize, Clone)]
pub struct Config {
    #[serde(default="default_port")]
    pub port: u16,

    #[serde(default="default_api_url")]
    pub api_url: String,
    #[serde(default)]
    pub api_key: String,

    #[serde(default="default_webhook_header")]
    pub webhook_header: String,
    #[serde(default)]
    pub webhook_secret: String,

    #[serde(default="default_report_dir")]
    pub report_dir: String,

    #[serde(default="default_lang")]
    pub lang: String,
}

fn default_port() -> u16 {
    8000
}

fn default_api_url() -> String {
    "https://open.faceit.com/data/v4".to_string()
}

fn default_webhook_header() -> String {
    "x-webhook-secret".to_string()
}

fn default_report_dir() -> String {
    ".".to_string()
}

fn default_lang() -> String {
    "en".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: default_port(),
            api_url: default_api_url(),
            api_key: String::new(),
            webhook_header: default_webhook_header(),
            webhook_secret: String::new(),
            report_dir: default_report_dir(),
            lang: default_lang(),
        }
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("port", &self.port)
            .field("api_url", &self.api_url)
            .field("api_key", &mask(&self.api_key))
            .field("webhook_header", &self.webhook_header)
            .field("webhook_secret", &mask(&self.webhook_secret))
            .field("report_dir", &self.report_dir)
            .field("lang", &self.lang)
            .finish()
    }
}

fn mask(secret: &str) -> &'static str {
    if secret.is_empty() { "<unset>" } else { "<set>" }
}

impl Config {
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup("PORT") {
            match port.parse() {
                Ok(port) => self.port = port,
                Err(e) => log::warn!("[CONFIG] Ignoring PORT {port}: {e}"),
            }
        }
        if let Some(api_url) = lookup("FACEIT_API_URL") {
            self.api_url = api_url;
        }
        if let Some(api_key) = lookup("API_KEY") {
            self.api_key = api_key;
        }
        if let Some(header) = lookup("WEBHOOK_HEADER") {
            self.webhook_header = header;
        }
        if let Some(secret) = lookup("WEBHOOK_SECRET") {
            self.webhook_secret = secret;
        }
        if let Some(report_dir) = lookup("REPORT_DIR") {
            self.report_dir = report_dir;
        }
        if let Some(lang) = lookup("FACEIT_LANG") {
            self.lang = lang;
        }
    }

    pub fn ensure_api_key(&self) -> anyhow::Result<&str> {
        anyhow::ensure!(!self.api_key.is_empty(), "API_KEY is not set");
        Ok(self.api_key.as_str())
    }
}

pub fn load() -> anyhow::Result<Config> {
    if let Ok(path) = dotenvy::dotenv() {
        log::info!("[CONFIG] Loaded {}", path.display());
    }

    let mut result = match std::env::var("CONFIG_PATH") {
        Ok(path) => {
            let data = fs::read_to_string(&path)
                .with_context(|| format!("Unable to read {path}"))?;
            serde_json::from_str(&data)
                .with_context(|| format!("Could not parse JSON at {path}!"))?
        },
        Err(_) => Config::default(),
    };
    result.apply_overrides(|key| std::env::var(key).ok());
    log::info!("[CONFIG] {:?}", result);
    Ok(result)
}

pub fn get_config() -> Config {
    load().unwrap_or_else(|e| panic!("{e:#}"))
}
