pub mod api;
pub mod cli;
pub mod config_handler;
pub mod logging;
pub mod lookup_service;
pub mod models;
pub mod models_api;
pub mod models_external;
pub mod report_service;
pub mod rest_client;
pub mod scoreboard_service;
