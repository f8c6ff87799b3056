use faceit_report::{api::Api, config_handler::{self, Config}, logging};
use lazy_static::lazy_static;

lazy_static! {
    static ref CONFIG: Config = config_handler::get_config();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init(std::io::stdout, "info");

    CONFIG.ensure_api_key()?;
    Api::serve(CONFIG.clone()).await
}
