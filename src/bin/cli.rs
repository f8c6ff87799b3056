use faceit_report::{cli, config_handler, logging};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // stdout carries the report only
    logging::init(std::io::stderr, "info");

    let config = config_handler::load()?;
    cli::run(&config, std::env::args().skip(1)).await
}
