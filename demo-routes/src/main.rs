use clap::Parser;
use demo_routes::config::{Cli, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    demo_routes::init_logger();

    let cli = Cli::parse();
    let config = Config::load(&cli)?;

    demo_routes::serve(config).await
}
