use clap::Parser;
use strat_radar::{Cli, run_app};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (global_level, my_code_level) = if cfg!(debug_assertions) {
        (log::LevelFilter::Warn, log::LevelFilter::Info)
    } else {
        (log::LevelFilter::Error, log::LevelFilter::Warn)
    };

    let mut builder = env_logger::Builder::new();

    builder
        .filter(None, global_level)
        .filter(Some("strat_radar"), my_code_level)
        .init();

    let args = Cli::parse();
    run_app(args).await
}
