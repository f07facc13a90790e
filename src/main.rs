use std::io;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use rss2json::cli::Cli;
use rss2json::errors::FeederResult;
use rss2json::services::FeedPipeline;
use rss2json::sources::HttpFetcher;

fn main() {
    load_env();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("{}", e.report());
        std::process::exit(1);
    }
}

/// Load `.env` from the executable's directory, then the working directory
fn load_env() {
    if let Some(dir) = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
    {
        let env_path = dir.join(".env");
        if env_path.exists() {
            dotenvy::from_path(&env_path).ok();
        }
    }
    dotenvy::dotenv().ok();
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // stdout carries the JSON, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: &Cli) -> FeederResult<()> {
    let config_path = cli.config_location().resolve()?;
    let pipeline = FeedPipeline::new(HttpFetcher::new());

    pipeline.run(&config_path, cli.format, io::stdout().lock())
}
