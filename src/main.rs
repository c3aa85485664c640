use clap::Parser;
use tracing_subscriber::EnvFilter;
use trackx::cli::{self, Cli};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let args = Cli::parse();

    if let Err(e) = cli::run(args) {
        eprintln!("trackx: {}", e);
        std::process::exit(1);
    }
}
