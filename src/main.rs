use clap::Parser;
use tracing::Level;
use tracing_subscriber::EnvFilter;
use ytdroi::cli::{run, Cli};

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .init();
    run(cli)
}
