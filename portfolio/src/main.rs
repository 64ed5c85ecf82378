use std::{
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::Context;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use portfolio::{commands::serve::serve, environment::ConfigProvider};
use portfolio_config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Serve => {
            init_tracing();
            let config = load_config(cli.config)?;
            serve(config).await?;
        }
        Command::CheckConfig { verbose } => {
            init_tracing();
            let config = load_config(cli.config)?;
            ConfigProvider::new(&config)?;
            verbose.then(|| println!("{config:#?}"));
        }
        Command::Completion { shell } => completion(shell, &mut std::io::stdout()),
    }

    Ok(())
}

fn load_config(paths: Option<Vec<PathBuf>>) -> anyhow::Result<Config> {
    let paths = paths.unwrap_or_else(|| {
        Some(PathBuf::from(DEFAULT_CONFIG_PATH))
            .filter(|path| Path::exists(path))
            .into_iter()
            .collect()
    });
    portfolio_config::load(&paths).context("Failed to load config")
}

fn completion(shell: Shell, out: &mut impl Write) {
    clap_complete::generate(shell, &mut Cli::command(), env!("CARGO_BIN_NAME"), out);
}

#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
    /// Config files to load, separated by `:`. Later files take precedence.
    /// Defaults to `config.toml` if it exists.
    #[arg(long, short, global = true, env = "PORTFOLIO_CONFIG", value_delimiter = ':')]
    config: Option<Vec<PathBuf>>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Start the REST API server to serve the portfolio backend
    #[command(aliases(["run", "start", "r", "s"]))]
    Serve,
    /// Validate configuration and the content document
    CheckConfig {
        /// Print a debug representation of the config
        #[arg(short, long)]
        verbose: bool,
    },
    /// Generate shell completions
    Completion {
        /// The shell to generate completions for
        #[clap(value_enum)]
        shell: Shell,
    },
}

fn init_tracing() {
    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    #[cfg(tracing_pretty)]
    let fmt_layer = fmt_layer.pretty();

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(EnvFilter::from_default_env()))
        .init();
}
