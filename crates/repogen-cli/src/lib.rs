mod config;
mod generate;
mod logging;
mod utility;
mod writer;

pub use config::*;
pub use generate::{generate, GenerateCommand};
pub use logging::init_tracing;
pub use utility::default_struct_name;
pub use writer::{Layout, Writer};

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

/// repogen CLI library for building custom command-line tools
#[derive(Debug, Default)]
pub struct RepogenCli {
    config: Option<Config>,
}

impl RepogenCli {
    /// Create a new RepogenCli that reads its configuration from the
    /// `--config` file
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new RepogenCli with a fixed configuration; `--config` is
    /// ignored
    pub fn with_config(config: Config) -> Self {
        Self {
            config: Some(config),
        }
    }

    /// Parse and execute CLI commands from command-line arguments
    pub async fn parse_and_run(&self) -> Result<()> {
        let cli = Cli::parse();
        self.run(cli).await
    }

    /// Parse and execute CLI commands from an iterator of arguments
    pub async fn parse_from<I, T>(&self, args: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli = Cli::parse_from(args);
        self.run(cli).await
    }

    async fn run(&self, cli: Cli) -> Result<()> {
        init_tracing(cli.verbose);

        let config = match &self.config {
            Some(config) => config.clone(),
            None => Config::load_or_default(&cli.config)?,
        };

        match cli.command {
            Command::Generate(cmd) => cmd.run(&config).await,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "repogen")]
#[command(about = "repogen - Generate Go records and repositories from a MySQL schema")]
#[command(version)]
struct Cli {
    /// Configuration file
    #[arg(short, long, global = true, default_value = CONFIG_FILE)]
    config: PathBuf,

    /// Log debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser, Debug)]
enum Command {
    /// Generate the record, repository interface and implementation for tables
    Generate(GenerateCommand),
}
