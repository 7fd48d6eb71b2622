use std::{borrow::Cow, num::NonZeroUsize, path::PathBuf};

mod config;
mod list;
mod menu;
mod show;
mod terminal;
mod validate;

use advisor::{Catalog, Config};
use clap::ArgAction;

/// Where the configuration is read from unless `--config` is given.
const DEFAULT_CONFIG_PATH: &str = "advisor.toml";

/// Resolves a course number typed by the user.
///
/// The number is used as typed if it exists in the catalog; otherwise it is
/// normalized to uppercase.
fn course_number<'a>(catalog: &Catalog, input: &'a str) -> Cow<'a, str> {
    let input = input.trim();
    if catalog.contains(input) {
        Cow::Borrowed(input)
    } else {
        Cow::Owned(input.to_uppercase())
    }
}

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// The path to the configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH, global = true)]
    config: PathBuf,

    /// The number of catalog buckets (overrides the configuration file)
    #[arg(short, long, global = true)]
    buckets: Option<NonZeroUsize>,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        let config = self.load_config()?;

        self.command
            .unwrap_or_default()
            .run(&self.config, config)
    }

    /// Reads the configuration file, if present, and applies overrides.
    fn load_config(&self) -> anyhow::Result<Config> {
        let mut config = if self.config.exists() {
            Config::load(&self.config).map_err(|e| anyhow::anyhow!("{e}"))?
        } else {
            tracing::debug!(path = %self.config.display(), "no configuration file, using defaults");
            Config::default()
        };

        if let Some(buckets) = self.buckets {
            config.set_bucket_count(buckets);
        }

        Ok(config)
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

#[derive(Debug, clap::Parser)]
pub enum Command {
    /// Run the interactive advising menu (default)
    Menu(menu::Command),

    /// Print all courses in course-number order
    List(list::Command),

    /// Print a course's title and prerequisites
    Show(show::Command),

    /// Check that a catalog file loads cleanly
    Validate(validate::Command),

    /// Show or create the configuration file
    Config(config::Command),
}

impl Default for Command {
    fn default() -> Self {
        Self::Menu(menu::Command::default())
    }
}

impl Command {
    fn run(self, config_path: &std::path::Path, config: Config) -> anyhow::Result<()> {
        match self {
            Self::Menu(command) => command.run(config)?,
            Self::List(command) => command.run(&config)?,
            Self::Show(command) => command.run(&config)?,
            Self::Validate(command) => command.run(&config)?,
            Self::Config(command) => command.run(config_path, &config)?,
        }
        Ok(())
    }
}
