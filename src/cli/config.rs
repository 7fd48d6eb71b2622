use std::path::Path;

use advisor::Config;
use tracing::instrument;

use crate::cli::terminal::Colorize;

#[derive(Debug, clap::Parser)]
/// Show or create the configuration file
///
/// Configuration is read from advisor.toml in the working directory, or
/// from the path given with --config. A missing file means defaults.
///
/// Available configuration keys:
///   `bucket_count`  Number of catalog buckets (default: 100)
pub struct Command {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Debug, clap::Parser)]
enum ConfigCommand {
    /// Show the effective configuration
    Show,

    /// Write a configuration file with default values
    Init,
}

impl Command {
    #[instrument(skip(config))]
    pub fn run(self, config_path: &Path, config: &Config) -> anyhow::Result<()> {
        match self.command {
            ConfigCommand::Show => {
                Self::show_config(config_path, config);
                Ok(())
            }
            ConfigCommand::Init => Self::init_config(config_path),
        }
    }

    fn show_config(config_path: &Path, config: &Config) {
        let source = if config_path.exists() {
            config_path.display().to_string()
        } else {
            "defaults".to_string()
        };

        println!("Configuration: {}", format!("({source})").dim());
        println!("  bucket_count: {}", config.bucket_count());
    }

    fn init_config(config_path: &Path) -> anyhow::Result<()> {
        if config_path.exists() {
            anyhow::bail!(
                "Configuration file {} already exists",
                config_path.display()
            );
        }

        Config::default()
            .save(config_path)
            .map_err(|e| anyhow::anyhow!("Failed to create {}: {e}", config_path.display()))?;

        println!(
            "{}",
            format!("✅ Created {}", config_path.display()).success()
        );
        Ok(())
    }
}
