use std::path::PathBuf;

use advisor::{Config, load_catalog};
use anyhow::Context;
use clap::Parser;
use tracing::instrument;

use super::terminal::Colorize;

#[derive(Debug, Parser)]
#[command(about = "Check that a catalog file loads cleanly")]
pub struct Command {
    /// The catalog file to check
    file: PathBuf,

    /// Suppress all output except errors
    #[arg(long, short)]
    quiet: bool,
}

impl Command {
    #[instrument(level = "debug", skip(self, config))]
    pub fn run(self, config: &Config) -> anyhow::Result<()> {
        let catalog = load_catalog(&self.file, config.bucket_count())
            .with_context(|| format!("{} is not a valid catalog", self.file.display()))?;

        if self.quiet {
            return Ok(());
        }

        println!(
            "{}",
            format!(
                "✅ {} courses loaded from {}",
                catalog.len(),
                self.file.display()
            )
            .success()
        );
        println!(
            "{}",
            format!(
                "   {} of {} buckets used, longest chain {}",
                catalog.occupied_buckets(),
                catalog.bucket_count(),
                catalog.longest_chain()
            )
            .info()
        );

        Ok(())
    }
}
