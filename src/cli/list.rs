use std::path::PathBuf;

use advisor::{Config, ListingEntry, load_catalog, sorted_listing};
use anyhow::Context;
use clap::{Parser, ValueEnum};
use regex::Regex;
use tracing::instrument;

use super::terminal::Colorize;

/// Command arguments for `advise list`.
#[derive(Debug, Parser)]
#[command(about = "Print all courses in course-number order")]
pub struct Command {
    /// The catalog file to read
    file: PathBuf,

    /// Case-insensitive substring match against course number and title.
    #[arg(long, conflicts_with = "regex")]
    contains: Option<String>,

    /// Regular expression match against course number and title.
    #[arg(long)]
    regex: Option<String>,

    /// Output format (default: table).
    #[arg(long, value_enum, default_value_t)]
    output: OutputFormat,
}

/// Supported output formats.
#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl Command {
    #[instrument(level = "debug", skip(self, config))]
    pub fn run(self, config: &Config) -> anyhow::Result<()> {
        let filter = Filter::new(self.contains.as_deref(), self.regex.as_deref())?;
        let catalog = load_catalog(&self.file, config.bucket_count())
            .with_context(|| format!("failed to load {}", self.file.display()))?;

        let entries: Vec<ListingEntry<'_>> = sorted_listing(&catalog)
            .filter(|entry| filter.matches(entry))
            .collect();

        match self.output {
            OutputFormat::Table => {
                if entries.is_empty() {
                    eprintln!("{}", "No matching courses.".dim());
                }
                for entry in &entries {
                    println!("{entry}");
                }
            }
            OutputFormat::Json => {
                let rows: Vec<_> = entries
                    .iter()
                    .map(|entry| {
                        serde_json::json!({
                            "id": entry.id.as_str(),
                            "title": entry.title,
                        })
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&rows)?);
            }
        }

        Ok(())
    }
}

/// Restricts which listing entries are printed.
#[derive(Debug)]
enum Filter {
    All,
    Contains(String),
    Regex(Regex),
}

impl Filter {
    fn new(contains: Option<&str>, regex: Option<&str>) -> anyhow::Result<Self> {
        match (contains, regex) {
            (Some(needle), _) => Ok(Self::Contains(needle.to_lowercase())),
            (None, Some(pattern)) => Regex::new(pattern)
                .map(Self::Regex)
                .with_context(|| format!("invalid regular expression '{pattern}'")),
            (None, None) => Ok(Self::All),
        }
    }

    fn matches(&self, entry: &ListingEntry<'_>) -> bool {
        match self {
            Self::All => true,
            Self::Contains(needle) => {
                entry.id.to_lowercase().contains(needle)
                    || entry.title.to_lowercase().contains(needle)
            }
            Self::Regex(regex) => regex.is_match(entry.id) || regex.is_match(entry.title),
        }
    }
}
