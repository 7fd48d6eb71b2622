use std::{path::PathBuf, process};

use advisor::{Config, Course, Detail, detail_view, load_catalog};
use anyhow::Context;
use clap::Parser;
use tracing::instrument;

use super::terminal::Colorize;

#[derive(Debug, Parser)]
#[command(about = "Display a course's title and prerequisites")]
pub struct Command {
    /// The catalog file to read
    file: PathBuf,

    /// The course number to display
    course: String,

    /// Output format
    #[arg(long, value_name = "FORMAT", default_value = "pretty")]
    output: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Pretty,
    Json,
}

impl Command {
    #[instrument(level = "debug", skip(self, config))]
    pub fn run(self, config: &Config) -> anyhow::Result<()> {
        let catalog = load_catalog(&self.file, config.bucket_count())
            .with_context(|| format!("failed to load {}", self.file.display()))?;

        let number = super::course_number(&catalog, &self.course);
        let detail = detail_view(&catalog, &number);

        let Detail::Found(course) = detail else {
            eprintln!("{}", detail.to_string().warning());
            process::exit(1);
        };

        match self.output {
            OutputFormat::Pretty => println!("{detail}"),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&to_json(course))?),
        }

        Ok(())
    }
}

fn to_json(course: &Course) -> serde_json::Value {
    serde_json::json!({
        "id": course.id().as_str(),
        "title": course.title(),
        "prerequisites": course
            .prerequisites()
            .iter()
            .map(|id| id.as_str())
            .collect::<Vec<_>>(),
    })
}
