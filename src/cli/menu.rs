//! The interactive advising menu.

use std::{
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
};

use advisor::{Catalog, Config, detail_view, load_catalog, sorted_listing};
use tracing::{info, instrument, warn};

#[derive(Debug, Default, clap::Parser)]
pub struct Command {
    /// A catalog file to load before the menu is shown
    #[arg(long, short)]
    file: Option<PathBuf>,
}

impl Command {
    #[instrument(skip(config))]
    pub fn run(self, config: Config) -> anyhow::Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        let mut session = Session::new(stdin.lock(), stdout.lock(), config);

        if let Some(path) = &self.file {
            session.load(path)?;
        }

        session.run()?;
        info!(courses = session.catalog().len(), "session ended");
        Ok(())
    }
}

const MENU: &str = "\
1. Load file data into data structure
2. Print alphanumerically ordered list of all courses
3. Print course title and prerequisites
9. Exit";

/// One interactive session.
///
/// The session owns the currently loaded catalog. A successful load replaces
/// it wholesale; a failed load leaves it untouched.
pub struct Session<R, W> {
    input: R,
    output: W,
    config: Config,
    catalog: Catalog,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, config: Config) -> Self {
        let catalog = Catalog::new(config.bucket_count());
        Self {
            input,
            output,
            config,
            catalog,
        }
    }

    /// The currently loaded catalog.
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Shows the menu until the user exits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            writeln!(self.output, "{MENU}")?;
            let Some(choice) = self.prompt("Enter your choice: ")? else {
                break;
            };

            match choice.as_str() {
                "1" => {
                    let Some(path) = self.prompt("Enter the file name: ")? else {
                        break;
                    };
                    self.load(Path::new(&path))?;
                }
                "2" => self.print_courses()?,
                "3" => {
                    let Some(number) = self.prompt("Enter course number: ")? else {
                        break;
                    };
                    self.print_course(&number)?;
                }
                "9" => break,
                _ => writeln!(self.output, "Invalid choice. Please try again.")?,
            }
        }

        writeln!(self.output, "Exiting program.")
    }

    /// Prompts for one line of input. Returns `None` at end of input.
    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Loads a catalog file, replacing the current catalog on success.
    ///
    /// Returns whether the catalog was replaced. Load failures are reported
    /// to the user rather than returned.
    pub fn load(&mut self, path: &Path) -> io::Result<bool> {
        match load_catalog(path, self.config.bucket_count()) {
            Ok(catalog) => {
                info!(courses = catalog.len(), "catalog replaced");
                self.catalog = catalog;
                writeln!(self.output, "Courses loaded successfully.")?;
                Ok(true)
            }
            Err(error) => {
                warn!(%error, "catalog not loaded");
                writeln!(self.output, "Error: {error}")?;
                if !self.catalog.is_empty() {
                    writeln!(
                        self.output,
                        "The previously loaded courses are still available."
                    )?;
                }
                Ok(false)
            }
        }
    }

    fn print_courses(&mut self) -> io::Result<()> {
        if self.catalog.is_empty() {
            return writeln!(self.output, "No courses loaded. Choose option 1 first.");
        }
        for entry in sorted_listing(&self.catalog) {
            writeln!(self.output, "{entry}")?;
        }
        Ok(())
    }

    fn print_course(&mut self, input: &str) -> io::Result<()> {
        let number = super::course_number(&self.catalog, input);
        writeln!(self.output, "{}", detail_view(&self.catalog, &number))
    }
}
