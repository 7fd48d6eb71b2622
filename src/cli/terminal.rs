//! Styled terminal output for command results

use owo_colors::{OwoColorize, Style};

/// Whether stdout can render colors
fn color_enabled() -> bool {
    supports_color::on(supports_color::Stream::Stdout).is_some()
}

fn paint(text: &str, style: Style, enabled: bool) -> String {
    if enabled {
        text.style(style).to_string()
    } else {
        text.to_string()
    }
}

/// Extension trait for styling output, falling back to plain text
pub trait Colorize: AsRef<str> {
    /// Style as success (green)
    fn success(&self) -> String {
        paint(self.as_ref(), Style::new().green(), color_enabled())
    }

    /// Style as warning (yellow)
    fn warning(&self) -> String {
        paint(self.as_ref(), Style::new().yellow(), color_enabled())
    }

    /// Style as info (blue)
    fn info(&self) -> String {
        paint(self.as_ref(), Style::new().bright_blue(), color_enabled())
    }

    /// Dim the text
    fn dim(&self) -> String {
        paint(self.as_ref(), Style::new().dimmed(), color_enabled())
    }
}

impl<T: AsRef<str> + ?Sized> Colorize for T {}
