use anyhow::Result;
use clap::ValueEnum;
use colored::{Color, Colorize};
use comfy_table::{Attribute, Cell, Color as TableColor, Table};
use serde::Serialize;

/// Output format options for CLI commands
#[derive(Clone, Debug, ValueEnum, Default, PartialEq)]
pub enum OutputFormat {
    /// Formatted table output (default)
    #[default]
    Table,
    /// JSON output for scripting
    Json,
}

/// Global CLI options that affect output and behavior
#[derive(Clone, Debug, Default)]
pub struct GlobalOptions {
    pub output_format: OutputFormat,
    pub quiet: bool,
    pub verbose: bool,
    pub no_color: bool,
}

/// Trait for data that can be displayed as a table
pub trait TableDisplay {
    fn to_table(&self, output: &OutputManager) -> Table;
}

/// Output manager handles formatting and display
pub struct OutputManager {
    pub options: GlobalOptions,
}

impl OutputManager {
    pub fn new(options: GlobalOptions) -> Self {
        if options.no_color {
            colored::control::set_override(false);
        }
        Self { options }
    }

    pub fn is_json(&self) -> bool {
        self.options.output_format == OutputFormat::Json
    }

    /// Display data according to the configured output format
    pub fn display<T>(&self, data: &T) -> Result<()>
    where
        T: Serialize + TableDisplay,
    {
        if self.options.quiet {
            return Ok(());
        }

        match self.options.output_format {
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(data)?;
                println!("{json}");
            }
            OutputFormat::Table => {
                let table = data.to_table(self);
                println!("{table}");
            }
        }
        Ok(())
    }

    pub fn success(&self, message: &str) {
        if self.shows_messages() {
            println!("{}", self.styled(Tone::Success, message));
        }
    }

    /// Errors are printed even in quiet and JSON modes.
    pub fn error(&self, message: &str) {
        eprintln!("{}", self.styled(Tone::Error, message));
    }

    pub fn warning(&self, message: &str) {
        if self.shows_messages() {
            println!("{}", self.styled(Tone::Warning, message));
        }
    }

    pub fn info(&self, message: &str) {
        if self.shows_messages() {
            println!("{}", self.styled(Tone::Info, message));
        }
    }

    /// Only printed with `--verbose`, on stderr.
    pub fn verbose(&self, message: &str) {
        if self.options.verbose && !self.options.quiet {
            eprintln!("{}", self.styled(Tone::Detail, message));
        }
    }

    fn shows_messages(&self) -> bool {
        !self.options.quiet && !self.is_json()
    }

    fn styled(&self, tone: Tone, message: &str) -> String {
        let (icon, color) = tone.style();
        if self.options.no_color {
            format!("{icon} {message}")
        } else {
            format!("{} {}", icon.color(color), message.color(color))
        }
    }

    /// Create a themed table with a bold header row
    pub fn create_table(&self, headers: &[&str]) -> Table {
        let mut table = Table::new();

        if !self.options.no_color {
            table.load_preset(comfy_table::presets::UTF8_FULL_CONDENSED);
        } else {
            table.load_preset(comfy_table::presets::ASCII_FULL);
        }

        let header_cells: Vec<Cell> = headers
            .iter()
            .map(|h| {
                let cell = Cell::new(h).add_attribute(Attribute::Bold);
                if self.options.no_color { cell } else { cell.fg(TableColor::Cyan) }
            })
            .collect();
        table.set_header(header_cells);
        table
    }

    /// A table cell colored by outcome
    pub fn status_cell(&self, text: &str, ok: bool) -> Cell {
        let cell = Cell::new(text);
        match (self.options.no_color, ok) {
            (true, _) => cell,
            (false, true) => cell.fg(TableColor::Green),
            (false, false) => cell.fg(TableColor::Yellow),
        }
    }

    pub fn heading(&self, text: &str) {
        if self.shows_messages() {
            if self.options.no_color {
                println!("\n{text}\n{}", "=".repeat(text.len()));
            } else {
                println!("\n{}", text.color(Color::BrightBlue).bold());
            }
        }
    }
}

/// Kind of status line, which picks its icon and color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tone {
    Success,
    Error,
    Warning,
    Info,
    Detail,
}

impl Tone {
    fn style(self) -> (&'static str, Color) {
        match self {
            Tone::Success => ("✓", Color::Green),
            Tone::Error => ("✗", Color::Red),
            Tone::Warning => ("⚠", Color::Yellow),
            Tone::Info => ("ℹ", Color::Blue),
            Tone::Detail => ("→", Color::BrightBlack),
        }
    }
}
