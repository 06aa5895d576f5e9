//! Output formatting for CLI commands

use serde::Serialize;

use crate::storage;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl From<storage::OutputFormat> for OutputFormat {
    fn from(format: storage::OutputFormat) -> Self {
        match format {
            storage::OutputFormat::Text => OutputFormat::Text,
            storage::OutputFormat::Json => OutputFormat::Json,
        }
    }
}

/// Output helper for consistent formatting
pub struct Output {
    format: OutputFormat,
    verbose: bool,
}

impl Output {
    pub fn new(format: OutputFormat, verbose: bool) -> Self {
        Self { format, verbose }
    }

    /// Prints a success message
    pub fn success(&self, message: &str) {
        match self.format {
            OutputFormat::Text => println!("{}", message),
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::json!({
                        "success": true,
                        "message": message
                    })
                );
            }
        }
    }

    /// Prints structured data as JSON; text rendering is left to the caller
    pub fn data<T: Serialize>(&self, data: &T) {
        if let Ok(json) = serde_json::to_string(data) {
            println!("{}", json);
        }
    }

    /// Prints a table row (text only, ignored in JSON mode)
    pub fn row(&self, columns: &[&str]) {
        if self.format == OutputFormat::Text {
            println!("{}", columns.join("\t"));
        }
    }

    /// Prints a blank line (text only)
    pub fn blank(&self) {
        if self.format == OutputFormat::Text {
            println!();
        }
    }

    /// Returns true if using JSON format
    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    /// Prints a verbose debug message (only when --verbose is set)
    pub fn verbose(&self, message: &str) {
        if self.verbose {
            eprintln!("[verbose] {}", message);
        }
    }

    /// Prints a verbose debug message with context (only when --verbose is set)
    pub fn verbose_ctx(&self, context: &str, message: &str) {
        if self.verbose {
            eprintln!("[verbose:{}] {}", context, message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_from_config() {
        assert_eq!(OutputFormat::from(storage::OutputFormat::Json), OutputFormat::Json);
        assert_eq!(OutputFormat::from(storage::OutputFormat::Text), OutputFormat::Text);
    }

    #[test]
    fn json_detection() {
        assert!(Output::new(OutputFormat::Json, false).is_json());
        assert!(!Output::new(OutputFormat::Text, true).is_json());
    }
}
