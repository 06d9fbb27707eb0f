//! Run configuration.
//!
//! Everything the pipeline needs is passed in through [`ReportConfig`];
//! nothing is read from the environment.

use clap::ValueEnum;
use std::path::PathBuf;

/// Suffix appended to the input file stem to name the report.
pub const OUTPUT_SUFFIX: &str = "_filtered_searchable";

/// Extension of the generated report.
pub const OUTPUT_EXTENSION: &str = "html";

/// Default `<title>` of the generated document.
pub const DEFAULT_TITLE: &str = "Filtered Flare Data";

/// Default `<h1>` of the generated document.
pub const DEFAULT_HEADING: &str = "Filtered Flare Data Export";

/// Text encoding of the input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Encoding {
    /// Strict UTF-8; invalid bytes are an error.
    #[default]
    #[value(name = "utf-8", alias = "utf8")]
    Utf8,
    /// ISO-8859-1.
    #[value(name = "latin1", alias = "iso-8859-1")]
    Latin1,
    /// Windows code page 1252.
    #[value(name = "windows-1252", alias = "cp1252")]
    Windows1252,
    /// Guess the charset from the file contents.
    Auto,
}

impl Encoding {
    pub fn label(&self) -> &'static str {
        match self {
            Encoding::Utf8 => "utf-8",
            Encoding::Latin1 => "iso-8859-1",
            Encoding::Windows1252 => "windows-1252",
            Encoding::Auto => "auto",
        }
    }
}

/// Loader settings.
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Field delimiter (single ASCII byte).
    pub delimiter: u8,

    /// Input encoding.
    pub encoding: Encoding,

    /// Keep null-marker text (`NA`, `null`, ...) instead of treating it as absent.
    pub keep_null_markers: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            encoding: Encoding::Utf8,
            keep_null_markers: false,
        }
    }
}

/// Renderer settings.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub title: String,
    pub heading: String,

    /// HTML-escape headings and cell values. Off by default: values are
    /// inserted verbatim.
    pub escape_html: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            heading: DEFAULT_HEADING.to_string(),
            escape_html: false,
        }
    }
}

/// Full configuration for one report run.
#[derive(Debug, Clone, Default)]
pub struct ReportConfig {
    /// CSV export to read.
    pub input: PathBuf,

    /// Where to write the report; derived from `input` when unset.
    pub output: Option<PathBuf>,

    pub load: LoadOptions,
    pub render: RenderOptions,
}

impl ReportConfig {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            ..Self::default()
        }
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let config = ReportConfig::new("export.csv");
        assert_eq!(config.load.delimiter, b',');
        assert_eq!(config.load.encoding, Encoding::Utf8);
        assert!(!config.load.keep_null_markers);
        assert!(!config.render.escape_html);
        assert_eq!(config.render.title, DEFAULT_TITLE);
        assert!(config.output.is_none());
    }

    #[test]
    fn test_encoding_parses_aliases() {
        assert_eq!(Encoding::from_str("cp1252", true).unwrap(), Encoding::Windows1252);
        assert_eq!(Encoding::from_str("utf8", true).unwrap(), Encoding::Utf8);
        assert_eq!(Encoding::from_str("auto", true).unwrap(), Encoding::Auto);
        assert!(Encoding::from_str("ebcdic", true).is_err());
    }
}
