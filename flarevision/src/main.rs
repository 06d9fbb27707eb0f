//! Flarevision CLI - turn a Flare CSV export into a searchable HTML page
//!
//! ```bash
//! flarevision export.csv                 # writes export_filtered_searchable.html
//! flarevision                            # asks for the path interactively
//! flarevision export.csv -o report.html  # explicit output path
//! ```

use clap::{Parser, ValueEnum};
use flarevision::logs::failure_entry;
use flarevision::{
    generate_report, ConsoleReporter, Encoding, JsonReporter, LoadOptions, RenderOptions,
    ReportConfig, ReportError, Reporter, SilentReporter,
};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

const BANNER: &str = r#"
   ███████╗██╗      █████╗ ██████╗ ███████╗    ██╗   ██╗██╗███████╗██╗ ██████╗ ███╗   ██╗
   ██╔════╝██║     ██╔══██╗██╔══██╗██╔════╝    ██║   ██║██║██╔════╝██║██╔═══██╗████╗  ██║
   █████╗  ██║     ███████║██████╔╝█████╗      ██║   ██║██║███████╗██║██║   ██║██╔██╗ ██║
   ██╔══╝  ██║     ██╔══██║██╔══██╗██╔══╝      ╚██╗ ██╔╝██║╚════██║██║██║   ██║██║╚██╗██║
   ██║     ███████╗██║  ██║██║  ██║███████╗     ╚████╔╝ ██║███████║██║╚██████╔╝██║ ╚████║
   ╚═╝     ╚══════╝╚═╝  ╚═╝╚═╝  ╚═╝╚══════╝      ╚═══╝  ╚═╝╚══════╝╚═╝ ╚═════╝ ╚═╝  ╚═══╝

   Convert a Flare CSV export into a searchable HTML file.
   Export the full CSV from the Flare web app, then point this tool at it.
"#;

const PROMPT: &str = "Enter the path to the Flare CSV file: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "flarevision", version)]
#[command(about = "Convert a Flare CSV export into a searchable HTML report", long_about = None)]
struct Cli {
    /// Input CSV file (prompted for when omitted)
    input: Option<PathBuf>,

    /// Output HTML file (default: <input>_filtered_searchable.html)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// CSV delimiter
    #[arg(short, long, default_value = ",", value_parser = parse_delimiter)]
    delimiter: u8,

    /// Input encoding
    #[arg(long, value_enum, default_value_t = Encoding::Utf8)]
    encoding: Encoding,

    /// HTML-escape category labels and cell values
    #[arg(long)]
    escape_html: bool,

    /// Keep NA/null/N/A text instead of treating it as empty
    #[arg(long)]
    keep_null_markers: bool,

    /// Document <title>
    #[arg(long, default_value = flarevision::config::DEFAULT_TITLE)]
    title: String,

    /// Page heading
    #[arg(long, default_value = flarevision::config::DEFAULT_HEADING)]
    heading: String,

    /// Progress output format
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,

    /// No banner, no progress output
    #[arg(short, long)]
    quiet: bool,
}

fn parse_delimiter(s: &str) -> Result<u8, String> {
    match s {
        "\\t" | "tab" => Ok(b'\t'),
        _ if s.len() == 1 && s.is_ascii() => Ok(s.as_bytes()[0]),
        _ => Err(format!("delimiter must be a single ASCII character, got '{}'", s)),
    }
}

fn prompt_input() -> io::Result<PathBuf> {
    let mut stdout = io::stdout().lock();
    write!(stdout, "{}", PROMPT)?;
    stdout.flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(PathBuf::from(line.trim()))
}

fn run(cli: Cli) -> Result<(), ReportError> {
    let interactive = cli.input.is_none();
    if !cli.quiet && interactive {
        eprintln!("{}", BANNER);
    }

    let input = match cli.input {
        Some(path) => path,
        None => prompt_input().map_err(ReportError::Prompt)?,
    };

    let config = ReportConfig {
        input,
        output: cli.output,
        load: LoadOptions {
            delimiter: cli.delimiter,
            encoding: cli.encoding,
            keep_null_markers: cli.keep_null_markers,
        },
        render: RenderOptions {
            title: cli.title,
            heading: cli.heading,
            escape_html: cli.escape_html,
        },
    };

    let reporter: &dyn Reporter = match (cli.quiet, cli.log_format) {
        (true, _) => &SilentReporter,
        (false, LogFormat::Text) => &ConsoleReporter,
        (false, LogFormat::Json) => &JsonReporter,
    };

    let summary = generate_report(&config, &reporter)?;

    if cli.log_format == LogFormat::Json {
        if let Ok(json) = serde_json::to_string(&summary) {
            println!("{}", json);
        }
    } else if !cli.quiet {
        println!("Searchable HTML file created successfully: {}", summary.output_path);
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    let log_format = cli.log_format;

    if let Err(e) = run(cli) {
        let entry = failure_entry(&e);
        match log_format {
            LogFormat::Json => JsonReporter.log(entry),
            LogFormat::Text => eprintln!("{}", entry.message),
        }
        std::process::exit(1);
    }
}
