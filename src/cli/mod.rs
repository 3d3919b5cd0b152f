//! Command-line interface module

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use crate::conversion::config::DEFAULT_INPUT_TAG_DELIMITER;
use crate::conversion::{ConversionConfig, ConversionResult};
use crate::error::ConversionError;
use crate::parser::CsvSource;

pub mod output;

/// Main CLI arguments
#[derive(Parser, Debug, Clone)]
#[command(name = "pocket2bookmark")]
#[command(about = "Convert a Pocket CSV file to a Netscape Bookmark HTML file")]
#[command(version)]
#[command(long_about = None)]
pub struct Args {
    /// Input CSV file (default: stdin, or "-")
    #[arg()]
    pub input: Option<PathBuf>,

    /// Output HTML file (default: stdout, or "-")
    #[arg()]
    pub output: Option<PathBuf>,

    /// Character used as separator of tags in the input
    #[arg(short, long, default_value_t = DEFAULT_INPUT_TAG_DELIMITER)]
    pub separator: char,

    /// Character used as separator of tags in the output
    #[arg(long, default_value_t = ',')]
    pub output_separator: char,

    /// CSV field delimiter
    #[arg(short = 'd', long, default_value_t = ',')]
    pub field_delimiter: char,

    /// Treat the first row as a bookmark instead of a header
    #[arg(long)]
    pub keep_header: bool,

    /// Heading shown in the document (default: the input path)
    #[arg(short, long)]
    pub title: Option<String>,

    /// Maximum input size (e.g., 100MB); unlimited when omitted
    #[arg(long)]
    pub memory_limit: Option<String>,

    /// Allow the output file to replace the input file
    #[arg(long)]
    pub force: bool,

    /// Output conversion statistics to stderr
    #[arg(long)]
    pub stats: bool,

    /// Statistics format
    #[arg(long, value_enum, default_value_t = StatsFormat::Text)]
    pub stats_format: StatsFormat,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Statistics output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq)]
pub enum StatsFormat {
    Text,
    Json,
}

/// CLI configuration
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub args: Args,
    pub conversion_config: ConversionConfig,
}

impl CliConfig {
    /// Create CLI configuration from arguments
    pub fn from_args(args: Args) -> ConversionResult<Self> {
        let conversion_config = Self::create_conversion_config(&args)?;

        Ok(Self {
            args,
            conversion_config,
        })
    }

    /// Create conversion configuration from CLI arguments
    fn create_conversion_config(args: &Args) -> ConversionResult<ConversionConfig> {
        let mut config = ConversionConfig::default()
            .with_skip_header(!args.keep_header)
            .with_tag_delimiters(args.separator, args.output_separator)
            .with_field_delimiter(args.field_delimiter)
            .map_err(ConversionError::configuration)?;

        if let Some(limit) = args.memory_limit.as_deref() {
            config = config.with_memory_limit(parse_memory_limit(limit)?);
        }

        // Validate configuration
        config.validate().map_err(ConversionError::configuration)?;

        Ok(config)
    }

    /// Resolved input source
    pub fn source(&self) -> CsvSource {
        CsvSource::from_arg(self.args.input.as_ref())
    }

    /// Resolved output target
    pub fn target(&self) -> output::OutputTarget {
        output::OutputTarget::from_arg(self.args.output.as_ref())
    }

    /// Heading for the `<H2>` element
    pub fn subtitle(&self) -> String {
        self.args
            .title
            .clone()
            .unwrap_or_else(|| self.source().subtitle())
    }

    /// Check if quiet mode is enabled
    pub fn is_quiet(&self) -> bool {
        self.args.quiet
    }

    /// Check if stats output is requested
    pub fn want_stats(&self) -> bool {
        self.args.stats
    }

    /// Get input source description
    pub fn input_description(&self) -> String {
        self.source().description()
    }

    /// Get output destination description
    pub fn output_description(&self) -> String {
        self.target().description()
    }
}

/// Install the stderr log subscriber. `RUST_LOG` takes precedence over the flags.
pub fn init_logging(verbose: bool, quiet: bool) {
    let default_level = if verbose {
        "debug"
    } else if quiet {
        "error"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // Ignore the error raised when a subscriber is already installed (tests)
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// Parse memory limit string (e.g., "100MB", "1GB", "500KB")
fn parse_memory_limit(limit: &str) -> ConversionResult<usize> {
    let limit_str = limit.trim().to_uppercase();
    let invalid = || ConversionError::configuration(format!("Invalid memory limit: {}", limit_str));

    let (number, multiplier) = if let Some(size) = limit_str.strip_suffix("GB") {
        (size, 1024.0 * 1024.0 * 1024.0)
    } else if let Some(size) = limit_str.strip_suffix("MB") {
        (size, 1024.0 * 1024.0)
    } else if let Some(size) = limit_str.strip_suffix("KB") {
        (size, 1024.0)
    } else if let Some(size) = limit_str.strip_suffix('B') {
        return size.trim().parse::<usize>().map_err(|_| invalid());
    } else {
        // Assume bytes
        return limit_str.parse::<usize>().map_err(|_| invalid());
    };

    let value = number.trim().parse::<f64>().map_err(|_| invalid())?;
    if !value.is_finite() || value < 0.0 {
        return Err(invalid());
    }
    Ok((value * multiplier) as usize)
}

/// CLI utilities and helpers
pub struct CliUtils;

impl CliUtils {
    /// Format a file size in human-readable format
    pub fn format_file_size(bytes: u64) -> String {
        const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
        let mut size = bytes as f64;
        let mut unit_index = 0;

        while size >= 1024.0 && unit_index < UNITS.len() - 1 {
            size /= 1024.0;
            unit_index += 1;
        }

        if unit_index == 0 {
            format!("{} {}", bytes, UNITS[unit_index])
        } else {
            format!("{:.1} {}", size, UNITS[unit_index])
        }
    }

    /// Format a duration in human-readable format
    pub fn format_duration(duration: Duration) -> String {
        let total_millis = duration.as_millis();

        if total_millis < 1000 {
            format!("{}ms", total_millis)
        } else if total_millis < 60_000 {
            format!("{:.1}s", total_millis as f64 / 1000.0)
        } else {
            let minutes = total_millis / 60_000;
            let seconds = (total_millis % 60_000) / 1000;
            format!("{}m {}s", minutes, seconds)
        }
    }

    /// Show a success message on stderr (if not in quiet mode).
    /// stdout may be carrying the document itself.
    pub fn show_success(message: &str, quiet: bool) {
        if !quiet {
            eprintln!("✓ {}", message);
        }
    }

    /// Show an error message
    pub fn show_error(message: &str) {
        eprintln!("✗ {}", message);
    }
}

/// Handle CLI errors with user-friendly messages
pub fn handle_error(error: &ConversionError) {
    CliUtils::show_error(&error.user_message());

    // Provide helpful suggestions
    match error {
        ConversionError::MalformedRecord { .. } => {
            eprintln!("\nTip: Pocket exports start with a header row; use --keep-header only if yours does not");
        }
        ConversionError::InputTooLarge { .. } => {
            eprintln!("\nTip: Use --memory-limit to increase the input size allowance");
        }
        ConversionError::Csv { .. } => {
            eprintln!("\nTip: Use --field-delimiter if the file is not comma-separated");
        }
        _ => {}
    }

    eprintln!("\nTry 'pocket2bookmark --help' for usage information.");
}
