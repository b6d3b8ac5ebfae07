use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use trc_core::{KeyFilter, format_metadata};

const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("TRC_BUILD_COMMIT"), ")");

#[derive(Parser, Debug)]
#[command(name = "trc")]
#[command(version = VERSION)]
#[command(
    about = "Inspector for LeCroy .trc oscilloscope traces.",
    long_about = None,
    after_help = "Examples:\n  trc info capture.trc --main\n  trc dump capture.trc -o trace.json --pretty\n  trc dump capture.trc --stdout --metadata-only"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print descriptor metadata as aligned text lines.
    Info {
        /// Path to a .trc trace file
        input: PathBuf,

        /// Print only a curated set of commonly useful fields
        #[arg(long, conflicts_with = "keys")]
        main: bool,

        /// Comma-separated list of field names to print
        #[arg(long, value_delimiter = ',')]
        keys: Vec<String>,
    },
    /// Decode a trace (or its metadata only) to JSON.
    Dump {
        /// Path to a .trc trace file
        input: PathBuf,

        /// Output path (JSON)
        #[arg(short = 'o', long, required_unless_present = "stdout")]
        output: Option<PathBuf>,

        /// Write JSON to stdout
        #[arg(long, conflicts_with = "output")]
        stdout: bool,

        /// Pretty-print JSON output
        #[arg(long, conflicts_with = "compact")]
        pretty: bool,

        /// Compact JSON output (default)
        #[arg(long)]
        compact: bool,

        /// Keep samples as raw ADC counts instead of volts
        #[arg(long)]
        no_scale: bool,

        /// Decode the descriptor only, skip the data arrays
        #[arg(long)]
        metadata_only: bool,

        /// Suppress non-error output
        #[arg(long)]
        quiet: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Info { input, main, keys } => cmd_info(input, main, keys),
        Commands::Dump {
            input,
            output,
            stdout,
            pretty,
            compact,
            no_scale,
            metadata_only,
            quiet,
        } => cmd_dump(
            input,
            output,
            stdout,
            pretty,
            compact,
            no_scale,
            metadata_only,
            quiet,
        ),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = err.hint {
                eprintln!("hint: {}", hint);
            }
            ExitCode::from(2)
        }
    }
}

#[derive(Debug)]
struct CliError {
    message: String,
    hint: Option<String>,
}

impl CliError {
    fn new(message: impl Into<String>, hint: Option<String>) -> Self {
        Self {
            message: message.into(),
            hint,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::new(err.to_string(), None)
    }
}

impl From<trc_core::TrcError> for CliError {
    fn from(err: trc_core::TrcError) -> Self {
        match err {
            trc_core::TrcError::Format(format) => CliError::new(
                format!("not a readable .trc trace: {format}"),
                Some("the file may be corrupt or from an unsupported instrument".to_string()),
            ),
            other => CliError::new(other.to_string(), None),
        }
    }
}

fn cmd_info(input: PathBuf, main: bool, keys: Vec<String>) -> Result<(), CliError> {
    validate_input_file(&input)?;
    let metadata = trc_core::read_metadata_file(&input)?;
    let filter = if !keys.is_empty() {
        KeyFilter::Keys(keys)
    } else if main {
        KeyFilter::Main
    } else {
        KeyFilter::All
    };
    for line in format_metadata(&metadata, &filter) {
        println!("{line}");
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn cmd_dump(
    input: PathBuf,
    output: Option<PathBuf>,
    stdout: bool,
    pretty: bool,
    compact: bool,
    no_scale: bool,
    metadata_only: bool,
    quiet: bool,
) -> Result<(), CliError> {
    validate_input_file(&input)?;
    let output = if stdout {
        None
    } else {
        Some(output.ok_or_else(|| {
            CliError::new(
                "missing output path",
                Some("use -o/--output or --stdout".to_string()),
            )
        })?)
    };

    let json = if metadata_only {
        let metadata = trc_core::read_metadata_file(&input)?;
        serialize(&metadata, pretty, compact)?
    } else {
        let trace = trc_core::read_trace_file(&input, !no_scale)?;
        serialize(&trace, pretty, compact)?
    };

    match output {
        None => {
            print!("{}", json);
            Ok(())
        }
        Some(output) => {
            if let Some(parent) = output.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent).with_context(|| {
                        format!("Failed to create output directory: {}", parent.display())
                    })?;
                }
            }
            fs::write(&output, json)
                .with_context(|| format!("Failed to write output: {}", output.display()))?;
            if !quiet {
                eprintln!("OK: trace written -> {}", output.display());
            }
            Ok(())
        }
    }
}

fn serialize<T: serde::Serialize>(
    value: &T,
    pretty: bool,
    compact: bool,
) -> Result<String, CliError> {
    if pretty && compact {
        return Err(CliError::new(
            "cannot use --pretty and --compact together",
            Some("choose one output format".to_string()),
        ));
    }
    if pretty {
        serde_json::to_string_pretty(value)
            .context("JSON serialization failed")
            .map_err(Into::into)
    } else {
        serde_json::to_string(value)
            .context("JSON serialization failed")
            .map_err(Into::into)
    }
}

fn validate_input_file(input: &PathBuf) -> Result<(), CliError> {
    if !input.exists() {
        return Err(CliError::new(
            format!("input file not found: {}", input.display()),
            Some("use a .trc trace file".to_string()),
        ));
    }
    if !input.is_file() {
        return Err(CliError::new(
            format!("input is not a file: {}", input.display()),
            Some("use a .trc trace file".to_string()),
        ));
    }
    let ext = input
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();
    if ext != "trc" {
        return Err(CliError::new(
            format!("unsupported input format '{}'", input.display()),
            Some("expected a .trc trace file".to_string()),
        ));
    }
    Ok(())
}
