//! Trainmeter CLI - Command-line interface for trainmeter
//!
//! Commands:
//! - process: Compute summaries for a batch of reading packages
//! - run: Process streaming NDJSON input from stdin
//! - validate: Validate reading package input

use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::io::{self, BufRead, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use trainmeter::schema::{self, ReadingPackage};
use trainmeter::summary::Summary;
use trainmeter::{process_package, process_packages, process_packages_lossy, TRAINMETER_VERSION};

/// Trainmeter - workout metrics calculator
#[derive(Parser)]
#[command(name = "trainmeter")]
#[command(version = TRAINMETER_VERSION)]
#[command(about = "Compute distance, mean speed and calories from raw workout readings", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute summaries for a batch of reading packages
    Process {
        /// Input file path (use - for stdin)
        #[arg(short, long)]
        input: PathBuf,

        /// Output file path (use - for stdout)
        #[arg(short, long, default_value = "-")]
        output: PathBuf,

        /// Input format
        #[arg(long, default_value = "ndjson")]
        input_format: InputFormat,

        /// Output format
        #[arg(long, default_value = "text")]
        output_format: OutputFormat,

        /// Skip failing packages (reported on stderr) instead of aborting
        #[arg(long)]
        keep_going: bool,
    },

    /// Process streaming NDJSON input from stdin, one summary per line
    Run {
        /// Output format
        #[arg(long, default_value = "text")]
        output_format: OutputFormat,

        /// Flush output after each record
        #[arg(long, default_value = "true")]
        flush: bool,
    },

    /// Validate reading package input
    Validate {
        /// Input file path (use - for stdin)
        #[arg(short, long)]
        input: PathBuf,

        /// Input format
        #[arg(long, default_value = "ndjson")]
        input_format: InputFormat,

        /// Output validation report as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, ValueEnum)]
enum InputFormat {
    /// Newline-delimited JSON (one package per line)
    Ndjson,
    /// JSON array of packages
    Json,
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// Fixed display line per summary
    Text,
    /// Newline-delimited JSON (one summary record per line)
    Ndjson,
    /// JSON array of summary records
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!(
                "{}",
                serde_json::to_string(&CliError::from(e))
                    .unwrap_or_else(|_| "Unknown error".to_string())
            );
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), TrainmeterCliError> {
    match cli.command {
        Commands::Process {
            input,
            output,
            input_format,
            output_format,
            keep_going,
        } => cmd_process(&input, &output, input_format, output_format, keep_going),

        Commands::Run {
            output_format,
            flush,
        } => cmd_run(output_format, flush),

        Commands::Validate {
            input,
            input_format,
            json,
        } => cmd_validate(&input, input_format, json),
    }
}

fn cmd_process(
    input: &PathBuf,
    output: &PathBuf,
    input_format: InputFormat,
    output_format: OutputFormat,
    keep_going: bool,
) -> Result<(), TrainmeterCliError> {
    let input_data = read_input(input)?;
    let packages = parse_packages(&input_data, &input_format)?;

    if packages.is_empty() {
        return Err(TrainmeterCliError::NoPackages);
    }

    let summaries = if keep_going {
        let (summaries, failures) = process_packages_lossy(&packages);
        for (index, error) in &failures {
            eprintln!("package {}: {}", index, error);
        }
        summaries
    } else {
        process_packages(&packages)?
    };

    let output_data = format_output(&summaries, &output_format)?;

    if output.to_string_lossy() == "-" {
        print!("{}", output_data);
    } else {
        fs::write(output, output_data)?;
    }

    Ok(())
}

fn cmd_run(output_format: OutputFormat, flush: bool) -> Result<(), TrainmeterCliError> {
    if atty::is(atty::Stream::Stdin) {
        eprintln!("reading NDJSON packages from stdin (one per line, Ctrl-D to finish)");
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = line?;
        let trimmed = line.trim();

        if trimmed.is_empty() {
            continue;
        }

        let package: ReadingPackage = serde_json::from_str(trimmed)?;
        let summary = process_package(&package)?;

        match output_format {
            OutputFormat::Text => writeln!(stdout, "{}", summary.message())?,
            // streaming output is one record per line either way
            OutputFormat::Ndjson | OutputFormat::Json => {
                writeln!(stdout, "{}", summary.to_json()?)?
            }
        }

        if flush {
            stdout.flush()?;
        }
    }

    Ok(())
}

fn cmd_validate(
    input: &PathBuf,
    input_format: InputFormat,
    json: bool,
) -> Result<(), TrainmeterCliError> {
    let input_data = read_input(input)?;
    let packages = parse_packages(&input_data, &input_format)?;

    let failures = schema::validate_packages(&packages);

    let report = ValidationReport {
        total_packages: packages.len(),
        valid_packages: packages.len() - failures.len(),
        invalid_packages: failures.len(),
        errors: failures
            .iter()
            .map(|f| ValidationErrorDetail {
                index: f.index,
                workout_type: f.workout_type.clone(),
                error: f.error.to_string(),
            })
            .collect(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Validation Report");
        println!("=================");
        println!("Total packages:   {}", report.total_packages);
        println!("Valid packages:   {}", report.valid_packages);
        println!("Invalid packages: {}", report.invalid_packages);

        if !report.errors.is_empty() {
            println!("\nErrors:");
            for err in &report.errors {
                println!("  - Package {} ({}): {}", err.index, err.workout_type, err.error);
            }
        }
    }

    if report.invalid_packages > 0 {
        Err(TrainmeterCliError::ValidationFailed(report.invalid_packages))
    } else {
        Ok(())
    }
}

// Helper functions

fn read_input(input: &PathBuf) -> Result<String, TrainmeterCliError> {
    if input.to_string_lossy() == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        Ok(fs::read_to_string(input)?)
    }
}

fn parse_packages(
    input_data: &str,
    input_format: &InputFormat,
) -> Result<Vec<ReadingPackage>, TrainmeterCliError> {
    let packages = match input_format {
        InputFormat::Ndjson => schema::parse_ndjson(input_data)?,
        InputFormat::Json => schema::parse_array(input_data)?,
    };
    Ok(packages)
}

fn format_output(
    summaries: &[Summary],
    format: &OutputFormat,
) -> Result<String, TrainmeterCliError> {
    match format {
        OutputFormat::Text => {
            let mut lines: Vec<String> = Vec::new();
            for summary in summaries {
                lines.push(summary.message());
            }
            Ok(lines.join("\n") + "\n")
        }
        OutputFormat::Ndjson => {
            let mut lines: Vec<String> = Vec::new();
            for summary in summaries {
                lines.push(summary.to_json()?);
            }
            Ok(lines.join("\n") + "\n")
        }
        OutputFormat::Json => Ok(serde_json::to_string_pretty(summaries)?),
    }
}

// Error types

#[derive(Debug)]
enum TrainmeterCliError {
    Io(io::Error),
    Tracker(trainmeter::TrackerError),
    Json(serde_json::Error),
    NoPackages,
    ValidationFailed(usize),
}

impl From<io::Error> for TrainmeterCliError {
    fn from(e: io::Error) -> Self {
        TrainmeterCliError::Io(e)
    }
}

impl From<trainmeter::TrackerError> for TrainmeterCliError {
    fn from(e: trainmeter::TrackerError) -> Self {
        TrainmeterCliError::Tracker(e)
    }
}

impl From<serde_json::Error> for TrainmeterCliError {
    fn from(e: serde_json::Error) -> Self {
        TrainmeterCliError::Json(e)
    }
}

#[derive(serde::Serialize)]
struct CliError {
    code: String,
    message: String,
    hint: Option<String>,
}

impl From<TrainmeterCliError> for CliError {
    fn from(e: TrainmeterCliError) -> Self {
        match e {
            TrainmeterCliError::Io(e) => CliError {
                code: "IO_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Check file paths and permissions".to_string()),
            },
            TrainmeterCliError::Tracker(e) => CliError {
                code: "TRACKER_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Run 'trainmeter validate' for details".to_string()),
            },
            TrainmeterCliError::Json(e) => CliError {
                code: "JSON_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Check JSON syntax".to_string()),
            },
            TrainmeterCliError::NoPackages => CliError {
                code: "NO_PACKAGES".to_string(),
                message: "No reading packages found in input".to_string(),
                hint: Some("Ensure input file is not empty".to_string()),
            },
            TrainmeterCliError::ValidationFailed(count) => CliError {
                code: "VALIDATION_FAILED".to_string(),
                message: format!("{} packages failed validation", count),
                hint: Some("Fix validation errors and retry".to_string()),
            },
        }
    }
}

// Report types

#[derive(serde::Serialize)]
struct ValidationReport {
    total_packages: usize,
    valid_packages: usize,
    invalid_packages: usize,
    errors: Vec<ValidationErrorDetail>,
}

#[derive(serde::Serialize)]
struct ValidationErrorDetail {
    index: usize,
    workout_type: String,
    error: String,
}
