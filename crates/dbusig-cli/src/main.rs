mod logging;
mod profile;

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::{Args, Parser, Subcommand, ValueEnum};
use dbusig_core::{SignatureError, SignatureGenerator, SignatureOptions, options_json_schema};
use logging::init_logging;
use profile::OptionArgs;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
enum CliError {
    #[error("{0}")]
    Signature(#[from] SignatureError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("profile error: {0}")]
    Profile(#[from] toml::de::Error),
    #[error("json serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("logging error: {0}")]
    Logging(String),
}

#[derive(Parser, Debug)]
#[command(name = "dbusig", version, about = "Random D-Bus signature generator")]
struct Cli {
    /// Write JSON logs to this file instead of stderr.
    #[arg(long, global = true, value_name = "PATH")]
    log_file: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Draw signatures.
    Generate(GenerateArgs),
    /// Print the JSON Schema of option profiles.
    Schema,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Args, Debug)]
struct GenerateArgs {
    #[command(flatten)]
    options: OptionArgs,
    /// Number of signatures to draw.
    #[arg(long, default_value_t = 10)]
    count: usize,
    /// Seed for the random stream; defaults to the current time.
    #[arg(long)]
    seed: Option<u64>,
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Serialize)]
struct GenerateOutput<'a> {
    seed: u64,
    options: &'a SignatureOptions,
    signatures: Vec<String>,
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref())?;

    match cli.command {
        Command::Generate(args) => run_generate(args),
        Command::Schema => {
            let json = serde_json::to_string_pretty(&options_json_schema())?;
            println!("{json}");
            Ok(())
        }
    }
}

fn run_generate(args: GenerateArgs) -> Result<(), CliError> {
    let options = args.options.resolve()?;
    let generator = SignatureGenerator::new(&options)?;
    let seed = args.seed.unwrap_or_else(clock_seed);
    tracing::info!(event = "generation_started", seed, count = args.count);

    let signatures = generator.sample(seed, args.count);
    match args.format {
        OutputFormat::Text => {
            for signature in &signatures {
                println!("{signature}");
            }
        }
        OutputFormat::Json => {
            let output = GenerateOutput {
                seed,
                options: &options,
                signatures,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    tracing::info!(event = "generation_finished", seed);
    Ok(())
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}
