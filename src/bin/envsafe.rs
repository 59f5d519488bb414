// SPDX-License-Identifier: MIT OR Apache-2.0

//! `envsafe` - inspect, validate, update and run commands with dotenv files.

use clap::{Parser, Subcommand, ValueEnum};
use envsafe::prelude::{
    stringify, DotenvConfig, DotenvLoader, EnvError, Environment, LoadOptions, ProcessEnvironment,
};
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::{Command, ExitCode};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Exit code for missing required keys.
const EXIT_MISSING_KEYS: u8 = 2;

#[derive(Debug, Parser)]
#[command(name = "envsafe")]
#[command(about = "Load, validate and update .env files", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  envsafe check\n  envsafe --no-defaults print --format yaml\n  envsafe set GREETING='hello world'\n  envsafe run --safe -- cargo run\n"
)]
struct Cli {
    /// Primary dotenv file [default: .env]
    #[arg(short, long, global = true, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Defaults file [default: .env.defaults]
    #[arg(long, global = true, value_name = "PATH", conflicts_with = "no_defaults")]
    defaults: Option<PathBuf>,

    /// Do not read a defaults file
    #[arg(long, global = true)]
    no_defaults: bool,

    /// Example file listing required keys [default: .env.example]
    #[arg(long, global = true, value_name = "PATH")]
    example: Option<PathBuf>,

    /// Let empty values satisfy required keys
    #[arg(long, global = true)]
    allow_empty_values: bool,

    /// YAML file with loader options; flags override it
    #[arg(long, global = true, value_name = "FILE")]
    options: Option<PathBuf>,

    /// Print loader diagnostics to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Check that every key of the example file is available
    Check,

    /// Print the merged configuration
    Print {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Dotenv)]
        format: OutputFormat,
    },

    /// Update keys that already exist in the dotenv files
    Set {
        /// Assignments to write
        #[arg(value_name = "KEY=VALUE", required = true)]
        assignments: Vec<String>,
    },

    /// Run a command with the configuration in its environment
    Run {
        /// Check the example file before running
        #[arg(long)]
        safe: bool,

        /// Command and its arguments
        #[arg(
            value_name = "COMMAND",
            required = true,
            trailing_var_arg = true,
            allow_hyphen_values = true
        )]
        command: Vec<OsString>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Dotenv,
    Yaml,
}

/// Errors reported by the binary, on top of the library's own.
#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Env(#[from] EnvError),

    #[error("invalid assignment `{0}`: expected KEY=VALUE")]
    InvalidAssignment(String),

    #[error("failed to render YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("failed to execute `{program}`: {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },
}

impl CliError {
    fn exit_code(&self) -> u8 {
        match self {
            CliError::Env(e) if e.is_missing_required_keys() => EXIT_MISSING_KEYS,
            _ => 1,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("envsafe: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: Cli) -> Result<ExitCode, CliError> {
    let options = resolve_options(&cli)?;

    match cli.command {
        Commands::Check => {
            DotenvLoader::new().load(&options.clone().with_safe(true))?;
            println!(
                "All keys from '{}' are available",
                options.example.display()
            );
            Ok(ExitCode::SUCCESS)
        }
        Commands::Print { format } => {
            let config = DotenvLoader::new().load(&options)?;
            match format {
                OutputFormat::Dotenv => print!("{}", stringify(&config)),
                OutputFormat::Yaml => print!("{}", serde_yaml::to_string(&config)?),
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Set { assignments } => {
            let patch = parse_assignments(&assignments)?;
            let config = DotenvLoader::new().update(&patch, &options)?;
            for (key, value) in patch.iter() {
                if config.get(key) == Some(value) {
                    println!("updated {key}");
                } else {
                    println!("skipped {key}: not defined in any dotenv file");
                }
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Run { safe, command } => {
            let config = DotenvLoader::new().load(&run_options(options, safe))?;
            run_command(&config, &command)
        }
    }
}

/// Builds loader options from `--options` and the global flags.
fn resolve_options(cli: &Cli) -> envsafe::domain::Result<LoadOptions> {
    let mut options = match &cli.options {
        Some(path) => LoadOptions::from_yaml_file(path)?,
        None => LoadOptions::default(),
    };

    if let Some(file) = &cli.file {
        options = options.with_path(file);
    }
    if let Some(defaults) = &cli.defaults {
        options = options.with_defaults(defaults);
    }
    if cli.no_defaults {
        options = options.without_defaults();
    }
    if let Some(example) = &cli.example {
        options = options.with_example(example);
    }
    if cli.allow_empty_values {
        options = options.with_allow_empty_values(true);
    }
    Ok(options)
}

/// `--safe` can only turn safe mode on; a `safe: true` options file stands.
fn run_options(options: LoadOptions, safe: bool) -> LoadOptions {
    let safe = options.safe || safe;
    options.with_safe(safe)
}

fn parse_assignments(assignments: &[String]) -> Result<DotenvConfig, CliError> {
    let mut patch = DotenvConfig::new();
    for assignment in assignments {
        match assignment.split_once('=') {
            Some((key, value)) if !key.trim().is_empty() => {
                patch.insert(key.trim(), value);
            }
            _ => return Err(CliError::InvalidAssignment(assignment.clone())),
        }
    }
    Ok(patch)
}

fn run_command(config: &DotenvConfig, command: &[OsString]) -> Result<ExitCode, CliError> {
    let Some((program, args)) = command.split_first() else {
        return Ok(ExitCode::FAILURE);
    };

    let env = ProcessEnvironment::new();
    let mut child = Command::new(program);
    child.args(args);
    for (key, value) in config.iter() {
        if !env.contains(key) {
            child.env(key, value);
        }
    }

    let status = child.status().map_err(|e| CliError::Spawn {
        program: program.to_string_lossy().into_owned(),
        source: e,
    })?;

    // Signals have no code; report them as a generic failure.
    let code = status.code().unwrap_or(1);
    Ok(ExitCode::from(u8::try_from(code).unwrap_or(1)))
}
