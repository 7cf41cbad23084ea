//! @ai:module:intent CLI entry point for the Simplex linter
//! @ai:module:layer presentation
//! @ai:module:public_api main
//! @ai:module:depends_on linter, builder, config, output

use clap::{Parser, Subcommand, ValueEnum};
use simplex_lint::{linter, output, parse_with, LintConfig, LintReport, OutputFormat};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "simplex-lint")]
#[command(author, version, about = "Validate Simplex specifications for autonomous agents")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Lint a spec file, a directory of specs, or stdin (`-`)
    Lint {
        /// Path to file or directory to lint
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Path to a TOML configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Maximum FUNCTION blocks before warning
        #[arg(long)]
        max_functions: Option<usize>,

        /// Maximum inputs per function
        #[arg(long)]
        max_inputs: Option<usize>,

        /// Maximum characters per rule item
        #[arg(long)]
        max_rule_length: Option<usize>,

        /// Maximum items per RULES block
        #[arg(long)]
        max_rules: Option<usize>,

        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: Format,
    },

    /// Parse a spec and show its functions, data blocks, and constraints
    Parse {
        /// Path to file (`-` for stdin)
        path: PathBuf,

        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: Format,
    },

    /// Write the default configuration
    Init {
        /// Output path for config file
        #[arg(short, long, default_value = "simplex-lint.toml")]
        output: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
    JsonPretty,
}

impl From<Format> for OutputFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Text => OutputFormat::Text,
            Format::Json => OutputFormat::Json,
            Format::JsonPretty => OutputFormat::JsonPretty,
        }
    }
}

/// Limits given on the command line; each one overrides the loaded config.
struct LimitOverrides {
    max_functions: Option<usize>,
    max_inputs: Option<usize>,
    max_rule_length: Option<usize>,
    max_rules: Option<usize>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("simplex_lint=warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Lint {
            path,
            config,
            max_functions,
            max_inputs,
            max_rule_length,
            max_rules,
            format,
        } => {
            let overrides = LimitOverrides {
                max_functions,
                max_inputs,
                max_rule_length,
                max_rules,
            };
            run_lint(&path, config.as_deref(), overrides, format.into())
        }

        Commands::Parse { path, format } => match linter::read_source(&path) {
            Ok(text) => {
                let spec = parse_with(&text, &LintConfig::default().vocabulary);
                println!("{}", output::format_parsed_spec(&spec, format.into()));
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                ExitCode::from(2)
            }
        },

        Commands::Init { output } => match LintConfig::default().save(&output) {
            Ok(()) => {
                println!("Wrote default configuration to {}", output.display());
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                ExitCode::from(2)
            }
        },
    }
}

/// @ai:intent Lint a path and print the report
/// @ai:effects fs:read, io
fn run_lint(
    path: &Path,
    config_path: Option<&Path>,
    overrides: LimitOverrides,
    format: OutputFormat,
) -> ExitCode {
    let mut config = match config_path {
        Some(config_path) => match LintConfig::load(config_path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::from(2);
            }
        },
        None => LintConfig::default(),
    };

    if let Some(max) = overrides.max_functions {
        config.max_functions = max;
    }
    if let Some(max) = overrides.max_inputs {
        config.max_inputs = max;
    }
    if let Some(max) = overrides.max_rule_length {
        config.max_rule_length = max;
    }
    if let Some(max) = overrides.max_rules {
        config.max_rules = max;
    }

    let report = if path.is_dir() {
        linter::lint_directory(path, &config)
    } else {
        linter::lint_file(path, &config).map(|file| {
            let mut report = LintReport::default();
            report.push(file);
            report
        })
    };

    match report {
        Ok(report) => {
            println!("{}", output::format_report(&report, format));

            if report.passed() {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(2)
        }
    }
}
