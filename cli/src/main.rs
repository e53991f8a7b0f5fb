use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use lcg_core_rs::{validate_parameters, LcgEngine};
use serde_json::json;
use tracing_subscriber::EnvFilter;

mod config;
mod interactive;
mod report;

use config::ParamArgs;

/// Exit status when parameters fail validation and `--force` was not given
const EXIT_NOT_FULL_PERIOD: u8 = 2;

#[derive(Parser, Debug)]
#[command(name = "lcg", version, about = "Linear congruential generator with Hull-Dobell validation")]
struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    json: bool,
    #[arg(short, long, global = true, help = "Enable debug logging on stderr")]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check parameters against the Hull-Dobell conditions
    Check {
        #[command(flatten)]
        params: ParamArgs,
    },
    /// Validate, then print the seed followed by generated values
    Generate {
        #[command(flatten)]
        params: ParamArgs,
        /// Number of values to print (defaults to m)
        #[arg(long)]
        count: Option<u64>,
        /// Print values divided by m, in [0, 1)
        #[arg(long, default_value_t = false)]
        normalized: bool,
        /// Generate even if a full period is not guaranteed
        #[arg(long, default_value_t = false)]
        force: bool,
    },
    /// Prompt for parameters on stdin until they guarantee a full period
    Interactive,
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<ExitCode> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Check { params } => {
            let params = params.resolve_parameters()?;
            let report = validate_parameters(&params);
            if cli.json {
                serde_json::to_writer_pretty(&mut out, &report)?;
                writeln!(out)?;
            } else {
                report::write_report(&mut out, &report)?;
            }
            Ok(if report.is_full_period() {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(EXIT_NOT_FULL_PERIOD)
            })
        }

        Commands::Generate {
            params,
            count,
            normalized,
            force,
        } => {
            let resolved = params.resolve()?;
            let report = validate_parameters(&resolved.params);
            if !report.is_full_period() && !force {
                if cli.json {
                    let body = json!({ "report": report, "refused": true });
                    serde_json::to_writer_pretty(&mut out, &body)?;
                    writeln!(out)?;
                } else {
                    report::write_report(&mut io::stderr(), &report)?;
                }
                eprintln!("Refusing to generate: full period not guaranteed (use --force to override)");
                return Ok(ExitCode::from(EXIT_NOT_FULL_PERIOD));
            }
            if !report.is_full_period() {
                tracing::warn!(failed = ?report.failed_conditions(), "generating without a full-period guarantee");
            }

            let mut engine = LcgEngine::from_parameters(resolved.params, resolved.seed)?;
            let count = count.unwrap_or(resolved.params.modulus().unsigned_abs());

            let mut out = io::BufWriter::new(out);
            if cli.json {
                report::write_sequence_json(&mut out, &report, &mut engine, count, normalized)?;
                writeln!(out)?;
            } else {
                report::write_sequence(&mut out, &mut engine, count, normalized)?;
            }
            out.flush()?;
            Ok(ExitCode::SUCCESS)
        }

        Commands::Interactive => {
            if cli.json {
                bail!("--json is not supported in interactive mode");
            }
            let stdin = io::stdin();
            interactive::Prompter::new(stdin.lock(), &mut out)
                .run()
                .context("interactive session failed")?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn is_broken_pipe(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        let kind = cause
            .downcast_ref::<io::Error>()
            .map(io::Error::kind)
            .or_else(|| {
                cause
                    .downcast_ref::<serde_json::Error>()
                    .and_then(serde_json::Error::io_error_kind)
            });
        kind == Some(io::ErrorKind::BrokenPipe)
    })
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        // Reader went away (e.g. `lcg generate ... | head`)
        Err(err) if is_broken_pipe(&err) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
