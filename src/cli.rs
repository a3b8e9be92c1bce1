//! Command-line interface for mason
//!
//! Two inspection commands over the standard lifecycle registry:
//! `lifecycles` lists registered lifecycle ids, `phases` prints the
//! canonical phase order of one lifecycle.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::debug;

use crate::exit_codes::{ExitCode, error_to_exit_code};
use crate::logging;
use mason_lifecycle::Lifecycle;
use mason_registry::LifecycleRegistry;

/// mason - build lifecycle registry and phase-order compiler
#[derive(Parser)]
#[command(name = "mason")]
#[command(about = "Inspect build lifecycles and their canonical phase order")]
#[command(long_about = r#"
mason compiles declarative lifecycle definitions (phase trees with
ordering links and legacy aliases) into canonical phase sequences.

EXAMPLES:
  # List the registered lifecycles
  mason lifecycles

  # Print the canonical phase order of the default lifecycle
  mason phases default

  # Same, as JSON
  mason phases default --json

  # Raise mason's own log level to debug
  mason phases site --verbose
"#)]
#[command(version)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List registered lifecycle ids
    Lifecycles {
        /// Emit JSON instead of plain text
        #[arg(long)]
        json: bool,
    },
    /// Print the canonical phase order of one lifecycle
    Phases {
        /// Lifecycle id (e.g. "default", "clean")
        lifecycle: String,

        /// Emit JSON instead of plain text
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
struct LifecyclesOutput<'a> {
    lifecycles: Vec<&'a str>,
}

#[derive(Serialize)]
struct PhasesOutput<'a> {
    lifecycle: &'a str,
    phases: Vec<String>,
}

/// Run the CLI. Handles all output, including errors; the caller only
/// maps the returned code to a process exit.
///
/// # Errors
///
/// Returns the exit code to terminate with on any failure.
pub fn run() -> Result<(), ExitCode> {
    let cli = Cli::parse();

    if let Err(err) = logging::init_tracing(cli.verbose) {
        eprintln!("warning: failed to initialize logging: {err}");
    }

    let registry = match LifecycleRegistry::standard() {
        Ok(registry) => registry,
        Err(err) => {
            eprintln!("error: {err}");
            return Err(error_to_exit_code(&err));
        }
    };

    match cli.command {
        Commands::Lifecycles { json } => cmd_lifecycles(&registry, json),
        Commands::Phases { lifecycle, json } => cmd_phases(&registry, &lifecycle, json),
    }
}

fn cmd_lifecycles(registry: &LifecycleRegistry, json: bool) -> Result<(), ExitCode> {
    let ids: Vec<&str> = registry.ids().collect();
    debug!(count = ids.len(), "listing lifecycles");

    if json {
        print_json(&LifecyclesOutput { lifecycles: ids })?;
    } else {
        for id in ids {
            println!("{id}");
        }
    }
    Ok(())
}

fn cmd_phases(registry: &LifecycleRegistry, lifecycle: &str, json: bool) -> Result<(), ExitCode> {
    let Some(found) = registry.get(lifecycle) else {
        let known: Vec<&str> = registry.ids().collect();
        eprintln!(
            "error: unknown lifecycle '{lifecycle}' (known: {})",
            known.join(", ")
        );
        return Err(ExitCode::CLI_ARGS);
    };

    let phases = match found {
        // Legacy flat lifecycles have no computable graph; their
        // declared flat order is all there is.
        Lifecycle::Map(map) => map
            .phases()
            .iter()
            .map(|phase| phase.name().to_string())
            .collect(),
        Lifecycle::Tree(_) => match registry.compute_phases(found) {
            Ok(phases) => phases,
            Err(err) => {
                eprintln!("error: {err}");
                return Err(error_to_exit_code(&err));
            }
        },
    };

    if json {
        print_json(&PhasesOutput {
            lifecycle,
            phases,
        })?;
    } else {
        for phase in &phases {
            println!("{phase}");
        }
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<(), ExitCode> {
    match to_json(value) {
        Ok(rendered) => {
            println!("{rendered}");
            Ok(())
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            Err(ExitCode::INTERNAL)
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("failed to serialize output as JSON")
}
