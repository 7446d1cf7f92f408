//! Journal CLI - drive the journal registry from the command line
//!
//! Each subcommand opens the SQLite ledger, runs one dispatcher call and
//! exits. Exit codes distinguish the core error kinds.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod output;

use clap::{CommandFactory, Parser};
use tracing_subscriber::{fmt, EnvFilter};

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::commands::{call, init, list, maintenance, misc};
use crate::config::JournalConfig;
use crate::errors::CliError;

fn main() {
    let cli = Cli::parse();

    let ctx = match AppContext::new(&cli) {
        Ok(ctx) => ctx,
        Err(err) => CliError::from_anyhow(&err).exit(),
    };
    init_tracing(&cli, ctx.config());

    if let Err(err) = run(&ctx, &cli) {
        CliError::from_anyhow(&err).exit();
    }
}

/// Log to stderr so stdout carries only command output.
///
/// Precedence: `RUST_LOG`, then `--verbose`, then `log.filter` from the
/// config file, then `warn`.
fn init_tracing(cli: &Cli, config: &JournalConfig) {
    let fallback = if cli.verbose {
        "debug"
    } else {
        config.log.filter.as_deref().unwrap_or("warn")
    };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn run(ctx: &AppContext, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Some(Commands::Init(args)) => init::handle_init(ctx, args),
        Some(Commands::Invoke(args)) => call::handle_invoke(ctx, args),
        Some(Commands::Query(args)) => call::handle_query(ctx, args),
        Some(Commands::List(args)) => list::handle_list(ctx, args),
        Some(Commands::Check(args)) => maintenance::handle_check(ctx, args),
        Some(Commands::Reconcile(args)) => maintenance::handle_reconcile(ctx, args),
        Some(Commands::Backup(args)) => maintenance::handle_backup(ctx, args),
        Some(Commands::Completions(args)) => misc::handle_completions(args.shell),
        None => {
            Cli::command().print_help()?;
            println!();
            Ok(())
        }
    }
}
