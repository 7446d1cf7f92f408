use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use journal_core::VERSION;

/// Journal registry - uniquely keyed journal records on a key-value ledger
#[derive(Parser)]
#[command(name = "journal")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the ledger file
    #[arg(short, long, global = true, env = "JOURNAL_LEDGER_PATH")]
    pub ledger: Option<String>,

    /// Path to the config file
    #[arg(long, global = true, env = "JOURNAL_CONFIG")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Log at debug level (RUST_LOG still takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Arguments for the `init` command
#[derive(Args)]
pub struct InitArgs {
    /// Initial counter value (decimal integer)
    #[arg(value_name = "COUNTER", allow_hyphen_values = true)]
    pub counter: String,
}

/// Arguments for the `invoke` and `query` commands
#[derive(Args)]
pub struct CallArgs {
    /// Function name (e.g. init_journal, write, read)
    #[arg(value_name = "FUNCTION")]
    pub function: String,

    /// Positional string arguments passed to the function
    #[arg(value_name = "ARGS", trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

/// Arguments for the `list` command
#[derive(Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `check` and `reconcile` commands
#[derive(Args)]
pub struct ReportArgs {
    /// Output the report as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `backup` command
#[derive(Args)]
pub struct BackupArgs {
    /// Destination path
    #[arg(value_name = "DEST")]
    pub destination: String,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the ledger if needed, seed the counter and clear the index
    Init(InitArgs),

    /// Run a mutating function (init, write, init_journal, reconcile_index)
    Invoke(CallArgs),

    /// Run a read-only function (read, list_journals, verify_index)
    Query(CallArgs),

    /// List journals in index order
    List(ListArgs),

    /// Check that the index matches the stored journals
    Check(ReportArgs),

    /// Rebuild the index from the stored journals
    Reconcile(ReportArgs),

    /// Write a consistent copy of the ledger
    Backup(BackupArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}
