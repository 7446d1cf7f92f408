use tracing::info;

use crate::app::AppContext;
use crate::cli::InitArgs;
use crate::config::{write_config, JournalConfig};

/// Create the ledger if needed and bootstrap it.
///
/// A config file pointing at the ledger is written on first use so later
/// commands find the ledger without `--ledger`.
pub fn handle_init(ctx: &AppContext, args: &InitArgs) -> anyhow::Result<()> {
    let (mut chaincode, path) = ctx.create_chaincode()?;
    chaincode.init(std::slice::from_ref(&args.counter))?;

    let config_path = ctx.config_path();
    let wrote_config = if config_path.exists() {
        false
    } else {
        write_config(config_path, &JournalConfig::new(&path))?;
        info!(config = %config_path.display(), "wrote config");
        true
    };

    if !ctx.quiet() {
        println!("Initialized ledger at {}", path.display());
        if wrote_config {
            println!("Config written to {}", config_path.display());
        }
    }
    Ok(())
}
