//! Generic `invoke` / `query` passthrough to the dispatcher.

use crate::app::AppContext;
use crate::cli::CallArgs;
use crate::output::print_payload;

pub fn handle_invoke(ctx: &AppContext, args: &CallArgs) -> anyhow::Result<()> {
    let mut chaincode = ctx.open_chaincode()?;
    let payload = chaincode.invoke(&args.function, &args.args)?;
    if !payload.is_empty() {
        print_payload(&payload)?;
    } else if !ctx.quiet() {
        eprintln!("{}: OK", args.function);
    }
    Ok(())
}

pub fn handle_query(ctx: &AppContext, args: &CallArgs) -> anyhow::Result<()> {
    let chaincode = ctx.open_chaincode()?;
    let payload = chaincode.query(&args.function, &args.args)?;
    print_payload(&payload)
}
