use crate::app::AppContext;
use crate::cli::ListArgs;
use crate::output::{journal_table, print_json};

pub fn handle_list(ctx: &AppContext, args: &ListArgs) -> anyhow::Result<()> {
    let chaincode = ctx.open_chaincode()?;
    let journals = chaincode.registry().list_journals()?;

    if args.json {
        return print_json(&journals);
    }

    if journals.is_empty() {
        if !ctx.quiet() {
            println!("No journals.");
        }
        return Ok(());
    }
    println!("{}", journal_table(&journals));
    Ok(())
}
