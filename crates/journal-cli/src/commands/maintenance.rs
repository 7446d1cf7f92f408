//! Index check, reconciliation and backup.

use std::path::Path;

use crate::app::AppContext;
use crate::cli::{BackupArgs, ReportArgs};
use crate::errors::CliError;
use crate::output::{print_json, report_lines};

pub fn handle_check(ctx: &AppContext, args: &ReportArgs) -> anyhow::Result<()> {
    let chaincode = ctx.open_chaincode()?;
    let report = chaincode.registry().verify_index()?;

    if args.json {
        print_json(&report)?;
    } else if report.is_consistent() {
        if !ctx.quiet() {
            println!("Index check: OK");
            for line in report_lines(&report) {
                println!("{}", line);
            }
        }
    } else {
        eprintln!("Index check: FAILED");
        for line in report_lines(&report) {
            eprintln!("{}", line);
        }
    }

    if !report.is_consistent() {
        return Err(CliError::integrity_failed(
            "Index check failed",
            "Hint: Run `journal reconcile` to rebuild the index.",
        )
        .into());
    }
    Ok(())
}

pub fn handle_reconcile(ctx: &AppContext, args: &ReportArgs) -> anyhow::Result<()> {
    let mut chaincode = ctx.open_chaincode()?;
    let report = chaincode.registry_mut().reconcile_index()?;

    if args.json {
        return print_json(&report);
    }
    if !ctx.quiet() {
        if report.repaired {
            println!("Index rebuilt");
        } else {
            println!("Index already consistent");
        }
        for line in report_lines(&report) {
            println!("{}", line);
        }
    }
    Ok(())
}

pub fn handle_backup(ctx: &AppContext, args: &BackupArgs) -> anyhow::Result<()> {
    let chaincode = ctx.open_chaincode()?;
    let destination = Path::new(&args.destination);
    let bytes = chaincode
        .registry()
        .store()
        .ledger()
        .backup_to(destination)?;
    if bytes == 0 {
        return Err(anyhow::anyhow!("Backup failed: zero bytes written"));
    }
    if !ctx.quiet() {
        println!("Backed up ledger to {}", destination.display());
    }
    Ok(())
}
