//! Text and table output formatting.

use std::io::Write;

use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};
use journal_core::{IndexReport, Journal};

/// Render journals as a table in index order.
pub fn journal_table(journals: &[Journal]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["#", "CPR", "Name", "Status", "State", "Timestamp"]);
    for (position, journal) in journals.iter().enumerate() {
        table.add_row(vec![
            (position + 1).to_string(),
            journal.cpr.clone(),
            journal.name.clone(),
            journal.status.clone(),
            journal.state.clone(),
            journal.timestamp.clone(),
        ]);
    }
    table
}

/// Summarize an index report, one finding per line.
pub fn report_lines(report: &IndexReport) -> Vec<String> {
    let mut lines = vec![format!("- indexed journals: {}", report.indexed.len())];
    let findings = [
        ("dangling entries", &report.dangling),
        ("duplicate entries", &report.duplicates),
        ("unindexed journals", &report.unindexed),
    ];
    for (label, keys) in findings {
        if keys.is_empty() {
            lines.push(format!("- {}: none", label));
        } else {
            lines.push(format!("- {}: {}", label, keys.join(", ")));
        }
    }
    lines
}

/// Write a payload to stdout verbatim, followed by a newline.
pub fn print_payload(payload: &[u8]) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(payload)?;
    stdout.write_all(b"\n")?;
    stdout.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_lines_list_findings() {
        let report = IndexReport {
            indexed: vec!["1".to_string()],
            dangling: vec!["ghost".to_string()],
            ..IndexReport::default()
        };
        let lines = report_lines(&report);
        assert_eq!(lines[0], "- indexed journals: 1");
        assert_eq!(lines[1], "- dangling entries: ghost");
        assert_eq!(lines[2], "- duplicate entries: none");
    }

    #[test]
    fn test_journal_table_has_row_per_journal() {
        let journals = vec![
            Journal::new("Alice", "1", "open", "active", "t1"),
            Journal::new("Bob", "2", "closed", "idle", "t2"),
        ];
        let rendered = journal_table(&journals).to_string();
        assert!(rendered.contains("Alice"));
        assert!(rendered.contains("Bob"));
        assert!(rendered.contains("Timestamp"));
    }
}
