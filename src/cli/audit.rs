//! Audit log commands

use tabled::Tabled;

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::cli::handlers::{report, submit};
use crate::client::models::AuditEntry;
use crate::error::Result;
use crate::output::table;

/// Audit entry for table display
#[derive(Debug, Tabled)]
struct AuditRow {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "METHOD")]
    method: String,
    #[tabled(rename = "PATH")]
    path: String,
    #[tabled(rename = "STATUS")]
    status: String,
    #[tabled(rename = "USER")]
    user: String,
}

impl From<&AuditEntry> for AuditRow {
    fn from(entry: &AuditEntry) -> Self {
        Self {
            id: entry.id,
            method: entry.method.clone(),
            path: entry.path.clone(),
            status: entry.status.clone().unwrap_or_else(|| "-".to_string()),
            user: entry.user.clone().unwrap_or_else(|| "-".to_string()),
        }
    }
}

/// Run the audit list command
pub async fn list(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let outcome = submit(&ctx, "Fetching audit log...", ctx.bridge.read_audit_log()).await?;

    report(&ctx, &outcome, |entries| {
        let rows: Vec<AuditRow> = entries.iter().map(AuditRow::from).collect();
        println!("{}", table::format_table(&rows, "No audit entries in the last hour."));
    })
}
