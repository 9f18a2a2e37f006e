//! Audit log CLI command

use clap::Args;

use crate::audit::{AuditLogger, EntityType};
use crate::error::ShopResult;

/// Arguments for `shopfront audit`
#[derive(Args)]
pub struct AuditArgs {
    /// Number of most recent entries to show
    #[arg(short, long, default_value_t = 20)]
    pub limit: usize,

    /// Only show entries about this kind of entity
    #[arg(short, long, value_enum)]
    pub entity: Option<EntityType>,
}

/// Handle `shopfront audit`
pub fn handle_audit_command(logger: &AuditLogger, args: AuditArgs) -> ShopResult<()> {
    let entries = logger.read_recent_of(args.limit, args.entity)?;
    if entries.is_empty() {
        println!("No audit entries.");
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry.format_human_readable());
    }
    println!("\nShowing {} entries from {}", entries.len(), logger.path().display());

    Ok(())
}
