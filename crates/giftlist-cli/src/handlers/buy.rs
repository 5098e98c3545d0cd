//! Buy command handler.

use anyhow::{Result, bail};

use crate::bootstrap::CliContext;

/// Execute the buy command.
///
/// Fails when the id is malformed, unknown or already bought, so scripts
/// can rely on the exit status.
pub async fn execute(ctx: &CliContext, id: &str) -> Result<()> {
    if ctx.registry.mark_bought(id).await {
        println!("Gift {} marked as bought.", id.trim());
        Ok(())
    } else {
        bail!("Gift '{}' was not marked: unknown, already bought or invalid id", id.trim())
    }
}
