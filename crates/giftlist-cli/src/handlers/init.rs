//! Init command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;

/// Execute the init command.
///
/// The store is already created and seeded by bootstrap; this only reports
/// what happened.
pub fn execute(ctx: &CliContext) -> Result<()> {
    if ctx.seeded > 0 {
        println!("Seeded {} gifts.", ctx.seeded);
    } else {
        println!("Gift store already populated, nothing to seed.");
    }
    Ok(())
}
