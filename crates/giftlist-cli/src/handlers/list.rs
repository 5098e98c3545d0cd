//! List command handler.

use anyhow::Result;
use giftlist_core::Gift;

use crate::bootstrap::CliContext;

/// Execute the list command.
///
/// Unlike the web page, a storage failure here is reported as an error.
pub async fn execute(ctx: &CliContext) -> Result<()> {
    let gifts = ctx.registry.try_list_gifts().await?;
    print!("{}", format_gift_table(&gifts));
    Ok(())
}

/// Render gifts as a fixed-width table, one row per gift.
pub fn format_gift_table(gifts: &[Gift]) -> String {
    if gifts.is_empty() {
        return "No gifts found.\n".to_string();
    }

    let mut out = format!("{:>4}  {:<10} {}\n", "ID", "Status", "Name");
    out.push_str(&"-".repeat(48));
    out.push('\n');

    for gift in gifts {
        let status = if gift.bought { "bought" } else { "available" };
        out.push_str(&format!("{:>4}  {:<10} {}\n", gift.id, status, gift.name));
    }

    let available = gifts.iter().filter(|g| g.is_available()).count();
    out.push_str(&format!("\n{available} of {} still available\n", gifts.len()));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use giftlist_core::GiftId;

    #[test]
    fn test_table_rows_and_summary() {
        let gifts = [
            Gift {
                id: GiftId::new(1).unwrap(),
                name: "Escorredor de Pratos".into(),
                bought: false,
            },
            Gift {
                id: GiftId::new(2).unwrap(),
                name: "Cafeteira".into(),
                bought: true,
            },
        ];

        let table = format_gift_table(&gifts);
        assert!(table.contains("   1  available  Escorredor de Pratos"));
        assert!(table.contains("   2  bought     Cafeteira"));
        assert!(table.ends_with("1 of 2 still available\n"));
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(format_gift_table(&[]), "No gifts found.\n");
    }
}
