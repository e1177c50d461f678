//! # Stock Movement Commands
//!
//! The movements screen: a log of purchases, waste and stocktake entries next
//! to the Sale movements checkout writes.
//!
//! Entries recorded here do not change on-hand; use
//! [`adjust_stock`](super::inventory::adjust_stock) for that.

use cafe_core::ledger;
use cafe_core::validation::{validate_delta, validate_sku};
use cafe_core::{Movement, MovementReason};
use chrono::Utc;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::PosState;

/// Logs a movement entry without touching on-hand.
pub fn record_movement(
    pos: &PosState,
    sku: &str,
    qty: i64,
    reason: &str,
) -> Result<Movement, ApiError> {
    debug!(sku = %sku, qty, reason = %reason, "record_movement command");
    validate_sku(sku)?;
    validate_delta(qty)?;
    let reason: MovementReason = reason.parse()?;

    let movement = pos.with_session_mut(|s| {
        let movement =
            ledger::record_movement(&s.transaction.stock, sku, qty, reason, Utc::now());
        s.transaction.movements.prepend(std::slice::from_ref(&movement));
        movement
    });

    info!(sku = %sku, qty, reason = %reason, "Movement recorded");
    Ok(movement)
}

/// Movement log, most recent first, optionally for a single SKU.
pub fn list_movements(pos: &PosState, sku: Option<&str>) -> Vec<Movement> {
    debug!(sku = sku.unwrap_or(""), "list_movements command");

    pos.with_session(|s| match sku {
        Some(sku) => s.transaction.movements.for_sku(sku).cloned().collect(),
        None => s.transaction.movements.entries().to_vec(),
    })
}

/// Net signed quantity logged for one SKU across all movements.
pub fn net_movement(pos: &PosState, sku: &str) -> Result<i64, ApiError> {
    validate_sku(sku)?;
    debug!(sku = %sku, "net_movement command");

    Ok(pos.with_session(|s| s.transaction.movements.net_quantity(sku)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;
    use cafe_core::TaxRate;

    #[test]
    fn test_recorded_movement_leaves_on_hand_alone() {
        let pos = PosState::new(TaxRate::standard(), seed::initial_stock());

        let movement = record_movement(&pos, "CF-ESP", 6, "Purchase").unwrap();

        assert_eq!(movement.item, "Espresso Beans 1kg");
        assert_eq!(movement.reason, MovementReason::Purchase);
        assert_eq!(pos.with_session(|s| s.transaction.stock.on_hand("CF-ESP")), Some(20));
    }

    #[test]
    fn test_list_is_most_recent_first_and_filterable() {
        let pos = PosState::new(TaxRate::standard(), seed::initial_stock());
        record_movement(&pos, "CF-ESP", 6, "Purchase").unwrap();
        record_movement(&pos, "BK-CRS", -2, "Waste/Spoilage").unwrap();

        let all = list_movements(&pos, None);
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].sku, "BK-CRS");

        assert_eq!(list_movements(&pos, Some("CF-ESP")).len(), 1);
    }

    #[test]
    fn test_net_movement_per_sku() {
        let pos = PosState::new(TaxRate::standard(), seed::initial_stock());
        record_movement(&pos, "CF-ESP", 6, "Purchase").unwrap();
        record_movement(&pos, "CF-ESP", -2, "Waste/Spoilage").unwrap();
        record_movement(&pos, "BK-CRS", 4, "Purchase").unwrap();

        assert_eq!(net_movement(&pos, "CF-ESP").unwrap(), 4);
        assert_eq!(net_movement(&pos, "TE-MAS").unwrap(), 0);
        assert!(net_movement(&pos, "").is_err());
    }

    #[test]
    fn test_record_rejects_oversized_qty() {
        let pos = PosState::new(TaxRate::standard(), seed::initial_stock());
        assert!(record_movement(&pos, "CF-ESP", i64::MAX, "Purchase").is_err());
        assert!(list_movements(&pos, None).is_empty());
    }

    #[test]
    fn test_unstocked_sku_uses_sku_as_name() {
        let pos = PosState::new(TaxRate::standard(), seed::initial_stock());
        let movement = record_movement(&pos, "TE-MAS", 10, "Purchase").unwrap();
        assert_eq!(movement.item, "TE-MAS");
    }
}
