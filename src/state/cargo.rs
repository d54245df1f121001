// Cargo inventory math shared by every merge path
use crate::models::{CargoItem, ShipCargo};

/// Apply a signed unit delta for one trade symbol to a cargo hold.
///
/// This is the single place the cargo bookkeeping rules live: at most one
/// inventory entry per symbol, entries that reach zero are removed rather
/// than retained, and `cargo.units` is recomputed from the inventory so the
/// total can never drift from the entries.
pub fn apply_cargo_delta(cargo: &mut ShipCargo, trade_symbol: &str, delta: i32) {
    if delta == 0 {
        return;
    }

    if let Some(index) = cargo.inventory.iter().position(|item| item.symbol == trade_symbol) {
        cargo.inventory[index].units += delta;
        if cargo.inventory[index].units <= 0 {
            cargo.inventory.remove(index);
        }
    } else if delta > 0 {
        // The transfer endpoint only reports the sending side, so entries
        // created here have no market name attached yet. A reconciliation
        // fetch fills in the real one.
        cargo.inventory.push(CargoItem {
            symbol: trade_symbol.to_string(),
            name: trade_symbol.to_string(),
            description: String::new(),
            units: delta,
        });
    }

    cargo.units = cargo.inventory.iter().map(|item| item.units).sum();
}
