// Fleet state cache - the local copy of every managed ship
use std::collections::HashMap;
use std::sync::Mutex;

use crate::client::SpaceTradersClient;
use crate::models::{Ship, ShipCargo, ShipCooldown, ShipFuel, ShipNav};
use crate::state::cargo::apply_cargo_delta;
use crate::{SHIP_PAGE_LIMIT, o_info};

/// Partial ship update carrying only the fields a command response reported.
/// Fields left as `None` are untouched by the merge.
#[derive(Debug, Default, Clone)]
pub struct ShipPatch {
    pub nav: Option<ShipNav>,
    pub fuel: Option<ShipFuel>,
    pub cargo: Option<ShipCargo>,
    pub cooldown: Option<ShipCooldown>,
}

/// The authoritative local copy of every managed ship, keyed by symbol.
///
/// The cache owns the records outright: readers get clones, and the map is
/// only ever mutated through `upsert`, `apply`, and `credit_cargo`. Both the
/// command path and the background reload tasks funnel through those, so a
/// stale overwrite of one field set is the worst interleaving can do, and
/// the next reconciliation pass heals it.
pub struct GameState {
    ships: Mutex<HashMap<String, Ship>>,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            ships: Mutex::new(HashMap::new()),
        }
    }

    /// Fetch the full ship list and build the cache from it. Runs once,
    /// before the command loop starts. Any failed page is fatal here: the
    /// map is assembled locally and only published whole, never half-built.
    pub async fn preload(client: &SpaceTradersClient) -> Result<Self, Box<dyn std::error::Error>> {
        o_info!("📡 Preloading fleet state...");
        let mut ships = HashMap::new();

        let mut page = 1;
        loop {
            let (page_ships, meta) = client
                .list_ships(page, SHIP_PAGE_LIMIT)
                .await
                .map_err(|e| format!("Fleet preload failed on page {}: {}", page, e))?;

            for ship in page_ships {
                ships.insert(ship.symbol.clone(), ship);
            }

            let max_pages = meta.total.div_ceil(meta.limit.max(1)).max(1);
            if page >= max_pages {
                break;
            }
            page += 1;
        }

        o_info!("📡 Preloaded {} ships", ships.len());
        Ok(Self {
            ships: Mutex::new(ships),
        })
    }

    /// Read one ship. `None` is the explicit not-found result; transient
    /// fetch problems never surface here, only genuinely unknown symbols.
    pub fn get(&self, ship_symbol: &str) -> Option<Ship> {
        self.ships.lock().unwrap().get(ship_symbol).cloned()
    }

    pub fn contains(&self, ship_symbol: &str) -> bool {
        self.ships.lock().unwrap().contains_key(ship_symbol)
    }

    pub fn ship_count(&self) -> usize {
        self.ships.lock().unwrap().len()
    }

    /// Clones of every cached ship, sorted by symbol so iteration order is a
    /// pure function of the cache contents.
    pub fn snapshot(&self) -> Vec<Ship> {
        let mut ships: Vec<Ship> = self.ships.lock().unwrap().values().cloned().collect();
        ships.sort_by(|a, b| a.symbol.cmp(&b.symbol));
        ships
    }

    /// Full-record merge: insert when the symbol is new, overwrite every
    /// field when it isn't. Used by the page scan and the reload timers.
    pub fn upsert(&self, ship: Ship) {
        self.ships.lock().unwrap().insert(ship.symbol.clone(), ship);
    }

    /// Field-level merge of a command result. Only the fields present in the
    /// patch are overwritten; applying the same patch twice lands on the
    /// same state as applying it once. An unknown symbol is an error, not a
    /// retry case: command results only ever target ships the controller
    /// already verified are in the fleet.
    pub fn apply(&self, ship_symbol: &str, patch: ShipPatch) -> Result<(), Box<dyn std::error::Error>> {
        let mut ships = self.ships.lock().unwrap();
        let ship = ships
            .get_mut(ship_symbol)
            .ok_or_else(|| format!("No ship {} in the fleet cache", ship_symbol))?;

        if let Some(nav) = patch.nav {
            ship.nav = nav;
        }
        if let Some(fuel) = patch.fuel {
            ship.fuel = fuel;
        }
        if let Some(cargo) = patch.cargo {
            ship.cargo = cargo;
        }
        if let Some(cooldown) = patch.cooldown {
            ship.cooldown = cooldown;
        }
        Ok(())
    }

    /// Receiving-side bookkeeping for a cargo transfer. The transfer
    /// endpoint reports only the sending ship, so the destination hold is
    /// updated locally through the shared cargo math.
    pub fn credit_cargo(&self, ship_symbol: &str, trade_symbol: &str, units: i32) -> Result<(), Box<dyn std::error::Error>> {
        let mut ships = self.ships.lock().unwrap();
        let ship = ships
            .get_mut(ship_symbol)
            .ok_or_else(|| format!("No ship {} in the fleet cache", ship_symbol))?;

        apply_cargo_delta(&mut ship.cargo, trade_symbol, units);
        Ok(())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
