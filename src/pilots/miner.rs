// Miner strategy - park at the mining site, extract, dump what we can't sell
use crate::operations::ShipCommand;
use crate::pilots::{ActionPriority, PilotAction};
use crate::state::GameState;

pub struct MinerConfig {
    pub ship_symbol: String,
    /// Waypoint the miner works at.
    pub site: String,
    /// Goods worth keeping; everything else gets jettisoned.
    pub allowed_goods: Vec<String>,
}

impl MinerConfig {
    pub fn plan(&self, state: &GameState) -> Vec<PilotAction> {
        let Some(ship) = state.get(&self.ship_symbol) else {
            return Vec::new();
        };

        if ship.nav.status == "IN_TRANSIT" {
            // Nothing can be issued while moving.
            return Vec::new();
        }

        if ship.nav.waypoint_symbol != self.site {
            return vec![PilotAction::new(
                ActionPriority::Navigate,
                ShipCommand::Navigate {
                    ship_symbol: self.ship_symbol.clone(),
                    waypoint_symbol: self.site.clone(),
                },
            )];
        }

        if ship.cooldown.remaining_seconds == 0 {
            return vec![PilotAction::new(
                ActionPriority::Extract,
                ShipCommand::Extract {
                    ship_symbol: self.ship_symbol.clone(),
                },
            )];
        }

        // Cooling down at the site: the only useful work is clearing cargo
        // the whitelist doesn't cover. Handing allowed goods to a hauler is
        // the hauler's initiative, not the miner's.
        ship.cargo
            .inventory
            .iter()
            .filter(|item| !self.allowed_goods.iter().any(|good| good == &item.symbol))
            .map(|item| {
                PilotAction::new(
                    ActionPriority::FilterCargo,
                    ShipCommand::Jettison {
                        ship_symbol: self.ship_symbol.clone(),
                        trade_symbol: item.symbol.clone(),
                        units: item.units,
                    },
                )
            })
            .collect()
    }
}
