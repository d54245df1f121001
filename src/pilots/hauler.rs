// Hauler strategy - shuttle between the mining site and the marketplace
use crate::operations::ShipCommand;
use crate::pilots::{ActionPriority, PilotAction};
use crate::state::GameState;

pub struct HaulerConfig {
    pub ship_symbol: String,
    /// Waypoint the miners work at.
    pub source: String,
    /// Marketplace the cargo is sold at.
    pub destination: String,
    /// Goods worth carrying to market.
    pub sellable_goods: Vec<String>,
    /// Refuel as soon as fuel drops below this.
    pub fuel_threshold: i32,
    /// Head for market once the hold passes this. Kept below a full load so
    /// a few extra units picked up mid-decision don't cause thrashing.
    pub load_threshold: i32,
}

impl HaulerConfig {
    pub fn plan(&self, state: &GameState) -> Vec<PilotAction> {
        let Some(ship) = state.get(&self.ship_symbol) else {
            return Vec::new();
        };

        if ship.nav.status == "IN_TRANSIT" {
            return Vec::new();
        }

        // Running dry preempts everything else the hauler could do.
        if ship.fuel.current < self.fuel_threshold {
            return vec![PilotAction::new(
                ActionPriority::Refuel,
                ShipCommand::Refuel {
                    ship_symbol: self.ship_symbol.clone(),
                },
            )];
        }

        if ship.cargo.units > self.load_threshold && ship.nav.waypoint_symbol != self.destination {
            return vec![PilotAction::new(
                ActionPriority::Navigate,
                ShipCommand::Navigate {
                    ship_symbol: self.ship_symbol.clone(),
                    waypoint_symbol: self.destination.clone(),
                },
            )];
        }

        if ship.cargo.units == 0 && ship.nav.waypoint_symbol != self.source {
            return vec![PilotAction::new(
                ActionPriority::Navigate,
                ShipCommand::Navigate {
                    ship_symbol: self.ship_symbol.clone(),
                    waypoint_symbol: self.source.clone(),
                },
            )];
        }

        let mut actions = Vec::new();

        if ship.nav.waypoint_symbol == self.source {
            // Pull sellable goods off every miner sitting at the site. Each
            // miner/good pair is its own candidate; arbitration picks one.
            for other in state.snapshot() {
                if other.symbol == self.ship_symbol
                    || other.nav.status == "IN_TRANSIT"
                    || other.nav.waypoint_symbol != self.source
                    || !other.has_mining_mount()
                {
                    continue;
                }
                for item in &other.cargo.inventory {
                    if self.sellable_goods.iter().any(|good| good == &item.symbol) {
                        actions.push(PilotAction::new(
                            ActionPriority::LoadHauler,
                            ShipCommand::Transfer {
                                from_symbol: other.symbol.clone(),
                                to_symbol: self.ship_symbol.clone(),
                                trade_symbol: item.symbol.clone(),
                                units: item.units,
                            },
                        ));
                    }
                }
            }
        }

        if ship.nav.waypoint_symbol == self.destination {
            for item in &ship.cargo.inventory {
                actions.push(PilotAction::new(
                    ActionPriority::Sell,
                    ShipCommand::Sell {
                        ship_symbol: self.ship_symbol.clone(),
                        trade_symbol: item.symbol.clone(),
                        units: item.units,
                    },
                ));
            }
        }

        actions
    }
}
