// Pilots module - per-ship decision strategies
//
// A pilot inspects the cached fleet state and proposes prioritized candidate
// actions for its ship. It never talks to the network and never holds on to
// a ship record between cycles; every plan starts with a fresh cache lookup.
// The commander picks a single winner per cycle across all pilots.
//
// Priority ladder:
// # Ship necessities
// 50 - refuel
// # Things with cooldowns
// 49 - navigate
// 40 - extract
// # Things that can block
// 39 - load the hauler from a miner
// 38 - jettison unwanted cargo
// 35 - sell at the marketplace
pub mod hauler;
pub mod miner;

pub use hauler::HaulerConfig;
pub use miner::MinerConfig;

use crate::operations::ShipCommand;
use crate::state::GameState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ActionPriority {
    Sell = 35,
    FilterCargo = 38,
    LoadHauler = 39,
    Extract = 40,
    Navigate = 49,
    Refuel = 50,
}

/// One candidate action, produced fresh every cycle and discarded after
/// arbitration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PilotAction {
    pub priority: i32,
    pub command: ShipCommand,
}

impl PilotAction {
    pub fn new(priority: ActionPriority, command: ShipCommand) -> Self {
        Self { priority: priority as i32, command }
    }
}

/// A pilot is configuration plus a ship symbol, nothing more. The cache is
/// handed in at evaluation time.
pub enum Pilot {
    Miner(MinerConfig),
    Hauler(HaulerConfig),
}

impl Pilot {
    pub fn plan(&self, state: &GameState) -> Vec<PilotAction> {
        match self {
            Pilot::Miner(config) => config.plan(state),
            Pilot::Hauler(config) => config.plan(state),
        }
    }

    pub fn ship_symbol(&self) -> &str {
        match self {
            Pilot::Miner(config) => &config.ship_symbol,
            Pilot::Hauler(config) => &config.ship_symbol,
        }
    }
}
