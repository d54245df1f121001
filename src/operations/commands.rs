use std::fmt;

/// The closed set of actions the scheduler can submit to the command
/// channel. Compound entries bundle the posture change (dock/orbit) with the
/// operation that needs it, so a single cycle's winner is always a complete,
/// issuable sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShipCommand {
    /// Orbit, then navigate to the waypoint.
    Navigate {
        ship_symbol: String,
        waypoint_symbol: String,
    },
    Extract {
        ship_symbol: String,
    },
    Jettison {
        ship_symbol: String,
        trade_symbol: String,
        units: i32,
    },
    /// Dock, then refuel.
    Refuel {
        ship_symbol: String,
    },
    /// Orbit the receiving ship, then pull cargo across from the donor.
    Transfer {
        from_symbol: String,
        to_symbol: String,
        trade_symbol: String,
        units: i32,
    },
    /// Dock, then sell.
    Sell {
        ship_symbol: String,
        trade_symbol: String,
        units: i32,
    },
}

impl fmt::Display for ShipCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShipCommand::Navigate { ship_symbol, waypoint_symbol } => {
                write!(f, "navigate {} -> {}", ship_symbol, waypoint_symbol)
            }
            ShipCommand::Extract { ship_symbol } => write!(f, "extract {}", ship_symbol),
            ShipCommand::Jettison { ship_symbol, trade_symbol, units } => {
                write!(f, "jettison {} x{} from {}", trade_symbol, units, ship_symbol)
            }
            ShipCommand::Refuel { ship_symbol } => write!(f, "refuel {}", ship_symbol),
            ShipCommand::Transfer { from_symbol, to_symbol, trade_symbol, units } => {
                write!(f, "transfer {} x{} from {} to {}", trade_symbol, units, from_symbol, to_symbol)
            }
            ShipCommand::Sell { ship_symbol, trade_symbol, units } => {
                write!(f, "sell {} x{} from {}", trade_symbol, units, ship_symbol)
            }
        }
    }
}
