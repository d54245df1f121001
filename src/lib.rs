// SpaceTraders Fleet Autopilot Library
// One scheduler, many pilots, a single command channel

pub mod models;
pub mod client;
pub mod state;
pub mod refresh;
pub mod pilots;
pub mod operations;
pub mod commander;
pub mod config;
pub mod output;

// Re-export commonly used types
pub use models::ship::{CargoItem, Ship, ShipCargo, ShipCooldown, ShipFuel, ShipMount, ShipNav, ShipRoute};
pub use client::SpaceTradersClient;
pub use commander::{Commander, SCAN_FALLBACK_PRIORITY, load_agent_token, select_action};
pub use config::AutopilotConfig;
pub use operations::{ShipCommand, ShipController};
pub use pilots::{ActionPriority, HaulerConfig, MinerConfig, Pilot, PilotAction};
pub use refresh::{FleetScanner, ShipReloader};
pub use state::{GameState, ShipPatch, apply_cargo_delta};

// Constants
pub const API_BASE_URL: &str = "https://api.spacetraders.io/v2";
pub const AGENT_TOKEN_FILE: &str = "AGENT_TOKEN";
pub const SHIP_PAGE_LIMIT: u32 = 20;
