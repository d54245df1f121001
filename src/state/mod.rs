// State module - fleet cache and cargo bookkeeping
pub mod cargo;
pub mod game_state;

pub use cargo::apply_cargo_delta;
pub use game_state::{GameState, ShipPatch};
