// Operations module - ship command execution
pub mod commands;
pub mod controller;

pub use commands::ShipCommand;
pub use controller::ShipController;
