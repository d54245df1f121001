// Refresh module - keeps the fleet cache reconciled with the server
pub mod reloader;
pub mod scanner;

pub use reloader::ShipReloader;
pub use scanner::FleetScanner;
