// Models module - All data structures and API models

pub mod ship;
pub mod transaction;
pub mod responses;

// Re-export all models for easier imports
pub use ship::*;
pub use transaction::*;
pub use responses::*;
