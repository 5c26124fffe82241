mod store;
mod tests;

pub mod error;
pub mod report;
pub mod simulation;

pub use error::{Error, Result};
pub use simulation::{Outcome, Simulation};
pub use store::{Block, BlockStore};
