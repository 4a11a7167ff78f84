pub mod config;
pub mod driver;
pub mod error;
pub mod interrupt;
pub mod output;
pub mod reservoir;
pub mod reservoir_sample;
pub mod shared;

pub use driver::{Driver, Record, RunSummary};
pub use error::{Error, Result};
pub use reservoir::Reservoir;
pub use reservoir_sample::{reservoir_sample, reservoir_sample_one};
pub use shared::{SharedReservoir, Snapshot};
