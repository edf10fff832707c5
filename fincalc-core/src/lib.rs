pub mod calculations;
pub mod models;
pub mod recommendations;
pub mod store;
pub mod tracking;

pub use models::*;
pub use store::{MemoryBackend, ProfileStore, StorageBackend, StorageError};
pub use tracking::{HttpUsageSink, NullUsageSink, TrackingError, UsageEvent, UsageSink};
