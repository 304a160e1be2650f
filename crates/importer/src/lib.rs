pub mod error;
pub mod snapshot;
pub mod sources;
pub mod traits;

pub use error::{ImporterError, Result};
pub use snapshot::{Snapshot, SnapshotValidator, ValidationReport};
pub use sources::JsonFileSource;
pub use traits::SnapshotSource;
