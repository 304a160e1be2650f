use crate::Result;
use crate::snapshot::Snapshot;

/// Anything that can materialize the roster and gamification collections.
#[async_trait::async_trait]
pub trait SnapshotSource: Send + Sync {
    async fn load(&self) -> Result<Snapshot>;

    fn name(&self) -> &'static str;
}
