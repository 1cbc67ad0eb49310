use crate::domain::order::OrderSnapshot;
use crate::error::Result;
use std::io::Read;

/// Reads order snapshots from a JSON source.
///
/// The source is a JSON array of snapshot objects, from any `Read` (file,
/// stdin). Order metadata is a nested map, which is why this is JSON and not a
/// row format.
pub struct SnapshotReader<R: Read> {
    source: R,
}

impl<R: Read> SnapshotReader<R> {
    pub fn new(source: R) -> Self {
        Self { source }
    }

    pub fn read_all(self) -> Result<Vec<OrderSnapshot>> {
        let snapshots = serde_json::from_reader(self.source)?;
        Ok(snapshots)
    }
}
