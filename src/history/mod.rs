mod snapshot;
mod store;

pub use snapshot::Snapshot;
pub use store::{HistoryRow, HistoryStore};
