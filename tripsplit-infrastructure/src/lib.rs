#![warn(clippy::uninlined_format_args)]

pub mod outbox;
pub mod snapshot;

pub use outbox::OutboxNotifier;
pub use snapshot::{JsonSnapshotLoader, SnapshotLoadError};
