// Read-only snapshots of marketplace records, as handed to the matching core.
// Owned and persisted elsewhere; nothing here is written back.

pub mod freelancer;
pub mod job;
pub mod lenient;
