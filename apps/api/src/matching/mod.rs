// Freelancer/job matching engine.
// Scorers are pure functions over read-only snapshots; only the handlers
// touch HTTP types.

pub mod availability;
pub mod budget;
pub mod engine;
pub mod experience;
pub mod handlers;
pub mod ranker;
pub mod skills;
