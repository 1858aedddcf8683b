pub mod create;
pub mod edit;
pub mod list;
pub mod remove;
pub mod summary;

/// Days the summary reaches in each direction around today.
pub const HORIZON_DAYS: u32 = 31;
