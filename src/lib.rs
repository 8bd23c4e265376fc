pub mod format;
pub mod handler;
pub mod model;
pub mod sportsdata;
pub mod topic;
