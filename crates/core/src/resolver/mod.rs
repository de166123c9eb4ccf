pub mod matcher;

pub use matcher::{match_ranges, resolve_floor, MatchResult};
