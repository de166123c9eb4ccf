pub mod callnumber;
pub mod diagram;
pub mod error;
pub mod execution;
pub mod io_traits;
pub mod model;
pub mod presentation;
pub mod resolver;

pub use callnumber::{is_within, CallNumber};
pub use error::{LookupError, Result};
pub use execution::pipeline::{execute_lookup, LookupOutcome, LookupRequest, RenderedDiagram};
pub use io_traits::{DiagramSource, FetchError, StackDataSource};
pub use presentation::LookupSummary;
pub use resolver::{match_ranges, resolve_floor, MatchResult};
