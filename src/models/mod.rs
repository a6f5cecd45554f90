pub mod loaders;
pub mod outcome;
pub mod record;
pub mod record_set;
pub mod search_job;

pub use loaders::{JobQueue, SearchArgs};
pub use outcome::{ExtractOutcome, SkipReason};
pub use record::{derive_area, Cell, Parsed, Record};
pub use record_set::{RecordSet, Table};
pub use search_job::SearchJob;
