pub mod job_loader;

pub use job_loader::{load_job_file, parse_job_file, parse_job_line, JobQueue, SearchArgs};
