mod base_case;
mod parallel;
mod partition;
mod sequential;
mod sorter;
pub mod config;
pub mod csv_io;
pub mod error;
pub mod sort;

pub use base_case::insertion_sort;
pub use config::{SortConfig, BASE_CASE, MAX_DEPTH, STACK_SAFE_DEPTH, THRESHOLD};
pub use error::SortError;
pub use partition::{partition, partition_slice};
pub use sort::{initialize_thread_pool, sort, sort_parallel, sort_parallel_with, verify_sorted};
