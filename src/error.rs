use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

/// Failures at the boundary of the sort: reading input, writing output and
/// setting up the thread pool, plus a failed `--verify` check. Sorting an
/// in-memory slice cannot fail.
#[derive(Debug, Error)]
pub enum SortError {
    #[error("cannot access {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("line {line}, field {field}: invalid integer {value:?}: {source}")]
    Parse {
        line: u64,
        field: usize,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("output not sorted at index {index}: {left} > {right}")]
    Unsorted {
        index: usize,
        left: i64,
        right: i64,
    },

    #[error("cannot build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type Result<T> = std::result::Result<T, SortError>;
