use log::{debug, info};
use rayon::ThreadPoolBuilder;
use crate::config::SortConfig;
use crate::error::{Result, SortError};
use crate::parallel::parallel_rec;
use crate::sequential::sequential_rec;
use crate::sorter::Task;

/// Sorts `arr` ascending in place on the calling thread.
pub fn sort(arr: &mut [i64]) {
    debug!("Sequential sort of {} elements", arr.len());
    sequential_rec(Task::new(arr, 0));
}

/// Sorts `arr` ascending in place, partitioning recursively and sorting
/// both sides of every partition concurrently. Blocks until the whole
/// recursion tree has finished; a panic in any task resumes here.
pub fn sort_parallel(arr: &mut [i64]) {
    sort_parallel_with(arr, &SortConfig::default());
}

pub fn sort_parallel_with(arr: &mut [i64], config: &SortConfig) {
    debug!("Parallel sort of {} elements, threshold {}, max depth {}", arr.len(), config.threshold, config.max_depth);
    parallel_rec(Task::new(arr, 0), config);
}

/// Checks that `arr` is ascending, reporting the first out-of-order pair.
pub fn verify_sorted(arr: &[i64]) -> Result<()> {
    match arr.windows(2).position(|w| w[0] > w[1]) {
        Some(index) => Err(SortError::Unsorted {
            index,
            left: arr[index],
            right: arr[index + 1],
        }),
        None => Ok(()),
    }
}

/// Builds rayon's global pool. `None` keeps rayon's default of one thread
/// per hardware thread. Returns the number of threads in use.
///
/// Fails if the global pool was already built, explicitly or by an earlier
/// sort.
pub fn initialize_thread_pool(num_threads: Option<usize>) -> Result<usize> {
    let mut builder = ThreadPoolBuilder::new();
    if let Some(n) = num_threads {
        builder = builder.num_threads(n);
    }
    builder.build_global()?;
    let threads = rayon::current_num_threads();
    info!("Thread pool initialized with {} threads", threads);
    Ok(threads)
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;
    use super::*;

    #[test]
    fn test_small() {
        let mut vec: Vec<i64> = (1..=64).rev().collect();
        vec.shuffle(&mut StdRng::seed_from_u64(12345));
        sort_parallel(&mut vec);
        assert_eq!(vec, (1..=64).collect::<Vec<i64>>());
    }

    #[test]
    fn test_sequential_matches_parallel() {
        let mut a: Vec<i64> = (-5000..5000).collect();
        a.shuffle(&mut StdRng::seed_from_u64(54321));
        let mut b = a.clone();
        sort(&mut a);
        sort_parallel_with(&mut b, &SortConfig::unbounded());
        assert_eq!(a, b);
    }

    #[test]
    fn test_verify_sorted() {
        assert!(verify_sorted(&[]).is_ok());
        assert!(verify_sorted(&[1, 1, 2]).is_ok());
        match verify_sorted(&[1, 3, 2, 4]) {
            Err(SortError::Unsorted { index, left, right }) => {
                assert_eq!((index, left, right), (1, 3, 2));
            }
            other => panic!("expected unsorted error, got {:?}", other),
        }
    }

    #[test]
    fn test_pool_twice_fails() {
        // whichever call builds the global pool, the next one must fail
        let _ = initialize_thread_pool(Some(2));
        assert!(initialize_thread_pool(Some(2)).is_err());
    }
}
