use log::trace;

/// Lomuto partition of `arr[low..=high]` around the pivot value `arr[high]`.
///
/// On return, with `p` the returned index, every element in `low..p` is
/// strictly smaller than the pivot, every element in `p+1..=high` is greater
/// or equal, and `arr[p]` holds the pivot. Elements outside the range are
/// not touched.
///
/// Panics if `low > high` or `high >= arr.len()`.
pub fn partition(arr: &mut [i64], low: usize, high: usize) -> usize {
    assert!(low <= high && high < arr.len(), "invalid range {low}..={high} for length {}", arr.len());
    let pivot = arr[high];

    // next free slot of the "< pivot" region
    let mut store = low;
    for j in low..high {
        if arr[j] < pivot {
            arr.swap(store, j);
            store += 1;
        }
    }
    arr.swap(store, high);

    trace!("partition {}..={} pivot={} -> {}", low, high, pivot, store);
    debug_assert!(is_partitioned(arr, low, high, store));
    store
}

/// Partitions the whole slice. The slice must not be empty.
pub fn partition_slice(arr: &mut [i64]) -> usize {
    let high = arr.len() - 1;
    partition(arr, 0, high)
}

pub(crate) fn is_partitioned(arr: &[i64], low: usize, high: usize, p: usize) -> bool {
    let pivot = arr[p];
    arr[low..p].iter().all(|&x| x < pivot) && arr[p + 1..=high].iter().all(|&x| x >= pivot)
}
