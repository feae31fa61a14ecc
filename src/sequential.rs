use log::trace;
use crate::base_case::insertion_sort;
use crate::sorter::Task;

/// Single-threaded quicksort using the same partition scheme as the
/// concurrent sort. Recurses into the smaller side and loops on the larger
/// one, so the stack stays logarithmic even on sorted input.
pub(crate) fn sequential_rec(task: Task) {
    let mut task = task;
    loop {
        if task.is_base_case() {
            trace!("Base case at level {}: {} elements", task.level, task.arr.len());
            insertion_sort(task.arr);
            return;
        }

        let (left, right) = task.generate_subtasks();
        if left.arr.len() < right.arr.len() {
            sequential_rec(left);
            task = right;
        } else {
            sequential_rec(right);
            task = left;
        }
    }
}
