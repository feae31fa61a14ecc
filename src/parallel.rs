use log::trace;
use rayon::scope;
use crate::config::SortConfig;
use crate::sequential::sequential_rec;
use crate::sorter::Task;

/// Partitions the task's range and sorts both sides concurrently. Returns
/// once both subtasks, and everything they spawned, have finished.
pub(crate) fn parallel_rec(task: Task, config: &SortConfig) {
    if task.is_done() {
        return;
    }
    if config.is_sequential(task.arr.len(), task.level) {
        sequential_rec(task);
        return;
    }

    trace!("Thread {:?}, level {}: partitioning {} elements", rayon::current_thread_index(), task.level, task.arr.len());
    let (left, right) = task.generate_subtasks();

    scope(|s| {
        s.spawn(move |_| parallel_rec(left, config));
        s.spawn(move |_| parallel_rec(right, config));
    });
}
