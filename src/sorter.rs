use crate::config::BASE_CASE;
use crate::partition::partition_slice;

/// A contiguous range of the sequence owned by one recursive call.
#[derive(Debug)]
pub struct Task<'a> {
    pub arr: &'a mut [i64],
    pub level: usize,
}

impl<'a> Task<'a> {
    pub fn new(arr: &'a mut [i64], level: usize) -> Task<'a> {
        Task {
            arr,
            level,
        }
    }

    /// Zero or one element left, nothing to do.
    pub fn is_done(&self) -> bool {
        self.arr.len() <= 1
    }

    pub fn is_base_case(&self) -> bool {
        self.arr.len() <= BASE_CASE
    }

    /// Partitions the range and hands out the two ranges on either side of
    /// the pivot. The pivot itself is in its final place and belongs to
    /// neither subtask.
    pub fn generate_subtasks(self) -> (Task<'a>, Task<'a>) {
        let pivot = partition_slice(self.arr);
        let (left, right) = self.arr.split_at_mut(pivot);
        (
            Task::new(left, self.level + 1),
            Task::new(&mut right[1..], self.level + 1),
        )
    }
}
