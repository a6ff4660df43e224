//! Priority queue of pending tasks.
//!
//! Ordering: priority descending, then deadline day descending. Among
//! equal priorities the task with the *later* deadline comes out first.
//! That is the opposite of earliest-deadline-first and is kept on purpose
//! so generated schedules match previously saved ones. Tasks equal on both
//! keys leave in the order they were pushed.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::Task;

#[derive(Debug, Clone)]
struct QueuedTask {
    task: Task,
    seq: u64,
}

impl Ord for QueuedTask {
    fn cmp(&self, other: &Self) -> Ordering {
        self.task
            .priority
            .cmp(&other.task.priority)
            .then_with(|| self.task.deadline_day.cmp(&other.task.deadline_day))
            // BinaryHeap is a max-heap: lower sequence numbers must compare greater
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for QueuedTask {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for QueuedTask {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueuedTask {}

/// Max-priority queue of tasks.
#[derive(Debug, Clone, Default)]
pub struct TaskQueue {
    heap: BinaryHeap<QueuedTask>,
    next_seq: u64,
}

impl TaskQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a task.
    pub fn push(&mut self, task: Task) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(QueuedTask { task, seq });
    }

    /// Remove and return the highest-ranked task, or `None` when empty.
    pub fn pop_max(&mut self) -> Option<Task> {
        self.heap.pop().map(|q| q.task)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Pending tasks in dequeue order.
    pub fn to_sorted_vec(&self) -> Vec<Task> {
        let mut queued: Vec<_> = self.heap.iter().cloned().collect();
        queued.sort_by(|a, b| b.cmp(a));
        queued.into_iter().map(|q| q.task).collect()
    }
}

impl Extend<Task> for TaskQueue {
    fn extend<I: IntoIterator<Item = Task>>(&mut self, iter: I) {
        for task in iter {
            self.push(task);
        }
    }
}
