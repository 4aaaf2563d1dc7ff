// View filtering
// Pure projections of the task list; results are copies, never indexed back into the store

use crate::models::{Task, ViewMode};

/// Tasks visible in `mode`, in store order
pub fn apply(tasks: &[Task], mode: ViewMode) -> Vec<Task> {
    tasks.iter().filter(|t| mode.includes(t.complete)).cloned().collect()
}

/// Id of the task at `row` of a filtered view, for callers that track rows by position.
/// The bundled UI keeps the id on each row and does not need this.
pub fn rowToId(tasks: &[Task], mode: ViewMode, row: usize) -> Option<String> {
    tasks
        .iter()
        .filter(|t| mode.includes(t.complete))
        .nth(row)
        .map(|t| t.id.clone())
}
