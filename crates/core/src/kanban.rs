// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Kanban board grouping.

use agency_dash_domain::{Task, TaskStatus};
use serde::Serialize;

/// One board column: a pipeline stage and its tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KanbanColumn<'a> {
    /// The pipeline stage.
    pub status: TaskStatus,
    /// Tasks in this stage, in input order.
    pub tasks: Vec<&'a Task>,
}

/// Partitions tasks into one column per pipeline stage.
///
/// Always returns six columns in [`TaskStatus::PIPELINE`] order, including
/// empty ones. The partition is stable: tasks keep their relative input
/// order within a column.
///
/// Accepts a task slice or the output of a filter.
#[must_use]
pub fn group_by_pipeline<'a, I>(tasks: I) -> Vec<KanbanColumn<'a>>
where
    I: IntoIterator<Item = &'a Task>,
{
    let mut columns: Vec<KanbanColumn<'a>> = TaskStatus::PIPELINE
        .iter()
        .map(|status| KanbanColumn {
            status: *status,
            tasks: Vec::new(),
        })
        .collect();

    for task in tasks {
        columns[task.status.position()].tasks.push(task);
    }

    columns
}
