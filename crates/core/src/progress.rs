// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Progress percentages.
//!
//! All percentages share one rule: `round(100 * done / target)` with
//! round-half-up, computed in integer arithmetic so that e.g. `18 / 25`
//! is exactly `72`. A zero target yields `0`. Results above `100` are
//! over-delivery and are never clamped.

use agency_dash_domain::{Deliverable, Package, Task};
use tracing::debug;

/// Computes `round_half_up(100 * done / target)`, or `0` when `target` is zero.
///
/// `floor((200 * done + target) / (2 * target))` is the half-up rounding of
/// `100 * done / target` for non-negative integers.
#[must_use]
pub fn rounded_percent(done: u64, target: u64) -> u32 {
    if target == 0 {
        return 0;
    }

    let numerator: u128 = 200 * u128::from(done) + u128::from(target);
    let denominator: u128 = 2 * u128::from(target);

    u32::try_from(numerator / denominator).unwrap_or(u32::MAX)
}

/// Computes progress across a set of deliverable quotas.
///
/// The percentage is taken over the summed counts, so a large quota weighs
/// more than a small one.
///
/// # Arguments
///
/// * `deliverables` - The quotas to measure
///
/// # Returns
///
/// The rounded percentage, `0` when the summed quantity is zero.
#[must_use]
pub fn deliverable_progress(deliverables: &[Deliverable]) -> u32 {
    let completed: u64 = deliverables
        .iter()
        .map(|d| u64::from(d.completed_this_period))
        .sum();
    let quantity: u64 = deliverables.iter().map(|d| u64::from(d.quantity)).sum();

    if quantity == 0 {
        debug!(
            deliverables = deliverables.len(),
            "No measurable deliverable quota, reporting zero progress"
        );
    }

    rounded_percent(completed, quantity)
}

/// Computes progress across a package's deliverables.
#[must_use]
pub fn package_progress(package: &Package) -> u32 {
    deliverable_progress(&package.deliverables)
}

/// Computes the share of a task's checklist that is done.
///
/// A task without subtasks reports `0`.
#[must_use]
pub fn subtask_progress(task: &Task) -> u32 {
    let total: usize = task.subtasks.len();
    let completed: usize = task.subtasks.iter().filter(|s| s.completed).count();

    rounded_percent(
        u64::try_from(completed).unwrap_or(u64::MAX),
        u64::try_from(total).unwrap_or(u64::MAX),
    )
}

/// Computes the share of a project's tasks that have been delivered.
///
/// Tasks belonging to other projects are ignored. A project with no tasks
/// reports `0`.
#[must_use]
pub fn project_progress(tasks: &[Task], project_id: &str) -> u32 {
    let (delivered, total): (u64, u64) = tasks
        .iter()
        .filter(|t| t.project_id == project_id)
        .fold((0, 0), |(delivered, total), task| {
            (
                delivered + u64::from(task.status.is_delivered()),
                total + 1,
            )
        });

    rounded_percent(delivered, total)
}
