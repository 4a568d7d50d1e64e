// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Explicit orderings for presentation.
//!
//! Filtering never reorders, so any ordering is requested through one of
//! these functions. All sorts are stable and leave their input untouched.

use agency_dash_domain::{Customer, Invoice, Task};

/// Orders customers by name, ignoring case.
#[must_use]
pub fn sort_customers_by_name<'a>(customers: &[&'a Customer]) -> Vec<&'a Customer> {
    let mut sorted: Vec<&'a Customer> = customers.to_vec();
    sorted.sort_by_cached_key(|c| c.name.to_lowercase());
    sorted
}

/// Orders tasks by their pipeline stage, left to right.
#[must_use]
pub fn sort_tasks_by_pipeline<'a>(tasks: &[&'a Task]) -> Vec<&'a Task> {
    let mut sorted: Vec<&'a Task> = tasks.to_vec();
    sorted.sort_by_key(|t| t.status.position());
    sorted
}

/// Orders invoices by due date, earliest first.
#[must_use]
pub fn sort_invoices_by_due_date<'a>(invoices: &[&'a Invoice]) -> Vec<&'a Invoice> {
    let mut sorted: Vec<&'a Invoice> = invoices.to_vec();
    sorted.sort_by_key(|i| i.due_date);
    sorted
}
