// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Aggregation, filtering and grouping over dashboard records.
//!
//! Every function in this crate is pure: it borrows an in-memory snapshot,
//! never mutates it, never reads the clock, and never fails. Callers pass an
//! explicit reference time wherever "now" matters and re-invoke the engine
//! whenever their snapshot changes.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod filter;
mod finance;
mod kanban;
mod lookup;
mod ordering;
mod progress;
mod summary;

#[cfg(test)]
mod tests;

pub use filter::{CategoricalFilter, MATCH_ALL, PredicateSet, Searchable, filter_entities};
pub use finance::{
    DueDated, FinancialTotals, OfferStatusTotals, PayrollSummary, ProfitAndLoss,
    cost_totals_by_category, financial_totals, is_overdue, monthly_recurring_cost,
    monthly_recurring_revenue, offer_pipeline, overdue_invoice_count, payroll_summary,
    profit_and_loss, revenue_between, revenue_by_customer,
};
pub use kanban::{KanbanColumn, group_by_pipeline};
pub use lookup::{
    UNKNOWN_CUSTOMER, UNKNOWN_PROJECT, customer_display_name, find_customer, find_project,
    primary_contact, project_display_name, tasks_for_project,
};
pub use ordering::{sort_customers_by_name, sort_invoices_by_due_date, sort_tasks_by_pipeline};
pub use progress::{
    deliverable_progress, package_progress, project_progress, rounded_percent, subtask_progress,
};
pub use summary::{Collections, DashboardSummary, dashboard_summary};
