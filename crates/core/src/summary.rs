// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Dashboard headline figures for one snapshot.
//!
//! The summary is **computed**, not stored. It is a pure function of the
//! collections handed in and the reference time.

use crate::finance::{
    FinancialTotals, PayrollSummary, ProfitAndLoss, financial_totals, monthly_recurring_cost,
    monthly_recurring_revenue, overdue_invoice_count, payroll_summary, profit_and_loss,
};
use crate::lookup::find_customer;
use agency_dash_domain::{
    Cost, Customer, Employee, Invoice, Offer, Package, Project, ProjectStatus, Revenue, Task,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use time::OffsetDateTime;
use tracing::debug;

/// Borrowed view over every entity collection of a snapshot.
#[derive(Debug, Clone, Copy, Default)]
pub struct Collections<'a> {
    /// Customers with their contacts attached.
    pub customers: &'a [Customer],
    /// Staff records.
    pub employees: &'a [Employee],
    /// Client projects.
    pub projects: &'a [Project],
    /// Tasks of every project.
    pub tasks: &'a [Task],
    /// Retainer packages.
    pub packages: &'a [Package],
    /// Quotations.
    pub offers: &'a [Offer],
    /// Bills issued.
    pub invoices: &'a [Invoice],
    /// Operating costs.
    pub costs: &'a [Cost],
    /// Money received.
    pub revenues: &'a [Revenue],
}

/// Headline figures shown on the dashboard landing page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    /// Receivables.
    pub financial: FinancialTotals,
    /// Number of overdue invoices.
    pub overdue_invoices: usize,
    /// Monthly fees of active packages.
    pub monthly_recurring_revenue: f64,
    /// Monthly recurring operating costs.
    pub monthly_recurring_cost: f64,
    /// Revenue, costs and net result.
    pub profit_and_loss: ProfitAndLoss,
    /// Staff costs.
    pub payroll: PayrollSummary,
    /// Projects in the `active` state.
    pub active_projects: usize,
    /// Tasks not yet delivered.
    pub open_tasks: usize,
    /// Known customers with an active project or an active package.
    pub active_customers: usize,
}

/// Computes the dashboard summary.
///
/// # Arguments
///
/// * `collections` - The snapshot to summarize
/// * `reference_time` - The instant overdue status is evaluated at
#[must_use]
pub fn dashboard_summary(
    collections: &Collections<'_>,
    reference_time: OffsetDateTime,
) -> DashboardSummary {
    let active_customers: BTreeSet<&str> = collections
        .projects
        .iter()
        .filter(|p| p.status == ProjectStatus::Active)
        .map(|p| p.customer_id.as_str())
        .chain(
            collections
                .packages
                .iter()
                .filter(|p| p.active)
                .map(|p| p.customer_id.as_str()),
        )
        .filter(|id| find_customer(collections.customers, id).is_some())
        .collect();

    let summary: DashboardSummary = DashboardSummary {
        financial: financial_totals(collections.invoices, reference_time),
        overdue_invoices: overdue_invoice_count(collections.invoices, reference_time),
        monthly_recurring_revenue: monthly_recurring_revenue(collections.packages),
        monthly_recurring_cost: monthly_recurring_cost(collections.costs),
        profit_and_loss: profit_and_loss(collections.revenues, collections.costs),
        payroll: payroll_summary(collections.employees),
        active_projects: collections
            .projects
            .iter()
            .filter(|p| p.status == ProjectStatus::Active)
            .count(),
        open_tasks: collections
            .tasks
            .iter()
            .filter(|t| !t.status.is_delivered())
            .count(),
        active_customers: active_customers.len(),
    };

    debug!(
        %reference_time,
        overdue_invoices = summary.overdue_invoices,
        active_projects = summary.active_projects,
        "Computed dashboard summary"
    );

    summary
}
