// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Financial aggregates.
//!
//! Every function here is a pure fold over a borrowed snapshot. Stored
//! amounts (`balance`, `total`) are trusted as given; validation happens
//! where records are produced. Any notion of "now" is an explicit
//! `reference_time` argument.

use agency_dash_domain::{
    Cost, Employee, Invoice, InvoiceStatus, Offer, OfferStatus, Package, Revenue,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use time::{Date, OffsetDateTime};

/// A document with a deadline and a terminal "settled" state.
pub trait DueDated {
    /// The last day the document is current: an invoice's due date or an
    /// offer's validity date.
    fn due_date(&self) -> Date;

    /// Whether the document has reached its terminal state.
    fn is_settled(&self) -> bool;
}

impl DueDated for Invoice {
    fn due_date(&self) -> Date {
        self.due_date
    }

    fn is_settled(&self) -> bool {
        self.status == InvoiceStatus::Paid
    }
}

impl DueDated for Offer {
    fn due_date(&self) -> Date {
        self.valid_until
    }

    fn is_settled(&self) -> bool {
        self.status == OfferStatus::Accepted
    }
}

/// Returns whether a document is past its date and still unsettled.
///
/// The due date is taken as the start of that day in UTC, so a document due
/// `2024-01-01` is overdue at any instant after `2024-01-01T00:00Z`.
#[must_use]
pub fn is_overdue<D: DueDated>(document: &D, reference_time: OffsetDateTime) -> bool {
    !document.is_settled() && document.due_date().midnight().assume_utc() < reference_time
}

/// Sums amounts starting from positive zero.
fn sum_amounts(amounts: impl Iterator<Item = f64>) -> f64 {
    amounts.fold(0.0, |acc, amount| acc + amount)
}

/// Receivables summary for a set of invoices.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FinancialTotals {
    /// Balance still owed on unpaid and partially paid invoices.
    pub outstanding: f64,
    /// The part of `outstanding` whose due date has passed.
    pub overdue: f64,
    /// Totals of fully paid invoices.
    pub paid: f64,
}

/// Computes outstanding, overdue and paid totals.
///
/// # Arguments
///
/// * `invoices` - The invoices to summarize
/// * `reference_time` - The instant overdue status is evaluated at
///
/// # Returns
///
/// The three totals; all zero for an empty slice. `overdue` never exceeds
/// `outstanding` when balances are non-negative.
#[must_use]
pub fn financial_totals(invoices: &[Invoice], reference_time: OffsetDateTime) -> FinancialTotals {
    let outstanding: f64 = sum_amounts(invoices.iter().filter(|i| !i.is_paid()).map(|i| i.balance));
    let overdue: f64 = sum_amounts(
        invoices
            .iter()
            .filter(|i| is_overdue(*i, reference_time))
            .map(|i| i.balance),
    );
    let paid: f64 = sum_amounts(invoices.iter().filter(|i| i.is_paid()).map(|i| i.total));

    FinancialTotals {
        outstanding,
        overdue,
        paid,
    }
}

/// Counts invoices that are overdue at `reference_time`.
#[must_use]
pub fn overdue_invoice_count(invoices: &[Invoice], reference_time: OffsetDateTime) -> usize {
    invoices
        .iter()
        .filter(|i| is_overdue(*i, reference_time))
        .count()
}

/// Sums cost amounts per category.
///
/// Each cost contributes its actual amount, or its expected amount when no
/// actual amount is recorded. Categories without costs do not appear.
#[must_use]
pub fn cost_totals_by_category(costs: &[Cost]) -> BTreeMap<String, f64> {
    let mut totals: BTreeMap<String, f64> = BTreeMap::new();

    for cost in costs {
        *totals.entry(cost.category.clone()).or_insert(0.0) += cost.effective_amount();
    }

    totals
}

/// Sums the amounts of costs that recur monthly.
#[must_use]
pub fn monthly_recurring_cost(costs: &[Cost]) -> f64 {
    sum_amounts(
        costs
            .iter()
            .filter(|c| c.is_monthly_recurring())
            .map(Cost::effective_amount),
    )
}

/// Sums the monthly fees of active packages.
#[must_use]
pub fn monthly_recurring_revenue(packages: &[Package]) -> f64 {
    sum_amounts(packages.iter().filter(|p| p.active).map(|p| p.monthly_fee))
}

/// Sums revenue per customer id.
#[must_use]
pub fn revenue_by_customer(revenues: &[Revenue]) -> BTreeMap<String, f64> {
    let mut totals: BTreeMap<String, f64> = BTreeMap::new();

    for revenue in revenues {
        *totals.entry(revenue.customer_id.clone()).or_insert(0.0) += revenue.amount;
    }

    totals
}

/// Sums revenue received between `start` and `end`, both inclusive.
///
/// An inverted range sums nothing.
#[must_use]
pub fn revenue_between(revenues: &[Revenue], start: Date, end: Date) -> f64 {
    sum_amounts(
        revenues
            .iter()
            .filter(|r| r.date >= start && r.date <= end)
            .map(|r| r.amount),
    )
}

/// Profit and loss over a set of revenues and costs.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ProfitAndLoss {
    /// Total revenue.
    pub revenue: f64,
    /// Total costs, using actual amounts where known.
    pub costs: f64,
    /// `revenue - costs`. Negative for a loss.
    pub net: f64,
}

/// Computes revenue, costs and net result.
#[must_use]
pub fn profit_and_loss(revenues: &[Revenue], costs: &[Cost]) -> ProfitAndLoss {
    let revenue: f64 = sum_amounts(revenues.iter().map(|r| r.amount));
    let costs: f64 = sum_amounts(costs.iter().map(Cost::effective_amount));

    ProfitAndLoss {
        revenue,
        costs,
        net: revenue - costs,
    }
}

/// Count and value of offers in one status.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OfferStatusTotals {
    /// The offer status.
    pub status: OfferStatus,
    /// Number of offers in this status.
    pub count: usize,
    /// Sum of their totals.
    pub total: f64,
}

/// Summarizes offers per status.
///
/// Returns one entry for every status in [`OfferStatus::ALL`] order,
/// including statuses with no offers.
#[must_use]
pub fn offer_pipeline(offers: &[Offer]) -> Vec<OfferStatusTotals> {
    OfferStatus::ALL
        .iter()
        .map(|status| {
            let matching = || offers.iter().filter(|o| o.status == *status);
            OfferStatusTotals {
                status: *status,
                count: matching().count(),
                total: sum_amounts(matching().map(|o| o.total)),
            }
        })
        .collect()
}

/// Staff cost summary.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PayrollSummary {
    /// Number of active employees.
    pub active_headcount: usize,
    /// Sum of active employees' monthly base salaries.
    pub monthly_salaries: f64,
    /// Sum of active employees' insurance, ticket and visa costs.
    pub annual_overheads: f64,
}

/// Summarizes the cost of active staff. Inactive employees are ignored.
#[must_use]
pub fn payroll_summary(employees: &[Employee]) -> PayrollSummary {
    let active = || employees.iter().filter(|e| e.active);

    PayrollSummary {
        active_headcount: active().count(),
        monthly_salaries: sum_amounts(active().map(|e| e.base_salary)),
        annual_overheads: sum_amounts(active().map(|e| e.insurance + e.ticket_value + e.visa_cost)),
    }
}
