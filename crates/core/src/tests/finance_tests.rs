// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{
    create_test_cost, create_test_employee, create_test_invoice, create_test_offer,
    create_test_package, create_test_revenue,
};
use crate::{
    FinancialTotals, OfferStatusTotals, cost_totals_by_category, financial_totals, is_overdue,
    monthly_recurring_cost, monthly_recurring_revenue, offer_pipeline, overdue_invoice_count,
    payroll_summary, profit_and_loss, revenue_between, revenue_by_customer,
};
use agency_dash_domain::{CostFrequency, Invoice, InvoiceStatus, OfferStatus};
use std::collections::BTreeMap;
use time::macros::{date, datetime};

fn create_mixed_invoices() -> Vec<Invoice> {
    vec![
        // Overdue, nothing paid
        create_test_invoice("1", 6300.0, 0.0, date!(2024 - 01 - 01), InvoiceStatus::Unpaid),
        // Overdue, partially paid
        create_test_invoice("2", 5000.0, 2000.0, date!(2024 - 06 - 30), InvoiceStatus::Partial),
        // Not yet due
        create_test_invoice("3", 1200.0, 0.0, date!(2025 - 03 - 01), InvoiceStatus::Unpaid),
        // Paid long ago
        create_test_invoice("4", 8000.0, 8000.0, date!(2023 - 11 - 15), InvoiceStatus::Paid),
    ]
}

#[test]
fn test_financial_totals_empty() {
    let totals: FinancialTotals = financial_totals(&[], datetime!(2025-01-01 0:00 UTC));

    assert_eq!(totals, FinancialTotals::default());
    assert_eq!(totals.outstanding, 0.0);
    assert_eq!(totals.overdue, 0.0);
    assert_eq!(totals.paid, 0.0);
    assert!(totals.outstanding.is_sign_positive());
}

#[test]
fn test_financial_totals_mixed_invoices() {
    let invoices: Vec<Invoice> = create_mixed_invoices();
    let totals: FinancialTotals = financial_totals(&invoices, datetime!(2025-01-01 0:00 UTC));

    assert_eq!(totals.outstanding, 6300.0 + 3000.0 + 1200.0);
    assert_eq!(totals.overdue, 6300.0 + 3000.0);
    assert_eq!(totals.paid, 8000.0);
}

#[test]
fn test_overdue_never_exceeds_outstanding() {
    let invoices: Vec<Invoice> = create_mixed_invoices();

    for reference in [
        datetime!(2020-01-01 0:00 UTC),
        datetime!(2024-03-01 12:00 UTC),
        datetime!(2025-01-01 0:00 UTC),
        datetime!(2030-01-01 0:00 UTC),
    ] {
        let totals: FinancialTotals = financial_totals(&invoices, reference);
        assert!(totals.outstanding >= totals.overdue, "at {reference}");
    }
}

#[test]
fn test_far_future_reference_makes_all_outstanding_overdue() {
    let invoices: Vec<Invoice> = create_mixed_invoices();
    let totals: FinancialTotals = financial_totals(&invoices, datetime!(2030-01-01 0:00 UTC));

    assert_eq!(totals.overdue, totals.outstanding);
    assert_eq!(overdue_invoice_count(&invoices, datetime!(2030-01-01 0:00 UTC)), 3);
}

#[test]
fn test_unpaid_invoice_past_due_is_overdue() {
    let invoice: Invoice =
        create_test_invoice("1", 6300.0, 0.0, date!(2024 - 01 - 01), InvoiceStatus::Unpaid);

    assert!(is_overdue(&invoice, datetime!(2025-01-01 0:00 UTC)));
}

#[test]
fn test_paid_invoice_is_never_overdue() {
    let invoice: Invoice =
        create_test_invoice("1", 6300.0, 6300.0, date!(2024 - 01 - 01), InvoiceStatus::Paid);

    assert!(!is_overdue(&invoice, datetime!(2025-01-01 0:00 UTC)));
    assert!(!is_overdue(&invoice, datetime!(2099-01-01 0:00 UTC)));
}

#[test]
fn test_overdue_starts_after_midnight_of_due_date() {
    let invoice: Invoice =
        create_test_invoice("1", 100.0, 0.0, date!(2024 - 01 - 01), InvoiceStatus::Unpaid);

    assert!(!is_overdue(&invoice, datetime!(2023-12-31 23:59 UTC)));
    assert!(!is_overdue(&invoice, datetime!(2024-01-01 0:00 UTC)));
    assert!(is_overdue(&invoice, datetime!(2024-01-01 0:01 UTC)));
}

#[test]
fn test_offer_overdue_unless_accepted() {
    let sent = create_test_offer("1", 1000.0, date!(2024 - 01 - 31), OfferStatus::Sent);
    let accepted = create_test_offer("2", 1000.0, date!(2024 - 01 - 31), OfferStatus::Accepted);

    assert!(is_overdue(&sent, datetime!(2024-02-15 9:00 UTC)));
    assert!(!is_overdue(&accepted, datetime!(2024-02-15 9:00 UTC)));
    assert!(!is_overdue(&sent, datetime!(2024-01-15 9:00 UTC)));
}

#[test]
fn test_monthly_recurring_cost_scenario() {
    let costs = vec![
        create_test_cost("rent", 15000.0, Some(15000.0), Some(CostFrequency::Monthly)),
        create_test_cost("software", 600.0, None, Some(CostFrequency::Monthly)),
    ];

    assert_eq!(monthly_recurring_cost(&costs), 15600.0);
}

#[test]
fn test_monthly_recurring_cost_excludes_other_frequencies() {
    let mut one_off = create_test_cost("equipment", 9000.0, None, None);
    one_off.recurring = false;
    let mut flagged_without_frequency = create_test_cost("misc", 50.0, None, None);
    flagged_without_frequency.recurring = true;

    let costs = vec![
        create_test_cost("rent", 15000.0, None, Some(CostFrequency::Monthly)),
        create_test_cost("licenses", 1200.0, None, Some(CostFrequency::Yearly)),
        one_off,
        flagged_without_frequency,
    ];

    assert_eq!(monthly_recurring_cost(&costs), 15000.0);
    assert_eq!(monthly_recurring_cost(&[]), 0.0);
}

#[test]
fn test_cost_totals_by_category_uses_actual_then_expected() {
    let costs = vec![
        create_test_cost("rent", 15000.0, Some(14500.0), Some(CostFrequency::Monthly)),
        create_test_cost("software", 600.0, None, Some(CostFrequency::Monthly)),
        create_test_cost("software", 200.0, Some(250.0), Some(CostFrequency::Monthly)),
    ];

    let totals: BTreeMap<String, f64> = cost_totals_by_category(&costs);

    assert_eq!(totals.len(), 2);
    assert_eq!(totals["rent"], 14500.0);
    assert_eq!(totals["software"], 850.0);
    assert!(!totals.contains_key("marketing"));
    assert!(cost_totals_by_category(&[]).is_empty());
}

#[test]
fn test_monthly_recurring_revenue_counts_active_packages() {
    let packages = vec![
        create_test_package("1", "cus-1", 12000.0, true),
        create_test_package("2", "cus-2", 8000.0, false),
        create_test_package("3", "cus-3", 4500.0, true),
    ];

    assert_eq!(monthly_recurring_revenue(&packages), 16500.0);
}

#[test]
fn test_revenue_aggregates() {
    let revenues = vec![
        create_test_revenue("cus-1", 5000.0, date!(2024 - 01 - 10)),
        create_test_revenue("cus-2", 3000.0, date!(2024 - 01 - 31)),
        create_test_revenue("cus-1", 2000.0, date!(2024 - 02 - 01)),
    ];

    let by_customer: BTreeMap<String, f64> = revenue_by_customer(&revenues);
    assert_eq!(by_customer["cus-1"], 7000.0);
    assert_eq!(by_customer["cus-2"], 3000.0);

    assert_eq!(
        revenue_between(&revenues, date!(2024 - 01 - 01), date!(2024 - 01 - 31)),
        8000.0
    );
    assert_eq!(
        revenue_between(&revenues, date!(2024 - 02 - 01), date!(2024 - 01 - 01)),
        0.0
    );
}

#[test]
fn test_profit_and_loss() {
    let revenues = vec![
        create_test_revenue("cus-1", 20000.0, date!(2024 - 01 - 10)),
        create_test_revenue("cus-2", 5000.0, date!(2024 - 01 - 20)),
    ];
    let costs = vec![
        create_test_cost("rent", 15000.0, Some(15000.0), Some(CostFrequency::Monthly)),
        create_test_cost("software", 600.0, None, Some(CostFrequency::Monthly)),
    ];

    let pnl = profit_and_loss(&revenues, &costs);
    assert_eq!(pnl.revenue, 25000.0);
    assert_eq!(pnl.costs, 15600.0);
    assert_eq!(pnl.net, 9400.0);

    let loss = profit_and_loss(&[], &costs);
    assert_eq!(loss.net, -15600.0);
}

#[test]
fn test_offer_pipeline_keeps_every_status() {
    let offers = vec![
        create_test_offer("1", 1000.0, date!(2024 - 01 - 31), OfferStatus::Sent),
        create_test_offer("2", 2500.0, date!(2024 - 01 - 31), OfferStatus::Sent),
        create_test_offer("3", 4000.0, date!(2024 - 01 - 31), OfferStatus::Accepted),
    ];

    let pipeline: Vec<OfferStatusTotals> = offer_pipeline(&offers);

    let statuses: Vec<OfferStatus> = pipeline.iter().map(|t| t.status).collect();
    assert_eq!(statuses, OfferStatus::ALL.to_vec());
    assert_eq!(pipeline[0].count, 0);
    assert_eq!(pipeline[1].count, 2);
    assert_eq!(pipeline[1].total, 3500.0);
    assert_eq!(pipeline[2].count, 1);
    assert_eq!(pipeline[2].total, 4000.0);
    assert_eq!(offer_pipeline(&[]).len(), 5);
}

#[test]
fn test_payroll_summary_ignores_inactive_staff() {
    let employees = vec![
        create_test_employee("1", 12000.0, true),
        create_test_employee("2", 9000.0, true),
        create_test_employee("3", 20000.0, false),
    ];

    let payroll = payroll_summary(&employees);
    assert_eq!(payroll.active_headcount, 2);
    assert_eq!(payroll.monthly_salaries, 21000.0);
    assert_eq!(payroll.annual_overheads, 2.0 * (4000.0 + 2000.0 + 3000.0));
}
