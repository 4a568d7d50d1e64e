// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Plain-text rendering of command views.

use crate::commands::{
    CostImportReport, CustomerRow, InvoiceRow, PackageList, SummaryReport, TaskList,
};
use agency_dash::{KanbanColumn, project_display_name};
use agency_dash_domain::Project;
use agency_dash_snapshot::CostRowStatus;
use std::fmt::{self, Write};

const NONE: &str = "-";

fn money(value: f64) -> String {
    format!("{value:.2}")
}

/// Writes one `label  value` line of the summary, value right-aligned.
fn figure(out: &mut String, label: &str, value: impl fmt::Display) -> fmt::Result {
    writeln!(out, "  {label:<18} {value:>12}")
}

fn finish(out: &str) -> String {
    out.trim_end().to_string()
}

pub fn summary(report: &SummaryReport) -> Result<String, fmt::Error> {
    let headline = &report.summary;
    let mut out: String = String::new();

    writeln!(out, "Receivables")?;
    figure(&mut out, "Outstanding", money(headline.financial.outstanding))?;
    figure(&mut out, "Overdue", money(headline.financial.overdue))?;
    figure(&mut out, "Overdue invoices", headline.overdue_invoices)?;
    figure(&mut out, "Paid", money(headline.financial.paid))?;

    writeln!(out, "Recurring")?;
    figure(&mut out, "Revenue / month", money(headline.monthly_recurring_revenue))?;
    figure(&mut out, "Cost / month", money(headline.monthly_recurring_cost))?;

    writeln!(out, "Profit and loss")?;
    figure(&mut out, "Revenue", money(headline.profit_and_loss.revenue))?;
    figure(&mut out, "Costs", money(headline.profit_and_loss.costs))?;
    figure(&mut out, "Net", money(headline.profit_and_loss.net))?;

    writeln!(out, "Payroll")?;
    figure(&mut out, "Active staff", headline.payroll.active_headcount)?;
    figure(&mut out, "Salaries / month", money(headline.payroll.monthly_salaries))?;
    figure(&mut out, "Overheads / year", money(headline.payroll.annual_overheads))?;

    writeln!(out, "Work")?;
    figure(&mut out, "Active projects", headline.active_projects)?;
    figure(&mut out, "Open tasks", headline.open_tasks)?;
    figure(&mut out, "Active customers", headline.active_customers)?;

    writeln!(out, "Offers")?;
    for totals in &report.offers {
        let label: String = format!("{} ({})", totals.status.as_str(), totals.count);
        figure(&mut out, &label, money(totals.total))?;
    }

    writeln!(out, "Costs by category")?;
    for (category, amount) in &report.costs_by_category {
        figure(&mut out, category, money(*amount))?;
    }

    writeln!(out, "Revenue by customer")?;
    for (customer, amount) in &report.revenue_by_customer {
        figure(&mut out, customer, money(*amount))?;
    }

    Ok(finish(&out))
}

pub fn customers(rows: &[CustomerRow<'_>]) -> Result<String, fmt::Error> {
    if rows.is_empty() {
        return Ok(String::from("No customers match."));
    }

    let mut out: String = String::new();
    for row in rows {
        let industry: &str = row.industry.unwrap_or(NONE);
        let contact: &str = row.primary_contact.unwrap_or(NONE);
        writeln!(
            out,
            "{:<30} {:<12} {industry:<16} {contact}",
            row.name, row.location
        )?;
    }

    Ok(finish(&out))
}

pub fn invoices(rows: &[InvoiceRow<'_>]) -> Result<String, fmt::Error> {
    if rows.is_empty() {
        return Ok(String::from("No invoices match."));
    }

    let mut out: String = String::new();
    for row in rows {
        let marker: &str = if row.overdue { "  OVERDUE" } else { "" };
        writeln!(
            out,
            "{:<12} {:<30} {:>12} {:>12}  {}  {:<8}{marker}",
            row.number,
            row.customer,
            money(row.total),
            money(row.balance),
            row.due_date,
            row.status.as_str()
        )?;
    }

    Ok(finish(&out))
}

pub fn tasks(list: &TaskList<'_>) -> Result<String, fmt::Error> {
    let mut out: String = String::new();

    if let Some(progress) = list.project_progress {
        writeln!(out, "Project progress: {progress}%")?;
    }
    if list.tasks.is_empty() {
        writeln!(out, "No tasks.")?;
    }
    for row in &list.tasks {
        writeln!(
            out,
            "{:<10} {:<8} {:<32} {:<24} {:>3}%",
            row.status.as_str(),
            row.priority.as_str(),
            row.title,
            row.project,
            row.progress
        )?;
    }

    Ok(finish(&out))
}

pub fn kanban(columns: &[KanbanColumn<'_>], projects: &[Project]) -> Result<String, fmt::Error> {
    let mut out: String = String::new();

    for column in columns {
        let stage: String = column.status.as_str().to_uppercase();
        writeln!(out, "{stage} ({})", column.tasks.len())?;
        for task in &column.tasks {
            let project: &str = project_display_name(projects, &task.project_id);
            writeln!(out, "  - {} [{}] {project}", task.title, task.priority)?;
        }
    }

    Ok(finish(&out))
}

pub fn packages(list: &PackageList<'_>) -> Result<String, fmt::Error> {
    let mut out: String = String::new();

    for row in &list.packages {
        let state: &str = if row.active { "" } else { "  (inactive)" };
        writeln!(
            out,
            "{:<24} {:<30} {:>10} {:>4}%{state}",
            row.name,
            row.customer,
            money(row.monthly_fee),
            row.progress
        )?;
    }
    writeln!(
        out,
        "Monthly recurring revenue: {}",
        money(list.monthly_recurring_revenue)
    )?;

    Ok(finish(&out))
}

pub fn cost_import(report: &CostImportReport) -> Result<String, fmt::Error> {
    let preview = &report.preview;
    let mut out: String = String::new();

    for row in &preview.rows {
        match (row.status, &row.cost) {
            (CostRowStatus::Valid, Some(cost)) => writeln!(
                out,
                "row {:>3}  ok       {} ({}) {}",
                row.row_number,
                cost.name,
                cost.category,
                money(cost.effective_amount())
            )?,
            _ => writeln!(
                out,
                "row {:>3}  invalid  {}",
                row.row_number,
                row.errors.join("; ")
            )?,
        }
    }

    writeln!(
        out,
        "{} rows: {} valid, {} invalid",
        preview.total_rows, preview.valid_count, preview.invalid_count
    )?;
    writeln!(
        out,
        "Monthly recurring cost: {} -> {}",
        money(report.monthly_recurring_cost_before),
        money(report.monthly_recurring_cost_after)
    )?;

    Ok(finish(&out))
}
