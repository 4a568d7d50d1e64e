// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Subcommands and the views they produce.

use crate::render;
use agency_dash::{
    Collections, DashboardSummary, KanbanColumn, MATCH_ALL, OfferStatusTotals, PredicateSet,
    cost_totals_by_category, customer_display_name, dashboard_summary, filter_entities,
    group_by_pipeline, is_overdue, monthly_recurring_cost, monthly_recurring_revenue,
    offer_pipeline, package_progress, primary_contact, project_display_name, project_progress,
    revenue_by_customer, sort_customers_by_name, sort_invoices_by_due_date,
    sort_tasks_by_pipeline, subtask_progress, tasks_for_project,
};
use agency_dash_domain::{Customer, Invoice, InvoiceStatus, Package, Task, TaskPriority, TaskStatus};
use agency_dash_snapshot::{CostImportPreview, Snapshot, preview_cost_import};
use clap::Subcommand;
use color_eyre::eyre::{Result, WrapErr};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use time::{Date, OffsetDateTime};

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Headline figures: receivables, recurring revenue and cost, payroll, pipeline
    Summary,
    /// List customers, sorted by name
    Customers {
        /// Case-insensitive text to search names, locations and contacts for
        #[arg(long)]
        query: Option<String>,
        /// Only customers in this industry
        #[arg(long, default_value = MATCH_ALL)]
        industry: String,
    },
    /// List invoices, soonest due first
    Invoices {
        /// Only invoices in this status (unpaid, partial, paid)
        #[arg(long, default_value = MATCH_ALL)]
        status: String,
        /// Only invoices past their due date
        #[arg(long)]
        overdue: bool,
    },
    /// List tasks in pipeline order
    Tasks {
        /// Only tasks of this project id
        #[arg(long)]
        project: Option<String>,
        /// Group tasks into one column per pipeline stage
        #[arg(long)]
        kanban: bool,
    },
    /// List packages with their deliverable progress
    Packages,
    /// Validate a CSV of costs and show the effect of importing the valid rows
    ImportCosts {
        /// Path to the CSV file
        csv: PathBuf,
    },
}

/// Everything `summary` reports.
#[derive(Debug, Serialize)]
pub struct SummaryReport {
    pub summary: DashboardSummary,
    pub offers: Vec<OfferStatusTotals>,
    pub costs_by_category: BTreeMap<String, f64>,
    /// Revenue per customer, keyed by display name.
    pub revenue_by_customer: BTreeMap<String, f64>,
}

#[derive(Debug, Serialize)]
pub struct CustomerRow<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub location: &'a str,
    pub industry: Option<&'a str>,
    pub primary_contact: Option<&'a str>,
}

#[derive(Debug, Serialize)]
pub struct InvoiceRow<'a> {
    pub number: &'a str,
    pub customer: &'a str,
    pub total: f64,
    pub balance: f64,
    pub due_date: Date,
    pub status: InvoiceStatus,
    pub overdue: bool,
}

#[derive(Debug, Serialize)]
pub struct TaskRow<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub project: &'a str,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    /// Share of the checklist done, in percent.
    pub progress: u32,
}

#[derive(Debug, Serialize)]
pub struct TaskList<'a> {
    /// Delivered share of the selected project, when one was selected.
    pub project_progress: Option<u32>,
    pub tasks: Vec<TaskRow<'a>>,
}

#[derive(Debug, Serialize)]
pub struct PackageRow<'a> {
    pub name: &'a str,
    pub customer: &'a str,
    pub monthly_fee: f64,
    pub active: bool,
    pub progress: u32,
}

#[derive(Debug, Serialize)]
pub struct PackageList<'a> {
    pub monthly_recurring_revenue: f64,
    pub packages: Vec<PackageRow<'a>>,
}

#[derive(Debug, Serialize)]
pub struct CostImportReport {
    pub preview: CostImportPreview,
    pub monthly_recurring_cost_before: f64,
    pub monthly_recurring_cost_after: f64,
}

/// Runs one command against a loaded snapshot and returns what to print.
///
/// # Errors
///
/// Returns an error for an unknown invoice status, an unreadable or
/// malformed CSV file, or a serialization failure.
pub fn run(
    snapshot: &Snapshot,
    command: &Command,
    reference_time: OffsetDateTime,
    json: bool,
) -> Result<String> {
    let collections: Collections<'_> = snapshot.collections();

    match command {
        Command::Summary => {
            let report: SummaryReport = summary_report(&collections, reference_time);
            emit(json, &report, render::summary)
        }
        Command::Customers { query, industry } => {
            let rows: Vec<CustomerRow<'_>> =
                customer_rows(collections.customers, query.as_deref(), industry);
            emit(json, &rows, |rows| render::customers(rows))
        }
        Command::Invoices { status, overdue } => {
            let rows: Vec<InvoiceRow<'_>> =
                invoice_rows(&collections, status, *overdue, reference_time)?;
            emit(json, &rows, |rows| render::invoices(rows))
        }
        Command::Tasks { project, kanban } => {
            let selected: Vec<&Task> = project.as_deref().map_or_else(
                || collections.tasks.iter().collect(),
                |id| tasks_for_project(collections.tasks, id),
            );

            if *kanban {
                let columns: Vec<KanbanColumn<'_>> = group_by_pipeline(selected);
                emit(json, &columns, |columns| render::kanban(columns, collections.projects))
            } else {
                let list: TaskList<'_> = task_list(&collections, &selected, project.as_deref());
                emit(json, &list, render::tasks)
            }
        }
        Command::Packages => {
            let list: PackageList<'_> = package_list(&collections);
            emit(json, &list, render::packages)
        }
        Command::ImportCosts { csv } => {
            let content: String = std::fs::read_to_string(csv)
                .wrap_err_with(|| format!("Failed to read {}", csv.display()))?;
            let report: CostImportReport = cost_import_report(snapshot, &content)?;
            emit(json, &report, render::cost_import)
        }
    }
}

/// Serializes `value` as JSON, or renders it as text.
fn emit<T, F>(json: bool, value: &T, text: F) -> Result<String>
where
    T: Serialize + ?Sized,
    F: FnOnce(&T) -> Result<String, fmt::Error>,
{
    if json {
        Ok(serde_json::to_string_pretty(value)?)
    } else {
        Ok(text(value)?)
    }
}

fn summary_report(collections: &Collections<'_>, reference_time: OffsetDateTime) -> SummaryReport {
    let revenue: BTreeMap<String, f64> = revenue_by_customer(collections.revenues)
        .into_iter()
        .fold(BTreeMap::new(), |mut acc, (customer_id, amount)| {
            *acc.entry(customer_display_name(collections.customers, &customer_id).to_string())
                .or_insert(0.0) += amount;
            acc
        });

    SummaryReport {
        summary: dashboard_summary(collections, reference_time),
        offers: offer_pipeline(collections.offers),
        costs_by_category: cost_totals_by_category(collections.costs),
        revenue_by_customer: revenue,
    }
}

fn customer_rows<'a>(
    customers: &'a [Customer],
    query: Option<&str>,
    industry: &str,
) -> Vec<CustomerRow<'a>> {
    let mut predicates: PredicateSet = PredicateSet::new().with_filter("industry", industry);
    if let Some(query) = query {
        predicates = predicates.with_text_query(query);
    }

    sort_customers_by_name(&filter_entities(customers, &predicates))
        .into_iter()
        .map(|customer| CustomerRow {
            id: &customer.id,
            name: &customer.name,
            location: &customer.location,
            industry: customer.industry.as_deref(),
            primary_contact: primary_contact(customer).map(|c| c.name.as_str()),
        })
        .collect()
}

fn invoice_rows<'a>(
    collections: &Collections<'a>,
    status: &str,
    overdue_only: bool,
    reference_time: OffsetDateTime,
) -> Result<Vec<InvoiceRow<'a>>> {
    if status != MATCH_ALL {
        InvoiceStatus::from_str(status)?;
    }

    let predicates: PredicateSet = PredicateSet::new().with_filter("status", status);
    let selected: Vec<&Invoice> = filter_entities(collections.invoices, &predicates)
        .into_iter()
        .filter(|invoice| !overdue_only || is_overdue(*invoice, reference_time))
        .collect();

    Ok(sort_invoices_by_due_date(&selected)
        .into_iter()
        .map(|invoice| InvoiceRow {
            number: &invoice.number,
            customer: customer_display_name(collections.customers, &invoice.customer_id),
            total: invoice.total,
            balance: invoice.balance,
            due_date: invoice.due_date,
            status: invoice.status,
            overdue: is_overdue(invoice, reference_time),
        })
        .collect())
}

fn task_list<'a>(
    collections: &Collections<'a>,
    selected: &[&'a Task],
    project: Option<&str>,
) -> TaskList<'a> {
    TaskList {
        project_progress: project.map(|id| project_progress(collections.tasks, id)),
        tasks: sort_tasks_by_pipeline(selected)
            .into_iter()
            .map(|task| TaskRow {
                id: &task.id,
                title: &task.title,
                project: project_display_name(collections.projects, &task.project_id),
                status: task.status,
                priority: task.priority,
                progress: subtask_progress(task),
            })
            .collect(),
    }
}

fn package_list<'a>(collections: &Collections<'a>) -> PackageList<'a> {
    PackageList {
        monthly_recurring_revenue: monthly_recurring_revenue(collections.packages),
        packages: collections
            .packages
            .iter()
            .map(|package: &Package| PackageRow {
                name: &package.name,
                customer: customer_display_name(collections.customers, &package.customer_id),
                monthly_fee: package.monthly_fee,
                active: package.active,
                progress: package_progress(package),
            })
            .collect(),
    }
}

fn cost_import_report(snapshot: &Snapshot, content: &str) -> Result<CostImportReport> {
    let preview: CostImportPreview = preview_cost_import(content)?;
    let merged: Snapshot = snapshot.clone().with_costs(preview.accepted_costs());

    Ok(CostImportReport {
        monthly_recurring_cost_before: monthly_recurring_cost(&snapshot.costs),
        monthly_recurring_cost_after: monthly_recurring_cost(&merged.costs),
        preview,
    })
}
