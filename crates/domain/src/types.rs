// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Dashboard records.
//!
//! Records are plain values. Links between them (`customer_id`,
//! `project_id`) are identifiers resolved by lookup, never ownership, and a
//! dangling identifier is a valid state.

use crate::status::{
    CostFrequency, DeliverablePeriod, InvoiceStatus, OfferStatus, ProjectStatus, TaskPriority,
    TaskStatus,
};
use serde::{Deserialize, Serialize};
use time::Date;

/// A client company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    /// Record identifier.
    pub id: String,
    /// Company name.
    pub name: String,
    /// City or emirate.
    pub location: String,
    /// Industry classification, if recorded.
    #[serde(default)]
    pub industry: Option<String>,
    /// Contacts at this customer, in entry order.
    #[serde(default)]
    pub contacts: Vec<Contact>,
}

/// A person at a customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Record identifier.
    pub id: String,
    /// The owning customer.
    pub customer_id: String,
    /// Full name.
    pub name: String,
    /// Email address.
    #[serde(default)]
    pub email: String,
    /// Phone number.
    #[serde(default)]
    pub phone: String,
    /// Whether this is the customer's main point of contact.
    ///
    /// Nothing guarantees exactly one primary contact per customer.
    #[serde(default)]
    pub is_primary: bool,
}

/// A member of staff and their cost components.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Record identifier.
    pub id: String,
    /// Full name.
    pub full_name: String,
    /// Job title.
    pub role: String,
    /// Monthly base salary.
    pub base_salary: f64,
    /// Annual medical insurance premium.
    #[serde(default)]
    pub insurance: f64,
    /// Annual flight ticket allowance.
    #[serde(default)]
    pub ticket_value: f64,
    /// Visa cost.
    #[serde(default)]
    pub visa_cost: f64,
    /// Annual leave entitlement in days.
    #[serde(default)]
    pub vacation_days: u32,
    /// Whether the employee is currently on staff.
    pub active: bool,
}

/// A piece of client work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Record identifier.
    pub id: String,
    /// The client this work is for.
    pub customer_id: String,
    /// Project name.
    pub name: String,
    /// Kind of work (branding, social, video, ...).
    #[serde(rename = "type")]
    pub project_type: String,
    /// Lifecycle state.
    pub status: ProjectStatus,
    /// Agreed budget, if any.
    #[serde(default)]
    pub budget: Option<f64>,
}

/// A checklist item inside a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subtask {
    /// Checklist text.
    #[serde(default)]
    pub title: String,
    /// Whether the item is done.
    pub completed: bool,
}

/// A note left on a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Who wrote it.
    pub author: String,
    /// The comment text.
    pub body: String,
}

/// A unit of work moving through the production pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Record identifier.
    pub id: String,
    /// The project this task belongs to.
    pub project_id: String,
    /// Task title.
    pub title: String,
    /// Pipeline stage.
    pub status: TaskStatus,
    /// Urgency.
    #[serde(default)]
    pub priority: TaskPriority,
    /// Checklist.
    #[serde(default)]
    pub subtasks: Vec<Subtask>,
    /// Discussion thread.
    #[serde(default)]
    pub comments: Vec<Comment>,
}

/// A recurring quota of work owed under a package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deliverable {
    /// What is being delivered ("Social posts").
    pub name: String,
    /// Target count per period. May be zero.
    pub quantity: u32,
    /// Count delivered so far this period. May exceed `quantity`.
    #[serde(default)]
    pub completed_this_period: u32,
    /// Quota reset cadence.
    #[serde(default)]
    pub period: DeliverablePeriod,
}

/// A retainer agreement with a customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    /// Record identifier.
    pub id: String,
    /// The client on retainer.
    pub customer_id: String,
    /// Package name.
    pub name: String,
    /// Fee billed every month.
    pub monthly_fee: f64,
    /// Whether the retainer is running.
    pub active: bool,
    /// Quotas owed under this package.
    #[serde(default)]
    pub deliverables: Vec<Deliverable>,
}

/// A priced line on an offer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// What is being sold.
    pub description: String,
    /// Number of units.
    pub quantity: f64,
    /// Price per unit.
    pub unit_price: f64,
    /// Line total as quoted.
    pub amount: f64,
}

/// A quotation sent to a customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    /// Record identifier.
    pub id: String,
    /// The client being quoted.
    pub customer_id: String,
    /// Human-facing offer number.
    pub number: String,
    /// Quoted lines.
    #[serde(default)]
    pub line_items: Vec<LineItem>,
    /// Sum before VAT.
    pub subtotal: f64,
    /// VAT rate in percent.
    pub vat_rate: f64,
    /// VAT charged.
    pub vat_amount: f64,
    /// Amount payable. Expected to equal `subtotal + vat_amount`.
    pub total: f64,
    /// Last day the offer can be accepted.
    pub valid_until: Date,
    /// Commercial state.
    pub status: OfferStatus,
}

impl Offer {
    /// Returns `subtotal + vat_amount`.
    #[must_use]
    pub fn derived_total(&self) -> f64 {
        self.subtotal + self.vat_amount
    }
}

/// A bill issued to a customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    /// Record identifier.
    pub id: String,
    /// The billed client.
    pub customer_id: String,
    /// Human-facing invoice number.
    pub number: String,
    /// Amount billed.
    pub total: f64,
    /// Amount received so far.
    #[serde(default)]
    pub paid_amount: f64,
    /// Amount still owed. Expected to equal `total - paid_amount`.
    pub balance: f64,
    /// Payment deadline.
    pub due_date: Date,
    /// Payment state.
    pub status: InvoiceStatus,
}

impl Invoice {
    /// Returns `total - paid_amount`, the canonical balance.
    #[must_use]
    pub fn derived_balance(&self) -> f64 {
        self.total - self.paid_amount
    }

    /// Returns whether the invoice is fully settled.
    #[must_use]
    pub fn is_paid(&self) -> bool {
        self.status == InvoiceStatus::Paid
    }
}

/// An operating expense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cost {
    /// Record identifier.
    pub id: String,
    /// Expense name ("Office rent").
    #[serde(default)]
    pub name: String,
    /// Grouping key ("rent", "software", ...).
    pub category: String,
    /// Budgeted amount.
    pub expected_amount: f64,
    /// Amount actually spent, once known.
    #[serde(default)]
    pub actual_amount: Option<f64>,
    /// Whether the expense repeats.
    #[serde(default)]
    pub recurring: bool,
    /// Cadence of a recurring expense.
    #[serde(default)]
    pub frequency: Option<CostFrequency>,
}

impl Cost {
    /// Returns the actual amount, falling back to the expected amount.
    #[must_use]
    pub fn effective_amount(&self) -> f64 {
        self.actual_amount.unwrap_or(self.expected_amount)
    }

    /// Returns whether this expense recurs every month.
    #[must_use]
    pub fn is_monthly_recurring(&self) -> bool {
        self.recurring && self.frequency == Some(CostFrequency::Monthly)
    }
}

/// Money received from a customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Revenue {
    /// Record identifier.
    pub id: String,
    /// The paying client.
    pub customer_id: String,
    /// Amount received.
    pub amount: f64,
    /// Date received.
    pub date: Date,
    /// Free-text note.
    #[serde(default)]
    pub description: String,
}
