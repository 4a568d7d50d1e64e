// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! In-memory snapshot of every dashboard table.
//!
//! A snapshot document holds one JSON array per table, with rows shaped like
//! the hosted store returns them. Contacts arrive as their own table and are
//! attached to their customer here, so the engine only ever sees customers
//! that own their contacts. Financial records are validated on load.

use crate::error::SnapshotError;
use agency_dash::Collections;
use agency_dash_domain::{
    Contact, Cost, Customer, Employee, Invoice, Offer, Package, Project, Revenue, Task,
    validate_cost, validate_employee, validate_invoice, validate_offer,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::{info, warn};

/// The snapshot document as stored on disk.
#[derive(Debug, Default, Deserialize)]
struct SnapshotDocument {
    #[serde(default)]
    customers: Vec<Customer>,
    #[serde(default)]
    contacts: Vec<Contact>,
    #[serde(default)]
    employees: Vec<Employee>,
    #[serde(default)]
    projects: Vec<Project>,
    #[serde(default)]
    tasks: Vec<Task>,
    #[serde(default)]
    packages: Vec<Package>,
    #[serde(default)]
    offers: Vec<Offer>,
    #[serde(default)]
    invoices: Vec<Invoice>,
    #[serde(default)]
    costs: Vec<Cost>,
    #[serde(default)]
    revenues: Vec<Revenue>,
}

/// Every entity collection of the dashboard, validated and normalized.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Customers, each owning its contacts.
    pub customers: Vec<Customer>,
    /// Staff, active and former.
    pub employees: Vec<Employee>,
    /// Client projects.
    pub projects: Vec<Project>,
    /// Tasks of every project.
    pub tasks: Vec<Task>,
    /// Retainer packages.
    pub packages: Vec<Package>,
    /// Offers, validated against their VAT arithmetic.
    pub offers: Vec<Offer>,
    /// Invoices, validated against their balance and status.
    pub invoices: Vec<Invoice>,
    /// Operating costs.
    pub costs: Vec<Cost>,
    /// Money received.
    pub revenues: Vec<Revenue>,
}

impl Snapshot {
    /// Parses and validates a snapshot document.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or any invoice, offer,
    /// employee or cost fails validation.
    pub fn from_json_str(json: &str) -> Result<Self, SnapshotError> {
        let document: SnapshotDocument = serde_json::from_str(json)?;
        Self::from_document(document)
    }

    /// Reads, parses and validates a snapshot file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, or for any reason
    /// [`Snapshot::from_json_str`] fails.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SnapshotError> {
        let path: &Path = path.as_ref();
        let json: String = std::fs::read_to_string(path).map_err(|source| SnapshotError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let snapshot: Self = Self::from_json_str(&json)?;
        info!(
            path = %path.display(),
            customers = snapshot.customers.len(),
            projects = snapshot.projects.len(),
            invoices = snapshot.invoices.len(),
            "Loaded snapshot"
        );

        Ok(snapshot)
    }

    fn from_document(document: SnapshotDocument) -> Result<Self, SnapshotError> {
        for invoice in &document.invoices {
            validate_invoice(invoice)?;
        }
        for offer in &document.offers {
            validate_offer(offer)?;
        }
        for employee in &document.employees {
            validate_employee(employee)?;
        }
        for cost in &document.costs {
            validate_cost(cost)?;
        }

        let customers: Vec<Customer> = attach_contacts(document.customers, document.contacts);

        Ok(Self {
            customers,
            employees: document.employees,
            projects: document.projects,
            tasks: document.tasks,
            packages: document.packages,
            offers: document.offers,
            invoices: document.invoices,
            costs: document.costs,
            revenues: document.revenues,
        })
    }

    /// Returns a borrowed view suitable for the engine.
    #[must_use]
    pub fn collections(&self) -> Collections<'_> {
        Collections {
            customers: &self.customers,
            employees: &self.employees,
            projects: &self.projects,
            tasks: &self.tasks,
            packages: &self.packages,
            offers: &self.offers,
            invoices: &self.invoices,
            costs: &self.costs,
            revenues: &self.revenues,
        }
    }

    /// Returns a new snapshot with `costs` appended to the cost table.
    #[must_use]
    pub fn with_costs(mut self, costs: Vec<Cost>) -> Self {
        self.costs.extend(costs);
        self
    }
}

/// Moves each contact under its customer, preserving input order.
///
/// Contacts whose customer is missing are dropped.
fn attach_contacts(mut customers: Vec<Customer>, contacts: Vec<Contact>) -> Vec<Customer> {
    let index: HashMap<String, usize> = customers
        .iter()
        .enumerate()
        .map(|(idx, customer)| (customer.id.clone(), idx))
        .collect();

    for contact in contacts {
        match index.get(&contact.customer_id) {
            Some(&idx) => customers[idx].contacts.push(contact),
            None => warn!(
                contact = %contact.id,
                customer = %contact.customer_id,
                "Dropping contact whose customer is not in the snapshot"
            ),
        }
    }

    customers
}
