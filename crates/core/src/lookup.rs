// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Identifier lookups with display fallbacks.
//!
//! A dangling identifier is a normal state: lookups return `None` and the
//! display helpers substitute a placeholder.

use agency_dash_domain::{Contact, Customer, Project, Task};

/// Display name used when a customer id does not resolve.
pub const UNKNOWN_CUSTOMER: &str = "Unknown customer";

/// Display name used when a project id does not resolve.
pub const UNKNOWN_PROJECT: &str = "Unknown project";

/// Finds a customer by id.
#[must_use]
pub fn find_customer<'a>(customers: &'a [Customer], id: &str) -> Option<&'a Customer> {
    customers.iter().find(|c| c.id == id)
}

/// Finds a project by id.
#[must_use]
pub fn find_project<'a>(projects: &'a [Project], id: &str) -> Option<&'a Project> {
    projects.iter().find(|p| p.id == id)
}

/// Returns the customer's name, or [`UNKNOWN_CUSTOMER`].
#[must_use]
pub fn customer_display_name<'a>(customers: &'a [Customer], id: &str) -> &'a str {
    find_customer(customers, id).map_or(UNKNOWN_CUSTOMER, |c| c.name.as_str())
}

/// Returns the project's name, or [`UNKNOWN_PROJECT`].
#[must_use]
pub fn project_display_name<'a>(projects: &'a [Project], id: &str) -> &'a str {
    find_project(projects, id).map_or(UNKNOWN_PROJECT, |p| p.name.as_str())
}

/// Returns the contact to address for a customer.
///
/// The first contact flagged primary wins. With no primary contact the
/// first contact is used; with no contacts at all there is none.
#[must_use]
pub fn primary_contact(customer: &Customer) -> Option<&Contact> {
    customer
        .contacts
        .iter()
        .find(|c| c.is_primary)
        .or_else(|| customer.contacts.first())
}

/// Returns a project's tasks in input order.
#[must_use]
pub fn tasks_for_project<'a>(tasks: &'a [Task], project_id: &str) -> Vec<&'a Task> {
    tasks.iter().filter(|t| t.project_id == project_id).collect()
}
