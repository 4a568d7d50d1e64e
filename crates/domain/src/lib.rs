// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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

mod error;
mod status;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use error::DomainError;
pub use status::{
    CostFrequency, DeliverablePeriod, InvoiceStatus, OfferStatus, ProjectStatus, TaskPriority,
    TaskStatus,
};
pub use types::{
    Comment, Contact, Cost, Customer, Deliverable, Employee, Invoice, LineItem, Offer, Package,
    Project, Revenue, Subtask, Task,
};
pub use validation::{
    AMOUNT_TOLERANCE, validate_cost, validate_employee, validate_invoice, validate_offer,
};
