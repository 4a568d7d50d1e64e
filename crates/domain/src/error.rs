// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::status::InvoiceStatus;
use thiserror::Error;

/// Errors raised while parsing or validating dashboard records.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// A status string does not name a known state.
    #[error("Invalid {kind}: '{value}'")]
    InvalidStatus {
        /// Which status set was being parsed.
        kind: &'static str,
        /// The rejected input.
        value: String,
    },

    /// A required text field is empty.
    #[error("{record}: {field} cannot be empty")]
    EmptyField {
        /// The record identifier.
        record: String,
        /// The empty field.
        field: &'static str,
    },

    /// A monetary field holds a negative or non-finite value.
    #[error("{record}: {field} must be a non-negative amount, got {value}")]
    InvalidAmount {
        /// The record identifier.
        record: String,
        /// The offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// An invoice balance disagrees with `total - paid_amount`.
    #[error("Invoice {invoice}: balance {actual} does not equal total minus paid amount ({expected})")]
    BalanceMismatch {
        /// The invoice identifier.
        invoice: String,
        /// The balance implied by the invoice amounts.
        expected: f64,
        /// The stored balance.
        actual: f64,
    },

    /// An invoice status disagrees with its amounts.
    #[error("Invoice {invoice}: status '{actual}' does not match its amounts (expected '{expected}')")]
    InvoiceStatusMismatch {
        /// The invoice identifier.
        invoice: String,
        /// The status implied by the invoice amounts.
        expected: InvoiceStatus,
        /// The stored status.
        actual: InvoiceStatus,
    },

    /// An offer total disagrees with `subtotal + vat_amount`.
    #[error("Offer {offer}: total {actual} does not equal subtotal plus VAT ({expected})")]
    OfferTotalMismatch {
        /// The offer identifier.
        offer: String,
        /// The total implied by subtotal and VAT.
        expected: f64,
        /// The stored total.
        actual: f64,
    },
}
