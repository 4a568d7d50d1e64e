// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Record validation.
//!
//! These checks belong to whoever produces records (a loader, an import).
//! The aggregation engine trusts its input and never calls them.

use crate::error::DomainError;
use crate::status::InvoiceStatus;
use crate::types::{Cost, Employee, Invoice, Offer};

/// Largest difference tolerated between a stored and a derived amount.
pub const AMOUNT_TOLERANCE: f64 = 0.005;

fn amounts_agree(a: f64, b: f64) -> bool {
    (a - b).abs() <= AMOUNT_TOLERANCE
}

fn require_amount(record: &str, field: &'static str, value: f64) -> Result<(), DomainError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(DomainError::InvalidAmount {
            record: record.to_string(),
            field,
            value,
        })
    }
}

/// Validates an invoice's amounts and status.
///
/// The canonical balance is `total - paid_amount`; the stored status must
/// match the one implied by the amounts.
///
/// # Errors
///
/// Returns an error if:
/// - `total` or `paid_amount` is negative or not finite
/// - `balance` differs from `total - paid_amount`
/// - `status` differs from [`InvoiceStatus::from_amounts`]
pub fn validate_invoice(invoice: &Invoice) -> Result<(), DomainError> {
    require_amount(&invoice.id, "total", invoice.total)?;
    require_amount(&invoice.id, "paid_amount", invoice.paid_amount)?;

    let expected: f64 = invoice.derived_balance();
    if !amounts_agree(expected, invoice.balance) {
        return Err(DomainError::BalanceMismatch {
            invoice: invoice.id.clone(),
            expected,
            actual: invoice.balance,
        });
    }

    let expected_status: InvoiceStatus =
        InvoiceStatus::from_amounts(invoice.total, invoice.paid_amount);
    if expected_status != invoice.status {
        return Err(DomainError::InvoiceStatusMismatch {
            invoice: invoice.id.clone(),
            expected: expected_status,
            actual: invoice.status,
        });
    }

    Ok(())
}

/// Validates that an offer's total is its subtotal plus VAT.
///
/// # Errors
///
/// Returns an error if an amount is negative or the total disagrees with
/// `subtotal + vat_amount`.
pub fn validate_offer(offer: &Offer) -> Result<(), DomainError> {
    require_amount(&offer.id, "subtotal", offer.subtotal)?;
    require_amount(&offer.id, "vat_amount", offer.vat_amount)?;
    require_amount(&offer.id, "total", offer.total)?;

    let expected: f64 = offer.derived_total();
    if !amounts_agree(expected, offer.total) {
        return Err(DomainError::OfferTotalMismatch {
            offer: offer.id.clone(),
            expected,
            actual: offer.total,
        });
    }

    Ok(())
}

/// Validates an employee's name and cost fields.
///
/// # Errors
///
/// Returns an error if the name is empty or any cost field is negative.
pub fn validate_employee(employee: &Employee) -> Result<(), DomainError> {
    if employee.full_name.trim().is_empty() {
        return Err(DomainError::EmptyField {
            record: employee.id.clone(),
            field: "full_name",
        });
    }

    require_amount(&employee.id, "base_salary", employee.base_salary)?;
    require_amount(&employee.id, "insurance", employee.insurance)?;
    require_amount(&employee.id, "ticket_value", employee.ticket_value)?;
    require_amount(&employee.id, "visa_cost", employee.visa_cost)?;

    Ok(())
}

/// Validates a cost's category and amounts.
///
/// # Errors
///
/// Returns an error if the category is empty or an amount is negative.
pub fn validate_cost(cost: &Cost) -> Result<(), DomainError> {
    if cost.category.trim().is_empty() {
        return Err(DomainError::EmptyField {
            record: cost.id.clone(),
            field: "category",
        });
    }

    require_amount(&cost.id, "expected_amount", cost.expected_amount)?;
    if let Some(actual) = cost.actual_amount {
        require_amount(&cost.id, "actual_amount", actual)?;
    }

    Ok(())
}
