// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Closed sets of record states.
//!
//! Every enum here round-trips through its canonical lowercase string
//! (`as_str` / `FromStr`), which is also the value categorical filters
//! compare against.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Lifecycle state of a client project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    /// Work is in progress.
    #[default]
    Active,
    /// Paused by the client or the agency.
    OnHold,
    /// Work has been delivered and closed.
    Completed,
    /// Abandoned before completion.
    Cancelled,
}

impl ProjectStatus {
    /// Returns the canonical string form.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::OnHold => "on_hold",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl FromStr for ProjectStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "on_hold" => Ok(Self::OnHold),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(DomainError::InvalidStatus {
                kind: "project status",
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Stage of a task in the production pipeline.
///
/// Declaration order is the left-to-right Kanban order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Client brief received.
    #[default]
    Brief,
    /// Concept development.
    Concept,
    /// Design production.
    Design,
    /// Client-requested revisions.
    Revisions,
    /// Waiting on client approval.
    Approval,
    /// Handed over to the client.
    Delivered,
}

impl TaskStatus {
    /// Every pipeline stage, in board order.
    pub const PIPELINE: [Self; 6] = [
        Self::Brief,
        Self::Concept,
        Self::Design,
        Self::Revisions,
        Self::Approval,
        Self::Delivered,
    ];

    /// Returns the zero-based column index of this stage.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Brief => 0,
            Self::Concept => 1,
            Self::Design => 2,
            Self::Revisions => 3,
            Self::Approval => 4,
            Self::Delivered => 5,
        }
    }

    /// Returns the canonical string form.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Brief => "brief",
            Self::Concept => "concept",
            Self::Design => "design",
            Self::Revisions => "revisions",
            Self::Approval => "approval",
            Self::Delivered => "delivered",
        }
    }

    /// Returns whether the task has left the pipeline.
    #[must_use]
    pub const fn is_delivered(&self) -> bool {
        matches!(self, Self::Delivered)
    }
}

impl FromStr for TaskStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "brief" => Ok(Self::Brief),
            "concept" => Ok(Self::Concept),
            "design" => Ok(Self::Design),
            "revisions" => Ok(Self::Revisions),
            "approval" => Ok(Self::Approval),
            "delivered" => Ok(Self::Delivered),
            _ => Err(DomainError::InvalidStatus {
                kind: "task status",
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Urgency of a task.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

impl TaskPriority {
    /// Returns the canonical string form.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Urgent => "urgent",
        }
    }
}

impl FromStr for TaskPriority {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "urgent" => Ok(Self::Urgent),
            _ => Err(DomainError::InvalidStatus {
                kind: "task priority",
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How often a package deliverable quota resets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DeliverablePeriod {
    Daily,
    Weekly,
    #[default]
    Monthly,
}

impl DeliverablePeriod {
    /// Returns the canonical string form.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }
}

impl FromStr for DeliverablePeriod {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            _ => Err(DomainError::InvalidStatus {
                kind: "deliverable period",
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for DeliverablePeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// State of a commercial offer (quotation).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OfferStatus {
    /// Being prepared, not yet sent.
    #[default]
    Draft,
    /// Sent to the client and awaiting an answer.
    Sent,
    /// Accepted by the client. Terminal.
    Accepted,
    /// Declined by the client.
    Rejected,
    /// Validity date passed without an answer.
    Expired,
}

impl OfferStatus {
    /// Every offer state, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Draft,
        Self::Sent,
        Self::Accepted,
        Self::Rejected,
        Self::Expired,
    ];

    /// Returns the canonical string form.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Sent => "sent",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
            Self::Expired => "expired",
        }
    }
}

impl FromStr for OfferStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(Self::Draft),
            "sent" => Ok(Self::Sent),
            "accepted" => Ok(Self::Accepted),
            "rejected" => Ok(Self::Rejected),
            "expired" => Ok(Self::Expired),
            _ => Err(DomainError::InvalidStatus {
                kind: "offer status",
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for OfferStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Payment state of an invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    /// Nothing has been paid.
    #[default]
    Unpaid,
    /// Some, but not all, of the total has been paid.
    Partial,
    /// Fully settled. Terminal.
    Paid,
}

impl InvoiceStatus {
    /// Derives the payment state implied by an invoice's amounts.
    ///
    /// A zero-total invoice is considered paid.
    #[must_use]
    pub fn from_amounts(total: f64, paid_amount: f64) -> Self {
        if paid_amount >= total {
            Self::Paid
        } else if paid_amount > 0.0 {
            Self::Partial
        } else {
            Self::Unpaid
        }
    }

    /// Returns the canonical string form.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unpaid => "unpaid",
            Self::Partial => "partial",
            Self::Paid => "paid",
        }
    }
}

impl FromStr for InvoiceStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unpaid" => Ok(Self::Unpaid),
            "partial" => Ok(Self::Partial),
            "paid" => Ok(Self::Paid),
            _ => Err(DomainError::InvalidStatus {
                kind: "invoice status",
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Billing cadence of a recurring cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostFrequency {
    Weekly,
    Monthly,
    Quarterly,
    Yearly,
}

impl CostFrequency {
    /// Returns the canonical string form.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Quarterly => "quarterly",
            Self::Yearly => "yearly",
        }
    }
}

impl FromStr for CostFrequency {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            "quarterly" => Ok(Self::Quarterly),
            "yearly" => Ok(Self::Yearly),
            _ => Err(DomainError::InvalidStatus {
                kind: "cost frequency",
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for CostFrequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
