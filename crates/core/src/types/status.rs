//! Status and label enums for records.

use serde::{Deserialize, Serialize};

/// Kitchen/service status of an order.
///
/// Moves are driven by staff, never by timers:
///
/// ```text
/// pending ──► preparing ──► completed
///    │            │
///    └────────────┴──► cancelled
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Preparing,
    Completed,
    Cancelled,
}

/// Error returned for an order status move the workflow does not allow.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("cannot move order from {from} to {to}")]
pub struct TransitionError {
    /// Status the order is in.
    pub from: OrderStatus,
    /// Status that was requested.
    pub to: OrderStatus,
}

impl OrderStatus {
    /// Every status, in list-filter order.
    pub const ALL: [Self; 4] = [
        Self::Pending,
        Self::Preparing,
        Self::Completed,
        Self::Cancelled,
    ];

    /// The forward step offered to staff for this status, if any.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Pending => Some(Self::Preparing),
            Self::Preparing => Some(Self::Completed),
            Self::Completed | Self::Cancelled => None,
        }
    }

    /// Whether no further moves are possible.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }

    /// Validate a move to `to`.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError`] unless `to` is the next forward step, or a
    /// cancellation of an order that has not finished.
    pub const fn transition(self, to: Self) -> Result<Self, TransitionError> {
        let allowed = match (self, to) {
            (Self::Pending, Self::Preparing)
            | (Self::Preparing, Self::Completed)
            | (Self::Pending | Self::Preparing, Self::Cancelled) => true,
            _ => false,
        };
        if allowed {
            Ok(to)
        } else {
            Err(TransitionError { from: self, to })
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Pending => "pending",
            Self::Preparing => "preparing",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        })
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.to_string() == s)
            .ok_or_else(|| format!("invalid order status: {s}"))
    }
}

/// How an order was settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PaymentMethod {
    Card,
    #[default]
    Cash,
    #[serde(rename = "M-Pesa")]
    MPesa,
}

/// Table booking status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ReservationStatus {
    Pending,
    #[default]
    Confirmed,
    Cancelled,
}

/// Marketing campaign lifecycle label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CampaignStatus {
    Active,
    Scheduled,
    Completed,
}

/// Kind of promotion a campaign runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CampaignType {
    Discount,
    Offer,
    Bundle,
}

impl std::str::FromStr for CampaignType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Discount" => Ok(Self::Discount),
            "Offer" => Ok(Self::Offer),
            "Bundle" => Ok(Self::Bundle),
            _ => Err(format!("invalid campaign type: {s}")),
        }
    }
}

/// Loyalty tier label shown against a customer.
///
/// A display label only: nothing recomputes it from points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Tier {
    #[default]
    Bronze,
    Silver,
    Gold,
}

/// Category of a dashboard activity-feed entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    Redemption,
    Earning,
    Booking,
    Order,
    Signup,
}

/// Outcome recorded in the access log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessOutcome {
    Success,
    Failure,
}
