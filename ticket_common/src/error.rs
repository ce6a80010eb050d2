//! Error types shared between the library and the client.
//!
//! `PurchaseError` has a single validation kind, `InvalidPurchase`, which carries the
//! `Violation` that stopped the purchase. Failures raised by the seat reservation or
//! payment collaborators are wrapped transparently, so their message and source reach
//! the caller unchanged. The remaining variants cover loading ticket requests from files.
use std::io;

use thiserror::Error;

use crate::pricing::MAX_TICKETS;
use crate::services::ServiceError;

/// Business rule broken by a purchase request, in the order the rules are checked.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    /// The ticket request list itself is missing.
    #[error("request list is null")]
    NullRequests,

    /// The account id is missing.
    #[error("account id is null")]
    NullAccountId,

    /// A ticket request, or its ticket type, is missing.
    #[error("request contains null entry")]
    NullEntry,

    /// A ticket request asks for zero or a negative number of tickets.
    #[error("invalid ticket quantity, must be > 0")]
    InvalidQuantity,

    /// The total number of tickets is above the per-purchase limit.
    #[error("exceeds maximum ticket count of {max}", max = MAX_TICKETS)]
    TooManyTickets,

    /// No adult ticket accompanies the child and infant tickets.
    #[error("at least one adult ticket required")]
    NoAdult,
}

/// Unified error type for purchase processing and request loading.
#[derive(Error, Debug)]
pub enum PurchaseError {
    /// The purchase request broke a business rule; no collaborator was called.
    #[error("Invalid purchase: {0}")]
    InvalidPurchase(Violation),

    /// The seat reservation collaborator failed.
    #[error(transparent)]
    Reservation(ServiceError),

    /// The payment collaborator failed.
    #[error(transparent)]
    Payment(ServiceError),

    /// I/O error while reading a request file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Failure while decoding a JSON purchase request.
    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// A line of a ticket request file could not be parsed.
    #[error("Parse request file error: {0}")]
    ParseRequestFile(String),
}

impl From<Violation> for PurchaseError {
    fn from(violation: Violation) -> Self {
        PurchaseError::InvalidPurchase(violation)
    }
}

impl PurchaseError {
    /// Returns the violated rule when this is a validation failure.
    pub fn violation(&self) -> Option<Violation> {
        match self {
            PurchaseError::InvalidPurchase(violation) => Some(*violation),
            _ => None,
        }
    }
}
