//!
//! Ticket purchase rules and processing for a single venue's booking flow.
//!
//! This crate aggregates:
//! - `error` — unified error type `PurchaseError` and the rule `Violation` it carries.
//! - `result` — handy `Result<T, PurchaseError>` alias.
//! - `pricing` — the fixed price table and the per-purchase ticket limit.
//! - `tickets` — ticket types, ticket requests, and request-file parsing.
//! - `services` — seat reservation and payment collaborators.
//! - `purchase` — the purchase validator and processor.
#![warn(missing_docs)]
pub mod error;
pub mod result;
pub mod pricing;
pub mod tickets;
pub mod services;
pub mod purchase;

pub use error::{PurchaseError, Violation};
pub use result::Result;
pub use tickets::{AccountId, PurchaseRequest, TicketType, TicketTypeRequest};
pub use services::{SeatReservationService, ServiceError, TicketPaymentService};
pub use purchase::{PurchaseSummary, TicketService, TicketServiceImpl};
