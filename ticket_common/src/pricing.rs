//! Fixed price table and purchase limits.

/// Maximum number of tickets, across all types, in a single purchase.
pub const MAX_TICKETS: u32 = 20;

/// Price of an adult ticket.
pub const ADULT_TICKET_PRICE: u32 = 20;
/// Price of a child ticket.
pub const CHILD_TICKET_PRICE: u32 = 10;
/// Price of an infant ticket. Infants sit on an adult's lap.
pub const INFANT_TICKET_PRICE: u32 = 0;
