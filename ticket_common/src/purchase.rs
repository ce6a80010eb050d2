//! Purchase validator and processor.
//!
//! A purchase goes through a fixed, fail-fast sequence of checks. The first broken
//! rule aborts the purchase with `PurchaseError::InvalidPurchase` before any
//! collaborator is touched:
//!
//! 1. the request list is present,
//! 2. the account id is present,
//! 3. no request, and no request's ticket type, is missing,
//! 4. every quantity is greater than zero,
//! 5. the total quantity does not exceed `MAX_TICKETS`,
//! 6. at least one adult ticket is requested.
//!
//! A valid purchase reserves one seat per adult or child ticket and is charged the sum
//! of quantity times price over every request. Seats are reserved first, then payment
//! is taken; each collaborator is called exactly once. A failing collaborator aborts the
//! purchase and its error is returned as-is. Compensating a reservation whose payment
//! later fails is left to the collaborators and the caller.

use log::{debug, info, warn};
use serde::Serialize;

use crate::error::{PurchaseError, Violation};
use crate::pricing::MAX_TICKETS;
use crate::result::Result;
use crate::services::{SeatReservationService, TicketPaymentService};
use crate::tickets::{AccountId, PurchaseRequest, TicketType};

/// Entry point for buying tickets.
pub trait TicketService {
    /// Validates `request` and, if it is admissible, reserves the seats and takes payment.
    fn purchase_tickets(&self, request: &PurchaseRequest) -> Result<()>;
}

/// Seats and price computed for an admissible purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PurchaseSummary {
    /// Account the purchase is made for.
    pub account_id: AccountId,
    /// Number of tickets across all types.
    pub total_tickets: u32,
    /// Seats to reserve: adult and child tickets only.
    pub seats_to_reserve: u32,
    /// Amount to charge.
    pub total_price: u32,
}

/// A purchase request that passed every rule, with nulls and signs stripped away.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedPurchase {
    account_id: AccountId,
    tickets: Vec<(TicketType, u32)>,
}

impl ValidatedPurchase {
    /// Account the purchase is made for.
    pub fn account_id(&self) -> AccountId {
        self.account_id
    }

    /// Ticket types and quantities, in request order.
    pub fn tickets(&self) -> &[(TicketType, u32)] {
        &self.tickets
    }

    fn quantity_where(&self, predicate: impl Fn(TicketType) -> bool) -> u32 {
        self.tickets
            .iter()
            .filter(|(ticket_type, _)| predicate(*ticket_type))
            .map(|(_, quantity)| quantity)
            .sum()
    }

    /// Number of tickets across all types.
    pub fn total_tickets(&self) -> u32 {
        self.quantity_where(|_| true)
    }

    /// Seats to reserve. Infants sit on an adult's lap.
    pub fn seats_to_reserve(&self) -> u32 {
        self.quantity_where(TicketType::occupies_seat)
    }

    /// Total price according to the fixed price table.
    pub fn total_price(&self) -> u32 {
        self.tickets
            .iter()
            .map(|(ticket_type, quantity)| quantity * ticket_type.price())
            .sum()
    }

    /// Summary of what the purchase will reserve and charge.
    pub fn summary(&self) -> PurchaseSummary {
        PurchaseSummary {
            account_id: self.account_id,
            total_tickets: self.total_tickets(),
            seats_to_reserve: self.seats_to_reserve(),
            total_price: self.total_price(),
        }
    }
}

/// Checks `request` against the purchase rules, stopping at the first one broken.
pub fn validate(request: &PurchaseRequest) -> Result<ValidatedPurchase, Violation> {
    let entries = request.ticket_requests.as_ref().ok_or(Violation::NullRequests)?;
    let account_id = request.account_id.ok_or(Violation::NullAccountId)?;

    let typed = entries
        .iter()
        .map(|entry| {
            entry
                .as_ref()
                .and_then(|r| r.ticket_type().map(|ticket_type| (ticket_type, r.quantity())))
                .ok_or(Violation::NullEntry)
        })
        .collect::<Result<Vec<_>, _>>()?;

    let tickets = typed
        .into_iter()
        .map(|(ticket_type, quantity)| match u32::try_from(quantity) {
            Ok(quantity) if quantity > 0 => Ok((ticket_type, quantity)),
            _ => Err(Violation::InvalidQuantity),
        })
        .collect::<Result<Vec<_>, _>>()?;

    let total: u64 = tickets.iter().map(|(_, quantity)| u64::from(*quantity)).sum();
    debug!("Account {} requests {} ticket(s)", account_id, total);
    if total > u64::from(MAX_TICKETS) {
        return Err(Violation::TooManyTickets);
    }

    if !tickets.iter().any(|(ticket_type, _)| *ticket_type == TicketType::Adult) {
        return Err(Violation::NoAdult);
    }

    Ok(ValidatedPurchase { account_id, tickets })
}

/// Ticket service that validates purchases and drives the two collaborators.
///
/// Collaborators are injected at construction and never replaced, so the service
/// holds no state that changes between calls.
#[derive(Debug, Clone)]
pub struct TicketServiceImpl<R, P> {
    seat_reservation: R,
    payment: P,
}

impl<R, P> TicketServiceImpl<R, P>
where
    R: SeatReservationService,
    P: TicketPaymentService,
{
    /// Create a new instance of TicketServiceImpl
    pub fn new(seat_reservation: R, payment: P) -> Self {
        Self {
            seat_reservation,
            payment,
        }
    }

    /// Validates `request` and computes its seats and price without reserving or charging.
    pub fn quote(&self, request: &PurchaseRequest) -> Result<PurchaseSummary> {
        match validate(request) {
            Ok(purchase) => Ok(purchase.summary()),
            Err(violation) => {
                warn!(
                    "Purchase rejected for account {:?}: {}",
                    request.account_id, violation
                );
                Err(PurchaseError::InvalidPurchase(violation))
            }
        }
    }
}

impl<R, P> TicketService for TicketServiceImpl<R, P>
where
    R: SeatReservationService,
    P: TicketPaymentService,
{
    fn purchase_tickets(&self, request: &PurchaseRequest) -> Result<()> {
        let summary = self.quote(request)?;

        info!(
            "Reserving {} seat(s) for account {}",
            summary.seats_to_reserve, summary.account_id
        );
        self.seat_reservation
            .reserve_seat(summary.account_id, summary.seats_to_reserve)
            .map_err(PurchaseError::Reservation)?;

        info!(
            "Charging {} to account {}",
            summary.total_price, summary.account_id
        );
        self.payment
            .make_payment(summary.account_id, summary.total_price)
            .map_err(PurchaseError::Payment)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tickets::TicketTypeRequest;

    fn request(tickets: &[(TicketType, i32)]) -> PurchaseRequest {
        PurchaseRequest::new(
            1,
            tickets
                .iter()
                .map(|(ticket_type, quantity)| TicketTypeRequest::new(*ticket_type, *quantity)),
        )
    }

    #[test]
    fn summary_counts_seats_and_price() {
        let purchase = validate(&request(&[
            (TicketType::Adult, 5),
            (TicketType::Child, 4),
            (TicketType::Infant, 3),
        ]))
        .unwrap();

        assert_eq!(
            purchase.summary(),
            PurchaseSummary {
                account_id: 1,
                total_tickets: 12,
                seats_to_reserve: 9,
                total_price: 5 * 20 + 4 * 10,
            }
        );
    }

    #[test]
    fn repeated_types_are_summed() {
        let purchase = validate(&request(&[
            (TicketType::Adult, 1),
            (TicketType::Infant, 1),
            (TicketType::Adult, 2),
        ]))
        .unwrap();
        assert_eq!(purchase.seats_to_reserve(), 3);
        assert_eq!(purchase.total_price(), 60);
    }

    #[test]
    fn missing_list_is_reported_before_missing_account() {
        let empty = PurchaseRequest::default();
        assert_eq!(validate(&empty), Err(Violation::NullRequests));

        let no_account = PurchaseRequest {
            account_id: None,
            ticket_requests: Some(vec![None]),
        };
        assert_eq!(validate(&no_account), Err(Violation::NullAccountId));
    }

    #[test]
    fn null_entry_wins_over_bad_quantity() {
        let req = PurchaseRequest {
            account_id: Some(1),
            ticket_requests: Some(vec![Some(TicketTypeRequest::new(TicketType::Adult, -1)), None]),
        };
        assert_eq!(validate(&req), Err(Violation::NullEntry));
    }

    #[test]
    fn null_ticket_type_is_a_null_entry() {
        let req = PurchaseRequest::from_json_str(
            r#"{"account_id": 1, "ticket_requests": [{"ticket_type": null, "quantity": 1}]}"#,
        )
        .unwrap();
        assert_eq!(validate(&req), Err(Violation::NullEntry));
    }

    #[test]
    fn bad_quantity_wins_over_ticket_limit() {
        let req = request(&[(TicketType::Adult, 30), (TicketType::Child, 0)]);
        assert_eq!(validate(&req), Err(Violation::InvalidQuantity));
    }

    #[test]
    fn ticket_limit_wins_over_missing_adult() {
        let req = request(&[(TicketType::Child, 15), (TicketType::Infant, 6)]);
        assert_eq!(validate(&req), Err(Violation::TooManyTickets));
    }

    #[test]
    fn empty_request_list_needs_an_adult() {
        assert_eq!(validate(&request(&[])), Err(Violation::NoAdult));
    }

    #[test]
    fn huge_quantities_do_not_overflow() {
        let req = request(&[(TicketType::Adult, i32::MAX), (TicketType::Adult, i32::MAX)]);
        assert_eq!(validate(&req), Err(Violation::TooManyTickets));
    }
}
