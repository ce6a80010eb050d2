//! External collaborators invoked after a purchase has been validated.
//!
//! The processor talks to the seat reservation and payment systems only through the
//! two traits below. Any failure they raise is opaque to this crate and is handed back
//! to the caller untouched. The logging implementations are the defaults used by the
//! command-line client.
use std::sync::Arc;

use log::info;

use crate::tickets::AccountId;

/// Opaque failure raised by an external collaborator.
pub type ServiceError = Box<dyn std::error::Error + Send + Sync>;

/// Reserves seats for an account.
pub trait SeatReservationService {
    /// Reserve `total_seats` seats for `account_id`.
    fn reserve_seat(&self, account_id: AccountId, total_seats: u32) -> Result<(), ServiceError>;
}

/// Charges an account for a purchase.
pub trait TicketPaymentService {
    /// Charge `total_amount` to `account_id`.
    fn make_payment(&self, account_id: AccountId, total_amount: u32) -> Result<(), ServiceError>;
}

impl<T: SeatReservationService + ?Sized> SeatReservationService for &T {
    fn reserve_seat(&self, account_id: AccountId, total_seats: u32) -> Result<(), ServiceError> {
        (**self).reserve_seat(account_id, total_seats)
    }
}

impl<T: SeatReservationService + ?Sized> SeatReservationService for Box<T> {
    fn reserve_seat(&self, account_id: AccountId, total_seats: u32) -> Result<(), ServiceError> {
        (**self).reserve_seat(account_id, total_seats)
    }
}

impl<T: SeatReservationService + ?Sized> SeatReservationService for Arc<T> {
    fn reserve_seat(&self, account_id: AccountId, total_seats: u32) -> Result<(), ServiceError> {
        (**self).reserve_seat(account_id, total_seats)
    }
}

impl<T: TicketPaymentService + ?Sized> TicketPaymentService for &T {
    fn make_payment(&self, account_id: AccountId, total_amount: u32) -> Result<(), ServiceError> {
        (**self).make_payment(account_id, total_amount)
    }
}

impl<T: TicketPaymentService + ?Sized> TicketPaymentService for Box<T> {
    fn make_payment(&self, account_id: AccountId, total_amount: u32) -> Result<(), ServiceError> {
        (**self).make_payment(account_id, total_amount)
    }
}

impl<T: TicketPaymentService + ?Sized> TicketPaymentService for Arc<T> {
    fn make_payment(&self, account_id: AccountId, total_amount: u32) -> Result<(), ServiceError> {
        (**self).make_payment(account_id, total_amount)
    }
}

/// Seat reservation stand-in that records the request in the log and always succeeds.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingSeatReservationService;

impl SeatReservationService for LoggingSeatReservationService {
    fn reserve_seat(&self, account_id: AccountId, total_seats: u32) -> Result<(), ServiceError> {
        info!("Reserved {} seat(s) for account {}", total_seats, account_id);
        Ok(())
    }
}

/// Payment stand-in that records the charge in the log and always succeeds.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingPaymentService;

impl TicketPaymentService for LoggingPaymentService {
    fn make_payment(&self, account_id: AccountId, total_amount: u32) -> Result<(), ServiceError> {
        info!("Charged {} to account {}", total_amount, account_id);
        Ok(())
    }
}
