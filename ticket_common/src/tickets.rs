//! Ticket types, ticket requests, and helpers for loading them from files.

use std::io::{BufRead, Read};
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use crate::error::PurchaseError;
use crate::pricing::{ADULT_TICKET_PRICE, CHILD_TICKET_PRICE, INFANT_TICKET_PRICE};

/// Opaque account handle supplied by the caller.
pub type AccountId = u64;

/// Trait providing file parsing for ticket requests.
pub trait TicketRequestParser {
    /// Parses ticket requests from a buffered reader.
    ///
    /// Each non-empty line holds one request as `TYPE QTY` or `TYPE=QTY`. Text after
    /// `#` is ignored. Quantities keep their sign; rejecting them is the processor's job.
    fn parse_from_file<R: BufRead>(reader: R) -> Result<Vec<TicketTypeRequest>, PurchaseError>;
}

impl TicketRequestParser for TicketTypeRequest {
    fn parse_from_file<R: BufRead>(reader: R) -> Result<Vec<Self>, PurchaseError> {
        let mut requests = Vec::new();

        for (index, line_result) in reader.lines().enumerate() {
            let line = line_result.map_err(PurchaseError::Io)?;
            let content = line.split('#').next().unwrap_or_default().trim();
            if content.is_empty() {
                continue;
            }

            match content.parse::<Self>() {
                Ok(request) => requests.push(request),
                Err(e) => {
                    return Err(PurchaseError::ParseRequestFile(format!(
                        "line {}: {}",
                        index + 1,
                        e
                    )));
                }
            }
        }
        Ok(requests)
    }
}

/// Kind of ticket. Determines the price and whether a seat is consumed.
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    ValueEnum,
    Display,
    EnumString,
    EnumIter,
    Hash,
    Eq,
    PartialEq,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[clap(rename_all = "lower")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum TicketType {
    /// Adult ticket. At least one is required in every purchase.
    Adult,
    /// Child ticket. Occupies a seat.
    Child,
    /// Infant ticket. Sits on an adult's lap and occupies no seat.
    Infant,
}

impl TicketType {
    /// Price of a single ticket of this type, taken from the fixed price table.
    pub const fn price(self) -> u32 {
        match self {
            TicketType::Adult => ADULT_TICKET_PRICE,
            TicketType::Child => CHILD_TICKET_PRICE,
            TicketType::Infant => INFANT_TICKET_PRICE,
        }
    }

    /// Whether a ticket of this type needs a reserved seat.
    pub const fn occupies_seat(self) -> bool {
        matches!(self, TicketType::Adult | TicketType::Child)
    }
}

/// Request for a number of tickets of one type.
///
/// The value is immutable once built. Any quantity is representable here; zero and
/// negative quantities are rejected when the purchase is validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketTypeRequest {
    ticket_type: Option<TicketType>,
    quantity: i32,
}

impl TicketTypeRequest {
    /// Creates a request for `quantity` tickets of `ticket_type`.
    pub const fn new(ticket_type: TicketType, quantity: i32) -> Self {
        Self {
            ticket_type: Some(ticket_type),
            quantity,
        }
    }

    /// Ticket type, `None` only when decoded from a request with a `null` type.
    pub const fn ticket_type(&self) -> Option<TicketType> {
        self.ticket_type
    }

    /// Requested number of tickets.
    pub const fn quantity(&self) -> i32 {
        self.quantity
    }
}

impl FromStr for TicketTypeRequest {
    type Err = PurchaseError;

    /// Parses `TYPE=QTY` or `TYPE QTY`, e.g. `adult=2` or `CHILD 3`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, quantity) = s
            .trim()
            .split_once(|c: char| c == '=' || c.is_whitespace())
            .ok_or_else(|| {
                PurchaseError::ParseRequestFile(format!("expected TYPE=QTY, got '{}'", s.trim()))
            })?;

        let ticket_type = kind
            .trim()
            .parse::<TicketType>()
            .map_err(|e| PurchaseError::ParseRequestFile(format!("{}: '{}'", e, kind.trim())))?;
        let quantity = quantity.trim().parse::<i32>().map_err(|e| {
            PurchaseError::ParseRequestFile(format!("invalid quantity '{}': {}", quantity.trim(), e))
        })?;

        Ok(Self::new(ticket_type, quantity))
    }
}

/// One purchase call: an account and an ordered batch of ticket requests.
///
/// Both fields are optional so that requests decoded from JSON keep any `null` they
/// carried; the processor reports those as validation failures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseRequest {
    /// Account to reserve seats for and charge.
    pub account_id: Option<AccountId>,
    /// Ticket requests in the order they were supplied.
    pub ticket_requests: Option<Vec<Option<TicketTypeRequest>>>,
}

impl PurchaseRequest {
    /// Creates a fully populated request.
    pub fn new(account_id: AccountId, requests: impl IntoIterator<Item = TicketTypeRequest>) -> Self {
        Self {
            account_id: Some(account_id),
            ticket_requests: Some(requests.into_iter().map(Some).collect()),
        }
    }

    /// Decodes a request from JSON, e.g.
    /// `{"account_id": 1, "ticket_requests": [{"ticket_type": "ADULT", "quantity": 2}]}`.
    pub fn from_json_str(json: &str) -> Result<Self, PurchaseError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Decodes a request from a JSON reader.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, PurchaseError> {
        Ok(serde_json::from_reader(reader)?)
    }
}
