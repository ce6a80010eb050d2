//! Ticket Client — a command-line front end for the ticket purchase processor. It
//! gathers an account id and ticket requests from flags and/or a request file, runs
//! them through the purchase rules, and reserves seats and takes payment through the
//! logging collaborators.
//!
//! Usage example (CLI):
//! ```bash
//! ticket_client --account-id 1 --ticket adult=2 --ticket child=1
//! ticket_client --path ./family.json --dry-run
//! ```
//!
//! Request files ending in `.json` hold a whole purchase request; any other file holds
//! one `TYPE QTY` entry per line. Set `RUST_LOG=debug` to see validation details.
#![warn(missing_docs)]
mod args;

use crate::args::Args;
use clap::Parser;
use log::{info, warn};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use ticket_common::purchase::{TicketService, TicketServiceImpl};
use ticket_common::services::{LoggingPaymentService, LoggingSeatReservationService};
use ticket_common::tickets::TicketRequestParser;
use ticket_common::{PurchaseError, PurchaseRequest, Result, TicketTypeRequest};

fn main() -> Result<(), PurchaseError> {
    init_logger();
    let args = Args::parse();

    let request = build_request(&args)?;
    let service = TicketServiceImpl::new(LoggingSeatReservationService, LoggingPaymentService);

    if args.dry_run {
        let summary = service.quote(&request)?;
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    service.purchase_tickets(&request)?;
    info!("Purchase completed for account {:?}", request.account_id);
    Ok(())
}

/// Combines the request file (if any) with the command-line account id and tickets.
fn build_request(args: &Args) -> Result<PurchaseRequest> {
    let mut request = match &args.path {
        Some(raw) => load_request_file(&normalize_path(raw))?,
        None => PurchaseRequest {
            account_id: None,
            ticket_requests: Some(Vec::new()),
        },
    };

    if args.account_id.is_some() {
        request.account_id = args.account_id;
    }

    if !args.tickets.is_empty() {
        request
            .ticket_requests
            .get_or_insert_with(Vec::new)
            .extend(args.tickets.iter().copied().map(Some));
    }

    info!("Purchase request: {:?}", request);
    Ok(request)
}

/// Loads a JSON purchase request or a line-based ticket list from `path`.
fn load_request_file(path: &Path) -> Result<PurchaseRequest> {
    if !is_file_exist(path) {
        warn!("Request file {} not found", path.display());
    }
    let reader = BufReader::new(File::open(path)?);

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        return PurchaseRequest::from_json_reader(reader);
    }

    let tickets = TicketTypeRequest::parse_from_file(reader)?;
    Ok(PurchaseRequest {
        account_id: None,
        ticket_requests: Some(tickets.into_iter().map(Some).collect()),
    })
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}

/// Normalize a CLI-provided path string by trimming whitespace and matching quotes.
///
/// This allows passing Windows paths in quotes without breaking parsing.
fn normalize_path(raw: &str) -> PathBuf {
    let trimmed = raw.trim();
    let no_quotes = trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(trimmed);
    PathBuf::from(no_quotes)
}

/// Returns `true` if the provided path exists and is a regular file.
fn is_file_exist(path: &Path) -> bool {
    path.exists() && path.is_file()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;
    use ticket_common::TicketType;

    fn args(path: Option<String>, account_id: Option<u64>, tickets: Vec<TicketTypeRequest>) -> Args {
        Args {
            account_id,
            tickets,
            path,
            dry_run: false,
        }
    }

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = env::temp_dir().join(format!("ticket_client_{}_{}", std::process::id(), name));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn normalize_path_strips_quotes() {
        assert_eq!(normalize_path("  \"C:\\tickets.txt\" "), PathBuf::from("C:\\tickets.txt"));
        assert_eq!(normalize_path("tickets.txt"), PathBuf::from("tickets.txt"));
    }

    #[test]
    fn flags_only_request() {
        let request = build_request(&args(
            None,
            Some(9),
            vec![TicketTypeRequest::new(TicketType::Adult, 1)],
        ))
        .unwrap();
        assert_eq!(
            request,
            PurchaseRequest::new(9, [TicketTypeRequest::new(TicketType::Adult, 1)])
        );
    }

    #[test]
    fn missing_account_stays_missing() {
        let request = build_request(&args(None, None, Vec::new())).unwrap();
        assert_eq!(request.account_id, None);
        assert_eq!(request.ticket_requests, Some(Vec::new()));
    }

    #[test]
    fn line_file_is_merged_with_flags() {
        let path = temp_file("family.txt", "ADULT 2\nchild=1\n");
        let request = build_request(&args(
            Some(path.display().to_string()),
            Some(4),
            vec![TicketTypeRequest::new(TicketType::Infant, 1)],
        ))
        .unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(
            request,
            PurchaseRequest::new(
                4,
                [
                    TicketTypeRequest::new(TicketType::Adult, 2),
                    TicketTypeRequest::new(TicketType::Child, 1),
                    TicketTypeRequest::new(TicketType::Infant, 1),
                ]
            )
        );
    }

    #[test]
    fn json_file_account_is_overridden_by_flag() {
        let path = temp_file(
            "request.json",
            r#"{"account_id": 1, "ticket_requests": [{"ticket_type": "ADULT", "quantity": 3}]}"#,
        );
        let from_file = build_request(&args(Some(path.display().to_string()), None, Vec::new())).unwrap();
        let overridden = build_request(&args(Some(path.display().to_string()), Some(2), Vec::new())).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(from_file.account_id, Some(1));
        assert_eq!(overridden.account_id, Some(2));
        assert_eq!(
            overridden.ticket_requests,
            Some(vec![Some(TicketTypeRequest::new(TicketType::Adult, 3))])
        );
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let path = env::temp_dir().join("ticket_client_does_not_exist.txt");
        let err = build_request(&args(Some(path.display().to_string()), Some(1), Vec::new())).unwrap_err();
        assert!(matches!(err, PurchaseError::Io(_)));
    }
}
