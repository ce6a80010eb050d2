//! Result type alias shared across the workspace.
//!
//! This module defines a convenient alias that defaults the error type to the
//! common `PurchaseError`, so functions can simply return `Result<T>`.
use crate::error::PurchaseError;

/// Workspace-wide `Result` alias with `PurchaseError` as the default error.
pub type Result<T, E = PurchaseError> = std::result::Result<T, E>;
