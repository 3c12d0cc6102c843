//! Request validation errors.

use crate::orderbook::OrderId;
use thiserror::Error;

/// Reasons a submission is turned away before it reaches the order book.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum RequestError {
    /// The body is not valid JSON for an order request.
    #[error("malformed request body: {0}")]
    Malformed(String),

    /// A required field is absent or empty.
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    /// The action is neither `BUY` nor `SELL`.
    #[error("invalid action `{0}`, expected BUY or SELL")]
    InvalidAction(String),

    /// A numeric field is zero, negative or not finite.
    #[error("field `{field}` must be a finite positive number, got {value}")]
    NonPositive {
        /// Name of the offending field.
        field: &'static str,
        /// Value received.
        value: f64,
    },

    /// The identifier was submitted before.
    #[error("order {0} has been processed already")]
    Duplicate(OrderId),
}
