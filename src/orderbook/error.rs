//! Order book error types
//!
//! Placing orders, snapshots and listings are total over their inputs; errors
//! only arise when snapshots are serialized or read back.

use std::fmt;

/// Errors that can occur within the OrderBook
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum OrderBookError {
    /// Error while serializing snapshot data
    SerializationError {
        /// Underlying error message
        message: String,
    },

    /// Error while deserializing snapshot data
    DeserializationError {
        /// Underlying error message
        message: String,
    },

    /// Snapshot entries are not laid out as a price ladder
    InvalidLadder {
        /// Description of the first out-of-place entry
        message: String,
    },
}

impl fmt::Display for OrderBookError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderBookError::SerializationError { message } => {
                write!(f, "Serialization error: {message}")
            }
            OrderBookError::DeserializationError { message } => {
                write!(f, "Deserialization error: {message}")
            }
            OrderBookError::InvalidLadder { message } => {
                write!(f, "Invalid snapshot ladder: {message}")
            }
        }
    }
}

impl std::error::Error for OrderBookError {}
