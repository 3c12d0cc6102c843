//! Incoming order submissions and their validation.

use super::error::RequestError;
use crate::orderbook::{Order, Side};
use serde::Deserialize;

/// Raw order submission as received from a client.
///
/// Every field is required; validation turns the request into an [`Order`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct OrderRequest {
    /// Client-supplied unique identifier.
    pub uuid: Option<String>,
    /// `BUY` or `SELL`.
    pub action: Option<String>,
    /// Limit price.
    pub price: Option<f64>,
    /// Quantity.
    pub amount: Option<f64>,
}

impl OrderRequest {
    /// Parses a JSON request body.
    pub fn from_json(body: &str) -> Result<Self, RequestError> {
        serde_json::from_str(body).map_err(|error| RequestError::Malformed(error.to_string()))
    }

    /// Checks every field and builds the order.
    pub fn validate(&self) -> Result<Order, RequestError> {
        let uuid = self
            .uuid
            .as_deref()
            .filter(|uuid| !uuid.trim().is_empty())
            .ok_or(RequestError::MissingField("uuid"))?;

        let side = match self.action.as_deref() {
            None | Some("") => return Err(RequestError::MissingField("action")),
            Some("BUY") => Side::Buy,
            Some("SELL") => Side::Sell,
            Some(other) => return Err(RequestError::InvalidAction(other.to_string())),
        };

        let price = positive("price", self.price)?;
        let amount = positive("amount", self.amount)?;

        Ok(Order::new(uuid, side, price, amount))
    }
}

fn positive(field: &'static str, value: Option<f64>) -> Result<f64, RequestError> {
    let value = value.ok_or(RequestError::MissingField(field))?;
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(RequestError::NonPositive { field, value })
    }
}
