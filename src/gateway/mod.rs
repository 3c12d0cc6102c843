//! Request handling in front of an [`OrderBook`].
//!
//! The gateway validates submissions, rejects resubmitted identifiers and maps
//! outcomes to status codes and JSON bodies. It is transport agnostic: a
//! server hands it request bodies and query values and writes back the
//! [`GatewayResponse`] it returns.

mod config;
mod dedup;
mod error;
mod request;

pub use config::GatewayConfig;
pub use dedup::DuplicateGuard;
pub use error::RequestError;
pub use request::OrderRequest;

use crate::orderbook::{BookEntry, Order, OrderBook};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, warn};

/// Outcome classes of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Status {
    /// The request was handled.
    Ok,
    /// The order identifier was submitted before.
    Conflict,
    /// The request body failed validation.
    UnprocessableEntity,
}

impl Status {
    /// HTTP status code for this outcome.
    pub fn code(self) -> u16 {
        match self {
            Status::Ok => 200,
            Status::Conflict => 409,
            Status::UnprocessableEntity => 422,
        }
    }
}

/// Body returned by order submission and order listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrdersBody {
    /// Human readable outcome.
    pub message: String,
    /// Matched orders for a submission, or one page of resting orders.
    pub data: Vec<Order>,
}

/// Body returned by the book snapshot request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderBookBody {
    /// Ladder-ordered snapshot entries.
    pub data: Vec<BookEntry>,
}

/// A status plus a serializable body.
#[derive(Debug, Clone, PartialEq)]
pub struct GatewayResponse<B> {
    /// Outcome of the request.
    pub status: Status,
    /// Response payload.
    pub body: B,
}

impl<B: Serialize> GatewayResponse<B> {
    /// Serializes the body to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.body)
    }
}

const SUCCESS: &str = "success";
const INVALID_REQUEST: &str = "Invalid request";
const ALREADY_PROCESSED: &str = "This order has been processed already.";

/// Validates, de-duplicates and forwards requests to one order book.
pub struct OrderGateway {
    book: Arc<OrderBook>,
    guard: DuplicateGuard,
    config: GatewayConfig,
}

impl OrderGateway {
    /// Creates a gateway with default configuration.
    pub fn new(book: Arc<OrderBook>) -> Self {
        Self::with_config(book, GatewayConfig::default())
    }

    /// Creates a gateway with explicit configuration.
    pub fn with_config(book: Arc<OrderBook>, config: GatewayConfig) -> Self {
        Self {
            book,
            guard: DuplicateGuard::new(),
            config,
        }
    }

    /// The book behind this gateway.
    pub fn book(&self) -> &Arc<OrderBook> {
        &self.book
    }

    /// Active configuration.
    pub fn config(&self) -> GatewayConfig {
        self.config
    }

    /// Submits an order from a JSON body.
    ///
    /// Responds 422 for an invalid body, 409 for a resubmitted identifier and
    /// 200 with the matched orders otherwise.
    pub fn create_order(&self, body: &str) -> GatewayResponse<OrdersBody> {
        let order = match OrderRequest::from_json(body).and_then(|request| request.validate()) {
            Ok(order) => order,
            Err(error) => {
                warn!("Rejected order request: {}", error);
                return orders_response(Status::UnprocessableEntity, INVALID_REQUEST, Vec::new());
            }
        };

        if !self.guard.record(order.id()) {
            warn!("{}", RequestError::Duplicate(order.id().clone()));
            return orders_response(Status::Conflict, ALREADY_PROCESSED, Vec::new());
        }

        let matched: Vec<Order> = self
            .book
            .place_order(order)
            .iter()
            .map(|order| Order::clone(order))
            .collect();
        debug!("Order request handled with {} matches", matched.len());

        orders_response(Status::Ok, SUCCESS, matched)
    }

    /// Book snapshot with `limit` levels per side.
    pub fn order_book(&self, limit: Option<&str>) -> GatewayResponse<OrderBookBody> {
        let limit = GatewayConfig::positive_or(limit, self.config.default_limit);
        GatewayResponse {
            status: Status::Ok,
            body: OrderBookBody {
                data: self.book.snapshot(limit),
            },
        }
    }

    /// One page of resting orders.
    pub fn list_orders(
        &self,
        page: Option<&str>,
        page_size: Option<&str>,
    ) -> GatewayResponse<OrdersBody> {
        let page = GatewayConfig::positive_or(page, self.config.default_page);
        let page_size = GatewayConfig::positive_or(page_size, self.config.default_page_size);

        let orders = self
            .book
            .list_orders(page, page_size)
            .iter()
            .map(|order| Order::clone(order))
            .collect();

        orders_response(Status::Ok, SUCCESS, orders)
    }
}

fn orders_response(status: Status, message: &str, data: Vec<Order>) -> GatewayResponse<OrdersBody> {
    GatewayResponse {
        status,
        body: OrdersBody {
            message: message.to_string(),
            data,
        },
    }
}
