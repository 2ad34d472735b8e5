//! Order history operations.

use lavanta_core::{Order, decode_order, decode_orders};

use crate::transport::{ApiTransport, TransportError};

/// Client for the `/orders` endpoints.
#[derive(Clone)]
pub struct OrdersService {
    transport: ApiTransport,
}

impl OrdersService {
    /// Create the service over a shared transport.
    #[must_use]
    pub fn new(transport: ApiTransport) -> Self {
        Self { transport }
    }

    /// List the logged-in user's orders.
    ///
    /// The listing envelope is decoded at this boundary; callers always
    /// get a flat ordered list.
    ///
    /// # Errors
    ///
    /// Returns the raw transport error on failure, including a shape error
    /// when the payload matches none of the known envelopes.
    pub async fn list(&self) -> Result<Vec<Order>, TransportError> {
        let raw: serde_json::Value = self.transport.get("/orders").await?;
        Ok(decode_orders(raw)?)
    }

    /// Fetch one order.
    ///
    /// # Errors
    ///
    /// Returns the raw transport error on failure.
    pub async fn detail(&self, order_id: &str) -> Result<Order, TransportError> {
        let raw: serde_json::Value = self.transport.get(&format!("/orders/{order_id}")).await?;
        Ok(decode_order(raw)?)
    }
}
