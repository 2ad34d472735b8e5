//! Saved address operations.

use serde::{Deserialize, Serialize};

use lavanta_core::{Address, AddressInput, DefaultAddressKind, MessageResponse};

use crate::transport::{ApiTransport, TransportError};

/// Response to creating an address.
#[derive(Debug, Clone, Deserialize)]
pub struct AddressCreated {
    /// Confirmation message.
    pub message: String,
    /// Identifier of the created address.
    pub id: String,
}

/// Client for the `/addresses` endpoints.
#[derive(Clone)]
pub struct AddressesService {
    transport: ApiTransport,
}

impl AddressesService {
    /// Create the service over a shared transport.
    #[must_use]
    pub fn new(transport: ApiTransport) -> Self {
        Self { transport }
    }

    /// List the logged-in user's addresses.
    ///
    /// # Errors
    ///
    /// Returns the raw transport error on failure.
    pub async fn list(&self) -> Result<Vec<Address>, TransportError> {
        self.transport.get("/addresses").await
    }

    /// Save a new address.
    ///
    /// # Errors
    ///
    /// Returns the raw transport error on failure.
    pub async fn add(&self, address: &AddressInput) -> Result<AddressCreated, TransportError> {
        self.transport.post("/addresses", address).await
    }

    /// Update a saved address.
    ///
    /// # Errors
    ///
    /// Returns the raw transport error on failure.
    pub async fn update(
        &self,
        address_id: &str,
        address: &AddressInput,
    ) -> Result<MessageResponse, TransportError> {
        self.transport
            .put(&format!("/addresses/{address_id}"), address)
            .await
    }

    /// Delete a saved address.
    ///
    /// # Errors
    ///
    /// Returns the raw transport error on failure.
    pub async fn delete(&self, address_id: &str) -> Result<MessageResponse, TransportError> {
        self.transport
            .delete(&format!("/addresses/{address_id}"))
            .await
    }

    /// Mark an address as the default for shipping, billing, or both.
    ///
    /// # Errors
    ///
    /// Returns the raw transport error on failure.
    pub async fn set_default(
        &self,
        address_id: &str,
        kind: DefaultAddressKind,
    ) -> Result<MessageResponse, TransportError> {
        #[derive(Serialize)]
        struct SetDefault {
            #[serde(rename = "type")]
            kind: DefaultAddressKind,
        }

        self.transport
            .put(
                &format!("/addresses/{address_id}/default"),
                &SetDefault { kind },
            )
            .await
    }
}
