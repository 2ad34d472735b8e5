//! Saved delivery/billing addresses.

use serde::{Deserialize, Serialize};

/// A saved address as the backend returns it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    /// Address identifier (`id` or `_id` on the wire).
    #[serde(default, alias = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Label the user gave the address ("Ev", "İş", ...).
    #[serde(default)]
    pub title: Option<String>,
    /// Recipient full name.
    #[serde(default)]
    pub full_name: Option<String>,
    /// Street address line.
    #[serde(default)]
    pub address: Option<String>,
    /// City.
    #[serde(default)]
    pub city: Option<String>,
    /// District within the city.
    #[serde(default)]
    pub district: Option<String>,
    /// Postal code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    /// Country.
    #[serde(default)]
    pub country: Option<String>,
    /// Contact phone number.
    #[serde(default)]
    pub phone: Option<String>,
    /// Whether this is the default shipping address.
    #[serde(default)]
    pub is_default_shipping: bool,
    /// Whether this is the default billing address.
    #[serde(default)]
    pub is_default_billing: bool,
}

/// Payload for creating or updating an address.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressInput {
    /// Label for the address.
    pub title: String,
    /// Recipient full name.
    pub full_name: String,
    /// Street address line.
    pub address: String,
    /// City.
    pub city: String,
    /// District within the city.
    pub district: String,
    /// Postal code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    /// Country; the backend defaults to "Türkiye".
    pub country: String,
    /// Contact phone number.
    pub phone: String,
    /// Make this the default shipping address.
    pub is_default_shipping: bool,
    /// Make this the default billing address.
    pub is_default_billing: bool,
}

/// Which default slot `PUT /addresses/{id}/default` assigns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DefaultAddressKind {
    /// Default for shipments.
    Shipping,
    /// Default for invoices.
    Billing,
    /// Default for both.
    Both,
}

impl DefaultAddressKind {
    /// Wire value the backend expects in the `type` field.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Shipping => "shipping",
            Self::Billing => "billing",
            Self::Both => "both",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_accepts_both_id_spellings() {
        let address: Address = serde_json::from_str(
            r#"{"_id": "a1", "title": "Ev", "isDefaultShipping": true}"#,
        )
        .expect("deserialize");
        assert_eq!(address.id.as_deref(), Some("a1"));
        assert!(address.is_default_shipping);
        assert!(!address.is_default_billing);
    }

    #[test]
    fn default_kind_wire_values() {
        assert_eq!(DefaultAddressKind::Shipping.as_str(), "shipping");
        assert_eq!(DefaultAddressKind::Billing.as_str(), "billing");
        assert_eq!(DefaultAddressKind::Both.as_str(), "both");
    }
}
