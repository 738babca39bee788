//! Delivery addresses.

use serde::{Deserialize, Serialize};

use super::id::AddressId;

/// A saved delivery address, owned by the commerce API.
///
/// The backend keeps at most one `is_default` address per user; this side
/// only reads and selects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub id: AddressId,
    pub address_line1: String,
    #[serde(default)]
    pub address_line2: Option<String>,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    #[serde(default = "default_country")]
    pub country: String,
    #[serde(default)]
    pub is_default: bool,
}

fn default_country() -> String {
    "India".to_owned()
}

impl Address {
    /// Single-line form for logs and compact display.
    #[must_use]
    pub fn summary(&self) -> String {
        let mut parts = vec![self.address_line1.as_str()];
        if let Some(line2) = self.address_line2.as_deref()
            && !line2.is_empty()
        {
            parts.push(line2);
        }
        parts.extend([self.city.as_str(), self.state.as_str()]);
        format!("{} - {}", parts.join(", "), self.postal_code)
    }
}
