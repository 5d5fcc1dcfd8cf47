use serde::{Deserialize, Serialize};

// ============================================================================
// Live Order - The order as the shop currently sees it
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactDetails {
    pub first_name: String,
    pub last_name: String,
    pub address_1: String,
    pub address_2: String,
    pub city: String,
    pub postcode: String,
    pub country: String,
    pub phone: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub name: String,
    pub quantity: u32,
    /// Weight of one unit in kilograms.
    pub weight: Option<f64>,
    pub is_virtual: bool,
    pub age_verification_required: bool,
}

impl LineItem {
    pub fn is_physical(&self) -> bool {
        !self.is_virtual
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LiveOrder {
    pub order_number: String,
    pub currency: String,
    pub total: f64,
    pub payment_method: String,
    pub billing: ContactDetails,
    pub shipping: Option<ContactDetails>,
    pub items: Vec<LineItem>,
}

impl LiveOrder {
    pub fn has_shipping_address(&self) -> bool {
        self.shipping
            .as_ref()
            .is_some_and(|shipping| {
                !shipping.address_1.is_empty() || !shipping.address_2.is_empty()
            })
    }

    /// Shipping address when the customer entered one, billing otherwise.
    pub fn contact_info(&self) -> &ContactDetails {
        match &self.shipping {
            Some(shipping) if self.has_shipping_address() => shipping,
            _ => &self.billing,
        }
    }

    /// Destination country code in lowercase, empty when unknown.
    pub fn country(&self) -> String {
        let shipping_country = self
            .shipping
            .as_ref()
            .map(|shipping| shipping.country.as_str())
            .unwrap_or_default();

        if shipping_country.is_empty() {
            self.billing.country.to_lowercase()
        } else {
            shipping_country.to_lowercase()
        }
    }
}
