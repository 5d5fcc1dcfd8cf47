use serde::{Deserialize, Serialize};

// ============================================================================
// Order Value Objects
// ============================================================================

/// Delivery address of a packet.
///
/// Stored by the plugin as a JSON snapshot once the customer address has been
/// validated, otherwise synthesised from the live billing/shipping data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: Option<String>,
    pub city: Option<String>,
    pub zip: Option<String>,
    #[serde(default)]
    pub house_number: Option<String>,
    #[serde(default)]
    pub county: Option<String>,
    #[serde(default)]
    pub latitude: Option<String>,
    #[serde(default)]
    pub longitude: Option<String>,
}

impl Address {
    pub fn new(street: Option<String>, city: Option<String>, zip: Option<String>) -> Self {
        Self {
            street,
            city,
            zip,
            house_number: None,
            county: None,
            latitude: None,
            longitude: None,
        }
    }
}

/// Packet dimensions in millimetres, each one optional on its own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub length: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
}

impl Size {
    pub fn new(length: Option<f64>, width: Option<f64>, height: Option<f64>) -> Self {
        Self { length, width, height }
    }
}

/// Snapshot of the pickup point chosen at checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PickupPoint {
    pub id: String,
    pub name: Option<String>,
    pub city: Option<String>,
    pub zip: Option<String>,
    pub street: Option<String>,
    pub url: Option<String>,
}

impl PickupPoint {
    pub fn new(
        id: impl Into<String>,
        name: Option<String>,
        city: Option<String>,
        zip: Option<String>,
        street: Option<String>,
        url: Option<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name,
            city,
            zip,
            street,
            url,
        }
    }
}

/// Where the packet is going. An order always resolves to exactly one.
#[derive(Debug, Clone, PartialEq)]
pub enum Destination<'a> {
    PickupPoint(&'a PickupPoint),
    CarDelivery(&'a str),
    Address(&'a Address),
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_snapshot_decoding() {
        let json = r#"{
            "street": "Dlouhá 12",
            "city": "Praha",
            "zip": "110 00",
            "houseNumber": "12",
            "county": null,
            "latitude": "50.09",
            "longitude": "14.42"
        }"#;

        let address: Address = serde_json::from_str(json).unwrap();

        assert_eq!(address.street.as_deref(), Some("Dlouhá 12"));
        assert_eq!(address.house_number.as_deref(), Some("12"));
        assert_eq!(address.county, None);
        assert_eq!(address.latitude.as_deref(), Some("50.09"));
    }

    #[test]
    fn test_address_snapshot_without_optional_parts() {
        let json = r#"{"street": "Main", "city": "Brno", "zip": "60200"}"#;
        let address: Address = serde_json::from_str(json).unwrap();

        assert_eq!(address, Address::new(
            Some("Main".to_string()),
            Some("Brno".to_string()),
            Some("60200".to_string()),
        ));
    }

    #[test]
    fn test_synthesised_address_has_no_geodata() {
        let address = Address::new(Some("Main".to_string()), None, None);

        assert_eq!(address.house_number, None);
        assert_eq!(address.latitude, None);
        assert_eq!(address.longitude, None);
    }

    #[test]
    fn test_size_dimensions_are_independent() {
        let size = Size::new(Some(100.0), None, Some(30.0));

        assert_eq!(size.length, Some(100.0));
        assert_eq!(size.width, None);
        assert_eq!(size.height, Some(30.0));
        assert_eq!(Size::default(), Size::new(None, None, None));
    }
}
