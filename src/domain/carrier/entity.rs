use serde::{Deserialize, Serialize};

use crate::pickup_point::VendorProvider;

/// Group of Packeta internal pickup points a vendor belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VendorGroup {
    /// Staffed pickup points.
    Zpoint,
    /// Z-BOX parcel lockers.
    Zbox,
}

impl VendorGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            VendorGroup::Zpoint => "zpoint",
            VendorGroup::Zbox => "zbox",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Carrier {
    pub id: String,
    pub name: String,
    pub country: String,
    pub currency: String,
    pub has_pickup_points: bool,
    pub supports_cod: bool,
    pub supports_age_verification: bool,
    pub vendor_group: Option<VendorGroup>,
}

impl Carrier {
    /// Builds the carrier entity for an internal Packeta vendor.
    pub fn from_vendor(vendor: &VendorProvider, name: impl Into<String>) -> Self {
        Self {
            id: vendor.id.to_string(),
            name: name.into(),
            country: vendor.country.to_string(),
            currency: vendor.currency.to_string(),
            has_pickup_points: vendor.has_pickup_points,
            supports_cod: vendor.supports_cod,
            supports_age_verification: vendor.supports_age_verification,
            vendor_group: Some(vendor.group),
        }
    }
}
