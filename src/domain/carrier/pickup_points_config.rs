use crate::pickup_point::VendorCollectionFactory;

use super::entity::VendorGroup;

/// Id of the generic Packeta pickup point carrier, stored for orders created
/// before pickup points were split per country.
pub const PACKETA_PICKUP_POINT_CARRIER_ID: &str = "packeta";

/// Resolves country-specific aliases of the internal Packeta carriers.
#[derive(Debug, Clone, Default)]
pub struct PacketaPickupPointsConfig {
    vendors: VendorCollectionFactory,
}

impl PacketaPickupPointsConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Maps the generic carrier id to `<country>zpoint` when the country has
    /// internal pickup points. Any other id is returned as is.
    pub fn get_fixed_carrier_id(&self, carrier_id: &str, country: &str) -> String {
        if carrier_id != PACKETA_PICKUP_POINT_CARRIER_ID {
            return carrier_id.to_string();
        }

        let country = country.to_lowercase();
        self.vendors
            .for_country(&country)
            .into_iter()
            .find(|vendor| vendor.group == VendorGroup::Zpoint)
            .map(|vendor| vendor.id.to_string())
            .unwrap_or_else(|| carrier_id.to_string())
    }
}
