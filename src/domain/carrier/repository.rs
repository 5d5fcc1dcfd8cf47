use std::collections::HashMap;

use super::entity::Carrier;
use crate::pickup_point::VendorCollectionFactory;

pub trait CarrierRepository: Send + Sync {
    /// Returns the carrier regardless of whether it is currently enabled.
    fn get_any_by_id(&self, carrier_id: &str) -> Option<Carrier>;
}

#[derive(Debug, Default, Clone)]
pub struct InMemoryCarrierRepository {
    carriers: HashMap<String, Carrier>,
}

impl InMemoryCarrierRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository seeded with every internal Packeta pickup point vendor.
    pub fn with_internal_vendors() -> Self {
        let mut repository = Self::new();
        for vendor in VendorCollectionFactory::new().create() {
            let name = format!(
                "Packeta {} {}",
                vendor.country.to_uppercase(),
                vendor.group.as_str()
            );
            repository.insert(Carrier::from_vendor(&vendor, name));
        }
        repository
    }

    pub fn insert(&mut self, carrier: Carrier) {
        self.carriers.insert(carrier.id.clone(), carrier);
    }
}

impl CarrierRepository for InMemoryCarrierRepository {
    fn get_any_by_id(&self, carrier_id: &str) -> Option<Carrier> {
        self.carriers.get(carrier_id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::carrier::VendorGroup;

    #[test]
    fn test_seeded_with_internal_vendors() {
        let repository = InMemoryCarrierRepository::with_internal_vendors();
        for vendor in VendorCollectionFactory::new().create() {
            assert!(repository.get_any_by_id(vendor.id).is_some());
        }

        let carrier = repository.get_any_by_id("skzbox").unwrap();
        assert_eq!(carrier.country, "sk");
        assert_eq!(carrier.currency, "EUR");
        assert_eq!(carrier.vendor_group, Some(VendorGroup::Zbox));
        assert!(!carrier.supports_age_verification);
    }

    #[test]
    fn test_unknown_carrier() {
        let repository = InMemoryCarrierRepository::with_internal_vendors();
        assert!(repository.get_any_by_id("packeta").is_none());
        assert!(repository.get_any_by_id("").is_none());
    }
}
