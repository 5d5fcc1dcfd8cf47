use crate::domain::carrier::VendorGroup;

/// Static descriptor of one pickup point network in one country.
#[derive(Debug, Clone, PartialEq)]
pub struct VendorProvider {
    pub id: &'static str,
    pub country: &'static str,
    pub supports_cod: bool,
    pub supports_age_verification: bool,
    pub currency: &'static str,
    pub has_pickup_points: bool,
    pub group: VendorGroup,
}

impl VendorProvider {
    pub const fn new(
        id: &'static str,
        country: &'static str,
        supports_cod: bool,
        supports_age_verification: bool,
        currency: &'static str,
        has_pickup_points: bool,
        group: VendorGroup,
    ) -> Self {
        Self {
            id,
            country,
            supports_cod,
            supports_age_verification,
            currency,
            has_pickup_points,
            group,
        }
    }
}

const VENDORS: [VendorProvider; 8] = [
    // CZ Packeta internal pickup points.
    VendorProvider::new("czzpoint", "cz", true, true, "CZK", true, VendorGroup::Zpoint),
    // CZ Packeta Z-BOX.
    VendorProvider::new("czzbox", "cz", true, false, "CZK", true, VendorGroup::Zbox),
    // SK Packeta internal pickup points.
    VendorProvider::new("skzpoint", "sk", true, true, "EUR", true, VendorGroup::Zpoint),
    // SK Packeta Z-BOX.
    VendorProvider::new("skzbox", "sk", true, false, "EUR", true, VendorGroup::Zbox),
    // HU Packeta internal pickup points.
    VendorProvider::new("huzpoint", "hu", true, true, "HUF", true, VendorGroup::Zpoint),
    // HU Packeta Z-BOX.
    VendorProvider::new("huzbox", "hu", true, false, "HUF", true, VendorGroup::Zbox),
    // RO Packeta internal pickup points.
    VendorProvider::new("rozpoint", "ro", true, true, "RON", true, VendorGroup::Zpoint),
    // RO Packeta Z-BOX.
    VendorProvider::new("rozbox", "ro", true, false, "RON", true, VendorGroup::Zbox),
];

#[derive(Debug, Clone, Copy, Default)]
pub struct VendorCollectionFactory;

impl VendorCollectionFactory {
    pub fn new() -> Self {
        Self
    }

    /// All known vendors, ordered by country and then group.
    pub fn create(&self) -> Vec<VendorProvider> {
        VENDORS.to_vec()
    }

    pub fn for_country(&self, country: &str) -> Vec<VendorProvider> {
        VENDORS
            .iter()
            .filter(|vendor| vendor.country == country)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_order() {
        let ids: Vec<&str> = VendorCollectionFactory::new()
            .create()
            .iter()
            .map(|vendor| vendor.id)
            .collect();

        assert_eq!(
            ids,
            vec![
                "czzpoint", "czzbox", "skzpoint", "skzbox", "huzpoint", "huzbox", "rozpoint",
                "rozbox"
            ]
        );
    }

    #[test]
    fn test_each_country_has_both_groups() {
        let factory = VendorCollectionFactory::new();

        for country in ["cz", "sk", "hu", "ro"] {
            let vendors = factory.for_country(country);
            assert_eq!(vendors.len(), 2);
            assert_eq!(vendors[0].group, VendorGroup::Zpoint);
            assert_eq!(vendors[1].group, VendorGroup::Zbox);
            assert_eq!(vendors[0].currency, vendors[1].currency);
        }
    }

    #[test]
    fn test_zbox_has_no_age_verification() {
        let factory = VendorCollectionFactory::new();

        for vendor in factory.create() {
            assert!(vendor.supports_cod);
            assert!(vendor.has_pickup_points);
            assert_eq!(vendor.supports_age_verification, vendor.group == VendorGroup::Zpoint);
        }
    }
}
