// ============================================================================
// Pickup Point Providers
// ============================================================================
//
// Reference data describing the internal Packeta pickup point networks.
//
// ============================================================================

pub mod vendor;

pub use vendor::{VendorCollectionFactory, VendorProvider};
