// ============================================================================
// Carrier Domain
// ============================================================================
//
// - Entity (Carrier, VendorGroup)
// - Repository (CarrierRepository trait, in-memory implementation)
// - Pickup points config (country-specific carrier id resolution)
//
// ============================================================================

pub mod entity;
pub mod repository;
pub mod pickup_points_config;

pub use entity::*;
pub use repository::*;
pub use pickup_points_config::*;
