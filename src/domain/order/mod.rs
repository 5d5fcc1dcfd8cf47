// ============================================================================
// Order Domain - Packet data for a shop order
// ============================================================================
//
// This module contains ALL Order-specific code:
// - Value objects (Address, Size, PickupPoint, Destination)
// - Entity (Order)
// - Inputs (StoredOrderData row, LiveOrder from the shop)
// - Collaborators (WeightCalculator, PaymentMethodClassifier)
// - Errors (OrderError enum)
// - Builder (stored row + live order → Order)
//
// ============================================================================

pub mod value_objects;
pub mod entity;
pub mod stored;
pub mod live;
pub mod services;
pub mod errors;
pub mod builder;

// Re-export for convenience
pub use value_objects::*;
pub use entity::*;
pub use stored::*;
pub use live::*;
pub use services::*;
pub use builder::*;
