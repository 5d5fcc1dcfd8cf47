// ============================================================================
// Checkout
// ============================================================================
//
// Checks made before an order is finalised. All of them degrade to
// accepting the customer's choice when the remote service is unavailable.
//
// ============================================================================

pub mod pickup_point_validator;

pub use pickup_point_validator::PickupPointValidator;
