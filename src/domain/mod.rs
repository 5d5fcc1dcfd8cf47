// ============================================================================
// Domain Layer - Business Logic
// ============================================================================
//
// Each area has its own subdirectory:
// - order/    - Order entity and the builder that assembles it
// - carrier/  - Carriers and their repository
// - customs/  - Customs declarations attached to orders
//
// Nothing here talks to the network; remote calls live in `api`.
//
// ============================================================================

pub mod order;
pub mod carrier;
pub mod customs;
