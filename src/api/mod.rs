// ============================================================================
// Packeta API Layer
// ============================================================================
//
// - rest/ - JSON endpoints (pickup point validation)
// - soap/ - shared SOAP response handling
//
// ============================================================================

pub mod rest;
pub mod soap;
