// ============================================================================
// Order Integrity Errors
// ============================================================================
//
// Raised while building an order entity. They mean the stored data for that
// order is unusable, so they go back to the caller instead of being logged
// and swallowed.
//
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("Please set the country of the delivery address first.")]
    CountryNotSet,

    #[error("Order carrier is invalid ({0}). Please contact Packeta support.")]
    InvalidCarrier(String),

    #[error("Stored delivery address could not be decoded: {0}")]
    InvalidDeliveryAddress(#[from] serde_json::Error),
}

impl OrderError {
    /// Short label used for metrics and log fields.
    pub fn reason(&self) -> &'static str {
        match self {
            OrderError::CountryNotSet => "country_not_set",
            OrderError::InvalidCarrier(_) => "invalid_carrier",
            OrderError::InvalidDeliveryAddress(_) => "invalid_delivery_address",
        }
    }
}
