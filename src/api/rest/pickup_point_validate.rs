use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::client::WebRequestClient;
use super::errors::{InvalidApiKeyError, RestError};

// ============================================================================
// Pickup Point Validation Endpoint
// ============================================================================

const API_KEY_LENGTH: usize = 16;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatedPoint {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carrier_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carrier_pickup_point_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationParameters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_cod: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_age_verification_required: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PickupPointValidateRequest {
    pub point: ValidatedPoint,
    pub parameters: ValidationParameters,
}

impl PickupPointValidateRequest {
    pub fn new(point_id: impl Into<String>) -> Self {
        Self {
            point: ValidatedPoint {
                id: point_id.into(),
                ..Default::default()
            },
            parameters: ValidationParameters::default(),
        }
    }

    pub fn with_carrier(
        mut self,
        carrier_id: impl Into<String>,
        carrier_pickup_point_id: Option<String>,
    ) -> Self {
        self.point.carrier_id = Some(carrier_id.into());
        self.point.carrier_pickup_point_id = carrier_pickup_point_id;
        self
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.parameters.country = Some(country.into());
        self
    }

    pub fn with_weight(mut self, weight: Option<f64>) -> Self {
        self.parameters.weight = weight;
        self
    }

    pub fn with_cod(mut self, is_cod: bool) -> Self {
        self.parameters.is_cod = Some(is_cod);
        self
    }

    pub fn with_age_verification(mut self, required: bool) -> Self {
        self.parameters.is_age_verification_required = Some(required);
        self
    }

    /// Request payload without credentials, safe to log.
    pub fn submittable_data(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PickupPointValidateError {
    pub code: String,
    #[serde(default)]
    pub description: String,
}

impl PickupPointValidateError {
    /// Customer-facing message, falling back to the API description for
    /// codes this client does not know yet.
    pub fn message(&self) -> &str {
        translated_error(&self.code).unwrap_or(self.description.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PickupPointValidateResponse {
    pub is_valid: bool,
    #[serde(default)]
    pub errors: Vec<PickupPointValidateError>,
}

impl PickupPointValidateResponse {
    pub fn new(is_valid: bool, errors: Vec<PickupPointValidateError>) -> Self {
        Self { is_valid, errors }
    }

    /// Response used whenever validation cannot be performed.
    pub fn accepted() -> Self {
        Self::new(true, Vec::new())
    }
}

const TRANSLATED_ERRORS: [(&str, &str); 13] = [
    ("NotFound", "The pick-up point was not found."),
    ("InvalidCarrier", "The pick-up point has not allowed carrier."),
    ("InvalidCountry", "The pick-up point is not in allowed country."),
    (
        "EmptyListOfAllowedCountries",
        "Cannot perform country validation because the list of allowed countries is empty.",
    ),
    ("NoClaimAssistant", "The pick-up point does not offer Complaints Assistant Service."),
    ("NoPacketConsignment", "The pick-up point is not submission point."),
    ("InvalidWeight", "The pick-up point does not accept packets with given weight."),
    ("NoAgeVerification", "The pick-up point does not offer Age Verification Service."),
    (
        "PickupPointVacation",
        "The pick-up point currently does not accept any packets due to reported holiday.",
    ),
    (
        "PickupPointClosing",
        "The pick-up point does not accept new shipments because it will be closed soon.",
    ),
    (
        "PickupPointIsFull",
        "The pick-up point does not accept any packets at the moment due to its full capacity.",
    ),
    ("PickupPointForbidden", "The pick-up point cannot be selected."),
    (
        "PickupPointTechnicalReason",
        "The pick-up point cannot be chosen as a final destination of your packet due to technical reasons.",
    ),
];

pub fn translated_error(code: &str) -> Option<&'static str> {
    TRANSLATED_ERRORS
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, message)| *message)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ValidateBody<'a> {
    api_key: &'a str,
    #[serde(flatten)]
    request: &'a PickupPointValidateRequest,
}

pub struct PickupPointValidate {
    client: Arc<dyn WebRequestClient>,
    api_key: String,
    endpoint: String,
}

impl std::fmt::Debug for PickupPointValidate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PickupPointValidate")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

impl PickupPointValidate {
    /// Refuses to create the endpoint without a usable API key.
    pub fn create_with_valid_api_key(
        client: Arc<dyn WebRequestClient>,
        api_key: Option<&str>,
        endpoint: impl Into<String>,
    ) -> Result<Self, InvalidApiKeyError> {
        let api_key = api_key
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or_else(InvalidApiKeyError::missing_key)?;

        if api_key.len() != API_KEY_LENGTH || !api_key.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(InvalidApiKeyError::invalid_format());
        }

        Ok(Self {
            client,
            api_key: api_key.to_string(),
            endpoint: endpoint.into(),
        })
    }

    /// Single attempt, no retries.
    pub async fn validate(
        &self,
        request: &PickupPointValidateRequest,
    ) -> Result<PickupPointValidateResponse, RestError> {
        let body = serde_json::to_value(ValidateBody {
            api_key: &self.api_key,
            request,
        })?;

        let reply = self.client.post_json(&self.endpoint, &body).await?;
        Ok(serde_json::from_str(&reply)?)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
