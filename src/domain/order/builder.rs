use std::sync::Arc;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};

use crate::domain::carrier::{CarrierRepository, PacketaPickupPointsConfig};
use crate::domain::customs::CustomsDeclarationRepository;
use crate::metrics::Metrics;
use crate::settings::Settings;
use super::entity::Order;
use super::errors::OrderError;
use super::live::LiveOrder;
use super::services::{PaymentMethodClassifier, WeightCalculator};
use super::stored::{non_empty, parse_bool, parse_float, StoredOrderData};
use super::value_objects::{Address, PickupPoint, Size};

// ============================================================================
// Order Builder
// ============================================================================
//
// Merges the stored plugin row with the live shop order:
//   stored row + live order → Order entity
//
// Live data wins wherever the stored row is only a snapshot (weight, value,
// contact details). A previously validated delivery address is kept as is.
//
// ============================================================================

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone)]
pub struct BuilderConfig {
    pub sender: Option<String>,
    pub timezone: FixedOffset,
    pub tracking_url: String,
}

impl BuilderConfig {
    pub fn from_settings(settings: &Settings) -> anyhow::Result<Self> {
        Ok(Self {
            sender: settings.sender.clone(),
            timezone: settings.timezone_offset()?,
            tracking_url: settings.tracking_url.clone(),
        })
    }
}

pub struct Builder {
    config: BuilderConfig,
    calculator: Arc<dyn WeightCalculator>,
    customs_declaration_repository: Arc<dyn CustomsDeclarationRepository>,
    pickup_points_config: PacketaPickupPointsConfig,
    payment_classifier: Arc<dyn PaymentMethodClassifier>,
    carrier_repository: Arc<dyn CarrierRepository>,
    metrics: Option<Arc<Metrics>>,
}

impl Builder {
    pub fn new(
        config: BuilderConfig,
        calculator: Arc<dyn WeightCalculator>,
        customs_declaration_repository: Arc<dyn CustomsDeclarationRepository>,
        pickup_points_config: PacketaPickupPointsConfig,
        payment_classifier: Arc<dyn PaymentMethodClassifier>,
        carrier_repository: Arc<dyn CarrierRepository>,
    ) -> Self {
        Self {
            config,
            calculator,
            customs_declaration_repository,
            pickup_points_config,
            payment_classifier,
            carrier_repository,
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, metrics: Arc<Metrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Creates the order entity from the live order and the stored row.
    ///
    /// Fails when the destination country is unknown or the stored carrier
    /// no longer exists; no partially built entity is returned.
    pub fn build(&self, live: &LiveOrder, stored: &StoredOrderData) -> Result<Order, OrderError> {
        match self.build_order(live, stored) {
            Ok(order) => {
                if let Some(metrics) = &self.metrics {
                    metrics.record_order_built();
                }
                tracing::debug!(
                    order_number = %order.number,
                    carrier_id = %order.carrier.id,
                    "Built order entity"
                );
                Ok(order)
            }
            Err(error) => {
                if let Some(metrics) = &self.metrics {
                    metrics.record_order_build_failure(error.reason());
                }
                tracing::warn!(
                    order_id = %stored.id,
                    error = %error,
                    "Order entity could not be built"
                );
                Err(error)
            }
        }
    }

    fn build_order(&self, live: &LiveOrder, stored: &StoredOrderData) -> Result<Order, OrderError> {
        let country = live.country();
        if country.is_empty() {
            return Err(OrderError::CountryNotSet);
        }

        let carrier_id = self
            .pickup_points_config
            .get_fixed_carrier_id(&stored.carrier_id, &country);
        let carrier = self
            .carrier_repository
            .get_any_by_id(&carrier_id)
            .ok_or(OrderError::InvalidCarrier(carrier_id))?;

        let mut order = Order::new(stored.id.clone(), carrier);

        // Stored row
        order.weight = parse_float(stored.weight.as_ref());
        order.packet_id = non_empty(stored.packet_id.as_deref());
        order.packet_tracking_url = self.tracking_url(order.packet_id.as_deref());
        order.packet_claim_id = non_empty(stored.packet_claim_id.as_deref());
        order.packet_claim_tracking_url = self.tracking_url(order.packet_claim_id.as_deref());
        order.packet_claim_password = non_empty(stored.packet_claim_password.as_deref());
        order.size = Size::new(
            parse_float(stored.length.as_ref()),
            parse_float(stored.width.as_ref()),
            parse_float(stored.height.as_ref()),
        );
        order.is_exported = parse_bool(stored.is_exported.as_ref()).unwrap_or(false);
        order.is_label_printed = parse_bool(stored.is_label_printed.as_ref()).unwrap_or(false);
        order.carrier_number = non_empty(stored.carrier_number.as_deref());
        order.packet_status = non_empty(stored.packet_status.as_deref());
        order.stored_until = parse_date("stored_until", stored.stored_until.as_deref());
        order.address_validated = parse_bool(stored.address_validated.as_ref()).unwrap_or(false);
        order.adult_content = parse_bool(stored.adult_content.as_ref());
        order.manual_value = parse_float(stored.value.as_ref());
        order.manual_cod = parse_float(stored.cod.as_ref());
        order.deliver_on = parse_date("deliver_on", stored.deliver_on.as_deref());
        order.last_api_error_message = non_empty(stored.api_error_message.as_deref());
        order.last_api_error_date_time = self.parse_utc_datetime(stored.api_error_date.as_deref());

        if let Some(snapshot) = stored.delivery_address.as_deref().filter(|json| !json.is_empty()) {
            let address: Address = serde_json::from_str(snapshot)?;
            order.delivery_address = Some(address);
        }

        order.car_delivery_id = non_empty(stored.car_delivery_id.as_deref());

        if let Some(point_id) = non_empty(stored.point_id.as_deref()) {
            order.pickup_point = Some(PickupPoint::new(
                point_id,
                stored.point_name.clone(),
                stored.point_city.clone(),
                stored.point_zip.clone(),
                stored.point_street.clone(),
                stored.point_url.clone(),
            ));
        }

        // Live order
        order.calculated_weight = self.calculator.calculate_order_weight(live);

        if order.contains_adult_content().is_none() {
            order.adult_content = Some(contains_adult_content(live));
        }

        order.shipping_country = Some(country);

        let contact_info = live.contact_info();
        order.name = non_empty(Some(contact_info.first_name.as_str()));
        order.surname = non_empty(Some(contact_info.last_name.as_str()));
        order.eshop = self.config.sender.clone();
        order.calculated_value = Some(live.total);

        if order.delivery_address.is_none() {
            order.address_validated = false;
            order.delivery_address = Some(Address::new(
                non_empty(Some(contact_info.address_1.as_str())),
                non_empty(Some(contact_info.city.as_str())),
                non_empty(Some(contact_info.postcode.as_str())),
            ));
        }

        order.custom_number = non_empty(Some(live.order_number.as_str()));

        // Shipping address phone is optional.
        order.phone = non_empty(Some(contact_info.phone.as_str()))
            .or_else(|| non_empty(Some(live.billing.phone.as_str())));
        // Additional address information.
        order.note = non_empty(Some(contact_info.address_2.as_str()));
        order.email = non_empty(Some(live.billing.email.as_str()));

        if self.payment_classifier.is_cod_payment_method(&live.payment_method) {
            // Manual COD stays as stored.
            order.calculated_cod = order.calculated_value;
        } else {
            order.calculated_cod = None;
            order.manual_cod = None;
        }

        order.currency = non_empty(Some(live.currency.as_str()));
        order.customs_declaration = self
            .customs_declaration_repository
            .get_by_order_number(&order.number);

        Ok(order)
    }

    fn tracking_url(&self, packet_id: Option<&str>) -> Option<String> {
        packet_id.map(|id| format!("{}{}", self.config.tracking_url, id))
    }

    fn parse_utc_datetime(&self, value: Option<&str>) -> Option<DateTime<FixedOffset>> {
        let value = value.filter(|text| !text.is_empty())?;
        match NaiveDateTime::parse_from_str(value, DATETIME_FORMAT) {
            Ok(naive) => Some(naive.and_utc().with_timezone(&self.config.timezone)),
            Err(error) => {
                tracing::warn!(
                    field = "api_error_date",
                    value = %value,
                    error = %error,
                    "Ignoring malformed stored datetime"
                );
                None
            }
        }
    }
}

fn parse_date(field: &'static str, value: Option<&str>) -> Option<NaiveDate> {
    let value = value.filter(|text| !text.is_empty())?;
    match NaiveDate::parse_from_str(value, DATE_FORMAT) {
        Ok(date) => Some(date),
        Err(error) => {
            tracing::warn!(field, value = %value, error = %error, "Ignoring malformed stored date");
            None
        }
    }
}

/// An order has adult content when any physical item requires age verification.
fn contains_adult_content(live: &LiveOrder) -> bool {
    live.items
        .iter()
        .any(|item| item.is_physical() && item.age_verification_required)
}

/// Current time in the configured timezone, for stamping API errors.
pub fn now_in(timezone: &FixedOffset) -> DateTime<FixedOffset> {
    Utc::now().with_timezone(timezone)
}

// ============================================================================
// Unit Tests
// ============================================================================
