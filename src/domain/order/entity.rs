use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::Serialize;

use crate::api::soap::BaseResponse;
use crate::domain::carrier::Carrier;
use crate::domain::customs::CustomsDeclaration;
use super::value_objects::{Address, Destination, PickupPoint, Size};

// ============================================================================
// Order Entity - Packet metadata for one shop order
// ============================================================================
//
// Built fresh for every request from the stored plugin row and the live
// shop order. "manual" values come from the administrator, "calculated" ones
// from the live order; the manual value wins when both are present.
//
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct Order {
    // Identity
    pub number: String,
    pub custom_number: Option<String>,
    pub carrier: Carrier,

    // Weight and size
    pub weight: Option<f64>,
    pub calculated_weight: Option<f64>,
    pub size: Size,

    // Packet state
    pub packet_id: Option<String>,
    pub packet_tracking_url: Option<String>,
    pub packet_claim_id: Option<String>,
    pub packet_claim_tracking_url: Option<String>,
    pub packet_claim_password: Option<String>,
    pub packet_status: Option<String>,
    pub carrier_number: Option<String>,
    pub is_exported: bool,
    pub is_label_printed: bool,
    pub stored_until: Option<NaiveDate>,
    pub deliver_on: Option<NaiveDate>,

    // Last API error
    pub last_api_error_message: Option<String>,
    pub last_api_error_date_time: Option<DateTime<FixedOffset>>,

    // Destination
    pub shipping_country: Option<String>,
    pub delivery_address: Option<Address>,
    pub address_validated: bool,
    pub car_delivery_id: Option<String>,
    pub pickup_point: Option<PickupPoint>,

    // Recipient
    pub name: Option<String>,
    pub surname: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub note: Option<String>,
    pub eshop: Option<String>,

    // Money
    pub currency: Option<String>,
    pub manual_value: Option<f64>,
    pub calculated_value: Option<f64>,
    pub manual_cod: Option<f64>,
    pub calculated_cod: Option<f64>,

    // Content
    pub adult_content: Option<bool>,
    pub customs_declaration: Option<CustomsDeclaration>,
}

impl Order {
    pub fn new(number: impl Into<String>, carrier: Carrier) -> Self {
        Self {
            number: number.into(),
            custom_number: None,
            carrier,
            weight: None,
            calculated_weight: None,
            size: Size::default(),
            packet_id: None,
            packet_tracking_url: None,
            packet_claim_id: None,
            packet_claim_tracking_url: None,
            packet_claim_password: None,
            packet_status: None,
            carrier_number: None,
            is_exported: false,
            is_label_printed: false,
            stored_until: None,
            deliver_on: None,
            last_api_error_message: None,
            last_api_error_date_time: None,
            shipping_country: None,
            delivery_address: None,
            address_validated: false,
            car_delivery_id: None,
            pickup_point: None,
            name: None,
            surname: None,
            email: None,
            phone: None,
            note: None,
            eshop: None,
            currency: None,
            manual_value: None,
            calculated_value: None,
            manual_cod: None,
            calculated_cod: None,
            adult_content: None,
            customs_declaration: None,
        }
    }

    pub fn final_weight(&self) -> Option<f64> {
        self.weight.or(self.calculated_weight)
    }

    pub fn final_value(&self) -> Option<f64> {
        self.manual_value.or(self.calculated_value)
    }

    pub fn final_cod(&self) -> Option<f64> {
        self.manual_cod.or(self.calculated_cod)
    }

    pub fn has_cod(&self) -> bool {
        self.final_cod().is_some()
    }

    /// Tri-state: `None` until it has been decided from stored data or the
    /// order items.
    pub fn contains_adult_content(&self) -> Option<bool> {
        self.adult_content
    }

    pub fn is_packet_submitted(&self) -> bool {
        self.packet_id.is_some()
    }

    /// Resolves the single destination of the packet: a chosen pickup point,
    /// then a car delivery slot, then the home delivery address.
    pub fn destination(&self) -> Option<Destination<'_>> {
        if let Some(pickup_point) = &self.pickup_point {
            return Some(Destination::PickupPoint(pickup_point));
        }
        if let Some(car_delivery_id) = &self.car_delivery_id {
            return Some(Destination::CarDelivery(car_delivery_id));
        }
        self.delivery_address.as_ref().map(Destination::Address)
    }

    pub fn set_last_api_error(&mut self, message: impl Into<String>, at: DateTime<FixedOffset>) {
        self.last_api_error_message = Some(message.into());
        self.last_api_error_date_time = Some(at);
    }

    /// Stores the fault of the latest API call as the last API error.
    /// A response without a fault clears the previous error.
    pub fn record_api_fault(&mut self, response: &BaseResponse, at: DateTime<FixedOffset>) -> bool {
        let Some(kind) = response.fault_kind() else {
            self.clear_last_api_error();
            return false;
        };
        tracing::warn!(
            order_number = %self.number,
            fault = kind.as_str(),
            "API call failed"
        );
        let message = response
            .fault_string()
            .or(response.fault())
            .unwrap_or_default()
            .to_string();
        self.set_last_api_error(message, at);
        true
    }

    pub fn clear_last_api_error(&mut self) {
        self.last_api_error_message = None;
        self.last_api_error_date_time = None;
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
