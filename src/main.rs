use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod api;
mod checkout;
mod domain;
mod log;
mod metrics;
mod pickup_point;
mod session;
mod settings;

use api::rest::{PickupPointValidateRequest, ReqwestClient};
use api::soap::BaseResponse;
use checkout::PickupPointValidator;
use domain::carrier::{InMemoryCarrierRepository, PacketaPickupPointsConfig};
use domain::customs::{
    CustomsDeclaration, CustomsDeclarationItem, InMemoryCustomsDeclarationRepository,
};
use domain::order::{
    now_in, Builder, BuilderConfig, ConfiguredCodMethods, ContactDetails, Destination,
    ItemWeightCalculator, LineItem, LiveOrder, Order, StoredOrderData, StoredScalar,
};
use settings::Settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Default to INFO level, can be overridden with RUST_LOG env var
    // Example: RUST_LOG=debug cargo run
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,packetery=debug"))
        )
        .init();

    let settings = Settings::load()?;
    tracing::info!(
        validation_enabled = settings.validation.enabled,
        timezone = %settings.timezone,
        "Settings loaded"
    );

    let metrics = Arc::new(metrics::Metrics::new()?);

    // === 1. Order builder with in-memory collaborators ===
    let builder_config = BuilderConfig::from_settings(&settings)?;
    let timezone = builder_config.timezone;
    let customs = Arc::new(InMemoryCustomsDeclarationRepository::new());
    customs.save(demo_customs_declaration());
    let builder = Builder::new(
        builder_config,
        Arc::new(ItemWeightCalculator::new(settings.packaging_weight)),
        customs,
        PacketaPickupPointsConfig::new(),
        Arc::new(ConfiguredCodMethods::new(settings.cod_payment_methods.clone())),
        Arc::new(InMemoryCarrierRepository::with_internal_vendors()),
    )
    .with_metrics(metrics.clone());

    let live = demo_live_order();
    let stored = demo_stored_row();

    let mut order = builder.build(&live, &stored)?;
    log_order(&order);

    // === 2. Pickup point validation ===
    let timeout = Duration::from_secs(settings.validation.timeout_secs);
    let client = Arc::new(ReqwestClient::new(timeout)?);
    let validator = PickupPointValidator::new(
        &settings,
        Arc::new(log::TracingLogger),
        client,
        Arc::new(session::MemorySession::new()),
    )
    .with_metrics(metrics.clone());

    let needs_validation = validator.is_active() && !order.is_packet_submitted();
    if let Some(pickup_point) = order.pickup_point.clone().filter(|_| needs_validation) {
        let request = PickupPointValidateRequest::new(pickup_point.id)
            .with_carrier(order.carrier.id.clone(), None)
            .with_country(order.shipping_country.clone().unwrap_or_default())
            .with_weight(order.final_weight())
            .with_cod(order.has_cod())
            .with_age_verification(order.contains_adult_content().unwrap_or(false));

        let response = validator.validate(&request).await;
        for error in &response.errors {
            tracing::warn!(code = %error.code, "{}", error.message());
        }
        let fault = match validator.take_http_error() {
            Some(message) => BaseResponse::with_fault("HttpError", message),
            None => BaseResponse::new(),
        };
        order.record_api_fault(&fault, now_in(&timezone));
        tracing::info!(is_valid = response.is_valid, "Pickup point validated");
    }

    println!("{}", serde_json::to_string_pretty(&order)?);
    println!("{}", metrics.render()?);

    Ok(())
}

fn log_order(order: &Order) {
    let destination = match order.destination() {
        Some(Destination::PickupPoint(point)) => format!("pickup point {}", point.id),
        Some(Destination::CarDelivery(id)) => format!("car delivery {id}"),
        Some(Destination::Address(address)) => {
            format!("address {}", address.city.as_deref().unwrap_or("-"))
        }
        None => "none".to_string(),
    };

    tracing::info!(
        order_number = %order.number,
        carrier = %order.carrier.id,
        weight = ?order.final_weight(),
        value = ?order.final_value(),
        cod = ?order.final_cod(),
        customs_value = ?order.customs_declaration.as_ref().map(CustomsDeclaration::total_value),
        destination = %destination,
        "Order entity ready"
    );
}

fn demo_customs_declaration() -> CustomsDeclaration {
    CustomsDeclaration {
        id: "1".to_string(),
        order_number: "1001".to_string(),
        ead: "create".to_string(),
        delivery_cost: 0.0,
        invoice_number: "INV-1001".to_string(),
        invoice_issue_date: chrono::Utc::now().date_naive(),
        mrn: None,
        items: vec![CustomsDeclarationItem {
            customs_code: "8516790000".to_string(),
            value: 1290.0,
            product_name_en: "Coffee grinder".to_string(),
            product_name: Some("Mlýnek na kávu".to_string()),
            units_count: 1,
            country_of_origin: "CZ".to_string(),
            weight: 1.8,
            is_food_or_book: false,
            is_voc: false,
        }],
    }
}

fn demo_live_order() -> LiveOrder {
    LiveOrder {
        order_number: "1001".to_string(),
        currency: "CZK".to_string(),
        total: 1290.0,
        payment_method: "cod".to_string(),
        billing: ContactDetails {
            first_name: "Jana".to_string(),
            last_name: "Nováková".to_string(),
            address_1: "Dlouhá 12".to_string(),
            city: "Praha".to_string(),
            postcode: "11000".to_string(),
            country: "CZ".to_string(),
            phone: "+420777000111".to_string(),
            email: "jana@example.com".to_string(),
            ..Default::default()
        },
        shipping: None,
        items: vec![
            LineItem {
                name: "Coffee grinder".to_string(),
                quantity: 1,
                weight: Some(1.8),
                is_virtual: false,
                age_verification_required: false,
            },
            LineItem {
                name: "Rum 0.7 l".to_string(),
                quantity: 1,
                weight: Some(1.2),
                is_virtual: false,
                age_verification_required: true,
            },
        ],
    }
}

fn demo_stored_row() -> StoredOrderData {
    StoredOrderData {
        weight: Some(StoredScalar::from("")),
        adult_content: Some(StoredScalar::from("")),
        point_id: Some("12345".to_string()),
        point_name: Some("Z-Point Praha 1, Dlouhá 12".to_string()),
        point_city: Some("Praha".to_string()),
        point_zip: Some("11000".to_string()),
        point_street: Some("Dlouhá 12".to_string()),
        point_url: Some("https://www.zasilkovna.cz/pobocky/12345".to_string()),
        ..StoredOrderData::new("1001", "packeta")
    }
}
