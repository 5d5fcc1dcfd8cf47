use std::collections::HashSet;

use super::live::LiveOrder;

// ============================================================================
// Builder Collaborators
// ============================================================================

pub trait WeightCalculator: Send + Sync {
    /// Package weight in kilograms computed from the live order.
    fn calculate_order_weight(&self, order: &LiveOrder) -> Option<f64>;
}

/// Sums unit weight times quantity of every physical item and adds the
/// configured packaging weight. Orders without any weighed item have no
/// calculated weight.
#[derive(Debug, Clone, Default)]
pub struct ItemWeightCalculator {
    packaging_weight: f64,
}

impl ItemWeightCalculator {
    pub fn new(packaging_weight: f64) -> Self {
        Self { packaging_weight }
    }
}

impl WeightCalculator for ItemWeightCalculator {
    fn calculate_order_weight(&self, order: &LiveOrder) -> Option<f64> {
        let weights: Vec<f64> = order
            .items
            .iter()
            .filter(|item| item.is_physical())
            .filter_map(|item| item.weight.map(|weight| weight * f64::from(item.quantity)))
            .collect();

        if weights.is_empty() {
            return None;
        }

        Some(weights.iter().sum::<f64>() + self.packaging_weight)
    }
}

pub trait PaymentMethodClassifier: Send + Sync {
    fn is_cod_payment_method(&self, payment_method: &str) -> bool;
}

/// Cash-on-delivery methods as listed in the settings.
#[derive(Debug, Clone, Default)]
pub struct ConfiguredCodMethods {
    methods: HashSet<String>,
}

impl ConfiguredCodMethods {
    pub fn new<I, S>(methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            methods: methods.into_iter().map(Into::into).collect(),
        }
    }
}

impl PaymentMethodClassifier for ConfiguredCodMethods {
    fn is_cod_payment_method(&self, payment_method: &str) -> bool {
        !payment_method.is_empty() && self.methods.contains(payment_method)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::LineItem;

    fn item(weight: Option<f64>, quantity: u32, is_virtual: bool) -> LineItem {
        LineItem {
            name: "item".to_string(),
            quantity,
            weight,
            is_virtual,
            age_verification_required: false,
        }
    }

    #[test]
    fn test_weight_sums_physical_items() {
        let order = LiveOrder {
            items: vec![
                item(Some(0.5), 2, false),
                item(Some(0.25), 1, false),
                item(Some(10.0), 1, true),
                item(None, 3, false),
            ],
            ..Default::default()
        };

        let calculator = ItemWeightCalculator::new(0.1);
        let weight = calculator.calculate_order_weight(&order).unwrap();
        assert!((weight - 1.35).abs() < 1e-9);
    }

    #[test]
    fn test_weight_without_weighed_items() {
        let order = LiveOrder {
            items: vec![item(None, 1, false)],
            ..Default::default()
        };

        assert_eq!(ItemWeightCalculator::new(0.1).calculate_order_weight(&order), None);
    }

    #[test]
    fn test_cod_classification() {
        let classifier = ConfiguredCodMethods::new(["cod", "packeta_cod"]);

        assert!(classifier.is_cod_payment_method("cod"));
        assert!(classifier.is_cod_payment_method("packeta_cod"));
        assert!(!classifier.is_cod_payment_method("bacs"));
        assert!(!classifier.is_cod_payment_method(""));
    }
}
