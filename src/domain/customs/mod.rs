use std::collections::HashMap;
use std::sync::RwLock;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// Customs Declarations
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomsDeclaration {
    pub id: String,
    pub order_number: String,
    /// Electronic export declaration mode ("create", "provide", "carrier").
    pub ead: String,
    pub delivery_cost: f64,
    pub invoice_number: String,
    pub invoice_issue_date: NaiveDate,
    pub mrn: Option<String>,
    pub items: Vec<CustomsDeclarationItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomsDeclarationItem {
    pub customs_code: String,
    pub value: f64,
    pub product_name_en: String,
    pub product_name: Option<String>,
    pub units_count: u32,
    pub country_of_origin: String,
    pub weight: f64,
    pub is_food_or_book: bool,
    pub is_voc: bool,
}

impl CustomsDeclaration {
    pub fn total_value(&self) -> f64 {
        self.items.iter().map(|item| item.value).sum()
    }
}

pub trait CustomsDeclarationRepository: Send + Sync {
    fn get_by_order_number(&self, order_number: &str) -> Option<CustomsDeclaration>;
}

#[derive(Default)]
pub struct InMemoryCustomsDeclarationRepository {
    declarations: RwLock<HashMap<String, CustomsDeclaration>>,
}

impl InMemoryCustomsDeclarationRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn save(&self, declaration: CustomsDeclaration) {
        if let Ok(mut declarations) = self.declarations.write() {
            declarations.insert(declaration.order_number.clone(), declaration);
        }
    }
}

impl CustomsDeclarationRepository for InMemoryCustomsDeclarationRepository {
    fn get_by_order_number(&self, order_number: &str) -> Option<CustomsDeclaration> {
        self.declarations
            .read()
            .ok()
            .and_then(|declarations| declarations.get(order_number).cloned())
    }
}
