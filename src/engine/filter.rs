//! Dimension filters over the summarized record set.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::model::{RecordKey, SummaryRecord};

/// Which dimension value(s) the working subset must match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum FilterSelection {
    /// Records for one product
    Product(String),
    /// Records for one warehouse
    Warehouse(String),
    /// Records for one factory
    Factory(String),
    /// Records for one product in one warehouse (compound)
    ProductWarehouse {
        product: String,
        warehouse: String,
    },
}

impl FilterSelection {
    /// Whether a record key satisfies this selection.
    #[must_use]
    pub fn matches(&self, key: &RecordKey) -> bool {
        match self {
            FilterSelection::Product(product) => key.product == *product,
            FilterSelection::Warehouse(warehouse) => key.warehouse == *warehouse,
            FilterSelection::Factory(factory) => key.factory == *factory,
            FilterSelection::ProductWarehouse { product, warehouse } => {
                key.product == *product && key.warehouse == *warehouse
            }
        }
    }

    /// Select the matching subset, preserving input order.
    #[must_use]
    pub fn apply(&self, records: &[SummaryRecord]) -> Vec<SummaryRecord> {
        records
            .iter()
            .filter(|r| self.matches(&r.key))
            .cloned()
            .collect()
    }

    /// Human description of the selection, for report titles:
    /// "for Product P-100", "for Product P-100 in Warehouse W2".
    #[must_use]
    pub fn title_suffix(&self) -> String {
        match self {
            FilterSelection::Product(product) => format!("for Product {product}"),
            FilterSelection::Warehouse(warehouse) => format!("for Warehouse {warehouse}"),
            FilterSelection::Factory(factory) => format!("for Factory {factory}"),
            FilterSelection::ProductWarehouse { product, warehouse } => {
                format!("for Product {product} in Warehouse {warehouse}")
            }
        }
    }
}

impl std::fmt::Display for FilterSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FilterSelection::Product(product) => write!(f, "Product={product}"),
            FilterSelection::Warehouse(warehouse) => write!(f, "Warehouse={warehouse}"),
            FilterSelection::Factory(factory) => write!(f, "Factory={factory}"),
            FilterSelection::ProductWarehouse { product, warehouse } => {
                write!(f, "Product={product}+Warehouse={warehouse}")
            }
        }
    }
}
