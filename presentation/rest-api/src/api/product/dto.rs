use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::product::model::Product;

/// Body of product create and update requests.
#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ProductRequest {
    /// Product name (cannot be empty, at most 255 characters)
    pub name: String,
    /// Brand name
    #[oai(skip_serializing_if_is_none)]
    pub brand: Option<String>,
    /// Category used by the deals filter, e.g. "Dairy"
    #[oai(skip_serializing_if_is_none)]
    pub category: Option<String>,
    /// Unit of measure, e.g. "oz"
    #[oai(skip_serializing_if_is_none)]
    pub unit: Option<String>,
    /// Package size, e.g. "16"
    #[oai(skip_serializing_if_is_none)]
    pub size: Option<String>,
    /// UPC/EAN barcode or store SKU, up to 50 characters
    #[oai(skip_serializing_if_is_none)]
    pub barcode: Option<String>,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ProductResponse {
    /// Product unique identifier
    pub id: String,
    pub name: String,
    #[oai(skip_serializing_if_is_none)]
    pub brand: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub category: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub unit: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub size: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub barcode: Option<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name,
            brand: product.brand,
            category: product.category,
            unit: product.unit,
            size: product.size,
            barcode: product.barcode,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}
