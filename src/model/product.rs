use serde::{Deserialize, Serialize};

use std::fmt::Display;

/// Universal Product Code. Natural key of the product table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Upc(pub String);

impl Upc {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Upc {
    fn from(upc: &str) -> Self {
        Self(upc.to_string())
    }
}

impl From<String> for Upc {
    fn from(upc: String) -> Self {
        Self(upc)
    }
}

impl Display for Upc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Represents a product in the catalog.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// allowing it to be stored by a [`ResourceActor`](crate::framework::ResourceActor).
/// Products are keyed by their [`Upc`], which arrives with the payload.
///
/// See [`impl ActorEntity for Product`](#impl-ActorEntity-for-Product) for details on:
/// - Creation parameters ([`ProductCreate`])
/// - Validation applied before a product is stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub upc: Upc,
    pub description: String,
    pub manufacturer: String,
    pub style: String,
    pub price: f64,
    pub quantity: u32,
}

impl Display for Product {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "UPC {}: {} by {} (style {}) ${:.2}, {} on hand",
            self.upc, self.description, self.manufacturer, self.style, self.price, self.quantity
        )
    }
}

/// Payload for creating a new product.
#[derive(Debug, Clone)]
pub struct ProductCreate {
    pub upc: Upc,
    pub description: String,
    pub manufacturer: String,
    pub style: String,
    pub price: f64,
    pub quantity: u32,
}

impl ProductCreate {
    /// Creates a new product payload.
    ///
    /// # Arguments
    /// * `upc` - Universal Product Code, unique across the catalog
    /// * `description` - Short product description
    /// * `manufacturer` - Manufacturer name
    /// * `style` - Style/category code
    /// * `price` - Unit price, must be non-negative
    /// * `quantity` - Units on hand
    pub fn new(
        upc: impl Into<Upc>,
        description: impl Into<String>,
        manufacturer: impl Into<String>,
        style: impl Into<String>,
        price: f64,
        quantity: u32,
    ) -> Self {
        Self {
            upc: upc.into(),
            description: description.into(),
            manufacturer: manufacturer.into(),
            style: style.into(),
            price,
            quantity,
        }
    }
}
