//! # Product Actor
//!
//! The product table: a naturally keyed kind whose key (the UPC) arrives with
//! the payload.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`Product`]
//! - [`error`] - [`ProductError`] type for type-safe error handling
//! - [`new()`] / [`restore()`] - Factory functions that create the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use customer_orders::product_actor;
//! use customer_orders::model::{ProductCreate, Upc};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = product_actor::new(32);
//!     tokio::spawn(actor.run(()));
//!
//!     let created = client
//!         .create_products(vec![ProductCreate::new("A1", "Widget", "Acme", "1", 2.5, 10)])
//!         .await?;
//!     assert_eq!(created[0].upc, Upc::from("A1"));
//!     assert!(client.find_by_upc(Upc::from("a1")).await?.is_none());
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::ProductClient;
use crate::framework::{Journal, ResourceActor};
use crate::model::Product;

/// Journal table name for products.
pub const TABLE: &str = "products";

/// Creates a new in-memory Product actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Product>, ProductClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, ProductClient::new(generic_client))
}

/// Creates a journaled Product actor, reloading the stored catalog.
pub async fn restore(
    buffer_size: usize,
    journal: Box<dyn Journal<Product>>,
) -> Result<(ResourceActor<Product>, ProductClient), ProductError> {
    let (actor, generic_client) = ResourceActor::restore(buffer_size, journal).await?;
    Ok((actor, ProductClient::new(generic_client)))
}
