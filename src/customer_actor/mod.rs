//! # Customer Actor
//!
//! The customer table: a surrogate keyed kind. The store draws each
//! [`CustomerId`](crate::model::CustomerId) from its sequence while the batch is
//! built, so identifiers are visible as soon as `create_customers` returns.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`Customer`]
//! - [`error`] - [`CustomerError`] type for type-safe error handling
//! - [`new()`] / [`restore()`] - Factory functions that create the actor and client
//!
//! ## Key Features
//!
//! - **Sequential ID generation**: identifiers start at 1 and only move forward
//! - **No reuse**: a failed batch burns the identifiers it drew

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::CustomerClient;
use crate::framework::{Journal, ResourceActor};
use crate::model::Customer;

/// Journal table name for customers.
pub const TABLE: &str = "customers";

/// Creates a new in-memory Customer actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Customer>, CustomerClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, CustomerClient::new(generic_client))
}

/// Creates a journaled Customer actor, reloading stored customers and resuming
/// the identifier sequence after the largest stored id.
pub async fn restore(
    buffer_size: usize,
    journal: Box<dyn Journal<Customer>>,
) -> Result<(ResourceActor<Customer>, CustomerClient), CustomerError> {
    let (actor, generic_client) = ResourceActor::restore(buffer_size, journal).await?;
    Ok((actor, CustomerClient::new(generic_client)))
}
