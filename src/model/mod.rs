//! Pure data structures stored by the [`ResourceActor`](crate::framework::ResourceActor).
//!
//! Each kind comes as a pair: the pre-creation payload (`*Create`) and the
//! persisted entity. Only the store turns the first into the second.

pub mod customer;
pub mod product;

pub use customer::*;
pub use product::*;
