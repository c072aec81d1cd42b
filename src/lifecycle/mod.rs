//! # System Lifecycle & Orchestration
//!
//! This module manages the runtime lifecycle of the store: starting the table
//! actors, seeding them, and shutting them down.
//!
//! ## The OrderSystem Pattern
//!
//! [`OrderSystem`] is the conductor. The tables are independent, so wiring is
//! simple:
//!
//! ```rust,ignore
//! let (product_actor, product_client) = product_actor::new(buffer_size);
//! let (customer_actor, customer_client) = customer_actor::new(buffer_size);
//!
//! let product_handle = tokio::spawn(product_actor.run(()));
//! let customer_handle = tokio::spawn(customer_actor.run(()));
//! ```
//!
//! [`OrderSystem::open`] does the same with journaled tables when a data
//! directory is configured. Each actor is restored from its snapshot before its
//! task is spawned, so the first request already sees the reloaded table.
//!
//! ## Seeding
//!
//! [`OrderSystem::seed`] writes products, then customers, one atomic batch per
//! table, and returns the [`SeededRosters`]. Any failure here is a
//! [`SystemError`] and ends startup.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - closes the sender side of the channels
//! 2. **Actors detect closure** - `receiver.recv()` returns `None`
//! 3. **Actors log their final size** and exit
//! 4. **Await completion** - a panicked actor becomes [`SystemError::Shutdown`]
//!
//! ## Observability
//!
//! [`setup_tracing`] installs the subscriber. See the [`tracing`](self::tracing) module.

pub mod error;
pub mod order_system;
pub mod tracing;

pub use error::*;
pub use order_system::*;
pub use self::tracing::*;
