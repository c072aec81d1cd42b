//! # customer-orders
//!
//! > **A resource-oriented entity store behind a console selection loop.**
//!
//! The crate seeds two tables (products and customers) into actor-owned
//! stores, then lets an operator pick a customer and a product from the
//! returned rosters.
//!
//! ## 🚀 Core Concepts
//!
//! ### One generic store, many tables
//! `ResourceActor<T: ActorEntity>` owns a single table. The batch-create and
//! lookup logic is written once; [`Product`](model::Product) and
//! [`Customer`](model::Customer) only say how they are keyed and validated.
//!
//! - **Natural keys** arrive with the payload (a product's UPC).
//! - **Surrogate keys** are drawn from the table's `IdSequence` (a customer's id).
//!
//! ### Atomic batches
//! A batch is staged, checked for duplicate keys (against the table and within
//! itself), committed to the journal if there is one, and only then applied.
//! One bad record and nothing from the batch is visible.
//!
//! ### Mocking
//! Clients are tested without actors. See the [`framework::mock`] module.
//!
//! ## 👩‍💻 Architecture Notes
//!
//! ### 1. Type-Safe Error Handling
//! Each actor defines its own error type (`ProductError`, `CustomerError`).
//! Framework failures (duplicates, journal errors, closed channels) become
//! their `PersistenceFailure` variant. The selection loop has its own
//! [`SelectionError`](selection::SelectionError), and only I/O errors leave it.
//!
//! ### 2. Concurrency Model
//! Each `ResourceActor` runs in its own Tokio task and handles messages one at
//! a time, so there are no locks around table state. The console loop is
//! synchronous and runs on a blocking thread.
//!
//! ### 3. Observability
//! `tracing` everywhere with structured fields. Client methods are
//! instrumented, so store events nest under the call that caused them.
//! See the [`lifecycle::tracing`] module.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! - **Role**: the generic actor, client, identifier sequence and journal.
//! - **Key items**: [`ActorEntity`](framework::ActorEntity),
//!   [`ResourceActor`](framework::ResourceActor),
//!   [`JsonSnapshot`](framework::JsonSnapshot).
//!
//! ### 2. The Orchestrator ([`lifecycle`])
//! - **Role**: starts the actors, seeds them, shuts them down.
//! - **Key items**: [`OrderSystem`](lifecycle::OrderSystem),
//!   [`shutdown`](lifecycle::OrderSystem::shutdown).
//!
//! ### 3. The Interface ([`clients`])
//! - **Role**: domain-specific wrappers over the generic `ResourceClient`.
//! - **Key items**: [`ProductClient`](clients::ProductClient),
//!   [`CustomerClient`](clients::CustomerClient).
//!
//! ### 4. The Tables ([`product_actor`], [`customer_actor`])
//! - **Role**: `ActorEntity` implementations and per-table errors.
//!
//! ### 5. The Console ([`selection`])
//! - **Role**: the customer-then-product selection state machine.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # In-memory tables
//! cargo run
//!
//! # Tables persisted under ./data, debug logs
//! cargo run -- --data-dir ./data --verbose
//! ```

pub mod clients;
pub mod config;
pub mod customer_actor;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod product_actor;
pub mod seed;
pub mod selection;
