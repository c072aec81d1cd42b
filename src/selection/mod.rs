//! # Selection Workflow
//!
//! The interactive half of the demo. An operator picks a customer by id and
//! then a product by UPC, both from rosters the store has already returned.
//!
//! ## State Machine
//!
//! ```text
//!            ┌──────────── miss / bad token ───────────┐
//!            ↓                                         │
//!   AwaitingCustomer ── match ──→ AwaitingProduct ── miss ──┘
//!            ↑                          │
//!            └──────── match ───────────┘
//!
//!   'q' / 'quit' / 'exit' / end of input ──→ Exit   (from either prompt)
//! ```
//!
//! Every failure goes back to the customer prompt, so a product miss forfeits
//! the customer picked in the same round. Format and lookup errors are
//! reported to the operator and never leave [`SelectionWorkflow::run`]; only
//! console I/O errors do.

pub mod console;
pub mod error;
pub mod roster;
pub mod workflow;

pub use console::TokenReader;
pub use error::SelectionError;
pub use roster::Roster;
pub use workflow::{Selection, SelectionState, SelectionWorkflow, SessionSummary};
