//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the global subscriber once, from the binary.
//!
//! The format is compact and hides the module prefix (`with_target(false)`);
//! actors identify themselves with an `entity_type` field instead. Everything
//! is written to stderr so log lines never interleave with the operator console
//! on stdout.
//!
//! ## Levels
//!
//! - `RUST_LOG` always wins when set.
//! - Otherwise `--verbose` selects `customer_orders=debug`, and the default is
//!   `info`.
//!
//! ```bash
//! # Batch results, selections and lifecycle only
//! customer-orders
//!
//! # Every lookup and full payloads at client entry points
//! RUST_LOG=debug customer-orders
//!
//! # Only the store
//! RUST_LOG=customer_orders::framework=debug customer-orders
//! ```
//!
//! ## Sample Output
//!
//! With the default filter a seeded session reads:
//!
//! ```text
//! INFO Actor started entity_type="Product" size=0
//! INFO Actor started entity_type="Customer" size=0
//! INFO create_products: Created batch entity_type="Product" created=3 size=3
//! INFO create_customers: Created batch entity_type="Customer" created=3 size=3
//! INFO Selection session started customers=3 products=3
//! WARN Selection rejected error='x' is not a number
//! INFO Selection confirmed customer=1 upc=076174517163
//! ```
//!
//! Client methods carry `#[instrument]`, so the store's events appear inside the
//! span of the call that caused them.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset.
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "customer_orders=debug"
    } else {
        "info"
    }
}

pub fn setup_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
