use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::clients::{ActorClient, CustomerClient, ProductClient};
use crate::config::Config;
use crate::framework::JsonSnapshot;
use crate::model::{Customer, CustomerCreate, Product, ProductCreate};
use crate::selection::Roster;
use crate::{customer_actor, product_actor};

use super::SystemError;

/// The rosters the selection workflow runs over, exactly as the store returned them.
#[derive(Debug, Clone, PartialEq)]
pub struct SeededRosters {
    pub customers: Roster<Customer>,
    pub products: Roster<Product>,
}

/// The runtime orchestrator: owns the two table actors and their clients.
///
/// `OrderSystem` is responsible for:
/// - **Lifecycle Management**: starting and stopping the Product and Customer actors
/// - **Storage Selection**: in-memory tables, or journaled tables under `--data-dir`
/// - **Seeding**: loading the demo records into empty tables
///
/// # Example
///
/// ```ignore
/// let system = OrderSystem::open(&config).await?;
/// let rosters = system.seed(seed::products(), seed::customers()).await?;
///
/// // ... hand the rosters to the selection workflow ...
///
/// system.shutdown().await?;
/// ```
pub struct OrderSystem {
    /// Client for the Product actor
    pub product_client: ProductClient,

    /// Client for the Customer actor
    pub customer_client: CustomerClient,

    /// Task handles for the running actors (used for graceful shutdown)
    handles: Vec<JoinHandle<()>>,
}

impl OrderSystem {
    /// Starts both actors with in-memory tables.
    pub fn new(buffer_size: usize) -> Self {
        let (product_actor, product_client) = product_actor::new(buffer_size);
        let (customer_actor, customer_client) = customer_actor::new(buffer_size);

        // Neither table has dependencies (Context = ())
        let product_handle = tokio::spawn(product_actor.run(()));
        let customer_handle = tokio::spawn(customer_actor.run(()));

        Self {
            product_client,
            customer_client,
            handles: vec![product_handle, customer_handle],
        }
    }

    /// Starts the system described by `config`.
    ///
    /// With a data directory each table is restored from its JSON snapshot
    /// (`products.json`, `customers.json`) and every later batch is committed
    /// there before it becomes visible.
    pub async fn open(config: &Config) -> Result<Self, SystemError> {
        config.validate()?;
        let Some(dir) = config.data_dir.as_deref() else {
            info!(buffer_size = config.buffer_size, "Starting in-memory store");
            return Ok(Self::new(config.buffer_size));
        };

        info!(data_dir = %dir.display(), buffer_size = config.buffer_size, "Starting journaled store");
        let (product_actor, product_client) = product_actor::restore(
            config.buffer_size,
            Box::new(JsonSnapshot::<Product>::new(dir, product_actor::TABLE)),
        )
        .await?;
        let (customer_actor, customer_client) = customer_actor::restore(
            config.buffer_size,
            Box::new(JsonSnapshot::<Customer>::new(dir, customer_actor::TABLE)),
        )
        .await?;

        let product_handle = tokio::spawn(product_actor.run(()));
        let customer_handle = tokio::spawn(customer_actor.run(()));

        Ok(Self {
            product_client,
            customer_client,
            handles: vec![product_handle, customer_handle],
        })
    }

    /// Loads the seed records and returns the resulting rosters.
    ///
    /// Products go first, then customers, each as one atomic batch. A table that
    /// already holds records (a reloaded journal) is left alone and its stored
    /// records become the roster.
    pub async fn seed(
        &self,
        products: Vec<ProductCreate>,
        customers: Vec<CustomerCreate>,
    ) -> Result<SeededRosters, SystemError> {
        let stored = self.product_client.list().await?;
        let products = if !stored.is_empty() || products.is_empty() {
            info!(size = stored.len(), "Product table not seeded");
            stored
        } else {
            self.product_client.create_products(products).await?
        };

        let stored = self.customer_client.list().await?;
        let customers = if !stored.is_empty() || customers.is_empty() {
            info!(size = stored.len(), "Customer table not seeded");
            stored
        } else {
            self.customer_client.create_customers(customers).await?
        };

        Ok(SeededRosters {
            customers: Roster::new(customers),
            products: Roster::new(products),
        })
    }

    /// Gracefully shuts down both actors.
    ///
    /// Dropping the clients closes the channels; each actor drains what is
    /// queued, logs its final size and exits. Clones of the clients held
    /// elsewhere keep their actor alive, so drop those first.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down system...");

        drop(self.product_client);
        drop(self.customer_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Actor task failed");
                return Err(SystemError::Shutdown(e.to_string()));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
