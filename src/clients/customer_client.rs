//! # Customer Client
//!
//! Provides a high-level API for interacting with the `Customer` actor.
use crate::clients::actor_client::ActorClient;
use crate::customer_actor::CustomerError;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Customer, CustomerCreate, CustomerId};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Customer actor.
#[derive(Clone)]
pub struct CustomerClient {
    inner: ResourceClient<Customer>,
}

impl CustomerClient {
    pub fn new(inner: ResourceClient<Customer>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Customer> for CustomerClient {
    type Error = CustomerError;

    fn inner(&self) -> &ResourceClient<Customer> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        CustomerError::from(e)
    }
}

impl CustomerClient {
    /// Records a batch of customers and returns them with their new ids.
    #[instrument(skip(self, customers), fields(batch = customers.len()))]
    pub async fn create_customers(
        &self,
        customers: Vec<CustomerCreate>,
    ) -> Result<Vec<Customer>, CustomerError> {
        debug!("Sending request");
        self.create_all(customers).await
    }

    #[instrument(skip(self))]
    pub async fn find_customer(&self, id: CustomerId) -> Result<Option<Customer>, CustomerError> {
        debug!("Sending request");
        self.find(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::MockClient;

    fn smith(id: u64) -> Customer {
        Customer {
            id: CustomerId(id),
            last_name: "Smith".to_string(),
            first_name: "John".to_string(),
            street: "Flower road 1112".to_string(),
            zip: "90809".to_string(),
            phone: "9091254327".to_string(),
        }
    }

    #[tokio::test]
    async fn test_find_customer_and_list() {
        let mut mock = MockClient::<Customer>::new();
        mock.expect_find(CustomerId(1)).return_ok(Some(smith(1)));
        mock.expect_list().return_ok(vec![smith(1)]);
        let client = CustomerClient::new(mock.client());

        let found = client.find_customer(CustomerId(1)).await.unwrap();
        assert_eq!(found, Some(smith(1)));
        assert_eq!(client.list().await.unwrap().len(), 1);
        mock.verify();
    }

    #[tokio::test]
    async fn test_journal_failure_maps_to_persistence_failure() {
        let mut mock = MockClient::<Customer>::new();
        mock.expect_create_all()
            .return_err(FrameworkError::Persistence("disk full".to_string()));
        let client = CustomerClient::new(mock.client());

        let result = client
            .create_customers(vec![CustomerCreate::new("Smith", "John", "Flower road 1112", "90809", "9091254327")])
            .await;
        assert!(matches!(result, Err(CustomerError::PersistenceFailure(msg)) if msg.contains("disk full")));
    }
}
