//! # Product Client
//!
//! Provides a high-level API for interacting with the `Product` actor.
//! It wraps a `ResourceClient<Product>` and exposes domain-specific methods.
use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Product, ProductCreate, Upc};
use crate::product_actor::ProductError;
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        ProductError::from(e)
    }
}

impl ProductClient {
    /// Records a catalog batch. Either every product is stored or none is.
    ///
    /// Duplicate UPCs, inside the batch or against stored products, fail with
    /// [`ProductError::PersistenceFailure`].
    #[instrument(skip(self, products), fields(batch = products.len()))]
    pub async fn create_products(
        &self,
        products: Vec<ProductCreate>,
    ) -> Result<Vec<Product>, ProductError> {
        debug!("Sending request");
        self.create_all(products).await
    }

    /// Exact, case-sensitive lookup by UPC. A miss is `Ok(None)`.
    #[instrument(skip(self))]
    pub async fn find_by_upc(&self, upc: Upc) -> Result<Option<Product>, ProductError> {
        debug!("Sending request");
        self.find(upc).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{create_mock_client, expect_create_all, expect_find, MockClient};

    fn hammer() -> Product {
        Product {
            upc: Upc::from("076174517163"),
            description: "16 oz. hickory hammer".to_string(),
            manufacturer: "Stanely Tools".to_string(),
            style: "1".to_string(),
            price: 9.97,
            quantity: 50,
        }
    }

    #[tokio::test]
    async fn test_create_products_forwards_whole_batch() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let product_client = ProductClient::new(client);

        let create_task = tokio::spawn(async move {
            product_client
                .create_products(vec![
                    ProductCreate::new("076174517163", "16 oz. hickory hammer", "Stanely Tools", "1", 9.97, 50),
                    ProductCreate::new("076167817162", "20 volt drill driver", "Atomic Tools", "5", 69.99, 10),
                ])
                .await
        });

        let (params, responder) = expect_create_all(&mut receiver)
            .await
            .expect("Expected CreateAll request");
        assert_eq!(params.len(), 2);
        assert_eq!(params[1].upc, Upc::from("076167817162"));

        responder.send(Ok(vec![hammer()])).unwrap();
        let created = create_task.await.unwrap().unwrap();
        assert_eq!(created[0].upc, Upc::from("076174517163"));
    }

    #[tokio::test]
    async fn test_duplicate_maps_to_persistence_failure() {
        let mut mock = MockClient::<Product>::new();
        mock.expect_create_all()
            .return_err(FrameworkError::Duplicate("076174517163".to_string()));
        let product_client = ProductClient::new(mock.client());

        let result = product_client
            .create_products(vec![ProductCreate::new("076174517163", "hammer", "Stanely Tools", "1", 9.97, 50)])
            .await;

        assert!(matches!(result, Err(ProductError::PersistenceFailure(msg)) if msg.contains("076174517163")));
        mock.verify();
    }

    #[tokio::test]
    async fn test_validation_error_survives_the_framework() {
        let mut mock = MockClient::<Product>::new();
        mock.expect_create_all()
            .return_err(FrameworkError::EntityError(Box::new(ProductError::Validation(
                "bad price".to_string(),
            ))));
        let product_client = ProductClient::new(mock.client());

        let result = product_client
            .create_products(vec![ProductCreate::new("X", "thing", "maker", "1", -1.0, 1)])
            .await;

        assert_eq!(result, Err(ProductError::Validation("bad price".to_string())));
    }

    #[tokio::test]
    async fn test_find_by_upc_miss_is_none() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let product_client = ProductClient::new(client);

        let find_task =
            tokio::spawn(async move { product_client.find_by_upc(Upc::from("000000000000")).await });

        let (upc, responder) = expect_find(&mut receiver).await.expect("Expected Find request");
        assert_eq!(upc, Upc::from("000000000000"));
        responder.send(Ok(None)).unwrap();

        assert_eq!(find_task.await.unwrap(), Ok(None));
    }

    #[tokio::test]
    async fn test_closed_store_is_a_persistence_failure() {
        let (client, receiver) = create_mock_client::<Product>(1);
        drop(receiver);
        let product_client = ProductClient::new(client);

        let result = product_client.list().await;
        assert!(matches!(result, Err(ProductError::PersistenceFailure(_))));
    }
}
