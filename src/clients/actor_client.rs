use crate::framework::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit the standard store operations.
///
/// This trait reduces boilerplate by providing default implementations of
/// `create_all`, `find` and `list` that translate framework errors into the
/// client's own error type.
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Persist a batch atomically.
    #[tracing::instrument(skip(self, params), fields(batch = params.len()))]
    async fn create_all(&self, params: Vec<T::Create>) -> Result<Vec<T>, Self::Error> {
        tracing::debug!(?params, "Sending request");
        self.inner().create_all(params).await.map_err(Self::map_error)
    }

    /// Fetch an entity by key.
    #[tracing::instrument(skip(self))]
    async fn find(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().find(id).await.map_err(Self::map_error)
    }

    /// Fetch the whole table in creation order.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }
}
