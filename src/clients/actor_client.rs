//! # ActorClient Trait
//!
//! Common interface for the collection-specific clients, adding default `get`
//! and `delete` methods built on top of a generic `ResourceClient`.
use crate::framework::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for collection-specific clients to inherit standard operations.
///
/// Implementors only provide access to the inner [`ResourceClient`] and a
/// mapping from [`FrameworkError`] to their own error type.
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The collection-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch a record by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Delete a record by ID.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}

/// Recovers the collection's own error from a boxed [`FrameworkError::EntityError`].
///
/// Anything that is not an entity error of type `E` is handed to `fallback`.
pub(crate) fn recover_entity_error<E>(
    e: FrameworkError,
    fallback: impl FnOnce(FrameworkError) -> E,
) -> E
where
    E: std::error::Error + Send + Sync + 'static,
{
    if e.is_unavailable() {
        tracing::warn!(error = %e, "Store unavailable");
    }
    match e {
        FrameworkError::EntityError(inner) => match inner.downcast::<E>() {
            Ok(entity_error) => *entity_error,
            Err(other) => fallback(FrameworkError::EntityError(other)),
        },
        other => fallback(other),
    }
}
