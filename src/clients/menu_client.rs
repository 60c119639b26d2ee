//! # Menu Client
//!
//! High-level API for the menu actor. Admin CRUD plus the stock batches the
//! placement engine drives.
use crate::clients::actor_client::{recover_entity_error, ActorClient};
use crate::framework::{BatchOutcome, Filter, FrameworkError, ResourceClient};
use crate::menu_actor::{MenuAction, MenuActionResult, MenuError};
use crate::model::{MenuItem, MenuItemCreate, MenuItemId, MenuItemUpdate};
use async_trait::async_trait;
use std::cmp::Reverse;
use tracing::{debug, instrument};

/// Outcome of one line of a stock batch: the item's count after the write.
pub type LineOutcome = Result<u32, MenuError>;

/// Client for interacting with the menu actor.
#[derive(Clone)]
pub struct MenuClient {
    inner: ResourceClient<MenuItem>,
}

impl MenuClient {
    pub fn new(inner: ResourceClient<MenuItem>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<MenuItem> for MenuClient {
    type Error = MenuError;

    fn inner(&self) -> &ResourceClient<MenuItem> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        recover_entity_error(e, |e| match e {
            FrameworkError::NotFound(id) => MenuError::NotFound(id),
            other => MenuError::ActorCommunicationError(other.to_string()),
        })
    }
}

fn unexpected(result: &MenuActionResult) -> MenuError {
    MenuError::ActorCommunicationError(format!("unexpected action result: {result:?}"))
}

impl MenuClient {
    #[instrument(skip(self))]
    pub async fn create_item(&self, params: MenuItemCreate) -> Result<MenuItemId, MenuError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Replaces the item's editable fields and returns the stored result.
    #[instrument(skip(self))]
    pub async fn update_item(
        &self,
        id: MenuItemId,
        update: MenuItemUpdate,
    ) -> Result<MenuItem, MenuError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Deletes an item. An unknown id is [`MenuError::NotFound`].
    #[instrument(skip(self))]
    pub async fn delete_item(&self, id: MenuItemId) -> Result<(), MenuError> {
        self.delete(id).await
    }

    /// All menu items, newest first.
    #[instrument(skip(self))]
    pub async fn list_menu(&self) -> Result<Vec<MenuItem>, MenuError> {
        let mut items = self
            .inner
            .list(Filter::all())
            .await
            .map_err(Self::map_error)?;
        items.sort_by_key(|item| Reverse((item.created_at, item.id.clone())));
        debug!(count = items.len(), "Listed menu");
        Ok(items)
    }

    /// Check the current stock level for an item.
    #[instrument(skip(self))]
    pub async fn check_stock(&self, id: MenuItemId) -> Result<u32, MenuError> {
        match self
            .inner
            .perform_action(id, MenuAction::CheckStock)
            .await
            .map_err(Self::map_error)?
        {
            MenuActionResult::CheckStock(count) => Ok(count),
            other => Err(unexpected(&other)),
        }
    }

    /// Conditional decrement of every `(item, quantity)` line in one store turn.
    ///
    /// The outer error means the store could not be reached and nothing was
    /// applied. Otherwise each line reports its own outcome, in order.
    #[instrument(skip(self))]
    pub async fn debit_all(
        &self,
        lines: &[(MenuItemId, u32)],
    ) -> Result<Vec<LineOutcome>, MenuError> {
        let ops = lines
            .iter()
            .map(|(id, quantity)| (id.clone(), MenuAction::DecrementIfAvailable(*quantity)))
            .collect();
        self.run_batch(ops).await
    }

    /// Compensating increment of every `(item, quantity)` line in one store turn.
    #[instrument(skip(self))]
    pub async fn restock_all(
        &self,
        lines: &[(MenuItemId, u32)],
    ) -> Result<Vec<LineOutcome>, MenuError> {
        let ops = lines
            .iter()
            .map(|(id, quantity)| (id.clone(), MenuAction::Restock(*quantity)))
            .collect();
        self.run_batch(ops).await
    }

    async fn run_batch(
        &self,
        ops: Vec<(MenuItemId, MenuAction)>,
    ) -> Result<Vec<LineOutcome>, MenuError> {
        let outcomes = self.inner.batch(ops).await.map_err(Self::map_error)?;
        Ok(outcomes.into_iter().map(line_outcome).collect())
    }
}

fn line_outcome(outcome: BatchOutcome<MenuItem>) -> LineOutcome {
    match outcome.map_err(MenuClient::map_error)? {
        MenuActionResult::Decremented(count) | MenuActionResult::Restocked(count) => Ok(count),
        other => Err(unexpected(&other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{create_mock_client, expect_action, expect_batch, MockClient};
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_check_stock_returns_correct_level() {
        let (client, mut receiver) = create_mock_client::<MenuItem>(10);
        let menu = MenuClient::new(client);

        let check_task = tokio::spawn(async move { menu.check_stock(MenuItemId::from(1)).await });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, MenuItemId::from(1));
        assert_eq!(action, MenuAction::CheckStock);
        responder.send(Ok(MenuActionResult::CheckStock(42))).unwrap();

        assert_eq!(check_task.await.unwrap().unwrap(), 42);
    }

    #[tokio::test]
    async fn test_debit_all_sends_one_batch_and_recovers_line_errors() {
        let (client, mut receiver) = create_mock_client::<MenuItem>(10);
        let menu = MenuClient::new(client);

        let lines = vec![(MenuItemId::from(1), 2), (MenuItemId::from(2), 9)];
        let debit_task = tokio::spawn(async move { menu.debit_all(&lines).await });

        let (ops, responder) = expect_batch(&mut receiver)
            .await
            .expect("Expected Batch request");
        assert_eq!(
            ops,
            vec![
                (MenuItemId::from(1), MenuAction::DecrementIfAvailable(2)),
                (MenuItemId::from(2), MenuAction::DecrementIfAvailable(9)),
            ]
        );
        responder
            .send(Ok(vec![
                Ok(MenuActionResult::Decremented(3)),
                Err(FrameworkError::EntityError(Box::new(
                    MenuError::InsufficientStock {
                        requested: 9,
                        available: 4,
                    },
                ))),
            ]))
            .unwrap();

        let outcomes = debit_task.await.unwrap().unwrap();
        assert_eq!(outcomes[0], Ok(3));
        assert_eq!(
            outcomes[1],
            Err(MenuError::InsufficientStock {
                requested: 9,
                available: 4
            })
        );
    }

    #[tokio::test]
    async fn test_missing_item_maps_to_not_found() {
        let mut mock = MockClient::<MenuItem>::new();
        mock.expect_batch()
            .return_ok(vec![Err(FrameworkError::NotFound("item_9".to_string()))]);

        let menu = MenuClient::new(mock.client());
        let outcomes = menu
            .restock_all(&[(MenuItemId::from(9), 1)])
            .await
            .unwrap();
        assert_eq!(outcomes, vec![Err(MenuError::NotFound("item_9".to_string()))]);
        mock.verify();
    }

    #[tokio::test]
    async fn test_unreachable_store_is_infrastructure() {
        let mut mock = MockClient::<MenuItem>::new();
        mock.expect_list().return_err(FrameworkError::ActorClosed);

        let menu = MenuClient::new(mock.client());
        let err = menu.list_menu().await.unwrap_err();
        assert_eq!(err.class(), crate::error::ErrorClass::Infrastructure);
        mock.verify();
    }

    #[tokio::test]
    async fn test_list_menu_is_newest_first() {
        let mut older = MenuItem::new(MenuItemId::from(1), "Tea", dec!(10), "Drinks", 5);
        older.created_at -= chrono::Duration::minutes(5);
        let newer = MenuItem::new(MenuItemId::from(2), "Coffee", dec!(15), "Drinks", 5);

        let mut mock = MockClient::<MenuItem>::new();
        mock.expect_list().return_ok(vec![older, newer]);

        let menu = MenuClient::new(mock.client());
        let names: Vec<String> = menu
            .list_menu()
            .await
            .unwrap()
            .into_iter()
            .map(|item| item.name)
            .collect();
        assert_eq!(names, vec!["Coffee", "Tea"]);
        mock.verify();
    }
}
