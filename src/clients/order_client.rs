//! # Order Client
//!
//! High-level API for the order actor: recording placed orders, the admin
//! status transition, and the scans used by the student view and analytics.
use crate::clients::actor_client::{recover_entity_error, ActorClient};
use crate::framework::{Filter, FrameworkError, ResourceClient};
use crate::model::{Order, OrderCreate, OrderId};
use crate::order_actor::{OrderAction, OrderError, OrderStatus, Transition};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::cmp::Reverse;
use tracing::{debug, info, instrument};

/// Client for interacting with the order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        recover_entity_error(e, |e| match e {
            FrameworkError::NotFound(id) => OrderError::NotFound(id),
            other => OrderError::ActorCommunicationError(other.to_string()),
        })
    }
}

fn newest_first(mut orders: Vec<Order>) -> Vec<Order> {
    orders.sort_by_key(|order| Reverse((order.created_at, order.id.clone())));
    orders
}

impl OrderClient {
    /// Inserts an already-validated order. Only the placement engine calls this.
    #[instrument(
        skip(self, params),
        fields(student = %params.student_name, lines = params.items.len())
    )]
    pub async fn create_order(&self, params: OrderCreate) -> Result<OrderId, OrderError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn get_order(&self, id: OrderId) -> Result<Order, OrderError> {
        self.get(id.clone())
            .await?
            .ok_or_else(|| OrderError::NotFound(id.to_string()))
    }

    /// All orders, newest first.
    #[instrument(skip(self))]
    pub async fn list_orders(&self) -> Result<Vec<Order>, OrderError> {
        let orders = self
            .inner
            .list(Filter::all())
            .await
            .map_err(Self::map_error)?;
        Ok(newest_first(orders))
    }

    /// Orders whose student name and roll number both match exactly, newest first.
    #[instrument(skip(self))]
    pub async fn orders_for_student(
        &self,
        student_name: &str,
        roll_number: &str,
    ) -> Result<Vec<Order>, OrderError> {
        if student_name.trim().is_empty() || roll_number.trim().is_empty() {
            return Err(OrderError::ValidationError(
                "studentName and rollNumber are required".to_string(),
            ));
        }
        let (name, roll) = (student_name.to_string(), roll_number.to_string());
        let orders = self
            .inner
            .list(Filter::new(move |order: &Order| {
                order.student_name == name && order.roll_number == roll
            }))
            .await
            .map_err(Self::map_error)?;
        debug!(count = orders.len(), "Matched orders");
        Ok(newest_first(orders))
    }

    /// Orders with `start <= createdAt < end`.
    #[instrument(skip(self))]
    pub async fn orders_created_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Order>, OrderError> {
        self.inner
            .list(Filter::new(move |order: &Order| {
                order.created_at >= start && order.created_at < end
            }))
            .await
            .map_err(Self::map_error)
    }

    /// Applies an admin status change through the transition table.
    #[instrument(skip(self))]
    pub async fn update_status(
        &self,
        id: OrderId,
        status: OrderStatus,
    ) -> Result<Transition, OrderError> {
        let transition = self
            .inner
            .perform_action(id.clone(), OrderAction::Transition(status))
            .await
            .map_err(Self::map_error)?;
        if transition.changed() {
            info!(order_id = %id, %status, "Order status changed");
        }
        Ok(transition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{create_mock_client, expect_action, MockClient};

    #[tokio::test]
    async fn test_update_status_sends_transition() {
        let (client, mut receiver) = create_mock_client::<Order>(10);
        let orders = OrderClient::new(client);

        let task = tokio::spawn(async move {
            orders
                .update_status(OrderId::from(3), OrderStatus::Completed)
                .await
        });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, OrderId::from(3));
        assert_eq!(action, OrderAction::Transition(OrderStatus::Completed));
        responder
            .send(Ok(Transition::Unchanged(OrderStatus::Completed)))
            .unwrap();

        assert!(!task.await.unwrap().unwrap().changed());
    }

    #[tokio::test]
    async fn test_illegal_transition_is_recovered() {
        let (client, mut receiver) = create_mock_client::<Order>(10);
        let orders = OrderClient::new(client);

        let task = tokio::spawn(async move {
            orders
                .update_status(OrderId::from(3), OrderStatus::Placed)
                .await
        });

        let (_, _, responder) = expect_action(&mut receiver).await.unwrap();
        responder
            .send(Err(FrameworkError::EntityError(Box::new(
                OrderError::IllegalTransition {
                    from: OrderStatus::Completed,
                    to: OrderStatus::Placed,
                },
            ))))
            .unwrap();

        let err = task.await.unwrap().unwrap_err();
        assert_eq!(err.class(), crate::error::ErrorClass::Validation);
    }

    #[tokio::test]
    async fn test_get_order_missing_is_not_found() {
        let mut mock = MockClient::<Order>::new();
        mock.expect_get().return_ok(None);

        let orders = OrderClient::new(mock.client());
        let err = orders.get_order(OrderId::from(8)).await.unwrap_err();
        assert_eq!(err, OrderError::NotFound("order_8".to_string()));
        mock.verify();
    }

    #[tokio::test]
    async fn test_orders_for_student_requires_both_fields() {
        let mock = MockClient::<Order>::new();
        let orders = OrderClient::new(mock.client());
        let err = orders.orders_for_student("Asha", " ").await.unwrap_err();
        assert!(matches!(err, OrderError::ValidationError(_)));
        mock.verify();
    }
}
