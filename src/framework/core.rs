//! # Core Record Store
//!
//! This module defines the generic building blocks every collection is built from.
//!
//! ## Key Types
//!
//! - [`ActorEntity`]: The trait that all record types must implement.
//! - [`ResourceActor`]: The generic actor that owns one collection.
//! - [`ResourceClient`]: The generic client for communicating with actors.
//! - [`FrameworkError`]: Common errors (e.g., ActorClosed, NotFound).

use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

// =============================================================================
// 1. THE ABSTRACTION
// =============================================================================

/// Trait that any record type must implement to be managed by [`ResourceActor`].
///
/// # Architecture Note
/// Menu items, orders and admin accounts all satisfy the same contract, so the
/// store loop in [`ResourceActor::run`] is written once and reused for each
/// collection. Associated types keep the payloads apart: an `Order` collection
/// only accepts `OrderCreate`, never a `MenuItemCreate`.
///
/// Records that must not change after creation use
/// [`std::convert::Infallible`] as their `Update` type.
pub trait ActorEntity: Clone + Debug + Send + Sync + 'static {
    /// Store-assigned identifier. Built from the store's internal counter.
    type Id: Eq + Hash + Ord + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data required to create a new record.
    type Create: Send + Sync + Debug;

    /// The data required to update an existing record.
    type Update: Send + Sync + Debug;

    /// Record-specific operations (e.g., `DecrementIfAvailable`).
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// The error type for this record.
    ///
    /// One enum per collection. Clients recover it from
    /// [`FrameworkError::EntityError`] by downcasting.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full record from the assigned id and the payload.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Apply an update. The record is left untouched when this returns an error.
    fn on_update(&mut self, update: Self::Update) -> Result<(), Self::Error>;

    /// Called immediately before the record is removed.
    fn on_delete(&self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Handle a record-specific action.
    fn handle_action(&mut self, action: Self::Action) -> Result<Self::ActionResult, Self::Error>;
}

// =============================================================================
// 2. THE GENERIC MESSAGES & ERRORS
// =============================================================================

/// Errors that can occur within the record store itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// True when the store could not be reached at all.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, FrameworkError::ActorClosed | FrameworkError::ActorDropped)
    }
}

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Outcome of one line of a [`ResourceRequest::Batch`].
pub type BatchOutcome<T> = Result<<T as ActorEntity>::ActionResult, FrameworkError>;

/// Predicate used by filtered scans.
pub struct Filter<T>(Box<dyn Fn(&T) -> bool + Send + Sync>);

impl<T> Filter<T> {
    pub fn new(predicate: impl Fn(&T) -> bool + Send + Sync + 'static) -> Self {
        Self(Box::new(predicate))
    }

    /// Matches every record.
    pub fn all() -> Self {
        Self::new(|_| true)
    }

    pub fn matches(&self, item: &T) -> bool {
        (self.0)(item)
    }
}

impl<T> Debug for Filter<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Filter")
    }
}

/// Request sent to a [`ResourceActor`].
///
/// The variants map to the operations the record store exposes: insert,
/// point lookup, filtered scan, single-record update, delete, a single-record
/// action, and a multi-record batch of actions.
///
/// `Batch` is the conditional bulk write. Its lines are applied in order
/// within one actor turn and the reply carries one outcome per line.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        filter: Filter<T>,
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
    Batch {
        ops: Vec<(T::Id, T::Action)>,
        respond_to: Response<Vec<BatchOutcome<T>>>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

/// The generic actor that owns one collection of records.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the state (`store`)
/// and the receiver end of the channel. Requests are handled sequentially, so
/// the store needs no `Mutex`: exclusive ownership inside the task is the only
/// concurrency boundary, and every request (a whole batch included) is applied
/// without interleaving.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    next_id: u32,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new actor and the client used to talk to it.
    ///
    /// `buffer_size` is the capacity of the request channel. When it is full,
    /// client calls wait for space.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            next_id: 1,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    pub async fn run(mut self) {
        // Short type name, e.g. "MenuItem" rather than the full module path
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = T::Id::from(self.next_id);
                    self.next_id += 1;

                    match T::from_create_params(id.clone(), params) {
                        Ok(item) => {
                            self.store.insert(id.clone(), item);
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(id));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { filter, respond_to } => {
                    let items: Vec<T> = self
                        .store
                        .values()
                        .filter(|item| filter.matches(item))
                        .cloned()
                        .collect();
                    debug!(entity_type, matched = items.len(), size = self.store.len(), "List");
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Update { id, update, respond_to } => {
                    debug!(entity_type, %id, ?update, "Update");
                    if let Some(item) = self.store.get_mut(&id) {
                        if let Err(e) = item.on_update(update) {
                            warn!(entity_type, %id, error = %e, "Update failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                        info!(entity_type, %id, "Updated");
                        let _ = respond_to.send(Ok(item.clone()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    if let Some(item) = self.store.get(&id) {
                        if let Err(e) = item.on_delete() {
                            warn!(entity_type, %id, error = %e, "on_delete failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                        self.store.remove(&id);
                        info!(entity_type, %id, size = self.store.len(), "Deleted");
                        let _ = respond_to.send(Ok(()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Action { id, action, respond_to } => {
                    debug!(entity_type, %id, ?action, "Action");
                    let result = self.apply(&id, action);
                    match &result {
                        Ok(_) => info!(entity_type, %id, "Action ok"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Batch { ops, respond_to } => {
                    debug!(entity_type, ?ops, "Batch");
                    let lines = ops.len();
                    let outcomes: Vec<BatchOutcome<T>> = ops
                        .into_iter()
                        .map(|(id, action)| self.apply(&id, action))
                        .collect();
                    let applied = outcomes.iter().filter(|o| o.is_ok()).count();
                    if applied == lines {
                        info!(entity_type, lines, applied, "Batch ok");
                    } else {
                        warn!(entity_type, lines, applied, "Batch partially applied");
                    }
                    let _ = respond_to.send(Ok(outcomes));
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    fn apply(&mut self, id: &T::Id, action: T::Action) -> Result<T::ActionResult, FrameworkError> {
        match self.store.get_mut(id) {
            Some(item) => item
                .handle_action(action)
                .map_err(|e| FrameworkError::EntityError(Box::new(e))),
            None => Err(FrameworkError::NotFound(id.to_string())),
        }
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

/// A type-safe client for interacting with a `ResourceActor`.
///
/// Holds only the channel sender, so it is cheap to clone and share.
pub struct ResourceClient<T: ActorEntity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: ActorEntity> Clone for ResourceClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: ActorEntity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(Response<R>) -> ResourceRequest<T>,
    ) -> Result<R, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn create(&self, params: T::Create) -> Result<T::Id, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Create { params, respond_to })
            .await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Get { id, respond_to })
            .await
    }

    pub async fn list(&self, filter: Filter<T>) -> Result<Vec<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::List { filter, respond_to })
            .await
    }

    pub async fn update(&self, id: T::Id, update: T::Update) -> Result<T, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Update {
            id,
            update,
            respond_to,
        })
        .await
    }

    pub async fn delete(&self, id: T::Id) -> Result<(), FrameworkError> {
        self.request(|respond_to| ResourceRequest::Delete { id, respond_to })
            .await
    }

    pub async fn perform_action(
        &self,
        id: T::Id,
        action: T::Action,
    ) -> Result<T::ActionResult, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Action {
            id,
            action,
            respond_to,
        })
        .await
    }

    /// Applies every `(id, action)` line in one store turn.
    ///
    /// The outer `Result` fails only when the store is unreachable. Each line
    /// carries its own outcome, in request order.
    pub async fn batch(
        &self,
        ops: Vec<(T::Id, T::Action)>,
    ) -> Result<Vec<BatchOutcome<T>>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Batch { ops, respond_to })
            .await
    }
}
