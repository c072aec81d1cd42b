//! # Core Actor Framework
//!
//! This module defines the generic building blocks of the entity store.
//!
//! ## Key Types
//!
//! - [`ActorEntity`]: The trait every persistable record kind implements.
//! - [`IdSequence`]: The per-table source of surrogate identifiers.
//! - [`ResourceActor`]: The generic actor that owns one table.
//! - [`ResourceClient`]: The generic client for communicating with actors.
//! - [`FrameworkError`]: Common errors (e.g., ActorClosed, Duplicate).

use std::collections::{HashMap, HashSet};
use std::fmt::{Debug, Display};
use std::hash::Hash;

use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

use super::journal::Journal;

// =============================================================================
// 1. THE ABSTRACTION (Persistable records)
// =============================================================================

/// Raised when a table has handed out every identifier it can.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("identifier sequence exhausted after {last}")]
pub struct SequenceExhausted {
    pub last: u64,
}

/// Monotonic source of surrogate identifiers for a single table.
///
/// Values start at 1, so a store-assigned identifier is never zero. The
/// sequence only moves forward: a rolled back batch does not give its
/// identifiers back. `u64::MAX` is never handed out; it marks exhaustion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdSequence {
    next: u64,
}

impl IdSequence {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Resumes a sequence after the largest identifier already handed out.
    ///
    /// Fails when `last` leaves no identifier to hand out next.
    pub fn starting_after(last: u64) -> Result<Self, SequenceExhausted> {
        match last.checked_add(1) {
            Some(next) if next < u64::MAX => Ok(Self { next }),
            _ => Err(SequenceExhausted { last }),
        }
    }

    /// Hands out the next identifier.
    pub fn next_value(&mut self) -> Result<u64, SequenceExhausted> {
        let value = self.next;
        match value.checked_add(1) {
            Some(next) => {
                self.next = next;
                Ok(value)
            }
            None => Err(SequenceExhausted { last: value - 1 }),
        }
    }

    /// The identifier the next call to [`IdSequence::next_value`] will return.
    pub fn peek(&self) -> u64 {
        self.next
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait that any record kind must implement to be stored by a [`ResourceActor`].
///
/// # Architecture Note
/// By defining a contract that all our record kinds (Product, Customer) must
/// satisfy, the batch-create and lookup logic is written *once* and reused for
/// every table.
///
/// The associated types keep the tables apart at compile time: a `Customer`
/// table accepts `CustomerCreate` payloads only.
///
/// # Identity
/// A kind is either *naturally keyed* (the key is part of the payload, e.g. a
/// UPC) or *surrogate keyed* (the store draws the key from its
/// [`IdSequence`]). [`ActorEntity::assign_id`] is where a kind makes that
/// choice.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The key the table is indexed by (e.g., `Upc`, `CustomerId`).
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// The pre-creation record (DTO). It carries no surrogate identity.
    type Create: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this kind.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Picks the key for a record about to be created.
    fn assign_id(params: &Self::Create, sequence: &mut IdSequence) -> Result<Self::Id, SequenceExhausted>;

    /// Construct the full entity from its key and payload.
    /// This is called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// The key of a persisted entity.
    fn id(&self) -> &Self::Id;

    /// The raw surrogate value, for kinds that use one.
    ///
    /// Used to resume the [`IdSequence`] after a table is reloaded. Never zero
    /// for a record the store issued.
    fn surrogate(&self) -> Option<u64> {
        None
    }

    /// Called after the entity is built and before the batch is committed.
    /// Returning an error rolls back the whole batch.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }
}

// =============================================================================
// 2. THE GENERIC MESSAGES & ERRORS
// =============================================================================

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Batch is empty")]
    EmptyBatch,
    #[error("Duplicate key: {0}")]
    Duplicate(String),
    #[error("Persistence backend failed: {0}")]
    Persistence(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// The store is write-once: records enter in batches and are read back by key
/// or as a whole table. There are no update or delete messages.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    CreateAll {
        params: Vec<T::Create>,
        respond_to: Response<Vec<T>>,
    },
    Find {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

/// The generic actor that owns one table of entities.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the state (`store`,
/// `order`, `sequence`) and the receiver end of the channel. Messages are
/// processed *sequentially*, so a whole batch is applied before the next
/// request is looked at. That is what makes `create_all` atomic without any
/// `Mutex`.
///
/// `order` keeps keys in insertion order so that [`ResourceClient::list`]
/// returns records in the order they were created.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    order: Vec<T::Id>,
    sequence: IdSequence,
    journal: Option<Box<dyn Journal<T>>>,
}

/// Short type name for log fields (e.g. "Customer" instead of the full path).
fn entity_type<T>() -> &'static str {
    std::any::type_name::<T>()
        .split("::")
        .last()
        .unwrap_or("Unknown")
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates an in-memory `ResourceActor` and its associated `ResourceClient`.
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is
    ///   full, calls to the client wait until there is space.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            order: Vec::new(),
            sequence: IdSequence::new(),
            journal: None,
        };
        (actor, ResourceClient::new(sender))
    }

    /// Creates a journaled `ResourceActor`, reloading whatever the journal holds.
    ///
    /// The surrogate sequence resumes after the largest identifier found, so
    /// identifiers handed out before a restart are never reissued.
    pub async fn restore(
        buffer_size: usize,
        mut journal: Box<dyn Journal<T>>,
    ) -> Result<(Self, ResourceClient<T>), FrameworkError> {
        let entity_type = entity_type::<T>();
        let records = journal
            .load()
            .await
            .map_err(|e| FrameworkError::Persistence(e.to_string()))?;

        let (mut actor, client) = Self::new(buffer_size);
        let mut last: u64 = 0;
        for record in records {
            let id = record.id().clone();
            if actor.store.contains_key(&id) {
                warn!(entity_type, %id, "Duplicate key in journal");
                return Err(FrameworkError::Persistence(format!(
                    "journal holds duplicate key {id}"
                )));
            }
            if record.surrogate() == Some(0) {
                warn!(entity_type, %id, "Zero identifier in journal");
                return Err(FrameworkError::Persistence(format!(
                    "journal holds record {id} with identifier 0"
                )));
            }
            last = last.max(record.surrogate().unwrap_or(0));
            actor.order.push(id.clone());
            actor.store.insert(id, record);
        }
        actor.sequence = IdSequence::starting_after(last).map_err(|e| {
            warn!(entity_type, last, "No identifiers left after journal");
            FrameworkError::Persistence(e.to_string())
        })?;
        actor.journal = Some(journal);

        info!(entity_type, size = actor.store.len(), next_id = actor.sequence.peek(), "Restored");
        Ok((actor, client))
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    ///
    /// The `context` argument is injected into every `on_create` hook.
    pub async fn run(mut self, context: T::Context) {
        let entity_type = entity_type::<T>();
        info!(entity_type, size = self.store.len(), "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::CreateAll { params, respond_to } => {
                    let result = self.create_all(params, &context).await;
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Find { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Find");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    debug!(entity_type, size = self.store.len(), "List");
                    let _ = respond_to.send(Ok(self.snapshot()));
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    /// Builds, checks and commits one batch. Nothing is applied unless every
    /// record passes and the journal (if any) accepts the new table.
    async fn create_all(
        &mut self,
        params: Vec<T::Create>,
        context: &T::Context,
    ) -> Result<Vec<T>, FrameworkError> {
        let entity_type = entity_type::<T>();
        if params.is_empty() {
            warn!(entity_type, "Rejected empty batch");
            return Err(FrameworkError::EmptyBatch);
        }
        debug!(entity_type, batch = params.len(), "Create batch");

        let mut staged: Vec<T> = Vec::with_capacity(params.len());
        let mut seen: HashSet<T::Id> = HashSet::with_capacity(params.len());
        for payload in params {
            let id = T::assign_id(&payload, &mut self.sequence).map_err(|e| {
                warn!(entity_type, error = %e, "Out of identifiers, batch rolled back");
                FrameworkError::Persistence(e.to_string())
            })?;
            if self.store.contains_key(&id) || !seen.insert(id.clone()) {
                warn!(entity_type, %id, "Duplicate key, batch rolled back");
                return Err(FrameworkError::Duplicate(id.to_string()));
            }

            let mut item = T::from_create_params(id, payload).map_err(|e| {
                warn!(entity_type, error = %e, "Create failed, batch rolled back");
                FrameworkError::EntityError(Box::new(e))
            })?;
            if let Err(e) = item.on_create(context).await {
                warn!(entity_type, id = %item.id(), error = %e, "on_create failed, batch rolled back");
                return Err(FrameworkError::EntityError(Box::new(e)));
            }
            staged.push(item);
        }

        if let Some(journal) = self.journal.as_mut() {
            let table: Vec<T> = self
                .order
                .iter()
                .filter_map(|id| self.store.get(id))
                .chain(staged.iter())
                .cloned()
                .collect();
            if let Err(e) = journal.commit(&table).await {
                warn!(entity_type, error = %e, "Journal commit failed, batch rolled back");
                return Err(FrameworkError::Persistence(e.to_string()));
            }
        }

        for item in &staged {
            let id = item.id().clone();
            debug!(entity_type, %id, "Persisted");
            self.order.push(id.clone());
            self.store.insert(id, item.clone());
        }
        info!(entity_type, created = staged.len(), size = self.store.len(), "Created batch");
        Ok(staged)
    }

    fn snapshot(&self) -> Vec<T> {
        self.order
            .iter()
            .filter_map(|id| self.store.get(id))
            .cloned()
            .collect()
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

/// A type-safe client for interacting with a `ResourceActor`.
///
/// Holds only a sender, so cloning is cheap and clones can be shared across tasks.
#[derive(Clone)]
pub struct ResourceClient<T: ActorEntity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: ActorEntity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    /// Persists a batch atomically and returns the records with identity populated,
    /// in input order.
    pub async fn create_all(&self, params: Vec<T::Create>) -> Result<Vec<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::CreateAll { params, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    /// Persists a single record. Same semantics as a one-element batch.
    pub async fn create(&self, params: T::Create) -> Result<T::Id, FrameworkError> {
        let mut created = self.create_all(vec![params]).await?;
        created
            .pop()
            .map(|item| item.id().clone())
            .ok_or(FrameworkError::EmptyBatch)
    }

    /// Exact-match lookup by key. A miss is `Ok(None)`.
    pub async fn find(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Find { id, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    /// Every record in the table, in creation order.
    pub async fn list(&self) -> Result<Vec<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::List { respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================
