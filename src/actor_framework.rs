//! Generic single-writer record store.
//!
//! Every entity collection lives inside one [`ResourceActor`] task. Callers talk to it
//! through a cloneable [`ResourceClient`]; each request is a message answered over a
//! oneshot channel, so mutations are applied one at a time and readers only ever see
//! whole records.

use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, instrument, warn};

/// Identity of a stored record. Assigned once, never reused.
pub type RecordId = i64;

// =============================================================================
// 1. ERRORS
// =============================================================================

#[derive(Debug, Clone, Error, PartialEq)]
pub enum FrameworkError {
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: RecordId },
    #[error("{kind} {field} already exists: {value}")]
    DuplicateKey {
        kind: &'static str,
        field: &'static str,
        value: String,
    },
    #[error("validation error: {0}")]
    Validation(String),
    /// An id was already present on insert. Points at a broken id sequence.
    #[error("{kind} id conflict: {id}")]
    Conflict { kind: &'static str, id: RecordId },
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped")]
    ActorDropped,
}

// =============================================================================
// 2. THE ABSTRACTION (Entity trait with hooks)
// =============================================================================

/// Trait that any domain entity must implement to be managed by [`ResourceActor`].
pub trait Entity: Clone + Send + Sync + Debug + 'static {
    type CreateParams: Send + Debug;
    type Patch: Send + Debug;
    type Action: Send + Debug;

    /// Entity name used in errors and spans.
    const KIND: &'static str;
    /// Field that must be unique across the store, if any.
    const UNIQUE_FIELD: Option<&'static str> = None;

    fn id(&self) -> RecordId;
    fn created_at(&self) -> DateTime<Utc>;
    fn set_updated_at(&mut self, at: DateTime<Utc>);

    /// Value of the unique field for a stored record.
    fn unique_key(&self) -> Option<&str> {
        None
    }

    /// Value of the unique field a create request would claim.
    fn create_key(_params: &Self::CreateParams) -> Option<&str> {
        None
    }

    // --- Lifecycle Hooks ---

    fn validate_create(_params: &Self::CreateParams) -> Result<(), FrameworkError> {
        Ok(())
    }

    /// Construct the full record once the id has been allocated.
    fn from_create_params(id: RecordId, params: Self::CreateParams, now: DateTime<Utc>) -> Self;

    fn on_update(&mut self, patch: Self::Patch) -> Result<(), FrameworkError>;

    fn handle_action(&mut self, action: Self::Action) -> Result<(), FrameworkError>;

    /// Refresh `updated_at`, never letting it fall behind `created_at`.
    fn touch(&mut self, now: DateTime<Utc>) {
        let at = now.max(self.created_at());
        self.set_updated_at(at);
    }
}

// =============================================================================
// 3. ID SEQUENCE
// =============================================================================

/// Monotonic id counter shared by everything that allocates ids for one entity type.
#[derive(Debug, Clone, Default)]
pub struct IdSequence {
    last: Arc<AtomicI64>,
}

impl IdSequence {
    pub fn starting_after(last: RecordId) -> Self {
        Self {
            last: Arc::new(AtomicI64::new(last)),
        }
    }

    /// Increment-then-read: two callers can never observe the same id.
    pub fn next(&self) -> RecordId {
        self.last.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Make sure future ids land above an id that was inserted from outside.
    pub fn observe(&self, id: RecordId) {
        self.last.fetch_max(id, Ordering::SeqCst);
    }

    pub fn current(&self) -> RecordId {
        self.last.load(Ordering::SeqCst)
    }
}

// =============================================================================
// 4. THE GENERIC MESSAGES
// =============================================================================

pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

#[derive(Debug)]
pub enum ResourceRequest<T: Entity> {
    Create {
        params: T::CreateParams,
        respond_to: Response<T>,
    },
    Insert {
        record: T,
        respond_to: Response<()>,
    },
    Get {
        id: RecordId,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    ExistsByUnique {
        value: String,
        respond_to: Response<bool>,
    },
    Update {
        id: RecordId,
        patch: T::Patch,
        respond_to: Response<T>,
    },
    Delete {
        id: RecordId,
        respond_to: Response<T>,
    },
    Action {
        id: RecordId,
        action: T::Action,
        respond_to: Response<T>,
    },
    #[cfg(test)]
    Len { respond_to: Response<usize> },
}

// =============================================================================
// 5. THE GENERIC ACTOR SERVER
// =============================================================================

pub struct ResourceActor<T: Entity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<RecordId, T>,
    ids: IdSequence,
}

impl<T: Entity> ResourceActor<T> {
    /// A `buffer_size` of 0 is raised to 1; tokio rejects empty mailboxes.
    pub fn new(buffer_size: usize, ids: IdSequence) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size.max(1));
        let actor = Self {
            receiver,
            store: HashMap::new(),
            ids,
        };
        (actor, ResourceClient::new(sender))
    }

    /// Pre-load records before the actor starts serving requests.
    pub fn seed(&mut self, records: impl IntoIterator<Item = T>) -> Result<usize, FrameworkError> {
        let mut count = 0;
        for record in records {
            self.insert(record)?;
            count += 1;
        }
        info!(kind = T::KIND, count, next_id = self.ids.current() + 1, "Seeded store");
        Ok(count)
    }

    #[instrument(name = "resource_actor", skip(self), fields(kind = T::KIND))]
    pub async fn run(mut self) {
        info!("Store starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    let _ = respond_to.send(self.create(params));
                }
                ResourceRequest::Insert { record, respond_to } => {
                    let _ = respond_to.send(self.insert(record));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let _ = respond_to.send(Ok(self.store.get(&id).cloned()));
                }
                ResourceRequest::List { respond_to } => {
                    let snapshot: Vec<T> = self.store.values().cloned().collect();
                    debug!(count = snapshot.len(), "Snapshot taken");
                    let _ = respond_to.send(Ok(snapshot));
                }
                ResourceRequest::ExistsByUnique { value, respond_to } => {
                    let _ = respond_to.send(Ok(self.exists_by_unique(&value)));
                }
                ResourceRequest::Update { id, patch, respond_to } => {
                    let _ = respond_to.send(self.mutate(id, |item| item.on_update(patch)));
                }
                ResourceRequest::Delete { id, respond_to } => {
                    let _ = respond_to.send(self.delete(id));
                }
                ResourceRequest::Action { id, action, respond_to } => {
                    let _ = respond_to.send(self.mutate(id, |item| item.handle_action(action)));
                }
                #[cfg(test)]
                ResourceRequest::Len { respond_to } => {
                    let _ = respond_to.send(Ok(self.store.len()));
                }
            }
        }
        info!("Store stopped");
    }

    fn exists_by_unique(&self, value: &str) -> bool {
        self.store.values().any(|item| item.unique_key() == Some(value))
    }

    fn ensure_unique(&self, value: Option<&str>) -> Result<(), FrameworkError> {
        match (T::UNIQUE_FIELD, value) {
            (Some(field), Some(value)) if self.exists_by_unique(value) => {
                warn!(field, value, "Unique key already taken");
                Err(FrameworkError::DuplicateKey {
                    kind: T::KIND,
                    field,
                    value: value.to_string(),
                })
            }
            _ => Ok(()),
        }
    }

    fn create(&mut self, params: T::CreateParams) -> Result<T, FrameworkError> {
        T::validate_create(&params)?;
        self.ensure_unique(T::create_key(&params))?;

        let id = self.ids.next();
        if self.store.contains_key(&id) {
            return Err(FrameworkError::Conflict { kind: T::KIND, id });
        }
        let item = T::from_create_params(id, params, Utc::now());
        self.store.insert(id, item.clone());
        info!(id, "Record created");
        Ok(item)
    }

    fn insert(&mut self, record: T) -> Result<(), FrameworkError> {
        let id = record.id();
        if self.store.contains_key(&id) {
            return Err(FrameworkError::Conflict { kind: T::KIND, id });
        }
        self.ensure_unique(record.unique_key())?;
        self.ids.observe(id);
        self.store.insert(id, record);
        Ok(())
    }

    /// Apply a mutation to a copy and swap it in only if the hook succeeds.
    fn mutate<F>(&mut self, id: RecordId, apply: F) -> Result<T, FrameworkError>
    where
        F: FnOnce(&mut T) -> Result<(), FrameworkError>,
    {
        let item = self
            .store
            .get_mut(&id)
            .ok_or(FrameworkError::NotFound { kind: T::KIND, id })?;
        let mut candidate = item.clone();
        apply(&mut candidate)?;
        candidate.touch(Utc::now());
        *item = candidate.clone();
        info!(id, "Record updated");
        Ok(candidate)
    }

    fn delete(&mut self, id: RecordId) -> Result<T, FrameworkError> {
        let removed = self
            .store
            .remove(&id)
            .ok_or(FrameworkError::NotFound { kind: T::KIND, id })?;
        info!(id, "Record deleted");
        Ok(removed)
    }
}

// =============================================================================
// 6. THE GENERIC CLIENT
// =============================================================================

pub struct ResourceClient<T: Entity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: Entity> Clone for ResourceClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: Entity> ResourceClient<T> {
    pub(crate) fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
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

    pub async fn create(&self, params: T::CreateParams) -> Result<T, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Create { params, respond_to })
            .await
    }

    pub async fn insert(&self, record: T) -> Result<(), FrameworkError> {
        self.request(|respond_to| ResourceRequest::Insert { record, respond_to })
            .await
    }

    pub async fn get(&self, id: RecordId) -> Result<Option<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Get { id, respond_to })
            .await
    }

    /// Point-in-time copy of every record, in no particular order.
    pub async fn list(&self) -> Result<Vec<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::List { respond_to })
            .await
    }

    pub async fn exists_by_unique(&self, value: impl Into<String>) -> Result<bool, FrameworkError> {
        let value = value.into();
        self.request(|respond_to| ResourceRequest::ExistsByUnique { value, respond_to })
            .await
    }

    pub async fn update(&self, id: RecordId, patch: T::Patch) -> Result<T, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Update { id, patch, respond_to })
            .await
    }

    pub async fn delete(&self, id: RecordId) -> Result<T, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Delete { id, respond_to })
            .await
    }

    pub async fn perform_action(&self, id: RecordId, action: T::Action) -> Result<T, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Action { id, action, respond_to })
            .await
    }

    #[cfg(test)]
    pub async fn len(&self) -> Result<usize, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Len { respond_to })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    // --- Domain Definition ---

    #[derive(Clone, Debug, PartialEq)]
    struct Note {
        id: RecordId,
        slug: String,
        body: String,
        pinned: bool,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    }

    #[derive(Debug)]
    struct NoteCreate {
        slug: String,
        body: String,
    }

    #[derive(Debug)]
    struct NotePatch {
        body: String,
    }

    #[derive(Debug)]
    enum NoteAction {
        Pin,
    }

    impl Entity for Note {
        type CreateParams = NoteCreate;
        type Patch = NotePatch;
        type Action = NoteAction;

        const KIND: &'static str = "Note";
        const UNIQUE_FIELD: Option<&'static str> = Some("slug");

        fn id(&self) -> RecordId {
            self.id
        }

        fn created_at(&self) -> DateTime<Utc> {
            self.created_at
        }

        fn set_updated_at(&mut self, at: DateTime<Utc>) {
            self.updated_at = at;
        }

        fn unique_key(&self) -> Option<&str> {
            Some(&self.slug)
        }

        fn create_key(params: &NoteCreate) -> Option<&str> {
            Some(&params.slug)
        }

        fn validate_create(params: &NoteCreate) -> Result<(), FrameworkError> {
            if params.slug.is_empty() {
                return Err(FrameworkError::Validation("slug is required".into()));
            }
            Ok(())
        }

        fn from_create_params(id: RecordId, params: NoteCreate, now: DateTime<Utc>) -> Self {
            Self {
                id,
                slug: params.slug,
                body: params.body,
                pinned: false,
                created_at: now,
                updated_at: now,
            }
        }

        fn on_update(&mut self, patch: NotePatch) -> Result<(), FrameworkError> {
            if patch.body.is_empty() {
                return Err(FrameworkError::Validation("body is required".into()));
            }
            self.body = patch.body;
            Ok(())
        }

        fn handle_action(&mut self, action: NoteAction) -> Result<(), FrameworkError> {
            match action {
                NoteAction::Pin => self.pinned = true,
            }
            Ok(())
        }
    }

    fn spawn_store(last_id: RecordId) -> ResourceClient<Note> {
        let (actor, client) = ResourceActor::<Note>::new(16, IdSequence::starting_after(last_id));
        tokio::spawn(actor.run());
        client
    }

    fn note(slug: &str) -> NoteCreate {
        NoteCreate {
            slug: slug.into(),
            body: "hello".into(),
        }
    }

    #[test]
    fn id_sequence_increments_then_reads() {
        let ids = IdSequence::starting_after(30);
        assert_eq!(ids.next(), 31);
        assert_eq!(ids.next(), 32);
        ids.observe(10);
        assert_eq!(ids.next(), 33);
        ids.observe(100);
        assert_eq!(ids.next(), 101);
    }

    #[tokio::test]
    async fn test_create_get_and_action() {
        let client = spawn_store(0);

        let created = client.create(note("first")).await.unwrap();
        assert_eq!(created.id, 1);
        assert_eq!(created.created_at, created.updated_at);

        let pinned = client.perform_action(created.id, NoteAction::Pin).await.unwrap();
        assert!(pinned.pinned);
        assert!(pinned.updated_at >= pinned.created_at);

        let stored = client.get(created.id).await.unwrap().unwrap();
        assert_eq!(stored, pinned);
        assert_eq!(client.get(99).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_duplicate_key_rejected_before_insert() {
        let client = spawn_store(0);
        client.create(note("same")).await.unwrap();

        let err = client.create(note("same")).await.unwrap_err();
        assert_eq!(
            err,
            FrameworkError::DuplicateKey {
                kind: "Note",
                field: "slug",
                value: "same".into()
            }
        );
        assert_eq!(client.len().await.unwrap(), 1);
        assert!(client.exists_by_unique("same").await.unwrap());
        assert!(!client.exists_by_unique("other").await.unwrap());

        // The rejected create did not burn an id.
        assert_eq!(client.create(note("next")).await.unwrap().id, 2);
    }

    #[tokio::test]
    async fn test_failed_update_leaves_record_untouched() {
        let client = spawn_store(0);
        let created = client.create(note("keep")).await.unwrap();

        let err = client
            .update(created.id, NotePatch { body: String::new() })
            .await
            .unwrap_err();
        assert!(matches!(err, FrameworkError::Validation(_)));
        assert_eq!(client.get(created.id).await.unwrap().unwrap(), created);
    }

    #[tokio::test]
    async fn test_missing_ids_report_not_found() {
        let client = spawn_store(0);
        client.create(note("only")).await.unwrap();

        let not_found = FrameworkError::NotFound { kind: "Note", id: 9_999_999 };
        assert_eq!(
            client.update(9_999_999, NotePatch { body: "x".into() }).await.unwrap_err(),
            not_found
        );
        assert_eq!(client.delete(9_999_999).await.unwrap_err(), not_found);
        assert_eq!(client.len().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_delete_never_resurrects_id() {
        let client = spawn_store(0);
        let first = client.create(note("a")).await.unwrap();
        let removed = client.delete(first.id).await.unwrap();
        assert_eq!(removed.id, first.id);
        assert_eq!(client.get(first.id).await.unwrap(), None);

        let second = client.create(note("b")).await.unwrap();
        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn test_insert_conflict_and_seeding_bumps_sequence() {
        let ids = IdSequence::starting_after(0);
        let (mut actor, client) = ResourceActor::<Note>::new(16, ids.clone());
        let now = Utc::now();
        let seeded = Note::from_create_params(7, note("seeded"), now - Duration::days(1));
        actor.seed(vec![seeded.clone()]).unwrap();
        tokio::spawn(actor.run());

        assert_eq!(ids.current(), 7);
        assert_eq!(
            client.insert(seeded).await.unwrap_err(),
            FrameworkError::Conflict { kind: "Note", id: 7 }
        );
        assert_eq!(client.create(note("fresh")).await.unwrap().id, 8);
    }

    #[tokio::test]
    async fn test_zero_buffer_is_raised_to_one() {
        let (actor, client) = ResourceActor::<Note>::new(0, IdSequence::default());
        tokio::spawn(actor.run());

        assert_eq!(client.create(note("tiny")).await.unwrap().id, 1);
        assert_eq!(client.len().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_touch_never_moves_before_creation() {
        let future = Utc::now() + Duration::hours(1);
        let mut n = Note::from_create_params(1, note("t"), future);
        n.touch(Utc::now());
        assert_eq!(n.updated_at, future);
    }

    #[tokio::test]
    async fn test_closed_actor_reports_error() {
        let (actor, client) = ResourceActor::<Note>::new(1, IdSequence::default());
        drop(actor);
        assert_eq!(client.get(1).await.unwrap_err(), FrameworkError::ActorClosed);
    }
}
