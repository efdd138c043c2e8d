//! The entity-module factory
//!
//! [`EntityModule`] binds one REST resource to an in-memory
//! [`EntityState`]: five actions (load_all, load_single, create, update,
//! delete), each performing exactly one remote call and committing state
//! through the mutation set.
//!
//! Actions never return errors. Every action follows the same template:
//! clear the error, raise the loading flag, perform the one remote call,
//! commit the success or failure mutations, and lower the loading flag as
//! the unconditional final step. Callers observe failure exclusively
//! through `error` and `is_loading`.

use crate::core::{Entity, HttpError};
use crate::http::HttpClient;
use crate::store::state::{EntityState, Mutation};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Options for constructing an [`EntityModule`]
#[derive(Debug, Clone)]
pub struct EntityModuleOptions {
    /// Key under which the host registers this module in its store
    pub namespace: String,
    /// Resource path relative to the client's base URL (e.g. `"categories"`)
    pub api_url: String,
}

/// Localized user-facing messages surfaced through the `error` state
///
/// `internal_error` doubles as the uniform fallback: any failure an action
/// does not map specifically (400 on create, 404 on the others) surfaces
/// this message instead of being swallowed.
#[derive(Debug, Clone)]
pub struct StoreMessages {
    /// Shown when loading the collection yields a 404
    pub not_found_all: String,
    /// Shown when loading a single entity yields a 404; `{id}` is substituted
    pub not_found_single: String,
    /// Generic fallback for every unmapped failure
    pub internal_error: String,
}

impl Default for StoreMessages {
    fn default() -> Self {
        Self {
            not_found_all: "Es konnten keine Einträge gefunden werden.".to_string(),
            not_found_single: "Es konnte keine Instanz mit der ID {id} gefunden werden."
                .to_string(),
            internal_error: "Interner Fehler, bitte kontaktieren Sie den Administrator"
                .to_string(),
        }
    }
}

impl StoreMessages {
    fn single_not_found(&self, id: &str) -> String {
        self.not_found_single.replace("{id}", id)
    }
}

/// A self-contained state container bound to one REST resource
///
/// The HTTP client is an explicit constructor input, not ambient state; the
/// same client is typically shared across every module of an application.
/// The module performs no registration itself, the host merges it into its
/// namespaced store registry under [`EntityModule::namespace`].
///
/// Cloning the module clones handles to the same shared state.
pub struct EntityModule<T: Entity, C: HttpClient> {
    namespace: String,
    api_url: String,
    client: Arc<C>,
    messages: StoreMessages,
    state: Arc<RwLock<EntityState<T>>>,
}

impl<T: Entity, C: HttpClient> Clone for EntityModule<T, C> {
    fn clone(&self) -> Self {
        Self {
            namespace: self.namespace.clone(),
            api_url: self.api_url.clone(),
            client: Arc::clone(&self.client),
            messages: self.messages.clone(),
            state: Arc::clone(&self.state),
        }
    }
}

impl<T: Entity, C: HttpClient> EntityModule<T, C> {
    /// Create a module for one resource, with default (German) messages
    pub fn new(options: EntityModuleOptions, client: Arc<C>) -> Self {
        Self::with_messages(options, client, StoreMessages::default())
    }

    /// Create a module with custom localized messages
    pub fn with_messages(
        options: EntityModuleOptions,
        client: Arc<C>,
        messages: StoreMessages,
    ) -> Self {
        Self {
            namespace: options.namespace,
            api_url: options.api_url,
            client,
            messages,
            state: Arc::new(RwLock::new(EntityState::new())),
        }
    }

    /// The registration key for the host's store registry
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// The resource path this module is bound to
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Commit one mutation to the module state
    ///
    /// This is the module's entire mutation surface; actions and hosts go
    /// through the same method. The write lock is held only for the
    /// synchronous edit, never across a remote call, so concurrent actions
    /// interleave with last-write-wins semantics.
    pub async fn commit(&self, mutation: Mutation<T>) {
        self.state.write().await.apply(mutation);
    }

    /// Snapshot the current state
    ///
    /// Readers may observe intermediate states while actions are in flight;
    /// the state is not versioned or snapshotted beyond this clone.
    pub async fn state(&self) -> EntityState<T> {
        self.state.read().await.clone()
    }

    /// Load the whole collection: `GET /{api_url}`
    ///
    /// On success the list is replaced wholesale. On any failure the list is
    /// replaced with an empty one; a 404 additionally surfaces the
    /// collection not-found message, everything else the fallback.
    pub async fn load_all(&self) {
        self.begin().await;
        tracing::debug!(namespace = %self.namespace, "loading all entities");

        let mut list = Vec::new();
        match self.client.get(&self.api_url).await {
            Ok(data) => match serde_json::from_value::<Vec<T>>(data) {
                Ok(entities) => list = entities,
                Err(err) => {
                    tracing::warn!(namespace = %self.namespace, error = %err, "malformed collection payload");
                    self.fail().await;
                }
            },
            Err(err) if err.status() == Some(404) => {
                self.commit(Mutation::SetError(self.messages.not_found_all.clone()))
                    .await;
            }
            Err(err) => self.fail_on(err, "load_all").await,
        }

        self.commit(Mutation::SetList(list)).await;
        self.finish().await;
    }

    /// Load one entity: `GET /{api_url}/{id}`
    ///
    /// On success the fetched entity replaces its list element (a no-op when
    /// it is not in the list yet). On a 404 the id-specific message is
    /// surfaced; the list is never touched on failure.
    pub async fn load_single(&self, id: &str) {
        self.begin().await;
        tracing::debug!(namespace = %self.namespace, id, "loading single entity");

        match self.client.get(&format!("{}/{}", self.api_url, id)).await {
            Ok(data) => match serde_json::from_value::<T>(data) {
                Ok(entity) => self.commit(Mutation::UpdateInList(entity)).await,
                Err(err) => {
                    tracing::warn!(namespace = %self.namespace, id, error = %err, "malformed entity payload");
                    self.fail().await;
                }
            },
            Err(err) if err.status() == Some(404) => {
                self.commit(Mutation::SetError(self.messages.single_not_found(id)))
                    .await;
            }
            Err(err) => self.fail_on(err, "load_single").await,
        }

        self.finish().await;
    }

    /// Create an entity: `POST /{api_url}`
    ///
    /// The server-returned entity is appended, never the input payload:
    /// server-assigned fields (the id above all) are authoritative. A 400
    /// surfaces the server-provided validation message.
    pub async fn create(&self, payload: T) {
        self.begin().await;
        tracing::debug!(namespace = %self.namespace, "creating entity");

        let Ok(body) = serde_json::to_value(&payload) else {
            self.fail().await;
            self.finish().await;
            return;
        };

        match self.client.post(&self.api_url, &body).await {
            Ok(data) => match serde_json::from_value::<T>(data) {
                Ok(entity) => self.commit(Mutation::AddToList(entity)).await,
                Err(err) => {
                    tracing::warn!(namespace = %self.namespace, error = %err, "malformed created entity");
                    self.fail().await;
                }
            },
            Err(err) if err.status() == Some(400) => {
                self.commit(Mutation::SetError(self.server_message(&err)))
                    .await;
            }
            Err(err) => self.fail_on(err, "create").await,
        }

        self.finish().await;
    }

    /// Update an entity: `PUT /{api_url}/{payload.id}`
    ///
    /// On success the input payload replaces its list element (the server
    /// response is not consulted). A payload without an id performs no
    /// remote call and surfaces the fallback message.
    pub async fn update(&self, payload: T) {
        self.begin().await;

        let Some(id) = payload.id().map(str::to_owned) else {
            tracing::warn!(namespace = %self.namespace, "update payload has no id");
            self.fail().await;
            self.finish().await;
            return;
        };
        tracing::debug!(namespace = %self.namespace, id = %id, "updating entity");

        let Ok(body) = serde_json::to_value(&payload) else {
            self.fail().await;
            self.finish().await;
            return;
        };

        match self
            .client
            .put(&format!("{}/{}", self.api_url, id), &body)
            .await
        {
            Ok(_) => self.commit(Mutation::UpdateInList(payload)).await,
            Err(err) if err.status() == Some(404) => {
                self.commit(Mutation::SetError(self.server_message(&err)))
                    .await;
            }
            Err(err) => self.fail_on(err, "update").await,
        }

        self.finish().await;
    }

    /// Delete an entity: `DELETE /{api_url}/{payload.id}`
    ///
    /// On success the payload's list element is removed (a no-op when its id
    /// is not present). A payload without an id performs no remote call and
    /// surfaces the fallback message.
    pub async fn delete(&self, payload: T) {
        self.begin().await;

        let Some(id) = payload.id().map(str::to_owned) else {
            tracing::warn!(namespace = %self.namespace, "delete payload has no id");
            self.fail().await;
            self.finish().await;
            return;
        };
        tracing::debug!(namespace = %self.namespace, id = %id, "deleting entity");

        match self
            .client
            .delete(&format!("{}/{}", self.api_url, id))
            .await
        {
            Ok(_) => self.commit(Mutation::RemoveFromList(payload)).await,
            Err(err) if err.status() == Some(404) => {
                self.commit(Mutation::SetError(self.server_message(&err)))
                    .await;
            }
            Err(err) => self.fail_on(err, "delete").await,
        }

        self.finish().await;
    }

    // === Action template helpers ===

    async fn begin(&self) {
        self.commit(Mutation::SetError(String::new())).await;
        self.commit(Mutation::SetIsLoading(true)).await;
    }

    async fn finish(&self) {
        self.commit(Mutation::SetIsLoading(false)).await;
    }

    /// Surface the uniform fallback message
    async fn fail(&self) {
        self.commit(Mutation::SetError(self.messages.internal_error.clone()))
            .await;
    }

    /// Uniform policy for failures an action does not map specifically:
    /// surface the fallback message instead of swallowing the failure.
    async fn fail_on(&self, err: HttpError, action: &str) {
        tracing::warn!(namespace = %self.namespace, action, error = %err, "remote call failed");
        self.fail().await;
    }

    /// The server-provided error body, or the fallback when the body is empty
    fn server_message(&self, err: &HttpError) -> String {
        err.body_text()
            .unwrap_or_else(|| self.messages.internal_error.clone())
    }
}
