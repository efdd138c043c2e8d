//! Per-module state and its mutation set
//!
//! Mutations are synchronous, infallible edits applied by
//! [`EntityState::apply`]. The list-targeting mutations are guarded by id
//! lookup: when the target id is absent they are a no-op instead of
//! mutating an unrelated element.

use crate::core::Entity;

/// Selection payload for [`Mutation::SetOne`]
///
/// Selecting is either a lookup by id against the current list, or an
/// explicit entity set verbatim. The two cases are separate variants so the
/// caller decides which one it means.
#[derive(Debug, Clone)]
pub enum Select<T> {
    /// Resolve `selected` by id lookup in the list (`None` when absent)
    ById(String),
    /// Set `selected` to this entity directly
    Entity(T),
}

/// The mutation set of an entity module
///
/// One variant per state edit; applying a mutation never fails.
#[derive(Debug, Clone)]
pub enum Mutation<T> {
    /// Replace the list wholesale
    SetList(Vec<T>),
    /// Append one entity
    AddToList(T),
    /// Remove the element with a matching id; no-op when absent
    RemoveFromList(T),
    /// Replace the element with a matching id; no-op when absent
    UpdateInList(T),
    /// Set or resolve the selected entity
    SetOne(Select<T>),
    /// Set the error message (empty string means "no error")
    SetError(String),
    /// Set the loading flag
    SetIsLoading(bool),
}

/// In-memory state of one entity module
///
/// `selected` is set only through [`Mutation::SetOne`] and is never cleared
/// automatically; deleting the selected entity from the list leaves a
/// dangling selection behind, which is the caller's concern.
#[derive(Debug, Clone)]
pub struct EntityState<T> {
    /// Entities in server/append order, unique by id
    pub list: Vec<T>,
    /// At most one selected entity
    pub selected: Option<T>,
    /// True only while an action's remote call is outstanding
    pub is_loading: bool,
    /// Human-readable error message, empty when there is no error
    pub error: String,
}

impl<T: Entity> EntityState<T> {
    pub fn new() -> Self {
        Self {
            list: Vec::new(),
            selected: None,
            is_loading: false,
            error: String::new(),
        }
    }

    /// Apply one mutation to the state
    pub fn apply(&mut self, mutation: Mutation<T>) {
        match mutation {
            Mutation::SetList(list) => {
                self.list = list;
            }
            Mutation::AddToList(entity) => {
                self.list.push(entity);
            }
            Mutation::RemoveFromList(entity) => {
                if let Some(index) = self.position_of(&entity) {
                    self.list.remove(index);
                }
            }
            Mutation::UpdateInList(entity) => {
                if let Some(index) = self.position_of(&entity) {
                    self.list[index] = entity;
                }
            }
            Mutation::SetOne(select) => match select {
                Select::ById(id) => {
                    self.selected = self
                        .list
                        .iter()
                        .find(|e| e.id() == Some(id.as_str()))
                        .cloned();
                }
                Select::Entity(entity) => {
                    self.selected = Some(entity);
                }
            },
            Mutation::SetError(error) => {
                self.error = error;
            }
            Mutation::SetIsLoading(is_loading) => {
                self.is_loading = is_loading;
            }
        }
    }

    fn position_of(&self, entity: &T) -> Option<usize> {
        self.list.iter().position(|e| e.same_record(entity))
    }
}

impl<T: Entity> Default for EntityState<T> {
    fn default() -> Self {
        Self::new()
    }
}
