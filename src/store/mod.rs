//! REST-backed entity state containers
//!
//! One [`EntityModule`] per resource: an in-memory list plus a selected
//! pointer, kept consistent with a remote collection through five actions
//! and a small mutation set.

pub mod module;
pub mod state;

pub use module::{EntityModule, EntityModuleOptions, StoreMessages};
pub use state::{EntityState, Mutation, Select};
