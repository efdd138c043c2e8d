//! # Stoa
//!
//! A toolkit of glue modules for REST-backed web applications.
//!
//! ## Features
//!
//! - **Entity modules**: per-resource state containers (list + selected +
//!   status) kept consistent with a remote collection through five actions
//!   (load-all, load-single, create, update, delete)
//! - **Explicit collaborators**: the HTTP client is injected, never ambient,
//!   so modules are testable with a scripted stub
//! - **Guarded mutations**: list edits are id-matched and no-op when the
//!   target is absent
//! - **Schema-driven forms**: ordered field schemas with localized rule
//!   messages and an error bag per validation run
//! - **Templated mailing**: SMTP transport plus tera-rendered HTML bodies
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use stoa::prelude::*;
//!
//! #[derive(Clone, Serialize, Deserialize)]
//! struct Category {
//!     id: Option<String>,
//!     name: String,
//! }
//!
//! impl Entity for Category {
//!     fn id(&self) -> Option<&str> {
//!         self.id.as_deref()
//!     }
//! }
//!
//! let client = Arc::new(RestClient::new("https://api.example.com"));
//! let categories: EntityModule<Category, _> = EntityModule::new(
//!     EntityModuleOptions {
//!         namespace: "categories".to_string(),
//!         api_url: "categories".to_string(),
//!     },
//!     client,
//! );
//!
//! categories.load_all().await;
//! let state = categories.state().await;
//! ```

pub mod config;
pub mod core;
pub mod form;
pub mod http;
pub mod mail;
pub mod store;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        entity::Entity,
        error::{ConfigError, HttpError, MailError, StoaError, StoaResult},
    };

    // === HTTP collaborator ===
    pub use crate::http::{HttpClient, RestClient};

    // === Entity modules ===
    pub use crate::store::{
        EntityModule, EntityModuleOptions, EntityState, Mutation, Select, StoreMessages,
    };

    // === Forms ===
    pub use crate::form::{ErrorBag, FieldSchema, FormSchema, Locale, Rule};

    // === Mail ===
    pub use crate::mail::Mailer;

    // === Config ===
    pub use crate::config::{AppConfig, MailerConfig, SenderConfig, SmtpConfig};

    // === External dependencies ===
    pub use async_trait::async_trait;
    pub use serde::{Deserialize, Serialize};
    pub use serde_json::{Value, json};
    pub use std::sync::Arc;
}
