//! Core module containing fundamental traits and types for the toolkit

pub mod entity;
pub mod error;

pub use entity::Entity;
pub use error::{ConfigError, HttpError, MailError, StoaError, StoaResult};
