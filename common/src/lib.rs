//! # AFAS Common
//!
//! Value types shared by every layer of the workspace.
//!
//! * **[`entity`]**: actions, field values and the catalog of known entity types.
//! * **[`error`]**: the error type raised by entity operations.
//! * **[`config`]**: runtime options handed from the CLI to the commands.

pub mod config;
pub mod entity;
pub mod error;

pub use entity::{Action, EntityType, FieldValue};
pub use error::EntityError;
