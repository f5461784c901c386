//! # Entity Vocabulary
//!
//! The building blocks every update-connector object is made of.
//!
//! * [`action::Action`]: what AFAS should do with a record.
//! * [`field::FieldValue`]: a scalar stored under a field name.
//! * [`kind::EntityType`]: the connector object names this library knows.

pub mod action;
pub mod field;
pub mod kind;

pub use action::Action;
pub use field::{FieldValue, check_name};
pub use kind::EntityType;
