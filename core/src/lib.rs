//! # AFAS Core
//!
//! Entity graph for the AFAS UpdateConnector.
//!
//! * **[`entity`]**: the [`entity::Entity`] trait, record storage and the concrete entities.
//! * **[`registry`]**: builds the right entity implementation for an [`afas_common::EntityType`].
//! * **[`document`]**: loads an entity tree from its JSON description.
//! * **[`xml`]**: renders an entity tree as connector XML.

pub mod document;
pub mod entity;
pub mod registry;
pub mod xml;

pub use entity::Entity;
pub use entity::organisation::{KnOrganisation, MatchMethod};
