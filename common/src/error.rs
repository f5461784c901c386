use thiserror::Error;

use crate::entity::EntityType;

#[derive(Debug, Error, PartialEq)]
pub enum EntityError {
    #[error("Invalid value for MatchOga: {0}")]
    InvalidMatchMethod(String),

    #[error("An object of type {child} is not a valid child of {parent}")]
    InvalidChild { parent: EntityType, child: EntityType },

    #[error("Unknown entity type: {0}")]
    UnknownEntityType(String),

    #[error("Invalid action: {0}")]
    InvalidAction(String),

    #[error("Invalid value for field {field}: {reason}")]
    InvalidFieldValue { field: String, reason: String },
}
