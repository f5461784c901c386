//! Builds entity implementations from their connector type.

use afas_common::{Action, EntityError, EntityType};

use crate::entity::generic::GenericEntity;
use crate::entity::organisation::KnOrganisation;
use crate::entity::person::KnPerson;
use crate::entity::{Entity, Values};

pub fn create(kind: EntityType, action: Action) -> Box<dyn Entity> {
    match kind {
        EntityType::KnOrganisation => Box::new(KnOrganisation::new(action)),
        EntityType::KnPerson => Box::new(KnPerson::new(action)),
        other => Box::new(GenericEntity::new(other, action)),
    }
}

/// Creates an entity and fills it through `set_field`, so entity rules apply to `values`.
pub fn create_with(
    kind: EntityType,
    action: Action,
    values: Values,
) -> Result<Box<dyn Entity>, EntityError> {
    let mut entity = create(kind, action);
    for (key, value) in values {
        entity.set_field(&key, value)?;
    }
    Ok(entity)
}
