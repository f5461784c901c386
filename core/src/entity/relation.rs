//! # Relations
//!
//! Organisations and persons are both "relations" in AFAS: records that can
//! carry a visiting address (`KnBasicAddressAdr`) and a postal address
//! (`KnBasicAddressPad`).

use afas_common::{EntityError, EntityType};

use super::{Entity, Values, validate_objects};

/// Children every relation accepts.
pub const ADDRESS_TYPES: [EntityType; 2] =
    [EntityType::KnBasicAddressAdr, EntityType::KnBasicAddressPad];

pub trait Relation: Entity {
    /// Adds a visiting address.
    fn set_address(&mut self, values: Values) -> Result<&mut dyn Entity, EntityError> {
        self.add(EntityType::KnBasicAddressAdr, values)
    }

    /// Adds a postal address.
    fn set_postal_address(&mut self, values: Values) -> Result<&mut dyn Entity, EntityError> {
        self.add(EntityType::KnBasicAddressPad, values)
    }
}

/// Child check shared by relation implementations.
pub fn is_valid_child(kind: EntityType) -> bool {
    ADDRESS_TYPES.contains(&kind)
}

/// Validation shared by relation implementations.
pub fn validate<E: Entity + ?Sized>(entity: &mut E) -> Vec<String> {
    validate_objects(entity)
}
