use afas_common::{Action, EntityType};

use super::{Entity, Record};

/// An object with no rules beyond which children it accepts.
#[derive(Debug)]
pub struct GenericEntity {
    record: Record,
}

impl GenericEntity {
    pub fn new(kind: EntityType, action: Action) -> Self {
        Self {
            record: Record::new(kind, action),
        }
    }
}

/// Children accepted by objects without an implementation of their own.
pub fn valid_children(kind: EntityType) -> &'static [EntityType] {
    match kind {
        EntityType::KnContact => &[
            EntityType::KnPerson,
            EntityType::KnBasicAddressAdr,
            EntityType::KnBasicAddressPad,
        ],
        _ => &[],
    }
}

impl Entity for GenericEntity {
    fn record(&self) -> &Record {
        &self.record
    }

    fn record_mut(&mut self) -> &mut Record {
        &mut self.record
    }

    fn is_valid_child(&self, kind: EntityType) -> bool {
        valid_children(self.entity_type()).contains(&kind)
    }
}
