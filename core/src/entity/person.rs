use afas_common::{Action, EntityType};

use super::relation::{self, Relation};
use super::{Entity, Record};

/// A person record.
#[derive(Debug)]
pub struct KnPerson {
    record: Record,
}

impl KnPerson {
    pub fn new(action: Action) -> Self {
        Self {
            record: Record::new(EntityType::KnPerson, action),
        }
    }
}

impl Entity for KnPerson {
    fn record(&self) -> &Record {
        &self.record
    }

    fn record_mut(&mut self) -> &mut Record {
        &mut self.record
    }

    fn is_valid_child(&self, kind: EntityType) -> bool {
        relation::is_valid_child(kind)
    }

    fn validate(&mut self) -> Vec<String> {
        relation::validate(self)
    }
}

impl Relation for KnPerson {}
