//! # Entities
//!
//! Every UpdateConnector object is an [`Entity`]: a typed [`Record`] holding
//! an action, named fields and nested child objects. Implementations only
//! provide access to their record and override the hooks whose behaviour
//! differs from the base (`set_field`, `is_valid_child`, `validate`).
//!
//! * [`generic::GenericEntity`]: objects without rules of their own.
//! * [`relation::Relation`]: behaviour shared by organisations and persons.
//! * [`organisation::KnOrganisation`]: organisation records and their match method.
//! * [`person::KnPerson`]: person records.

use std::fmt;

use afas_common::entity::check_name;
use afas_common::{Action, EntityError, EntityType, FieldValue};
use tracing::debug;

use crate::registry;

pub mod generic;
pub mod organisation;
pub mod person;
pub mod relation;

/// Field name/value pairs used to fill a new entity.
pub type Values = Vec<(String, FieldValue)>;

/// Builds [`Values`] from anything convertible.
pub fn values<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Values
where
    K: Into<String>,
    V: Into<FieldValue>,
{
    pairs
        .into_iter()
        .map(|(key, value)| (key.into(), value.into()))
        .collect()
}

/// Storage behind every entity.
#[derive(Debug)]
pub struct Record {
    kind: EntityType,
    action: Action,
    fields: Vec<(String, FieldValue)>,
    objects: Vec<Box<dyn Entity>>,
}

impl Record {
    pub fn new(kind: EntityType, action: Action) -> Self {
        Self {
            kind,
            action,
            fields: Vec::new(),
            objects: Vec::new(),
        }
    }

    pub fn kind(&self) -> EntityType {
        self.kind
    }

    pub fn action(&self) -> Action {
        self.action
    }

    /// Stores a field, keeping the position of an existing key.
    pub fn set(&mut self, key: &str, value: FieldValue) {
        match self.fields.iter_mut().find(|(name, _)| name == key) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((key.to_string(), value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value)
    }

    pub fn remove(&mut self, key: &str) -> Option<FieldValue> {
        let idx = self.fields.iter().position(|(name, _)| name == key)?;
        Some(self.fields.remove(idx).1)
    }

    pub fn fields(&self) -> &[(String, FieldValue)] {
        &self.fields
    }

    pub fn objects(&self) -> &[Box<dyn Entity>] {
        &self.objects
    }

    pub fn objects_mut(&mut self) -> &mut [Box<dyn Entity>] {
        &mut self.objects
    }
}

/// An UpdateConnector object.
pub trait Entity: fmt::Debug {
    fn record(&self) -> &Record;
    fn record_mut(&mut self) -> &mut Record;

    fn entity_type(&self) -> EntityType {
        self.record().kind()
    }

    fn action(&self) -> Action {
        self.record().action()
    }

    /// Changes the action of this entity and of all its children.
    fn set_action(&mut self, action: Action) {
        let record = self.record_mut();
        record.action = action;
        for child in record.objects_mut() {
            child.set_action(action);
        }
    }

    /// Stores a field. Names that cannot be written as XML elements are refused.
    fn set_field(&mut self, key: &str, value: FieldValue) -> Result<(), EntityError> {
        check_name(key)?;
        self.record_mut().set(key, value);
        Ok(())
    }

    fn get_field(&self, key: &str) -> Option<&FieldValue> {
        self.record().get(key)
    }

    /// Whether the field is present and filled in.
    fn field_truthy(&self, key: &str) -> bool {
        self.get_field(key).is_some_and(FieldValue::is_truthy)
    }

    /// Whether the field is present, even when empty.
    fn field_exists(&self, key: &str) -> bool {
        self.get_field(key).is_some()
    }

    fn remove_field(&mut self, key: &str) -> Option<FieldValue> {
        self.record_mut().remove(key)
    }

    fn fields(&self) -> &[(String, FieldValue)] {
        self.record().fields()
    }

    fn objects(&self) -> &[Box<dyn Entity>] {
        self.record().objects()
    }

    fn has_object_type(&self, kind: EntityType) -> bool {
        self.objects().iter().any(|child| child.entity_type() == kind)
    }

    /// Whether an object of the given type may be nested in this entity.
    fn is_valid_child(&self, _kind: EntityType) -> bool {
        false
    }

    /// Creates a child of the given type with this entity's action and fills it.
    fn add(&mut self, kind: EntityType, values: Values) -> Result<&mut dyn Entity, EntityError> {
        if !self.is_valid_child(kind) {
            return Err(EntityError::InvalidChild {
                parent: self.entity_type(),
                child: kind,
            });
        }

        let child = registry::create_with(kind, self.action(), values)?;
        debug!(parent = %self.entity_type(), child = %kind, "added object");

        let objects = &mut self.record_mut().objects;
        objects.push(child);
        let idx = objects.len() - 1;
        Ok(&mut *objects[idx])
    }

    /// Prepares the entity for submission and reports what is wrong with it.
    ///
    /// Validation may adjust fields. Problems are returned as messages, never raised.
    fn validate(&mut self) -> Vec<String> {
        validate_objects(self)
    }
}

/// Base validation: the errors of all children, depth first.
pub fn validate_objects<E: Entity + ?Sized>(entity: &mut E) -> Vec<String> {
    entity
        .record_mut()
        .objects_mut()
        .iter_mut()
        .flat_map(|child| child.validate())
        .collect()
}
