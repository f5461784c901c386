//! # Entity Documents
//!
//! A JSON description of an entity tree, as accepted by the CLI:
//!
//! ```json
//! {
//!   "type": "KnOrganisation",
//!   "action": "update",
//!   "fields": { "BcCo": "1000", "Nm": "Acme" },
//!   "objects": [
//!     { "type": "KnBasicAddressAdr", "fields": { "Ad": "Kerkstraat" } }
//!   ]
//! }
//! ```
//!
//! Children without an `action` take their parent's.

use afas_common::{Action, EntityError, EntityType, FieldValue};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::entity::{Entity, Values};
use crate::registry;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityDocument {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(default)]
    pub fields: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub objects: Vec<EntityDocument>,
}

impl EntityDocument {
    fn entity_type(&self) -> Result<EntityType, EntityError> {
        self.kind.parse()
    }

    fn action(&self) -> Result<Option<Action>, EntityError> {
        self.action.as_deref().map(str::parse::<Action>).transpose()
    }

    fn values(&self) -> Result<Values, EntityError> {
        self.fields
            .iter()
            .map(|(key, value)| {
                FieldValue::from_json(key, value).map(|value| (key.clone(), value))
            })
            .collect()
    }
}

pub fn parse(input: &str) -> Result<EntityDocument, serde_json::Error> {
    serde_json::from_str(input)
}

/// Builds the entity tree described by `doc`.
///
/// Children are attached through [`Entity::add`], so a child the parent does
/// not accept fails the whole load.
pub fn load(doc: &EntityDocument, default_action: Action) -> Result<Box<dyn Entity>, EntityError> {
    let action = doc.action()?.unwrap_or(default_action);
    let mut entity = registry::create_with(doc.entity_type()?, action, doc.values()?)?;

    for child in &doc.objects {
        attach(&mut *entity, child)?;
    }
    Ok(entity)
}

fn attach(parent: &mut dyn Entity, doc: &EntityDocument) -> Result<(), EntityError> {
    let child = parent.add(doc.entity_type()?, doc.values()?)?;
    if let Some(action) = doc.action()? {
        child.set_action(action);
    }

    for grandchild in &doc.objects {
        attach(child, grandchild)?;
    }
    Ok(())
}
