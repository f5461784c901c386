//! # Organisations
//!
//! `KnOrganisation` is the AFAS record for a company. Before it is sent,
//! [`KnOrganisation::validate`] decides how AFAS should find an existing
//! organisation (the `MatchOga` field) from whichever identifying field is
//! filled in, and checks that updates and deletes can be matched at all.

use std::fmt;

use afas_common::entity::check_name;
use afas_common::{Action, EntityError, EntityType, FieldValue};
use tracing::{debug, warn};

use super::relation::{self, Relation};
use super::{Entity, Record, Values};

pub const MATCH_OGA: &str = "MatchOga";
pub const AUTO_NUM: &str = "AutoNum";
/// Organisation number.
pub const BCCO: &str = "BcCo";
/// Chamber of commerce (KvK) number.
pub const CCNR: &str = "CcNr";
/// Fiscal number.
pub const FINR: &str = "FiNr";

/// Fields that identify an existing organisation, in order of preference.
pub const IDENTIFYING_FIELDS: [&str; 3] = [BCCO, CCNR, FINR];

/// Value of `MatchOga`: the field AFAS matches an existing organisation on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MatchMethod {
    Bcco = 0,
    Kvk = 1,
    Fisc = 2,
    Name = 3,
    Address = 4,
    PostalAddress = 5,
    /// Always create a new organisation.
    New = 6,
    /// Match through the entity this organisation is nested in.
    ParentEntity = 9,
}

impl MatchMethod {
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(MatchMethod::Bcco),
            1 => Some(MatchMethod::Kvk),
            2 => Some(MatchMethod::Fisc),
            3 => Some(MatchMethod::Name),
            4 => Some(MatchMethod::Address),
            5 => Some(MatchMethod::PostalAddress),
            6 => Some(MatchMethod::New),
            9 => Some(MatchMethod::ParentEntity),
            _ => None,
        }
    }
}

impl fmt::Display for MatchMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MatchMethod::Bcco => "organisation number",
            MatchMethod::Kvk => "chamber of commerce number",
            MatchMethod::Fisc => "fiscal number",
            MatchMethod::Name => "name",
            MatchMethod::Address => "address",
            MatchMethod::PostalAddress => "postal address",
            MatchMethod::New => "always new",
            MatchMethod::ParentEntity => "parent entity",
        };
        write!(f, "{} ({})", self.code(), name)
    }
}

impl TryFrom<&FieldValue> for MatchMethod {
    type Error = EntityError;

    fn try_from(value: &FieldValue) -> Result<Self, Self::Error> {
        value
            .as_int()
            .and_then(MatchMethod::from_code)
            .ok_or_else(|| EntityError::InvalidMatchMethod(value.to_string()))
    }
}

impl From<MatchMethod> for FieldValue {
    fn from(method: MatchMethod) -> Self {
        FieldValue::Int(i64::from(method.code()))
    }
}

/// An organisation record.
#[derive(Debug)]
pub struct KnOrganisation {
    record: Record,
}

impl KnOrganisation {
    /// New organisation, numbered automatically by AFAS unless validation decides otherwise.
    pub fn new(action: Action) -> Self {
        let mut record = Record::new(EntityType::KnOrganisation, action);
        record.set(AUTO_NUM, FieldValue::Bool(true));
        Self { record }
    }

    pub fn add_contact(&mut self, values: Values) -> Result<&mut dyn Entity, EntityError> {
        self.add(EntityType::KnContact, values)
    }

    /// The stored match method, if any.
    pub fn match_method(&self) -> Option<MatchMethod> {
        self.get_field(MATCH_OGA)
            .and_then(|value| MatchMethod::try_from(value).ok())
    }

    pub fn set_match_method(&mut self, method: MatchMethod) {
        self.record.set(MATCH_OGA, method.into());
    }

    /// Picks the match method from the first identifying field that is filled in.
    fn resolve_match_method(&mut self) -> MatchMethod {
        if self.action() == Action::Insert && !self.field_exists(MATCH_OGA) {
            MatchMethod::New
        } else if self.field_truthy(BCCO) {
            MatchMethod::Bcco
        } else if self.field_truthy(CCNR) {
            self.disable_auto_numbering();
            MatchMethod::Kvk
        } else if self.field_truthy(FINR) {
            self.disable_auto_numbering();
            MatchMethod::Fisc
        } else {
            MatchMethod::ParentEntity
        }
    }

    fn disable_auto_numbering(&mut self) {
        if self.field_exists(AUTO_NUM) {
            self.record.set(AUTO_NUM, FieldValue::Bool(false));
        }
    }
}

impl Entity for KnOrganisation {
    fn record(&self) -> &Record {
        &self.record
    }

    fn record_mut(&mut self) -> &mut Record {
        &mut self.record
    }

    fn is_valid_child(&self, kind: EntityType) -> bool {
        match kind {
            EntityType::KnBankAccount | EntityType::KnContact => true,
            _ => relation::is_valid_child(kind),
        }
    }

    /// Rejects `MatchOga` values outside the known codes.
    fn set_field(&mut self, key: &str, value: FieldValue) -> Result<(), EntityError> {
        if key == MATCH_OGA {
            match MatchMethod::try_from(&value) {
                Ok(method) => {
                    self.set_match_method(method);
                    return Ok(());
                }
                Err(err) => {
                    warn!(value = %value, "refused match method");
                    return Err(err);
                }
            }
        }

        check_name(key)?;
        self.record.set(key, value);
        Ok(())
    }

    fn validate(&mut self) -> Vec<String> {
        let mut errors = relation::validate(self);

        match self.action() {
            Action::Insert => {
                if !self.has_object_type(EntityType::KnBasicAddressAdr) {
                    errors.push(format!(
                        "An object of type {} does not contain a {} object.",
                        EntityType::KnOrganisation,
                        EntityType::KnBasicAddressAdr
                    ));
                }

                // AFAS assigns the organisation number on insert.
                if self.field_truthy(BCCO) {
                    self.remove_field(BCCO);
                    debug!("removed {BCCO} from organisation insert");
                }
            }
            Action::Update | Action::Delete => {
                self.remove_field(AUTO_NUM);

                let identified = self.match_method() == Some(MatchMethod::ParentEntity)
                    || IDENTIFYING_FIELDS.iter().any(|field| self.field_truthy(field));
                if !identified {
                    errors.push(format!(
                        "When updating or deleting an organisation, \
                         one of the following fields is required: {}.",
                        IDENTIFYING_FIELDS.join(", ")
                    ));
                }
            }
        }

        let method = self.resolve_match_method();
        debug!(match_method = %method, action = %self.action(), "resolved match method");
        self.set_match_method(method);

        errors
    }
}

impl Relation for KnOrganisation {}
