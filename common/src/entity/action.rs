use std::fmt;
use std::str::FromStr;

use crate::error::EntityError;

/// What the UpdateConnector should do with a record.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    #[default]
    Insert,
    Update,
    Delete,
}

impl Action {
    /// Name used in the `Action` attribute of a `Fields` element.
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Insert => "insert",
            Action::Update => "update",
            Action::Delete => "delete",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = EntityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "insert" => Ok(Action::Insert),
            "update" => Ok(Action::Update),
            "delete" => Ok(Action::Delete),
            _ => Err(EntityError::InvalidAction(s.to_string())),
        }
    }
}
