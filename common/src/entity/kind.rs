use std::fmt;
use std::str::FromStr;

use crate::error::EntityError;

/// UpdateConnector objects known to this library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityType {
    /// Organisation (company) record.
    KnOrganisation,
    /// Person record.
    KnPerson,
    /// Contact linking a person to an organisation.
    KnContact,
    /// Bank account of a relation.
    KnBankAccount,
    /// Visiting address.
    KnBasicAddressAdr,
    /// Postal address.
    KnBasicAddressPad,
}

impl EntityType {
    pub const ALL: [EntityType; 6] = [
        EntityType::KnOrganisation,
        EntityType::KnPerson,
        EntityType::KnContact,
        EntityType::KnBankAccount,
        EntityType::KnBasicAddressAdr,
        EntityType::KnBasicAddressPad,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityType::KnOrganisation => "KnOrganisation",
            EntityType::KnPerson => "KnPerson",
            EntityType::KnContact => "KnContact",
            EntityType::KnBankAccount => "KnBankAccount",
            EntityType::KnBasicAddressAdr => "KnBasicAddressAdr",
            EntityType::KnBasicAddressPad => "KnBasicAddressPad",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityType {
    type Err = EntityError;

    /// Parses the exact connector name, e.g. `KnOrganisation`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EntityType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| EntityError::UnknownEntityType(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for kind in EntityType::ALL {
            assert_eq!(kind.as_str().parse::<EntityType>(), Ok(kind));
        }
    }

    #[test]
    fn names_are_case_sensitive() {
        assert_eq!(
            "knorganisation".parse::<EntityType>(),
            Err(EntityError::UnknownEntityType("knorganisation".to_string()))
        );
    }
}
