use afas_common::{Action, EntityError, EntityType, FieldValue};
use afas_core::entity::relation::Relation;
use afas_core::entity::values;
use afas_core::{Entity, KnOrganisation, MatchMethod, registry};

/// A complete insert passes and is marked to always create a new organisation.
#[test]
fn insert_with_address_and_contact() {
    let mut org = KnOrganisation::new(Action::Insert);
    org.set_field("Nm", "Acme B.V.".into()).unwrap();
    org.set_address(values([("Ad", "Kerkstraat"), ("HmNr", "1"), ("Rs", "Utrecht")]))
        .unwrap();
    let contact = org.add_contact(values([("ViKc", "PRS")])).unwrap();
    contact.add(EntityType::KnPerson, values([("FiNm", "Jan")])).unwrap();

    let errors = org.validate();

    assert!(errors.is_empty(), "Unexpected errors: {errors:?}");
    assert_eq!(org.match_method(), Some(MatchMethod::New));
    assert_eq!(org.get_field("MatchOga"), Some(&FieldValue::Int(6)));
}

/// Update and delete both need something to find the organisation with.
#[test]
fn update_and_delete_require_identification() {
    for action in [Action::Update, Action::Delete] {
        let mut org = registry::create(EntityType::KnOrganisation, action);
        org.set_field("Nm", "Acme".into()).unwrap();

        let errors = org.validate();

        assert_eq!(errors.len(), 1, "{action}: {errors:?}");
        assert!(errors[0].ends_with("one of the following fields is required: BcCo, CcNr, FiNr."));
        assert!(!org.field_exists("AutoNum"));
        assert_eq!(org.get_field("MatchOga"), Some(&FieldValue::Int(9)));
    }
}

/// Validation is repeatable: a second pass settles on the same match method.
#[test]
fn validation_is_stable() {
    let mut org = KnOrganisation::new(Action::Update);
    org.set_field("CcNr", "30123456".into()).unwrap();

    assert!(org.validate().is_empty());
    assert!(org.validate().is_empty());
    assert_eq!(org.match_method(), Some(MatchMethod::Kvk));
}

/// Invalid match codes never reach the record, whichever way they come in.
#[test]
fn invalid_match_code_is_refused_everywhere() {
    let mut org = KnOrganisation::new(Action::Insert);
    assert_eq!(
        org.set_field("MatchOga", FieldValue::Int(7)),
        Err(EntityError::InvalidMatchMethod("7".to_string()))
    );
    assert!(!org.field_exists("MatchOga"));

    let built = registry::create_with(
        EntityType::KnOrganisation,
        Action::Update,
        values([("MatchOga", "seven")]),
    );
    assert_eq!(
        built.unwrap_err().to_string(),
        "Invalid value for MatchOga: seven"
    );
}

/// Persons are not direct children of an organisation; they belong in a contact.
#[test]
fn person_must_be_wrapped_in_contact() {
    let mut org = KnOrganisation::new(Action::Insert);
    assert!(matches!(
        org.add(EntityType::KnPerson, Vec::new()),
        Err(EntityError::InvalidChild { .. })
    ));

    let contact = org.add_contact(Vec::new()).unwrap();
    assert!(contact.add(EntityType::KnPerson, Vec::new()).is_ok());
    assert!(org.has_object_type(EntityType::KnContact));
    assert!(!org.has_object_type(EntityType::KnPerson));
}
