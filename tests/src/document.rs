use afas_common::{Action, FieldValue};
use afas_core::{document, xml};
use pretty_assertions::assert_eq;

const UPDATE_BY_KVK: &str = r#"{
    "type": "KnOrganisation",
    "action": "update",
    "fields": { "CcNr": "30123456", "Nm": "Acme" },
    "objects": [
        { "type": "KnBankAccount", "fields": { "AcId": "NL91ABNA0417164300", "Iban": true } }
    ]
}"#;

/// A document loads, validates and renders the connector payload end to end.
#[test]
fn update_document_renders_connector_xml() -> anyhow::Result<()> {
    let doc = document::parse(UPDATE_BY_KVK)?;
    let mut org = document::load(&doc, Action::Insert)?;

    let errors = org.validate();
    assert!(errors.is_empty(), "Unexpected errors: {errors:?}");
    assert_eq!(org.get_field("MatchOga"), Some(&FieldValue::Int(1)));

    let expected = "\
<KnOrganisation xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\">
  <Element>
    <Fields Action=\"update\">
      <CcNr>30123456</CcNr>
      <Nm>Acme</Nm>
      <MatchOga>1</MatchOga>
    </Fields>
    <Objects>
      <KnBankAccount>
        <Element>
          <Fields Action=\"update\">
            <AcId>NL91ABNA0417164300</AcId>
            <Iban>true</Iban>
          </Fields>
        </Element>
      </KnBankAccount>
    </Objects>
  </Element>
</KnOrganisation>
";
    assert_eq!(xml::render(&*org, true), expected);
    Ok(())
}

/// An insert document without an address still renders, but reports the gap.
#[test]
fn insert_document_without_address() -> anyhow::Result<()> {
    let doc = document::parse(r#"{ "type": "KnOrganisation", "fields": { "BcCo": "1000" } }"#)?;
    let mut org = document::load(&doc, Action::Insert)?;

    let errors = org.validate();

    assert_eq!(
        errors,
        vec!["An object of type KnOrganisation does not contain a KnBasicAddressAdr object."]
    );
    assert!(!org.field_exists("BcCo"));
    assert_eq!(
        xml::render(&*org, false),
        concat!(
            r#"<KnOrganisation xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#,
            r#"<Element><Fields Action="insert">"#,
            "<AutoNum>true</AutoNum><MatchOga>6</MatchOga></Fields></Element>",
            "</KnOrganisation>"
        )
    );
    Ok(())
}
