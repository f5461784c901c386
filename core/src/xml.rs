//! # Connector XML
//!
//! Renders an entity tree in the shape the UpdateConnector expects:
//! every entity becomes an `Element` holding its `Fields` (with the action
//! as attribute) and an `Objects` block in which children of the same type
//! share one wrapper element.

use std::fmt::Write;

use afas_common::EntityType;

use crate::entity::Entity;

const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";
const INDENT: &str = "  ";

pub fn render(entity: &dyn Entity, pretty: bool) -> String {
    let mut writer = XmlWriter::new(pretty);
    let root = entity.entity_type().as_str();

    writer.open(root, &[("xmlns:xsi", XSI_NAMESPACE)]);
    write_element(&mut writer, entity);
    writer.close(root);

    writer.finish()
}

fn write_element(writer: &mut XmlWriter, entity: &dyn Entity) {
    writer.open("Element", &[]);

    writer.open("Fields", &[("Action", entity.action().as_str())]);
    for (name, value) in entity.fields() {
        if value.is_null() {
            writer.empty(name, &[("xsi:nil", "true")]);
        } else {
            writer.leaf(name, &value.to_string());
        }
    }
    writer.close("Fields");

    let objects = entity.objects();
    if !objects.is_empty() {
        writer.open("Objects", &[]);
        for kind in child_types(objects) {
            writer.open(kind.as_str(), &[]);
            for child in objects.iter().filter(|child| child.entity_type() == kind) {
                write_element(writer, &**child);
            }
            writer.close(kind.as_str());
        }
        writer.close("Objects");
    }

    writer.close("Element");
}

/// Distinct child types in order of first appearance.
fn child_types(objects: &[Box<dyn Entity>]) -> Vec<EntityType> {
    let mut kinds: Vec<EntityType> = Vec::new();
    for child in objects {
        let kind = child.entity_type();
        if !kinds.contains(&kind) {
            kinds.push(kind);
        }
    }
    kinds
}

pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

struct XmlWriter {
    out: String,
    depth: usize,
    pretty: bool,
}

impl XmlWriter {
    fn new(pretty: bool) -> Self {
        Self {
            out: String::new(),
            depth: 0,
            pretty,
        }
    }

    fn open(&mut self, name: &str, attrs: &[(&str, &str)]) {
        self.start_line();
        self.tag(name, attrs);
        self.out.push('>');
        self.end_line();
        self.depth += 1;
    }

    fn close(&mut self, name: &str) {
        self.depth = self.depth.saturating_sub(1);
        self.start_line();
        let _ = write!(self.out, "</{name}>");
        self.end_line();
    }

    fn leaf(&mut self, name: &str, text: &str) {
        self.start_line();
        self.tag(name, &[]);
        let _ = write!(self.out, ">{}</{name}>", escape(text));
        self.end_line();
    }

    fn empty(&mut self, name: &str, attrs: &[(&str, &str)]) {
        self.start_line();
        self.tag(name, attrs);
        self.out.push_str("/>");
        self.end_line();
    }

    fn tag(&mut self, name: &str, attrs: &[(&str, &str)]) {
        let _ = write!(self.out, "<{name}");
        for (key, value) in attrs {
            let _ = write!(self.out, " {key}=\"{}\"", escape(value));
        }
    }

    fn start_line(&mut self) {
        if self.pretty {
            self.out.push_str(&INDENT.repeat(self.depth));
        }
    }

    fn end_line(&mut self) {
        if self.pretty {
            self.out.push('\n');
        }
    }

    fn finish(self) -> String {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use afas_common::{Action, FieldValue};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::entity::generic::GenericEntity;
    use crate::entity::organisation::KnOrganisation;
    use crate::entity::values;

    #[test]
    fn renders_compact_organisation() {
        let mut org = KnOrganisation::new(Action::Insert);
        org.set_field("Nm", FieldValue::from("Smith & Sons")).unwrap();
        org.add_contact(values([("ViKc", "PRS")])).unwrap();
        org.add_contact(values([("ViKc", "AFD")])).unwrap();
        org.add(EntityType::KnBankAccount, values([("AcId", "NL01")]))
            .unwrap();

        let expected = concat!(
            r#"<KnOrganisation xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#,
            r#"<Element><Fields Action="insert">"#,
            "<AutoNum>true</AutoNum><Nm>Smith &amp; Sons</Nm></Fields>",
            "<Objects>",
            r#"<KnContact><Element><Fields Action="insert"><ViKc>PRS</ViKc></Fields></Element>"#,
            r#"<Element><Fields Action="insert"><ViKc>AFD</ViKc></Fields></Element></KnContact>"#,
            r#"<KnBankAccount><Element><Fields Action="insert"><AcId>NL01</AcId></Fields>"#,
            "</Element></KnBankAccount>",
            "</Objects></Element></KnOrganisation>",
        );
        assert_eq!(render(&org, false), expected);
    }

    #[test]
    fn renders_null_as_nil_with_indentation() {
        let mut address = GenericEntity::new(EntityType::KnBasicAddressPad, Action::Update);
        address.set_field("HmAd", FieldValue::Null).unwrap();

        let expected = "\
<KnBasicAddressPad xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\">
  <Element>
    <Fields Action=\"update\">
      <HmAd xsi:nil=\"true\"/>
    </Fields>
  </Element>
</KnBasicAddressPad>
";
        assert_eq!(render(&address, true), expected);
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape(r#"<a href="x">'b'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&apos;b&apos;&lt;/a&gt;"
        );
    }
}
