use afas_common::{Action, EntityType};
use afas_common::config::Config;
use afas_core::{Entity, registry};

use crate::aprint;
use crate::terminal::print;

pub fn types(cfg: &Config) {
    print::header("entity types", cfg.quiet);

    for (idx, kind) in EntityType::ALL.into_iter().enumerate() {
        let entity = registry::create(kind, Action::Insert);
        let children: Vec<&str> = EntityType::ALL
            .into_iter()
            .filter(|child| entity.is_valid_child(*child))
            .map(|child| child.as_str())
            .collect();

        print::entity_head(idx + 1, kind, entity.action());
        if children.is_empty() {
            print::aligned_line("Children", "none");
        } else {
            print::aligned_line("Children", children.join(", "));
        }
        if idx + 1 != EntityType::ALL.len() {
            aprint!();
        }
    }
}
