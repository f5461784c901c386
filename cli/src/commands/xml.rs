use std::path::Path;

use afas_common::config::Config;
use afas_core::{Entity, xml};

use crate::commands::{load_entity, validate};

/// Validates the document, then writes its XML to stdout.
///
/// The XML is written even when validation fails, so it can be inspected.
pub fn xml(path: &Path, cfg: &Config) -> anyhow::Result<usize> {
    let mut entity = load_entity(path, cfg)?;
    let errors = entity.validate();

    validate::report(&*entity, &errors, cfg);
    print!("{}", xml::render(&*entity, cfg.pretty));
    if !cfg.pretty {
        println!();
    }
    Ok(errors.len())
}
