use std::path::Path;

use afas_common::config::Config;
use afas_core::{Entity, MatchMethod};
use tracing::info_span;

use crate::aprint;
use crate::commands::load_entity;
use crate::terminal::print;

/// Validates the document and returns the number of errors found.
pub fn validate(path: &Path, cfg: &Config) -> anyhow::Result<usize> {
    let mut entity = load_entity(path, cfg)?;

    let span = info_span!("validate", file = %path.display());
    let errors: Vec<String> = span.in_scope(|| entity.validate());

    report(&*entity, &errors, cfg);
    Ok(errors.len())
}

pub fn report(entity: &dyn Entity, errors: &[String], cfg: &Config) {
    if cfg.quiet < 2 {
        print::header("validation", cfg.quiet);
        print::aligned_line("Type", entity.entity_type());
        print::aligned_line("Action", entity.action());
        if let Some(method) = entity
            .get_field("MatchOga")
            .and_then(|value| MatchMethod::try_from(value).ok())
        {
            print::aligned_line("MatchOga", method);
        }
        print::aligned_line("Objects", entity.objects().len());
    }

    if !errors.is_empty() {
        aprint!();
        for (idx, error) in errors.iter().enumerate() {
            print::error_line(idx + 1, error);
        }
    }

    if cfg.quiet == 0 {
        print::fat_separator();
        print::verdict(errors.is_empty());
    }
}
