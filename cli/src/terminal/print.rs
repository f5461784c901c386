use std::fmt::Display;

use afas_common::{Action, EntityType};
use colored::*;
use tracing::info;
use unicode_width::UnicodeWidthStr;

use crate::terminal::colors;

pub const TOTAL_WIDTH: usize = 64;
pub const PRINT_TARGET: &str = "afas::print";

/// Width of the key column used by [`aligned_line`].
const KEY_WIDTH: usize = 10;

#[macro_export]
macro_rules! aprint {
    () => {
        $crate::terminal::print::print("");
    };
    ($msg:expr) => {
        $crate::terminal::print::print($msg);
    };
}

pub fn print(msg: &str) {
    info!(target: "afas::print", raw_msg = msg);
}

pub fn header(msg: &str, q_level: u8) {
    if q_level > 0 {
        return;
    }

    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = UnicodeWidthStr::width(formatted.as_str());

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: ColoredString = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right)
    )
    .bright_black();

    print(&format!("{}", line));
}

pub fn fat_separator() {
    let sep: ColoredString = "═".repeat(TOTAL_WIDTH).bright_black();
    print(&format!("{}", sep));
}

pub fn aligned_line<V: Display>(key: &str, value: V) {
    let dots: String = ".".repeat((KEY_WIDTH + 1).saturating_sub(key.len()));
    print(&format!(
        "{} {}{}{} {}",
        ">".color(colors::SEPARATOR),
        key.color(colors::PRIMARY),
        dots.color(colors::SEPARATOR),
        ":".color(colors::SEPARATOR),
        value.to_string().color(colors::TEXT_DEFAULT)
    ));
}

/// Numbered line naming an entity type, with the action it would be sent with.
pub fn entity_head(idx: usize, kind: EntityType, action: Action) {
    print(&format!(
        "{} {} {}",
        format!("[{}]", idx.to_string().color(colors::ACCENT)).color(colors::SEPARATOR),
        kind.as_str().color(colors::PRIMARY).bold(),
        format!("({action})").color(colors::SEPARATOR)
    ));
}

pub fn error_line(idx: usize, msg: &str) {
    let idx_str: String = format!("[{}]", idx.to_string().color(colors::ERROR));
    print(&format!("{} {}", idx_str, msg.color(colors::TEXT_DEFAULT)));
}

pub fn verdict(valid: bool) {
    let output: ColoredString = if valid {
        "Entity is ready to be sent".color(colors::SUCCESS).bold()
    } else {
        "Entity has validation errors".color(colors::ERROR).bold()
    };
    print(&format!("{}", output));
}
