use crate::entity::Action;

pub struct Config {
    /// Action applied to entities whose document does not name one.
    pub default_action: Action,
    /// Verbosity reduction.
    ///
    /// `0` prints headers and summaries, `1` only results, `2` only errors.
    pub quiet: u8,
    /// Indent generated XML.
    pub pretty: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_action: Action::Insert,
            quiet: 0,
            pretty: true,
        }
    }
}
