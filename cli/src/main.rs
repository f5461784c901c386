mod commands;
mod terminal;

use commands::{CommandLine, Commands, types, validate, xml};
use terminal::logging;

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();
    logging::init_logging(commands.verbose);

    let cfg = commands.config();

    let errors = match &commands.command {
        Commands::Validate { file } => validate::validate(file, &cfg)?,
        Commands::Xml { file, .. } => xml::xml(file, &cfg)?,
        Commands::Types => {
            types::types(&cfg);
            0
        }
    };

    if errors > 0 {
        anyhow::bail!("entity has {errors} validation error(s)");
    }
    Ok(())
}
