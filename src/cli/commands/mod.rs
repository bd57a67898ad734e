pub mod category;
pub mod form;
pub mod ledger;
pub mod system;

use crate::cli::registry::CommandEntry;

pub(crate) fn all_definitions() -> Vec<CommandEntry> {
    let mut commands = Vec::new();
    commands.extend(form::definitions());
    commands.extend(ledger::definitions());
    commands.extend(category::definitions());
    commands.extend(system::definitions());
    commands
}

/// Joins the remaining arguments so unquoted multi-word values still work.
pub(crate) fn joined(args: &[&str]) -> String {
    args.join(" ")
}
