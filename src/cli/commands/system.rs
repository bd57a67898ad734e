use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::registry::CommandEntry;
use crate::domain::FormVariant;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "variant",
            "Show or switch the form variant",
            "variant [managed_categories|inline_category]",
            cmd_variant,
        ),
        CommandEntry::new("help", "Show available commands", "help [command]", cmd_help),
        CommandEntry::new("exit", "Exit the shell", "exit", cmd_exit),
    ]
}

fn cmd_variant(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some(raw) = args.first() else {
        io::print_info(format!("Variant: {}", context.controller().variant()));
        return Ok(());
    };
    let variant = FormVariant::parse(raw).ok_or_else(|| {
        CommandError::InvalidArguments(format!("unknown variant `{}`", raw))
    })?;
    context.switch_variant(variant)?;
    io::print_success(format!("Switched to {}.", variant));
    Ok(())
}

fn cmd_help(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if let Some(name) = args.first() {
        let Some(entry) = context.registry().get(&name.to_lowercase()) else {
            return Err(CommandError::InvalidArguments(format!(
                "no help for `{}`",
                name
            )));
        };
        io::print_info(format!("{}: {}", entry.usage, entry.description));
        return Ok(());
    }

    io::print_section("Commands");
    for entry in context.registry().entries() {
        io::print_info(format!("{:<32} {}", entry.usage, entry.description));
    }
    Ok(())
}

fn cmd_exit(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    Err(CommandError::ExitRequested)
}
