use std::collections::BTreeSet;

use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::registry::CommandEntry;

use super::joined;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "categories",
            "List the category picker entries",
            "categories",
            cmd_categories,
        ),
        CommandEntry::new("manage", "Open category management", "manage", cmd_manage),
        CommandEntry::new(
            "add-category",
            "Append a category (management screen)",
            "add-category <name>",
            cmd_add,
        ),
        CommandEntry::new(
            "rename-category",
            "Rename the category at a position (management screen)",
            "rename-category <index> <name>",
            cmd_rename,
        ),
        CommandEntry::new(
            "delete-category",
            "Delete categories at the given positions (management screen)",
            "delete-category <index>...",
            cmd_delete,
        ),
        CommandEntry::new("done", "Return from category management", "done", cmd_done),
    ]
}

fn cmd_categories(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let registry = context.controller().registry();
    io::print_section("Categories");
    for (index, name) in registry.names().iter().enumerate() {
        io::print_info(format!("{:>3}. {}", index, name));
    }
    io::print_info(format!("  +  {}", registry.sentinel()));
    Ok(())
}

fn cmd_manage(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let controller = context.controller_mut();
    if controller.variant().uses_inline_entry() {
        return Err(CommandError::InvalidArguments(format!(
            "this form adds categories inline; use `category {}`",
            controller.registry().sentinel()
        )));
    }
    controller.open_management();
    io::print_info("Managing categories. Use `done` to return to the form.");
    Ok(())
}

fn require_management(context: &ShellContext) -> CommandResult {
    if context.controller().is_managing() {
        Ok(())
    } else {
        Err(CommandError::InvalidArguments(
            "category management is not open; use `manage` first".into(),
        ))
    }
}

fn cmd_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    require_management(context)?;
    let name = joined(args);
    if context.controller_mut().add_category(&name) {
        io::print_success(format!("Category `{}` added.", name));
    } else if name.is_empty() {
        io::print_warning("Category name cannot be empty.");
    } else {
        io::print_warning(format!("`{}` is reserved for the category picker.", name));
    }
    Ok(())
}

fn cmd_rename(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    require_management(context)?;
    let Some((index, rest)) = args.split_first() else {
        return Err(CommandError::InvalidArguments(
            "usage: rename-category <index> <name>".into(),
        ));
    };
    let index = parse_index(index)?;
    let name = joined(rest);
    context.controller_mut().rename_category(index, &name)?;
    io::print_success(format!("Category {} renamed to `{}`.", index, name));
    Ok(())
}

fn cmd_delete(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    require_management(context)?;
    if args.is_empty() {
        return Err(CommandError::InvalidArguments(
            "usage: delete-category <index>...".into(),
        ));
    }
    let indices = args
        .iter()
        .map(|raw| parse_index(raw))
        .collect::<Result<BTreeSet<_>, _>>()?;
    let prompt = format!("Delete {} categor{}?", indices.len(), plural(indices.len()));
    if !context.confirm(&prompt)? {
        io::print_info("Nothing deleted.");
        return Ok(());
    }
    let removed = context.controller_mut().delete_categories(&indices);
    io::print_success(format!("Deleted {} categor{}.", removed, plural(removed)));
    Ok(())
}

fn cmd_done(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.controller_mut().close_management();
    Ok(())
}

fn parse_index(raw: &str) -> Result<usize, CommandError> {
    raw.parse()
        .map_err(|_| CommandError::InvalidArguments(format!("`{}` is not a position", raw)))
}

fn plural(count: usize) -> &'static str {
    if count == 1 {
        "y"
    } else {
        "ies"
    }
}
