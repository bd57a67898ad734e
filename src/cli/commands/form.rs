use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::registry::CommandEntry;
use crate::currency::format_currency;
use crate::ledger::{CategorySelection, PickerEffect};

use super::joined;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("amount", "Type into the amount field", "amount <value>", cmd_amount),
        CommandEntry::new(
            "description",
            "Type into the description field",
            "description <text>",
            cmd_description,
        ),
        CommandEntry::new(
            "category",
            "Pick a category or the manage/add entry",
            "category <name>",
            cmd_category,
        ),
        CommandEntry::new(
            "draft",
            "Type into the inline new category field",
            "draft <text>",
            cmd_draft,
        ),
        CommandEntry::new(
            "confirm",
            "Confirm the inline new category (the typed draft when no name is given)",
            "confirm [name]",
            cmd_confirm,
        ),
        CommandEntry::new("cancel", "Close the inline new category entry", "cancel", cmd_cancel),
        CommandEntry::new("submit", "Record the expense and clear the form", "submit", cmd_submit),
        CommandEntry::new("status", "Show the current form fields", "status", cmd_status),
    ]
}

fn cmd_amount(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let controller = context.controller_mut();
    controller.set_amount(joined(args));
    if !controller.form().amount_is_valid() {
        io::print_warning("Amount is not a number.");
    }
    Ok(())
}

fn cmd_description(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    context.controller_mut().set_description(joined(args));
    Ok(())
}

fn cmd_category(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.is_empty() {
        return Err(CommandError::InvalidArguments(
            "usage: category <name>".into(),
        ));
    }
    let name = joined(args);
    let controller = context.controller_mut();
    match controller.choose_category(&name) {
        PickerEffect::OpenManagement => {
            io::print_info("Managing categories. Use `done` to return to the form.");
        }
        _ if controller.form().category.is_adding() => {
            io::print_info("New category: use `confirm <name>` or `cancel`.");
        }
        _ if controller.form().category.selected() != Some(name.as_str()) => {
            return Err(CommandError::InvalidArguments(format!(
                "unknown category `{}`",
                name
            )));
        }
        _ => {}
    }
    Ok(())
}

fn cmd_draft(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let controller = context.controller_mut();
    if !controller.form().category.is_adding() {
        return Err(CommandError::InvalidArguments(
            "no new category entry is open".into(),
        ));
    }
    controller.set_new_category_draft(joined(args));
    Ok(())
}

fn cmd_confirm(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let controller = context.controller_mut();
    let Some(draft) = controller.form().category.draft() else {
        return Err(CommandError::InvalidArguments(
            "no new category entry is open".into(),
        ));
    };
    let name = if args.is_empty() {
        draft.to_string()
    } else {
        joined(args)
    };
    match controller.confirm_new_category(&name) {
        PickerEffect::CategoryAdded => io::print_success(format!("Category `{}` added.", name)),
        _ if name.is_empty() => io::print_warning("Category name cannot be empty."),
        _ => io::print_warning(format!("`{}` is reserved for the category picker.", name)),
    }
    Ok(())
}

fn cmd_cancel(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.controller_mut().cancel_new_category();
    Ok(())
}

fn cmd_submit(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let record = context.controller_mut().submit()?;
    io::print_success(format!(
        "Recorded {} / {} / {}",
        record.description(),
        record.category(),
        format_currency(record.amount())
    ));
    Ok(())
}

fn cmd_status(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let controller = context.controller();
    let form = controller.form();
    let category = match &form.category {
        CategorySelection::Idle => "(none)".to_string(),
        CategorySelection::Selected(name) => name.clone(),
        CategorySelection::AddingNew { draft } => format!("(adding `{}`)", draft),
    };
    let amount_flag = if form.amount_is_valid() { "" } else { " [invalid]" };
    io::print_section("Form");
    io::print_info(format!("Amount:      {}{}", form.amount, amount_flag));
    io::print_info(format!("Description: {}", form.description));
    io::print_info(format!("Category:    {}", category));
    io::print_info(format!(
        "Submit:      {}",
        if form.can_submit() { "enabled" } else { "disabled" }
    ));
    Ok(())
}
