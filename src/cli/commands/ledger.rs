use crate::cli::core::{CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::registry::CommandEntry;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("list", "Show recorded expenses and the total", "list", cmd_list),
        CommandEntry::new("total", "Show the running total", "total", cmd_total),
    ]
}

fn cmd_list(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let view = context.controller().view();
    io::print_section("Expenses");
    if view.rows.is_empty() {
        io::print_info("No expenses recorded.");
    }
    for row in &view.rows {
        io::print_info(format!("{} / {} / {}", row.description, row.category, row.amount));
    }
    io::print_info(format!("Total: {}", view.total));
    Ok(())
}

fn cmd_total(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    io::print_info(format!("Total: {}", context.controller().view().total));
    Ok(())
}
