use std::collections::BTreeSet;

use expense_form::{
    core::ExpenseFormController,
    domain::FormVariant,
    errors::ValidationError,
    ledger::{CategorySelection, PickerEffect, SelectionOutcome},
    storage::MemoryPreferences,
};

fn controller(variant: FormVariant) -> ExpenseFormController {
    let mut controller = ExpenseFormController::new(variant, Box::new(MemoryPreferences::new()));
    controller.activate();
    controller
}

fn attempt(amount: &str, description: &str, category: &str) -> (ExpenseFormController, Result<(), ValidationError>) {
    let mut controller = controller(FormVariant::ManagedCategories);
    controller.set_amount(amount);
    controller.set_description(description);
    if !category.is_empty() {
        controller.choose_category(category);
    }
    let result = controller.submit().map(|_| ());
    (controller, result)
}

#[test]
fn empty_amount_is_not_submitted() {
    let (controller, result) = attempt("", "Lunch", "Food");
    assert_eq!(result, Err(ValidationError::EmptyAmount));
    assert!(controller.ledger().is_empty());
}

#[test]
fn non_numeric_amount_is_not_submitted() {
    let (controller, result) = attempt("abc", "Lunch", "Food");
    assert_eq!(result, Err(ValidationError::InvalidAmount));
    assert!(!controller.form().amount_is_valid());
    assert!(controller.ledger().is_empty());
}

#[test]
fn empty_description_is_not_submitted() {
    let (controller, result) = attempt("12", "", "Food");
    assert_eq!(result, Err(ValidationError::EmptyDescription));
    assert!(controller.ledger().is_empty());
}

#[test]
fn missing_or_sentinel_category_is_not_submitted() {
    let (controller, result) = attempt("12", "Lunch", "");
    assert_eq!(result, Err(ValidationError::MissingCategory));
    assert!(controller.ledger().is_empty());

    let (controller, result) = attempt("12", "Lunch", "Manage Categories");
    assert_eq!(result, Err(ValidationError::MissingCategory));
    assert!(controller.ledger().is_empty());
}

#[test]
fn sentinel_then_cancel_leaves_selection_empty() {
    let mut controller = controller(FormVariant::InlineCategory);
    controller.set_amount("8");
    controller.set_description("Taxi");
    controller.choose_category("Transport");

    controller.choose_category("Add New Category");
    controller.set_new_category_draft("Rides");
    controller.cancel_new_category();

    assert_eq!(controller.form().category, CategorySelection::Idle);
    assert!(!controller.form().can_submit());
    assert!(!controller.registry().contains("Add New Category"));
    assert!(!controller.registry().contains("Rides"));
}

#[test]
fn sentinel_never_becomes_a_record_category() {
    let mut controller = controller(FormVariant::ManagedCategories);
    controller.set_amount("8");
    controller.set_description("Taxi");
    assert_eq!(
        controller.choose_category("Manage Categories"),
        PickerEffect::OpenManagement
    );
    controller.close_management();
    assert!(controller.submit().is_err());

    controller.choose_category("Transport");
    let record = controller.submit().unwrap();
    assert_eq!(record.category(), "Transport");
}

#[test]
fn deleting_every_category_leaves_nothing_to_select() {
    let mut controller = controller(FormVariant::ManagedCategories);
    controller.choose_category("Food");
    controller.open_management();
    let all: BTreeSet<usize> = (0..controller.registry().len()).collect();
    assert_eq!(controller.delete_categories(&all), 5);
    controller.close_management();

    assert!(controller.registry().is_empty());
    assert_eq!(controller.registry().select("Food"), SelectionOutcome::NoMatch);
    controller.choose_category("Food");
    assert_eq!(controller.form().category, CategorySelection::Idle);
}

#[test]
fn travel_scenario_end_to_end() {
    let mut controller = controller(FormVariant::ManagedCategories);
    assert!(controller.ledger().is_empty());

    controller.open_management();
    assert!(controller.add_category("Travel"));
    controller.close_management();

    controller.set_amount("200.00");
    controller.set_description("Flight");
    controller.choose_category("Travel");
    controller.submit().unwrap();

    assert_eq!(controller.ledger().total(), 200.0);
    let view = controller.view();
    assert_eq!(view.rows.len(), 1);
    let row = &view.rows[0];
    assert_eq!(
        format!("{} / {} / {}", row.description, row.category, row.amount),
        "Flight / Travel / $200.00"
    );
    assert_eq!(view.total, "$200.00");
}

#[test]
fn inline_scenario_adds_and_selects_new_category() {
    let mut controller = controller(FormVariant::InlineCategory);
    controller.set_amount("200");
    controller.set_description("Flight");
    controller.choose_category("Add New Category");
    assert_eq!(
        controller.confirm_new_category("Travel"),
        PickerEffect::CategoryAdded
    );

    let record = controller.submit().unwrap();
    assert_eq!(record.category(), "Travel");
    assert_eq!(controller.registry().names().last().map(String::as_str), Some("Travel"));
}

#[test]
fn inline_entry_refuses_reserved_label() {
    let mut controller = controller(FormVariant::InlineCategory);
    controller.set_amount("15");
    controller.set_description("Cab");
    controller.choose_category("Add New Category");

    assert_eq!(
        controller.confirm_new_category("Add New Category"),
        PickerEffect::None
    );
    assert!(controller.form().category.is_adding());
    assert_eq!(controller.submit(), Err(ValidationError::MissingCategory));
    assert!(!controller.registry().contains("Add New Category"));

    controller.confirm_new_category("Rides");
    controller.submit().unwrap();
    assert!(controller
        .ledger()
        .records()
        .iter()
        .all(|record| record.category() != "Add New Category"));
}

#[test]
fn management_refuses_reserved_label() {
    let mut controller = controller(FormVariant::ManagedCategories);
    controller.open_management();
    assert!(!controller.add_category("Manage Categories"));
    assert!(controller.rename_category(1, "Manage Categories").is_err());
    controller.close_management();

    let options = controller.registry().options();
    assert_eq!(
        options.iter().filter(|name| **name == "Manage Categories").count(),
        1
    );

    controller.set_amount("4");
    controller.set_description("Coffee");
    controller.choose_category("Manage Categories");
    controller.close_management();
    assert_eq!(controller.submit(), Err(ValidationError::MissingCategory));
    assert!(controller
        .ledger()
        .records()
        .iter()
        .all(|record| record.category() != "Manage Categories"));
}
