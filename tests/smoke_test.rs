use expense_form::{
    core::ExpenseFormController, domain::FormVariant, init, storage::MemoryPreferences,
};

#[test]
fn controller_smoke() {
    init();

    let mut controller =
        ExpenseFormController::new(FormVariant::default(), Box::new(MemoryPreferences::new()));
    controller.activate();
    assert_eq!(controller.registry().len(), 5);
    assert_eq!(controller.view().total, "$0.00");
}
