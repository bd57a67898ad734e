use std::{
    path::{Path, PathBuf},
    sync::Mutex,
};

use expense_form::{
    core::ExpenseFormController, domain::FormVariant, storage::JsonPreferences,
};
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates an isolated directory that outlives the calling test.
pub fn temp_base() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    base
}

/// Opens (and activates) a controller whose expenses live in `base`.
pub fn open_controller(base: &Path, variant: FormVariant) -> ExpenseFormController {
    let store = JsonPreferences::new(Some(base.to_path_buf()), "preferences.json")
        .expect("create preferences store");
    let mut controller = ExpenseFormController::new(variant, Box::new(store));
    controller.activate();
    controller
}

pub fn fill(controller: &mut ExpenseFormController, amount: &str, description: &str, category: &str) {
    controller.set_amount(amount);
    controller.set_description(description);
    controller.choose_category(category);
}
